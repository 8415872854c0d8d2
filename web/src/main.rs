use dioxus::prelude::*;
use ui::BRAND;

use views::{Home, Login, PageNotFound, Register};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Home {},
    #[route("/login")]
    Login {},
    #[route("/register")]
    Register {},
    #[route("/:..segments")]
    PageNotFound { segments: Vec<String> },
}

fn main() -> anyhow::Result<()> {
    server::launch(App)
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Title { "{BRAND}" }
        document::Link { rel: "stylesheet", href: ui::THEME_CSS }

        Router::<Route> {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calls_to_action_resolve_to_routes() {
        let [sign_in, register] = ui::CALLS_TO_ACTION;
        assert_eq!(sign_in.href.parse::<Route>().ok(), Some(Route::Login {}));
        assert_eq!(register.href.parse::<Route>().ok(), Some(Route::Register {}));
    }

    #[test]
    fn test_routes_display_their_path() {
        assert_eq!(Route::Home {}.to_string(), "/");
        assert_eq!(Route::Login {}.to_string(), ui::SIGN_IN_HREF);
        assert_eq!(Route::Register {}.to_string(), ui::REGISTER_HREF);
    }

    #[test]
    fn test_unknown_path_is_not_found() {
        let route = "/checkout/cart".parse::<Route>().ok();
        assert_eq!(
            route,
            Some(Route::PageNotFound {
                segments: vec!["checkout".to_string(), "cart".to_string()],
            })
        );
    }
}
