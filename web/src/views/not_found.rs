use dioxus::prelude::*;

use crate::Route;

#[component]
pub fn PageNotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    tracing::debug!("No route for /{}", path);

    rsx! {
        div {
            class: "placeholder",
            h1 { "Page not found" }
            p { "Nothing lives at /{path}." }
            Link { to: Route::Home {}, "Back to home" }
        }
    }
}
