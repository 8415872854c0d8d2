//! Sign-in destination of the landing page.

use dioxus::prelude::*;
use ui::BRAND;

use crate::Route;

/// Login page component.
#[component]
pub fn Login() -> Element {
    rsx! {
        div {
            class: "placeholder",
            h1 { "Sign In" }
            p { "Signing in to {BRAND} is not available here yet." }
            Link { to: Route::Home {}, "Back to home" }
        }
    }
}
