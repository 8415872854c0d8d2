//! Registration destination of the landing page.

use dioxus::prelude::*;
use ui::BRAND;

use crate::Route;

/// Register page component.
#[component]
pub fn Register() -> Element {
    rsx! {
        div {
            class: "placeholder",
            h1 { "Create Account" }
            p { "Registration for {BRAND} is not available here yet." }
            Link { to: Route::Home {}, "Back to home" }
        }
    }
}
