use dioxus::prelude::*;
use dioxus_router::prelude::*;
use tracing::debug;

use crate::Route;

#[component]
pub fn PageNotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    debug!("no page at /{path}");

    rsx! {
        div { class: "not-found container",
            div { class: "not-found-code gradient-text", "404" }
            h1 { "Page not found" }
            p { "There is nothing at /{path}." }
            Link { class: "btn btn-primary", to: Route::Home {}, "Back to the homepage" }
        }
    }
}
