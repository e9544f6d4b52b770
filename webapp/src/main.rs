#![allow(non_snake_case)]
use dioxus::prelude::*;
use dioxus_router::prelude::*;

use tracing::Level;

mod common;
use crate::common::{Site, theme::use_theme_provider};

mod components;
use components::navigation::NavBar;

mod about;
mod contact;
mod experience;
mod hero;
mod portfolio;
mod services;

mod home;
use home::Home;

mod not_found;
use not_found::PageNotFound;

fn main() {
    dioxus_logger::init(Level::DEBUG).expect("failed to init logger");

    // both documents are compiled into the bundle, so a parse failure here is a packaging
    // bug rather than anything a visitor could cause
    let site = Site::bundled().expect("failed to load bundled site data");

    dioxus::LaunchBuilder::new().with_context(site).launch(App);
}

// the whole site is one scrolling page; sections are anchors inside Home, not routes
#[derive(Clone, PartialEq, Routable)]
#[rustfmt::skip]
enum Route {
    #[layout(NavBar)]
        #[route("/")]
        Home {},
    #[end_layout]
    #[route("/:..segments")]
    PageNotFound { segments: Vec<String> },
}

#[component]
pub fn App() -> Element {
    let theme = use_theme_provider();

    rsx! {
        style { "{crate::common::style::SITE_STYLES}" }
        div { class: "app {theme.mode().css_class()}",
            Router::<Route> {}
        }
    }
}
