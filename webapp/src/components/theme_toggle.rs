use dioxus::prelude::*;

use crate::common::theme::use_theme;

#[component]
pub fn ThemeToggle() -> Element {
    let mut theme = use_theme();

    rsx! {
        button {
            class: "theme-toggle",
            "aria-label": "Toggle theme",
            onclick: move |_| theme.toggle(),
            i { class: theme.mode().toggle_icon() }
        }
    }
}
