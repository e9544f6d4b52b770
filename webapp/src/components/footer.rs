use chrono::{Datelike, Local};
use dioxus::prelude::*;

use ::common::scroll::SectionId;

use crate::{
    common::{scroll::use_scroll, use_site},
    components::social::SocialLinks,
};

const QUICK_LINKS: [SectionId; 5] = [
    SectionId::Home,
    SectionId::About,
    SectionId::Service,
    SectionId::Portfolio,
    SectionId::Contact,
];

#[component]
pub fn Footer() -> Element {
    let site = use_site();
    let scroll = use_scroll();
    let owner = &site.config.owner;

    let back_to_top = use_memo(move || scroll.tracker.read().show_back_to_top());
    let year = Local::now().year();

    rsx! {
        footer { class: "site-footer",
            div { class: "container",
                div { class: "footer-grid",
                    div {
                        h3 { class: "footer-heading gradient-text", "{owner.brand}" }
                        p { "{owner.tagline}" }
                    }
                    div {
                        h4 { class: "footer-heading", "Quick Links" }
                        ul { class: "footer-links",
                            for section in QUICK_LINKS {
                                li { key: "{section}",
                                    button { onclick: move |_| scroll.jump_to(section), "{section.label()}" }
                                }
                            }
                        }
                    }
                    div {
                        h4 { class: "footer-heading", "Connect" }
                        p { "Follow me on social media for updates" }
                        SocialLinks { links: owner.social.clone() }
                    }
                }
                div { class: "footer-bottom", "© {year} {owner.name}. All rights reserved." }
            }
        }

        if back_to_top() {
            button {
                class: "back-to-top",
                "aria-label": "Back to top",
                onclick: move |_| scroll.to_top(),
                i { class: "fas fa-arrow-up" }
            }
        }
    }
}
