use dioxus::prelude::*;

use ::common::config::SocialLink;

#[derive(Clone, PartialEq, Props)]
pub struct SocialLinksProps {
    links: Vec<SocialLink>,
}

#[component]
pub fn SocialLinks(props: SocialLinksProps) -> Element {
    rsx! {
        div { class: "social-links",
            for link in props.links.iter() {
                a {
                    key: "{link.url}",
                    class: "social-link",
                    href: "{link.url}",
                    target: "_blank",
                    rel: "noopener noreferrer",
                    "aria-label": "{link.label}",
                    i { class: "{link.icon}" }
                }
            }
        }
    }
}
