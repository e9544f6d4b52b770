use dioxus::prelude::*;

use ::common::scroll::SectionId;

use crate::{
    common::use_site,
    components::{
        section::{PageSection, SectionHeader},
        social::SocialLinks,
    },
};

mod form;
use form::ContactFormPanel;

#[derive(Clone, PartialEq, Props)]
struct InfoCardProps {
    icon: String,
    title: String,
    value: String,
    note: String,
    #[props(default)]
    href: String,
}

#[component]
fn InfoCard(props: InfoCardProps) -> Element {
    rsx! {
        div { class: "contact-info glass",
            div { class: "contact-icon", i { class: "{props.icon}" } }
            div {
                h4 { class: "contact-info-title", "{props.title}" }
                if props.href.is_empty() {
                    p { "{props.value}" }
                } else {
                    a { href: "{props.href}", "{props.value}" }
                }
                p { class: "contact-info-note", "{props.note}" }
            }
        }
    }
}

#[component]
pub fn Contact() -> Element {
    let site = use_site();
    let owner = &site.config.owner;

    rsx! {
        PageSection { id: SectionId::Contact, class: "contact",
            SectionHeader {
                badge: "Get In Touch",
                title: "Let's Work",
                highlight: "Together",
                lead: "Have a project in mind? Send a message and I'll get back to you.",
            }
            div { class: "contact-grid",
                div {
                    InfoCard {
                        icon: "fas fa-envelope",
                        title: "Email",
                        value: owner.email.clone(),
                        note: owner.response_time.clone(),
                        href: format!("mailto:{}", owner.email),
                    }
                    InfoCard {
                        icon: "fas fa-phone",
                        title: "Phone",
                        value: owner.phone.clone(),
                        note: owner.phone_hours.clone(),
                        href: format!("tel:{}", owner.phone),
                    }
                    InfoCard {
                        icon: "fas fa-map-marker-alt",
                        title: "Location",
                        value: owner.location.clone(),
                        note: owner.availability.clone(),
                    }
                    SocialLinks { links: owner.social.clone() }
                }
                ContactFormPanel {}
            }
        }
    }
}
