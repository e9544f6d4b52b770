use dioxus::prelude::*;

use ::common::{content::Service, scroll::SectionId};

use crate::{
    common::{scroll::use_scroll, use_site},
    components::section::{PageSection, SectionHeader},
};

#[derive(Clone, PartialEq, Props)]
struct ServiceCardProps {
    service: Service,
}

#[component]
fn ServiceCard(props: ServiceCardProps) -> Element {
    let service = props.service;

    rsx! {
        div { class: "card",
            div { class: "service-icon", i { class: "{service.icon}" } }
            h3 { class: "service-title", "{service.title}" }
            p { class: "service-description", "{service.description}" }
        }
    }
}

#[component]
pub fn Services() -> Element {
    let site = use_site();
    let scroll = use_scroll();

    rsx! {
        PageSection { id: SectionId::Service, class: "alt",
            SectionHeader {
                badge: "What I Do",
                title: "My",
                highlight: "Services",
                lead: "I provide comprehensive digital solutions with expertise across multiple technologies and platforms, ensuring your project exceeds expectations.",
            }
            div { class: "services-grid",
                for (i, service) in site.content.services.iter().enumerate() {
                    ServiceCard { key: "{i}", service: service.clone() }
                }
            }
            div { class: "call-to-action",
                h3 { "Ready to start your project?" }
                p { "Let's discuss how I can help bring your ideas to life." }
                div { class: "actions",
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| scroll.jump_to(SectionId::Contact),
                        "Get Started"
                    }
                }
            }
        }
    }
}
