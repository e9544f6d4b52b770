use dioxus::prelude::*;

use ::common::{
    content::{Experience, Side},
    scroll::SectionId,
};

use crate::{
    common::{scroll::use_scroll, use_site},
    components::section::{PageSection, SectionHeader},
};

#[derive(Clone, PartialEq, Props)]
struct TimelineItemProps {
    experience: Experience,
}

#[component]
fn TimelineItem(props: TimelineItemProps) -> Element {
    let experience = props.experience;
    let side = match experience.side {
        Side::Left => "timeline-item left",
        Side::Right => "timeline-item right",
    };

    rsx! {
        div { class: side,
            div { class: "card",
                span { class: "tag timeline-year", "{experience.year}" }
                h3 { class: "timeline-title", "{experience.title}" }
                p { class: "timeline-company", "{experience.company}" }
                p { class: "timeline-description", "{experience.description}" }
            }
        }
    }
}

#[component]
pub fn ExperienceTimeline() -> Element {
    let site = use_site();
    let scroll = use_scroll();

    rsx! {
        PageSection { id: SectionId::Experience,
            SectionHeader {
                badge: "My Resume",
                title: "Professional",
                highlight: "Journey",
                lead: "A look at the roles, teams and projects that have shaped my expertise.",
            }
            div { class: "timeline",
                for (i, experience) in site.content.experiences.iter().enumerate() {
                    TimelineItem { key: "{i}", experience: experience.clone() }
                }
            }
            div { class: "call-to-action",
                h3 { "Want to work together?" }
                p { "Let's discuss how my experience can contribute to your next project." }
                div { class: "actions",
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| scroll.jump_to(SectionId::Contact),
                        "Hire Me"
                    }
                    if let Some(resume) = &site.config.owner.resume {
                        a { class: "btn btn-secondary", href: "{resume}", download: "", "Download CV" }
                    }
                }
            }
        }
    }
}
