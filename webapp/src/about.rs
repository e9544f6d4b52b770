use dioxus::prelude::*;

use ::common::{content::Skill, scroll::SectionId};

use crate::{
    common::{scroll::use_scroll, use_site},
    components::section::{PageSection, SectionHeader},
};

#[derive(Clone, PartialEq, Props)]
struct SkillBarProps {
    skill: Skill,
    // bars sit at zero until the section has been seen, then grow via the css transition
    filled: bool,
}

#[component]
fn SkillBar(props: SkillBarProps) -> Element {
    let percentage = props.skill.display_percentage();
    let width = if props.filled { percentage } else { 0 };

    rsx! {
        div { class: "skill",
            div { class: "skill-header",
                span { "{props.skill.name}" }
                span { "{percentage}%" }
            }
            div { class: "skill-track",
                div { class: "skill-bar", style: "width: {width}%;" }
            }
        }
    }
}

#[component]
pub fn About() -> Element {
    let site = use_site();
    let scroll = use_scroll();
    let owner = &site.config.owner;
    let content = &site.content;

    let seen = use_memo(move || scroll.tracker.read().has_seen(SectionId::About));

    let projects = content.projects.len();
    let roles = content.experiences.len();
    let services = content.services.len();

    rsx! {
        PageSection { id: SectionId::About,
            SectionHeader { badge: "Learn About Me", title: "Passionate", highlight: "Developer" }
            div { class: "about-grid",
                div {
                    if let Some(photo) = &owner.photo {
                        img { class: "about-photo", src: "{photo}", alt: "{owner.name}" }
                    }
                }
                div { class: "about-text",
                    p { "I'm {owner.name}, a developer based in {owner.location}. {owner.tagline}" }
                    p {
                        "I enjoy turning complex requirements into dependable systems, from API design and "
                        "databases through to the interfaces people actually touch."
                    }

                    div { class: "stats-grid",
                        div { class: "stat",
                            div { class: "stat-value gradient-text", "{projects}+" }
                            div { class: "stat-label", "Projects Completed" }
                        }
                        div { class: "stat",
                            div { class: "stat-value gradient-text", "{roles}" }
                            div { class: "stat-label", "Roles Held" }
                        }
                        div { class: "stat",
                            div { class: "stat-value gradient-text", "{services}" }
                            div { class: "stat-label", "Services Offered" }
                        }
                    }

                    for skill in content.skills.iter() {
                        SkillBar { key: "{skill.name}", skill: skill.clone(), filled: seen() }
                    }

                    button {
                        class: "btn btn-primary",
                        onclick: move |_| scroll.jump_to(SectionId::Contact),
                        "Let's Talk"
                    }
                }
            }
        }
    }
}
