use dioxus::prelude::*;

use ::common::{content::Project, project::ProjectFilter};

#[derive(Clone, PartialEq, Props)]
pub struct ProjectCardProps {
    project: Project,
    filter: Signal<ProjectFilter>,
}

#[component]
pub fn ProjectCard(props: ProjectCardProps) -> Element {
    let mut filter = props.filter;
    let project = props.project;
    let id = project.id;

    let summary = project.description.clone().unwrap_or_default();

    rsx! {
        div {
            class: "project-card card",
            onclick: move |_| filter.write().select(Some(id)),
            img {
                class: "project-image",
                src: "{project.image}",
                alt: "{project.title}",
            }
            div { class: "project-body",
                div { class: "project-meta",
                    span { class: "tag", "{project.category.label()}" }
                    if let Some(status) = project.status {
                        span { class: "status-badge {status.css_class()}", "{status}" }
                    }
                }
                h3 { class: "project-title", "{project.title}" }
                if !summary.is_empty() {
                    p { class: "project-description", "{summary}" }
                }
                div { class: "tag-list",
                    for tech in project.technologies.iter() {
                        span { key: "{tech}", class: "tag", "{tech}" }
                    }
                }
                a {
                    class: "btn btn-ghost",
                    href: "{project.live_url}",
                    target: "_blank",
                    rel: "noopener noreferrer",
                    // following the link should not also open the overlay
                    onclick: move |evt| evt.stop_propagation(),
                    "Live Demo"
                }
            }
        }
    }
}
