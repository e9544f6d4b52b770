use dioxus::prelude::*;

use ::common::project::ProjectFilter;

use crate::{
    common::use_site,
    components::modal::{Modal, ModalSize},
};

#[derive(Clone, PartialEq, Props)]
pub struct ProjectDetailProps {
    filter: Signal<ProjectFilter>,
}

// overlay for the selected project, rendered only while one is selected
#[component]
pub fn ProjectDetail(props: ProjectDetailProps) -> Element {
    let site = use_site();
    let mut filter = props.filter;

    let Some(project) = filter.read().selected(&site.content.projects).cloned() else {
        return rsx! {};
    };

    rsx! {
        Modal {
            title: project.title.clone(),
            size: ModalSize::Large,
            on_close: move |_| filter.write().close(),
            footer: rsx! {
                a {
                    class: "btn btn-primary",
                    href: "{project.live_url}",
                    target: "_blank",
                    rel: "noopener noreferrer",
                    "Visit Live Site"
                }
                if let Some(repo) = &project.repo_url {
                    a {
                        class: "btn btn-secondary",
                        href: "{repo}",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        "View Source"
                    }
                }
            },

            img {
                class: "project-detail-image",
                src: "{project.image}",
                alt: "{project.title}",
            }

            div { class: "project-meta",
                span { class: "tag", "{project.category.label()}" }
                if let Some(status) = project.status {
                    span { class: "status-badge {status.css_class()}", "{status}" }
                }
                if let Some(year) = &project.year {
                    span { class: "tag", "{year}" }
                }
            }

            if let Some(description) = &project.description {
                p { class: "project-description", "{description}" }
            }

            if !project.technologies.is_empty() {
                h4 { class: "detail-heading", "Technologies" }
                div { class: "tag-list",
                    for tech in project.technologies.iter() {
                        span { key: "{tech}", class: "tag", "{tech}" }
                    }
                }
            }

            if !project.features.is_empty() {
                h4 { class: "detail-heading", "Key Features" }
                ul { class: "feature-list",
                    for feature in project.features.iter() {
                        li { key: "{feature}", "{feature}" }
                    }
                }
            }
        }
    }
}
