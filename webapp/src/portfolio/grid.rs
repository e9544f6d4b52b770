use dioxus::prelude::*;

use ::common::project::ProjectFilter;

use crate::common::use_site;

use super::{EmptyPortfolio, card::ProjectCard};

#[derive(Clone, PartialEq, Props)]
pub struct ProjectGridProps {
    filter: Signal<ProjectFilter>,
}

#[component]
pub fn ProjectGrid(props: ProjectGridProps) -> Element {
    let site = use_site();
    let filter = props.filter;

    let projects = site.content.projects.clone();
    let visible = use_memo(move || {
        filter
            .read()
            .visible(&projects)
            .into_iter()
            .cloned()
            .collect::<Vec<_>>()
    });

    let visible = visible();

    if visible.is_empty() {
        return rsx! {
            EmptyPortfolio {}
        };
    }

    rsx! {
        div { class: "project-grid",
            for project in visible.iter() {
                ProjectCard { key: "{project.id}", project: project.clone(), filter }
            }
        }
    }
}
