use dioxus::prelude::*;

use ::common::{
    project::{FilterChoice, ProjectFilter},
    scroll::SectionId,
};

use crate::{
    common::use_site,
    components::section::{PageSection, SectionHeader},
};

pub mod card;
pub mod grid;

mod detail;
pub use detail::ProjectDetail;

use grid::ProjectGrid;

#[derive(Clone, PartialEq, Props)]
struct FilterButtonProps {
    filter: Signal<ProjectFilter>,
    choice: FilterChoice,
}

#[component]
fn FilterButton(props: FilterButtonProps) -> Element {
    let mut filter = props.filter;
    let choice = props.choice;

    let active = filter.read().active() == &choice;
    let label = choice.label().to_string();

    rsx! {
        button {
            class: if active { "filter-button active" } else { "filter-button" },
            onclick: move |_| filter.write().set_filter(choice.clone()),
            "{label}"
        }
    }
}

#[component]
pub fn Portfolio() -> Element {
    let filter = use_signal(ProjectFilter::default);

    rsx! {
        PageSection { id: SectionId::Portfolio, class: "alt",
            SectionHeader {
                badge: "My Work",
                title: "Featured",
                highlight: "Projects",
                lead: "A selection of recent work, from public web apps to internal business systems.",
            }
            div { class: "filter-bar",
                for choice in FilterChoice::choices() {
                    FilterButton { key: "{choice.key()}", filter, choice: choice.clone() }
                }
            }
            ProjectGrid { filter }
        }

        // outside the section: the reveal transform would otherwise pin the overlay to it
        ProjectDetail { filter }
    }
}

#[component]
fn EmptyPortfolio() -> Element {
    let site = use_site();

    rsx! {
        div { class: "empty-state",
            p { "Nothing in this category yet." }
            p { "{site.content.projects.len()} projects in total, pick another filter to see them." }
        }
    }
}
