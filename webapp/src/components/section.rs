use dioxus::prelude::*;

use ::common::scroll::SectionId;

use crate::common::scroll::use_scroll;

#[derive(Clone, PartialEq, Props)]
pub struct PageSectionProps {
    id: SectionId,
    #[props(default)]
    class: String,
    children: Element,
}

// a scroll anchor with a one-shot entrance animation
//
// the element id is what the scroll tracker measures.  everything below the hero goes
// through here; the hero is full-bleed and always visible on load
#[component]
pub fn PageSection(props: PageSectionProps) -> Element {
    let scroll = use_scroll();
    let id = props.id;

    let seen = use_memo(move || scroll.tracker.read().has_seen(id));

    rsx! {
        section { id: id.as_str(), class: "page-section {props.class}",
            div { class: if seen() { "container reveal revealed" } else { "container reveal" },
                {props.children}
            }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct SectionHeaderProps {
    badge: String,
    title: String,
    highlight: String,
    #[props(default)]
    lead: String,
}

#[component]
pub fn SectionHeader(props: SectionHeaderProps) -> Element {
    rsx! {
        div { class: "section-header",
            span { class: "section-badge", "{props.badge}" }
            h2 { class: "section-title",
                "{props.title} "
                span { class: "gradient-text", "{props.highlight}" }
            }
            if !props.lead.is_empty() {
                p { class: "section-lead", "{props.lead}" }
            }
        }
    }
}
