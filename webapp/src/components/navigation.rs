use dioxus::prelude::*;
use dioxus_router::prelude::*;

use ::common::scroll::SectionId;

use crate::{
    Route,
    common::{
        scroll::{use_scroll, use_scroll_tracking},
        use_site,
    },
    components::{footer::Footer, theme_toggle::ThemeToggle},
};

#[derive(Clone, PartialEq, Props)]
struct NavLinkProps {
    section: SectionId,
}

#[component]
fn NavLink(props: NavLinkProps) -> Element {
    let scroll = use_scroll();
    let section = props.section;

    // only re-render when this link's highlight actually flips
    let active = use_memo(move || scroll.tracker.read().active() == section);

    rsx! {
        button {
            class: if active() { "nav-link active" } else { "nav-link" },
            onclick: move |_| scroll.jump_to(section),
            "{section.label()}"
        }
    }
}

#[component]
fn NavBarInner() -> Element {
    let site = use_site();
    let scroll = use_scroll();
    let mut menu_open = scroll.menu_open;

    let sticky = use_memo(move || scroll.tracker.read().is_sticky());

    rsx! {
        nav { class: if sticky() { "site-nav sticky" } else { "site-nav" },
            div { class: "container nav-inner",
                button {
                    class: "nav-brand",
                    onclick: move |_| scroll.jump_to(SectionId::Home),
                    span { class: "gradient-text", "{site.config.owner.brand}" }
                }

                div { class: "nav-links",
                    for section in SectionId::ALL {
                        NavLink { key: "{section}", section }
                    }
                }

                div { class: "nav-controls",
                    ThemeToggle {}
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| scroll.jump_to(SectionId::Contact),
                        "Let's Talk"
                    }
                    button {
                        class: if menu_open() { "menu-button open" } else { "menu-button" },
                        "aria-label": "Toggle menu",
                        onclick: move |_| scroll.toggle_menu(),
                        span {}
                        span {}
                        span {}
                    }
                }
            }
        }

        if menu_open() {
            // clicking the backdrop closes the menu, clicks inside the panel don't
            div { class: "mobile-menu", onclick: move |_| menu_open.set(false),
                div {
                    class: "mobile-menu-panel",
                    onclick: move |evt| evt.stop_propagation(),
                    for section in SectionId::ALL {
                        NavLink { key: "{section}", section }
                    }
                    button {
                        class: "btn btn-primary btn-block",
                        onclick: move |_| scroll.jump_to(SectionId::Contact),
                        "Let's Talk"
                    }
                }
            }
        }
    }
}

// page layout: fixed nav bar, the routed page, footer.  owns the scroll listeners, so
// they exist exactly as long as the one-page layout is mounted
#[component]
pub fn NavBar() -> Element {
    let site = use_site();
    use_scroll_tracking(site.config.scroll);

    rsx! {
        NavBarInner {}
        main { Outlet::<Route> {} }
        Footer {}
    }
}
