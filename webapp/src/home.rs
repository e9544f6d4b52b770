use dioxus::prelude::*;

use crate::{
    about::About, contact::Contact, experience::ExperienceTimeline, hero::Hero,
    portfolio::Portfolio, services::Services,
};

// the whole site is one scrolling page, in navigation order
#[component]
pub fn Home() -> Element {
    rsx! {
        Hero {}
        About {}
        Services {}
        ExperienceTimeline {}
        Portfolio {}
        Contact {}
    }
}
