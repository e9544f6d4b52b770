use dioxus::prelude::*;
use gloo_timers::future::sleep;
use tracing::warn;

use ::common::{config::HeadlineConfig, headline::HeadlineRotator, scroll::SectionId};

use crate::common::{scroll::use_scroll, use_site};

const PARTICLE_COUNT: usize = 50;

#[derive(Clone, Copy, PartialEq)]
struct Particle {
    x: f32,
    y: f32,
    size: f32,
    delay: f32,
}

// four random bytes per particle: position, size, animation offset
fn scatter_particles(count: usize) -> Vec<Particle> {
    let mut seed = vec![0u8; count * 4];

    if let Err(err) = getrandom::getrandom(&mut seed) {
        warn!("no randomness available, using a fixed particle layout: {err}");
        for (i, byte) in seed.iter_mut().enumerate() {
            *byte = (i.wrapping_mul(97) % 251) as u8;
        }
    }

    seed.chunks_exact(4)
        .map(|c| Particle {
            x: f32::from(c[0]) / 255.0 * 100.0,
            y: f32::from(c[1]) / 255.0 * 100.0,
            size: 1.0 + f32::from(c[2]) / 255.0 * 4.0,
            delay: f32::from(c[3]) / 255.0 * 2.0,
        })
        .collect()
}

#[component]
fn Particles() -> Element {
    let particles = use_hook(|| scatter_particles(PARTICLE_COUNT));

    rsx! {
        div { class: "particles",
            for (i, p) in particles.iter().enumerate() {
                div {
                    key: "{i}",
                    class: "particle",
                    style: "left: {p.x}%; top: {p.y}%; width: {p.size}px; height: {p.size}px; animation-delay: {p.delay}s;",
                }
            }
        }
    }
}

// typewriter text for the headline; the loop lives as long as the hero does
fn use_headline(lines: Vec<String>, timing: HeadlineConfig) -> Signal<String> {
    let mut text = use_signal(String::new);

    use_future(move || {
        let lines = lines.clone();

        async move {
            let mut rotator = HeadlineRotator::new(lines, timing);

            loop {
                let delay = rotator.tick();
                text.set(rotator.text());
                sleep(delay).await;
            }
        }
    });

    text
}

#[component]
pub fn Hero() -> Element {
    let site = use_site();
    let scroll = use_scroll();
    let owner = &site.config.owner;

    let headline = use_headline(site.content.headlines.clone(), site.config.headline);

    rsx! {
        section { id: SectionId::Home.as_str(), class: "hero",
            Particles {}
            div { class: "container hero-content",
                p { class: "hero-greeting", "Hello, I'm" }
                h1 { class: "hero-name", "{owner.name}" }
                div { class: "hero-headline",
                    "{headline}"
                    span { class: "cursor", "|" }
                }
                p { class: "hero-tagline", "{owner.tagline}" }
                div { class: "hero-actions",
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| scroll.jump_to(SectionId::Contact),
                        "Hire Me"
                        i { class: "fas fa-paper-plane" }
                    }
                    button {
                        class: "btn btn-ghost",
                        onclick: move |_| scroll.jump_to(SectionId::Portfolio),
                        "View My Work"
                    }
                }
            }
            button {
                class: "scroll-indicator",
                "aria-label": "Scroll to about",
                onclick: move |_| scroll.jump_to(SectionId::About),
                i { class: "fas fa-chevron-down" }
            }
        }
    }
}
