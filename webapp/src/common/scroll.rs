use std::{cell::Cell, rc::Rc};

use dioxus::prelude::*;
use futures::{StreamExt, channel::mpsc};
use tracing::{debug, warn};
use wasm_bindgen::{JsCast, closure::Closure};
use web_sys::{HtmlElement, ScrollBehavior, ScrollToOptions};

use ::common::{
    config::ScrollConfig,
    scroll::{ScrollFrame, ScrollTracker, SectionId, SectionSpan},
};

const EVENTS: [&str; 2] = ["scroll", "resize"];

// scroll context
//
// shared by the nav bar, the footer and every section.  the tracker is only written by
// the frame loop below and by jumps
#[derive(Clone, Copy, PartialEq)]
pub struct ScrollContext {
    pub tracker: Signal<ScrollTracker>,
    pub menu_open: Signal<bool>,
}

impl ScrollContext {
    // used by the nav bar, the footer links and every in-page call to action
    pub fn jump_to(mut self, id: SectionId) {
        let spans = measure_sections();
        let target = self.tracker.peek().scroll_target(id, &spans);

        match target {
            Some(top) => {
                smooth_scroll(top);
                self.tracker.write().jump_to(id);
            }
            None => warn!(section = %id, "no element found for section"),
        }

        self.menu_open.set(false);
    }

    pub fn to_top(self) {
        smooth_scroll(0.0);
    }

    pub fn toggle_menu(mut self) {
        let open = *self.menu_open.peek();
        self.menu_open.set(!open);
    }
}

pub fn use_scroll() -> ScrollContext {
    use_context::<ScrollContext>()
}

// install the window listeners and provide the scroll context to everything below
//
// scroll and resize events only request an animation frame; the frame does the DOM
// measuring and hands a ScrollFrame to a task that folds it into the tracker.  the
// listeners come off when the calling component unmounts
pub fn use_scroll_tracking(settings: ScrollConfig) -> ScrollContext {
    let mut tracker = use_signal(|| ScrollTracker::new(settings));
    let menu_open = use_signal(|| false);

    use_hook(move || {
        let (tx, mut rx) = mpsc::unbounded::<ScrollFrame>();

        spawn(async move {
            while let Some(frame) = rx.next().await {
                let mut next = ScrollTracker::clone(&tracker.peek());

                let revealed = next.observe(&frame);
                if !revealed.is_empty() {
                    debug!(?revealed, "sections revealed");
                }

                // most frames change nothing, don't wake subscribers for those
                if next != *tracker.peek() {
                    tracker.set(next);
                }
            }
        });

        Rc::new(ScrollListeners::attach(tx))
    });

    use_context_provider(|| ScrollContext { tracker, menu_open })
}

struct ScrollListeners {
    on_event: Closure<dyn FnMut()>,
    _on_frame: Rc<Closure<dyn FnMut()>>,
}

impl ScrollListeners {
    fn attach(tx: mpsc::UnboundedSender<ScrollFrame>) -> Option<Self> {
        let window = web_sys::window()?;
        let pending = Rc::new(Cell::new(false));

        let on_frame = {
            let pending = pending.clone();

            Rc::new(Closure::<dyn FnMut()>::new(move || {
                pending.set(false);

                if let Some(frame) = measure_frame() {
                    // the receiver lives as long as the component, nothing to do if it's gone
                    let _ = tx.unbounded_send(frame);
                }
            }))
        };

        // at most one frame request outstanding, however many events arrive
        let on_event = {
            let on_frame = on_frame.clone();

            Closure::<dyn FnMut()>::new(move || {
                if pending.replace(true) {
                    return;
                }

                if !request_frame(&on_frame) {
                    pending.set(false);
                }
            })
        };

        for event in EVENTS {
            if let Err(err) =
                window.add_event_listener_with_callback(event, on_event.as_ref().unchecked_ref())
            {
                warn!("failed to listen for {event}: {err:?}");
            }
        }

        // measure once up front, a reload can land mid-page
        request_frame(&on_frame);

        Some(ScrollListeners {
            on_event,
            _on_frame: on_frame,
        })
    }
}

impl Drop for ScrollListeners {
    fn drop(&mut self) {
        let Some(window) = web_sys::window() else {
            return;
        };

        for event in EVENTS {
            let _ = window
                .remove_event_listener_with_callback(event, self.on_event.as_ref().unchecked_ref());
        }
    }
}

fn request_frame(callback: &Closure<dyn FnMut()>) -> bool {
    match web_sys::window() {
        Some(window) => window
            .request_animation_frame(callback.as_ref().unchecked_ref())
            .is_ok(),
        None => false,
    }
}

fn measure_frame() -> Option<ScrollFrame> {
    let window = web_sys::window()?;

    Some(ScrollFrame {
        offset: window.scroll_y().ok()?,
        viewport_height: window.inner_height().ok()?.as_f64()?,
        spans: measure_sections(),
    })
}

// sections missing from the DOM are skipped, the tracker treats them as not on the page
pub fn measure_sections() -> Vec<SectionSpan> {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return Vec::new();
    };

    SectionId::ALL
        .into_iter()
        .filter_map(|id| {
            let element = document
                .get_element_by_id(id.as_str())?
                .dyn_into::<HtmlElement>()
                .ok()?;

            Some(SectionSpan {
                id,
                top: element.offset_top().into(),
                height: element.offset_height().into(),
            })
        })
        .collect()
}

// fire and forget, the browser animates
fn smooth_scroll(top: f64) {
    let Some(window) = web_sys::window() else {
        return;
    };

    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);

    window.scroll_to_with_scroll_to_options(&options);
}
