use std::{collections::BTreeSet, fmt};

use serde::{Deserialize, Serialize};

use crate::config::ScrollConfig;

// page sections
//
// the declaration order is the top-to-bottom order on the page, and every "jump to"
// control in the site goes through one of these rather than a bare anchor string
#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum SectionId {
    Home,
    About,
    Service,
    Experience,
    Portfolio,
    Contact,
}

impl SectionId {
    pub const ALL: [SectionId; 6] = [
        SectionId::Home,
        SectionId::About,
        SectionId::Service,
        SectionId::Experience,
        SectionId::Portfolio,
        SectionId::Contact,
    ];

    // also the element id of the section's anchor
    pub fn as_str(self) -> &'static str {
        match self {
            SectionId::Home => "home",
            SectionId::About => "about",
            SectionId::Service => "service",
            SectionId::Experience => "experience",
            SectionId::Portfolio => "portfolio",
            SectionId::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SectionId::Home => "Home",
            SectionId::About => "About",
            SectionId::Service => "Services",
            SectionId::Experience => "Experience",
            SectionId::Portfolio => "Portfolio",
            SectionId::Contact => "Contact",
        }
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// measured position of one section, in document coordinates
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionSpan {
    pub id: SectionId,
    pub top: f64,
    pub height: f64,
}

impl SectionSpan {
    pub fn contains(&self, y: f64) -> bool {
        y >= self.top && y < self.top + self.height
    }

    // pixels of the section inside the viewport [offset, offset + viewport_height)
    fn visible_height(&self, offset: f64, viewport_height: f64) -> f64 {
        let start = self.top.max(offset);
        let end = (self.top + self.height).min(offset + viewport_height);

        (end - start).max(0.0)
    }
}

// one coalesced scroll/resize observation
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScrollFrame {
    pub offset: f64,
    pub viewport_height: f64,
    pub spans: Vec<SectionSpan>,
}

// first section, in page order, whose span contains the probe point
pub fn active_section(spans: &[SectionSpan], probe: f64) -> Option<SectionId> {
    SectionId::ALL.into_iter().find(|id| {
        spans
            .iter()
            .any(|span| span.id == *id && span.contains(probe))
    })
}

// scroll tracker
//
// all of the state derived from the page offset: whether the nav bar is sticky, which
// section the nav highlights, and which sections have already played their entrance
// animation.  the seen set only ever grows.  only derived flags are kept, not the raw
// offset, so two frames compare equal unless something visible changed
#[derive(Clone, Debug, PartialEq)]
pub struct ScrollTracker {
    settings: ScrollConfig,
    is_sticky: bool,
    back_to_top: bool,
    active: SectionId,
    seen: BTreeSet<SectionId>,
}

impl ScrollTracker {
    pub fn new(settings: ScrollConfig) -> Self {
        ScrollTracker {
            settings,
            is_sticky: false,
            back_to_top: false,
            active: SectionId::Home,
            seen: BTreeSet::new(),
        }
    }

    pub fn is_sticky(&self) -> bool {
        self.is_sticky
    }

    pub fn active(&self) -> SectionId {
        self.active
    }

    pub fn has_seen(&self, id: SectionId) -> bool {
        self.seen.contains(&id)
    }

    pub fn show_back_to_top(&self) -> bool {
        self.back_to_top
    }

    // fold a new frame into the state, returning the sections seen for the first time
    pub fn observe(&mut self, frame: &ScrollFrame) -> Vec<SectionId> {
        self.is_sticky = frame.offset > self.settings.sticky_threshold;
        self.back_to_top = frame.offset > self.settings.back_to_top_threshold;

        // no match (e.g. probe past the last section) keeps the previous highlight
        if let Some(id) = active_section(&frame.spans, frame.offset + self.settings.lookahead) {
            self.active = id;
        }

        let mut revealed = Vec::new();

        for span in &frame.spans {
            if self.seen.contains(&span.id) {
                continue;
            }

            let visible = span.visible_height(frame.offset, frame.viewport_height);
            let fraction = if span.height > 0.0 { visible / span.height } else { 0.0 };

            // a section taller than the viewport may never reach the threshold, so filling
            // the viewport counts too
            let fills_viewport = frame.viewport_height > 0.0 && visible >= frame.viewport_height;

            if fraction >= self.settings.reveal_threshold || fills_viewport {
                self.seen.insert(span.id);
                revealed.push(span.id);
            }
        }

        revealed
    }

    // highlight the destination straight away instead of waiting for the smooth scroll to
    // arrive and walking the highlight through every section in between
    pub fn jump_to(&mut self, id: SectionId) {
        self.active = id;
    }

    // where to scroll so the section starts just below the fixed nav bar
    pub fn scroll_target(&self, id: SectionId, spans: &[SectionSpan]) -> Option<f64> {
        spans
            .iter()
            .find(|span| span.id == id)
            .map(|span| (span.top - self.settings.nav_height).max(0.0))
    }
}

impl Default for ScrollTracker {
    fn default() -> Self {
        ScrollTracker::new(ScrollConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spans() -> Vec<SectionSpan> {
        vec![
            SectionSpan { id: SectionId::Home, top: 0.0, height: 800.0 },
            SectionSpan { id: SectionId::About, top: 800.0, height: 800.0 },
            SectionSpan { id: SectionId::Contact, top: 1600.0, height: 800.0 },
        ]
    }

    fn frame(offset: f64) -> ScrollFrame {
        ScrollFrame {
            offset,
            viewport_height: 700.0,
            spans: spans(),
        }
    }

    #[test]
    fn active_section_uses_lookahead() {
        let mut tracker = ScrollTracker::default();

        tracker.observe(&frame(750.0));
        assert_eq!(tracker.active(), SectionId::About);

        tracker.observe(&frame(0.0));
        assert_eq!(tracker.active(), SectionId::Home);

        tracker.observe(&frame(1500.0));
        assert_eq!(tracker.active(), SectionId::Contact);
    }

    #[test]
    fn active_section_is_kept_when_nothing_matches() {
        let mut tracker = ScrollTracker::default();

        tracker.observe(&frame(1500.0));
        tracker.observe(&frame(5000.0));

        assert_eq!(tracker.active(), SectionId::Contact);
    }

    #[test]
    fn page_order_wins_over_span_order() {
        // overlapping spans supplied out of order still resolve to the earlier section
        let spans = vec![
            SectionSpan { id: SectionId::Portfolio, top: 0.0, height: 1000.0 },
            SectionSpan { id: SectionId::About, top: 0.0, height: 1000.0 },
        ];

        assert_eq!(active_section(&spans, 10.0), Some(SectionId::About));
        assert_eq!(active_section(&spans, 1000.0), None);
    }

    #[test]
    fn sticky_flips_past_threshold() {
        let mut tracker = ScrollTracker::default();

        tracker.observe(&frame(100.0));
        assert!(!tracker.is_sticky());

        tracker.observe(&frame(101.0));
        assert!(tracker.is_sticky());

        tracker.observe(&frame(0.0));
        assert!(!tracker.is_sticky());
    }

    #[test]
    fn sections_are_revealed_once() {
        let mut tracker = ScrollTracker::default();

        // about is [800, 1600), a viewport of [0, 700) shows none of it
        let revealed = tracker.observe(&frame(0.0));
        assert_eq!(revealed, vec![SectionId::Home]);
        assert!(!tracker.has_seen(SectionId::About));

        // [200, 900) shows 100 of 800 = 12.5%, under the threshold
        assert!(tracker.observe(&frame(200.0)).is_empty());

        // [300, 1000) shows 200 of 800 = 25%
        assert_eq!(tracker.observe(&frame(300.0)), vec![SectionId::About]);

        // scrolling away and back never resets or re-reports
        tracker.observe(&frame(0.0));
        assert!(tracker.observe(&frame(300.0)).is_empty());
        assert!(tracker.has_seen(SectionId::About));
    }

    #[test]
    fn tall_sections_reveal_when_filling_the_viewport() {
        let mut tracker = ScrollTracker::default();
        let frame = ScrollFrame {
            offset: 1000.0,
            viewport_height: 500.0,
            spans: vec![SectionSpan { id: SectionId::Portfolio, top: 900.0, height: 5000.0 }],
        };

        assert_eq!(tracker.observe(&frame), vec![SectionId::Portfolio]);
    }

    #[test]
    fn scroll_target_clears_the_nav_bar() {
        let tracker = ScrollTracker::default();

        assert_eq!(tracker.scroll_target(SectionId::About, &spans()), Some(720.0));
        assert_eq!(tracker.scroll_target(SectionId::Home, &spans()), Some(0.0));
        assert_eq!(tracker.scroll_target(SectionId::Service, &spans()), None);
    }

    #[test]
    fn jump_sets_highlight_immediately() {
        let mut tracker = ScrollTracker::default();

        tracker.jump_to(SectionId::Contact);
        assert_eq!(tracker.active(), SectionId::Contact);
    }

    #[test]
    fn back_to_top_threshold() {
        let mut tracker = ScrollTracker::default();

        tracker.observe(&frame(300.0));
        assert!(!tracker.show_back_to_top());

        tracker.observe(&frame(301.0));
        assert!(tracker.show_back_to_top());
    }
}
