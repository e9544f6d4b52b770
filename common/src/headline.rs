use std::time::Duration;

use crate::config::HeadlineConfig;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    Typing,
    Holding,
    Deleting,
}

// typewriter over the hero headlines
//
// types the current string one character at a time, holds it, deletes it, then moves on
// to the next one and wraps around.  the caller drives it with a timer, each tick says
// how long to wait before the next
#[derive(Clone, Debug, PartialEq)]
pub struct HeadlineRotator {
    lines: Vec<String>,
    timing: HeadlineConfig,
    index: usize,
    shown: usize,
    phase: Phase,
}

impl HeadlineRotator {
    pub fn new(lines: Vec<String>, timing: HeadlineConfig) -> Self {
        HeadlineRotator {
            lines,
            timing,
            index: 0,
            shown: 0,
            phase: Phase::Typing,
        }
    }

    pub fn text(&self) -> String {
        match self.lines.get(self.index) {
            Some(line) => line.chars().take(self.shown).collect(),
            None => String::new(),
        }
    }

    fn current_len(&self) -> usize {
        self.lines
            .get(self.index)
            .map(|line| line.chars().count())
            .unwrap_or(0)
    }

    pub fn tick(&mut self) -> Duration {
        if self.lines.is_empty() {
            return Duration::from_millis(self.timing.hold_ms.into());
        }

        let ms = match self.phase {
            Phase::Typing => {
                self.shown = (self.shown + 1).min(self.current_len());
                if self.shown == self.current_len() {
                    self.phase = Phase::Holding;
                    self.timing.hold_ms
                } else {
                    self.timing.type_ms
                }
            }
            Phase::Holding => {
                self.phase = Phase::Deleting;
                self.timing.delete_ms
            }
            Phase::Deleting => {
                self.shown = self.shown.saturating_sub(1);
                if self.shown == 0 {
                    self.index = (self.index + 1) % self.lines.len();
                    self.phase = Phase::Typing;
                    self.timing.type_ms
                } else {
                    self.timing.delete_ms
                }
            }
        };

        Duration::from_millis(ms.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rotator(lines: &[&str]) -> HeadlineRotator {
        HeadlineRotator::new(
            lines.iter().map(|s| s.to_string()).collect(),
            HeadlineConfig {
                type_ms: 10,
                delete_ms: 5,
                hold_ms: 100,
            },
        )
    }

    #[test]
    fn types_holds_deletes_and_wraps() {
        let mut r = rotator(&["ab", "c"]);
        assert_eq!(r.text(), "");

        assert_eq!(r.tick(), Duration::from_millis(10));
        assert_eq!(r.text(), "a");

        // completing the line schedules the hold
        assert_eq!(r.tick(), Duration::from_millis(100));
        assert_eq!(r.text(), "ab");

        r.tick();
        assert_eq!(r.text(), "ab");

        r.tick();
        assert_eq!(r.text(), "a");

        // emptying the line moves on to the next
        assert_eq!(r.tick(), Duration::from_millis(10));
        assert_eq!(r.text(), "");

        r.tick();
        assert_eq!(r.text(), "c");

        r.tick();
        r.tick();
        r.tick();
        assert_eq!(r.text(), "a");
    }

    #[test]
    fn multibyte_characters_are_whole() {
        let mut r = rotator(&["héllo"]);

        r.tick();
        r.tick();
        assert_eq!(r.text(), "hé");
    }

    #[test]
    fn no_lines_is_inert() {
        let mut r = rotator(&[]);

        assert_eq!(r.tick(), Duration::from_millis(100));
        assert_eq!(r.text(), "");
    }
}
