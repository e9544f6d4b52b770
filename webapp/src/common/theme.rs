use dioxus::prelude::*;
use tracing::info;

use ::common::theme::ThemeMode;

use crate::common::storage::Preference;

// theme context
//
// one per page session, created by App and read by anything that styles itself by mode.
// toggle() is the only writer
#[derive(Clone, Copy, PartialEq)]
pub struct ThemeContext {
    mode: Signal<ThemeMode>,
}

impl ThemeContext {
    pub fn mode(&self) -> ThemeMode {
        (self.mode)()
    }

    pub fn toggle(&mut self) {
        let next = self.mode.peek().toggled();

        self.mode.set(next);
        next.store();

        info!(mode = ?next, "theme toggled");
    }
}

pub fn use_theme_provider() -> ThemeContext {
    let mode = use_signal(ThemeMode::fetch);

    use_context_provider(|| ThemeContext { mode })
}

pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>()
}
