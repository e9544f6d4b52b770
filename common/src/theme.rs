use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn toggled(self) -> ThemeMode {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    // the stored preference wins when it parses, anything else falls back to light
    pub fn resolve<E>(stored: Result<ThemeMode, E>) -> ThemeMode {
        stored.unwrap_or_default()
    }

    pub fn css_class(self) -> &'static str {
        match self {
            ThemeMode::Light => "theme-light",
            ThemeMode::Dark => "theme-dark",
        }
    }

    // the toggle shows where it will take you, not where you are
    pub fn toggle_icon(self) -> &'static str {
        match self {
            ThemeMode::Light => "fas fa-moon",
            ThemeMode::Dark => "fas fa-sun",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn double_toggle_is_identity() {
        for mode in [ThemeMode::Light, ThemeMode::Dark] {
            assert_eq!(mode.toggled().toggled(), mode);
            assert_ne!(mode.toggled(), mode);
        }
    }

    #[test]
    fn resolve_prefers_stored_value() {
        assert_eq!(ThemeMode::resolve::<()>(Ok(ThemeMode::Dark)), ThemeMode::Dark);
        assert_eq!(ThemeMode::resolve(Err("missing")), ThemeMode::Light);
    }

    #[test]
    fn persisted_form_is_lowercase() {
        let parsed: ThemeMode = serde_json::from_str("\"dark\"").unwrap();
        assert_eq!(parsed, ThemeMode::Dark);

        assert!(serde_json::from_str::<ThemeMode>("\"purple\"").is_err());
    }
}
