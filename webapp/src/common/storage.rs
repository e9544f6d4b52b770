use gloo_console::error as console_error;
use gloo_storage::{LocalStorage, Storage};
use tracing::debug;

use serde::{Deserialize, Serialize};

use ::common::theme::ThemeMode;

const THEME_KEY: &str = "theme";

// write failures (private browsing, quota) are reported and otherwise ignored, the
// value still applies for the current session
pub fn set_local_storage<T>(key: &str, value: T) -> ()
where
    T: Serialize,
{
    let key = format!("portfolio_{}", key);

    LocalStorage::set(key.clone(), value)
        .unwrap_or_else(|err| console_error!(format!("Failed to set local storage {key}: {err}")))
}

// a missing key is the normal first-visit case, so reads only log at debug
pub fn get_local_storage<T>(key: &str) -> anyhow::Result<T>
where
    T: for<'a> Deserialize<'a>,
{
    let key = format!("portfolio_{}", key);

    LocalStorage::get(key.clone()).map_err(|err| {
        debug!("no usable local storage value for {key}: {err}");
        anyhow::Error::msg("Local storage failure")
    })
}

// a value that survives reloads
pub trait Preference
where
    Self: Serialize,
    Self: for<'a> Deserialize<'a>,
{
    fn store(&self) -> ();

    fn fetch() -> Self;
}

impl Preference for ThemeMode {
    fn store(&self) -> () {
        set_local_storage(THEME_KEY, self)
    }

    fn fetch() -> Self {
        ThemeMode::resolve(get_local_storage(THEME_KEY))
    }
}
