//! Browser localStorage helpers for user preferences.
//!
//! SYSTEM CONTEXT
//! ==============
//! These helpers centralize hydrate-only read/write behavior so the settings
//! page can persist preferences without repeating web-sys glue.

#[cfg(test)]
#[path = "ui_persistence_test.rs"]
mod ui_persistence_test;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Storage key for [`Preferences`].
pub const PREFERENCES_KEY: &str = "eldercare.preferences";

/// Base text size for the whole app.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl FontSize {
    pub const ALL: [FontSize; 3] = [FontSize::Small, FontSize::Medium, FontSize::Large];

    pub fn as_str(self) -> &'static str {
        match self {
            FontSize::Small => "small",
            FontSize::Medium => "medium",
            FontSize::Large => "large",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FontSize::Small => "Small",
            FontSize::Medium => "Medium",
            FontSize::Large => "Large",
        }
    }

    /// Parse a `<select>` value; unknown values keep the default.
    pub fn parse(raw: &str) -> Self {
        match raw {
            "small" => FontSize::Small,
            "large" => FontSize::Large,
            _ => FontSize::Medium,
        }
    }
}

/// Per-browser settings other than the theme.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    /// Explicit theme choice; `None` follows the system setting.
    pub dark_mode: Option<bool>,
    pub font_size: FontSize,
    pub notifications_enabled: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Self { dark_mode: None, font_size: FontSize::default(), notifications_enabled: true }
    }
}

/// Load a JSON value from `localStorage` for `key`.
pub fn load_json<T: DeserializeOwned>(key: &str) -> Option<T> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        let raw = storage.get_item(key).ok().flatten()?;
        serde_json::from_str(&raw).ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
        None
    }
}

/// Save a JSON value to `localStorage` for `key`.
pub fn save_json<T: Serialize>(key: &str, value: &T) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
            return;
        };
        let Ok(raw) = serde_json::to_string(value) else {
            return;
        };
        let _ = storage.set_item(key, &raw);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (key, value);
    }
}

/// Stored preferences, or defaults when nothing usable is stored.
pub fn load_preferences() -> Preferences {
    load_json(PREFERENCES_KEY).unwrap_or_default()
}

pub fn save_preferences(prefs: &Preferences) {
    save_json(PREFERENCES_KEY, prefs);
}

/// Apply the font size to the `<html>` element.
pub fn apply_font_size(size: FontSize) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.document_element()) {
            let _ = el.set_attribute("data-font-size", size.as_str());
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = size;
    }
}
