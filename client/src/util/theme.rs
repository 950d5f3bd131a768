//! Light/dark theme resolution.
//!
//! The stored choice wins; without one the system `prefers-color-scheme`
//! decides. The result is applied as a `data-theme` attribute on `<html>`.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::util::ui_persistence::Preferences;

/// Effective dark-mode flag for a stored choice and the system setting.
pub fn resolve(stored: Option<bool>, system_dark: bool) -> bool {
    stored.unwrap_or(system_dark)
}

/// Whether the browser reports a dark color-scheme preference.
pub fn system_prefers_dark() -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
            .map_or(false, |mq| mq.matches())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Effective theme for stored preferences.
pub fn initial(prefs: &Preferences) -> bool {
    resolve(prefs.dark_mode, system_prefers_dark())
}

/// Set the `data-theme` attribute on the `<html>` element.
pub fn apply(enabled: bool) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.document_element()) {
            let _ = el.set_attribute("data-theme", if enabled { "dark" } else { "light" });
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = enabled;
    }
}

/// Flip the theme, record the explicit choice in `prefs`, and apply it.
pub fn toggle(current: bool, prefs: &mut Preferences) -> bool {
    let next = !current;
    prefs.dark_mode = Some(next);
    apply(next);
    next
}
