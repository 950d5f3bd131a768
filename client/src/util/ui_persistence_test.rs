#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn preferences_default_medium_with_notifications_on() {
    let prefs = Preferences::default();
    assert_eq!(prefs.font_size, FontSize::Medium);
    assert!(prefs.notifications_enabled);
}

#[test]
fn preferences_tolerate_partial_json() {
    let prefs: Preferences = serde_json::from_str(r#"{"font_size":"large"}"#).unwrap();
    assert_eq!(prefs.font_size, FontSize::Large);
    assert!(prefs.notifications_enabled);
}

#[test]
fn font_size_parse_round_trips_and_defaults() {
    for size in FontSize::ALL {
        assert_eq!(FontSize::parse(size.as_str()), size);
    }
    assert_eq!(FontSize::parse("huge"), FontSize::Medium);
}

#[test]
fn load_preferences_defaults_without_browser() {
    assert_eq!(load_preferences(), Preferences::default());
    save_preferences(&Preferences::default());
    apply_font_size(FontSize::Large);
}
