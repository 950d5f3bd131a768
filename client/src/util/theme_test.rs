#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn stored_choice_overrides_system() {
    assert!(resolve(Some(true), false));
    assert!(!resolve(Some(false), true));
}

#[test]
fn system_setting_used_without_stored_choice() {
    assert!(resolve(None, true));
    assert!(!resolve(None, false));
}

#[test]
fn initial_is_light_without_browser() {
    assert!(!initial(&Preferences::default()));
    assert!(initial(&Preferences { dark_mode: Some(true), ..Preferences::default() }));
}

#[test]
fn toggle_flips_and_records_choice() {
    let mut prefs = Preferences::default();
    assert!(toggle(false, &mut prefs));
    assert_eq!(prefs.dark_mode, Some(true));
    assert!(!toggle(true, &mut prefs));
    assert_eq!(prefs.dark_mode, Some(false));
}
