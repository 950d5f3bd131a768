use super::*;

#[test]
fn presets_match_the_starter_schedule() {
    let presets = preset_reminders();
    assert_eq!(presets.len(), 2);
    assert_eq!(presets[0].message, "Administer medication");
    assert_eq!(presets[0].date, "2024-12-01T10:00:00");
    assert_eq!(presets[1].message, "Blood pressure check");
    assert_eq!(presets[1].date, "2024-12-02T14:00:00");
}

#[test]
fn validate_requires_both_message_and_time() {
    assert_eq!(validate_reminder("  ", "2024-12-03T09:00"), Err(MISSING_REMINDER_FIELDS));
    assert_eq!(validate_reminder("Walk", " "), Err(MISSING_REMINDER_FIELDS));
    assert_eq!(MISSING_REMINDER_FIELDS, "Please provide both a reminder message and time");
}

#[test]
fn validate_trims_inputs() {
    assert_eq!(
        validate_reminder(" Evening walk ", "2024-12-03T18:30"),
        Ok(("Evening walk".to_owned(), "2024-12-03T18:30".to_owned()))
    );
}

#[test]
fn add_reminder_takes_the_next_id_after_the_highest() {
    let mut list = preset_reminders();
    list.remove(0);
    let id = add_reminder(&mut list, "Evening walk".to_owned(), "2024-12-03T18:30".to_owned());
    assert_eq!(id, 3);
    assert_eq!(list.last().map(|r| r.message.as_str()), Some("Evening walk"));

    let mut empty = Vec::new();
    assert_eq!(add_reminder(&mut empty, "a".to_owned(), "b".to_owned()), 1);
}

#[test]
fn display_time_drops_seconds_and_the_t() {
    assert_eq!(display_time("2024-12-01T10:00:00"), "2024-12-01 10:00");
    assert_eq!(display_time("2024-12-03T18:30"), "2024-12-03 18:30");
    assert_eq!(display_time("soon"), "soon");
}

#[test]
fn reminders_round_trip_through_storage_json() {
    let raw = serde_json::to_string(&preset_reminders()).unwrap();
    let back: Vec<Reminder> = serde_json::from_str(&raw).unwrap();
    assert_eq!(back, preset_reminders());
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn load_without_a_browser_falls_back_to_presets() {
    assert_eq!(load_reminders(), preset_reminders());
}
