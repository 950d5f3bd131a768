use super::*;

#[test]
fn accepts_plain_addresses() {
    assert!(looks_like_email("jane1@gmail.com"));
    assert!(looks_like_email("a.b+c@sub.example.org"));
}

#[test]
fn rejects_malformed_addresses() {
    for raw in ["", "jane", "jane@", "@gmail.com", "jane@gmail", "jane@.com", "jane@gmail.", "ja ne@gmail.com", "a@b@c.com"] {
        assert!(!looks_like_email(raw), "{raw}");
    }
}

#[test]
fn required_flags_blank_values_only() {
    assert_eq!(required("   ", "Name is required"), Some("Name is required"));
    assert_eq!(required("x", "Name is required"), None);
}
