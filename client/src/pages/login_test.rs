use super::*;

#[test]
fn valid_input_returns_trimmed_email() {
    assert_eq!(validate_login_input("  jane1@gmail.com ", "password123"), Ok("jane1@gmail.com".to_owned()));
}

#[test]
fn blank_fields_are_required() {
    let errors = validate_login_input("   ", "").unwrap_err();
    assert_eq!(errors.email, Some("Email is required"));
    assert_eq!(errors.password, Some("Password is required"));
}

#[test]
fn malformed_email_and_short_password_are_reported_together() {
    let errors = validate_login_input("jane1", "12345").unwrap_err();
    assert_eq!(errors.email, Some("Invalid email format"));
    assert_eq!(errors.password, Some("Password must be at least 6 characters long"));
}

#[test]
fn six_character_password_is_long_enough() {
    assert!(validate_login_input("a@b.co", "123456").is_ok());
}

#[test]
fn one_bad_field_leaves_the_other_clear() {
    let errors = validate_login_input("jane1@gmail.com", "").unwrap_err();
    assert_eq!(errors.email, None);
    assert!(!errors.is_empty());
}
