use super::*;

#[test]
fn valid_form_normalizes_role_and_trims() {
    let form = validate_signup(" Jane Roe ", " jane@example.com ", "secret", "Caregiver").unwrap();
    assert_eq!(form.username, "Jane Roe");
    assert_eq!(form.email, "jane@example.com");
    assert_eq!(form.password, "secret");
    assert_eq!(form.role, "caregiver");
}

#[test]
fn every_field_is_required() {
    let errors = validate_signup("", "", "", "").unwrap_err();
    assert_eq!(errors.name, Some("Name is required"));
    assert_eq!(errors.email, Some("Email is required"));
    assert_eq!(errors.password, Some("Password is required"));
    assert_eq!(errors.role, Some("Role is required"));
}

#[test]
fn guest_or_unknown_role_is_rejected() {
    for role in ["guest", "admin"] {
        let errors = validate_signup("Jane", "jane@example.com", "secret", role).unwrap_err();
        assert_eq!(errors.role, Some("Choose doctor, caregiver, or patient"));
        assert_eq!(errors.name, None);
    }
}

#[test]
fn malformed_email_is_flagged() {
    let errors = validate_signup("Jane", "jane.example.com", "secret", "patient").unwrap_err();
    assert_eq!(errors.email, Some("Invalid email format"));
}
