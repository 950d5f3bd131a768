use super::*;

#[test]
fn login_response_into_grant_normalizes_role() {
    let resp: LoginResponse =
        serde_json::from_str(r#"{"token":"jwt","role":"CAREGIVER","message":"Login successful"}"#).unwrap();
    assert_eq!(resp.message.as_deref(), Some("Login successful"));
    let grant = resp.into_grant("jane").unwrap();
    assert_eq!(grant, LoginGrant { token: "jwt".to_owned(), role: Role::Caregiver, user_id: "jane".to_owned() });
}

#[test]
fn login_response_unknown_role_becomes_guest() {
    let resp: LoginResponse = serde_json::from_str(r#"{"token":"jwt","role":"admin"}"#).unwrap();
    assert_eq!(resp.into_grant("x").unwrap().role, Role::Guest);
}

#[test]
fn login_response_empty_token_is_rejected() {
    let resp: LoginResponse = serde_json::from_str(r#"{"token":"  ","role":"doctor"}"#).unwrap();
    assert!(matches!(resp.into_grant("x"), Err(ApiError::Parse(_))));
}

#[test]
fn profile_uses_camel_case_and_tolerates_missing_fields() {
    let profile: Profile =
        serde_json::from_str(r#"{"username":"jane1","phoneNumber":"555-0101","role":"caregiver"}"#).unwrap();
    assert_eq!(profile.username, "jane1");
    assert_eq!(profile.phone_number, "555-0101");
    assert_eq!(profile.email, "");

    let json = serde_json::to_value(&profile).unwrap();
    assert_eq!(json["primaryLocation"], "");
}

#[test]
fn error_body_message_is_optional() {
    let body: ErrorBody = serde_json::from_str("{}").unwrap();
    assert_eq!(body.message, None);
}
