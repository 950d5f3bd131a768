use super::*;

#[test]
fn parse_defaults_to_mock_and_local_api() {
    let cfg = ClientConfig::parse(None, None).unwrap();
    assert_eq!(cfg, ClientConfig::default());
    assert_eq!(cfg.auth_mode, AuthMode::Mock);
    assert_eq!(cfg.api_base_url, DEFAULT_API_BASE_URL);
}

#[test]
fn parse_remote_mode_and_trims_trailing_slash() {
    let cfg = ClientConfig::parse(Some("https://care.example.test/api/"), Some("remote")).unwrap();
    assert_eq!(cfg.auth_mode, AuthMode::Remote);
    assert_eq!(cfg.api_base_url, "https://care.example.test/api");
}

#[test]
fn parse_accepts_root_relative_base() {
    let cfg = ClientConfig::parse(Some("/api"), Some("remote")).unwrap();
    assert_eq!(cfg.api_base_url, "/api");
    assert_eq!(cfg.endpoint("/patients"), "/api/patients");
}

#[test]
fn parse_blank_values_fall_back_to_defaults() {
    let cfg = ClientConfig::parse(Some("   "), Some("")).unwrap();
    assert_eq!(cfg, ClientConfig::default());
}

#[test]
fn parse_unknown_mode_errors() {
    let err = ClientConfig::parse(None, Some("fake")).unwrap_err();
    assert_eq!(err, ConfigError::UnknownAuthMode("fake".to_owned()));
    assert!(err.to_string().contains("ELDERCARE_AUTH_MODE"));
}

#[test]
fn parse_rejects_schemeless_base_url() {
    let err = ClientConfig::parse(Some("localhost:8080"), None).unwrap_err();
    assert_eq!(err, ConfigError::InvalidBaseUrl("localhost:8080".to_owned()));
}

#[test]
fn endpoint_joins_with_single_slash() {
    let cfg = ClientConfig::default();
    assert_eq!(cfg.endpoint("/users/login"), "http://localhost:8080/api/users/login");
    assert_eq!(cfg.endpoint("patients"), "http://localhost:8080/api/patients");
}
