use super::*;

#[test]
fn parse_defaults_when_unset_or_blank() {
    assert_eq!(ServerConfig::parse(None, None).unwrap(), ServerConfig::default());
    assert_eq!(ServerConfig::parse(Some("  "), Some("")).unwrap(), ServerConfig::default());
}

#[test]
fn parse_reads_port_and_bind_addr() {
    let cfg = ServerConfig::parse(Some("8081"), Some("127.0.0.1")).unwrap();
    assert_eq!(cfg.port, 8081);
    assert_eq!(cfg.socket_addr().to_string(), "127.0.0.1:8081");
}

#[test]
fn parse_accepts_ipv6_bind_addr() {
    let cfg = ServerConfig::parse(None, Some("::1")).unwrap();
    assert_eq!(cfg.socket_addr().to_string(), "[::1]:3000");
}

#[test]
fn parse_rejects_bad_values() {
    let err = ServerConfig::parse(Some("http"), None).unwrap_err();
    assert!(matches!(err, ServerError::Config(_)));
    assert!(err.to_string().contains("PORT"));

    let err = ServerConfig::parse(Some("70000"), None).unwrap_err();
    assert!(matches!(err, ServerError::Config(_)));

    let err = ServerConfig::parse(None, Some("localhost")).unwrap_err();
    assert!(err.to_string().contains("BIND_ADDR"));
}
