use super::*;

#[test]
fn test_availability_ready() {
    assert!(Availability::Ready.is_ready());
}

#[test]
fn test_availability_unavailable() {
    let availability = Availability::Unavailable("model host not running".to_string());
    assert!(!availability.is_ready());
    match availability {
        Availability::Unavailable(reason) => assert!(reason.contains("not running")),
        Availability::Ready => panic!("expected Unavailable"),
    }
}

#[test]
fn test_session_config_default_language() {
    assert_eq!(SessionConfig::default().language, "en");
}

#[test]
fn test_session_config_roundtrip() {
    let config = SessionConfig::new("de");
    let json = serde_json::to_value(&config).unwrap();
    assert_eq!(json["language"], "de");
    let parsed: SessionConfig = serde_json::from_value(json).unwrap();
    assert_eq!(parsed.language, "de");
}
