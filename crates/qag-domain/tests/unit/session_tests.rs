//! Unit tests for session identifiers

use qag_domain::SessionId;

#[test]
fn test_valid_session() {
    let session = SessionId::new("tenant-42").expect("valid session");
    assert_eq!(session.as_str(), "tenant-42");
    assert_eq!(session.to_string(), "tenant-42");
}

#[test]
fn test_rejects_empty_and_padded_ids() {
    assert!(SessionId::new("").is_err());
    assert!(SessionId::new("   ").is_err());
    assert!(SessionId::new(" S1").is_err());
    assert!(SessionId::try_from("S1\n").is_err());
}

#[test]
fn test_serde_round_trip_is_transparent() {
    let session = SessionId::new("S1").expect("valid session");
    let json = serde_json::to_string(&session).expect("serialize");
    assert_eq!(json, "\"S1\"");
    let back: SessionId = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back, session);
}
