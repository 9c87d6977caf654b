use crate::{IdentityRecord, RecordSummary};

use googletest::prelude::*;

#[test]
fn test_identity_record_new() {
    let record = IdentityRecord::new(
        "alice".to_string(),
        "Alice A".to_string(),
        None,
        "10.0.0.7".to_string(),
    );

    assert_eq!(record.login_name, "alice");
    assert_eq!(record.real_name, "Alice A");
    assert_eq!(record.client_origin, "10.0.0.7");
    assert_eq!(record.created_at, record.last_accessed_at);
    assert!(!record.is_password_protected());
}

#[test]
fn test_identity_record_ids_differ() {
    let a = IdentityRecord::new("a".into(), "A".into(), None, "x".into());
    let b = IdentityRecord::new("b".into(), "B".into(), None, "x".into());

    assert_ne!(a.id, b.id);
}

#[test]
fn given_unprotected_record_when_any_credential_then_matches() {
    let record = IdentityRecord::new("alice".into(), "Alice".into(), None, "x".into());

    assert!(record.credential_matches(None));
    assert!(record.credential_matches(Some("anything")));
}

#[test]
fn given_protected_record_when_credential_checked_then_exact_match_only() {
    let record = IdentityRecord::new("bob".into(), "Bob".into(), Some("D1".into()), "x".into());

    assert!(record.is_password_protected());
    assert!(record.credential_matches(Some("D1")));
    assert!(!record.credential_matches(Some("d1")));
    assert!(!record.credential_matches(Some("WRONG")));
    assert!(!record.credential_matches(None));
}

#[test]
fn given_protected_record_when_summarized_then_digest_hidden() {
    let record = IdentityRecord::new("bob".into(), "Bob".into(), Some("D1".into()), "x".into());

    let summary: RecordSummary = record.summary();
    let json = serde_json::to_string(&summary).unwrap();

    assert_that!(summary.password_protected, eq(true));
    assert_that!(summary.id, eq(record.id));
    assert!(!json.contains("D1"));
    assert!(summary.to_string().contains("[protected]"));
}
