#![allow(dead_code)]

use idr_store::RecordStore;

use idr_core::IdentityRecord;

pub const ORIGIN: &str = "192.0.2.10";

/// Store pre-populated with an unprotected `alice` and a protected `bob`
pub async fn create_test_store() -> (RecordStore, IdentityRecord, IdentityRecord) {
    let store = RecordStore::new();
    let alice = store
        .create("alice", "Alice A", None, ORIGIN)
        .await
        .expect("create alice");
    let bob = store
        .create("bob", "Bob B", Some("D1".to_string()), ORIGIN)
        .await
        .expect("create bob");
    (store, alice, bob)
}
