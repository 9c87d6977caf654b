use crate::store_entry::StoreEntry;

use idr_core::IdentityRecord;

use chrono::{Duration, Utc};
use googletest::prelude::*;

fn record_accessed_at(offset: Duration) -> IdentityRecord {
    let mut record = IdentityRecord::new("alice".into(), "Alice".into(), None, "x".into());
    record.last_accessed_at = Utc::now() + offset;
    record
}

#[test]
fn given_new_entry_when_copied_then_access_time_preserved_exactly() {
    let record = record_accessed_at(Duration::hours(-1));

    let entry = StoreEntry::new(record.clone());

    assert_that!(entry.to_record(), eq(&record));
}

#[test]
fn given_old_access_time_when_touched_then_advances() {
    let record = record_accessed_at(Duration::hours(-1));
    let before = record.last_accessed_at;
    let entry = StoreEntry::new(record);

    let touched = entry.touch();

    assert!(touched.last_accessed_at > before);
    assert_that!(entry.to_record().last_accessed_at, eq(touched.last_accessed_at));
}

#[test]
fn given_future_access_time_when_touched_then_never_moves_backwards() {
    let record = record_accessed_at(Duration::hours(1));
    let ahead = record.last_accessed_at;
    let entry = StoreEntry::new(record);

    let touched = entry.touch();

    assert_that!(touched.last_accessed_at, eq(ahead));
}

#[test]
fn given_entry_when_renamed_then_record_reflects_new_name() {
    let mut entry = StoreEntry::new(record_accessed_at(Duration::zero()));

    entry.set_login_name("alicia".into());

    assert_that!(entry.record().login_name.as_str(), eq("alicia"));
    assert_that!(entry.to_record().login_name.as_str(), eq("alicia"));
}
