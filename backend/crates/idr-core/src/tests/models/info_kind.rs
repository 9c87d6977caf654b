use crate::{CoreError, InfoKind};

use std::str::FromStr;

use googletest::prelude::*;

#[test]
fn given_known_kinds_when_parsed_then_ok() {
    assert_that!(InfoKind::from_str("users").unwrap(), eq(InfoKind::Users));
    assert_that!(InfoKind::from_str("ids").unwrap(), eq(InfoKind::Ids));
    assert_that!(InfoKind::from_str("all").unwrap(), eq(InfoKind::All));
}

#[test]
fn given_mixed_case_or_uuids_alias_when_parsed_then_ok() {
    assert_that!(InfoKind::from_str("USERS").unwrap(), eq(InfoKind::Users));
    assert_that!(InfoKind::from_str("UUIDs").unwrap(), eq(InfoKind::Ids));
    assert_that!(InfoKind::from_str("All").unwrap(), eq(InfoKind::All));
}

#[test]
fn given_unknown_kind_when_parsed_then_invalid_info_kind() {
    let result = InfoKind::from_str("passwords");

    assert!(matches!(
        result,
        Err(CoreError::InvalidInfoKind { ref value, .. }) if value == "passwords"
    ));
}

#[test]
fn test_info_kind_display_round_trips() {
    for kind in [InfoKind::Users, InfoKind::Ids, InfoKind::All] {
        assert_eq!(InfoKind::from_str(&kind.to_string()).unwrap(), kind);
    }
}
