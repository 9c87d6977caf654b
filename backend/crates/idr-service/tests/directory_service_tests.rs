use idr_config::ValidationConfig;
use idr_core::{PasswordDigest, Sha512Digest};
use idr_service::{CallerContext, DirectoryService, InfoResponse};
use idr_store::RecordStore;

use googletest::assert_that;
use googletest::prelude::{eq, some};

fn create_service() -> DirectoryService {
    DirectoryService::new(RecordStore::new(), ValidationConfig::default())
}

fn caller() -> CallerContext {
    CallerContext::new("10.0.0.7", Some(String::from("jdoe")))
}

// =========================================================================
// Create
// =========================================================================

#[tokio::test]
async fn given_full_request_when_create_then_summary_returned() {
    // Given
    let service = create_service();

    // When
    let summary = service
        .create(&caller(), "alice", Some("Alice Liddell"), None)
        .await
        .unwrap();

    // Then
    assert_that!(summary.login_name.as_str(), eq("alice"));
    assert_that!(summary.real_name.as_str(), eq("Alice Liddell"));
    assert_that!(summary.client_origin.as_str(), eq("10.0.0.7"));
    assert!(!summary.password_protected);
}

#[tokio::test]
async fn given_no_real_name_when_create_then_caller_local_user_used() {
    // Given
    let service = create_service();

    // When
    let summary = service.create(&caller(), "alice", None, None).await.unwrap();

    // Then
    assert_that!(summary.real_name.as_str(), eq("jdoe"));
}

#[tokio::test]
async fn given_no_real_name_or_local_user_when_create_then_login_name_used() {
    // Given
    let service = create_service();
    let anonymous = CallerContext::new("10.0.0.7", None);

    // When
    let summary = service
        .create(&anonymous, "alice", Some("  "), None)
        .await
        .unwrap();

    // Then
    assert_that!(summary.real_name.as_str(), eq("alice"));
}

#[tokio::test]
async fn given_password_when_create_then_store_holds_digest_only() {
    // Given
    let service = create_service();

    // When
    let summary = service
        .create(&caller(), "bob", None, Some("hunter2"))
        .await
        .unwrap();

    // Then
    assert!(summary.password_protected);
    let stored = service.store().export_snapshot().await;
    let expected = Sha512Digest.digest("hunter2");
    assert_that!(stored[0].password_digest.as_deref(), some(eq(expected.as_str())));
}

#[tokio::test]
async fn given_taken_name_when_create_then_already_exists() {
    // Given
    let service = create_service();
    service.create(&caller(), "alice", None, None).await.unwrap();

    // When
    let err = service
        .create(&caller(), "alice", None, None)
        .await
        .unwrap_err();

    // Then
    assert_that!(err.error_code(), eq("ALREADY_EXISTS"));
}

#[tokio::test]
async fn given_name_with_whitespace_when_create_then_validation_and_store_untouched() {
    // Given
    let service = create_service();

    // When
    let err = service
        .create(&caller(), "al ice", None, None)
        .await
        .unwrap_err();

    // Then
    assert_that!(err.error_code(), eq("VALIDATION_ERROR"));
    assert_that!(err.field(), some(eq("login_name")));
    assert!(service.store().is_empty().await);
}

#[tokio::test]
async fn given_configured_limit_when_create_long_name_then_validation() {
    // Given
    let limits = ValidationConfig {
        max_login_name_length: 4,
        ..ValidationConfig::default()
    };
    let service = DirectoryService::new(RecordStore::new(), limits);

    // When
    let err = service
        .create(&caller(), "alice", None, None)
        .await
        .unwrap_err();

    // Then
    assert_that!(err.error_code(), eq("VALIDATION_ERROR"));
}

// =========================================================================
// Lookup
// =========================================================================

#[tokio::test]
async fn given_unknown_name_when_lookup_then_not_found_message() {
    // Given
    let service = create_service();

    // When
    let err = service.lookup_by_name("ghost").await.unwrap_err();

    // Then
    assert_that!(err.error_code(), eq("NOT_FOUND"));
    assert_that!(err.to_string().as_str(), eq("No login named 'ghost'"));
}

#[tokio::test]
async fn given_record_when_lookup_by_id_text_then_found() {
    // Given
    let service = create_service();
    let created = service.create(&caller(), "alice", None, None).await.unwrap();

    // When
    let found = service
        .lookup_by_id(&created.id.to_string())
        .await
        .unwrap();

    // Then
    assert_that!(found.login_name.as_str(), eq("alice"));
    assert!(found.last_accessed_at >= created.last_accessed_at);
}

#[tokio::test]
async fn given_malformed_id_when_lookup_by_id_then_validation_on_id() {
    // Given
    let service = create_service();

    // When
    let err = service.lookup_by_id("not-a-uuid").await.unwrap_err();

    // Then
    assert_that!(err.error_code(), eq("VALIDATION_ERROR"));
    assert_that!(err.field(), some(eq("id")));
}

#[tokio::test]
async fn given_unknown_id_when_lookup_by_id_then_not_found_mentions_id() {
    // Given
    let service = create_service();
    let id = uuid::Uuid::new_v4();

    // When
    let err = service.lookup_by_uuid(id).await.unwrap_err();

    // Then
    assert_that!(err.error_code(), eq("NOT_FOUND"));
    assert!(err.to_string().contains(&id.to_string()));
}

// =========================================================================
// Rename / Delete
// =========================================================================

#[tokio::test]
async fn given_protected_record_when_rename_with_password_then_renamed() {
    // Given
    let service = create_service();
    let created = service
        .create(&caller(), "bob", None, Some("pw"))
        .await
        .unwrap();

    // When
    let renamed = service.rename("bob", "robert", Some("pw")).await.unwrap();

    // Then
    assert_that!(renamed.as_str(), eq("robert"));
    let found = service.lookup_by_uuid(created.id).await.unwrap();
    assert_that!(found.login_name.as_str(), eq("robert"));
}

#[tokio::test]
async fn given_protected_record_when_rename_with_wrong_password_then_unauthorized() {
    // Given
    let service = create_service();
    service
        .create(&caller(), "bob", None, Some("pw"))
        .await
        .unwrap();

    // When
    let err = service.rename("bob", "robert", Some("nope")).await.unwrap_err();

    // Then
    assert_that!(err.error_code(), eq("UNAUTHORIZED"));
}

#[tokio::test]
async fn given_protected_record_when_rename_without_password_then_unauthorized() {
    // Given
    let service = create_service();
    service
        .create(&caller(), "bob", None, Some("pw"))
        .await
        .unwrap();

    // When
    let err = service.rename("bob", "robert", None).await.unwrap_err();

    // Then
    assert_that!(err.error_code(), eq("UNAUTHORIZED"));
}

#[tokio::test]
async fn given_same_old_and_new_name_when_rename_then_validation() {
    // Given
    let service = create_service();
    service.create(&caller(), "alice", None, None).await.unwrap();

    // When
    let err = service.rename("alice", "alice", None).await.unwrap_err();

    // Then
    assert_that!(err.error_code(), eq("VALIDATION_ERROR"));
}

#[tokio::test]
async fn given_empty_new_name_when_rename_then_validation() {
    // Given
    let service = create_service();
    service.create(&caller(), "alice", None, None).await.unwrap();

    // When
    let err = service.rename("alice", "", None).await.unwrap_err();

    // Then
    assert_that!(err.error_code(), eq("VALIDATION_ERROR"));
    assert_that!(err.field(), some(eq("new_login_name")));
}

#[tokio::test]
async fn given_unprotected_record_when_delete_then_gone() {
    // Given
    let service = create_service();
    service.create(&caller(), "alice", None, None).await.unwrap();

    // When
    let deleted = service.delete("alice", None).await.unwrap();

    // Then
    assert_that!(deleted.as_str(), eq("alice"));
    let err = service.lookup_by_name("alice").await.unwrap_err();
    assert_that!(err.error_code(), eq("NOT_FOUND"));
}

#[tokio::test]
async fn given_protected_record_when_delete_with_wrong_password_then_kept() {
    // Given
    let service = create_service();
    service
        .create(&caller(), "bob", None, Some("pw"))
        .await
        .unwrap();

    // When
    let err = service.delete("bob", Some("wrong")).await.unwrap_err();

    // Then
    assert_that!(err.error_code(), eq("UNAUTHORIZED"));
    assert!(service.lookup_by_name("bob").await.is_ok());
}

// =========================================================================
// GetInfo
// =========================================================================

#[tokio::test]
async fn given_records_when_get_info_users_then_sorted_names() {
    // Given
    let service = create_service();
    service.create(&caller(), "carol", None, None).await.unwrap();
    service.create(&caller(), "alice", None, None).await.unwrap();

    // When
    let info = service.get_info("USERS").await.unwrap();

    // Then
    assert_that!(
        info,
        eq(&InfoResponse::Users {
            users: vec![String::from("alice"), String::from("carol")]
        })
    );
}

#[tokio::test]
async fn given_records_when_get_info_uuids_then_all_ids() {
    // Given
    let service = create_service();
    let a = service.create(&caller(), "alice", None, None).await.unwrap();
    let b = service.create(&caller(), "bob", None, None).await.unwrap();

    // When
    let info = service.get_info("uuids").await.unwrap();

    // Then
    let InfoResponse::Ids { ids } = info else {
        panic!("expected ids, got {info:?}");
    };
    assert_that!(ids.len(), eq(2));
    assert!(ids.contains(&a.id));
    assert!(ids.contains(&b.id));
}

#[tokio::test]
async fn given_protected_record_when_get_info_all_then_no_digest_exposed() {
    // Given
    let service = create_service();
    service
        .create(&caller(), "bob", None, Some("pw"))
        .await
        .unwrap();

    // When
    let info = service.get_info("all").await.unwrap();

    // Then
    let json = serde_json::to_string(&info).unwrap();
    assert!(!json.contains(&Sha512Digest.digest("pw")));
    assert!(json.contains("\"password_protected\":true"));
}

#[tokio::test]
async fn given_unknown_kind_when_get_info_then_validation() {
    // Given
    let service = create_service();

    // When
    let err = service.get_info("everything").await.unwrap_err();

    // Then
    assert_that!(err.error_code(), eq("VALIDATION_ERROR"));
    assert_that!(err.field(), some(eq("kind")));
}

#[tokio::test]
async fn given_empty_directory_when_get_info_all_then_empty() {
    // Given
    let service = create_service();

    // When
    let info = service.get_info("all").await.unwrap();

    // Then
    assert!(info.is_empty());
}

#[test]
fn given_blank_origin_and_user_when_caller_built_then_unknown_and_none() {
    // When
    let caller = CallerContext::new("", Some(String::from("  ")));

    // Then
    assert_that!(caller.client_origin.as_str(), eq("unknown"));
    assert!(caller.local_user.is_none());
}
