use crate::Client;

#[test]
fn given_trailing_slash_when_client_created_then_trimmed() {
    let client = Client::new("http://localhost:1099/", None);
    assert_eq!(client.base_url, "http://localhost:1099");
}

#[test]
fn given_no_trailing_slash_when_client_created_then_unchanged() {
    let client = Client::new("http://localhost:1099", None);
    assert_eq!(client.base_url, "http://localhost:1099");
}

#[test]
fn given_caller_user_when_client_created_then_stored() {
    let client = Client::new("http://localhost:1099", Some("jdoe"));
    assert_eq!(client.caller_user, Some("jdoe".to_string()));
}

#[test]
fn given_no_caller_user_when_client_created_then_none() {
    let client = Client::new("http://localhost:1099", None);
    assert!(client.caller_user.is_none());
}
