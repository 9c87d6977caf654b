pub mod create_login_request;
pub mod delete_login_request;
pub mod delete_response;
pub mod login_response;
#[allow(clippy::module_inception)]
pub mod logins;
pub mod rename_login_request;
pub mod rename_response;
