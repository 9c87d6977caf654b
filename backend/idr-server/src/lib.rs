pub mod admin;
pub mod api;
pub mod app_state;
pub mod args;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;

#[cfg(test)]
mod tests;

pub use api::{
    error::ApiError,
    error::Result as ApiResult,
    extractors::caller::{CALLER_USER_HEADER, Caller},
    info::info::get_info,
    logins::{
        create_login_request::CreateLoginRequest,
        delete_login_request::DeleteLoginRequest,
        delete_response::DeleteResponse,
        login_response::LoginResponse,
        logins::{create_login, delete_login, get_login, get_login_by_id, rename_login},
        rename_login_request::RenameLoginRequest,
        rename_response::RenameResponse,
    },
};
pub use app_state::AppState;
pub use args::ServerArgs;

pub use crate::routes::build_router;
