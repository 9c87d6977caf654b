mod caller_context;
mod directory_service;
mod error;
mod info_response;
mod metrics;
mod shutdown_coordinator;
mod shutdown_guard;
mod validation;


pub use caller_context::{CallerContext, UNKNOWN_ORIGIN};
pub use directory_service::DirectoryService;
pub use error::{Result, ServiceError};
pub use info_response::InfoResponse;
pub use metrics::Metrics;
pub use shutdown_coordinator::ShutdownCoordinator;
pub use shutdown_guard::ShutdownGuard;
pub use validation::{validate_login_name, validate_password, validate_real_name};
