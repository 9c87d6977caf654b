pub mod error;
pub mod extractors;
pub mod info;
pub mod logins;
