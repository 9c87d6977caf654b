pub mod digest;
pub mod error;
pub mod models;

#[cfg(test)]
mod tests;

pub use digest::{PasswordDigest, sha512_digest::Sha512Digest};
pub use error::{CoreError, Result};
pub use models::identity_record::IdentityRecord;
pub use models::info_kind::InfoKind;
pub use models::record_summary::RecordSummary;
