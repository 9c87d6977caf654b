//! One-way password digests.
//!
//! The directory only ever stores and compares digests. Whatever produces
//! them must be deterministic so a password presented at rename/delete time
//! digests to the same string it did at creation.

pub mod sha512_digest;

/// A one-way function from a plaintext password to an opaque digest string
pub trait PasswordDigest: Send + Sync {
    fn digest(&self, plaintext: &str) -> String;
}
