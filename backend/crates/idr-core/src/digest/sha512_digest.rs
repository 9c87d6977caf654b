use crate::PasswordDigest;

use sha2::{Digest, Sha512};

/// SHA-512 over the UTF-8 bytes of the password, rendered as uppercase hex
#[derive(Debug, Clone, Copy, Default)]
pub struct Sha512Digest;

impl PasswordDigest for Sha512Digest {
    fn digest(&self, plaintext: &str) -> String {
        hex::encode_upper(Sha512::digest(plaintext.as_bytes()))
    }
}
