//! SHA-256 commitment over message, randomness and signature.
//!
//! commitment = hex(SHA-256(message || randomness || signature))
//!
//! Plain UTF-8 concatenation: no separators, no length prefixes.

use sha2::{Digest, Sha256};

/// Commit to a message under fresh randomness and a signer's signature.
pub fn commit(message: &str, randomness: &str, signature: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(message.as_bytes());
    hasher.update(randomness.as_bytes());
    hasher.update(signature.as_bytes());
    hex::encode(hasher.finalize())
}
