//! PBKDF2-HMAC-SHA256 password key derivation.
//!
//! key = PBKDF2(HMAC-SHA256, password, salt, 10_000, 32 bytes)
//!
//! The salt is taken exactly as stored in the encryption record: the UTF-8
//! bytes of its hex text. It is not hex-decoded first.

use pbkdf2::pbkdf2_hmac;
use sha2::Sha256;
use subtle::ConstantTimeEq;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::CryptoError;
use crate::types::{AES_KEY_LENGTH, PBKDF2_ITERATIONS};

/// A 256-bit symmetric key derived from a password. Zeroized on drop.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct DerivedKey([u8; AES_KEY_LENGTH]);

impl DerivedKey {
    /// Wrap raw key bytes.
    pub fn from_bytes(bytes: [u8; AES_KEY_LENGTH]) -> Self {
        Self(bytes)
    }

    /// Raw key bytes, consumed directly by the cipher.
    pub fn as_bytes(&self) -> &[u8; AES_KEY_LENGTH] {
        &self.0
    }

    /// Lower-case hex text of the key. This is the form used as the HMAC key
    /// and as the key slot in the verify-side proof.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl PartialEq for DerivedKey {
    fn eq(&self, other: &Self) -> bool {
        self.0.ct_eq(&other.0).into()
    }
}

impl Eq for DerivedKey {}

impl std::fmt::Debug for DerivedKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("DerivedKey(..)")
    }
}

/// Derive a 256-bit key with the standard 10,000 iterations.
pub fn derive_key(password: &str, salt: &str) -> DerivedKey {
    derive_with_rounds(password, salt, PBKDF2_ITERATIONS)
}

/// Derive a 256-bit key with a caller-chosen iteration count.
pub fn derive_key_with_iterations(
    password: &str,
    salt: &str,
    iterations: u32,
) -> Result<DerivedKey, CryptoError> {
    if iterations == 0 {
        return Err(CryptoError::InvalidIterations);
    }
    Ok(derive_with_rounds(password, salt, iterations))
}

fn derive_with_rounds(password: &str, salt: &str, rounds: u32) -> DerivedKey {
    let mut okm = [0u8; AES_KEY_LENGTH];
    pbkdf2_hmac::<Sha256>(password.as_bytes(), salt.as_bytes(), rounds, &mut okm);
    let key = DerivedKey(okm);
    okm.zeroize();
    key
}
