//! Fresh per-encryption random values, hex-encoded.

use crate::error::CryptoError;
use crate::types::{CBC_IV_LENGTH, RANDOMNESS_LENGTH, SALT_LENGTH};

/// Fill `N` bytes from the OS CSPRNG.
pub fn random_bytes<const N: usize>() -> Result<[u8; N], CryptoError> {
    let mut bytes = [0u8; N];
    getrandom::getrandom(&mut bytes).map_err(|e| CryptoError::RngFailed(e.to_string()))?;
    Ok(bytes)
}

/// Generate a 16-byte PBKDF2 salt as lower-case hex.
pub fn generate_salt() -> Result<String, CryptoError> {
    Ok(hex::encode(random_bytes::<SALT_LENGTH>()?))
}

/// Generate a 16-byte CBC IV as lower-case hex.
pub fn generate_iv() -> Result<String, CryptoError> {
    Ok(hex::encode(random_bytes::<CBC_IV_LENGTH>()?))
}

/// Generate the 32-byte commitment randomness as lower-case hex.
pub fn generate_randomness() -> Result<String, CryptoError> {
    Ok(hex::encode(random_bytes::<RANDOMNESS_LENGTH>()?))
}
