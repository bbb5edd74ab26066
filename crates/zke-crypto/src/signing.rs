//! ECDSA P-256 message signing for a local, in-process signer.
//!
//! Signatures are IEEE P1363 (raw r||s, 64 bytes) and hex-encoded, the same
//! shape a wallet returns. RFC 6979 nonces make them deterministic per
//! key and message.

use ecdsa::signature::{Signer, Verifier};
use p256::ecdsa::{Signature, VerifyingKey};

pub use p256::ecdsa::SigningKey;

use crate::error::CryptoError;
use crate::random::random_bytes;

/// Generate a new P-256 signing key from OS randomness.
///
/// # Returns
/// A fresh signing key; the temporary scalar buffer is zeroized
pub fn generate_signing_key() -> Result<SigningKey, CryptoError> {
    let mut scalar = random_bytes::<32>()?;
    let key = SigningKey::from_slice(&scalar)
        .map_err(|e| CryptoError::SigningFailed(format!("P-256 scalar: {}", e)));
    zeroize::Zeroize::zeroize(&mut scalar);
    key
}

/// Import a P-256 signing key from its 32-byte hex scalar.
///
/// # Arguments
/// * `scalar_hex` - SEC1 private scalar, 64 hex chars
pub fn signing_key_from_hex(scalar_hex: &str) -> Result<SigningKey, CryptoError> {
    let mut scalar = hex::decode(scalar_hex).map_err(|_| CryptoError::InvalidHex {
        field: "signing key",
    })?;
    let key = SigningKey::from_slice(&scalar)
        .map_err(|e| CryptoError::SigningFailed(format!("P-256 scalar: {}", e)));
    zeroize::Zeroize::zeroize(&mut scalar);
    key
}

/// Sign a message with ECDSA P-256 + SHA-256.
///
/// # Arguments
/// * `private_key` - P-256 signing key
/// * `message` - Message bytes to sign
///
/// # Returns
/// Hex of the 64-byte IEEE P1363 signature (r||s), 128 chars
pub fn sign_hex(private_key: &SigningKey, message: &[u8]) -> Result<String, CryptoError> {
    let signature: Signature = private_key
        .try_sign(message)
        .map_err(|e| CryptoError::SigningFailed(e.to_string()))?;
    Ok(hex::encode(signature.to_bytes()))
}

/// Compressed SEC1 public key, hex-encoded (33 bytes).
pub fn public_key_hex(key: &SigningKey) -> String {
    hex::encode(key.verifying_key().to_encoded_point(true).as_bytes())
}

/// Verify a hex signature against a hex SEC1 public key.
///
/// # Arguments
/// * `public_key_hex` - Compressed or uncompressed SEC1 point, hex
/// * `message` - Original message bytes
/// * `signature_hex` - 64-byte IEEE P1363 signature, hex
///
/// # Returns
/// true if valid, false otherwise (never errors on malformed input)
pub fn verify_hex(public_key_hex: &str, message: &[u8], signature_hex: &str) -> bool {
    (|| -> Result<bool, CryptoError> {
        let key_bytes = hex::decode(public_key_hex).map_err(|_| CryptoError::InvalidHex {
            field: "public key",
        })?;
        let verifying_key = VerifyingKey::from_sec1_bytes(&key_bytes)
            .map_err(|e| CryptoError::InvalidPublicKey(e.to_string()))?;
        let sig_bytes = hex::decode(signature_hex).map_err(|_| CryptoError::InvalidHex {
            field: "signature",
        })?;
        let signature = Signature::from_slice(&sig_bytes)
            .map_err(|e| CryptoError::SigningFailed(e.to_string()))?;
        Ok(verifying_key.verify(message, &signature).is_ok())
    })()
    .unwrap_or(false)
}
