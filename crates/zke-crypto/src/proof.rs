//! Challenge and proof construction.
//!
//! challenge = hex(SHA-256(commitment || ciphertext || signature))
//! proof     = hex(HMAC-SHA256(key_hex, challenge || randomness || signature))
//!
//! The verify side has no access to the per-encryption randomness, so
//! `recompute_for_verify` puts the key's hex text in the randomness slot:
//!
//! expected  = hex(HMAC-SHA256(key_hex, challenge || key_hex || signature))
//!
//! The two only agree when randomness == key_hex.

use hmac::{Hmac, Mac};
use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;
use zeroize::Zeroizing;

use crate::error::CryptoError;
use crate::kdf::DerivedKey;

type HmacSha256 = Hmac<Sha256>;

/// Derive the challenge binding a commitment to its ciphertext and signer.
///
/// # Arguments
/// * `commitment` - Hex commitment
/// * `ciphertext` - Base64 ciphertext
/// * `signature` - Wallet signature text
///
/// # Returns
/// Lower-case hex SHA-256 (64 chars)
pub fn challenge(commitment: &str, ciphertext: &str, signature: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(commitment.as_bytes());
    hasher.update(ciphertext.as_bytes());
    hasher.update(signature.as_bytes());
    hex::encode(hasher.finalize())
}

/// Produce the proof stored at encryption time.
///
/// # Arguments
/// * `challenge` - Hex challenge from [`challenge`]
/// * `randomness` - Per-encryption hex randomness
/// * `signature` - Wallet signature text
/// * `key` - Derived key; its hex text is the HMAC key
///
/// # Returns
/// Lower-case hex HMAC-SHA256 (64 chars)
pub fn prove(
    challenge: &str,
    randomness: &str,
    signature: &str,
    key: &DerivedKey,
) -> Result<String, CryptoError> {
    let key_hex = Zeroizing::new(key.to_hex());
    hmac_sha256_hex(key_hex.as_bytes(), &[challenge, randomness, signature])
}

/// Recompute the proof the way the verifier does, keying the randomness slot
/// with the derived key itself.
///
/// # Arguments
/// * `challenge` - Hex challenge recomputed at verify time
/// * `key` - Derived key; its hex text is both HMAC key and message part
/// * `signature` - Wallet signature text
///
/// # Returns
/// Lower-case hex HMAC-SHA256 (64 chars)
pub fn recompute_for_verify(
    challenge: &str,
    key: &DerivedKey,
    signature: &str,
) -> Result<String, CryptoError> {
    let key_hex = Zeroizing::new(key.to_hex());
    hmac_sha256_hex(key_hex.as_bytes(), &[challenge, key_hex.as_str(), signature])
}

/// Constant-time equality of two hex proofs.
///
/// # Returns
/// true only when both strings are byte-identical
pub fn proofs_match(stored: &str, recomputed: &str) -> bool {
    stored.as_bytes().ct_eq(recomputed.as_bytes()).into()
}

fn hmac_sha256_hex(key: &[u8], parts: &[&str]) -> Result<String, CryptoError> {
    let mut mac = HmacSha256::new_from_slice(key)
        .map_err(|e| CryptoError::EncryptionFailed(format!("HMAC init failed: {}", e)))?;
    for part in parts {
        mac.update(part.as_bytes());
    }
    Ok(hex::encode(mac.finalize().into_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kdf::derive_key;

    #[test]
    fn rfc4231_test_case_2() {
        let tag = hmac_sha256_hex(b"Jefe", &["what do ya ", "want for nothing?"]).unwrap();
        assert_eq!(
            tag,
            "5bdcc146bf60754e6a042426089575c75a003f089d2739839dec58b964ec3843"
        );
    }

    #[test]
    fn challenge_is_sha256_of_concatenation() {
        // SHA-256("abc")
        assert_eq!(
            challenge("a", "b", "c"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn challenge_depends_on_signature() {
        assert_ne!(challenge("c", "ct", "sig-a"), challenge("c", "ct", "sig-b"));
    }

    #[test]
    fn prove_is_deterministic() {
        let key = derive_key("pw", "salt");
        let a = prove("ch", "rand", "sig", &key).unwrap();
        let b = prove("ch", "rand", "sig", &key).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.len(), 64);
    }

    #[test]
    fn prove_keyed_by_derived_key() {
        let a = prove("ch", "rand", "sig", &derive_key("pw-a", "salt")).unwrap();
        let b = prove("ch", "rand", "sig", &derive_key("pw-b", "salt")).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn verify_formula_differs_from_prove() {
        let key = derive_key("pw", "salt");
        let proof = prove("ch", "0badc0de", "sig", &key).unwrap();
        let expected = recompute_for_verify("ch", &key, "sig").unwrap();
        assert!(!proofs_match(&proof, &expected));
    }

    #[test]
    fn verify_formula_matches_when_randomness_is_key_hex() {
        let key = derive_key("pw", "salt");
        let proof = prove("ch", &key.to_hex(), "sig", &key).unwrap();
        let expected = recompute_for_verify("ch", &key, "sig").unwrap();
        assert!(proofs_match(&proof, &expected));
    }

    #[test]
    fn proofs_match_requires_equal_length() {
        assert!(proofs_match("abcd", "abcd"));
        assert!(!proofs_match("abcd", "abc"));
        assert!(!proofs_match("abcd", "abce"));
        assert!(!proofs_match("", "a"));
    }
}
