//! AES-256-CBC with PKCS#7 padding.
//!
//! The cipher takes the raw 32-byte derived key and an explicit 16-byte IV.
//! Text form: IV is lower-case hex, ciphertext is standard padded base64.
//!
//! Every decryption failure (bad length, bad padding, bad encoding, invalid
//! UTF-8) collapses into `CryptoError::DecryptionFailed` so a caller cannot
//! tell a padding error from a wrong key.

use aes::Aes256;
use base64ct::{Base64, Encoding};
use cbc::cipher::block_padding::Pkcs7;
use cbc::cipher::{BlockDecryptMut, BlockEncryptMut, KeyIvInit};

use crate::error::CryptoError;
use crate::kdf::DerivedKey;
use crate::types::{AES_BLOCK_SIZE, CBC_IV_LENGTH};

type Aes256CbcEnc = cbc::Encryptor<Aes256>;
type Aes256CbcDec = cbc::Decryptor<Aes256>;

/// Encrypt bytes with AES-256-CBC/PKCS#7.
///
/// # Arguments
/// * `plaintext` - Data to encrypt
/// * `key` - 32-byte derived key
/// * `iv` - 16-byte initialization vector
///
/// # Returns
/// Raw ciphertext, the plaintext length rounded up to the next full block
/// (an aligned plaintext gains one whole padding block)
pub fn seal(plaintext: &[u8], key: &DerivedKey, iv: &[u8]) -> Result<Vec<u8>, CryptoError> {
    if iv.len() != CBC_IV_LENGTH {
        return Err(CryptoError::InvalidIvLength {
            expected: CBC_IV_LENGTH,
            got: iv.len(),
        });
    }
    let cipher = Aes256CbcEnc::new_from_slices(key.as_bytes(), iv)
        .map_err(|e| CryptoError::EncryptionFailed(e.to_string()))?;
    Ok(cipher.encrypt_padded_vec_mut::<Pkcs7>(plaintext))
}

/// Decrypt AES-256-CBC/PKCS#7 ciphertext.
///
/// # Arguments
/// * `ciphertext` - Raw ciphertext, a non-empty multiple of 16 bytes
/// * `key` - 32-byte derived key
/// * `iv` - IV used at encryption
///
/// # Returns
/// The plaintext, or `DecryptionFailed` for any length, key or padding error
pub fn open(ciphertext: &[u8], key: &DerivedKey, iv: &[u8]) -> Result<Vec<u8>, CryptoError> {
    if ciphertext.is_empty() || ciphertext.len() % AES_BLOCK_SIZE != 0 {
        return Err(CryptoError::DecryptionFailed);
    }
    let cipher = Aes256CbcDec::new_from_slices(key.as_bytes(), iv)
        .map_err(|_| CryptoError::DecryptionFailed)?;
    cipher
        .decrypt_padded_vec_mut::<Pkcs7>(ciphertext)
        .map_err(|_| CryptoError::DecryptionFailed)
}

/// Encrypt UTF-8 text under a hex IV.
///
/// # Arguments
/// * `plaintext` - Text to encrypt
/// * `key` - 32-byte derived key
/// * `iv_hex` - 16-byte IV, hex
///
/// # Returns
/// Standard padded base64 of the raw ciphertext
pub fn seal_text(plaintext: &str, key: &DerivedKey, iv_hex: &str) -> Result<String, CryptoError> {
    let iv = hex::decode(iv_hex).map_err(|_| CryptoError::InvalidHex { field: "iv" })?;
    let sealed = seal(plaintext.as_bytes(), key, &iv)?;
    Ok(Base64::encode_string(&sealed))
}

/// Decrypt base64 ciphertext under a hex IV back into UTF-8 text.
///
/// # Arguments
/// * `ciphertext_b64` - Standard padded base64 ciphertext
/// * `key` - 32-byte derived key
/// * `iv_hex` - 16-byte IV, hex
///
/// # Returns
/// The plaintext; every failure is the same `DecryptionFailed`
pub fn open_text(
    ciphertext_b64: &str,
    key: &DerivedKey,
    iv_hex: &str,
) -> Result<String, CryptoError> {
    let ciphertext =
        Base64::decode_vec(ciphertext_b64).map_err(|_| CryptoError::DecryptionFailed)?;
    let iv = hex::decode(iv_hex).map_err(|_| CryptoError::DecryptionFailed)?;
    let plaintext = open(&ciphertext, key, &iv)?;
    String::from_utf8(plaintext).map_err(|_| CryptoError::DecryptionFailed)
}
