//! Prompts handed to the signer for each operation.
//!
//! encrypt: the plaintext message
//! decrypt: "decrypt_" + first 32 chars of the ciphertext
//! verify:  "verify_" + first 32 chars of the stored proof
//!
//! The three prompts differ, so a wallet returns a different signature for
//! each operation on the same record.

use crate::types::EncryptionResult;

const DECRYPT_PROMPT_PREFIX: &str = "decrypt_";
const VERIFY_PROMPT_PREFIX: &str = "verify_";
const PROMPT_EXCERPT_CHARS: usize = 32;

pub fn encrypt_prompt(message: &str) -> Vec<u8> {
    message.as_bytes().to_vec()
}

pub fn decrypt_prompt(data: &EncryptionResult) -> Vec<u8> {
    format!("{}{}", DECRYPT_PROMPT_PREFIX, excerpt(&data.ciphertext)).into_bytes()
}

pub fn verify_prompt(data: &EncryptionResult) -> Vec<u8> {
    format!("{}{}", VERIFY_PROMPT_PREFIX, excerpt(&data.proof)).into_bytes()
}

fn excerpt(value: &str) -> &str {
    match value.char_indices().nth(PROMPT_EXCERPT_CHARS) {
        Some((end, _)) => &value[..end],
        None => value,
    }
}
