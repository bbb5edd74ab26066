pub mod cipher;
pub mod commitment;
pub mod error;
pub mod kdf;
pub mod proof;
pub mod random;
pub mod signing;
pub mod types;

pub use cipher::{open, open_text, seal, seal_text};
pub use commitment::commit;
pub use error::CryptoError;
pub use kdf::{derive_key, derive_key_with_iterations, DerivedKey};
pub use proof::{challenge, proofs_match, prove, recompute_for_verify};
pub use random::{generate_iv, generate_randomness, generate_salt, random_bytes};
pub use signing::{
    generate_signing_key, public_key_hex, sign_hex, signing_key_from_hex, verify_hex,
};
pub use types::{
    AES_BLOCK_SIZE, AES_KEY_LENGTH, CBC_IV_LENGTH, PBKDF2_ITERATIONS, RANDOMNESS_LENGTH,
    SALT_LENGTH,
};
