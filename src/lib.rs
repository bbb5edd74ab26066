//! Password- and wallet-signature-bound encryption with a commitment,
//! challenge and proof over each ciphertext.

pub mod error;
pub mod options;
pub mod prompt;
pub mod service;
pub mod session;
pub mod signer;
pub mod types;

pub use error::{ConfigError, EncryptError, SessionError, SignerError};
pub use options::{EncrypterOptions, ProofMode};
pub use prompt::{decrypt_prompt, encrypt_prompt, verify_prompt};
pub use service::EncryptionService;
pub use session::Session;
pub use signer::{LocalSigner, MessageSigner};
pub use types::{DecryptOutcome, EncryptionResult, DECRYPTION_FAILED_MESSAGE};
