use std::time::Duration;

use thiserror::Error;
use zke_crypto::CryptoError;

/// Failure of [`EncryptionService::encrypt`](crate::service::EncryptionService::encrypt).
#[derive(Debug, Error)]
pub enum EncryptError {
    #[error("message, password, and signature are required")]
    MissingInput,

    #[error("encryption failed: {0}")]
    Failed(#[from] CryptoError),
}

/// Failure reported by an external message signer (wallet).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SignerError {
    #[error("wallet not connected")]
    NotConnected,

    #[error("failed to sign message: {0}")]
    Rejected(String),
}

/// Failure of a signer-driven [`Session`](crate::session::Session) operation.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("{0}")]
    MissingInput(&'static str),

    #[error("signer error: {0}")]
    Signer(#[from] SignerError),

    #[error("signing timed out after {0:?}")]
    SignTimeout(Duration),

    #[error(transparent)]
    Encrypt(#[from] EncryptError),

    /// Carries the generic decryption message only.
    #[error("{0}")]
    Decrypt(String),
}

/// Invalid [`EncrypterOptions`](crate::options::EncrypterOptions).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid options JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("kdf_iterations must be a positive integer")]
    ZeroIterations,

    #[error("sign_timeout_ms must be a positive integer")]
    ZeroTimeout,
}
