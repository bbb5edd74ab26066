use thiserror::Error;

#[derive(Debug, Error)]
pub enum CryptoError {
    #[error("Invalid IV length: expected {expected} bytes, got {got}")]
    InvalidIvLength { expected: usize, got: usize },

    #[error("Invalid hex in {field}")]
    InvalidHex { field: &'static str },

    #[error("Invalid PBKDF2 iteration count: must be positive")]
    InvalidIterations,

    #[error("{0}")]
    EncryptionFailed(String),

    /// Deliberately carries no detail: padding, length, encoding and
    /// wrong-key failures must be indistinguishable.
    #[error("Decryption failed")]
    DecryptionFailed,

    #[error("Signing failed: {0}")]
    SigningFailed(String),

    #[error("Invalid public key: {0}")]
    InvalidPublicKey(String),

    #[error("Random number generation failed: {0}")]
    RngFailed(String),
}
