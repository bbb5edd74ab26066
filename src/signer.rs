//! External message-signing capability.

use async_trait::async_trait;
use zke_crypto::signing::{
    generate_signing_key, public_key_hex, sign_hex, signing_key_from_hex, SigningKey,
};
use zke_crypto::CryptoError;

use crate::error::SignerError;

/// User-provided signer (typically a browser wallet).
///
/// Given prompt bytes, returns a hex-encoded signature. May wait
/// indefinitely on user interaction; fails when no wallet is connected or
/// the user rejects the request.
#[async_trait]
pub trait MessageSigner: Send + Sync {
    async fn sign_message(&self, prompt: &[u8]) -> Result<String, SignerError>;
}

/// In-process P-256 signer. Signatures are deterministic per prompt.
pub struct LocalSigner {
    key: SigningKey,
}

impl LocalSigner {
    /// Create a signer with a freshly generated key.
    pub fn generate() -> Result<Self, CryptoError> {
        Ok(Self {
            key: generate_signing_key()?,
        })
    }

    /// Create a signer from a 32-byte hex private scalar.
    pub fn from_hex(scalar_hex: &str) -> Result<Self, CryptoError> {
        Ok(Self {
            key: signing_key_from_hex(scalar_hex)?,
        })
    }

    /// Compressed SEC1 public key, hex.
    pub fn public_key_hex(&self) -> String {
        public_key_hex(&self.key)
    }
}

impl std::fmt::Debug for LocalSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocalSigner")
            .field("public_key", &self.public_key_hex())
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl MessageSigner for LocalSigner {
    async fn sign_message(&self, prompt: &[u8]) -> Result<String, SignerError> {
        sign_hex(&self.key, prompt).map_err(|e| SignerError::Rejected(e.to_string()))
    }
}
