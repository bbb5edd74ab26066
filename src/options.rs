//! Service configuration.
//!
//! Every field is optional; `None` means "use the default". Options can be
//! built in code or loaded from JSON.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use zke_crypto::PBKDF2_ITERATIONS;

use crate::error::ConfigError;

/// Which proof construction `encrypt` stores and `verify` checks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProofMode {
    /// Five-field records. The stored proof folds in randomness that is then
    /// discarded, while verify substitutes the derived key for it, so
    /// verification of genuine records returns `false`.
    #[default]
    Legacy,
    /// Records also carry the randomness and the encrypt-time signature, and
    /// verify recomputes commitment, challenge and proof from them.
    Bound,
}

/// Configuration for `EncryptionService` and `Session`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EncrypterOptions {
    /// PBKDF2 iteration count (default: 10,000)
    pub kdf_iterations: Option<u32>,
    /// Proof construction (default: `Legacy`)
    pub proof_mode: Option<ProofMode>,
    /// Upper bound on waiting for the signer, in milliseconds (default: wait forever)
    pub sign_timeout_ms: Option<u64>,
}

impl EncrypterOptions {
    /// Parse and validate options from JSON.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let options: Self = serde_json::from_str(json)?;
        options.validate()?;
        Ok(options)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.kdf_iterations == Some(0) {
            return Err(ConfigError::ZeroIterations);
        }
        if self.sign_timeout_ms == Some(0) {
            return Err(ConfigError::ZeroTimeout);
        }
        Ok(())
    }

    pub fn kdf_iterations(&self) -> u32 {
        self.kdf_iterations.unwrap_or(PBKDF2_ITERATIONS)
    }

    pub fn proof_mode(&self) -> ProofMode {
        self.proof_mode.unwrap_or_default()
    }

    pub fn sign_timeout(&self) -> Option<Duration> {
        self.sign_timeout_ms.map(Duration::from_millis)
    }
}
