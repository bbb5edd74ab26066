//! Encrypt, decrypt and verify orchestration.
//!
//! encrypt: salt, iv, randomness → key → commitment → AES-CBC → challenge → proof
//! decrypt: key(salt) → AES-CBC open → UTF-8 text
//! verify:  key(salt) → challenge → decrypt == message → proof comparison
//!
//! All operations are synchronous and pure over their inputs. `decrypt` and
//! `verify` never return errors; failures are reported in-band and the
//! specific cause is only logged.

use tracing::{debug, warn};
use zeroize::Zeroizing;
use zke_crypto::{
    challenge, commit, derive_key_with_iterations, generate_iv, generate_randomness,
    generate_salt, open_text, proofs_match, prove, recompute_for_verify, seal_text, CryptoError,
    DerivedKey,
};

use crate::error::{ConfigError, EncryptError};
use crate::options::{EncrypterOptions, ProofMode};
use crate::types::{DecryptOutcome, EncryptionResult};

/// Password- and signature-bound encryption service.
#[derive(Debug, Clone)]
pub struct EncryptionService {
    iterations: u32,
    proof_mode: ProofMode,
}

impl Default for EncryptionService {
    fn default() -> Self {
        let options = EncrypterOptions::default();
        Self {
            iterations: options.kdf_iterations(),
            proof_mode: options.proof_mode(),
        }
    }
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

impl EncryptionService {
    pub fn new(options: &EncrypterOptions) -> Result<Self, ConfigError> {
        options.validate()?;
        Ok(Self {
            iterations: options.kdf_iterations(),
            proof_mode: options.proof_mode(),
        })
    }

    pub fn proof_mode(&self) -> ProofMode {
        self.proof_mode
    }

    /// Encrypt `message` under `password`, bound to the signer's `signature`.
    ///
    /// Each argument must be non-empty after trimming. Salt, IV and
    /// commitment randomness are sampled fresh on every call.
    pub fn encrypt(
        &self,
        message: &str,
        password: &str,
        signature: &str,
    ) -> Result<EncryptionResult, EncryptError> {
        if is_blank(message) || is_blank(password) || is_blank(signature) {
            warn!("encrypt rejected: message, password, or signature missing");
            return Err(EncryptError::MissingInput);
        }
        debug!(mode = ?self.proof_mode, len = message.len(), "encrypting message");
        let result = self.seal_record(message, password, signature)?;
        debug!("encryption complete");
        Ok(result)
    }

    /// Decrypt a record. Any failure yields the generic error outcome.
    pub fn decrypt(
        &self,
        data: &EncryptionResult,
        password: &str,
        signature: &str,
    ) -> DecryptOutcome {
        if is_blank(password) || is_blank(signature) {
            warn!("decrypt rejected: password or signature missing");
            return DecryptOutcome::failed();
        }
        let opened = self
            .derive(password, &data.salt)
            .and_then(|key| self.open_record(data, &key));
        match opened {
            Ok(message) => DecryptOutcome::ok(message),
            Err(e) => {
                debug!(error = %e, "decryption failed");
                DecryptOutcome::failed()
            }
        }
    }

    /// Check that a record decrypts to `message` and that its proof matches.
    ///
    /// In `ProofMode::Legacy` the recomputed proof uses the derived key where
    /// the stored proof used the discarded randomness, so genuine records do
    /// not verify. Every internal fault maps to `false`.
    pub fn verify(
        &self,
        data: &EncryptionResult,
        password: &str,
        message: &str,
        signature: &str,
    ) -> bool {
        if is_blank(password) || is_blank(message) || is_blank(signature) {
            warn!("verify rejected: password, message, or signature missing");
            return false;
        }
        let checked = match self.proof_mode {
            ProofMode::Legacy => self.verify_legacy(data, password, message, signature),
            ProofMode::Bound => self.verify_bound(data, password, message),
        };
        match checked {
            Ok(verified) => {
                debug!(verified, mode = ?self.proof_mode, "proof checked");
                verified
            }
            Err(e) => {
                debug!(error = %e, "verification aborted");
                false
            }
        }
    }

    fn derive(&self, password: &str, salt: &str) -> Result<DerivedKey, CryptoError> {
        derive_key_with_iterations(password, salt, self.iterations)
    }

    fn seal_record(
        &self,
        message: &str,
        password: &str,
        signature: &str,
    ) -> Result<EncryptionResult, CryptoError> {
        let salt = generate_salt()?;
        let iv = generate_iv()?;
        let randomness = Zeroizing::new(generate_randomness()?);
        let key = self.derive(password, &salt)?;

        let commitment = commit(message, &randomness, signature);
        let ciphertext = seal_text(message, &key, &iv)?;
        let challenge = challenge(&commitment, &ciphertext, signature);
        let proof = prove(&challenge, &randomness, signature, &key)?;

        let (randomness, binding_signature) = match self.proof_mode {
            ProofMode::Legacy => (None, None),
            ProofMode::Bound => (Some(randomness.as_str().to_owned()), Some(signature.to_owned())),
        };

        Ok(EncryptionResult {
            ciphertext,
            salt,
            iv,
            commitment,
            proof,
            randomness,
            binding_signature,
        })
    }

    fn open_record(
        &self,
        data: &EncryptionResult,
        key: &DerivedKey,
    ) -> Result<String, CryptoError> {
        let message = open_text(&data.ciphertext, key, &data.iv)?;
        if message.is_empty() {
            return Err(CryptoError::DecryptionFailed);
        }
        Ok(message)
    }

    fn verify_legacy(
        &self,
        data: &EncryptionResult,
        password: &str,
        message: &str,
        signature: &str,
    ) -> Result<bool, CryptoError> {
        let key = self.derive(password, &data.salt)?;
        let challenge = challenge(&data.commitment, &data.ciphertext, signature);

        if self.open_record(data, &key)? != message {
            return Ok(false);
        }

        let expected = recompute_for_verify(&challenge, &key, signature)?;
        Ok(proofs_match(&data.proof, &expected))
    }

    /// Symmetric check against the persisted randomness and encrypt-time
    /// signature. The verify-time signature only gates the call: wallet
    /// signatures differ per prompt, so it cannot be folded in.
    fn verify_bound(
        &self,
        data: &EncryptionResult,
        password: &str,
        message: &str,
    ) -> Result<bool, CryptoError> {
        let (Some(randomness), Some(binding)) =
            (data.randomness.as_deref(), data.binding_signature.as_deref())
        else {
            debug!("record carries no binding material");
            return Ok(false);
        };

        let commitment = commit(message, randomness, binding);
        if !proofs_match(&data.commitment, &commitment) {
            return Ok(false);
        }

        let key = self.derive(password, &data.salt)?;
        if self.open_record(data, &key)? != message {
            return Ok(false);
        }

        let challenge = challenge(&data.commitment, &data.ciphertext, binding);
        let expected = prove(&challenge, randomness, binding, &key)?;
        Ok(proofs_match(&data.proof, &expected))
    }
}
