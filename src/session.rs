//! Signer-driven workflow: obtain a signature for each operation's prompt,
//! then run the synchronous service.
//!
//! The signer call is the only suspension point. An optional timeout bounds
//! it; the crypto core itself never retries or times out.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, warn};

use crate::error::{ConfigError, SessionError};
use crate::options::EncrypterOptions;
use crate::prompt::{decrypt_prompt, encrypt_prompt, verify_prompt};
use crate::service::EncryptionService;
use crate::signer::MessageSigner;
use crate::types::EncryptionResult;

pub struct Session {
    signer: Arc<dyn MessageSigner>,
    service: EncryptionService,
    sign_timeout: Option<Duration>,
}

impl Session {
    pub fn new(
        signer: Arc<dyn MessageSigner>,
        options: &EncrypterOptions,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            signer,
            service: EncryptionService::new(options)?,
            sign_timeout: options.sign_timeout(),
        })
    }

    /// Session with a prebuilt service and no signing timeout.
    pub fn with_service(signer: Arc<dyn MessageSigner>, service: EncryptionService) -> Self {
        Self {
            signer,
            service,
            sign_timeout: None,
        }
    }

    pub fn service(&self) -> &EncryptionService {
        &self.service
    }

    /// Sign the message, then encrypt its trimmed form under the trimmed password.
    pub async fn encrypt(
        &self,
        message: &str,
        password: &str,
    ) -> Result<EncryptionResult, SessionError> {
        if message.trim().is_empty() || password.trim().is_empty() {
            return Err(SessionError::MissingInput("both message and password are required"));
        }
        let signature = self.sign(&encrypt_prompt(message)).await?;
        Ok(self
            .service
            .encrypt(message.trim(), password.trim(), &signature)?)
    }

    /// Sign the decrypt prompt, then decrypt. Returns the plaintext.
    pub async fn decrypt(
        &self,
        data: &EncryptionResult,
        password: &str,
    ) -> Result<String, SessionError> {
        if password.trim().is_empty() {
            return Err(SessionError::MissingInput("no encrypted data or password provided"));
        }
        let signature = self.sign(&decrypt_prompt(data)).await?;
        self.service
            .decrypt(data, password.trim(), &signature)
            .into_result()
            .map_err(SessionError::Decrypt)
    }

    /// Sign the verify prompt, then verify. Only signer and input failures
    /// are errors; a failed proof is `Ok(false)`.
    pub async fn verify(
        &self,
        data: &EncryptionResult,
        password: &str,
        message: &str,
    ) -> Result<bool, SessionError> {
        if password.trim().is_empty() || message.trim().is_empty() {
            return Err(SessionError::MissingInput("missing required data for verification"));
        }
        let signature = self.sign(&verify_prompt(data)).await?;
        Ok(self
            .service
            .verify(data, password.trim(), message.trim(), &signature))
    }

    async fn sign(&self, prompt: &[u8]) -> Result<String, SessionError> {
        debug!(prompt_len = prompt.len(), "requesting signature");
        let request = self.signer.sign_message(prompt);
        let signed = match self.sign_timeout {
            Some(limit) => match tokio::time::timeout(limit, request).await {
                Ok(signed) => signed,
                Err(_) => {
                    warn!(?limit, "signer did not respond in time");
                    return Err(SessionError::SignTimeout(limit));
                }
            },
            None => request.await,
        };
        signed.map_err(|e| {
            warn!(error = %e, "signer failed");
            SessionError::from(e)
        })
    }
}
