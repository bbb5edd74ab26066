//! Records produced and consumed by the encryption service.

use serde::{Deserialize, Serialize};

/// Error text returned for every decryption failure. The specific cause is
/// never exposed.
pub const DECRYPTION_FAILED_MESSAGE: &str = "decryption failed: invalid password or corrupted data";

/// Output of `encrypt`; input to `decrypt` and `verify`.
///
/// All fields are opaque text. `ciphertext` is base64, the rest are
/// lower-case hex.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncryptionResult {
    pub ciphertext: String,
    /// 16 random bytes, hex. Fresh per encryption.
    pub salt: String,
    /// 16 random bytes, hex. Fresh per encryption.
    pub iv: String,
    /// SHA-256 over message, randomness and signature.
    pub commitment: String,
    /// HMAC-SHA256 over the challenge, keyed by the derived key.
    pub proof: String,
    /// Commitment randomness. Only persisted in `ProofMode::Bound`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub randomness: Option<String>,
    /// Signature used at encrypt time. Only persisted in `ProofMode::Bound`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub binding_signature: Option<String>,
}

impl EncryptionResult {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Result of `decrypt`. Never an error: failure is reported in-band.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecryptOutcome {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl DecryptOutcome {
    pub fn ok(message: String) -> Self {
        Self {
            success: true,
            message: Some(message),
            error: None,
        }
    }

    pub fn failed() -> Self {
        Self {
            success: false,
            message: None,
            error: Some(DECRYPTION_FAILED_MESSAGE.to_string()),
        }
    }

    /// Plaintext on success, the error text otherwise.
    pub fn into_result(self) -> Result<String, String> {
        match (self.success, self.message) {
            (true, Some(message)) => Ok(message),
            _ => Err(self
                .error
                .unwrap_or_else(|| DECRYPTION_FAILED_MESSAGE.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn sample() -> EncryptionResult {
        EncryptionResult {
            ciphertext: "q83vEjRWeJA=".into(),
            salt: "00".repeat(16),
            iv: "11".repeat(16),
            commitment: "22".repeat(32),
            proof: "33".repeat(32),
            randomness: None,
            binding_signature: None,
        }
    }

    #[test]
    fn legacy_record_serializes_five_fields() {
        let value: Value = serde_json::from_str(&sample().to_json().unwrap()).unwrap();
        let obj = value.as_object().unwrap();
        let mut keys: Vec<&str> = obj.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(keys, ["ciphertext", "commitment", "iv", "proof", "salt"]);
    }

    #[test]
    fn json_round_trip_with_bound_fields() {
        let mut record = sample();
        record.randomness = Some("44".repeat(32));
        record.binding_signature = Some("aa11".into());
        let parsed = EncryptionResult::from_json(&record.to_json().unwrap()).unwrap();
        assert_eq!(parsed, record);
    }

    #[test]
    fn parses_five_field_json() {
        let json = json!({
            "ciphertext": "abc=",
            "salt": "s",
            "iv": "i",
            "commitment": "c",
            "proof": "p",
        })
        .to_string();
        let parsed = EncryptionResult::from_json(&json).unwrap();
        assert_eq!(parsed.proof, "p");
        assert!(parsed.randomness.is_none());
    }

    #[test]
    fn rejects_missing_field() {
        let json = json!({ "ciphertext": "abc=", "salt": "s" }).to_string();
        assert!(EncryptionResult::from_json(&json).is_err());
    }

    #[test]
    fn outcome_serialization_skips_absent_fields() {
        let ok = serde_json::to_value(DecryptOutcome::ok("hi".into())).unwrap();
        assert_eq!(ok, json!({ "success": true, "message": "hi" }));
        let failed = serde_json::to_value(DecryptOutcome::failed()).unwrap();
        assert_eq!(
            failed,
            json!({ "success": false, "error": DECRYPTION_FAILED_MESSAGE })
        );
    }

    #[test]
    fn outcome_into_result() {
        assert_eq!(DecryptOutcome::ok("m".into()).into_result(), Ok("m".to_string()));
        assert_eq!(
            DecryptOutcome::failed().into_result(),
            Err(DECRYPTION_FAILED_MESSAGE.to_string())
        );
    }
}
