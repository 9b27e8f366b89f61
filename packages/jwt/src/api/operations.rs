//! Functional entry points: generate, verify, decode
//!
//! Each call resolves its own key material and keeps nothing afterwards, so
//! concurrent calls never interact.

use super::algorithms::{GenerateRequest, decode_token, generate_token, verify_token};
use super::validation::AsyncJwtResult;
use crate::{algorithms::Algorithm, config::JwtConfig, types::VerificationResult};
use zeroize::Zeroizing;

/// JWT engine bound to a configuration
#[derive(Debug, Clone, Default)]
pub struct JwtEngine {
    config: JwtConfig,
}

impl JwtEngine {
    /// Engine with the given configuration
    #[must_use]
    pub fn new(config: JwtConfig) -> Self {
        Self { config }
    }

    /// Active configuration
    #[must_use]
    pub fn config(&self) -> &JwtConfig {
        &self.config
    }

    /// Sign `payload_json` into a compact token
    ///
    /// `header_json` members are merged after `alg`; `expires_in` (e.g. `"2h"`)
    /// sets `exp` relative to now. `iat` is always set.
    ///
    /// The returned future resolves to `Err` for malformed JSON
    /// (`JsonParse`), an unusable key (`KeyFormat`), a bad time span
    /// (`InvalidExpiry`) or a backend failure. No partial token is produced.
    pub fn generate(
        &self,
        algorithm: Algorithm,
        key: &str,
        payload_json: &str,
        header_json: Option<&str>,
        expires_in: Option<&str>,
    ) -> AsyncJwtResult<String> {
        let config = self.config.clone();
        let key = Zeroizing::new(key.to_string());
        let payload_json = payload_json.to_string();
        let header_json = header_json.map(str::to_string);
        let expires_in = expires_in.map(str::to_string);

        AsyncJwtResult::spawn(move || {
            let request = GenerateRequest {
                algorithm,
                key: &key,
                payload_json: &payload_json,
                header_json: header_json.as_deref(),
                expires_in: expires_in.as_deref(),
            };
            generate_token(request, &config)
        })
    }

    /// Verify `token` with a secret (HS*) or SPKI PEM public key (RS*)
    ///
    /// Content problems are reported inside the [`VerificationResult`]; the
    /// future only resolves to `Err(JwtError::TaskFailed)` when the worker
    /// dies or no Tokio runtime is running.
    pub fn verify(&self, token: &str, key: &str) -> AsyncJwtResult<VerificationResult> {
        let config = self.config.clone();
        let token = token.to_string();
        let key = Zeroizing::new(key.to_string());
        AsyncJwtResult::spawn(move || Ok(verify_token(&token, &key, &config)))
    }

    /// Decode header and payload without any cryptographic check
    #[must_use]
    pub fn decode(&self, token: &str) -> VerificationResult {
        decode_token(token)
    }
}

/// [`JwtEngine::generate`] with the default configuration
pub fn generate(
    algorithm: Algorithm,
    key: &str,
    payload_json: &str,
    header_json: Option<&str>,
    expires_in: Option<&str>,
) -> AsyncJwtResult<String> {
    JwtEngine::default().generate(algorithm, key, payload_json, header_json, expires_in)
}

/// [`JwtEngine::verify`] with the default configuration
pub fn verify(token: &str, key: &str) -> AsyncJwtResult<VerificationResult> {
    JwtEngine::default().verify(token, key)
}

/// Decode-only: `signature_valid` and `expired` are always `false`
#[must_use]
pub fn decode(token: &str) -> VerificationResult {
    decode_token(token)
}
