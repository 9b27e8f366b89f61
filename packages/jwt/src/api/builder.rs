//! JWT builder API
//!
//! ```no_run
//! # async fn run() -> devbox_jwt::JwtResult<()> {
//! use devbox_jwt::{Algorithm, Jwt};
//!
//! let token = Jwt::builder()
//!     .with_algorithm(Algorithm::HS256)
//!     .with_key("super-secret-key-1234567890")
//!     .expires_in("1h")
//!     .generate(r#"{"sub":"user123"}"#)
//!     .await?;
//!
//! let result = Jwt::builder()
//!     .with_key("super-secret-key-1234567890")
//!     .verify(&token)
//!     .await?;
//! assert!(result.signature_valid);
//! # Ok(())
//! # }
//! ```

use super::operations::JwtEngine;
use super::validation::AsyncJwtResult;
use crate::{algorithms::Algorithm, config::JwtConfig, types::VerificationResult};
use zeroize::Zeroizing;

/// Entry point for builder-style JWT operations
pub struct Jwt;

impl Jwt {
    /// Start a new builder
    #[inline]
    #[must_use]
    pub fn builder() -> JwtBuilder {
        JwtBuilder::new()
    }

    /// Decode a token without verifying it
    #[inline]
    #[must_use]
    pub fn decode(token: &str) -> VerificationResult {
        super::operations::decode(token)
    }
}

/// Collects the inputs of a generate or verify call
#[derive(Clone, Default)]
pub struct JwtBuilder {
    algorithm: Option<Algorithm>,
    key: Zeroizing<String>,
    header_json: Option<String>,
    expires_in: Option<String>,
    config: JwtConfig,
}

impl std::fmt::Debug for JwtBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtBuilder")
            .field("algorithm", &self.algorithm)
            .field("header_json", &self.header_json)
            .field("expires_in", &self.expires_in)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl JwtBuilder {
    /// Create new JWT builder
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Algorithm used by `generate` (HS256 when unset)
    #[inline]
    #[must_use]
    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = Some(algorithm);
        self
    }

    /// Secret for HS*, PKCS#8 PEM private key (generate) or SPKI PEM public key (verify) for RS*
    #[inline]
    #[must_use]
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Zeroizing::new(key.into());
        self
    }

    /// Extra header members as a JSON object
    #[inline]
    #[must_use]
    pub fn with_header(mut self, header_json: impl Into<String>) -> Self {
        self.header_json = Some(header_json.into());
        self
    }

    /// Relative expiry such as `"30m"` or `"2 days"`
    #[inline]
    #[must_use]
    pub fn expires_in(mut self, span: impl Into<String>) -> Self {
        self.expires_in = Some(span.into());
        self
    }

    /// Engine configuration
    #[inline]
    #[must_use]
    pub fn with_config(mut self, config: JwtConfig) -> Self {
        self.config = config;
        self
    }

    /// Algorithm `generate` will use
    #[must_use]
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm.unwrap_or(Algorithm::HS256)
    }

    /// Sign `payload_json`
    pub fn generate(self, payload_json: &str) -> AsyncJwtResult<String> {
        let algorithm = self.algorithm();
        JwtEngine::new(self.config).generate(
            algorithm,
            &self.key,
            payload_json,
            self.header_json.as_deref(),
            self.expires_in.as_deref(),
        )
    }

    /// Verify `token`; the algorithm comes from the token header
    pub fn verify(self, token: &str) -> AsyncJwtResult<VerificationResult> {
        JwtEngine::new(self.config).verify(token, &self.key)
    }
}
