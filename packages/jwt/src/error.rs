//! JWT error types

use thiserror::Error;

/// JWT operation result type
pub type JwtResult<T> = Result<T, JwtError>;

/// JWT error types
///
/// `generate` surfaces these directly. `verify` and `decode` fold them into a
/// [`crate::VerificationResult`], using the `Display` text as its `error`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum JwtError {
    /// Token does not split into three non-empty segments, or a segment is unreadable
    #[error("Invalid JWT format")]
    TokenFormat,
    /// Header or payload is not valid JSON (or not a JSON object)
    #[error("{0}")]
    JsonParse(String),
    /// Header has no `alg` member
    #[error("Missing algorithm in header")]
    MissingAlgorithm,
    /// `alg` names an algorithm outside HS256/384/512 and RS256/384/512
    #[error("Unsupported algorithm: {0}")]
    UnsupportedAlgorithm(String),
    /// Bad PEM, or key material that does not fit the algorithm family
    #[error("{0}")]
    KeyFormat(String),
    /// Signature does not match the signing input
    #[error("signature verification failed")]
    SignatureInvalid,
    /// `exp` claim is in the past
    #[error("\"exp\" claim timestamp check failed")]
    Expired,
    /// Input is not base64url
    #[error("Invalid base64url: {0}")]
    Decode(String),
    /// `expires_in` does not follow the time-span grammar
    #[error("Invalid time period format: {0}")]
    InvalidExpiry(String),
    /// The signing primitive itself failed
    #[error("Signing error: {0}")]
    Signing(String),
    /// A JSON value could not be serialized
    #[error("Serialization error: {0}")]
    Serialization(String),
    /// Background task ended before producing a result
    #[error("Background task failed")]
    TaskFailed,
}

impl JwtError {
    /// Create a JSON parse error
    #[inline]
    #[must_use]
    pub fn json_parse(msg: &str) -> Self {
        JwtError::JsonParse(msg.to_string())
    }

    /// Create an unsupported algorithm error
    #[inline]
    #[must_use]
    pub fn unsupported_algorithm(alg: &str) -> Self {
        JwtError::UnsupportedAlgorithm(alg.to_string())
    }

    /// Create a key format error
    #[inline]
    #[must_use]
    pub fn key_format(msg: &str) -> Self {
        JwtError::KeyFormat(msg.to_string())
    }

    /// Create a codec error
    #[inline]
    #[must_use]
    pub fn decode(msg: &str) -> Self {
        JwtError::Decode(msg.to_string())
    }

    /// Create an invalid expiry error
    #[inline]
    #[must_use]
    pub fn invalid_expiry(input: &str) -> Self {
        JwtError::InvalidExpiry(input.to_string())
    }

    /// Create a signing error
    #[inline]
    #[must_use]
    pub fn signing(msg: &str) -> Self {
        JwtError::Signing(msg.to_string())
    }

    /// Create a serialization error
    #[inline]
    #[must_use]
    pub fn serialization(msg: &str) -> Self {
        JwtError::Serialization(msg.to_string())
    }
}
