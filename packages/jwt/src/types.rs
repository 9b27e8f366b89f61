//! JWT type definitions

use crate::error::{JwtError, JwtResult};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// JOSE header, members kept in insertion order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JwtHeader(Map<String, Value>);

impl JwtHeader {
    /// Empty header
    #[must_use]
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// `alg` member, when it is a string
    #[must_use]
    pub fn alg(&self) -> Option<&str> {
        self.0.get("alg").and_then(Value::as_str)
    }

    /// `typ` member, when it is a string
    #[must_use]
    pub fn typ(&self) -> Option<&str> {
        self.0.get("typ").and_then(Value::as_str)
    }

    /// Any header member
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    /// Set a member, keeping its position if it already exists
    pub fn insert(&mut self, name: impl Into<String>, value: Value) {
        self.0.insert(name.into(), value);
    }

    /// Borrow the members
    #[must_use]
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }
}

impl From<Map<String, Value>> for JwtHeader {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl From<JwtHeader> for Value {
    fn from(header: JwtHeader) -> Self {
        Value::Object(header.0)
    }
}

/// The three base64url segments of a compact token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenParts<'a> {
    /// Encoded header
    pub header: &'a str,
    /// Encoded payload
    pub payload: &'a str,
    /// Encoded signature
    pub signature: &'a str,
}

impl<'a> TokenParts<'a> {
    /// Split a compact token into exactly three non-empty segments
    ///
    /// # Errors
    /// Returns `JwtError::TokenFormat` for any other shape
    pub fn split(token: &'a str) -> JwtResult<Self> {
        let mut segments = token.split('.');
        match (
            segments.next(),
            segments.next(),
            segments.next(),
            segments.next(),
        ) {
            (Some(header), Some(payload), Some(signature), None)
                if !header.is_empty() && !payload.is_empty() && !signature.is_empty() =>
            {
                Ok(Self {
                    header,
                    payload,
                    signature,
                })
            }
            _ => Err(JwtError::TokenFormat),
        }
    }

    /// ASCII bytes the signature is computed over
    #[must_use]
    pub fn signing_input(&self) -> String {
        signing_input(self.header, self.payload)
    }
}

/// `header "." payload`
pub(crate) fn signing_input(header: &str, payload: &str) -> String {
    let mut input = String::with_capacity(header.len() + 1 + payload.len());
    input.push_str(header);
    input.push('.');
    input.push_str(payload);
    input
}

/// Append the encoded signature to a signing input, producing the wire form
pub(crate) fn assemble(signing_input: String, signature: &str) -> String {
    let mut token = signing_input;
    token.reserve(1 + signature.len());
    token.push('.');
    token.push_str(signature);
    token
}

/// Outcome of `verify` and `decode`
///
/// Always produced, even for malformed tokens. For `decode`, both flags are
/// `false` and mean "not checked".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationResult {
    /// Decoded header, `None` when the token is malformed
    pub header: Option<JwtHeader>,
    /// Decoded claims object, `None` when the token is malformed
    pub payload: Option<Value>,
    /// Signature checked and valid, and the token is not expired
    pub signature_valid: bool,
    /// `exp` claim is in the past
    pub expired: bool,
    /// Human-readable reason when the token is not valid
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl VerificationResult {
    /// Result for a token that could not be split or decoded
    #[must_use]
    pub fn malformed() -> Self {
        Self {
            error: Some(JwtError::TokenFormat.to_string()),
            ..Self::default()
        }
    }

    /// Decoded but not (yet) checked
    #[must_use]
    pub fn decoded(header: JwtHeader, payload: Value) -> Self {
        Self {
            header: Some(header),
            payload: Some(payload),
            ..Self::default()
        }
    }

    /// Record a failure, leaving `signature_valid` false
    #[must_use]
    pub fn with_error(mut self, error: &JwtError) -> Self {
        self.signature_valid = false;
        self.error = Some(error.to_string());
        self
    }

    /// Look up a payload claim
    #[must_use]
    pub fn claim(&self, name: &str) -> Option<&Value> {
        self.payload.as_ref().and_then(|payload| payload.get(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_accepts_three_segments() {
        let parts = TokenParts::split("aGVhZA.Ym9keQ.c2ln").expect("three segments");
        assert_eq!(parts.header, "aGVhZA");
        assert_eq!(parts.signing_input(), "aGVhZA.Ym9keQ");
        assert_eq!(assemble(parts.signing_input(), parts.signature), "aGVhZA.Ym9keQ.c2ln");
    }

    #[test]
    fn split_rejects_other_shapes() {
        for token in ["", "a.b", "a.b.c.d", "a..c", ".b.c", "a.b.", "abc"] {
            assert_eq!(TokenParts::split(token), Err(JwtError::TokenFormat), "{token}");
        }
    }

    #[test]
    fn result_serializes_camel_case_without_empty_error() {
        let json = serde_json::to_value(VerificationResult::default()).expect("serializes");
        assert_eq!(
            json,
            serde_json::json!({
                "header": null,
                "payload": null,
                "signatureValid": false,
                "expired": false
            })
        );
    }
}
