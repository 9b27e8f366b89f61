//! Base64url codec for token segments (RFC 7515)
//!
//! Output never carries `=` padding. Input is accepted with or without it.

use crate::error::{JwtError, JwtResult};
use base64::{
    Engine as _, alphabet,
    engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig},
};
use serde_json::Value;

const SEGMENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new()
        .with_encode_padding(false)
        .with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Base64 URL-safe encoding without padding
#[inline]
#[must_use]
pub fn base64_url_encode(input: &[u8]) -> String {
    SEGMENT.encode(input)
}

/// Base64 URL-safe decoding, padding optional
///
/// # Errors
/// Returns `JwtError::Decode` on characters outside the base64url alphabet
pub fn base64_url_decode(input: &str) -> JwtResult<Vec<u8>> {
    SEGMENT
        .decode(input)
        .map_err(|e| JwtError::decode(&e.to_string()))
}

/// Serialize a JSON value and encode it as a segment
///
/// # Errors
/// Returns `JwtError::Serialization` if the value cannot be written
pub fn encode_json(value: &Value) -> JwtResult<String> {
    let json = serde_json::to_vec(value).map_err(|e| JwtError::serialization(&e.to_string()))?;
    Ok(base64_url_encode(&json))
}

/// Decode a segment holding a JSON object
///
/// # Errors
/// Returns `JwtError::Decode` for bad base64url and `JwtError::JsonParse`
/// when the bytes are not a JSON object
pub fn decode_json_object(segment: &str) -> JwtResult<serde_json::Map<String, Value>> {
    let bytes = base64_url_decode(segment)?;
    match serde_json::from_slice(&bytes) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(_) => Err(JwtError::json_parse("Segment is not a JSON object")),
        Err(e) => Err(JwtError::JsonParse(e.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn encodes_url_safe_without_padding() {
        assert_eq!(base64_url_encode(&[0xfb, 0xff]), "-_8");
        assert_eq!(base64_url_encode(b"a"), "YQ");
    }

    #[test]
    fn decodes_with_or_without_padding() {
        assert_eq!(base64_url_decode("YQ").expect("unpadded"), b"a");
        assert_eq!(base64_url_decode("YQ==").expect("padded"), b"a");
        assert_eq!(base64_url_decode("-_8").expect("url alphabet"), vec![0xfb, 0xff]);
    }

    #[test]
    fn rejects_characters_outside_alphabet() {
        assert!(matches!(base64_url_decode("+/8"), Err(JwtError::Decode(_))));
        assert!(matches!(base64_url_decode("a b"), Err(JwtError::Decode(_))));
    }

    #[test]
    fn json_segment_must_be_an_object() {
        let segment = encode_json(&json!({"alg": "HS256", "typ": "JWT"})).expect("encodes");
        assert_eq!(segment, "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9");
        let map = decode_json_object(&segment).expect("object");
        assert_eq!(map.get("alg"), Some(&json!("HS256")));

        let array = encode_json(&json!([1, 2])).expect("encodes");
        assert!(matches!(decode_json_object(&array), Err(JwtError::JsonParse(_))));
        let text = base64_url_encode(b"not json");
        assert!(matches!(decode_json_object(&text), Err(JwtError::JsonParse(_))));
    }
}
