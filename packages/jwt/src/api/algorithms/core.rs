//! JWT core operations: generate, verify and decode
//!
//! These run synchronously; `api::operations` moves them onto blocking
//! workers.

use super::hmac::{sign_hmac, verify_hmac};
use super::rsa::{sign_rsa, verify_rsa};
use super::utils::{base64_url_decode, base64_url_encode, decode_json_object, encode_json};
use crate::{
    algorithms::Algorithm,
    api::claims::{is_expired, parse_time_span, unix_now},
    api::keys::{KeyMaterial, KeyPurpose, resolve},
    config::JwtConfig,
    error::{JwtError, JwtResult},
    types::{JwtHeader, TokenParts, VerificationResult, assemble, signing_input},
};
use serde_json::{Map, Value};

/// Inputs of a generate call, as supplied by the caller
#[derive(Debug, Clone, Copy)]
pub(crate) struct GenerateRequest<'a> {
    pub algorithm: Algorithm,
    pub key: &'a str,
    pub payload_json: &'a str,
    pub header_json: Option<&'a str>,
    pub expires_in: Option<&'a str>,
}

/// Produce a signature over `message`
///
/// # Errors
/// Returns `JwtError::KeyFormat` when `key` does not belong to the algorithm family
pub(crate) fn sign(algorithm: Algorithm, key: KeyMaterial, message: &[u8]) -> JwtResult<Vec<u8>> {
    match (algorithm, key) {
        (Algorithm::Hmac(hash), KeyMaterial::SymmetricSecret(secret)) => {
            sign_hmac(hash, message, &secret)
        }
        (Algorithm::RsaPkcs1(hash), KeyMaterial::RsaPrivateKey { key, hash: bound })
            if hash == bound =>
        {
            sign_rsa(hash, message, key)
        }
        (algorithm, _) => Err(JwtError::KeyFormat(format!(
            "Key is not usable for {algorithm} signing"
        ))),
    }
}

/// Check `signature` over `message`
///
/// # Errors
/// Returns `JwtError::KeyFormat` when `key` does not belong to the algorithm family
pub(crate) fn check_signature(
    algorithm: Algorithm,
    key: KeyMaterial,
    message: &[u8],
    signature: &[u8],
) -> JwtResult<bool> {
    match (algorithm, key) {
        (Algorithm::Hmac(hash), KeyMaterial::SymmetricSecret(secret)) => {
            verify_hmac(hash, message, signature, &secret)
        }
        (Algorithm::RsaPkcs1(hash), KeyMaterial::RsaPublicKey { key, hash: bound })
            if hash == bound =>
        {
            Ok(verify_rsa(hash, message, signature, key))
        }
        (algorithm, _) => Err(JwtError::KeyFormat(format!(
            "Key is not usable for {algorithm} verification"
        ))),
    }
}

fn parse_payload(payload_json: &str) -> JwtResult<Map<String, Value>> {
    match serde_json::from_str(payload_json) {
        Ok(Value::Object(map)) => Ok(map),
        _ => Err(JwtError::json_parse("Invalid Payload JSON")),
    }
}

fn build_header(
    algorithm: Algorithm,
    header_json: Option<&str>,
    config: &JwtConfig,
) -> JwtResult<JwtHeader> {
    let extra = match header_json.map(str::trim).filter(|json| !json.is_empty()) {
        Some(json) => match serde_json::from_str(json) {
            Ok(Value::Object(map)) => map,
            _ => return Err(JwtError::json_parse("Invalid Header JSON")),
        },
        None => Map::new(),
    };

    let mut header = JwtHeader::new();
    header.insert("alg", Value::from(algorithm.as_str()));
    for (name, value) in extra {
        if name == "alg" && value.as_str() != Some(algorithm.as_str()) {
            return Err(JwtError::json_parse(
                "Header alg conflicts with selected algorithm",
            ));
        }
        header.insert(name, value);
    }
    if header.get("typ").is_none() {
        if let Some(typ) = &config.default_typ {
            header.insert("typ", Value::from(typ.as_str()));
        }
    }
    Ok(header)
}

/// Build and sign a token; fails before anything is assembled
pub(crate) fn generate_token(request: GenerateRequest<'_>, config: &JwtConfig) -> JwtResult<String> {
    let mut claims = parse_payload(request.payload_json)?;
    let header = build_header(request.algorithm, request.header_json, config)?;

    let now = unix_now();
    if let Some(span) = request.expires_in.filter(|span| !span.is_empty()) {
        let offset = parse_time_span(span)?;
        claims.insert(
            "exp".to_string(),
            Value::from(now.saturating_add(offset.num_seconds())),
        );
    }
    claims.insert("iat".to_string(), Value::from(now));

    let key = resolve(request.algorithm, request.key, KeyPurpose::Sign)?;

    let header_b64 = encode_json(&Value::from(header))?;
    let payload_b64 = encode_json(&Value::Object(claims))?;
    let message = signing_input(&header_b64, &payload_b64);
    let signature = sign(request.algorithm, key, message.as_bytes())?;

    tracing::debug!(alg = %request.algorithm, "generated token");
    Ok(assemble(message, &base64_url_encode(&signature)))
}

/// Split and decode header and payload without touching the signature
fn decode_parts(token: &str) -> JwtResult<(TokenParts<'_>, JwtHeader, Value)> {
    let parts = TokenParts::split(token.trim())?;
    let header = decode_json_object(parts.header).map_err(|_| JwtError::TokenFormat)?;
    let payload = decode_json_object(parts.payload).map_err(|_| JwtError::TokenFormat)?;
    Ok((parts, JwtHeader::from(header), Value::Object(payload)))
}

/// Decode-only path: never resolves keys or checks signatures
pub(crate) fn decode_token(token: &str) -> VerificationResult {
    match decode_parts(token) {
        Ok((_, header, payload)) => {
            tracing::debug!(alg = header.alg().unwrap_or("-"), "decoded token");
            VerificationResult::decoded(header, payload)
        }
        Err(_) => VerificationResult::malformed(),
    }
}

/// Full verification; every content failure ends up in the result
pub(crate) fn verify_token(token: &str, key: &str, config: &JwtConfig) -> VerificationResult {
    let Ok((parts, header, payload)) = decode_parts(token) else {
        tracing::debug!("rejected malformed token");
        return VerificationResult::malformed();
    };

    let result = VerificationResult::decoded(header, payload);
    let outcome = check_token(&parts, &result, key, config);
    match outcome {
        Ok(()) => {
            tracing::debug!("token verified");
            VerificationResult {
                signature_valid: true,
                ..result
            }
        }
        Err(JwtError::Expired) => {
            tracing::debug!("token signature valid but expired");
            VerificationResult {
                expired: true,
                ..result.with_error(&JwtError::Expired)
            }
        }
        Err(error) => {
            tracing::debug!(%error, "token rejected");
            result.with_error(&error)
        }
    }
}

/// Decision table after decoding: alg, key, signature, then `exp`
fn check_token(
    parts: &TokenParts<'_>,
    decoded: &VerificationResult,
    key: &str,
    config: &JwtConfig,
) -> JwtResult<()> {
    let header = decoded.header.as_ref().ok_or(JwtError::TokenFormat)?;
    let algorithm: Algorithm = header.alg().ok_or(JwtError::MissingAlgorithm)?.parse()?;
    let key = resolve(algorithm, key, KeyPurpose::Verify)?;

    let valid = match base64_url_decode(parts.signature) {
        Ok(signature) => check_signature(
            algorithm,
            key,
            parts.signing_input().as_bytes(),
            &signature,
        )?,
        Err(_) => false,
    };
    if !valid {
        return Err(JwtError::SignatureInvalid);
    }

    let payload = decoded.payload.as_ref().ok_or(JwtError::TokenFormat)?;
    if is_expired(payload, unix_now(), config.clock_leeway_seconds) {
        return Err(JwtError::Expired);
    }
    Ok(())
}
