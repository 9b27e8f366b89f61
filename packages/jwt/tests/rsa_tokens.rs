//! RS256/384/512 generation and verification with PEM keys

mod common;

use common::{PAYLOAD, SECRET, other_rsa_pair, rsa_pair};
use devbox_jwt::{Algorithm, Jwt, JwtError, generate, verify};
use rsa::pkcs1::{EncodeRsaPrivateKey, LineEnding};
use rsa::{RsaPrivateKey, pkcs8::DecodePrivateKey};
use serde_json::json;

#[tokio::test]
async fn test_rs256_pkcs8_signs_spki_verifies() {
    let pair = rsa_pair();
    let token = generate(Algorithm::RS256, &pair.private_pem, PAYLOAD, None, None)
        .await
        .expect("token generation should succeed");

    let result = verify(&token, &pair.public_pem).await.expect("verify result");
    assert!(result.signature_valid, "{:?}", result.error);
    assert_eq!(result.claim("sub"), Some(&json!("user123")));
    assert_eq!(result.header.and_then(|h| h.alg().map(str::to_string)).as_deref(), Some("RS256"));
}

#[tokio::test]
async fn test_rs384_and_rs512_round_trip() {
    let pair = rsa_pair();
    for algorithm in [Algorithm::RS384, Algorithm::RS512] {
        let token = Jwt::builder()
            .with_algorithm(algorithm)
            .with_key(pair.private_pem.as_str())
            .expires_in("10m")
            .generate(PAYLOAD)
            .await
            .expect("token generation should succeed");

        let result = Jwt::builder()
            .with_key(pair.public_pem.as_str())
            .verify(&token)
            .await
            .expect("verify result");
        assert!(result.signature_valid, "{algorithm}: {:?}", result.error);
        assert!(!result.expired);
    }
}

#[tokio::test]
async fn test_plain_secret_cannot_sign_rs256() {
    let err = generate(Algorithm::RS256, SECRET, PAYLOAD, None, None)
        .await
        .expect_err("a plain secret is not a PEM key");
    assert_eq!(err, JwtError::key_format("Invalid Private Key format"));
}

#[tokio::test]
async fn test_pkcs1_private_key_is_rejected_for_signing() {
    let pair = rsa_pair();
    let key = RsaPrivateKey::from_pkcs8_pem(&pair.private_pem).expect("fixture parses");
    let pkcs1 = key.to_pkcs1_pem(LineEnding::LF).expect("PKCS#1 PEM");

    let err = generate(Algorithm::RS256, &pkcs1, PAYLOAD, None, None)
        .await
        .expect_err("only PKCS#8 is accepted");
    assert!(matches!(err, JwtError::KeyFormat(_)));
}

#[tokio::test]
async fn test_public_key_cannot_sign() {
    let pair = rsa_pair();
    let err = generate(Algorithm::RS512, &pair.public_pem, PAYLOAD, None, None)
        .await
        .expect_err("public key used for signing");
    assert_eq!(err, JwtError::key_format("Invalid Private Key format"));
}

#[tokio::test]
async fn test_verification_needs_public_key() {
    let pair = rsa_pair();
    let token = generate(Algorithm::RS256, &pair.private_pem, PAYLOAD, None, None)
        .await
        .expect("token generation should succeed");

    for key in [SECRET, pair.private_pem.as_str()] {
        let result = verify(&token, key).await.expect("verify result");
        assert!(!result.signature_valid);
        assert_eq!(result.error.as_deref(), Some("Invalid Public Key format"));
        assert!(result.payload.is_some());
    }
}

#[tokio::test]
async fn test_other_public_key_does_not_verify() {
    let token = generate(Algorithm::RS256, &rsa_pair().private_pem, PAYLOAD, None, None)
        .await
        .expect("token generation should succeed");

    let result = verify(&token, &other_rsa_pair().public_pem)
        .await
        .expect("verify result");
    assert!(!result.signature_valid);
    assert_eq!(result.error.as_deref(), Some("signature verification failed"));
}

#[tokio::test]
async fn test_expired_rsa_token() {
    let pair = rsa_pair();
    let token = generate(Algorithm::RS256, &pair.private_pem, PAYLOAD, None, Some("-5m"))
        .await
        .expect("token generation should succeed");

    let result = verify(&token, &pair.public_pem).await.expect("verify result");
    assert!(result.expired);
    assert!(!result.signature_valid);
}

#[tokio::test]
async fn test_hmac_token_checked_with_pem_text_fails() {
    let pair = rsa_pair();
    let token = generate(Algorithm::HS256, SECRET, PAYLOAD, None, None)
        .await
        .expect("token generation should succeed");

    // HS keys are taken verbatim, so the PEM text is just a wrong secret
    let result = verify(&token, &pair.public_pem).await.expect("verify result");
    assert!(!result.signature_valid);
    assert_eq!(result.error.as_deref(), Some("signature verification failed"));
}
