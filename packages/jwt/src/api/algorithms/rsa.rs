//! RSASSA-PKCS1-v1_5 algorithms (RS256, RS384, RS512)

use crate::{algorithms::HashWidth, error::JwtError};
use rsa::pkcs1v15::{Signature, SigningKey, VerifyingKey};
use rsa::sha2::{Sha256, Sha384, Sha512};
use rsa::signature::{SignatureEncoding, Signer, Verifier};
use rsa::{RsaPrivateKey, RsaPublicKey};

fn sign_with<S: Signer<Signature>>(signing_key: &S, message: &[u8]) -> Result<Vec<u8>, JwtError> {
    let signature = signing_key
        .try_sign(message)
        .map_err(|e| JwtError::signing(&e.to_string()))?;
    Ok(signature.to_bytes().as_ref().to_vec())
}

fn verify_with<V: Verifier<Signature>>(verifying_key: &V, message: &[u8], signature: &[u8]) -> bool {
    // A signature of the wrong length is a mismatch, not a failure
    match Signature::try_from(signature) {
        Ok(signature) => verifying_key.verify(message, &signature).is_ok(),
        Err(_) => false,
    }
}

/// Sign with the private key, consuming it, and the digest selected by `hash`
#[inline]
pub(crate) fn sign_rsa(
    hash: HashWidth,
    message: &[u8],
    key: RsaPrivateKey,
) -> Result<Vec<u8>, JwtError> {
    match hash {
        HashWidth::Sha256 => sign_with(&SigningKey::<Sha256>::new(key), message),
        HashWidth::Sha384 => sign_with(&SigningKey::<Sha384>::new(key), message),
        HashWidth::Sha512 => sign_with(&SigningKey::<Sha512>::new(key), message),
    }
}

/// Check a signature against the public key
#[inline]
pub(crate) fn verify_rsa(
    hash: HashWidth,
    message: &[u8],
    signature: &[u8],
    key: RsaPublicKey,
) -> bool {
    match hash {
        HashWidth::Sha256 => verify_with(&VerifyingKey::<Sha256>::new(key), message, signature),
        HashWidth::Sha384 => verify_with(&VerifyingKey::<Sha384>::new(key), message, signature),
        HashWidth::Sha512 => verify_with(&VerifyingKey::<Sha512>::new(key), message, signature),
    }
}
