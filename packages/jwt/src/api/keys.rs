//! Key material resolution
//!
//! Turns the caller's key string into a key handle for one operation. Nothing
//! here is cached: every call parses again and the handle is dropped with the
//! call (secrets are zeroized on drop).

use crate::{
    algorithms::{Algorithm, HashWidth},
    error::{JwtError, JwtResult},
};
use rsa::{
    RsaPrivateKey, RsaPublicKey,
    pkcs8::{DecodePrivateKey, DecodePublicKey},
};
use zeroize::Zeroizing;

/// What the resolved key will be used for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyPurpose {
    /// Producing a signature
    Sign,
    /// Checking a signature
    Verify,
}

/// Key handle resolved for a single operation
pub enum KeyMaterial {
    /// HMAC secret, the raw UTF-8 bytes of the caller's string
    SymmetricSecret(Zeroizing<Vec<u8>>),
    /// PKCS#8 private key bound to a hash width
    RsaPrivateKey {
        /// Parsed key
        key: RsaPrivateKey,
        /// Hash used with this key
        hash: HashWidth,
    },
    /// SPKI public key bound to a hash width
    RsaPublicKey {
        /// Parsed key
        key: RsaPublicKey,
        /// Hash used with this key
        hash: HashWidth,
    },
}

impl std::fmt::Debug for KeyMaterial {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KeyMaterial::SymmetricSecret(_) => f.write_str("SymmetricSecret(..)"),
            KeyMaterial::RsaPrivateKey { hash, .. } => {
                write!(f, "RsaPrivateKey {{ hash: {hash:?} }}")
            }
            KeyMaterial::RsaPublicKey { hash, .. } => write!(f, "RsaPublicKey {{ hash: {hash:?} }}"),
        }
    }
}

/// Resolve `raw` into key material for `algorithm`
///
/// HMAC algorithms take the string verbatim, with no length requirement.
/// RSA algorithms take a PKCS#8 PEM private key for signing and an SPKI PEM
/// public key for verification.
///
/// # Errors
/// Returns `JwtError::KeyFormat` when the PEM cannot be parsed as the kind of
/// key the purpose requires
pub fn resolve(algorithm: Algorithm, raw: &str, purpose: KeyPurpose) -> JwtResult<KeyMaterial> {
    match (algorithm, purpose) {
        (Algorithm::Hmac(_), _) => Ok(KeyMaterial::SymmetricSecret(Zeroizing::new(
            raw.as_bytes().to_vec(),
        ))),
        (Algorithm::RsaPkcs1(hash), KeyPurpose::Sign) => {
            let key = RsaPrivateKey::from_pkcs8_pem(raw.trim())
                .map_err(|_| JwtError::key_format("Invalid Private Key format"))?;
            Ok(KeyMaterial::RsaPrivateKey { key, hash })
        }
        (Algorithm::RsaPkcs1(hash), KeyPurpose::Verify) => {
            let key = RsaPublicKey::from_public_key_pem(raw.trim())
                .map_err(|_| JwtError::key_format("Invalid Public Key format"))?;
            Ok(KeyMaterial::RsaPublicKey { key, hash })
        }
    }
}
