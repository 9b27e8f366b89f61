//! HMAC-SHA algorithms (HS256, HS384, HS512)

use crate::{algorithms::HashWidth, error::JwtError};
use hmac::{Hmac, Mac, digest::KeyInit};
use sha2::{Sha256, Sha384, Sha512};
use subtle::ConstantTimeEq;

type HmacSha256 = Hmac<Sha256>;
type HmacSha384 = Hmac<Sha384>;
type HmacSha512 = Hmac<Sha512>;

fn mac<M: Mac + KeyInit>(message: &[u8], secret: &[u8]) -> Result<Vec<u8>, JwtError> {
    let mut mac = <M as KeyInit>::new_from_slice(secret)
        .map_err(|_| JwtError::key_format("Invalid HMAC key"))?;
    mac.update(message);
    Ok(mac.finalize().into_bytes().to_vec())
}

/// HMAC over `message` with the digest selected by `hash`
#[inline]
pub(crate) fn sign_hmac(hash: HashWidth, message: &[u8], secret: &[u8]) -> Result<Vec<u8>, JwtError> {
    match hash {
        HashWidth::Sha256 => mac::<HmacSha256>(message, secret),
        HashWidth::Sha384 => mac::<HmacSha384>(message, secret),
        HashWidth::Sha512 => mac::<HmacSha512>(message, secret),
    }
}

/// Recompute the MAC and compare in constant time
#[inline]
pub(crate) fn verify_hmac(
    hash: HashWidth,
    message: &[u8],
    signature: &[u8],
    secret: &[u8],
) -> Result<bool, JwtError> {
    let expected = sign_hmac(hash, message, secret)?;
    Ok(expected.as_slice().ct_eq(signature).into())
}

#[cfg(test)]
mod tests {
    use super::*;

    // RFC 4231 test case 2
    const KEY: &[u8] = b"Jefe";
    const DATA: &[u8] = b"what do ya want for nothing?";

    #[test]
    fn matches_rfc4231_vectors() {
        let sig = sign_hmac(HashWidth::Sha256, DATA, KEY).expect("hmac");
        assert_eq!(sig[..8], [0x5b_u8, 0xdc, 0xc1, 0x46, 0xbf, 0x60, 0x75, 0x4e]);
        assert_eq!(sign_hmac(HashWidth::Sha384, DATA, KEY).expect("hmac").len(), 48);
        assert_eq!(sign_hmac(HashWidth::Sha512, DATA, KEY).expect("hmac").len(), 64);
    }

    #[test]
    fn verify_rejects_other_secret_and_truncation() {
        let sig = sign_hmac(HashWidth::Sha256, DATA, KEY).expect("hmac");
        assert!(verify_hmac(HashWidth::Sha256, DATA, &sig, KEY).expect("verify"));
        assert!(!verify_hmac(HashWidth::Sha256, DATA, &sig, b"jefe").expect("verify"));
        assert!(!verify_hmac(HashWidth::Sha256, DATA, &sig[..31], KEY).expect("verify"));
        assert!(!verify_hmac(HashWidth::Sha384, DATA, &sig, KEY).expect("verify"));
    }

    #[test]
    fn empty_secret_is_allowed() {
        assert!(sign_hmac(HashWidth::Sha256, DATA, b"").is_ok());
    }
}
