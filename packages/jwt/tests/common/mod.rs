//! Shared fixtures for the integration tests

#![allow(dead_code)]

use rsa::pkcs8::{EncodePrivateKey, EncodePublicKey, LineEnding};
use rsa::{RsaPrivateKey, RsaPublicKey, rand_core::OsRng};
use std::sync::OnceLock;

pub const SECRET: &str = "super-secret-key-1234567890";
pub const PAYLOAD: &str = r#"{"sub":"user123","name":"Test User"}"#;

/// PKCS#8 private / SPKI public PEM pair
pub struct RsaPemPair {
    pub private_pem: String,
    pub public_pem: String,
}

fn generate_pair() -> RsaPemPair {
    let private_key = RsaPrivateKey::new(&mut OsRng, 2048).expect("RSA key generation");
    let public_key = RsaPublicKey::from(&private_key);
    RsaPemPair {
        private_pem: private_key
            .to_pkcs8_pem(LineEnding::LF)
            .expect("PKCS#8 PEM")
            .to_string(),
        public_pem: public_key
            .to_public_key_pem(LineEnding::LF)
            .expect("SPKI PEM"),
    }
}

/// Key pair shared by every test in one binary
pub fn rsa_pair() -> &'static RsaPemPair {
    static PAIR: OnceLock<RsaPemPair> = OnceLock::new();
    PAIR.get_or_init(generate_pair)
}

/// A second, unrelated key pair
pub fn other_rsa_pair() -> &'static RsaPemPair {
    static PAIR: OnceLock<RsaPemPair> = OnceLock::new();
    PAIR.get_or_init(generate_pair)
}

/// Replace the character at `index` with a different base64url character
pub fn flip_char(segment: &str, index: usize) -> String {
    segment
        .char_indices()
        .map(|(i, c)| {
            if i == index {
                if c == 'A' { 'B' } else { 'A' }
            } else {
                c
            }
        })
        .collect()
}
