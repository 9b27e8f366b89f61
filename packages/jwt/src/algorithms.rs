//! Supported JWS algorithms
//!
//! The set is closed: HMAC and RSASSA-PKCS1-v1_5, each with a SHA-2 width.
//! Anything else is rejected when the `alg` name is parsed.

use crate::error::JwtError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::{fmt, str::FromStr};

/// SHA-2 digest width selected by the algorithm suffix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HashWidth {
    /// SHA-256
    Sha256,
    /// SHA-384
    Sha384,
    /// SHA-512
    Sha512,
}

impl HashWidth {
    /// Digest size in bits
    #[must_use]
    pub const fn bits(self) -> u16 {
        match self {
            HashWidth::Sha256 => 256,
            HashWidth::Sha384 => 384,
            HashWidth::Sha512 => 512,
        }
    }
}

/// Signing algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// HS256 / HS384 / HS512
    Hmac(HashWidth),
    /// RS256 / RS384 / RS512
    RsaPkcs1(HashWidth),
}

impl Algorithm {
    /// HMAC with SHA-256
    pub const HS256: Algorithm = Algorithm::Hmac(HashWidth::Sha256);
    /// HMAC with SHA-384
    pub const HS384: Algorithm = Algorithm::Hmac(HashWidth::Sha384);
    /// HMAC with SHA-512
    pub const HS512: Algorithm = Algorithm::Hmac(HashWidth::Sha512);
    /// RSASSA-PKCS1-v1_5 with SHA-256
    pub const RS256: Algorithm = Algorithm::RsaPkcs1(HashWidth::Sha256);
    /// RSASSA-PKCS1-v1_5 with SHA-384
    pub const RS384: Algorithm = Algorithm::RsaPkcs1(HashWidth::Sha384);
    /// RSASSA-PKCS1-v1_5 with SHA-512
    pub const RS512: Algorithm = Algorithm::RsaPkcs1(HashWidth::Sha512);

    /// Every supported algorithm, in selector order
    pub const ALL: [Algorithm; 6] = [
        Algorithm::HS256,
        Algorithm::HS384,
        Algorithm::HS512,
        Algorithm::RS256,
        Algorithm::RS384,
        Algorithm::RS512,
    ];

    /// Hash width this algorithm signs with
    #[must_use]
    pub const fn hash(self) -> HashWidth {
        match self {
            Algorithm::Hmac(hash) | Algorithm::RsaPkcs1(hash) => hash,
        }
    }

    /// Whether the algorithm uses a shared secret
    #[must_use]
    pub const fn is_symmetric(self) -> bool {
        matches!(self, Algorithm::Hmac(_))
    }

    /// JOSE `alg` name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Algorithm::Hmac(HashWidth::Sha256) => "HS256",
            Algorithm::Hmac(HashWidth::Sha384) => "HS384",
            Algorithm::Hmac(HashWidth::Sha512) => "HS512",
            Algorithm::RsaPkcs1(HashWidth::Sha256) => "RS256",
            Algorithm::RsaPkcs1(HashWidth::Sha384) => "RS384",
            Algorithm::RsaPkcs1(HashWidth::Sha512) => "RS512",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Algorithm {
    type Err = JwtError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Algorithm::ALL
            .into_iter()
            .find(|alg| alg.as_str() == s)
            .ok_or_else(|| JwtError::unsupported_algorithm(s))
    }
}

impl Serialize for Algorithm {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Algorithm {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(serde::de::Error::custom)
    }
}
