//! JSON Web Token generation, verification and decoding
//!
//! This crate provides:
//! - HS256/384/512 and RS256/384/512 signing (RFC 7515 compact serialization)
//! - Verification that always yields a [`VerificationResult`]
//! - Decode-only inspection without any key
//! - `exp`/`iat` handling with relative `expires_in` spans
//!
//! Keys are resolved per call and never cached.

pub(crate) mod algorithms;
pub mod api;
mod config;
mod error;
mod types;

pub use algorithms::{Algorithm, HashWidth};
pub use api::{
    AsyncJwtResult, Jwt, JwtBuilder, JwtEngine, KeyMaterial, KeyPurpose, decode, generate, verify,
};
pub use api::{algorithms::utils as codec, claims, keys, operations};
pub use config::JwtConfig;
pub use error::*;
pub use types::*;
