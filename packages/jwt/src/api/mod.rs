//! JWT API: key resolution, claims, the signing pipeline and its entry points

pub mod algorithms;
pub mod builder;
pub mod claims;
pub mod keys;
pub mod operations;
pub mod validation;

pub use builder::{Jwt, JwtBuilder};
pub use keys::{KeyMaterial, KeyPurpose};
pub use operations::{JwtEngine, decode, generate, verify};
pub use validation::AsyncJwtResult;
