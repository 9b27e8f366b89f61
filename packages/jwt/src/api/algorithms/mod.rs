//! Signing algorithms and the token pipeline built on them

mod core;
mod hmac;
mod rsa;
pub mod utils;

pub(crate) use self::core::{GenerateRequest, decode_token, generate_token, verify_token};
