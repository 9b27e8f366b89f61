//! Registered time claims: `exp` checking and `expires_in` parsing

pub mod expiry;
pub mod validation;

pub use expiry::parse_time_span;
pub use validation::{is_expired, unix_now};
