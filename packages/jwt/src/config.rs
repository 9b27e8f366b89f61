//! Engine configuration

use serde::{Deserialize, Serialize};

/// Settings shared by every operation of a [`crate::JwtEngine`]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct JwtConfig {
    /// Seconds of clock skew tolerated when checking `exp`
    #[serde(default = "default_clock_leeway")]
    pub clock_leeway_seconds: u64,
    /// `typ` written into generated headers that do not set one
    #[serde(default)]
    pub default_typ: Option<String>,
}

fn default_clock_leeway() -> u64 {
    0
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            clock_leeway_seconds: default_clock_leeway(),
            default_typ: None,
        }
    }
}

impl JwtConfig {
    /// Set the `exp` leeway
    #[must_use]
    pub fn with_clock_leeway(mut self, seconds: u64) -> Self {
        self.clock_leeway_seconds = seconds;
        self
    }

    /// Set the default `typ` header
    #[must_use]
    pub fn with_default_typ(mut self, typ: impl Into<String>) -> Self {
        self.default_typ = Some(typ.into());
        self
    }
}
