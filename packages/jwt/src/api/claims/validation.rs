//! `exp` evaluation
//!
//! `exp` is the only claim checked. A missing or non-numeric `exp` never
//! marks a token expired.

use chrono::Utc;
use serde_json::Value;

/// Current wall-clock time in whole seconds since the epoch (UTC)
#[inline]
#[must_use]
pub fn unix_now() -> i64 {
    Utc::now().timestamp()
}

/// Whether `claims` carries a numeric `exp` at or before `now`
///
/// `leeway` seconds are granted past `exp` before the token counts as expired.
#[must_use]
pub fn is_expired(claims: &Value, now: i64, leeway: u64) -> bool {
    let Some(exp) = claims.get("exp").and_then(Value::as_f64) else {
        return false;
    };
    // i64 -> f64 is exact for any realistic epoch second
    #[allow(clippy::cast_precision_loss)]
    let now = now.saturating_sub(i64::try_from(leeway).unwrap_or(i64::MAX)) as f64;
    now >= exp
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn expired_at_and_after_exp() {
        let claims = json!({"exp": 1_000});
        assert!(is_expired(&claims, 1_000, 0));
        assert!(is_expired(&claims, 1_001, 0));
        assert!(!is_expired(&claims, 999, 0));
    }

    #[test]
    fn leeway_extends_validity() {
        let claims = json!({"exp": 1_000});
        assert!(!is_expired(&claims, 1_005, 10));
        assert!(is_expired(&claims, 1_010, 10));
    }

    #[test]
    fn fractional_exp_is_compared_numerically() {
        let claims = json!({"exp": 1_000.5});
        assert!(!is_expired(&claims, 1_000, 0));
        assert!(is_expired(&claims, 1_001, 0));
    }

    #[test]
    fn absent_or_non_numeric_exp_is_ignored() {
        assert!(!is_expired(&json!({"sub": "user123"}), i64::MAX, 0));
        assert!(!is_expired(&json!({"exp": "1000"}), i64::MAX, 0));
        assert!(!is_expired(&json!({"exp": null}), i64::MAX, 0));
    }
}
