//! Relative time spans for `expires_in`
//!
//! Accepted forms: `30s`, `15 minutes`, `2h`, `1.5 days`, `-1d`, `3 weeks ago`,
//! `1y from now`. Units are case-insensitive; a year is 365.25 days.

use crate::error::{JwtError, JwtResult};
use chrono::Duration;
use once_cell::sync::Lazy;
use regex::Regex;

const MINUTE: f64 = 60.0;
const HOUR: f64 = MINUTE * 60.0;
const DAY: f64 = HOUR * 24.0;
const WEEK: f64 = DAY * 7.0;
const YEAR: f64 = DAY * 365.25;

static TIME_SPAN: Lazy<Option<Regex>> = Lazy::new(|| {
    Regex::new(
        r"(?i)^(\+|-)? ?(\d+|\d+\.\d+) ?(seconds?|secs?|s|minutes?|mins?|m|hours?|hrs?|h|days?|d|weeks?|w|years?|yrs?|y)(?: (ago|from now))?$",
    )
    .ok()
});

fn unit_seconds(unit: &str) -> f64 {
    match unit.to_ascii_lowercase().as_str() {
        "s" | "sec" | "secs" | "second" | "seconds" => 1.0,
        "m" | "min" | "mins" | "minute" | "minutes" => MINUTE,
        "h" | "hr" | "hrs" | "hour" | "hours" => HOUR,
        "d" | "day" | "days" => DAY,
        "w" | "week" | "weeks" => WEEK,
        _ => YEAR,
    }
}

/// Parse a time span into a signed duration, rounded to whole seconds
///
/// # Errors
/// Returns `JwtError::InvalidExpiry` if `input` does not match the grammar,
/// carries both a leading sign and a trailing direction, or is out of range
pub fn parse_time_span(input: &str) -> JwtResult<Duration> {
    let invalid = || JwtError::invalid_expiry(input);
    let captures = TIME_SPAN
        .as_ref()
        .and_then(|re| re.captures(input))
        .ok_or_else(invalid)?;

    let sign = captures.get(1).map(|m| m.as_str());
    let direction = captures.get(4).map(|m| m.as_str().to_ascii_lowercase());
    if sign.is_some() && direction.is_some() {
        return Err(invalid());
    }

    let value: f64 = captures[2].parse().map_err(|_| invalid())?;
    let seconds = (value * unit_seconds(&captures[3])).round();
    if !seconds.is_finite() || seconds > i64::MAX as f64 {
        return Err(invalid());
    }
    #[allow(clippy::cast_possible_truncation)]
    let mut seconds = seconds as i64;
    if sign == Some("-") || direction.as_deref() == Some("ago") {
        seconds = -seconds;
    }
    Duration::try_seconds(seconds).ok_or_else(invalid)
}
