//! Time-of-day arithmetic over `HH:MM` strings.
//!
//! Wall-clock values are strict 24-hour `HH:MM`. Durations are signed:
//! a negative duration renders as `-HH:MM` and the hour part may exceed
//! two digits (a month-level deficit like `-160:00` is a valid value).
//! All arithmetic is plain signed minute arithmetic, never clamped or
//! wrapped.

use regex::Regex;
use std::sync::OnceLock;

fn time_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^([01][0-9]|2[0-3]):[0-5][0-9]$").unwrap())
}

/// True iff `s` is a well-formed, zero-padded 24-hour `HH:MM` string.
pub fn validate_time(s: &str) -> bool {
    time_pattern().is_match(s)
}

/// Parse a signed `HH:MM` duration into minutes. Accepts hour parts of
/// any width ("08", "160") with an optional leading minus.
pub fn to_minutes(s: &str) -> Option<i64> {
    let (neg, rest) = match s.strip_prefix('-') {
        Some(r) => (true, r),
        None => (false, s),
    };
    let (h, m) = rest.split_once(':')?;
    if h.is_empty() || m.len() != 2 {
        return None;
    }
    let h: i64 = h.parse().ok()?;
    let m: i64 = m.parse().ok()?;
    if m > 59 {
        return None;
    }
    let total = h * 60 + m;
    Some(if neg { -total } else { total })
}

/// Format minutes as a signed `HH:MM` duration.
pub fn from_minutes(mins: i64) -> String {
    let sign = if mins < 0 { "-" } else { "" };
    let m = mins.abs();
    format!("{}{:02}:{:02}", sign, m / 60, m % 60)
}

/// True iff the duration is negative.
pub fn is_negative(s: &str) -> bool {
    s.starts_with('-')
}

/// `a + b`. Unparseable operands count as zero.
pub fn sum_time(a: &str, b: &str) -> String {
    from_minutes(to_minutes(a).unwrap_or(0) + to_minutes(b).unwrap_or(0))
}

/// `b - a`: the duration from `a` to `b`. Argument order follows the
/// reading "subtract a from b", so `subtract_time("09:00", "17:00")`
/// is `"08:00"`.
pub fn subtract_time(a: &str, b: &str) -> String {
    from_minutes(to_minutes(b).unwrap_or(0) - to_minutes(a).unwrap_or(0))
}

/// Scale a duration by an integer factor (negative factors negate).
pub fn multiply_time(a: &str, k: i64) -> String {
    from_minutes(to_minutes(a).unwrap_or(0) * k)
}

/// Format a wall-clock moment as `HH:MM`.
pub fn hour_min_to_hour_formatted(hour: u32, min: u32) -> String {
    format!("{hour:02}:{min:02}")
}
