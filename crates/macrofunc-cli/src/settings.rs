//! Evaluator settings taken from the command line.

use chrono::{DateTime, FixedOffset, Utc};
use macrofunc::Evaluator;

/// Parse a UTC offset such as `+02:00`, `-05:30` or `Z`.
pub fn parse_utc_offset(s: &str) -> Result<FixedOffset, String> {
    let offset = if s.eq_ignore_ascii_case("z") { "+00:00" } else { s };
    offset
        .parse::<FixedOffset>()
        .map_err(|e| format!("invalid UTC offset '{}': {}", s, e))
}

/// Parse an RFC 3339 timestamp such as `2024-03-10T12:00:00Z`.
pub fn parse_now(s: &str) -> Result<DateTime<FixedOffset>, String> {
    DateTime::parse_from_rfc3339(s).map_err(|e| format!("invalid timestamp '{}': {}", s, e))
}

/// Build the evaluator for this invocation.
pub fn evaluator(utc_offset: Option<FixedOffset>, now: Option<DateTime<FixedOffset>>) -> Evaluator {
    Evaluator::builder()
        .maybe_timezone(utc_offset)
        .maybe_now(now.map(|now| now.with_timezone(&Utc)))
        .build()
}
