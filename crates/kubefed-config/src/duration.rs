// kubefed-config/src/duration.rs
// ============================================================================
// Module: Go Duration Codec
// Description: Parsing and formatting of Go-style duration strings.
// Purpose: Read and render `10s`, `1m30s`, `-500ms` as signed `time::Duration`.
// Dependencies: serde, thiserror, time
// ============================================================================

//! ## Overview
//! Controller timing fields are written as Go duration strings. They are held
//! as signed [`time::Duration`] values so that zero and negative inputs survive
//! deserialization and are reported by validation instead of the parser.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt::Write as _;

use thiserror::Error;
use time::Duration;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Nanoseconds per microsecond.
const NANOS_PER_MICRO: u128 = 1_000;
/// Nanoseconds per millisecond.
const NANOS_PER_MILLI: u128 = 1_000_000;
/// Nanoseconds per second.
const NANOS_PER_SECOND: u128 = 1_000_000_000;
/// Nanoseconds per minute.
const NANOS_PER_MINUTE: u128 = 60 * NANOS_PER_SECOND;
/// Nanoseconds per hour.
const NANOS_PER_HOUR: u128 = 60 * NANOS_PER_MINUTE;
/// Largest representable magnitude (one past `i64::MAX` for negatives).
const MAX_MAGNITUDE: u128 = 1 << 63;
/// Fraction digits kept before further digits are ignored.
const MAX_FRACTION_DIGITS: usize = 18;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Errors raised while parsing a duration string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DurationParseError {
    /// Input is empty or structurally malformed.
    #[error("invalid duration \"{0}\"")]
    Invalid(String),
    /// Input carries a number without a unit.
    #[error("missing unit in duration \"{0}\"")]
    MissingUnit(String),
    /// Input carries an unrecognized unit.
    #[error("unknown unit \"{unit}\" in duration \"{input}\"")]
    UnknownUnit {
        /// Offending unit.
        unit: String,
        /// Full input.
        input: String,
    },
    /// Input exceeds the representable range.
    #[error("duration \"{0}\" out of range")]
    Overflow(String),
}

// ============================================================================
// SECTION: Parsing
// ============================================================================

/// Parses a Go duration string such as `300ms`, `-1.5h`, or `2h45m`.
///
/// # Errors
///
/// Returns [`DurationParseError`] when the input is malformed or out of range.
pub fn parse_go_duration(input: &str) -> Result<Duration, DurationParseError> {
    let invalid = || DurationParseError::Invalid(input.to_string());
    let (negative, mut rest) = match input.as_bytes().first() {
        Some(b'-') => (true, &input[1 ..]),
        Some(b'+') => (false, &input[1 ..]),
        _ => (false, input),
    };
    if rest == "0" {
        return Ok(Duration::ZERO);
    }
    if rest.is_empty() {
        return Err(invalid());
    }

    let mut total: u128 = 0;
    while !rest.is_empty() {
        let int_len = rest.bytes().take_while(u8::is_ascii_digit).count();
        let (int_digits, after_int) = rest.split_at(int_len);
        let (frac_digits, after_frac) = match after_int.strip_prefix('.') {
            Some(tail) => {
                let frac_len = tail.bytes().take_while(u8::is_ascii_digit).count();
                tail.split_at(frac_len)
            }
            None => ("", after_int),
        };
        if int_digits.is_empty() && frac_digits.is_empty() {
            return Err(invalid());
        }
        let unit_len =
            after_frac.bytes().take_while(|byte| *byte != b'.' && !byte.is_ascii_digit()).count();
        if unit_len == 0 {
            return Err(DurationParseError::MissingUnit(input.to_string()));
        }
        let (unit, tail) = after_frac.split_at(unit_len);
        let scale = unit_nanos(unit).ok_or_else(|| DurationParseError::UnknownUnit {
            unit: unit.to_string(),
            input: input.to_string(),
        })?;

        let whole = parse_digits(int_digits).ok_or_else(|| overflow(input))?;
        let mut amount = whole.checked_mul(scale).ok_or_else(|| overflow(input))?;
        amount = amount
            .checked_add(fraction_nanos(frac_digits, scale))
            .ok_or_else(|| overflow(input))?;
        total = total.checked_add(amount).ok_or_else(|| overflow(input))?;
        if total > MAX_MAGNITUDE {
            return Err(overflow(input));
        }
        rest = tail;
    }

    let signed = if negative {
        i128::try_from(total).map(|value| -value)
    } else {
        i128::try_from(total)
    }
    .map_err(|_| overflow(input))?;
    let nanos = i64::try_from(signed).map_err(|_| overflow(input))?;
    Ok(Duration::nanoseconds(nanos))
}

/// Returns the nanoseconds per unit for a Go duration unit.
fn unit_nanos(unit: &str) -> Option<u128> {
    match unit {
        "ns" => Some(1),
        "us" | "\u{00b5}s" | "\u{03bc}s" => Some(NANOS_PER_MICRO),
        "ms" => Some(NANOS_PER_MILLI),
        "s" => Some(NANOS_PER_SECOND),
        "m" => Some(NANOS_PER_MINUTE),
        "h" => Some(NANOS_PER_HOUR),
        _ => None,
    }
}

/// Parses a run of ASCII digits, returning `None` on overflow.
fn parse_digits(digits: &str) -> Option<u128> {
    digits.bytes().try_fold(0_u128, |acc, byte| {
        acc.checked_mul(10)?.checked_add(u128::from(byte - b'0'))
    })
}

/// Converts fractional digits of a unit into whole nanoseconds.
fn fraction_nanos(digits: &str, scale: u128) -> u128 {
    let mut numerator: u128 = 0;
    let mut denominator: u128 = 1;
    for byte in digits.bytes().take(MAX_FRACTION_DIGITS) {
        numerator = numerator * 10 + u128::from(byte - b'0');
        denominator *= 10;
    }
    numerator * scale / denominator
}

/// Builds an overflow error for the input.
fn overflow(input: &str) -> DurationParseError {
    DurationParseError::Overflow(input.to_string())
}

// ============================================================================
// SECTION: Formatting
// ============================================================================

/// Formats a duration the way Go's `time.Duration.String` does.
#[must_use]
pub fn format_go_duration(duration: Duration) -> String {
    let nanos = duration.whole_nanoseconds();
    if nanos == 0 {
        return "0s".to_string();
    }
    let mut out = String::new();
    if nanos < 0 {
        out.push('-');
    }
    let mut magnitude = nanos.unsigned_abs();
    if magnitude < NANOS_PER_SECOND {
        let (scale, unit) = if magnitude < NANOS_PER_MICRO {
            (1, "ns")
        } else if magnitude < NANOS_PER_MILLI {
            (NANOS_PER_MICRO, "\u{00b5}s")
        } else {
            (NANOS_PER_MILLI, "ms")
        };
        push_scaled(&mut out, magnitude, scale);
        out.push_str(unit);
        return out;
    }

    let hours = magnitude / NANOS_PER_HOUR;
    magnitude %= NANOS_PER_HOUR;
    let minutes = magnitude / NANOS_PER_MINUTE;
    magnitude %= NANOS_PER_MINUTE;
    if hours > 0 {
        let _ = write!(out, "{hours}h");
    }
    if hours > 0 || minutes > 0 {
        let _ = write!(out, "{minutes}m");
    }
    push_scaled(&mut out, magnitude, NANOS_PER_SECOND);
    out.push('s');
    out
}

/// Writes `value / scale` with a trimmed decimal fraction.
fn push_scaled(out: &mut String, value: u128, scale: u128) {
    let whole = value / scale;
    let frac = value % scale;
    let _ = write!(out, "{whole}");
    if frac != 0 {
        let width = scale.ilog10() as usize;
        let digits = format!("{frac:0width$}");
        let _ = write!(out, ".{}", digits.trim_end_matches('0'));
    }
}

// ============================================================================
// SECTION: Serde Adapter
// ============================================================================

/// Serde adapter for Go duration strings (`#[serde(with = "...")]`).
pub mod serde_go {
    use serde::Deserialize;
    use serde::Deserializer;
    use serde::Serializer;
    use time::Duration;

    use super::format_go_duration;
    use super::parse_go_duration;

    /// Serializes a duration as a Go duration string.
    ///
    /// # Errors
    ///
    /// Returns the serializer error when writing fails.
    pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format_go_duration(*value))
    }

    /// Deserializes a Go duration string.
    ///
    /// # Errors
    ///
    /// Returns a deserializer error when the string is not a valid duration.
    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse_go_duration(raw.trim()).map_err(serde::de::Error::custom)
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================
