//! Duration expressions as they appear in schedule documents.
//!
//! Documents spell durations the way Go's `time.ParseDuration` reads them:
//! `"168h"`, `"1h30m"`, `"1.5h"`, `"-2m"`, `"0"`. A [`DurationExpr`] keeps the
//! text the user wrote next to its resolved value, so a regenerated document
//! writes back exactly what it read.

use chrono::Duration;
use std::fmt;
use thiserror::Error;

const NANOS_PER_MICRO: u128 = 1_000;
const NANOS_PER_MILLI: u128 = 1_000_000;
const NANOS_PER_SECOND: u128 = 1_000_000_000;
const NANOS_PER_MINUTE: u128 = 60 * NANOS_PER_SECOND;
const NANOS_PER_HOUR: u128 = 60 * NANOS_PER_MINUTE;

/// Largest magnitude accepted, matching a signed 64-bit nanosecond count.
const MAX_NANOS: u128 = 1 << 63;

/// Errors from parsing a duration expression.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DurationError {
    #[error("invalid duration {0:?}")]
    Invalid(String),
    #[error("missing unit in duration {0:?}")]
    MissingUnit(String),
    #[error("unknown unit {unit:?} in duration {input:?}")]
    UnknownUnit { unit: String, input: String },
    #[error("duration {0:?} is out of range")]
    Overflow(String),
}

/// A duration together with the expression it was written as.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DurationExpr {
    text: String,
    value: Duration,
}

impl DurationExpr {
    /// Parse an expression, keeping its original text.
    pub fn parse(text: &str) -> Result<Self, DurationError> {
        Ok(Self {
            text: text.to_string(),
            value: parse_duration(text)?,
        })
    }

    /// The expression as written.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// The resolved duration.
    pub fn value(&self) -> Duration {
        self.value
    }
}

impl From<Duration> for DurationExpr {
    fn from(value: Duration) -> Self {
        Self {
            text: format_duration(value),
            value,
        }
    }
}

impl fmt::Display for DurationExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

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

/// Parse a Go-style duration expression like `"72h"`, `"2h45m"` or `"1.5s"`.
pub fn parse_duration(input: &str) -> Result<Duration, DurationError> {
    let invalid = || DurationError::Invalid(input.to_string());
    let overflow = || DurationError::Overflow(input.to_string());

    let (negative, mut rest) = match input.as_bytes().first() {
        Some(b'-') => (true, &input[1..]),
        Some(b'+') => (false, &input[1..]),
        _ => (false, input),
    };

    // Special case: a bare zero needs no unit.
    if rest == "0" {
        return Ok(Duration::zero());
    }
    if rest.is_empty() {
        return Err(invalid());
    }

    let mut total: u128 = 0;
    while !rest.is_empty() {
        // Integer part
        let int_len = rest.bytes().take_while(u8::is_ascii_digit).count();
        let (int_digits, after_int) = rest.split_at(int_len);

        // Fractional part
        let (frac_digits, after_frac) = match after_int.strip_prefix('.') {
            Some(tail) => {
                let frac_len = tail.bytes().take_while(u8::is_ascii_digit).count();
                tail.split_at(frac_len)
            }
            None => ("", after_int),
        };
        if int_digits.is_empty() && frac_digits.is_empty() {
            // No digits at all, e.g. ".s" or "h"
            return Err(invalid());
        }

        // Unit runs until the next digit or dot
        let unit_len = after_frac
            .char_indices()
            .find(|(_, c)| c.is_ascii_digit() || *c == '.')
            .map(|(i, _)| i)
            .unwrap_or(after_frac.len());
        let (unit, tail) = after_frac.split_at(unit_len);
        if unit.is_empty() {
            return Err(DurationError::MissingUnit(input.to_string()));
        }
        let scale = unit_nanos(unit).ok_or_else(|| DurationError::UnknownUnit {
            unit: unit.to_string(),
            input: input.to_string(),
        })?;

        let whole: u128 = if int_digits.is_empty() {
            0
        } else {
            int_digits.parse().map_err(|_| overflow())?
        };
        let mut term = whole.checked_mul(scale).ok_or_else(overflow)?;

        // Digits beyond nanosecond precision cannot change the result.
        let frac_digits = &frac_digits[..frac_digits.len().min(18)];
        if !frac_digits.is_empty() {
            let frac: u128 = frac_digits.parse().map_err(|_| invalid())?;
            let denom = 10u128.pow(frac_digits.len() as u32);
            term += frac * scale / denom;
        }

        total = total.checked_add(term).ok_or_else(overflow)?;
        if total > MAX_NANOS {
            return Err(overflow());
        }
        rest = tail;
    }

    if !negative && total == MAX_NANOS {
        return Err(overflow());
    }
    let nanos = if negative {
        -(total as i128)
    } else {
        total as i128
    };
    Ok(Duration::nanoseconds(nanos as i64))
}

/// Render a duration the way Go's `Duration.String` does: `"1h0m0s"`, `"1.5s"`, `"250ms"`.
pub fn format_duration(duration: Duration) -> String {
    let nanos = total_nanos(duration);
    if nanos == 0 {
        return "0s".to_string();
    }
    let magnitude = nanos.unsigned_abs();

    let mut out = String::new();
    if nanos < 0 {
        out.push('-');
    }

    if magnitude < NANOS_PER_SECOND {
        let (scale, unit) = if magnitude < NANOS_PER_MICRO {
            (1, "ns")
        } else if magnitude < NANOS_PER_MILLI {
            (NANOS_PER_MICRO, "\u{00b5}s")
        } else {
            (NANOS_PER_MILLI, "ms")
        };
        out.push_str(&format_scaled(magnitude, scale));
        out.push_str(unit);
        return out;
    }

    let minutes = magnitude / NANOS_PER_MINUTE;
    let seconds = format_scaled(magnitude % NANOS_PER_MINUTE, NANOS_PER_SECOND);
    if minutes > 0 {
        let hours = minutes / 60;
        if hours > 0 {
            out.push_str(&format!("{}h", hours));
        }
        out.push_str(&format!("{}m", minutes % 60));
    }
    out.push_str(&seconds);
    out.push('s');
    out
}

/// `value / scale` as a decimal with trailing zeros trimmed.
fn format_scaled(value: u128, scale: u128) -> String {
    let whole = value / scale;
    let frac = value % scale;
    if frac == 0 {
        return whole.to_string();
    }
    let width = scale.to_string().len() - 1;
    let digits = format!("{:0width$}", frac, width = width);
    format!("{}.{}", whole, digits.trim_end_matches('0'))
}

/// Signed nanosecond count of a duration, without the overflow limit of `num_nanoseconds`.
pub(crate) fn total_nanos(duration: Duration) -> i128 {
    duration.num_seconds() as i128 * NANOS_PER_SECOND as i128 + duration.subsec_nanos() as i128
}
