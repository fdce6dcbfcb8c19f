//! Human readable durations
//!
//! Grammar: an optional sign followed by one or more `<integer><unit>`
//! pairs, e.g. `500ms`, `2s`, `1m30s`. Supported units are `us` (or `µs`
//! and `μs`), `ms`, `s`, `m` and `h`. There is no `ns`: durations are held
//! in whole microseconds. A bare `0` means zero. Negative durations are
//! accepted and clamp to zero, so waiting on them returns immediately.

use core::fmt;

use embassy_time::Duration;

const MICROS_PER_MILLI: u64 = 1_000;
const MICROS_PER_SECOND: u64 = 1_000_000;
const MICROS_PER_MINUTE: u64 = 60 * MICROS_PER_SECOND;
const MICROS_PER_HOUR: u64 = 60 * MICROS_PER_MINUTE;

/// Units ordered so that longer suffixes are tried first
const UNITS: [(&str, u64); 7] = [
    ("us", 1),
    // U+00B5 micro sign
    ("µs", 1),
    // U+03BC Greek small letter mu
    ("μs", 1),
    ("ms", MICROS_PER_MILLI),
    ("s", MICROS_PER_SECOND),
    ("m", MICROS_PER_MINUTE),
    ("h", MICROS_PER_HOUR),
];

/// Parse a duration literal
///
/// Returns `None` if the literal does not match the grammar or overflows.
pub fn parse_duration(literal: &str) -> Option<Duration> {
    let (negative, mut rest) = match literal.as_bytes().first() {
        Some(b'-') => (true, &literal[1..]),
        Some(b'+') => (false, &literal[1..]),
        _ => (false, literal),
    };

    if rest == "0" {
        return Some(Duration::MIN);
    }
    if rest.is_empty() {
        return None;
    }

    let mut total: u64 = 0;
    while !rest.is_empty() {
        let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
        if digits == 0 {
            return None;
        }
        let quantity: u64 = rest[..digits].parse().ok()?;
        rest = &rest[digits..];

        let (unit_len, scale) = unit_prefix(rest)?;
        rest = &rest[unit_len..];

        total = total.checked_add(quantity.checked_mul(scale)?)?;
    }

    if negative {
        return Some(Duration::MIN);
    }
    Some(Duration::from_micros(total))
}

/// Match the unit at the start of `rest`, preferring `ms` over `m`
fn unit_prefix(rest: &str) -> Option<(usize, u64)> {
    UNITS
        .iter()
        .filter(|(suffix, _)| rest.starts_with(suffix))
        .max_by_key(|(suffix, _)| suffix.len())
        .map(|(suffix, scale)| (suffix.len(), *scale))
}

/// Display adapter rendering a duration in its largest exact unit
///
/// The output is accepted by [`parse_duration`] and yields the same value.
#[derive(Debug, Clone, Copy)]
pub struct DisplayDuration(pub Duration);

impl fmt::Display for DisplayDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let micros = self.0.as_micros();
        if micros == 0 {
            return f.write_str("0ms");
        }
        let (scale, unit) = [
            (MICROS_PER_HOUR, "h"),
            (MICROS_PER_MINUTE, "m"),
            (MICROS_PER_SECOND, "s"),
            (MICROS_PER_MILLI, "ms"),
        ]
        .into_iter()
        .find(|(scale, _)| micros.is_multiple_of(*scale))
        .unwrap_or((1, "us"));
        write!(f, "{}{unit}", micros / scale)
    }
}
