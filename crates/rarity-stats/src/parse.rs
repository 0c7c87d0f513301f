// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Numeric parsing of wire counts and totals
//!
//! Counts are read the way a browser `parseInt` reads them: leading whitespace
//! is skipped, an optional sign is accepted, a `0x` prefix switches to base 16,
//! and the longest run of digits is taken. Anything after the digits is
//! ignored.
//!
//! Summary totals are read as whole numbers instead: the trimmed string must be
//! a complete decimal or `0x` literal, and an empty string reads as zero.

use api_client::CountValue;

/// Parse a wire count into an integer
///
/// Returns `None` when no digits can be read or the value does not fit in an
/// `i64`.
pub fn parse_count(value: &CountValue) -> Option<i64> {
    match value {
        CountValue::Number(number) => number.as_i64().or_else(|| number.as_f64().and_then(truncate)),
        CountValue::Text(text) => parse_int_prefix(text),
        CountValue::Other(_) => None,
    }
}

/// Read a summary total as a number
///
/// Returns `None` when the value is not numeric at all.
pub fn parse_number(value: &CountValue) -> Option<f64> {
    match value {
        CountValue::Number(number) => number.as_f64(),
        CountValue::Text(text) => parse_number_text(text.trim()),
        CountValue::Other(_) => None,
    }
}

#[allow(clippy::cast_precision_loss)]
fn parse_number_text(text: &str) -> Option<f64> {
    if text.is_empty() {
        return Some(0.0);
    }

    if let Some(hex) = text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        return u64::from_str_radix(hex, 16).ok().map(|value| value as f64);
    }

    // f64 parsing would also take `inf` and `nan`
    if !text
        .bytes()
        .all(|b| b.is_ascii_digit() || matches!(b, b'.' | b'e' | b'E' | b'+' | b'-'))
    {
        return None;
    }
    text.parse().ok()
}

#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
fn truncate(value: f64) -> Option<i64> {
    let value = value.trunc();
    (value.is_finite() && value >= i64::MIN as f64 && value < i64::MAX as f64)
        .then_some(value as i64)
}

fn parse_int_prefix(text: &str) -> Option<i64> {
    let text = text.trim_start();

    let (negative, unsigned) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };

    let (radix, digits) = match unsigned.get(..2) {
        Some("0x" | "0X") => (16, &unsigned[2..]),
        _ => (10, unsigned),
    };

    let mut magnitude: i128 = 0;
    let mut seen_digit = false;
    for c in digits.chars() {
        let Some(digit) = c.to_digit(radix) else {
            break;
        };
        seen_digit = true;
        magnitude = magnitude
            .checked_mul(i128::from(radix))?
            .checked_add(i128::from(digit))?;
    }

    if !seen_digit {
        return None;
    }

    let signed = if negative { -magnitude } else { magnitude };
    i64::try_from(signed).ok()
}
