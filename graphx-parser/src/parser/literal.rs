//! Recognition and conversion of number literals.
//!
//! A literal is matched against the whole substring handed to it, so `1.5` is a literal but
//! `1.5x` is not. Accepted forms:
//!
//! - decimal: `13`, `13.`, `13.25`, `.25`, `1e3`, `2.5E-4`
//! - hexadecimal with a binary exponent: `0x1.8p1`, `0XAp-2`
//! - the special values `NaN` and `Infinity`
//!
//! Any of these may carry a leading sign, a trailing `f`, `F`, `d` or `D` suffix (ignored), and
//! surrounding ASCII control or space characters.

use once_cell::sync::Lazy;
use regex::Regex;

/// Matches a complete floating-point literal.
static LITERAL: Lazy<Regex> = Lazy::new(|| {
    let digits = "([0-9]+)";
    let hex_digits = "([0-9a-fA-F]+)";
    let exp = format!("[eE][+-]?{digits}");
    let pattern = format!(
        concat!(
            r"^[\x00-\x20]*",
            r"[+-]?(",
            r"NaN|",
            r"Infinity|",
            r"((({digits}(\.)?({digits}?)({exp})?)|",
            r"(\.({digits})({exp})?)|",
            r"((",
            r"(0[xX]{hex_digits}(\.)?)|",
            r"(0[xX]{hex_digits}?(\.){hex_digits})",
            r")[pP][+-]?{digits}))",
            r"[fFdD]?))",
            r"[\x00-\x20]*$",
        ),
        digits = digits,
        hex_digits = hex_digits,
        exp = exp,
    );
    Regex::new(&pattern).expect("literal pattern is valid")
});

/// Returns true if the entire string is a number literal.
pub fn is_literal(s: &str) -> bool {
    LITERAL.is_match(s)
}

/// Parses the entire string as a number literal, returning [`None`] if it is not one.
pub fn parse_literal(s: &str) -> Option<f64> {
    if !is_literal(s) {
        return None;
    }

    let s = s.trim_matches(|c: char| c <= ' ');
    let s = s.strip_suffix(['f', 'F', 'd', 'D']).unwrap_or(s);
    let (negative, body) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let magnitude = match body {
        "NaN" => f64::NAN,
        "Infinity" => f64::INFINITY,
        _ => match body.strip_prefix("0x").or_else(|| body.strip_prefix("0X")) {
            Some(hex) => parse_hex(hex)?,
            None => body.parse::<f64>().ok()?,
        },
    };

    Some(if negative { -magnitude } else { magnitude })
}

/// Converts the part of a hexadecimal literal after `0x`, such as `1.8p1`, to its value.
fn parse_hex(hex: &str) -> Option<f64> {
    let (mantissa, exponent) = hex.split_once(['p', 'P'])?;
    let (int_part, frac_part) = mantissa.split_once('.').unwrap_or((mantissa, ""));

    // digits past this magnitude are below the precision of `f64` and only move the exponent
    const SIGNIFICANT: f64 = (1u64 << 60) as f64;

    let mut value = 0.0f64;
    let mut dropped = 0i64;
    for c in int_part.chars().chain(frac_part.chars()) {
        let digit = f64::from(c.to_digit(16)?);
        if value < SIGNIFICANT {
            value = value * 16.0 + digit;
        } else {
            dropped += 1;
        }
    }
    if value == 0.0 {
        return Some(0.0);
    }

    // an exponent too large for `i32` still means overflow or underflow
    let exponent = exponent.parse::<i32>().unwrap_or_else(|_| {
        if exponent.starts_with('-') { i32::MIN } else { i32::MAX }
    });
    let shift = i64::from(exponent) + 4 * dropped - 4 * frac_part.len() as i64;
    let shift = shift.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32;

    // split the scale so that a large mantissa with a very negative exponent does not
    // overflow to infinity first
    let half = shift / 2;
    Some(value * 2f64.powi(half) * 2f64.powi(shift - half))
}
