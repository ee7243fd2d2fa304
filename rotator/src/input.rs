//! Decoding of untyped rotation arguments.
//!
//! `rotate_left` is statically typed, so type checks only happen where input
//! arrives untyped: command-line text and JSON/TOML documents. A value that is
//! integer-like but not an integer (a boolean, a whole float such as `2.0`) is
//! rejected as a shift.
//!
//! Shifts decoded here are not bounded by `i64`. Any non-negative integer is
//! accepted and reduced modulo the sequence length.

use std::fmt;
use std::num::IntErrorKind;

use serde_json::Value;

use crate::core::rotation::rotate_at;
use crate::error::RotateError;

/// A non-negative shift of any magnitude, held as canonical decimal digits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shift {
    digits: String,
}

impl Shift {
    /// `digits` must be non-empty and ASCII decimal.
    fn from_digits(digits: &str) -> Self {
        let trimmed = digits.trim_start_matches('0');
        let digits = if trimmed.is_empty() { "0" } else { trimmed };
        Self {
            digits: digits.to_string(),
        }
    }

    pub fn is_zero(&self) -> bool {
        self.digits == "0"
    }

    /// The shift as `u64`, if it fits.
    pub fn as_u64(&self) -> Option<u64> {
        self.digits.parse().ok()
    }

    /// Reduce the shift modulo `len`, folding one digit at a time.
    ///
    /// An empty sequence always yields `0`.
    pub fn effective(&self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        let modulus = len as u128;
        let reduced = self.digits.bytes().fold(0u128, |acc, digit| {
            (acc * 10 + u128::from(digit - b'0')) % modulus
        });
        // `reduced < len`, so the cast is lossless.
        reduced as usize
    }
}

impl From<u64> for Shift {
    fn from(shift: u64) -> Self {
        Self {
            digits: shift.to_string(),
        }
    }
}

impl fmt::Display for Shift {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.digits)
    }
}

/// Rotate `sequence` left by a decoded shift. Never fails.
pub fn rotate_by<T: Clone>(sequence: &[T], shift: &Shift) -> Vec<T> {
    rotate_at(sequence, shift.effective(sequence.len()))
}

/// Parse a shift count from command-line text.
///
/// Accepts an optional sign followed by decimal digits of any length. A
/// negative value other than `-0` is an invalid value.
pub fn shift_from_str(raw: &str) -> Result<Shift, RotateError> {
    let trimmed = raw.trim();
    let (negative, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    if digits.is_empty() || !digits.bytes().all(|byte| byte.is_ascii_digit()) {
        return Err(RotateError::not_an_integer_shift(text_kind(trimmed)));
    }
    let shift = Shift::from_digits(digits);
    if negative && !shift.is_zero() {
        return Err(RotateError::negative_shift(trimmed));
    }
    Ok(shift)
}

/// Parse sequence elements from command-line text.
pub fn sequence_from_strs<S: AsRef<str>>(raw: &[S]) -> Result<Vec<i64>, RotateError> {
    raw.iter()
        .enumerate()
        .map(|(index, item)| {
            let item = item.as_ref().trim();
            item.parse::<i64>().map_err(|err| match err.kind() {
                IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
                    RotateError::element_out_of_range(format!("integer {item} at index {index}"))
                }
                _ => RotateError::not_a_sequence(format!("{} at index {index}", text_kind(item))),
            })
        })
        .collect()
}

/// Extract a shift count from a decoded document value.
///
/// `None` stands for a missing field and is rejected like `null`. Documents
/// carry integers up to the `u64` range; larger literals decode as floats and
/// are rejected as such.
pub fn shift_from_value(value: Option<&Value>) -> Result<Shift, RotateError> {
    match value {
        Some(Value::Number(number)) => {
            if let Some(shift) = number.as_u64() {
                Ok(Shift::from(shift))
            } else if let Some(shift) = number.as_i64() {
                Err(RotateError::negative_shift(shift.to_string()))
            } else {
                Err(RotateError::not_an_integer_shift("float"))
            }
        }
        other => Err(RotateError::not_an_integer_shift(value_kind(other))),
    }
}

/// Extract an integer sequence from a decoded document value.
pub fn sequence_from_value(value: Option<&Value>) -> Result<Vec<i64>, RotateError> {
    let Some(Value::Array(items)) = value else {
        return Err(RotateError::not_a_sequence(value_kind(value)));
    };
    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            if let Some(element) = item.as_i64() {
                return Ok(element);
            }
            match item {
                Value::Number(number) if number.is_u64() => Err(RotateError::element_out_of_range(
                    format!("integer {number} at index {index}"),
                )),
                other => Err(RotateError::not_a_sequence(format!(
                    "{} at index {index}",
                    value_kind(Some(other))
                ))),
            }
        })
        .collect()
}

/// Validate both untyped arguments, then rotate.
///
/// The sequence is checked before the shift, and the shift's type before its
/// sign.
pub fn rotate_value(
    sequence: Option<&Value>,
    shift: Option<&Value>,
) -> Result<Vec<i64>, RotateError> {
    let sequence = sequence_from_value(sequence)?;
    let shift = shift_from_value(shift)?;
    Ok(rotate_by(&sequence, &shift))
}

fn value_kind(value: Option<&Value>) -> &'static str {
    match value {
        None => "nothing",
        Some(Value::Null) => "null",
        Some(Value::Bool(_)) => "boolean",
        Some(Value::Number(number)) if number.is_f64() => "float",
        Some(Value::Number(_)) => "integer",
        Some(Value::String(_)) => "string",
        Some(Value::Array(_)) => "array",
        Some(Value::Object(_)) => "table",
    }
}

fn text_kind(text: &str) -> &'static str {
    if text.is_empty() {
        "empty text"
    } else if text.parse::<bool>().is_ok() {
        "boolean"
    } else if text.parse::<f64>().is_ok() {
        "float"
    } else {
        "string"
    }
}
