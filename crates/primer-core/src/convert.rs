//! Conversions between primitive types.

use crate::error::{PrimerError, Result};
use std::num::IntErrorKind;

/// Widens an integer to floating point. Lossless for every `i32`.
pub fn widen(value: i32) -> f64 {
    f64::from(value)
}

/// Narrows a float to an integer by dropping the fractional part.
///
/// `19.99` becomes `19`, `-19.99` becomes `-19`. Values outside the `i32`
/// range saturate and NaN becomes `0`.
pub fn truncate(value: f64) -> i32 {
    value as i32
}

/// Parses integer text, surrounding whitespace allowed.
///
/// Anything else fails with [`PrimerError::InvalidNumericLiteral`], whose label
/// points at the part of `text` that could not be read.
pub fn parse_integer(text: &str) -> Result<i32> {
    let trimmed = text.trim();
    trimmed.parse::<i32>().map_err(|source| {
        let lead = text.len() - text.trim_start().len();
        let (offset, len, reason) = match source.kind() {
            IntErrorKind::Empty => (0, text.len(), "no digits found".to_string()),
            IntErrorKind::InvalidDigit => {
                let (at, ch) = first_invalid(trimmed);
                (lead + at, ch.len_utf8(), format!("`{ch}` is not a digit"))
            }
            IntErrorKind::PosOverflow => (lead, trimmed.len(), "too large for i32".to_string()),
            IntErrorKind::NegOverflow => (lead, trimmed.len(), "too small for i32".to_string()),
            _ => (lead, trimmed.len(), source.to_string()),
        };
        PrimerError::InvalidNumericLiteral {
            text: text.to_string(),
            span: (offset, len).into(),
            reason,
            source,
        }
    })
}

/// Locates the first character `str::parse::<i32>` rejects.
fn first_invalid(text: &str) -> (usize, char) {
    let mut chars = text.char_indices().peekable();
    if let Some(&(_, '+' | '-')) = chars.peek() {
        let (at, sign) = chars.next().unwrap_or((0, '+'));
        // A lone sign has no digits after it.
        if chars.peek().is_none() {
            return (at, sign);
        }
    }
    chars
        .find(|(_, c)| !c.is_ascii_digit())
        .unwrap_or((0, text.chars().next().unwrap_or(' ')))
}

/// Name of the type the compiler inferred for `value`.
pub fn type_name_of<T>(_value: &T) -> &'static str {
    std::any::type_name::<T>()
}
