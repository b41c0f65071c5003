//! Fixed-point decimal numbers.
//!
//! A [`Decimal`] is an integer mantissa scaled by a power of ten. Arithmetic on
//! it is exact: `3.5 * 2` is `7.0`, with no binary floating-point rounding in
//! between. The scale of an operand is carried into the result, so the product
//! above keeps its single fractional digit. Scale only affects display:
//! `7.0` and `7` compare and hash as the same number.

use serde::Deserialize;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;
use thiserror::Error;

/// Largest number of fractional digits a [`Decimal`] may carry.
pub const MAX_SCALE: u32 = 28;

/// An exact decimal value: `mantissa / 10^scale`.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(try_from = "String")]
pub struct Decimal {
    mantissa: i128,
    scale: u32,
}

/// Failure to read a decimal literal.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecimalParseError {
    #[error("empty decimal literal")]
    Empty,
    #[error("invalid character `{found}` at offset {offset} in decimal literal")]
    InvalidCharacter { found: char, offset: usize },
    #[error("decimal literal has more than {} fractional digits", MAX_SCALE)]
    ScaleTooLarge,
    #[error("decimal literal is out of range")]
    Overflow,
}

impl Decimal {
    /// Builds `mantissa / 10^scale`.
    ///
    /// # Panics
    ///
    /// Panics if `scale` exceeds [`MAX_SCALE`].
    pub const fn new(mantissa: i128, scale: u32) -> Self {
        assert!(scale <= MAX_SCALE, "decimal scale out of range");
        Self { mantissa, scale }
    }

    /// Multiplies by an integer, keeping the scale. `None` on overflow.
    pub fn checked_mul_int(self, rhs: i64) -> Option<Self> {
        let mantissa = self.mantissa.checked_mul(i128::from(rhs))?;
        Some(Self {
            mantissa,
            scale: self.scale,
        })
    }

    /// Same value with trailing fractional zeros dropped.
    fn normalized(self) -> (i128, u32) {
        let (mut mantissa, mut scale) = (self.mantissa, self.scale);
        while scale > 0 && mantissa % 10 == 0 {
            mantissa /= 10;
            scale -= 1;
        }
        (mantissa, scale)
    }
}

impl PartialEq for Decimal {
    fn eq(&self, other: &Self) -> bool {
        self.normalized() == other.normalized()
    }
}

impl Eq for Decimal {}

impl Hash for Decimal {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.normalized().hash(state);
    }
}

impl FromStr for Decimal {
    type Err = DecimalParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (negative, digits_start) = match s.as_bytes().first() {
            None => return Err(DecimalParseError::Empty),
            Some(b'-') => (true, 1),
            Some(b'+') => (false, 1),
            Some(_) => (false, 0),
        };

        let mut mantissa: i128 = 0;
        let mut scale = 0u32;
        let mut seen_point = false;
        let mut seen_digit = false;

        for (offset, ch) in s.char_indices().skip(digits_start) {
            match ch {
                '0'..='9' => {
                    let digit = i128::from(ch as u8 - b'0');
                    mantissa = mantissa
                        .checked_mul(10)
                        .and_then(|m| m.checked_add(digit))
                        .ok_or(DecimalParseError::Overflow)?;
                    seen_digit = true;
                    if seen_point {
                        scale += 1;
                        if scale > MAX_SCALE {
                            return Err(DecimalParseError::ScaleTooLarge);
                        }
                    }
                }
                '.' if !seen_point => seen_point = true,
                found => return Err(DecimalParseError::InvalidCharacter { found, offset }),
            }
        }

        if !seen_digit {
            return Err(DecimalParseError::Empty);
        }

        Ok(Self {
            mantissa: if negative { -mantissa } else { mantissa },
            scale,
        })
    }
}

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.mantissa.unsigned_abs().to_string();
        let sign = if self.mantissa < 0 { "-" } else { "" };
        let scale = self.scale as usize;

        if scale == 0 {
            return write!(f, "{sign}{digits}");
        }

        // Left-pad so there is always at least one integral digit.
        let padded = format!("{digits:0>width$}", width = scale + 1);
        let (integral, fractional) = padded.split_at(padded.len() - scale);
        write!(f, "{sign}{integral}.{fractional}")
    }
}

impl TryFrom<String> for Decimal {
    type Error = DecimalParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
