//! Positional decoding of digit strings in bases 2 through 16.

use std::fmt;
use std::num::IntErrorKind;
use std::str::FromStr;

use num_bigint::BigUint;
use num_traits::Zero;

use crate::error::DecodeError;

/// Digit alphabet; a character's value is its position in this table.
pub const ALPHABET: [u8; 16] = *b"0123456789abcdef";

/// A base in the inclusive range [`Radix::MIN`, `Radix::MAX`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Radix(u32);

impl Radix {
    pub const MIN: u32 = 2;
    pub const MAX: u32 = ALPHABET.len() as u32;

    pub const BINARY: Radix = Radix(2);
    pub const DECIMAL: Radix = Radix(10);
    pub const HEXADECIMAL: Radix = Radix(16);

    /// Validate `base`, rejecting zero, negatives and anything above 16.
    pub fn new(base: i64) -> Result<Self, DecodeError> {
        if (i64::from(Self::MIN)..=i64::from(Self::MAX)).contains(&base) {
            Ok(Radix(base as u32))
        } else {
            Err(DecodeError::InvalidBase(base))
        }
    }

    #[inline]
    pub const fn get(self) -> u32 {
        self.0
    }

    /// Value of `c` in this base, or `None` if `c` is not a digit of it.
    pub fn digit_value(self, c: char) -> Option<u32> {
        let lowered = c.to_ascii_lowercase();
        if !lowered.is_ascii() {
            return None;
        }
        ALPHABET
            .iter()
            .position(|&d| d == lowered as u8)
            .map(|value| value as u32)
            .filter(|&value| value < self.0)
    }

    /// Horner-evaluate `digits` from the most significant end.
    ///
    /// The empty string decodes to zero.
    pub fn decode(self, digits: &str) -> Result<BigUint, DecodeError> {
        digits.chars().enumerate().try_fold(
            BigUint::zero(),
            |acc, (position, digit)| {
                let value = self.digit_value(digit).ok_or(
                    DecodeError::InvalidDigit {
                        digit,
                        position,
                        base: self.0,
                    },
                )?;
                Ok(acc * self.0 + value)
            },
        )
    }
}

impl TryFrom<i64> for Radix {
    type Error = DecodeError;

    fn try_from(base: i64) -> Result<Self, Self::Error> {
        Radix::new(base)
    }
}

impl TryFrom<u32> for Radix {
    type Error = DecodeError;

    fn try_from(base: u32) -> Result<Self, Self::Error> {
        Radix::new(i64::from(base))
    }
}

impl FromStr for Radix {
    type Err = DecodeError;

    /// Parse a decimal base. Integers too large for `i64` are out of range,
    /// reported as [`DecodeError::InvalidBase`] clamped to the nearest bound.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let base: i64 =
            s.trim().parse().map_err(|err: std::num::ParseIntError| {
                match err.kind() {
                    IntErrorKind::PosOverflow => {
                        DecodeError::InvalidBase(i64::MAX)
                    }
                    IntErrorKind::NegOverflow => {
                        DecodeError::InvalidBase(i64::MIN)
                    }
                    _ => DecodeError::MalformedBase(s.to_owned()),
                }
            })?;
        Radix::new(base)
    }
}

impl fmt::Display for Radix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Decode `digits` written in `base` into an exact non-negative integer.
pub fn decode_base(digits: &str, base: i64) -> Result<BigUint, DecodeError> {
    Radix::new(base)?.decode(digits)
}
