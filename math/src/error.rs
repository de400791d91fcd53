use num_bigint::BigInt;
use thiserror::Error;

pub mod radix {
    use thiserror::Error;

    #[derive(Debug, Clone, PartialEq, Eq, Error)]
    #[non_exhaustive]
    pub enum Error {
        #[error("base {0} is outside the supported range [2, 16]")]
        InvalidBase(i64),
        #[error("base {0:?} is not a decimal integer")]
        MalformedBase(String),
        #[error("Invalid digit '{digit}' at position {position} for base {base}")]
        InvalidDigit {
            digit: char,
            position: usize,
            base: u32,
        },
    }
}

pub mod lagrange {
    use num_bigint::BigInt;
    use thiserror::Error;

    #[derive(Debug, Clone, PartialEq, Eq, Error)]
    #[non_exhaustive]
    pub enum Error {
        #[error("threshold must be at least 1, got {0}")]
        InvalidThreshold(usize),
        #[error("Need {required} points but found {available}")]
        InsufficientPoints { required: usize, available: usize },
        #[error("duplicate x-coordinate {x}: Lagrange denominator is zero")]
        DegenerateInput { x: u64 },
        #[error(
            "points do not lie on an integer polynomial: constant term is {numerator}/{denominator}"
        )]
        NonIntegral {
            numerator: BigInt,
            denominator: BigInt,
        },
    }
}

pub use lagrange::Error as InterpolationError;
pub use radix::Error as DecodeError;

/// Common result type used across this crate.
pub type Result<T, E = MathError> = core::result::Result<T, E>;

/// Top-level error type to keep error management simple for users.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
#[non_exhaustive]
pub enum MathError {
    #[error(transparent)]
    Decode(#[from] DecodeError),
    #[error(transparent)]
    Interpolation(#[from] InterpolationError),
}

pub type Error = MathError;

impl InterpolationError {
    pub(crate) fn non_integral(numerator: BigInt, denominator: BigInt) -> Self {
        InterpolationError::NonIntegral {
            numerator,
            denominator,
        }
    }
}
