//! Exact integer kernel for reconstructing a polynomial's constant term
//! from sample points whose ordinates are written in bases 2 through 16.

pub mod error;
pub mod lagrange;
pub mod point;
pub mod poly;
pub mod prelude;
pub mod radix;

pub use error::{DecodeError, InterpolationError, MathError, Result};
