use std::fmt;

use num_bigint::BigInt;

/// One sample `(x, y)` of an integer polynomial.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Point {
    x: u64,
    y: BigInt,
}

impl Point {
    pub fn new(x: u64, y: impl Into<BigInt>) -> Self {
        Point { x, y: y.into() }
    }

    #[inline]
    pub fn x(&self) -> u64 {
        self.x
    }

    #[inline]
    pub fn y(&self) -> &BigInt {
        &self.y
    }

    /// Abscissa lifted into the signed big-integer domain.
    pub(crate) fn x_big(&self) -> BigInt {
        BigInt::from(self.x)
    }
}

impl From<(u64, i64)> for Point {
    fn from((x, y): (u64, i64)) -> Self {
        Point::new(x, y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
