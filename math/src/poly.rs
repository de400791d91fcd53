//! Polynomials with exact integer coefficients.
//!
//! Used to sample points on a known polynomial so that reconstruction can
//! be checked against its constant term.

use std::fmt;

use num_bigint::BigInt;
use num_traits::Zero;

use crate::point::Point;

/// Coefficients in ascending order of degree: `c0 + c1*x + c2*x^2 + ...`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct IntegerPolynomial {
    coefficients: Vec<BigInt>,
}

impl IntegerPolynomial {
    pub fn new(coefficients: Vec<BigInt>) -> Self {
        IntegerPolynomial { coefficients }
    }

    pub fn coefficients(&self) -> &[BigInt] {
        &self.coefficients
    }

    /// Degree of the coefficient vector; the zero polynomial reports 0.
    pub fn degree(&self) -> usize {
        self.coefficients
            .iter()
            .rposition(|c| !c.is_zero())
            .unwrap_or(0)
    }

    /// Coefficient of `x^0`.
    pub fn constant_term(&self) -> &BigInt {
        static ZERO: BigInt = BigInt::ZERO;
        self.coefficients.first().unwrap_or(&ZERO)
    }

    /// Horner evaluation at `x`.
    pub fn evaluate(&self, x: &BigInt) -> BigInt {
        self.coefficients
            .iter()
            .rev()
            .fold(BigInt::zero(), |acc, c| acc * x + c)
    }

    /// Evaluate at every abscissa in `xs`, in order.
    pub fn sample<I>(&self, xs: I) -> Vec<Point>
    where
        I: IntoIterator<Item = u64>,
    {
        xs.into_iter()
            .map(|x| Point::new(x, self.evaluate(&BigInt::from(x))))
            .collect()
    }
}

impl From<Vec<BigInt>> for IntegerPolynomial {
    fn from(coefficients: Vec<BigInt>) -> Self {
        IntegerPolynomial::new(coefficients)
    }
}

impl From<Vec<i64>> for IntegerPolynomial {
    fn from(coefficients: Vec<i64>) -> Self {
        IntegerPolynomial::new(
            coefficients.into_iter().map(BigInt::from).collect(),
        )
    }
}

impl fmt::Display for IntegerPolynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut terms = self
            .coefficients
            .iter()
            .enumerate()
            .filter(|(_, c)| !c.is_zero())
            .peekable();
        if terms.peek().is_none() {
            return write!(f, "0");
        }
        for (i, (power, c)) in terms.enumerate() {
            if i > 0 {
                write!(f, " + ")?;
            }
            match power {
                0 => write!(f, "{c}")?,
                1 => write!(f, "{c}*x")?,
                _ => write!(f, "{c}*x^{power}")?,
            }
        }
        Ok(())
    }
}
