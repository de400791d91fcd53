//! Exact Lagrange interpolation over the integers.
//!
//! Every basis term is kept as a reduced fraction and the terms are summed
//! as rationals. Individual terms of an integer polynomial need not be
//! integral even though their sum is, so dividing term by term would
//! truncate.

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Zero};

use crate::error::InterpolationError;
use crate::point::Point;

/// Take the first `k` points, failing when fewer are available.
fn active_points(
    points: &[Point],
    k: usize,
) -> Result<&[Point], InterpolationError> {
    if k == 0 {
        return Err(InterpolationError::InvalidThreshold(k));
    }
    if points.len() < k {
        return Err(InterpolationError::InsufficientPoints {
            required: k,
            available: points.len(),
        });
    }
    Ok(&points[..k])
}

/// The i-th Lagrange term `y_i * prod_{j != i} (x - x_j) / (x_i - x_j)`.
///
/// The whole numerator and denominator are multiplied out before a single
/// reduction.
fn basis_term(
    points: &[Point],
    i: usize,
    x: &BigInt,
) -> Result<BigRational, InterpolationError> {
    let xi = points[i].x_big();
    let (numerator, denominator) = points
        .iter()
        .enumerate()
        .filter(|&(j, _)| j != i)
        .fold(
            (points[i].y().clone(), BigInt::one()),
            |(num, den), (_, pj)| {
                let xj = pj.x_big();
                (num * (x - &xj), den * (&xi - xj))
            },
        );

    if denominator.is_zero() {
        return Err(InterpolationError::DegenerateInput { x: points[i].x() });
    }
    Ok(BigRational::new(numerator, denominator))
}

/// Evaluate the polynomial through the first `k` points at `x`.
///
/// The result is exact; it is integral whenever the points lie on an
/// integer polynomial and `x` is an integer.
pub fn interpolate_at(
    points: &[Point],
    k: usize,
    x: &BigInt,
) -> Result<BigRational, InterpolationError> {
    let active = active_points(points, k)?;
    (0..active.len()).try_fold(BigRational::zero(), |acc, i| {
        Ok(acc + basis_term(active, i, x)?)
    })
}

/// Recover the constant term of the degree `k - 1` polynomial through the
/// first `k` points.
pub fn interpolate_constant(
    points: &[Point],
    k: usize,
) -> Result<BigInt, InterpolationError> {
    let value = interpolate_at(points, k, &BigInt::zero())?;
    if value.is_integer() {
        Ok(value.to_integer())
    } else {
        let (numerator, denominator) = value.into_raw();
        Err(InterpolationError::non_integral(numerator, denominator))
    }
}
