pub use crate::{
    lagrange::{interpolate_at, interpolate_constant},
    point::Point,
    poly::IntegerPolynomial,
    radix::{decode_base, Radix, ALPHABET},
};
