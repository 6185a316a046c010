// src/numerics/types/traits.rs
// Tolerance-based comparison for floating point results.

use super::matrix::Matrix;

/// Equality up to an absolute tolerance.
///
/// Matrix comparisons require equal shapes and every element pair to be
/// within `tolerance` of each other.
pub trait ApproxEq {
    fn approx_eq(&self, other: &Self, tolerance: f32) -> bool;
}

impl ApproxEq for f32 {
    fn approx_eq(&self, other: &Self, tolerance: f32) -> bool {
        (self - other).abs() <= tolerance
    }
}

impl ApproxEq for Matrix {
    fn approx_eq(&self, other: &Self, tolerance: f32) -> bool {
        self.shape() == other.shape()
            && self
                .as_slice()
                .iter()
                .zip(other.as_slice())
                .all(|(a, b)| a.approx_eq(b, tolerance))
    }
}
