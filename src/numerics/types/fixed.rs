// src/numerics/types/fixed.rs
// Fixed-size 2x2, 3x3 and 4x4 wrappers around the generic matrix.
//
// Read-only operations are reached through `Deref<Target = Matrix>`, so
// results come back as plain `Matrix` values and are not narrowed again.
// Mutation goes through the forwarded methods below, none of which can
// change the shape.

use core::fmt;
use core::ops::Deref;

use crate::numerics::error::{MatrixError, Result};
use crate::numerics::types::matrix::Matrix;
use crate::numerics::types::seed::SeedData;

macro_rules! fixed_matrix {
    ($(#[$meta:meta])* $name:ident, $n:expr, [$($v:ident),+ $(,)?]) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq)]
        pub struct $name(Matrix);

        impl $name {
            pub const SIZE: usize = $n;

            /// Construct from an optional seed; `None` gives zeros.
            ///
            /// A flat seed must hold exactly `SIZE * SIZE` values and a
            /// nested seed exactly `SIZE` rows of `SIZE` values.
            pub fn new(seed: Option<SeedData>) -> Result<Self> {
                match &seed {
                    Some(SeedData::Flat(values)) if values.len() != $n * $n => {
                        return Err(MatrixError::ShapeMismatch(format!(
                            "{} data must have {} elements",
                            stringify!($name),
                            $n * $n
                        )));
                    }
                    Some(SeedData::Nested(rows))
                        if rows.len() != $n || rows.iter().any(|r| r.len() != $n) =>
                    {
                        return Err(MatrixError::ShapeMismatch(format!(
                            "{} data must be {}x{}",
                            stringify!($name),
                            $n,
                            $n
                        )));
                    }
                    _ => {}
                }
                Matrix::from_seed($n, $n, seed).map(Self)
            }

            /// Positional per-element constructor, row-major.
            #[allow(clippy::too_many_arguments)]
            pub fn from_values($($v: f32),+) -> Self {
                Self(Matrix::from_parts($n, $n, vec![$($v),+]))
            }

            pub fn from_rows(rows: [[f32; $n]; $n]) -> Self {
                Self(Matrix::from_parts($n, $n, rows.concat()))
            }

            /// Identity matrix
            pub fn identity() -> Self {
                let mut m = Matrix::from_parts($n, $n, vec![0.0; $n * $n]);
                for i in 0..$n {
                    m[(i, i)] = 1.0;
                }
                Self(m)
            }

            pub fn as_matrix(&self) -> &Matrix {
                &self.0
            }

            pub fn into_matrix(self) -> Matrix {
                self.0
            }

            pub fn set(&mut self, row: usize, col: usize, value: f32) -> Result<()> {
                self.0.set(row, col, value)
            }

            /// Replace every element from a flat row-major slice.
            pub fn set_all(&mut self, values: &[f32]) -> Result<()> {
                self.0.set_all(values)
            }

            pub fn swap_rows(&mut self, r1: usize, r2: usize) -> Result<()> {
                self.0.swap_rows(r1, r2)
            }

            pub fn scale_row(&mut self, row: usize, scalar: f32) -> Result<()> {
                self.0.scale_row(row, scalar)
            }

            pub fn add_row_multiple(
                &mut self,
                target: usize,
                source: usize,
                scalar: f32,
            ) -> Result<()> {
                self.0.add_row_multiple(target, source, scalar)
            }

            pub fn add_in_place(&mut self, other: &Matrix) -> Result<()> {
                self.0.add_in_place(other)
            }

            pub fn subtract_in_place(&mut self, other: &Matrix) -> Result<()> {
                self.0.subtract_in_place(other)
            }

            pub fn scale_in_place(&mut self, scalar: f32) {
                self.0.scale_in_place(scalar)
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self(Matrix::from_parts($n, $n, vec![0.0; $n * $n]))
            }
        }

        impl Deref for $name {
            type Target = Matrix;

            fn deref(&self) -> &Matrix {
                &self.0
            }
        }

        impl From<$name> for Matrix {
            fn from(m: $name) -> Matrix {
                m.0
            }
        }

        impl TryFrom<Matrix> for $name {
            type Error = MatrixError;

            fn try_from(m: Matrix) -> Result<Self> {
                if m.shape() != ($n, $n) {
                    return Err(MatrixError::ShapeMismatch(format!(
                        "{} must be {}x{}, got {}x{}",
                        stringify!($name),
                        $n,
                        $n,
                        m.rows(),
                        m.cols()
                    )));
                }
                Ok(Self(m))
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Display::fmt(&self.0, f)
            }
        }
    };
}

fixed_matrix!(
    /// 2x2 matrix
    Mat2, 2, [m00, m01, m10, m11]
);

fixed_matrix!(
    /// 3x3 matrix
    Mat3, 3, [m00, m01, m02, m10, m11, m12, m20, m21, m22]
);

fixed_matrix!(
    /// 4x4 matrix
    Mat4, 4, [
        m00, m01, m02, m03, m10, m11, m12, m13, m20, m21, m22, m23, m30, m31, m32, m33,
    ]
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numerics::types::traits::ApproxEq;

    #[test]
    fn test_fixed_constructors() {
        let a = Mat2::from_values(1.0, 2.0, 3.0, 4.0);
        assert_eq!(a.shape(), (2, 2));
        assert_eq!(a.get(1, 0).unwrap(), 3.0);

        let b = Mat2::new(Some(SeedData::Flat(vec![1.0, 2.0, 3.0, 4.0]))).unwrap();
        assert_eq!(a, b);

        let c = Mat2::new(Some(SeedData::Nested(vec![vec![1.0, 2.0], vec![3.0, 4.0]]))).unwrap();
        assert_eq!(a, c);

        let d = Mat2::from_rows([[1.0, 2.0], [3.0, 4.0]]);
        assert_eq!(a, d);

        let zero = Mat3::new(None).unwrap();
        assert_eq!(zero, Mat3::default());
        assert!(zero.as_slice().iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_fixed_shape_errors() {
        let err = Mat2::new(Some(SeedData::Flat(vec![1.0, 2.0, 3.0]))).unwrap_err();
        assert_eq!(
            err,
            MatrixError::ShapeMismatch("Mat2 data must have 4 elements".into())
        );

        let err = Mat2::new(Some(SeedData::Nested(vec![vec![1.0, 2.0], vec![3.0]]))).unwrap_err();
        assert_eq!(err, MatrixError::ShapeMismatch("Mat2 data must be 2x2".into()));

        let err = Mat3::new(Some(SeedData::Nested(vec![vec![1.0, 2.0, 3.0]; 2]))).unwrap_err();
        assert_eq!(err, MatrixError::ShapeMismatch("Mat3 data must be 3x3".into()));

        assert!(Mat4::new(Some(SeedData::Flat(vec![0.0; 9]))).is_err());
    }

    #[test]
    fn test_identity() {
        assert_eq!(Mat2::identity().as_matrix(), &Matrix::identity(2).unwrap());
        assert_eq!(Mat3::identity().into_matrix(), Matrix::identity(3).unwrap());
        assert_eq!(Mat4::identity().determinant().unwrap(), 1.0);
    }

    #[test]
    fn test_operations_yield_generic_matrix() {
        let a = Mat3::from_values(2.0, 0.0, 0.0, 0.0, 3.0, 0.0, 0.0, 0.0, 4.0);
        let inv: Matrix = a.invert().unwrap();
        let product = a.multiply(&inv).unwrap();
        assert!(product.approx_eq(&Matrix::identity(3).unwrap(), 1e-6));

        let t: Matrix = Mat2::from_values(1.0, 2.0, 3.0, 4.0).transpose();
        assert_eq!(t.as_slice(), &[1.0, 3.0, 2.0, 4.0]);
    }

    #[test]
    fn test_conversions() {
        let generic: Matrix = Mat2::identity().into();
        let back = Mat2::try_from(generic).unwrap();
        assert_eq!(back, Mat2::identity());

        assert!(matches!(
            Mat4::try_from(Matrix::identity(3).unwrap()),
            Err(MatrixError::ShapeMismatch(_))
        ));
    }

    #[test]
    fn test_mutation_keeps_fixed_shape() {
        let mut m = Mat2::identity();
        m.set(0, 1, 5.0).unwrap();
        m.scale_row(1, 2.0).unwrap();
        assert_eq!(m.as_slice(), &[1.0, 5.0, 0.0, 2.0]);
        assert_eq!(m.to_string(), "[1.000, 5.000]\n[0.000, 2.000]");

        m.swap_rows(0, 1).unwrap();
        m.add_row_multiple(1, 0, -1.0).unwrap();
        assert_eq!(m.as_slice(), &[0.0, 2.0, 1.0, 3.0]);

        m.add_in_place(&Matrix::identity(2).unwrap()).unwrap();
        m.subtract_in_place(&Matrix::ones(2, 2).unwrap()).unwrap();
        m.scale_in_place(2.0);
        assert_eq!(m.as_slice(), &[0.0, 2.0, 0.0, 6.0]);

        // wrong-sized operands are rejected and the shape stays 2x2
        assert!(m.set_all(&[0.0; 25]).is_err());
        assert!(m.add_in_place(&Matrix::identity(5).unwrap()).is_err());
        assert!(m.set(2, 0, 1.0).is_err());
        assert_eq!(m.shape(), (2, 2));
        assert_eq!(m.as_slice(), &[0.0, 2.0, 0.0, 6.0]);

        m.set_all(&[4.0, 3.0, 2.0, 1.0]).unwrap();
        assert_eq!(m, Mat2::from_values(4.0, 3.0, 2.0, 1.0));
    }
}
