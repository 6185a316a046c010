// src/numerics/linalg/lu.rs
// LU factorization without pivoting (Crout ordering: column by column).

use tracing::{trace, warn};

use crate::numerics::error::{MatrixError, Result};
use crate::numerics::types::matrix::Matrix;

/// LU decomposition: A = LU
///
/// `L` is lower triangular with a unit diagonal, `U` is upper triangular.
/// No rows are exchanged, so a singular leading principal submatrix makes
/// the factorization break down (non-finite entries) even when `A` itself
/// is invertible.
#[derive(Clone, Debug, PartialEq)]
pub struct LuDecomposition {
    lower: Matrix,
    upper: Matrix,
}

impl LuDecomposition {
    /// Factor a square matrix.
    pub fn new(a: &Matrix) -> Result<Self> {
        if !a.is_square() {
            return Err(MatrixError::NotSquare {
                rows: a.rows(),
                cols: a.cols(),
            });
        }
        let n = a.rows();
        trace!(size = n, "LU decomposition");

        let src = a.as_slice();
        let mut lower = Matrix::identity(n)?;
        let mut upper = Matrix::zeros(n, n)?;

        for j in 0..n {
            for i in 0..n {
                if i <= j {
                    let mut sum = 0.0f32;
                    for k in 0..i {
                        sum += lower[(i, k)] * upper[(k, j)];
                    }
                    upper[(i, j)] = src[i * n + j] - sum;
                } else {
                    let mut sum = 0.0f32;
                    for k in 0..j {
                        sum += lower[(i, k)] * upper[(k, j)];
                    }
                    lower[(i, j)] = (src[i * n + j] - sum) / upper[(j, j)];
                }
            }
            if upper[(j, j)].abs() < f32::EPSILON {
                warn!(
                    column = j,
                    pivot = upper[(j, j)],
                    "near-zero pivot in unpivoted LU; results may not be finite"
                );
            }
        }

        Ok(Self { lower, upper })
    }

    /// Unit lower-triangular factor
    pub fn lower(&self) -> &Matrix {
        &self.lower
    }

    /// Upper-triangular factor
    pub fn upper(&self) -> &Matrix {
        &self.upper
    }

    pub fn into_parts(self) -> (Matrix, Matrix) {
        (self.lower, self.upper)
    }

    pub fn size(&self) -> usize {
        self.upper.rows()
    }

    /// Determinant as the product of `U`'s diagonal.
    pub fn determinant(&self) -> f32 {
        (0..self.size()).map(|i| self.upper[(i, i)]).product()
    }

    /// Solve `Ax = b` by forward then back substitution.
    pub fn solve(&self, b: &[f32]) -> Result<Vec<f32>> {
        let n = self.size();
        if b.len() != n {
            return Err(MatrixError::LengthMismatch {
                expected: n,
                actual: b.len(),
            });
        }

        // Forward substitution (L * y = b), unit diagonal
        let mut y = b.to_vec();
        for i in 1..n {
            let mut sum = y[i];
            for k in 0..i {
                sum -= self.lower[(i, k)] * y[k];
            }
            y[i] = sum;
        }

        // Back substitution (U * x = y)
        let mut x = y;
        for i in (0..n).rev() {
            let mut sum = x[i];
            for k in (i + 1)..n {
                sum -= self.upper[(i, k)] * x[k];
            }
            x[i] = sum / self.upper[(i, i)];
        }

        Ok(x)
    }

    /// Inverse assembled column by column from `A x = e_col`.
    pub fn inverse(&self) -> Result<Matrix> {
        let n = self.size();
        let mut result = Matrix::zeros(n, n)?;
        let mut basis = vec![0.0f32; n];
        for col in 0..n {
            basis.fill(0.0);
            basis[col] = 1.0;
            let x = self.solve(&basis)?;
            for (row, value) in x.into_iter().enumerate() {
                result[(row, col)] = value;
            }
        }
        Ok(result)
    }
}

impl Matrix {
    /// LU factors of this matrix, see [`LuDecomposition`].
    pub fn lu_decompose(&self) -> Result<LuDecomposition> {
        LuDecomposition::new(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numerics::types::traits::ApproxEq;

    fn sample() -> Matrix {
        Matrix::from_vec(
            4,
            4,
            vec![
                4.0, 3.0, 2.0, 1.0, //
                2.0, 5.0, 1.0, 3.0, //
                1.0, 2.0, 6.0, 2.0, //
                3.0, 1.0, 2.0, 7.0,
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_factors_reproduce_input() {
        let a = sample();
        let lu = a.lu_decompose().unwrap();
        let product = lu.lower().multiply(lu.upper()).unwrap();
        assert!(product.approx_eq(&a, 1e-4));
    }

    #[test]
    fn test_factor_shapes() {
        let lu = sample().lu_decompose().unwrap();
        let (l, u) = lu.into_parts();
        for i in 0..4 {
            assert_eq!(l[(i, i)], 1.0);
            for j in (i + 1)..4 {
                assert_eq!(l[(i, j)], 0.0, "L must be lower triangular");
            }
            for j in 0..i {
                assert_eq!(u[(i, j)], 0.0, "U must be upper triangular");
            }
        }
    }

    #[test]
    fn test_solve_simple() {
        // [2 1] [x]   [5]    x=2, y=1
        // [1 3] [y] = [5]
        let a = Matrix::from_vec(2, 2, vec![2.0, 1.0, 1.0, 3.0]).unwrap();
        let lu = a.lu_decompose().unwrap();
        let x = lu.solve(&[5.0, 5.0]).unwrap();
        assert!((x[0] - 2.0).abs() < 1e-6);
        assert!((x[1] - 1.0).abs() < 1e-6);

        assert!(matches!(
            lu.solve(&[1.0]),
            Err(MatrixError::LengthMismatch { expected: 2, actual: 1 })
        ));
    }

    #[test]
    fn test_determinant_and_inverse() {
        let a = Matrix::from_vec(2, 2, vec![3.0, 7.0, 1.0, -4.0]).unwrap();
        let lu = a.lu_decompose().unwrap();
        assert!((lu.determinant() - (-19.0)).abs() < 1e-5);

        let inv = sample().lu_decompose().unwrap().inverse().unwrap();
        let prod = sample().multiply(&inv).unwrap();
        assert!(prod.approx_eq(&Matrix::identity(4).unwrap(), 1e-5));
    }

    #[test]
    fn test_non_square_rejected() {
        let a = Matrix::zeros(2, 3).unwrap();
        assert_eq!(
            a.lu_decompose().unwrap_err(),
            MatrixError::NotSquare { rows: 2, cols: 3 }
        );
    }

    #[test]
    fn test_zero_leading_pivot_breaks_down() {
        // invertible, but the unpivoted factorization divides by U[0][0] = 0
        let a = Matrix::from_vec(2, 2, vec![0.0, 1.0, 1.0, 0.0]).unwrap();
        let lu = a.lu_decompose().unwrap();
        assert!(!lu.lower()[(1, 0)].is_finite());
    }
}
