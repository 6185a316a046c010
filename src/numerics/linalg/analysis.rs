// src/numerics/linalg/analysis.rs
// Determinant, minor, inverse and rank of dense matrices.
//
// Sizes up to 3 use closed forms. Larger matrices go through the unpivoted
// LU factorization for both determinant and inverse, so the two stay in the
// same family and agree on sign and magnitude.

use tracing::{debug, trace, warn};

use crate::numerics::config::AnalysisConfig;
use crate::numerics::error::{MatrixError, Result};
use crate::numerics::linalg::lu::LuDecomposition;
use crate::numerics::types::matrix::Matrix;

impl Matrix {
    fn require_square(&self) -> Result<usize> {
        if !self.is_square() {
            return Err(MatrixError::NotSquare {
                rows: self.rows(),
                cols: self.cols(),
            });
        }
        Ok(self.rows())
    }

    /// Determinant of a square matrix.
    ///
    /// For `n >= 4` this is the product of `U`'s diagonal. Without pivoting a
    /// singular or badly conditioned matrix may yield a small non-zero, wrong
    /// signed or non-finite value instead of an error.
    pub fn determinant(&self) -> Result<f32> {
        self.determinant_with(&AnalysisConfig::default())
    }

    pub fn determinant_with(&self, config: &AnalysisConfig) -> Result<f32> {
        let n = self.require_square()?;
        let m = self.as_slice();
        match n {
            1 => Ok(m[0]),
            2 => Ok(m[0] * m[3] - m[1] * m[2]),
            3 => Ok(m[0] * (m[4] * m[8] - m[5] * m[7]) - m[1] * (m[3] * m[8] - m[5] * m[6])
                + m[2] * (m[3] * m[7] - m[4] * m[6])),
            _ => {
                debug!(size = n, "determinant via LU");
                warn_if_large(n, config, "determinant");
                Ok(LuDecomposition::new(self)?.determinant())
            }
        }
    }

    /// Submatrix with `row` and `col` removed.
    pub fn minor(&self, row: usize, col: usize) -> Result<Matrix> {
        let n = self.require_square()?;
        if row >= n || col >= n {
            return Err(MatrixError::IndexOutOfBounds {
                row,
                col,
                rows: n,
                cols: n,
            });
        }
        if n == 1 {
            // nothing would be left
            return Err(MatrixError::InvalidDimension { rows: 0, cols: 0 });
        }
        let elements = (0..n)
            .filter(|&r| r != row)
            .flat_map(|r| {
                self.row_slice(r)
                    .iter()
                    .enumerate()
                    .filter(move |&(c, _)| c != col)
                    .map(|(_, &v)| v)
            })
            .collect();
        Ok(Matrix::from_parts(n - 1, n - 1, elements))
    }

    /// Sum of the diagonal.
    pub fn trace(&self) -> Result<f32> {
        let n = self.require_square()?;
        Ok((0..n).map(|i| self[(i, i)]).sum())
    }

    /// Whether `|det|` falls below the default singular threshold.
    pub fn is_singular(&self) -> Result<bool> {
        self.is_singular_with(&AnalysisConfig::default())
    }

    pub fn is_singular_with(&self, config: &AnalysisConfig) -> Result<bool> {
        let det = self.determinant_with(config)?;
        Ok(det.abs() < config.singular_threshold)
    }

    /// Inverse of a square, non-singular matrix.
    pub fn invert(&self) -> Result<Matrix> {
        self.invert_with(&AnalysisConfig::default())
    }

    pub fn invert_with(&self, config: &AnalysisConfig) -> Result<Matrix> {
        let n = self.require_square()?;
        if n > 3 {
            debug!(size = n, "inverse via LU substitution");
            warn_if_large(n, config, "inverse");
            let lu = LuDecomposition::new(self)?;
            check_singular(lu.determinant(), config)?;
            return lu.inverse();
        }

        let det = self.determinant_with(config)?;
        check_singular(det, config)?;

        let m = self.as_slice();
        let adjugate = match n {
            1 => vec![1.0],
            2 => vec![m[3], -m[1], -m[2], m[0]],
            _ => vec![
                m[4] * m[8] - m[5] * m[7],
                m[2] * m[7] - m[1] * m[8],
                m[1] * m[5] - m[2] * m[4],
                m[5] * m[6] - m[3] * m[8],
                m[0] * m[8] - m[2] * m[6],
                m[2] * m[3] - m[0] * m[5],
                m[3] * m[7] - m[4] * m[6],
                m[1] * m[6] - m[0] * m[7],
                m[0] * m[4] - m[1] * m[3],
            ],
        };
        let elements = adjugate.into_iter().map(|v| v / det).collect();
        Ok(Matrix::from_parts(n, n, elements))
    }

    /// Number of linearly independent rows.
    ///
    /// Gaussian elimination with partial pivoting on a private copy.
    pub fn rank(&self) -> usize {
        self.rank_with(&AnalysisConfig::default())
    }

    pub fn rank_with(&self, config: &AnalysisConfig) -> usize {
        let (rows, cols) = self.shape();
        trace!(rows, cols, "rank elimination");
        let mut work = self.clone();
        let mut rank = 0;
        let mut row = 0;

        for col in 0..cols {
            if row >= rows {
                break;
            }

            let mut pivot_row = row;
            let mut max_val = work[(row, col)].abs();
            for r in (row + 1)..rows {
                let v = work[(r, col)].abs();
                if v > max_val {
                    max_val = v;
                    pivot_row = r;
                }
            }
            if max_val < config.pivot_threshold {
                continue;
            }

            work.swap_rows_unchecked(row, pivot_row);
            let pivot = work[(row, col)];
            for j in 0..cols {
                work[(row, j)] /= pivot;
            }
            for r in (row + 1)..rows {
                let factor = work[(r, col)];
                if factor != 0.0 {
                    work.add_row_multiple_unchecked(r, row, -factor);
                }
            }

            row += 1;
            rank += 1;
        }

        rank
    }
}

fn check_singular(det: f32, config: &AnalysisConfig) -> Result<()> {
    if det.abs() < config.singular_threshold {
        return Err(MatrixError::SingularMatrix { determinant: det });
    }
    Ok(())
}

fn warn_if_large(n: usize, config: &AnalysisConfig, operation: &str) {
    if n > config.large_matrix_warning {
        warn!(
            size = n,
            operation,
            "large matrix on the unpivoted LU path; accuracy may degrade"
        );
    }
}
