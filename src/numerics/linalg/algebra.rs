// src/numerics/linalg/algebra.rs
// Elementwise arithmetic, matrix product and transpose.

use core::ops::{Add, Mul, Neg, Sub};

use crate::numerics::error::{MatrixError, Result};
use crate::numerics::types::matrix::Matrix;

impl Matrix {
    fn check_same_shape(&self, other: &Matrix, operation: &'static str) -> Result<()> {
        if self.shape() != other.shape() {
            return Err(MatrixError::DimensionMismatch {
                operation,
                left: self.shape(),
                right: other.shape(),
            });
        }
        Ok(())
    }

    fn zip_with(&self, other: &Matrix, f: impl Fn(f32, f32) -> f32) -> Matrix {
        let elements = self
            .as_slice()
            .iter()
            .zip(other.as_slice())
            .map(|(&a, &b)| f(a, b))
            .collect();
        Matrix::from_parts(self.rows(), self.cols(), elements)
    }

    fn map(&self, f: impl Fn(f32) -> f32) -> Matrix {
        let elements = self.as_slice().iter().map(|&v| f(v)).collect();
        Matrix::from_parts(self.rows(), self.cols(), elements)
    }

    /// Elementwise sum into a new matrix.
    pub fn add(&self, other: &Matrix) -> Result<Matrix> {
        self.check_same_shape(other, "add")?;
        Ok(self.zip_with(other, |a, b| a + b))
    }

    /// Elementwise difference into a new matrix.
    pub fn subtract(&self, other: &Matrix) -> Result<Matrix> {
        self.check_same_shape(other, "subtract")?;
        Ok(self.zip_with(other, |a, b| a - b))
    }

    /// Add `other` into this matrix's own buffer.
    pub fn add_in_place(&mut self, other: &Matrix) -> Result<()> {
        self.check_same_shape(other, "add_in_place")?;
        for (a, &b) in self.elements_mut().iter_mut().zip(other.as_slice()) {
            *a += b;
        }
        Ok(())
    }

    pub fn subtract_in_place(&mut self, other: &Matrix) -> Result<()> {
        self.check_same_shape(other, "subtract_in_place")?;
        for (a, &b) in self.elements_mut().iter_mut().zip(other.as_slice()) {
            *a -= b;
        }
        Ok(())
    }

    pub fn scale_in_place(&mut self, scalar: f32) {
        for value in self.elements_mut() {
            *value *= scalar;
        }
    }

    pub fn multiply_scalar(&self, scalar: f32) -> Matrix {
        self.map(|v| v * scalar)
    }

    /// Divide every element by `scalar`; an exact zero is rejected.
    pub fn divide_scalar(&self, scalar: f32) -> Result<Matrix> {
        if scalar == 0.0 {
            return Err(MatrixError::DivisionByZero);
        }
        Ok(self.map(|v| v / scalar))
    }

    /// Matrix product `self * other` using the plain triple loop.
    pub fn multiply(&self, other: &Matrix) -> Result<Matrix> {
        if self.cols() != other.rows() {
            return Err(MatrixError::DimensionMismatch {
                operation: "multiply",
                left: self.shape(),
                right: other.shape(),
            });
        }
        let (n, m, p) = (self.rows(), self.cols(), other.cols());
        let a = self.as_slice();
        let b = other.as_slice();
        let mut result = vec![0.0f32; n * p];
        for i in 0..n {
            for j in 0..p {
                let mut sum = 0.0f32;
                for k in 0..m {
                    sum += a[i * m + k] * b[k * p + j];
                }
                result[i * p + j] = sum;
            }
        }
        Ok(Matrix::from_parts(n, p, result))
    }

    /// `cols x rows` matrix with `(j, i)` taken from `(i, j)`.
    pub fn transpose(&self) -> Matrix {
        let (rows, cols) = self.shape();
        let src = self.as_slice();
        let mut result = vec![0.0f32; rows * cols];
        for i in 0..rows {
            for j in 0..cols {
                result[j * rows + i] = src[i * cols + j];
            }
        }
        Matrix::from_parts(cols, rows, result)
    }
}

impl Add for &Matrix {
    type Output = Result<Matrix>;

    fn add(self, other: Self) -> Result<Matrix> {
        Matrix::add(self, other)
    }
}

impl Sub for &Matrix {
    type Output = Result<Matrix>;

    fn sub(self, other: Self) -> Result<Matrix> {
        self.subtract(other)
    }
}

impl Mul for &Matrix {
    type Output = Result<Matrix>;

    fn mul(self, rhs: Self) -> Result<Matrix> {
        self.multiply(rhs)
    }
}

impl Mul<f32> for &Matrix {
    type Output = Matrix;

    fn mul(self, scalar: f32) -> Matrix {
        self.multiply_scalar(scalar)
    }
}

impl Neg for &Matrix {
    type Output = Matrix;

    fn neg(self) -> Matrix {
        self.map(|v| -v)
    }
}
