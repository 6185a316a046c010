// src/numerics/serialization/text.rs
// Human-readable text forms.
//
// Display prints one bracketed row per line; parsing reads a single flat
// bracketed list and builds a square matrix. The two are separate formats.

use core::fmt;
use core::str::FromStr;

use crate::numerics::error::{MatrixError, Result};
use crate::numerics::types::matrix::Matrix;

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..self.rows() {
            if r > 0 {
                writeln!(f)?;
            }
            write!(f, "[")?;
            for (c, &value) in self.row_slice(r).iter().enumerate() {
                if c > 0 {
                    write!(f, ", ")?;
                }
                // avoid printing "-0.000"
                let value = if value == 0.0 { 0.0 } else { value };
                write!(f, "{:.3}", value)?;
            }
            write!(f, "]")?;
        }
        Ok(())
    }
}

impl Matrix {
    /// Parse a flat list like `[1, 2, 3, 4]` into an `N x N` matrix.
    ///
    /// # Errors
    /// * `InvalidFormat` if a token is not a number
    /// * `NotSquareString` if the element count is not a perfect square
    pub fn parse(s: &str) -> Result<Matrix> {
        let body = s.trim().trim_start_matches('[').trim_end_matches(']');
        let values = body
            .split(',')
            .map(|token| {
                let token = token.trim();
                token
                    .parse::<f32>()
                    .map_err(|_| MatrixError::InvalidFormat(format!("'{}' is not a number", token)))
            })
            .collect::<Result<Vec<f32>>>()?;

        let count = values.len();
        let size = (count as f64).sqrt().round() as usize;
        if size * size != count {
            return Err(MatrixError::NotSquareString { count });
        }
        Matrix::from_vec(size, size, values)
    }
}

impl FromStr for Matrix {
    type Err = MatrixError;

    fn from_str(s: &str) -> Result<Self> {
        Matrix::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_rows() {
        let m = Matrix::from_vec(2, 2, vec![1.0, -2.5, 0.3333, -0.0]).unwrap();
        assert_eq!(m.to_string(), "[1.000, -2.500]\n[0.333, 0.000]");

        let single = Matrix::from_vec(1, 3, vec![1.0, 2.0, 3.0]).unwrap();
        assert_eq!(single.to_string(), "[1.000, 2.000, 3.000]");
    }

    #[test]
    fn test_parse_square() {
        let m = Matrix::parse("[1, 2, 3, 4]").unwrap();
        assert_eq!(m.shape(), (2, 2));
        assert_eq!(m.as_slice(), &[1.0, 2.0, 3.0, 4.0]);

        let m: Matrix = " [ 1.5,-2 , 3e1, 0, 0, 0, 7, 8, 9 ] ".parse().unwrap();
        assert_eq!(m.shape(), (3, 3));
        assert_eq!(m.get(0, 2).unwrap(), 30.0);

        let m = Matrix::parse("[5]").unwrap();
        assert_eq!(m.shape(), (1, 1));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            Matrix::parse("[1, 2, 3]").unwrap_err(),
            MatrixError::NotSquareString { count: 3 }
        );
        assert!(matches!(
            Matrix::parse("[1, x, 3, 4]"),
            Err(MatrixError::InvalidFormat(_))
        ));
        assert!(matches!(Matrix::parse("[]"), Err(MatrixError::InvalidFormat(_))));
    }

    #[test]
    fn test_display_is_not_parse_input() {
        let m = Matrix::identity(2).unwrap();
        // multi-line output is not a flat list
        assert!(Matrix::parse(&m.to_string()).is_err());
    }
}
