// src/numerics/types/matrix.rs
// Dense row-major matrix of f32 values.

use core::ops::{Index, IndexMut};

use crate::numerics::error::{MatrixError, Result};
use crate::numerics::types::seed::SeedData;

/// Dense matrix with a row-major `f32` buffer.
///
/// Element `(r, c)` lives at offset `r * cols + c`. The buffer always holds
/// exactly `rows * cols` initialized values and both dimensions are positive.
#[derive(Clone, Debug, PartialEq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    elements: Vec<f32>,
}

impl Matrix {
    /// Zero-filled `rows x cols` matrix.
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        let len = Self::check_dimensions(rows, cols)?;
        Ok(Self {
            rows,
            cols,
            elements: vec![0.0; len],
        })
    }

    /// Construct a matrix seeded from flat or nested data.
    ///
    /// # Errors
    /// * `InvalidDimension` if either dimension is zero or `rows * cols`
    ///   overflows `usize`
    /// * `ShapeMismatch` if the seed does not match `rows x cols`
    pub fn with_data(rows: usize, cols: usize, data: SeedData) -> Result<Self> {
        Self::check_dimensions(rows, cols)?;
        let elements = data.into_elements(rows, cols)?;
        Ok(Self { rows, cols, elements })
    }

    /// Construct from a flat row-major vector.
    pub fn from_vec(rows: usize, cols: usize, values: Vec<f32>) -> Result<Self> {
        Self::with_data(rows, cols, SeedData::Flat(values))
    }

    /// Construct from an optional seed; `None` gives zeros.
    pub fn from_seed(rows: usize, cols: usize, seed: Option<SeedData>) -> Result<Self> {
        match seed {
            Some(data) => Self::with_data(rows, cols, data),
            None => Self::new(rows, cols),
        }
    }

    pub(crate) fn from_parts(rows: usize, cols: usize, elements: Vec<f32>) -> Self {
        debug_assert_eq!(elements.len(), rows * cols);
        Self { rows, cols, elements }
    }

    /// Element count for a `rows x cols` buffer.
    fn check_dimensions(rows: usize, cols: usize) -> Result<usize> {
        match rows.checked_mul(cols) {
            Some(len) if len > 0 => Ok(len),
            _ => Err(MatrixError::InvalidDimension { rows, cols }),
        }
    }

    /// Identity matrix of the given size
    pub fn identity(size: usize) -> Result<Self> {
        let mut m = Self::new(size, size)?;
        for i in 0..size {
            m.elements[i * size + i] = 1.0;
        }
        Ok(m)
    }

    /// Zero matrix
    pub fn zeros(rows: usize, cols: usize) -> Result<Self> {
        Self::new(rows, cols)
    }

    /// All elements = 1
    pub fn ones(rows: usize, cols: usize) -> Result<Self> {
        Self::fill(rows, cols, 1.0)
    }

    /// All elements = `value`
    pub fn fill(rows: usize, cols: usize, value: f32) -> Result<Self> {
        let len = Self::check_dimensions(rows, cols)?;
        Ok(Self {
            rows,
            cols,
            elements: vec![value; len],
        })
    }

    /// Build from nested rows; the shape is taken from the data.
    pub fn from_array(rows: Vec<Vec<f32>>) -> Result<Self> {
        let cols = rows.first().map_or(0, Vec::len);
        Self::with_data(rows.len(), cols, SeedData::Nested(rows))
    }

    /// Construct a new matrix from rows
    pub fn from_rows(rows: &[Vec<f32>]) -> Result<Self> {
        Self::from_array(rows.to_vec())
    }

    /// Construct a new matrix from columns
    pub fn from_columns(columns: &[Vec<f32>]) -> Result<Self> {
        Ok(Self::from_rows(columns)?.transpose())
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// `(rows, cols)`
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Row-major view of the buffer.
    pub fn as_slice(&self) -> &[f32] {
        &self.elements
    }

    fn offset(&self, row: usize, col: usize) -> Result<usize> {
        if row >= self.rows || col >= self.cols {
            return Err(MatrixError::IndexOutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(row * self.cols + col)
    }

    pub fn get(&self, row: usize, col: usize) -> Result<f32> {
        Ok(self.elements[self.offset(row, col)?])
    }

    pub fn set(&mut self, row: usize, col: usize, value: f32) -> Result<()> {
        let idx = self.offset(row, col)?;
        self.elements[idx] = value;
        Ok(())
    }

    /// Replace the whole buffer with row-major `values`.
    pub fn set_all(&mut self, values: &[f32]) -> Result<()> {
        if values.len() != self.elements.len() {
            return Err(MatrixError::LengthMismatch {
                expected: self.elements.len(),
                actual: values.len(),
            });
        }
        self.elements.copy_from_slice(values);
        Ok(())
    }

    /// Get a row by index
    pub fn row(&self, idx: usize) -> Result<Vec<f32>> {
        self.offset(idx, 0)?;
        Ok(self.row_slice(idx).to_vec())
    }

    /// Get a column by index
    pub fn column(&self, idx: usize) -> Result<Vec<f32>> {
        self.offset(0, idx)?;
        Ok((0..self.rows).map(|r| self.elements[r * self.cols + idx]).collect())
    }

    pub(crate) fn row_slice(&self, idx: usize) -> &[f32] {
        &self.elements[idx * self.cols..(idx + 1) * self.cols]
    }

    /// Swap two rows in place
    pub fn swap_rows(&mut self, r1: usize, r2: usize) -> Result<()> {
        self.offset(r1, 0)?;
        self.offset(r2, 0)?;
        self.swap_rows_unchecked(r1, r2);
        Ok(())
    }

    /// Multiply a row by a scalar
    pub fn scale_row(&mut self, row: usize, scalar: f32) -> Result<()> {
        self.offset(row, 0)?;
        self.scale_row_unchecked(row, scalar);
        Ok(())
    }

    /// Add a multiple of one row to another row
    pub fn add_row_multiple(&mut self, target: usize, source: usize, scalar: f32) -> Result<()> {
        self.offset(target, 0)?;
        self.offset(source, 0)?;
        self.add_row_multiple_unchecked(target, source, scalar);
        Ok(())
    }

    // Row operations below assume in-range indices; slice indexing still
    // panics if that is violated.

    pub(crate) fn swap_rows_unchecked(&mut self, r1: usize, r2: usize) {
        if r1 != r2 {
            for j in 0..self.cols {
                self.elements.swap(r1 * self.cols + j, r2 * self.cols + j);
            }
        }
    }

    pub(crate) fn scale_row_unchecked(&mut self, row: usize, scalar: f32) {
        let cols = self.cols;
        for value in &mut self.elements[row * cols..(row + 1) * cols] {
            *value *= scalar;
        }
    }

    pub(crate) fn add_row_multiple_unchecked(&mut self, target: usize, source: usize, scalar: f32) {
        for j in 0..self.cols {
            let delta = self.elements[source * self.cols + j] * scalar;
            self.elements[target * self.cols + j] += delta;
        }
    }

    /// Nested per-row copy of the elements.
    pub fn to_array(&self) -> Vec<Vec<f32>> {
        self.elements.chunks(self.cols).map(<[f32]>::to_vec).collect()
    }

    /// Flat row-major copy of the elements.
    pub fn to_flat_array(&self) -> Vec<f32> {
        self.elements.clone()
    }

    pub fn into_elements(self) -> Vec<f32> {
        self.elements
    }

    pub(crate) fn elements_mut(&mut self) -> &mut [f32] {
        &mut self.elements
    }
}

/// Panics when out of bounds, like slice indexing; use `get` for a checked read.
impl Index<(usize, usize)> for Matrix {
    type Output = f32;

    fn index(&self, (row, col): (usize, usize)) -> &f32 {
        assert!(
            row < self.rows && col < self.cols,
            "index ({}, {}) out of bounds for {}x{} matrix",
            row,
            col,
            self.rows,
            self.cols
        );
        &self.elements[row * self.cols + col]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut f32 {
        assert!(
            row < self.rows && col < self.cols,
            "index ({}, {}) out of bounds for {}x{} matrix",
            row,
            col,
            self.rows,
            self.cols
        );
        &mut self.elements[row * self.cols + col]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matrix_constructors_and_accessors() {
        let m = Matrix::from_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
        assert_eq!(m.shape(), (2, 3));
        assert!(!m.is_square());
        assert_eq!(m.get(1, 2).unwrap(), 6.0);
        assert_eq!(m.row(0).unwrap(), vec![1.0, 2.0, 3.0]);
        assert_eq!(m.column(1).unwrap(), vec![2.0, 5.0]);
        assert_eq!(m[(1, 0)], 4.0);

        let nested = Matrix::with_data(2, 2, SeedData::Nested(vec![vec![1.0, 2.0], vec![3.0, 4.0]])).unwrap();
        assert_eq!(nested.as_slice(), &[1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_invalid_dimensions() {
        assert_eq!(
            Matrix::new(0, 3).unwrap_err(),
            MatrixError::InvalidDimension { rows: 0, cols: 3 }
        );
        assert!(Matrix::identity(0).is_err());
        assert!(Matrix::from_array(vec![]).is_err());
        assert!(matches!(
            Matrix::from_vec(2, 2, vec![1.0, 2.0, 3.0]),
            Err(MatrixError::ShapeMismatch(_))
        ));
    }

    #[test]
    fn test_overflowing_dimensions_rejected() {
        let huge = usize::MAX / 2 + 1;
        assert_eq!(
            Matrix::new(huge, 2).unwrap_err(),
            MatrixError::InvalidDimension { rows: huge, cols: 2 }
        );
        assert!(Matrix::fill(2, huge, 1.0).is_err());
        assert!(Matrix::identity(huge).is_err());
        assert_eq!(
            Matrix::from_vec(3, usize::MAX / 3 + 1, vec![1.0]).unwrap_err(),
            MatrixError::InvalidDimension { rows: 3, cols: usize::MAX / 3 + 1 }
        );
    }

    #[test]
    fn test_matrix_zero_one_identity() {
        let z = Matrix::zeros(2, 3).unwrap();
        assert!(z.as_slice().iter().all(|&v| v == 0.0));

        let o = Matrix::ones(3, 2).unwrap();
        assert!(o.as_slice().iter().all(|&v| v == 1.0));

        let f = Matrix::fill(2, 2, 7.5).unwrap();
        assert_eq!(f.as_slice(), &[7.5; 4]);

        let id = Matrix::identity(3).unwrap();
        assert_eq!(
            id.to_array(),
            vec![vec![1.0, 0.0, 0.0], vec![0.0, 1.0, 0.0], vec![0.0, 0.0, 1.0]]
        );
    }

    #[test]
    fn test_from_rows_and_columns() {
        let by_rows = Matrix::from_rows(&[vec![1.0, 2.0], vec![3.0, 4.0], vec![5.0, 6.0]]).unwrap();
        let by_cols = Matrix::from_columns(&[vec![1.0, 3.0, 5.0], vec![2.0, 4.0, 6.0]]).unwrap();
        assert_eq!(by_rows, by_cols);

        let ragged = Matrix::from_array(vec![vec![1.0, 2.0], vec![3.0]]);
        assert!(matches!(ragged, Err(MatrixError::ShapeMismatch(_))));
    }

    #[test]
    fn test_get_set_bounds() {
        let mut m = Matrix::new(2, 2).unwrap();
        m.set(1, 1, 9.0).unwrap();
        assert_eq!(m.get(1, 1).unwrap(), 9.0);

        assert!(matches!(
            m.get(2, 0),
            Err(MatrixError::IndexOutOfBounds { row: 2, col: 0, .. })
        ));
        assert!(m.set(0, 5, 1.0).is_err());
        assert!(m.row(2).is_err());
        assert!(m.column(2).is_err());
    }

    #[test]
    fn test_set_all_length_checked() {
        let mut m = Matrix::new(2, 2).unwrap();
        m.set_all(&[1.0, 2.0, 3.0, 4.0]).unwrap();
        assert_eq!(m.to_array(), vec![vec![1.0, 2.0], vec![3.0, 4.0]]);

        assert_eq!(
            m.set_all(&[1.0]).unwrap_err(),
            MatrixError::LengthMismatch { expected: 4, actual: 1 }
        );
    }

    #[test]
    fn test_clone_is_independent() {
        let original = Matrix::identity(2).unwrap();
        let mut copy = original.clone();
        copy.set(0, 1, 5.0).unwrap();
        assert_eq!(original.get(0, 1).unwrap(), 0.0);

        let mut flat = original.to_flat_array();
        flat[0] = 42.0;
        assert_eq!(original.get(0, 0).unwrap(), 1.0);
    }

    #[test]
    fn test_row_operations() {
        let mut m = Matrix::identity(3).unwrap();

        // swap rows 0 and 1
        m.swap_rows(0, 1).unwrap();
        assert_eq!(m.row(0).unwrap(), vec![0.0, 1.0, 0.0]);
        assert_eq!(m.row(1).unwrap(), vec![1.0, 0.0, 0.0]);

        // scale row 0 by 2
        m.scale_row(0, 2.0).unwrap();
        assert_eq!(m.row(0).unwrap(), vec![0.0, 2.0, 0.0]);

        // add row1 * 3 into row0
        m.add_row_multiple(0, 1, 3.0).unwrap();
        assert_eq!(m.row(0).unwrap(), vec![3.0, 2.0, 0.0]);

        assert!(m.swap_rows(0, 3).is_err());
    }

    #[test]
    #[should_panic]
    fn test_index_out_of_bounds_panics() {
        let m = Matrix::new(2, 2).unwrap();
        let _ = m[(0, 2)];
    }
}
