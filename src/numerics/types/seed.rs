// src/numerics/types/seed.rs
// Initial data handed to a matrix constructor, flat or nested.

use serde_json::Value;

use crate::numerics::error::{MatrixError, Result};

/// Seed data for a matrix, decided at the boundary.
#[derive(Clone, Debug, PartialEq)]
pub enum SeedData {
    /// Row-major values, `rows * cols` of them
    Flat(Vec<f32>),
    /// One inner vector per row
    Nested(Vec<Vec<f32>>),
}

impl SeedData {
    /// Flatten into a row-major buffer after checking it matches `rows x cols`.
    pub fn into_elements(self, rows: usize, cols: usize) -> Result<Vec<f32>> {
        match self {
            SeedData::Flat(values) => {
                if rows.checked_mul(cols) != Some(values.len()) {
                    return Err(MatrixError::ShapeMismatch(format!(
                        "expected {}x{} elements, got {}",
                        rows,
                        cols,
                        values.len()
                    )));
                }
                Ok(values)
            }
            SeedData::Nested(nested) => {
                if nested.len() != rows {
                    return Err(MatrixError::ShapeMismatch(format!(
                        "expected {} rows, got {}",
                        rows,
                        nested.len()
                    )));
                }
                let mut elements = Vec::with_capacity(nested.iter().map(Vec::len).sum());
                for (i, row) in nested.into_iter().enumerate() {
                    if row.len() != cols {
                        return Err(MatrixError::ShapeMismatch(format!(
                            "row {} has {} elements, expected {}",
                            i,
                            row.len(),
                            cols
                        )));
                    }
                    elements.extend(row);
                }
                Ok(elements)
            }
        }
    }

    /// Number of values carried, regardless of layout.
    pub fn len(&self) -> usize {
        match self {
            SeedData::Flat(values) => values.len(),
            SeedData::Nested(nested) => nested.iter().map(Vec::len).sum(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Read seed data out of an untyped JSON array.
    ///
    /// An array of numbers becomes `Flat`; an array whose first entry is an
    /// array becomes `Nested`, and every entry must then be an array of numbers.
    pub fn from_json_value(value: &Value) -> Result<Self> {
        let items = value
            .as_array()
            .ok_or_else(|| MatrixError::ShapeMismatch("seed data must be an array".into()))?;

        if !matches!(items.first(), Some(Value::Array(_))) {
            return items
                .iter()
                .map(json_number)
                .collect::<Result<Vec<f32>>>()
                .map(SeedData::Flat);
        }

        let mut rows = Vec::with_capacity(items.len());
        for (i, item) in items.iter().enumerate() {
            let row = item.as_array().ok_or_else(|| {
                MatrixError::ShapeMismatch(format!("row {} is not an array", i))
            })?;
            rows.push(row.iter().map(json_number).collect::<Result<Vec<f32>>>()?);
        }
        Ok(SeedData::Nested(rows))
    }
}

fn json_number(value: &Value) -> Result<f32> {
    value
        .as_f64()
        .map(|v| v as f32)
        .ok_or_else(|| MatrixError::ShapeMismatch(format!("{} is not a number", value)))
}

impl From<Vec<f32>> for SeedData {
    fn from(values: Vec<f32>) -> Self {
        SeedData::Flat(values)
    }
}

impl From<Vec<Vec<f32>>> for SeedData {
    fn from(rows: Vec<Vec<f32>>) -> Self {
        SeedData::Nested(rows)
    }
}

impl From<&[f32]> for SeedData {
    fn from(values: &[f32]) -> Self {
        SeedData::Flat(values.to_vec())
    }
}
