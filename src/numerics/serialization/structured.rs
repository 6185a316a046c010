// src/numerics/serialization/structured.rs
// Structured `{rows, cols, elements}` form: serde, JSON helpers and bincode.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::numerics::error::{MatrixError, Result};
use crate::numerics::types::matrix::Matrix;
use crate::numerics::types::seed::SeedData;

/// Borrowed wire record used when serializing.
#[derive(Serialize)]
struct MatrixRecordRef<'a> {
    rows: usize,
    cols: usize,
    elements: &'a [f32],
}

/// Owned wire record, validated before it becomes a [`Matrix`].
#[derive(Deserialize)]
struct MatrixRecord {
    rows: usize,
    cols: usize,
    elements: Vec<f32>,
}

impl Serialize for Matrix {
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        MatrixRecordRef {
            rows: self.rows(),
            cols: self.cols(),
            elements: self.as_slice(),
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Matrix {
    fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let record = MatrixRecord::deserialize(deserializer)?;
        Matrix::from_vec(record.rows, record.cols, record.elements).map_err(serde::de::Error::custom)
    }
}

impl Matrix {
    /// `{"rows": r, "cols": c, "elements": [...]}` with a flat row-major list.
    pub fn to_json(&self) -> Value {
        json!({
            "rows": self.rows(),
            "cols": self.cols(),
            "elements": self.as_slice(),
        })
    }

    /// Rebuild a matrix from the object produced by [`Matrix::to_json`].
    ///
    /// # Errors
    /// * `InvalidFormat` if `elements` is missing, empty or not an array of
    ///   numbers, or if `rows`/`cols` are not non-negative integers
    /// * `InvalidDimension` / `ShapeMismatch` from construction
    pub fn from_json(obj: &Value) -> Result<Matrix> {
        let elements = match obj.get("elements") {
            Some(Value::Array(items)) if !items.is_empty() => items
                .iter()
                .map(|v| {
                    v.as_f64().map(|x| x as f32).ok_or_else(|| {
                        MatrixError::InvalidFormat(format!("element {} is not a number", v))
                    })
                })
                .collect::<Result<Vec<f32>>>()?,
            _ => {
                return Err(MatrixError::InvalidFormat(
                    "'elements' must be a non-empty array".into(),
                ))
            }
        };
        let rows = json_dimension(obj, "rows")?;
        let cols = json_dimension(obj, "cols")?;
        Matrix::from_vec(rows, cols, elements)
    }

    /// Build a `rows x cols` matrix from an untyped JSON seed, either a flat
    /// array of numbers or an array of row arrays.
    ///
    /// # Errors
    /// * `ShapeMismatch` if the seed is not an array, a row is not an array,
    ///   an entry is not a number, or the data does not fit `rows x cols`
    /// * `InvalidDimension` from construction
    pub fn from_seed_json(rows: usize, cols: usize, seed: &Value) -> Result<Matrix> {
        Matrix::with_data(rows, cols, SeedData::from_json_value(seed)?)
    }

    pub fn to_json_string(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| MatrixError::InvalidFormat(e.to_string()))
    }

    pub fn from_json_str(s: &str) -> Result<Matrix> {
        let value: Value =
            serde_json::from_str(s).map_err(|e| MatrixError::InvalidFormat(e.to_string()))?;
        Matrix::from_json(&value)
    }

    /// Compact binary encoding (bincode, standard configuration).
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        bincode::serde::encode_to_vec(self, bincode::config::standard())
            .map_err(|e| MatrixError::InvalidFormat(e.to_string()))
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Matrix> {
        let (matrix, _) = bincode::serde::decode_from_slice(bytes, bincode::config::standard())
            .map_err(|e| MatrixError::InvalidFormat(e.to_string()))?;
        Ok(matrix)
    }
}

fn json_dimension(obj: &Value, key: &str) -> Result<usize> {
    obj.get(key)
        .and_then(Value::as_u64)
        .and_then(|v| usize::try_from(v).ok())
        .ok_or_else(|| MatrixError::InvalidFormat(format!("'{}' must be a number", key)))
}
