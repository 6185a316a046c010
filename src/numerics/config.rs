// src/numerics/config.rs
// Numerical thresholds used by the analysis engine.

/// Configuration for determinant, inverse and rank computations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnalysisConfig {
    /// Inversion fails when `|det|` falls below this value
    pub singular_threshold: f32,
    /// Rank elimination skips a column whose best pivot is below this value
    pub pivot_threshold: f32,
    /// Square sizes above this log an advisory warning on the LU path
    pub large_matrix_warning: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            singular_threshold: 1e-10,
            pivot_threshold: 1e-12,
            large_matrix_warning: 64,
        }
    }
}

impl AnalysisConfig {
    /// Tighter thresholds: only exact-zero-like determinants count as singular.
    pub fn strict() -> Self {
        Self {
            singular_threshold: 1e-20,
            pivot_threshold: 1e-20,
            ..Self::default()
        }
    }

    /// Looser thresholds for data carrying measurement noise.
    pub fn relaxed() -> Self {
        Self {
            singular_threshold: 1e-6,
            pivot_threshold: 1e-6,
            large_matrix_warning: 256,
        }
    }
}
