//! # fulgor-matrix
//!
//! Dense single-precision matrices: construction, element access, elementwise
//! and matrix algebra, and square-matrix analysis (determinant, inverse,
//! rank), with fixed-size `Mat2`/`Mat3`/`Mat4` wrappers.
//!
//! ```rust
//! use fulgor_matrix::{ApproxEq, Matrix};
//!
//! # fn main() -> fulgor_matrix::Result<()> {
//! let a = Matrix::from_vec(3, 3, vec![1.0, 2.0, 3.0, 0.0, 1.0, 4.0, 5.0, 6.0, 0.0])?;
//! assert_eq!(a.determinant()?, 1.0);
//!
//! let product = a.multiply(&a.invert()?)?;
//! assert!(product.approx_eq(&Matrix::identity(3)?, 1e-5));
//! # Ok(())
//! # }
//! ```

pub mod numerics;

pub use numerics::config::AnalysisConfig;
pub use numerics::error::{MatrixError, Result};
pub use numerics::linalg::lu::LuDecomposition;
pub use numerics::types::fixed::{Mat2, Mat3, Mat4};
pub use numerics::types::matrix::Matrix;
pub use numerics::types::seed::SeedData;
pub use numerics::types::traits::ApproxEq;
