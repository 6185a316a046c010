// src/numerics/mod.rs
// Top-level numerics module: matrix storage, algebra, analysis and codecs.

pub mod config;
pub mod error;

pub mod types {
    // The submodules live in src/numerics/types/*.rs
    pub mod fixed;
    pub mod matrix;
    pub mod seed;
    pub mod traits;
}

pub mod linalg {
    // The submodules live in src/numerics/linalg/*.rs
    pub mod algebra;
    pub mod analysis;
    pub mod lu;
}

pub mod serialization {
    // The submodules live in src/numerics/serialization/*.rs
    pub mod structured;
    pub mod text;
}
