// src/numerics/mod.rs
// Top-level numerics module. Exposes a `types` namespace with submodules.

pub mod error;

pub mod types {
    // The submodules live in src/numerics/types/*.rs
    pub mod cells;
    pub mod kind;
    pub mod matrix;
    pub mod point;
    pub mod vector;
}

pub use error::{NumericsError, Result};
pub use types::kind::{Element, ElementKind, Scalar};
pub use types::matrix::Matrix;
pub use types::vector::Vector;
