//! # Tabula
//!
//! Vectors and matrices whose element kind (signed or unsigned integers of
//! several widths, `f32` or `f64`) is picked at runtime, plus the small
//! wireframe pipeline built on them: parts placed with rotation, scaling and
//! translation, projected to 2-D and rasterised into a PNG.
//!
//! ```rust
//! use tabula::{ElementKind, Matrix, Vector};
//!
//! # fn main() -> Result<(), tabula::NumericsError> {
//! let m = Matrix::filled([[1_i32, 0, 1], [0, 1, 1]])?;
//! let v = Vector::filled([1_i32, 2, 3])?;
//!
//! let p = m.multiply_vector(&v)?;
//! assert_eq!(p.kind(), ElementKind::Int32);
//! assert_eq!(p.to_vec::<i32>()?, vec![4, 5]);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod numerics;
pub mod renderer_cpu_ref;
pub mod scene;

pub use config::RenderConfig;
pub use numerics::{Element, ElementKind, Matrix, NumericsError, Scalar, Vector};

/// Version information for the tabula crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
