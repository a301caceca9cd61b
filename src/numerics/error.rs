// src/numerics/error.rs
// Caller-error taxonomy for the numerics types.

use crate::numerics::types::kind::ElementKind;

/// Errors raised by `Vector` and `Matrix` operations.
///
/// Every variant reports a contract violation by the caller. Integer overflow
/// and division by zero are not errors: they follow native arithmetic (see
/// `Element`).
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum NumericsError {
    #[error("Invalid kind: {0:?} is not a supported element kind")]
    InvalidKind(String),

    #[error("Empty input: cannot infer a kind from no values")]
    EmptyInput,

    #[error("Irregular input: value {position} is {found}, expected {expected}")]
    IrregularInput {
        position: usize,
        expected: ElementKind,
        found: ElementKind,
    },

    #[error("Irregular input: row {row} has {found} columns, expected {expected}")]
    IrregularRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("Index out of range: {index} is not below {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Index out of range: ({row}, {col}) is outside a {rows}x{cols} matrix")]
    CellOutOfRange {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    #[error("Kind mismatch: expected {expected}, got {found}")]
    KindMismatch {
        expected: ElementKind,
        found: ElementKind,
    },

    #[error("Dimension mismatch: expected {expected}, got {found}")]
    DimensionMismatch { expected: usize, found: usize },

    #[error("Shape mismatch: expected {}x{}, got {}x{}", expected.0, expected.1, found.0, found.1)]
    ShapeMismatch {
        expected: (usize, usize),
        found: (usize, usize),
    },

    #[error("Unsupported kind: {operation} is not defined for {kind}")]
    UnsupportedKind {
        operation: &'static str,
        kind: ElementKind,
    },

    #[error("Zero dimension: a vector needs at least one cell")]
    ZeroDimension,

    #[error("Invalid shape: {rows}x{cols} is empty or exceeds the addressable size")]
    InvalidShape { rows: usize, cols: usize },
}

pub type Result<T, E = NumericsError> = std::result::Result<T, E>;
