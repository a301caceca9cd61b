// src/numerics/types/vector.rs
// Fixed-length vector whose element kind is chosen at runtime.

use core::fmt;

use serde::{Deserialize, Serialize};

use super::cells::{with_cells, Cells};
use super::kind::{Arithmetic, Element, ElementKind, Scalar};
use crate::numerics::error::{NumericsError, Result};

/// A 1-D numeric container tagged with one `ElementKind`.
///
/// The dimension and kind are fixed at construction. Arithmetic returns new
/// vectors; only `set` mutates in place.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Cells", into = "Cells")]
pub struct Vector {
    cells: Cells,
}

impl Vector {
    /// Vector of `dimension` zeros of `kind`.
    pub fn zero(dimension: usize, kind: ElementKind) -> Result<Self> {
        if dimension == 0 {
            return Err(NumericsError::ZeroDimension);
        }
        tracing::trace!(dimension, %kind, "zero vector");
        Ok(Self {
            cells: Cells::zeroed(dimension, kind),
        })
    }

    /// Vector of random cells, for tests and benchmarks.
    pub fn random(dimension: usize, kind: ElementKind) -> Result<Self> {
        if dimension == 0 {
            return Err(NumericsError::ZeroDimension);
        }
        let mut rng = rand::thread_rng();
        Ok(Self {
            cells: Cells::random(dimension, kind, &mut rng),
        })
    }

    /// Builds a vector from literal values; the kind is taken from the first one.
    ///
    /// ```
    /// use tabula::numerics::types::kind::ElementKind;
    /// use tabula::numerics::types::vector::Vector;
    ///
    /// let v = Vector::filled([1_isize, 2, 3]).unwrap();
    /// assert_eq!(v.kind(), ElementKind::Int);
    /// assert_eq!(v.dimension(), 3);
    /// ```
    pub fn filled<I, S>(values: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<Scalar>,
    {
        let cells = Cells::from_scalars(values.into_iter().map(Into::into))?;
        tracing::trace!(dimension = cells.len(), kind = %cells.kind(), "filled vector");
        Ok(Self { cells })
    }

    /// Statically typed counterpart of `filled`.
    pub fn from_cells<T: Element>(values: Vec<T>) -> Result<Self> {
        if values.is_empty() {
            return Err(NumericsError::EmptyInput);
        }
        Ok(Self {
            cells: T::wrap(values),
        })
    }

    /// Three-cell vector; cannot fail since the length is fixed.
    pub fn from_xyz<T: Element>(x: T, y: T, z: T) -> Self {
        Self {
            cells: T::wrap(vec![x, y, z]),
        }
    }

    pub fn dimension(&self) -> usize {
        self.cells.len()
    }

    pub fn kind(&self) -> ElementKind {
        self.cells.kind()
    }

    pub fn cells(&self) -> &Cells {
        &self.cells
    }

    pub fn get(&self, index: usize) -> Result<Scalar> {
        self.cells.get(index).ok_or(NumericsError::IndexOutOfRange {
            index,
            len: self.dimension(),
        })
    }

    /// Typed read; `T` must be the storage type of this vector's kind.
    pub fn get_as<T: Element>(&self, index: usize) -> Result<T> {
        let values = self.cells.as_slice::<T>()?;
        values.get(index).copied().ok_or(NumericsError::IndexOutOfRange {
            index,
            len: values.len(),
        })
    }

    /// Overwrites one cell in place and hands the vector back for chaining.
    ///
    /// The value must carry this vector's kind; mismatches are rejected, never
    /// converted.
    pub fn set<S: Into<Scalar>>(&mut self, index: usize, value: S) -> Result<&mut Self> {
        self.cells.store(index, value.into())?;
        Ok(self)
    }

    pub fn as_slice<T: Element>(&self) -> Result<&[T]> {
        self.cells.as_slice()
    }

    pub fn to_vec<T: Element>(&self) -> Result<Vec<T>> {
        self.as_slice().map(<[T]>::to_vec)
    }

    pub fn add(&self, other: &Vector) -> Result<Vector> {
        self.zip(other, Arithmetic::Add)
    }

    pub fn sub(&self, other: &Vector) -> Result<Vector> {
        self.zip(other, Arithmetic::Sub)
    }

    /// Divides every cell by `scalar`, which must be of this vector's kind.
    ///
    /// Integer kinds truncate toward zero and panic when `scalar` is zero;
    /// float kinds produce `inf` or `NaN`.
    pub fn divide_by_scalar<S: Into<Scalar>>(&self, scalar: S) -> Result<Vector> {
        Ok(Self {
            cells: self.cells.map_scalar(Arithmetic::Div, scalar.into())?,
        })
    }

    pub fn multiply_by_scalar<S: Into<Scalar>>(&self, scalar: S) -> Result<Vector> {
        Ok(Self {
            cells: self.cells.map_scalar(Arithmetic::Mul, scalar.into())?,
        })
    }

    /// Inner product accumulated in the kind's own arithmetic.
    pub fn dot(&self, other: &Vector) -> Result<Scalar> {
        self.check_compatible(other)?;
        self.cells.dot(&other.cells)
    }

    /// Euclidean length, computed in `f64` for every kind.
    pub fn magnitude(&self) -> f64 {
        self.cells.sum_of_squares().sqrt()
    }

    /// Same direction, length one. Float kinds only.
    ///
    /// A zero vector has no direction and comes back as all `NaN`.
    pub fn unit(&self) -> Result<Vector> {
        let kind = self.kind();
        if !kind.is_float() {
            return Err(NumericsError::UnsupportedKind {
                operation: "unit",
                kind,
            });
        }
        let magnitude = self.magnitude();
        let divisor = with_cells!(&self.cells, v => storage_scalar(v.as_slice(), magnitude));
        self.divide_by_scalar(divisor)
    }

    /// Exact cell-by-cell comparison using the kind's `==`.
    ///
    /// Floats are not compared with a tolerance, so `0.1 + 0.2` differs from
    /// `0.3` and `NaN` never equals itself. Use `approx_eq` for computed values.
    pub fn equal(&self, other: &Vector) -> Result<bool> {
        self.check_compatible(other)?;
        Ok(self.cells == other.cells)
    }

    /// Like `equal`, but cells may differ by up to `tolerance` after promotion
    /// to `f64`.
    pub fn approx_eq(&self, other: &Vector, tolerance: f64) -> Result<bool> {
        self.check_compatible(other)?;
        Ok(self.cells.max_abs_diff(&other.cells)? <= tolerance)
    }

    fn zip(&self, other: &Vector, op: Arithmetic) -> Result<Vector> {
        self.check_compatible(other)?;
        Ok(Self {
            cells: self.cells.zip_with(&other.cells, op)?,
        })
    }

    /// Kind first, then dimension.
    fn check_compatible(&self, other: &Vector) -> Result<()> {
        if self.kind() != other.kind() {
            return Err(NumericsError::KindMismatch {
                expected: self.kind(),
                found: other.kind(),
            });
        }
        if self.dimension() != other.dimension() {
            return Err(NumericsError::DimensionMismatch {
                expected: self.dimension(),
                found: other.dimension(),
            });
        }
        Ok(())
    }
}

fn storage_scalar<T: Element>(_like: &[T], value: f64) -> Scalar {
    T::from_f64(value).into_scalar()
}

impl TryFrom<Cells> for Vector {
    type Error = NumericsError;

    fn try_from(cells: Cells) -> Result<Self> {
        if cells.is_empty() {
            return Err(NumericsError::ZeroDimension);
        }
        Ok(Self { cells })
    }
}

impl From<Vector> for Cells {
    fn from(vector: Vector) -> Self {
        vector.cells
    }
}

impl<T: Element> TryFrom<Vec<T>> for Vector {
    type Error = NumericsError;

    fn try_from(values: Vec<T>) -> Result<Self> {
        Self::from_cells(values)
    }
}

impl<T: Element, const N: usize> TryFrom<[T; N]> for Vector {
    type Error = NumericsError;

    fn try_from(values: [T; N]) -> Result<Self> {
        Self::from_cells(values.to_vec())
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for index in 0..self.dimension() {
            if index > 0 {
                f.write_str(" ")?;
            }
            if let Some(value) = self.cells.get(index) {
                write!(f, "{}", value)?;
            }
        }
        f.write_str("]")
    }
}
