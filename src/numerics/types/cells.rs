// src/numerics/types/cells.rs
// Tagged backing storage shared by Vector and Matrix, plus the dispatch macros.
//
// Every per-kind `match` in the numerics module is produced by one of the three
// macros below; operations themselves are written once as generic functions
// over `T: Element`.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::kind::{Arithmetic, Element, ElementKind, Scalar};
use crate::numerics::error::{NumericsError, Result};

/// Binds `$t` to the storage type of `$kind` and evaluates `$body`.
macro_rules! with_kind {
    ($kind:expr, $t:ident => $body:expr) => {{
        use $crate::numerics::types::kind::ElementKind as K;
        match $kind {
            K::Int => { type $t = isize; $body }
            K::Int8 => { type $t = i8; $body }
            K::Int16 => { type $t = i16; $body }
            K::Int32 => { type $t = i32; $body }
            K::Int64 => { type $t = i64; $body }
            K::Uint => { type $t = usize; $body }
            K::Uint8 => { type $t = u8; $body }
            K::Uint16 => { type $t = u16; $body }
            K::Uint32 => { type $t = u32; $body }
            K::Uint64 => { type $t = u64; $body }
            K::Float32 => { type $t = f32; $body }
            K::Float64 => { type $t = f64; $body }
        }
    }};
}

/// Binds `$v` to the typed vector inside a `Cells` (by reference when given a
/// reference) and evaluates `$body`.
macro_rules! with_cells {
    ($cells:expr, $v:ident => $body:expr) => {{
        use $crate::numerics::types::cells::Cells as C;
        match $cells {
            C::Int($v) => $body,
            C::Int8($v) => $body,
            C::Int16($v) => $body,
            C::Int32($v) => $body,
            C::Int64($v) => $body,
            C::Uint($v) => $body,
            C::Uint8($v) => $body,
            C::Uint16($v) => $body,
            C::Uint32($v) => $body,
            C::Uint64($v) => $body,
            C::Float32($v) => $body,
            C::Float64($v) => $body,
        }
    }};
}

/// `with_cells!` for a single `Scalar`.
macro_rules! with_scalar {
    ($scalar:expr, $v:ident => $body:expr) => {{
        use $crate::numerics::types::kind::Scalar as S;
        match $scalar {
            S::Int($v) => $body,
            S::Int8($v) => $body,
            S::Int16($v) => $body,
            S::Int32($v) => $body,
            S::Int64($v) => $body,
            S::Uint($v) => $body,
            S::Uint8($v) => $body,
            S::Uint16($v) => $body,
            S::Uint32($v) => $body,
            S::Uint64($v) => $body,
            S::Float32($v) => $body,
            S::Float64($v) => $body,
        }
    }};
}

pub(crate) use {with_cells, with_kind, with_scalar};

/// Homogeneous, kind-tagged storage.
///
/// The variant fixes the element kind for the lifetime of the value; length
/// bookkeeping (dimension, shape) belongs to the owning container.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Cells {
    Int(Vec<isize>),
    Int8(Vec<i8>),
    Int16(Vec<i16>),
    Int32(Vec<i32>),
    Int64(Vec<i64>),
    Uint(Vec<usize>),
    Uint8(Vec<u8>),
    Uint16(Vec<u16>),
    Uint32(Vec<u32>),
    Uint64(Vec<u64>),
    Float32(Vec<f32>),
    Float64(Vec<f64>),
}

impl Cells {
    pub fn zeroed(len: usize, kind: ElementKind) -> Self {
        with_kind!(kind, T => T::wrap(vec![<T as Element>::ZERO; len]))
    }

    pub fn random<R: Rng>(len: usize, kind: ElementKind, rng: &mut R) -> Self {
        with_kind!(kind, T => T::wrap((0..len).map(|_| <T as Element>::random(rng)).collect()))
    }

    /// Collects scalars into storage of the first scalar's kind.
    ///
    /// Returns `EmptyInput` for no values and `IrregularInput` for the first
    /// value whose kind differs.
    pub fn from_scalars<I>(values: I) -> Result<Self>
    where
        I: IntoIterator<Item = Scalar>,
    {
        let mut values = values.into_iter().peekable();
        let kind = values.peek().ok_or(NumericsError::EmptyInput)?.kind();
        with_kind!(kind, T => collect_typed::<T, _>(values).map(T::wrap))
    }

    pub fn kind(&self) -> ElementKind {
        with_cells!(self, v => element_kind_of(v.as_slice()))
    }

    pub fn len(&self) -> usize {
        with_cells!(self, v => v.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn get(&self, index: usize) -> Option<Scalar> {
        with_cells!(self, v => v.get(index).map(|value| value.into_scalar()))
    }

    /// Overwrites one cell. Kind is checked before the index.
    pub fn store(&mut self, index: usize, value: Scalar) -> Result<()> {
        with_cells!(self, v => store_typed(v, index, value))
    }

    pub fn as_slice<T: Element>(&self) -> Result<&[T]> {
        T::view(self).ok_or(NumericsError::KindMismatch {
            expected: self.kind(),
            found: T::KIND,
        })
    }

    pub fn as_mut_slice<T: Element>(&mut self) -> Result<&mut [T]> {
        let expected = self.kind();
        T::view_mut(self).ok_or(NumericsError::KindMismatch {
            expected,
            found: T::KIND,
        })
    }

    /// Element-wise `self op other`. Both sides must share kind and length.
    pub fn zip_with(&self, other: &Cells, op: Arithmetic) -> Result<Cells> {
        with_cells!(self, lhs => Ok(zip_typed(lhs, typed_like(lhs, other)?, op)))
    }

    /// `cell op scalar` for every cell.
    pub fn map_scalar(&self, op: Arithmetic, scalar: Scalar) -> Result<Cells> {
        with_cells!(self, values => map_typed(values, op, scalar))
    }

    /// Σ a·b in native arithmetic.
    pub fn dot(&self, other: &Cells) -> Result<Scalar> {
        with_cells!(self, lhs => {
            let rhs = typed_like(lhs, other)?;
            Ok(dot_typed(lhs, rhs.iter().copied()).into_scalar())
        })
    }

    /// Σ x² with every cell promoted to `f64`.
    pub fn sum_of_squares(&self) -> f64 {
        with_cells!(self, v => v.iter().map(|x| x.to_f64().powi(2)).sum())
    }

    /// Largest `|a - b|` after promotion to `f64`. NaN on either side yields NaN.
    pub fn max_abs_diff(&self, other: &Cells) -> Result<f64> {
        with_cells!(self, lhs => {
            let rhs = typed_like(lhs, other)?;
            let mut worst = 0.0_f64;
            for (a, b) in lhs.iter().zip(rhs) {
                let diff = (a.to_f64() - b.to_f64()).abs();
                if diff.is_nan() {
                    return Ok(f64::NAN);
                }
                worst = worst.max(diff);
            }
            Ok(worst)
        })
    }
}

/// Typed view of `other` with the element type of `lhs`.
pub(crate) fn typed_like<'a, T: Element>(_lhs: &[T], other: &'a Cells) -> Result<&'a [T]> {
    T::view(other).ok_or(NumericsError::KindMismatch {
        expected: T::KIND,
        found: other.kind(),
    })
}

/// Accumulates Σ lhs[i]·rhs[i] in ascending index order.
pub(crate) fn dot_typed<T, I>(lhs: &[T], rhs: I) -> T
where
    T: Element,
    I: IntoIterator<Item = T>,
{
    lhs.iter().zip(rhs).fold(T::ZERO, |acc, (&a, b)| {
        T::apply(Arithmetic::Add, acc, T::apply(Arithmetic::Mul, a, b))
    })
}

fn store_typed<T: Element>(values: &mut [T], index: usize, value: Scalar) -> Result<()> {
    let typed = T::from_scalar(value).ok_or(NumericsError::KindMismatch {
        expected: T::KIND,
        found: value.kind(),
    })?;
    let len = values.len();
    let slot = values
        .get_mut(index)
        .ok_or(NumericsError::IndexOutOfRange { index, len })?;
    *slot = typed;
    Ok(())
}

fn zip_typed<T: Element>(lhs: &[T], rhs: &[T], op: Arithmetic) -> Cells {
    T::wrap(lhs.iter().zip(rhs).map(|(&a, &b)| T::apply(op, a, b)).collect())
}

fn map_typed<T: Element>(values: &[T], op: Arithmetic, scalar: Scalar) -> Result<Cells> {
    let rhs = T::from_scalar(scalar).ok_or(NumericsError::KindMismatch {
        expected: T::KIND,
        found: scalar.kind(),
    })?;
    Ok(T::wrap(values.iter().map(|&a| T::apply(op, a, rhs)).collect()))
}

fn element_kind_of<T: Element>(_values: &[T]) -> ElementKind {
    T::KIND
}

fn collect_typed<T, I>(values: I) -> Result<Vec<T>>
where
    T: Element,
    I: Iterator<Item = Scalar>,
{
    values
        .enumerate()
        .map(|(position, scalar)| {
            T::from_scalar(scalar).ok_or(NumericsError::IrregularInput {
                position,
                expected: T::KIND,
                found: scalar.kind(),
            })
        })
        .collect()
}
