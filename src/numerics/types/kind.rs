// src/numerics/types/kind.rs
// Element kinds, the `Element` numeric trait and the dynamically tagged `Scalar`.

use core::fmt;
use core::str::FromStr;

use rand::Rng;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::cells::{with_kind, with_scalar, Cells};
use crate::numerics::error::NumericsError;

/// Tag naming the storage type held by a `Vector` or `Matrix`.
///
/// `Int` and `Uint` are pointer-sized (`isize` / `usize`); the remaining
/// variants map onto the fixed-width primitive of the same name.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    Int,
    Int8,
    Int16,
    Int32,
    Int64,
    Uint,
    Uint8,
    Uint16,
    Uint32,
    Uint64,
    Float32,
    Float64,
}

impl ElementKind {
    /// Every supported kind, integers first.
    pub const ALL: [ElementKind; 12] = [
        ElementKind::Int,
        ElementKind::Int8,
        ElementKind::Int16,
        ElementKind::Int32,
        ElementKind::Int64,
        ElementKind::Uint,
        ElementKind::Uint8,
        ElementKind::Uint16,
        ElementKind::Uint32,
        ElementKind::Uint64,
        ElementKind::Float32,
        ElementKind::Float64,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ElementKind::Int => "int",
            ElementKind::Int8 => "int8",
            ElementKind::Int16 => "int16",
            ElementKind::Int32 => "int32",
            ElementKind::Int64 => "int64",
            ElementKind::Uint => "uint",
            ElementKind::Uint8 => "uint8",
            ElementKind::Uint16 => "uint16",
            ElementKind::Uint32 => "uint32",
            ElementKind::Uint64 => "uint64",
            ElementKind::Float32 => "float32",
            ElementKind::Float64 => "float64",
        }
    }

    pub fn is_float(self) -> bool {
        matches!(self, ElementKind::Float32 | ElementKind::Float64)
    }

    pub fn is_signed(self) -> bool {
        !matches!(
            self,
            ElementKind::Uint
                | ElementKind::Uint8
                | ElementKind::Uint16
                | ElementKind::Uint32
                | ElementKind::Uint64
        )
    }

    /// Additive identity of this kind.
    pub fn zero(self) -> Scalar {
        with_kind!(self, T => <T as Element>::ZERO.into_scalar())
    }

    /// Multiplicative identity of this kind.
    pub fn one(self) -> Scalar {
        with_kind!(self, T => <T as Element>::ONE.into_scalar())
    }

    /// A random value of this kind. See `Element::random` for the ranges.
    pub fn random<R: Rng>(self, rng: &mut R) -> Scalar {
        with_kind!(self, T => <T as Element>::random(rng).into_scalar())
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ElementKind {
    type Err = NumericsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        ElementKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.name() == wanted)
            .ok_or_else(|| NumericsError::InvalidKind(s.to_string()))
    }
}

/// Arithmetic operations routed through `Element::apply`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Arithmetic {
    Add,
    Sub,
    Mul,
    Div,
}

/// Numeric storage types a container can hold.
///
/// Integer kinds use wrapping arithmetic for every operation, so overflow
/// behaves identically in element-wise ops and in product accumulation.
/// Integer division by zero panics; float division follows IEEE 754.
pub trait Element:
    Copy
    + PartialEq
    + fmt::Debug
    + fmt::Display
    + Send
    + Sync
    + Serialize
    + DeserializeOwned
    + sealed::Sealed
    + 'static
{
    const KIND: ElementKind;
    const ZERO: Self;
    const ONE: Self;

    fn apply(op: Arithmetic, lhs: Self, rhs: Self) -> Self;

    fn to_f64(self) -> f64;

    /// Lossy `as` conversion; out-of-range values saturate, NaN becomes zero
    /// for integer kinds.
    fn from_f64(value: f64) -> Self;

    /// Integers cover their whole range, floats are uniform in `[0, 1)`.
    fn random<R: Rng>(rng: &mut R) -> Self;

    fn into_scalar(self) -> Scalar;
    fn from_scalar(scalar: Scalar) -> Option<Self>;

    fn wrap(values: Vec<Self>) -> Cells;
    fn view(cells: &Cells) -> Option<&[Self]>;
    fn view_mut(cells: &mut Cells) -> Option<&mut [Self]>;
}

fn kind_of<T: Element>(_value: &T) -> ElementKind {
    T::KIND
}

mod sealed {
    pub trait Sealed {}
}

/// A single value tagged with its kind.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scalar {
    Int(isize),
    Int8(i8),
    Int16(i16),
    Int32(i32),
    Int64(i64),
    Uint(usize),
    Uint8(u8),
    Uint16(u16),
    Uint32(u32),
    Uint64(u64),
    Float32(f32),
    Float64(f64),
}

impl Scalar {
    pub fn kind(&self) -> ElementKind {
        with_scalar!(self, v => kind_of(v))
    }

    /// Typed view of the value, `None` when `T` is not this scalar's kind.
    pub fn get<T: Element>(self) -> Option<T> {
        T::from_scalar(self)
    }

    pub fn to_f64(self) -> f64 {
        with_scalar!(self, v => v.to_f64())
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        with_scalar!(self, v => write!(f, "{}", v))
    }
}

macro_rules! impl_element {
    ($ty:ty, $variant:ident, $zero:expr, $one:expr, int) => {
        impl_element!(@common $ty, $variant, $zero, $one);

        impl Element for $ty {
            const KIND: ElementKind = ElementKind::$variant;
            const ZERO: Self = $zero;
            const ONE: Self = $one;

            #[inline]
            fn apply(op: Arithmetic, lhs: Self, rhs: Self) -> Self {
                match op {
                    Arithmetic::Add => lhs.wrapping_add(rhs),
                    Arithmetic::Sub => lhs.wrapping_sub(rhs),
                    Arithmetic::Mul => lhs.wrapping_mul(rhs),
                    // Truncates toward zero; panics on a zero divisor.
                    Arithmetic::Div => lhs.wrapping_div(rhs),
                }
            }

            fn random<R: Rng>(rng: &mut R) -> Self {
                rng.gen::<$ty>()
            }

            impl_element!(@body $ty, $variant);
        }
    };
    ($ty:ty, $variant:ident, $zero:expr, $one:expr, float) => {
        impl_element!(@common $ty, $variant, $zero, $one);

        impl Element for $ty {
            const KIND: ElementKind = ElementKind::$variant;
            const ZERO: Self = $zero;
            const ONE: Self = $one;

            #[inline]
            fn apply(op: Arithmetic, lhs: Self, rhs: Self) -> Self {
                match op {
                    Arithmetic::Add => lhs + rhs,
                    Arithmetic::Sub => lhs - rhs,
                    Arithmetic::Mul => lhs * rhs,
                    Arithmetic::Div => lhs / rhs,
                }
            }

            fn random<R: Rng>(rng: &mut R) -> Self {
                rng.gen::<$ty>()
            }

            impl_element!(@body $ty, $variant);
        }
    };
    (@common $ty:ty, $variant:ident, $zero:expr, $one:expr) => {
        impl sealed::Sealed for $ty {}

        impl From<$ty> for Scalar {
            fn from(value: $ty) -> Self {
                Scalar::$variant(value)
            }
        }
    };
    (@body $ty:ty, $variant:ident) => {
        #[inline]
        fn to_f64(self) -> f64 {
            self as f64
        }

        #[inline]
        fn from_f64(value: f64) -> Self {
            value as $ty
        }

        fn into_scalar(self) -> Scalar {
            Scalar::$variant(self)
        }

        fn from_scalar(scalar: Scalar) -> Option<Self> {
            match scalar {
                Scalar::$variant(value) => Some(value),
                _ => None,
            }
        }

        fn wrap(values: Vec<Self>) -> Cells {
            Cells::$variant(values)
        }

        fn view(cells: &Cells) -> Option<&[Self]> {
            match cells {
                Cells::$variant(values) => Some(values),
                _ => None,
            }
        }

        fn view_mut(cells: &mut Cells) -> Option<&mut [Self]> {
            match cells {
                Cells::$variant(values) => Some(values),
                _ => None,
            }
        }
    };
}

impl_element!(isize, Int, 0, 1, int);
impl_element!(i8, Int8, 0, 1, int);
impl_element!(i16, Int16, 0, 1, int);
impl_element!(i32, Int32, 0, 1, int);
impl_element!(i64, Int64, 0, 1, int);
impl_element!(usize, Uint, 0, 1, int);
impl_element!(u8, Uint8, 0, 1, int);
impl_element!(u16, Uint16, 0, 1, int);
impl_element!(u32, Uint32, 0, 1, int);
impl_element!(u64, Uint64, 0, 1, int);
impl_element!(f32, Float32, 0.0, 1.0, float);
impl_element!(f64, Float64, 0.0, 1.0, float);
