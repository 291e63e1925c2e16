// SPDX-License-Identifier: MIT OR Apache-2.0

//! The numeric vocabulary used by the matrix, quaternion and transform code.
//!
//! Element types are never named concretely inside the crate. Instead, every operation states
//! the smallest set of these traits it needs, so that integer matrices get exact determinants
//! and adjoints while floating point matrices additionally get lengths, rotations and projections.

use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

macro_rules! closed_ops {
    ( $( $closed:ident: $op:ident ),* $(,)? ) => {
        $(
            #[doc = concat!("Shorthand for `", stringify!($op), "<Output = Self>`.")]
            pub trait $closed: Sized + $op<Output = Self> {}
            impl<T: Sized + $op<Output = Self>> $closed for T {}
        )*
    };
}

closed_ops! {
    ClosedAdd: Add,
    ClosedSub: Sub,
    ClosedMul: Mul,
    ClosedDiv: Div,
    ClosedNeg: Neg,
}

/// A matrix element: any copyable type closed under the four arithmetic operators, with
/// additive and multiplicative identities.
pub trait Scalar:
    Copy
    + PartialEq
    + PartialOrd
    + Zero
    + One
    + ClosedAdd
    + ClosedSub
    + ClosedMul
    + ClosedDiv
    + AddAssign
    + SubAssign
    + MulAssign
    + DivAssign
{
}

impl<T> Scalar for T where
    T: Copy
        + PartialEq
        + PartialOrd
        + Zero
        + One
        + ClosedAdd
        + ClosedSub
        + ClosedMul
        + ClosedDiv
        + AddAssign
        + SubAssign
        + MulAssign
        + DivAssign
{
}

/// Everything the rotation and projection builders need from an element type.
pub trait Float: Scalar + ClosedNeg + Abs + Sqrt + Trig + FromF64 + Tolerance {}
impl<T> Float for T where T: Scalar + ClosedNeg + Abs + Sqrt + Trig + FromF64 + Tolerance {}

/// Linearly interpolates between `start` and `target`, computed as
/// `start * (1 - t) + target * t`.
///
/// Works for plain scalars as well as for anything that can be scaled by `U`, such as a
/// [`Matrix`](crate::matrix::Matrix) scaled by its element type.
///
/// # Examples
///
/// ```
/// # use math3d::utils::num::lerp;
/// assert_eq!(lerp(2.0, 4.0, 0.5), 3.0);
/// assert_eq!(lerp(2.0, 4.0, 0.0), 2.0);
/// ```
#[must_use]
#[inline]
pub fn lerp<T, U>(start: T, target: T, t: U) -> T
where
    T: ClosedAdd + Mul<U, Output = T>,
    U: Copy + ClosedSub + One,
{
    start * (U::ONE - t) + target * t
}

#[doc(alias = "0")]
pub trait Zero {
    const ZERO: Self;
}

#[doc(alias = "1")]
pub trait One {
    const ONE: Self;
}

/// The largest difference at which two elements still count as nearly equal.
///
/// Floating point types use `1e-6`. Integer types use `1`, which makes near-equality exact.
pub trait Tolerance {
    const TOLERANCE: Self;
}

pub trait Abs: Copy {
    #[must_use]
    fn abs(self) -> Self;

    /// The distance between `self` and `rhs`. Never overflows for unsigned types.
    #[must_use]
    fn abs_diff(self, rhs: Self) -> Self;
}

pub trait Sqrt: Copy {
    #[must_use]
    fn sqrt(self) -> Self;
}

pub trait Trig: Copy {
    #[must_use]
    fn sin(self) -> Self;
    #[must_use]
    fn cos(self) -> Self;
    #[must_use]
    fn tan(self) -> Self;
    #[must_use]
    fn acos(self) -> Self;

    #[must_use]
    #[inline]
    fn sin_cos(self) -> (Self, Self) {
        (self.sin(), self.cos())
    }
}

/// Conversion of a literal constant, such as an interpolation threshold, into the element type.
pub trait FromF64 {
    #[must_use]
    fn from_f64(value: f64) -> Self;
}

impl<T: Zero, const N: usize> Zero for [T; N] {
    const ZERO: Self = [T::ZERO; N];
}

macro_rules! impl_integer {
    ( signed: $($signed:ty),*; unsigned: $($unsigned:ty),* $(;)? ) => {
        $(
            impl_integer!(@consts $signed);

            impl Abs for $signed {
                #[inline]
                fn abs(self) -> Self {
                    <$signed>::abs(self)
                }

                #[inline]
                fn abs_diff(self, rhs: Self) -> Self {
                    (self - rhs).abs()
                }
            }
        )*
        $(
            impl_integer!(@consts $unsigned);

            impl Abs for $unsigned {
                #[inline]
                fn abs(self) -> Self {
                    self
                }

                #[inline]
                fn abs_diff(self, rhs: Self) -> Self {
                    <$unsigned>::abs_diff(self, rhs)
                }
            }
        )*
    };

    (@consts $ty:ty) => {
        impl Zero for $ty {
            const ZERO: Self = 0;
        }

        impl One for $ty {
            const ONE: Self = 1;
        }

        impl Tolerance for $ty {
            const TOLERANCE: Self = 1;
        }
    };
}

impl_integer! {
    signed: i8, i16, i32, i64, i128, isize;
    unsigned: u8, u16, u32, u64, u128, usize;
}

// `libm::Libm<T>` mirrors the inherent float methods, so both backends share one body.
#[cfg(feature = "std")]
macro_rules! float_fn {
    ($ty:ty, $name:ident($($arg:ident),*)) => {
        <$ty>::$name($($arg),*)
    };
}

#[cfg(all(feature = "libm", not(feature = "std")))]
macro_rules! float_fn {
    ($ty:ty, $name:ident($($arg:ident),*)) => {
        libm::Libm::<$ty>::$name($($arg),*)
    };
}

macro_rules! impl_float {
    ( $($ty:ty),* $(,)? ) => {
        $(
            impl Zero for $ty {
                const ZERO: Self = 0.0;
            }

            impl One for $ty {
                const ONE: Self = 1.0;
            }

            impl Tolerance for $ty {
                const TOLERANCE: Self = 1e-6;
            }

            impl Abs for $ty {
                #[inline]
                fn abs(self) -> Self {
                    if self < 0.0 { -self } else { self }
                }

                #[inline]
                fn abs_diff(self, rhs: Self) -> Self {
                    (self - rhs).abs()
                }
            }

            impl FromF64 for $ty {
                #[allow(clippy::cast_possible_truncation)]
                #[inline(always)]
                fn from_f64(value: f64) -> Self {
                    value as $ty
                }
            }

            #[cfg(any(feature = "std", feature = "libm"))]
            impl Sqrt for $ty {
                #[inline(always)]
                fn sqrt(self) -> Self {
                    float_fn!($ty, sqrt(self))
                }
            }

            #[cfg(any(feature = "std", feature = "libm"))]
            impl Trig for $ty {
                #[inline]
                fn sin(self) -> Self {
                    float_fn!($ty, sin(self))
                }

                #[inline]
                fn cos(self) -> Self {
                    float_fn!($ty, cos(self))
                }

                #[inline]
                fn tan(self) -> Self {
                    float_fn!($ty, tan(self))
                }

                #[inline]
                fn acos(self) -> Self {
                    float_fn!($ty, acos(self))
                }
            }
        )*
    };
}

impl_float!(f32, f64);
