// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::utils::num::{ClosedAdd, Zero};
use core::{array, ops::Add};

/// Compile-time checks on matrix shapes.
///
/// Each check is an associated constant which fails to evaluate when its condition does not
/// hold, so a shape mismatch surfaces as a build error as soon as the offending generic
/// function is instantiated.
pub mod assertions {
    #[macro_export]
    macro_rules! const_assert_one_less {
        ($smaller:expr, $larger:expr) => {
            #[allow(path_statements)]
            <$crate::utils::assertions::AssertOneLess<$smaller, $larger>>::ASSERT;
        };
    }

    #[macro_export]
    macro_rules! const_assert_fits_shape {
        ($count:expr, $cols:expr, $rows:expr) => {
            #[allow(path_statements)]
            <$crate::utils::assertions::AssertFitsShape<$count, $cols, $rows>>::ASSERT;
        };
    }

    #[macro_export]
    macro_rules! const_assert_same_count {
        ($cols:expr, $rows:expr, $cols2:expr, $rows2:expr) => {
            #[allow(path_statements)]
            <$crate::utils::assertions::AssertSameCount<$cols, $rows, $cols2, $rows2>>::ASSERT;
        };
    }

    #[non_exhaustive]
    pub struct AssertOneLess<const SMALLER: usize, const LARGER: usize>;

    impl<const SMALLER: usize, const LARGER: usize> AssertOneLess<SMALLER, LARGER> {
        pub const ASSERT: () = assert!(
            SMALLER + 1 == LARGER,
            "the resulting dimension must be exactly one smaller"
        );
    }

    #[non_exhaustive]
    pub struct AssertFitsShape<const COUNT: usize, const W: usize, const H: usize>;

    impl<const COUNT: usize, const W: usize, const H: usize> AssertFitsShape<COUNT, W, H> {
        pub const ASSERT: () = assert!(
            COUNT <= W * H,
            "too many elements for the matrix shape"
        );
    }

    #[non_exhaustive]
    pub struct AssertSameCount<const W: usize, const H: usize, const W2: usize, const H2: usize>;

    impl<const W: usize, const H: usize, const W2: usize, const H2: usize>
        AssertSameCount<W, H, W2, H2>
    {
        pub const ASSERT: () = assert!(
            W * H == W2 * H2,
            "both matrices must hold the same number of elements"
        );
    }
}

pub mod num;

/// Analogous to the [`Iterator::sum()`] method, but which uses [`Zero`] and [`ClosedAdd`] instead of
/// the [`Sum`] trait.
///
/// [`Sum`]: core::iter::Sum
#[must_use]
#[inline(always)]
pub fn sum<I>(iter: I) -> I::Item
where
    I: IntoIterator,
    I::Item: Zero + ClosedAdd,
{
    iter.into_iter().fold(Zero::ZERO, Add::add)
}

/// Consumes two arrays of the same length and applies `f` to each pair of elements.
///
/// # Examples
///
/// ```
/// # use math3d::utils::zip_map;
/// let sums = zip_map([1, 2, 3], [10, 20, 30], |x, y| x + y);
/// assert_eq!(sums, [11, 22, 33]);
/// ```
#[must_use]
#[inline]
pub fn zip_map<T, U, Res, F, const N: usize>(lhs: [T; N], rhs: [U; N], mut f: F) -> [Res; N]
where
    F: FnMut(T, U) -> Res,
{
    let mut pairs = lhs.into_iter().zip(rhs);
    array::from_fn(|_| match pairs.next() {
        Some((x, y)) => f(x, y),
        None => unreachable!("both arrays have length {N}"),
    })
}
