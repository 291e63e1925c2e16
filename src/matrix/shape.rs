// SPDX-License-Identifier: MIT OR Apache-2.0

//! Trait implementations whose behaviour depends on the shape of the matrix.
//!
//! Indexing a matrix with a single `usize` yields an element for row vectors and a row for
//! taller matrices. Default construction yields zeros, except for [`Xform`](super::Xform),
//! whose default is the identity transform. Both are implemented per height or per shape, for
//! every dimension up to 4.

use super::Matrix;
use crate::utils::num::Zero;
use core::ops::{Index, IndexMut};

impl<T, const W: usize> Index<usize> for Matrix<T, W, 1> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.as_array()[0][index]
    }
}

impl<T, const W: usize> IndexMut<usize> for Matrix<T, W, 1> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.as_array_mut()[0][index]
    }
}

macro_rules! impl_row_index {
    ( $( $rows:literal ),* $(,)? ) => {
        $(
            impl<T, const W: usize> Index<usize> for Matrix<T, W, $rows> {
                type Output = Matrix<T, W, 1>;

                #[inline]
                fn index(&self, index: usize) -> &Self::Output {
                    Matrix::from_array_ref(&self.as_array()[index])
                }
            }

            impl<T, const W: usize> IndexMut<usize> for Matrix<T, W, $rows> {
                #[inline]
                fn index_mut(&mut self, index: usize) -> &mut Self::Output {
                    Matrix::from_array_mut(&mut self.as_array_mut()[index])
                }
            }
        )*
    };
}

impl_row_index!(2, 3, 4);

macro_rules! impl_zeroed_default {
    ( $( ($cols:literal, $rows:literal) ),* $(,)? ) => {
        $(
            impl<T: Zero> Default for Matrix<T, $cols, $rows> {
                #[inline]
                fn default() -> Self {
                    <Self as Zero>::ZERO
                }
            }
        )*
    };
}

// (3, 4) is the affine transform and defaults to the identity instead.
impl_zeroed_default! {
    (1, 1), (2, 1), (3, 1), (4, 1),
    (1, 2), (2, 2), (3, 2), (4, 2),
    (1, 3), (2, 3), (3, 3), (4, 3),
    (1, 4), (2, 4), (4, 4),
}
