// SPDX-License-Identifier: MIT OR Apache-2.0

//! Operations only defined for square matrices.
//!
//! The determinant and the adjoint are computed through minors, each of which is a square
//! matrix one size smaller. Those are implemented per size, from 1x1 up to 4x4, so that every
//! minor has a concrete type and the recursion bottoms out in the closed forms for 1x1 and 2x2
//! matrices at compile time.

use super::Matrix;
use crate::utils::{
    num::{ClosedAdd, One, Scalar, Zero},
    sum,
};

impl<T: Zero + One, const N: usize> Matrix<T, N, N> {
    /// Constructs an instance of the identity matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// # use math3d::matrix::Matrix;
    /// let matrix = Matrix::<f64, 3, 3>::identity();
    ///
    /// assert_eq!(matrix, Matrix::new([
    ///     [1.0, 0.0, 0.0],
    ///     [0.0, 1.0, 0.0],
    ///     [0.0, 0.0, 1.0],
    /// ]));
    /// ```
    #[must_use]
    #[inline]
    pub fn identity() -> Self {
        Matrix::from_fn(|row, col| if row == col { T::ONE } else { T::ZERO })
    }
}

impl<T: Copy + Zero + ClosedAdd, const N: usize> Matrix<T, N, N> {
    /// The sum of the elements on the main diagonal.
    ///
    /// # Examples
    ///
    /// ```
    /// # use math3d::matrix::Matrix;
    /// let matrix = Matrix::new([
    ///     [1, 2, 3],
    ///     [4, -5, 6],
    ///     [7, 8, 9],
    /// ]);
    ///
    /// assert_eq!(matrix.trace(), 5);
    /// ```
    #[must_use]
    #[inline]
    pub fn trace(&self) -> T {
        sum((0..N).map(|i| self.data[i][i]))
    }
}

impl<T: Copy> Matrix<T, 1, 1> {
    #[must_use]
    #[inline]
    pub fn determinant(&self) -> T {
        self.data[0][0]
    }
}

impl<T: Scalar> Matrix<T, 1, 1> {
    /// The adjoint of a 1x1 matrix is always `[1]`.
    #[doc(alias = "adjugate")]
    #[must_use]
    #[inline]
    pub fn adjoint(&self) -> Self {
        Matrix::splat(T::ONE)
    }
}

impl<T: Scalar> Matrix<T, 2, 2> {
    /// Calculates the determinant, `ad - bc`.
    #[must_use]
    #[inline]
    pub fn determinant(&self) -> T {
        let [[a, b], [c, d]] = self.data;
        (a * d) - (b * c)
    }
}

macro_rules! impl_cofactor_expansion {
    ( $( $n:literal ),* $(,)? ) => {
        $(
            impl<T: Scalar> Matrix<T, $n, $n> {
                /// Calculates the determinant by cofactor expansion along the first row.
                ///
                /// If this value is `0`, then the matrix is not invertible.
                #[must_use]
                #[inline]
                pub fn determinant(&self) -> T {
                    let mut det = T::ZERO;
                    for col in 0..$n {
                        let term = self.data[0][col] * self.minor(0, col).determinant();
                        if col % 2 == 0 {
                            det += term;
                        } else {
                            det -= term;
                        }
                    }
                    det
                }
            }
        )*
    };
}

macro_rules! impl_minor_and_adjoint {
    ( $( $n:literal => $minor:literal ),* $(,)? ) => {
        $(
            impl<T: Copy> Matrix<T, $n, $n> {
                /// Returns the matrix without row `row` and column `col`.
                ///
                /// # Panics
                ///
                /// This method will panic if either index is out of bounds.
                #[track_caller]
                #[must_use]
                #[inline]
                pub fn minor(&self, row: usize, col: usize) -> Matrix<T, $minor, $minor> {
                    self.remove_row::<$minor>(row).remove_column::<$minor>(col)
                }
            }

            impl<T: Scalar> Matrix<T, $n, $n> {
                /// Calculates the adjoint (adjugate) matrix: the transpose of the matrix of
                /// cofactors.
                ///
                /// This is used to find the inverse of the matrix in [`Matrix::inverse()`].
                #[doc(alias = "adjugate")]
                #[must_use]
                #[inline]
                pub fn adjoint(&self) -> Self {
                    Matrix::from_fn(|row, col| {
                        let cofactor = self.minor(col, row).determinant();
                        if (row + col) % 2 == 0 {
                            cofactor
                        } else {
                            T::ZERO - cofactor
                        }
                    })
                }
            }
        )*
    };
}

macro_rules! impl_inverse {
    ( $( $n:literal ),* $(,)? ) => {
        $(
            impl<T: Scalar> Matrix<T, $n, $n> {
                /// Returns whether the matrix is invertible.
                ///
                /// If this is `false`, then [`Matrix::inverse()`] will panic.
                #[must_use]
                #[inline]
                pub fn is_invertible(&self) -> bool {
                    self.determinant() != T::ZERO
                }

                /// Calculates the inverse of the matrix as its adjoint divided by its
                /// determinant.
                ///
                /// # Panics
                ///
                /// This method will panic if the determinant is zero. If the matrix may be
                /// singular, use [`inverse_checked()`] or [`is_invertible()`] instead.
                ///
                /// [`inverse_checked()`]: Matrix::inverse_checked
                /// [`is_invertible()`]: Matrix::is_invertible
                #[track_caller]
                #[must_use]
                #[inline]
                pub fn inverse(&self) -> Self {
                    self.inverse_checked()
                        .expect("Could not calculate matrix inverse: determinant must not be '0'")
                }

                /// Calculates the inverse of the matrix, or returns `None` if the determinant
                /// is zero.
                #[must_use]
                #[inline]
                pub fn inverse_checked(&self) -> Option<Self> {
                    let det = self.determinant();
                    if det == T::ZERO {
                        return None;
                    }

                    Some(self.adjoint() * (T::ONE / det))
                }
            }
        )*
    };
}

impl_cofactor_expansion!(3, 4);
impl_minor_and_adjoint!(2 => 1, 3 => 2, 4 => 3);
impl_inverse!(1, 2, 3, 4);

#[cfg(test)]
mod tests {
    use crate::matrix::{Mat2, Mat3, Mat4, Matrix};

    #[test]
    fn test_determinants() {
        assert_eq!(Matrix::new([[-4]]).determinant(), -4);

        #[rustfmt::skip]
        let m2 = Matrix::new([
            [3, 8],
            [4, 6],
        ]);
        assert_eq!(m2.determinant(), -14);

        #[rustfmt::skip]
        let m3 = Matrix::new([
            [1, 3, 2],
            [4, 1, 3],
            [2, 5, 2],
        ]);
        assert_eq!(m3.determinant(), 17);

        #[rustfmt::skip]
        let m4 = Matrix::new([
            [ 2,  1, 3, 4],
            [ 0, -1, 2, 1],
            [ 3,  2, 0, 5],
            [-1,  3, 2, 1],
        ]);
        assert_eq!(m4.determinant(), 35);
        assert_eq!(m4.transpose().determinant(), 35);
    }

    #[test]
    fn test_minor() {
        #[rustfmt::skip]
        let m = Matrix::new([
            [1, 2, 3],
            [4, 5, 6],
            [7, 8, 9],
        ]);

        assert_eq!(m.minor(0, 0), Matrix::new([[5, 6], [8, 9]]));
        assert_eq!(m.minor(1, 2), Matrix::new([[1, 2], [7, 8]]));
        assert_eq!(m.minor(2, 1), Matrix::new([[1, 3], [4, 6]]));
    }

    #[test]
    fn test_adjoint() {
        #[rustfmt::skip]
        let m = Matrix::new([
            [-1, -2, -2],
            [ 2,  1, -2],
            [ 2, -2,  1],
        ]);

        #[rustfmt::skip]
        assert_eq!(m.adjoint(), Matrix::new([
            [-3,  6,  6],
            [-6,  3, -6],
            [-6, -6,  3],
        ]));

        let m2 = Matrix::new([[3, 8], [4, 6]]);
        assert_eq!(m2.adjoint(), Matrix::new([[6, -8], [-4, 3]]));

        assert_eq!(Matrix::new([[9]]).adjoint(), Matrix::new([[1]]));
    }

    #[test]
    fn test_adjoint_of_identity_and_diagonal() {
        assert_eq!(Mat2::<i32>::identity().adjoint(), Mat2::<i32>::identity());
        assert_eq!(Mat3::<i32>::identity().adjoint(), Mat3::<i32>::identity());
        assert_eq!(Mat4::<i32>::identity().adjoint(), Mat4::<i32>::identity());

        #[rustfmt::skip]
        let diagonal = Matrix::new([
            [1, 0, 0, 0],
            [0, 2, 0, 0],
            [0, 0, 3, 0],
            [0, 0, 0, 4],
        ]);

        #[rustfmt::skip]
        assert_eq!(diagonal.adjoint(), Matrix::new([
            [24,  0, 0, 0],
            [ 0, 12, 0, 0],
            [ 0,  0, 8, 0],
            [ 0,  0, 0, 6],
        ]));
    }

    #[test]
    fn test_inverse() {
        #[rustfmt::skip]
        let m = Matrix::new([
            [4.0, 3.0, 8.0],
            [6.0, 2.0, 5.0],
            [1.0, 5.0, 9.0],
        ]);

        #[rustfmt::skip]
        let expected = Matrix::new([
            [-1.0 / 7.0, 13.0 / 49.0,  -1.0 / 49.0],
            [-1.0,        4.0 / 7.0,    4.0 / 7.0],
            [ 4.0 / 7.0, -17.0 / 49.0, -10.0 / 49.0],
        ]);

        let inverse = m.inverse();
        assert!(inverse.nearly_equal(&expected));
        assert!((m * inverse).nearly_equal(&Mat3::<f64>::identity()));
        assert!((inverse * m).nearly_equal(&Mat3::<f64>::identity()));
    }

    #[test]
    fn test_inverse_small_sizes() {
        assert_eq!(Matrix::new([[4.0f64]]).inverse(), Matrix::new([[0.25]]));

        let m = Matrix::new([[3.0f64, 8.0], [4.0, 6.0]]);
        assert!((m * m.inverse()).nearly_equal(&Mat2::<f64>::identity()));

        #[rustfmt::skip]
        let m4 = Matrix::new([
            [ 2.0f64, 1.0, 3.0, 4.0],
            [ 0.0,   -1.0, 2.0, 1.0],
            [ 3.0,    2.0, 0.0, 5.0],
            [-1.0,    3.0, 2.0, 1.0],
        ]);
        assert!((m4 * m4.inverse()).nearly_equal(&Mat4::<f64>::identity()));
    }

    #[test]
    fn test_singular_matrix() {
        #[rustfmt::skip]
        let singular = Matrix::new([
            [1.0f32, 2.0, 3.0],
            [2.0,    4.0, 6.0],
            [0.0,    1.0, 1.0],
        ]);

        assert!(!singular.is_invertible());
        assert_eq!(singular.inverse_checked(), None);
        assert!(Mat3::<f32>::identity().is_invertible());
    }

    #[test]
    #[should_panic(expected = "determinant must not be '0'")]
    fn test_singular_inverse_panics() {
        let _inverse = Mat2::<f64>::splat(1.0).inverse();
    }

    #[test]
    fn test_trace() {
        assert_eq!(Mat4::<i32>::identity().trace(), 4);
        assert_eq!(Matrix::new([[2.5, 1.0], [1.0, 0.5]]).trace(), 3.0);
    }
}
