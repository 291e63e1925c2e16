// SPDX-License-Identifier: MIT OR Apache-2.0

//! The 3x4 affine transform.
//!
//! An [`Xform`] stores a 3x3 linear part in rows 0 to 2 and a translation in row 3. Points are
//! column vectors: a point `p` maps to `linear * p + translation`, so in a product `a * b` the
//! transform `b` is applied first. The homogeneous form places the translation in column 3
//! above a bottom row of `(0, 0, 0, 1)`, and that bottom row is never stored.

use super::{Mat3, Mat4, Matrix, Vec3, Xform};
use crate::utils::{
    num::{ClosedAdd, ClosedMul, One, Zero},
    sum,
};
use core::ops::Mul;

impl<T: Zero + One> Matrix<T, 3, 4> {
    /// The identity transform: an identity linear part and no translation.
    #[rustfmt::skip]
    pub const IDENTITY: Self = Matrix::new([
        [T::ONE,  T::ZERO, T::ZERO],
        [T::ZERO, T::ONE,  T::ZERO],
        [T::ZERO, T::ZERO, T::ONE],
        [T::ZERO, T::ZERO, T::ZERO],
    ]);

    /// Returns [`Xform::IDENTITY`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use math3d::matrix::{Matrix, Xform, vec3};
    /// let identity = Xform::<f32>::identity();
    ///
    /// assert_eq!(identity, Xform::default());
    /// assert_eq!(identity.row(3), vec3(0.0, 0.0, 0.0));
    /// ```
    #[must_use]
    #[inline]
    pub const fn identity() -> Self {
        Self::IDENTITY
    }
}

impl<T: Zero + One> Default for Matrix<T, 3, 4> {
    #[inline]
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl<T: Copy> Matrix<T, 3, 4> {
    /// The rotation and scale part: the first three rows.
    #[must_use]
    #[inline]
    pub fn linear_part(&self) -> Mat3<T> {
        let [x, y, z, _] = self.data;
        Matrix::new([x, y, z])
    }

    /// The translation: the last row.
    #[must_use]
    #[inline]
    pub fn translation_part(&self) -> Vec3<T> {
        Matrix::from_array(self.data[3])
    }

    /// Builds a transform from its linear part and its translation.
    #[must_use]
    #[inline]
    pub fn from_parts(linear: Mat3<T>, translation: Vec3<T>) -> Self {
        let [x, y, z] = linear.data;
        Matrix::new([x, y, z, translation.into_array()])
    }
}

impl<T: Copy + Zero + One> Matrix<T, 3, 4> {
    /// The equivalent 4x4 matrix for column vectors: the linear part in the top left, the
    /// translation in column 3 and `(0, 0, 0, 1)` as the bottom row.
    ///
    /// # Examples
    ///
    /// ```
    /// # use math3d::{matrix::{Matrix, vec3}, transform::translation};
    /// let xform = translation(vec3(1, 2, 3));
    ///
    /// assert_eq!(xform.to_homogeneous(), Matrix::new([
    ///     [1, 0, 0, 1],
    ///     [0, 1, 0, 2],
    ///     [0, 0, 1, 3],
    ///     [0, 0, 0, 1],
    /// ]));
    /// ```
    #[must_use]
    #[inline]
    pub fn to_homogeneous(&self) -> Mat4<T> {
        Matrix::from_fn(|row, col| match (row, col) {
            (3, 3) => T::ONE,
            (3, _) => T::ZERO,
            (_, 3) => self.data[3][row],
            _ => self.data[row][col],
        })
    }
}

impl<T: Copy + Zero + ClosedAdd + ClosedMul> Matrix<T, 3, 4> {
    /// Transforms a point: applies the linear part, then the translation.
    ///
    /// # Examples
    ///
    /// ```
    /// # use math3d::{matrix::vec3, transform::translation};
    /// let xform = translation(vec3(1.0, 2.0, 3.0));
    /// assert_eq!(xform.transform_point(vec3(1.0, 1.0, 1.0)), vec3(2.0, 3.0, 4.0));
    /// ```
    #[must_use]
    #[inline]
    pub fn transform_point(&self, point: Vec3<T>) -> Vec3<T> {
        self.transform_vector(point) + self.translation_part()
    }

    /// Transforms a direction: applies the linear part only.
    #[must_use]
    #[inline]
    pub fn transform_vector(&self, vector: Vec3<T>) -> Vec3<T> {
        let vector = vector.into_array();
        Matrix::from_fn(|_, axis| sum((0..3).map(|k| self.data[axis][k] * vector[k])))
    }
}

/// Composes two transforms. The right operand is applied first.
impl<T: Copy + Zero + ClosedAdd + ClosedMul> Mul<Matrix<T, 3, 4>> for Matrix<T, 3, 4> {
    type Output = Xform<T>;

    #[inline]
    fn mul(self, rhs: Matrix<T, 3, 4>) -> Self::Output {
        let linear = self.linear_part() * rhs.linear_part();
        let translation = self.transform_point(rhs.translation_part());
        Matrix::from_parts(linear, translation)
    }
}

/// Multiplies the homogeneous form of a transform by a full 4x4 matrix without building the
/// homogeneous form.
impl<T: Copy + Zero + ClosedAdd + ClosedMul> Mul<Matrix<T, 4, 4>> for Matrix<T, 3, 4> {
    type Output = Mat4<T>;

    #[inline]
    fn mul(self, rhs: Matrix<T, 4, 4>) -> Self::Output {
        Matrix::from_fn(|row, col| {
            if row == 3 {
                return rhs.data[3][col];
            }

            let linear = sum((0..3).map(|k| self.data[row][k] * rhs.data[k][col]));
            linear + self.data[3][row] * rhs.data[3][col]
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::matrix::{Mat3, Mat4, Matrix, Xform, vec3};

    #[rustfmt::skip]
    fn sample() -> Xform<i32> {
        Matrix::new([
            [1, 2, 0],
            [0, 1, 3],
            [2, 0, 1],
            [4, 5, 6],
        ])
    }

    #[test]
    fn test_identity() {
        let identity = Xform::<f32>::IDENTITY;
        assert_eq!(identity.linear_part(), Mat3::<f32>::identity());
        assert_eq!(identity.translation_part(), vec3(0.0, 0.0, 0.0));
        assert_eq!(identity.row(2), vec3(0.0, 0.0, 1.0));
        assert_eq!(identity.col(1), Matrix::new([[0.0], [1.0], [0.0], [0.0]]));
        assert_eq!(identity.to_homogeneous(), Mat4::<f32>::identity());
    }

    #[test]
    fn test_fill_constructor() {
        let xform: Xform<f64> = Xform::splat(1.2);
        assert!(xform.elems().all(|elem| *elem == 1.2));
    }

    #[test]
    fn test_compose_with_identity() {
        assert_eq!(sample() * Xform::<i32>::identity(), sample());
        assert_eq!(Xform::<i32>::identity() * sample(), sample());
    }

    #[test]
    fn test_compose_matches_homogeneous_product() {
        #[rustfmt::skip]
        let other = Matrix::new([
            [0, 1, 0],
            [1, 0, 2],
            [3, 1, 1],
            [-1, 2, 7],
        ]);

        let composed = sample() * other;
        let homogeneous = sample().to_homogeneous() * other.to_homogeneous();

        assert_eq!(composed.to_homogeneous(), homogeneous);
    }

    #[test]
    fn test_homogeneous_form() {
        #[rustfmt::skip]
        assert_eq!(sample().to_homogeneous(), Matrix::new([
            [1, 2, 0, 4],
            [0, 1, 3, 5],
            [2, 0, 1, 6],
            [0, 0, 0, 1],
        ]));
    }

    #[test]
    fn test_transform_point_uses_column_vectors() {
        assert_eq!(sample().transform_point(vec3(1, -1, 2)), vec3(3, 10, 10));
        assert_eq!(sample().transform_vector(vec3(1, -1, 2)), vec3(-1, 5, 4));
    }

    #[test]
    fn test_compose_applies_right_first() {
        let a = sample();
        let b = Matrix::from_parts(Mat3::<i32>::identity() * 2, vec3(1, 1, 1));
        let p = vec3(1, -1, 2);

        assert_eq!((a * b).transform_point(p), a.transform_point(b.transform_point(p)));
        assert_eq!((b * a).transform_point(p), b.transform_point(a.transform_point(p)));
        assert_eq!((a * b).translation_part(), a.transform_point(vec3(1, 1, 1)));
    }

    #[test]
    fn test_xform_times_mat4() {
        #[rustfmt::skip]
        let projection = Matrix::new([
            [1, 0, 0, 0],
            [0, 2, 0, 0],
            [0, 0, 3, -1],
            [0, 0, 4, 0],
        ]);

        assert_eq!(sample() * projection, sample().to_homogeneous() * projection);
        assert_eq!(Xform::<i32>::identity() * projection, projection);
        assert_eq!(sample() * Mat4::<i32>::identity(), sample().to_homogeneous());
    }

    #[test]
    fn test_transform_vector_ignores_translation() {
        let xform = Matrix::from_parts(Mat3::<f64>::identity(), vec3(10.0, 20.0, 30.0));
        assert_eq!(xform.transform_vector(vec3(1.0, 2.0, 3.0)), vec3(1.0, 2.0, 3.0));
        assert_eq!(xform.transform_point(vec3(1.0, 2.0, 3.0)), vec3(11.0, 22.0, 33.0));
    }
}
