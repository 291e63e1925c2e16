// SPDX-License-Identifier: MIT OR Apache-2.0

//! Builders for common transforms.
//!
//! Every function here is a plain formula returning a fresh [`Xform`] (or, for projections,
//! a [`Mat4`](crate::matrix::Mat4)). Angles are in radians.
//!
//! Transforms act on column vectors: a point `p` maps to `linear * p + translation`, and in a
//! product `a * b` the transform `b` is applied first. The rotation for `q1 * q2` is therefore
//! `rotation_from_quaternion(q1) * rotation_from_quaternion(q2)`. The translation is stored in
//! row 3.

use crate::{
    matrix::{Matrix, Vec3, Vector, Xform, vec3},
    rotation::quaternion::Quaternion,
    utils::num::{Float, One, Scalar, Sqrt, Zero},
};

pub mod projection;

pub use self::projection::{orthographic, perspective};

/// Rotates by `angle` about `axis` using Rodrigues' formula. The axis does not need to be
/// normalized, but must not be zero.
///
/// # Examples
///
/// ```
/// # use math3d::{transform::{rot_z, rotation}, vec3};
/// let about_z = rotation(vec3(0.0, 0.0, 3.0), 0.25);
/// assert!(about_z.nearly_equal(&rot_z(0.25)));
/// ```
#[must_use]
pub fn rotation<T: Float>(axis: Vec3<T>, angle: T) -> Xform<T> {
    let (s, c) = angle.sin_cos();
    let t = T::ONE - c;
    let [x, y, z] = axis.normalize().into_array();

    let (tx, ty, tz) = (t * x, t * y, t * z);
    let (sx, sy, sz) = (s * x, s * y, s * z);

    #[rustfmt::skip]
    let xform = Matrix::new([
        [tx * x + c,  tx * y - sz, tx * z + sy],
        [tx * y + sz, ty * y + c,  ty * z - sx],
        [tx * z - sy, ty * z + sx, tz * z + c],
        [T::ZERO,     T::ZERO,     T::ZERO],
    ]);

    xform
}

/// The rotation represented by a unit quaternion. Same as [`Quaternion::to_rot()`].
#[must_use]
#[inline]
pub fn rotation_from_quaternion<T: Scalar>(rotation: Quaternion<T>) -> Xform<T> {
    rotation.to_rot()
}

#[must_use]
pub fn rot_x<T: Float>(angle: T) -> Xform<T> {
    let (s, c) = angle.sin_cos();

    #[rustfmt::skip]
    let xform = Matrix::new([
        [T::ONE,  T::ZERO, T::ZERO],
        [T::ZERO, c,       -s],
        [T::ZERO, s,       c],
        [T::ZERO, T::ZERO, T::ZERO],
    ]);

    xform
}

#[must_use]
pub fn rot_y<T: Float>(angle: T) -> Xform<T> {
    let (s, c) = angle.sin_cos();

    #[rustfmt::skip]
    let xform = Matrix::new([
        [c,       T::ZERO, s],
        [T::ZERO, T::ONE,  T::ZERO],
        [-s,      T::ZERO, c],
        [T::ZERO, T::ZERO, T::ZERO],
    ]);

    xform
}

#[must_use]
pub fn rot_z<T: Float>(angle: T) -> Xform<T> {
    let (s, c) = angle.sin_cos();

    #[rustfmt::skip]
    let xform = Matrix::new([
        [c,       -s,      T::ZERO],
        [s,       c,       T::ZERO],
        [T::ZERO, T::ZERO, T::ONE],
        [T::ZERO, T::ZERO, T::ZERO],
    ]);

    xform
}

/// The identity transform moved by `offset`.
#[must_use]
#[inline]
pub fn translation<T: Copy + Zero + One>(offset: Vec3<T>) -> Xform<T> {
    let mut xform = Xform::IDENTITY;
    xform.set_row(3, offset);
    xform
}

/// Scales each axis by the corresponding element of `factors`.
#[must_use]
#[inline]
pub fn scale<T: Copy + Zero>(factors: Vec3<T>) -> Xform<T> {
    let [x, y, z] = factors.into_array();

    #[rustfmt::skip]
    let xform = Matrix::new([
        [x,       T::ZERO, T::ZERO],
        [T::ZERO, y,       T::ZERO],
        [T::ZERO, T::ZERO, z],
        [T::ZERO, T::ZERO, T::ZERO],
    ]);

    xform
}

/// A transform that scales a point by `factors`, then rotates it by `rotation`, then moves it
/// by `offset`.
///
/// # Examples
///
/// ```
/// # use math3d::{Quaternion, matrix::Matrix, transform::compose, vec3};
/// let xform = compose(Quaternion::identity(), vec3(1.0, 2.0, 3.0), vec3(2.0, 2.0, 2.0));
///
/// assert_eq!(xform, Matrix::new([
///     [2.0, 0.0, 0.0],
///     [0.0, 2.0, 0.0],
///     [0.0, 0.0, 2.0],
///     [1.0, 2.0, 3.0],
/// ]));
/// assert_eq!(xform.transform_point(vec3(1.0, 1.0, 1.0)), vec3(3.0, 4.0, 5.0));
/// ```
#[must_use]
#[inline]
pub fn compose<T: Scalar>(rotation: Quaternion<T>, offset: Vec3<T>, factors: Vec3<T>) -> Xform<T> {
    translation(offset) * rotation_from_quaternion(rotation) * scale(factors)
}

/// Places a frame at the origin of `from` whose local `z` axis points at the origin of `to`.
///
/// The columns of the linear part are `left`, `up` and `forward`, and the translation is the
/// eye position, so the result maps local coordinates into the space of `from` and `to`.
/// World-up is fixed to `(0, 1, 0)`. Looking straight up or down makes `left` undefined and
/// the linear part NaN.
#[must_use]
pub fn look_at<T: Float>(from: &Xform<T>, to: &Xform<T>) -> Xform<T> {
    let eye = from.translation_part();
    let target = to.translation_part();

    let forward = (target - eye).normalize();
    let left = vec3(T::ZERO, T::ONE, T::ZERO).cross(forward).normalize();
    let up = forward.cross(left).normalize();

    let basis = Matrix::from_rows([left, up, forward]).transpose();
    Matrix::from_parts(basis, eye)
}

/// The Euclidean distance between two points.
#[must_use]
#[inline]
pub fn distance<T: Scalar + Sqrt, const W: usize>(a: Vector<T, W>, b: Vector<T, W>) -> T {
    (a - b).length()
}

/// The angle between two unit vectors, `acos(a · b)`.
///
/// Neither vector is normalized first.
#[must_use]
#[inline]
pub fn angle<T: Float, const W: usize>(a: Vector<T, W>, b: Vector<T, W>) -> T {
    a.dot(b).acos()
}

#[cfg(all(test, any(feature = "std", feature = "libm")))]
mod tests {
    use super::*;
    use crate::matrix::Mat3;
    use core::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_axis_rotations() {
        #[rustfmt::skip]
        let expected = Matrix::new([
            [0.0, -1.0, 0.0],
            [1.0,  0.0, 0.0],
            [0.0,  0.0, 1.0],
            [0.0,  0.0, 0.0],
        ]);
        assert!(rot_z(FRAC_PI_2).nearly_equal(&expected));

        #[rustfmt::skip]
        let expected = Matrix::new([
            [1.0, 0.0,  0.0],
            [0.0, 0.0, -1.0],
            [0.0, 1.0,  0.0],
            [0.0, 0.0,  0.0],
        ]);
        assert!(rot_x(FRAC_PI_2).nearly_equal(&expected));

        #[rustfmt::skip]
        let expected = Matrix::new([
            [ 0.0, 0.0, 1.0],
            [ 0.0, 1.0, 0.0],
            [-1.0, 0.0, 0.0],
            [ 0.0, 0.0, 0.0],
        ]);
        assert!(rot_y(FRAC_PI_2).nearly_equal(&expected));

        assert_eq!(rot_x(0.0), Xform::<f64>::identity());
    }

    #[test]
    fn test_rotation_about_axis() {
        for angle in [0.0, 0.3, FRAC_PI_2, 2.5, -1.0] {
            assert!(rotation(vec3(1.0, 0.0, 0.0), angle).nearly_equal(&rot_x(angle)));
            assert!(rotation(vec3(0.0, 1.0, 0.0), angle).nearly_equal(&rot_y(angle)));
            assert!(rotation(vec3(0.0, 0.0, 4.0), angle).nearly_equal(&rot_z(angle)));
        }

        let linear = rotation(vec3(1.0, -2.0, 0.5), 1.3).linear_part();
        assert!((linear * linear.transpose()).nearly_equal(&Mat3::<f64>::identity()));
        approx::assert_relative_eq!(linear.determinant(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_rotation_acts_on_column_vectors() {
        let linear = rot_z(FRAC_PI_2).linear_part();
        let x_axis = Matrix::new([[1.0], [0.0], [0.0]]);

        assert!((linear * x_axis).nearly_equal(&Matrix::new([[0.0], [1.0], [0.0]])));

        let turned = rot_z(FRAC_PI_2).transform_point(vec3(1.0, 0.0, 0.0));
        assert!(turned.nearly_equal(&vec3(0.0, 1.0, 0.0)));

        let turned = rot_x(FRAC_PI_2).transform_point(vec3(0.0, 1.0, 0.0));
        assert!(turned.nearly_equal(&vec3(0.0, 0.0, 1.0)));

        let turned = rot_y(FRAC_PI_2).transform_point(vec3(0.0, 0.0, 1.0));
        assert!(turned.nearly_equal(&vec3(1.0, 0.0, 0.0)));
    }

    #[test]
    fn test_rotation_from_quaternion() {
        let q = Quaternion::from_axis_angle(vec3(2.0, 1.0, -1.0), 0.8);

        assert_eq!(rotation_from_quaternion(q), q.to_rot());
        assert!(rotation_from_quaternion(q).nearly_equal(&rotation(vec3(2.0, 1.0, -1.0), 0.8)));

        // Angles past π keep their sign through the direct conversion.
        let q = Quaternion::from_axis_angle(vec3(0.0, 0.0, 1.0), 1.5 * PI);
        assert!(rotation_from_quaternion(q).nearly_equal(&rot_z(1.5 * PI)));
    }

    #[test]
    fn test_translation_and_scale() {
        let moved = translation(vec3(1.0, 2.0, 3.0));
        assert_eq!(moved.linear_part(), Mat3::<f64>::identity());
        assert_eq!(moved.row(3), vec3(1.0, 2.0, 3.0));
        assert_eq!(moved.transform_point(vec3(1.0, 1.0, 1.0)), vec3(2.0, 3.0, 4.0));

        let scaled = scale(vec3(2.0, 3.0, 4.0));
        assert_eq!(
            scaled.linear_part().to_array(),
            [[2.0, 0.0, 0.0], [0.0, 3.0, 0.0], [0.0, 0.0, 4.0]]
        );
        assert_eq!(scaled.translation_part(), vec3(0.0, 0.0, 0.0));
        assert_eq!(scaled.transform_point(vec3(1.0, 1.0, 1.0)), vec3(2.0, 3.0, 4.0));
    }

    #[test]
    fn test_compose_order() {
        let q = Quaternion::from_axis_angle(vec3(0.0, 1.0, 0.0), 0.6);
        let offset = vec3(1.0, -2.0, 0.5);
        let factors = vec3(2.0, 1.0, 3.0);

        let composed = compose(q, offset, factors);
        assert_eq!(composed, translation(offset) * q.to_rot() * scale(factors));

        // Scale, then rotate, then translate.
        for point in [vec3(0.0, 0.0, 0.0), vec3(1.0, 2.0, 3.0), vec3(-4.0, 0.5, 2.0)] {
            let scaled = point.zip_map(factors, |p, f| p * f);
            let expected = q.to_rot().transform_point(scaled) + offset;
            assert!(composed.transform_point(point).nearly_equal(&expected));
        }

        let composed = compose(Quaternion::identity(), vec3(1.0, 2.0, 3.0), vec3(2.0, 2.0, 2.0));
        assert_eq!(composed.transform_point(vec3(0.0, 0.0, 0.0)), vec3(1.0, 2.0, 3.0));

        #[rustfmt::skip]
        assert_eq!(composed, Matrix::new([
            [2.0, 0.0, 0.0],
            [0.0, 2.0, 0.0],
            [0.0, 0.0, 2.0],
            [1.0, 2.0, 3.0],
        ]));
    }

    #[test]
    fn test_look_at() {
        let from = translation(vec3(0.0, 0.0, 0.0));
        let to = translation(vec3(0.0, 0.0, 5.0));
        assert!(look_at(&from, &to).nearly_equal(&Xform::<f64>::identity()));

        let from = translation(vec3(1.0, 2.0, 3.0));
        let to = translation(vec3(1.0, 2.0, -7.0)) * rot_x(0.4);

        #[rustfmt::skip]
        let expected = Matrix::new([
            [-1.0, 0.0,  0.0],
            [ 0.0, 1.0,  0.0],
            [ 0.0, 0.0, -1.0],
            [ 1.0, 2.0,  3.0],
        ]);
        assert!(look_at(&from, &to).nearly_equal(&expected));
    }

    #[test]
    fn test_look_at_matches_rotations() {
        let origin = translation(vec3(0.0, 0.0, 0.0));
        let along_x = translation(vec3(3.0, 0.0, 0.0));
        assert!(look_at(&origin, &along_x).nearly_equal(&rot_y(FRAC_PI_2)));

        let from = translation(vec3(1.0, 2.0, 3.0));
        let to = translation(vec3(5.0, 2.0, 3.0));
        let frame = look_at(&from, &to);

        assert!(frame.transform_point(vec3(0.0, 0.0, 2.0)).nearly_equal(&vec3(3.0, 2.0, 3.0)));
        assert!(frame.transform_vector(vec3(0.0, 1.0, 0.0)).nearly_equal(&vec3(0.0, 1.0, 0.0)));
    }

    #[test]
    fn test_look_at_straight_up_is_undefined() {
        let from = translation(vec3(0.0f64, 0.0, 0.0));
        let to = translation(vec3(0.0f64, 5.0, 0.0));
        let linear = look_at(&from, &to).linear_part();

        assert!(linear.col(0).elems().all(|elem| elem.is_nan()));
    }

    #[test]
    fn test_distance_and_angle() {
        assert_eq!(distance(vec3(1.0, 2.0, 3.0), vec3(4.0, 6.0, 3.0)), 5.0);
        assert_eq!(distance(vec3(1.0, 2.0, 3.0), vec3(1.0, 2.0, 3.0)), 0.0);

        approx::assert_relative_eq!(angle(vec3(1.0, 0.0, 0.0), vec3(0.0, 1.0, 0.0)), FRAC_PI_2);
        approx::assert_relative_eq!(angle(vec3(1.0, 0.0, 0.0), vec3(-1.0, 0.0, 0.0)), PI);
        assert_eq!(angle(vec3(0.0, 0.0, 1.0), vec3(0.0, 0.0, 1.0)), 0.0);
    }
}
