// SPDX-License-Identifier: MIT OR Apache-2.0

//! Projection matrices.
//!
//! Both projections are full 4x4 matrices laid out for column vectors, like every other
//! transform in the crate: a clip-space position is `projection * p`, and for
//! [`perspective`] the divisor `w` comes out of row 3.

use crate::{
    matrix::{Mat4, Matrix},
    utils::num::{Float, Scalar},
};

/// A perspective projection with a vertical field of view of `fov` radians.
///
/// # Panics
///
/// This function will panic if `far` equals `near` or if `fov` is zero.
///
/// # Examples
///
/// ```
/// # use math3d::{matrix::Matrix, transform::perspective};
/// let projection = perspective(core::f64::consts::FRAC_PI_2, 2.0, 1.0, 3.0);
///
/// assert!(projection.nearly_equal(&Matrix::new([
///     [0.5, 0.0,  0.0,  0.0],
///     [0.0, 1.0,  0.0,  0.0],
///     [0.0, 0.0, -2.0, -3.0],
///     [0.0, 0.0, -1.0,  0.0],
/// ])));
/// ```
#[track_caller]
#[must_use]
pub fn perspective<T: Float>(fov: T, aspect: T, near: T, far: T) -> Mat4<T> {
    assert!(far != near, "far and near clip planes must not be equal");
    assert!(fov != T::ZERO, "field of view must not be zero");

    let two = T::ONE + T::ONE;
    let y_scale = T::ONE / (fov / two).tan();
    let x_scale = y_scale / aspect;
    let frustum_length = far - near;

    #[rustfmt::skip]
    let projection = Matrix::new([
        [x_scale, T::ZERO, T::ZERO,                        T::ZERO],
        [T::ZERO, y_scale, T::ZERO,                        T::ZERO],
        [T::ZERO, T::ZERO, -(far + near) / frustum_length, -(two * near * far) / frustum_length],
        [T::ZERO, T::ZERO, -T::ONE,                        T::ZERO],
    ]);

    projection
}

/// An orthographic projection of a `width` by `height` view. Depth is multiplied by `scale`
/// and shifted so that depth `offset` maps to `1`.
#[must_use]
pub fn orthographic<T: Scalar>(width: T, height: T, scale: T, offset: T) -> Mat4<T> {
    #[rustfmt::skip]
    let projection = Matrix::new([
        [T::ONE / width, T::ZERO,         T::ZERO, T::ZERO],
        [T::ZERO,        T::ONE / height, T::ZERO, T::ZERO],
        [T::ZERO,        T::ZERO,         scale,   T::ONE - (offset * scale)],
        [T::ZERO,        T::ZERO,         T::ZERO, T::ONE],
    ]);

    projection
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(any(feature = "std", feature = "libm"))]
    #[test]
    fn test_perspective() {
        let projection = perspective(core::f32::consts::FRAC_PI_2, 2.0, 1.0, 3.0);

        #[rustfmt::skip]
        let expected = Matrix::new([
            [0.5, 0.0,  0.0,  0.0],
            [0.0, 1.0,  0.0,  0.0],
            [0.0, 0.0, -2.0, -3.0],
            [0.0, 0.0, -1.0,  0.0],
        ]);

        assert!(projection.nearly_equal(&expected));
    }

    #[cfg(any(feature = "std", feature = "libm"))]
    #[test]
    fn test_perspective_maps_clip_planes() {
        let (near, far) = (0.5, 10.0);
        let projection = perspective(1.2f64, 1.5, near, far);

        // Depth after the perspective divide: -1 on the near plane, 1 on the far plane.
        for (depth, expected) in [(near, -1.0), (far, 1.0)] {
            let clip = projection * Matrix::new([[0.0], [0.0], [-depth], [1.0]]);
            approx::assert_relative_eq!(clip[(2, 0)] / clip[(3, 0)], expected, epsilon = 1e-12);
        }
    }

    #[cfg(any(feature = "std", feature = "libm"))]
    #[test]
    #[should_panic(expected = "far and near clip planes must not be equal")]
    fn test_perspective_equal_clip_planes() {
        let _projection = perspective(1.0f32, 1.0, 2.0, 2.0);
    }

    #[cfg(any(feature = "std", feature = "libm"))]
    #[test]
    #[should_panic(expected = "field of view must not be zero")]
    fn test_perspective_zero_fov() {
        let _projection = perspective(0.0f32, 1.0, 0.1, 100.0);
    }

    #[test]
    fn test_orthographic() {
        #[rustfmt::skip]
        assert_eq!(orthographic(4.0, 2.0, 0.5, 1.0), Matrix::new([
            [0.25, 0.0, 0.0, 0.0],
            [0.0,  0.5, 0.0, 0.0],
            [0.0,  0.0, 0.5, 0.5],
            [0.0,  0.0, 0.0, 1.0],
        ]));

        let point = Matrix::new([[2.0], [1.0], [3.0], [1.0]]);
        let projected = orthographic(4.0, 2.0, 0.5, 3.0) * point;
        assert_eq!(projected, Matrix::new([[0.5], [0.5], [1.0], [1.0]]));
    }
}
