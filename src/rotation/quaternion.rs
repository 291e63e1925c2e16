// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::{
    matrix::{Matrix, Vec3, Vec4, Xform, vec3},
    utils::num::{Abs, ClosedNeg, ClosedSub, Float, One, Scalar, Sqrt, Tolerance, Zero, lerp},
};
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};
#[cfg(feature = "serde")]
use serde_core::{
    de::{Deserialize, Deserializer},
    ser::{Serialize, SerializeTuple, Serializer},
};

/// A quaternion, stored as its imaginary components `v = (i, j, k)` and its real part `r`.
///
/// Only unit quaternions represent rotations. Nothing normalizes automatically: call
/// [`normalize()`](Quaternion::normalize) after accumulating many products.
#[repr(C)]
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Quaternion<T = f32> {
    pub v: Vec3<T>,
    pub r: T,
}

impl<T> Quaternion<T> {
    #[must_use]
    #[inline]
    pub const fn new(i: T, j: T, k: T, r: T) -> Self {
        Self { v: vec3(i, j, k), r }
    }

    #[must_use]
    #[inline]
    pub fn from_components<V: Into<Vec3<T>>>(v: V, r: T) -> Self {
        Self { v: v.into(), r }
    }

    /// Returns the components in `(i, j, k, r)` order.
    #[must_use]
    #[inline]
    pub fn into_vector(self) -> Vec4<T> {
        let [i, j, k] = self.v.into_array();
        Matrix::from_array([i, j, k, self.r])
    }

    /// Builds a quaternion from components in `(i, j, k, r)` order.
    #[must_use]
    #[inline]
    pub fn from_vector(vector: Vec4<T>) -> Self {
        let [i, j, k, r] = vector.into_array();
        Self::new(i, j, k, r)
    }
}

impl<T: Copy> Quaternion<T> {
    #[must_use]
    #[inline]
    pub fn i(&self) -> T {
        self.v[0]
    }

    #[must_use]
    #[inline]
    pub fn j(&self) -> T {
        self.v[1]
    }

    #[must_use]
    #[inline]
    pub fn k(&self) -> T {
        self.v[2]
    }

    #[must_use]
    #[inline]
    pub fn r(&self) -> T {
        self.r
    }
}

impl<T: Zero + One> Quaternion<T> {
    /// The rotation by zero radians.
    #[must_use]
    #[inline]
    pub const fn identity() -> Self {
        Self {
            v: Zero::ZERO,
            r: One::ONE,
        }
    }
}

impl<T: Zero + One> Default for Quaternion<T> {
    #[inline]
    fn default() -> Self {
        Self::identity()
    }
}

impl<T: Scalar> Quaternion<T> {
    /// The sum of the products of the four component pairs.
    #[must_use]
    #[inline]
    pub fn dot(self, rhs: Quaternion<T>) -> T {
        self.v.dot(rhs.v) + (self.r * rhs.r)
    }

    /// Converts a unit quaternion to the rotation it represents.
    ///
    /// The linear part is in column-vector form, so that `q1 * q2` converts to
    /// `q1.to_rot() * q2.to_rot()`. The translation is zero. Quaternions which are not unit
    /// length produce a matrix which also scales.
    #[must_use]
    pub fn to_rot(self) -> Xform<T> {
        let [i, j, k] = self.v.into_array();
        let r = self.r;
        let two = T::ONE + T::ONE;

        let (ii, jj, kk) = (i * i, j * j, k * k);
        let (ij, ik, jk) = (i * j, i * k, j * k);
        let (ir, jr, kr) = (i * r, j * r, k * r);

        #[rustfmt::skip]
        let xform = Matrix::new([
            [T::ONE - two * (jj + kk), two * (ij - kr),          two * (ik + jr)],
            [two * (ij + kr),          T::ONE - two * (ii + kk), two * (jk - ir)],
            [two * (ik - jr),          two * (jk + ir),          T::ONE - two * (ii + jj)],
            [T::ZERO,                  T::ZERO,                  T::ZERO],
        ]);

        xform
    }
}

impl<T: ClosedNeg> Quaternion<T> {
    /// Negates the vector part. For a unit quaternion this is the inverse rotation.
    #[must_use]
    #[inline]
    pub fn conjugate(self) -> Self {
        Quaternion {
            v: -self.v,
            r: self.r,
        }
    }
}

impl<T: Scalar + ClosedNeg> Quaternion<T> {
    /// The multiplicative inverse, `conjugate / |q|²`.
    ///
    /// The zero quaternion has no inverse. For floating point elements its inverse is NaN.
    #[must_use]
    #[inline]
    pub fn inverse(self) -> Self {
        self.conjugate() / self.dot(self)
    }
}

impl<T: Scalar + Sqrt> Quaternion<T> {
    #[doc(alias = "mag")]
    #[must_use]
    #[inline]
    pub fn magnitude(self) -> T {
        self.dot(self).sqrt()
    }

    /// Scales the quaternion to unit length.
    ///
    /// The zero quaternion divides by zero. Use
    /// [`normalize_checked()`](Quaternion::normalize_checked) if that is possible.
    #[must_use]
    #[inline]
    pub fn normalize(self) -> Self {
        self / self.magnitude()
    }

    #[must_use]
    #[inline]
    pub fn normalize_checked(self) -> Option<Self> {
        let magnitude = self.magnitude();
        if magnitude == T::ZERO {
            None
        } else {
            Some(self / magnitude)
        }
    }
}

impl<T: Float> Quaternion<T> {
    /// Creates the rotation of `angle` radians about `axis`. The axis does not need to be
    /// normalized.
    ///
    /// # Examples
    ///
    /// ```
    /// # use math3d::{Quaternion, vec3};
    /// let q = Quaternion::from_axis_angle(vec3(0.0, 0.0, 2.0), core::f64::consts::PI);
    /// assert!(q.nearly_equal(&Quaternion::new(0.0, 0.0, 1.0, 0.0)));
    /// ```
    #[must_use]
    #[inline]
    pub fn from_axis_angle(axis: Vec3<T>, angle: T) -> Self {
        let half_angle = angle / (T::ONE + T::ONE);
        let (sin, cos) = half_angle.sin_cos();

        Quaternion {
            v: axis.normalize() * sin,
            r: cos,
        }
    }

    /// Extracts the rotation from the linear part of `xform`, which must be a pure rotation
    /// in the form produced by [`to_rot()`](Quaternion::to_rot). The translation is ignored.
    ///
    /// The result has a non-negative real part when the rotation angle is below π. Either
    /// sign represents the same rotation.
    #[must_use]
    pub fn from_xform(xform: Xform<T>) -> Self {
        let m = xform.to_array();
        let two = T::ONE + T::ONE;
        let four = two + two;
        let trace = m[0][0] + m[1][1] + m[2][2];

        if trace > T::ZERO {
            let s = two * (trace + T::ONE).sqrt();
            Quaternion::new(
                (m[2][1] - m[1][2]) / s,
                (m[0][2] - m[2][0]) / s,
                (m[1][0] - m[0][1]) / s,
                s / four,
            )
        } else if m[0][0] > m[1][1] && m[0][0] > m[2][2] {
            let s = two * (T::ONE + m[0][0] - m[1][1] - m[2][2]).sqrt();
            Quaternion::new(
                s / four,
                (m[0][1] + m[1][0]) / s,
                (m[0][2] + m[2][0]) / s,
                (m[2][1] - m[1][2]) / s,
            )
        } else if m[1][1] > m[2][2] {
            let s = two * (T::ONE + m[1][1] - m[0][0] - m[2][2]).sqrt();
            Quaternion::new(
                (m[0][1] + m[1][0]) / s,
                s / four,
                (m[1][2] + m[2][1]) / s,
                (m[0][2] - m[2][0]) / s,
            )
        } else {
            let s = two * (T::ONE + m[2][2] - m[0][0] - m[1][1]).sqrt();
            Quaternion::new(
                (m[0][2] + m[2][0]) / s,
                (m[1][2] + m[2][1]) / s,
                s / four,
                (m[1][0] - m[0][1]) / s,
            )
        }
    }

    /// Spherical linear interpolation from `self` (at `t = 0`) to `target` (at `t = 1`).
    ///
    /// Interpolates along the shorter arc: if the quaternions point into opposite
    /// hemispheres, `target` is negated first. When they are nearly parallel the result is
    /// a normalized linear interpolation instead.
    #[must_use]
    pub fn slerp(self, target: Quaternion<T>, t: T) -> Self {
        let mut target = target;
        let mut cos_theta = self.dot(target);

        if cos_theta < T::ZERO {
            target = -target;
            cos_theta = -cos_theta;
        }

        if cos_theta > T::from_f64(0.9995) {
            return lerp(self, target, t).normalize();
        }

        let theta = cos_theta.acos();
        let sin_theta = theta.sin();
        let from_weight = ((T::ONE - t) * theta).sin() / sin_theta;
        let target_weight = (t * theta).sin() / sin_theta;

        (self * from_weight) + (target * target_weight)
    }
}

impl<T: Copy + Abs + ClosedSub + PartialOrd + Tolerance> Quaternion<T> {
    /// Returns whether every component differs from the corresponding component of `other`
    /// by less than [`Tolerance::TOLERANCE`].
    ///
    /// `q` and `-q` represent the same rotation but are not nearly equal.
    #[must_use]
    #[inline]
    pub fn nearly_equal(&self, other: &Self) -> bool {
        self.v.nearly_equal(&other.v) && self.r.abs_diff(other.r) < T::TOLERANCE
    }
}

/// The Hamilton product. `q1 * q2` is the rotation `q2` followed by `q1`.
impl<T: Scalar> Mul<Quaternion<T>> for Quaternion<T> {
    type Output = Quaternion<T>;

    #[inline]
    fn mul(self, rhs: Quaternion<T>) -> Self::Output {
        Quaternion {
            v: (rhs.v * self.r) + (self.v * rhs.r) + self.v.cross(rhs.v),
            r: (self.r * rhs.r) - self.v.dot(rhs.v),
        }
    }
}

impl<T: Scalar> MulAssign<Quaternion<T>> for Quaternion<T> {
    #[inline]
    fn mul_assign(&mut self, rhs: Quaternion<T>) {
        *self = *self * rhs;
    }
}

/// Multiplies by the inverse of the right hand side.
impl<T: Scalar + ClosedNeg> Div<Quaternion<T>> for Quaternion<T> {
    type Output = Quaternion<T>;

    #[inline]
    fn div(self, rhs: Quaternion<T>) -> Self::Output {
        self * rhs.inverse()
    }
}

impl<T: Scalar + ClosedNeg> DivAssign<Quaternion<T>> for Quaternion<T> {
    #[inline]
    fn div_assign(&mut self, rhs: Quaternion<T>) {
        *self = *self / rhs;
    }
}

impl<T: Add> Add<Quaternion<T>> for Quaternion<T> {
    type Output = Quaternion<T::Output>;

    #[inline]
    fn add(self, rhs: Quaternion<T>) -> Self::Output {
        Quaternion {
            v: self.v.zip_map(rhs.v, Add::add),
            r: self.r + rhs.r,
        }
    }
}

impl<T: AddAssign> AddAssign<Quaternion<T>> for Quaternion<T> {
    #[inline]
    fn add_assign(&mut self, rhs: Quaternion<T>) {
        self.v.add_assign(rhs.v);
        self.r.add_assign(rhs.r);
    }
}

impl<T: Sub> Sub<Quaternion<T>> for Quaternion<T> {
    type Output = Quaternion<T::Output>;

    #[inline]
    fn sub(self, rhs: Quaternion<T>) -> Self::Output {
        Quaternion {
            v: self.v.zip_map(rhs.v, Sub::sub),
            r: self.r - rhs.r,
        }
    }
}

impl<T: SubAssign> SubAssign<Quaternion<T>> for Quaternion<T> {
    #[inline]
    fn sub_assign(&mut self, rhs: Quaternion<T>) {
        self.v.sub_assign(rhs.v);
        self.r.sub_assign(rhs.r);
    }
}

/// Adds `rhs` to all four components.
impl<T: Copy + Add> Add<T> for Quaternion<T> {
    type Output = Quaternion<T::Output>;

    #[inline]
    fn add(self, rhs: T) -> Self::Output {
        Quaternion {
            v: self.v.map(|elem| elem + rhs),
            r: self.r + rhs,
        }
    }
}

impl<T: Copy + AddAssign> AddAssign<T> for Quaternion<T> {
    #[inline]
    fn add_assign(&mut self, rhs: T) {
        self.v.add_assign(rhs);
        self.r.add_assign(rhs);
    }
}

/// Subtracts `rhs` from all four components.
impl<T: Copy + Sub> Sub<T> for Quaternion<T> {
    type Output = Quaternion<T::Output>;

    #[inline]
    fn sub(self, rhs: T) -> Self::Output {
        Quaternion {
            v: self.v.map(|elem| elem - rhs),
            r: self.r - rhs,
        }
    }
}

impl<T: Copy + SubAssign> SubAssign<T> for Quaternion<T> {
    #[inline]
    fn sub_assign(&mut self, rhs: T) {
        self.v.sub_assign(rhs);
        self.r.sub_assign(rhs);
    }
}

impl<T: Copy + Mul> Mul<T> for Quaternion<T> {
    type Output = Quaternion<T::Output>;

    #[inline]
    fn mul(self, rhs: T) -> Self::Output {
        Quaternion {
            v: self.v.map(|elem| elem * rhs),
            r: self.r * rhs,
        }
    }
}

impl<T: Copy + MulAssign> MulAssign<T> for Quaternion<T> {
    #[inline]
    fn mul_assign(&mut self, rhs: T) {
        self.v.mul_assign(rhs);
        self.r.mul_assign(rhs);
    }
}

impl<T: Copy + Div> Div<T> for Quaternion<T> {
    type Output = Quaternion<T::Output>;

    #[inline]
    fn div(self, rhs: T) -> Self::Output {
        Quaternion {
            v: self.v.map(|elem| elem / rhs),
            r: self.r / rhs,
        }
    }
}

impl<T: Copy + DivAssign> DivAssign<T> for Quaternion<T> {
    #[inline]
    fn div_assign(&mut self, rhs: T) {
        self.v.div_assign(rhs);
        self.r.div_assign(rhs);
    }
}

impl<T: Neg> Neg for Quaternion<T> {
    type Output = Quaternion<T::Output>;

    #[inline]
    fn neg(self) -> Self::Output {
        Quaternion {
            v: -self.v,
            r: -self.r,
        }
    }
}

macro_rules! impl_scalar_numerator_div {
    ( $( $float:ty ),* $(,)? ) => {
        $(
            /// Divides a scalar by a quaternion: `f / q` is `q.inverse() * f`.
            impl Div<Quaternion<$float>> for $float {
                type Output = Quaternion<$float>;

                #[inline]
                fn div(self, rhs: Quaternion<$float>) -> Self::Output {
                    rhs.inverse() * self
                }
            }
        )*
    };
}

impl_scalar_numerator_div!(f32, f64);

impl<T: Float> From<Xform<T>> for Quaternion<T> {
    #[inline]
    fn from(value: Xform<T>) -> Self {
        Self::from_xform(value)
    }
}

impl<T> From<Vec4<T>> for Quaternion<T> {
    #[inline]
    fn from(value: Vec4<T>) -> Self {
        Self::from_vector(value)
    }
}

impl<T> From<Quaternion<T>> for Vec4<T> {
    #[inline]
    fn from(value: Quaternion<T>) -> Self {
        value.into_vector()
    }
}

impl<T> From<(Vec3<T>, T)> for Quaternion<T> {
    #[inline]
    fn from((v, r): (Vec3<T>, T)) -> Self {
        Self { v, r }
    }
}

impl<T> From<Quaternion<T>> for (Vec3<T>, T) {
    #[inline]
    fn from(value: Quaternion<T>) -> Self {
        (value.v, value.r)
    }
}

#[cfg(feature = "mint")]
impl<T> From<mint::Quaternion<T>> for Quaternion<T> {
    #[inline]
    fn from(value: mint::Quaternion<T>) -> Self {
        Quaternion {
            v: From::from(value.v),
            r: value.s,
        }
    }
}

#[cfg(feature = "mint")]
impl<T> From<Quaternion<T>> for mint::Quaternion<T> {
    #[inline]
    fn from(value: Quaternion<T>) -> Self {
        mint::Quaternion {
            v: From::from(value.v),
            s: value.r,
        }
    }
}

#[cfg(feature = "mint")]
impl<T> mint::IntoMint for Quaternion<T> {
    type MintType = mint::Quaternion<T>;
}

#[cfg(feature = "bytemuck")]
unsafe impl<T: bytemuck::Zeroable> bytemuck::Zeroable for Quaternion<T> {
    #[inline]
    fn zeroed() -> Self {
        Quaternion {
            v: bytemuck::Zeroable::zeroed(),
            r: bytemuck::Zeroable::zeroed(),
        }
    }
}

#[cfg(feature = "bytemuck")]
unsafe impl<T: bytemuck::Pod> bytemuck::Pod for Quaternion<T> {}

#[cfg(feature = "approx")]
impl<T: approx::AbsDiffEq> approx::AbsDiffEq for Quaternion<T>
where
    T::Epsilon: Copy,
{
    type Epsilon = T::Epsilon;

    #[inline]
    fn default_epsilon() -> Self::Epsilon {
        T::default_epsilon()
    }

    #[inline]
    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.v.abs_diff_eq(&other.v, epsilon) && self.r.abs_diff_eq(&other.r, epsilon)
    }
}

#[cfg(feature = "approx")]
impl<T: approx::RelativeEq> approx::RelativeEq for Quaternion<T>
where
    T::Epsilon: Copy,
{
    #[inline]
    fn default_max_relative() -> Self::Epsilon {
        T::default_max_relative()
    }

    #[inline]
    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.v.relative_eq(&other.v, epsilon, max_relative)
            && self.r.relative_eq(&other.r, epsilon, max_relative)
    }
}

#[cfg(feature = "approx")]
impl<T: approx::UlpsEq> approx::UlpsEq for Quaternion<T>
where
    T::Epsilon: Copy,
{
    #[inline]
    fn default_max_ulps() -> u32 {
        T::default_max_ulps()
    }

    #[inline]
    fn ulps_eq(&self, other: &Self, epsilon: Self::Epsilon, max_ulps: u32) -> bool {
        self.v.ulps_eq(&other.v, epsilon, max_ulps) && self.r.ulps_eq(&other.r, epsilon, max_ulps)
    }
}

/// Serialized as the tuple `(i, j, k, r)`.
#[cfg(feature = "serde")]
impl<T: Serialize> Serialize for Quaternion<T> {
    #[inline]
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut tuple = serializer.serialize_tuple(4)?;
        for elem in self.v.elems() {
            tuple.serialize_element(elem)?;
        }
        tuple.serialize_element(&self.r)?;
        tuple.end()
    }
}

#[cfg(feature = "serde")]
impl<'de, T: Deserialize<'de>> Deserialize<'de> for Quaternion<T> {
    #[inline]
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let [i, j, k, r] = <[T; 4]>::deserialize(deserializer)?;
        Ok(Quaternion::new(i, j, k, r))
    }
}
