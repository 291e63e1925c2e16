// SPDX-License-Identifier: MIT OR Apache-2.0

//! Fixed-size linear algebra for 3D graphics.
//!
//! Everything is built on one container, [`Matrix<T, W, H>`](matrix::Matrix), holding `W`
//! columns and `H` rows of `T`. Row vectors are `Matrix<T, W, 1>`, square matrices are
//! `Matrix<T, N, N>`, and affine transforms are the 3x4 [`Xform`], a linear part plus a
//! translation row whose homogeneous `(0, 0, 0, 1)` is left implicit. Shapes are checked by the type system: multiplying, adding or
//! dotting matrices of incompatible shapes does not compile.
//!
//! On top of the matrix engine sit [`Quaternion`] rotations and the free functions in
//! [`transform`], which build rotation, translation, scale, look-at and projection matrices.
//!
//! # Features
//!
//! * `std` (default): floating point functions through the standard library.
//! * `libm`: floating point functions through `libm` when `std` is disabled.
//! * `approx`, `mint`, `bytemuck`, `serde`: integrations with the respective crates.

#![cfg_attr(not(any(test, feature = "std")), no_std)]

macro_rules! impl_coerce_to_fields {
    ( $( $len:literal => $fields_type:ident ),+ $(,)? ) => {
        $(
            impl<T> core::ops::Deref for crate::matrix::Matrix<T, $len, 1> {
                type Target = crate::fields::$fields_type<T>;

                #[allow(unsafe_code)]
                #[inline(always)]
                fn deref(&self) -> &Self::Target {
                    const _: () = assert!(
                        core::mem::size_of::<crate::matrix::Matrix<f32, $len, 1>>()
                            == core::mem::size_of::<crate::fields::$fields_type<f32>>()
                    );

                    const _: () = assert!(
                        core::mem::align_of::<crate::matrix::Matrix<f64, $len, 1>>()
                            == core::mem::align_of::<crate::fields::$fields_type<f64>>()
                    );

                    // `Matrix<T, N, 1>` is a transparent `[[T; N]; 1]`, which has the layout of
                    // a `#[repr(C)]` struct with `N` fields of `T`.
                    unsafe { &*(self as *const Self).cast::<crate::fields::$fields_type<T>>() }
                }
            }

            impl<T> core::ops::DerefMut for crate::matrix::Matrix<T, $len, 1> {
                #[allow(unsafe_code)]
                #[inline(always)]
                fn deref_mut(&mut self) -> &mut Self::Target {
                    unsafe { &mut *(self as *mut Self).cast::<crate::fields::$fields_type<T>>() }
                }
            }
        )+
    };
}

pub mod fields;
pub mod matrix;
pub mod rotation;
pub mod transform;
pub mod utils;

impl_coerce_to_fields! {
    1 => X,
    2 => Xy,
    3 => Xyz,
    4 => Xyzw,
}

pub use crate::{
    matrix::{Mat2, Mat3, Mat4, Matrix, Vec2, Vec3, Vec4, Vector, Xform, vec2, vec3, vec4},
    rotation::quaternion::Quaternion,
    utils::num::lerp,
};
