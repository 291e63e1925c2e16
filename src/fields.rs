// SPDX-License-Identifier: MIT OR Apache-2.0

//! Named component views of small row vectors.
//!
//! A `Matrix<T, N, 1>` with `N` in `1..=4` dereferences to one of the structs below, so the
//! components of a vector can be read and written as `v.x`, `v.y`, `v.z` and `v.w`.

macro_rules! decl_fields {
    (
        $(
            $( #[ $meta:meta ] )*
            $ty_name:ident { $( $field:ident ),+ $(,)? }
        )*
    ) => {
        $(
            $( #[ $meta ] )*
            #[repr(C)]
            #[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
            pub struct $ty_name<T> {
                $( pub $field: T ),+
            }
        )*
    };
}

decl_fields! {
    /// The single component of a one-element vector.
    X { x }
    /// The components of a two-element vector.
    Xy { x, y }
    /// The components of a three-element vector.
    Xyz { x, y, z }
    /// The components of a four-element vector.
    Xyzw { x, y, z, w }
}
