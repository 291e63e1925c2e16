// SPDX-License-Identifier: MIT OR Apache-2.0

//! Rotations in three dimensions.

pub mod quaternion;
