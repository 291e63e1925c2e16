// SPDX-License-Identifier: MIT OR Apache-2.0

//! The [`Matrix`] container and the operations every shape shares.
//!
//! Shape-specific behaviour lives in submodules: single-index access and default construction
//! are generated per shape, square matrices get determinants and inverses, and the 3x4
//! [`Xform`] gets its own identity and multiplication rules.

use crate::{
    const_assert_fits_shape, const_assert_one_less, const_assert_same_count,
    utils::{
        num::{Abs, ClosedAdd, ClosedMul, ClosedSub, Scalar, Sqrt, Tolerance, Zero},
        sum, zip_map,
    },
};
#[cfg(feature = "serde")]
use core::{
    fmt,
    marker::PhantomData,
    mem::MaybeUninit,
};
use core::{
    borrow::{Borrow, BorrowMut},
    ops::{Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign},
    slice,
};
#[cfg(feature = "serde")]
use serde_core::{
    de::{self, Deserialize, Deserializer, SeqAccess},
    ser::{Serialize, SerializeTupleStruct, Serializer},
};

mod shape;
mod square;
mod xform;


/// A row-major grid of `W` columns and `H` rows of `T`.
///
/// Element `(row, col)` sits at flat index `row * W + col`, whichever view it is read through:
/// [`as_slice()`](Matrix::as_slice) for the flat view, `m[(row, col)]` or
/// [`as_array()`](Matrix::as_array) for the 2D view, and `m[row]` for the row view.
///
/// A matrix with a single row is a vector; see [`Vector`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[repr(transparent)]
pub struct Matrix<T = f32, const W: usize = 4, const H: usize = 4> {
    data: [[T; W]; H],
}

/// A row vector of `W` elements.
pub type Vector<T, const W: usize> = Matrix<T, W, 1>;

pub type Vec2<T = f32> = Matrix<T, 2, 1>;
pub type Vec3<T = f32> = Matrix<T, 3, 1>;
pub type Vec4<T = f32> = Matrix<T, 4, 1>;

pub type Mat2<T = f32> = Matrix<T, 2, 2>;
pub type Mat3<T = f32> = Matrix<T, 3, 3>;
pub type Mat4<T = f32> = Matrix<T, 4, 4>;

/// An affine transform: a 3x3 linear part in rows `0..3` and a translation in row `3`.
///
/// It maps a column vector `p` to `linear * p + translation`. The homogeneous bottom row
/// `(0, 0, 0, 1)` is never stored. A default-constructed `Xform` is the identity transform.
pub type Xform<T = f32> = Matrix<T, 3, 4>;

/// Creates a two-element row vector.
#[must_use]
#[inline]
pub const fn vec2<T>(x: T, y: T) -> Vec2<T> {
    Matrix::from_array([x, y])
}

/// Creates a three-element row vector.
#[must_use]
#[inline]
pub const fn vec3<T>(x: T, y: T, z: T) -> Vec3<T> {
    Matrix::from_array([x, y, z])
}

/// Creates a four-element row vector.
#[must_use]
#[inline]
pub const fn vec4<T>(x: T, y: T, z: T, w: T) -> Vec4<T> {
    Matrix::from_array([x, y, z, w])
}

impl<T, const W: usize, const H: usize> Matrix<T, W, H> {
    /// The number of elements in the matrix.
    pub const NUM_ELEMENTS: usize = W * H;

    /// Create a new `Matrix` from the given rows.
    ///
    /// # Examples
    ///
    /// ```
    /// # use math3d::matrix::Matrix;
    /// let data: [[i32; 3]; 2] = [[1, 2, 3], [4, 5, 6]];
    /// let matrix: Matrix<i32, 3, 2> = Matrix::new(data);
    /// assert_eq!(matrix[(1, 0)], 4);
    /// ```
    #[must_use]
    #[inline]
    pub const fn new(data: [[T; W]; H]) -> Self {
        Self { data }
    }

    /// Creates a matrix by calling `f(row, col)` for every element, in row-major order.
    ///
    /// # Examples
    ///
    /// ```
    /// # use math3d::matrix::Matrix;
    /// let matrix: Matrix<usize, 3, 2> = Matrix::from_fn(|row, col| row * 10 + col);
    /// assert_eq!(matrix.to_array(), [[0, 1, 2], [10, 11, 12]]);
    /// ```
    #[must_use]
    #[inline]
    pub fn from_fn<F: FnMut(usize, usize) -> T>(mut f: F) -> Self {
        Self {
            data: core::array::from_fn(|row| core::array::from_fn(|col| f(row, col))),
        }
    }

    /// Stacks `H` row vectors, in order, into a matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// # use math3d::matrix::{Matrix, vec3};
    /// let matrix = Matrix::from_rows([vec3(0, 0, 0), vec3(2, 1, 0), vec3(3, 2, 1)]);
    /// assert_eq!(matrix.to_array(), [[0, 0, 0], [2, 1, 0], [3, 2, 1]]);
    /// ```
    #[must_use]
    #[inline]
    pub fn from_rows(rows: [Vector<T, W>; H]) -> Self {
        Self {
            data: rows.map(Matrix::into_array),
        }
    }

    /// Creates a matrix from up to `W * H` elements given in row-major order. Elements past
    /// the end of `elements` are zero.
    ///
    /// Passing more elements than the matrix holds fails to compile.
    ///
    /// # Examples
    ///
    /// ```
    /// # use math3d::matrix::Matrix;
    /// let matrix: Matrix<i32, 2, 2> = Matrix::from_elements([1, 2, 3]);
    /// assert_eq!(matrix.to_array(), [[1, 2], [3, 0]]);
    /// ```
    #[must_use]
    #[inline]
    pub fn from_elements<const N: usize>(elements: [T; N]) -> Self
    where
        T: Zero,
    {
        const_assert_fits_shape!(N, W, H);

        let mut elements = elements.into_iter();
        Self::from_fn(|_, _| elements.next().unwrap_or(T::ZERO))
    }

    /// Returns a reference to the rows of the matrix.
    #[must_use]
    #[inline]
    pub const fn as_array(&self) -> &[[T; W]; H] {
        &self.data
    }

    #[must_use]
    #[inline]
    pub const fn as_array_mut(&mut self) -> &mut [[T; W]; H] {
        &mut self.data
    }

    /// Consumes the matrix, returning its rows.
    #[must_use]
    #[inline]
    pub fn to_array(self) -> [[T; W]; H] {
        self.data
    }

    /// Returns the elements of the matrix as a flat slice in row-major order.
    ///
    /// # Examples
    ///
    /// ```
    /// # use math3d::matrix::Matrix;
    /// let matrix = Matrix::new([
    ///     [1, 2, 3],
    ///     [4, 5, 6],
    /// ]);
    ///
    /// assert_eq!(matrix.as_slice(), &[1, 2, 3, 4, 5, 6]);
    /// assert_eq!(matrix.as_slice()[1 * 3 + 2], matrix[(1, 2)]);
    /// ```
    #[must_use]
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self.data.as_flattened()
    }

    #[must_use]
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.data.as_flattened_mut()
    }

    /// Returns the element at `(row, col)`, or `None` if either index is out of bounds.
    #[must_use]
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        self.data.get(row)?.get(col)
    }

    #[must_use]
    #[inline]
    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut T> {
        self.data.get_mut(row)?.get_mut(col)
    }

    #[inline]
    pub fn elems(&self) -> slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    #[inline]
    pub fn elems_mut(&mut self) -> slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    /// Applies `f` to every element, returning a matrix of the same shape.
    #[must_use]
    #[inline]
    pub fn map<U, F: FnMut(T) -> U>(self, mut f: F) -> Matrix<U, W, H> {
        Matrix {
            data: self.data.map(|row| row.map(&mut f)),
        }
    }

    /// Combines two matrices of the same shape element by element.
    #[must_use]
    #[inline]
    pub fn zip_map<U, Ret, F: FnMut(T, U) -> Ret>(
        self,
        rhs: Matrix<U, W, H>,
        mut f: F,
    ) -> Matrix<Ret, W, H> {
        Matrix {
            data: zip_map(self.data, rhs.data, |lhs, rhs| zip_map(lhs, rhs, &mut f)),
        }
    }

    /// Replaces row `n` with `row`.
    ///
    /// # Panics
    ///
    /// This method will panic if `n` is equal or greater to `H`.
    #[track_caller]
    #[inline]
    pub fn set_row(&mut self, n: usize, row: Vector<T, W>) {
        assert!(n < H, "given row index is out of bounds");
        self.data[n] = row.into_array();
    }

    /// Replaces column `n` with `col`.
    ///
    /// # Panics
    ///
    /// This method will panic if `n` is equal or greater to `W`.
    #[track_caller]
    #[inline]
    pub fn set_col(&mut self, n: usize, col: Matrix<T, 1, H>) {
        assert!(n < W, "given column index is out of bounds");
        for (row, [elem]) in self.data.iter_mut().zip(col.data) {
            row[n] = elem;
        }
    }
}

impl<T: Copy, const W: usize, const H: usize> Matrix<T, W, H> {
    /// Creates a new matrix, where every element of `Matrix` is set to `value`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use math3d::matrix::Xform;
    /// let xform: Xform<f32> = Xform::splat(1.2);
    /// assert!(xform.elems().all(|elem| *elem == 1.2));
    /// ```
    #[must_use]
    #[inline]
    pub const fn splat(value: T) -> Self {
        Self {
            data: [[value; W]; H],
        }
    }

    /// Returns a copy of row `n` as a row vector.
    ///
    /// # Panics
    ///
    /// This method will panic if `n` is equal or greater to `H`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use math3d::matrix::{Xform, vec3};
    /// assert_eq!(Xform::<f32>::identity().row(2), vec3(0.0, 0.0, 1.0));
    /// ```
    #[track_caller]
    #[must_use]
    #[inline]
    pub const fn row(&self, n: usize) -> Vector<T, W> {
        assert!(n < H, "given row index is out of bounds");
        Matrix::from_array(self.data[n])
    }

    /// Returns a copy of column `n` as a column vector.
    ///
    /// # Panics
    ///
    /// This method will panic if `n` is equal or greater to `W`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use math3d::matrix::{Matrix, Xform};
    /// let col = Xform::<f32>::identity().col(1);
    /// assert_eq!(col, Matrix::new([[0.0], [1.0], [0.0], [0.0]]));
    /// ```
    #[track_caller]
    #[must_use]
    #[inline]
    pub fn col(&self, n: usize) -> Matrix<T, 1, H> {
        assert!(n < W, "given column index is out of bounds");
        Matrix::from_fn(|row, _| self.data[row][n])
    }

    /// Swaps rows and columns.
    ///
    /// # Examples
    ///
    /// ```
    /// # use math3d::matrix::Matrix;
    /// let matrix = Matrix::new([
    ///     [2, 5, 3],
    ///     [4, 7, 0],
    /// ]);
    ///
    /// assert_eq!(matrix.transpose(), Matrix::new([
    ///     [2, 4],
    ///     [5, 7],
    ///     [3, 0],
    /// ]));
    /// ```
    #[must_use]
    #[inline]
    pub fn transpose(self) -> Matrix<T, H, W> {
        Matrix::from_fn(|row, col| self.data[col][row])
    }

    /// Returns a copy of the matrix without row `n`. The remaining rows keep their order.
    ///
    /// `H2` must be `H - 1`, which is checked at compile time.
    ///
    /// # Panics
    ///
    /// This method will panic if `n` is equal or greater to `H`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use math3d::matrix::Matrix;
    /// let matrix = Matrix::new([
    ///     [1, 3, 2],
    ///     [4, 1, 3],
    ///     [2, 5, 2],
    /// ]);
    ///
    /// let removed: Matrix<i32, 3, 2> = matrix.remove_row(0);
    /// assert_eq!(removed.to_array(), [[4, 1, 3], [2, 5, 2]]);
    /// ```
    #[track_caller]
    #[must_use]
    #[inline]
    pub fn remove_row<const H2: usize>(&self, n: usize) -> Matrix<T, W, H2> {
        const_assert_one_less!(H2, H);
        assert!(n < H, "given row index is out of bounds");

        Matrix::from_fn(|row, col| {
            let source = if row < n { row } else { row + 1 };
            self.data[source][col]
        })
    }

    /// Returns a copy of the matrix without column `n`. The remaining columns keep their order.
    ///
    /// `W2` must be `W - 1`, which is checked at compile time.
    ///
    /// # Panics
    ///
    /// This method will panic if `n` is equal or greater to `W`.
    #[track_caller]
    #[must_use]
    #[inline]
    pub fn remove_column<const W2: usize>(&self, n: usize) -> Matrix<T, W2, H> {
        const_assert_one_less!(W2, W);
        assert!(n < W, "given column index is out of bounds");

        Matrix::from_fn(|row, col| {
            let source = if col < n { col } else { col + 1 };
            self.data[row][source]
        })
    }
}

impl<T: Scalar, const W: usize, const H: usize> Matrix<T, W, H> {
    /// The sum of the products of corresponding elements.
    ///
    /// Both operands are read in row-major order, so a row vector can be dotted with a column
    /// vector. They must hold the same number of elements, which is checked at compile time.
    ///
    /// # Examples
    ///
    /// ```
    /// # use math3d::matrix::vec3;
    /// assert_eq!(vec3(1.0, 2.0, 3.0).dot(vec3(3.0, 4.0, 5.0)), 26.0);
    /// ```
    #[must_use]
    #[inline]
    pub fn dot<const W2: usize, const H2: usize>(self, rhs: Matrix<T, W2, H2>) -> T {
        const_assert_same_count!(W, H, W2, H2);
        sum(self.elems().zip(rhs.elems()).map(|(&x, &y)| x * y))
    }

    /// The squared Euclidean norm of all elements.
    #[must_use]
    #[inline]
    pub fn length_squared(self) -> T {
        self.dot(self)
    }

    /// Interpolates between `self` and `target`, element by element.
    ///
    /// # Examples
    ///
    /// ```
    /// # use math3d::matrix::vec3;
    /// let a = vec3(2.0, 4.0, 6.0);
    /// let b = vec3(4.0, 8.0, 12.0);
    /// assert_eq!(a.lerp(b, 0.5), vec3(3.0, 6.0, 9.0));
    /// ```
    #[must_use]
    #[inline]
    pub fn lerp(self, target: Self, t: T) -> Self {
        crate::utils::num::lerp(self, target, t)
    }

    /// Adds one to every element.
    #[inline]
    pub fn increment(&mut self) {
        for elem in self.elems_mut() {
            *elem += T::ONE;
        }
    }
}

impl<T: Scalar + Sqrt, const W: usize, const H: usize> Matrix<T, W, H> {
    /// The Euclidean norm: the square root of the sum of the squares of all elements.
    ///
    /// # Examples
    ///
    /// ```
    /// # use math3d::matrix::vec3;
    /// assert_eq!(vec3(3.0, 4.0, 0.0).length(), 5.0);
    /// ```
    #[must_use]
    #[inline]
    pub fn length(self) -> T {
        self.length_squared().sqrt()
    }

    /// Scales the matrix to unit length.
    ///
    /// A zero-length input divides by zero; floating point elements become NaN. Use
    /// [`normalize_checked()`](Matrix::normalize_checked) when the length may be zero.
    #[must_use]
    #[inline]
    pub fn normalize(self) -> Self {
        self / self.length()
    }

    /// Scales the matrix to unit length, or returns `None` if its length is zero.
    #[must_use]
    #[inline]
    pub fn normalize_checked(self) -> Option<Self> {
        let length = self.length();
        if length == T::ZERO {
            None
        } else {
            Some(self / length)
        }
    }
}

impl<T, const W: usize, const H: usize> Matrix<T, W, H>
where
    T: Copy + Abs + ClosedSub + PartialOrd + Tolerance,
{
    /// Returns whether every element differs from the corresponding element of `other` by
    /// less than [`Tolerance::TOLERANCE`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use math3d::matrix::vec2;
    /// assert!(vec2(0.1 + 0.2, 1.0).nearly_equal(&vec2(0.3, 1.0)));
    /// assert!(!vec2(0.3, 1.0).nearly_equal(&vec2(0.3, 1.001)));
    /// ```
    #[must_use]
    #[inline]
    pub fn nearly_equal(&self, other: &Self) -> bool {
        self.elems()
            .zip(other.elems())
            .all(|(&x, &y)| x.abs_diff(y) < T::TOLERANCE)
    }
}

impl<T, const W: usize> Matrix<T, W, 1> {
    /// Creates a row vector from its elements.
    #[must_use]
    #[inline]
    pub const fn from_array(array: [T; W]) -> Self {
        Self { data: [array] }
    }

    /// Views an array as a row vector.
    #[allow(unsafe_code)]
    #[must_use]
    #[inline]
    pub const fn from_array_ref(array: &[T; W]) -> &Self {
        // `Matrix<T, W, 1>` is a transparent wrapper around `[[T; W]; 1]`.
        unsafe { &*(array as *const [T; W]).cast::<Self>() }
    }

    #[allow(unsafe_code)]
    #[must_use]
    #[inline]
    pub const fn from_array_mut(array: &mut [T; W]) -> &mut Self {
        unsafe { &mut *(array as *mut [T; W]).cast::<Self>() }
    }

    /// Consumes the vector, returning its elements.
    #[must_use]
    #[inline]
    pub fn into_array(self) -> [T; W] {
        let [row] = self.data;
        row
    }
}

impl<T: Copy + ClosedMul + ClosedSub> Matrix<T, 3, 1> {
    /// The right-handed cross product.
    ///
    /// # Examples
    ///
    /// ```
    /// # use math3d::matrix::vec3;
    /// let x = vec3(1, 0, 0);
    /// let y = vec3(0, 1, 0);
    /// assert_eq!(x.cross(y), vec3(0, 0, 1));
    /// ```
    #[must_use]
    #[inline]
    pub fn cross(self, rhs: Self) -> Self {
        let [a0, a1, a2] = self.into_array();
        let [b0, b1, b2] = rhs.into_array();

        vec3(
            (a1 * b2) - (a2 * b1),
            (a2 * b0) - (a0 * b2),
            (a0 * b1) - (a1 * b0),
        )
    }
}

impl<T, const W: usize, const H: usize> Index<(usize, usize)> for Matrix<T, W, H> {
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        &self.data[row][col]
    }
}

impl<T, const W: usize, const H: usize> IndexMut<(usize, usize)> for Matrix<T, W, H> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        &mut self.data[row][col]
    }
}

impl<T: Zero, const W: usize, const H: usize> Zero for Matrix<T, W, H> {
    const ZERO: Self = Matrix::new(Zero::ZERO);
}

/// The algebraic product: a `W x H` matrix times an `W2 x W` matrix is a `W2 x H` matrix.
impl<T, const W: usize, const H: usize, const W2: usize> Mul<Matrix<T, W2, W>> for Matrix<T, W, H>
where
    T: Zero + Copy + ClosedMul + ClosedAdd,
{
    type Output = Matrix<T, W2, H>;

    #[inline]
    fn mul(self, rhs: Matrix<T, W2, W>) -> Self::Output {
        Matrix::from_fn(|row, col| sum((0..W).map(|k| self.data[row][k] * rhs.data[k][col])))
    }
}

impl<T: Copy + ClosedMul, const W: usize, const H: usize> Mul<T> for Matrix<T, W, H> {
    type Output = Matrix<T, W, H>;

    #[inline]
    fn mul(self, rhs: T) -> Self::Output {
        self.map(|elem| elem * rhs)
    }
}

impl<T: Copy + MulAssign, const W: usize, const H: usize> MulAssign<T> for Matrix<T, W, H> {
    #[inline]
    fn mul_assign(&mut self, rhs: T) {
        for elem in self.elems_mut() {
            elem.mul_assign(rhs);
        }
    }
}

impl<T: Copy + Div<Output = T>, const W: usize, const H: usize> Div<T> for Matrix<T, W, H> {
    type Output = Matrix<T, W, H>;

    #[inline]
    fn div(self, rhs: T) -> Self::Output {
        self.map(|elem| elem / rhs)
    }
}

impl<T: Copy + DivAssign, const W: usize, const H: usize> DivAssign<T> for Matrix<T, W, H> {
    #[inline]
    fn div_assign(&mut self, rhs: T) {
        for elem in self.elems_mut() {
            elem.div_assign(rhs);
        }
    }
}

impl<T: Copy + ClosedAdd, const W: usize, const H: usize> Add<T> for Matrix<T, W, H> {
    type Output = Matrix<T, W, H>;

    #[inline]
    fn add(self, rhs: T) -> Self::Output {
        self.map(|elem| elem + rhs)
    }
}

impl<T: Copy + AddAssign, const W: usize, const H: usize> AddAssign<T> for Matrix<T, W, H> {
    #[inline]
    fn add_assign(&mut self, rhs: T) {
        for elem in self.elems_mut() {
            elem.add_assign(rhs);
        }
    }
}

impl<T: Copy + ClosedSub, const W: usize, const H: usize> Sub<T> for Matrix<T, W, H> {
    type Output = Matrix<T, W, H>;

    #[inline]
    fn sub(self, rhs: T) -> Self::Output {
        self.map(|elem| elem - rhs)
    }
}

impl<T: Copy + SubAssign, const W: usize, const H: usize> SubAssign<T> for Matrix<T, W, H> {
    #[inline]
    fn sub_assign(&mut self, rhs: T) {
        for elem in self.elems_mut() {
            elem.sub_assign(rhs);
        }
    }
}

impl<T: ClosedAdd, const W: usize, const H: usize> Add<Matrix<T, W, H>> for Matrix<T, W, H> {
    type Output = Matrix<T, W, H>;

    #[inline]
    fn add(self, rhs: Matrix<T, W, H>) -> Self::Output {
        self.zip_map(rhs, Add::add)
    }
}

impl<T: AddAssign, const W: usize, const H: usize> AddAssign<Matrix<T, W, H>>
    for Matrix<T, W, H>
{
    #[inline]
    fn add_assign(&mut self, rhs: Matrix<T, W, H>) {
        for (lhs, rhs) in self.data.iter_mut().flatten().zip(rhs.data.into_iter().flatten()) {
            lhs.add_assign(rhs);
        }
    }
}

impl<T: ClosedSub, const W: usize, const H: usize> Sub<Matrix<T, W, H>> for Matrix<T, W, H> {
    type Output = Matrix<T, W, H>;

    #[inline]
    fn sub(self, rhs: Matrix<T, W, H>) -> Self::Output {
        self.zip_map(rhs, Sub::sub)
    }
}

impl<T: SubAssign, const W: usize, const H: usize> SubAssign<Matrix<T, W, H>>
    for Matrix<T, W, H>
{
    #[inline]
    fn sub_assign(&mut self, rhs: Matrix<T, W, H>) {
        for (lhs, rhs) in self.data.iter_mut().flatten().zip(rhs.data.into_iter().flatten()) {
            lhs.sub_assign(rhs);
        }
    }
}

impl<T: Neg, const W: usize, const H: usize> Neg for Matrix<T, W, H> {
    type Output = Matrix<T::Output, W, H>;

    #[inline]
    fn neg(self) -> Self::Output {
        self.map(Neg::neg)
    }
}

impl<T, const W: usize, const H: usize> From<[[T; W]; H]> for Matrix<T, W, H> {
    #[inline]
    fn from(value: [[T; W]; H]) -> Self {
        Self::new(value)
    }
}

impl<T, const W: usize, const H: usize> From<Matrix<T, W, H>> for [[T; W]; H] {
    #[inline]
    fn from(value: Matrix<T, W, H>) -> Self {
        value.data
    }
}

impl<T, const W: usize> From<[T; W]> for Matrix<T, W, 1> {
    #[inline]
    fn from(value: [T; W]) -> Self {
        Self::from_array(value)
    }
}

impl<T, const W: usize> From<Matrix<T, W, 1>> for [T; W] {
    #[inline]
    fn from(value: Matrix<T, W, 1>) -> Self {
        value.into_array()
    }
}

impl<T, const W: usize, const H: usize> AsRef<[T]> for Matrix<T, W, H> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T, const W: usize, const H: usize> AsMut<[T]> for Matrix<T, W, H> {
    #[inline]
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T, const W: usize, const H: usize> Borrow<[T]> for Matrix<T, W, H> {
    #[inline]
    fn borrow(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T, const W: usize, const H: usize> BorrowMut<[T]> for Matrix<T, W, H> {
    #[inline]
    fn borrow_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T, const W: usize, const H: usize> AsRef<[[T; W]; H]> for Matrix<T, W, H> {
    #[inline]
    fn as_ref(&self) -> &[[T; W]; H] {
        self.as_array()
    }
}

impl<T, const W: usize, const H: usize> AsMut<[[T; W]; H]> for Matrix<T, W, H> {
    #[inline]
    fn as_mut(&mut self) -> &mut [[T; W]; H] {
        self.as_array_mut()
    }
}

#[cfg(feature = "bytemuck")]
unsafe impl<T: bytemuck::Zeroable, const W: usize, const H: usize> bytemuck::Zeroable
    for Matrix<T, W, H>
{
    #[inline]
    fn zeroed() -> Self {
        Matrix::from_fn(|_, _| bytemuck::Zeroable::zeroed())
    }
}

#[cfg(feature = "bytemuck")]
unsafe impl<T: bytemuck::Pod, const W: usize, const H: usize> bytemuck::Pod for Matrix<T, W, H> {}

#[cfg(feature = "approx")]
impl<T: approx::AbsDiffEq, const W: usize, const H: usize> approx::AbsDiffEq for Matrix<T, W, H>
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
        self.elems()
            .zip(other.elems())
            .all(|(x, y)| x.abs_diff_eq(y, epsilon))
    }
}

#[cfg(feature = "approx")]
impl<T: approx::RelativeEq, const W: usize, const H: usize> approx::RelativeEq
    for Matrix<T, W, H>
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
        self.elems()
            .zip(other.elems())
            .all(|(x, y)| x.relative_eq(y, epsilon, max_relative))
    }
}

#[cfg(feature = "approx")]
impl<T: approx::UlpsEq, const W: usize, const H: usize> approx::UlpsEq for Matrix<T, W, H>
where
    T::Epsilon: Copy,
{
    #[inline]
    fn default_max_ulps() -> u32 {
        T::default_max_ulps()
    }

    #[inline]
    fn ulps_eq(&self, other: &Self, epsilon: Self::Epsilon, max_ulps: u32) -> bool {
        self.elems()
            .zip(other.elems())
            .all(|(x, y)| x.ulps_eq(y, epsilon, max_ulps))
    }
}

macro_rules! impl_mint_vector_conversions {
    ( $( $mint_type:ident => $len:literal ),* $(,)? ) => {
        $(
            #[cfg(feature = "mint")]
            impl<T> From<mint::$mint_type<T>> for Matrix<T, $len, 1> {
                #[inline]
                fn from(value: mint::$mint_type<T>) -> Self {
                    Matrix::from_array(value.into())
                }
            }

            #[cfg(feature = "mint")]
            impl<T> From<Matrix<T, $len, 1>> for mint::$mint_type<T> {
                #[inline]
                fn from(value: Matrix<T, $len, 1>) -> Self {
                    mint::$mint_type::from(value.into_array())
                }
            }

            #[cfg(feature = "mint")]
            impl<T> mint::IntoMint for Matrix<T, $len, 1> {
                type MintType = mint::$mint_type<T>;
            }
        )*
    };
}

macro_rules! impl_mint_matrix_conversions {
    (
        $( $mint_type:ident => ($cols:literal, $rows:literal) [ $( $row:ident ),+ ] )*
    ) => {
        $(
            #[cfg(feature = "mint")]
            impl<T> From<mint::$mint_type<T>> for Matrix<T, $cols, $rows> {
                #[inline]
                fn from(value: mint::$mint_type<T>) -> Self {
                    Matrix::new([ $( value.$row.into() ),+ ])
                }
            }

            #[cfg(feature = "mint")]
            impl<T> From<Matrix<T, $cols, $rows>> for mint::$mint_type<T> {
                #[inline]
                fn from(value: Matrix<T, $cols, $rows>) -> Self {
                    mint::$mint_type::from(value.to_array())
                }
            }

            #[cfg(feature = "mint")]
            impl<T> mint::IntoMint for Matrix<T, $cols, $rows> {
                type MintType = mint::$mint_type<T>;
            }
        )*
    };
}

impl_mint_vector_conversions! {
    Vector2 => 2,
    Vector3 => 3,
    Vector4 => 4,
}

impl_mint_matrix_conversions! {
    RowMatrix2 => (2, 2) [x, y]
    RowMatrix3 => (3, 3) [x, y, z]
    RowMatrix4 => (4, 4) [x, y, z, w]
    RowMatrix4x3 => (3, 4) [x, y, z, w]
}

#[cfg(feature = "serde")]
impl<T: Serialize, const W: usize, const H: usize> Serialize for Matrix<T, W, H> {
    #[inline]
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if serializer.is_human_readable() {
            let mut struct_serializer = serializer.serialize_tuple_struct("Matrix", W * H)?;
            for elem in self.elems() {
                struct_serializer.serialize_field(elem)?;
            }
            struct_serializer.end()
        } else {
            serializer.collect_seq(self.elems())
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, T: Deserialize<'de>, const W: usize, const H: usize> Deserialize<'de>
    for Matrix<T, W, H>
{
    #[inline]
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct Visitor<T, const W: usize, const H: usize>(PhantomData<Matrix<T, W, H>>);

        impl<'de, T: Deserialize<'de>, const W: usize, const H: usize> de::Visitor<'de>
            for Visitor<T, W, H>
        {
            type Value = Matrix<T, W, H>;

            #[inline]
            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                write!(formatter, "a sequence of {} matrix elements", W * H)
            }

            #[allow(unsafe_code)]
            #[inline]
            fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
                let mut slots: Matrix<MaybeUninit<T>, W, H> =
                    Matrix::from_fn(|_, _| MaybeUninit::uninit());

                for (i, slot) in slots.elems_mut().enumerate() {
                    match seq.next_element::<T>()? {
                        Some(item) => {
                            slot.write(item);
                        }
                        None => return Err(de::Error::invalid_length(i, &self)),
                    }
                }

                if seq.next_element::<de::IgnoredAny>()?.is_some() {
                    return Err(de::Error::invalid_length(W * H + 1, &self));
                }

                // Every slot was written by the loop above.
                Ok(slots.map(|slot| unsafe { slot.assume_init() }))
            }
        }

        if deserializer.is_human_readable() {
            deserializer.deserialize_tuple_struct("Matrix", W * H, Visitor(PhantomData))
        } else {
            deserializer.deserialize_seq(Visitor(PhantomData))
        }
    }
}
