//! Matrices.

use crate::{
    lanes::F32x4,
    vector::{Vector3, Vector4, Vector4C},
};
use bytemuck::{Pod, Zeroable};

/// A 4x4 matrix.
///
/// The columns are stored in 128-bit SIMD registers for efficient computation.
/// That leads to an alignment of 16 bytes. For padding-free storage together
/// with smaller types, prefer the 4-byte aligned [`Matrix4C`].
///
/// Indices are `(row, column)` and every index is checked: anything outside
/// `0..4` panics.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Zeroable, Pod)]
pub struct Matrix4 {
    columns: [Vector4; 4],
}

/// A 4x4 matrix.
///
/// This type only supports a few basic operations, as is primarily intended for
/// padding-free storage when combined with smaller types. For computations,
/// prefer the SIMD-friendly 16-byte aligned [`Matrix4`].
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Zeroable, Pod)]
pub struct Matrix4C {
    columns: [Vector4C; 4],
}

impl Matrix4 {
    /// Creates a matrix with all zeros.
    #[inline]
    pub fn zeros() -> Self {
        Self::from_columns(
            Vector4::zeros(),
            Vector4::zeros(),
            Vector4::zeros(),
            Vector4::zeros(),
        )
    }

    /// Creates the identity matrix.
    #[inline]
    pub fn identity() -> Self {
        Self::from_diagonal_same(1.0)
    }

    /// Creates a diagonal matrix with the given vector as the diagonal.
    #[inline]
    pub fn from_diagonal(diagonal: &Vector4) -> Self {
        let mut m = Self::zeros();
        m.set_main_diagonal(diagonal);
        m
    }

    /// Creates a diagonal matrix with the given diagonal elements.
    #[inline]
    pub fn from_diagonal_elements(m00: f32, m11: f32, m22: f32, m33: f32) -> Self {
        Self::from_diagonal(&Vector4::new(m00, m11, m22, m33))
    }

    /// Creates a diagonal matrix with the same value for every diagonal
    /// element.
    #[inline]
    pub fn from_diagonal_same(value: f32) -> Self {
        Self::from_diagonal(&Vector4::same(value))
    }

    /// Creates a matrix from elements given in row-major order, so the
    /// arguments read like the matrix when written out.
    #[inline]
    pub fn new(
        m00: f32,
        m01: f32,
        m02: f32,
        m03: f32,
        m10: f32,
        m11: f32,
        m12: f32,
        m13: f32,
        m20: f32,
        m21: f32,
        m22: f32,
        m23: f32,
        m30: f32,
        m31: f32,
        m32: f32,
        m33: f32,
    ) -> Self {
        Self::from_columns(
            Vector4::new(m00, m10, m20, m30),
            Vector4::new(m01, m11, m21, m31),
            Vector4::new(m02, m12, m22, m32),
            Vector4::new(m03, m13, m23, m33),
        )
    }

    /// Creates a matrix from 16 elements in row-major order.
    #[inline]
    pub fn from_row_major_array(elements: [f32; 16]) -> Self {
        Self::from_column_major_array(elements).transposed()
    }

    /// Creates a matrix from 16 elements in column-major order.
    #[inline]
    pub fn from_column_major_array(elements: [f32; 16]) -> Self {
        Self::from_column_major_slice(&elements)
    }

    /// Creates a matrix from the first 16 elements of a slice, in column-major
    /// order.
    ///
    /// # Panics
    /// If the slice has fewer than 16 elements.
    #[inline]
    pub fn from_column_major_slice(slice: &[f32]) -> Self {
        assert!(
            slice.len() >= 16,
            "slice of length {} is too short for Matrix4 with 16 elements",
            slice.len()
        );
        unsafe { Self::from_column_major_ptr(slice.as_ptr()) }
    }

    /// Reads 16 packed elements in column-major order.
    ///
    /// # Safety
    /// `ptr` must be valid for reading 16 `f32`s.
    #[inline]
    pub unsafe fn from_column_major_ptr(ptr: *const f32) -> Self {
        unsafe {
            Self::from_columns(
                Vector4::from_ptr(ptr),
                Vector4::from_ptr(ptr.add(4)),
                Vector4::from_ptr(ptr.add(8)),
                Vector4::from_ptr(ptr.add(12)),
            )
        }
    }

    /// Creates a matrix with the given columns.
    #[inline]
    pub fn from_columns(
        column_0: Vector4,
        column_1: Vector4,
        column_2: Vector4,
        column_3: Vector4,
    ) -> Self {
        Self {
            columns: [column_0, column_1, column_2, column_3],
        }
    }

    /// Creates a matrix with the given rows.
    #[inline]
    pub fn from_rows(row_0: Vector4, row_1: Vector4, row_2: Vector4, row_3: Vector4) -> Self {
        let [c0, c1, c2, c3] = transpose_lanes([
            row_0.lanes(),
            row_1.lanes(),
            row_2.lanes(),
            row_3.lanes(),
        ]);
        Self::from_columns(
            Vector4::from_lanes(c0),
            Vector4::from_lanes(c1),
            Vector4::from_lanes(c2),
            Vector4::from_lanes(c3),
        )
    }

    /// Returns the column with the given index.
    ///
    /// # Panics
    /// If the index is outside `0..4`.
    #[inline]
    pub fn column(&self, index: usize) -> Vector4 {
        check_index("column", index);
        self.columns[index]
    }

    /// Replaces the column with the given index.
    ///
    /// # Panics
    /// If the index is outside `0..4`.
    #[inline]
    pub fn set_column(&mut self, index: usize, column: Vector4) {
        check_index("column", index);
        self.columns[index] = column;
    }

    /// Returns the row with the given index.
    ///
    /// # Panics
    /// If the index is outside `0..4`.
    #[inline]
    pub fn row(&self, index: usize) -> Vector4 {
        check_index("row", index);
        let [c0, c1, c2, c3] = &self.columns;
        Vector4::new(c0[index], c1[index], c2[index], c3[index])
    }

    /// Replaces the row with the given index.
    ///
    /// # Panics
    /// If the index is outside `0..4`.
    #[inline]
    pub fn set_row(&mut self, index: usize, row: &Vector4) {
        check_index("row", index);
        for (column, value) in self.columns.iter_mut().zip(row.to_array()) {
            column[index] = value;
        }
    }

    /// Returns the element in the given row and column.
    ///
    /// # Panics
    /// If either index is outside `0..4`.
    #[inline]
    pub fn element(&self, row: usize, column: usize) -> f32 {
        check_index("row", row);
        check_index("column", column);
        self.columns[column][row]
    }

    /// Replaces the element in the given row and column.
    ///
    /// # Panics
    /// If either index is outside `0..4`.
    #[inline]
    pub fn set_element(&mut self, row: usize, column: usize, value: f32) {
        check_index("row", row);
        check_index("column", column);
        self.columns[column][row] = value;
    }

    /// Returns the elements on the main diagonal.
    #[inline]
    pub fn main_diagonal(&self) -> Vector4 {
        let [c0, c1, c2, c3] = &self.columns;
        Vector4::new(c0.x(), c1.y(), c2.z(), c3.w())
    }

    /// Replaces the elements on the main diagonal.
    #[inline]
    pub fn set_main_diagonal(&mut self, diagonal: &Vector4) {
        let [c0, c1, c2, c3] = &mut self.columns;
        c0.set_x(diagonal.x());
        c1.set_y(diagonal.y());
        c2.set_z(diagonal.z());
        c3.set_w(diagonal.w());
    }

    /// Exchanges two rows. Swapping a row with itself leaves the matrix
    /// unchanged.
    ///
    /// # Panics
    /// If either index is outside `0..4`.
    #[inline]
    pub fn swap_rows(&mut self, i: usize, j: usize) {
        let row_i = self.row(i);
        let row_j = self.row(j);
        self.set_row(i, &row_j);
        self.set_row(j, &row_i);
    }

    /// Exchanges two columns.
    ///
    /// # Panics
    /// If either index is outside `0..4`.
    #[inline]
    pub fn swap_columns(&mut self, i: usize, j: usize) {
        check_index("column", i);
        check_index("column", j);
        self.columns.swap(i, j);
    }

    /// Returns the transpose of this matrix.
    #[inline]
    pub fn transposed(&self) -> Self {
        let [r0, r1, r2, r3] = transpose_lanes(self.column_lanes());
        Self::from_columns(
            Vector4::from_lanes(r0),
            Vector4::from_lanes(r1),
            Vector4::from_lanes(r2),
            Vector4::from_lanes(r3),
        )
    }

    /// Transposes this matrix in place.
    #[inline]
    pub fn transpose(&mut self) {
        *self = self.transposed();
    }

    /// Writes the 16 elements in column-major order to the start of the
    /// slice.
    ///
    /// # Panics
    /// If the slice has fewer than 16 elements.
    #[inline]
    pub fn store(&self, slice: &mut [f32]) {
        assert!(
            slice.len() >= 16,
            "slice of length {} is too short for Matrix4 with 16 elements",
            slice.len()
        );
        unsafe { self.store_to_ptr(slice.as_mut_ptr()) };
    }

    /// Writes 16 packed elements in column-major order.
    ///
    /// # Safety
    /// `ptr` must be valid for writing 16 `f32`s.
    #[inline]
    pub unsafe fn store_to_ptr(&self, ptr: *mut f32) {
        for (offset, column) in self.columns.iter().enumerate() {
            unsafe { column.store_to_ptr(ptr.add(4 * offset)) };
        }
    }

    /// Like [`Self::store_to_ptr`], for a 16-byte aligned destination.
    ///
    /// # Safety
    /// `ptr` must be 16-byte aligned and valid for writing 16 `f32`s.
    #[inline]
    pub unsafe fn store_to_aligned_ptr(&self, ptr: *mut f32) {
        for (offset, column) in self.columns.iter().enumerate() {
            unsafe { column.store_to_aligned_ptr(ptr.add(4 * offset)) };
        }
    }

    /// The elements in column-major order.
    #[inline]
    pub fn to_column_major_array(&self) -> [f32; 16] {
        let mut elements = [0.0; 16];
        self.store(&mut elements);
        elements
    }

    /// The elements in row-major order.
    #[inline]
    pub fn to_row_major_array(&self) -> [f32; 16] {
        self.transposed().to_column_major_array()
    }

    /// Applies the matrix to the given point, treating it as having a
    /// w-component of one so that translation applies.
    #[inline]
    pub fn transform_point(&self, point: &Vector3) -> Vector3 {
        (self * point.extended(1.0)).xyz()
    }

    /// Applies the matrix to the given vector, treating it as having a
    /// w-component of zero so that translation does not apply.
    #[inline]
    pub fn transform_vector(&self, vector: &Vector3) -> Vector3 {
        (self * vector.extended(0.0)).xyz()
    }

    /// Converts the matrix to the 4-byte aligned representation.
    #[inline]
    pub fn compact(&self) -> Matrix4C {
        let [c0, c1, c2, c3] = &self.columns;
        Matrix4C::from_columns(c0.compact(), c1.compact(), c2.compact(), c3.compact())
    }

    #[inline]
    fn column_lanes(&self) -> [F32x4; 4] {
        self.columns.map(|column| column.lanes())
    }

    #[inline]
    fn mapped_columns(&self, f: impl FnMut(Vector4) -> Vector4) -> Self {
        Self {
            columns: self.columns.map(f),
        }
    }
}

impl Matrix4C {
    /// Creates the identity matrix.
    #[inline]
    pub const fn identity() -> Self {
        Self::from_columns(
            Vector4C::new(1.0, 0.0, 0.0, 0.0),
            Vector4C::new(0.0, 1.0, 0.0, 0.0),
            Vector4C::new(0.0, 0.0, 1.0, 0.0),
            Vector4C::new(0.0, 0.0, 0.0, 1.0),
        )
    }

    /// Creates a matrix with all zeros.
    #[inline]
    pub const fn zeros() -> Self {
        Self::from_columns(
            Vector4C::zeros(),
            Vector4C::zeros(),
            Vector4C::zeros(),
            Vector4C::zeros(),
        )
    }

    /// Creates a matrix with the given columns.
    #[inline]
    pub const fn from_columns(
        column_0: Vector4C,
        column_1: Vector4C,
        column_2: Vector4C,
        column_3: Vector4C,
    ) -> Self {
        Self {
            columns: [column_0, column_1, column_2, column_3],
        }
    }

    /// Returns the column with the given index.
    ///
    /// # Panics
    /// If the index is outside `0..4`.
    #[inline]
    pub fn column(&self, index: usize) -> &Vector4C {
        check_index("column", index);
        &self.columns[index]
    }

    /// Converts the matrix to the 16-byte aligned SIMD-friendly [`Matrix4`].
    #[inline]
    pub fn aligned(&self) -> Matrix4 {
        let [c0, c1, c2, c3] = &self.columns;
        Matrix4::from_columns(c0.aligned(), c1.aligned(), c2.aligned(), c3.aligned())
    }
}

#[inline]
fn check_index(kind: &str, index: usize) {
    assert!(
        index < 4,
        "{kind} index {index} is out of bounds for a 4x4 matrix (valid range is 0..=3)"
    );
}

/// Transposes four lanes viewed as the rows (or columns) of a 4x4 matrix.
#[inline]
fn transpose_lanes([c0, c1, c2, c3]: [F32x4; 4]) -> [F32x4; 4] {
    let t0 = c0.unpack_lo(c1);
    let t1 = c2.unpack_lo(c3);
    let t2 = c0.unpack_hi(c1);
    let t3 = c2.unpack_hi(c3);
    [
        t0.move_lh(t1),
        t1.move_hl(t0),
        t2.move_lh(t3),
        t3.move_hl(t2),
    ]
}

/// Dots each of the four rows with `v` and packs the four results into one
/// lane value. Each sum is accumulated in the same order as a vector dot
/// product.
#[inline]
fn dot_rows(rows: &[F32x4; 4], v: F32x4) -> F32x4 {
    let [q0, q1, q2, q3] = transpose_lanes(rows.map(|row| row * v));
    (q0 + q2) + (q1 + q3)
}

impl_binop!(Add, add, Matrix4, Matrix4, Matrix4, |a, b| {
    let mut columns = a.columns;
    for (column, other) in columns.iter_mut().zip(&b.columns) {
        *column += other;
    }
    Matrix4 { columns }
});

impl_binop!(Sub, sub, Matrix4, Matrix4, Matrix4, |a, b| {
    let mut columns = a.columns;
    for (column, other) in columns.iter_mut().zip(&b.columns) {
        *column -= other;
    }
    Matrix4 { columns }
});

impl_binop!(Mul, mul, Matrix4, Matrix4, Matrix4, |a, b| {
    let rows = transpose_lanes(a.column_lanes());
    b.mapped_columns(|column| Vector4::from_lanes(dot_rows(&rows, column.lanes())))
});

impl_binop!(Mul, mul, Matrix4, Vector4, Vector4, |a, b| {
    let rows = transpose_lanes(a.column_lanes());
    Vector4::from_lanes(dot_rows(&rows, b.lanes()))
});

impl_binop!(Mul, mul, Matrix4, f32, Matrix4, |a, b| {
    a.mapped_columns(|column| column * *b)
});

impl_binop!(Mul, mul, f32, Matrix4, Matrix4, |a, b| { b * *a });

impl_binop!(Div, div, Matrix4, f32, Matrix4, |a, b| {
    a.mapped_columns(|column| column / *b)
});

impl_binop_assign!(AddAssign, add_assign, Matrix4, Matrix4, |a, b| {
    *a = *a + b;
});

impl_binop_assign!(SubAssign, sub_assign, Matrix4, Matrix4, |a, b| {
    *a = *a - b;
});

impl_binop_assign!(MulAssign, mul_assign, Matrix4, Matrix4, |a, b| {
    *a = *a * b;
});

impl_binop_assign!(MulAssign, mul_assign, Matrix4, f32, |a, b| {
    *a = *a * b;
});

impl_binop_assign!(DivAssign, div_assign, Matrix4, f32, |a, b| {
    *a = *a / b;
});

impl_unary_op!(Neg, neg, Matrix4, Matrix4, |val| {
    val.mapped_columns(|column| -column)
});

impl_abs_diff_eq!(Matrix4, f32, |a, b, epsilon| {
    a.columns
        .iter()
        .zip(&b.columns)
        .all(|(a, b)| ::approx::AbsDiffEq::abs_diff_eq(a, b, epsilon))
});

impl_relative_eq!(Matrix4, f32, |a, b, epsilon, max_relative| {
    a.columns
        .iter()
        .zip(&b.columns)
        .all(|(a, b)| ::approx::RelativeEq::relative_eq(a, b, epsilon, max_relative))
});
