//! 2-dimensional vectors.

use super::{
    Vector2C, Vector3, impl_float_vector, impl_int_vector2, impl_simd_vector,
    impl_vector2_accessors,
};
use crate::lanes::{F32x4, F64x2, I32x4, U32x4};
use bytemuck::{Pod, Zeroable};

/// A 2-dimensional `f32` vector.
///
/// The components are stored in the lower half of a 128-bit SIMD register.
/// For compact storage, prefer [`Vector2C`].
#[repr(transparent)]
#[derive(Clone, Copy, Zeroable, Pod)]
pub struct Vector2 {
    lanes: F32x4,
}

/// A 2-dimensional `f64` vector filling a 128-bit SIMD register.
#[repr(transparent)]
#[derive(Clone, Copy, Zeroable, Pod)]
pub struct Vector2D {
    lanes: F64x2,
}

/// A 2-dimensional `i32` vector.
///
/// Arithmetic wraps on overflow.
#[repr(transparent)]
#[derive(Clone, Copy, Zeroable, Pod)]
pub struct Vector2I {
    lanes: I32x4,
}

/// A 2-dimensional `u32` vector.
///
/// Arithmetic, including negation, wraps on overflow.
#[repr(transparent)]
#[derive(Clone, Copy, Zeroable, Pod)]
pub struct Vector2U {
    lanes: U32x4,
}

impl Vector2 {
    const ACTIVE_MASK: u32 = 0b11;

    /// Creates a new vector with the given components.
    #[inline]
    pub fn new(x: f32, y: f32) -> Self {
        Self::from_lanes(F32x4::new(x, y, 0.0, 0.0))
    }

    /// Reads two packed components.
    ///
    /// # Safety
    /// `ptr` must be valid for reading two `f32`s.
    #[inline]
    pub unsafe fn from_ptr(ptr: *const f32) -> Self {
        Self::from_lanes(unsafe { F32x4::load2(ptr) })
    }

    /// Writes two packed components.
    ///
    /// # Safety
    /// `ptr` must be valid for writing two `f32`s.
    #[inline]
    pub unsafe fn store_to_ptr(&self, ptr: *mut f32) {
        unsafe { self.lanes.store2(ptr) };
    }

    /// Like [`Self::store_to_ptr`], for a 16-byte aligned destination.
    ///
    /// # Safety
    /// `ptr` must be 16-byte aligned and valid for writing two `f32`s.
    #[inline]
    pub unsafe fn store_to_aligned_ptr(&self, ptr: *mut f32) {
        debug_assert!(ptr.addr().is_multiple_of(16), "pointer is not 16-byte aligned");
        unsafe { self.store_to_ptr(ptr) };
    }

    /// Converts the vector to 3D by appending the given z-component.
    #[inline]
    pub fn extended(&self, z: f32) -> Vector3 {
        Vector3::from_lanes(self.lanes.keep_xy().with_z(z))
    }

    /// Converts the vector to the 4-byte aligned compact representation.
    #[inline]
    pub fn compact(&self) -> Vector2C {
        Vector2C::new(self.x(), self.y())
    }

    #[inline]
    fn active_lanes(&self) -> F32x4 {
        self.lanes.keep_xy()
    }
}

impl_vector2_accessors!(Vector2, f32);
impl_simd_vector!(Vector2, f32, F32x4, 2, 4, [x, y]);
impl_float_vector!(Vector2, f32);

impl Vector2D {
    const ACTIVE_MASK: u32 = 0b11;

    /// Creates a new vector with the given components.
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self::from_lanes(F64x2::new(x, y))
    }

    /// Reads two packed components.
    ///
    /// # Safety
    /// `ptr` must be valid for reading two `f64`s.
    #[inline]
    pub unsafe fn from_ptr(ptr: *const f64) -> Self {
        Self::from_lanes(unsafe { F64x2::load(ptr) })
    }

    /// Writes two packed components.
    ///
    /// # Safety
    /// `ptr` must be valid for writing two `f64`s.
    #[inline]
    pub unsafe fn store_to_ptr(&self, ptr: *mut f64) {
        unsafe { self.lanes.store(ptr) };
    }

    /// Like [`Self::store_to_ptr`], for a 16-byte aligned destination.
    ///
    /// # Safety
    /// `ptr` must be 16-byte aligned and valid for writing two `f64`s.
    #[inline]
    pub unsafe fn store_to_aligned_ptr(&self, ptr: *mut f64) {
        unsafe { self.lanes.store_aligned(ptr) };
    }

    #[inline]
    fn active_lanes(&self) -> F64x2 {
        self.lanes
    }
}

impl_vector2_accessors!(Vector2D, f64);
impl_simd_vector!(Vector2D, f64, F64x2, 2, 2, [x, y]);
impl_float_vector!(Vector2D, f64);

macro_rules! impl_int_vector2_storage {
    ($t:ident, $s:ty, $lanes:ty) => {
        impl $t {
            const ACTIVE_MASK: u32 = 0b11;

            /// Creates a new vector with the given components.
            #[inline]
            pub fn new(x: $s, y: $s) -> Self {
                Self::from_lanes(<$lanes>::new(x, y, 0, 0))
            }

            /// Reads two packed components.
            ///
            /// # Safety
            /// `ptr` must be valid for reading two components.
            #[inline]
            pub unsafe fn from_ptr(ptr: *const $s) -> Self {
                Self::from_lanes(unsafe { <$lanes>::load2(ptr) })
            }

            /// Writes two packed components.
            ///
            /// # Safety
            /// `ptr` must be valid for writing two components.
            #[inline]
            pub unsafe fn store_to_ptr(&self, ptr: *mut $s) {
                unsafe { self.lanes.store2(ptr) };
            }

            /// Like [`Self::store_to_ptr`], for a 16-byte aligned destination.
            ///
            /// # Safety
            /// `ptr` must be 16-byte aligned and valid for writing two
            /// components.
            #[inline]
            pub unsafe fn store_to_aligned_ptr(&self, ptr: *mut $s) {
                debug_assert!(ptr.addr().is_multiple_of(16), "pointer is not 16-byte aligned");
                unsafe { self.store_to_ptr(ptr) };
            }

            #[inline]
            fn active_lanes(&self) -> $lanes {
                self.lanes.keep_xy()
            }
        }
    };
}

impl_int_vector2_storage!(Vector2I, i32, I32x4);
impl_vector2_accessors!(Vector2I, i32);
impl_simd_vector!(Vector2I, i32, I32x4, 2, 4, [x, y]);
impl_int_vector2!(Vector2I, i32);

impl_int_vector2_storage!(Vector2U, u32, U32x4);
impl_vector2_accessors!(Vector2U, u32);
impl_simd_vector!(Vector2U, u32, U32x4, 2, 4, [x, y]);
impl_int_vector2!(Vector2U, u32);

#[cfg(test)]
mod tests {
    #![allow(clippy::op_ref)]

    use super::*;
    use approx::assert_abs_diff_eq;

    const EPSILON: f32 = 1e-6;

    #[test]
    fn adding_and_dotting_vector2_works() {
        let a = Vector2::new(2.0, 4.0);
        let b = Vector2::new(-5.0, 3.0);
        assert_eq!(a + b, Vector2::new(-3.0, 7.0));
        assert_eq!(a.dot(&b), 2.0);
        assert_abs_diff_eq!(b.norm(), 5.8309, epsilon = 1e-4);
    }

    #[test]
    fn computing_vector2_norm_works() {
        let v = Vector2::new(3.0, 4.0);
        assert_abs_diff_eq!(v.norm(), 5.0, epsilon = EPSILON);
        assert_abs_diff_eq!(v.norm_squared(), 25.0, epsilon = EPSILON);
    }

    #[test]
    fn normalizing_vector2_gives_unit_vector() {
        let normalized = Vector2::new(3.0, 4.0).normalized();
        assert_abs_diff_eq!(normalized.norm(), 1.0, epsilon = EPSILON);
        assert_abs_diff_eq!(normalized, Vector2::new(0.6, 0.8), epsilon = EPSILON);
    }

    #[test]
    fn normalizing_zero_vector2_gives_nan() {
        let normalized = Vector2::zeros().normalized();
        assert!(normalized.x().is_nan() && normalized.y().is_nan());
    }

    #[test]
    fn vector2_arithmetic_operations_work() {
        let v1 = Vector2::new(1.0, 2.0);
        let v2 = Vector2::new(3.0, 4.0);

        assert_eq!(&v1 + &v2, Vector2::new(4.0, 6.0));
        assert_eq!(&v1 - &v2, Vector2::new(-2.0, -2.0));
        assert_eq!(&v1 * &v2, Vector2::new(3.0, 8.0));
        assert_eq!(&v2 / &v1, Vector2::new(3.0, 2.0));
        assert_eq!(&v1 * 2.0, Vector2::new(2.0, 4.0));
        assert_eq!(3.0 * &v1, Vector2::new(3.0, 6.0));
        assert_eq!(&v1 / 2.0, Vector2::new(0.5, 1.0));
        assert_eq!(&v1 + 1.0, Vector2::new(2.0, 3.0));
        assert_eq!(-&v1, Vector2::new(-1.0, -2.0));
    }

    #[test]
    fn vector2_compound_assignment_works() {
        let mut v = Vector2::new(1.0, 2.0);
        v += Vector2::new(1.0, 1.0);
        v *= 2.0;
        v -= 1.0;
        v /= Vector2::new(3.0, 5.0);
        assert_eq!(v, Vector2::new(1.0, 1.0));
    }

    #[test]
    fn dividing_vector2_by_zero_gives_infinity() {
        let v = Vector2::new(1.0, -1.0) / 0.0;
        assert_eq!(v.x(), f32::INFINITY);
        assert_eq!(v.y(), f32::NEG_INFINITY);
    }

    #[test]
    fn vector2_component_operations_work() {
        let v1 = Vector2::new(-1.0, 2.0);
        let v2 = Vector2::new(3.0, -4.0);

        assert_eq!(v1.component_abs(), Vector2::new(1.0, 2.0));
        assert_eq!(v1.component_mul(&v2), Vector2::new(-3.0, -8.0));
        assert_eq!(v1.component_min(&v2), Vector2::new(-1.0, -4.0));
        assert_eq!(v1.component_max(&v2), Vector2::new(3.0, 2.0));
        assert_eq!(v1.component_sum(), 1.0);
        assert_eq!(
            Vector2::new(-5.0, 5.0).clamped(&Vector2::same(-1.0), &Vector2::same(2.0)),
            Vector2::new(-1.0, 2.0)
        );
    }

    #[test]
    fn vector2_lerp_does_not_clamp() {
        let a = Vector2::new(0.0, 10.0);
        let b = Vector2::new(10.0, 20.0);
        assert_eq!(a.lerp(&b, 0.5), Vector2::new(5.0, 15.0));
        assert_eq!(a.lerp(&b, 2.0), Vector2::new(20.0, 30.0));
    }

    #[test]
    fn vector2_aliases_match_canonical_getters() {
        let v = Vector2::new(7.0, -3.0);
        assert_eq!(v.left(), v.x());
        assert_eq!(v.width(), v.x());
        assert_eq!(v.top(), v.y());
        assert_eq!(v.height(), v.y());
        #[cfg(feature = "texture_swizzles")]
        assert_eq!((v.u(), v.v()), (v.x(), v.y()));
        #[cfg(feature = "color_swizzles")]
        assert_eq!((v.r(), v.g()), (v.x(), v.y()));
    }

    #[test]
    fn setting_vector2_components_leaves_others_unchanged() {
        let mut v = Vector2::new(1.0, 2.0);
        v.set_x(5.0);
        assert_eq!(v, Vector2::new(5.0, 2.0));
        v.set_y(6.0);
        assert_eq!(v, Vector2::new(5.0, 6.0));
    }

    #[test]
    fn vector2_equality_ignores_padding() {
        let with_padding = Vector2::from_lanes(F32x4::new(1.0, 2.0, f32::NAN, 9.0));
        assert_eq!(with_padding, Vector2::new(1.0, 2.0));
        assert_eq!(with_padding.component_sum(), 3.0);
        assert_ne!(Vector2::new(1.0, 2.0), Vector2::new(1.0, 2.5));
    }

    #[test]
    fn vector2_masks_cover_only_active_components() {
        let a = Vector2::new(1.0, 5.0);
        let b = Vector2::new(2.0, 5.0);
        assert_eq!(a.less_mask(&b).mask_bits(), 0b01);
        assert_eq!(a.equals_mask(&b).mask_bits(), 0b10);
        assert_eq!(a.not_equals_mask(&b).mask_bits(), 0b01);
        assert_eq!(a.less_or_equal_mask(&b).mask_bits(), 0b11);
        assert_eq!(a.greater_mask(&b).mask_bits(), 0b00);
        assert_eq!(a.greater_or_equal_mask(&b).mask_bits(), 0b10);
        assert_eq!(
            Vector2::select(&a.less_mask(&b), &a, &b),
            Vector2::new(1.0, 5.0)
        );
    }

    #[test]
    fn storing_and_loading_vector2_works() {
        let mut buffer = [9.0; 3];
        Vector2::new(1.0, 2.0).store(&mut buffer);
        assert_eq!(buffer, [1.0, 2.0, 9.0]);
        assert_eq!(Vector2::from_slice(&buffer), Vector2::new(1.0, 2.0));
        assert_eq!(<[f32; 2]>::from(Vector2::new(3.0, 4.0)), [3.0, 4.0]);
        assert_eq!(Vector2::from([3.0, 4.0]), Vector2::new(3.0, 4.0));
    }

    #[test]
    #[should_panic]
    fn loading_vector2_from_short_slice_panics() {
        let _ = Vector2::from_slice(&[1.0]);
    }

    #[test]
    fn vector2_indexing_works() {
        let mut v = Vector2::new(1.0, 2.0);
        assert_eq!(v[0], 1.0);
        assert_eq!(v[1], 2.0);

        v[0] = 10.0;
        v[1] = 20.0;
        assert_eq!(v, Vector2::new(10.0, 20.0));
    }

    #[test]
    #[should_panic]
    fn indexing_vector2_out_of_bounds_panics() {
        let v = Vector2::new(1.0, 2.0);
        let _ = v[2];
    }

    #[test]
    fn extending_vector2_to_vector3_works() {
        let v = Vector2::from_lanes(F32x4::new(1.0, 2.0, 8.0, 9.0)).extended(3.0);
        assert_eq!(v, Vector3::new(1.0, 2.0, 3.0));
        assert_eq!(v.lanes().w(), 0.0);
    }

    #[test]
    fn vector2_runtime_swizzle_works() {
        let v = Vector2::new(1.0, 2.0);
        assert_eq!(v.swizzled([1, 0]), Vector2::new(2.0, 1.0));
        assert_eq!(v.swizzled([1, 1]), Vector2::new(2.0, 2.0));
    }

    #[test]
    fn vector2d_operations_work() {
        let a = Vector2D::new(3.0, 4.0);
        let b = Vector2D::new(1.0, -2.0);
        assert_eq!(a + b, Vector2D::new(4.0, 2.0));
        assert_eq!(a.dot(&b), -5.0);
        assert_eq!(a.norm(), 5.0);
        assert_abs_diff_eq!(a.normalized(), Vector2D::new(0.6, 0.8), epsilon = 1e-12);
        assert_eq!(a.component_div(&b), Vector2D::new(3.0, -2.0));
        assert_eq!(b.component_abs(), Vector2D::new(1.0, 2.0));
        assert_eq!(a.greater_mask(&b).mask_bits(), 0b11);
    }

    #[test]
    fn vector2d_storage_round_trips() {
        let mut buffer = [0.0; 2];
        Vector2D::new(1.5, -2.5).store(&mut buffer);
        assert_eq!(buffer, [1.5, -2.5]);
        assert_eq!(Vector2D::from_slice(&buffer), Vector2D::new(1.5, -2.5));
    }

    #[test]
    fn vector2i_arithmetic_wraps() {
        let a = Vector2I::new(i32::MAX, i32::MIN);
        let b = Vector2I::new(1, 1);
        assert_eq!(a + b, Vector2I::new(i32::MIN, i32::MIN + 1));
        assert_eq!(a - b, Vector2I::new(i32::MAX - 1, i32::MAX));
        assert_eq!(a * 2, Vector2I::new(-2, 0));
        assert_eq!(-Vector2I::new(i32::MIN, 3), Vector2I::new(i32::MIN, -3));
        assert_eq!(Vector2I::new(i32::MIN, -4).component_abs(), Vector2I::new(i32::MIN, 4));
    }

    #[test]
    fn vector2i_division_truncates_per_component() {
        let a = Vector2I::new(7, -7);
        assert_eq!(a / Vector2I::new(2, 2), Vector2I::new(3, -3));
        assert_eq!(a / 7, Vector2I::new(1, -1));
    }

    #[test]
    #[should_panic]
    fn dividing_vector2i_by_zero_panics() {
        let _ = Vector2I::new(1, 2) / Vector2I::new(1, 0);
    }

    #[test]
    fn vector2i_norm_is_truncated() {
        let v = Vector2I::new(3, 4);
        assert_eq!(v.norm_squared(), 25);
        assert_eq!(v.norm(), 5);
        assert_eq!(Vector2I::new(1, 1).norm(), 1);
        assert_eq!(Vector2I::new(6, 8).normalized(), Vector2I::new(0, 0));
        assert_eq!(Vector2I::new(10, 0).normalized(), Vector2I::new(1, 0));
    }

    #[test]
    fn vector2i_setters_match_hardware_insert() {
        let mut v = Vector2I::new(1, 2);
        v.set_x(-9);
        v.set_y(i32::MIN);
        assert_eq!(v.to_array(), [-9, i32::MIN]);
    }

    #[test]
    fn vector2u_comparisons_are_unsigned() {
        let a = Vector2U::new(u32::MAX, 1);
        let b = Vector2U::new(1, u32::MAX);
        assert_eq!(a.greater_mask(&b).mask_bits(), 0b01);
        assert_eq!(a.less_mask(&b).mask_bits(), 0b10);
        assert_eq!(a.component_min(&b), Vector2U::new(1, 1));
        assert_eq!(a.component_max(&b), Vector2U::same(u32::MAX));
        assert_eq!(a.component_abs(), a);
    }

    #[test]
    fn vector2u_arithmetic_wraps() {
        let a = Vector2U::new(u32::MAX, 0);
        assert_eq!(a + Vector2U::new(1, 1), Vector2U::new(0, 1));
        assert_eq!(-Vector2U::new(1, 0), Vector2U::new(u32::MAX, 0));
        assert_eq!(Vector2U::new(9, 10) / 3, Vector2U::new(3, 3));
        assert_eq!(Vector2U::new(3, 4).norm(), 5);
    }

    #[test]
    fn integer_vectors_debug_print_components() {
        assert_eq!(format!("{:?}", Vector2I::new(1, -2)), "Vector2I { x: 1, y: -2 }");
        assert_eq!(format!("{:?}", Vector2U::default()), "Vector2U { x: 0, y: 0 }");
    }
}
