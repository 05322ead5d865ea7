//! 3-dimensional vectors.

use super::{Vector3C, Vector4, impl_float_vector, impl_simd_vector};
use crate::lanes::{F32x4, shuffle_mask};
use bytemuck::{Pod, Zeroable};

/// A 3-dimensional vector.
///
/// The components are stored in a 128-bit SIMD register for efficient
/// computation. That leads to an extra 4 bytes in size and 16-byte alignment.
/// For cache-friendly storage, prefer the compact 4-byte aligned [`Vector3C`].
#[repr(transparent)]
#[derive(Clone, Copy, Zeroable, Pod)]
pub struct Vector3 {
    lanes: F32x4,
}

impl Vector3 {
    const ACTIVE_MASK: u32 = 0b111;

    /// Creates a new vector with the given components.
    #[inline]
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self::from_lanes(F32x4::new(x, y, z, 0.0))
    }

    /// The x-axis unit vector.
    #[inline]
    pub fn unit_x() -> Self {
        Self::new(1.0, 0.0, 0.0)
    }

    /// The y-axis unit vector.
    #[inline]
    pub fn unit_y() -> Self {
        Self::new(0.0, 1.0, 0.0)
    }

    /// The z-axis unit vector.
    #[inline]
    pub fn unit_z() -> Self {
        Self::new(0.0, 0.0, 1.0)
    }

    /// Reads three packed components.
    ///
    /// # Safety
    /// `ptr` must be valid for reading three `f32`s.
    #[inline]
    pub unsafe fn from_ptr(ptr: *const f32) -> Self {
        Self::from_lanes(unsafe { F32x4::load3(ptr) })
    }

    /// Writes three packed components.
    ///
    /// # Safety
    /// `ptr` must be valid for writing three `f32`s.
    #[inline]
    pub unsafe fn store_to_ptr(&self, ptr: *mut f32) {
        unsafe { self.lanes.store3(ptr) };
    }

    /// Like [`Self::store_to_ptr`], for a 16-byte aligned destination.
    ///
    /// # Safety
    /// `ptr` must be 16-byte aligned and valid for writing three `f32`s.
    #[inline]
    pub unsafe fn store_to_aligned_ptr(&self, ptr: *mut f32) {
        debug_assert!(ptr.addr().is_multiple_of(16), "pointer is not 16-byte aligned");
        unsafe { self.store_to_ptr(ptr) };
    }

    /// The x-component.
    #[inline]
    pub fn x(&self) -> f32 {
        self.lanes.x()
    }

    /// The y-component.
    #[inline]
    pub fn y(&self) -> f32 {
        self.lanes.y()
    }

    /// The z-component.
    #[inline]
    pub fn z(&self) -> f32 {
        self.lanes.z()
    }

    #[inline]
    pub fn set_x(&mut self, x: f32) {
        self.lanes = self.lanes.with_x(x);
    }

    #[inline]
    pub fn set_y(&mut self, y: f32) {
        self.lanes = self.lanes.with_y(y);
    }

    #[inline]
    pub fn set_z(&mut self, z: f32) {
        self.lanes = self.lanes.with_z(z);
    }

    #[cfg(feature = "texture_swizzles")]
    #[inline]
    pub fn u(&self) -> f32 {
        self.x()
    }

    #[cfg(feature = "texture_swizzles")]
    #[inline]
    pub fn v(&self) -> f32 {
        self.y()
    }

    /// The third texture coordinate, which is the z-component.
    #[cfg(feature = "texture_swizzles")]
    #[inline]
    pub fn w(&self) -> f32 {
        self.z()
    }

    #[cfg(feature = "color_swizzles")]
    #[inline]
    pub fn r(&self) -> f32 {
        self.x()
    }

    #[cfg(feature = "color_swizzles")]
    #[inline]
    pub fn g(&self) -> f32 {
        self.y()
    }

    #[cfg(feature = "color_swizzles")]
    #[inline]
    pub fn b(&self) -> f32 {
        self.z()
    }

    /// Computes the cross product of this vector with another.
    #[inline]
    pub fn cross(&self, other: &Self) -> Self {
        const ZXY: i32 = shuffle_mask(2, 0, 1, 3);
        let a = self.lanes;
        let b = other.lanes;
        let c = a.shuffle::<ZXY>() * b - a * b.shuffle::<ZXY>();
        Self::from_lanes(c.shuffle::<ZXY>())
    }

    /// Converts the vector to 4D by appending the given w-component.
    #[inline]
    pub fn extended(&self, w: f32) -> Vector4 {
        Vector4::from_lanes(self.lanes.with_w(w))
    }

    /// Converts the vector to the 4-byte aligned compact representation.
    #[inline]
    pub fn compact(&self) -> Vector3C {
        Vector3C::new(self.x(), self.y(), self.z())
    }

    #[inline]
    fn active_lanes(&self) -> F32x4 {
        self.lanes.keep_xyz()
    }
}

impl_simd_vector!(Vector3, f32, F32x4, 3, 4, [x, y, z]);
impl_float_vector!(Vector3, f32);

#[cfg(test)]
mod tests {
    #![allow(clippy::op_ref)]

    use super::*;
    use approx::assert_abs_diff_eq;

    const EPSILON: f32 = 1e-6;

    #[test]
    fn computing_vector3_norm_works() {
        let v = Vector3::new(1.0, 2.0, 2.0);
        assert_abs_diff_eq!(v.norm(), 3.0, epsilon = EPSILON);
        assert_abs_diff_eq!(v.norm_squared(), 9.0, epsilon = EPSILON);
    }

    #[test]
    fn normalizing_vector3_gives_unit_vector() {
        let normalized = Vector3::new(2.0, 0.0, 0.0).normalized();
        assert_abs_diff_eq!(normalized.norm(), 1.0, epsilon = EPSILON);
        assert_abs_diff_eq!(normalized, Vector3::new(1.0, 0.0, 0.0), epsilon = EPSILON);
    }

    #[test]
    fn normalizing_zero_vector3_gives_nan() {
        let normalized = Vector3::zeros().normalized();
        assert!(normalized.x().is_nan());
    }

    #[test]
    fn vector3_dot_product_works() {
        let v1 = Vector3::new(1.0, 2.0, 3.0);
        let v2 = Vector3::new(4.0, 5.0, 6.0);
        assert_abs_diff_eq!(v1.dot(&v2), 32.0, epsilon = EPSILON);
    }

    #[test]
    fn vector3_dot_product_ignores_padding() {
        let v1 = Vector3::from_lanes(F32x4::new(1.0, 2.0, 3.0, f32::NAN));
        let v2 = Vector3::from_lanes(F32x4::new(4.0, 5.0, 6.0, 100.0));
        assert_eq!(v1.dot(&v2), 32.0);
        assert_eq!(v1.component_sum(), 6.0);
    }

    #[test]
    fn vector3_cross_product_works() {
        let cross = Vector3::unit_x().cross(&Vector3::unit_y());
        assert_abs_diff_eq!(cross, Vector3::unit_z(), epsilon = EPSILON);
        assert_eq!(
            Vector3::new(2.0, 3.0, 4.0).cross(&Vector3::new(5.0, 6.0, 7.0)),
            Vector3::new(-3.0, 6.0, -3.0)
        );
    }

    #[test]
    fn vector3_cross_product_is_anticommutative() {
        let a = Vector3::new(1.5, -2.0, 0.25);
        let b = Vector3::new(-3.0, 0.5, 4.0);
        assert_abs_diff_eq!(a.cross(&b), -b.cross(&a), epsilon = EPSILON);
        assert_abs_diff_eq!(a.cross(&b).dot(&a), 0.0, epsilon = 1e-5);
    }

    #[test]
    fn vector3_arithmetic_operations_work() {
        let v1 = Vector3::new(1.0, 2.0, 3.0);
        let v2 = Vector3::new(4.0, 5.0, 6.0);

        assert_eq!(&v1 + &v2, Vector3::new(5.0, 7.0, 9.0));
        assert_eq!(&v1 - &v2, Vector3::new(-3.0, -3.0, -3.0));
        assert_eq!(&v1 * 2.0, Vector3::new(2.0, 4.0, 6.0));
        assert_eq!(2.0 * &v1, Vector3::new(2.0, 4.0, 6.0));
        assert_eq!(&v2 / &v1, Vector3::new(4.0, 2.5, 2.0));
        assert_eq!(-&v1, Vector3::new(-1.0, -2.0, -3.0));
    }

    #[test]
    fn setting_vector3_components_leaves_others_unchanged() {
        let mut v = Vector3::new(1.0, 2.0, 3.0);
        v.set_y(-2.0);
        assert_eq!(v, Vector3::new(1.0, -2.0, 3.0));
        v.set_z(30.0);
        v.set_x(10.0);
        assert_eq!(v, Vector3::new(10.0, -2.0, 30.0));
    }

    #[test]
    fn vector3_aliases_match_canonical_getters() {
        let v = Vector3::new(0.5, -1.5, 2.5);
        #[cfg(feature = "texture_swizzles")]
        assert_eq!([v.u(), v.v(), v.w()], v.to_array());
        #[cfg(feature = "color_swizzles")]
        assert_eq!([v.r(), v.g(), v.b()], v.to_array());
    }

    #[test]
    fn vector3_indexing_works() {
        let mut v = Vector3::new(1.0, 2.0, 3.0);
        assert_eq!(v[2], 3.0);
        v[1] = 20.0;
        assert_eq!(v, Vector3::new(1.0, 20.0, 3.0));
    }

    #[test]
    #[should_panic]
    fn indexing_vector3_out_of_bounds_panics() {
        let v = Vector3::new(1.0, 2.0, 3.0);
        let _ = v[3];
    }

    #[test]
    fn storing_vector3_writes_three_components() {
        let mut buffer = [0.0; 4];
        buffer[3] = 7.0;
        Vector3::new(1.0, 2.0, 3.0).store(&mut buffer);
        assert_eq!(buffer, [1.0, 2.0, 3.0, 7.0]);
        assert_eq!(Vector3::from_slice(&buffer[..3]), Vector3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn storing_vector3_to_aligned_memory_works() {
        #[repr(C, align(16))]
        struct Aligned([f32; 4]);

        let mut buffer = Aligned([5.0; 4]);
        unsafe { Vector3::new(1.0, 2.0, 3.0).store_to_aligned_ptr(buffer.0.as_mut_ptr()) };
        assert_eq!(buffer.0, [1.0, 2.0, 3.0, 5.0]);
    }

    #[test]
    fn vector3_min_max_and_clamp_work() {
        let v = Vector3::new(-2.0, 0.5, 9.0);
        let lo = Vector3::same(-1.0);
        let hi = Vector3::same(1.0);
        assert_eq!(v.clamped(&lo, &hi), Vector3::new(-1.0, 0.5, 1.0));
        assert_eq!(v.component_min(&lo), Vector3::new(-2.0, -1.0, -1.0));
        assert_eq!(v.component_max(&hi), Vector3::new(1.0, 1.0, 9.0));
    }

    #[test]
    fn extending_and_compacting_vector3_works() {
        let v = Vector3::new(1.0, 2.0, 3.0);
        assert_eq!(v.extended(4.0), Vector4::new(1.0, 2.0, 3.0, 4.0));
        assert_eq!(v.compact(), Vector3C::new(1.0, 2.0, 3.0));
        assert_eq!(v.compact().aligned(), v);
    }

    #[test]
    fn vector3_runtime_swizzle_works() {
        let v = Vector3::new(1.0, 2.0, 3.0);
        assert_eq!(v.swizzled([2, 0, 1]), Vector3::new(3.0, 1.0, 2.0));
    }

    #[test]
    #[should_panic]
    fn vector3_runtime_swizzle_with_invalid_index_panics() {
        let _ = Vector3::new(1.0, 2.0, 3.0).swizzled([0, 1, 3]);
    }

    #[test]
    fn formatting_vector3_shows_only_components() {
        assert_eq!(
            format!("{:?}", Vector3::new(1.0, 2.0, 3.0)),
            "Vector3 { x: 1.0, y: 2.0, z: 3.0 }"
        );
    }
}
