//! 4-dimensional vectors.

use super::{Vector4C, impl_float_vector, impl_simd_vector};
use crate::lanes::F32x4;
use bytemuck::{Pod, Zeroable};

/// A 4-dimensional vector.
///
/// The components are stored in a 128-bit SIMD register for efficient
/// computation. That leads to an alignment of 16 bytes. For padding-free
/// storage together with smaller types, prefer the 4-byte aligned
/// [`Vector4C`].
#[repr(transparent)]
#[derive(Clone, Copy, Zeroable, Pod)]
pub struct Vector4 {
    lanes: F32x4,
}

impl Vector4 {
    const ACTIVE_MASK: u32 = 0b1111;

    /// Creates a new vector with the given components.
    #[inline]
    pub fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self::from_lanes(F32x4::new(x, y, z, w))
    }

    /// # Safety
    /// `ptr` must be valid for reading four `f32`s.
    #[inline]
    pub unsafe fn from_ptr(ptr: *const f32) -> Self {
        Self::from_lanes(unsafe { F32x4::load(ptr) })
    }

    /// # Safety
    /// `ptr` must be valid for writing four `f32`s.
    #[inline]
    pub unsafe fn store_to_ptr(&self, ptr: *mut f32) {
        unsafe { self.lanes.store(ptr) };
    }

    /// # Safety
    /// `ptr` must be 16-byte aligned and valid for writing four `f32`s.
    #[inline]
    pub unsafe fn store_to_aligned_ptr(&self, ptr: *mut f32) {
        unsafe { self.lanes.store_aligned(ptr) };
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

    /// The w-component.
    #[inline]
    pub fn w(&self) -> f32 {
        self.lanes.w()
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

    #[inline]
    pub fn set_w(&mut self, w: f32) {
        self.lanes = self.lanes.with_w(w);
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

    #[cfg(feature = "color_swizzles")]
    #[inline]
    pub fn a(&self) -> f32 {
        self.w()
    }

    /// Converts the vector to the 4-byte aligned compact representation.
    #[inline]
    pub fn compact(&self) -> Vector4C {
        Vector4C::new(self.x(), self.y(), self.z(), self.w())
    }

    #[inline]
    fn active_lanes(&self) -> F32x4 {
        self.lanes
    }
}

impl_simd_vector!(Vector4, f32, F32x4, 4, 4, [x, y, z, w]);
impl_float_vector!(Vector4, f32);
