//! `F32x4` and `F64x2` on the SSE/SSE2 float registers.

use crate::lanes::shuffle_mask;
use bytemuck::{Pod, Zeroable};
use std::{
    fmt,
    ops::{Add, BitAnd, BitOr, BitXor, Div, Mul, Neg, Sub},
};

#[cfg(target_arch = "x86")]
use std::arch::x86::*;
#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

/// Four `f32` lanes in an `__m128` register.
#[repr(transparent)]
#[derive(Clone, Copy)]
pub struct F32x4(__m128);

/// Two `f64` lanes in an `__m128d` register.
#[repr(transparent)]
#[derive(Clone, Copy)]
pub struct F64x2(__m128d);

impl F32x4 {
    /// All lanes zero.
    #[inline]
    pub fn zero() -> Self {
        Self(unsafe { _mm_setzero_ps() })
    }

    /// All lanes set to `value`.
    #[inline]
    pub fn splat(value: f32) -> Self {
        Self(unsafe { _mm_set1_ps(value) })
    }

    /// Lanes in x, y, z, w order.
    #[inline]
    pub fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self(unsafe { _mm_setr_ps(x, y, z, w) })
    }

    #[inline]
    pub fn from_array(lanes: [f32; 4]) -> Self {
        unsafe { Self::load(lanes.as_ptr()) }
    }

    #[inline]
    pub fn to_array(self) -> [f32; 4] {
        let mut lanes = [0.0; 4];
        unsafe { self.store(lanes.as_mut_ptr()) };
        lanes
    }

    /// The raw bit pattern of each lane.
    #[inline]
    pub fn to_bits(self) -> [u32; 4] {
        self.to_array().map(f32::to_bits)
    }

    /// Loads four packed `f32`s.
    ///
    /// # Safety
    /// `ptr` must be valid for reading four `f32`s.
    #[inline]
    pub unsafe fn load(ptr: *const f32) -> Self {
        Self(unsafe { _mm_loadu_ps(ptr) })
    }

    /// Loads four packed `f32`s from a 16-byte aligned address.
    ///
    /// # Safety
    /// `ptr` must be 16-byte aligned and valid for reading four `f32`s.
    #[inline]
    pub unsafe fn load_aligned(ptr: *const f32) -> Self {
        debug_assert!(ptr.addr().is_multiple_of(16), "pointer is not 16-byte aligned");
        Self(unsafe { _mm_load_ps(ptr) })
    }

    /// Loads two packed `f32`s into x and y, zeroing z and w.
    ///
    /// # Safety
    /// `ptr` must be valid for reading two `f32`s.
    #[inline]
    pub unsafe fn load2(ptr: *const f32) -> Self {
        Self(unsafe { _mm_castsi128_ps(_mm_loadl_epi64(ptr.cast())) })
    }

    /// Loads three packed `f32`s into x, y and z, zeroing w.
    ///
    /// # Safety
    /// `ptr` must be valid for reading three `f32`s.
    #[inline]
    pub unsafe fn load3(ptr: *const f32) -> Self {
        unsafe {
            let xy = Self::load2(ptr).0;
            let z = _mm_load_ss(ptr.add(2));
            Self(_mm_movelh_ps(xy, z))
        }
    }

    /// # Safety
    /// `ptr` must be valid for writing four `f32`s.
    #[inline]
    pub unsafe fn store(self, ptr: *mut f32) {
        unsafe { _mm_storeu_ps(ptr, self.0) };
    }

    /// # Safety
    /// `ptr` must be 16-byte aligned and valid for writing four `f32`s.
    #[inline]
    pub unsafe fn store_aligned(self, ptr: *mut f32) {
        debug_assert!(ptr.addr().is_multiple_of(16), "pointer is not 16-byte aligned");
        unsafe { _mm_store_ps(ptr, self.0) };
    }

    /// Writes x and y only.
    ///
    /// # Safety
    /// `ptr` must be valid for writing two `f32`s.
    #[inline]
    pub unsafe fn store2(self, ptr: *mut f32) {
        unsafe { _mm_storel_epi64(ptr.cast(), _mm_castps_si128(self.0)) };
    }

    /// Writes x, y and z only.
    ///
    /// # Safety
    /// `ptr` must be valid for writing three `f32`s.
    #[inline]
    pub unsafe fn store3(self, ptr: *mut f32) {
        unsafe {
            self.store2(ptr);
            _mm_store_ss(ptr.add(2), _mm_movehl_ps(self.0, self.0));
        }
    }

    #[inline]
    pub fn x(self) -> f32 {
        unsafe { _mm_cvtss_f32(self.0) }
    }

    #[inline]
    pub fn y(self) -> f32 {
        self.shuffle::<{ shuffle_mask(1, 1, 1, 1) }>().x()
    }

    #[inline]
    pub fn z(self) -> f32 {
        unsafe { _mm_cvtss_f32(_mm_movehl_ps(self.0, self.0)) }
    }

    #[inline]
    pub fn w(self) -> f32 {
        self.shuffle::<{ shuffle_mask(3, 3, 3, 3) }>().x()
    }

    #[inline]
    pub fn with_x(self, value: f32) -> Self {
        Self(unsafe { _mm_move_ss(self.0, _mm_set_ss(value)) })
    }

    #[inline]
    pub fn with_y(self, value: f32) -> Self {
        self.with_lane(value, Self::lane_mask(1))
    }

    #[inline]
    pub fn with_z(self, value: f32) -> Self {
        self.with_lane(value, Self::lane_mask(2))
    }

    #[inline]
    pub fn with_w(self, value: f32) -> Self {
        self.with_lane(value, Self::lane_mask(3))
    }

    #[inline]
    fn lane_mask(lane: usize) -> Self {
        let mut bits = [0; 4];
        bits[lane] = -1;
        Self::mask_from_bits(bits)
    }

    #[inline]
    fn mask_from_bits(bits: [i32; 4]) -> Self {
        Self(unsafe { _mm_castsi128_ps(_mm_setr_epi32(bits[0], bits[1], bits[2], bits[3])) })
    }

    #[inline]
    fn with_lane(self, value: f32, mask: Self) -> Self {
        Self::select(mask, Self::splat(value), self)
    }

    /// Lane-wise `a < b ? a : b`.
    #[inline]
    pub fn min(self, other: Self) -> Self {
        Self(unsafe { _mm_min_ps(self.0, other.0) })
    }

    /// Lane-wise `a > b ? a : b`.
    #[inline]
    pub fn max(self, other: Self) -> Self {
        Self(unsafe { _mm_max_ps(self.0, other.0) })
    }

    #[inline]
    pub fn abs(self) -> Self {
        Self(unsafe { _mm_andnot_ps(_mm_set1_ps(-0.0), self.0) })
    }

    #[inline]
    pub fn sqrt(self) -> Self {
        Self(unsafe { _mm_sqrt_ps(self.0) })
    }

    #[inline]
    pub fn cmp_eq(self, other: Self) -> Self {
        Self(unsafe { _mm_cmpeq_ps(self.0, other.0) })
    }

    /// True for unordered lanes.
    #[inline]
    pub fn cmp_ne(self, other: Self) -> Self {
        Self(unsafe { _mm_cmpneq_ps(self.0, other.0) })
    }

    #[inline]
    pub fn cmp_lt(self, other: Self) -> Self {
        Self(unsafe { _mm_cmplt_ps(self.0, other.0) })
    }

    #[inline]
    pub fn cmp_le(self, other: Self) -> Self {
        Self(unsafe { _mm_cmple_ps(self.0, other.0) })
    }

    #[inline]
    pub fn cmp_gt(self, other: Self) -> Self {
        Self(unsafe { _mm_cmpgt_ps(self.0, other.0) })
    }

    #[inline]
    pub fn cmp_ge(self, other: Self) -> Self {
        Self(unsafe { _mm_cmpge_ps(self.0, other.0) })
    }

    /// Takes each lane from `if_true` where `mask` is set and from
    /// `if_false` elsewhere.
    #[inline]
    pub fn select(mask: Self, if_true: Self, if_false: Self) -> Self {
        Self(unsafe {
            _mm_or_ps(
                _mm_and_ps(mask.0, if_true.0),
                _mm_andnot_ps(mask.0, if_false.0),
            )
        })
    }

    /// The sign bit of each lane, lane 0 in bit 0.
    #[inline]
    pub fn move_mask(self) -> u32 {
        unsafe { _mm_movemask_ps(self.0) as u32 }
    }

    /// Zeroes z and w.
    #[inline]
    pub fn keep_xy(self) -> Self {
        Self(unsafe { _mm_movelh_ps(self.0, _mm_setzero_ps()) })
    }

    /// Zeroes w.
    #[inline]
    pub fn keep_xyz(self) -> Self {
        self & Self::mask_from_bits([-1, -1, -1, 0])
    }

    #[inline]
    pub fn shuffle<const MASK: i32>(self) -> Self {
        Self(unsafe { _mm_shuffle_ps::<MASK>(self.0, self.0) })
    }

    /// Lanes 0 and 1 come from `self`, lanes 2 and 3 from `other`.
    #[inline]
    pub fn shuffle_with<const MASK: i32>(self, other: Self) -> Self {
        Self(unsafe { _mm_shuffle_ps::<MASK>(self.0, other.0) })
    }

    /// `(s0, o0, s1, o1)`
    #[inline]
    pub fn unpack_lo(self, other: Self) -> Self {
        Self(unsafe { _mm_unpacklo_ps(self.0, other.0) })
    }

    /// `(s2, o2, s3, o3)`
    #[inline]
    pub fn unpack_hi(self, other: Self) -> Self {
        Self(unsafe { _mm_unpackhi_ps(self.0, other.0) })
    }

    /// `(s0, s1, o0, o1)`
    #[inline]
    pub fn move_lh(self, other: Self) -> Self {
        Self(unsafe { _mm_movelh_ps(self.0, other.0) })
    }

    /// `(o2, o3, s2, s3)`
    #[inline]
    pub fn move_hl(self, other: Self) -> Self {
        Self(unsafe { _mm_movehl_ps(self.0, other.0) })
    }

    /// `(x + z) + (y + w)`
    #[inline]
    pub fn horizontal_sum(self) -> f32 {
        let pairs = self + self.move_hl(self);
        (pairs + pairs.shuffle::<{ shuffle_mask(1, 1, 1, 1) }>()).x()
    }
}

impl Default for F32x4 {
    fn default() -> Self {
        Self::zero()
    }
}

impl From<__m128> for F32x4 {
    #[inline]
    fn from(register: __m128) -> Self {
        Self(register)
    }
}

impl From<F32x4> for __m128 {
    #[inline]
    fn from(lanes: F32x4) -> Self {
        lanes.0
    }
}

impl fmt::Debug for F32x4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("F32x4").field(&self.to_array()).finish()
    }
}

// SAFETY: `__m128` is plain data with no padding or invalid bit patterns.
unsafe impl Zeroable for F32x4 {}
unsafe impl Pod for F32x4 {}

impl F64x2 {
    #[inline]
    pub fn zero() -> Self {
        Self(unsafe { _mm_setzero_pd() })
    }

    #[inline]
    pub fn splat(value: f64) -> Self {
        Self(unsafe { _mm_set1_pd(value) })
    }

    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self(unsafe { _mm_setr_pd(x, y) })
    }

    #[inline]
    pub fn from_array(lanes: [f64; 2]) -> Self {
        unsafe { Self::load(lanes.as_ptr()) }
    }

    #[inline]
    pub fn to_array(self) -> [f64; 2] {
        let mut lanes = [0.0; 2];
        unsafe { self.store(lanes.as_mut_ptr()) };
        lanes
    }

    #[inline]
    pub fn to_bits(self) -> [u64; 2] {
        self.to_array().map(f64::to_bits)
    }

    /// # Safety
    /// `ptr` must be valid for reading two `f64`s.
    #[inline]
    pub unsafe fn load(ptr: *const f64) -> Self {
        Self(unsafe { _mm_loadu_pd(ptr) })
    }

    /// # Safety
    /// `ptr` must be 16-byte aligned and valid for reading two `f64`s.
    #[inline]
    pub unsafe fn load_aligned(ptr: *const f64) -> Self {
        debug_assert!(ptr.addr().is_multiple_of(16), "pointer is not 16-byte aligned");
        Self(unsafe { _mm_load_pd(ptr) })
    }

    /// # Safety
    /// `ptr` must be valid for writing two `f64`s.
    #[inline]
    pub unsafe fn store(self, ptr: *mut f64) {
        unsafe { _mm_storeu_pd(ptr, self.0) };
    }

    /// # Safety
    /// `ptr` must be 16-byte aligned and valid for writing two `f64`s.
    #[inline]
    pub unsafe fn store_aligned(self, ptr: *mut f64) {
        debug_assert!(ptr.addr().is_multiple_of(16), "pointer is not 16-byte aligned");
        unsafe { _mm_store_pd(ptr, self.0) };
    }

    #[inline]
    pub fn x(self) -> f64 {
        unsafe { _mm_cvtsd_f64(self.0) }
    }

    #[inline]
    pub fn y(self) -> f64 {
        unsafe { _mm_cvtsd_f64(_mm_unpackhi_pd(self.0, self.0)) }
    }

    #[inline]
    pub fn with_x(self, value: f64) -> Self {
        Self(unsafe { _mm_move_sd(self.0, _mm_set_sd(value)) })
    }

    #[inline]
    pub fn with_y(self, value: f64) -> Self {
        Self(unsafe { _mm_unpacklo_pd(self.0, _mm_set_sd(value)) })
    }

    #[inline]
    pub fn min(self, other: Self) -> Self {
        Self(unsafe { _mm_min_pd(self.0, other.0) })
    }

    #[inline]
    pub fn max(self, other: Self) -> Self {
        Self(unsafe { _mm_max_pd(self.0, other.0) })
    }

    #[inline]
    pub fn abs(self) -> Self {
        Self(unsafe { _mm_andnot_pd(_mm_set1_pd(-0.0), self.0) })
    }

    #[inline]
    pub fn sqrt(self) -> Self {
        Self(unsafe { _mm_sqrt_pd(self.0) })
    }

    #[inline]
    pub fn cmp_eq(self, other: Self) -> Self {
        Self(unsafe { _mm_cmpeq_pd(self.0, other.0) })
    }

    #[inline]
    pub fn cmp_ne(self, other: Self) -> Self {
        Self(unsafe { _mm_cmpneq_pd(self.0, other.0) })
    }

    #[inline]
    pub fn cmp_lt(self, other: Self) -> Self {
        Self(unsafe { _mm_cmplt_pd(self.0, other.0) })
    }

    #[inline]
    pub fn cmp_le(self, other: Self) -> Self {
        Self(unsafe { _mm_cmple_pd(self.0, other.0) })
    }

    #[inline]
    pub fn cmp_gt(self, other: Self) -> Self {
        Self(unsafe { _mm_cmpgt_pd(self.0, other.0) })
    }

    #[inline]
    pub fn cmp_ge(self, other: Self) -> Self {
        Self(unsafe { _mm_cmpge_pd(self.0, other.0) })
    }

    #[inline]
    pub fn select(mask: Self, if_true: Self, if_false: Self) -> Self {
        Self(unsafe {
            _mm_or_pd(
                _mm_and_pd(mask.0, if_true.0),
                _mm_andnot_pd(mask.0, if_false.0),
            )
        })
    }

    #[inline]
    pub fn move_mask(self) -> u32 {
        unsafe { _mm_movemask_pd(self.0) as u32 }
    }

    #[inline]
    pub fn shuffle<const MASK: i32>(self) -> Self {
        Self(unsafe { _mm_shuffle_pd::<MASK>(self.0, self.0) })
    }

    /// Lane 0 comes from `self`, lane 1 from `other`.
    #[inline]
    pub fn shuffle_with<const MASK: i32>(self, other: Self) -> Self {
        Self(unsafe { _mm_shuffle_pd::<MASK>(self.0, other.0) })
    }

    #[inline]
    pub fn horizontal_sum(self) -> f64 {
        self.x() + self.y()
    }
}

impl Default for F64x2 {
    fn default() -> Self {
        Self::zero()
    }
}

impl From<__m128d> for F64x2 {
    #[inline]
    fn from(register: __m128d) -> Self {
        Self(register)
    }
}

impl From<F64x2> for __m128d {
    #[inline]
    fn from(lanes: F64x2) -> Self {
        lanes.0
    }
}

impl fmt::Debug for F64x2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("F64x2").field(&self.to_array()).finish()
    }
}

// SAFETY: `__m128d` is plain data with no padding or invalid bit patterns.
unsafe impl Zeroable for F64x2 {}
unsafe impl Pod for F64x2 {}

macro_rules! impl_register_binop {
    ($t:ty, $op:ident, $method:ident, $intrinsic:ident) => {
        impl $op for $t {
            type Output = Self;

            #[inline]
            fn $method(self, rhs: Self) -> Self {
                Self(unsafe { $intrinsic(self.0, rhs.0) })
            }
        }
    };
}

impl_register_binop!(F32x4, Add, add, _mm_add_ps);
impl_register_binop!(F32x4, Sub, sub, _mm_sub_ps);
impl_register_binop!(F32x4, Mul, mul, _mm_mul_ps);
impl_register_binop!(F32x4, Div, div, _mm_div_ps);
impl_register_binop!(F32x4, BitAnd, bitand, _mm_and_ps);
impl_register_binop!(F32x4, BitOr, bitor, _mm_or_ps);
impl_register_binop!(F32x4, BitXor, bitxor, _mm_xor_ps);

impl_register_binop!(F64x2, Add, add, _mm_add_pd);
impl_register_binop!(F64x2, Sub, sub, _mm_sub_pd);
impl_register_binop!(F64x2, Mul, mul, _mm_mul_pd);
impl_register_binop!(F64x2, Div, div, _mm_div_pd);
impl_register_binop!(F64x2, BitAnd, bitand, _mm_and_pd);
impl_register_binop!(F64x2, BitOr, bitor, _mm_or_pd);
impl_register_binop!(F64x2, BitXor, bitxor, _mm_xor_pd);

impl Neg for F32x4 {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        self ^ Self::splat(-0.0)
    }
}

impl Neg for F64x2 {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        self ^ Self::splat(-0.0)
    }
}
