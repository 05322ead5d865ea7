//! `I32x4` and `U32x4` on the SSE2 integer register.
//!
//! Both types share `__m128i`; they differ only in how min, max, abs and the
//! ordering comparisons read the lanes.

use super::{sse2, tier};
use crate::lanes::shuffle_mask;
use bytemuck::{Pod, Zeroable};
use std::{
    fmt,
    ops::{Add, BitAnd, BitOr, BitXor, Mul, Neg, Sub},
};

#[cfg(target_arch = "x86")]
use std::arch::x86::*;
#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

/// Four `i32` lanes in an `__m128i` register.
#[repr(transparent)]
#[derive(Clone, Copy)]
pub struct I32x4(__m128i);

/// Four `u32` lanes in an `__m128i` register.
#[repr(transparent)]
#[derive(Clone, Copy)]
pub struct U32x4(__m128i);

macro_rules! impl_int_lanes {
    ($t:ident, $scalar:ty) => {
        impl $t {
            #[inline]
            pub fn zero() -> Self {
                Self(unsafe { _mm_setzero_si128() })
            }

            #[inline]
            pub fn splat(value: $scalar) -> Self {
                Self(unsafe { _mm_set1_epi32(value as i32) })
            }

            #[inline]
            pub fn new(x: $scalar, y: $scalar, z: $scalar, w: $scalar) -> Self {
                Self(unsafe { _mm_setr_epi32(x as i32, y as i32, z as i32, w as i32) })
            }

            #[inline]
            pub fn from_array(lanes: [$scalar; 4]) -> Self {
                unsafe { Self::load(lanes.as_ptr()) }
            }

            #[inline]
            pub fn to_array(self) -> [$scalar; 4] {
                let mut lanes = [0; 4];
                unsafe { self.store(lanes.as_mut_ptr()) };
                lanes
            }

            /// # Safety
            /// `ptr` must be valid for reading four lanes.
            #[inline]
            pub unsafe fn load(ptr: *const $scalar) -> Self {
                Self(unsafe { _mm_loadu_si128(ptr.cast()) })
            }

            /// # Safety
            /// `ptr` must be 16-byte aligned and valid for reading four lanes.
            #[inline]
            pub unsafe fn load_aligned(ptr: *const $scalar) -> Self {
                debug_assert!(ptr.addr().is_multiple_of(16), "pointer is not 16-byte aligned");
                Self(unsafe { _mm_load_si128(ptr.cast()) })
            }

            /// Loads x and y, zeroing z and w.
            ///
            /// # Safety
            /// `ptr` must be valid for reading two lanes.
            #[inline]
            pub unsafe fn load2(ptr: *const $scalar) -> Self {
                Self(unsafe { _mm_loadl_epi64(ptr.cast()) })
            }

            /// # Safety
            /// `ptr` must be valid for writing four lanes.
            #[inline]
            pub unsafe fn store(self, ptr: *mut $scalar) {
                unsafe { _mm_storeu_si128(ptr.cast(), self.0) };
            }

            /// # Safety
            /// `ptr` must be 16-byte aligned and valid for writing four lanes.
            #[inline]
            pub unsafe fn store_aligned(self, ptr: *mut $scalar) {
                debug_assert!(ptr.addr().is_multiple_of(16), "pointer is not 16-byte aligned");
                unsafe { _mm_store_si128(ptr.cast(), self.0) };
            }

            /// Writes x and y only.
            ///
            /// # Safety
            /// `ptr` must be valid for writing two lanes.
            #[inline]
            pub unsafe fn store2(self, ptr: *mut $scalar) {
                unsafe { _mm_storel_epi64(ptr.cast(), self.0) };
            }

            #[inline]
            pub fn x(self) -> $scalar {
                unsafe { _mm_cvtsi128_si32(self.0) as $scalar }
            }

            #[inline]
            pub fn y(self) -> $scalar {
                self.shuffle::<{ shuffle_mask(1, 1, 1, 1) }>().x()
            }

            #[inline]
            pub fn with_x(self, value: $scalar) -> Self {
                Self(unsafe { tier::insert_x(self.0, value as i32) })
            }

            #[inline]
            pub fn with_y(self, value: $scalar) -> Self {
                Self(unsafe { tier::insert_y(self.0, value as i32) })
            }

            #[inline]
            pub fn cmp_eq(self, other: Self) -> Self {
                Self(unsafe { _mm_cmpeq_epi32(self.0, other.0) })
            }

            #[inline]
            pub fn cmp_ne(self, other: Self) -> Self {
                self.cmp_eq(other).not()
            }

            #[inline]
            pub fn cmp_le(self, other: Self) -> Self {
                self.cmp_gt(other).not()
            }

            #[inline]
            pub fn cmp_ge(self, other: Self) -> Self {
                self.cmp_lt(other).not()
            }

            #[inline]
            fn not(self) -> Self {
                Self(unsafe { _mm_xor_si128(self.0, _mm_set1_epi32(-1)) })
            }

            #[inline]
            pub fn select(mask: Self, if_true: Self, if_false: Self) -> Self {
                Self(unsafe {
                    _mm_or_si128(
                        _mm_and_si128(mask.0, if_true.0),
                        _mm_andnot_si128(mask.0, if_false.0),
                    )
                })
            }

            /// The top bit of each lane, lane 0 in bit 0.
            #[inline]
            pub fn move_mask(self) -> u32 {
                unsafe { _mm_movemask_ps(_mm_castsi128_ps(self.0)) as u32 }
            }

            /// Zeroes z and w.
            #[inline]
            pub fn keep_xy(self) -> Self {
                Self(unsafe { _mm_move_epi64(self.0) })
            }

            #[inline]
            pub fn shuffle<const MASK: i32>(self) -> Self {
                Self(unsafe { _mm_shuffle_epi32::<MASK>(self.0) })
            }

            /// Wrapping `(x + z) + (y + w)`.
            #[inline]
            pub fn horizontal_sum(self) -> $scalar {
                let pairs = self + self.shuffle::<{ shuffle_mask(2, 3, 0, 1) }>();
                (pairs + pairs.shuffle::<{ shuffle_mask(1, 0, 3, 2) }>()).x()
            }
        }

        impl Default for $t {
            fn default() -> Self {
                Self::zero()
            }
        }

        impl From<__m128i> for $t {
            #[inline]
            fn from(register: __m128i) -> Self {
                Self(register)
            }
        }

        impl From<$t> for __m128i {
            #[inline]
            fn from(lanes: $t) -> Self {
                lanes.0
            }
        }

        impl fmt::Debug for $t {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_tuple(stringify!($t))
                    .field(&self.to_array())
                    .finish()
            }
        }

        // SAFETY: `__m128i` is plain data with no padding or invalid bit patterns.
        unsafe impl Zeroable for $t {}
        unsafe impl Pod for $t {}

        impl Add for $t {
            type Output = Self;

            #[inline]
            fn add(self, rhs: Self) -> Self {
                Self(unsafe { _mm_add_epi32(self.0, rhs.0) })
            }
        }

        impl Sub for $t {
            type Output = Self;

            #[inline]
            fn sub(self, rhs: Self) -> Self {
                Self(unsafe { _mm_sub_epi32(self.0, rhs.0) })
            }
        }

        impl Mul for $t {
            type Output = Self;

            /// Keeps the low 32 bits of each product.
            #[inline]
            fn mul(self, rhs: Self) -> Self {
                Self(unsafe { tier::mullo(self.0, rhs.0) })
            }
        }

        impl Neg for $t {
            type Output = Self;

            #[inline]
            fn neg(self) -> Self {
                Self::zero() - self
            }
        }

        impl BitAnd for $t {
            type Output = Self;

            #[inline]
            fn bitand(self, rhs: Self) -> Self {
                Self(unsafe { _mm_and_si128(self.0, rhs.0) })
            }
        }

        impl BitOr for $t {
            type Output = Self;

            #[inline]
            fn bitor(self, rhs: Self) -> Self {
                Self(unsafe { _mm_or_si128(self.0, rhs.0) })
            }
        }

        impl BitXor for $t {
            type Output = Self;

            #[inline]
            fn bitxor(self, rhs: Self) -> Self {
                Self(unsafe { _mm_xor_si128(self.0, rhs.0) })
            }
        }
    };
}

impl_int_lanes!(I32x4, i32);
impl_int_lanes!(U32x4, u32);

impl I32x4 {
    #[inline]
    pub fn min(self, other: Self) -> Self {
        Self(unsafe { tier::min_i32(self.0, other.0) })
    }

    #[inline]
    pub fn max(self, other: Self) -> Self {
        Self(unsafe { tier::max_i32(self.0, other.0) })
    }

    /// `abs(i32::MIN)` wraps to `i32::MIN`.
    #[inline]
    pub fn abs(self) -> Self {
        Self(unsafe { tier::abs_i32(self.0) })
    }

    #[inline]
    pub fn cmp_lt(self, other: Self) -> Self {
        Self(unsafe { _mm_cmplt_epi32(self.0, other.0) })
    }

    #[inline]
    pub fn cmp_gt(self, other: Self) -> Self {
        Self(unsafe { _mm_cmpgt_epi32(self.0, other.0) })
    }
}

impl U32x4 {
    #[inline]
    pub fn min(self, other: Self) -> Self {
        Self(unsafe { tier::min_u32(self.0, other.0) })
    }

    #[inline]
    pub fn max(self, other: Self) -> Self {
        Self(unsafe { tier::max_u32(self.0, other.0) })
    }

    /// Identity.
    #[inline]
    pub fn abs(self) -> Self {
        self
    }

    #[inline]
    pub fn cmp_lt(self, other: Self) -> Self {
        Self(unsafe { sse2::cmpgt_u32(other.0, self.0) })
    }

    #[inline]
    pub fn cmp_gt(self, other: Self) -> Self {
        Self(unsafe { sse2::cmpgt_u32(self.0, other.0) })
    }
}
