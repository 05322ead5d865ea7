//! SSE4.1 implementations of the 32-bit integer lane operations.

#[cfg(target_arch = "x86")]
use std::arch::x86::*;
#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

#[inline]
#[target_feature(enable = "sse4.1")]
pub(super) unsafe fn insert_x(a: __m128i, value: i32) -> __m128i {
    unsafe { _mm_insert_epi32(a, value, 0) }
}

#[inline]
#[target_feature(enable = "sse4.1")]
pub(super) unsafe fn insert_y(a: __m128i, value: i32) -> __m128i {
    unsafe { _mm_insert_epi32(a, value, 1) }
}

#[inline]
#[target_feature(enable = "sse4.1")]
pub(super) unsafe fn mullo(a: __m128i, b: __m128i) -> __m128i {
    unsafe { _mm_mullo_epi32(a, b) }
}

#[inline]
#[target_feature(enable = "sse4.1")]
pub(super) unsafe fn min_i32(a: __m128i, b: __m128i) -> __m128i {
    unsafe { _mm_min_epi32(a, b) }
}

#[inline]
#[target_feature(enable = "sse4.1")]
pub(super) unsafe fn max_i32(a: __m128i, b: __m128i) -> __m128i {
    unsafe { _mm_max_epi32(a, b) }
}

/// `abs(i32::MIN)` wraps to `i32::MIN`.
#[inline]
#[target_feature(enable = "sse4.1")]
pub(super) unsafe fn abs_i32(a: __m128i) -> __m128i {
    unsafe { _mm_abs_epi32(a) }
}

#[inline]
#[target_feature(enable = "sse4.1")]
pub(super) unsafe fn min_u32(a: __m128i, b: __m128i) -> __m128i {
    unsafe { _mm_min_epu32(a, b) }
}

#[inline]
#[target_feature(enable = "sse4.1")]
pub(super) unsafe fn max_u32(a: __m128i, b: __m128i) -> __m128i {
    unsafe { _mm_max_epu32(a, b) }
}
