//! SSE2 fallbacks for the 32-bit integer operations introduced by SSE4.1.
//!
//! Single-lane insert and 32-bit multiply round-trip through scalar memory.
//! Min, max and abs are compare-and-blend sequences.

#[cfg(target_arch = "x86")]
use std::arch::x86::*;
#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

#[inline]
unsafe fn spill(a: __m128i) -> [i32; 4] {
    let mut lanes = [0; 4];
    unsafe { _mm_storeu_si128(lanes.as_mut_ptr().cast(), a) };
    lanes
}

#[inline]
unsafe fn reload(lanes: [i32; 4]) -> __m128i {
    unsafe { _mm_loadu_si128(lanes.as_ptr().cast()) }
}

#[inline]
unsafe fn blend(mask: __m128i, if_true: __m128i, if_false: __m128i) -> __m128i {
    unsafe {
        _mm_or_si128(
            _mm_and_si128(mask, if_true),
            _mm_andnot_si128(mask, if_false),
        )
    }
}

#[inline]
unsafe fn flip_sign_bits(a: __m128i) -> __m128i {
    unsafe { _mm_xor_si128(a, _mm_set1_epi32(i32::MIN)) }
}

#[inline]
pub(super) unsafe fn insert_x(a: __m128i, value: i32) -> __m128i {
    unsafe {
        let mut lanes = spill(a);
        lanes[0] = value;
        reload(lanes)
    }
}

#[inline]
pub(super) unsafe fn insert_y(a: __m128i, value: i32) -> __m128i {
    unsafe {
        let mut lanes = spill(a);
        lanes[1] = value;
        reload(lanes)
    }
}

#[inline]
pub(super) unsafe fn mullo(a: __m128i, b: __m128i) -> __m128i {
    unsafe {
        let (a, b) = (spill(a), spill(b));
        reload([
            a[0].wrapping_mul(b[0]),
            a[1].wrapping_mul(b[1]),
            a[2].wrapping_mul(b[2]),
            a[3].wrapping_mul(b[3]),
        ])
    }
}

#[inline]
pub(super) unsafe fn min_i32(a: __m128i, b: __m128i) -> __m128i {
    unsafe { blend(_mm_cmplt_epi32(a, b), a, b) }
}

#[inline]
pub(super) unsafe fn max_i32(a: __m128i, b: __m128i) -> __m128i {
    unsafe { blend(_mm_cmpgt_epi32(a, b), a, b) }
}

/// `abs(i32::MIN)` wraps to `i32::MIN`, like `pabsd`.
#[inline]
pub(super) unsafe fn abs_i32(a: __m128i) -> __m128i {
    unsafe {
        let sign = _mm_srai_epi32(a, 31);
        _mm_sub_epi32(_mm_xor_si128(a, sign), sign)
    }
}

#[inline]
pub(super) unsafe fn min_u32(a: __m128i, b: __m128i) -> __m128i {
    unsafe { blend(_mm_cmplt_epi32(flip_sign_bits(a), flip_sign_bits(b)), a, b) }
}

#[inline]
pub(super) unsafe fn max_u32(a: __m128i, b: __m128i) -> __m128i {
    unsafe { blend(_mm_cmpgt_epi32(flip_sign_bits(a), flip_sign_bits(b)), a, b) }
}

/// Unsigned `a > b` mask; SSE2 only compares signed lanes.
#[inline]
pub(super) unsafe fn cmpgt_u32(a: __m128i, b: __m128i) -> __m128i {
    unsafe { _mm_cmpgt_epi32(flip_sign_bits(a), flip_sign_bits(b)) }
}
