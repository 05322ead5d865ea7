//! 128-bit lane types.
//!
//! Every vector and matrix type in the crate is built on one of four lane
//! types:
//!
//! - [`F32x4`]: four `f32` lanes.
//! - [`F64x2`]: two `f64` lanes.
//! - [`I32x4`]: four `i32` lanes.
//! - [`U32x4`]: four `u32` lanes.
//!
//! On x86 and `x86_64` with SSE2 the lanes live in the native `__m128`,
//! `__m128d` and `__m128i` registers. Integer operations that SSE2 lacks
//! (single-lane insert, 32-bit multiply, 32-bit min/max/abs) have two
//! implementations: the SSE4.1 instructions, selected when the crate is
//! compiled with `target_feature = "sse4.1"`, and an SSE2 fallback that goes
//! through scalar memory or compare-and-blend sequences. Both are always
//! compiled so they can be tested against each other.
//!
//! Every other target uses a portable scalar backend producing bit-identical
//! results.
//!
//! # Shuffles
//!
//! Shuffles take their lane selection as a const generic `MASK`, encoded like
//! the `_MM_SHUFFLE` macro: two bits per destination lane, lowest lane in the
//! lowest bits. Use [`shuffle_mask`] for the 4-lane types and
//! [`shuffle_mask_f64`] for [`F64x2`].
//!
//! # Masks
//!
//! Comparisons return a lane value of the same type whose lanes are either
//! all-bits-set (true) or all-bits-clear (false). For float lanes an all-set
//! lane reads as NaN, so masks should only be consumed by `select`,
//! `move_mask` or the bitwise operations.

cfg_if::cfg_if! {
    if #[cfg(all(
        any(target_arch = "x86", target_arch = "x86_64"),
        target_feature = "sse2"
    ))] {
        mod x86;
        pub use x86::{F32x4, F64x2, I32x4, U32x4};

        // Built in tests so it can be checked against the SSE lanes.
        #[cfg(test)]
        #[allow(dead_code)]
        mod scalar;
    } else {
        mod scalar;
        pub use scalar::{F32x4, F64x2, I32x4, U32x4};
    }
}

/// The lane backend the crate was compiled with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Backend {
    /// x86 SSE2 with the SSE4.1 integer instructions.
    Sse41,
    /// x86 SSE2 with the scalar-memory integer fallback.
    Sse2,
    /// Portable scalar lanes.
    Scalar,
}

impl Backend {
    /// Returns the backend selected at compile time.
    pub const fn current() -> Self {
        cfg_if::cfg_if! {
            if #[cfg(all(
                any(target_arch = "x86", target_arch = "x86_64"),
                target_feature = "sse2",
                target_feature = "sse4.1"
            ))] {
                Self::Sse41
            } else if #[cfg(all(
                any(target_arch = "x86", target_arch = "x86_64"),
                target_feature = "sse2"
            ))] {
                Self::Sse2
            } else {
                Self::Scalar
            }
        }
    }

    /// A short human-readable name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sse41 => "sse4.1",
            Self::Sse2 => "sse2",
            Self::Scalar => "scalar",
        }
    }
}

impl std::fmt::Display for Backend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Encodes a 4-lane shuffle where destination lane `n` takes source lane
/// `ln`.
#[inline]
pub const fn shuffle_mask(l0: usize, l1: usize, l2: usize, l3: usize) -> i32 {
    assert!(l0 < 4 && l1 < 4 && l2 < 4 && l3 < 4);
    (l0 | (l1 << 2) | (l2 << 4) | (l3 << 6)) as i32
}

/// Encodes a 2-lane shuffle for [`F64x2`] where destination lane `n` takes
/// source lane `ln`.
#[inline]
pub const fn shuffle_mask_f64(l0: usize, l1: usize) -> i32 {
    assert!(l0 < 2 && l1 < 2);
    (l0 | (l1 << 1)) as i32
}

/// Decodes source lane for destination lane `lane` from a 4-lane shuffle
/// mask.
#[inline]
#[allow(dead_code)]
pub(crate) const fn shuffle_source(mask: i32, lane: usize) -> usize {
    ((mask as usize) >> (2 * lane)) & 0b11
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shuffle_mask_matches_mm_shuffle_encoding() {
        assert_eq!(shuffle_mask(0, 1, 2, 3), 0b11_10_01_00);
        assert_eq!(shuffle_mask(3, 2, 1, 0), 0b00_01_10_11);
        assert_eq!(shuffle_mask(1, 2, 0, 3), 0b11_00_10_01);
        assert_eq!(shuffle_mask_f64(1, 0), 0b01);
    }

    #[test]
    fn shuffle_source_inverts_shuffle_mask() {
        let mask = shuffle_mask(2, 0, 3, 1);
        assert_eq!(shuffle_source(mask, 0), 2);
        assert_eq!(shuffle_source(mask, 1), 0);
        assert_eq!(shuffle_source(mask, 2), 3);
        assert_eq!(shuffle_source(mask, 3), 1);
    }

    #[test]
    fn shuffling_f32_lanes_reorders_them() {
        let a = F32x4::new(1.0, 2.0, 3.0, 4.0);
        let b = a.shuffle::<{ shuffle_mask(3, 3, 0, 1) }>();
        assert_eq!(b.to_array(), [4.0, 4.0, 1.0, 2.0]);
    }

    #[test]
    fn shuffling_with_two_sources_takes_low_half_from_first() {
        let a = F32x4::new(1.0, 2.0, 3.0, 4.0);
        let b = F32x4::new(5.0, 6.0, 7.0, 8.0);
        let c = a.shuffle_with::<{ shuffle_mask(1, 0, 3, 2) }>(b);
        assert_eq!(c.to_array(), [2.0, 1.0, 8.0, 7.0]);
    }

    #[test]
    fn f32_horizontal_sum_adds_all_lanes() {
        assert_eq!(F32x4::new(1.0, 2.0, 3.0, 4.0).horizontal_sum(), 10.0);
    }

    #[test]
    fn f32_lane_setters_replace_one_lane() {
        let a = F32x4::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(a.with_x(9.0).to_array(), [9.0, 2.0, 3.0, 4.0]);
        assert_eq!(a.with_y(9.0).to_array(), [1.0, 9.0, 3.0, 4.0]);
        assert_eq!(a.with_z(9.0).to_array(), [1.0, 2.0, 9.0, 4.0]);
        assert_eq!(a.with_w(9.0).to_array(), [1.0, 2.0, 3.0, 9.0]);
    }

    #[test]
    fn f32_comparison_masks_are_all_or_nothing() {
        let a = F32x4::new(1.0, 2.0, 3.0, 4.0);
        let b = F32x4::new(1.0, 0.0, 5.0, 4.0);
        assert_eq!(a.cmp_eq(b).to_bits(), [u32::MAX, 0, 0, u32::MAX]);
        assert_eq!(a.cmp_lt(b).to_bits(), [0, 0, u32::MAX, 0]);
        assert_eq!(a.cmp_ge(b).move_mask(), 0b1011);
    }

    #[test]
    fn f32_select_blends_by_mask() {
        let a = F32x4::new(1.0, 2.0, 3.0, 4.0);
        let b = F32x4::new(5.0, 6.0, 7.0, 8.0);
        let mask = a.cmp_gt(F32x4::splat(2.5));
        assert_eq!(F32x4::select(mask, a, b).to_array(), [5.0, 6.0, 3.0, 4.0]);
    }

    #[test]
    fn f32_min_returns_second_operand_for_nan() {
        let a = F32x4::splat(f32::NAN);
        let b = F32x4::splat(1.0);
        assert_eq!(a.min(b).to_array(), [1.0; 4]);
        assert_eq!(a.max(b).to_array(), [1.0; 4]);
    }

    #[test]
    fn f32_abs_and_neg_flip_only_sign_bit() {
        let a = F32x4::new(-1.0, 2.0, -0.0, 4.0);
        assert_eq!(a.abs().to_bits(), [1.0f32, 2.0, 0.0, 4.0].map(f32::to_bits));
        assert_eq!((-a).to_bits(), [1.0f32, -2.0, 0.0, -4.0].map(f32::to_bits));
    }

    #[test]
    fn f32_partial_loads_and_stores_touch_only_requested_lanes() {
        let src = [1.0f32, 2.0, 3.0];
        let a = unsafe { F32x4::load3(src.as_ptr()) };
        assert_eq!(a.to_array(), [1.0, 2.0, 3.0, 0.0]);

        let mut dst = [7.0f32; 4];
        unsafe { F32x4::new(9.0, 8.0, 6.0, 5.0).store2(dst.as_mut_ptr()) };
        assert_eq!(dst, [9.0, 8.0, 7.0, 7.0]);
        unsafe { F32x4::new(9.0, 8.0, 6.0, 5.0).store3(dst.as_mut_ptr()) };
        assert_eq!(dst, [9.0, 8.0, 6.0, 7.0]);
    }

    #[test]
    fn f32_transpose_network_transposes() {
        let c0 = F32x4::new(1.0, 2.0, 3.0, 4.0);
        let c1 = F32x4::new(5.0, 6.0, 7.0, 8.0);
        let c2 = F32x4::new(9.0, 10.0, 11.0, 12.0);
        let c3 = F32x4::new(13.0, 14.0, 15.0, 16.0);
        let t0 = c0.unpack_lo(c1);
        let t1 = c2.unpack_lo(c3);
        let t2 = c0.unpack_hi(c1);
        let t3 = c2.unpack_hi(c3);
        assert_eq!(t0.move_lh(t1).to_array(), [1.0, 5.0, 9.0, 13.0]);
        assert_eq!(t1.move_hl(t0).to_array(), [2.0, 6.0, 10.0, 14.0]);
        assert_eq!(t2.move_lh(t3).to_array(), [3.0, 7.0, 11.0, 15.0]);
        assert_eq!(t3.move_hl(t2).to_array(), [4.0, 8.0, 12.0, 16.0]);
    }

    #[test]
    fn f64_lanes_work() {
        let a = F64x2::new(1.0, -2.0);
        assert_eq!(a.shuffle::<{ shuffle_mask_f64(1, 0) }>().to_array(), [-2.0, 1.0]);
        assert_eq!(a.abs().to_array(), [1.0, 2.0]);
        assert_eq!(a.with_y(5.0).to_array(), [1.0, 5.0]);
        assert_eq!(a.horizontal_sum(), -1.0);
        assert_eq!(a.cmp_lt(F64x2::zero()).move_mask(), 0b10);
    }

    #[test]
    fn i32_lanes_wrap_on_overflow() {
        let a = I32x4::new(i32::MAX, i32::MIN, 3, 4);
        let b = I32x4::new(1, -1, 2, 2);
        assert_eq!((a + b).to_array(), [i32::MIN, i32::MAX, 5, 6]);
        assert_eq!((a * b).to_array(), [i32::MAX, i32::MIN, 6, 8]);
        assert_eq!(a.abs().to_array(), [i32::MAX, i32::MIN, 3, 4]);
    }

    #[test]
    fn i32_min_max_compare_signed() {
        let a = I32x4::new(-5, 3, 0, i32::MIN);
        let b = I32x4::new(2, -7, 0, i32::MAX);
        assert_eq!(a.min(b).to_array(), [-5, -7, 0, i32::MIN]);
        assert_eq!(a.max(b).to_array(), [2, 3, 0, i32::MAX]);
        assert_eq!(a.cmp_gt(b).move_mask(), 0b0010);
    }

    #[test]
    fn u32_min_max_compare_unsigned() {
        let a = U32x4::new(u32::MAX, 3, 0, 1 << 31);
        let b = U32x4::new(2, 7, 0, 1);
        assert_eq!(a.min(b).to_array(), [2, 3, 0, 1]);
        assert_eq!(a.max(b).to_array(), [u32::MAX, 7, 0, 1 << 31]);
        assert_eq!(a.cmp_gt(b).move_mask(), 0b1001);
        assert_eq!(a.cmp_lt(b).move_mask(), 0b0010);
    }

    #[test]
    fn integer_lane_setters_replace_one_lane() {
        let a = I32x4::new(1, 2, 3, 4);
        assert_eq!(a.with_x(9).to_array(), [9, 2, 3, 4]);
        assert_eq!(a.with_y(9).to_array(), [1, 9, 3, 4]);
        let b = U32x4::new(1, 2, 3, 4);
        assert_eq!(b.with_x(9).to_array(), [9, 2, 3, 4]);
        assert_eq!(b.with_y(9).to_array(), [1, 9, 3, 4]);
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "pointer is not 16-byte aligned")]
    fn loading_from_misaligned_pointer_as_aligned_panics_in_debug() {
        #[repr(C, align(16))]
        struct Buffer([f32; 8]);
        let buffer = Buffer([0.0; 8]);
        let _ = unsafe { F32x4::load_aligned(buffer.0.as_ptr().add(2)) };
    }

    #[test]
    fn aligned_load_and_store_accept_16_byte_aligned_pointers() {
        #[repr(C, align(16))]
        struct Buffer([f32; 8]);
        let mut buffer = Buffer([0.0; 8]);
        unsafe { F32x4::new(1.0, 2.0, 3.0, 4.0).store_aligned(buffer.0.as_mut_ptr().add(4)) };
        let loaded = unsafe { F32x4::load_aligned(buffer.0.as_ptr().add(4)) };
        assert_eq!(loaded.to_array(), [1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn backend_name_matches_compiled_backend() {
        let backend = Backend::current();
        assert_eq!(backend.to_string(), backend.name());
    }
}

#[cfg(all(
    test,
    any(target_arch = "x86", target_arch = "x86_64"),
    target_feature = "sse2"
))]
mod scalar_backend_tests {
    use super::{scalar, shuffle_mask, shuffle_mask_f64, x86};

    const F32_SAMPLES: [[f32; 4]; 6] = [
        [1.0, -2.0, 3.5, -0.0],
        [f32::NAN, 0.0, -1.0, f32::INFINITY],
        [-0.0, f32::NEG_INFINITY, 1e-30, 7.0],
        [3.0, 3.0, f32::NAN, -7.25],
        [1e20, -1e20, 1.0, 2.0],
        [0.0, -0.0, f32::MIN_POSITIVE, f32::MAX],
    ];

    const F64_SAMPLES: [[f64; 2]; 5] = [
        [1.0, -2.0],
        [f64::NAN, 0.0],
        [-0.0, f64::INFINITY],
        [0.0, f64::NAN],
        [1e300, -1e-300],
    ];

    const I32_SAMPLES: [[i32; 4]; 5] = [
        [0, 1, -1, 7],
        [i32::MIN, i32::MAX, -2, 2],
        [123_456, -654_321, 1 << 30, -(1 << 30)],
        [-1, -1, -1, -1],
        [42, -42, 0, i32::MIN + 1],
    ];

    /// Lanes must have identical bits, except that any two NaNs match.
    fn assert_f32_lanes_match(native: x86::F32x4, portable: scalar::F32x4) {
        for (lane, (a, b)) in native.to_array().into_iter().zip(portable.to_array()).enumerate() {
            assert!(
                (a.is_nan() && b.is_nan()) || a.to_bits() == b.to_bits(),
                "lane {lane} differs: {a:?} (sse) vs {b:?} (scalar)"
            );
        }
    }

    fn assert_f64_lanes_match(native: x86::F64x2, portable: scalar::F64x2) {
        for (lane, (a, b)) in native.to_array().into_iter().zip(portable.to_array()).enumerate() {
            assert!(
                (a.is_nan() && b.is_nan()) || a.to_bits() == b.to_bits(),
                "lane {lane} differs: {a:?} (sse) vs {b:?} (scalar)"
            );
        }
    }

    fn f32_lanes(lanes: [f32; 4]) -> (x86::F32x4, scalar::F32x4) {
        (x86::F32x4::from_array(lanes), scalar::F32x4::from_array(lanes))
    }

    fn f64_lanes(lanes: [f64; 2]) -> (x86::F64x2, scalar::F64x2) {
        (x86::F64x2::from_array(lanes), scalar::F64x2::from_array(lanes))
    }

    macro_rules! assert_f32_shuffles_match {
        ($a:expr, $b:expr, [$(($l0:literal, $l1:literal, $l2:literal, $l3:literal)),+ $(,)?]) => {
            $(
                assert_f32_lanes_match(
                    $a.0.shuffle::<{ shuffle_mask($l0, $l1, $l2, $l3) }>(),
                    $a.1.shuffle::<{ shuffle_mask($l0, $l1, $l2, $l3) }>(),
                );
                assert_f32_lanes_match(
                    $a.0.shuffle_with::<{ shuffle_mask($l0, $l1, $l2, $l3) }>($b.0),
                    $a.1.shuffle_with::<{ shuffle_mask($l0, $l1, $l2, $l3) }>($b.1),
                );
            )+
        };
    }

    macro_rules! assert_int_shuffles_match {
        ($native:expr, $portable:expr, [$(($l0:literal, $l1:literal, $l2:literal, $l3:literal)),+ $(,)?]) => {
            $(
                assert_eq!(
                    $native.shuffle::<{ shuffle_mask($l0, $l1, $l2, $l3) }>().to_array(),
                    $portable.shuffle::<{ shuffle_mask($l0, $l1, $l2, $l3) }>().to_array()
                );
            )+
        };
    }

    #[test]
    fn scalar_f32_lanes_match_sse_lanes() {
        let roots = f32_lanes([0.0, 2.0, 1e20, f32::MIN_POSITIVE]);
        assert_f32_lanes_match(roots.0.sqrt(), roots.1.sqrt());

        for a in F32_SAMPLES {
            let va = f32_lanes(a);
            assert_f32_lanes_match(va.0.abs(), va.1.abs());
            assert_f32_lanes_match(-va.0, -va.1);
            assert_f32_lanes_match(va.0.keep_xy(), va.1.keep_xy());
            assert_f32_lanes_match(va.0.keep_xyz(), va.1.keep_xyz());
            assert_f32_lanes_match(va.0.with_x(9.0), va.1.with_x(9.0));
            assert_f32_lanes_match(va.0.with_y(9.0), va.1.with_y(9.0));
            assert_f32_lanes_match(va.0.with_z(9.0), va.1.with_z(9.0));
            assert_f32_lanes_match(va.0.with_w(9.0), va.1.with_w(9.0));
            assert_eq!(va.0.move_mask(), va.1.move_mask());

            let (hs_native, hs_portable) = (va.0.horizontal_sum(), va.1.horizontal_sum());
            assert!(
                (hs_native.is_nan() && hs_portable.is_nan())
                    || hs_native.to_bits() == hs_portable.to_bits()
            );

            for b in F32_SAMPLES {
                let vb = f32_lanes(b);
                assert_f32_lanes_match(va.0 + vb.0, va.1 + vb.1);
                assert_f32_lanes_match(va.0 - vb.0, va.1 - vb.1);
                assert_f32_lanes_match(va.0 * vb.0, va.1 * vb.1);
                assert_f32_lanes_match(va.0 / vb.0, va.1 / vb.1);
                assert_f32_lanes_match(va.0.min(vb.0), va.1.min(vb.1));
                assert_f32_lanes_match(va.0.max(vb.0), va.1.max(vb.1));

                assert_eq!(va.0.cmp_eq(vb.0).to_bits(), va.1.cmp_eq(vb.1).to_bits());
                assert_eq!(va.0.cmp_ne(vb.0).to_bits(), va.1.cmp_ne(vb.1).to_bits());
                assert_eq!(va.0.cmp_lt(vb.0).to_bits(), va.1.cmp_lt(vb.1).to_bits());
                assert_eq!(va.0.cmp_le(vb.0).to_bits(), va.1.cmp_le(vb.1).to_bits());
                assert_eq!(va.0.cmp_gt(vb.0).to_bits(), va.1.cmp_gt(vb.1).to_bits());
                assert_eq!(va.0.cmp_ge(vb.0).to_bits(), va.1.cmp_ge(vb.1).to_bits());

                let mask = (va.0.cmp_lt(vb.0), va.1.cmp_lt(vb.1));
                assert_f32_lanes_match(
                    x86::F32x4::select(mask.0, va.0, vb.0),
                    scalar::F32x4::select(mask.1, va.1, vb.1),
                );

                assert_f32_lanes_match(va.0.unpack_lo(vb.0), va.1.unpack_lo(vb.1));
                assert_f32_lanes_match(va.0.unpack_hi(vb.0), va.1.unpack_hi(vb.1));
                assert_f32_lanes_match(va.0.move_lh(vb.0), va.1.move_lh(vb.1));
                assert_f32_lanes_match(va.0.move_hl(vb.0), va.1.move_hl(vb.1));

                assert_f32_shuffles_match!(
                    va,
                    vb,
                    [
                        (0, 1, 2, 3),
                        (3, 2, 1, 0),
                        (1, 2, 0, 3),
                        (2, 0, 1, 3),
                        (3, 3, 0, 1),
                        (1, 0, 3, 2),
                        (0, 0, 0, 0),
                    ]
                );
            }
        }
    }

    #[test]
    fn scalar_f32_partial_loads_and_stores_match_sse() {
        let source = [1.5_f32, -2.5, 3.5, -4.5, 5.5];
        unsafe {
            assert_f32_lanes_match(
                x86::F32x4::load2(source.as_ptr()),
                scalar::F32x4::load2(source.as_ptr()),
            );
            assert_f32_lanes_match(
                x86::F32x4::load3(source.as_ptr().add(1)),
                scalar::F32x4::load3(source.as_ptr().add(1)),
            );
            assert_f32_lanes_match(
                x86::F32x4::load(source.as_ptr().add(1)),
                scalar::F32x4::load(source.as_ptr().add(1)),
            );
        }

        let lanes = f32_lanes([9.0, 8.0, -0.0, 6.0]);
        let mut native = [7.0_f32; 5];
        let mut portable = [7.0_f32; 5];
        unsafe {
            lanes.0.store2(native.as_mut_ptr());
            lanes.1.store2(portable.as_mut_ptr());
        }
        assert_eq!(native.map(f32::to_bits), portable.map(f32::to_bits));
        unsafe {
            lanes.0.store3(native.as_mut_ptr().add(1));
            lanes.1.store3(portable.as_mut_ptr().add(1));
        }
        assert_eq!(native.map(f32::to_bits), portable.map(f32::to_bits));
        unsafe {
            lanes.0.store(native.as_mut_ptr().add(1));
            lanes.1.store(portable.as_mut_ptr().add(1));
        }
        assert_eq!(native.map(f32::to_bits), portable.map(f32::to_bits));
    }

    #[test]
    fn scalar_transpose_network_matches_sse() {
        let columns = [
            f32_lanes([1.0, 2.0, 3.0, 4.0]),
            f32_lanes([5.0, 6.0, 7.0, 8.0]),
            f32_lanes([9.0, 10.0, 11.0, 12.0]),
            f32_lanes([13.0, 14.0, 15.0, 16.0]),
        ];
        let native = [columns[0].0, columns[1].0, columns[2].0, columns[3].0];
        let portable = [columns[0].1, columns[1].1, columns[2].1, columns[3].1];

        let (n0, n1) = (native[0].unpack_lo(native[1]), native[2].unpack_lo(native[3]));
        let (n2, n3) = (native[0].unpack_hi(native[1]), native[2].unpack_hi(native[3]));
        let (p0, p1) = (portable[0].unpack_lo(portable[1]), portable[2].unpack_lo(portable[3]));
        let (p2, p3) = (portable[0].unpack_hi(portable[1]), portable[2].unpack_hi(portable[3]));

        assert_f32_lanes_match(n0.move_lh(n1), p0.move_lh(p1));
        assert_f32_lanes_match(n1.move_hl(n0), p1.move_hl(p0));
        assert_f32_lanes_match(n2.move_lh(n3), p2.move_lh(p3));
        assert_f32_lanes_match(n3.move_hl(n2), p3.move_hl(p2));
        assert_eq!(p1.move_hl(p0).to_array(), [2.0, 6.0, 10.0, 14.0]);
    }

    #[test]
    fn scalar_f64_lanes_match_sse_lanes() {
        for a in F64_SAMPLES {
            let va = f64_lanes(a);
            assert_f64_lanes_match(va.0.abs(), va.1.abs());
            assert_f64_lanes_match(-va.0, -va.1);
            assert_f64_lanes_match(va.0.with_x(9.0), va.1.with_x(9.0));
            assert_f64_lanes_match(va.0.with_y(9.0), va.1.with_y(9.0));
            assert_f64_lanes_match(
                va.0.shuffle::<{ shuffle_mask_f64(1, 0) }>(),
                va.1.shuffle::<{ shuffle_mask_f64(1, 0) }>(),
            );
            assert_f64_lanes_match(
                va.0.shuffle::<{ shuffle_mask_f64(1, 1) }>(),
                va.1.shuffle::<{ shuffle_mask_f64(1, 1) }>(),
            );
            assert_eq!(va.0.move_mask(), va.1.move_mask());

            let (hs_native, hs_portable) = (va.0.horizontal_sum(), va.1.horizontal_sum());
            assert!(
                (hs_native.is_nan() && hs_portable.is_nan())
                    || hs_native.to_bits() == hs_portable.to_bits()
            );

            for b in F64_SAMPLES {
                let vb = f64_lanes(b);
                assert_f64_lanes_match(va.0 + vb.0, va.1 + vb.1);
                assert_f64_lanes_match(va.0 * vb.0, va.1 * vb.1);
                assert_f64_lanes_match(va.0.min(vb.0), va.1.min(vb.1));
                assert_f64_lanes_match(va.0.max(vb.0), va.1.max(vb.1));
                assert_f64_lanes_match(
                    va.0.shuffle_with::<{ shuffle_mask_f64(1, 0) }>(vb.0),
                    va.1.shuffle_with::<{ shuffle_mask_f64(1, 0) }>(vb.1),
                );
                assert_eq!(va.0.cmp_eq(vb.0).to_bits(), va.1.cmp_eq(vb.1).to_bits());
                assert_eq!(va.0.cmp_ne(vb.0).to_bits(), va.1.cmp_ne(vb.1).to_bits());
                assert_eq!(va.0.cmp_lt(vb.0).to_bits(), va.1.cmp_lt(vb.1).to_bits());
                assert_eq!(va.0.cmp_ge(vb.0).to_bits(), va.1.cmp_ge(vb.1).to_bits());
            }
        }
    }

    #[test]
    fn scalar_integer_lanes_match_sse_lanes() {
        for a in I32_SAMPLES {
            let (ia, pia) = (x86::I32x4::from_array(a), scalar::I32x4::from_array(a));
            let ua_lanes = a.map(|lane| lane as u32);
            let (ua, pua) = (
                x86::U32x4::from_array(ua_lanes),
                scalar::U32x4::from_array(ua_lanes),
            );

            assert_eq!(ia.abs().to_array(), pia.abs().to_array());
            assert_eq!((-ia).to_array(), (-pia).to_array());
            assert_eq!((-ua).to_array(), (-pua).to_array());
            assert_eq!(ia.horizontal_sum(), pia.horizontal_sum());
            assert_eq!(ua.horizontal_sum(), pua.horizontal_sum());
            assert_eq!(ia.keep_xy().to_array(), pia.keep_xy().to_array());
            assert_eq!(ia.with_x(-9).to_array(), pia.with_x(-9).to_array());
            assert_eq!(ia.with_y(-9).to_array(), pia.with_y(-9).to_array());
            assert_eq!(ua.with_x(9).to_array(), pua.with_x(9).to_array());
            assert_eq!(ua.with_y(9).to_array(), pua.with_y(9).to_array());
            assert_eq!(ia.move_mask(), pia.move_mask());
            assert_int_shuffles_match!(ia, pia, [(3, 2, 1, 0), (1, 0, 3, 2), (2, 0, 1, 3)]);
            assert_int_shuffles_match!(ua, pua, [(3, 2, 1, 0), (0, 0, 1, 1)]);

            for b in I32_SAMPLES {
                let (ib, pib) = (x86::I32x4::from_array(b), scalar::I32x4::from_array(b));
                let ub_lanes = b.map(|lane| lane as u32);
                let (ub, pub_b) = (
                    x86::U32x4::from_array(ub_lanes),
                    scalar::U32x4::from_array(ub_lanes),
                );

                assert_eq!((ia + ib).to_array(), (pia + pib).to_array());
                assert_eq!((ia - ib).to_array(), (pia - pib).to_array());
                assert_eq!((ia * ib).to_array(), (pia * pib).to_array());
                assert_eq!(ia.min(ib).to_array(), pia.min(pib).to_array());
                assert_eq!(ia.max(ib).to_array(), pia.max(pib).to_array());
                assert_eq!(ia.cmp_eq(ib).to_array(), pia.cmp_eq(pib).to_array());
                assert_eq!(ia.cmp_ne(ib).to_array(), pia.cmp_ne(pib).to_array());
                assert_eq!(ia.cmp_lt(ib).to_array(), pia.cmp_lt(pib).to_array());
                assert_eq!(ia.cmp_le(ib).to_array(), pia.cmp_le(pib).to_array());
                assert_eq!(ia.cmp_gt(ib).to_array(), pia.cmp_gt(pib).to_array());
                assert_eq!(ia.cmp_ge(ib).to_array(), pia.cmp_ge(pib).to_array());
                assert_eq!(
                    x86::I32x4::select(ia.cmp_lt(ib), ia, ib).to_array(),
                    scalar::I32x4::select(pia.cmp_lt(pib), pia, pib).to_array()
                );

                assert_eq!((ua + ub).to_array(), (pua + pub_b).to_array());
                assert_eq!((ua * ub).to_array(), (pua * pub_b).to_array());
                assert_eq!(ua.min(ub).to_array(), pua.min(pub_b).to_array());
                assert_eq!(ua.max(ub).to_array(), pua.max(pub_b).to_array());
                assert_eq!(ua.cmp_lt(ub).to_array(), pua.cmp_lt(pub_b).to_array());
                assert_eq!(ua.cmp_le(ub).to_array(), pua.cmp_le(pub_b).to_array());
                assert_eq!(ua.cmp_gt(ub).to_array(), pua.cmp_gt(pub_b).to_array());
                assert_eq!(ua.cmp_ge(ub).to_array(), pua.cmp_ge(pub_b).to_array());
                assert_eq!(ua.cmp_lt(ub).move_mask(), pua.cmp_lt(pub_b).move_mask());
            }
        }
    }

    #[test]
    fn scalar_integer_partial_loads_and_stores_match_sse() {
        let source = [5_i32, -6, 7, -8];
        let native = unsafe { x86::I32x4::load2(source.as_ptr().add(1)) };
        let portable = unsafe { scalar::I32x4::load2(source.as_ptr().add(1)) };
        assert_eq!(native.to_array(), portable.to_array());

        let mut native_out = [0_u32; 3];
        let mut portable_out = [0_u32; 3];
        unsafe {
            x86::U32x4::new(1, 2, 3, 4).store2(native_out.as_mut_ptr().add(1));
            scalar::U32x4::new(1, 2, 3, 4).store2(portable_out.as_mut_ptr().add(1));
        }
        assert_eq!(native_out, portable_out);
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "pointer is not 16-byte aligned")]
    fn storing_to_misaligned_pointer_as_aligned_panics_in_debug() {
        #[repr(C, align(16))]
        struct Buffer([f32; 8]);
        let mut buffer = Buffer([0.0; 8]);
        unsafe { scalar::F32x4::splat(1.0).store_aligned(buffer.0.as_mut_ptr().add(1)) };
    }
}
