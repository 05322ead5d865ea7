//! Portable lane backend over plain arrays.
//!
//! Mirrors the x86 backend lane for lane, including the NaN behavior of
//! min/max and the all-bits mask convention, so results are bit-identical.

use crate::{lanes::shuffle_source, scalar};
use bytemuck::{Pod, Zeroable};
use std::{
    array, fmt,
    ops::{Add, BitAnd, BitOr, BitXor, Div, Mul, Neg, Sub},
};

/// Four `f32` lanes.
#[repr(C, align(16))]
#[derive(Clone, Copy, Default, Zeroable, Pod)]
pub struct F32x4([f32; 4]);

/// Two `f64` lanes.
#[repr(C, align(16))]
#[derive(Clone, Copy, Default, Zeroable, Pod)]
pub struct F64x2([f64; 2]);

/// Four `i32` lanes.
#[repr(C, align(16))]
#[derive(Clone, Copy, Default, Zeroable, Pod)]
pub struct I32x4([i32; 4]);

/// Four `u32` lanes.
#[repr(C, align(16))]
#[derive(Clone, Copy, Default, Zeroable, Pod)]
pub struct U32x4([u32; 4]);

fn f32_mask(set: bool) -> f32 {
    f32::from_bits(if set { u32::MAX } else { 0 })
}

fn f64_mask(set: bool) -> f64 {
    f64::from_bits(if set { u64::MAX } else { 0 })
}

fn f64_shuffle_source(mask: i32, lane: usize) -> usize {
    ((mask as usize) >> lane) & 1
}

/// Constructors, loads, stores and lane access shared by all four types.
macro_rules! impl_common {
    ($t:ident, $scalar:ty, $n:literal) => {
        impl $t {
            #[inline]
            pub fn zero() -> Self {
                Self([0 as $scalar; $n])
            }

            #[inline]
            pub fn splat(value: $scalar) -> Self {
                Self([value; $n])
            }

            #[inline]
            pub fn from_array(lanes: [$scalar; $n]) -> Self {
                Self(lanes)
            }

            #[inline]
            pub fn to_array(self) -> [$scalar; $n] {
                self.0
            }

            /// # Safety
            /// `ptr` must be valid for reading all lanes.
            #[inline]
            pub unsafe fn load(ptr: *const $scalar) -> Self {
                Self(unsafe { ptr.cast::<[$scalar; $n]>().read_unaligned() })
            }

            /// # Safety
            /// `ptr` must be 16-byte aligned and valid for reading all lanes.
            #[inline]
            pub unsafe fn load_aligned(ptr: *const $scalar) -> Self {
                debug_assert!(ptr.addr().is_multiple_of(16), "pointer is not 16-byte aligned");
                unsafe { Self::load(ptr) }
            }

            /// # Safety
            /// `ptr` must be valid for writing all lanes.
            #[inline]
            pub unsafe fn store(self, ptr: *mut $scalar) {
                unsafe { ptr.cast::<[$scalar; $n]>().write_unaligned(self.0) };
            }

            /// # Safety
            /// `ptr` must be 16-byte aligned and valid for writing all lanes.
            #[inline]
            pub unsafe fn store_aligned(self, ptr: *mut $scalar) {
                debug_assert!(ptr.addr().is_multiple_of(16), "pointer is not 16-byte aligned");
                unsafe { self.store(ptr) };
            }

            #[inline]
            pub fn x(self) -> $scalar {
                self.0[0]
            }

            #[inline]
            pub fn y(self) -> $scalar {
                self.0[1]
            }

            #[inline]
            pub fn with_x(mut self, value: $scalar) -> Self {
                self.0[0] = value;
                self
            }

            #[inline]
            pub fn with_y(mut self, value: $scalar) -> Self {
                self.0[1] = value;
                self
            }

            #[inline]
            pub fn min(self, other: Self) -> Self {
                Self(array::from_fn(|i| scalar::min(self.0[i], other.0[i])))
            }

            #[inline]
            pub fn max(self, other: Self) -> Self {
                Self(array::from_fn(|i| scalar::max(self.0[i], other.0[i])))
            }

            #[inline]
            pub fn abs(self) -> Self {
                Self(self.0.map(scalar::abs))
            }

            #[inline]
            fn mapped2(self, other: Self, f: impl Fn($scalar, $scalar) -> $scalar) -> Self {
                Self(array::from_fn(|i| f(self.0[i], other.0[i])))
            }
        }

        impl fmt::Debug for $t {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_tuple(stringify!($t)).field(&self.0).finish()
            }
        }
    };
}

/// Comparisons, masks and bitwise operators, given the conversion between a
/// lane and its bit pattern.
macro_rules! impl_masks {
    ($t:ident, $scalar:ty, $bits:ty, $to_bits:expr, $from_bits:expr, $mask:expr) => {
        impl $t {
            #[inline]
            pub fn cmp_eq(self, other: Self) -> Self {
                self.mapped2(other, |a, b| $mask(a == b))
            }

            #[inline]
            pub fn cmp_ne(self, other: Self) -> Self {
                self.mapped2(other, |a, b| $mask(a != b))
            }

            #[inline]
            pub fn cmp_lt(self, other: Self) -> Self {
                self.mapped2(other, |a, b| $mask(a < b))
            }

            #[inline]
            pub fn cmp_le(self, other: Self) -> Self {
                self.mapped2(other, |a, b| $mask(a <= b))
            }

            #[inline]
            pub fn cmp_gt(self, other: Self) -> Self {
                self.mapped2(other, |a, b| $mask(a > b))
            }

            #[inline]
            pub fn cmp_ge(self, other: Self) -> Self {
                self.mapped2(other, |a, b| $mask(a >= b))
            }

            #[inline]
            pub fn select(mask: Self, if_true: Self, if_false: Self) -> Self {
                (mask & if_true) | (mask.bitwise(if_false, |m, f| !m & f))
            }

            /// The top bit of each lane, lane 0 in bit 0.
            #[inline]
            pub fn move_mask(self) -> u32 {
                let top = <$bits>::BITS - 1;
                self.0
                    .iter()
                    .enumerate()
                    .map(|(i, &lane)| (($to_bits(lane) >> top) as u32) << i)
                    .fold(0, |acc, bit| acc | bit)
            }

            #[inline]
            fn bitwise(self, other: Self, f: impl Fn($bits, $bits) -> $bits) -> Self {
                self.mapped2(other, |a, b| $from_bits(f($to_bits(a), $to_bits(b))))
            }
        }

        impl BitAnd for $t {
            type Output = Self;

            #[inline]
            fn bitand(self, rhs: Self) -> Self {
                self.bitwise(rhs, |a, b| a & b)
            }
        }

        impl BitOr for $t {
            type Output = Self;

            #[inline]
            fn bitor(self, rhs: Self) -> Self {
                self.bitwise(rhs, |a, b| a | b)
            }
        }

        impl BitXor for $t {
            type Output = Self;

            #[inline]
            fn bitxor(self, rhs: Self) -> Self {
                self.bitwise(rhs, |a, b| a ^ b)
            }
        }
    };
}

macro_rules! impl_arith {
    ($t:ident, $add:expr, $sub:expr, $mul:expr) => {
        impl Add for $t {
            type Output = Self;

            #[inline]
            fn add(self, rhs: Self) -> Self {
                self.mapped2(rhs, $add)
            }
        }

        impl Sub for $t {
            type Output = Self;

            #[inline]
            fn sub(self, rhs: Self) -> Self {
                self.mapped2(rhs, $sub)
            }
        }

        impl Mul for $t {
            type Output = Self;

            #[inline]
            fn mul(self, rhs: Self) -> Self {
                self.mapped2(rhs, $mul)
            }
        }
    };
}

impl_common!(F32x4, f32, 4);
impl_common!(F64x2, f64, 2);
impl_common!(I32x4, i32, 4);
impl_common!(U32x4, u32, 4);

impl_masks!(F32x4, f32, u32, f32::to_bits, f32::from_bits, f32_mask);
impl_masks!(F64x2, f64, u64, f64::to_bits, f64::from_bits, f64_mask);
impl_masks!(
    I32x4,
    i32,
    u32,
    |lane: i32| lane as u32,
    |bits: u32| bits as i32,
    |set: bool| -i32::from(set)
);
impl_masks!(
    U32x4,
    u32,
    u32,
    |lane: u32| lane,
    |bits: u32| bits,
    |set: bool| if set { u32::MAX } else { 0 }
);

impl_arith!(F32x4, |a, b| a + b, |a, b| a - b, |a, b| a * b);
impl_arith!(F64x2, |a, b| a + b, |a, b| a - b, |a, b| a * b);
impl_arith!(I32x4, i32::wrapping_add, i32::wrapping_sub, i32::wrapping_mul);
impl_arith!(U32x4, u32::wrapping_add, u32::wrapping_sub, u32::wrapping_mul);

impl Div for F32x4 {
    type Output = Self;

    #[inline]
    fn div(self, rhs: Self) -> Self {
        self.mapped2(rhs, |a, b| a / b)
    }
}

impl Div for F64x2 {
    type Output = Self;

    #[inline]
    fn div(self, rhs: Self) -> Self {
        self.mapped2(rhs, |a, b| a / b)
    }
}

/// Float negation flips only the sign bit, so `-0.0` and NaN payloads match
/// the x86 backend.
macro_rules! impl_float_extras {
    ($t:ident, $scalar:ty, $bits:ty, $n:literal) => {
        impl $t {
            #[inline]
            pub fn sqrt(self) -> Self {
                Self(self.0.map(<$scalar>::sqrt))
            }

            /// The raw bit pattern of each lane.
            #[inline]
            pub fn to_bits(self) -> [$bits; $n] {
                self.0.map(<$scalar>::to_bits)
            }
        }

        impl Neg for $t {
            type Output = Self;

            #[inline]
            fn neg(self) -> Self {
                self ^ Self::splat(-0.0)
            }
        }
    };
}

impl_float_extras!(F32x4, f32, u32, 4);
impl_float_extras!(F64x2, f64, u64, 2);

impl F32x4 {
    #[inline]
    pub fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self([x, y, z, w])
    }

    /// # Safety
    /// `ptr` must be valid for reading two `f32`s.
    #[inline]
    pub unsafe fn load2(ptr: *const f32) -> Self {
        unsafe { Self([ptr.read_unaligned(), ptr.add(1).read_unaligned(), 0.0, 0.0]) }
    }

    /// # Safety
    /// `ptr` must be valid for reading three `f32`s.
    #[inline]
    pub unsafe fn load3(ptr: *const f32) -> Self {
        unsafe { Self::load2(ptr).with_z(ptr.add(2).read_unaligned()) }
    }

    /// # Safety
    /// `ptr` must be valid for writing two `f32`s.
    #[inline]
    pub unsafe fn store2(self, ptr: *mut f32) {
        unsafe {
            ptr.write_unaligned(self.0[0]);
            ptr.add(1).write_unaligned(self.0[1]);
        }
    }

    /// # Safety
    /// `ptr` must be valid for writing three `f32`s.
    #[inline]
    pub unsafe fn store3(self, ptr: *mut f32) {
        unsafe {
            self.store2(ptr);
            ptr.add(2).write_unaligned(self.0[2]);
        }
    }

    #[inline]
    pub fn z(self) -> f32 {
        self.0[2]
    }

    #[inline]
    pub fn w(self) -> f32 {
        self.0[3]
    }

    #[inline]
    pub fn with_z(mut self, value: f32) -> Self {
        self.0[2] = value;
        self
    }

    #[inline]
    pub fn with_w(mut self, value: f32) -> Self {
        self.0[3] = value;
        self
    }

    #[inline]
    pub fn keep_xy(self) -> Self {
        Self([self.0[0], self.0[1], 0.0, 0.0])
    }

    #[inline]
    pub fn keep_xyz(self) -> Self {
        self.with_w(0.0)
    }

    #[inline]
    pub fn shuffle<const MASK: i32>(self) -> Self {
        Self(array::from_fn(|i| self.0[shuffle_source(MASK, i)]))
    }

    /// Lanes 0 and 1 come from `self`, lanes 2 and 3 from `other`.
    #[inline]
    pub fn shuffle_with<const MASK: i32>(self, other: Self) -> Self {
        Self(array::from_fn(|i| {
            let source = shuffle_source(MASK, i);
            if i < 2 { self.0[source] } else { other.0[source] }
        }))
    }

    /// `(s0, o0, s1, o1)`
    #[inline]
    pub fn unpack_lo(self, other: Self) -> Self {
        Self([self.0[0], other.0[0], self.0[1], other.0[1]])
    }

    /// `(s2, o2, s3, o3)`
    #[inline]
    pub fn unpack_hi(self, other: Self) -> Self {
        Self([self.0[2], other.0[2], self.0[3], other.0[3]])
    }

    /// `(s0, s1, o0, o1)`
    #[inline]
    pub fn move_lh(self, other: Self) -> Self {
        Self([self.0[0], self.0[1], other.0[0], other.0[1]])
    }

    /// `(o2, o3, s2, s3)`
    #[inline]
    pub fn move_hl(self, other: Self) -> Self {
        Self([other.0[2], other.0[3], self.0[2], self.0[3]])
    }

    /// `(x + z) + (y + w)`
    #[inline]
    pub fn horizontal_sum(self) -> f32 {
        let [x, y, z, w] = self.0;
        (x + z) + (y + w)
    }
}

impl F64x2 {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self([x, y])
    }

    #[inline]
    pub fn shuffle<const MASK: i32>(self) -> Self {
        Self(array::from_fn(|i| self.0[f64_shuffle_source(MASK, i)]))
    }

    /// Lane 0 comes from `self`, lane 1 from `other`.
    #[inline]
    pub fn shuffle_with<const MASK: i32>(self, other: Self) -> Self {
        Self([
            self.0[f64_shuffle_source(MASK, 0)],
            other.0[f64_shuffle_source(MASK, 1)],
        ])
    }

    #[inline]
    pub fn horizontal_sum(self) -> f64 {
        self.0[0] + self.0[1]
    }
}

macro_rules! impl_int_extras {
    ($t:ident, $scalar:ty) => {
        impl $t {
            #[inline]
            pub fn new(x: $scalar, y: $scalar, z: $scalar, w: $scalar) -> Self {
                Self([x, y, z, w])
            }

            /// # Safety
            /// `ptr` must be valid for reading two lanes.
            #[inline]
            pub unsafe fn load2(ptr: *const $scalar) -> Self {
                unsafe { Self([ptr.read_unaligned(), ptr.add(1).read_unaligned(), 0, 0]) }
            }

            /// # Safety
            /// `ptr` must be valid for writing two lanes.
            #[inline]
            pub unsafe fn store2(self, ptr: *mut $scalar) {
                unsafe {
                    ptr.write_unaligned(self.0[0]);
                    ptr.add(1).write_unaligned(self.0[1]);
                }
            }

            #[inline]
            pub fn keep_xy(self) -> Self {
                Self([self.0[0], self.0[1], 0, 0])
            }

            #[inline]
            pub fn shuffle<const MASK: i32>(self) -> Self {
                Self(array::from_fn(|i| self.0[shuffle_source(MASK, i)]))
            }

            /// Wrapping `(x + z) + (y + w)`.
            #[inline]
            pub fn horizontal_sum(self) -> $scalar {
                let [x, y, z, w] = self.0;
                x.wrapping_add(z).wrapping_add(y.wrapping_add(w))
            }
        }

        impl Neg for $t {
            type Output = Self;

            #[inline]
            fn neg(self) -> Self {
                Self::zero() - self
            }
        }
    };
}

impl_int_extras!(I32x4, i32);
impl_int_extras!(U32x4, u32);
