//! Scalar element types and the scalar versions of the lane operations.

use crate::consts;
use num_traits as nt;
use std::fmt;

/// An element type of the vector types: `f32`, `f64`, `i32` or `u32`.
pub trait Scalar:
    Copy + Default + PartialOrd + fmt::Debug + Send + Sync + 'static + bytemuck::Pod
{
    const ZERO: Self;
    const ONE: Self;

    /// Absolute value with the same semantics as the lane `abs`: clears the
    /// sign bit of floats, wraps `i32::MIN` and is the identity for `u32`.
    fn abs(self) -> Self;
}

/// Gathers traits useful for working with generic floating point elements.
pub trait Float:
    Scalar + nt::Float + nt::FromPrimitive + approx::AbsDiffEq + approx::RelativeEq
{
    const PI: Self;
    const DEGREES_TO_RADIANS: Self;
    const RADIANS_TO_DEGREES: Self;

    #[inline]
    fn degrees_to_radians(self) -> Self {
        self * Self::DEGREES_TO_RADIANS
    }

    #[inline]
    fn radians_to_degrees(self) -> Self {
        self * Self::RADIANS_TO_DEGREES
    }
}

/// `a < b ? a : b`. Returns `b` if either argument is NaN.
#[inline]
pub fn min<T: Scalar>(a: T, b: T) -> T {
    if a < b { a } else { b }
}

/// `a > b ? a : b`. Returns `b` if either argument is NaN.
#[inline]
pub fn max<T: Scalar>(a: T, b: T) -> T {
    if a > b { a } else { b }
}

/// See [`Scalar::abs`].
#[inline]
pub fn abs<T: Scalar>(value: T) -> T {
    Scalar::abs(value)
}

/// `a + (b - a) * t`, with `t` not clamped.
#[inline]
pub fn lerp<F: Float>(a: F, b: F, t: F) -> F {
    a + (b - a) * t
}

#[inline]
pub fn degrees_to_radians<F: Float>(degrees: F) -> F {
    degrees.degrees_to_radians()
}

#[inline]
pub fn radians_to_degrees<F: Float>(radians: F) -> F {
    radians.radians_to_degrees()
}

macro_rules! impl_scalar_float {
    ($f:ident) => {
        impl Scalar for $f {
            const ZERO: Self = 0.0;
            const ONE: Self = 1.0;

            #[inline]
            fn abs(self) -> Self {
                $f::abs(self)
            }
        }

        impl Float for $f {
            const PI: Self = consts::$f::PI;
            const DEGREES_TO_RADIANS: Self = consts::$f::DEGREES_TO_RADIANS;
            const RADIANS_TO_DEGREES: Self = consts::$f::RADIANS_TO_DEGREES;
        }
    };
}

impl_scalar_float!(f32);
impl_scalar_float!(f64);

impl Scalar for i32 {
    const ZERO: Self = 0;
    const ONE: Self = 1;

    #[inline]
    fn abs(self) -> Self {
        self.wrapping_abs()
    }
}

impl Scalar for u32 {
    const ZERO: Self = 0;
    const ONE: Self = 1;

    #[inline]
    fn abs(self) -> Self {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn min_and_max_return_second_argument_for_nan() {
        assert_eq!(min(f32::NAN, 1.0), 1.0);
        assert!(min(1.0, f32::NAN).is_nan());
        assert_eq!(max(f64::NAN, 2.0), 2.0);
        assert!(max(2.0, f64::NAN).is_nan());
    }

    #[test]
    fn min_and_max_work_for_integers() {
        assert_eq!(min(-3, 2), -3);
        assert_eq!(max(-3, 2), 2);
        assert_eq!(min(7_u32, u32::MAX), 7);
        assert_eq!(max(7_u32, u32::MAX), u32::MAX);
    }

    #[test]
    fn abs_of_i32_min_wraps() {
        assert_eq!(abs(i32::MIN), i32::MIN);
        assert_eq!(abs(-5), 5);
        assert_eq!(abs(5_u32), 5);
        assert_eq!(abs(-0.0_f32).to_bits(), 0.0_f32.to_bits());
    }

    #[test]
    fn converting_degrees_to_radians_uses_fixed_pi() {
        assert_abs_diff_eq!(degrees_to_radians(180.0_f32), consts::f32::PI, epsilon = 1e-6);
        assert_abs_diff_eq!(degrees_to_radians(90.0_f64), consts::f64::PI / 2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(radians_to_degrees(consts::f32::PI), 180.0, epsilon = 1e-4);
    }

    #[test]
    fn lerp_does_not_clamp() {
        assert_eq!(lerp(0.0_f32, 10.0, 0.25), 2.5);
        assert_eq!(lerp(0.0_f32, 10.0, 1.5), 15.0);
        assert_eq!(lerp(2.0_f64, 4.0, -1.0), 0.0);
    }
}
