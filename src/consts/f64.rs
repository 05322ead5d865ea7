//! Numeric `f64` constants.

#![allow(clippy::approx_constant, clippy::excessive_precision)]

/// π to fifteen significant digits.
pub const PI: f64 = 3.14159265358979;
pub const DEGREES_TO_RADIANS: f64 = PI / 180.0;
pub const RADIANS_TO_DEGREES: f64 = 180.0 / PI;
