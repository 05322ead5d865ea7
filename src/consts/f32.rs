//! Numeric `f32` constants.

#![allow(clippy::approx_constant, clippy::excessive_precision)]

/// π to nine significant digits.
pub const PI: f32 = 3.14159265;
pub const DEGREES_TO_RADIANS: f32 = PI / 180.0;
pub const RADIANS_TO_DEGREES: f32 = 180.0 / PI;
