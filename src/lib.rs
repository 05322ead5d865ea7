//! SIMD-backed vectors and matrices for real-time graphics.

#[macro_use]
mod macros;

pub mod consts;
pub mod lanes;
pub mod matrix;
pub mod scalar;
mod swizzle;
pub mod transform;
pub mod vector;

pub use lanes::Backend;
pub use matrix::{Matrix4, Matrix4C};
pub use scalar::{Float, Scalar};
pub use vector::{
    Vector2, Vector2C, Vector2D, Vector2I, Vector2U, Vector3, Vector3C, Vector4, Vector4C,
};

/// The lane backend the crate was compiled with.
#[inline]
pub const fn backend() -> Backend {
    Backend::current()
}
