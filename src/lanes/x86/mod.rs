//! SSE lane backend for x86 and `x86_64`.
//!
//! SSE2 is the baseline. The integer operations SSE2 lacks are routed through
//! `tier`, which is the SSE4.1 module when the crate is compiled with
//! `target_feature = "sse4.1"` and the SSE2 fallback module otherwise.

// Depending on the toolchain, register-only intrinsics are either `unsafe fn`
// or safe `#[target_feature]` functions.
#![allow(unused_unsafe)]

mod float;
mod int;

#[cfg_attr(target_feature = "sse4.1", allow(dead_code))]
mod sse2;

#[cfg_attr(not(target_feature = "sse4.1"), allow(dead_code))]
mod sse41;

pub use float::{F32x4, F64x2};
pub use int::{I32x4, U32x4};

#[cfg(target_feature = "sse4.1")]
use self::sse41 as tier;

#[cfg(not(target_feature = "sse4.1"))]
use self::sse2 as tier;
