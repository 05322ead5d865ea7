//! Transform matrices.
//!
//! Factories and in-place helpers for [`Matrix4`](crate::matrix::Matrix4)
//! representing homogeneous transforms. The matrices act on column vectors,
//! so `a * b` applies `b` first. The in-place `rotate_*` and `shear*` helpers
//! post-multiply, while [`translate`](crate::matrix::Matrix4::translate) and
//! [`scale`](crate::matrix::Matrix4::scale) write straight into the
//! translation column and the diagonal.
//!
//! Projections follow OpenGL clip space: right-handed view space looking
//! down -z, with depth mapped to `[-1, 1]`.

mod affine;
mod projection;
