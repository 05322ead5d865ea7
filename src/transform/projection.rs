//! Projections to OpenGL clip space.

use crate::{matrix::Matrix4, scalar::degrees_to_radians};

impl Matrix4 {
    /// Creates an orthographic projection mapping the box bounded by the
    /// given planes to the `[-1, 1]` cube. `near` and `far` are distances
    /// along -z, so the box spans `z` from `-near` to `-far`.
    pub fn orthographic(left: f32, right: f32, bottom: f32, top: f32, near: f32, far: f32) -> Self {
        let width = right - left;
        let height = top - bottom;
        let depth = far - near;
        Self::new(
            2.0 / width,
            0.0,
            0.0,
            -(right + left) / width,
            0.0,
            2.0 / height,
            0.0,
            -(top + bottom) / height,
            0.0,
            0.0,
            -2.0 / depth,
            -(far + near) / depth,
            0.0,
            0.0,
            0.0,
            1.0,
        )
    }

    /// Creates a perspective projection with the given vertical field of
    /// view in radians, width-to-height aspect ratio and positive distances
    /// to the near and far planes.
    ///
    /// The resulting w-component of a projected point is its distance along
    /// -z, so dividing by it gives normalized device coordinates.
    pub fn perspective(fov_radians: f32, aspect_ratio: f32, near: f32, far: f32) -> Self {
        let focal = 1.0 / (0.5 * fov_radians).tan();
        let inv_depth = 1.0 / (near - far);
        Self::new(
            focal / aspect_ratio,
            0.0,
            0.0,
            0.0,
            0.0,
            focal,
            0.0,
            0.0,
            0.0,
            0.0,
            (far + near) * inv_depth,
            2.0 * far * near * inv_depth,
            0.0,
            0.0,
            -1.0,
            0.0,
        )
    }

    #[inline]
    pub fn perspective_degrees(fov_degrees: f32, aspect_ratio: f32, near: f32, far: f32) -> Self {
        Self::perspective(degrees_to_radians(fov_degrees), aspect_ratio, near, far)
    }
}
