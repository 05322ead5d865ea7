//! Translation, scaling, rotation and shear.

use crate::{
    matrix::Matrix4,
    scalar::degrees_to_radians,
    vector::{Vector3, Vector4},
};

impl Matrix4 {
    /// Creates a matrix translating by the given vector.
    #[inline]
    pub fn from_translation(translation: &Vector3) -> Self {
        let mut m = Self::identity();
        m.set_column(3, translation.extended(1.0));
        m
    }

    /// Adds the given translation to the translation column.
    ///
    /// This is only equivalent to post-multiplying with a translation matrix
    /// when the upper 3x3 part is the identity. Otherwise the translation is
    /// applied after the existing transform rather than before it.
    #[inline]
    pub fn translate(&mut self, translation: &Vector3) {
        let column = self.column(3);
        self.set_column(3, column + translation.extended(0.0));
    }

    /// Creates a matrix scaling by the given factor along each axis.
    #[inline]
    pub fn from_scaling(scaling: &Vector3) -> Self {
        Self::from_diagonal(&scaling.extended(1.0))
    }

    /// Multiplies the first three diagonal elements by the given factors and
    /// sets the last diagonal element to one. The off-diagonal elements are
    /// left untouched.
    #[inline]
    pub fn scale(&mut self, scaling: &Vector3) {
        let diagonal = self.main_diagonal().component_mul(&scaling.extended(1.0));
        self.set_main_diagonal(&Vector4::new(diagonal.x(), diagonal.y(), diagonal.z(), 1.0));
    }

    /// Creates a matrix rotating by `angle` radians about the given axis,
    /// which must be normalized.
    pub fn from_axis_angle_radians(axis: &Vector3, angle: f32) -> Self {
        let (sin, cos) = angle.sin_cos();
        let t = 1.0 - cos;
        let [x, y, z] = axis.to_array();
        Self::new(
            t * x * x + cos,
            t * x * y - sin * z,
            t * x * z + sin * y,
            0.0,
            t * x * y + sin * z,
            t * y * y + cos,
            t * y * z - sin * x,
            0.0,
            t * x * z - sin * y,
            t * y * z + sin * x,
            t * z * z + cos,
            0.0,
            0.0,
            0.0,
            0.0,
            1.0,
        )
    }

    #[inline]
    pub fn from_axis_angle_degrees(axis: &Vector3, angle: f32) -> Self {
        Self::from_axis_angle_radians(axis, degrees_to_radians(angle))
    }

    /// Creates a matrix rotating by `angle` radians about the x-axis.
    pub fn from_rotation_x_radians(angle: f32) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self::new(
            1.0, 0.0, 0.0, 0.0, //
            0.0, cos, -sin, 0.0, //
            0.0, sin, cos, 0.0, //
            0.0, 0.0, 0.0, 1.0,
        )
    }

    /// Creates a matrix rotating by `angle` radians about the y-axis.
    pub fn from_rotation_y_radians(angle: f32) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self::new(
            cos, 0.0, sin, 0.0, //
            0.0, 1.0, 0.0, 0.0, //
            -sin, 0.0, cos, 0.0, //
            0.0, 0.0, 0.0, 1.0,
        )
    }

    /// Creates a matrix rotating by `angle` radians about the z-axis.
    pub fn from_rotation_z_radians(angle: f32) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self::new(
            cos, -sin, 0.0, 0.0, //
            sin, cos, 0.0, 0.0, //
            0.0, 0.0, 1.0, 0.0, //
            0.0, 0.0, 0.0, 1.0,
        )
    }

    #[inline]
    pub fn from_rotation_x_degrees(angle: f32) -> Self {
        Self::from_rotation_x_radians(degrees_to_radians(angle))
    }

    #[inline]
    pub fn from_rotation_y_degrees(angle: f32) -> Self {
        Self::from_rotation_y_radians(degrees_to_radians(angle))
    }

    #[inline]
    pub fn from_rotation_z_degrees(angle: f32) -> Self {
        Self::from_rotation_z_radians(degrees_to_radians(angle))
    }

    /// Post-multiplies with a rotation about the given normalized axis.
    #[inline]
    pub fn rotate_radians(&mut self, axis: &Vector3, angle: f32) {
        *self *= Self::from_axis_angle_radians(axis, angle);
    }

    #[inline]
    pub fn rotate_degrees(&mut self, axis: &Vector3, angle: f32) {
        *self *= Self::from_axis_angle_degrees(axis, angle);
    }

    #[inline]
    pub fn rotate_x_radians(&mut self, angle: f32) {
        *self *= Self::from_rotation_x_radians(angle);
    }

    #[inline]
    pub fn rotate_y_radians(&mut self, angle: f32) {
        *self *= Self::from_rotation_y_radians(angle);
    }

    #[inline]
    pub fn rotate_z_radians(&mut self, angle: f32) {
        *self *= Self::from_rotation_z_radians(angle);
    }

    #[inline]
    pub fn rotate_x_degrees(&mut self, angle: f32) {
        *self *= Self::from_rotation_x_degrees(angle);
    }

    #[inline]
    pub fn rotate_y_degrees(&mut self, angle: f32) {
        *self *= Self::from_rotation_y_degrees(angle);
    }

    #[inline]
    pub fn rotate_z_degrees(&mut self, angle: f32) {
        *self *= Self::from_rotation_z_degrees(angle);
    }

    /// Creates a shear matrix. The factor `ab` is how much coordinate `a`
    /// is added to coordinate `b`, so for example `xy` shears y along x:
    ///
    /// ```text
    /// x' = x + yx * y + zx * z
    /// y' = xy * x + y + zy * z
    /// z' = xz * x + yz * y + z
    /// ```
    pub fn from_shear(xy: f32, xz: f32, yx: f32, yz: f32, zx: f32, zy: f32) -> Self {
        Self::from_columns(
            Vector4::new(1.0, xy, xz, 0.0),
            Vector4::new(yx, 1.0, yz, 0.0),
            Vector4::new(zx, zy, 1.0, 0.0),
            Vector4::new(0.0, 0.0, 0.0, 1.0),
        )
    }

    /// Creates a matrix shearing y and z along x.
    #[inline]
    pub fn from_shear_x(y: f32, z: f32) -> Self {
        Self::from_shear(y, z, 0.0, 0.0, 0.0, 0.0)
    }

    /// Creates a matrix shearing x and z along y.
    #[inline]
    pub fn from_shear_y(x: f32, z: f32) -> Self {
        Self::from_shear(0.0, 0.0, x, z, 0.0, 0.0)
    }

    /// Creates a matrix shearing x and y along z.
    #[inline]
    pub fn from_shear_z(x: f32, y: f32) -> Self {
        Self::from_shear(0.0, 0.0, 0.0, 0.0, x, y)
    }

    /// Post-multiplies with [`Self::from_shear`].
    #[inline]
    pub fn shear(&mut self, xy: f32, xz: f32, yx: f32, yz: f32, zx: f32, zy: f32) {
        *self *= Self::from_shear(xy, xz, yx, yz, zx, zy);
    }

    #[inline]
    pub fn shear_x(&mut self, y: f32, z: f32) {
        *self *= Self::from_shear_x(y, z);
    }

    #[inline]
    pub fn shear_y(&mut self, x: f32, z: f32) {
        *self *= Self::from_shear_y(x, z);
    }

    #[inline]
    pub fn shear_z(&mut self, x: f32, y: f32) {
        *self *= Self::from_shear_z(x, y);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::f32::PI;
    use approx::assert_abs_diff_eq;

    const EPSILON: f32 = 1e-6;

    #[test]
    fn translation_matrix_moves_points_but_not_vectors() {
        let m = Matrix4::from_translation(&Vector3::new(1.0, 2.0, 3.0));
        let p = Vector3::new(1.0, 1.0, 1.0);
        assert_eq!(m.transform_point(&p), Vector3::new(2.0, 3.0, 4.0));
        assert_eq!(m.transform_vector(&p), p);
    }

    #[test]
    fn translating_accumulates_into_translation_column() {
        let mut m = Matrix4::from_translation(&Vector3::new(1.0, 2.0, 3.0));
        m.translate(&Vector3::new(1.0, -2.0, 0.5));
        assert_eq!(m.column(3), Vector4::new(2.0, 0.0, 3.5, 1.0));
        assert_eq!(m.main_diagonal(), Vector4::same(1.0));
    }

    #[test]
    fn translating_ignores_existing_scaling() {
        let mut m = Matrix4::from_scaling(&Vector3::same(2.0));
        m.translate(&Vector3::new(1.0, 0.0, 0.0));
        assert_eq!(m.transform_point(&Vector3::zeros()), Vector3::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn scaling_matrix_scales_components() {
        let m = Matrix4::from_scaling(&Vector3::new(2.0, 3.0, 4.0));
        assert_eq!(m.transform_point(&Vector3::same(1.0)), Vector3::new(2.0, 3.0, 4.0));
        assert_eq!(m.element(3, 3), 1.0);
    }

    #[test]
    fn scaling_multiplies_diagonal_and_resets_last_element() {
        let mut m = Matrix4::from_diagonal_elements(1.0, 2.0, 3.0, 5.0);
        m.set_element(0, 1, 7.0);
        m.scale(&Vector3::new(2.0, 2.0, 0.5));
        assert_eq!(m.main_diagonal(), Vector4::new(2.0, 4.0, 1.5, 1.0));
        assert_eq!(m.element(0, 1), 7.0);
    }

    #[test]
    fn rotating_about_x_by_90_degrees_works() {
        let m = Matrix4::from_rotation_x_degrees(90.0);
        assert_abs_diff_eq!(
            m * Vector4::same(1.0),
            Vector4::new(1.0, -1.0, 1.0, 1.0),
            epsilon = EPSILON
        );
    }

    #[test]
    fn rotating_about_y_and_z_by_90_degrees_works() {
        let y = Matrix4::from_rotation_y_degrees(90.0);
        assert_abs_diff_eq!(
            y.transform_vector(&Vector3::unit_z()),
            Vector3::unit_x(),
            epsilon = EPSILON
        );
        let z = Matrix4::from_rotation_z_degrees(90.0);
        assert_abs_diff_eq!(
            z.transform_vector(&Vector3::unit_x()),
            Vector3::unit_y(),
            epsilon = EPSILON
        );
    }

    #[test]
    fn axis_angle_rotation_matches_axis_rotations() {
        let angle = 0.7;
        assert_abs_diff_eq!(
            Matrix4::from_axis_angle_radians(&Vector3::unit_x(), angle),
            Matrix4::from_rotation_x_radians(angle),
            epsilon = EPSILON
        );
        assert_abs_diff_eq!(
            Matrix4::from_axis_angle_radians(&Vector3::unit_y(), angle),
            Matrix4::from_rotation_y_radians(angle),
            epsilon = EPSILON
        );
        assert_abs_diff_eq!(
            Matrix4::from_axis_angle_degrees(&Vector3::unit_z(), 40.0),
            Matrix4::from_rotation_z_radians(40.0 * PI / 180.0),
            epsilon = EPSILON
        );
    }

    #[test]
    fn rotation_preserves_norm_and_axis() {
        let axis = Vector3::new(1.0, 2.0, 3.0).normalized();
        let m = Matrix4::from_axis_angle_degrees(&axis, 123.0);
        let v = Vector3::new(-2.0, 0.5, 4.0);
        assert_abs_diff_eq!(m.transform_vector(&v).norm(), v.norm(), epsilon = 1e-5);
        assert_abs_diff_eq!(m.transform_vector(&axis), axis, epsilon = EPSILON);
    }

    #[test]
    fn rotate_helpers_post_multiply() {
        let base = Matrix4::from_translation(&Vector3::new(1.0, 0.0, 0.0));

        let mut m = base;
        m.rotate_z_degrees(90.0);
        assert_abs_diff_eq!(m, base * Matrix4::from_rotation_z_degrees(90.0), epsilon = EPSILON);
        assert_abs_diff_eq!(
            m.transform_point(&Vector3::unit_x()),
            Vector3::new(1.0, 1.0, 0.0),
            epsilon = EPSILON
        );

        let mut m = base;
        m.rotate_degrees(&Vector3::unit_y(), 30.0);
        m.rotate_x_radians(0.2);
        m.rotate_y_radians(-0.1);
        m.rotate_radians(&Vector3::unit_z(), 1.0);
        let expected = base
            * Matrix4::from_rotation_y_degrees(30.0)
            * Matrix4::from_rotation_x_radians(0.2)
            * Matrix4::from_rotation_y_radians(-0.1)
            * Matrix4::from_rotation_z_radians(1.0);
        assert_abs_diff_eq!(m, expected, epsilon = EPSILON);
    }

    #[test]
    fn shear_factories_fill_expected_columns() {
        assert_eq!(
            Matrix4::from_shear_x(2.0, 3.0).column(0),
            Vector4::new(1.0, 2.0, 3.0, 0.0)
        );
        assert_eq!(
            Matrix4::from_shear_y(2.0, 3.0).column(1),
            Vector4::new(2.0, 1.0, 3.0, 0.0)
        );
        assert_eq!(
            Matrix4::from_shear_z(2.0, 3.0).column(2),
            Vector4::new(2.0, 3.0, 1.0, 0.0)
        );
        let m = Matrix4::from_shear(1.0, 2.0, 3.0, 4.0, 5.0, 6.0);
        assert_eq!(m.row(0), Vector4::new(1.0, 3.0, 5.0, 0.0));
        assert_eq!(m.row(1), Vector4::new(1.0, 1.0, 6.0, 0.0));
        assert_eq!(m.row(2), Vector4::new(2.0, 4.0, 1.0, 0.0));
        assert_eq!(m.row(3), Vector4::new(0.0, 0.0, 0.0, 1.0));
    }

    #[test]
    fn shearing_along_x_offsets_by_x() {
        let m = Matrix4::from_shear_x(0.5, -1.0);
        assert_eq!(
            m.transform_point(&Vector3::new(2.0, 1.0, 1.0)),
            Vector3::new(2.0, 2.0, -1.0)
        );
    }

    #[test]
    fn shear_helpers_post_multiply() {
        let base = Matrix4::from_scaling(&Vector3::new(2.0, 3.0, 4.0));

        let mut m = base;
        m.shear_x(1.0, 2.0);
        m.shear_y(0.5, 0.0);
        m.shear_z(0.0, -1.0);
        m.shear(0.1, 0.2, 0.3, 0.4, 0.5, 0.6);
        let expected = base
            * Matrix4::from_shear_x(1.0, 2.0)
            * Matrix4::from_shear_y(0.5, 0.0)
            * Matrix4::from_shear_z(0.0, -1.0)
            * Matrix4::from_shear(0.1, 0.2, 0.3, 0.4, 0.5, 0.6);
        assert_abs_diff_eq!(m, expected, epsilon = EPSILON);
    }
}
