//! Vectors.
//!
//! The SIMD vector types hold their components in a single 128-bit lane
//! value. 2D and 3D `f32`/`i32`/`u32` vectors leave the upper lanes as
//! padding; every operation either masks the padding out or ignores it, so it
//! is never observable. For storage inside other types and buffers, prefer the
//! compact 4-byte aligned [`Vector2C`], [`Vector3C`] and [`Vector4C`].

mod compact;
mod vector2;
mod vector3;
mod vector4;

pub use compact::{Vector2C, Vector3C, Vector4C};
pub use vector2::{Vector2, Vector2D, Vector2I, Vector2U};
pub use vector3::Vector3;
pub use vector4::Vector4;

/// Operations shared by every SIMD vector type.
///
/// The type must provide `new`, `from_ptr`, `store_to_ptr`, `active_lanes`
/// and the `ACTIVE_MASK` of its component lanes.
macro_rules! impl_simd_vector {
    ($t:ident, $s:ty, $lanes:ty, $n:literal, $lane_count:literal, [$($c:ident),+]) => {
        impl $t {
            /// Wraps the given lanes. Lanes beyond the vector's components
            /// are padding.
            #[inline]
            pub fn from_lanes(lanes: $lanes) -> Self {
                Self { lanes }
            }

            /// The underlying lanes, including any padding.
            #[inline]
            pub fn lanes(&self) -> $lanes {
                self.lanes
            }

            /// Creates a new vector with all zeros.
            #[inline]
            pub fn zeros() -> Self {
                Self::from_lanes(<$lanes>::zero())
            }

            /// Creates a new vector with the same value for all components.
            #[inline]
            pub fn same(value: $s) -> Self {
                Self::from_lanes(<$lanes>::splat(value))
            }

            /// Reads the components from the start of a tightly packed slice.
            ///
            /// # Panics
            /// If the slice is shorter than the number of components.
            #[inline]
            pub fn from_slice(slice: &[$s]) -> Self {
                assert!(
                    slice.len() >= $n,
                    "slice of length {} is too short for {} with {} components",
                    slice.len(),
                    stringify!($t),
                    $n
                );
                unsafe { Self::from_ptr(slice.as_ptr()) }
            }

            /// Writes the components to the start of the slice.
            ///
            /// # Panics
            /// If the slice is shorter than the number of components.
            #[inline]
            pub fn store(&self, slice: &mut [$s]) {
                assert!(
                    slice.len() >= $n,
                    "slice of length {} is too short for {} with {} components",
                    slice.len(),
                    stringify!($t),
                    $n
                );
                unsafe { self.store_to_ptr(slice.as_mut_ptr()) };
            }

            #[inline]
            pub fn to_array(&self) -> [$s; $n] {
                [$(self.$c()),+]
            }

            /// Creates a vector whose component `i` is component
            /// `indices[i]` of this vector.
            ///
            /// # Panics
            /// If an index is not a valid component index.
            #[inline]
            pub fn swizzled(&self, indices: [usize; $n]) -> Self {
                let components = self.to_array();
                Self::from(indices.map(|index| {
                    assert!(
                        index < $n,
                        "swizzle index {index} is out of bounds for {} with {} components",
                        stringify!($t),
                        $n
                    );
                    components[index]
                }))
            }

            /// Multiplies each component by the corresponding component in
            /// another vector.
            #[inline]
            pub fn component_mul(&self, other: &Self) -> Self {
                Self::from_lanes(self.lanes * other.lanes)
            }

            /// Computes the dot product of this vector with another.
            #[inline]
            pub fn dot(&self, other: &Self) -> $s {
                self.component_mul(other).component_sum()
            }

            /// Computes the square of the norm of the vector.
            #[inline]
            pub fn norm_squared(&self) -> $s {
                self.dot(self)
            }

            /// Computes the sum of the components.
            #[inline]
            pub fn component_sum(&self) -> $s {
                self.active_lanes().horizontal_sum()
            }

            /// Returns a vector with the absolute value of each component.
            #[inline]
            pub fn component_abs(&self) -> Self {
                Self::from_lanes(self.lanes.abs())
            }

            /// Returns a vector where each component is the minimum of the
            /// corresponding component in this and another vector.
            #[inline]
            pub fn component_min(&self, other: &Self) -> Self {
                Self::from_lanes(self.lanes.min(other.lanes))
            }

            /// Returns a vector where each component is the maximum of the
            /// corresponding component in this and another vector.
            #[inline]
            pub fn component_max(&self, other: &Self) -> Self {
                Self::from_lanes(self.lanes.max(other.lanes))
            }

            /// Clamps each component to the range given by the corresponding
            /// components of `min` and `max`.
            #[inline]
            pub fn clamped(&self, min: &Self, max: &Self) -> Self {
                self.component_max(min).component_min(max)
            }

            #[inline]
            pub fn equals_mask(&self, other: &Self) -> Self {
                Self::from_lanes(self.lanes.cmp_eq(other.lanes))
            }

            #[inline]
            pub fn not_equals_mask(&self, other: &Self) -> Self {
                Self::from_lanes(self.lanes.cmp_ne(other.lanes))
            }

            #[inline]
            pub fn less_mask(&self, other: &Self) -> Self {
                Self::from_lanes(self.lanes.cmp_lt(other.lanes))
            }

            #[inline]
            pub fn less_or_equal_mask(&self, other: &Self) -> Self {
                Self::from_lanes(self.lanes.cmp_le(other.lanes))
            }

            #[inline]
            pub fn greater_mask(&self, other: &Self) -> Self {
                Self::from_lanes(self.lanes.cmp_gt(other.lanes))
            }

            #[inline]
            pub fn greater_or_equal_mask(&self, other: &Self) -> Self {
                Self::from_lanes(self.lanes.cmp_ge(other.lanes))
            }

            /// Takes each component from `if_true` where the corresponding
            /// component of `mask` has all bits set and from `if_false`
            /// where it has none set.
            #[inline]
            pub fn select(mask: &Self, if_true: &Self, if_false: &Self) -> Self {
                Self::from_lanes(<$lanes>::select(mask.lanes, if_true.lanes, if_false.lanes))
            }

            /// The top bit of each component, the x-component in bit 0.
            #[inline]
            pub fn mask_bits(&self) -> u32 {
                self.lanes.move_mask() & Self::ACTIVE_MASK
            }
        }

        impl Default for $t {
            #[inline]
            fn default() -> Self {
                Self::zeros()
            }
        }

        impl From<[$s; $n]> for $t {
            #[inline]
            fn from([$($c),+]: [$s; $n]) -> Self {
                Self::new($($c),+)
            }
        }

        impl From<$t> for [$s; $n] {
            #[inline]
            fn from(vector: $t) -> Self {
                vector.to_array()
            }
        }

        impl_lane_eq!($t);

        impl ::std::ops::Index<usize> for $t {
            type Output = $s;

            #[inline]
            fn index(&self, index: usize) -> &Self::Output {
                assert!(
                    index < $n,
                    "index {index} is out of bounds for {} with {} components",
                    stringify!($t),
                    $n
                );
                &bytemuck::cast_ref::<$lanes, [$s; $lane_count]>(&self.lanes)[index]
            }
        }

        impl ::std::ops::IndexMut<usize> for $t {
            #[inline]
            fn index_mut(&mut self, index: usize) -> &mut Self::Output {
                assert!(
                    index < $n,
                    "index {index} is out of bounds for {} with {} components",
                    stringify!($t),
                    $n
                );
                &mut bytemuck::cast_mut::<$lanes, [$s; $lane_count]>(&mut self.lanes)[index]
            }
        }

        impl ::std::fmt::Debug for $t {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.debug_struct(stringify!($t))
                    $(.field(stringify!($c), &self.$c()))+
                    .finish()
            }
        }

        impl_binop!(Add, add, $t, $t, $t, |a, b| {
            $t::from_lanes(a.lanes + b.lanes)
        });

        impl_binop!(Add, add, $t, $s, $t, |a, b| {
            $t::from_lanes(a.lanes + <$lanes>::splat(*b))
        });

        impl_binop!(Sub, sub, $t, $t, $t, |a, b| {
            $t::from_lanes(a.lanes - b.lanes)
        });

        impl_binop!(Sub, sub, $t, $s, $t, |a, b| {
            $t::from_lanes(a.lanes - <$lanes>::splat(*b))
        });

        impl_binop!(Mul, mul, $t, $t, $t, |a, b| { a.component_mul(b) });

        impl_binop!(Mul, mul, $t, $s, $t, |a, b| {
            $t::from_lanes(a.lanes * <$lanes>::splat(*b))
        });

        impl_binop!(Mul, mul, $s, $t, $t, |a, b| { b * *a });

        impl_binop!(Div, div, $t, $t, $t, |a, b| { a.component_div(b) });

        impl_binop!(Div, div, $t, $s, $t, |a, b| {
            a.component_div(&$t::same(*b))
        });

        impl_binop_assign!(AddAssign, add_assign, $t, $t, |a, b| {
            *a = *a + b;
        });

        impl_binop_assign!(AddAssign, add_assign, $t, $s, |a, b| {
            *a = *a + b;
        });

        impl_binop_assign!(SubAssign, sub_assign, $t, $t, |a, b| {
            *a = *a - b;
        });

        impl_binop_assign!(SubAssign, sub_assign, $t, $s, |a, b| {
            *a = *a - b;
        });

        impl_binop_assign!(MulAssign, mul_assign, $t, $t, |a, b| {
            *a = *a * b;
        });

        impl_binop_assign!(MulAssign, mul_assign, $t, $s, |a, b| {
            *a = *a * b;
        });

        impl_binop_assign!(DivAssign, div_assign, $t, $t, |a, b| {
            *a = *a / b;
        });

        impl_binop_assign!(DivAssign, div_assign, $t, $s, |a, b| {
            *a = *a / b;
        });

        impl_unary_op!(Neg, neg, $t, $t, |val| {
            $t::from_lanes(-val.lanes)
        });
    };
}

/// Operations of the floating point SIMD vector types.
macro_rules! impl_float_vector {
    ($t:ident, $s:ty) => {
        impl $t {
            /// Divides each component by the corresponding component in
            /// another vector.
            #[inline]
            pub fn component_div(&self, other: &Self) -> Self {
                Self::from_lanes(self.lanes / other.lanes)
            }

            /// Computes the norm (length) of the vector.
            #[inline]
            pub fn norm(&self) -> $s {
                self.norm_squared().sqrt()
            }

            /// Computes the normalized version of the vector. A zero vector
            /// gives NaN components.
            #[inline]
            pub fn normalized(&self) -> Self {
                self / self.norm()
            }

            /// Linearly interpolates from this vector towards `other`. `t` is
            /// not clamped.
            #[inline]
            pub fn lerp(&self, other: &Self, t: $s) -> Self {
                self + (other - self) * t
            }
        }

        impl_abs_diff_eq!($t, $s, |a, b, epsilon| {
            a.to_array()
                .iter()
                .zip(b.to_array().iter())
                .all(|(a, b)| ::approx::AbsDiffEq::abs_diff_eq(a, b, epsilon))
        });

        impl_relative_eq!($t, $s, |a, b, epsilon, max_relative| {
            a.to_array()
                .iter()
                .zip(b.to_array().iter())
                .all(|(a, b)| ::approx::RelativeEq::relative_eq(a, b, epsilon, max_relative))
        });
    };
}

/// Operations of the integer 2D vector types. Arithmetic wraps.
macro_rules! impl_int_vector2 {
    ($t:ident, $s:ty) => {
        impl $t {
            /// Divides each component by the corresponding component in
            /// another vector.
            ///
            /// # Panics
            /// If a component of `other` is zero.
            #[inline]
            pub fn component_div(&self, other: &Self) -> Self {
                Self::new(
                    self.x().wrapping_div(other.x()),
                    self.y().wrapping_div(other.y()),
                )
            }

            /// The norm computed through `f32` and truncated, so it is only
            /// exact for perfect squares below 2^24.
            #[inline]
            pub fn norm(&self) -> $s {
                (self.norm_squared() as f32).sqrt() as $s
            }

            /// Divides each component by the truncated norm.
            ///
            /// # Panics
            /// If the truncated norm is zero.
            #[inline]
            pub fn normalized(&self) -> Self {
                self / self.norm()
            }
        }

        impl Eq for $t {}
    };
}

/// Component getters and setters shared by the 2D vector types.
macro_rules! impl_vector2_accessors {
    ($t:ident, $s:ty) => {
        impl $t {
            /// The x-component.
            #[inline]
            pub fn x(&self) -> $s {
                self.lanes.x()
            }

            /// The y-component.
            #[inline]
            pub fn y(&self) -> $s {
                self.lanes.y()
            }

            #[inline]
            pub fn set_x(&mut self, x: $s) {
                self.lanes = self.lanes.with_x(x);
            }

            #[inline]
            pub fn set_y(&mut self, y: $s) {
                self.lanes = self.lanes.with_y(y);
            }

            /// The x-component, read as the left edge of a rectangle.
            #[inline]
            pub fn left(&self) -> $s {
                self.x()
            }

            /// The y-component, read as the top edge of a rectangle.
            #[inline]
            pub fn top(&self) -> $s {
                self.y()
            }

            /// The x-component, read as a width.
            #[inline]
            pub fn width(&self) -> $s {
                self.x()
            }

            /// The y-component, read as a height.
            #[inline]
            pub fn height(&self) -> $s {
                self.y()
            }

            #[cfg(feature = "texture_swizzles")]
            #[inline]
            pub fn u(&self) -> $s {
                self.x()
            }

            #[cfg(feature = "texture_swizzles")]
            #[inline]
            pub fn v(&self) -> $s {
                self.y()
            }

            #[cfg(feature = "color_swizzles")]
            #[inline]
            pub fn r(&self) -> $s {
                self.x()
            }

            #[cfg(feature = "color_swizzles")]
            #[inline]
            pub fn g(&self) -> $s {
                self.y()
            }
        }
    };
}

pub(crate) use impl_float_vector;
pub(crate) use impl_int_vector2;
pub(crate) use impl_simd_vector;
pub(crate) use impl_vector2_accessors;
