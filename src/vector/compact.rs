//! Compact vectors with plain `f32` fields.

use super::{Vector2, Vector3, Vector4};
use bytemuck::{Pod, Zeroable};

/// A 2-dimensional vector.
///
/// This type only supports a few basic operations, as is primarily intended
/// for compact storage inside other types and collections. For computations,
/// prefer the SIMD-friendly [`Vector2`].
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Zeroable, Pod)]
pub struct Vector2C {
    x: f32,
    y: f32,
}

/// A 3-dimensional vector.
///
/// This type only supports a few basic operations, as is primarily intended
/// for compact storage inside other types and collections. For computations,
/// prefer the SIMD-friendly 16-byte aligned [`Vector3`].
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Zeroable, Pod)]
pub struct Vector3C {
    x: f32,
    y: f32,
    z: f32,
}

/// A 4-dimensional vector.
///
/// This type only supports a few basic operations, as is primarily intended
/// for compact storage inside other types and collections. For computations,
/// prefer the SIMD-friendly 16-byte aligned [`Vector4`].
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Zeroable, Pod)]
pub struct Vector4C {
    x: f32,
    y: f32,
    z: f32,
    w: f32,
}

macro_rules! impl_compact_vector {
    ($t:ident, $aligned:ident, $n:literal, [$(($c:ident, $c_mut:ident, $i:literal)),+]) => {
        impl $t {
            /// Creates a new vector with the given components.
            #[inline]
            pub const fn new($($c: f32),+) -> Self {
                Self { $($c),+ }
            }

            /// Creates a new vector with all zeros.
            #[inline]
            pub const fn zeros() -> Self {
                Self::same(0.0)
            }

            /// Creates a new vector with the same value for all components.
            #[inline]
            pub const fn same(value: f32) -> Self {
                Self { $($c: value),+ }
            }

            $(
                #[inline]
                pub const fn $c(&self) -> f32 {
                    self.$c
                }

                #[inline]
                pub const fn $c_mut(&mut self) -> &mut f32 {
                    &mut self.$c
                }
            )+

            /// Computes the dot product of this vector with another.
            #[inline]
            pub fn dot(&self, other: &Self) -> f32 {
                0.0 $(+ self.$c * other.$c)+
            }

            /// Computes the square of the norm of the vector.
            #[inline]
            pub fn norm_squared(&self) -> f32 {
                self.dot(self)
            }

            /// Computes the norm (length) of the vector.
            #[inline]
            pub fn norm(&self) -> f32 {
                self.norm_squared().sqrt()
            }

            /// Computes the normalized version of the vector.
            #[inline]
            pub fn normalized(&self) -> Self {
                self / self.norm()
            }

            #[doc = concat!("Converts the vector to the SIMD-friendly [`", stringify!($aligned), "`].")]
            #[inline]
            pub fn aligned(&self) -> $aligned {
                $aligned::new($(self.$c),+)
            }
        }

        impl From<[f32; $n]> for $t {
            #[inline]
            fn from([$($c),+]: [f32; $n]) -> Self {
                Self::new($($c),+)
            }
        }

        impl From<$t> for [f32; $n] {
            #[inline]
            fn from(vector: $t) -> Self {
                [$(vector.$c),+]
            }
        }

        impl ::std::ops::Index<usize> for $t {
            type Output = f32;

            #[inline]
            fn index(&self, index: usize) -> &Self::Output {
                match index {
                    $($i => &self.$c,)+
                    _ => panic!(
                        "index {index} is out of bounds for {} with {} components",
                        stringify!($t),
                        $n
                    ),
                }
            }
        }

        impl ::std::ops::IndexMut<usize> for $t {
            #[inline]
            fn index_mut(&mut self, index: usize) -> &mut Self::Output {
                match index {
                    $($i => &mut self.$c,)+
                    _ => panic!(
                        "index {index} is out of bounds for {} with {} components",
                        stringify!($t),
                        $n
                    ),
                }
            }
        }

        impl_binop!(Add, add, $t, $t, $t, |a, b| {
            $t::new($(a.$c + b.$c),+)
        });

        impl_binop!(Sub, sub, $t, $t, $t, |a, b| {
            $t::new($(a.$c - b.$c),+)
        });

        impl_binop!(Mul, mul, $t, f32, $t, |a, b| {
            $t::new($(a.$c * *b),+)
        });

        impl_binop!(Mul, mul, f32, $t, $t, |a, b| { b * *a });

        impl_binop!(Div, div, $t, f32, $t, |a, b| {
            $t::new($(a.$c / *b),+)
        });

        impl_binop_assign!(AddAssign, add_assign, $t, $t, |a, b| {
            $(a.$c += b.$c;)+
        });

        impl_binop_assign!(SubAssign, sub_assign, $t, $t, |a, b| {
            $(a.$c -= b.$c;)+
        });

        impl_binop_assign!(MulAssign, mul_assign, $t, f32, |a, b| {
            $(a.$c *= *b;)+
        });

        impl_binop_assign!(DivAssign, div_assign, $t, f32, |a, b| {
            $(a.$c /= *b;)+
        });

        impl_unary_op!(Neg, neg, $t, $t, |val| {
            $t::new($(-val.$c),+)
        });

        impl_abs_diff_eq!($t, f32, |a, b, epsilon| {
            true $(&& ::approx::AbsDiffEq::abs_diff_eq(&a.$c, &b.$c, epsilon))+
        });

        impl_relative_eq!($t, f32, |a, b, epsilon, max_relative| {
            true $(&& ::approx::RelativeEq::relative_eq(&a.$c, &b.$c, epsilon, max_relative))+
        });
    };
}

impl_compact_vector!(Vector2C, Vector2, 2, [(x, x_mut, 0), (y, y_mut, 1)]);
impl_compact_vector!(
    Vector3C,
    Vector3,
    3,
    [(x, x_mut, 0), (y, y_mut, 1), (z, z_mut, 2)]
);
impl_compact_vector!(
    Vector4C,
    Vector4,
    4,
    [(x, x_mut, 0), (y, y_mut, 1), (z, z_mut, 2), (w, w_mut, 3)]
);

impl Vector3C {
    /// Converts the vector to 4D by appending the given w-component.
    #[inline]
    pub const fn extended(&self, w: f32) -> Vector4C {
        Vector4C::new(self.x, self.y, self.z, w)
    }
}

impl Vector4C {
    /// The 3D vector containing the x-, y- and z-components of this vector.
    #[inline]
    pub const fn xyz(&self) -> Vector3C {
        Vector3C::new(self.x, self.y, self.z)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::op_ref)]

    use super::*;
    use approx::assert_abs_diff_eq;
    use std::mem;

    const EPSILON: f32 = 1e-6;

    #[test]
    fn compact_vectors_have_no_padding() {
        assert_eq!(mem::size_of::<Vector2C>(), 8);
        assert_eq!(mem::size_of::<Vector3C>(), 12);
        assert_eq!(mem::size_of::<Vector4C>(), 16);
        assert_eq!(mem::align_of::<Vector3C>(), 4);
        assert_eq!(mem::align_of::<Vector4C>(), 4);
    }

    #[test]
    fn compact_vector_arithmetic_works() {
        let a = Vector3C::new(1.0, 2.0, 3.0);
        let b = Vector3C::new(4.0, 5.0, 6.0);
        assert_eq!(&a + &b, Vector3C::new(5.0, 7.0, 9.0));
        assert_eq!(&b - &a, Vector3C::same(3.0));
        assert_eq!(&a * 2.0, Vector3C::new(2.0, 4.0, 6.0));
        assert_eq!(2.0 * &a, Vector3C::new(2.0, 4.0, 6.0));
        assert_eq!(&b / 2.0, Vector3C::new(2.0, 2.5, 3.0));
        assert_eq!(-a, Vector3C::new(-1.0, -2.0, -3.0));
    }

    #[test]
    fn compact_vector_assign_operations_work() {
        let mut v = Vector2C::new(1.0, 2.0);
        v += Vector2C::same(1.0);
        assert_eq!(v, Vector2C::new(2.0, 3.0));
        v -= Vector2C::new(2.0, 0.0);
        v *= 4.0;
        assert_eq!(v, Vector2C::new(0.0, 12.0));
        v /= 3.0;
        assert_eq!(v, Vector2C::new(0.0, 4.0));
    }

    #[test]
    fn compact_vector_norm_works() {
        let v = Vector4C::new(1.0, 1.0, 1.0, 1.0);
        assert_eq!(v.dot(&v), 4.0);
        assert_abs_diff_eq!(v.norm(), 2.0, epsilon = EPSILON);
        assert_abs_diff_eq!(v.normalized(), Vector4C::same(0.5), epsilon = EPSILON);
    }

    #[test]
    fn mutating_compact_vector_components_works() {
        let mut v = Vector3C::zeros();
        *v.y_mut() = 2.0;
        *v.z_mut() += 3.0;
        v[0] = 1.0;
        assert_eq!(v, Vector3C::new(1.0, 2.0, 3.0));
        assert_eq!(v[2], 3.0);
    }

    #[test]
    #[should_panic]
    fn indexing_compact_vector_out_of_bounds_panics() {
        let v = Vector2C::new(1.0, 2.0);
        let _ = v[2];
    }

    #[test]
    fn compact_vector_array_conversions_work() {
        let v = Vector4C::from([1.0, 2.0, 3.0, 4.0]);
        assert_eq!(<[f32; 4]>::from(v), [1.0, 2.0, 3.0, 4.0]);
        assert_eq!(v.xyz(), Vector3C::new(1.0, 2.0, 3.0));
        assert_eq!(v.xyz().extended(4.0), v);
    }

    #[test]
    fn compact_and_aligned_vectors_round_trip() {
        let v2 = Vector2C::new(f32::MIN_POSITIVE, -0.0);
        let v3 = Vector3C::new(1e-30, 7.5, -3.25);
        let v4 = Vector4C::new(f32::MAX, f32::MIN, 0.1, 1e10);
        assert_eq!(
            <[f32; 2]>::from(v2.aligned().compact()).map(f32::to_bits),
            <[f32; 2]>::from(v2).map(f32::to_bits)
        );
        assert_eq!(
            <[f32; 3]>::from(v3.aligned().compact()).map(f32::to_bits),
            <[f32; 3]>::from(v3).map(f32::to_bits)
        );
        assert_eq!(
            <[f32; 4]>::from(v4.aligned().compact()).map(f32::to_bits),
            <[f32; 4]>::from(v4).map(f32::to_bits)
        );
    }

    #[test]
    fn compact_vectors_cast_to_packed_floats() {
        let vectors = [Vector3C::new(1.0, 2.0, 3.0), Vector3C::new(4.0, 5.0, 6.0)];
        let floats: &[f32] = bytemuck::cast_slice(&vectors);
        assert_eq!(floats, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    }
}
