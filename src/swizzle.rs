//! Named swizzles.
//!
//! Every swizzle is a single lane shuffle with a compile-time mask. The tables
//! below list each swizzle name with the source lane of every output component.

use crate::{
    lanes::{shuffle_mask, shuffle_mask_f64},
    vector::{Vector2, Vector2D, Vector2I, Vector2U, Vector3, Vector4},
};

/// Mask placing lanes `a` and `b` in the two lower lanes. The upper lanes
/// repeat them and end up as padding.
const fn pick2(a: usize, b: usize) -> i32 {
    shuffle_mask(a, b, a, b)
}

/// Mask placing lanes `a`, `b` and `c` in the three lower lanes.
const fn pick3(a: usize, b: usize, c: usize) -> i32 {
    shuffle_mask(a, b, c, c)
}

macro_rules! swizzles2 {
    ($src:ty => $dst:ty { $($name:ident: $a:literal, $b:literal;)+ }) => {
        impl $src {
            $(
                #[doc = concat!("The `", stringify!($name), "` swizzle.")]
                #[inline]
                pub fn $name(&self) -> $dst {
                    <$dst>::from_lanes(self.lanes().shuffle::<{ pick2($a, $b) }>())
                }
            )+
        }
    };
}

macro_rules! swizzles2_f64 {
    ($src:ty => $dst:ty { $($name:ident: $a:literal, $b:literal;)+ }) => {
        impl $src {
            $(
                #[doc = concat!("The `", stringify!($name), "` swizzle.")]
                #[inline]
                pub fn $name(&self) -> $dst {
                    <$dst>::from_lanes(self.lanes().shuffle::<{ shuffle_mask_f64($a, $b) }>())
                }
            )+
        }
    };
}

macro_rules! swizzles3 {
    ($src:ty => $dst:ty { $($name:ident: $a:literal, $b:literal, $c:literal;)+ }) => {
        impl $src {
            $(
                #[doc = concat!("The `", stringify!($name), "` swizzle.")]
                #[inline]
                pub fn $name(&self) -> $dst {
                    <$dst>::from_lanes(self.lanes().shuffle::<{ pick3($a, $b, $c) }>())
                }
            )+
        }
    };
}

// Vector2

swizzles2!(Vector2 => Vector2 {
    xx: 0, 0; xy: 0, 1; yx: 1, 0; yy: 1, 1;
});

#[cfg(feature = "texture_swizzles")]
swizzles2!(Vector2 => Vector2 {
    uu: 0, 0; uv: 0, 1; vu: 1, 0; vv: 1, 1;
});

#[cfg(feature = "color_swizzles")]
swizzles2!(Vector2 => Vector2 {
    rr: 0, 0; rg: 0, 1; gr: 1, 0; gg: 1, 1;
});

// Vector2I

swizzles2!(Vector2I => Vector2I {
    xx: 0, 0; xy: 0, 1; yx: 1, 0; yy: 1, 1;
});

#[cfg(feature = "texture_swizzles")]
swizzles2!(Vector2I => Vector2I {
    uu: 0, 0; uv: 0, 1; vu: 1, 0; vv: 1, 1;
});

#[cfg(feature = "color_swizzles")]
swizzles2!(Vector2I => Vector2I {
    rr: 0, 0; rg: 0, 1; gr: 1, 0; gg: 1, 1;
});

// Vector2U

swizzles2!(Vector2U => Vector2U {
    xx: 0, 0; xy: 0, 1; yx: 1, 0; yy: 1, 1;
});

#[cfg(feature = "texture_swizzles")]
swizzles2!(Vector2U => Vector2U {
    uu: 0, 0; uv: 0, 1; vu: 1, 0; vv: 1, 1;
});

#[cfg(feature = "color_swizzles")]
swizzles2!(Vector2U => Vector2U {
    rr: 0, 0; rg: 0, 1; gr: 1, 0; gg: 1, 1;
});

// Vector2D

swizzles2_f64!(Vector2D => Vector2D {
    xx: 0, 0; xy: 0, 1; yx: 1, 0; yy: 1, 1;
});

#[cfg(feature = "texture_swizzles")]
swizzles2_f64!(Vector2D => Vector2D {
    uu: 0, 0; uv: 0, 1; vu: 1, 0; vv: 1, 1;
});

#[cfg(feature = "color_swizzles")]
swizzles2_f64!(Vector2D => Vector2D {
    rr: 0, 0; rg: 0, 1; gr: 1, 0; gg: 1, 1;
});

// Vector3

swizzles2!(Vector3 => Vector2 {
    xx: 0, 0; xy: 0, 1; xz: 0, 2; yx: 1, 0;
    yy: 1, 1; yz: 1, 2; zx: 2, 0; zy: 2, 1;
    zz: 2, 2;
});

swizzles3!(Vector3 => Vector3 {
    xxx: 0, 0, 0; xxy: 0, 0, 1; xxz: 0, 0, 2; xyx: 0, 1, 0;
    xyy: 0, 1, 1; xyz: 0, 1, 2; xzx: 0, 2, 0; xzy: 0, 2, 1;
    xzz: 0, 2, 2; yxx: 1, 0, 0; yxy: 1, 0, 1; yxz: 1, 0, 2;
    yyx: 1, 1, 0; yyy: 1, 1, 1; yyz: 1, 1, 2; yzx: 1, 2, 0;
    yzy: 1, 2, 1; yzz: 1, 2, 2; zxx: 2, 0, 0; zxy: 2, 0, 1;
    zxz: 2, 0, 2; zyx: 2, 1, 0; zyy: 2, 1, 1; zyz: 2, 1, 2;
    zzx: 2, 2, 0; zzy: 2, 2, 1; zzz: 2, 2, 2;
});

#[cfg(feature = "texture_swizzles")]
swizzles2!(Vector3 => Vector2 {
    uu: 0, 0; uv: 0, 1; uw: 0, 2; vu: 1, 0;
    vv: 1, 1; vw: 1, 2; wu: 2, 0; wv: 2, 1;
    ww: 2, 2;
});

#[cfg(feature = "texture_swizzles")]
swizzles3!(Vector3 => Vector3 {
    uuu: 0, 0, 0; uuv: 0, 0, 1; uuw: 0, 0, 2; uvu: 0, 1, 0;
    uvv: 0, 1, 1; uvw: 0, 1, 2; uwu: 0, 2, 0; uwv: 0, 2, 1;
    uww: 0, 2, 2; vuu: 1, 0, 0; vuv: 1, 0, 1; vuw: 1, 0, 2;
    vvu: 1, 1, 0; vvv: 1, 1, 1; vvw: 1, 1, 2; vwu: 1, 2, 0;
    vwv: 1, 2, 1; vww: 1, 2, 2; wuu: 2, 0, 0; wuv: 2, 0, 1;
    wuw: 2, 0, 2; wvu: 2, 1, 0; wvv: 2, 1, 1; wvw: 2, 1, 2;
    wwu: 2, 2, 0; wwv: 2, 2, 1; www: 2, 2, 2;
});

#[cfg(feature = "color_swizzles")]
swizzles2!(Vector3 => Vector2 {
    rr: 0, 0; rg: 0, 1; rb: 0, 2; gr: 1, 0;
    gg: 1, 1; gb: 1, 2; br: 2, 0; bg: 2, 1;
    bb: 2, 2;
});

#[cfg(feature = "color_swizzles")]
swizzles3!(Vector3 => Vector3 {
    rrr: 0, 0, 0; rrg: 0, 0, 1; rrb: 0, 0, 2; rgr: 0, 1, 0;
    rgg: 0, 1, 1; rgb: 0, 1, 2; rbr: 0, 2, 0; rbg: 0, 2, 1;
    rbb: 0, 2, 2; grr: 1, 0, 0; grg: 1, 0, 1; grb: 1, 0, 2;
    ggr: 1, 1, 0; ggg: 1, 1, 1; ggb: 1, 1, 2; gbr: 1, 2, 0;
    gbg: 1, 2, 1; gbb: 1, 2, 2; brr: 2, 0, 0; brg: 2, 0, 1;
    brb: 2, 0, 2; bgr: 2, 1, 0; bgg: 2, 1, 1; bgb: 2, 1, 2;
    bbr: 2, 2, 0; bbg: 2, 2, 1; bbb: 2, 2, 2;
});

// Vector4

swizzles2!(Vector4 => Vector2 {
    xx: 0, 0; xy: 0, 1; xz: 0, 2; xw: 0, 3;
    yx: 1, 0; yy: 1, 1; yz: 1, 2; yw: 1, 3;
    zx: 2, 0; zy: 2, 1; zz: 2, 2; zw: 2, 3;
    wx: 3, 0; wy: 3, 1; wz: 3, 2; ww: 3, 3;
});

swizzles3!(Vector4 => Vector3 {
    xxx: 0, 0, 0; xxy: 0, 0, 1; xxz: 0, 0, 2; xxw: 0, 0, 3;
    xyx: 0, 1, 0; xyy: 0, 1, 1; xyz: 0, 1, 2; xyw: 0, 1, 3;
    xzx: 0, 2, 0; xzy: 0, 2, 1; xzz: 0, 2, 2; xzw: 0, 2, 3;
    xwx: 0, 3, 0; xwy: 0, 3, 1; xwz: 0, 3, 2; xww: 0, 3, 3;
    yxx: 1, 0, 0; yxy: 1, 0, 1; yxz: 1, 0, 2; yxw: 1, 0, 3;
    yyx: 1, 1, 0; yyy: 1, 1, 1; yyz: 1, 1, 2; yyw: 1, 1, 3;
    yzx: 1, 2, 0; yzy: 1, 2, 1; yzz: 1, 2, 2; yzw: 1, 2, 3;
    ywx: 1, 3, 0; ywy: 1, 3, 1; ywz: 1, 3, 2; yww: 1, 3, 3;
    zxx: 2, 0, 0; zxy: 2, 0, 1; zxz: 2, 0, 2; zxw: 2, 0, 3;
    zyx: 2, 1, 0; zyy: 2, 1, 1; zyz: 2, 1, 2; zyw: 2, 1, 3;
    zzx: 2, 2, 0; zzy: 2, 2, 1; zzz: 2, 2, 2; zzw: 2, 2, 3;
    zwx: 2, 3, 0; zwy: 2, 3, 1; zwz: 2, 3, 2; zww: 2, 3, 3;
    wxx: 3, 0, 0; wxy: 3, 0, 1; wxz: 3, 0, 2; wxw: 3, 0, 3;
    wyx: 3, 1, 0; wyy: 3, 1, 1; wyz: 3, 1, 2; wyw: 3, 1, 3;
    wzx: 3, 2, 0; wzy: 3, 2, 1; wzz: 3, 2, 2; wzw: 3, 2, 3;
    wwx: 3, 3, 0; wwy: 3, 3, 1; wwz: 3, 3, 2; www: 3, 3, 3;
});

#[cfg(feature = "color_swizzles")]
swizzles2!(Vector4 => Vector2 {
    rr: 0, 0; rg: 0, 1; rb: 0, 2; ra: 0, 3;
    gr: 1, 0; gg: 1, 1; gb: 1, 2; ga: 1, 3;
    br: 2, 0; bg: 2, 1; bb: 2, 2; ba: 2, 3;
    ar: 3, 0; ag: 3, 1; ab: 3, 2; aa: 3, 3;
});

#[cfg(feature = "color_swizzles")]
swizzles3!(Vector4 => Vector3 {
    rrr: 0, 0, 0; rrg: 0, 0, 1; rrb: 0, 0, 2; rra: 0, 0, 3;
    rgr: 0, 1, 0; rgg: 0, 1, 1; rgb: 0, 1, 2; rga: 0, 1, 3;
    rbr: 0, 2, 0; rbg: 0, 2, 1; rbb: 0, 2, 2; rba: 0, 2, 3;
    rar: 0, 3, 0; rag: 0, 3, 1; rab: 0, 3, 2; raa: 0, 3, 3;
    grr: 1, 0, 0; grg: 1, 0, 1; grb: 1, 0, 2; gra: 1, 0, 3;
    ggr: 1, 1, 0; ggg: 1, 1, 1; ggb: 1, 1, 2; gga: 1, 1, 3;
    gbr: 1, 2, 0; gbg: 1, 2, 1; gbb: 1, 2, 2; gba: 1, 2, 3;
    gar: 1, 3, 0; gag: 1, 3, 1; gab: 1, 3, 2; gaa: 1, 3, 3;
    brr: 2, 0, 0; brg: 2, 0, 1; brb: 2, 0, 2; bra: 2, 0, 3;
    bgr: 2, 1, 0; bgg: 2, 1, 1; bgb: 2, 1, 2; bga: 2, 1, 3;
    bbr: 2, 2, 0; bbg: 2, 2, 1; bbb: 2, 2, 2; bba: 2, 2, 3;
    bar: 2, 3, 0; bag: 2, 3, 1; bab: 2, 3, 2; baa: 2, 3, 3;
    arr: 3, 0, 0; arg: 3, 0, 1; arb: 3, 0, 2; ara: 3, 0, 3;
    agr: 3, 1, 0; agg: 3, 1, 1; agb: 3, 1, 2; aga: 3, 1, 3;
    abr: 3, 2, 0; abg: 3, 2, 1; abb: 3, 2, 2; aba: 3, 2, 3;
    aar: 3, 3, 0; aag: 3, 3, 1; aab: 3, 3, 2; aaa: 3, 3, 3;
});
