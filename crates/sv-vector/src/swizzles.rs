//! Named swizzle accessors for [`UInt3`]
//!
//! Every ordered selection of two, three or four lanes is available in
//! both the `xyz` and the `rgb` spelling. Selections without a repeated
//! lane also get a `set_` method; the selector behind each setter is a
//! `const` [`WritableSwizzle`], so a repeated lane fails to compile.

use crate::component::Component;
use crate::swizzle::{Swizzle, WritableSwizzle};
use crate::vector::{UInt2, UInt4};
use crate::UInt3;

macro_rules! swizzle_reads {
    ($out:ident, $n:literal; $( $name:ident => [$( $c:ident ),+], )+) => {
        impl UInt3 {
            $(
                #[doc = concat!("Returns the `", stringify!($name), "` swizzle.")]
                #[inline]
                pub fn $name(&self) -> $out {
                    const SEL: Swizzle<$n> = Swizzle::new([$( Component::$c ),+]);
                    $out::from_array(self.swizzle(SEL))
                }
            )+
        }
    };
}

macro_rules! swizzle_writes {
    ($src:ident, $n:literal; $( $name:ident => [$( $c:ident ),+], )+) => {
        impl UInt3 {
            $(
                #[doc = concat!("Assigns the lanes of `value` through the `", stringify!($name), "` swizzle.")]
                #[inline]
                pub fn $name(&mut self, value: $src) {
                    const SEL: WritableSwizzle<$n> = WritableSwizzle::new([$( Component::$c ),+]);
                    self.set_swizzle(SEL, value.to_array());
                }
            )+
        }
    };
}

swizzle_reads! {
    UInt2, 2;
    xx => [X, X],
    rr => [X, X],
    xy => [X, Y],
    rg => [X, Y],
    xz => [X, Z],
    rb => [X, Z],
    yx => [Y, X],
    gr => [Y, X],
    yy => [Y, Y],
    gg => [Y, Y],
    yz => [Y, Z],
    gb => [Y, Z],
    zx => [Z, X],
    br => [Z, X],
    zy => [Z, Y],
    bg => [Z, Y],
    zz => [Z, Z],
    bb => [Z, Z],
}

swizzle_reads! {
    UInt3, 3;
    xxx => [X, X, X],
    rrr => [X, X, X],
    xxy => [X, X, Y],
    rrg => [X, X, Y],
    xxz => [X, X, Z],
    rrb => [X, X, Z],
    xyx => [X, Y, X],
    rgr => [X, Y, X],
    xyy => [X, Y, Y],
    rgg => [X, Y, Y],
    xyz => [X, Y, Z],
    rgb => [X, Y, Z],
    xzx => [X, Z, X],
    rbr => [X, Z, X],
    xzy => [X, Z, Y],
    rbg => [X, Z, Y],
    xzz => [X, Z, Z],
    rbb => [X, Z, Z],
    yxx => [Y, X, X],
    grr => [Y, X, X],
    yxy => [Y, X, Y],
    grg => [Y, X, Y],
    yxz => [Y, X, Z],
    grb => [Y, X, Z],
    yyx => [Y, Y, X],
    ggr => [Y, Y, X],
    yyy => [Y, Y, Y],
    ggg => [Y, Y, Y],
    yyz => [Y, Y, Z],
    ggb => [Y, Y, Z],
    yzx => [Y, Z, X],
    gbr => [Y, Z, X],
    yzy => [Y, Z, Y],
    gbg => [Y, Z, Y],
    yzz => [Y, Z, Z],
    gbb => [Y, Z, Z],
    zxx => [Z, X, X],
    brr => [Z, X, X],
    zxy => [Z, X, Y],
    brg => [Z, X, Y],
    zxz => [Z, X, Z],
    brb => [Z, X, Z],
    zyx => [Z, Y, X],
    bgr => [Z, Y, X],
    zyy => [Z, Y, Y],
    bgg => [Z, Y, Y],
    zyz => [Z, Y, Z],
    bgb => [Z, Y, Z],
    zzx => [Z, Z, X],
    bbr => [Z, Z, X],
    zzy => [Z, Z, Y],
    bbg => [Z, Z, Y],
    zzz => [Z, Z, Z],
    bbb => [Z, Z, Z],
}

swizzle_reads! {
    UInt4, 4;
    xxxx => [X, X, X, X],
    rrrr => [X, X, X, X],
    xxxy => [X, X, X, Y],
    rrrg => [X, X, X, Y],
    xxxz => [X, X, X, Z],
    rrrb => [X, X, X, Z],
    xxyx => [X, X, Y, X],
    rrgr => [X, X, Y, X],
    xxyy => [X, X, Y, Y],
    rrgg => [X, X, Y, Y],
    xxyz => [X, X, Y, Z],
    rrgb => [X, X, Y, Z],
    xxzx => [X, X, Z, X],
    rrbr => [X, X, Z, X],
    xxzy => [X, X, Z, Y],
    rrbg => [X, X, Z, Y],
    xxzz => [X, X, Z, Z],
    rrbb => [X, X, Z, Z],
    xyxx => [X, Y, X, X],
    rgrr => [X, Y, X, X],
    xyxy => [X, Y, X, Y],
    rgrg => [X, Y, X, Y],
    xyxz => [X, Y, X, Z],
    rgrb => [X, Y, X, Z],
    xyyx => [X, Y, Y, X],
    rggr => [X, Y, Y, X],
    xyyy => [X, Y, Y, Y],
    rggg => [X, Y, Y, Y],
    xyyz => [X, Y, Y, Z],
    rggb => [X, Y, Y, Z],
    xyzx => [X, Y, Z, X],
    rgbr => [X, Y, Z, X],
    xyzy => [X, Y, Z, Y],
    rgbg => [X, Y, Z, Y],
    xyzz => [X, Y, Z, Z],
    rgbb => [X, Y, Z, Z],
    xzxx => [X, Z, X, X],
    rbrr => [X, Z, X, X],
    xzxy => [X, Z, X, Y],
    rbrg => [X, Z, X, Y],
    xzxz => [X, Z, X, Z],
    rbrb => [X, Z, X, Z],
    xzyx => [X, Z, Y, X],
    rbgr => [X, Z, Y, X],
    xzyy => [X, Z, Y, Y],
    rbgg => [X, Z, Y, Y],
    xzyz => [X, Z, Y, Z],
    rbgb => [X, Z, Y, Z],
    xzzx => [X, Z, Z, X],
    rbbr => [X, Z, Z, X],
    xzzy => [X, Z, Z, Y],
    rbbg => [X, Z, Z, Y],
    xzzz => [X, Z, Z, Z],
    rbbb => [X, Z, Z, Z],
    yxxx => [Y, X, X, X],
    grrr => [Y, X, X, X],
    yxxy => [Y, X, X, Y],
    grrg => [Y, X, X, Y],
    yxxz => [Y, X, X, Z],
    grrb => [Y, X, X, Z],
    yxyx => [Y, X, Y, X],
    grgr => [Y, X, Y, X],
    yxyy => [Y, X, Y, Y],
    grgg => [Y, X, Y, Y],
    yxyz => [Y, X, Y, Z],
    grgb => [Y, X, Y, Z],
    yxzx => [Y, X, Z, X],
    grbr => [Y, X, Z, X],
    yxzy => [Y, X, Z, Y],
    grbg => [Y, X, Z, Y],
    yxzz => [Y, X, Z, Z],
    grbb => [Y, X, Z, Z],
    yyxx => [Y, Y, X, X],
    ggrr => [Y, Y, X, X],
    yyxy => [Y, Y, X, Y],
    ggrg => [Y, Y, X, Y],
    yyxz => [Y, Y, X, Z],
    ggrb => [Y, Y, X, Z],
    yyyx => [Y, Y, Y, X],
    gggr => [Y, Y, Y, X],
    yyyy => [Y, Y, Y, Y],
    gggg => [Y, Y, Y, Y],
    yyyz => [Y, Y, Y, Z],
    gggb => [Y, Y, Y, Z],
    yyzx => [Y, Y, Z, X],
    ggbr => [Y, Y, Z, X],
    yyzy => [Y, Y, Z, Y],
    ggbg => [Y, Y, Z, Y],
    yyzz => [Y, Y, Z, Z],
    ggbb => [Y, Y, Z, Z],
    yzxx => [Y, Z, X, X],
    gbrr => [Y, Z, X, X],
    yzxy => [Y, Z, X, Y],
    gbrg => [Y, Z, X, Y],
    yzxz => [Y, Z, X, Z],
    gbrb => [Y, Z, X, Z],
    yzyx => [Y, Z, Y, X],
    gbgr => [Y, Z, Y, X],
    yzyy => [Y, Z, Y, Y],
    gbgg => [Y, Z, Y, Y],
    yzyz => [Y, Z, Y, Z],
    gbgb => [Y, Z, Y, Z],
    yzzx => [Y, Z, Z, X],
    gbbr => [Y, Z, Z, X],
    yzzy => [Y, Z, Z, Y],
    gbbg => [Y, Z, Z, Y],
    yzzz => [Y, Z, Z, Z],
    gbbb => [Y, Z, Z, Z],
    zxxx => [Z, X, X, X],
    brrr => [Z, X, X, X],
    zxxy => [Z, X, X, Y],
    brrg => [Z, X, X, Y],
    zxxz => [Z, X, X, Z],
    brrb => [Z, X, X, Z],
    zxyx => [Z, X, Y, X],
    brgr => [Z, X, Y, X],
    zxyy => [Z, X, Y, Y],
    brgg => [Z, X, Y, Y],
    zxyz => [Z, X, Y, Z],
    brgb => [Z, X, Y, Z],
    zxzx => [Z, X, Z, X],
    brbr => [Z, X, Z, X],
    zxzy => [Z, X, Z, Y],
    brbg => [Z, X, Z, Y],
    zxzz => [Z, X, Z, Z],
    brbb => [Z, X, Z, Z],
    zyxx => [Z, Y, X, X],
    bgrr => [Z, Y, X, X],
    zyxy => [Z, Y, X, Y],
    bgrg => [Z, Y, X, Y],
    zyxz => [Z, Y, X, Z],
    bgrb => [Z, Y, X, Z],
    zyyx => [Z, Y, Y, X],
    bggr => [Z, Y, Y, X],
    zyyy => [Z, Y, Y, Y],
    bggg => [Z, Y, Y, Y],
    zyyz => [Z, Y, Y, Z],
    bggb => [Z, Y, Y, Z],
    zyzx => [Z, Y, Z, X],
    bgbr => [Z, Y, Z, X],
    zyzy => [Z, Y, Z, Y],
    bgbg => [Z, Y, Z, Y],
    zyzz => [Z, Y, Z, Z],
    bgbb => [Z, Y, Z, Z],
    zzxx => [Z, Z, X, X],
    bbrr => [Z, Z, X, X],
    zzxy => [Z, Z, X, Y],
    bbrg => [Z, Z, X, Y],
    zzxz => [Z, Z, X, Z],
    bbrb => [Z, Z, X, Z],
    zzyx => [Z, Z, Y, X],
    bbgr => [Z, Z, Y, X],
    zzyy => [Z, Z, Y, Y],
    bbgg => [Z, Z, Y, Y],
    zzyz => [Z, Z, Y, Z],
    bbgb => [Z, Z, Y, Z],
    zzzx => [Z, Z, Z, X],
    bbbr => [Z, Z, Z, X],
    zzzy => [Z, Z, Z, Y],
    bbbg => [Z, Z, Z, Y],
    zzzz => [Z, Z, Z, Z],
    bbbb => [Z, Z, Z, Z],
}

swizzle_writes! {
    UInt2, 2;
    set_xy => [X, Y],
    set_rg => [X, Y],
    set_xz => [X, Z],
    set_rb => [X, Z],
    set_yx => [Y, X],
    set_gr => [Y, X],
    set_yz => [Y, Z],
    set_gb => [Y, Z],
    set_zx => [Z, X],
    set_br => [Z, X],
    set_zy => [Z, Y],
    set_bg => [Z, Y],
}

swizzle_writes! {
    UInt3, 3;
    set_xyz => [X, Y, Z],
    set_rgb => [X, Y, Z],
    set_xzy => [X, Z, Y],
    set_rbg => [X, Z, Y],
    set_yxz => [Y, X, Z],
    set_grb => [Y, X, Z],
    set_yzx => [Y, Z, X],
    set_gbr => [Y, Z, X],
    set_zxy => [Z, X, Y],
    set_brg => [Z, X, Y],
    set_zyx => [Z, Y, X],
    set_bgr => [Z, Y, X],
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_lane_reads() {
        let v = UInt3::new(1, 2, 3);
        assert_eq!(v.xy(), UInt2::new(1, 2));
        assert_eq!(v.zx(), UInt2::new(3, 1));
        assert_eq!(v.gb(), UInt2::new(2, 3));
        assert_eq!(v.yy(), UInt2::new(2, 2));
    }

    #[test]
    fn test_three_lane_reads() {
        let v = UInt3::new(10, 20, 30);
        assert_eq!(v.xyz(), v);
        assert_eq!(v.rgb(), v);
        assert_eq!(v.zyx(), UInt3::new(30, 20, 10));
        assert_eq!(v.bgr(), UInt3::new(30, 20, 10));
        assert_eq!(v.xxz(), UInt3::new(10, 10, 30));
    }

    #[test]
    fn test_four_lane_reads() {
        let v = UInt3::new(7, 8, 9);
        assert_eq!(v.xyzx(), UInt4::new(7, 8, 9, 7));
        assert_eq!(v.bbbb(), UInt4::splat(9));
        assert_eq!(v.zyxy(), UInt4::new(9, 8, 7, 8));
    }

    #[test]
    fn test_setters_write_in_order() {
        let mut v = UInt3::ZERO;
        v.set_zyx(UInt3::new(1, 2, 3));
        assert_eq!(v, UInt3::new(3, 2, 1));

        v.set_yx(UInt2::new(40, 50));
        assert_eq!(v, UInt3::new(50, 40, 1));

        v.set_br(UInt2::new(6, 7));
        assert_eq!(v, UInt3::new(7, 40, 6));
    }

    #[test]
    fn test_set_then_get_same_selection() {
        let mut v = UInt3::new(1, 2, 3);
        v.set_zxy(UInt3::new(4, 5, 6));
        assert_eq!(v.zxy(), UInt3::new(4, 5, 6));
        assert_eq!(v, UInt3::new(5, 6, 4));
    }
}
