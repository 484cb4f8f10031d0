//! Inverse trigonometric functions: asin, acos, atan and atan2.
//!
//! asin and acos share one polynomial on `[0, 0.5]` plus the half-angle
//! identity `asin(x) = pi/2 - 2*asin(sqrt((1-x)/2))` for the outer range;
//! atan reduces through its addition formula to an interval around zero
//! anchored at atan(1) and atan(inf). atan2 is pure quadrant bookkeeping on
//! top of atan.

use crate::Sf32;

/// pi = 3.1415927.
const PI: Sf32 = Sf32::from_bits(0x4049_0FDB);
/// pi/2 = 1.5707964.
const FRAC_PI_2: Sf32 = Sf32::from_bits(0x3FC9_0FDB);
/// pi/4 = 0.7853982.
const FRAC_PI_4: Sf32 = Sf32::from_bits(0x3F49_0FDB);
/// 3*pi/4 = 2.3561945.
const FRAC_3PI_4: Sf32 = Sf32::from_bits(0x4016_CBE4);
/// tan(pi/8): below this atan needs no reduction.
const TAN_PI_8: Sf32 = Sf32::from_bits(0x3ED4_13CD);
/// tan(3*pi/8): above this atan folds through pi/2.
const TAN_3PI_8: Sf32 = Sf32::from_bits(0x401A_827A);

// Cephes asinf kernel on [0, 0.5]: asin(x) ~ x + x^3 * P(x^2).
const ASIN_C0: Sf32 = Sf32::from_bits(0x3D2C_B352); // 0.042163199
const ASIN_C1: Sf32 = Sf32::from_bits(0x3CC6_17E3); // 0.024181311
const ASIN_C2: Sf32 = Sf32::from_bits(0x3D3A_3EC7); // 0.045470026
const ASIN_C3: Sf32 = Sf32::from_bits(0x3D99_80F6); // 0.074953003
const ASIN_C4: Sf32 = Sf32::from_bits(0x3E2A_AAE4); // 0.16666752

// Cephes atanf kernel on [0, tan(pi/8)]: atan(x) ~ x + x^3 * Q(x^2).
const ATAN_C0: Sf32 = Sf32::from_bits(0x3DA4_F0D1); // 0.080537445
const ATAN_C1: Sf32 = Sf32::from_bits(0xBE0E_1B85); // -0.13877686
const ATAN_C2: Sf32 = Sf32::from_bits(0x3E4C_925F); // 0.19977711
const ATAN_C3: Sf32 = Sf32::from_bits(0xBEAA_AA2A); // -0.33332949

/// Shared polynomial: asin on `[0, 0.5]` evaluated at `x` with `z = x*x`.
fn asin_kernel(x: Sf32, z: Sf32) -> Sf32 {
    let p = ((((ASIN_C0 * z + ASIN_C1) * z + ASIN_C2) * z + ASIN_C3) * z + ASIN_C4) * z;
    p * x + x
}

impl Sf32 {
    /// Arcsine, in `[-pi/2, pi/2]`. Outside `[-1, 1]` (and for NaN) the
    /// result is NaN.
    pub fn asin(self) -> Self {
        if self.is_nan() {
            return Self::NAN;
        }
        let a = self.abs();
        if a > Self::ONE {
            return Self::NAN;
        }
        let r = if a > Self::HALF {
            // asin(x) = pi/2 - 2*asin(sqrt((1 - x)/2)) on (0.5, 1].
            let z = Self::HALF * (Self::ONE - a);
            let s = z.sqrt();
            let inner = asin_kernel(s, z);
            FRAC_PI_2 - (inner + inner)
        } else {
            asin_kernel(a, a * a)
        };
        r.copysign(self)
    }

    /// Arccosine, in `[0, pi]`. Outside `[-1, 1]` (and for NaN) the result is
    /// NaN.
    pub fn acos(self) -> Self {
        if self.is_nan() {
            return Self::NAN;
        }
        let a = self.abs();
        if a > Self::ONE {
            return Self::NAN;
        }
        if a > Self::HALF {
            // Half-angle form keeps full accuracy as |x| approaches 1, where
            // pi/2 - asin(x) would cancel.
            let z = Self::HALF * (Self::ONE - a);
            let s = z.sqrt();
            let inner = asin_kernel(s, z);
            let two_inner = inner + inner;
            if self.is_sign_negative() {
                PI - two_inner
            } else {
                two_inner
            }
        } else {
            FRAC_PI_2 - self.asin()
        }
    }

    /// Arctangent, in `(-pi/2, pi/2)`; `atan(±inf) = ±pi/2`.
    pub fn atan(self) -> Self {
        if self.is_nan() {
            return Self::NAN;
        }
        if self.is_infinite() {
            return FRAC_PI_2.copysign(self);
        }
        let a = self.abs();
        let (anchor, w) = if a > TAN_3PI_8 {
            (FRAC_PI_2, -(Self::ONE / a))
        } else if a > TAN_PI_8 {
            (FRAC_PI_4, (a - Self::ONE) / (a + Self::ONE))
        } else {
            (Self::ZERO, a)
        };
        let z = w * w;
        let p = ((ATAN_C0 * z + ATAN_C1) * z + ATAN_C2) * z + ATAN_C3;
        let r = anchor + (p * z * w + w);
        r.copysign(self)
    }

    /// Four-quadrant arctangent of `self / x` (`self` is the ordinate).
    ///
    /// Both-zero input returns +0 by this library's convention, whatever the
    /// zero signs; a zero ordinate otherwise picks ±0 or ±pi from the sign of
    /// `x` (carrying the ordinate's sign), a zero abscissa ±pi/2 from the
    /// sign of `self`. Infinities resolve to the usual quadrant diagonals.
    pub fn atan2(self, x: Self) -> Self {
        let y = self;
        if y.is_nan() || x.is_nan() {
            return Self::NAN;
        }
        if y.is_zero() {
            if x.is_zero() {
                return Self::ZERO;
            }
            return if x.is_sign_negative() {
                PI.copysign(y)
            } else {
                y
            };
        }
        if x.is_zero() {
            return FRAC_PI_2.copysign(y);
        }
        if y.is_infinite() {
            let r = if x.is_infinite() {
                if x.is_sign_negative() {
                    FRAC_3PI_4
                } else {
                    FRAC_PI_4
                }
            } else {
                FRAC_PI_2
            };
            return r.copysign(y);
        }
        if x.is_infinite() {
            return if x.is_sign_negative() {
                PI.copysign(y)
            } else {
                Self::ZERO.copysign(y)
            };
        }
        let a = (y / x).abs().atan();
        let r = if x.is_sign_negative() { PI - a } else { a };
        r.copysign(y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sf(v: f32) -> Sf32 {
        Sf32::from_f32(v)
    }

    fn assert_close(ours: Sf32, expected: f32, what: &str) {
        let a = ours.to_f32() as f64;
        let e = expected as f64;
        let tol = 1e-6 * (e.abs() + 1.0);
        assert!((a - e).abs() <= tol, "{what}: {a} vs {e}");
    }

    #[test]
    fn asin_known_points() {
        assert_eq!(sf(0.0).asin().to_bits(), 0);
        assert_eq!(Sf32::NEG_ZERO.asin().to_bits(), 0x8000_0000);
        assert_close(sf(0.5).asin(), 0.5f32.asin(), "asin(0.5)");
        assert_close(sf(-0.5).asin(), (-0.5f32).asin(), "asin(-0.5)");
        assert_close(sf(0.9).asin(), 0.9f32.asin(), "asin(0.9)");
        assert_close(sf(1.0).asin(), std::f32::consts::FRAC_PI_2, "asin(1)");
        assert_close(sf(-1.0).asin(), -std::f32::consts::FRAC_PI_2, "asin(-1)");
    }

    #[test]
    fn acos_known_points() {
        assert_close(sf(0.0).acos(), std::f32::consts::FRAC_PI_2, "acos(0)");
        assert_close(sf(0.5).acos(), 0.5f32.acos(), "acos(0.5)");
        assert_close(sf(-0.5).acos(), (-0.5f32).acos(), "acos(-0.5)");
        assert_eq!(sf(1.0).acos().to_bits(), 0, "acos(1) is exactly +0");
        assert_close(sf(-1.0).acos(), std::f32::consts::PI, "acos(-1)");
        assert_close(sf(0.99).acos(), 0.99f32.acos(), "acos(0.99)");
    }

    #[test]
    fn asin_acos_domain_errors() {
        assert!(sf(1.0000001).asin().is_nan());
        assert!(sf(-1.5).asin().is_nan());
        assert!(sf(2.0).acos().is_nan());
        assert!(Sf32::INFINITY.asin().is_nan());
        assert!(Sf32::NAN.acos().is_nan());
    }

    #[test]
    fn atan_across_all_reduction_ranges() {
        for x in [0.0f32, 0.1, 0.4, 0.5, 1.0, 1.5, 2.0, 2.5, 10.0, 1e6] {
            assert_close(sf(x).atan(), x.atan(), "atan");
            assert_close(sf(-x).atan(), (-x).atan(), "atan neg");
        }
        assert_close(Sf32::INFINITY.atan(), std::f32::consts::FRAC_PI_2, "atan(inf)");
        assert_eq!(Sf32::NEG_ZERO.atan().to_bits(), 0x8000_0000);
    }

    #[test]
    fn atan2_quadrants() {
        let pi = std::f32::consts::PI;
        assert_close(sf(1.0).atan2(sf(1.0)), pi / 4.0, "q1");
        assert_close(sf(1.0).atan2(sf(-1.0)), 3.0 * pi / 4.0, "q2");
        assert_close(sf(-1.0).atan2(sf(-1.0)), -3.0 * pi / 4.0, "q3");
        assert_close(sf(-1.0).atan2(sf(1.0)), -pi / 4.0, "q4");
        assert_close(sf(2.0).atan2(sf(0.0)), pi / 2.0, "up");
        assert_close(sf(-2.0).atan2(sf(0.0)), -pi / 2.0, "down");
        assert_close(sf(0.0).atan2(sf(-3.0)), pi, "left");
        assert_eq!(sf(0.0).atan2(sf(3.0)).to_bits(), 0, "right");
    }

    #[test]
    fn atan2_zero_zero_is_positive_zero_by_convention() {
        // Whatever the zero signs: this library pins atan2(0, 0) to +0.
        assert_eq!(Sf32::ZERO.atan2(Sf32::ZERO).to_bits(), 0);
        assert_eq!(Sf32::NEG_ZERO.atan2(Sf32::ZERO).to_bits(), 0);
        assert_eq!(Sf32::ZERO.atan2(Sf32::NEG_ZERO).to_bits(), 0);
        assert_eq!(Sf32::NEG_ZERO.atan2(Sf32::NEG_ZERO).to_bits(), 0);
    }

    #[test]
    fn atan2_infinities() {
        let pi = std::f32::consts::PI;
        assert_close(
            Sf32::INFINITY.atan2(Sf32::INFINITY),
            pi / 4.0,
            "inf/inf",
        );
        assert_close(
            Sf32::INFINITY.atan2(Sf32::NEG_INFINITY),
            3.0 * pi / 4.0,
            "inf/-inf",
        );
        assert_close(
            Sf32::NEG_INFINITY.atan2(Sf32::NEG_INFINITY),
            -3.0 * pi / 4.0,
            "-inf/-inf",
        );
        assert_close(sf(5.0).atan2(Sf32::NEG_INFINITY), pi, "finite/-inf");
        assert_eq!(sf(5.0).atan2(Sf32::INFINITY).to_bits(), 0, "finite/inf");
        assert_close(Sf32::INFINITY.atan2(sf(7.0)), pi / 2.0, "inf/finite");
        assert!(Sf32::NAN.atan2(sf(1.0)).is_nan());
        assert!(sf(1.0).atan2(Sf32::NAN).is_nan());
    }
}
