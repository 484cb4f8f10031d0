//! Base-e and base-2 exponentials.
//!
//! Both reduce to one polynomial kernel for `e^r` on `|r| <= ln(2)/2` and an
//! exponent shift. The reduction constant ln(2) is split Cody–Waite style into
//! a high part with trailing zero mantissa bits (so `k * LN2_HI` is exact for
//! every relevant `k`) and a low correction, keeping the reduced argument
//! accurate despite the cancellation in `x - k*ln2`.
//!
//! Coefficient and constant bit patterns are spelled as `from_bits` so the
//! values are pinned exactly; the decimal in the comment is the rendering.

use crate::Sf32;

/// High part of ln(2): 0.693145751953125, mantissa ends in 9 zero bits.
const LN2_HI: Sf32 = Sf32::from_bits(0x3F31_7200);
/// Low part of ln(2): 1.4286068e-6.
const LN2_LO: Sf32 = Sf32::from_bits(0x35BF_BE8E);
/// log2(e) = 1.4426950.
const LOG2_E: Sf32 = Sf32::from_bits(0x3FB8_AA3B);
/// ln(2) = 0.6931472.
const LN_2: Sf32 = Sf32::from_bits(0x3F31_7218);

/// Above this, exp overflows every finite f32: exp(89) > 2^128.
const EXP_HI: Sf32 = Sf32::from_bits(0x42B2_0000); // 89.0
/// Below this, exp underflows even the subnormals: exp(-104) < 2^-150.
const EXP_LO: Sf32 = Sf32::from_bits(0xC2D0_0000); // -104.0

// Taylor coefficients 1/2! .. 1/7!; the degree-7 tail at |r| <= 0.3466 is
// below 2^-27, so the polynomial error is dominated by evaluation rounding.
const P2: Sf32 = Sf32::from_bits(0x3F00_0000); // 0.5
const P3: Sf32 = Sf32::from_bits(0x3E2A_AAAB); // 0.16666667
const P4: Sf32 = Sf32::from_bits(0x3D2A_AAAB); // 0.041666668
const P5: Sf32 = Sf32::from_bits(0x3C08_8889); // 0.008333334
const P6: Sf32 = Sf32::from_bits(0x3AB6_0B61); // 0.0013888889
const P7: Sf32 = Sf32::from_bits(0x3950_0D01); // 0.00019841270

/// Polynomial for e^r on the reduced interval.
pub(crate) fn exp_kernel(r: Sf32) -> Sf32 {
    let p = ((((P7 * r + P6) * r + P5) * r + P4) * r + P3) * r + P2;
    (p * r + Sf32::ONE) * r + Sf32::ONE
}

impl Sf32 {
    /// The exponential function e^x.
    ///
    /// `exp(+inf) = +inf`, `exp(-inf) = +0`, `exp(NaN) = NaN`; finite results
    /// underflow gradually through the subnormals.
    pub fn exp(self) -> Self {
        if self.is_nan() {
            return Self::NAN;
        }
        if self.is_infinite() {
            return if self.is_sign_negative() {
                Self::ZERO
            } else {
                Self::INFINITY
            };
        }
        // Saturate far outside the representable range; this also bounds k
        // before the integer conversion below.
        if self > EXP_HI {
            return Self::INFINITY;
        }
        if self < EXP_LO {
            return Self::ZERO;
        }

        // x = k*ln2 + r with k = round(x / ln2), |r| <= ln2/2.
        let kf = (self * LOG2_E).round();
        let k = kf.to_i32_saturating();
        let r = (self - kf * LN2_HI) - kf * LN2_LO;
        exp_kernel(r).ldexp(k)
    }

    /// The base-2 exponential 2^x.
    ///
    /// Reduction is exact here: `k = round(x)` and `f = x - k` drops no bits,
    /// so only the `f*ln2` product and the shared kernel round.
    pub fn exp2(self) -> Self {
        if self.is_nan() {
            return Self::NAN;
        }
        if self.is_infinite() {
            return if self.is_sign_negative() {
                Self::ZERO
            } else {
                Self::INFINITY
            };
        }
        if self > Self::from_bits(0x4301_0000) {
            // 129.0
            return Self::INFINITY;
        }
        if self < Self::from_bits(0xC317_0000) {
            // -151.0
            return Self::ZERO;
        }
        let kf = self.round();
        let k = kf.to_i32_saturating();
        let r = (self - kf) * LN_2;
        exp_kernel(r).ldexp(k)
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
    fn known_points() {
        assert_eq!(sf(0.0).exp().to_bits(), Sf32::ONE.to_bits());
        assert_eq!(Sf32::NEG_ZERO.exp().to_bits(), Sf32::ONE.to_bits());
        assert_close(sf(1.0).exp(), std::f32::consts::E, "exp(1)");
        assert_close(sf(-1.0).exp(), 1.0 / std::f32::consts::E, "exp(-1)");
        assert_close(sf(5.0).exp(), 5.0f32.exp(), "exp(5)");
        assert_close(sf(-20.0).exp(), (-20.0f32).exp(), "exp(-20)");
        assert_close(sf(87.0).exp(), 87.0f32.exp(), "exp(87)");
    }

    #[test]
    fn exp2_hits_powers_of_two_exactly() {
        for k in [-149i32, -126, -1, 0, 1, 10, 127] {
            let x = Sf32::from(k);
            assert_eq!(
                x.exp2().to_bits(),
                Sf32::ONE.ldexp(k).to_bits(),
                "2^{k}"
            );
        }
        assert_close(sf(0.5).exp2(), 2.0f32.sqrt(), "2^0.5");
        assert_close(sf(-2.5).exp2(), (-2.5f32).exp2(), "2^-2.5");
    }

    #[test]
    fn saturation_and_specials() {
        assert_eq!(sf(100.0).exp().to_bits(), Sf32::INFINITY.to_bits());
        assert_eq!(sf(-200.0).exp().to_bits(), 0);
        assert_eq!(Sf32::INFINITY.exp().to_bits(), Sf32::INFINITY.to_bits());
        assert_eq!(Sf32::NEG_INFINITY.exp().to_bits(), 0);
        assert!(Sf32::NAN.exp().is_nan());
        // Gradual underflow region: exp(-100) is subnormal but non-zero.
        let tiny = sf(-100.0).exp();
        assert!(tiny.is_subnormal(), "exp(-100) = {tiny:?}");
    }
}
