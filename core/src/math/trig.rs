//! Sine, cosine and tangent.
//!
//! # Range reduction without a double
//!
//! The kernels only cover `|r| <= pi/4`, so every other argument must be
//! rewritten as `x = n*(pi/2) + r`. Doing that subtraction in f32 loses the
//! quadrant entirely once `x` is large — and this library has no higher
//! float precision to borrow. Instead the reduction is pure integer
//! arithmetic: with `|x| = sig * 2^e2` (24-bit `sig`), the product
//! `x * (2/pi)` is formed against a 96-bit window of the binary expansion of
//! 2/pi. Bits of 2/pi weighty enough that their contribution to the product
//! is a multiple of 4 are skipped — full turns do not move the quadrant —
//! and bits past the window only perturb the product below 2^-70. The top
//! two bits of the product's integer part give the quadrant, the top 64
//! fraction bits rebuild `r` to far more precision than the worst f32 case
//! needs (the f32 nearest a multiple of pi/2 still sits ~2^-31 away).
//!
//! The expansion words are the classic FDLIBM 2/pi table regrouped to 32-bit
//! limbs. Everything stays in `u32`/`u64`/`u128`, so reduction is exactly as
//! deterministic as the rest of the engine.

use crate::bits::{round_pack, shift_right_sticky64, unpack_finite};
use crate::Sf32;

/// Binary expansion of 2/pi: bit `32i+1 ..= 32i+32` of the fraction in word
/// `i`. Twelve words cover the largest finite exponent with room to spare.
const TWO_OVER_PI: [u32; 12] = [
    0xA2F9_836E, 0x4E44_1529, 0xFC27_57D1, 0xF534_DDC0, 0xDB62_9599, 0x3C43_9041,
    0xFE51_63AB, 0xDEBB_C561, 0xB724_6E3A, 0x424D_D2E0, 0x0649_2EEA, 0x09D1_921C,
];

/// pi/4 = 0.7853982, the no-reduction threshold.
const FRAC_PI_4: Sf32 = Sf32::from_bits(0x3F49_0FDB);
/// pi/2 = 1.5707964, scale factor rebuilding r from the product fraction.
const FRAC_PI_2: Sf32 = Sf32::from_bits(0x3FC9_0FDB);

// Cephes sinf kernel: sin(x) ~ x + x^3*(S1 + z*(S2 + z*S3)), z = x^2.
const SIN_C1: Sf32 = Sf32::from_bits(0xBE2A_AAA3); // -0.16666655
const SIN_C2: Sf32 = Sf32::from_bits(0x3C08_839E); // 0.0083321609
const SIN_C3: Sf32 = Sf32::from_bits(0xB94C_A1F9); // -0.00019515296

// Cephes cosf kernel: cos(x) ~ 1 - z/2 + z^2*(C3 + z*(C2 + z*C1)).
const COS_C1: Sf32 = Sf32::from_bits(0x37CC_F5CE); // 0.000024433157
const COS_C2: Sf32 = Sf32::from_bits(0xBAB6_061A); // -0.0013887316
const COS_C3: Sf32 = Sf32::from_bits(0x3D2A_AAA5); // 0.041666646

// Cephes tanf kernel polynomial, ascending in z = x^2.
const TAN_C0: Sf32 = Sf32::from_bits(0x3C19_C53B); // 0.0093854018
const TAN_C1: Sf32 = Sf32::from_bits(0x3B4C_779C); // 0.0031199223
const TAN_C2: Sf32 = Sf32::from_bits(0x3CC8_21B5); // 0.024430135
const TAN_C3: Sf32 = Sf32::from_bits(0x3D5A_C5C9); // 0.053411281
const TAN_C4: Sf32 = Sf32::from_bits(0x3E08_96DD); // 0.13338800
const TAN_C5: Sf32 = Sf32::from_bits(0x3EAA_AA6F); // 0.33333157

/// Builds an [`Sf32`] from a sign and a Q0.64 fixed-point magnitude.
fn q64_to_sf32(negative: bool, m: u64) -> Sf32 {
    let s = negative as u32;
    if m == 0 {
        return Sf32::from_bits(s << 31);
    }
    if m <= u32::MAX as u64 {
        // value = m * 2^-64 in the round_pack frame.
        Sf32::from_bits(round_pack(s, 127 + 26 - 64, m as u32))
    } else {
        let shift = 32 - m.leading_zeros();
        let sig = shift_right_sticky64(m, shift) as u32;
        Sf32::from_bits(round_pack(s, 127 + 26 - 64 + shift as i32, sig))
    }
}

/// Reduces a finite `x >= pi/4` by pi/2: returns the quadrant (mod 4) and the
/// remainder `r` with `|r| <= pi/4`.
fn reduce_pio2(x: Sf32) -> (u32, Sf32) {
    let (be, sig) = unpack_finite(x.to_bits());
    let e2 = be - 127 - 23; // |x| = sig * 2^e2, e2 in [-24, 104]

    // Skip the 2/pi bits whose product with sig is a multiple of 4: bit j
    // contributes sig * 2^(e2-j), an exact multiple of 4 whenever j <= e2-2.
    let start = if e2 > 2 { (e2 - 2) as u32 } else { 0 };
    let skip = (start >> 5) as usize;
    let off = start & 31;
    let window = |i: usize| -> u32 {
        if off == 0 {
            TWO_OVER_PI[skip + i]
        } else {
            (TWO_OVER_PI[skip + i] << off) | (TWO_OVER_PI[skip + i + 1] >> (32 - off))
        }
    };
    let w96 = ((window(0) as u128) << 64) | ((window(1) as u128) << 32) | window(2) as u128;

    // p = |x| * 2/pi = P * 2^-d (mod 4), with the quadrant in bits d+1..d and
    // the fraction below them.
    let p = sig as u128 * w96;
    let d = (96 + start as i32 - e2) as u32;
    let mut quadrant = ((p >> d) & 3) as u32;
    let frac = (p >> (d - 64)) as u64;

    // Round to the nearest multiple of pi/2 so |r| stays within the kernels.
    let negative = frac >= 1 << 63;
    let m = if negative {
        quadrant = (quadrant + 1) & 3;
        frac.wrapping_neg()
    } else {
        frac
    };
    (quadrant, q64_to_sf32(negative, m) * FRAC_PI_2)
}

/// Sine polynomial for `|r| <= pi/4`.
fn sin_kernel(r: Sf32) -> Sf32 {
    let z = r * r;
    let p = (SIN_C3 * z + SIN_C2) * z + SIN_C1;
    r + r * z * p
}

/// Cosine polynomial for `|r| <= pi/4`.
fn cos_kernel(r: Sf32) -> Sf32 {
    let z = r * r;
    let p = (COS_C1 * z + COS_C2) * z + COS_C3;
    Sf32::ONE - Sf32::HALF * z + z * z * p
}

/// Tangent polynomial for `|r| <= pi/4`; `cot` flips to `-1/tan` for the odd
/// quadrants, where a zero remainder correctly blows up to infinity.
fn tan_kernel(r: Sf32, odd_quadrant: bool) -> Sf32 {
    let z = r * r;
    let p = ((((TAN_C0 * z + TAN_C1) * z + TAN_C2) * z + TAN_C3) * z + TAN_C4) * z + TAN_C5;
    let y = r + r * z * p;
    if odd_quadrant {
        -(Sf32::ONE / y)
    } else {
        y
    }
}

impl Sf32 {
    /// Sine (argument in radians). Infinity and NaN give NaN.
    pub fn sin(self) -> Self {
        if self.is_nan() || self.is_infinite() {
            return Self::NAN;
        }
        if self.is_zero() {
            return self;
        }
        let a = self.abs();
        if a < FRAC_PI_4 {
            return sin_kernel(self);
        }
        let (q, r) = reduce_pio2(a);
        let v = match q {
            0 => sin_kernel(r),
            1 => cos_kernel(r),
            2 => -sin_kernel(r),
            _ => -cos_kernel(r),
        };
        if self.is_sign_negative() {
            -v
        } else {
            v
        }
    }

    /// Cosine (argument in radians). Infinity and NaN give NaN.
    pub fn cos(self) -> Self {
        if self.is_nan() || self.is_infinite() {
            return Self::NAN;
        }
        let a = self.abs();
        if a < FRAC_PI_4 {
            return cos_kernel(a);
        }
        let (q, r) = reduce_pio2(a);
        match q {
            0 => cos_kernel(r),
            1 => -sin_kernel(r),
            2 => -cos_kernel(r),
            _ => sin_kernel(r),
        }
    }

    /// Sine and cosine together, sharing one range reduction.
    pub fn sin_cos(self) -> (Self, Self) {
        if self.is_nan() || self.is_infinite() {
            return (Self::NAN, Self::NAN);
        }
        let a = self.abs();
        let (s, c) = if a < FRAC_PI_4 {
            (sin_kernel(a), cos_kernel(a))
        } else {
            let (q, r) = reduce_pio2(a);
            let sk = sin_kernel(r);
            let ck = cos_kernel(r);
            match q {
                0 => (sk, ck),
                1 => (ck, -sk),
                2 => (-sk, -ck),
                _ => (-ck, sk),
            }
        };
        if self.is_sign_negative() {
            (-s, c)
        } else {
            (s, c)
        }
    }

    /// Tangent (argument in radians). Infinity and NaN give NaN.
    pub fn tan(self) -> Self {
        if self.is_nan() || self.is_infinite() {
            return Self::NAN;
        }
        if self.is_zero() {
            return self;
        }
        let a = self.abs();
        let v = if a < FRAC_PI_4 {
            tan_kernel(a, false)
        } else {
            let (q, r) = reduce_pio2(a);
            tan_kernel(r, q & 1 == 1)
        };
        if self.is_sign_negative() {
            -v
        } else {
            v
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sf(v: f32) -> Sf32 {
        Sf32::from_f32(v)
    }

    fn assert_close(ours: Sf32, expected: f32, tol: f64, what: &str) {
        let a = ours.to_f32() as f64;
        let e = expected as f64;
        assert!((a - e).abs() <= tol, "{what}: {a} vs {e}");
    }

    #[test]
    fn quadrant_mapping_is_right_around_the_circle() {
        let pi = std::f32::consts::PI;
        for k in -8i32..=8 {
            let x = k as f32 * pi / 4.0;
            assert_close(sf(x).sin(), x.sin(), 1e-6, "sin");
            assert_close(sf(x).cos(), x.cos(), 1e-6, "cos");
        }
    }

    #[test]
    fn reduction_survives_large_arguments() {
        // The quadrant (and so the sign) must still be right far away from 0,
        // where naive f32 subtraction would have lost everything.
        for x in [1e3f32, 12345.678, 1e5, 1e7, 1e9, 1e20, 3e38] {
            let (s, c) = sf(x).sin_cos();
            let identity = s * s + c * c;
            assert_close(identity, 1.0, 1e-5, &format!("sin^2+cos^2 at {x}"));
            assert_close(sf(x).sin(), x.sin(), 5e-3 * (x.sin().abs() as f64 + 1.0), "sin");
            assert_close(sf(x).cos(), x.cos(), 5e-3 * (x.cos().abs() as f64 + 1.0), "cos");
        }
    }

    #[test]
    fn sin_cos_agrees_with_the_separate_paths() {
        for i in 0..100 {
            let x = (i as f32 - 50.0) * 0.37;
            let (s, c) = sf(x).sin_cos();
            assert_eq!(s.to_bits(), sf(x).sin().to_bits(), "sin at {x}");
            assert_eq!(c.to_bits(), sf(x).cos().to_bits(), "cos at {x}");
        }
    }

    #[test]
    fn tan_tracks_native() {
        for x in [0.3f32, 1.0, 2.0, -1.3, 4.7, 100.0] {
            let t = sf(x).tan().to_f32() as f64;
            let expected = x.tan() as f64;
            let tol = 5e-3 * (expected.abs() + 1.0);
            assert!((t - expected).abs() <= tol, "tan({x}): {t} vs {expected}");
        }
    }

    #[test]
    fn signed_zero_and_odd_symmetry() {
        assert_eq!(sf(0.0).sin().to_bits(), 0);
        assert_eq!(Sf32::NEG_ZERO.sin().to_bits(), 0x8000_0000);
        assert_eq!(Sf32::NEG_ZERO.tan().to_bits(), 0x8000_0000);
        assert_eq!(sf(0.0).cos().to_bits(), Sf32::ONE.to_bits());
        for x in [0.5f32, 1.7, 42.0] {
            assert_eq!(sf(-x).sin().to_bits(), (-sf(x).sin()).to_bits());
            assert_eq!(sf(-x).cos().to_bits(), sf(x).cos().to_bits());
            assert_eq!(sf(-x).tan().to_bits(), (-sf(x).tan()).to_bits());
        }
    }

    #[test]
    fn specials_are_nan() {
        assert!(Sf32::INFINITY.sin().is_nan());
        assert!(Sf32::NEG_INFINITY.cos().is_nan());
        assert!(Sf32::INFINITY.tan().is_nan());
        assert!(Sf32::NAN.sin().is_nan());
        assert!(Sf32::NAN.sin_cos().0.is_nan());
    }
}
