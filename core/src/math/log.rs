//! Natural and base-2 logarithms.
//!
//! The operand is normalized to `m * 2^e` and `m` folded into
//! `[sqrt(1/2), sqrt(2))` by halving, which caps `|ln m|` at ln(2)/2 and —
//! more importantly — removes the catastrophic cancellation `e + log2(m)`
//! would suffer for inputs just below a power of two. The kernel is the odd
//! atanh series in `t = (m-1)/(m+1)`: with `|t| < 0.1716` five terms leave a
//! truncation error near 2^-30. `m - 1` is exact by Sterbenz, so the series
//! is relatively accurate even as `m` approaches 1, where the result itself
//! goes to zero.

use crate::bits::{unpack_finite, EXP_BIAS};
use crate::Sf32;

/// sqrt(2) = 1.4142135, the fold threshold.
const SQRT_2: Sf32 = Sf32::from_bits(0x3FB5_04F3);
/// High part of ln(2), 9 trailing zero mantissa bits (exact times small ints).
const LN2_HI: Sf32 = Sf32::from_bits(0x3F31_7200);
/// Low part of ln(2).
const LN2_LO: Sf32 = Sf32::from_bits(0x35BF_BE8E);
/// log2(e) = 1.4426950.
const LOG2_E: Sf32 = Sf32::from_bits(0x3FB8_AA3B);

// Odd-series coefficients 2/3, 2/5, 2/7, 2/9 for 2*atanh(t).
const K3: Sf32 = Sf32::from_bits(0x3F2A_AAAB); // 0.6666667
const K5: Sf32 = Sf32::from_bits(0x3ECC_CCCD); // 0.4
const K7: Sf32 = Sf32::from_bits(0x3E92_4925); // 0.2857143
const K9: Sf32 = Sf32::from_bits(0x3E63_8E39); // 0.22222222

/// Splits a positive finite operand into `(e, ln(m))` with `x = m * 2^e`,
/// `m` in `[sqrt(1/2), sqrt(2))`.
fn ln_reduce(x: Sf32) -> (i32, Sf32) {
    let (be, sig) = unpack_finite(x.to_bits());
    let mut e = be - EXP_BIAS;
    let mut m = Sf32::from_bits(crate::bits::round_pack(0, EXP_BIAS, sig << 3));
    if m >= SQRT_2 {
        m = m * Sf32::HALF;
        e += 1;
    }
    let t = (m - Sf32::ONE) / (m + Sf32::ONE);
    let s = t * t;
    let series = ((K9 * s + K7) * s + K5) * s + K3;
    let ln_m = Sf32::TWO * t + t * s * series;
    (e, ln_m)
}

impl Sf32 {
    /// Natural logarithm.
    ///
    /// `ln(±0) = -inf`, `ln(+inf) = +inf`, negative input and NaN give NaN.
    pub fn ln(self) -> Self {
        if self.is_nan() {
            return Self::NAN;
        }
        if self.is_zero() {
            return Self::NEG_INFINITY;
        }
        if self.is_sign_negative() {
            return Self::NAN;
        }
        if self.is_infinite() {
            return Self::INFINITY;
        }
        let (e, ln_m) = ln_reduce(self);
        let ef = Self::from(e);
        // e * ln2 in split precision; the hi product is exact for |e| < 2^9.
        (ef * LN2_HI + ln_m) + ef * LN2_LO
    }

    /// Base-2 logarithm; exact for every power of two.
    pub fn log2(self) -> Self {
        if self.is_nan() {
            return Self::NAN;
        }
        if self.is_zero() {
            return Self::NEG_INFINITY;
        }
        if self.is_sign_negative() {
            return Self::NAN;
        }
        if self.is_infinite() {
            return Self::INFINITY;
        }
        let (e, ln_m) = ln_reduce(self);
        Self::from(e) + ln_m * LOG2_E
    }
}
