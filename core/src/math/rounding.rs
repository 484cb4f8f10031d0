//! Rounding to integral values: trunc, floor, ceil and round-half-even.
//!
//! All four work by masking fractional mantissa bits. A magnitude of 2^23 or
//! more has no fractional bits (the ulp is already ≥ 1), so those values —
//! infinities and NaNs included — pass through untouched. Directed variants
//! step the magnitude by one integer when a fraction was dropped on the
//! rounding side; the step is a plain bit-pattern addition, whose mantissa
//! carry rolls into the exponent field exactly when the magnitude crosses a
//! power of two.

use crate::bits::{biased_exp, raw_mantissa, trunc_bits, EXP_BIAS, MANT_BITS, MANT_MASK, SIGN_MASK};
use crate::Sf32;

/// One integer step at the scale of exponent `e`, as a bit-pattern increment.
#[inline]
const fn integer_step(e: i32) -> u32 {
    1 << (MANT_BITS as i32 - e)
}

impl Sf32 {
    /// Truncates toward zero. Signed zero is preserved.
    #[inline]
    pub const fn trunc(self) -> Self {
        Self::from_bits(trunc_bits(self.to_bits()))
    }

    /// Rounds toward negative infinity.
    pub const fn floor(self) -> Self {
        let bits = self.to_bits();
        let e = biased_exp(bits) - EXP_BIAS;
        if e >= MANT_BITS as i32 {
            return self;
        }
        let neg = bits & SIGN_MASK != 0;
        if e < 0 {
            // |x| < 1: a negative non-zero fraction floors to -1,
            // everything else collapses to its signed zero.
            return if neg && !self.is_zero() {
                Self::NEG_ONE
            } else {
                Self::from_bits(bits & SIGN_MASK)
            };
        }
        let truncated = bits & !(MANT_MASK >> e);
        if neg && truncated != bits {
            Self::from_bits(truncated + integer_step(e))
        } else {
            Self::from_bits(truncated)
        }
    }

    /// Rounds toward positive infinity.
    pub const fn ceil(self) -> Self {
        let bits = self.to_bits();
        let e = biased_exp(bits) - EXP_BIAS;
        if e >= MANT_BITS as i32 {
            return self;
        }
        let neg = bits & SIGN_MASK != 0;
        if e < 0 {
            // ceil(-0.3) is -0: the sign bit survives the collapse.
            return if !neg && !self.is_zero() {
                Self::ONE
            } else {
                Self::from_bits(bits & SIGN_MASK)
            };
        }
        let truncated = bits & !(MANT_MASK >> e);
        if !neg && truncated != bits {
            Self::from_bits(truncated + integer_step(e))
        } else {
            Self::from_bits(truncated)
        }
    }

    /// Rounds to the nearest integer, exact halves to the even neighbour —
    /// the same tie rule the engine applies to every arithmetic result.
    pub const fn round(self) -> Self {
        let bits = self.to_bits();
        let e = biased_exp(bits) - EXP_BIAS;
        if e >= MANT_BITS as i32 {
            return self;
        }
        if e < 0 {
            // |x| < 0.5 and the 0.5 tie itself (0 is even) go to signed zero;
            // above the tie the nearest integer is +/-1.
            let above_half = e == -1 && raw_mantissa(bits) != 0;
            return if above_half {
                Self::ONE.copysign(self)
            } else {
                Self::from_bits(bits & SIGN_MASK)
            };
        }
        let fraction_mask = MANT_MASK >> e;
        let fraction = bits & fraction_mask;
        let truncated = bits & !fraction_mask;
        let half = 1 << (MANT_BITS as i32 - 1 - e);
        if fraction > half {
            Self::from_bits(truncated + integer_step(e))
        } else if fraction < half {
            Self::from_bits(truncated)
        } else if truncated & integer_step(e) == 0 {
            // Exact half with an even integer part stays put.
            Self::from_bits(truncated)
        } else {
            Self::from_bits(truncated + integer_step(e))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sf(v: f32) -> Sf32 {
        Sf32::from_f32(v)
    }

    #[test]
    fn matches_native_on_a_sweep() {
        // Every quarter step across the interesting range, both signs.
        let mut q = -400;
        while q <= 400 {
            let x = q as f32 * 0.25;
            assert_eq!(sf(x).trunc().to_bits(), x.trunc().to_bits(), "trunc {x}");
            assert_eq!(sf(x).floor().to_bits(), x.floor().to_bits(), "floor {x}");
            assert_eq!(sf(x).ceil().to_bits(), x.ceil().to_bits(), "ceil {x}");
            q += 1;
        }
    }

    #[test]
    fn round_resolves_ties_to_even() {
        assert_eq!(sf(0.5).round().to_f32(), 0.0);
        assert_eq!(sf(1.5).round().to_f32(), 2.0);
        assert_eq!(sf(2.5).round().to_f32(), 2.0);
        assert_eq!(sf(3.5).round().to_f32(), 4.0);
        assert_eq!(sf(-0.5).round().to_bits(), 0x8000_0000);
        assert_eq!(sf(-1.5).round().to_f32(), -2.0);
        assert_eq!(sf(-2.5).round().to_f32(), -2.0);
        assert_eq!(sf(0.49999997).round().to_f32(), 0.0);
        assert_eq!(sf(2.5000005).round().to_f32(), 3.0);
    }

    #[test]
    fn half_tie_at_a_power_of_two_carries_cleanly() {
        // 1.5 -> 2.0 needs the mantissa carry into the exponent field.
        assert_eq!(sf(1.5).round().to_bits(), 0x4000_0000);
        // floor(-1.5) = -2.0 exercises the same carry on the directed path.
        assert_eq!(sf(-1.5).floor().to_f32(), -2.0);
        assert_eq!(sf(1.5).ceil().to_f32(), 2.0);
    }

    #[test]
    fn already_integral_values_pass_through() {
        for bits in [
            0x4B00_0000u32, // 2^23
            0xCB00_0000,
            0x7F80_0000, // inf
            0xFF80_0000,
            0x7FC0_0000, // NaN keeps its payload here: nothing is recomputed
            0x4480_0000, // 1024.0
        ] {
            let x = Sf32::from_bits(bits);
            assert_eq!(x.trunc().to_bits(), bits);
            assert_eq!(x.floor().to_bits(), bits);
            assert_eq!(x.ceil().to_bits(), bits);
            assert_eq!(x.round().to_bits(), bits);
        }
    }

    #[test]
    fn signed_zero_survives_every_direction() {
        assert_eq!(sf(-0.25).trunc().to_bits(), 0x8000_0000);
        assert_eq!(sf(-0.25).ceil().to_bits(), 0x8000_0000);
        assert_eq!(sf(-0.25).round().to_bits(), 0x8000_0000);
        assert_eq!(Sf32::NEG_ZERO.floor().to_bits(), 0x8000_0000);
        assert_eq!(Sf32::ZERO.ceil().to_bits(), 0);
    }
}
