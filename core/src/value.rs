//! The deterministic float32 value type.
//!
//! # What is `Sf32`?
//!
//! `Sf32` wraps a raw IEEE-754 single-precision bit pattern and re-implements
//! every operation on it in pure integer arithmetic. Two machines that agree
//! on `u32` multiplication — i.e. all of them — agree on every `Sf32` result,
//! bit for bit. Native `f32` cannot promise that: fused multiply-add, x87
//! extended precision and vectorizing compilers all change results between
//! targets.
//!
//! Values are immutable `Copy` data. Every operation returns a new value and
//! never touches shared state, so `Sf32` math is safe from any number of
//! threads without synchronization.
//!
//! # Boundary conversions
//!
//! Crossing between native floats and `Sf32` is a bit-level reinterpretation
//! ([`Sf32::from_f32`] / [`Sf32::to_f32`]) and round-trips every pattern,
//! NaN payloads included. Integer construction rounds to nearest-even once
//! the integer exceeds 24 significant bits. Integer extraction truncates
//! toward zero and is the one fallible surface in the crate: NaN and
//! out-of-range values have no integer meaning, so `TryFrom` reports
//! [`ConvertError`] instead of guessing.

use crate::bits::{
    self, classify, round_pack, shift_right_sticky64, FloatClass, EXP_BIAS, INF_BITS, MANT_BITS,
    QNAN_BITS, SIGN_MASK,
};
use num_traits::{FromPrimitive, One, ToPrimitive, Zero};
use std::fmt;
use thiserror::Error;

/// Error type for checked conversions out of [`Sf32`].
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConvertError {
    /// NaN has no integer value.
    #[error("NaN cannot be converted to an integer")]
    Nan,
    /// The truncated value does not fit the target integer type.
    #[error("value out of range for the target integer type")]
    OutOfRange,
}

pub type Result<T> = std::result::Result<T, ConvertError>;

/// A software-emulated IEEE-754 single-precision value.
///
/// The in-memory representation is exactly the native bit pattern, so
/// transmuting a buffer of `f32` into `Sf32` (or reading one from the wire)
/// is free. All arithmetic goes through the integer engine in [`crate::bits`]
/// and [`crate::arith`].
#[derive(Clone, Copy)]
pub struct Sf32(u32);

impl Sf32 {
    /// Positive zero.
    pub const ZERO: Self = Self(0x0000_0000);
    /// Negative zero.
    pub const NEG_ZERO: Self = Self(0x8000_0000);
    /// 1.0
    pub const ONE: Self = Self(0x3F80_0000);
    /// −1.0
    pub const NEG_ONE: Self = Self(0xBF80_0000);
    /// 0.5
    pub const HALF: Self = Self(0x3F00_0000);
    /// 2.0
    pub const TWO: Self = Self(0x4000_0000);
    /// Positive infinity.
    pub const INFINITY: Self = Self(INF_BITS);
    /// Negative infinity.
    pub const NEG_INFINITY: Self = Self(SIGN_MASK | INF_BITS);
    /// The canonical quiet NaN every NaN-producing path returns.
    pub const NAN: Self = Self(QNAN_BITS);
    /// Largest finite value.
    pub const MAX: Self = Self(0x7F7F_FFFF);
    /// Smallest positive normal value, 2^−126.
    pub const MIN_POSITIVE: Self = Self(0x0080_0000);
    /// Machine epsilon, 2^−23.
    pub const EPSILON: Self = Self(0x3400_0000);

    /// Reinterprets a raw bit pattern. Total and exact.
    #[inline]
    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    /// The raw bit pattern. Inverse of [`Sf32::from_bits`] for every input.
    #[inline]
    pub const fn to_bits(self) -> u32 {
        self.0
    }

    /// Adopts a native `f32` bit-for-bit (no arithmetic involved).
    #[inline]
    pub fn from_f32(value: f32) -> Self {
        Self(value.to_bits())
    }

    /// Hands the bit pattern back to the native type, e.g. for display or
    /// interop. The round trip through [`Sf32::from_f32`] is the identity.
    #[inline]
    pub fn to_f32(self) -> f32 {
        f32::from_bits(self.0)
    }

    /// Classifies this value.
    #[inline]
    pub const fn classify(self) -> FloatClass {
        classify(self.0)
    }

    #[inline]
    pub const fn is_nan(self) -> bool {
        bits::is_nan(self.0)
    }

    #[inline]
    pub const fn is_infinite(self) -> bool {
        bits::is_inf(self.0)
    }

    #[inline]
    pub const fn is_finite(self) -> bool {
        (self.0 & !SIGN_MASK) < INF_BITS
    }

    #[inline]
    pub const fn is_zero(self) -> bool {
        bits::is_zero(self.0)
    }

    #[inline]
    pub const fn is_subnormal(self) -> bool {
        matches!(self.classify(), FloatClass::Subnormal)
    }

    /// True for every value whose sign bit is set, including −0 and NaN.
    #[inline]
    pub const fn is_sign_negative(self) -> bool {
        self.0 & SIGN_MASK != 0
    }

    /// Magnitude: clears the sign bit.
    #[inline]
    pub const fn abs(self) -> Self {
        Self(self.0 & !SIGN_MASK)
    }

    /// Magnitude of `self` carrying the sign of `sign`.
    #[inline]
    pub const fn copysign(self, sign: Self) -> Self {
        Self((self.0 & !SIGN_MASK) | (sign.0 & SIGN_MASK))
    }

    /// ±1 with the sign of `self`; NaN stays NaN.
    #[inline]
    pub const fn signum(self) -> Self {
        if self.is_nan() {
            Self::NAN
        } else {
            Self::ONE.copysign(self)
        }
    }

    /// The smaller of two values. A NaN operand yields the other operand;
    /// when both compare equal the negative-signed one wins, so `-0` beats
    /// `+0` deterministically.
    pub const fn min(self, other: Self) -> Self {
        if self.is_nan() {
            return other;
        }
        if other.is_nan() {
            return self;
        }
        if crate::arith::lt_bits(self.0, other.0) {
            self
        } else if crate::arith::lt_bits(other.0, self.0) {
            other
        } else if self.is_sign_negative() {
            self
        } else {
            other
        }
    }

    /// The larger of two values; mirror of [`Sf32::min`].
    pub const fn max(self, other: Self) -> Self {
        if self.is_nan() {
            return other;
        }
        if other.is_nan() {
            return self;
        }
        if crate::arith::lt_bits(other.0, self.0) {
            self
        } else if crate::arith::lt_bits(self.0, other.0) {
            other
        } else if self.is_sign_negative() {
            other
        } else {
            self
        }
    }

    /// Scales by a power of two: `self * 2^n`, with overflow saturating to
    /// infinity and underflow going gradual (subnormal, then signed zero).
    pub const fn ldexp(self, n: i32) -> Self {
        if !self.is_finite() || self.is_zero() {
            return self;
        }
        // The exponent field spans ~600 useful steps; clamping keeps the
        // addition below from overflowing while preserving saturation.
        let n = if n > 1000 {
            1000
        } else if n < -1000 {
            -1000
        } else {
            n
        };
        let (be, sig) = bits::unpack_finite(self.0);
        Self(round_pack(bits::sign(self.0), be + n, sig << 3))
    }

    /// Truncated value as `(negative, magnitude)`; `None` for NaN and for
    /// magnitudes of 2^64 and above.
    pub(crate) const fn to_int_parts(self) -> Option<(bool, u64)> {
        if self.is_nan() || self.is_infinite() {
            return None;
        }
        let neg = self.is_sign_negative();
        if self.is_zero() {
            return Some((neg, 0));
        }
        let (be, sig) = bits::unpack_finite(self.0);
        let shift = (be - EXP_BIAS) - MANT_BITS as i32;
        if shift >= 41 {
            // sig < 2^24, so anything shifted by 41+ reaches 2^64.
            return None;
        }
        let mag = if shift >= 0 {
            (sig as u64) << shift
        } else if shift <= -24 {
            0
        } else {
            (sig >> -shift) as u64
        };
        Some((neg, mag))
    }

    /// Truncating conversion used internally where the caller has already
    /// bounded the magnitude; saturates instead of failing.
    pub(crate) const fn to_i32_saturating(self) -> i32 {
        match self.to_int_parts() {
            None => {
                if self.is_nan() || !self.is_sign_negative() {
                    i32::MAX
                } else {
                    i32::MIN
                }
            }
            Some((neg, mag)) => {
                if neg {
                    if mag >= 1 << 31 {
                        i32::MIN
                    } else {
                        -(mag as i32)
                    }
                } else if mag >= (1 << 31) {
                    i32::MAX
                } else {
                    mag as i32
                }
            }
        }
    }

    /// Builds a value from a sign and a 64-bit magnitude, rounding to
    /// nearest-even when the magnitude exceeds 24 significant bits.
    const fn from_int_mag(negative: bool, mag: u64) -> Self {
        let s = negative as u32;
        if mag == 0 {
            // Integers have no signed zero; -0 is unreachable from here.
            return Self::ZERO;
        }
        // round_pack wants a u32 significand: fold anything wider down with a
        // sticky bit so the single rounding step still sees every dropped bit.
        if mag <= u32::MAX as u64 {
            Self(round_pack(s, EXP_BIAS + 26, mag as u32))
        } else {
            let shift = 32 - mag.leading_zeros();
            let sig = shift_right_sticky64(mag, shift) as u32;
            Self(round_pack(s, EXP_BIAS + 26 + shift as i32, sig))
        }
    }
}

impl From<i32> for Sf32 {
    fn from(v: i32) -> Self {
        Self::from_int_mag(v < 0, v.unsigned_abs() as u64)
    }
}

impl From<u32> for Sf32 {
    fn from(v: u32) -> Self {
        Self::from_int_mag(false, v as u64)
    }
}

impl From<i64> for Sf32 {
    fn from(v: i64) -> Self {
        Self::from_int_mag(v < 0, v.unsigned_abs())
    }
}

impl From<u64> for Sf32 {
    fn from(v: u64) -> Self {
        Self::from_int_mag(false, v)
    }
}

impl From<f32> for Sf32 {
    fn from(v: f32) -> Self {
        Self::from_f32(v)
    }
}

impl TryFrom<Sf32> for i32 {
    type Error = ConvertError;

    fn try_from(v: Sf32) -> Result<i32> {
        let (neg, mag) = v.to_int_parts().ok_or(if v.is_nan() {
            ConvertError::Nan
        } else {
            ConvertError::OutOfRange
        })?;
        if neg {
            if mag > 1 << 31 {
                return Err(ConvertError::OutOfRange);
            }
            Ok((mag as i64).wrapping_neg() as i32)
        } else {
            i32::try_from(mag).map_err(|_| ConvertError::OutOfRange)
        }
    }
}

impl TryFrom<Sf32> for i64 {
    type Error = ConvertError;

    fn try_from(v: Sf32) -> Result<i64> {
        let (neg, mag) = v.to_int_parts().ok_or(if v.is_nan() {
            ConvertError::Nan
        } else {
            ConvertError::OutOfRange
        })?;
        if neg {
            if mag > 1 << 63 {
                return Err(ConvertError::OutOfRange);
            }
            Ok((mag as i64).wrapping_neg())
        } else {
            i64::try_from(mag).map_err(|_| ConvertError::OutOfRange)
        }
    }
}

impl TryFrom<Sf32> for u32 {
    type Error = ConvertError;

    fn try_from(v: Sf32) -> Result<u32> {
        let (neg, mag) = v.to_int_parts().ok_or(if v.is_nan() {
            ConvertError::Nan
        } else {
            ConvertError::OutOfRange
        })?;
        if neg && mag != 0 {
            return Err(ConvertError::OutOfRange);
        }
        u32::try_from(mag).map_err(|_| ConvertError::OutOfRange)
    }
}

impl TryFrom<Sf32> for u64 {
    type Error = ConvertError;

    fn try_from(v: Sf32) -> Result<u64> {
        let (neg, mag) = v.to_int_parts().ok_or(if v.is_nan() {
            ConvertError::Nan
        } else {
            ConvertError::OutOfRange
        })?;
        if neg && mag != 0 {
            return Err(ConvertError::OutOfRange);
        }
        Ok(mag)
    }
}

impl fmt::Debug for Sf32 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // The bit pattern is the identity of the value; the native rendering
        // is a convenience for humans reading test output.
        write!(f, "Sf32({:#010x} ~ {})", self.0, (*self).to_f32())
    }
}

impl Default for Sf32 {
    fn default() -> Self {
        Self::ZERO
    }
}

impl Zero for Sf32 {
    fn zero() -> Self {
        Self::ZERO
    }

    fn is_zero(&self) -> bool {
        Sf32::is_zero(*self)
    }
}

impl One for Sf32 {
    fn one() -> Self {
        Self::ONE
    }
}

impl ToPrimitive for Sf32 {
    fn to_i64(&self) -> Option<i64> {
        i64::try_from(*self).ok()
    }

    fn to_u64(&self) -> Option<u64> {
        u64::try_from(*self).ok()
    }

    fn to_f32(&self) -> Option<f32> {
        Some(Sf32::to_f32(*self))
    }

    fn to_f64(&self) -> Option<f64> {
        Some(Sf32::to_f32(*self) as f64)
    }
}

impl FromPrimitive for Sf32 {
    fn from_i64(n: i64) -> Option<Self> {
        Some(Sf32::from(n))
    }

    fn from_u64(n: u64) -> Option<Self> {
        Some(Sf32::from(n))
    }

    fn from_f32(n: f32) -> Option<Self> {
        Some(Sf32::from_f32(n))
    }

    fn from_f64(n: f64) -> Option<Self> {
        // The native narrowing cast rounds to nearest-even, which is the
        // engine's own rounding; this is a boundary conversion, not engine
        // arithmetic.
        Some(Sf32::from_f32(n as f32))
    }
}
