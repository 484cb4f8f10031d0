//! # sfloat
//!
//! `sfloat` is a software implementation of IEEE-754 single-precision
//! arithmetic plus an elementary math library, built entirely on integer
//! operations. Every operation produces the same bit pattern on every
//! platform, compiler and optimization level.
//!
//! # Why not just use `f32`?
//!
//! Hardware floats are fast but not portable at the bit level: x87 runs at
//! extended precision, ARM and x86 disagree about fused multiply-add
//! contraction, vectorizers reassociate, and libm implementations of `sin`
//! or `exp` differ between — and even within — operating systems. For most
//! code a few ulps of drift is irrelevant. For lockstep networked
//! simulations, replay systems and consensus-sensitive pipelines it is
//! fatal: two peers that disagree by one bit desynchronize.
//!
//! [`Sf32`] trades speed for a guarantee. The arithmetic engine (`+`, `-`,
//! `*`, `/`, `%`, comparisons) is bit-identical to a correct IEEE-754
//! round-to-nearest-even implementation; the elementary functions (sqrt,
//! exp, log, trigonometry, pow) are built strictly on that engine and are
//! deterministic by construction, with bounded — not correctly-rounded —
//! error.
//!
//! ## Modules
//!
//! - [`bits`]: the codec between raw patterns and (sign, exponent, mantissa).
//! - [`mod@value`]: the [`Sf32`] type, conversions and comparisons.
//! - `arith`: the rounding engine behind the operators.
//! - [`math`]: the elementary function library.
//! - [`ops`]: closed enums dispatching every operation.
//!
//! ## Example
//!
//! ```rust
//! use sfloat::Sf32;
//!
//! let a = Sf32::from_f32(0.1);
//! let b = Sf32::from_f32(0.2);
//! let sum = a + b;
//!
//! // Same bits as native IEEE-754 arithmetic, on every platform.
//! assert_eq!(sum.to_bits(), (0.1f32 + 0.2f32).to_bits());
//!
//! // The engine also runs in const contexts, where native float math can't.
//! const THREE: Sf32 = Sf32::ONE.add(Sf32::TWO);
//! assert_eq!(THREE.to_f32(), 3.0);
//!
//! // NaN propagates; domain errors are values, not panics.
//! assert!(Sf32::from_f32(-1.0).sqrt().is_nan());
//! ```

/// Shorthand for building an [`Sf32`] from a float literal.
///
/// ```rust
/// use sfloat::{sf32, Sf32};
///
/// let x = sf32!(1.5);
/// assert_eq!(x.to_bits(), 0x3FC0_0000);
/// ```
#[macro_export]
macro_rules! sf32 {
    ($v:expr) => {
        $crate::Sf32::from_f32($v)
    };
}

mod arith;
pub mod bits;
pub mod math;
pub mod ops;
pub mod value;

pub use bits::FloatClass;
pub use ops::{BinaryOp, UnaryOp};
pub use value::{ConvertError, Result, Sf32};
