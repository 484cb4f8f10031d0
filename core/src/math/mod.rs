//! Elementary functions built entirely on the integer engine.
//!
//! Nothing in this tree touches native floating point: every add, multiply
//! and divide below is an [`crate::Sf32`] engine operation, so the polynomial
//! evaluations and range reductions inherit the engine's determinism. The
//! functions target bounded relative error (a few units in the last place for
//! the exponential family, looser for trigonometry at extreme magnitudes),
//! not correct rounding — determinism is the contract, accuracy the budget.
//!
//! Layout mirrors the call structure:
//!
//! - [`rounding`]: trunc/floor/ceil/round, pure mantissa masking.
//! - [`sqrt`]: Newton–Raphson on a normalized operand.
//! - [`exp`] / [`log`]: base-e and base-2 exponentials and logarithms sharing
//!   one kernel each.
//! - [`trig`]: sin/cos/tan with integer Payne–Hanek reduction by π/2.
//! - [`inverse`]: asin/acos/atan/atan2.
//! - [`pow`]: integer fast path by squaring, `exp(y·ln x)` otherwise.

pub mod exp;
pub mod inverse;
pub mod log;
pub mod pow;
pub mod rounding;
pub mod sqrt;
pub mod trig;
