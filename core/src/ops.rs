//! Closed operation enums for table-free dispatch.
//!
//! Replay and lockstep systems tend to drive the engine from serialized
//! operation codes. Arrays of function pointers would work, but a closed enum
//! matched exhaustively gets the same dispatch with a compile-time guarantee
//! that every code has an implementation — and no global state at all.

use crate::Sf32;

/// Every binary operation the engine exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
    Pow,
}

impl BinaryOp {
    /// All variants, in a stable order suitable for exhaustive test sweeps.
    pub const ALL: [BinaryOp; 6] = [
        BinaryOp::Add,
        BinaryOp::Sub,
        BinaryOp::Mul,
        BinaryOp::Div,
        BinaryOp::Rem,
        BinaryOp::Pow,
    ];

    /// Applies the operation.
    pub fn apply(self, a: Sf32, b: Sf32) -> Sf32 {
        match self {
            BinaryOp::Add => a + b,
            BinaryOp::Sub => a - b,
            BinaryOp::Mul => a * b,
            BinaryOp::Div => a / b,
            BinaryOp::Rem => a % b,
            BinaryOp::Pow => a.pow(b),
        }
    }
}

/// Every unary operation the elementary library exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    Round,
    Floor,
    Ceil,
    Trunc,
    Sqrt,
    Exp,
    Exp2,
    Ln,
    Log2,
    Sin,
    Cos,
    Tan,
    Asin,
    Acos,
    Atan,
}

impl UnaryOp {
    /// All variants, in a stable order suitable for exhaustive test sweeps.
    pub const ALL: [UnaryOp; 15] = [
        UnaryOp::Round,
        UnaryOp::Floor,
        UnaryOp::Ceil,
        UnaryOp::Trunc,
        UnaryOp::Sqrt,
        UnaryOp::Exp,
        UnaryOp::Exp2,
        UnaryOp::Ln,
        UnaryOp::Log2,
        UnaryOp::Sin,
        UnaryOp::Cos,
        UnaryOp::Tan,
        UnaryOp::Asin,
        UnaryOp::Acos,
        UnaryOp::Atan,
    ];

    /// Applies the operation.
    pub fn apply(self, x: Sf32) -> Sf32 {
        match self {
            UnaryOp::Round => x.round(),
            UnaryOp::Floor => x.floor(),
            UnaryOp::Ceil => x.ceil(),
            UnaryOp::Trunc => x.trunc(),
            UnaryOp::Sqrt => x.sqrt(),
            UnaryOp::Exp => x.exp(),
            UnaryOp::Exp2 => x.exp2(),
            UnaryOp::Ln => x.ln(),
            UnaryOp::Log2 => x.log2(),
            UnaryOp::Sin => x.sin(),
            UnaryOp::Cos => x.cos(),
            UnaryOp::Tan => x.tan(),
            UnaryOp::Asin => x.asin(),
            UnaryOp::Acos => x.acos(),
            UnaryOp::Atan => x.atan(),
        }
    }
}
