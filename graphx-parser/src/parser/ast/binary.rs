use crate::parser::{
    ast::{
        expr::Expr,
        op::{AddOp, ExpOp, MulOp, OpKind},
    },
    fmt::fmt_binary,
};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A sum or difference, such as `x + 1` or `x - 1`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Additive {
    /// The left-hand side of the expression.
    pub lhs: Box<Expr>,

    /// The operator of the expression.
    pub op: AddOp,

    /// The right-hand side of the expression.
    pub rhs: Box<Expr>,
}

impl Additive {
    /// Creates a new additive expression.
    pub fn new(lhs: Expr, op: AddOp, rhs: Expr) -> Self {
        Self { lhs: Box::new(lhs), op, rhs: Box::new(rhs) }
    }
}

impl fmt::Display for Additive {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt_binary(f, &self.lhs, self.op.into(), &self.rhs)
    }
}

/// A product or quotient, such as `2 * x` or `x / 2`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Multiplicative {
    /// The left-hand side of the expression.
    pub lhs: Box<Expr>,

    /// The operator of the expression.
    pub op: MulOp,

    /// The right-hand side of the expression.
    pub rhs: Box<Expr>,
}

impl Multiplicative {
    /// Creates a new multiplicative expression.
    pub fn new(lhs: Expr, op: MulOp, rhs: Expr) -> Self {
        Self { lhs: Box::new(lhs), op, rhs: Box::new(rhs) }
    }
}

impl fmt::Display for Multiplicative {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt_binary(f, &self.lhs, self.op.into(), &self.rhs)
    }
}

/// A power, such as `x ^ 2`, or a natural logarithm, such as `log(x)`.
///
/// A power always has a right-hand side (the exponent). A logarithm only has a left-hand side,
/// its argument; its right-hand side is [`None`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Exponential {
    /// The base of a power, or the argument of a logarithm.
    pub lhs: Box<Expr>,

    /// The operator of the expression.
    pub op: ExpOp,

    /// The exponent of a power. Always [`None`] for a logarithm.
    pub rhs: Option<Box<Expr>>,
}

impl Exponential {
    /// Creates the power `base ^ exponent`.
    pub fn pow(base: Expr, exponent: Expr) -> Self {
        Self {
            lhs: Box::new(base),
            op: ExpOp::Pow,
            rhs: Some(Box::new(exponent)),
        }
    }

    /// Creates the natural logarithm `log(arg)`.
    pub fn log(arg: Expr) -> Self {
        Self {
            lhs: Box::new(arg),
            op: ExpOp::Log,
            rhs: None,
        }
    }

    /// Returns the exponent of a power.
    ///
    /// # Panics
    ///
    /// Panics if this node is a logarithm, or a power that was built without an exponent. The
    /// constructors never produce the latter, so reaching it means a tree was assembled by hand
    /// incorrectly.
    pub fn exponent(&self) -> &Expr {
        match (self.op, &self.rhs) {
            (ExpOp::Pow, Some(rhs)) => rhs,
            (ExpOp::Pow, None) => panic!("internal inconsistency: `^` node has no exponent"),
            (ExpOp::Log, _) => panic!("internal inconsistency: `log` node has no exponent"),
        }
    }
}

impl fmt::Display for Exponential {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.op {
            ExpOp::Pow => match self.rhs.as_deref() {
                Some(rhs) => fmt_binary(f, &self.lhs, OpKind::Pow, rhs),
                None => write!(f, "{}^", self.lhs),
            },
            ExpOp::Log => match self.lhs.as_ref() {
                Expr::Paren(paren) => write!(f, "log{}", paren),
                lhs => write!(f, "log({})", lhs),
            },
        }
    }
}
