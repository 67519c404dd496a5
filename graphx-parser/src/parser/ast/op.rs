//! Operators that can appear in the expression tree.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The operator of an [`Additive`](super::binary::Additive) node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum AddOp {
    Add,
    Sub,
}

/// The operator of a [`Multiplicative`](super::binary::Multiplicative) node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MulOp {
    Mul,
    Div,
}

/// The operator of an [`Exponential`](super::binary::Exponential) node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ExpOp {
    /// Exponentiation, `base ^ exponent`.
    Pow,

    /// The natural logarithm of the left operand. There is no right operand.
    Log,
}

/// Every operator in the expression tree, used where all operators are handled together, such
/// as in the shared evaluation table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum OpKind {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
    Log,
}

impl OpKind {
    /// Returns the symbol used to print the operator.
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Pow => "^",
            Self::Log => "log",
        }
    }

    /// Returns the binary operator written with the given character. `log` is written as a
    /// prefix, so it has no such character.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Add),
            '-' => Some(Self::Sub),
            '*' => Some(Self::Mul),
            '/' => Some(Self::Div),
            '^' => Some(Self::Pow),
            _ => None,
        }
    }
}

impl fmt::Display for OpKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl From<AddOp> for OpKind {
    fn from(op: AddOp) -> Self {
        match op {
            AddOp::Add => Self::Add,
            AddOp::Sub => Self::Sub,
        }
    }
}

impl From<MulOp> for OpKind {
    fn from(op: MulOp) -> Self {
        match op {
            MulOp::Mul => Self::Mul,
            MulOp::Div => Self::Div,
        }
    }
}

impl From<ExpOp> for OpKind {
    fn from(op: ExpOp) -> Self {
        match op {
            ExpOp::Pow => Self::Pow,
            ExpOp::Log => Self::Log,
        }
    }
}

/// The associativity of a binary operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Associativity {
    /// `a op b op c` is read as `(a op b) op c`.
    Left,

    /// `a op b op c` is read as `a op (b op c)`.
    Right,
}

/// How tightly an expression binds when printed, in order from lowest precedence (binds last)
/// to highest precedence (binds first).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
    /// Precedence of addition (`+`) and subtraction (`-`), which separate terms.
    Term,

    /// Precedence of multiplication (`*`) and division (`/`), which separate factors.
    Factor,

    /// Precedence of exponentiation (`^`).
    Exp,

    /// Literals, `x`, parenthesized expressions, and `log(..)`, which never need parentheses.
    Atom,
}

impl OpKind {
    /// Returns the precedence of the operation.
    pub fn precedence(&self) -> Precedence {
        match self {
            Self::Add | Self::Sub => Precedence::Term,
            Self::Mul | Self::Div => Precedence::Factor,
            Self::Pow => Precedence::Exp,
            Self::Log => Precedence::Atom,
        }
    }

    /// Returns the associativity of the operation.
    pub fn associativity(&self) -> Associativity {
        match self {
            Self::Pow => Associativity::Right,
            Self::Add | Self::Sub | Self::Mul | Self::Div | Self::Log => Associativity::Left,
        }
    }
}
