use crate::parser::{
    ast::{
        binary::{Additive, Exponential, Multiplicative},
        literal::{Literal, Variable},
        op::{AddOp, MulOp, OpKind, Precedence},
        paren::Paren,
    },
    fmt::fmt_tree,
    iter::ExprIter,
};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Represents any expression in the single variable `x`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Expr {
    /// A number literal, such as `13`.
    Literal(Literal),

    /// The variable `x`.
    Variable(Variable),

    /// A parenthesized expression, such as `(x + 1)`.
    Paren(Paren),

    /// A sum or difference, such as `x + 1`.
    Additive(Additive),

    /// A product or quotient, such as `2 * x`.
    Multiplicative(Multiplicative),

    /// A power or natural logarithm, such as `x ^ 2` or `log(x)`.
    Exponential(Exponential),
}

impl Expr {
    /// Creates a number literal.
    pub fn literal(value: f64) -> Self {
        Self::Literal(Literal::new(value))
    }

    /// Creates the variable `x`.
    pub fn variable() -> Self {
        Self::Variable(Variable)
    }

    /// Wraps the expression in parentheses.
    pub fn paren(expr: Expr) -> Self {
        Self::Paren(Paren::new(expr))
    }

    /// Creates `lhs + rhs`.
    pub fn add(lhs: Expr, rhs: Expr) -> Self {
        Self::Additive(Additive::new(lhs, AddOp::Add, rhs))
    }

    /// Creates `lhs - rhs`.
    pub fn sub(lhs: Expr, rhs: Expr) -> Self {
        Self::Additive(Additive::new(lhs, AddOp::Sub, rhs))
    }

    /// Creates `lhs * rhs`.
    pub fn mul(lhs: Expr, rhs: Expr) -> Self {
        Self::Multiplicative(Multiplicative::new(lhs, MulOp::Mul, rhs))
    }

    /// Creates `lhs / rhs`.
    pub fn div(lhs: Expr, rhs: Expr) -> Self {
        Self::Multiplicative(Multiplicative::new(lhs, MulOp::Div, rhs))
    }

    /// Creates `base ^ exponent`.
    pub fn pow(base: Expr, exponent: Expr) -> Self {
        Self::Exponential(Exponential::pow(base, exponent))
    }

    /// Creates `log(arg)`, the natural logarithm of `arg`.
    pub fn log(arg: Expr) -> Self {
        Self::Exponential(Exponential::log(arg))
    }

    /// Returns the operator at the root of the expression, if there is one.
    pub fn op(&self) -> Option<OpKind> {
        match self {
            Self::Literal(_) | Self::Variable(_) | Self::Paren(_) => None,
            Self::Additive(add) => Some(add.op.into()),
            Self::Multiplicative(mul) => Some(mul.op.into()),
            Self::Exponential(exp) => Some(exp.op.into()),
        }
    }

    /// Returns how tightly the expression binds when printed in infix form.
    pub fn precedence(&self) -> Precedence {
        match self.op() {
            Some(op) => op.precedence(),
            None => Precedence::Atom,
        }
    }

    /// Returns a copy of the expression that shares no nodes with it.
    ///
    /// Every child is owned through a [`Box`], so this is the same as [`Clone::clone`]; it exists
    /// to name the operation at call sites that depend on the copy being independent.
    pub fn deep_copy(&self) -> Self {
        self.clone()
    }

    /// Returns an iterator that traverses the tree of expressions in left-to-right post-order
    /// (i.e. depth-first).
    pub fn post_order_iter(&self) -> ExprIter {
        ExprIter::new(self)
    }

    /// Returns the number of nodes in the tree.
    pub fn node_count(&self) -> usize {
        self.post_order_iter().count()
    }

    /// Renders the tree as indented text.
    ///
    /// Every line is prefixed with `indent` tab characters and ends with a newline. Leaves print
    /// their value (`13.0`, `x`). Operator nodes print their symbol on one line, then each child
    /// one level deeper; a logarithm has only one child. A parenthesized expression prints `()`,
    /// then its inner expression one level deeper.
    ///
    /// ```
    /// use graphx_parser::parse;
    ///
    /// let expr = parse("13*x").unwrap();
    /// assert_eq!(expr.render(0), "*\n\t13.0\n\tx\n");
    /// ```
    pub fn render(&self, indent: usize) -> String {
        let mut out = String::new();
        fmt_tree(&mut out, self, indent);
        out
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Literal(literal) => literal.fmt(f),
            Self::Variable(variable) => variable.fmt(f),
            Self::Paren(paren) => paren.fmt(f),
            Self::Additive(add) => add.fmt(f),
            Self::Multiplicative(mul) => mul.fmt(f),
            Self::Exponential(exp) => exp.fmt(f),
        }
    }
}

impl From<Literal> for Expr {
    fn from(literal: Literal) -> Self {
        Self::Literal(literal)
    }
}

impl From<Variable> for Expr {
    fn from(variable: Variable) -> Self {
        Self::Variable(variable)
    }
}

impl From<Paren> for Expr {
    fn from(paren: Paren) -> Self {
        Self::Paren(paren)
    }
}

impl From<Additive> for Expr {
    fn from(add: Additive) -> Self {
        Self::Additive(add)
    }
}

impl From<Multiplicative> for Expr {
    fn from(mul: Multiplicative) -> Self {
        Self::Multiplicative(mul)
    }
}

impl From<Exponential> for Expr {
    fn from(exp: Exponential) -> Self {
        Self::Exponential(exp)
    }
}
