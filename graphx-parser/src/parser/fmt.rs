//! Printing helpers shared by every node of the expression tree.

use super::ast::{
    expr::Expr,
    op::{Associativity, OpKind},
};
use std::fmt::{self, Formatter};

/// Writes a number the way literals are printed: NaN as `NaN`, infinities as `Infinity` and
/// `-Infinity`, and finite values in their shortest round-trip form, always with a fractional
/// part or exponent (`13.0`, `0.5`, `1e20`).
///
/// Every string this produces is itself a valid literal.
pub fn fmt_number(f: &mut Formatter, value: f64) -> fmt::Result {
    if value.is_nan() {
        f.write_str("NaN")
    } else if value.is_infinite() {
        f.write_str(if value > 0.0 { "Infinity" } else { "-Infinity" })
    } else {
        write!(f, "{:?}", value)
    }
}

/// Writes `operand`, wrapped in parentheses if `paren` is true.
fn fmt_operand(f: &mut Formatter, operand: &Expr, paren: bool) -> fmt::Result {
    if paren {
        write!(f, "({})", operand)
    } else {
        write!(f, "{}", operand)
    }
}

/// Writes the infix form of `lhs op rhs`. Operands that bind less tightly than their position
/// requires are wrapped in parentheses, so the output reads the same way the tree is shaped.
pub fn fmt_binary(f: &mut Formatter, lhs: &Expr, op: OpKind, rhs: &Expr) -> fmt::Result {
    let precedence = op.precedence();
    let (lhs_paren, rhs_paren) = match op.associativity() {
        Associativity::Left => (lhs.precedence() < precedence, rhs.precedence() <= precedence),
        Associativity::Right => (lhs.precedence() <= precedence, rhs.precedence() < precedence),
    };

    fmt_operand(f, lhs, lhs_paren)?;
    f.write_str(op.symbol())?;
    fmt_operand(f, rhs, rhs_paren)
}

/// Appends one line holding `text`, prefixed with `indent` tab characters.
fn push_line(out: &mut String, indent: usize, text: &str) {
    out.extend(std::iter::repeat('\t').take(indent));
    out.push_str(text);
    out.push('\n');
}

/// Appends the indented tree form of an operator node: the symbol on its own line, then each
/// child one level deeper.
fn fmt_op_tree(out: &mut String, indent: usize, symbol: &str, children: &[&Expr]) {
    push_line(out, indent, symbol);
    for child in children {
        fmt_tree(out, child, indent + 1);
    }
}

/// Appends the indented tree form of `expr` to `out`. See [`Expr::render`].
pub fn fmt_tree(out: &mut String, expr: &Expr, indent: usize) {
    match expr {
        Expr::Literal(literal) => push_line(out, indent, &literal.to_string()),
        Expr::Variable(variable) => push_line(out, indent, &variable.to_string()),
        Expr::Paren(paren) => fmt_op_tree(out, indent, "()", &[&paren.expr]),
        Expr::Additive(add) => {
            let op = OpKind::from(add.op);
            fmt_op_tree(out, indent, op.symbol(), &[&add.lhs, &add.rhs]);
        },
        Expr::Multiplicative(mul) => {
            let op = OpKind::from(mul.op);
            fmt_op_tree(out, indent, op.symbol(), &[&mul.lhs, &mul.rhs]);
        },
        Expr::Exponential(exp) => {
            let op = OpKind::from(exp.op);
            match (op, exp.rhs.as_deref()) {
                (OpKind::Pow, Some(rhs)) => fmt_op_tree(out, indent, op.symbol(), &[&exp.lhs, rhs]),
                // a logarithm only has its argument
                _ => fmt_op_tree(out, indent, op.symbol(), &[&exp.lhs]),
            }
        },
    }
}
