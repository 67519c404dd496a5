use graphx_parser::parser::ast::{
    binary::{Additive, Exponential, Multiplicative},
    op::OpKind,
};
use super::Eval;

/// Applies an operator to already evaluated operands.
///
/// `rhs` is ignored for [`OpKind::Log`], which takes the natural logarithm of `lhs`.
///
/// # Panics
///
/// Panics if `rhs` is [`None`] for any operator other than [`OpKind::Log`]. The tree types
/// cannot represent such a node, so this indicates an internal inconsistency.
pub fn eval_op(op: OpKind, lhs: f64, rhs: Option<f64>) -> f64 {
    if op == OpKind::Log {
        return lhs.ln();
    }

    let Some(rhs) = rhs else {
        panic!("internal inconsistency: `{}` applied without a right-hand operand", op);
    };
    match op {
        OpKind::Add => lhs + rhs,
        OpKind::Sub => lhs - rhs,
        OpKind::Mul => lhs * rhs,
        OpKind::Div => lhs / rhs,
        OpKind::Pow => lhs.powf(rhs),
        OpKind::Log => unreachable!(),
    }
}

impl Eval for Additive {
    fn evaluate(&self, x: f64) -> f64 {
        eval_op(self.op.into(), self.lhs.evaluate(x), Some(self.rhs.evaluate(x)))
    }
}

impl Eval for Multiplicative {
    fn evaluate(&self, x: f64) -> f64 {
        eval_op(self.op.into(), self.lhs.evaluate(x), Some(self.rhs.evaluate(x)))
    }
}

impl Eval for Exponential {
    fn evaluate(&self, x: f64) -> f64 {
        let rhs = self.rhs.as_ref().map(|rhs| rhs.evaluate(x));
        eval_op(self.op.into(), self.lhs.evaluate(x), rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_host_arithmetic() {
        let pairs = [(1.5, 2.0), (-3.0, 0.25), (0.0, 7.0), (1e10, -1e-10)];
        for (a, b) in pairs {
            assert_eq!(eval_op(OpKind::Add, a, Some(b)), a + b);
            assert_eq!(eval_op(OpKind::Sub, a, Some(b)), a - b);
            assert_eq!(eval_op(OpKind::Mul, a, Some(b)), a * b);
            assert_eq!(eval_op(OpKind::Div, a, Some(b)), a / b);
            assert_eq!(eval_op(OpKind::Pow, a, Some(b)).to_bits(), a.powf(b).to_bits());
        }
    }

    #[test]
    fn log_ignores_right_operand() {
        assert_eq!(eval_op(OpKind::Log, 10.0, None), 10f64.ln());
        assert_eq!(eval_op(OpKind::Log, 10.0, Some(99.0)), 10f64.ln());
    }

    #[test]
    #[should_panic(expected = "internal inconsistency")]
    fn power_without_exponent() {
        eval_op(OpKind::Pow, 2.0, None);
    }
}
