use graphx_parser::parser::ast::{
    binary::{Additive, Exponential, Multiplicative},
    expr::Expr,
    op::{AddOp, ExpOp, MulOp},
};
use log::debug;

/// Any type that can be differentiated with respect to `x`.
pub trait Differentiate {
    /// Returns the derivative of this expression with respect to `x`.
    ///
    /// The returned tree is newly built and shares no nodes with `self`.
    fn differentiate(&self) -> Expr;
}

impl Differentiate for Expr {
    fn differentiate(&self) -> Expr {
        derivative(self)
    }
}

/// Returns the derivative of `f` with respect to `x`.
///
/// | `f`                   | derivative                       |
/// |-----------------------|----------------------------------|
/// | literal `c`           | `0`                              |
/// | `x`                   | `1`                              |
/// | `(g)`                 | `(g')`                           |
/// | `g + h`, `g - h`      | `g' + h'`, `g' - h'`             |
/// | `g * h`               | `g' * h + g * h'`                |
/// | `g / h`               | `g' / h - g * h' / h ^ 2`        |
/// | `log(g)`              | `g' / g`                         |
/// | `c ^ h`, `c` literal  | `log(c) * c ^ h * h'`            |
/// | `g ^ c`, `c` literal  | `c * g ^ (c - 1) * g'`           |
/// | `g ^ h`               | `g ^ h * (h' * g + g' * h / g)`  |
///
/// When both sides of a power are literals, the rule for a literal base is used.
///
/// The rule for a general power multiplies `h'` by `g` rather than by `log(g)`, so it only gives
/// the true derivative where `h'` is zero.
pub fn derivative(f: &Expr) -> Expr {
    let result = derive(f);
    debug!("d/dx {} = {}", f, result);
    result
}

fn derive(f: &Expr) -> Expr {
    match f {
        Expr::Literal(_) => Expr::literal(0.0),
        Expr::Variable(_) => Expr::literal(1.0),
        Expr::Paren(paren) => Expr::paren(derive(&paren.expr)),
        Expr::Additive(add) => derive_additive(add),
        Expr::Multiplicative(mul) => derive_multiplicative(mul),
        Expr::Exponential(exp) => derive_exponential(exp),
    }
}

fn derive_additive(add: &Additive) -> Expr {
    let (lhs, rhs) = (derive(&add.lhs), derive(&add.rhs));
    match add.op {
        AddOp::Add => Expr::add(lhs, rhs),
        AddOp::Sub => Expr::sub(lhs, rhs),
    }
}

fn derive_multiplicative(mul: &Multiplicative) -> Expr {
    let (f, g) = (&*mul.lhs, &*mul.rhs);
    match mul.op {
        // product rule
        MulOp::Mul => Expr::add(
            Expr::mul(derive(f), g.deep_copy()),
            Expr::mul(f.deep_copy(), derive(g)),
        ),
        // quotient rule, split into two fractions
        MulOp::Div => Expr::sub(
            Expr::div(derive(f), g.deep_copy()),
            Expr::div(
                Expr::mul(f.deep_copy(), derive(g)),
                Expr::pow(g.deep_copy(), Expr::literal(2.0)),
            ),
        ),
    }
}

fn derive_exponential(exp: &Exponential) -> Expr {
    let base = &*exp.lhs;
    if exp.op == ExpOp::Log {
        return Expr::div(derive(base), base.deep_copy());
    }

    let exponent = exp.exponent();
    match (base, exponent) {
        (Expr::Literal(c), h) => Expr::mul(
            Expr::mul(
                Expr::log(Expr::Literal(*c)),
                Expr::pow(Expr::Literal(*c), h.deep_copy()),
            ),
            derive(h),
        ),
        (g, Expr::Literal(c)) => Expr::mul(
            Expr::mul(
                Expr::Literal(*c),
                Expr::pow(g.deep_copy(), Expr::sub(Expr::Literal(*c), Expr::literal(1.0))),
            ),
            derive(g),
        ),
        (g, h) => Expr::mul(
            Expr::pow(g.deep_copy(), h.deep_copy()),
            Expr::add(
                Expr::mul(derive(h), g.deep_copy()),
                Expr::div(Expr::mul(derive(g), h.deep_copy()), g.deep_copy()),
            ),
        ),
    }
}

#[cfg(test)]
mod tests {
    use assert_float_eq::{afe_abs, afe_absolute_error_msg, afe_is_absolute_eq, assert_float_absolute_eq};
    use crate::numerical::eval::Eval;
    use graphx_parser::parse;
    use pretty_assertions::assert_eq;
    use super::*;

    fn lit(value: f64) -> Expr {
        Expr::literal(value)
    }

    fn x() -> Expr {
        Expr::variable()
    }

    fn d(input: &str) -> Expr {
        parse(input).unwrap().differentiate()
    }

    /// Approximates the derivative of `f` at `x` with a central difference.
    fn finite_difference(f: &Expr, x: f64) -> f64 {
        const DX: f64 = 0.00001;
        (f.evaluate(x + DX) - f.evaluate(x - DX)) / (2.0 * DX)
    }

    fn test_for_function(function: &'static str, points: impl IntoIterator<Item = f64>) {
        const TOL: f64 = 0.0001;

        let expr = parse(function).unwrap();
        let symbolic = expr.differentiate();

        for point in points {
            let symbolically_computed = symbolic.evaluate(point);
            let numerically_computed = finite_difference(&expr, point);
            assert_float_absolute_eq!(symbolically_computed, numerically_computed, TOL);
        }
    }

    #[test]
    fn literal_is_zero() {
        for input in ["0", "13", "-2.5", "1e300", "Infinity", "NaN"] {
            assert_eq!(d(input), lit(0.0), "{input}");
        }
    }

    #[test]
    fn variable_is_one() {
        assert_eq!(d("x"), lit(1.0));
    }

    #[test]
    fn parenthesized() {
        assert_eq!(d("(x)"), Expr::paren(lit(1.0)));
    }

    #[test]
    fn sum_and_difference() {
        assert_eq!(d("x+x"), Expr::add(lit(1.0), lit(1.0)));
        assert_eq!(d("x-3"), Expr::sub(lit(1.0), lit(0.0)));
    }

    #[test]
    fn product_rule() {
        assert_eq!(d("13*x"), Expr::add(
            Expr::mul(lit(0.0), x()),
            Expr::mul(lit(13.0), lit(1.0)),
        ));
    }

    #[test]
    fn quotient_rule() {
        assert_eq!(d("x/2"), Expr::sub(
            Expr::div(lit(1.0), lit(2.0)),
            Expr::div(
                Expr::mul(x(), lit(0.0)),
                Expr::pow(lit(2.0), lit(2.0)),
            ),
        ));
    }

    #[test]
    fn logarithm() {
        assert_eq!(d("log(x)"), Expr::div(Expr::paren(lit(1.0)), Expr::paren(x())));
    }

    #[test]
    fn literal_base() {
        assert_eq!(d("2^x"), Expr::mul(
            Expr::mul(Expr::log(lit(2.0)), Expr::pow(lit(2.0), x())),
            lit(1.0),
        ));
    }

    #[test]
    fn literal_exponent() {
        assert_eq!(d("x^3"), Expr::mul(
            Expr::mul(lit(3.0), Expr::pow(x(), Expr::sub(lit(3.0), lit(1.0)))),
            lit(1.0),
        ));
    }

    #[test]
    fn both_literal_uses_literal_base_rule() {
        assert_eq!(d("2^3"), Expr::mul(
            Expr::mul(Expr::log(lit(2.0)), Expr::pow(lit(2.0), lit(3.0))),
            lit(0.0),
        ));
    }

    #[test]
    fn general_power() {
        assert_eq!(d("x^x"), Expr::mul(
            Expr::pow(x(), x()),
            Expr::add(
                Expr::mul(lit(1.0), x()),
                Expr::div(Expr::mul(lit(1.0), x()), x()),
            ),
        ));
    }

    #[test]
    fn derivative_shares_no_nodes() {
        let expr = parse("x^x*log(x)/(2^x+x^3)").unwrap();
        let derivative = expr.differentiate();

        for original in expr.post_order_iter() {
            for derived in derivative.post_order_iter() {
                assert!(!std::ptr::eq(original, derived));
            }
        }
    }

    #[test]
    fn input_is_unchanged() {
        let expr = parse("x^2+log(x)").unwrap();
        let before = expr.deep_copy();
        let second = expr.differentiate().differentiate();
        assert_eq!(expr, before);
        assert!(second.node_count() > expr.node_count());
    }

    #[test]
    fn power_rule() {
        test_for_function("x^2 + x + 1", [0., 1., 2., 5., 8.]);
    }

    #[test]
    fn product_and_quotient() {
        test_for_function("x*log(x)", [0.5, 1., 2., 5.]);
        test_for_function("1/(x+1)", [0., 1., 2., 5.]);
        test_for_function("(x^2+1)/(x-3)", [0., 1., 2., 5.]);
    }

    #[test]
    fn powers() {
        test_for_function("x^(1/2)", [0.5, 1., 2., 3.]);
        test_for_function("x^2^2", [-1., 0.5, 2.]);
        test_for_function("2^(3*x)", [-1., 0., 1., 2.]);
        test_for_function("(x^2+1)^3", [-1., 0., 1., 2.]);
    }

    #[test]
    fn chain_rule_through_log() {
        test_for_function("log(x^2+1)/x", [0.5, 1., 2., 5.]);
        test_for_function("4*(x+5*x)", [0., 3.]);
    }
}
