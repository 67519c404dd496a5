use graphx_parser::parser::ast::expr::Expr;
use super::Eval;

impl Eval for Expr {
    fn evaluate(&self, x: f64) -> f64 {
        match self {
            Expr::Literal(literal) => literal.evaluate(x),
            Expr::Variable(variable) => variable.evaluate(x),
            Expr::Paren(paren) => paren.evaluate(x),
            Expr::Additive(add) => add.evaluate(x),
            Expr::Multiplicative(mul) => mul.evaluate(x),
            Expr::Exponential(exp) => exp.evaluate(x),
        }
    }
}
