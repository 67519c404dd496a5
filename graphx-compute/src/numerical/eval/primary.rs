use graphx_parser::parser::ast::{literal::{Literal, Variable}, paren::Paren};
use super::Eval;

impl Eval for Literal {
    fn evaluate(&self, _: f64) -> f64 {
        self.value
    }
}

impl Eval for Variable {
    fn evaluate(&self, x: f64) -> f64 {
        x
    }
}

impl Eval for Paren {
    fn evaluate(&self, x: f64) -> f64 {
        self.expr.evaluate(x)
    }
}
