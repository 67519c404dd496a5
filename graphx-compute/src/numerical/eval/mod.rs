mod binary;
mod expr;
mod primary;

pub use binary::eval_op;

/// Any type that can be evaluated to a number at a given value of the variable `x`.
pub trait Eval {
    /// Evaluate the expression with `x` set to the given value.
    ///
    /// This never fails. Domain errors follow floating-point semantics: `1/0` is infinity, and
    /// `log(-1)` is NaN.
    fn evaluate(&self, x: f64) -> f64;
}
