//! Numerical and symbolic computation on expressions produced by [`graphx_parser`].
//!
//! - [`numerical`]: evaluating an expression at a value of `x`, and sampling it over a range.
//! - [`symbolic`]: differentiating an expression with respect to `x`.
//!
//! ```
//! use graphx_compute::{numerical::eval::Eval, symbolic::Differentiate};
//! use graphx_parser::parse;
//!
//! let expr = parse("x^2 + 1").unwrap();
//! assert_eq!(expr.evaluate(3.0), 10.0);
//! assert_eq!(expr.differentiate().evaluate(3.0), 6.0);
//! ```

pub mod numerical;
pub mod symbolic;
