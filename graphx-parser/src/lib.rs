//! Parser and expression tree for arithmetic expressions in the single variable `x`.
//!
//! Expressions support `+`, `-`, `*`, `/`, `^`, the natural logarithm `log(..)`, parentheses,
//! the variable `x`, and floating-point literals. Parsing scans the raw input string at each
//! grammar level instead of tokenizing it first; see [`parser`] for the grammar.
//!
//! ```
//! use graphx_parser::parse;
//!
//! let expr = parse("x + x").unwrap();
//! assert_eq!(expr.render(0), "+\n\tx\n\tx\n");
//! ```

pub mod parser;

pub use parser::{ast::Expr, error::ParseError, parse, Parser};
