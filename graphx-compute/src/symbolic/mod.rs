//! Symbolic manipulation of expressions.
//!
//! The only operation is differentiation with respect to `x`, through [`derivative()`] or the
//! [`Differentiate`] trait. Derivatives are built mechanically from the differentiation rules and
//! are not simplified, so `d/dx (3*x)` is `0*x+3*1` rather than `3`.

pub mod derivative;

pub use derivative::{derivative, Differentiate};
