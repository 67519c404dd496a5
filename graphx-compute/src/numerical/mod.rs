//! Numerical evaluation of expressions.
//!
//! All arithmetic is done with [`f64`]. Operations outside their domain, such as dividing by
//! zero or taking the logarithm of a negative number, are not errors; they produce infinities or
//! NaN exactly as the underlying floating-point operations do.

pub mod eval;
pub mod point;
pub mod sample;
