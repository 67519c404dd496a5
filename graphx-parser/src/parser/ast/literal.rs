use crate::parser::fmt::fmt_number;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A number literal, such as `13`, `2.5e-3`, or `0x1p4`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Literal {
    /// The value of the literal.
    pub value: f64,
}

impl Literal {
    /// Creates a new literal with the given value.
    pub fn new(value: f64) -> Self {
        Self { value }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt_number(f, self.value)
    }
}

/// The independent variable `x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Variable;

impl Variable {
    /// The name of the variable, as it is written in source text.
    pub const NAME: &'static str = "x";
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(Self::NAME)
    }
}
