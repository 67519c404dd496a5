//! The expression tree produced by the parser.
//!
//! Every node exclusively owns its children through a [`Box`], so a tree never shares nodes with
//! another tree. Trees are never mutated after construction; operations that transform a tree,
//! such as differentiation, build a new one.

pub mod binary;
pub mod expr;
pub mod literal;
pub mod op;
pub mod paren;

pub use binary::{Additive, Exponential, Multiplicative};
pub use expr::Expr;
pub use literal::{Literal, Variable};
pub use op::{AddOp, ExpOp, MulOp, OpKind};
pub use paren::Paren;
