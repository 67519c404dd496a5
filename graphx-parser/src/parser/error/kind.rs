use ariadne::Fmt;
use graphx_attrs::ErrorKind;
use graphx_error::{ErrorKind, EXPR};

/// There was nothing to parse.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "empty expression",
    labels = [""],
    help = format!("try an {} such as {}", "expression".fg(EXPR), "x^2 + 1".fg(EXPR)),
)]
pub struct EmptyExpression;

/// A character that cannot appear anywhere in an expression.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("unexpected character `{}`", ch),
    labels = ["this character"],
    help = format!("the only variable is {}", "x".fg(EXPR)),
)]
pub struct UnexpectedCharacter {
    /// The character that was found.
    pub ch: char,
}

/// A parenthesis has no partner.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "unclosed parenthesis",
    labels = ["this parenthesis"],
    help = if *opening {
        "add a closing parenthesis `)` somewhere after this"
    } else {
        "add an opening parenthesis `(` somewhere before this"
    },
)]
pub struct UnclosedParenthesis {
    /// Whether the parenthesis is an opening parenthesis `(`. Otherwise, it is a closing
    /// parenthesis `)`.
    pub opening: bool,
}

/// A pair of parentheses with nothing between them.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "missing expression inside parenthesis",
    labels = [format!("add an {} here", "expression".fg(EXPR))],
)]
pub struct EmptyParenthesis;

/// The input ends with an operator that has no right-hand side.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "missing right-hand side of operator",
    labels = [format!("this operator needs an {} after it", "expression".fg(EXPR))],
)]
pub struct TrailingOperator;

/// The input starts with an operator that has no left-hand side.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "missing left-hand side of operator",
    labels = [format!("this operator needs an {} before it", "expression".fg(EXPR))],
    help = "a leading `+` or `-` is only allowed as the sign of a number",
)]
pub struct LeadingOperator;

/// The expression nests deeper than the configured limit.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "expression is nested too deeply",
    labels = [""],
    help = format!("the parser gives up after {} nested levels", limit.to_string().fg(EXPR)),
)]
pub struct RecursionLimit {
    /// The maximum depth that was configured.
    pub limit: usize,
}

/// The expression does not match the grammar, for no more specific reason that could be found.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "invalid expression",
    labels = ["I could not understand this expression"],
    help = format!("operators are {}; functions are {}", "+ - * / ^".fg(EXPR), "log(..)".fg(EXPR)),
)]
pub struct InvalidExpression;
