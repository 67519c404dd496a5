use graphx_attrs::ErrorKind;
use graphx_error::{Error as SpanError, ErrorKind};
use graphx_parser::ParseError;
use std::ops::Range;

/// The text after `@` is not a number.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "invalid evaluation point",
    labels = ["expected a number here"],
    help = "write the point as a literal, such as `@ 2` or `@ -0.5`",
)]
pub struct InvalidPoint;

/// Utility enum to package errors that can occur while running a command.
#[derive(Debug)]
pub enum Error {
    /// The expression could not be parsed.
    Parse(ParseError),

    /// Some other part of the command was wrong. Holds the error and the line it points into.
    Command(SpanError, String),
}

impl Error {
    /// Creates an error for an invalid evaluation point at the given span of `line`.
    pub fn invalid_point(line: &str, span: Range<usize>) -> Self {
        Self::Command(SpanError::new(vec![span], InvalidPoint), line.to_string())
    }

    /// Report this error to stderr.
    ///
    /// The `ariadne` crate's [`Report`](ariadne::Report) type does not have a `Display`
    /// implementation, so we can only use its `eprint` method to print to stderr.
    pub fn report_to_stderr(&self) {
        let res = match self {
            Self::Parse(err) => err.report_to_stderr("input"),
            Self::Command(err, line) => err.report_to_stderr("input", line),
        };
        if let Err(err) = res {
            eprintln!("{}", err);
        }
    }
}

impl From<ParseError> for Error {
    fn from(err: ParseError) -> Self {
        Self::Parse(err)
    }
}
