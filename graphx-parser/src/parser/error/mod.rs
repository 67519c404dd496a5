pub mod kind;

use ariadne::Report;
use graphx_error::{Error, ErrorKind};
use std::{fmt, io, ops::Range};

/// An input string that could not be parsed at any grammar level.
#[derive(Debug)]
pub struct ParseError {
    /// The input with its spaces removed. This is the text that the parser actually read, and
    /// the text that the spans of [`ParseError::error`] point into.
    pub input: String,

    /// The most specific reason for the failure that could be found.
    pub error: Error,
}

impl ParseError {
    /// Creates a parse error for the given space-stripped input, diagnosing why it failed.
    ///
    /// `limit` is the configured maximum depth, if it was reached during the failed parse.
    pub fn new(input: String, limit: Option<usize>) -> Self {
        let error = diagnose(&input, limit);
        Self { input, error }
    }

    /// Returns the kind of this error as the concrete type `K`, if it is one.
    pub fn kind<K: ErrorKind + 'static>(&self) -> Option<&K> {
        self.error.downcast_kind::<K>()
    }

    /// Build a report from this error.
    pub fn build_report<'a>(&self, src_id: &'a str) -> Report<(&'a str, Range<usize>)> {
        self.error.build_report(src_id)
    }

    /// Writes the report for this error to the given writer.
    pub fn write_report<W: io::Write>(&self, src_id: &str, writer: W) -> io::Result<()> {
        self.error.write_report(src_id, &self.input, writer)
    }

    /// Report this error to stderr.
    pub fn report_to_stderr(&self, src_id: &str) -> io::Result<()> {
        self.error.report_to_stderr(src_id, &self.input)
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "cannot parse expression: {}", self.input)
    }
}

impl std::error::Error for ParseError {}

/// Returns true if the character can appear somewhere in a valid expression, either as an
/// operator, a parenthesis, the variable, or part of a literal or the `log` function.
fn is_known_char(c: char) -> bool {
    c <= ' '
        || c.is_ascii_hexdigit()
        || "+-*/^().xXpPlogNaIinftydD".contains(c)
}

fn is_operator(c: char) -> bool {
    matches!(c, '+' | '-' | '*' | '/' | '^')
}

/// Finds the most specific reason that `input` failed to parse.
///
/// This is only called after every grammar level has already rejected the input, so it never
/// decides acceptance; it only picks the message and the spans to highlight.
pub fn diagnose(input: &str, limit: Option<usize>) -> Error {
    use kind::*;

    if input.is_empty() {
        return Error::new(vec![0..0], EmptyExpression);
    }

    if let Some((i, ch)) = input.char_indices().find(|&(_, c)| !is_known_char(c)) {
        return Error::new(vec![i..i + 1], UnexpectedCharacter { ch });
    }

    // every character is ASCII from here on, so byte offsets are character offsets
    let mut open = Vec::new();
    for (i, c) in input.char_indices() {
        match c {
            '(' => open.push(i),
            ')' => if open.pop().is_none() {
                return Error::new(vec![i..i + 1], UnclosedParenthesis { opening: false });
            },
            _ => (),
        }
    }
    if let Some(i) = open.pop() {
        return Error::new(vec![i..i + 1], UnclosedParenthesis { opening: true });
    }

    if let Some(i) = input.find("()") {
        return Error::new(vec![i..i + 2], EmptyParenthesis);
    }

    let bytes = input.as_bytes();
    let last = bytes.len() - 1;
    if is_operator(char::from(bytes[last])) {
        return Error::new(vec![last..last + 1], TrailingOperator);
    }

    let first = char::from(bytes[0]);
    let is_sign = matches!(first, '+' | '-')
        && bytes.get(1).map_or(false, |&b| b.is_ascii_digit() || matches!(b, b'.' | b'N' | b'I'));
    if is_operator(first) && !is_sign {
        return Error::new(vec![0..1], LeadingOperator);
    }

    if let Some(limit) = limit {
        return Error::new(vec![0..input.len()], RecursionLimit { limit });
    }

    Error::new(vec![0..input.len()], InvalidExpression)
}
