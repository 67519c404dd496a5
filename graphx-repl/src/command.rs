use crate::error::Error;
use graphx_compute::{
    numerical::{
        eval::Eval,
        sample::{sample, SampleOptions},
    },
    symbolic::Differentiate,
};
use graphx_parser::{parse, parser::literal::parse_literal};
use std::fmt::Write;

/// A line of input to the REPL.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command<'a> {
    /// `<expr>`: print the tree and infix form of the expression.
    Show(&'a str),

    /// `d <expr>`: print the tree and infix form of the derivative.
    Derive(&'a str),

    /// `<expr> @ <x>`: print the value of the expression and its derivative at `x`. Holds the
    /// expression and the byte offset of the `@`.
    At(&'a str, usize),

    /// `table <expr>`: print the expression and its derivative over the default window.
    Table(&'a str),
}

impl<'a> Command<'a> {
    /// Splits a line of input into a command and its arguments.
    pub fn parse(line: &'a str) -> Self {
        let trimmed = line.trim_start();
        if let Some(expr) = trimmed.strip_prefix("table ") {
            Self::Table(expr)
        } else if let Some(expr) = trimmed.strip_prefix("d ") {
            Self::Derive(expr)
        } else if let Some(at) = line.rfind('@') {
            Self::At(&line[..at], at)
        } else {
            Self::Show(line)
        }
    }

    /// Runs the command, returning the text to print.
    pub fn run(self, line: &str) -> Result<String, Error> {
        let mut out = String::new();
        match self {
            Self::Show(input) => {
                let expr = parse(input)?;
                write!(out, "{}y = {}", expr.render(0), expr).ok();
            },
            Self::Derive(input) => {
                let derivative = parse(input)?.differentiate();
                write!(out, "{}y' = {}", derivative.render(0), derivative).ok();
            },
            Self::At(input, at) => {
                let expr = parse(input)?;
                let point = &line[at + 1..];
                let x = parse_literal(point)
                    .ok_or_else(|| Error::invalid_point(line, at + 1..line.len()))?;
                let derivative = expr.differentiate();
                write!(out, "f({x}) = {}\nf'({x}) = {}", expr.evaluate(x), derivative.evaluate(x)).ok();
            },
            Self::Table(input) => {
                let expr = parse(input)?;
                let derivative = expr.differentiate();
                let options = SampleOptions { delta_x: 1.0, ..Default::default() };

                write!(out, "x\tf(x)\tf'(x)").ok();
                for (point, slope) in sample(&expr, options).into_iter().zip(sample(&derivative, options)) {
                    write!(out, "\n{}\t{}\t{}", point.0, point.1, slope.1).ok();
                }
            },
        }
        Ok(out)
    }
}
