//! The grammar levels of the expression parser.
//!
//! The parser never tokenizes its input. Each grammar level is a function from a substring to an
//! optional tree; [`None`] means the level did not match, not that the input is wrong. A level
//! that handles binary operators scans its input from left to right for one of its operator
//! characters, parses the text on either side at the levels the [`Grammar`] assigns, and returns
//! at the first position where both sides parse. If no position works, it falls through to the
//! next level down.
//!
//! With [`Grammar::Canonical`], the levels are:
//!
//! ```text
//! A -> A+M | A-M | M
//! M -> M*E | M/E | E
//! E -> B^E | B
//! B -> P | log P
//! P -> (A) | L | x
//! ```
//!
//! where `L` is a number literal (see [`literal`]). Only after every level fails is the input
//! examined to explain the failure; see [`error::diagnose`].

pub mod ast;
pub mod error;
pub mod fmt;
pub mod iter;
pub mod literal;
pub mod options;

use ast::{expr::Expr, literal::Variable, op::OpKind};
use error::ParseError;
use log::{debug, trace};
use options::{Grammar, ParseOptions};
/// A grammar level: parses the entire given substring at the given recursion depth.
type Level<'a> = fn(&mut Scan<'a>, &str, usize) -> Option<Expr>;

/// A parser for expressions in the single variable `x`.
///
/// The parser holds no state between calls to [`Parser::parse`], and can be reused for any
/// number of inputs, from any number of threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct Parser {
    /// The options to parse with.
    options: ParseOptions,
}

impl Parser {
    /// Creates a parser with the default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a parser with the given options.
    pub fn with_options(options: ParseOptions) -> Self {
        Self { options }
    }

    /// Returns the options this parser uses.
    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    /// Parses the given input into an expression tree.
    ///
    /// Every space character is removed before parsing, so `4 * (x + 1)` and `4*(x+1)` give the
    /// same tree. If the input cannot be parsed, the returned error holds the input with its
    /// spaces removed.
    pub fn parse(&self, input: &str) -> Result<Expr, ParseError> {
        let stripped = input.replace(' ', "");
        let mut scan = Scan::new(&self.options);

        let expr = scan.additive(&stripped, 0)
            .or_else(|| scan.primary(&stripped, 0));

        match expr {
            Some(expr) => {
                debug!("parsed `{}` as `{}`", stripped, expr);
                Ok(expr)
            },
            None => {
                let limit = self.options.max_depth.filter(|_| scan.limit_reached);
                let err = ParseError::new(stripped, limit);
                debug!("{}", err);
                Err(err)
            },
        }
    }
}

/// The state of a single call to [`Parser::parse`].
struct Scan<'a> {
    /// The options of the parser that started this scan.
    options: &'a ParseOptions,

    /// Whether a level was cut off by [`ParseOptions::max_depth`].
    limit_reached: bool,
}

impl<'a> Scan<'a> {
    fn new(options: &'a ParseOptions) -> Self {
        Self { options, limit_reached: false }
    }

    /// Returns true if a level may run at the given depth. Otherwise, records that the limit
    /// was reached.
    fn enter(&mut self, depth: usize) -> bool {
        match self.options.max_depth {
            Some(max) if depth > max => {
                self.limit_reached = true;
                false
            },
            _ => true,
        }
    }

    /// Scans `input` from left to right for any of the characters in `ops`. At each one, parses
    /// the text before it with `lhs` and the text after it with `rhs`, and builds a node from the
    /// first pair where both succeed.
    fn split_first(
        &mut self,
        input: &str,
        depth: usize,
        ops: &[char],
        lhs: Level<'a>,
        rhs: Level<'a>,
    ) -> Option<Expr> {
        for (i, c) in input.char_indices() {
            if !ops.contains(&c) {
                continue;
            }

            let (left, right) = (&input[..i], &input[i + c.len_utf8()..]);
            trace!("trying `{}` at {} in `{}`", c, i, input);

            let Some(left) = lhs(self, left, depth + 1) else { continue };
            let Some(right) = rhs(self, right, depth + 1) else { continue };

            return Some(match OpKind::from_char(c)? {
                OpKind::Add => Expr::add(left, right),
                OpKind::Sub => Expr::sub(left, right),
                OpKind::Mul => Expr::mul(left, right),
                OpKind::Div => Expr::div(left, right),
                OpKind::Pow => Expr::pow(left, right),
                OpKind::Log => return None,
            });
        }

        None
    }

    /// Sums and differences.
    fn additive(&mut self, input: &str, depth: usize) -> Option<Expr> {
        if !self.enter(depth) {
            return None;
        }

        let (lhs, rhs): (Level<'a>, Level<'a>) = match self.options.grammar {
            Grammar::Canonical => (Self::additive, Self::multiplicative),
            Grammar::Legacy => (Self::multiplicative, Self::exponential),
        };
        self.split_first(input, depth, &['+', '-'], lhs, rhs)
            .or_else(|| self.multiplicative(input, depth + 1))
    }

    /// Products and quotients.
    fn multiplicative(&mut self, input: &str, depth: usize) -> Option<Expr> {
        if !self.enter(depth) {
            return None;
        }

        let (lhs, rhs): (Level<'a>, Level<'a>) = match self.options.grammar {
            Grammar::Canonical => (Self::multiplicative, Self::exponential),
            Grammar::Legacy => (Self::additive, Self::additive),
        };
        self.split_first(input, depth, &['*', '/'], lhs, rhs)
            .or_else(|| self.exponential(input, depth + 1))
    }

    /// Powers, and the bases they are built from.
    fn exponential(&mut self, input: &str, depth: usize) -> Option<Expr> {
        if !self.enter(depth) {
            return None;
        }

        let (lhs, rhs): (Level<'a>, Level<'a>) = match self.options.grammar {
            Grammar::Canonical => (Self::base, Self::exponential),
            Grammar::Legacy => (Self::additive, Self::additive),
        };
        self.split_first(input, depth, &['^'], lhs, rhs)
            .or_else(|| self.base(input, depth + 1))
    }

    /// A primary expression, or the natural logarithm of one.
    fn base(&mut self, input: &str, depth: usize) -> Option<Expr> {
        if !self.enter(depth) {
            return None;
        }

        if let Some(expr) = self.primary(input, depth + 1) {
            return Some(expr);
        }
        let arg = input.strip_prefix("log")?;
        self.primary(arg, depth + 1).map(Expr::log)
    }

    /// A parenthesized expression, a literal, or the variable.
    ///
    /// Input that starts with `(` and ends with `)` is always treated as a parenthesized
    /// expression, without checking that the two parentheses match each other; an input such as
    /// `(1)+(2)` is rejected here because `1)+(2` fails to parse.
    fn primary(&mut self, input: &str, depth: usize) -> Option<Expr> {
        if !self.enter(depth) || input.is_empty() {
            return None;
        }

        if let Some(inner) = input.strip_prefix('(').and_then(|s| s.strip_suffix(')')) {
            return self.additive(inner, depth + 1).map(Expr::paren);
        }

        literal::parse_literal(input)
            .map(Expr::literal)
            .or_else(|| variable(input))
    }
}

/// The variable `x`.
fn variable(input: &str) -> Option<Expr> {
    (input == Variable::NAME).then(Expr::variable)
}

/// Parses the given input into an expression tree with the default options.
///
/// ```
/// use graphx_parser::parse;
///
/// assert_eq!(parse("13*x").unwrap().render(0), "*\n\t13.0\n\tx\n");
/// assert!(parse("1+2+").is_err());
/// ```
pub fn parse(input: &str) -> Result<Expr, ParseError> {
    Parser::new().parse(input)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;
    use error::kind::{EmptyParenthesis, RecursionLimit, TrailingOperator, UnexpectedCharacter};

    fn lit(value: f64) -> Expr {
        Expr::literal(value)
    }

    fn x() -> Expr {
        Expr::variable()
    }

    fn legacy() -> Parser {
        Parser::with_options(ParseOptions::builder().grammar(Grammar::Legacy).build())
    }

    #[test]
    fn sum() {
        assert_eq!(parse("x+x").unwrap(), Expr::add(x(), x()));
    }

    #[test]
    fn spaces_are_ignored() {
        assert_eq!(parse(" 13 * x ").unwrap(), Expr::mul(lit(13.0), x()));
    }

    #[test]
    fn nested_tree() {
        let expr = parse("10*x^3 + 2*(15+x)").unwrap();
        assert_eq!(expr, Expr::add(
            Expr::mul(lit(10.0), Expr::pow(x(), lit(3.0))),
            Expr::mul(lit(2.0), Expr::paren(Expr::add(lit(15.0), x()))),
        ));
    }

    #[test]
    fn left_associativity() {
        assert_eq!(parse("3*x*5").unwrap(), Expr::mul(Expr::mul(lit(3.0), x()), lit(5.0)));
        assert_eq!(parse("x-1-2").unwrap(), Expr::sub(Expr::sub(x(), lit(1.0)), lit(2.0)));
        assert_eq!(parse("9/3*3").unwrap(), Expr::mul(Expr::div(lit(9.0), lit(3.0)), lit(3.0)));
    }

    #[test]
    fn mixed_precedence() {
        assert_eq!(
            parse("3+4*x+1").unwrap(),
            Expr::add(Expr::add(lit(3.0), Expr::mul(lit(4.0), x())), lit(1.0)),
        );
        assert_eq!(parse("4-3*x").unwrap(), Expr::sub(lit(4.0), Expr::mul(lit(3.0), x())));
    }

    #[test]
    fn power_right_associativity() {
        assert_eq!(
            parse("4^3^2").unwrap(),
            Expr::pow(lit(4.0), Expr::pow(lit(3.0), lit(2.0))),
        );
    }

    #[test]
    fn signed_literals() {
        assert_eq!(parse("2*-3").unwrap(), Expr::mul(lit(2.0), lit(-3.0)));
        assert_eq!(parse("x^-1").unwrap(), Expr::pow(x(), lit(-1.0)));
        assert_eq!(parse("2e-3*x").unwrap(), Expr::mul(lit(0.002), x()));
        assert_eq!(parse("1./(1. + 5^(-1*x))").unwrap(), Expr::div(
            lit(1.0),
            Expr::paren(Expr::add(
                lit(1.0),
                Expr::pow(lit(5.0), Expr::paren(Expr::mul(lit(-1.0), x()))),
            )),
        ));
    }

    #[test]
    fn logarithm() {
        assert_eq!(
            parse("log(x*2)").unwrap(),
            Expr::log(Expr::paren(Expr::mul(x(), lit(2.0)))),
        );
        assert_eq!(parse("logx").unwrap(), Expr::log(x()));
        assert_eq!(
            parse("2*log(x)^2").unwrap(),
            Expr::mul(lit(2.0), Expr::pow(Expr::log(Expr::paren(x())), lit(2.0))),
        );
    }

    #[test]
    fn nested_parentheses() {
        assert_eq!(parse("((x))").unwrap(), Expr::paren(Expr::paren(x())));
    }

    #[test]
    fn invalid_inputs() {
        for input in ["1+2+", "((()))", "()()", "", "x+", "(x", "x)", "*x", "xx", "log", "log()"] {
            assert!(parse(input).is_err(), "{input:?} should not parse");
        }
    }

    #[test]
    fn error_holds_stripped_input() {
        let err = parse("1 + 2 +").unwrap_err();
        assert_eq!(err.input, "1+2+");
        assert_eq!(err.to_string(), "cannot parse expression: 1+2+");
        assert!(err.kind::<TrailingOperator>().is_some());
    }

    #[test]
    fn error_kinds() {
        assert!(parse("((()))").unwrap_err().kind::<EmptyParenthesis>().is_some());
        assert!(parse("()()").unwrap_err().kind::<EmptyParenthesis>().is_some());
        assert_eq!(
            parse("2*z").unwrap_err().kind::<UnexpectedCharacter>(),
            Some(&UnexpectedCharacter { ch: 'z' }),
        );
    }

    #[test]
    fn legacy_grammar() {
        let parser = legacy();
        assert_eq!(
            parser.parse("2+3*4").unwrap(),
            Expr::mul(Expr::add(lit(2.0), lit(3.0)), lit(4.0)),
        );
        assert_eq!(
            parser.parse("9/3*3").unwrap(),
            Expr::div(lit(9.0), Expr::mul(lit(3.0), lit(3.0))),
        );
        assert_eq!(parser.parse("x+x").unwrap(), Expr::add(x(), x()));
        assert!(parser.parse("1+2+").is_err());
    }

    #[test]
    fn legacy_grammar_regroups_products_in_sums() {
        // the right operand of `+` is a power, so `x+5*x` falls back to a product of a sum
        assert_eq!(
            legacy().parse("4*(x+5*x)").unwrap(),
            Expr::mul(lit(4.0), Expr::paren(Expr::mul(Expr::add(x(), lit(5.0)), x()))),
        );
    }

    #[test]
    fn legacy_grammar_rejects_chained_sums() {
        for input in ["x-1-2", "1+2+3"] {
            assert!(legacy().parse(input).is_err(), "{input:?} should not parse");
            assert!(parse(input).is_ok(), "{input:?} should parse");
        }
    }

    #[test]
    fn grammars_agree_on_simple_input() {
        for input in ["x+x", "13*x", "4*(x+5)", "4^3^2", "log(x*2)", "x^2-1"] {
            assert_eq!(legacy().parse(input).unwrap(), parse(input).unwrap(), "{input}");
        }
    }

    #[test]
    fn depth_limit() {
        let shallow = Parser::with_options(ParseOptions::builder().max_depth(2).build());
        let err = shallow.parse("((x))").unwrap_err();
        assert_eq!(err.kind::<RecursionLimit>(), Some(&RecursionLimit { limit: 2 }));

        let deep = Parser::with_options(ParseOptions::builder().max_depth(64).build());
        assert_eq!(deep.parse("((x))").unwrap(), Expr::paren(Expr::paren(x())));

        // a structural problem is reported ahead of the limit
        assert!(shallow.parse("((x)").unwrap_err().kind::<RecursionLimit>().is_none());
    }

    #[test]
    fn parser_is_shareable() {
        fn assert_send_sync<T: Send + Sync + Copy>() {}
        assert_send_sync::<Parser>();

        let parser = Parser::new();
        std::thread::scope(|s| {
            let handles = ["x+x", "13*x", "(x"]
                .map(|input| s.spawn(move || parser.parse(input).is_ok()));
            let parsed = handles.map(|h| h.join().unwrap());
            assert_eq!(parsed, [true, true, false]);
        });
    }

    #[test]
    fn parser_is_reusable() {
        let parser = Parser::new();
        assert!(parser.parse("(((x)))").is_ok());
        assert!(parser.parse("x+").is_err());
        assert!(parser.parse("x").is_ok());
    }
}
