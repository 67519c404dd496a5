/// The set of rules used to decide which operand of an operator may contain which operators.
///
/// Both grammars scan the input from left to right and split at the first operator whose
/// operands both parse; they differ only in which level each operand is parsed at.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Grammar {
    /// The usual arithmetic grammar. `+` and `-` are left-associative and bind loosest, `*` and
    /// `/` are left-associative and bind tighter, and `^` is right-associative and binds tightest.
    /// `4*(x+5*x)` at `x = 3` evaluates to `72`.
    #[default]
    Canonical,

    /// The grammar of the first `graphx` releases.
    ///
    /// The left operand of `+` and `-` is parsed as a product, their right operand as a power, and
    /// both operands of `*`, `/` and `^` are parsed as sums. Combined with the first-split rule,
    /// this gives unusual groupings: `2+3*4` parses as `(2+3)*4`, which is `20`, and `9/3*3`
    /// parses as `9/(3*3)`. Inside parentheses the same happens, so `4*(x+5*x)` parses as
    /// `4*((x+5)*x)`, which is `96` at `x = 3` rather than `72`. Chained sums such as `x-1-2` or
    /// `1+2+3` are rejected outright. Kept so that older saved expressions keep their meaning.
    Legacy,
}

/// Options that change how the [`Parser`](super::Parser) reads an expression.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// The grammar to parse with.
    pub grammar: Grammar,

    /// The maximum number of nested level calls before the parser gives up on a candidate split.
    ///
    /// [`None`] means unbounded. Inputs with deeply nested parentheses can otherwise recurse as
    /// deep as the input is long.
    pub max_depth: Option<usize>,
}

impl ParseOptions {
    /// Returns a builder for [`ParseOptions`].
    pub fn builder() -> ParseOptionsBuilder {
        ParseOptionsBuilder::default()
    }
}

/// Builder for [`ParseOptions`].
#[derive(Debug, Clone, Default)]
pub struct ParseOptionsBuilder {
    options: ParseOptions,
}

impl ParseOptionsBuilder {
    /// Sets the grammar to parse with.
    pub fn grammar(mut self, grammar: Grammar) -> Self {
        self.options.grammar = grammar;
        self
    }

    /// Sets the maximum nesting depth.
    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.options.max_depth = Some(max_depth);
        self
    }

    /// Builds the [`ParseOptions`].
    pub fn build(self) -> ParseOptions {
        self.options
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let options = ParseOptions::default();
        assert_eq!(options.grammar, Grammar::Canonical);
        assert_eq!(options.max_depth, None);
    }

    #[test]
    fn builder() {
        let options = ParseOptions::builder()
            .grammar(Grammar::Legacy)
            .max_depth(64)
            .build();
        assert_eq!(options, ParseOptions { grammar: Grammar::Legacy, max_depth: Some(64) });
    }
}
