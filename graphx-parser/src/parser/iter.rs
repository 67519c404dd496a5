use super::ast::expr::Expr;

/// An iterator that iteratively traverses the tree of expressions in left-to-right post-order
/// (i.e. depth-first).
///
/// This iterator is created by [`Expr::post_order_iter`].
pub struct ExprIter<'a> {
    stack: Vec<&'a Expr>,
    last_visited: Option<&'a Expr>,
}

impl<'a> ExprIter<'a> {
    /// Creates a new iterator that traverses the tree of expressions in left-to-right post-order
    /// (i.e. depth-first).
    pub fn new(expr: &'a Expr) -> Self {
        Self {
            stack: vec![expr],
            last_visited: None,
        }
    }

    /// Pops the current expression in the stack and marks it as the last visited expression.
    fn visit(&mut self) -> Option<&'a Expr> {
        self.last_visited = Some(self.stack.pop()?);
        self.last_visited
    }

    /// Returns true if the given expression matches the last visited expression.
    fn is_last_visited(&self, expr: &'a Expr) -> bool {
        match self.last_visited {
            Some(last_visited) => std::ptr::eq(last_visited, expr),
            None => false,
        }
    }
}

impl<'a> Iterator for ExprIter<'a> {
    type Item = &'a Expr;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let expr = *self.stack.last()?;
            match expr {
                Expr::Literal(_) | Expr::Variable(_) => return self.visit(),
                Expr::Paren(paren) => {
                    if self.is_last_visited(&paren.expr) {
                        return self.visit();
                    }
                    self.stack.push(&paren.expr);
                },
                Expr::Additive(add) => {
                    if self.is_last_visited(&add.rhs) {
                        return self.visit();
                    }
                    self.stack.push(&add.rhs);
                    self.stack.push(&add.lhs);
                },
                Expr::Multiplicative(mul) => {
                    if self.is_last_visited(&mul.rhs) {
                        return self.visit();
                    }
                    self.stack.push(&mul.rhs);
                    self.stack.push(&mul.lhs);
                },
                Expr::Exponential(exp) => {
                    let last = exp.rhs.as_deref().unwrap_or(&*exp.lhs);
                    if self.is_last_visited(last) {
                        return self.visit();
                    }
                    if let Some(rhs) = exp.rhs.as_deref() {
                        self.stack.push(rhs);
                    }
                    self.stack.push(&exp.lhs);
                },
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn visits_children_before_parents() {
        let expr = Expr::add(
            Expr::mul(Expr::literal(2.0), Expr::variable()),
            Expr::log(Expr::paren(Expr::variable())),
        );
        let order = expr.post_order_iter()
            .map(|expr| expr.to_string())
            .collect::<Vec<_>>();

        assert_eq!(order, vec![
            "2.0",
            "x",
            "2.0*x",
            "x",
            "(x)",
            "log(x)",
            "2.0*x+log(x)",
        ]);
    }
}
