/// Parser core type and entrypoint.
///
/// This chunk defines the [`Parser`] type and its top-level `parse()` loop.
///
/// ## Notes
/// - This file is `include!`'d into `crate::parser`.

/// Parser state: the token slice plus a single forward-only cursor.
///
/// ## Notes
/// - The cursor never moves backwards and never exceeds `tokens.len()`.
/// - Statement routines return `Option<Statement>`; `None` means “nothing to emit here”, not an error.
pub struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> Parser<'a> {
    /// Create a new parser for a token stream.
    ///
    /// ## Parameters
    /// - `tokens`: Token stream produced by `hornet_syntax::lexer`.
    pub fn new(tokens: &'a [Token]) -> Self {
        Self { tokens, pos: 0 }
    }

    /// Parse the entire token stream into a [`Program`].
    pub fn parse(mut self) -> Program {
        let statements = self.statements_until(|_| false);
        Program { statements }
    }

    /// Run statement dispatch until the input ends or `stop` accepts the current token.
    ///
    /// Shared by the top level and function bodies. A dispatch that consumed nothing is forced one unit forward.
    fn statements_until(&mut self, stop: impl Fn(&Token) -> bool) -> Vec<Statement> {
        let mut statements = Vec::new();

        while let Some(tok) = self.peek() {
            if stop(tok) {
                break;
            }
            let before = self.pos;
            if let Some(stmt) = self.statement() {
                statements.push(stmt);
            }
            if self.pos == before {
                self.bump();
            }
        }

        statements
    }
}
