/// Statement parsing.
///
/// One routine per statement form, all reached from [`Parser::statement`]. Each routine starts with the cursor on
/// the leading token and returns `None` when the construct is truncated.
impl<'a> Parser<'a> {
    // ========================================================================
    // Statements
    // ========================================================================

    /// Dispatch on the current token.
    ///
    /// ## Notes
    /// - Reserved keywords (`nest`, `hive`, ...), symbols, strings and numbers have no statement grammar; the
    ///   caller's loop steps over them.
    fn statement(&mut self) -> Option<Statement> {
        let tok = self.peek()?;

        match tok.kind {
            TokenKind::Keyword(KeywordId::Print) => self.print_statement(),
            TokenKind::Keyword(KeywordId::Var) => self.variable_declaration(),
            TokenKind::Keyword(KeywordId::Function) => self.function_declaration(),
            TokenKind::Identifier => self.call_statement(),
            _ => {
                tracing::trace!(kind = tok.kind.name(), text = %tok.text, "no statement grammar, skipping");
                None
            }
        }
    }

    /// `sting <value>`
    fn print_statement(&mut self) -> Option<Statement> {
        self.bump(); // sting
        let Some(value) = self.advance_text() else {
            tracing::trace!("print without a value");
            return None;
        };
        Some(Statement::Print { value })
    }

    /// `worker <name> = <value>`
    ///
    /// The `=` slot is skipped without being checked.
    fn variable_declaration(&mut self) -> Option<Statement> {
        self.bump(); // worker
        if self.remaining() < 3 {
            tracing::trace!(remaining = self.remaining(), "truncated variable declaration");
            return None;
        }
        let name = self.advance_text()?;
        self.bump(); // =
        let value = self.advance_text()?;
        Some(Statement::VariableDecl { name, value })
    }

    /// `buzz <name> ... { <statements> }`
    ///
    /// Anything between the name and `{` is skipped, so parameters are never collected. The body runs until the
    /// next `}` or end of input. Both braces are matched by token text: `"{"` and `"}"` strings act as braces too.
    fn function_declaration(&mut self) -> Option<Statement> {
        self.bump(); // buzz
        let Some(name) = self.advance_text() else {
            tracing::trace!("function without a name");
            return None;
        };

        self.skip_past_text("{");
        let body = self.statements_until(|tok| tok.text == "}");
        self.bump(); // }

        Some(Statement::FunctionDecl {
            name,
            params: Vec::new(),
            body,
        })
    }

    /// `<name>()`
    ///
    /// The token after `(` is taken as the closing paren whatever it is; arguments are never collected.
    fn call_statement(&mut self) -> Option<Statement> {
        let name = self.advance_text()?;
        if !self.check_text("(") {
            tracing::trace!(%name, "identifier not followed by `(`");
            return None;
        }
        self.bump(); // (
        self.bump(); // )
        Some(Statement::Call { name, args: Vec::new() })
    }
}
