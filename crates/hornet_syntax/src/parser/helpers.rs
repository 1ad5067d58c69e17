/// Token-stream helpers.
///
/// Low-level cursor primitives used throughout parsing. Every helper tolerates running past the end of input:
/// peeks return `None` and bumps are no-ops.
impl<'a> Parser<'a> {
    // ========================================================================
    // Helpers
    // ========================================================================

    /// Return the current token without consuming it.
    fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos)
    }

    /// Number of tokens not yet consumed.
    fn remaining(&self) -> usize {
        self.tokens.len() - self.pos
    }

    /// Move the cursor forward by one (saturating at end of input).
    fn bump(&mut self) {
        if self.pos < self.tokens.len() {
            self.pos += 1;
        }
    }

    /// Consume the current token and return it.
    fn advance(&mut self) -> Option<&'a Token> {
        let tok = self.peek()?;
        self.pos += 1;
        Some(tok)
    }

    /// Consume the current token and return an owned copy of its text.
    fn advance_text(&mut self) -> Option<String> {
        self.advance().map(|tok| tok.text.clone())
    }

    /// Return `true` if the current token's text is exactly `text`.
    fn check_text(&self, text: &str) -> bool {
        self.peek().is_some_and(|tok| tok.text == text)
    }

    /// Skip tokens up to and including the next one whose text is `text` (or to end of input).
    ///
    /// ## Notes
    /// - Matches on text, so a string token spelling `{` counts the same as the symbol.
    fn skip_past_text(&mut self, text: &str) {
        while self.peek().is_some() && !self.check_text(text) {
            self.bump();
        }
        self.bump();
    }
}
