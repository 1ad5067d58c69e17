/// Parse a token stream into a [`Program`].
///
/// This is the main public entrypoint for parsing.
///
/// ## Parameters
/// - `tokens`: Token stream produced by `hornet_syntax::lexer`.
#[tracing::instrument(skip_all, fields(token_count = tokens.len()))]
pub fn parse(tokens: &[Token]) -> Program {
    let program = Parser::new(tokens).parse();
    tracing::debug!(statement_count = program.statements.len(), "parsed");
    program
}
