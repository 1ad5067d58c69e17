//! Token types for the Hornet scanner.
//!
//! The scanner uses **registry-backed IDs** for language vocabulary:
//! - `Keyword(KeywordId)` for reserved words
//! - `Symbol(SymbolId)` for single-character symbols
//!
//! ## Notes
//! - Every token also keeps the exact `text` that produced it. The parser and emitter work on that text (the
//!   value of a print or variable declaration is echoed verbatim), so it is stored even for keywords and symbols.

use std::fmt;

use crate::ast::Span;
use hornet_core::lang::keywords::{self, KeywordId};
use hornet_core::lang::symbols::{self, SymbolId};

// ============================================================================
// TOKEN TYPES
// ============================================================================

/// Kind of token produced by the scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Keyword(KeywordId),
    Symbol(SymbolId),
    /// Double-quoted text; the token text excludes the quotes.
    String,
    /// A run of numeric characters (`42`, `٣`).
    Number,
    Identifier,
}

impl TokenKind {
    /// Upper-case kind label (`FUNCTION`, `SYMBOL`, `IDENTIFIER`, ...).
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Keyword(id) => keywords::kind_name(*id),
            TokenKind::Symbol(_) => "SYMBOL",
            TokenKind::String => "STRING",
            TokenKind::Number => "NUMBER",
            TokenKind::Identifier => "IDENTIFIER",
        }
    }
}

/// A token with its kind, source text and span.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub span: Span,
}

impl Token {
    /// Construct a new token.
    pub fn new(kind: TokenKind, text: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            text: text.into(),
            span,
        }
    }

    /// Classify a bare word: keyword, number, or identifier.
    pub fn word(text: &str, span: Span) -> Self {
        let kind = if let Some(id) = keywords::from_str(text) {
            TokenKind::Keyword(id)
        } else if is_number(text) {
            TokenKind::Number
        } else {
            TokenKind::Identifier
        };
        Self::new(kind, text, span)
    }

    /// Construct a symbol token; its text is the symbol's canonical spelling.
    pub fn symbol(id: SymbolId, span: Span) -> Self {
        Self::new(TokenKind::Symbol(id), symbols::as_str(id), span)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.kind.name(), self.text)
    }
}

fn is_number(text: &str) -> bool {
    !text.is_empty() && text.chars().all(char::is_numeric)
}
