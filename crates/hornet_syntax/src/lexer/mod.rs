//! Scanner for the Hornet language
//!
//! Converts source text into a flat, ordered token stream:
//! - Keywords (`buzz`, `sting`, `worker`, ...), numbers and identifiers from bare words
//! - Single-character symbols (`= + - * / < > ( ) { } [ ] ; ,`)
//! - Double-quoted strings (quotes stripped, no escapes)
//!
//! ## Notes
//! - Scanning never fails. An unterminated string runs to end of input; every other character is either a
//!   separator or part of a word.
//! - There is no end-of-file token; consumers stop at the end of the slice.

pub mod tokens;

pub use tokens::{Token, TokenKind};

use crate::ast::Span;
use hornet_core::lang::symbols;

// ============================================================================
// SCANNER STATE
// ----------------------------------------------------------------------------
// [In gap] → word char → [In word] → whitespace / symbol / '"' → flush word → [In gap]
//    ↓
//   '"' → [In string] → '"' or EOF → [In gap]
// ============================================================================

/// Scanner for Hornet source code.
pub struct Lexer<'a> {
    source: &'a str,
    chars: std::iter::Peekable<std::str::CharIndices<'a>>,
    current_pos: usize,
    /// Byte offset where the pending bare word starts, if one is open.
    word_start: Option<usize>,
    tokens: Vec<Token>,
}

impl<'a> Lexer<'a> {
    /// Create a new scanner for the given source code.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            chars: source.char_indices().peekable(),
            current_pos: 0,
            word_start: None,
            tokens: Vec::new(),
        }
    }

    /// Tokenize the entire source code.
    pub fn tokenize(mut self) -> Vec<Token> {
        while let Some(c) = self.advance() {
            self.scan_char(c);
        }
        self.flush_word(self.current_pos);
        self.tokens
    }

    // ========================================================================
    // Core character handling
    // ========================================================================

    fn peek(&mut self) -> Option<char> {
        self.chars.peek().map(|(_, c)| *c)
    }

    fn advance(&mut self) -> Option<char> {
        let (pos, c) = self.chars.next()?;
        self.current_pos = pos + c.len_utf8();
        Some(c)
    }

    // ========================================================================
    // Main scanning dispatch
    // ========================================================================

    fn scan_char(&mut self, c: char) {
        let start = self.current_pos - c.len_utf8();

        if is_separator(c) {
            self.flush_word(start);
            return;
        }

        if let Some(id) = symbols::from_char(c) {
            self.flush_word(start);
            self.tokens
                .push(Token::symbol(id, Span::new(start, self.current_pos)));
            return;
        }

        if c == '"' {
            self.flush_word(start);
            self.scan_string(start);
            return;
        }

        if self.word_start.is_none() {
            self.word_start = Some(start);
        }
    }

    /// Close the pending word (if any) at byte offset `end` and classify it.
    fn flush_word(&mut self, end: usize) {
        if let Some(start) = self.word_start.take() {
            let text = &self.source[start..end];
            self.tokens.push(Token::word(text, Span::new(start, end)));
        }
    }

    /// Scan string contents after the opening quote at `start`.
    fn scan_string(&mut self, start: usize) {
        let content_start = self.current_pos;
        let mut content_end = self.source.len();

        while let Some(c) = self.peek() {
            if c == '"' {
                content_end = self.current_pos;
                self.advance();
                break;
            }
            self.advance();
        }

        let text = &self.source[content_start..content_end];
        if content_end == self.source.len() {
            tracing::trace!(offset = start, "unterminated string runs to end of input");
        }
        self.tokens.push(Token::new(
            TokenKind::String,
            text,
            Span::new(start, self.current_pos),
        ));
    }
}

/// Unicode whitespace plus the ASCII file/group/record/unit separators (`\x1c`..=`\x1f`).
fn is_separator(c: char) -> bool {
    c.is_whitespace() || matches!(c, '\u{1c}'..='\u{1f}')
}

// ============================================================================
// PUBLIC API
// ============================================================================

/// Tokenize Hornet source code.
///
/// ## Examples
/// ```rust
/// use hornet_syntax::lexer::{self, TokenKind};
///
/// let tokens = lexer::lex("worker x = 5");
/// let kinds: Vec<&str> = tokens.iter().map(|t| t.kind.name()).collect();
/// assert_eq!(kinds, ["VAR", "IDENTIFIER", "SYMBOL", "NUMBER"]);
/// assert_eq!(tokens[3].kind, TokenKind::Number);
/// ```
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn lex(source: &str) -> Vec<Token> {
    let tokens = Lexer::new(source).tokenize();
    tracing::debug!(token_count = tokens.len(), "scanned");
    tokens
}

// ============================================================================
// TESTS
// ============================================================================
