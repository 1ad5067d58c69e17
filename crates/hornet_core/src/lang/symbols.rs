//! Symbol vocabulary.
//!
//! The scanner splits on a fixed set of single-character symbols. Each one becomes its own token; there are no
//! multi-character operators (`==` scans as two `=` symbols).
//!
//! ## Examples
//! ```rust
//! use hornet_core::lang::symbols::{self, SymbolId};
//!
//! assert_eq!(symbols::from_char('{'), Some(SymbolId::LBrace));
//! assert_eq!(symbols::as_str(SymbolId::Comma), ",");
//! assert_eq!(symbols::from_char('%'), None);
//! ```

/// Stable identifier for symbol tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SymbolId {
    Eq,
    Plus,
    Minus,
    Star,
    Slash,
    Lt,
    Gt,
    LParen,
    RParen,
    LBrace,
    RBrace,
    LBracket,
    RBracket,
    Semicolon,
    Comma,
}

/// Metadata for a symbol.
#[derive(Debug, Clone, Copy)]
pub struct SymbolInfo {
    pub id: SymbolId,
    pub ch: char,
    pub canonical: &'static str,
}

/// Registry of all symbols, in scanner order.
pub const SYMBOLS: &[SymbolInfo] = &[
    info(SymbolId::Eq, '=', "="),
    info(SymbolId::Plus, '+', "+"),
    info(SymbolId::Minus, '-', "-"),
    info(SymbolId::Star, '*', "*"),
    info(SymbolId::Slash, '/', "/"),
    info(SymbolId::Lt, '<', "<"),
    info(SymbolId::Gt, '>', ">"),
    info(SymbolId::LParen, '(', "("),
    info(SymbolId::RParen, ')', ")"),
    info(SymbolId::LBrace, '{', "{"),
    info(SymbolId::RBrace, '}', "}"),
    info(SymbolId::LBracket, '[', "["),
    info(SymbolId::RBracket, ']', "]"),
    info(SymbolId::Semicolon, ';', ";"),
    info(SymbolId::Comma, ',', ","),
];

/// Resolve a character to a symbol id.
pub fn from_char(ch: char) -> Option<SymbolId> {
    SYMBOLS.iter().find(|s| s.ch == ch).map(|s| s.id)
}

/// Return the metadata entry for `id`.
pub fn info_for(id: SymbolId) -> &'static SymbolInfo {
    match SYMBOLS.iter().find(|s| s.id == id) {
        Some(info) => info,
        None => unreachable!("symbol {id:?} missing from SYMBOLS"),
    }
}

/// Source spelling of `id`; also the text of its token.
pub fn as_str(id: SymbolId) -> &'static str {
    info_for(id).canonical
}

const fn info(id: SymbolId, ch: char, canonical: &'static str) -> SymbolInfo {
    SymbolInfo { id, ch, canonical }
}
