//! Define the reserved keyword vocabulary for the Hornet language.
//!
//! This module is the single source of truth for reserved words: a stable identifier
//! ([`KeywordId`]) plus a const metadata table ([`KEYWORDS`]) that records the canonical spelling and the
//! upper-case kind label each keyword scans as.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive** and exact-match only (`buzzer` is an identifier).
//! - Only three keywords start a statement (`buzz`, `sting`, `worker`). The rest are reserved: the scanner
//!   classifies them, the parser skips them.
//!
//! ## Examples
//! ```rust
//! use hornet_core::lang::keywords::{self, KeywordId};
//!
//! assert_eq!(keywords::from_str("sting"), Some(KeywordId::Print));
//! assert_eq!(keywords::kind_name(KeywordId::Print), "PRINT");
//! assert_eq!(keywords::from_str("Sting"), None);
//! ```

/// Stable identifier for every reserved keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordId {
    Function,
    Print,
    If,
    While,
    Return,
    List,
    For,
    Class,
    Var,
}

/// Metadata for a keyword.
#[derive(Debug, Clone, Copy)]
pub struct KeywordInfo {
    pub id: KeywordId,
    pub canonical: &'static str,
    /// Upper-case kind label used in token dumps.
    pub kind_name: &'static str,
}

/// Registry of all keywords.
pub const KEYWORDS: &[KeywordInfo] = &[
    info(KeywordId::Function, "buzz", "FUNCTION"),
    info(KeywordId::Print, "sting", "PRINT"),
    info(KeywordId::If, "nest", "IF"),
    info(KeywordId::While, "hive", "WHILE"),
    info(KeywordId::Return, "honey", "RETURN"),
    info(KeywordId::List, "swarm", "LIST"),
    info(KeywordId::For, "drone", "FOR"),
    info(KeywordId::Class, "queen", "CLASS"),
    info(KeywordId::Var, "worker", "VAR"),
];

/// Resolve a spelling to a keyword id.
pub fn from_str(name: &str) -> Option<KeywordId> {
    KEYWORDS.iter().find(|k| k.canonical == name).map(|k| k.id)
}

/// Return the metadata entry for `id`.
pub fn info_for(id: KeywordId) -> &'static KeywordInfo {
    // Every id has exactly one entry; the guardrail tests keep it that way.
    match KEYWORDS.iter().find(|k| k.id == id) {
        Some(info) => info,
        None => unreachable!("keyword {id:?} missing from KEYWORDS"),
    }
}

/// Upper-case kind label (`FUNCTION`, `PRINT`, ...).
pub fn kind_name(id: KeywordId) -> &'static str {
    info_for(id).kind_name
}

const fn info(id: KeywordId, canonical: &'static str, kind_name: &'static str) -> KeywordInfo {
    KeywordInfo { id, canonical, kind_name }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_match_only() {
        assert_eq!(from_str("worker"), Some(KeywordId::Var));
        assert_eq!(from_str("workers"), None);
        assert_eq!(from_str("work"), None);
        assert_eq!(from_str("WORKER"), None);
        assert_eq!(from_str(""), None);
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(kind_name(KeywordId::Function), "FUNCTION");
        assert_eq!(kind_name(KeywordId::Class), "CLASS");
        assert_eq!(kind_name(KeywordId::Var), "VAR");
    }
}
