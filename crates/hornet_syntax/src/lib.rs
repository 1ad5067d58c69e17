//! Shared syntax frontend for the Hornet language: scanner, statement model, parser.
//!
//! ## Notes
//! - This crate is intentionally “syntax-only”: no name resolution, no evaluation, no code generation.
//! - Nothing here can fail. Malformed input degrades to fewer tokens or fewer statements, never an error.
//! - Vocabulary identity (keywords/symbols) comes from `hornet_core::lang` registries.
//!
//! ## Examples
//! ```rust
//! use hornet_syntax::{lexer, parser};
//!
//! let tokens = lexer::lex("sting \"hi\"");
//! let program = parser::parse(&tokens);
//! assert_eq!(program.statements.len(), 1);
//! ```

pub mod ast;
pub mod lexer;
pub mod parser;
