//! Hornet Compiler Frontend
//!
//! - `lexer`: tokenization of source code
//! - `parser`: parsing tokens into statements
//! - `ast`: statement model

// Syntax components are provided by the shared hornet_syntax crate.
pub use hornet_syntax::{ast, lexer, parser};
