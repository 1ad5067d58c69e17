//! Parser for the Hornet language
//!
//! Converts a token stream into a flat list of [`Statement`]s using a single forward-only cursor.
//!
//! ## Notes
//! - Parsing never fails. A construct that is truncated or has no statement grammar yields no statement; the
//!   cursor still moves forward, so every loop terminates.
//! - Only `sting`, `worker`, `buzz` and identifiers followed by `(` start statements.
//!
//! ## Examples
//!
//! ```rust
//! use hornet_syntax::{lexer, parser};
//! use hornet_syntax::ast::Statement;
//!
//! let tokens = lexer::lex("worker x = 5 greet()");
//! let program = parser::parse(&tokens);
//! assert_eq!(program.statements.len(), 2);
//! assert!(matches!(&program.statements[1], Statement::Call { name, .. } if name == "greet"));
//! ```

use crate::ast::*;
use crate::lexer::{Token, TokenKind};
use hornet_core::lang::keywords::KeywordId;

// NOTE: This module is split across multiple files using `include!` to keep all parser
// methods in the same Rust module (preserving privacy + call patterns) while keeping
// each concern in its own file.

include!("parser/core.rs");
include!("parser/helpers.rs");
include!("parser/stmts.rs");
include!("parser/api.rs");
include!("parser/tests.rs");
