#![forbid(unsafe_code)]
//! Hornet Programming Language Compiler
//!
//! Hornet is a tiny bee-themed teaching language that compiles to Python. This crate provides the compiler:
//! frontend (scanner, parser), backend (Python code generation), and the `hornet` command-line tool.
//!
//! ## Pipeline
//!
//! `source → lexer::lex → parser::parse → backend::PythonEmitter → Python text`
//!
//! Every stage is total: malformed input yields fewer statements, never an error.
//!
//! ## Panic Policy
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` module enforces
//!   `#![deny(clippy::unwrap_used)]`.
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//!
//! ## Examples
//! ```rust
//! let python = hornet::compile("worker x = 5\nbuzz show { sting x }\nshow()");
//! assert_eq!(python, "x = \"5\"\ndef show():\n    print(\"x\")\nshow()");
//! ```

pub mod backend;
pub mod cli;
pub mod frontend;
pub mod version;

pub use frontend::ast;
pub use frontend::lexer;
pub use frontend::parser;

pub use backend::{EmitConfig, PythonEmitter};

/// Compile Hornet source to Python source with the default configuration.
pub fn compile(source: &str) -> String {
    compile_with_config(source, &EmitConfig::default())
}

/// Compile Hornet source to Python source.
#[tracing::instrument(skip_all, fields(source_len = source.len(), indent_width = config.indent_width))]
pub fn compile_with_config(source: &str, config: &EmitConfig) -> String {
    let tokens = lexer::lex(source);
    let program = parser::parse(&tokens);
    PythonEmitter::new(config.clone()).emit_program(&program)
}
