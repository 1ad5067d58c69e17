//! Hornet Compiler Backend
//!
//! This module handles code generation from the statement list to Python source text.
//!
//! ## Module Organization
//!
//! - `config.rs` - Emission settings (indentation)
//! - `writer.rs` - Low-level indented line builder
//! - `python_emitter.rs` - Statement → Python translation

mod config;
mod python_emitter;
mod writer;

pub use config::EmitConfig;
pub use python_emitter::{PythonEmitter, emit};
pub use writer::PyWriter;
