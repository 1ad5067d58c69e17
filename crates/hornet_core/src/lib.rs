//! Canonical language vocabulary for the Hornet compiler.
//!
//! This crate is intentionally small and dependency-free. It holds the reserved words and symbols of the Hornet
//! source language, plus the handful of target-language (Python) spellings the code generator emits.
//!
//! ## Notes
//!
//! - This is a “vocabulary” crate: **no IO**, no global state, and no compiler-specific types.
//! - Lexing and parsing live in `hornet_syntax`; this crate only answers “what does this spelling mean?”.

pub mod lang;
