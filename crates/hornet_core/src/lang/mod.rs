//! Registry-first vocabularies for the Hornet language.
//!
//! - [`keywords`]: reserved words (`buzz`, `sting`, `worker`, ...)
//! - [`symbols`]: the single-character symbols the scanner splits on
//! - [`python`]: target-language spellings used during emission

pub mod keywords;
pub mod python;
pub mod symbols;
