//! Target-language (Python 3) spellings used by the code generator.

/// Function header keyword.
pub const DEF: &str = "def";

/// Builtin print function.
pub const PRINT: &str = "print";

/// Statement emitted for an otherwise empty block.
pub const NO_OP: &str = "pass";

/// Indentation width used when none is configured (PEP 8).
pub const DEFAULT_INDENT_WIDTH: usize = 4;
