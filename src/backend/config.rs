//! Emission configuration for Hornet
//!
//! The generated Python follows PEP 8 indentation by default.

use hornet_core::lang::python;

/// Emission configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmitConfig {
    /// Number of spaces per indentation level
    pub indent_width: usize,
}

impl Default for EmitConfig {
    fn default() -> Self {
        Self {
            indent_width: python::DEFAULT_INDENT_WIDTH,
        }
    }
}

impl EmitConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the indentation width
    #[must_use]
    pub fn with_indent_width(mut self, width: usize) -> Self {
        self.indent_width = width;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_indent_width() {
        let config = EmitConfig::default();
        assert_eq!(config.indent_width, 4);
    }

    #[test]
    fn test_new_equals_default() {
        assert_eq!(EmitConfig::new(), EmitConfig::default());
    }

    #[test]
    fn test_with_indent_width() {
        let config = EmitConfig::new().with_indent_width(2);
        assert_eq!(config.indent_width, 2);
    }
}
