//! Output writer with indentation tracking
//!
//! Builds Python source one line at a time. Lines are separated by `\n` and the output has no trailing newline,
//! so an empty program produces an empty string.

use super::config::EmitConfig;

/// Writer that tracks indentation and builds the generated output
pub struct PyWriter {
    /// The output buffer
    output: String,
    /// Current indentation level
    indent_level: usize,
    /// Configuration
    config: EmitConfig,
    /// Number of lines written so far
    line_count: usize,
}

impl PyWriter {
    /// Create a new writer with the given config
    pub fn new(config: EmitConfig) -> Self {
        Self {
            output: String::new(),
            indent_level: 0,
            config,
            line_count: 0,
        }
    }

    /// Get the generated output
    pub fn finish(self) -> String {
        self.output
    }

    /// Increase indentation level
    pub fn indent(&mut self) {
        self.indent_level += 1;
    }

    /// Decrease indentation level
    pub fn dedent(&mut self) {
        if self.indent_level > 0 {
            self.indent_level -= 1;
        }
    }

    /// Write one line at the current indentation
    pub fn line(&mut self, s: &str) {
        if self.line_count > 0 {
            self.output.push('\n');
        }
        let indent = " ".repeat(self.indent_level * self.config.indent_width);
        self.output.push_str(&indent);
        self.output.push_str(s);
        self.line_count += 1;
    }
}
