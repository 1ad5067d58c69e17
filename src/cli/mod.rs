//! CLI module for the Hornet compiler
//!
//! ## Commands
//!
//! - `hornet <file>` - Compile to Python and print to stdout
//! - `build <file> [output]` - Compile to a `.py` file
//! - `run <file>` / `run -c <code>` - Compile and execute with a Python interpreter
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;

use std::fmt;
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use hornet_core::lang::python::DEFAULT_INDENT_WIDTH;

use crate::backend::EmitConfig;
use crate::version::HORNET_VERSION;

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug)]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    /// Create a new CLI error with a message and exit code.
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

// ============================================================================
// Clap CLI definition
// ============================================================================

/// The Hornet programming language compiler
#[derive(Parser, Debug)]
#[command(name = "hornet")]
#[command(version = HORNET_VERSION)]
#[command(about = "Compile Hornet source to Python", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// File to compile to stdout (default action when no subcommand given)
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Spaces per indentation level in generated Python
    #[arg(long, global = true, value_name = "N", default_value_t = DEFAULT_INDENT_WIDTH)]
    pub indent: usize,

    // Debug/development flags
    /// Tokenize only (debug)
    #[arg(long = "lex", value_name = "FILE", conflicts_with = "file")]
    pub lex_file: Option<PathBuf>,

    /// Parse only (debug)
    #[arg(long = "parse", value_name = "FILE", conflicts_with = "file")]
    pub parse_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compile to a Python file
    Build {
        /// Source file to compile
        #[arg(value_name = "FILE")]
        file: PathBuf,
        /// Output file (default: FILE with a .py extension)
        #[arg(value_name = "OUTPUT")]
        output: Option<PathBuf>,
    },

    /// Compile and run the program with Python
    Run {
        /// Source file to run
        #[arg(value_name = "FILE", conflicts_with = "command")]
        file: Option<PathBuf>,
        /// Run inline source code
        #[arg(short = 'c', long = "command", value_name = "CODE")]
        command: Option<String>,
        /// Python interpreter (default: $HORNET_PYTHON, then python3)
        #[arg(long, value_name = "BIN")]
        python: Option<String>,
    },
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. All command
/// implementations return `CliResult` and errors are handled here.
pub fn run() {
    let cli = Cli::parse();

    match execute(cli) {
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Execute the CLI command and return result.
fn execute(cli: Cli) -> CliResult<ExitCode> {
    let config = EmitConfig::new().with_indent_width(cli.indent);

    // Handle debug flags first
    if let Some(file) = cli.lex_file {
        return commands::lex_file(&file);
    }
    if let Some(file) = cli.parse_file {
        return commands::parse_file(&file);
    }

    match cli.command {
        Some(Command::Build { file, output }) => commands::build_file(&file, output.as_deref(), &config),
        Some(Command::Run { file, command, python }) => execute_run(file, command, python, &config),
        None => {
            if let Some(file) = cli.file {
                commands::compile_file(&file, &config)
            } else {
                Err(CliError::failure("Error: no input file (try `hornet --help`)"))
            }
        }
    }
}

/// Handle the `run` subcommand with its various forms.
fn execute_run(
    file: Option<PathBuf>,
    code: Option<String>,
    python: Option<String>,
    config: &EmitConfig,
) -> CliResult<ExitCode> {
    let interpreter = commands::resolve_python(python);
    if let Some(code) = code {
        if code.is_empty() {
            return Err(CliError::failure(
                "Error: -c/--command requires source code string",
            ));
        }
        commands::run_source(&code, &interpreter, config)
    } else if let Some(file) = file {
        commands::run_file(&file, &interpreter, config)
    } else {
        Err(CliError::failure(
            "Error: run requires a file path or -c \"code\"",
        ))
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_file() {
        let cli = Cli::try_parse_from(["hornet", "hello.hive"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.file, Some(PathBuf::from("hello.hive")));
        assert_eq!(cli.indent, 4);
    }

    #[test]
    fn test_cli_parse_build() {
        let cli = Cli::try_parse_from(["hornet", "build", "hello.hive"]).unwrap();
        if let Some(Command::Build { file, output }) = cli.command {
            assert_eq!(file, PathBuf::from("hello.hive"));
            assert!(output.is_none());
        } else {
            panic!("Expected Build command");
        }
    }

    #[test]
    fn test_cli_parse_build_with_output_and_indent() {
        let cli = Cli::try_parse_from(["hornet", "build", "a.hive", "out/a.py", "--indent", "2"]).unwrap();
        assert_eq!(cli.indent, 2);
        if let Some(Command::Build { output, .. }) = cli.command {
            assert_eq!(output, Some(PathBuf::from("out/a.py")));
        } else {
            panic!("Expected Build command");
        }
    }

    #[test]
    fn test_cli_parse_run_with_code() {
        let cli = Cli::try_parse_from(["hornet", "run", "-c", "sting hi", "--python", "python3.12"]).unwrap();
        if let Some(Command::Run { command, python, file }) = cli.command {
            assert_eq!(command.as_deref(), Some("sting hi"));
            assert_eq!(python.as_deref(), Some("python3.12"));
            assert!(file.is_none());
        } else {
            panic!("Expected Run command");
        }
    }

    #[test]
    fn test_cli_run_file_conflicts_with_code() {
        let result = Cli::try_parse_from(["hornet", "run", "a.hive", "-c", "sting hi"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_parse_debug_flags() {
        let cli = Cli::try_parse_from(["hornet", "--lex", "a.hive"]).unwrap();
        assert_eq!(cli.lex_file, Some(PathBuf::from("a.hive")));
        let cli = Cli::try_parse_from(["hornet", "--parse", "a.hive"]).unwrap();
        assert_eq!(cli.parse_file, Some(PathBuf::from("a.hive")));
    }

    #[test]
    fn test_execute_without_input_fails() {
        let cli = Cli::try_parse_from(["hornet"]).unwrap();
        let err = execute(cli).unwrap_err();
        assert_eq!(err.exit_code, ExitCode::FAILURE);
    }

    #[test]
    fn test_run_without_file_or_code_fails() {
        let err = execute_run(None, None, Some("python3".into()), &EmitConfig::default()).unwrap_err();
        assert!(err.message.contains("requires a file path"));
    }
}
