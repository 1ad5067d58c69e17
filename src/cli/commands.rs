//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.
//!
//! File-system and process failures are typed as [`SourceError`] and rendered through miette.

use std::env;
use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};
use std::process::Command;

use miette::Diagnostic;
use thiserror::Error;

use crate::backend::{EmitConfig, PythonEmitter};
use crate::frontend::{lexer, parser};

use super::{CliError, CliResult, ExitCode};

/// Maximum accepted source size (100 MB).
pub const MAX_SOURCE_SIZE: u64 = 100 * 1024 * 1024;

/// Environment variable naming the interpreter for `run`.
pub const PYTHON_ENV: &str = "HORNET_PYTHON";

/// Interpreter used for `run` when neither `--python` nor `HORNET_PYTHON` is set.
pub const DEFAULT_PYTHON: &str = "python3";

// ============================================================================
// Errors
// ============================================================================

/// I/O failures around the compiler.
#[derive(Debug, Error, Diagnostic)]
pub enum SourceError {
    #[error("cannot access file '{path}'")]
    #[diagnostic(code(hornet::io::access), help("check that the path exists and is readable"))]
    Access {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("source file '{path}' is too large ({size} bytes, max {max} bytes)")]
    #[diagnostic(code(hornet::io::too_large))]
    TooLarge { path: String, size: u64, max: u64 },

    #[error("error reading file '{path}'")]
    #[diagnostic(code(hornet::io::read))]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("output path '{path}' contains path traversal (..)")]
    #[diagnostic(code(hornet::io::path_traversal), help("choose an output path without `..` components"))]
    PathTraversal { path: String },

    #[error("error writing '{path}'")]
    #[diagnostic(code(hornet::io::write))]
    Write {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("could not start Python interpreter '{program}'")]
    #[diagnostic(
        code(hornet::run::spawn),
        help("install Python 3, or pass --python / set HORNET_PYTHON")
    )]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },
}

impl From<SourceError> for CliError {
    fn from(err: SourceError) -> Self {
        CliError::failure(format!("{:?}", miette::Report::new(err)))
    }
}

// ============================================================================
// Helpers
// ============================================================================

/// Read source file contents.
///
/// ## Errors
///
/// Returns an error if:
/// - The file cannot be read (I/O error)
/// - The file exceeds `MAX_SOURCE_SIZE` (100 MB)
pub fn read_source(file_path: &Path) -> Result<String, SourceError> {
    let path = file_path.display().to_string();
    let metadata = fs::metadata(file_path).map_err(|source| SourceError::Access {
        path: path.clone(),
        source,
    })?;

    if metadata.len() > MAX_SOURCE_SIZE {
        return Err(SourceError::TooLarge {
            path,
            size: metadata.len(),
            max: MAX_SOURCE_SIZE,
        });
    }

    fs::read_to_string(file_path).map_err(|source| SourceError::Read { path, source })
}

/// Reject output paths that climb out of the working tree.
pub fn validate_output_path(out_path: &Path) -> Result<(), SourceError> {
    if out_path.components().any(|c| matches!(c, Component::ParentDir)) {
        return Err(SourceError::PathTraversal {
            path: out_path.display().to_string(),
        });
    }

    // Warn about absolute paths (but allow them for flexibility)
    if out_path.is_absolute() {
        tracing::warn!(
            "Using absolute output path: {}. Consider using a relative path.",
            out_path.display()
        );
    }

    Ok(())
}

/// `program.hive` → `program.py`
pub fn default_output_path(file_path: &Path) -> PathBuf {
    file_path.with_extension("py")
}

/// Pick the interpreter: explicit flag, then `HORNET_PYTHON`, then `python3`.
pub fn resolve_python(flag: Option<String>) -> String {
    flag.or_else(|| env::var(PYTHON_ENV).ok().filter(|v| !v.is_empty()))
        .unwrap_or_else(|| DEFAULT_PYTHON.to_string())
}

fn compile_source(source: &str, config: &EmitConfig) -> String {
    crate::compile_with_config(source, config)
}

// ============================================================================
// Commands
// ============================================================================

/// Compile a file and print the generated Python.
pub fn compile_file(file_path: &Path, config: &EmitConfig) -> CliResult<ExitCode> {
    let source = read_source(file_path)?;
    let python = compile_source(&source, config);
    if !python.is_empty() {
        println!("{}", python);
    }
    Ok(ExitCode::SUCCESS)
}

/// Tokenize and display tokens.
pub fn lex_file(file_path: &Path) -> CliResult<ExitCode> {
    let source = read_source(file_path)?;
    for tok in lexer::lex(&source) {
        println!("{}", tok);
    }
    Ok(ExitCode::SUCCESS)
}

/// Parse and display the statement list.
pub fn parse_file(file_path: &Path) -> CliResult<ExitCode> {
    let source = read_source(file_path)?;
    let tokens = lexer::lex(&source);
    let program = parser::parse(&tokens);
    println!("{:#?}", program.statements);
    Ok(ExitCode::SUCCESS)
}

/// Compile a file to a `.py` file next to it (or to `output`).
pub fn build_file(file_path: &Path, output: Option<&Path>, config: &EmitConfig) -> CliResult<ExitCode> {
    let source = read_source(file_path)?;
    let out_path = output.map_or_else(|| default_output_path(file_path), Path::to_path_buf);
    validate_output_path(&out_path)?;

    let tokens = lexer::lex(&source);
    let program = parser::parse(&tokens);
    let mut python = PythonEmitter::new(config.clone()).emit_program(&program);
    if !python.is_empty() {
        python.push('\n');
    }

    write_output(&out_path, &python)?;
    tracing::info!(
        statements = program.statements.len(),
        output = %out_path.display(),
        "build finished"
    );
    println!("Wrote {}", out_path.display());
    Ok(ExitCode::SUCCESS)
}

/// Compile a file and run it.
pub fn run_file(file_path: &Path, interpreter: &str, config: &EmitConfig) -> CliResult<ExitCode> {
    let source = read_source(file_path)?;
    run_source(&source, interpreter, config)
}

/// Compile inline source and run it with `interpreter -c <python>`.
///
/// The interpreter's exit code is forwarded.
pub fn run_source(source: &str, interpreter: &str, config: &EmitConfig) -> CliResult<ExitCode> {
    let python = compile_source(source, config);
    tracing::debug!(interpreter, lines = python.lines().count(), "running generated python");

    let status = Command::new(interpreter)
        .arg("-c")
        .arg(&python)
        .status()
        .map_err(|source| SourceError::Spawn {
            program: interpreter.to_string(),
            source,
        })?;

    Ok(ExitCode(status.code().unwrap_or(1)))
}

fn write_output(out_path: &Path, contents: &str) -> Result<(), SourceError> {
    let path = out_path.display().to_string();
    if let Some(parent) = out_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| SourceError::Write {
            path: path.clone(),
            source,
        })?;
    }
    fs::write(out_path, contents).map_err(|source| SourceError::Write { path, source })
}
