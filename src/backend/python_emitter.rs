//! Python emitter - turns Hornet statements into Python source text
//!
//! One line per top-level statement, one block per function, joined with newlines.
//!
//! ## Notes
//! - Emission is a pure function of the statement list and cannot fail.
//! - Inside a function body only print statements are rendered; every other nested statement is dropped.
//! - Print values are echoed verbatim (`sting "hi"` emits `print(hi)`, because the scanner already stripped the
//!   quotes). Variable values and nested print values are wrapped in synthesized quotes instead.

use crate::frontend::ast::{Program, Statement};
use hornet_core::lang::python;

use super::config::EmitConfig;
use super::writer::PyWriter;

/// Emits Python source for a parsed Hornet program.
pub struct PythonEmitter {
    writer: PyWriter,
}

impl PythonEmitter {
    pub fn new(config: EmitConfig) -> Self {
        Self {
            writer: PyWriter::new(config),
        }
    }

    /// Emit a complete program.
    #[tracing::instrument(skip_all, fields(statement_count = program.statements.len()))]
    pub fn emit_program(self, program: &Program) -> String {
        self.emit_statements(&program.statements)
    }

    /// Emit a statement list, one fragment per statement.
    pub fn emit_statements(mut self, statements: &[Statement]) -> String {
        for stmt in statements {
            self.emit_statement(stmt);
        }
        self.writer.finish()
    }

    fn emit_statement(&mut self, stmt: &Statement) {
        match stmt {
            Statement::Print { value } => {
                // Quoted and bare values render the same way.
                self.writer.line(&print_call(value));
            }
            Statement::VariableDecl { name, value } => {
                let rendered = if value.starts_with('"') {
                    value.clone()
                } else {
                    quoted(value)
                };
                self.writer.line(&format!("{name} = {rendered}"));
            }
            Statement::FunctionDecl { name, params, body } => self.emit_function(name, params, body),
            Statement::Call { name, args } => {
                self.writer.line(&format!("{}({})", name, args.join(", ")));
            }
        }
    }

    fn emit_function(&mut self, name: &str, params: &[String], body: &[Statement]) {
        self.writer
            .line(&format!("{} {}({}):", python::DEF, name, params.join(", ")));
        self.writer.indent();

        let mut emitted = 0;
        for stmt in body {
            match stmt {
                Statement::Print { value } => {
                    self.writer.line(&print_call(&quoted(value)));
                    emitted += 1;
                }
                other => {
                    tracing::trace!(function = name, dropped = other.label(), "nested statement not rendered");
                }
            }
        }
        if emitted == 0 {
            self.writer.line(python::NO_OP);
        }

        self.writer.dedent();
    }
}

/// Emit Python for a statement list with the default configuration.
///
/// ## Examples
/// ```rust
/// use hornet::ast::Statement;
///
/// let stmts = vec![Statement::Call { name: "main".into(), args: vec![] }];
/// assert_eq!(hornet::backend::emit(&stmts), "main()");
/// assert_eq!(hornet::backend::emit(&[]), "");
/// ```
pub fn emit(statements: &[Statement]) -> String {
    PythonEmitter::new(EmitConfig::default()).emit_statements(statements)
}

fn print_call(arg: &str) -> String {
    format!("{}({})", python::PRINT, arg)
}

fn quoted(text: &str) -> String {
    format!("\"{text}\"")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn print(value: &str) -> Statement {
        Statement::Print { value: value.to_string() }
    }

    fn var(name: &str, value: &str) -> Statement {
        Statement::VariableDecl {
            name: name.to_string(),
            value: value.to_string(),
        }
    }

    fn function(name: &str, body: Vec<Statement>) -> Statement {
        Statement::FunctionDecl {
            name: name.to_string(),
            params: vec![],
            body,
        }
    }

    fn call(name: &str) -> Statement {
        Statement::Call {
            name: name.to_string(),
            args: vec![],
        }
    }

    #[test]
    fn test_empty_program() {
        assert_eq!(emit(&[]), "");
    }

    #[test]
    fn test_print_is_verbatim() {
        assert_eq!(emit(&[print("hello")]), "print(hello)");
        assert_eq!(emit(&[print("\"hello\"")]), "print(\"hello\")");
    }

    #[test]
    fn test_variable_quotes_bare_values() {
        assert_eq!(emit(&[var("x", "5")]), "x = \"5\"");
        assert_eq!(emit(&[var("name", "bob")]), "name = \"bob\"");
    }

    #[test]
    fn test_variable_keeps_already_quoted_value() {
        assert_eq!(emit(&[var("x", "\"hi\"")]), "x = \"hi\"");
    }

    #[test]
    fn test_function_with_prints() {
        let out = emit(&[function("greet", vec![print("hi"), print("there")])]);
        assert_eq!(out, "def greet():\n    print(\"hi\")\n    print(\"there\")");
    }

    #[test]
    fn test_empty_function_gets_pass() {
        assert_eq!(emit(&[function("f", vec![])]), "def f():\n    pass");
    }

    #[test]
    fn test_function_drops_non_print_statements() {
        let out = emit(&[function("f", vec![var("x", "1"), call("g"), function("h", vec![])])]);
        assert_eq!(out, "def f():\n    pass");

        let out = emit(&[function("f", vec![call("g"), print("a")])]);
        assert_eq!(out, "def f():\n    print(\"a\")");
    }

    #[test]
    fn test_function_params_joined() {
        let stmt = Statement::FunctionDecl {
            name: "f".to_string(),
            params: vec!["a".to_string(), "b".to_string()],
            body: vec![],
        };
        assert_eq!(emit(&[stmt]), "def f(a, b):\n    pass");
    }

    #[test]
    fn test_call() {
        assert_eq!(emit(&[call("main")]), "main()");
        let stmt = Statement::Call {
            name: "f".to_string(),
            args: vec!["1".to_string(), "2".to_string()],
        };
        assert_eq!(emit(&[stmt]), "f(1, 2)");
    }

    #[test]
    fn test_statements_joined_by_newline() {
        let out = emit(&[var("x", "1"), function("f", vec![print("x")]), call("f")]);
        assert_eq!(out, "x = \"1\"\ndef f():\n    print(\"x\")\nf()");
    }

    #[test]
    fn test_custom_indent() {
        let emitter = PythonEmitter::new(EmitConfig::new().with_indent_width(2));
        let out = emitter.emit_statements(&[function("f", vec![print("a")])]);
        assert_eq!(out, "def f():\n  print(\"a\")");
    }
}
