//! Statement model for Hornet.
//!
//! The tree is deliberately shallow: a program is a flat list of statements, and only function bodies nest
//! (one level, holding whatever the statement parser produced).

/// Source location span (byte offsets)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }
}

/// Identifier or raw token text
pub type Ident = String;

/// A program is an ordered sequence of statements
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    pub statements: Vec<Statement>,
}

/// One parsed construct.
///
/// ## Notes
/// - Every payload is raw token text; nothing is evaluated.
/// - `FunctionDecl::params` and `Call::args` are always empty in the current grammar.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// `sting <value>`
    Print { value: String },
    /// `worker <name> = <value>`
    VariableDecl { name: Ident, value: String },
    /// `buzz <name> ... { <body> }`
    FunctionDecl {
        name: Ident,
        params: Vec<Ident>,
        body: Vec<Statement>,
    },
    /// `<name>()`
    Call { name: Ident, args: Vec<String> },
}

impl Statement {
    /// Short label for logging.
    pub fn label(&self) -> &'static str {
        match self {
            Statement::Print { .. } => "print",
            Statement::VariableDecl { .. } => "variable",
            Statement::FunctionDecl { .. } => "function",
            Statement::Call { .. } => "call",
        }
    }
}
