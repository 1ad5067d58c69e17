#![no_main]

use hornet::frontend::{lexer, parser};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Convert bytes to UTF-8 string (ignore invalid UTF-8)
    if let Ok(s) = std::str::from_utf8(data) {
        // Every stage is total: none of these may panic or hang.
        let tokens = lexer::lex(s);
        let program = parser::parse(&tokens);
        assert!(program.statements.len() <= tokens.len());
        let _ = hornet::compile(s);
    }
});
