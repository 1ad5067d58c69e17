//! Integration tests for the Hornet compiler pipeline

use std::fs;
use std::path::Path;

use hornet::ast::Statement;
use hornet::frontend::{lexer, parser};
use hornet::lexer::TokenKind;
use hornet::{EmitConfig, compile, compile_with_config};

#[test]
fn test_compile_empty_source() {
    assert_eq!(compile(""), "");
    assert_eq!(compile("  \n\t \n"), "");
}

#[test]
fn test_print_string_is_rendered_verbatim() {
    let tokens = lexer::lex("\"hello\"");
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::String);
    assert_eq!(tokens[0].text, "hello");

    assert_eq!(compile("sting \"hello\""), "print(hello)");
}

#[test]
fn test_print_identifier() {
    assert_eq!(compile("sting x"), "print(x)");
}

#[test]
fn test_variable_declaration() {
    assert_eq!(compile("worker x = 5"), "x = \"5\"");
    assert_eq!(compile("worker greeting = \"hi there\""), "greeting = \"hi there\"");
}

#[test]
fn test_function_with_single_print() {
    let tokens = lexer::lex("buzz greet { sting hello }");
    let program = parser::parse(&tokens);
    assert_eq!(program.statements.len(), 1);
    match &program.statements[0] {
        Statement::FunctionDecl { name, params, body } => {
            assert_eq!(name, "greet");
            assert!(params.is_empty());
            assert_eq!(body.len(), 1);
            assert!(matches!(&body[0], Statement::Print { .. }));
        }
        other => panic!("Expected function, got {other:?}"),
    }

    assert_eq!(compile("buzz greet { sting hello }"), "def greet():\n    print(\"hello\")");
}

#[test]
fn test_empty_function_emits_pass() {
    assert_eq!(compile("buzz f { }"), "def f():\n    pass");
}

#[test]
fn test_call() {
    assert_eq!(compile("launch()"), "launch()");
}

#[test]
fn test_unterminated_string_terminates() {
    let tokens = lexer::lex("sting \"abc");
    assert_eq!(tokens.last().map(|t| (t.kind, t.text.as_str())), Some((TokenKind::String, "abc")));
    assert_eq!(compile("sting \"abc"), "print(abc)");
}

#[test]
fn test_truncated_constructs_degrade_silently() {
    assert_eq!(compile("worker x ="), "");
    assert_eq!(compile("sting"), "");
    assert_eq!(compile("buzz"), "");
    assert_eq!(compile("lonely"), "");
    assert_eq!(compile("nest hive honey swarm drone queen"), "");
}

#[test]
fn test_quoted_braces_act_as_braces() {
    assert_eq!(compile("buzz f \"{\" sting a }"), "def f():\n    print(\"a\")");
    assert_eq!(compile("buzz f { \"}\" sting x }"), "def f():\n    pass\nprint(x)");
}

#[test]
fn test_unicode_digits_and_separators() {
    // A numeric word is never a call target.
    assert_eq!(compile("\u{663}()"), "");
    assert_eq!(compile("sting a\u{1c}b"), "print(a)");
}

#[test]
fn test_whole_program() {
    let source = r#"
worker hive_name = "Buzzington"
buzz welcome {
    sting "Welcome"
    worker ignored = 1
}
welcome()
sting hive_name
"#;
    let expected = "hive_name = \"Buzzington\"\n\
                    def welcome():\n    print(\"Welcome\")\n\
                    welcome()\n\
                    print(hive_name)";
    assert_eq!(compile(source), expected);
}

#[test]
fn test_compile_with_config_matches_default() {
    let source = "buzz f { sting a } f()";
    assert_eq!(compile_with_config(source, &EmitConfig::default()), compile(source));
}

/// Every fixture compiles deterministically.
#[test]
fn test_fixtures_compile_deterministically() {
    let fixtures_dir = Path::new("tests/codegen_snapshots");
    let mut seen = 0;

    for entry in fs::read_dir(fixtures_dir).unwrap() {
        let path = entry.unwrap().path();
        if path.extension().is_some_and(|e| e == "hive") {
            let source = fs::read_to_string(&path).unwrap();
            let first = compile(&source);
            assert!(!first.is_empty(), "{} produced no output", path.display());
            assert_eq!(first, compile(&source), "{} compiled differently twice", path.display());
            seen += 1;
        }
    }

    assert!(seen >= 4, "expected the codegen fixtures to be present");
}
