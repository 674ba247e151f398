//! Edge case tests for the parser's error surface.

use crate::{parse, ParseError};

#[test]
fn unknown_literal_reaches_the_parser_as_an_error() {
    // The scanner tolerates '@'; the parser names it with its position.
    let err = parse("function main() { x = @; }").unwrap_err();
    assert_eq!(err.to_string(), "Unknown literal '@' at 1:22");
}

#[test]
fn unknown_literal_position_counts_from_the_line_start() {
    let err = parse("function main() {\n  x = $1;\n}").unwrap_err();
    assert_eq!(err.to_string(), "Unknown literal '$' at 2:7");
}

#[test]
fn unexpected_token_carries_quoted_text_values() {
    let err = parse("function main() { let let; }").unwrap_err();
    assert_eq!(err.to_string(), "Syntax error. Unexpected token LET['let'] at 1:22");
}

#[test]
fn unexpected_numeric_tokens_render_bare_values() {
    let err = parse("function 1() {}").unwrap_err();
    assert_eq!(err.to_string(), "Syntax error. Unexpected token INT[1] at 1:9");

    let err = parse("function f 2.5() {}").unwrap_err();
    assert_eq!(err.to_string(), "Syntax error. Unexpected token FLOAT[2.5] at 1:11");
}

#[test]
fn eof_inside_a_function_header() {
    assert_eq!(parse("function main(").unwrap_err(), ParseError::UnexpectedEof);
}

#[test]
fn eof_inside_a_block() {
    assert_eq!(
        parse("function main() { x = 1;").unwrap_err(),
        ParseError::UnexpectedEof
    );
}

#[test]
fn else_without_if_is_rejected() {
    let err = parse("function main() { else x = 1; }").unwrap_err();
    assert!(err.to_string().starts_with("Syntax error. Unexpected token ELSE"));
}

#[test]
fn assignment_needs_a_plain_identifier_target() {
    let err = parse("function main() { f(x) = 5; }").unwrap_err();
    assert!(err.to_string().starts_with("Syntax error. Unexpected token ASSIGN"));
}

#[test]
fn read_takes_a_single_identifier() {
    let err = parse("function main() { read(x + 1); }").unwrap_err();
    assert!(err.to_string().starts_with("Syntax error. Unexpected token ADD"));
}

#[test]
fn keywords_cannot_be_identifiers() {
    let err = parse("function while() {}").unwrap_err();
    assert!(err.to_string().starts_with("Syntax error. Unexpected token WHILE"));
}

#[test]
fn nested_function_definitions_are_rejected() {
    let err = parse("function main() { function g() {} }").unwrap_err();
    assert!(err.to_string().starts_with("Syntax error. Unexpected token FUNC"));
}

#[test]
fn write_accepts_both_derivations() {
    assert!(parse("function main() { write(a + 1); }").is_ok());
    assert!(parse("function main() { write(a < 1); }").is_ok());
    assert!(parse("function main() { write(!(a < 1) && b > 2); }").is_ok());
}

#[test]
fn deeply_nested_parentheses_parse() {
    let expr = format!("{}x{}", "(".repeat(60), ")".repeat(60));
    assert!(parse(&format!("function main() {{ write({expr}); }}")).is_ok());
}

#[test]
fn multiple_functions_in_source_order() {
    let (program, _) = parse(
        "function a() {}\nfunction b() {}\nfunction main() {}",
    )
    .unwrap();
    let names: Vec<_> = program.funcs.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, ["a", "b", "main"]);
}

#[test]
fn error_lexeme_in_expression_position() {
    let err = parse("function main() { write(#); }").unwrap_err();
    assert_eq!(err.to_string(), "Unknown literal '#' at 1:24");
}
