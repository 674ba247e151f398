//! Generator tests, driven through the parser so the emitted lines are
//! checked against real L source.

use crate::generate;

fn lines_of(source: &str) -> Vec<String> {
    let (program, _) = lc_par::parse(source).unwrap_or_else(|e| panic!("parse failed: {e}"));
    generate(&program)
}

fn assert_has_line(lines: &[String], wanted: &str) {
    assert!(
        lines.iter().any(|line| line == wanted),
        "missing line {wanted:?} in:\n{}",
        lines.join("\n")
    );
}

#[test]
fn preamble_imports_argv() {
    let lines = lines_of("function main() {}");
    assert_eq!(lines[0], "from sys import argv");
    assert_eq!(lines[1], "");
    assert_eq!(lines[2], "");
}

#[test]
fn fibonacci_program() {
    let lines = lines_of(
        "function fib(n) {\n\
         \x20 if (n <= 1) return n;\n\
         \x20 return fib(n-1) + fib(n-2);\n\
         }\n\
         function main() { let n; read(n); write(fib(n)); return 0; }\n",
    );

    assert_has_line(&lines, "def fib(n):");
    assert_has_line(&lines, "    if (n<=1):");
    assert_has_line(&lines, "        return n");
    assert_has_line(&lines, "    return (fib((n-1))+fib((n-2)))");

    assert_has_line(&lines, "def main():");
    assert_has_line(&lines, "    n = input()");
    assert_has_line(&lines, "    try:");
    assert_has_line(&lines, "        n = int(n)");
    assert_has_line(&lines, "    except ValueError:");
    assert_has_line(&lines, "        n = float(n)");
    assert_has_line(&lines, "    print(fib(n))");
    assert_has_line(&lines, "    return 0");

    assert_has_line(&lines, "        print(f\"returned: {main(*argv[1:1]) or 0}\")");
}

#[test]
fn arithmetic_precedence_is_frozen_by_parentheses() {
    let lines = lines_of("function main() { write(a + b * c ^ d - -e); }");
    assert_has_line(&lines, "    print(((a+(b*(c**d)))-(-e)))");
}

#[test]
fn empty_then_branch_gets_an_inline_pass() {
    let lines = lines_of("function main() { if (x == 0) {} else write(1); }");
    assert_has_line(&lines, "    if (x==0):pass");
    assert_has_line(&lines, "    else:");
    assert_has_line(&lines, "        print(1)");
}

#[test]
fn empty_else_branch_is_dropped() {
    let lines = lines_of("function main() { if (x == 0) write(1); else {} }");
    assert_has_line(&lines, "    if (x==0):");
    assert!(!lines.iter().any(|l| l.contains("else")));
}

#[test]
fn main_parameters_get_zero_defaults_and_set_the_footer_arity() {
    let lines = lines_of("function main(a,b,c) { write(a+b+c); }");
    assert_has_line(&lines, "def main(a=0,b=0,c=0):");
    assert_has_line(&lines, "        print(f\"returned: {main(*argv[1:4]) or 0}\")");
}

#[test]
fn other_functions_keep_plain_parameters() {
    let lines = lines_of("function foo(a,b) { return a; } function main() {}");
    assert_has_line(&lines, "def foo(a,b):");
}

#[test]
fn missing_main_still_generates_a_runnable_script() {
    let lines = lines_of("function foo() {}");
    assert_has_line(&lines, "def foo():");
    assert_has_line(&lines, "    pass");
    // Arity defaults to zero and absence is handled at run time.
    assert_has_line(&lines, "        print(f\"returned: {main(*argv[1:1]) or 0}\")");
    assert_has_line(&lines, "    except NameError:");
    assert_has_line(&lines, "        print(\"Entry point 'main' not defined\")");
}

#[test]
fn while_emits_a_genuine_loop() {
    let lines = lines_of("function main() { while (i < 10) i = i + 1; }");
    assert_has_line(&lines, "    while (i<10):");
    assert_has_line(&lines, "        i = (i+1)");
}

#[test]
fn empty_while_body_gets_an_inline_pass() {
    let lines = lines_of("function main() { while (i < 10) {} }");
    assert_has_line(&lines, "    while (i<10):pass");
}

#[test]
fn nested_control_structures_indent_one_level_each() {
    let lines = lines_of(
        "function main() { while (i < 10) { if (i > 5) write(i); i = i + 1; } }",
    );
    assert_has_line(&lines, "    while (i<10):");
    assert_has_line(&lines, "        if (i>5):");
    assert_has_line(&lines, "            print(i)");
    assert_has_line(&lines, "        i = (i+1)");
}

#[test]
fn declarations_are_elided() {
    let lines = lines_of("function main() { let x = 2; write(x); }");
    assert_has_line(&lines, "    x = 2");
    assert!(!lines.iter().any(|l| l.contains("let")));
}

#[test]
fn a_branch_of_only_declarations_still_needs_a_body() {
    let lines = lines_of("function main() { if (x > 0) let y; }");
    assert_has_line(&lines, "    if (x>0):pass");
}

#[test]
fn a_body_of_only_declarations_emits_pass() {
    let lines = lines_of("function main() { let x; let y; }");
    assert_has_line(&lines, "def main():");
    assert_has_line(&lines, "    pass");
}

#[test]
fn boolean_and_comparison_symbols() {
    let lines = lines_of(
        "function main() { write(!(a < b) && c >= d || e != f); }",
    );
    assert_has_line(&lines, "    print(((not (a<b) and (c>=d)) or (e!=f)))");
}

#[test]
fn bare_call_statement() {
    let lines = lines_of("function main() { foo(1, 2.5, bar()); }");
    assert_has_line(&lines, "    foo(1, 2.5, bar())");
}

#[test]
fn float_literals_keep_their_decimal_point() {
    let lines = lines_of("function main() { x = 10.5; y = 2.0; }");
    assert_has_line(&lines, "    x = 10.5");
    assert_has_line(&lines, "    y = 2.0");
}

#[test]
fn function_blocks_are_separated_by_two_blank_lines() {
    let lines = lines_of("function foo() {} function main() {}");
    let foo = lines.iter().position(|l| l == "def foo():").unwrap();
    assert_eq!(lines[foo + 1], "    pass");
    assert_eq!(lines[foo + 2], "");
    assert_eq!(lines[foo + 3], "");
    assert_eq!(lines[foo + 4], "def main():");
}

#[test]
fn footer_shape() {
    let lines = lines_of("function main() {}");
    let top = lines.iter().position(|l| l == "if __name__ == '__main__':").unwrap();
    assert_eq!(lines[top + 1], "    try:");
    assert_eq!(lines[top + 2], "        print(f\"returned: {main(*argv[1:1]) or 0}\")");
    assert_eq!(lines[top + 3], "    except NameError:");
    assert_eq!(lines[top + 4], "        print(\"Entry point 'main' not defined\")");
    assert_eq!(lines[top + 5], "");
    assert_eq!(lines.len(), top + 6);
}

#[test]
fn every_binary_operator_is_parenthesized() {
    let lines = lines_of("function main() { write(a + b - c * d / e ^ f); }");
    let print_line = lines.iter().find(|l| l.contains("print")).unwrap();
    let opens = print_line.matches('(').count();
    let closes = print_line.matches(')').count();
    assert_eq!(opens, closes);
    // One pair per binary operator plus the print call itself.
    assert_eq!(opens, 6);
}

#[test]
fn generation_is_deterministic() {
    let source = "function main(a) { while (a > 0) { write(a); a = a - 1; } return 0; }";
    assert_eq!(lines_of(source), lines_of(source));
}
