//! Rendering rules of the structural printer: exact layout, terminators,
//! and indentation.

mod common;

use common::{parse, render};
use holeyc::unparse;

#[test]
fn variable_declaration_renders_on_one_line() {
    assert_eq!(render("int x;"), "int x;\n");
}

#[test]
fn empty_return_renders_without_expression() {
    assert_eq!(render("void f() { return; }"), "void f() {\n\treturn;\n}\n");
}

#[test]
fn void_return_type_renders_as_void() {
    // The keyword must be "void", not any other type's spelling
    let rendered = render("void f() { }");
    assert!(rendered.starts_with("void f() {"));
}

#[test]
fn nested_while_is_indented_one_level_deeper() {
    let rendered = render("void f(int x) { while (x < 3) { x--; } }");
    assert!(rendered.contains("\twhile (x < 3) {\n"));
    assert!(rendered.contains("\t\tx--;\n"));
    assert!(rendered.contains("\t}\n"));
}

#[test]
fn binary_expressions_render_without_parentheses() {
    let rendered = render("void f(int a, int b, int c) { TOCONSOLE a + b * c; }");
    assert!(rendered.contains("\tTOCONSOLE a + b * c;\n"));
}

#[test]
fn null_pointer_literal_renders_verbatim() {
    let rendered = render("int * f() { return NULLPTR; }");
    assert!(rendered.contains("\treturn NULLPTR;\n"));
}

#[test]
fn boolean_literals_render_capitalized() {
    let rendered = render("void f(bool b) { b = True; b = False; }");
    assert!(rendered.contains("\tb = True;\n"));
    assert!(rendered.contains("\tb = False;\n"));
}

#[test]
fn formal_parameters_are_comma_separated() {
    let rendered = render("int add(int a, int b) { return a + b; }");
    assert!(rendered.starts_with("int add(int a, int b) {\n"));
}

#[test]
fn if_else_shares_a_brace_line() {
    let rendered = render("void f(bool b) { if (b) { return; } else { b = False; } }");
    assert!(rendered.contains("\tif (b) {\n"));
    assert!(rendered.contains("\t} else {\n"));
    assert!(rendered.ends_with("\t}\n}\n"));
}

#[test]
fn console_statements_keep_their_keywords() {
    let rendered = render("void f(int * p) { FROMCONSOLE @p; TOCONSOLE @p + 1; }");
    assert!(rendered.contains("\tFROMCONSOLE @p;\n"));
    assert!(rendered.contains("\tTOCONSOLE @p + 1;\n"));
}

#[test]
fn lvalue_forms_render_their_sigils() {
    let rendered = render("void f(int * p, int x) { @p = 1; p = ^x; p[x + 1]++; }");
    assert!(rendered.contains("\t@p = 1;\n"));
    assert!(rendered.contains("\tp = ^x;\n"));
    assert!(rendered.contains("\tp[x + 1]++;\n"));
}

#[test]
fn call_statement_renders_arguments_comma_separated() {
    let rendered = render("void f(int a) { g(a, a + 1, -a); }");
    assert!(rendered.contains("\tg(a, a + 1, -a);\n"));
}

#[test]
fn unary_operators_render_tightly_bound() {
    let rendered = render("void f(bool b, int x) { b = !b; x = -x; }");
    assert!(rendered.contains("\tb = !b;\n"));
    assert!(rendered.contains("\tx = -x;\n"));
}

#[test]
fn char_and_string_literals_render_with_their_quotes() {
    let rendered = render("void f(char c) { c = 'a'; c = '\\n'; TOCONSOLE \"hi\\tthere\"; }");
    assert!(rendered.contains("\tc = 'a';\n"));
    assert!(rendered.contains("\tc = '\\n';\n"));
    assert!(rendered.contains("\tTOCONSOLE \"hi\\tthere\";\n"));
}

#[test]
fn rendering_is_deterministic() {
    let program = parse("int g;\nvoid f(int x) { if (x) { x++; } g = x; }");
    assert_eq!(unparse::unparse(&program), unparse::unparse(&program));
}

#[test]
fn simple_statements_end_with_semicolon_before_newline() {
    let rendered = render(
        "int g;\nvoid f(int x) { x = 1; x++; x--; TOCONSOLE x; if (x) { return; } while (x) { f(x); } return; }",
    );

    for line in rendered.lines() {
        let body = line.trim_start_matches('\t');
        if body.ends_with('{') || body == "}" {
            assert!(!body.ends_with(';'), "block line ends with ';': {:?}", line);
        } else {
            assert!(body.ends_with(';'), "statement line missing ';': {:?}", line);
        }
    }
}

#[test]
fn indentation_is_one_tab_per_enclosing_block() {
    let rendered = render("void f(int x) { while (x) { if (x) { x--; } } }");
    let lines: Vec<&str> = rendered.lines().collect();

    assert_eq!(lines[0], "void f(int x) {");
    assert_eq!(lines[1], "\twhile (x) {");
    assert_eq!(lines[2], "\t\tif (x) {");
    assert_eq!(lines[3], "\t\t\tx--;");
    assert_eq!(lines[4], "\t\t}");
    assert_eq!(lines[5], "\t}");
    assert_eq!(lines[6], "}");
}

#[test]
fn globals_render_in_declaration_order() {
    assert_eq!(
        render("int a; bool b; char * c;"),
        "int a;\nbool b;\nchar * c;\n"
    );
}
