//! Parser behavior: tree shapes, node positions, error reporting, and
//! recovery.

mod common;

use common::{parse, parse_with_errors};
use holeyc::ast::{Decl, Expr, LValue, LiteralExpr, Stmt};
use holeyc::error::ErrorKind;

#[test]
fn declaration_position_is_the_leading_token() {
    let program = parse("int x;\n  bool flag;");

    assert_eq!(program.globals[0].pos.line, 1);
    assert_eq!(program.globals[0].pos.column, 1);
    assert_eq!(program.globals[1].pos.line, 2);
    assert_eq!(program.globals[1].pos.column, 3);
}

#[test]
fn statement_positions_come_from_their_first_token() {
    let program = parse("void f(int x) {\n\tx = 1;\n\treturn;\n}");

    let body = match &program.globals[0].node {
        Decl::Fn(fn_decl) => &fn_decl.body,
        other => panic!("expected a function, got {:?}", other),
    };
    assert_eq!((body[0].pos.line, body[0].pos.column), (2, 2));
    assert_eq!((body[1].pos.line, body[1].pos.column), (3, 2));
}

#[test]
fn return_distinguishes_empty_from_valued() {
    let program = parse("int f(int x) { return x; }\nvoid g() { return; }");

    let stmt_of = |decl: &Decl| match decl {
        Decl::Fn(fn_decl) => fn_decl.body[0].node.clone(),
        other => panic!("expected a function, got {:?}", other),
    };

    match stmt_of(&program.globals[0].node) {
        Stmt::Return(Some(_)) => {}
        other => panic!("expected valued return, got {:?}", other),
    }
    match stmt_of(&program.globals[1].node) {
        Stmt::Return(None) => {}
        other => panic!("expected empty return, got {:?}", other),
    }
}

#[test]
fn multiplication_binds_tighter_than_addition() {
    let program = parse("void f(int a, int b, int c) { TOCONSOLE a + b * c; }");

    let body = match &program.globals[0].node {
        Decl::Fn(fn_decl) => &fn_decl.body,
        other => panic!("expected a function, got {:?}", other),
    };
    let expr = match &body[0].node {
        Stmt::ToConsole(expr) => &expr.node,
        other => panic!("expected TOCONSOLE, got {:?}", other),
    };

    // The multiplication is the right child of the addition
    match expr {
        Expr::Binary(add) => match &add.right.node {
            Expr::Binary(_) => {}
            other => panic!("expected '*' as right child, got {:?}", other),
        },
        other => panic!("expected binary expression, got {:?}", other),
    }
}

#[test]
fn parenthesized_grouping_shapes_the_tree() {
    let program = parse("void f(int a, int b, int c) { TOCONSOLE (a + b) * c; }");

    let body = match &program.globals[0].node {
        Decl::Fn(fn_decl) => &fn_decl.body,
        other => panic!("expected a function, got {:?}", other),
    };
    let expr = match &body[0].node {
        Stmt::ToConsole(expr) => &expr.node,
        other => panic!("expected TOCONSOLE, got {:?}", other),
    };

    match expr {
        Expr::Binary(mul) => match &mul.left.node {
            Expr::Binary(_) => {}
            other => panic!("expected '+' as left child, got {:?}", other),
        },
        other => panic!("expected binary expression, got {:?}", other),
    }
}

#[test]
fn null_pointer_literal_parses() {
    let program = parse("void f(int * p) { p = NULLPTR; }");

    let body = match &program.globals[0].node {
        Decl::Fn(fn_decl) => &fn_decl.body,
        other => panic!("expected a function, got {:?}", other),
    };
    match &body[0].node {
        Stmt::Assign(assign) => {
            assert_eq!(assign.target.node, LValue::Ident("p".to_string()));
            assert_eq!(assign.value.node, Expr::Literal(LiteralExpr::NullPtr));
        }
        other => panic!("expected assignment, got {:?}", other),
    }
}

#[test]
fn missing_semicolon_is_an_unexpected_token() {
    let (_, errors) = parse_with_errors("int x\nint y;");

    assert_eq!(errors.len(), 1);
    let error = &errors.errors()[0];
    assert_eq!(error.kind, ErrorKind::UnexpectedToken);
    let span = error.context.span.expect("error should carry a span");
    assert_eq!((span.start.line, span.start.column), (2, 1));
}

#[test]
fn recovery_reports_multiple_errors() {
    let (program, errors) = parse_with_errors("int ;\nbool ;\nchar c;");

    assert!(errors.len() >= 2);
    // The well-formed trailing declaration still parses
    assert!(program
        .globals
        .iter()
        .any(|decl| matches!(&decl.node, Decl::Var(var) if var.name.node == "c")));
}

#[test]
fn assignment_requires_an_lvalue_target() {
    let (_, errors) = parse_with_errors("void f(int x) { x + 1 = 2; }");

    assert!(errors.has_errors());
    assert_eq!(errors.errors()[0].kind, ErrorKind::SyntaxError);
}

#[test]
fn bare_expression_is_not_a_statement() {
    let (_, errors) = parse_with_errors("void f(int x) { x + 1; }");

    assert!(errors.has_errors());
    assert_eq!(errors.errors()[0].kind, ErrorKind::SyntaxError);
}

#[test]
fn void_has_no_pointer_variant() {
    let (_, errors) = parse_with_errors("void * p;");
    assert!(errors.has_errors());
}

#[test]
fn unexpected_eof_is_reported_as_such() {
    let (_, errors) = parse_with_errors("int f(");
    assert!(errors
        .errors()
        .iter()
        .any(|e| e.kind == ErrorKind::UnexpectedEof));
}
