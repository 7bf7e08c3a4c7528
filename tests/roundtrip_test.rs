//! Round-trip property: re-parsing rendered output reproduces the same
//! tree, and rendering is a fixpoint of the pipeline.

mod common;

use common::{parse, render};

const PROGRAMS: &[&str] = &[
    "int x;",
    "char * buf;\nbool done;",
    "void f() { return; }",
    "int add(int a, int b) { return a + b; }",
    "void f(int x) {\n  while (x > 0) {\n    x--;\n  }\n}",
    "void f(bool b) { if (b) { return; } else { b = !b; } }",
    "void io(int * p) { FROMCONSOLE @p; TOCONSOLE @p * 2; }",
    "int * g() { return NULLPTR; }",
    "void f(char c, int i) { c = '\\n'; TOCONSOLE \"done\"; i = i / 2 + i * 3; }",
    "void f(int x) { int y; y = x; g(y, y + 1); y[2] = ^x; }",
    "void f(bool a, bool b) { a = a && b || !a == b; }",
];

#[test]
fn reparsing_rendered_output_reproduces_the_tree() {
    for source in PROGRAMS {
        let tree = parse(source);
        let rendered = holeyc::unparse::unparse(&tree);
        let reparsed = parse(&rendered);
        assert_eq!(reparsed, tree, "round-trip mismatch for {:?}", source);
    }
}

#[test]
fn rendering_is_a_fixpoint() {
    for source in PROGRAMS {
        let once = render(source);
        let twice = render(&once);
        assert_eq!(once, twice, "canonical form not stable for {:?}", source);
    }
}

#[test]
fn source_layout_does_not_affect_the_tree() {
    let compact = parse("void f(int x){while(x){x--;}}");
    let spread = parse("void f ( int x )\n{\n    while ( x )\n    {\n        x -- ;\n    }\n}");
    assert_eq!(compact, spread);
}
