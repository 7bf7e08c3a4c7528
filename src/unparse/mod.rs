//! Structural printer (unparser) for holeyc trees.
//!
//! A single depth-first, left-to-right traversal that regenerates
//! canonical source text: one tab per indent level at the start of each
//! statement or declaration line, single spaces around binary operators,
//! `;` terminators on simple statements. Each node kind is one match arm;
//! the match is exhaustive, so an unhandled kind cannot compile.
//!
//! The printer never reads node positions and never mutates the tree;
//! rendering the same tree twice produces byte-identical output.

mod expressions;
mod statements;
mod types;

use crate::ast::Program;

/// Render a whole program as canonical source text.
pub fn unparse(program: &Program) -> String {
    let mut unparser = Unparser::new();
    unparser.unparse_program(program);
    unparser.finish()
}

pub struct Unparser {
    output: String,
    indent_level: usize,
}

impl Unparser {
    pub fn new() -> Self {
        Self {
            output: String::new(),
            indent_level: 0,
        }
    }

    pub fn unparse_program(&mut self, program: &Program) {
        for global in &program.globals {
            self.unparse_decl(&global.node);
        }
    }

    pub fn finish(self) -> String {
        self.output
    }

    pub(super) fn push(&mut self, ch: char) {
        self.output.push(ch);
    }

    pub(super) fn push_str(&mut self, text: &str) {
        self.output.push_str(text);
    }

    pub(super) fn indent(&mut self) {
        write_indent(&mut self.output, self.indent_level);
    }

    pub(super) fn indented<F: FnOnce(&mut Self)>(&mut self, body: F) {
        self.indent_level += 1;
        body(self);
        self.indent_level -= 1;
    }
}

impl Default for Unparser {
    fn default() -> Self {
        Self::new()
    }
}

/// Emit one tab per indentation level. Stateless on purpose; indentation
/// is ambient to the traversal, not hidden in shared state.
fn write_indent(out: &mut String, level: usize) {
    for _ in 0..level {
        out.push('\t');
    }
}
