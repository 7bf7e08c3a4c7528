//! Abstract syntax tree for the holeyc language.
//!
//! Every node kind is a closed enum variant, so the structural printer can
//! match exhaustively and a forgotten node kind is a compile error rather
//! than silent blank output. Children are owned exclusively by their
//! parent (`Box`/`Vec`); the tree is immutable once the parser hands it
//! over, and printing it twice yields byte-identical output.

mod decl;
mod expr;
mod stmt;
mod types;

pub use decl::{Decl, FnDecl, FormalDecl, VarDecl};
pub use expr::{
    AssignExpr, BinaryExpr, BinaryOp, CallExpr, Expr, LValue, LiteralExpr, UnaryExpr, UnaryOp,
};
pub use stmt::{IfStmt, Stmt, WhileStmt};
pub use types::Type;

use crate::error::SourceLocation;
use serde::Serialize;

/// A node paired with the position of its leading token.
///
/// Composite nodes inherit the position of their leftmost child at
/// construction time and it never changes afterwards. Equality compares
/// the node only, so trees that differ solely in source layout compare
/// equal; the round-trip property relies on this.
#[derive(Debug, Clone, Serialize)]
pub struct Located<T> {
    pub node: T,
    pub pos: SourceLocation,
}

impl<T> Located<T> {
    pub fn new(node: T, pos: SourceLocation) -> Self {
        Self { node, pos }
    }
}

impl<T: PartialEq> PartialEq for Located<T> {
    fn eq(&self, other: &Self) -> bool {
        self.node == other.node
    }
}

pub type LocatedExpr = Located<Expr>;
pub type LocatedStmt = Located<Stmt>;

/// A complete holeyc source file: an ordered sequence of global
/// declarations. The only node without a meaningful position of its own.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Program {
    pub globals: Vec<Located<Decl>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn located_equality_ignores_position() {
        let a = Located::new(Type::Int, SourceLocation::new(1, 1));
        let b = Located::new(Type::Int, SourceLocation::new(7, 3));
        let c = Located::new(Type::Bool, SourceLocation::new(1, 1));

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn pointer_types_are_references() {
        assert!(Type::IntPtr.is_reference());
        assert!(Type::CharPtr.is_reference());
        assert!(Type::BoolPtr.is_reference());
        assert!(!Type::Int.is_reference());
        assert!(!Type::Void.is_reference());
    }
}
