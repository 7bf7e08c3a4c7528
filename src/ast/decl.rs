//! Declaration node definitions.

use super::{Located, LocatedStmt, Type};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Decl {
    Var(VarDecl),
    Fn(FnDecl),
}

/// `<type> <id>;` — a global or local variable.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VarDecl {
    pub ty: Located<Type>,
    pub name: Located<String>,
}

/// `<type> <id>(<formals>) { <body> }`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FnDecl {
    pub return_type: Located<Type>,
    pub name: Located<String>,
    pub formals: Vec<Located<FormalDecl>>,
    pub body: Vec<LocatedStmt>,
}

/// `<type> <id>` inside a function signature.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormalDecl {
    pub ty: Located<Type>,
    pub name: Located<String>,
}
