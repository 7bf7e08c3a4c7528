//! Statement node definitions.

use super::{AssignExpr, CallExpr, Located, LocatedExpr, LocatedStmt, LValue, VarDecl};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Stmt {
    /// A local variable declaration; declarations are statements inside
    /// function bodies.
    VarDecl(VarDecl),
    /// `<lvalue> = <exp>;`
    Assign(AssignExpr),
    /// `<id>(<args>);`
    Call(CallExpr),
    /// `<lvalue>++;`
    PostInc(Located<LValue>),
    /// `<lvalue>--;`
    PostDec(Located<LValue>),
    /// `FROMCONSOLE <lvalue>;`
    FromConsole(Located<LValue>),
    /// `TOCONSOLE <exp>;`
    ToConsole(LocatedExpr),
    If(IfStmt),
    While(WhileStmt),
    /// `return;` when the expression is absent, `return <exp>;` otherwise.
    Return(Option<LocatedExpr>),
}

/// `if` with an optional `else` branch; the two spellings share a node and
/// the printer picks the layout from the branch's presence.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IfStmt {
    pub condition: LocatedExpr,
    pub then_branch: Vec<LocatedStmt>,
    pub else_branch: Option<Vec<LocatedStmt>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WhileStmt {
    pub condition: LocatedExpr,
    pub body: Vec<LocatedStmt>,
}
