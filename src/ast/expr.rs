//! Expression node definitions: literals, lvalue forms, assignment,
//! calls, and the unary/binary operator expressions.

use super::{Located, LocatedExpr};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Expr {
    Literal(LiteralExpr),
    LValue(LValue),
    Assign(AssignExpr),
    Call(CallExpr),
    Unary(UnaryExpr),
    Binary(BinaryExpr),
}

/// Literal payloads render verbatim; the printer adds no quoting beyond
/// what the literal itself carries.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum LiteralExpr {
    Int(i64),
    Char(char),
    Str(String),
    True,
    False,
    NullPtr,
}

/// An expression form denoting an assignable storage location.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum LValue {
    /// Plain identifier reference: `id`.
    Ident(String),
    /// Dereference: `@id`.
    Deref(String),
    /// Address-of: `^id`.
    AddrOf(String),
    /// Indexed access: `id[exp]`.
    Index(String, Box<LocatedExpr>),
}

/// `<lvalue> = <exp>`. Also usable on its own as a statement.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssignExpr {
    pub target: Located<LValue>,
    pub value: Box<LocatedExpr>,
}

/// `<id>(<args>)`. Also usable on its own as a statement.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CallExpr {
    pub callee: Located<String>,
    pub args: Vec<LocatedExpr>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UnaryExpr {
    pub operator: UnaryOp,
    pub operand: Box<LocatedExpr>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum UnaryOp {
    /// Arithmetic negation: `-exp`.
    Neg,
    /// Logical not: `!exp`.
    Not,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BinaryExpr {
    pub left: Box<LocatedExpr>,
    pub operator: BinaryOp,
    pub right: Box<LocatedExpr>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BinaryOp {
    Add,
    Subtract,
    Multiply,
    Divide,
    And,
    Or,
    Equal,
    NotEqual,
    Greater,
    GreaterEqual,
    Less,
    LessEqual,
}

impl BinaryOp {
    /// The operator's surface syntax.
    pub fn as_str(&self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Subtract => "-",
            BinaryOp::Multiply => "*",
            BinaryOp::Divide => "/",
            BinaryOp::And => "&&",
            BinaryOp::Or => "||",
            BinaryOp::Equal => "==",
            BinaryOp::NotEqual => "!=",
            BinaryOp::Greater => ">",
            BinaryOp::GreaterEqual => ">=",
            BinaryOp::Less => "<",
            BinaryOp::LessEqual => "<=",
        }
    }
}
