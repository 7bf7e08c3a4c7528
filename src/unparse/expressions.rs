//! Expression rendering.
//!
//! Expressions are always rendered at indent level zero relative to their
//! containing statement, and the printer never inserts parentheses:
//! grouping is a parsing-time concern and lives in the tree shape.

use super::Unparser;
use crate::ast::{AssignExpr, CallExpr, Expr, LValue, LiteralExpr, UnaryOp};

impl Unparser {
    pub(super) fn unparse_expression(&mut self, expr: &Expr) {
        match expr {
            Expr::Literal(literal) => self.unparse_literal(literal),
            Expr::LValue(lvalue) => self.unparse_lvalue(lvalue),
            Expr::Assign(assign) => self.unparse_assign(assign),
            Expr::Call(call) => self.unparse_call(call),
            Expr::Unary(unary) => {
                match unary.operator {
                    UnaryOp::Neg => self.push('-'),
                    UnaryOp::Not => self.push('!'),
                }
                self.unparse_expression(&unary.operand.node);
            }
            Expr::Binary(binary) => {
                self.unparse_expression(&binary.left.node);
                self.push(' ');
                self.push_str(binary.operator.as_str());
                self.push(' ');
                self.unparse_expression(&binary.right.node);
            }
        }
    }

    pub(super) fn unparse_assign(&mut self, assign: &AssignExpr) {
        self.unparse_lvalue(&assign.target.node);
        self.push_str(" = ");
        self.unparse_expression(&assign.value.node);
    }

    pub(super) fn unparse_call(&mut self, call: &CallExpr) {
        self.push_str(&call.callee.node);
        self.push('(');
        for (i, arg) in call.args.iter().enumerate() {
            if i > 0 {
                self.push_str(", ");
            }
            self.unparse_expression(&arg.node);
        }
        self.push(')');
    }

    pub(super) fn unparse_lvalue(&mut self, lvalue: &LValue) {
        match lvalue {
            LValue::Ident(name) => self.push_str(name),
            LValue::Deref(name) => {
                self.push('@');
                self.push_str(name);
            }
            LValue::AddrOf(name) => {
                self.push('^');
                self.push_str(name);
            }
            LValue::Index(name, index) => {
                self.push_str(name);
                self.push('[');
                self.unparse_expression(&index.node);
                self.push(']');
            }
        }
    }

    fn unparse_literal(&mut self, literal: &LiteralExpr) {
        match literal {
            LiteralExpr::Int(value) => self.push_str(&value.to_string()),
            LiteralExpr::Char(value) => {
                self.push('\'');
                // Re-escape so the output lexes back to the same character
                match value {
                    '\n' => self.push_str("\\n"),
                    '\t' => self.push_str("\\t"),
                    '\\' => self.push_str("\\\\"),
                    '\'' => self.push_str("\\'"),
                    other => self.push(*other),
                }
                self.push('\'');
            }
            LiteralExpr::Str(value) => {
                self.push('"');
                self.push_str(value);
                self.push('"');
            }
            LiteralExpr::True => self.push_str("True"),
            LiteralExpr::False => self.push_str("False"),
            LiteralExpr::NullPtr => self.push_str("NULLPTR"),
        }
    }
}
