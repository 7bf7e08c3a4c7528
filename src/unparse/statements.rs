//! Declaration and statement rendering.

use super::Unparser;
use crate::ast::{Decl, FnDecl, IfStmt, LocatedStmt, Stmt, VarDecl, WhileStmt};

impl Unparser {
    pub(super) fn unparse_decl(&mut self, decl: &Decl) {
        match decl {
            Decl::Var(var_decl) => self.unparse_var_decl(var_decl),
            Decl::Fn(fn_decl) => self.unparse_fn_decl(fn_decl),
        }
    }

    fn unparse_var_decl(&mut self, var_decl: &VarDecl) {
        self.indent();
        self.unparse_type(var_decl.ty.node);
        self.push(' ');
        self.push_str(&var_decl.name.node);
        self.push_str(";\n");
    }

    fn unparse_fn_decl(&mut self, fn_decl: &FnDecl) {
        self.indent();
        self.unparse_type(fn_decl.return_type.node);
        self.push(' ');
        self.push_str(&fn_decl.name.node);
        self.push('(');

        for (i, formal) in fn_decl.formals.iter().enumerate() {
            if i > 0 {
                self.push_str(", ");
            }
            self.unparse_type(formal.node.ty.node);
            self.push(' ');
            self.push_str(&formal.node.name.node);
        }

        self.push_str(") {\n");
        self.unparse_block(&fn_decl.body);
        self.indent();
        self.push_str("}\n");
    }

    fn unparse_block(&mut self, statements: &[LocatedStmt]) {
        self.indented(|unparser| {
            for stmt in statements {
                unparser.unparse_statement(&stmt.node);
            }
        });
    }

    fn unparse_statement(&mut self, stmt: &Stmt) {
        match stmt {
            Stmt::VarDecl(var_decl) => self.unparse_var_decl(var_decl),
            Stmt::Assign(assign) => {
                self.indent();
                self.unparse_assign(assign);
                self.push_str(";\n");
            }
            Stmt::Call(call) => {
                self.indent();
                self.unparse_call(call);
                self.push_str(";\n");
            }
            Stmt::PostInc(target) => {
                self.indent();
                self.unparse_lvalue(&target.node);
                self.push_str("++;\n");
            }
            Stmt::PostDec(target) => {
                self.indent();
                self.unparse_lvalue(&target.node);
                self.push_str("--;\n");
            }
            Stmt::FromConsole(target) => {
                self.indent();
                self.push_str("FROMCONSOLE ");
                self.unparse_lvalue(&target.node);
                self.push_str(";\n");
            }
            Stmt::ToConsole(value) => {
                self.indent();
                self.push_str("TOCONSOLE ");
                self.unparse_expression(&value.node);
                self.push_str(";\n");
            }
            Stmt::If(if_stmt) => self.unparse_if(if_stmt),
            Stmt::While(while_stmt) => self.unparse_while(while_stmt),
            Stmt::Return(value) => {
                self.indent();
                self.push_str("return");
                if let Some(value) = value {
                    self.push(' ');
                    self.unparse_expression(&value.node);
                }
                self.push_str(";\n");
            }
        }
    }

    fn unparse_if(&mut self, if_stmt: &IfStmt) {
        self.indent();
        self.push_str("if (");
        self.unparse_expression(&if_stmt.condition.node);
        self.push_str(") {\n");
        self.unparse_block(&if_stmt.then_branch);

        if let Some(else_branch) = &if_stmt.else_branch {
            self.indent();
            self.push_str("} else {\n");
            self.unparse_block(else_branch);
        }

        self.indent();
        self.push_str("}\n");
    }

    fn unparse_while(&mut self, while_stmt: &WhileStmt) {
        self.indent();
        self.push_str("while (");
        self.unparse_expression(&while_stmt.condition.node);
        self.push_str(") {\n");
        self.unparse_block(&while_stmt.body);
        self.indent();
        self.push_str("}\n");
    }
}
