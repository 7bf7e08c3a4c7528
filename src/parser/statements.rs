//! Declaration and statement parsing.

use super::Parser;
use crate::ast::{
    Expr, FnDecl, FormalDecl, IfStmt, Located, LocatedStmt, Stmt, Type, VarDecl, WhileStmt,
};
use crate::error::Result;
use crate::lexer::TokenType;

impl Parser {
    pub(super) fn finish_var_decl(
        &mut self,
        ty: Located<Type>,
        name: Located<String>,
    ) -> Result<VarDecl> {
        self.consume(&TokenType::Semicolon, "';' after the variable name")?;
        Ok(VarDecl { ty, name })
    }

    pub(super) fn finish_fn_decl(
        &mut self,
        return_type: Located<Type>,
        name: Located<String>,
    ) -> Result<FnDecl> {
        self.consume(&TokenType::LeftParen, "'(' after the function name")?;

        let mut formals = Vec::new();
        if !self.check(&TokenType::RightParen) {
            loop {
                let pos = self.peek().location();
                let ty = self.parse_type()?;
                let name = self.consume_identifier("a parameter name")?;
                formals.push(Located::new(FormalDecl { ty, name }, pos));

                if !self.match_token(&TokenType::Comma) {
                    break;
                }
            }
        }
        self.consume(&TokenType::RightParen, "')' after the parameter list")?;

        let body = self.block()?;
        Ok(FnDecl {
            return_type,
            name,
            formals,
            body,
        })
    }

    /// A brace-delimited statement list.
    pub(super) fn block(&mut self) -> Result<Vec<LocatedStmt>> {
        self.consume(&TokenType::LeftBrace, "'{'")?;

        let mut statements = Vec::new();
        while !self.check(&TokenType::RightBrace) && !self.is_at_end() {
            statements.push(self.statement()?);
        }

        self.consume(&TokenType::RightBrace, "'}'")?;
        Ok(statements)
    }

    fn statement(&mut self) -> Result<LocatedStmt> {
        let pos = self.peek().location();

        if self.check_type() {
            let ty = self.parse_type()?;
            let name = self.consume_identifier("an identifier after the type")?;
            let decl = self.finish_var_decl(ty, name)?;
            return Ok(Located::new(Stmt::VarDecl(decl), pos));
        }

        // Clone the discriminant up front so the arms may advance the parser
        let token_type = self.peek().token_type.clone();
        let stmt = match token_type {
            TokenType::If => self.if_statement()?,
            TokenType::While => self.while_statement()?,
            TokenType::Return => self.return_statement()?,
            TokenType::FromConsole => {
                self.advance();
                let target = self.parse_lvalue()?;
                self.consume(&TokenType::Semicolon, "';' after the input target")?;
                Stmt::FromConsole(target)
            }
            TokenType::ToConsole => {
                self.advance();
                let value = self.expression()?;
                self.consume(&TokenType::Semicolon, "';' after the output expression")?;
                Stmt::ToConsole(value)
            }
            _ => self.expression_statement()?,
        };

        Ok(Located::new(stmt, pos))
    }

    fn if_statement(&mut self) -> Result<Stmt> {
        self.advance();
        self.consume(&TokenType::LeftParen, "'(' after 'if'")?;
        let condition = self.expression()?;
        self.consume(&TokenType::RightParen, "')' after the condition")?;

        let then_branch = self.block()?;
        let else_branch = if self.match_token(&TokenType::Else) {
            Some(self.block()?)
        } else {
            None
        };

        Ok(Stmt::If(IfStmt {
            condition,
            then_branch,
            else_branch,
        }))
    }

    fn while_statement(&mut self) -> Result<Stmt> {
        self.advance();
        self.consume(&TokenType::LeftParen, "'(' after 'while'")?;
        let condition = self.expression()?;
        self.consume(&TokenType::RightParen, "')' after the condition")?;

        let body = self.block()?;
        Ok(Stmt::While(WhileStmt { condition, body }))
    }

    fn return_statement(&mut self) -> Result<Stmt> {
        self.advance();

        let value = if self.check(&TokenType::Semicolon) {
            None
        } else {
            Some(self.expression()?)
        };
        self.consume(&TokenType::Semicolon, "';' after the return statement")?;

        Ok(Stmt::Return(value))
    }

    /// Statements that start as an expression: assignment, call, and the
    /// post-increment/decrement forms.
    fn expression_statement(&mut self) -> Result<Stmt> {
        let expr = self.expression()?;

        if self.match_token(&TokenType::PlusPlus) {
            let target = self.expect_lvalue(expr, "'++'")?;
            self.consume(&TokenType::Semicolon, "';' after '++'")?;
            return Ok(Stmt::PostInc(target));
        }
        if self.match_token(&TokenType::MinusMinus) {
            let target = self.expect_lvalue(expr, "'--'")?;
            self.consume(&TokenType::Semicolon, "';' after '--'")?;
            return Ok(Stmt::PostDec(target));
        }

        let stmt = match expr.node {
            Expr::Assign(assign) => Stmt::Assign(assign),
            Expr::Call(call) => Stmt::Call(call),
            _ => {
                return Err(self
                    .syntax_error("this expression cannot be used as a statement")
                    .with_note(
                        "only assignments, calls, and '++'/'--' may stand alone as statements",
                    ));
            }
        };
        self.consume(&TokenType::Semicolon, "';' after the statement")?;
        Ok(stmt)
    }
}
