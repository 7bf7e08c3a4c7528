//! Expression parsing with operator precedence.
//!
//! Precedence from loosest to tightest: assignment, `||`, `&&`,
//! equality, comparison, additive, multiplicative, unary, primary.
//! Parentheses group but leave no node behind; the printer relies on the
//! tree shape alone.

use super::Parser;
use crate::ast::{
    AssignExpr, BinaryExpr, BinaryOp, CallExpr, Expr, LValue, LiteralExpr, Located, LocatedExpr,
    UnaryExpr, UnaryOp,
};
use crate::error::Result;
use crate::lexer::TokenType;

impl Parser {
    pub(super) fn expression(&mut self) -> Result<LocatedExpr> {
        self.assignment()
    }

    fn assignment(&mut self) -> Result<LocatedExpr> {
        let expr = self.logical_or()?;

        if self.match_token(&TokenType::Assign) {
            let target = self.expect_lvalue(expr, "'='")?;
            let value = Box::new(self.assignment()?); // Right associative
            let pos = target.pos;
            return Ok(Located::new(
                Expr::Assign(AssignExpr { target, value }),
                pos,
            ));
        }

        Ok(expr)
    }

    fn logical_or(&mut self) -> Result<LocatedExpr> {
        self.parse_binary_expression(Self::logical_and, &[TokenType::Or], |token_type| {
            match token_type {
                TokenType::Or => BinaryOp::Or,
                _ => unreachable!(),
            }
        })
    }

    fn logical_and(&mut self) -> Result<LocatedExpr> {
        self.parse_binary_expression(Self::equality, &[TokenType::And], |token_type| {
            match token_type {
                TokenType::And => BinaryOp::And,
                _ => unreachable!(),
            }
        })
    }

    fn equality(&mut self) -> Result<LocatedExpr> {
        self.parse_binary_expression(
            Self::comparison,
            &[TokenType::EqualEqual, TokenType::NotEqual],
            |token_type| match token_type {
                TokenType::EqualEqual => BinaryOp::Equal,
                TokenType::NotEqual => BinaryOp::NotEqual,
                _ => unreachable!(),
            },
        )
    }

    fn comparison(&mut self) -> Result<LocatedExpr> {
        self.parse_binary_expression(
            Self::term,
            &[
                TokenType::Greater,
                TokenType::GreaterEqual,
                TokenType::Less,
                TokenType::LessEqual,
            ],
            |token_type| match token_type {
                TokenType::Greater => BinaryOp::Greater,
                TokenType::GreaterEqual => BinaryOp::GreaterEqual,
                TokenType::Less => BinaryOp::Less,
                TokenType::LessEqual => BinaryOp::LessEqual,
                _ => unreachable!(),
            },
        )
    }

    fn term(&mut self) -> Result<LocatedExpr> {
        self.parse_binary_expression(
            Self::factor,
            &[TokenType::Plus, TokenType::Minus],
            |token_type| match token_type {
                TokenType::Plus => BinaryOp::Add,
                TokenType::Minus => BinaryOp::Subtract,
                _ => unreachable!(),
            },
        )
    }

    fn factor(&mut self) -> Result<LocatedExpr> {
        self.parse_binary_expression(
            Self::unary,
            &[TokenType::Star, TokenType::Slash],
            |token_type| match token_type {
                TokenType::Star => BinaryOp::Multiply,
                TokenType::Slash => BinaryOp::Divide,
                _ => unreachable!(),
            },
        )
    }

    /// Left-associative binary operator ladder rung.
    fn parse_binary_expression(
        &mut self,
        operand: fn(&mut Self) -> Result<LocatedExpr>,
        operators: &[TokenType],
        to_binary_op: fn(&TokenType) -> BinaryOp,
    ) -> Result<LocatedExpr> {
        let mut expr = operand(self)?;

        while let Some(token_type) = operators.iter().find(|t| self.check(t)) {
            let operator = to_binary_op(token_type);
            self.advance();
            let right = operand(self)?;
            let pos = expr.pos;
            expr = Located::new(
                Expr::Binary(BinaryExpr {
                    left: Box::new(expr),
                    operator,
                    right: Box::new(right),
                }),
                pos,
            );
        }

        Ok(expr)
    }

    fn unary(&mut self) -> Result<LocatedExpr> {
        let operator = match self.peek().token_type {
            TokenType::Not => Some(UnaryOp::Not),
            TokenType::Minus => Some(UnaryOp::Neg),
            _ => None,
        };
        let operator = match operator {
            Some(operator) => operator,
            None => return self.primary(),
        };
        let pos = self.peek().location();
        self.advance();

        let operand = Box::new(self.unary()?); // Right associative
        Ok(Located::new(
            Expr::Unary(UnaryExpr { operator, operand }),
            pos,
        ))
    }

    fn primary(&mut self) -> Result<LocatedExpr> {
        let pos = self.peek().location();

        let literal = match &self.peek().token_type {
            TokenType::IntLiteral(value) => Some(LiteralExpr::Int(*value)),
            TokenType::CharLiteral(value) => Some(LiteralExpr::Char(*value)),
            TokenType::StringLiteral(value) => Some(LiteralExpr::Str(value.clone())),
            TokenType::True => Some(LiteralExpr::True),
            TokenType::False => Some(LiteralExpr::False),
            TokenType::NullPtr => Some(LiteralExpr::NullPtr),
            _ => None,
        };
        if let Some(literal) = literal {
            self.advance();
            return Ok(Located::new(Expr::Literal(literal), pos));
        }

        if self.match_token(&TokenType::LeftParen) {
            let expr = self.expression()?;
            self.consume(&TokenType::RightParen, "')' after the expression")?;
            return Ok(expr);
        }

        if matches!(
            self.peek().token_type,
            TokenType::At | TokenType::Caret | TokenType::Identifier(_)
        ) {
            let lvalue = self.parse_lvalue()?;

            // A call is an identifier followed by an argument list
            if let LValue::Ident(name) = &lvalue.node {
                if self.check(&TokenType::LeftParen) {
                    let callee = Located::new(name.clone(), lvalue.pos);
                    return self.finish_call(callee);
                }
            }

            return Ok(Located::new(Expr::LValue(lvalue.node), lvalue.pos));
        }

        Err(self.unexpected_token("an expression"))
    }

    /// The four lvalue forms: `id`, `@id`, `^id`, `id[exp]`.
    pub(super) fn parse_lvalue(&mut self) -> Result<Located<LValue>> {
        let pos = self.peek().location();

        if self.match_token(&TokenType::At) {
            let name = self.consume_identifier("an identifier after '@'")?;
            return Ok(Located::new(LValue::Deref(name.node), pos));
        }
        if self.match_token(&TokenType::Caret) {
            let name = self.consume_identifier("an identifier after '^'")?;
            return Ok(Located::new(LValue::AddrOf(name.node), pos));
        }
        if matches!(self.peek().token_type, TokenType::Identifier(_)) {
            let name = self.consume_identifier("an identifier")?;
            if self.match_token(&TokenType::LeftBracket) {
                let index = self.expression()?;
                self.consume(&TokenType::RightBracket, "']' after the index")?;
                return Ok(Located::new(LValue::Index(name.node, Box::new(index)), pos));
            }
            return Ok(Located::new(LValue::Ident(name.node), pos));
        }

        Err(self.unexpected_token("an lvalue"))
    }

    fn finish_call(&mut self, callee: Located<String>) -> Result<LocatedExpr> {
        self.consume(&TokenType::LeftParen, "'('")?;

        let mut args = Vec::new();
        if !self.check(&TokenType::RightParen) {
            loop {
                args.push(self.expression()?);
                if !self.match_token(&TokenType::Comma) {
                    break;
                }
            }
        }
        self.consume(&TokenType::RightParen, "')' after the arguments")?;

        let pos = callee.pos;
        Ok(Located::new(Expr::Call(CallExpr { callee, args }), pos))
    }

    /// Require an already-parsed expression to be an lvalue, for contexts
    /// (`=`, `++`, `--`) that assign through it.
    pub(super) fn expect_lvalue(
        &self,
        expr: LocatedExpr,
        context: &str,
    ) -> Result<Located<LValue>> {
        match expr.node {
            Expr::LValue(lvalue) => Ok(Located::new(lvalue, expr.pos)),
            _ => Err(self
                .syntax_error(format!("invalid target for {}", context))
                .with_note("the target must be an identifier, '@id', '^id', or 'id[exp]'")),
        }
    }
}
