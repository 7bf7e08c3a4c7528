//! Recursive descent parser for holeyc.
//!
//! Consumes the token stream from the lexer and builds the tree the
//! structural printer walks. Parsing recovers from syntax errors by
//! synchronizing to the next statement boundary, so a single run can
//! report every error in the file.

mod error;
mod expressions;
mod statements;

use crate::ast::{Decl, Located, Program, Type};
use crate::error::{ErrorCollection, HoleycError, Result};
use crate::lexer::{Token, TokenType};

pub struct Parser {
    tokens: Vec<Token>,
    current: usize,
    errors: ErrorCollection,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens,
            current: 0,
            errors: ErrorCollection::new(),
        }
    }

    /// Parse a whole program, failing on the first error.
    pub fn parse(&mut self) -> Result<Program> {
        let (program, errors) = self.parse_with_recovery();
        match errors.errors().first() {
            Some(error) => Err(error.clone()),
            None => Ok(program),
        }
    }

    /// Parse with error recovery, returning both the program and every
    /// error found.
    pub fn parse_with_recovery(&mut self) -> (Program, ErrorCollection) {
        let mut globals = Vec::new();

        while !self.is_at_end() {
            match self.declaration() {
                Ok(decl) => globals.push(decl),
                Err(err) => {
                    self.errors.add(err);
                    self.synchronize();
                }
            }
        }

        let errors = std::mem::take(&mut self.errors);
        (Program { globals }, errors)
    }

    pub(super) fn parse_type(&mut self) -> Result<Located<Type>> {
        let pos = self.peek().location();

        let base = match self.peek().token_type {
            TokenType::Int => Type::Int,
            TokenType::Bool => Type::Bool,
            TokenType::Char => Type::Char,
            TokenType::Void => Type::Void,
            _ => return Err(self.unexpected_token("a type name")),
        };
        self.advance();

        // A trailing '*' turns the value types into their pointer variants.
        let ty = if base != Type::Void && self.match_token(&TokenType::Star) {
            match base {
                Type::Int => Type::IntPtr,
                Type::Bool => Type::BoolPtr,
                Type::Char => Type::CharPtr,
                _ => unreachable!(),
            }
        } else {
            base
        };

        Ok(Located::new(ty, pos))
    }

    /// Whether the current token can begin a type.
    pub(super) fn check_type(&self) -> bool {
        matches!(
            self.peek().token_type,
            TokenType::Int | TokenType::Bool | TokenType::Char | TokenType::Void
        )
    }

    // Token stream helpers

    pub(super) fn check(&self, token_type: &TokenType) -> bool {
        if self.is_at_end() {
            false
        } else {
            std::mem::discriminant(&self.peek().token_type) == std::mem::discriminant(token_type)
        }
    }

    pub(super) fn advance(&mut self) -> &Token {
        if !self.is_at_end() {
            self.current += 1;
        }
        self.previous()
    }

    pub(super) fn is_at_end(&self) -> bool {
        self.peek().token_type == TokenType::Eof
    }

    pub(super) fn peek(&self) -> &Token {
        &self.tokens[self.current]
    }

    pub(super) fn previous(&self) -> &Token {
        &self.tokens[self.current - 1]
    }

    pub(super) fn consume(&mut self, token_type: &TokenType, expected: &str) -> Result<&Token> {
        if self.check(token_type) {
            Ok(self.advance())
        } else {
            Err(self.unexpected_token(expected))
        }
    }

    pub(super) fn match_token(&mut self, token_type: &TokenType) -> bool {
        if self.check(token_type) {
            self.advance();
            true
        } else {
            false
        }
    }

    pub(super) fn consume_identifier(&mut self, expected: &str) -> Result<Located<String>> {
        if let TokenType::Identifier(name) = &self.peek().token_type {
            let name = name.clone();
            let pos = self.peek().location();
            self.advance();
            Ok(Located::new(name, pos))
        } else {
            Err(self.unexpected_token(expected))
        }
    }
}

/// Convenience entry point: lex and parse a source string.
pub fn parse_source(source: &str) -> std::result::Result<Program, HoleycError> {
    let mut lexer = crate::lexer::Lexer::new(source.to_string());
    let tokens = lexer.tokenize()?;
    Parser::new(tokens).parse()
}

impl Parser {
    fn declaration(&mut self) -> Result<Located<Decl>> {
        let pos = self.peek().location();
        let ty = self.parse_type()?;
        let name = self.consume_identifier("an identifier after the type")?;

        if self.check(&TokenType::LeftParen) {
            let decl = self.finish_fn_decl(ty, name)?;
            Ok(Located::new(Decl::Fn(decl), pos))
        } else {
            let decl = self.finish_var_decl(ty, name)?;
            Ok(Located::new(Decl::Var(decl), pos))
        }
    }
}
