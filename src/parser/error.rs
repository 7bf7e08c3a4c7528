//! Parser error construction and panic-mode recovery.

use super::Parser;
use crate::error::{ErrorKind, HoleycError, Span};
use crate::lexer::TokenType;

impl Parser {
    /// Skip ahead to a likely statement boundary after an error, so one
    /// mistake does not cascade into a wall of follow-on errors.
    pub(super) fn synchronize(&mut self) {
        self.advance();

        while !self.is_at_end() {
            // A semicolon or closing brace ends the broken statement
            if matches!(
                self.previous().token_type,
                TokenType::Semicolon | TokenType::RightBrace
            ) {
                return;
            }

            // Tokens that begin declarations or statements are safe
            // resumption points
            match self.peek().token_type {
                TokenType::Int
                | TokenType::Bool
                | TokenType::Char
                | TokenType::Void
                | TokenType::If
                | TokenType::While
                | TokenType::Return
                | TokenType::FromConsole
                | TokenType::ToConsole => return,
                _ => {}
            }

            self.advance();
        }
    }

    pub(super) fn error(&self, kind: ErrorKind, message: String) -> HoleycError {
        let token = self.peek();
        HoleycError::new(kind, message).with_span(Span::single(token.location()))
    }

    pub(super) fn syntax_error(&self, message: impl Into<String>) -> HoleycError {
        self.error(ErrorKind::SyntaxError, message.into())
    }

    pub(super) fn unexpected_token(&self, expected: &str) -> HoleycError {
        let token = self.peek();
        if token.token_type == TokenType::Eof {
            self.error(
                ErrorKind::UnexpectedEof,
                format!("expected {}, found end of file", expected),
            )
        } else {
            self.error(
                ErrorKind::UnexpectedToken,
                format!("expected {}, found {:?}", expected, token.token_type),
            )
        }
    }
}
