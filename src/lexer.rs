//! Hand-written scanner for holeyc source text.
//!
//! Produces a flat token stream with 1-based line/column positions that
//! the parser copies into the tree. Whitespace and `//` comments are
//! skipped; every other character must start a token.

use crate::error::{ErrorKind, HoleycError, Result, SourceLocation, Span};

#[derive(Debug, Clone, PartialEq)]
pub enum TokenType {
    // Keywords
    Int,
    Bool,
    Char,
    Void,
    If,
    Else,
    While,
    Return,
    True,
    False,
    NullPtr,
    FromConsole,
    ToConsole,

    // Identifiers and literals
    Identifier(String),
    IntLiteral(i64),
    CharLiteral(char),
    StringLiteral(String),

    // Operators
    Plus,
    Minus,
    Star,
    Slash,
    Not,
    Assign,
    EqualEqual,
    NotEqual,
    Less,
    LessEqual,
    Greater,
    GreaterEqual,
    And,
    Or,
    PlusPlus,
    MinusMinus,
    At,
    Caret,

    // Delimiters
    LeftParen,
    RightParen,
    LeftBrace,
    RightBrace,
    LeftBracket,
    RightBracket,
    Semicolon,
    Comma,

    // Special
    Eof,
}

#[derive(Debug, Clone)]
pub struct Token {
    pub token_type: TokenType,
    pub line: usize,
    pub column: usize,
}

impl Token {
    pub fn location(&self) -> SourceLocation {
        SourceLocation::new(self.line, self.column)
    }
}

pub struct Lexer {
    input: Vec<char>,
    position: usize,
    line: usize,
    column: usize,
}

impl Lexer {
    pub fn new(input: String) -> Self {
        Self {
            input: input.chars().collect(),
            position: 0,
            line: 1,
            column: 1,
        }
    }

    pub fn tokenize(&mut self) -> Result<Vec<Token>> {
        let mut tokens = Vec::new();

        loop {
            self.skip_whitespace_and_comments();
            if self.is_at_end() {
                break;
            }
            tokens.push(self.next_token()?);
        }

        tokens.push(Token {
            token_type: TokenType::Eof,
            line: self.line,
            column: self.column,
        });

        Ok(tokens)
    }

    fn next_token(&mut self) -> Result<Token> {
        let start_line = self.line;
        let start_column = self.column;

        let ch = match self.advance() {
            Some(ch) => ch,
            None => unreachable!("next_token called at end of input"),
        };

        let token_type = match ch {
            '(' => TokenType::LeftParen,
            ')' => TokenType::RightParen,
            '{' => TokenType::LeftBrace,
            '}' => TokenType::RightBrace,
            '[' => TokenType::LeftBracket,
            ']' => TokenType::RightBracket,
            ';' => TokenType::Semicolon,
            ',' => TokenType::Comma,
            '@' => TokenType::At,
            '^' => TokenType::Caret,
            '*' => TokenType::Star,
            '/' => TokenType::Slash,
            '+' => {
                if self.peek() == Some('+') {
                    self.advance();
                    TokenType::PlusPlus
                } else {
                    TokenType::Plus
                }
            }
            '-' => {
                if self.peek() == Some('-') {
                    self.advance();
                    TokenType::MinusMinus
                } else {
                    TokenType::Minus
                }
            }
            '=' => {
                if self.peek() == Some('=') {
                    self.advance();
                    TokenType::EqualEqual
                } else {
                    TokenType::Assign
                }
            }
            '!' => {
                if self.peek() == Some('=') {
                    self.advance();
                    TokenType::NotEqual
                } else {
                    TokenType::Not
                }
            }
            '<' => {
                if self.peek() == Some('=') {
                    self.advance();
                    TokenType::LessEqual
                } else {
                    TokenType::Less
                }
            }
            '>' => {
                if self.peek() == Some('=') {
                    self.advance();
                    TokenType::GreaterEqual
                } else {
                    TokenType::Greater
                }
            }
            '&' => {
                if self.peek() == Some('&') {
                    self.advance();
                    TokenType::And
                } else {
                    return Err(self
                        .error_at(ErrorKind::InvalidToken, "'&' is not an operator", start_line, start_column)
                        .with_help("logical and is spelled '&&'"));
                }
            }
            '|' => {
                if self.peek() == Some('|') {
                    self.advance();
                    TokenType::Or
                } else {
                    return Err(self
                        .error_at(ErrorKind::InvalidToken, "'|' is not an operator", start_line, start_column)
                        .with_help("logical or is spelled '||'"));
                }
            }
            '"' => self.read_string(start_line, start_column)?,
            '\'' => self.read_char(start_line, start_column)?,
            _ if ch.is_ascii_digit() => self.read_number(ch, start_line, start_column)?,
            _ if ch.is_ascii_alphabetic() || ch == '_' => {
                let identifier = self.read_identifier(ch);
                Self::keyword_or_identifier(identifier)
            }
            _ => {
                return Err(self.error_at(
                    ErrorKind::InvalidCharacter,
                    format!("unexpected character {:?}", ch),
                    start_line,
                    start_column,
                ));
            }
        };

        Ok(Token {
            token_type,
            line: start_line,
            column: start_column,
        })
    }

    fn keyword_or_identifier(text: String) -> TokenType {
        match text.as_str() {
            "int" => TokenType::Int,
            "bool" => TokenType::Bool,
            "char" => TokenType::Char,
            "void" => TokenType::Void,
            "if" => TokenType::If,
            "else" => TokenType::Else,
            "while" => TokenType::While,
            "return" => TokenType::Return,
            "True" => TokenType::True,
            "False" => TokenType::False,
            "NULLPTR" => TokenType::NullPtr,
            "FROMCONSOLE" => TokenType::FromConsole,
            "TOCONSOLE" => TokenType::ToConsole,
            _ => TokenType::Identifier(text),
        }
    }

    /// Reads a string literal body. The payload keeps escape sequences
    /// exactly as written, so the printer can emit them verbatim.
    fn read_string(&mut self, line: usize, column: usize) -> Result<TokenType> {
        let mut value = String::new();

        loop {
            match self.peek() {
                None | Some('\n') => {
                    return Err(self.error_at(
                        ErrorKind::UnterminatedString,
                        "string literal is missing its closing '\"'",
                        line,
                        column,
                    ));
                }
                Some('"') => {
                    self.advance();
                    break;
                }
                Some('\\') => {
                    self.advance();
                    value.push('\\');
                    if let Some(escaped) = self.advance() {
                        value.push(escaped);
                    }
                }
                Some(ch) => {
                    self.advance();
                    value.push(ch);
                }
            }
        }

        Ok(TokenType::StringLiteral(value))
    }

    fn read_char(&mut self, line: usize, column: usize) -> Result<TokenType> {
        let unterminated = |lexer: &Self| {
            lexer.error_at(
                ErrorKind::UnterminatedChar,
                "character literal is missing its closing '''",
                line,
                column,
            )
        };

        let ch = match self.advance() {
            None | Some('\n') => return Err(unterminated(self)),
            Some('\\') => match self.advance() {
                Some('n') => '\n',
                Some('t') => '\t',
                Some('\\') => '\\',
                Some('\'') => '\'',
                Some(other) => {
                    return Err(self.error_at(
                        ErrorKind::InvalidToken,
                        format!("unknown escape sequence '\\{}'", other),
                        line,
                        column,
                    ));
                }
                None => return Err(unterminated(self)),
            },
            Some(ch) => ch,
        };

        if self.advance() != Some('\'') {
            return Err(unterminated(self));
        }

        Ok(TokenType::CharLiteral(ch))
    }

    fn read_number(&mut self, first_digit: char, line: usize, column: usize) -> Result<TokenType> {
        let mut value = String::from(first_digit);
        value.push_str(&self.read_while(|c| c.is_ascii_digit()));

        match value.parse() {
            Ok(number) => Ok(TokenType::IntLiteral(number)),
            Err(_) => Err(self
                .error_at(
                    ErrorKind::InvalidNumber,
                    format!("integer literal '{}' is out of range", value),
                    line,
                    column,
                )
                .with_note("integer literals must fit in a signed 64-bit value")),
        }
    }

    fn read_identifier(&mut self, first_char: char) -> String {
        let mut value = String::from(first_char);
        value.push_str(&self.read_while(|c| c.is_ascii_alphanumeric() || c == '_'));
        value
    }

    fn skip_whitespace_and_comments(&mut self) {
        loop {
            match self.peek() {
                Some(ch) if ch.is_ascii_whitespace() => {
                    self.advance();
                }
                Some('/') if self.peek_next() == Some('/') => {
                    self.read_while(|ch| ch != '\n');
                }
                _ => break,
            }
        }
    }

    fn error_at(
        &self,
        kind: ErrorKind,
        message: impl Into<String>,
        line: usize,
        column: usize,
    ) -> HoleycError {
        HoleycError::new(kind, message)
            .with_span(Span::single(SourceLocation::new(line, column)))
    }

    fn is_at_end(&self) -> bool {
        self.position >= self.input.len()
    }

    fn advance(&mut self) -> Option<char> {
        if self.is_at_end() {
            None
        } else {
            let ch = self.input[self.position];
            self.position += 1;
            if ch == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
            Some(ch)
        }
    }

    fn peek(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    fn peek_next(&self) -> Option<char> {
        self.input.get(self.position + 1).copied()
    }

    fn read_while<F>(&mut self, mut predicate: F) -> String
    where
        F: FnMut(char) -> bool,
    {
        let mut value = String::new();

        while let Some(ch) = self.peek() {
            if !predicate(ch) {
                break;
            }
            self.advance();
            value.push(ch);
        }

        value
    }
}
