#![allow(dead_code)]

use holeyc::ast::Program;
use holeyc::error::ErrorCollection;
use holeyc::lexer::Lexer;
use holeyc::parser::Parser;
use holeyc::unparse;

/// Lex and parse holeyc source, failing the test on any error.
pub fn parse(source: &str) -> Program {
    let mut lexer = Lexer::new(source.to_string());
    let tokens = lexer.tokenize().expect("lexing should succeed");
    Parser::new(tokens).parse().expect("parsing should succeed")
}

/// Lex and parse with error recovery, returning whatever was built plus
/// every error found.
pub fn parse_with_errors(source: &str) -> (Program, ErrorCollection) {
    let mut lexer = Lexer::new(source.to_string());
    let tokens = lexer.tokenize().expect("lexing should succeed");
    Parser::new(tokens).parse_with_recovery()
}

/// Full pipeline: parse and regenerate canonical source text.
pub fn render(source: &str) -> String {
    unparse::unparse(&parse(source))
}
