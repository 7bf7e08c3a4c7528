pub mod ast;
pub mod config;
pub mod error;
pub mod lexer;
pub mod parser;
pub mod unparse;

pub use ast::*;
pub use config::*;
pub use lexer::*;
pub use parser::*;
pub use unparse::*;
