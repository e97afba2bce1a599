//! Quill Syntax - lexer and parser for Quill source.
//!
//! The lexer is generated with `logos` and interns identifiers and string
//! literals on the way out. The parser is a hand-written recursive-descent
//! parser over the token slice, producing a [`quill_ir::Program`].

mod error;
mod lexer;
mod parser;
mod token;

pub use error::ParseError;
pub use lexer::Lexer;
pub use parser::{parse_program, Parser};
pub use token::{Token, TokenKind};
