//! Parse errors.

use quill_ir::Span;
use thiserror::Error;

/// Error produced by the lexer or parser.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    #[error("unexpected character at {span}")]
    UnexpectedChar { span: Span },

    #[error("invalid number literal at {span}")]
    InvalidNumber { span: Span },

    #[error("invalid escape sequence at {span}")]
    InvalidEscape { span: Span },

    #[error("unexpected {found} at {span}, expected {expected}")]
    UnexpectedToken {
        found: String,
        expected: &'static str,
        span: Span,
    },

    #[error("unexpected end of input, expected {expected}")]
    UnexpectedEof { expected: &'static str },
}
