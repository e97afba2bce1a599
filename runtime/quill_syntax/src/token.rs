//! Token types for the Quill lexer.

use quill_ir::{Name, Span};
use std::fmt;

/// A token with its span in the source.
#[derive(Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Token { kind, span }
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {}", self.kind, self.span)
    }
}

/// Token kinds for Quill.
#[derive(Clone, PartialEq, Debug)]
pub enum TokenKind {
    // === Literals ===
    /// Integer literal: 42, 1_000
    Int(i64),
    /// Float literal: 3.14, 2.5e-8
    Float(f64),
    /// String literal (interned): "hello"
    Str(Name),

    // === Identifiers ===
    /// Identifier (interned)
    Ident(Name),

    // === Keywords ===
    Import,
    True,
    False,

    // === Symbols ===
    Assign,  // =
    EqEq,    // ==
    NotEq,   // !=
    Lt,      // <
    Le,      // <=
    Gt,      // >
    Ge,      // >=
    Plus,    // +
    Minus,   // -
    Star,    // *
    Slash,   // /
    Percent, // %
    Bang,    // !
    Dot,     // .
    LParen,  // (
    RParen,  // )
    Semi,    // ;

    // === Layout ===
    /// Statement-terminating newline.
    Newline,
}

impl TokenKind {
    /// Human-readable description for diagnostics.
    pub fn describe(&self) -> String {
        match self {
            TokenKind::Int(n) => format!("integer `{n}`"),
            TokenKind::Float(f) => format!("float `{f}`"),
            TokenKind::Str(_) => "string literal".to_string(),
            TokenKind::Ident(_) => "identifier".to_string(),
            TokenKind::Import => "`import`".to_string(),
            TokenKind::True => "`true`".to_string(),
            TokenKind::False => "`false`".to_string(),
            TokenKind::Assign => "`=`".to_string(),
            TokenKind::EqEq => "`==`".to_string(),
            TokenKind::NotEq => "`!=`".to_string(),
            TokenKind::Lt => "`<`".to_string(),
            TokenKind::Le => "`<=`".to_string(),
            TokenKind::Gt => "`>`".to_string(),
            TokenKind::Ge => "`>=`".to_string(),
            TokenKind::Plus => "`+`".to_string(),
            TokenKind::Minus => "`-`".to_string(),
            TokenKind::Star => "`*`".to_string(),
            TokenKind::Slash => "`/`".to_string(),
            TokenKind::Percent => "`%`".to_string(),
            TokenKind::Bang => "`!`".to_string(),
            TokenKind::Dot => "`.`".to_string(),
            TokenKind::LParen => "`(`".to_string(),
            TokenKind::RParen => "`)`".to_string(),
            TokenKind::Semi => "`;`".to_string(),
            TokenKind::Newline => "newline".to_string(),
        }
    }
}
