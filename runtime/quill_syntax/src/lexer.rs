//! Lexer for Quill using logos with string interning.
//!
//! The raw `logos` token carries no payload; literal values are cut from the
//! source slice and interned (identifiers, strings) or parsed (numbers) when
//! the final token stream is built.

use logos::Logos;
use quill_ir::{Span, StringInterner};

use super::{ParseError, Token, TokenKind};

/// Raw token from logos (before interning).
#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\r]+")] // Skip horizontal whitespace
#[logos(skip r"#[^\n]*")] // Skip line comments
enum RawToken {
    // === Newlines ===
    #[token("\n")]
    Newline,

    // === Keywords ===
    #[token("import")]
    Import,
    #[token("true")]
    True,
    #[token("false")]
    False,

    // === Literals ===
    #[regex(r"[0-9][0-9_]*\.[0-9][0-9_]*([eE][+-]?[0-9]+)?")]
    Float,
    #[regex(r"[0-9][0-9_]*")]
    Int,
    #[regex(r#""([^"\\\n]|\\.)*""#)]
    Str,

    // === Identifiers ===
    #[regex(r"[A-Za-z_][A-Za-z0-9_]*")]
    Ident,

    // === Symbols ===
    #[token("==")]
    EqEq,
    #[token("!=")]
    NotEq,
    #[token("<=")]
    Le,
    #[token(">=")]
    Ge,
    #[token("=")]
    Assign,
    #[token("<")]
    Lt,
    #[token(">")]
    Gt,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("%")]
    Percent,
    #[token("!")]
    Bang,
    #[token(".")]
    Dot,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token(";")]
    Semi,
}

/// Lexer producing interned [`Token`]s from Quill source.
pub struct Lexer<'a> {
    source: &'a str,
    interner: &'a StringInterner,
}

impl<'a> Lexer<'a> {
    /// Create a lexer over `source`.
    pub fn new(source: &'a str, interner: &'a StringInterner) -> Self {
        Lexer { source, interner }
    }

    /// Lex the whole source into a token list.
    pub fn lex_all(&self) -> Result<Vec<Token>, ParseError> {
        let mut tokens = Vec::new();
        let mut lex = RawToken::lexer(self.source);

        while let Some(raw) = lex.next() {
            let range = lex.span();
            let span = Span::new(range.start as u32, range.end as u32);
            let slice = lex.slice();

            let raw = raw.map_err(|()| ParseError::UnexpectedChar { span })?;
            let kind = match raw {
                RawToken::Newline => TokenKind::Newline,
                RawToken::Import => TokenKind::Import,
                RawToken::True => TokenKind::True,
                RawToken::False => TokenKind::False,
                RawToken::Int => {
                    let digits = slice.replace('_', "");
                    let value = digits
                        .parse::<i64>()
                        .map_err(|_| ParseError::InvalidNumber { span })?;
                    TokenKind::Int(value)
                }
                RawToken::Float => {
                    let digits = slice.replace('_', "");
                    let value = digits
                        .parse::<f64>()
                        .map_err(|_| ParseError::InvalidNumber { span })?;
                    TokenKind::Float(value)
                }
                RawToken::Str => {
                    let unescaped = unescape_string(&slice[1..slice.len() - 1], span)?;
                    TokenKind::Str(self.interner.intern(&unescaped))
                }
                RawToken::Ident => TokenKind::Ident(self.interner.intern(slice)),
                RawToken::EqEq => TokenKind::EqEq,
                RawToken::NotEq => TokenKind::NotEq,
                RawToken::Le => TokenKind::Le,
                RawToken::Ge => TokenKind::Ge,
                RawToken::Assign => TokenKind::Assign,
                RawToken::Lt => TokenKind::Lt,
                RawToken::Gt => TokenKind::Gt,
                RawToken::Plus => TokenKind::Plus,
                RawToken::Minus => TokenKind::Minus,
                RawToken::Star => TokenKind::Star,
                RawToken::Slash => TokenKind::Slash,
                RawToken::Percent => TokenKind::Percent,
                RawToken::Bang => TokenKind::Bang,
                RawToken::Dot => TokenKind::Dot,
                RawToken::LParen => TokenKind::LParen,
                RawToken::RParen => TokenKind::RParen,
                RawToken::Semi => TokenKind::Semi,
            };
            tokens.push(Token::new(kind, span));
        }

        Ok(tokens)
    }
}

/// Process escape sequences in a string literal body.
fn unescape_string(body: &str, span: Span) -> Result<String, ParseError> {
    let mut out = String::with_capacity(body.len());
    let mut chars = body.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('r') => out.push('\r'),
            Some('\\') => out.push('\\'),
            Some('"') => out.push('"'),
            Some('0') => out.push('\0'),
            _ => return Err(ParseError::InvalidEscape { span }),
        }
    }
    Ok(out)
}
