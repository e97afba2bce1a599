//! Recursive-descent parser for Quill.
//!
//! Grammar (statements separated by newlines or `;`):
//!
//! ```text
//! program    := (stmt? terminator)* stmt?
//! stmt       := "import" ident ("." ident)*
//!             | ident "=" expr
//!             | expr
//! expr       := comparison
//! comparison := additive (("==" | "!=" | "<" | "<=" | ">" | ">=") additive)*
//! additive   := term (("+" | "-") term)*
//! term       := unary (("*" | "/" | "%") unary)*
//! unary      := ("-" | "!") unary | postfix
//! postfix    := atom ("." ident)*
//! atom       := int | float | string | "true" | "false" | ident | "(" expr ")"
//! ```

use quill_ir::{
    BinaryOp, Expr, ExprArena, ExprId, ExprKind, ImportPath, Name, Program, Span, Stmt,
    StringInterner, UnaryOp,
};

use super::{Lexer, ParseError, Token, TokenKind};

/// Lex and parse a complete source unit.
pub fn parse_program(source: &str, interner: &StringInterner) -> Result<Program, ParseError> {
    let tokens = Lexer::new(source, interner).lex_all()?;
    Parser::new(&tokens).parse()
}

/// Parser over a lexed token slice.
pub struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
    arena: ExprArena,
}

impl<'a> Parser<'a> {
    /// Create a parser over `tokens`.
    pub fn new(tokens: &'a [Token]) -> Self {
        Parser {
            tokens,
            pos: 0,
            arena: ExprArena::new(),
        }
    }

    /// Parse the token stream into a program.
    pub fn parse(mut self) -> Result<Program, ParseError> {
        let mut stmts = Vec::new();

        loop {
            self.skip_terminators();
            if self.peek().is_none() {
                break;
            }
            stmts.push(self.parse_stmt()?);

            // A statement must be followed by a terminator or end of input
            match self.peek() {
                None => break,
                Some(t) if is_terminator(&t.kind) => {}
                Some(t) => {
                    return Err(ParseError::UnexpectedToken {
                        found: t.kind.describe(),
                        expected: "newline or `;`",
                        span: t.span,
                    })
                }
            }
        }

        Ok(Program {
            stmts,
            arena: self.arena,
        })
    }

    fn parse_stmt(&mut self) -> Result<Stmt, ParseError> {
        match self.peek().map(|t| t.kind.clone()) {
            Some(TokenKind::Import) => self.parse_import(),
            Some(TokenKind::Ident(name)) if self.peek_kind_at(1) == Some(&TokenKind::Assign) => {
                let start = self.advance_span();
                self.advance(); // consume `=`
                let value = self.parse_expr()?;
                let span = start.to(self.arena.get(value).span);
                Ok(Stmt::Assign { name, value, span })
            }
            Some(_) => {
                let expr = self.parse_expr()?;
                Ok(Stmt::Expr(expr))
            }
            None => Err(ParseError::UnexpectedEof {
                expected: "statement",
            }),
        }
    }

    fn parse_import(&mut self) -> Result<Stmt, ParseError> {
        let start = self.advance_span(); // consume `import`
        let mut segments = vec![self.expect_ident("module name")?];
        let mut end = start;

        while self.peek_kind() == Some(&TokenKind::Dot) {
            self.advance();
            segments.push(self.expect_ident("module name segment")?);
        }
        if let Some(prev) = self.tokens.get(self.pos.saturating_sub(1)) {
            end = prev.span;
        }

        Ok(Stmt::Import {
            path: ImportPath { segments },
            span: start.to(end),
        })
    }

    fn parse_expr(&mut self) -> Result<ExprId, ParseError> {
        self.parse_comparison()
    }

    fn parse_comparison(&mut self) -> Result<ExprId, ParseError> {
        let mut left = self.parse_additive()?;
        while let Some(op) = self.peek_kind().and_then(comparison_op) {
            self.advance();
            let right = self.parse_additive()?;
            left = self.alloc_binary(left, op, right);
        }
        Ok(left)
    }

    fn parse_additive(&mut self) -> Result<ExprId, ParseError> {
        let mut left = self.parse_term()?;
        loop {
            let op = match self.peek_kind() {
                Some(TokenKind::Plus) => BinaryOp::Add,
                Some(TokenKind::Minus) => BinaryOp::Sub,
                _ => break,
            };
            self.advance();
            let right = self.parse_term()?;
            left = self.alloc_binary(left, op, right);
        }
        Ok(left)
    }

    fn parse_term(&mut self) -> Result<ExprId, ParseError> {
        let mut left = self.parse_unary()?;
        loop {
            let op = match self.peek_kind() {
                Some(TokenKind::Star) => BinaryOp::Mul,
                Some(TokenKind::Slash) => BinaryOp::Div,
                Some(TokenKind::Percent) => BinaryOp::Mod,
                _ => break,
            };
            self.advance();
            let right = self.parse_unary()?;
            left = self.alloc_binary(left, op, right);
        }
        Ok(left)
    }

    fn parse_unary(&mut self) -> Result<ExprId, ParseError> {
        let op = match self.peek_kind() {
            Some(TokenKind::Minus) => Some(UnaryOp::Neg),
            Some(TokenKind::Bang) => Some(UnaryOp::Not),
            _ => None,
        };
        if let Some(op) = op {
            let start = self.advance_span();
            let operand = self.parse_unary()?;
            let span = start.to(self.arena.get(operand).span);
            return Ok(self.arena.alloc(Expr {
                kind: ExprKind::Unary { op, operand },
                span,
            }));
        }
        self.parse_postfix()
    }

    fn parse_postfix(&mut self) -> Result<ExprId, ParseError> {
        let mut expr = self.parse_atom()?;
        while self.peek_kind() == Some(&TokenKind::Dot) {
            self.advance();
            let name = self.expect_ident("attribute name")?;
            let start = self.arena.get(expr).span;
            let end = self.tokens[self.pos - 1].span;
            expr = self.arena.alloc(Expr {
                kind: ExprKind::Attr {
                    receiver: expr,
                    name,
                },
                span: start.to(end),
            });
        }
        Ok(expr)
    }

    fn parse_atom(&mut self) -> Result<ExprId, ParseError> {
        let token = self
            .peek()
            .cloned()
            .ok_or(ParseError::UnexpectedEof {
                expected: "expression",
            })?;

        let kind = match token.kind {
            TokenKind::Int(n) => ExprKind::Int(n),
            TokenKind::Float(f) => ExprKind::Float(f),
            TokenKind::Str(s) => ExprKind::Str(s),
            TokenKind::True => ExprKind::Bool(true),
            TokenKind::False => ExprKind::Bool(false),
            TokenKind::Ident(name) => ExprKind::Ident(name),
            TokenKind::LParen => {
                self.advance();
                let inner = self.parse_expr()?;
                let close = self.peek().cloned();
                match close {
                    Some(t) if t.kind == TokenKind::RParen => {
                        self.advance();
                        // Widen the span to include the parentheses
                        let span = token.span.to(t.span);
                        let inner_expr = self.arena.get(inner).clone();
                        return Ok(self.arena.alloc(Expr {
                            kind: inner_expr.kind,
                            span,
                        }));
                    }
                    Some(t) => {
                        return Err(ParseError::UnexpectedToken {
                            found: t.kind.describe(),
                            expected: "`)`",
                            span: t.span,
                        })
                    }
                    None => return Err(ParseError::UnexpectedEof { expected: "`)`" }),
                }
            }
            other => {
                return Err(ParseError::UnexpectedToken {
                    found: other.describe(),
                    expected: "expression",
                    span: token.span,
                })
            }
        };

        self.advance();
        Ok(self.arena.alloc(Expr {
            kind,
            span: token.span,
        }))
    }

    fn alloc_binary(&mut self, left: ExprId, op: BinaryOp, right: ExprId) -> ExprId {
        let span = self.arena.get(left).span.to(self.arena.get(right).span);
        self.arena.alloc(Expr {
            kind: ExprKind::Binary { left, op, right },
            span,
        })
    }

    fn expect_ident(&mut self, expected: &'static str) -> Result<Name, ParseError> {
        match self.peek() {
            Some(t) => {
                if let TokenKind::Ident(name) = t.kind {
                    self.advance();
                    Ok(name)
                } else {
                    Err(ParseError::UnexpectedToken {
                        found: t.kind.describe(),
                        expected,
                        span: t.span,
                    })
                }
            }
            None => Err(ParseError::UnexpectedEof { expected }),
        }
    }

    fn skip_terminators(&mut self) {
        while self.peek_kind().is_some_and(is_terminator) {
            self.advance();
        }
    }

    #[inline]
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    #[inline]
    fn peek_kind(&self) -> Option<&TokenKind> {
        self.peek().map(|t| &t.kind)
    }

    #[inline]
    fn peek_kind_at(&self, offset: usize) -> Option<&TokenKind> {
        self.tokens.get(self.pos + offset).map(|t| &t.kind)
    }

    #[inline]
    fn advance(&mut self) {
        self.pos += 1;
    }

    /// Advance past the current token, returning its span.
    fn advance_span(&mut self) -> Span {
        let span = self.peek().map(|t| t.span).unwrap_or_default();
        self.advance();
        span
    }
}

fn is_terminator(kind: &TokenKind) -> bool {
    matches!(kind, TokenKind::Newline | TokenKind::Semi)
}

fn comparison_op(kind: &TokenKind) -> Option<BinaryOp> {
    match kind {
        TokenKind::EqEq => Some(BinaryOp::Eq),
        TokenKind::NotEq => Some(BinaryOp::Ne),
        TokenKind::Lt => Some(BinaryOp::Lt),
        TokenKind::Le => Some(BinaryOp::Le),
        TokenKind::Gt => Some(BinaryOp::Gt),
        TokenKind::Ge => Some(BinaryOp::Ge),
        _ => None,
    }
}
