//! AST types for Quill source.
//!
//! Expressions live in an arena and are referenced by `ExprId`, so statements
//! and nested expressions stay `Copy`-cheap while the tree is walked.

use super::{Name, Span, StringInterner};

/// Index of an expression in an [`ExprArena`].
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[repr(transparent)]
pub struct ExprId(u32);

impl ExprId {
    /// Get the raw index.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// Arena of expressions for one parsed program.
#[derive(Debug, Default)]
pub struct ExprArena {
    exprs: Vec<Expr>,
}

impl ExprArena {
    /// Create an empty arena.
    pub fn new() -> Self {
        ExprArena { exprs: Vec::new() }
    }

    /// Allocate an expression, returning its id.
    pub fn alloc(&mut self, expr: Expr) -> ExprId {
        let id = u32::try_from(self.exprs.len()).unwrap_or_else(|_| {
            // 4 billion expressions in one cell is not a real program
            panic!("expression arena overflow")
        });
        self.exprs.push(expr);
        ExprId(id)
    }

    /// Get an expression by id.
    #[inline]
    pub fn get(&self, id: ExprId) -> &Expr {
        &self.exprs[id.index()]
    }

    /// Number of allocated expressions.
    pub fn len(&self) -> usize {
        self.exprs.len()
    }

    /// Whether the arena is empty.
    pub fn is_empty(&self) -> bool {
        self.exprs.is_empty()
    }
}

/// A parsed code unit: ordered statements plus their expression arena.
#[derive(Debug, Default)]
pub struct Program {
    /// Statements in source order.
    pub stmts: Vec<Stmt>,
    /// Arena holding every expression the statements reference.
    pub arena: ExprArena,
}

/// A single statement.
#[derive(Debug, Clone)]
pub enum Stmt {
    /// `name = expr` - define or rebind `name` in the target namespace.
    Assign {
        name: Name,
        value: ExprId,
        span: Span,
    },
    /// `import a.b.C` - resolve a module and bind its final segment.
    Import { path: ImportPath, span: Span },
    /// A bare expression, evaluated for its value or effect.
    Expr(ExprId),
}

/// Dotted module path from an `import` statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportPath {
    /// Dot-separated segments, never empty.
    pub segments: Vec<Name>,
}

impl ImportPath {
    /// The name the import binds: the final dot-segment.
    pub fn binding(&self) -> Name {
        // A parsed ImportPath always has at least one segment
        *self.segments.last().unwrap_or(&Name::EMPTY)
    }

    /// Render the path as its dotted source form.
    pub fn dotted(&self, interner: &StringInterner) -> String {
        let parts: Vec<&str> = self.segments.iter().map(|s| interner.lookup(*s)).collect();
        parts.join(".")
    }
}

/// An expression with its source span.
#[derive(Debug, Clone)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
}

/// Expression kinds.
#[derive(Debug, Clone)]
pub enum ExprKind {
    /// Integer literal.
    Int(i64),
    /// Float literal.
    Float(f64),
    /// Boolean literal.
    Bool(bool),
    /// String literal (interned).
    Str(Name),
    /// Identifier reference.
    Ident(Name),
    /// Unary operation.
    Unary { op: UnaryOp, operand: ExprId },
    /// Binary operation.
    Binary {
        left: ExprId,
        op: BinaryOp,
        right: ExprId,
    },
    /// Attribute access: `receiver.name` (module attributes).
    Attr { receiver: ExprId, name: Name },
}

/// Binary operators.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
}

/// Unary operators.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum UnaryOp {
    /// Arithmetic negation: `-x`.
    Neg,
    /// Logical not: `!x`.
    Not,
}
