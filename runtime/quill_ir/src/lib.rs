//! Quill IR - interned names, spans, and AST types for the Quill runtime.
//!
//! This crate is the shared vocabulary of the runtime:
//! - `Name` / `StringInterner` / `SharedInterner`: interned identifiers
//! - `Span`: byte ranges into source text
//! - `Program`, `Stmt`, `Expr`, `ExprArena`: the parsed form of a code unit

mod ast;
mod interner;
mod name;
mod span;

pub use ast::{
    BinaryOp, Expr, ExprArena, ExprId, ExprKind, ImportPath, Program, Stmt, UnaryOp,
};
pub use interner::{InternError, SharedInterner, StringInterner};
pub use name::Name;
pub use span::Span;
