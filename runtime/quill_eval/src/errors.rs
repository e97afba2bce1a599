//! Evaluation errors.

use thiserror::Error;

use quill_syntax::ParseError;

/// Result type for evaluation.
pub type EvalResult<T> = Result<T, EvalError>;

/// Errors produced while executing Quill source.
#[derive(Debug, Error)]
pub enum EvalError {
    /// The source failed to lex or parse.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// An identifier was read before being bound.
    #[error("undefined variable `{0}`")]
    UndefinedVariable(String),

    /// A binary operator was applied to incompatible operand types.
    #[error("cannot apply `{op}` to `{left}` and `{right}`")]
    InvalidBinaryOp {
        op: &'static str,
        left: &'static str,
        right: &'static str,
    },

    /// A unary operator was applied to an incompatible operand type.
    #[error("cannot apply unary `{op}` to `{operand}`")]
    InvalidUnaryOp {
        op: &'static str,
        operand: &'static str,
    },

    /// Integer division by zero.
    #[error("division by zero")]
    DivisionByZero,

    /// Integer modulo by zero.
    #[error("modulo by zero")]
    ModuloByZero,

    /// Attribute lookup on a module missed.
    #[error("module `{module}` has no attribute `{attr}`")]
    NoAttribute { module: String, attr: String },

    /// Attribute access on a value that has no namespace.
    #[error("`{0}` value has no attributes")]
    NotANamespace(&'static str),

    /// An `import` statement failed; the message carries the importer's
    /// own diagnostic.
    #[error("import failed: {0}")]
    Import(String),

    /// An `import` statement ran in a context with no importer installed.
    #[error("imports are not available in this context")]
    ImportUnavailable,
}
