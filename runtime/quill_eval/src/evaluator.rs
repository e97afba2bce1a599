//! Tree-walking evaluator.
//!
//! Executes a parsed [`Program`] against a mutable namespace. Statements
//! run in order; the evaluator's value is the value of the last bare
//! expression statement, or [`Value::Unit`] if there is none.

use std::rc::Rc;

use quill_ir::{BinaryOp, ExprId, ExprKind, Name, Program, Stmt, StringInterner, UnaryOp};

use crate::errors::{EvalError, EvalResult};
use crate::importer::Importer;
use crate::namespace::SharedNs;
use crate::value::Value;

/// Evaluates one program against a namespace.
pub struct Evaluator<'a> {
    interner: &'a StringInterner,
    program: &'a Program,
    ns: &'a SharedNs,
    importer: &'a dyn Importer,
}

impl<'a> Evaluator<'a> {
    pub fn new(
        interner: &'a StringInterner,
        program: &'a Program,
        ns: &'a SharedNs,
        importer: &'a dyn Importer,
    ) -> Self {
        Evaluator {
            interner,
            program,
            ns,
            importer,
        }
    }

    /// Run every statement. Returns the value of the last bare expression,
    /// or `Unit` if the program ends with a binding.
    pub fn run(&self) -> EvalResult<Value> {
        let mut last = Value::Unit;
        for stmt in &self.program.stmts {
            match stmt {
                Stmt::Assign { name, value, .. } => {
                    let v = self.eval_expr(*value)?;
                    self.ns.borrow_mut().define(*name, v);
                    last = Value::Unit;
                }
                Stmt::Import { path, .. } => {
                    let dotted = path.dotted(self.interner);
                    // The importer may re-enter execution; hold no borrows
                    // across this call.
                    let module = self.importer.import(&dotted)?;
                    self.ns.borrow_mut().define(path.binding(), module);
                    last = Value::Unit;
                }
                Stmt::Expr(id) => {
                    last = self.eval_expr(*id)?;
                }
            }
        }
        Ok(last)
    }

    fn eval_expr(&self, id: ExprId) -> EvalResult<Value> {
        let expr = self.program.arena.get(id);
        match &expr.kind {
            ExprKind::Int(n) => Ok(Value::Int(*n)),
            ExprKind::Float(x) => Ok(Value::Float(*x)),
            ExprKind::Bool(b) => Ok(Value::Bool(*b)),
            ExprKind::Str(name) => Ok(Value::Str(Rc::new(self.interner.lookup(*name).to_string()))),
            ExprKind::Ident(name) => self.lookup(*name),
            ExprKind::Unary { op, operand } => {
                let v = self.eval_expr(*operand)?;
                eval_unary(*op, &v)
            }
            ExprKind::Binary { left, op, right } => {
                let lhs = self.eval_expr(*left)?;
                let rhs = self.eval_expr(*right)?;
                eval_binary(*op, &lhs, &rhs)
            }
            ExprKind::Attr { receiver, name } => {
                let recv = self.eval_expr(*receiver)?;
                self.eval_attr(&recv, *name)
            }
        }
    }

    fn lookup(&self, name: Name) -> EvalResult<Value> {
        self.ns.borrow().get(name).ok_or_else(|| {
            EvalError::UndefinedVariable(self.interner.lookup(name).to_string())
        })
    }

    fn eval_attr(&self, recv: &Value, name: Name) -> EvalResult<Value> {
        match recv {
            Value::Module(m) => m.ns.borrow().get(name).ok_or_else(|| EvalError::NoAttribute {
                module: m.name.to_string(),
                attr: self.interner.lookup(name).to_string(),
            }),
            other => Err(EvalError::NotANamespace(other.type_name())),
        }
    }
}

fn eval_unary(op: UnaryOp, v: &Value) -> EvalResult<Value> {
    match (op, v) {
        (UnaryOp::Neg, Value::Int(n)) => Ok(Value::Int(-n)),
        (UnaryOp::Neg, Value::Float(x)) => Ok(Value::Float(-x)),
        (UnaryOp::Not, Value::Bool(b)) => Ok(Value::Bool(!b)),
        (op, v) => Err(EvalError::InvalidUnaryOp {
            op: unary_op_str(op),
            operand: v.type_name(),
        }),
    }
}

fn eval_binary(op: BinaryOp, lhs: &Value, rhs: &Value) -> EvalResult<Value> {
    use BinaryOp::*;
    use Value::*;

    match (lhs, rhs) {
        (Int(a), Int(b)) => eval_int_op(op, *a, *b),
        (Float(a), Float(b)) => Ok(eval_float_op(op, *a, *b)),
        // Mixed int/float arithmetic widens to float
        (Int(a), Float(b)) => Ok(eval_float_op(op, *a as f64, *b)),
        (Float(a), Int(b)) => Ok(eval_float_op(op, *a, *b as f64)),
        (Bool(a), Bool(b)) => match op {
            Eq => Ok(Bool(a == b)),
            Ne => Ok(Bool(a != b)),
            _ => Err(type_mismatch(op, lhs, rhs)),
        },
        (Str(a), Str(b)) => match op {
            Add => Ok(Value::string(format!("{a}{b}"))),
            Eq => Ok(Bool(a == b)),
            Ne => Ok(Bool(a != b)),
            _ => Err(type_mismatch(op, lhs, rhs)),
        },
        _ => match op {
            Eq => Ok(Bool(lhs == rhs)),
            Ne => Ok(Bool(lhs != rhs)),
            _ => Err(type_mismatch(op, lhs, rhs)),
        },
    }
}

fn eval_int_op(op: BinaryOp, a: i64, b: i64) -> EvalResult<Value> {
    use BinaryOp::*;
    Ok(match op {
        Add => Value::Int(a.wrapping_add(b)),
        Sub => Value::Int(a.wrapping_sub(b)),
        Mul => Value::Int(a.wrapping_mul(b)),
        Div => {
            if b == 0 {
                return Err(EvalError::DivisionByZero);
            }
            Value::Int(a.wrapping_div(b))
        }
        Mod => {
            if b == 0 {
                return Err(EvalError::ModuloByZero);
            }
            Value::Int(a.wrapping_rem(b))
        }
        Eq => Value::Bool(a == b),
        Ne => Value::Bool(a != b),
        Lt => Value::Bool(a < b),
        Le => Value::Bool(a <= b),
        Gt => Value::Bool(a > b),
        Ge => Value::Bool(a >= b),
    })
}

fn eval_float_op(op: BinaryOp, a: f64, b: f64) -> Value {
    use BinaryOp::*;
    match op {
        Add => Value::Float(a + b),
        Sub => Value::Float(a - b),
        Mul => Value::Float(a * b),
        Div => Value::Float(a / b),
        Mod => Value::Float(a % b),
        Eq => Value::Bool(a == b),
        Ne => Value::Bool(a != b),
        Lt => Value::Bool(a < b),
        Le => Value::Bool(a <= b),
        Gt => Value::Bool(a > b),
        Ge => Value::Bool(a >= b),
    }
}

fn type_mismatch(op: BinaryOp, lhs: &Value, rhs: &Value) -> EvalError {
    EvalError::InvalidBinaryOp {
        op: binary_op_str(op),
        left: lhs.type_name(),
        right: rhs.type_name(),
    }
}

fn binary_op_str(op: BinaryOp) -> &'static str {
    use BinaryOp::*;
    match op {
        Add => "+",
        Sub => "-",
        Mul => "*",
        Div => "/",
        Mod => "%",
        Eq => "==",
        Ne => "!=",
        Lt => "<",
        Le => "<=",
        Gt => ">",
        Ge => ">=",
    }
}

fn unary_op_str(op: UnaryOp) -> &'static str {
    match op {
        UnaryOp::Neg => "-",
        UnaryOp::Not => "!",
    }
}
