use std::collections::HashMap;

use crate::error::Result;
use crate::ops::MathOp;

pub mod ast_interpret;

use ast_interpret::AstInterpreter;

pub trait MathEval {
    fn eval(&self, ops: &MathOp) -> Result<f64>;
}

/// Evaluates `expr` with every variable looked up in `bindings`.
pub fn evaluate(expr: &MathOp, bindings: &HashMap<String, f64>) -> Result<f64> {
    AstInterpreter::new(bindings).eval(expr)
}
