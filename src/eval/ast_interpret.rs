use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::ops::{BinOp, MathOp};

use super::MathEval;

/// Tree-walking evaluator over a fixed set of variable bindings.
///
/// Division fails with [`Error::DivisionByZero`] instead of producing an infinity or NaN.
pub struct AstInterpreter<'a> {
    pub bindings: &'a HashMap<String, f64>,
}

impl<'a> AstInterpreter<'a> {
    pub fn new(bindings: &'a HashMap<String, f64>) -> Self {
        Self { bindings }
    }
}

/// Applies `op` to two numbers. Shared with constant folding so both agree on division by zero.
pub fn apply(op: BinOp, lhs: f64, rhs: f64) -> Result<f64> {
    Ok(match op {
        BinOp::Add => lhs + rhs,
        BinOp::Sub => lhs - rhs,
        BinOp::Mul => lhs * rhs,
        BinOp::Div => {
            if rhs == 0.0 {
                return Err(Error::DivisionByZero);
            }
            lhs / rhs
        }
    })
}

impl MathEval for AstInterpreter<'_> {
    fn eval(&self, ops: &MathOp) -> Result<f64> {
        match ops {
            MathOp::Num(x) => Ok(*x),
            MathOp::Var(name) => {
                self.bindings
                    .get(name)
                    .copied()
                    .ok_or_else(|| Error::UnboundVariable { name: name.clone() })
            }
            MathOp::Binary { op, lhs, rhs } => {
                let lhs = self.eval(lhs)?;
                let rhs = self.eval(rhs)?;
                apply(*op, lhs, rhs)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::eval::evaluate;
    use crate::ops::{add, div, mul, sub};
    use crate::parser::parse;

    fn bindings(pairs: &[(&str, f64)]) -> HashMap<String, f64> {
        pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    #[test]
    fn multiplies_bound_variable() {
        let expr = parse("(x * 2)").unwrap();
        assert_eq!(evaluate(&expr, &bindings(&[("x", 3.0)])).unwrap(), 6.0);
    }

    #[test]
    fn all_operators() {
        let env = bindings(&[("x", 4.0), ("y", 8.0)]);
        let expr = sub(add(mul("x", 3), div("y", "x")), 1);
        assert_eq!(evaluate(&expr, &env).unwrap(), 13.0);
    }

    #[test]
    fn division_yields_fractions() {
        let expr = div(1, 3);
        assert_relative_eq!(evaluate(&expr, &HashMap::new()).unwrap(), 1.0 / 3.0);
    }

    #[test]
    fn unbound_variable() {
        let expr = add("x", "y");
        assert_eq!(
            evaluate(&expr, &bindings(&[("x", 1.0)])),
            Err(Error::UnboundVariable {
                name: "y".to_string()
            })
        );
    }

    #[test]
    fn first_failure_wins() {
        let expr = add(div(1, 0), "q");
        assert_eq!(evaluate(&expr, &HashMap::new()), Err(Error::DivisionByZero));
    }

    #[test]
    fn division_by_zero_is_an_error() {
        let env = bindings(&[("x", 0.0)]);
        assert_eq!(evaluate(&div(5, "x"), &env), Err(Error::DivisionByZero));
        assert_eq!(evaluate(&div(0, -0.0), &env), Err(Error::DivisionByZero));
        assert_eq!(evaluate(&div("x", 2), &env).unwrap(), 0.0);
    }
}
