//! Bottom-up constant folding and identity elimination.
//!
//! Each binary node first simplifies both children, then tries its operator's rules in order and
//! takes the first that matches:
//!
//! | Operator | Rule                   | Result         |
//! |----------|------------------------|----------------|
//! | `+`      | `a + b` (constants)    | `a+b`          |
//! | `+`      | `0 + e`                | `e`            |
//! | `+`      | `e + 0`                | `e`            |
//! | `-`      | `a - b` (constants)    | `a-b`          |
//! | `-`      | `e - 0`                | `e`            |
//! | `*`      | `a * b` (constants)    | `a*b`          |
//! | `*`      | `0 * e`, `e * 0`       | `0`            |
//! | `*`      | `1 * e`                | `e`            |
//! | `*`      | `e * 1`                | `e`            |
//! | `/`      | `a / b` (constants)    | `a/b`          |
//! | `/`      | `0 / e`                | `0`            |
//! | `/`      | `e / 1`                | `e`            |

use crate::error::Result;
use crate::eval::ast_interpret::apply;
use crate::ops::{BinOp, MathOp};

impl MathOp {
    /// Returns a simplified copy of this expression.
    ///
    /// Fails with [`Error::DivisionByZero`](crate::Error::DivisionByZero) when folding a constant
    /// division whose divisor is zero. The `0 * e` and `0 / e` rules drop `e` without evaluating
    /// it, so a subterm that would fail under some bindings can be removed.
    pub fn simplify(&self) -> Result<MathOp> {
        let MathOp::Binary { op, lhs, rhs } = self else {
            return Ok(self.clone());
        };
        let lhs = lhs.simplify()?;
        let rhs = rhs.simplify()?;

        if let (Some(a), Some(b)) = (lhs.as_num(), rhs.as_num()) {
            return Ok(MathOp::Num(apply(*op, a, b)?));
        }

        let (l, r) = (lhs.as_num(), rhs.as_num());
        Ok(match op {
            BinOp::Add if l == Some(0.0) => rhs,
            BinOp::Add if r == Some(0.0) => lhs,
            BinOp::Sub if r == Some(0.0) => lhs,
            BinOp::Mul if l == Some(0.0) || r == Some(0.0) => MathOp::Num(0.0),
            BinOp::Mul if l == Some(1.0) => rhs,
            BinOp::Mul if r == Some(1.0) => lhs,
            BinOp::Div if l == Some(0.0) => MathOp::Num(0.0),
            BinOp::Div if r == Some(1.0) => lhs,
            _ => MathOp::binary(*op, lhs, rhs),
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use std::collections::HashMap;

    use super::*;
    use crate::error::Error;
    use crate::eval::evaluate;
    use crate::ops::{add, div, mul, num, sub, var};
    use crate::parser::parse;

    fn simplified(input: &str) -> MathOp {
        parse(input).unwrap().simplify().unwrap()
    }

    #[test]
    fn leaves_are_unchanged() {
        assert_eq!(var("x").simplify().unwrap(), var("x"));
        assert_eq!(num(2.5).simplify().unwrap(), num(2.5));
    }

    #[test]
    fn zero_times_anything() {
        assert_eq!(simplified("(0 * x)"), num(0.0));
        assert_eq!(simplified("((y + z) * 0)"), num(0.0));
    }

    #[test]
    fn additive_identity() {
        assert_eq!(simplified("(x + 0)"), var("x"));
        assert_eq!(simplified("(0 + x)"), var("x"));
        assert_eq!(simplified("(x - 0)"), var("x"));
        assert_eq!(simplified("(0 - x)"), sub(0, "x"));
    }

    #[test]
    fn multiplicative_identity() {
        assert_eq!(simplified("(1 * x)"), var("x"));
        assert_eq!(simplified("(x * 1)"), var("x"));
        assert_eq!(simplified("(x / 1)"), var("x"));
        assert_eq!(simplified("(1 / x)"), div(1, "x"));
        assert_eq!(simplified("(0 / x)"), num(0.0));
    }

    #[test]
    fn folds_constants_bottom_up() {
        assert_eq!(simplified("((2 * 3) + (4 - 1))"), num(9.0));
        assert_eq!(simplified("(3 / 2)"), num(1.5));
        assert_eq!(simplified("((x * (3 - 2)) + (0 * y))"), var("x"));
    }

    #[test]
    fn simplifies_derivative() {
        let expr = parse("(x * x)").unwrap().derivative("x");
        assert_eq!(expr.simplify().unwrap(), add("x", "x"));
        let expr = parse("((2 * x) + y)").unwrap().derivative("x");
        assert_eq!(expr.simplify().unwrap(), num(2.0));
    }

    #[test]
    fn keeps_irreducible_nodes() {
        assert_eq!(simplified("(x * (y + 2))"), mul("x", add("y", 2)));
    }

    #[test]
    fn constant_division_by_zero_fails() {
        assert_eq!(parse("(1 / 0)").unwrap().simplify(), Err(Error::DivisionByZero));
        assert_eq!(parse("(0 / 0)").unwrap().simplify(), Err(Error::DivisionByZero));
        assert_eq!(simplified("(x / 0)"), div("x", 0));
    }

    #[test]
    fn zero_rules_drop_failing_subterm() {
        let env = HashMap::from([("x".to_string(), 0.0)]);
        for input in ["(0 / x)", "(0 * (1 / x))"] {
            let expr = parse(input).unwrap();
            assert_eq!(evaluate(&expr, &env), Err(Error::DivisionByZero));
            let simplified = expr.simplify().unwrap();
            assert_eq!(simplified, num(0.0));
            assert_eq!(evaluate(&simplified, &env).unwrap(), 0.0);
        }
    }

    #[test]
    fn input_is_untouched() {
        let expr = parse("((x + 0) * 1)").unwrap();
        let before = expr.clone();
        assert_eq!(expr.simplify().unwrap(), var("x"));
        assert_eq!(expr, before);
    }
}
