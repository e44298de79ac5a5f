use std::fmt::{self, Display};

use crate::ops::MathOp;

/// Infix form with the fewest brackets that still reads back unambiguously, e.g. `x * (2 + 3)`.
impl Display for MathOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MathOp::Num(x) => write!(f, "{x}"),
            MathOp::Var(name) => write!(f, "{name}"),
            MathOp::Binary { op, lhs, rhs } => {
                let prec = op.precedence();
                if prec > lhs.precedence() {
                    write!(f, "({lhs})")?;
                } else {
                    write!(f, "{lhs}")?;
                }
                write!(f, " {} ", op.symbol())?;
                if prec > rhs.precedence()
                    || (op.is_left_associative_only() && prec == rhs.precedence())
                {
                    write!(f, "({rhs})")
                } else {
                    write!(f, "{rhs}")
                }
            }
        }
    }
}

/// Every binary node wrapped in brackets: the exact language [`parse`](crate::parse) accepts.
pub struct Parenthesized<'a>(pub &'a MathOp);

impl Display for Parenthesized<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            MathOp::Binary { op, lhs, rhs } => write!(
                f,
                "({} {} {})",
                Parenthesized(lhs),
                op.symbol(),
                Parenthesized(rhs)
            ),
            leaf => write!(f, "{leaf}"),
        }
    }
}

/// Constructor-style form, e.g. `Add(Var('x'), Num(2))`.
pub struct Repr<'a>(pub &'a MathOp);

impl Display for Repr<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            MathOp::Num(x) => write!(f, "Num({x})"),
            MathOp::Var(name) => write!(f, "Var('{name}')"),
            MathOp::Binary { op, lhs, rhs } => {
                write!(f, "{}({}, {})", op.name(), Repr(lhs), Repr(rhs))
            }
        }
    }
}

impl MathOp {
    pub fn parenthesized(&self) -> Parenthesized<'_> {
        Parenthesized(self)
    }

    pub fn repr(&self) -> Repr<'_> {
        Repr(self)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::ops::{add, div, mul, num, sub, var};
    use crate::parser::parse;

    #[test]
    fn leaves() {
        assert_eq!(num(3.0).to_string(), "3");
        assert_eq!(num(-2.5).to_string(), "-2.5");
        assert_eq!(var("x").to_string(), "x");
    }

    #[test]
    fn brackets_lower_precedence_child() {
        let expr = parse("(x * (2 + 3))").unwrap();
        assert_eq!(expr.to_string(), "x * (2 + 3)");
        assert_eq!(mul(add("a", "b"), "c").to_string(), "(a + b) * c");
        assert_eq!(add(mul("a", "b"), "c").to_string(), "a * b + c");
    }

    #[test]
    fn left_associated_chain_has_no_brackets() {
        assert_eq!(sub(sub("a", "b"), "c").to_string(), "a - b - c");
        assert_eq!(div(div("a", "b"), "c").to_string(), "a / b / c");
        assert_eq!(add("a", add("b", "c")).to_string(), "a + b + c");
        assert_eq!(mul("a", mul("b", "c")).to_string(), "a * b * c");
    }

    #[test]
    fn non_associative_right_child_keeps_brackets() {
        assert_eq!(sub("a", sub("b", "c")).to_string(), "a - (b - c)");
        assert_eq!(sub("a", add("b", "c")).to_string(), "a - (b + c)");
        assert_eq!(div("a", div("b", "c")).to_string(), "a / (b / c)");
        assert_eq!(div("a", mul("b", "c")).to_string(), "a / (b * c)");
        assert_eq!(sub("a", mul("b", "c")).to_string(), "a - b * c");
    }

    #[test]
    fn parenthesized_form() {
        let expr = sub(mul("x", -3), div(1.5, "y"));
        assert_eq!(expr.parenthesized().to_string(), "((x * -3) - (1.5 / y))");
        assert_eq!(var("z").parenthesized().to_string(), "z");
    }

    #[test]
    fn repr_form() {
        let expr = add("x", mul(2, "y"));
        assert_eq!(
            expr.repr().to_string(),
            "Add(Var('x'), Mul(Num(2), Var('y')))"
        );
    }
}
