use crate::ops::{add, div, mul, sub, BinOp, MathOp};

impl MathOp {
    /// Symbolic derivative with respect to the variable `wrt`.
    ///
    /// The result is not simplified; pass it through [`MathOp::simplify`] for a compact form.
    pub fn derivative(&self, wrt: &str) -> MathOp {
        match self {
            MathOp::Num(_) => MathOp::Num(0.0),
            MathOp::Var(name) => MathOp::Num(if name == wrt { 1.0 } else { 0.0 }),
            MathOp::Binary { op, lhs, rhs } => {
                let (l, r) = (lhs.as_ref(), rhs.as_ref());
                match op {
                    BinOp::Add => add(l.derivative(wrt), r.derivative(wrt)),
                    BinOp::Sub => sub(l.derivative(wrt), r.derivative(wrt)),
                    // l * r' + r * l'
                    BinOp::Mul => add(
                        mul(l.clone(), r.derivative(wrt)),
                        mul(r.clone(), l.derivative(wrt)),
                    ),
                    // (r * l' - l * r') / (r * r)
                    BinOp::Div => div(
                        sub(
                            mul(r.clone(), l.derivative(wrt)),
                            mul(l.clone(), r.derivative(wrt)),
                        ),
                        mul(r.clone(), r.clone()),
                    ),
                }
            }
        }
    }
}
