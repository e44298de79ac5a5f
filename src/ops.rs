use std::ops;

/// An algebraic expression over `f64` constants and named variables.
///
/// Every node exclusively owns its children. Nothing in this crate mutates a tree in place: the
/// algorithms on `MathOp` take `&self` and build a new tree.
#[derive(Debug, Clone, PartialEq)]
pub enum MathOp {
    Num(f64),
    Var(String),
    Binary {
        op: BinOp,
        lhs: Box<MathOp>,
        rhs: Box<MathOp>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
}

/// Binding strength of a node, used only when rendering. Leaves bind tighter than any operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
    Term,
    Factor,
    Atom,
}

impl BinOp {
    pub fn precedence(self) -> Precedence {
        match self {
            BinOp::Add | BinOp::Sub => Precedence::Term,
            BinOp::Mul | BinOp::Div => Precedence::Factor,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            BinOp::Add => '+',
            BinOp::Sub => '-',
            BinOp::Mul => '*',
            BinOp::Div => '/',
        }
    }

    /// Constructor name used by the [`Repr`](crate::render::Repr) form.
    pub fn name(self) -> &'static str {
        match self {
            BinOp::Add => "Add",
            BinOp::Sub => "Sub",
            BinOp::Mul => "Mul",
            BinOp::Div => "Div",
        }
    }

    /// `-` and `/` need their right operand parenthesized at equal precedence.
    pub fn is_left_associative_only(self) -> bool {
        matches!(self, BinOp::Sub | BinOp::Div)
    }

    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '+' => Some(BinOp::Add),
            '-' => Some(BinOp::Sub),
            '*' => Some(BinOp::Mul),
            '/' => Some(BinOp::Div),
            _ => None,
        }
    }
}

impl MathOp {
    pub fn binary(op: BinOp, lhs: impl Into<MathOp>, rhs: impl Into<MathOp>) -> Self {
        MathOp::Binary {
            op,
            lhs: Box::new(lhs.into()),
            rhs: Box::new(rhs.into()),
        }
    }

    pub fn precedence(&self) -> Precedence {
        match self {
            MathOp::Num(_) | MathOp::Var(_) => Precedence::Atom,
            MathOp::Binary { op, .. } => op.precedence(),
        }
    }

    pub fn as_num(&self) -> Option<f64> {
        match self {
            MathOp::Num(x) => Some(*x),
            _ => None,
        }
    }

    /// Distinct variable names in order of first appearance, left to right.
    pub fn variables(&self) -> Vec<&str> {
        let mut names = vec![];
        self.collect_variables(&mut names);
        names
    }

    fn collect_variables<'a>(&'a self, names: &mut Vec<&'a str>) {
        match self {
            MathOp::Num(_) => {}
            MathOp::Var(name) => {
                if !names.contains(&name.as_str()) {
                    names.push(name);
                }
            }
            MathOp::Binary { lhs, rhs, .. } => {
                lhs.collect_variables(names);
                rhs.collect_variables(names);
            }
        }
    }
}

pub fn num(value: f64) -> MathOp {
    MathOp::Num(value)
}

pub fn var(name: impl Into<String>) -> MathOp {
    MathOp::Var(name.into())
}

pub fn add(lhs: impl Into<MathOp>, rhs: impl Into<MathOp>) -> MathOp {
    MathOp::binary(BinOp::Add, lhs, rhs)
}

pub fn sub(lhs: impl Into<MathOp>, rhs: impl Into<MathOp>) -> MathOp {
    MathOp::binary(BinOp::Sub, lhs, rhs)
}

pub fn mul(lhs: impl Into<MathOp>, rhs: impl Into<MathOp>) -> MathOp {
    MathOp::binary(BinOp::Mul, lhs, rhs)
}

pub fn div(lhs: impl Into<MathOp>, rhs: impl Into<MathOp>) -> MathOp {
    MathOp::binary(BinOp::Div, lhs, rhs)
}

impl From<f64> for MathOp {
    fn from(value: f64) -> Self {
        MathOp::Num(value)
    }
}

impl From<i32> for MathOp {
    fn from(value: i32) -> Self {
        MathOp::Num(value.into())
    }
}

impl From<i64> for MathOp {
    fn from(value: i64) -> Self {
        MathOp::Num(value as f64)
    }
}

impl From<&str> for MathOp {
    fn from(name: &str) -> Self {
        MathOp::Var(name.to_string())
    }
}

impl From<String> for MathOp {
    fn from(name: String) -> Self {
        MathOp::Var(name)
    }
}

impl From<char> for MathOp {
    fn from(name: char) -> Self {
        MathOp::Var(name.to_string())
    }
}

macro_rules! impl_operator {
    ($trait:ident, $method:ident, $op:expr) => {
        impl<T: Into<MathOp>> ops::$trait<T> for MathOp {
            type Output = MathOp;

            fn $method(self, rhs: T) -> MathOp {
                MathOp::binary($op, self, rhs)
            }
        }

        impl_operator!(@raw_lhs $trait, $method, $op, f64, i32, i64, &str, String);
    };
    (@raw_lhs $trait:ident, $method:ident, $op:expr, $($lhs:ty),*) => {
        $(
            impl ops::$trait<MathOp> for $lhs {
                type Output = MathOp;

                fn $method(self, rhs: MathOp) -> MathOp {
                    MathOp::binary($op, self, rhs)
                }
            }
        )*
    };
}

impl_operator!(Add, add, BinOp::Add);
impl_operator!(Sub, sub, BinOp::Sub);
impl_operator!(Mul, mul, BinOp::Mul);
impl_operator!(Div, div, BinOp::Div);
