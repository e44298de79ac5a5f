//! Symbolic algebra over `f64` constants and named variables.
//!
//! Expressions are immutable [`MathOp`] trees. They can be parsed from fully parenthesized text,
//! differentiated, simplified, evaluated under a set of variable bindings, and rendered back.
//!
//! ```
//! use std::collections::HashMap;
//!
//! let expr = mathsym::parse("(x * (x + 3))").unwrap();
//! let slope = expr.derivative("x").simplify().unwrap();
//! assert_eq!(slope.to_string(), "x + x + 3");
//!
//! let bindings = HashMap::from([("x".to_string(), 2.0)]);
//! assert_eq!(mathsym::evaluate(&slope, &bindings).unwrap(), 7.0);
//! ```

mod derive;
pub mod error;
pub mod eval;
pub mod ops;
pub mod parser;
pub mod render;
mod simplify;
pub mod tokenizer;

pub use error::{Error, Result};
pub use eval::evaluate;
pub use ops::{add, div, mul, num, sub, var, BinOp, MathOp, Precedence};
pub use parser::{parse, sym};
pub use tokenizer::tokenize;
