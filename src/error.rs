use std::ops::Range;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum Error {
    #[error("variable '{name}' is not bound")]
    UnboundVariable { name: String },

    #[error("division by zero")]
    DivisionByZero,

    /// The input text is not a well-formed expression. `span` is a byte range into that text.
    #[error("malformed expression: {message}")]
    MalformedExpression { message: String, span: Range<usize> },
}

impl Error {
    pub(crate) fn malformed(message: impl Into<String>, span: Range<usize>) -> Self {
        Error::MalformedExpression {
            message: message.into(),
            span,
        }
    }

    /// The offending region of the source text, if this error came from tokenizing or parsing.
    pub fn span(&self) -> Option<Range<usize>> {
        match self {
            Error::MalformedExpression { span, .. } => Some(span.clone()),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
