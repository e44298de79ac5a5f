use crate::error::{Error, Result};
use crate::ops::MathOp;
use crate::tokenizer::{MathToken, TokenKind};

/// Recursive-descent parser for the fully parenthesized expression language:
///
/// ```text
/// Expr := Variable | Number | '(' Expr Operator Expr ')'
/// ```
#[derive(Debug)]
pub struct Parser {
    tokens: Vec<MathToken>,
    cursor: usize,
    input_len: usize,
}

impl Parser {
    pub fn new(input: &str) -> Result<Self> {
        Ok(Self::from_tokens(input, MathToken::try_new(input)?))
    }

    fn from_tokens(input: &str, tokens: Vec<MathToken>) -> Self {
        Self {
            tokens,
            cursor: 0,
            input_len: input.len(),
        }
    }

    pub fn tokens(&self) -> &[MathToken] {
        &self.tokens
    }

    fn peek(&self) -> Option<&MathToken> {
        self.tokens.get(self.cursor)
    }

    fn pop(&mut self) -> Option<&MathToken> {
        let token = self.tokens.get(self.cursor)?;
        self.cursor += 1;
        Some(token)
    }

    fn end_span(&self) -> std::ops::Range<usize> {
        self.input_len..self.input_len
    }

    fn parse_expr(&mut self) -> Result<MathOp> {
        let end = self.end_span();
        let Some(MathToken { kind, span }) = self.pop().cloned() else {
            return Err(Error::malformed("unexpected end of input", end));
        };

        match kind {
            TokenKind::Var(name) => Ok(MathOp::Var(name)),
            TokenKind::Num(x) => Ok(MathOp::Num(x)),
            TokenKind::Open => {
                let lhs = self.parse_expr()?;
                let op = match self.pop() {
                    Some(MathToken {
                        kind: TokenKind::Op(op),
                        ..
                    }) => *op,
                    Some(token) => {
                        return Err(Error::malformed("expected operator", token.span.clone()))
                    }
                    None => return Err(Error::malformed("expected operator", end)),
                };
                let rhs = self.parse_expr()?;
                match self.pop() {
                    Some(MathToken {
                        kind: TokenKind::Close,
                        ..
                    }) => Ok(MathOp::binary(op, lhs, rhs)),
                    Some(token) => Err(Error::malformed(
                        "expected closing bracket",
                        token.span.clone(),
                    )),
                    None => Err(Error::malformed("expected closing bracket", end)),
                }
            }
            TokenKind::Close | TokenKind::Op(_) => Err(Error::malformed(
                "expected number, variable or open bracket",
                span,
            )),
        }
    }

    /// Parses one expression and requires that it consumes every token.
    pub fn parse(&mut self) -> Result<MathOp> {
        if self.tokens.is_empty() {
            return Err(Error::malformed("no input provided", self.end_span()));
        }

        let expr = self.parse_expr()?;
        if let Some(trailing) = self.peek() {
            let start = trailing.span.start;
            let end = self.tokens.last().map_or(start, |t| t.span.end);
            return Err(Error::malformed("unexpected trailing input", start..end));
        }
        Ok(expr)
    }
}

pub fn parse(input: &str) -> Result<MathOp> {
    Parser::new(input)?.parse()
}

/// Alias of [`parse`].
pub fn sym(input: &str) -> Result<MathOp> {
    parse(input)
}
