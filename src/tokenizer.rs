use std::ops::Range;

use crate::error::{Error, Result};
use crate::ops::BinOp;

#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    Open,
    Close,
    Op(BinOp),
    Num(f64),
    Var(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct MathToken {
    pub kind: TokenKind,
    pub span: Range<usize>,
}

impl MathToken {
    pub fn try_new(input: &str) -> Result<Vec<MathToken>> {
        let mut tokens = vec![];
        let mut chars = input.char_indices().peekable();
        while let Some(&(start, current)) = chars.peek() {
            if current.is_whitespace() {
                chars.next();
                continue;
            }

            let negative_literal = current == '-'
                && matches!(
                    input[start + 1..].chars().next(),
                    Some(next) if next.is_ascii_digit() || next == '.'
                );

            if !negative_literal {
                if let Some(trivial) = match current {
                    '(' => Some(TokenKind::Open),
                    ')' => Some(TokenKind::Close),
                    _ => BinOp::from_symbol(current).map(TokenKind::Op),
                } {
                    chars.next();
                    tokens.push(MathToken {
                        kind: trivial,
                        span: start..start + 1,
                    });
                    continue;
                }
            }

            if current.is_ascii_alphabetic() {
                let end = Self::take_while(&mut chars, input, |c| c.is_ascii_alphabetic());
                tokens.push(MathToken {
                    kind: TokenKind::Var(input[start..end].to_string()),
                    span: start..end,
                });
                continue;
            }

            if negative_literal || current.is_ascii_digit() || current == '.' {
                chars.next();
                let end = Self::take_while(&mut chars, input, |c| c.is_ascii_digit() || c == '.');
                let Ok(num) = input[start..end].parse() else {
                    return Err(Error::malformed(
                        format!("invalid number '{}'", &input[start..end]),
                        start..end,
                    ));
                };
                tokens.push(MathToken {
                    kind: TokenKind::Num(num),
                    span: start..end,
                });
                continue;
            }

            return Err(Error::malformed(
                format!("unexpected character '{current}'"),
                start..start + current.len_utf8(),
            ));
        }
        Ok(tokens)
    }

    /// Advances past every char matching `pred` and returns the byte offset just after the run.
    fn take_while(
        chars: &mut std::iter::Peekable<std::str::CharIndices<'_>>,
        input: &str,
        pred: impl Fn(char) -> bool,
    ) -> usize {
        while let Some(&(idx, c)) = chars.peek() {
            if !pred(c) {
                return idx;
            }
            chars.next();
        }
        input.len()
    }
}

/// Splits `input` into tokens, dropping their source positions.
pub fn tokenize(input: &str) -> Result<Vec<TokenKind>> {
    Ok(MathToken::try_new(input)?
        .into_iter()
        .map(|token| token.kind)
        .collect())
}
