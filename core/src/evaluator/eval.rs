//! Token-by-token evaluation against a working stack.

use super::EvalError;
use crate::{
    Stack, Value,
    token::{Token, TokenKind, tokenize},
};
use std::io::Write;
use tracing::trace;

/// Applies tokens to a stack it borrows for the duration of one evaluation.
///
/// The evaluator itself never rolls anything back: on error it stops and
/// leaves the stack as it was at that point. Restoring the caller's stack is
/// the job of [`super::evaluate`].
pub(super) struct Evaluator<'s, 'w> {
    stack: &'s mut Stack,
    display: &'w mut dyn Write,
}

impl<'s, 'w> Evaluator<'s, 'w> {
    pub(super) fn new(stack: &'s mut Stack, display: &'w mut dyn Write) -> Self {
        Self { stack, display }
    }

    /// Processes every token of `expression` left to right.
    ///
    /// Returns the result of the final token: the value an operator left on
    /// top of the stack, or `None` when the final token was a literal or a
    /// display command.
    pub(super) fn eval(&mut self, expression: &str) -> Result<Option<Value>, EvalError> {
        let mut result = None;
        for token in tokenize(expression) {
            trace!(token = token.text, depth = self.stack.len(), "eval token");
            result = self.step(&token)?;
        }
        Ok(result)
    }

    fn step(&mut self, token: &Token<'_>) -> Result<Option<Value>, EvalError> {
        match token.kind() {
            TokenKind::Number(value) => {
                self.stack.push(value);
                Ok(None)
            }
            TokenKind::Print => {
                // The display is diagnostic output; a failed write must not
                // change the outcome of the evaluation.
                self.stack.print_to(self.display).ok();
                Ok(None)
            }
            TokenKind::Operator(op) => {
                let required = op.arity().count();
                let available = self.stack.len();
                if available < required {
                    return Err(EvalError::InsufficientOperands {
                        symbol: op.symbol,
                        required,
                        available,
                        span: token.span.clone(),
                    });
                }
                Ok(Some(op.apply(self.stack)))
            }
            TokenKind::Unknown => Err(EvalError::UnknownToken {
                token: token.text.to_string(),
                span: token.span.clone(),
            }),
        }
    }
}
