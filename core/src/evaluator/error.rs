//! Evaluation errors.
//!
//! Both variants come from malformed user input. They abort the current
//! evaluation only, and a caller-supplied stack is rolled back before the
//! error is returned.
//!
//! Internal consistency faults (popping an empty stack) are not represented
//! here: the evaluator checks the depth before every operation, so they would
//! indicate a bug and panic instead.

use crate::token::Span;

/// Error returned by a failed evaluation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EvalError {
    /// The token is neither a number, a display command, nor a known operator.
    #[error("Invalid operator '{token}'")]
    UnknownToken { token: String, span: Span },

    /// The operator needs more operands than the stack holds.
    #[error(
        "Operation takes {required} arguments, but there {} {available} on the stack.",
        verb(.available)
    )]
    InsufficientOperands {
        symbol: &'static str,
        required: usize,
        available: usize,
        span: Span,
    },
}

impl EvalError {
    /// Location of the offending token in the expression.
    pub fn span(&self) -> &Span {
        match self {
            EvalError::UnknownToken { span, .. } => span,
            EvalError::InsufficientOperands { span, .. } => span,
        }
    }

    /// Short label for the offending token, for diagnostics.
    pub fn label(&self) -> String {
        match self {
            EvalError::UnknownToken { .. } => "not a number or known operator".to_string(),
            EvalError::InsufficientOperands {
                required, available, ..
            } => format!("needs {required}, found {available}"),
        }
    }
}

fn verb(count: &usize) -> &'static str {
    if *count == 1 { "is" } else { "are" }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_token_message() {
        let err = EvalError::UnknownToken {
            token: "foo".to_string(),
            span: Span(4..7),
        };
        assert_eq!(err.to_string(), "Invalid operator 'foo'");
        assert_eq!(err.span(), &Span(4..7));
    }

    #[test]
    fn test_insufficient_operands_message() {
        let err = EvalError::InsufficientOperands {
            symbol: "+",
            required: 2,
            available: 1,
            span: Span(2..3),
        };
        assert_eq!(
            err.to_string(),
            "Operation takes 2 arguments, but there is 1 on the stack."
        );

        let err = EvalError::InsufficientOperands {
            symbol: "+",
            required: 2,
            available: 0,
            span: Span(0..1),
        };
        assert_eq!(
            err.to_string(),
            "Operation takes 2 arguments, but there are 0 on the stack."
        );
        assert_eq!(err.label(), "needs 2, found 0");
    }
}
