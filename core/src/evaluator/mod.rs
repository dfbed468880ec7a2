//! Expression evaluator.
//!
//! Evaluates whitespace-separated RPN expressions against an operand stack.
//!
//! ## Design Principles
//!
//! - **Atomic**: an evaluation against a caller's stack either applies every
//!   token or none of them. On failure the stack is restored from a snapshot
//!   taken before the first token.
//! - **Depth-checked**: the operand count is verified before every operator,
//!   so user input can never make the stack pop from empty.
//!
//! ## Example
//!
//! ```
//! use rpncalc_core::{Stack, evaluator::evaluate};
//!
//! // One-shot evaluation on a throwaway stack.
//! assert_eq!(evaluate("3 4 +", None), Ok(Some(7.0)));
//!
//! // Session evaluation: results accumulate on the caller's stack.
//! let mut stack = Stack::new();
//! evaluate("2 3", Some(&mut stack)).unwrap();
//! assert_eq!(evaluate("*", Some(&mut stack)), Ok(Some(6.0)));
//!
//! // A bad token leaves the stack untouched.
//! assert!(evaluate("1 +  oops", Some(&mut stack)).is_err());
//! assert_eq!(stack.len(), 1);
//! ```

mod error;
mod eval;


pub use error::EvalError;

use crate::{Stack, Value};
use std::io::{self, Write};
use tracing::debug;

/// Evaluates `expression`, writing any stack displays (`p`, `print`) to
/// stderr.
///
/// With `context`, tokens are applied to that stack and stay there on
/// success. Without one, a fresh stack is used and discarded afterwards.
///
/// ## Returns
///
/// The result of the final token (`None` if it was a literal or a display
/// command), or the error that stopped evaluation.
pub fn evaluate(expression: &str, context: Option<&mut Stack>) -> Result<Option<Value>, EvalError> {
    evaluate_with_display(expression, context, &mut io::stderr())
}

/// Like [`evaluate`], but writes stack displays to `display`.
pub fn evaluate_with_display(
    expression: &str,
    context: Option<&mut Stack>,
    display: &mut dyn Write,
) -> Result<Option<Value>, EvalError> {
    debug!(expression, with_context = context.is_some(), "evaluate");
    match context {
        Some(stack) => {
            let snapshot = stack.snapshot();
            let outcome = eval::Evaluator::new(&mut *stack, display).eval(expression);
            if let Err(err) = &outcome {
                debug!(
                    error = %err,
                    restored_depth = snapshot.len(),
                    "evaluation failed, rolling back"
                );
                stack.restore(snapshot);
            }
            outcome
        }
        None => {
            let mut stack = Stack::new();
            eval::Evaluator::new(&mut stack, display).eval(expression)
        }
    }
}
