//! rpncalc - a Reverse Polish Notation calculator
//!
//! # Overview
//!
//! Expressions are whitespace-separated numbers and operator symbols in
//! postfix order: `3 4 +` pushes 3, pushes 4, then replaces both with 7.
//! There is no precedence and no parentheses.
//!
//! # Quick Start
//!
//! ```
//! use rpncalc::{Stack, run};
//!
//! // One-shot evaluation
//! assert_eq!(run("2 10 ^", None).unwrap(), Some(1024.0));
//!
//! // A session stack survives between calls, and failed calls leave it alone
//! let mut stack = Stack::new();
//! run("1 2", Some(&mut stack)).unwrap();
//! assert!(run("+ bogus", Some(&mut stack)).is_err());
//! assert_eq!(stack.len(), 2);
//! ```
//!
//! # Errors
//!
//! Failures come back as [`Error`], which keeps the expression next to the
//! [`EvalError`] so [`render_error`] can point at the offending token.

mod error_renderer;

pub use error_renderer::{
    render_error, render_error_to, render_error_to_string, render_error_to_string_no_color,
};

pub use rpncalc_core::{
    Arity, CatalogOrder, EvalError, Operation, Reply, Session, Snapshot, Stack, Value, evaluate,
    evaluate_with_display, format, initialize_catalog, registry, session, token,
};

/// A failed evaluation together with the expression it came from.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{source}")]
pub struct Error {
    /// The expression that was evaluated.
    pub expression: String,
    #[source]
    pub source: EvalError,
}

impl Error {
    pub fn new(expression: impl Into<String>, source: EvalError) -> Self {
        Self {
            expression: expression.into(),
            source,
        }
    }
}

/// Evaluates `expression` like [`evaluate`], attaching the expression to any
/// error for rendering.
pub fn run(expression: &str, context: Option<&mut Stack>) -> Result<Option<Value>, Error> {
    evaluate(expression, context).map_err(|source| Error::new(expression, source))
}
