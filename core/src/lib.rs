//! Core of the rpncalc Reverse Polish Notation calculator.
//!
//! - [`stack`]: the operand stack
//! - [`registry`]: the operator catalog
//! - [`token`]: tokenizing and classifying expression text
//! - [`evaluator`]: all-or-nothing evaluation of expressions
//! - [`session`]: line commands for interactive use
//! - [`format`]: text rendering of values

pub mod evaluator;
pub mod format;
pub mod registry;
pub mod session;
pub mod stack;
pub mod token;

/// The numeric type every operand and result uses.
pub type Value = f64;

pub use evaluator::{EvalError, evaluate, evaluate_with_display};
pub use registry::{Arity, CatalogOrder, Operation, initialize_catalog};
pub use session::{Reply, Session};
pub use stack::{Snapshot, Stack};
