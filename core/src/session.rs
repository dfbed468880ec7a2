//! Interactive sessions.
//!
//! A [`Session`] owns the long-lived stack of an interactive loop and
//! interprets the handful of line commands that are not expressions.
//! Everything else on a line goes to the evaluator with the session stack as
//! its context, so a bad line never leaves the stack half-updated.

use crate::{
    Stack, Value,
    evaluator::{EvalError, evaluate_with_display},
    registry::{self, CatalogOrder},
};
use std::io::{self, Write};
use tracing::debug;

/// Help text shown for the `help` command, followed by the operator table.
pub const INTERACTIVE_HELP: &str = "\
Type an expression to evaluate and print it.
The result will be pushed to the stack.
Use \"print\" or \"p\" to view the stack.
Use \"pop\", \"del\", or \"d\" to remove the top item from the stack.
";

/// Words recognised as whole-line commands.
pub const COMMAND_WORDS: &[&str] = &["exit", "quit", "help", "?", "del", "pop", "d"];

/// A line typed into a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command<'a> {
    Quit,
    Help,
    /// Remove the top value.
    Drop,
    Empty,
    Evaluate(&'a str),
}

/// Classifies an input line. Commands must make up the whole line, apart from
/// surrounding whitespace.
pub fn parse_command(line: &str) -> Command<'_> {
    match line.trim() {
        "exit" | "quit" => Command::Quit,
        "help" | "?" => Command::Help,
        "del" | "pop" | "d" => Command::Drop,
        "" => Command::Empty,
        _ => Command::Evaluate(line),
    }
}

/// What the caller should show after a line has been handled.
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    /// The session is over.
    Quit,
    /// A computed value to print.
    Value(Value),
    /// Help text to print.
    Help(String),
    /// An informational message, e.g. nothing to drop.
    Notice(&'static str),
    /// The line failed; the stack is unchanged.
    Error(EvalError),
    Nothing,
}

/// A stack that persists across lines.
#[derive(Debug, Default)]
pub struct Session {
    stack: Stack,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stack(&self) -> &Stack {
        &self.stack
    }

    /// Handles one line, writing stack displays to stderr.
    pub fn execute(&mut self, line: &str) -> Reply {
        self.execute_with_display(line, &mut io::stderr())
    }

    /// Handles one line, writing stack displays to `display`.
    pub fn execute_with_display(&mut self, line: &str, display: &mut dyn Write) -> Reply {
        match parse_command(line) {
            Command::Quit => Reply::Quit,
            Command::Help => Reply::Help(help_text()),
            Command::Drop => {
                if self.stack.is_empty() {
                    Reply::Notice("Nothing to remove.")
                } else {
                    let dropped = self.stack.pop();
                    debug!(dropped, depth = self.stack.len(), "dropped top of stack");
                    Reply::Nothing
                }
            }
            Command::Empty => Reply::Nothing,
            Command::Evaluate(expression) => {
                match evaluate_with_display(expression, Some(&mut self.stack), display) {
                    Ok(Some(value)) => Reply::Value(value),
                    Ok(None) => Reply::Nothing,
                    Err(err) => Reply::Error(err),
                }
            }
        }
    }
}

/// The interactive help followed by the operator table in lookup order.
pub fn help_text() -> String {
    format!(
        "{INTERACTIVE_HELP}{}",
        registry::describe_all("", CatalogOrder::Sorted)
    )
}
