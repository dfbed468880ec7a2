//! Splitting expressions into tokens and classifying them.

use crate::{
    Value,
    registry::{self, Operation},
};
use core::ops::Range;

/// Byte range of a token within its expression.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Span(pub Range<usize>);

impl Span {
    pub fn new(range: Range<usize>) -> Self {
        Span(range)
    }
}

/// A whitespace-delimited piece of an expression.
#[derive(Debug, Clone, PartialEq)]
pub struct Token<'a> {
    pub text: &'a str,
    pub span: Span,
}

impl<'a> Token<'a> {
    pub fn kind(&self) -> TokenKind {
        classify(self.text)
    }
}

/// What a token means to the evaluator.
#[derive(Debug, Clone, Copy)]
pub enum TokenKind {
    /// A numeric literal.
    Number(Value),
    /// `p` or `print`: show the stack.
    Print,
    Operator(&'static Operation),
    Unknown,
}

/// Splits `expression` on whitespace. Runs of separators never produce empty
/// tokens.
///
/// # Examples
///
/// ```
/// use rpncalc_core::token::tokenize;
///
/// let texts: Vec<&str> = tokenize("  3 4\t+ ").map(|t| t.text).collect();
/// assert_eq!(texts, vec!["3", "4", "+"]);
/// ```
pub fn tokenize(expression: &str) -> impl Iterator<Item = Token<'_>> {
    let mut rest = expression;
    let mut offset = 0;
    core::iter::from_fn(move || {
        let trimmed = rest.trim_start();
        offset += rest.len() - trimmed.len();
        if trimmed.is_empty() {
            return None;
        }
        let len = trimmed.find(char::is_whitespace).unwrap_or(trimmed.len());
        let token = Token {
            text: &trimmed[..len],
            span: Span(offset..offset + len),
        };
        rest = &trimmed[len..];
        offset += len;
        Some(token)
    })
}

/// Classifies a single token.
///
/// A token that parses completely as a float is always a number, so `-3.5`
/// pushes a value rather than invoking `-`. Anything with trailing garbage
/// (`3.5.2`, `2x`) falls through to the operator lookup.
pub fn classify(text: &str) -> TokenKind {
    if let Some(value) = parse_number(text) {
        TokenKind::Number(value)
    } else if is_print_command(text) {
        TokenKind::Print
    } else if let Some(op) = registry::lookup(text) {
        TokenKind::Operator(op)
    } else {
        TokenKind::Unknown
    }
}

/// Parses a complete numeric literal: optional sign, digits with an optional
/// decimal point, optional exponent, or `inf`/`nan`.
pub fn parse_number(text: &str) -> Option<Value> {
    if text.is_empty() {
        return None;
    }
    text.parse::<Value>().ok()
}

pub fn is_print_command(text: &str) -> bool {
    matches!(text, "p" | "print")
}
