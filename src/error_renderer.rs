//! Error rendering using ariadne
//!
//! Renders evaluation failures with the expression shown and the offending
//! token underlined.

use crate::{EvalError, Error};
use ariadne::{ColorGenerator, Config, IndexType, Label, Report, ReportKind, Source};
use std::io::Write;

const SOURCE_ID: &str = "<expression>";

/// Render an error with formatting to stderr
///
/// # Example
/// ```no_run
/// use rpncalc::{render_error, run};
///
/// if let Err(e) = run("1 2 frobnicate", None) {
///     render_error(&e);
/// }
/// ```
pub fn render_error(error: &Error) {
    render_error_to_writer(error, &mut std::io::stderr(), true).ok();
}

/// Render an error to a specific writer
pub fn render_error_to(error: &Error, writer: &mut dyn Write) -> std::io::Result<()> {
    render_error_to_writer(error, writer, true)
}

/// Render an error to a String (useful for tests, web UIs, etc.)
pub fn render_error_to_string(error: &Error) -> String {
    let mut buf = Vec::new();
    render_error_to_writer(error, &mut buf, true).ok();
    String::from_utf8_lossy(&buf).to_string()
}

/// Render an error to a String without color codes (useful for tests)
pub fn render_error_to_string_no_color(error: &Error) -> String {
    let mut buf = Vec::new();
    render_error_to_writer(error, &mut buf, false).ok();
    String::from_utf8_lossy(&buf).to_string()
}

fn render_error_to_writer(
    error: &Error,
    writer: &mut dyn Write,
    use_color: bool,
) -> std::io::Result<()> {
    let span = error.source.span().0.clone();
    let mut colors = ColorGenerator::new();
    colors.next(); // Skip the first color.

    let (code, help) = match &error.source {
        EvalError::UnknownToken { .. } => (
            "E001",
            "expected a number, `p`/`print`, or an operator; type `help` to list operators"
                .to_string(),
        ),
        EvalError::InsufficientOperands { symbol, .. } => (
            "E002",
            format!("push more values before `{symbol}`"),
        ),
    };

    let report = Report::build(ReportKind::Error, (SOURCE_ID, span.clone()))
        .with_code(code)
        .with_message(error.source.to_string())
        .with_config(
            Config::default()
                .with_color(use_color)
                .with_index_type(IndexType::Byte),
        )
        .with_label(
            Label::new((SOURCE_ID, span))
                .with_message(error.source.label())
                .with_color(colors.next()),
        )
        .with_help(help);

    report
        .finish()
        .write((SOURCE_ID, Source::from(error.expression.as_str())), &mut *writer)
}
