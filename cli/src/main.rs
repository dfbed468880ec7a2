mod highlighter;

use clap::{CommandFactory, FromArgMatches, Parser};
use miette::{IntoDiagnostic, Result};
use reedline::{
    DefaultCompleter, DescriptionMode, EditCommand, Emacs, FileBackedHistory, IdeMenu, KeyCode,
    KeyModifiers, Keybindings, MenuBuilder, Prompt, PromptEditMode, PromptHistorySearch,
    PromptHistorySearchStatus, Reedline, ReedlineEvent, ReedlineMenu, Signal,
    default_emacs_keybindings,
};
use rpncalc::{
    CatalogOrder, Error, Reply, Session, format::format_number, registry, render_error,
    render_error_to, run, session::COMMAND_WORDS,
};
use std::borrow::Cow;
use std::io::BufRead;
use std::io::BufReader;
use std::io::{self, Write};
use std::ops::ControlFlow;
use std::path::PathBuf;
use tracing::{debug, warn};

const HISTORY_CAPACITY: usize = 1000;

/// rpncalc - A Reverse Polish Notation calculator
#[derive(Parser, Debug)]
#[command(name = "rpncalc")]
#[command(about = "Evaluate Reverse Polish Notation expressions", long_about = None)]
struct Args {
    /// Expressions to evaluate, each on a fresh stack (if none are given,
    /// reads from stdin)
    #[arg(allow_hyphen_values = true, trailing_var_arg = true)]
    expressions: Vec<String>,
}

/// Usage notes and the operator table, listed in declaration order so the
/// operators appear grouped by meaning rather than alphabetically.
fn after_help() -> String {
    format!(
        "If no expression is supplied, run in interactive mode.\n\
         Type \"help\" or \"?\" in interactive mode for help.\n\
         An expression is a space-separated list of numbers and operators.\n\n{}",
        registry::describe_all("  ", CatalogOrder::Declaration)
    )
}

/// The `>>> ` prompt.
struct RpnPrompt;

impl Prompt for RpnPrompt {
    fn render_prompt_left(&self) -> Cow<'_, str> {
        Cow::Borrowed("")
    }

    fn render_prompt_right(&self) -> Cow<'_, str> {
        Cow::Borrowed("")
    }

    fn render_prompt_indicator(&self, _prompt_mode: PromptEditMode) -> Cow<'_, str> {
        Cow::Borrowed(">>> ")
    }

    fn render_prompt_multiline_indicator(&self) -> Cow<'_, str> {
        Cow::Borrowed("... ")
    }

    fn render_prompt_history_search_indicator(
        &self,
        history_search: PromptHistorySearch,
    ) -> Cow<'_, str> {
        let prefix = match history_search.status {
            PromptHistorySearchStatus::Passing => "",
            PromptHistorySearchStatus::Failing => "failing ",
        };
        Cow::Owned(format!(
            "({}reverse-search: {}) ",
            prefix, history_search.term
        ))
    }
}

fn add_menu_keybindings(keybindings: &mut Keybindings) {
    keybindings.add_binding(
        KeyModifiers::NONE,
        KeyCode::Tab,
        ReedlineEvent::UntilFound(vec![
            ReedlineEvent::Menu("completion_menu".to_string()),
            ReedlineEvent::MenuNext,
        ]),
    );
    keybindings.add_binding(
        KeyModifiers::ALT,
        KeyCode::Enter,
        ReedlineEvent::Edit(vec![EditCommand::InsertNewline]),
    );
}

/// Location of the history file, creating its directory if needed.
fn history_path() -> Option<PathBuf> {
    let dir = dirs::data_dir()?.join("rpncalc");
    if let Err(e) = std::fs::create_dir_all(&dir) {
        warn!("cannot create history directory {}: {e}", dir.display());
        return None;
    }
    Some(dir.join("history.txt"))
}

fn setup_reedline() -> Reedline {
    let words: Vec<String> = registry::declared()
        .map(|op| op.symbol.to_string())
        .chain(COMMAND_WORDS.iter().map(|word| word.to_string()))
        .chain(["print".to_string()])
        .collect();

    let completer = Box::new({
        let mut completions =
            DefaultCompleter::with_inclusions(&['-', '_', '+', '*', '/', '%', '^']);
        completions.insert(words);
        completions
    });

    // Use the interactive menu to select options from the completer
    let ide_menu = IdeMenu::default()
        .with_name("completion_menu")
        .with_min_completion_width(0)
        .with_max_completion_width(50)
        .with_max_completion_height(u16::MAX)
        .with_padding(0)
        .with_cursor_offset(0)
        .with_description_mode(DescriptionMode::PreferRight)
        .with_min_description_width(0)
        .with_max_description_width(50)
        .with_description_offset(1)
        .with_correct_cursor_pos(false);

    let completion_menu = Box::new(ide_menu);

    let mut keybindings = default_emacs_keybindings();
    add_menu_keybindings(&mut keybindings);

    let edit_mode = Box::new(Emacs::new(keybindings));

    let mut line_editor = Reedline::create()
        .with_highlighter(Box::new(highlighter::Highlighter))
        .with_completer(completer)
        .with_menu(ReedlineMenu::EngineCompleter(completion_menu))
        .with_edit_mode(edit_mode);

    if let Some(path) = history_path() {
        match FileBackedHistory::with_file(HISTORY_CAPACITY, path.clone()) {
            Ok(history) => {
                debug!("using history file {}", path.display());
                line_editor = line_editor.with_history(Box::new(history));
            }
            Err(e) => warn!("history disabled: {e}"),
        }
    }

    line_editor
}

/// Handles one line of a session, printing whatever it produced.
fn interpret_line(session: &mut Session, line: &str) -> ControlFlow<()> {
    match session.execute(line) {
        Reply::Quit => return ControlFlow::Break(()),
        Reply::Value(value) => println!("{}", format_number(value)),
        Reply::Help(text) => print!("{text}"),
        Reply::Notice(message) => eprintln!("{message}"),
        Reply::Error(e) => render_error(&Error::new(line, e)),
        Reply::Nothing => {}
    }
    ControlFlow::Continue(())
}

/// Evaluates each command-line expression on its own stack. A failing
/// expression is reported and the rest still run.
fn interpret_arguments(
    expressions: &[String],
    out: &mut dyn Write,
    errors: &mut dyn Write,
) -> io::Result<()> {
    for expression in expressions {
        match run(expression, None) {
            Ok(Some(value)) => writeln!(out, "{}", format_number(value))?,
            Ok(None) => {}
            Err(e) => render_error_to(&e, errors)?,
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    // The help text is rendered before the catalog is initialized.
    let matches = Args::command().after_help(after_help()).get_matches();
    let args = Args::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    // Initialize logging subscriber
    use tracing_subscriber::{EnvFilter, fmt};

    // Use RPNCALC_LOG or RUST_LOG environment variable to control log level
    // Default to WARN if not set
    let filter = EnvFilter::try_from_env("RPNCALC_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .or_else(|_| EnvFilter::try_new("warn"))
        .into_diagnostic()?;

    fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    registry::initialize_catalog();

    if !args.expressions.is_empty() {
        interpret_arguments(&args.expressions, &mut io::stdout(), &mut io::stderr())
            .into_diagnostic()?;
        return Ok(());
    }

    // Otherwise, check if we're in interactive or pipe mode
    let is_interactive = atty::is(atty::Stream::Stdin);
    let mut session = Session::new();

    if is_interactive {
        // Interactive REPL mode
        let mut line_editor = setup_reedline();
        let prompt = RpnPrompt;

        loop {
            let sig = line_editor.read_line(&prompt).into_diagnostic()?;

            match sig {
                Signal::Success(buffer) => {
                    if interpret_line(&mut session, &buffer).is_break() {
                        return Ok(());
                    }
                }
                Signal::CtrlD | Signal::CtrlC => {
                    println!();
                    return Ok(());
                }
            }
        }
    } else {
        // Pipe/stdin mode
        let stdin = io::stdin();
        let reader = BufReader::new(stdin.lock());

        for line in reader.lines() {
            let line = line.into_diagnostic()?;
            if interpret_line(&mut session, &line).is_break() {
                break;
            }
        }
    }

    Ok(())
}
