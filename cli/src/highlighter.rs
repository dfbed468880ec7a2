use nu_ansi_term::{Color, Style};
use reedline::StyledText;
use rpncalc::{
    Arity,
    session::{Command, parse_command},
    token::{TokenKind, classify, tokenize},
};

#[derive(Debug)]
struct PaletteItem<'a> {
    name: &'a str,
    fg: Color,
}

const PALETTE: &[PaletteItem] = &[
    PaletteItem { name: "", fg: Color::White },
    PaletteItem { name: "number", fg: Color::Cyan },
    PaletteItem { name: "constant", fg: Color::Yellow },
    PaletteItem { name: "operator", fg: Color::White },
    PaletteItem { name: "function", fg: Color::Blue },
    PaletteItem { name: "keyword", fg: Color::Magenta },
    PaletteItem { name: "error", fg: Color::Red },
];

fn color(name: &str) -> Color {
    PALETTE
        .iter()
        .find(|item| item.name == name)
        .map_or(PALETTE[0].fg, |item| item.fg)
}

/// Names the palette entry for a token.
fn highlight_name(text: &str) -> &'static str {
    match classify(text) {
        TokenKind::Number(_) => "number",
        TokenKind::Print => "keyword",
        TokenKind::Operator(op) if op.arity() == Arity::Constant => "constant",
        // Named operators read like functions, symbols like operators.
        TokenKind::Operator(op) if op.symbol.chars().all(char::is_alphabetic) => "function",
        TokenKind::Operator(_) => "operator",
        TokenKind::Unknown => "error",
    }
}

/// Colors each token of the line by what the evaluator will make of it.
pub struct Highlighter;

impl reedline::Highlighter for Highlighter {
    fn highlight(&self, line: &str, _: usize) -> StyledText {
        let mut output = StyledText::new();

        if !matches!(parse_command(line), Command::Evaluate(_)) {
            let style = Style::new().fg(color("keyword"));
            output.push((style, line.to_string()));
            return output;
        }

        let plain = Style::new().fg(PALETTE[0].fg);
        let mut curr_end = 0;
        for token in tokenize(line) {
            let span = token.span.0;
            if span.start > curr_end {
                output.push((plain, line[curr_end..span.start].to_string()));
            }
            let style = Style::new().fg(color(highlight_name(token.text)));
            output.push((style, token.text.to_string()));
            curr_end = span.end;
        }
        if curr_end < line.len() {
            output.push((plain, line[curr_end..].to_string()));
        }

        output
    }
}
