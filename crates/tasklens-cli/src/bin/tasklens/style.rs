//! Status-line styling. Report bodies are written unstyled.

use std::io::IsTerminal;

use owo_colors::{OwoColorize, Style};

#[derive(Debug, Clone, Copy)]
enum Tone {
    Success,
    Error,
    Accent,
}

impl Tone {
    fn style(self) -> Style {
        match self {
            Tone::Success => Style::new().green().bold(),
            Tone::Error => Style::new().red().bold(),
            Tone::Accent => Style::new().cyan().underline(),
        }
    }
}

/// Honors `NO_COLOR` and only styles when stderr is a terminal.
fn color_enabled() -> bool {
    std::env::var_os("NO_COLOR").is_none() && std::io::stderr().is_terminal()
}

fn paint(text: impl AsRef<str>, tone: Tone) -> String {
    let text = text.as_ref();
    if color_enabled() {
        text.style(tone.style()).to_string()
    } else {
        text.to_owned()
    }
}

pub fn success(text: impl AsRef<str>) -> String {
    paint(text, Tone::Success)
}

pub fn error(text: impl AsRef<str>) -> String {
    paint(text, Tone::Error)
}

pub fn accent(text: impl AsRef<str>) -> String {
    paint(text, Tone::Accent)
}
