//! Terminal implementation of the overwrite confirmation.

use std::io::{self, BufRead, IsTerminal, Write};

use monoseed_core::{
    application::{ApplicationError, ports::Confirmation},
    error::MonoseedResult,
};

/// Asks on the terminal, defaulting to "no".
///
/// Uses an interactive `dialoguer` prompt when stdin is a terminal and the
/// `interactive` feature is on. Otherwise one line is read from stdin and
/// only `y`/`yes` (any case) accepts. End of input declines.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalConfirmation;

impl TerminalConfirmation {
    pub fn new() -> Self {
        Self
    }
}

impl Confirmation for TerminalConfirmation {
    fn confirm(&self, prompt: &str) -> MonoseedResult<bool> {
        if io::stdin().is_terminal() {
            return ask_interactive(prompt);
        }
        read_answer(prompt, io::stdin().lock(), io::stderr())
    }
}

#[cfg(feature = "interactive")]
fn ask_interactive(prompt: &str) -> MonoseedResult<bool> {
    dialoguer::Confirm::new()
        .with_prompt(prompt)
        .default(false)
        .interact()
        .map_err(|e| {
            ApplicationError::ConfirmationFailed {
                reason: e.to_string(),
            }
            .into()
        })
}

#[cfg(not(feature = "interactive"))]
fn ask_interactive(prompt: &str) -> MonoseedResult<bool> {
    read_answer(prompt, io::stdin().lock(), io::stderr())
}

/// Line-based prompt used when there is no terminal to drive.
fn read_answer(prompt: &str, mut input: impl BufRead, mut out: impl Write) -> MonoseedResult<bool> {
    let failed = |e: io::Error| ApplicationError::ConfirmationFailed {
        reason: e.to_string(),
    };

    write!(out, "{prompt} [y/N] ").map_err(failed)?;
    out.flush().map_err(failed)?;

    let mut line = String::new();
    input.read_line(&mut line).map_err(failed)?;

    Ok(is_yes(&line))
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}
