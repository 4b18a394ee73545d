// file: src/menu/input.rs
// version: 1.0.0
// guid: e05aa18b-02cd-45d7-8fc3-2464ee392baa

//! Selection acquisition: prompt, read, validate, re-prompt

use super::registry::Menu;
use crate::error::{MenuError, Result};
use std::io::{BufRead, Write};
use std::num::IntErrorKind;
use thiserror::Error;
use tracing::debug;

/// Case-insensitive input that selects the exit option
pub const QUIT_SENTINEL: &str = "Q";

pub const CHOICE_PROMPT: &str = "Enter your choice (or 'Q' to quit): ";

pub const ACKNOWLEDGE_PROMPT: &str = "Press Enter to continue...";

pub const QUIT_MESSAGE: &str = "Exiting program. Goodbye!";

/// A validated menu choice in `[1, menu.len()]`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// A number typed by the user
    Choice(usize),
    /// The quit sentinel, mapped to the exit selection
    Quit { exit: usize },
}

impl Selection {
    /// The 1-based option number this selection stands for
    pub fn value(&self) -> usize {
        match *self {
            Selection::Choice(n) => n,
            Selection::Quit { exit } => exit,
        }
    }

    pub fn is_quit(&self) -> bool {
        matches!(self, Selection::Quit { .. })
    }
}

/// Rejected input. Never fatal: the user is asked again.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("Invalid input! Please enter a number or 'Q' to quit")]
    NotANumber(String),

    #[error("Invalid choice! Please enter a number between 1 and {max}")]
    OutOfRange { max: usize },
}

/// Validate one line of input against a menu of `size` options
pub fn parse_selection(raw: &str, size: usize) -> std::result::Result<Selection, InputError> {
    let trimmed = raw.trim();

    if trimmed.eq_ignore_ascii_case(QUIT_SENTINEL) {
        return Ok(Selection::Quit { exit: size });
    }

    let choice = match trimmed.parse::<i64>() {
        Ok(n) => n,
        Err(e) if matches!(e.kind(), IntErrorKind::PosOverflow | IntErrorKind::NegOverflow) => {
            return Err(InputError::OutOfRange { max: size });
        }
        Err(_) => return Err(InputError::NotANumber(trimmed.to_string())),
    };

    match usize::try_from(choice) {
        Ok(n) if (1..=size).contains(&n) => Ok(Selection::Choice(n)),
        _ => Err(InputError::OutOfRange { max: size }),
    }
}

/// Read one line, without its terminator. `None` at end of input.
pub fn read_line<R: BufRead + ?Sized>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

/// Show the acknowledgment prompt and block until a line (or EOF) arrives
pub fn acknowledge<R, W>(input: &mut R, output: &mut W) -> Result<()>
where
    R: BufRead + ?Sized,
    W: Write + ?Sized,
{
    write!(output, "{}", ACKNOWLEDGE_PROMPT)?;
    output.flush()?;
    read_line(input)?;
    Ok(())
}

/// Render the menu and ask until a valid selection or the quit sentinel is read
///
/// End of input at the choice prompt is treated like the quit sentinel.
/// There is no retry limit.
pub fn acquire_selection<R, W>(menu: &Menu, input: &mut R, output: &mut W) -> Result<Selection>
where
    R: BufRead + ?Sized,
    W: Write + ?Sized,
{
    if menu.is_empty() {
        return Err(MenuError::EmptyMenu);
    }

    loop {
        menu.render(output)?;
        write!(output, "\n{}", CHOICE_PROMPT)?;
        output.flush()?;

        let line = match read_line(input)? {
            Some(line) => line,
            None => {
                debug!("End of input at choice prompt, quitting");
                writeln!(output)?;
                QUIT_SENTINEL.to_string()
            }
        };

        match parse_selection(&line, menu.len()) {
            Ok(selection) => {
                if selection.is_quit() {
                    writeln!(output, "\n{}", QUIT_MESSAGE)?;
                }
                debug!("Accepted selection {:?}", selection);
                return Ok(selection);
            }
            Err(e) => {
                debug!("Rejected input {:?}: {}", line, e);
                writeln!(output, "\n*** {} ***", e)?;
                acknowledge(input, output)?;
            }
        }
    }
}
