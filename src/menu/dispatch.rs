// file: src/menu/dispatch.rs
// version: 1.0.0
// guid: 9d8a331c-6342-47c3-ac49-210c75dc8d73

//! Action table and dispatch of validated selections

use super::input::acknowledge;
use super::registry::Menu;
use crate::error::{MenuError, Result};
use crate::executor::{CommandExecutor, CommandOutcome};
use crate::logging::with_operation_span;
use std::io::{BufRead, Write};
use tracing::{debug, info, warn};

pub const FAREWELL_MESSAGE: &str = "Thank you for using Linux Utilities Menu!";

/// One runnable utility in the action table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionEntry {
    pub selection: usize,
    pub command: &'static str,
    pub description: &'static str,
}

/// Utilities reachable from the default menu. Exit is not listed here.
pub const ACTION_TABLE: &[ActionEntry] = &[
    ActionEntry {
        selection: 1,
        command: "ps aux",
        description: "Displaying running processes",
    },
    ActionEntry {
        selection: 2,
        command: "df -h",
        description: "Displaying disk usage",
    },
    ActionEntry {
        selection: 3,
        command: "uptime",
        description: "Displaying system uptime",
    },
];

/// What a selection resolves to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Run(&'static ActionEntry),
    Exit,
    Invalid(usize),
}

impl Action {
    /// Resolve a selection against `menu`. The exit selection wins over the
    /// table so the last option always exits.
    pub fn resolve(selection: usize, menu: &Menu) -> Self {
        if selection == menu.exit_selection() {
            return Action::Exit;
        }
        match ACTION_TABLE.iter().find(|entry| entry.selection == selection) {
            Some(entry) => Action::Run(entry),
            None => Action::Invalid(selection),
        }
    }
}

/// Whether the interaction loop keeps going
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Carry out a selection
///
/// Running a utility blocks until it exits and then waits for the user to
/// press Enter. The exit branch only reports [`Flow::Exit`]; ending the loop
/// is up to the caller.
pub fn dispatch<E, R, W>(
    selection: usize,
    menu: &Menu,
    executor: &mut E,
    input: &mut R,
    output: &mut W,
) -> Result<Flow>
where
    E: CommandExecutor + ?Sized,
    R: BufRead + ?Sized,
    W: Write + ?Sized,
{
    match Action::resolve(selection, menu) {
        Action::Run(entry) => {
            run_entry(entry, menu, executor, input, output)?;
            Ok(Flow::Continue)
        }
        Action::Exit => {
            writeln!(output, "\n{}", FAREWELL_MESSAGE)?;
            output.flush()?;
            Ok(Flow::Exit)
        }
        Action::Invalid(value) => {
            warn!("Selection {} has no action", value);
            writeln!(output, "\n*** Invalid choice: {} ***", value)?;
            Ok(Flow::Continue)
        }
    }
}

fn run_entry<E, R, W>(
    entry: &ActionEntry,
    menu: &Menu,
    executor: &mut E,
    input: &mut R,
    output: &mut W,
) -> Result<()>
where
    E: CommandExecutor + ?Sized,
    R: BufRead + ?Sized,
    W: Write + ?Sized,
{
    let rule = menu.separator('-');

    writeln!(output, "\n{}...", entry.description)?;
    writeln!(output, "{}", rule)?;
    // the child writes straight to the terminal
    output.flush()?;

    info!("Running '{}' for selection {}", entry.command, entry.selection);
    let outcome = with_operation_span(entry.command, || executor.run(entry.command));

    match outcome {
        Ok(CommandOutcome::Success) => debug!("'{}' finished", entry.command),
        Ok(CommandOutcome::Failed(Some(code))) => {
            writeln!(output, "*** Command exited with status {} ***", code)?;
        }
        Ok(CommandOutcome::Failed(None)) => {
            writeln!(output, "*** Command terminated by signal ***")?;
        }
        Ok(CommandOutcome::Unavailable(program)) => {
            writeln!(output, "*** Command not available: {} ***", program)?;
        }
        Err(MenuError::Execution(msg)) => {
            warn!("{}", msg);
            writeln!(output, "*** {} ***", msg)?;
        }
        Err(e) => return Err(e),
    }

    writeln!(output, "{}", rule)?;
    writeln!(output)?;
    acknowledge(input, output)
}
