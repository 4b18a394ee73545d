// file: src/menu/session.rs
// version: 1.0.0
// guid: d4d4aa7c-e978-4e67-a7e3-50fe0a747fb5

//! The interaction loop tying selection and dispatch together

use super::dispatch::{dispatch, Flow};
use super::input::acquire_selection;
use super::registry::Menu;
use crate::executor::CommandExecutor;
use crate::Result;
use std::io::{BufRead, Write};
use tracing::{debug, info};

/// Run the menu until the user exits
///
/// Single-threaded and fully blocking: rendering, reads, and commands happen
/// one after another on the calling thread.
pub fn run<E, R, W>(menu: &Menu, executor: &mut E, input: &mut R, output: &mut W) -> Result<()>
where
    E: CommandExecutor + ?Sized,
    R: BufRead + ?Sized,
    W: Write + ?Sized,
{
    info!("Starting menu with {} options", menu.len());

    loop {
        let selection = acquire_selection(menu, input, output)?;
        debug!("Dispatching selection {}", selection.value());

        if dispatch(selection.value(), menu, executor, input, output)? == Flow::Exit {
            break;
        }
    }

    output.flush()?;
    info!("Menu loop finished");
    Ok(())
}
