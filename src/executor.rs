// file: src/executor.rs
// version: 1.0.0
// guid: 12983b0f-98db-47b4-ac03-5a6dfb1910a2

//! Synchronous command execution through the host shell
//!
//! Every call blocks the calling thread until the child exits. There is no
//! timeout: a command that hangs keeps the menu waiting with it.

use crate::config::MenuConfig;
use crate::error::{MenuError, Result};
use std::process::{Command, Stdio};
use tracing::{debug, warn};

/// How a shell command finished
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    /// Exit status zero
    Success,
    /// Non-zero exit code, or `None` when the child was killed by a signal
    Failed(Option<i32>),
    /// The utility was not found on `PATH`; nothing was spawned
    Unavailable(String),
}

impl CommandOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, CommandOutcome::Success)
    }
}

/// Trait for running action commands
pub trait CommandExecutor {
    /// Run `command` to completion with stdout/stderr passed straight through
    fn run(&mut self, command: &str) -> Result<CommandOutcome>;
}

/// Runs commands on the local machine via `<shell> -c`
pub struct LocalExecutor {
    shell: String,
}

impl LocalExecutor {
    /// Create a new local executor using the default shell
    pub fn new() -> Self {
        Self::from_config(&MenuConfig::default())
    }

    /// Create a local executor using the configured shell
    pub fn from_config(config: &MenuConfig) -> Self {
        Self {
            shell: config.shell.clone(),
        }
    }

    pub fn shell(&self) -> &str {
        &self.shell
    }

    /// First word of a command line, i.e. the utility it invokes
    pub fn program_of(command: &str) -> Option<&str> {
        command.split_whitespace().next()
    }
}

impl Default for LocalExecutor {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandExecutor for LocalExecutor {
    fn run(&mut self, command: &str) -> Result<CommandOutcome> {
        let program = Self::program_of(command)
            .ok_or_else(|| MenuError::execution("Empty command"))?;

        if which::which(program).is_err() {
            warn!("Command not found on PATH: {}", program);
            return Ok(CommandOutcome::Unavailable(program.to_string()));
        }

        debug!("Executing local command: {} -c {}", self.shell, command);

        let status = Command::new(&self.shell)
            .arg("-c")
            .arg(command)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|e| {
                MenuError::execution(format!("Failed to execute '{}': {}", command, e))
            })?;

        if status.success() {
            debug!("Command executed successfully");
            Ok(CommandOutcome::Success)
        } else {
            warn!("Command '{}' failed with exit code {:?}", command, status.code());
            Ok(CommandOutcome::Failed(status.code()))
        }
    }
}
