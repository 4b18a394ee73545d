// file: src/lib.rs
// version: 1.0.0
// guid: 36428a1c-12ab-4366-8d47-5a0d5dd73468

//! # Linux Utilities Menu
//!
//! A numbered text menu that runs a few common system utilities (`ps aux`,
//! `df -h`, `uptime`) through the host shell and passes their output straight
//! to the terminal.

pub mod cli;
pub mod config;
pub mod error;
pub mod executor;
pub mod logging;
pub mod menu;

pub use error::{MenuError, Result};

/// Version information for the utility
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
