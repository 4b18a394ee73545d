// file: src/logging/mod.rs
// version: 1.0.0
// guid: 9a3ed000-8d50-4192-89e6-4bd2a2e887c7

//! Logging system for Linux Utilities Menu

pub mod logger;

pub use logger::{init_logger, with_operation_span};
