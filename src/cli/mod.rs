// file: src/cli/mod.rs
// version: 1.0.0
// guid: bbf9ddec-5821-4628-affb-039b31748577

//! Command line interface for Linux Utilities Menu

pub mod args;

pub use args::Cli;
