// file: src/main.rs
// version: 1.0.0
// guid: 17be77bd-8cf0-4ef7-baa7-72daf14a84ce

//! Linux Utilities Menu - Main entry point

use clap::Parser;
use linux_utilities_menu::{
    cli::Cli,
    config::MenuConfig,
    executor::LocalExecutor,
    logging::logger,
    menu::{self, Menu},
    Result, VERSION,
};
use std::io;
use tracing::debug;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    logger::init_logger(cli.verbose, cli.quiet)?;
    debug!("linux-utilities-menu {}", VERSION);

    let config = MenuConfig::default();
    let menu = Menu::default_utilities(&config);
    let mut executor = LocalExecutor::from_config(&config);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut input = stdin.lock();
    let mut output = stdout.lock();

    menu::run(&menu, &mut executor, &mut input, &mut output)
}
