// file: src/cli/args.rs
// version: 1.0.0
// guid: 886c61ed-d14b-4656-becc-0601d98e3cf2

//! Command line argument definitions
//!
//! Only diagnostic verbosity is configurable here. Everything else about the
//! menu is chosen interactively.

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "linux-utilities-menu")]
#[command(about = "Interactive menu for common Linux system utilities")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    /// Emit debug diagnostics on stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Only emit errors on stderr
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_arguments() {
        let cli = Cli::try_parse_from(["linux-utilities-menu"]).unwrap();
        assert!(!cli.verbose);
        assert!(!cli.quiet);
    }

    #[test]
    fn test_verbose_flag() {
        let cli = Cli::try_parse_from(["linux-utilities-menu", "-v"]).unwrap();
        assert!(cli.verbose);
    }

    #[test]
    fn test_verbose_and_quiet_conflict() {
        let result = Cli::try_parse_from(["linux-utilities-menu", "--verbose", "--quiet"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_rejects_positional_arguments() {
        let result = Cli::try_parse_from(["linux-utilities-menu", "1"]);
        assert!(result.is_err());
    }
}
