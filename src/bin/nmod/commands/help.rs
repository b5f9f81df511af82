//! `nmod help` command
//!
//! Prints the long usage to stderr and exits with the usage status.

use clap::CommandFactory;

use crate::cli::Cli;

/// Exit status for usage output, matching clap's usage errors.
const USAGE_EXIT_CODE: i32 = 2;

pub fn execute() -> ! {
    let mut cmd = Cli::command();
    eprintln!("{}", cmd.render_long_help());
    std::process::exit(USAGE_EXIT_CODE)
}
