//! nmod CLI - operations on nested Go modules

use anyhow::Result;
use clap::Parser;
use nmod::NmodError;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;

use cli::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("nmod: {:#}", e);
        if let Some(help) = e.downcast_ref::<NmodError>().and_then(NmodError::help) {
            eprintln!("help: {}", help);
        }
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    // Parse CLI; usage errors exit with status 2
    let cli = Cli::parse();

    // Set up logging on stderr; stdout only carries results
    let filter = match std::env::var("NMOD_LOG") {
        Ok(directives) => EnvFilter::new(directives),
        Err(_) if cli.global.verbose => EnvFilter::new("nmod=debug"),
        Err(_) => EnvFilter::new("nmod=warn"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    // Execute command
    match cli.command {
        Commands::Modules(args) => commands::modules::execute(args, &cli.global),
        Commands::Rootdirs(args) => commands::rootdirs::execute(args, &cli.global),
        Commands::Dirs(args) => commands::dirs::execute(args, &cli.global),
        Commands::Help => commands::help::execute(),
        Commands::Completions(args) => commands::completions::execute(args),
    }
}
