//! CLI definitions using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

const AFTER_LONG_HELP: &str = "\
NOTE: nmod is built to be run at the root of a repository. It does NOT query
for modules - it just scans directories in a straight line above, and
recursively below, the working directory.

modules prints the modules of the given dirs. If no dirs are supplied, it
prints the module of the current directory (if it exists) and all modules in
directories recursively below the current directory.

rootdirs prints the root directories of the given modules. If no modules are
supplied, it prints the root directories of the module of the current
directory (if it exists) and of all modules recursively below it.

dirs prints the directories belonging to the given modules. A directory
holding its own go.mod belongs to that nested module instead. If no modules
are supplied, dirs covers the same modules rootdirs would.";

/// nmod - operations on nested Go modules
#[derive(Parser)]
#[command(name = "nmod")]
#[command(author, version, about, long_about = None)]
#[command(after_long_help = AFTER_LONG_HELP)]
#[command(arg_required_else_help = true, disable_help_subcommand = true)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

/// Flags accepted by every command.
#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Global config file to use instead of the default location
    #[arg(long, global = true, env = "NMOD_CONFIG", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print directories relative to the working directory
    #[arg(long, global = true)]
    pub relative: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the modules of the given dirs
    Modules(ModulesArgs),

    /// Print the root dirs of the given modules
    Rootdirs(RootdirsArgs),

    /// Print the dirs of the given modules
    Dirs(DirsArgs),

    /// Print usage
    Help,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Args)]
pub struct ModulesArgs {
    /// Directories to report modules for (defaults to the current tree)
    pub dirs: Vec<PathBuf>,
}

#[derive(Args)]
pub struct RootdirsArgs {
    /// Module names (defaults to every module in the current tree)
    pub modules: Vec<String>,
}

#[derive(Args)]
pub struct DirsArgs {
    /// Module names (defaults to every module in the current tree)
    pub modules: Vec<String>,
}

#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: Shell,
}
