//! Command implementations

use std::fmt::Display;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use nmod::util::fs::relative_path;
use nmod::GlobalContext;

use crate::cli::GlobalArgs;

pub mod completions;
pub mod dirs;
pub mod help;
pub mod modules;
pub mod rootdirs;

/// Build the context every command runs against.
fn context(global: &GlobalArgs) -> Result<GlobalContext> {
    Ok(GlobalContext::new(global.config.as_deref())?)
}

/// Print one item per line on stdout.
fn print_lines<T: Display>(items: impl IntoIterator<Item = T>) -> Result<()> {
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    for item in items {
        writeln!(out, "{}", item).context("failed to write to stdout")?;
    }
    out.flush().context("failed to write to stdout")
}

/// Print directories, absolute or relative to the working directory.
fn print_dirs(ctx: &GlobalContext, dirs: Vec<PathBuf>, relative: bool) -> Result<()> {
    let dirs = dirs.into_iter().map(|dir| {
        if relative {
            relative_path(ctx.cwd(), &dir)
        } else {
            dir
        }
    });
    print_lines(dirs.map(|dir| dir.display().to_string()))
}
