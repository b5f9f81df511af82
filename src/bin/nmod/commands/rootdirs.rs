//! `nmod rootdirs` command

use anyhow::Result;

use crate::cli::{GlobalArgs, RootdirsArgs};
use nmod::ops::rootdirs;

pub fn execute(args: RootdirsArgs, global: &GlobalArgs) -> Result<()> {
    let ctx = super::context(global)?;

    let roots = rootdirs(&ctx, &args.modules)?;

    super::print_dirs(&ctx, roots, global.relative)
}
