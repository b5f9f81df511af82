//! `nmod dirs` command

use anyhow::Result;

use crate::cli::{DirsArgs, GlobalArgs};
use nmod::ops::dirs;

pub fn execute(args: DirsArgs, global: &GlobalArgs) -> Result<()> {
    let ctx = super::context(global)?;

    let owned = dirs(&ctx, &args.modules)?;

    super::print_dirs(&ctx, owned, global.relative)
}
