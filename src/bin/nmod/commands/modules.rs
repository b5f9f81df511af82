//! `nmod modules` command

use anyhow::Result;

use crate::cli::{GlobalArgs, ModulesArgs};
use nmod::ops::{modules, ModulesOptions};

pub fn execute(args: ModulesArgs, global: &GlobalArgs) -> Result<()> {
    let ctx = super::context(global)?;

    let opts = ModulesOptions { dirs: args.dirs };
    let names = modules(&ctx, &opts)?;

    super::print_lines(names)
}
