//! List command implementation.

use crate::cli::ListArgs;
use crate::error::add_archive_context;
use crate::output::Output;
use anyhow::Result;
use partar_core::list_archive;

pub fn execute(args: &ListArgs, output: &Output) -> Result<()> {
    let entries = add_archive_context(list_archive(&args.archive), &args.archive)?;
    output.entry_listing(&entries)
}
