//! Extract command implementation.

use crate::cli::ExtractArgs;
use crate::error::add_archive_context;
use crate::output::Output;
use anyhow::Context;
use anyhow::Result;
use partar_core::ExtractConfig;
use partar_core::UnsupportedPolicy;
use partar_core::extract_archive;
use std::env;

pub fn execute(args: &ExtractArgs, output: &Output) -> Result<()> {
    let output_dir = match &args.output_dir {
        Some(dir) => dir.clone(),
        None => env::current_dir().context("failed to get current directory")?,
    };

    let config = ExtractConfig {
        max_workers: args.max_workers,
        preserve_permissions: args.preserve_permissions,
        unsupported: if args.fail_unsupported {
            UnsupportedPolicy::Fail
        } else {
            UnsupportedPolicy::Skip
        },
    };

    let report = add_archive_context(
        extract_archive(&args.archive, &output_dir, &config),
        &args.archive,
    )?;

    output.extraction_report(&report)
}
