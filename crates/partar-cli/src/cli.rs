//! CLI argument parsing using clap.

use clap::Parser;
use clap::Subcommand;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "partar")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output results in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Extract archive contents
    Extract(ExtractArgs),
    /// List archive contents without extraction
    List(ListArgs),
}

#[derive(clap::Args)]
pub struct ExtractArgs {
    /// Path to the tar.gz archive
    #[arg(value_name = "ARCHIVE")]
    pub archive: PathBuf,

    /// Output directory (default: current directory)
    #[arg(value_name = "OUTPUT_DIR")]
    pub output_dir: Option<PathBuf>,

    /// Maximum number of concurrent write workers
    #[arg(long, default_value_t = partar_core::DEFAULT_MAX_WORKERS)]
    pub max_workers: usize,

    /// Preserve file permissions from the archive (Unix only)
    #[arg(long)]
    pub preserve_permissions: bool,

    /// Fail on entry types that cannot be materialized (hard links,
    /// FIFOs, device nodes) instead of skipping them
    #[arg(long)]
    pub fail_unsupported: bool,
}

#[derive(clap::Args)]
pub struct ListArgs {
    /// Path to the tar.gz archive
    #[arg(value_name = "ARCHIVE")]
    pub archive: PathBuf,
}
