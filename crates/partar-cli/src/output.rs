//! Output formatting for command results.

use anyhow::Result;
use console::style;
use partar_core::ArchiveEntry;
use partar_core::EntryKind;
use partar_core::ExtractionReport;
use serde::Serialize;

/// Formats command results for the terminal or as JSON.
pub struct Output {
    json: bool,
    quiet: bool,
}

#[derive(Serialize)]
struct ExtractionSummary {
    files_extracted: usize,
    directories_created: usize,
    symlinks_created: usize,
    entries_skipped: usize,
    bytes_written: u64,
    duration_ms: u128,
}

#[derive(Serialize)]
struct EntryLine {
    path: String,
    kind: &'static str,
    size: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    target: Option<String>,
}

impl From<&ArchiveEntry> for EntryLine {
    fn from(entry: &ArchiveEntry) -> Self {
        let (kind, target) = match &entry.kind {
            EntryKind::File => ("file", None),
            EntryKind::Directory => ("directory", None),
            EntryKind::Symlink { target } => ("symlink", Some(target.display().to_string())),
            EntryKind::Other => ("other", None),
        };
        Self {
            path: entry.path.display().to_string(),
            kind,
            size: entry.size,
            target,
        }
    }
}

impl Output {
    pub fn new(json: bool, quiet: bool) -> Self {
        Self { json, quiet }
    }

    pub fn extraction_report(&self, report: &ExtractionReport) -> Result<()> {
        if self.json {
            let summary = ExtractionSummary {
                files_extracted: report.files_extracted,
                directories_created: report.directories_created,
                symlinks_created: report.symlinks_created,
                entries_skipped: report.entries_skipped,
                bytes_written: report.bytes_written,
                duration_ms: report.duration.as_millis(),
            };
            println!("{}", serde_json::to_string_pretty(&summary)?);
        } else if !self.quiet {
            println!(
                "{} {} files, {} directories, {} symlinks ({} skipped), {} in {:.2?}",
                style("Extracted").green().bold(),
                report.files_extracted,
                report.directories_created,
                report.symlinks_created,
                report.entries_skipped,
                format_size(report.bytes_written),
                report.duration,
            );
        }
        Ok(())
    }

    pub fn entry_listing(&self, entries: &[ArchiveEntry]) -> Result<()> {
        if self.json {
            let lines: Vec<EntryLine> = entries.iter().map(EntryLine::from).collect();
            println!("{}", serde_json::to_string_pretty(&lines)?);
        } else {
            for entry in entries {
                match &entry.kind {
                    EntryKind::Directory => {
                        println!("{:>9}  {}", "-", style(entry.path.display()).blue());
                    }
                    EntryKind::Symlink { target } => {
                        println!(
                            "{:>9}  {} -> {}",
                            "-",
                            style(entry.path.display()).cyan(),
                            target.display()
                        );
                    }
                    EntryKind::File | EntryKind::Other => {
                        println!("{:>9}  {}", entry.size, entry.path.display());
                    }
                }
            }
        }
        Ok(())
    }
}

#[allow(clippy::cast_precision_loss)]
fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if bytes >= GB {
        format!("{:.1} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{bytes} B")
    }
}
