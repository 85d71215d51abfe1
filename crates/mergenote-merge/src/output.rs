use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use mergenote_model::{MergeStats, SourceFile, Summary};

use crate::read::SkippedSource;

pub const CLEAN_FILENAME: &str = "merged_clean.txt";
pub const EXPORT_FILENAME: &str = "all_clean_summary.txt";
pub const PROVENANCE_FILENAME: &str = "source.md";

/// Return the first candidate that is not empty, or `""`.
pub fn first_non_empty<'a>(candidates: &[&'a str]) -> &'a str {
    candidates.iter().copied().find(|c| !c.is_empty()).unwrap_or("")
}

/// Write the cleaned text (falling back to the raw merge) as `merged_clean.txt`.
pub fn write_clean(clean: &str, merged: &str, output_dir: &str) -> Result<PathBuf> {
    write_text(output_dir, CLEAN_FILENAME, first_non_empty(&[clean, merged]))
}

/// Write the final result as `all_clean_summary.txt`.
pub fn write_export(text: &str, output_dir: &str) -> Result<PathBuf> {
    write_text(output_dir, EXPORT_FILENAME, text)
}

/// Inputs and results of one run, rendered into `source.md`.
#[derive(Debug)]
pub struct Provenance<'a> {
    pub sources: &'a [SourceFile],
    pub skipped: &'a [SkippedSource],
    pub stats: &'a MergeStats,
    pub summary: Option<&'a Summary>,
}

impl Provenance<'_> {
    pub fn to_markdown(&self, generated_at: &str) -> String {
        let mut md = String::from("# Source\n\n");
        md.push_str(&format!("- **Generated:** {generated_at}\n"));
        md.push_str(&format!("- **Files:** {}\n", self.stats.files));
        md.push_str(&format!(
            "- **Lines:** {} total, {} kept, {} duplicate, {} empty\n",
            self.stats.total_lines, self.stats.kept_lines, self.stats.duplicate_lines, self.stats.empty_lines,
        ));
        if let Some(summary) = self.summary {
            md.push_str(&format!(
                "- **Summary:** {} of {} sentences ({})\n",
                summary.keep_count, summary.total_sentences, summary.percent,
            ));
        }

        md.push_str("\n## Inputs\n\n");
        for source in self.sources {
            md.push_str(&format!("- {} ({} bytes)\n", source.name, source.text.len()));
        }

        if !self.skipped.is_empty() {
            md.push_str("\n## Skipped\n\n");
            for skip in self.skipped {
                md.push_str(&format!("- {}: {}\n", skip.path.display(), skip.reason));
            }
        }

        md
    }
}

/// Write `source.md` describing the run.
pub fn write_provenance(provenance: &Provenance<'_>, output_dir: &str) -> Result<PathBuf> {
    let now = chrono::Utc::now().to_rfc3339();
    let path = write_text(output_dir, PROVENANCE_FILENAME, &provenance.to_markdown(&now))?;
    tracing::info!(path = %path.display(), "Wrote source provenance");
    Ok(path)
}

fn write_text(output_dir: &str, filename: &str, text: &str) -> Result<PathBuf> {
    let dir = Path::new(output_dir);
    fs::create_dir_all(dir).with_context(|| format!("Failed to create {output_dir}"))?;
    let path = dir.join(filename);
    fs::write(&path, text).with_context(|| format!("Failed to write {}", path.display()))?;
    tracing::info!(path = %path.display(), lines = text.lines().count(), "Wrote {filename}");
    Ok(path)
}
