use std::fs;
use std::path::{Path, PathBuf};

use mergenote_model::SourceFile;

/// A source that could not be read and was left out of the batch.
#[derive(Debug, Clone)]
pub struct SkippedSource {
    pub path: PathBuf,
    pub reason: String,
}

/// Sources that were read, and those that were skipped.
#[derive(Debug, Default)]
pub struct ReadOutcome {
    pub sources: Vec<SourceFile>,
    pub skipped: Vec<SkippedSource>,
}

/// Read text sources one after another, in the given order.
///
/// Bytes are decoded as UTF-8, replacing invalid sequences, and a leading
/// byte order mark is dropped. A file that cannot be read is logged and
/// skipped; the rest of the batch continues.
pub fn read_sources<P: AsRef<Path>>(paths: &[P]) -> ReadOutcome {
    let mut outcome = ReadOutcome::default();

    for path in paths {
        let path = path.as_ref();
        match fs::read(path) {
            Ok(bytes) => {
                let text = decode(&bytes);
                tracing::debug!(path = %path.display(), bytes = bytes.len(), "Read source");
                outcome.sources.push(SourceFile::new(source_name(path), text));
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Skipping unreadable source");
                outcome.skipped.push(SkippedSource {
                    path: path.to_path_buf(),
                    reason: e.to_string(),
                });
            }
        }
    }

    outcome
}

fn decode(bytes: &[u8]) -> String {
    let text = String::from_utf8_lossy(bytes);
    text.strip_prefix('\u{FEFF}').unwrap_or(&text).to_string()
}

fn source_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
