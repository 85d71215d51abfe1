// State for one run of the tool.
//
// Every user-visible step goes through a Session method, and every outcome
// ends in a status message that is both stored and logged.

use std::path::Path;

use mergenote_merge::output::first_non_empty;
use mergenote_merge::SkippedSource;
use mergenote_model::{CreatedPage, MergeStats, RetentionPercent, SourceFile, Summary};
use mergenote_notion::NotionClient;

use crate::clipboard::TextSink;

#[derive(Debug, Default)]
pub struct Session {
    pub sources: Vec<SourceFile>,
    pub skipped: Vec<SkippedSource>,
    pub merged_text: String,
    pub clean_text: String,
    pub stats: MergeStats,
    pub summary: Option<Summary>,
    pub percent: RetentionPercent,
    status: String,
}

impl Session {
    pub fn new(percent: RetentionPercent) -> Self {
        Self {
            percent,
            ..Self::default()
        }
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    fn set_status(&mut self, status: impl Into<String>) {
        self.status = status.into();
        tracing::info!(status = %self.status, "Status");
    }

    fn set_failure(&mut self, status: impl Into<String>) {
        self.status = status.into();
        tracing::warn!(status = %self.status, "Status");
    }

    /// Read the given files in order. Unreadable files are skipped.
    pub fn load<P: AsRef<Path>>(&mut self, paths: &[P]) {
        let outcome = mergenote_merge::read_sources(paths);
        self.sources = outcome.sources;
        self.skipped = outcome.skipped;
        self.set_status(format!(
            "Loaded {} files ({} skipped)",
            self.sources.len(),
            self.skipped.len()
        ));
    }

    /// Merge loaded sources and deduplicate their lines.
    ///
    /// Returns `false` and leaves the texts untouched when nothing is loaded.
    pub fn merge_and_clean(&mut self) -> bool {
        if self.sources.is_empty() {
            self.set_failure("No files to merge");
            return false;
        }

        let output = mergenote_merge::merge_sources(&self.sources);
        self.merged_text = output.merged;
        self.clean_text = output.clean;
        self.stats = output.stats;
        self.summary = None;
        self.set_status(format!(
            "Merged and cleaned: {} lines kept, {} duplicates removed",
            self.stats.kept_lines, self.stats.duplicate_lines
        ));
        true
    }

    /// Summarize the cleaned text. Returns `false` if there is nothing to summarize.
    pub fn generate_summary(&mut self) -> bool {
        match mergenote_summarize::summarize(&self.clean_text, self.percent) {
            Some(summary) => {
                self.set_status(format!(
                    "Summary ready: {} of {} sentences",
                    summary.keep_count, summary.total_sentences
                ));
                self.summary = Some(summary);
                true
            }
            None => {
                self.set_failure("Nothing to summarize");
                false
            }
        }
    }

    pub fn summary_text(&self) -> &str {
        self.summary.as_ref().map(|s| s.text.as_str()).unwrap_or("")
    }

    /// Cleaned text, or the raw merge if cleaning produced nothing.
    pub fn clean_or_merged(&self) -> &str {
        first_non_empty(&[self.clean_text.as_str(), self.merged_text.as_str()])
    }

    /// Best available result: summary, cleaned text, or raw merge.
    pub fn export_text(&self) -> &str {
        first_non_empty(&[self.summary_text(), self.clean_text.as_str(), self.merged_text.as_str()])
    }

    /// Copy text to the sink, reporting the outcome as status.
    pub fn copy_to_clipboard(&mut self, sink: &mut dyn TextSink, text: &str) -> bool {
        match sink.copy_text(text) {
            Ok(()) => {
                self.set_status("Copied to clipboard");
                true
            }
            Err(e) => {
                self.set_failure(format!("Copy failed: {e}"));
                false
            }
        }
    }

    /// Create a Notion page from `content`.
    ///
    /// Missing credentials stop before any request is made. Every failure is
    /// reported as status and yields `None`.
    pub async fn create_page(
        &mut self,
        token: &str,
        parent_page_id: &str,
        base_url: Option<&str>,
        title: &str,
        content: &str,
    ) -> Option<CreatedPage> {
        let client = match NotionClient::new(token, parent_page_id) {
            Ok(client) => client,
            Err(e) => {
                self.set_failure(format!("Cannot create Notion page: {e}"));
                return None;
            }
        };
        let client = match base_url {
            Some(url) => client.with_base_url(url),
            None => client,
        };

        self.set_status("Creating Notion page");
        match client.create_page(title, content).await {
            Ok(page) => {
                self.set_status(format!("Created Notion page (id: {})", page.id));
                Some(page)
            }
            Err(e) => {
                self.set_failure(format!(
                    "Notion page creation failed: {e}. Check that the token and parent page id are correct"
                ));
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    struct RecordingSink(Vec<String>);

    impl TextSink for RecordingSink {
        fn copy_text(&mut self, text: &str) -> Result<(), String> {
            self.0.push(text.to_string());
            Ok(())
        }
    }

    struct BrokenSink;

    impl TextSink for BrokenSink {
        fn copy_text(&mut self, _text: &str) -> Result<(), String> {
            Err("no display".to_string())
        }
    }

    fn loaded(texts: &[(&str, &str)]) -> Session {
        let mut session = Session::new(RetentionPercent::default());
        session.sources = texts.iter().map(|(n, t)| SourceFile::new(*n, *t)).collect();
        session
    }

    #[test]
    fn test_load_skips_unreadable() {
        let dir = tempfile::tempdir().unwrap();
        let good = dir.path().join("good.txt");
        fs::write(&good, "line").unwrap();
        let bad = dir.path().join("bad.txt");

        let mut session = Session::new(RetentionPercent::default());
        session.load(&[&good, &bad]);

        assert_eq!(session.sources.len(), 1);
        assert_eq!(session.skipped.len(), 1);
        assert_eq!(session.status(), "Loaded 1 files (1 skipped)");
    }

    #[test]
    fn test_merge_without_sources() {
        let mut session = Session::new(RetentionPercent::default());
        assert!(!session.merge_and_clean());
        assert_eq!(session.status(), "No files to merge");
        assert_eq!(session.export_text(), "");
    }

    #[test]
    fn test_merge_then_summarize() {
        let mut session = loaded(&[("a.txt", "A.\nA.\nB."), ("b.txt", "A.\nA.\nB.")]);
        assert!(session.merge_and_clean());
        assert_eq!(session.clean_text, "#FILE:a.txt\nA.\nB.\n#FILE:b.txt");
        assert_eq!(session.export_text(), session.clean_text);

        assert!(session.generate_summary());
        let summary = session.summary.as_ref().unwrap();
        // "#FILE:a." and "txt" are separate units
        assert_eq!(summary.total_sentences, 6);
        assert_eq!(summary.keep_count, 1);
        assert_eq!(session.export_text(), session.summary_text());
        assert_eq!(session.status(), "Summary ready: 1 of 6 sentences");
    }

    #[test]
    fn test_summary_before_merge() {
        let mut session = loaded(&[("a.txt", "text")]);
        assert!(!session.generate_summary());
        assert_eq!(session.status(), "Nothing to summarize");
    }

    #[test]
    fn test_copy_outcomes() {
        let mut session = Session::new(RetentionPercent::default());

        let mut sink = RecordingSink(Vec::new());
        assert!(session.copy_to_clipboard(&mut sink, "hello"));
        assert_eq!(sink.0, vec!["hello"]);
        assert_eq!(session.status(), "Copied to clipboard");

        assert!(!session.copy_to_clipboard(&mut BrokenSink, "hello"));
        assert_eq!(session.status(), "Copy failed: no display");
    }

    #[tokio::test]
    async fn test_create_page_without_credentials() {
        let mut session = Session::new(RetentionPercent::default());
        // An unroutable base URL would fail loudly if a request were attempted
        let page = session
            .create_page("", "", Some("http://127.0.0.1:9/v1"), "Merged note", "body")
            .await;

        assert!(page.is_none());
        assert!(session.status().starts_with("Cannot create Notion page: missing Notion integration token"));
    }

    #[tokio::test]
    async fn test_create_page_network_failure_reported() {
        let mut session = Session::new(RetentionPercent::default());
        let page = session
            .create_page("secret_abc", "page-1", Some("http://127.0.0.1:9/v1"), "t", "body")
            .await;

        assert!(page.is_none());
        assert!(session.status().starts_with("Notion page creation failed: HTTP request failed"));
    }
}
