use serde::{Deserialize, Serialize};

/// Title and lyric lines pulled from one page, before slide segmentation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AcquiredSong {
    pub source: SourceInfo,
    pub title: String,
    /// Non-empty, trimmed lines in document order. Delimiter lines are still present.
    pub lines: Vec<String>,
}

/// Provenance information about the acquisition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceInfo {
    /// URL as the caller supplied it.
    pub url: String,
    /// URL actually fetched (the archive snapshot), or the local path for offline input.
    pub archived_url: String,
    pub fetched_at: String,
}

impl SourceInfo {
    pub fn new(url: &str, archived_url: &str) -> Self {
        Self {
            url: url.to_string(),
            archived_url: archived_url.to_string(),
            fetched_at: chrono::Utc::now().to_rfc3339(),
        }
    }

    /// Generate a source.md provenance file.
    pub fn source_md(&self, title: &str, slide_count: usize) -> String {
        format!(
            "# Source\n\n\
             - **Title:** {}\n\
             - **URL:** {}\n\
             - **Fetched from:** {}\n\
             - **Fetched:** {}\n\
             - **Slides:** {}\n",
            title, self.url, self.archived_url, self.fetched_at, slide_count,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_md() {
        let source = SourceInfo {
            url: "https://madely.us/lyrics/x/".into(),
            archived_url: "https://web.archive.org/web/20250831152901/https://madely.us/lyrics/x/".into(),
            fetched_at: "2026-01-01T00:00:00+00:00".into(),
        };
        let md = source.source_md("Nanniyode", 4);
        assert!(md.starts_with("# Source"));
        assert!(md.contains("- **URL:** https://madely.us/lyrics/x/"));
        assert!(md.contains("- **Slides:** 4"));
    }

    #[test]
    fn test_fetched_at_is_rfc3339() {
        let source = SourceInfo::new("a", "b");
        assert!(chrono::DateTime::parse_from_rfc3339(&source.fetched_at).is_ok());
    }
}
