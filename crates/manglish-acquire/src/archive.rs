use serde::{Deserialize, Serialize};

/// Snapshot root every lyrics page is fetched through.
pub const DEFAULT_ARCHIVE_BASE: &str = "https://web.archive.org/web/20250831152901";

pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36";

/// Where and how archived pages are fetched. Built once at startup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArchiveConfig {
    pub archive_base: String,
    pub timeout_secs: u64,
    pub user_agent: String,
    /// Drop a leading `http://` / `https://` from the caller's URL before appending it.
    pub strip_scheme: bool,
}

impl Default for ArchiveConfig {
    fn default() -> Self {
        Self {
            archive_base: DEFAULT_ARCHIVE_BASE.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            strip_scheme: false,
        }
    }
}

impl ArchiveConfig {
    pub fn new(archive_base: impl Into<String>) -> Self {
        Self {
            archive_base: archive_base.into(),
            ..Default::default()
        }
    }

    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Build `<archive_base>/<original>`.
    pub fn archived_url(&self, original: &str) -> String {
        let base = self.archive_base.trim_end_matches('/');
        let original = original.trim();
        let original = if self.strip_scheme {
            strip_scheme(original)
        } else {
            original
        };
        format!("{base}/{original}")
    }
}

fn strip_scheme(url: &str) -> &str {
    url.strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .unwrap_or(url)
}
