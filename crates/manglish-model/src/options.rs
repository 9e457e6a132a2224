use serde::{Deserialize, Serialize};

/// Knobs for turning a lyrics page into slides.
///
/// Two call sites historically disagreed on title handling and on whether a
/// page without lyrics is an error, so both behaviors are selectable here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractOptions {
    /// Reduce the title to alphanumerics, spaces, `_` and `-` so it can name a file.
    pub sanitize_for_filename: bool,
    /// Title used when the page has no usable title element.
    pub fallback_title: String,
    /// Treat a page with no lyrics elements as an error instead of an empty result.
    pub strict: bool,
}

impl Default for ExtractOptions {
    /// Behavior of the HTTP endpoint.
    fn default() -> Self {
        Self {
            sanitize_for_filename: false,
            fallback_title: "Untitled".to_string(),
            strict: true,
        }
    }
}

impl ExtractOptions {
    /// Behavior used when the title becomes a file name.
    pub fn for_filename() -> Self {
        Self {
            sanitize_for_filename: true,
            fallback_title: "song".to_string(),
            strict: false,
        }
    }
}
