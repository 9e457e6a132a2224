use thiserror::Error;

/// Everything that can go wrong turning a lyrics URL into slides.
#[derive(Debug, Error)]
pub enum SlidesError {
    #[error("Missing '{0}' in request body")]
    MissingField(String),

    #[error("invalid request body: {0}")]
    InvalidRequest(String),

    #[error("upstream returned HTTP {status} for {url}")]
    UpstreamStatus { status: u16, url: String },

    #[error("failed to fetch {url}: {message}")]
    Transport { url: String, message: String },

    #[error("No lyrics found (class='spanManglish MangFont')")]
    NoLyricsFound,

    #[error("{0}")]
    Unexpected(String),
}

impl SlidesError {
    /// True for failures caused by the caller's request rather than the upstream page.
    pub fn is_validation(&self) -> bool {
        matches!(self, SlidesError::MissingField(_) | SlidesError::InvalidRequest(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            SlidesError::MissingField("url".into()).to_string(),
            "Missing 'url' in request body"
        );
        let upstream = SlidesError::UpstreamStatus {
            status: 404,
            url: "https://web.archive.org/web/1/x".into(),
        };
        assert!(upstream.to_string().contains("404"));
        assert!(SlidesError::NoLyricsFound.to_string().contains("spanManglish MangFont"));
    }

    #[test]
    fn test_is_validation() {
        assert!(SlidesError::MissingField("url".into()).is_validation());
        assert!(SlidesError::InvalidRequest("bad json".into()).is_validation());
        assert!(!SlidesError::NoLyricsFound.is_validation());
    }
}
