use std::time::Duration;

use manglish_model::SlidesError;

use crate::archive::ArchiveConfig;

/// A page pulled from the archive.
#[derive(Debug, Clone)]
pub struct FetchedPage {
    pub archived_url: String,
    pub html: String,
}

/// Fetches lyrics pages through the archive snapshot.
///
/// Holds one `reqwest::Client` for the life of the process. There is no
/// retry: a failed or non-2xx fetch is returned to the caller as is.
#[derive(Debug, Clone)]
pub struct ArchiveFetcher {
    client: reqwest::Client,
    config: ArchiveConfig,
}

impl ArchiveFetcher {
    pub fn new(config: ArchiveConfig) -> Result<Self, SlidesError> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| SlidesError::Unexpected(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { client, config })
    }

    pub async fn fetch(&self, original_url: &str) -> Result<FetchedPage, SlidesError> {
        let archived_url = self.config.archived_url(original_url);
        tracing::info!(url = %archived_url, "Fetching archived page");

        let response = self
            .client
            .get(&archived_url)
            .send()
            .await
            .map_err(|e| self.transport_error(&archived_url, e))?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(
                status = status.as_u16(),
                url = %archived_url,
                "Archive returned an error status"
            );
            return Err(SlidesError::UpstreamStatus {
                status: status.as_u16(),
                url: archived_url,
            });
        }

        let html = response
            .text()
            .await
            .map_err(|e| self.transport_error(&archived_url, e))?;
        tracing::info!(bytes = html.len(), "Received HTML");

        Ok(FetchedPage { archived_url, html })
    }

    fn transport_error(&self, url: &str, e: reqwest::Error) -> SlidesError {
        let message = if e.is_timeout() {
            format!("timed out after {}s", self.config.timeout_secs)
        } else {
            e.to_string()
        };
        tracing::error!(url = %url, error = %message, "Archive fetch failed");
        SlidesError::Transport {
            url: url.to_string(),
            message,
        }
    }
}
