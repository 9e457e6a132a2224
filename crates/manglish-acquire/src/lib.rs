pub mod archive;
pub mod extract;
pub mod fetch;
pub mod output;
pub mod types;

pub use archive::ArchiveConfig;
pub use fetch::{ArchiveFetcher, FetchedPage};
pub use types::{AcquiredSong, SourceInfo};

use manglish_model::{ExtractOptions, SlidesError};

/// Fetch a lyrics page through the archive and extract its title and lyric lines.
pub async fn acquire(
    fetcher: &ArchiveFetcher,
    url: &str,
    options: &ExtractOptions,
) -> Result<AcquiredSong, SlidesError> {
    let page = fetcher.fetch(url).await?;
    acquire_from_html(&page.html, SourceInfo::new(url, &page.archived_url), options)
}

/// Extract a song from HTML already on hand (no network).
pub fn acquire_from_html(
    html: &str,
    source: SourceInfo,
    options: &ExtractOptions,
) -> Result<AcquiredSong, SlidesError> {
    let (title, lines) = extract::extract_song(html, options)?;
    tracing::info!(title = %title, lines = lines.len(), "Extracted lyrics");

    Ok(AcquiredSong {
        source,
        title,
        lines,
    })
}
