//! Application State
//!
//! Built once at startup and shared read-only by every request.

use manglish_acquire::ArchiveFetcher;
use manglish_model::ExtractOptions;

pub struct AppState {
    pub fetcher: ArchiveFetcher,
    pub options: ExtractOptions,
}

impl AppState {
    pub fn new(fetcher: ArchiveFetcher, options: ExtractOptions) -> Self {
        Self { fetcher, options }
    }
}
