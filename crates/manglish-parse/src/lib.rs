use manglish_acquire::AcquiredSong;
use manglish_model::SongSlides;

pub mod slides;

pub use slides::{build_slides, is_delimiter, SLIDE_DELIMITER};

/// Turn an acquired song into the slides the endpoint returns.
pub fn parse(acquired: &AcquiredSong) -> SongSlides {
    let slides = build_slides(&acquired.lines);
    tracing::info!(
        title = %acquired.title,
        lines = acquired.lines.len(),
        slides = slides.len(),
        "Segmented lyrics into slides"
    );
    SongSlides::new(acquired.title.clone(), slides)
}
