use serde::{Deserialize, Serialize};

/// The lyrics of one song, split into presentation slides.
///
/// This is the only thing the service returns. `slide_count` is derived
/// from `slides` at construction and serialized alongside it so clients
/// don't have to count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SongSlides {
    pub title: String,
    pub slide_count: usize,
    /// Slide bodies in document order, lines joined with `\n`. Never empty strings.
    pub slides: Vec<String>,
}

impl SongSlides {
    pub fn new(title: impl Into<String>, slides: Vec<String>) -> Self {
        Self {
            title: title.into(),
            slide_count: slides.len(),
            slides,
        }
    }

    /// Heading for the slide at `index` (zero-based).
    ///
    /// The first slide carries the bare title; later ones are numbered
    /// from 2, e.g. "Song (Part 2)".
    pub fn slide_heading(&self, index: usize) -> String {
        if index == 0 {
            self.title.clone()
        } else {
            format!("{} (Part {})", self.title, index + 1)
        }
    }

    /// Plain text rendering: each slide under its heading, blocks separated by a blank line.
    pub fn plain_text(&self) -> String {
        self.slides
            .iter()
            .enumerate()
            .map(|(i, body)| format!("{}\n{}", self.slide_heading(i), body))
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slide_count_derived() {
        let song = SongSlides::new("Nanniyode", vec!["a\nb".into(), "c".into()]);
        assert_eq!(song.slide_count, 2);
        assert_eq!(song.slides.len(), song.slide_count);

        let empty = SongSlides::new("Untitled", Vec::new());
        assert_eq!(empty.slide_count, 0);
    }

    #[test]
    fn test_serialized_shape() {
        let song = SongSlides::new("Nanniyode", vec!["Verse one\nVerse two".into()]);
        let value = serde_json::to_value(&song).unwrap();
        assert_eq!(value["title"], "Nanniyode");
        assert_eq!(value["slide_count"], 1);
        assert_eq!(value["slides"][0], "Verse one\nVerse two");
    }

    #[test]
    fn test_slide_headings() {
        let song = SongSlides::new("Sthuthi", vec!["a".into(), "b".into(), "c".into()]);
        assert_eq!(song.slide_heading(0), "Sthuthi");
        assert_eq!(song.slide_heading(1), "Sthuthi (Part 2)");
        assert_eq!(song.slide_heading(2), "Sthuthi (Part 3)");
    }

    #[test]
    fn test_plain_text() {
        let song = SongSlides::new("Sthuthi", vec!["a\nb".into(), "c".into()]);
        assert_eq!(song.plain_text(), "Sthuthi\na\nb\n\nSthuthi (Part 2)\nc");
    }
}
