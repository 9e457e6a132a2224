// Slide segmentation.
//
// Lyric lines are grouped into slides; any line containing the delimiter
// marker closes the current slide and is itself dropped.

/// Marker that separates slides. Matches anywhere inside a line.
pub const SLIDE_DELIMITER: &str = "-----";

pub fn is_delimiter(line: &str) -> bool {
    line.contains(SLIDE_DELIMITER)
}

/// Group lines into slides, each slide's lines joined with `\n`.
///
/// A delimiter flushes the pending lines as a slide only if there are any,
/// so runs of delimiters never yield an empty slide. Lines left after the
/// last delimiter form a final slide.
pub fn build_slides<S: AsRef<str>>(lines: &[S]) -> Vec<String> {
    let mut slides = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in lines {
        let line = line.as_ref();
        if is_delimiter(line) {
            if !current.is_empty() {
                slides.push(current.join("\n"));
                current.clear();
            }
        } else {
            current.push(line);
        }
    }

    if !current.is_empty() {
        slides.push(current.join("\n"));
    }

    slides
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_slides() {
        // The empty line has already been dropped by extraction.
        let lines = ["Verse one", "Verse two", "-----", "Chorus one", "-----", "Verse three"];
        assert_eq!(
            build_slides(&lines),
            vec!["Verse one\nVerse two", "Chorus one", "Verse three"]
        );
    }

    #[test]
    fn test_consecutive_delimiters() {
        let lines = ["a", "-----", "-----", "b"];
        assert_eq!(build_slides(&lines), vec!["a", "b"]);
    }

    #[test]
    fn test_leading_and_trailing_delimiters() {
        let lines = ["-----", "a", "b", "-----"];
        assert_eq!(build_slides(&lines), vec!["a\nb"]);
    }

    #[test]
    fn test_delimiter_inside_line() {
        let lines = ["a", "Chorus ------ x2", "b"];
        assert!(is_delimiter("Chorus ------ x2"));
        assert!(!is_delimiter("----"));
        assert_eq!(build_slides(&lines), vec!["a", "b"]);
    }

    #[test]
    fn test_no_delimiters() {
        let lines = ["a", "b", "c"];
        assert_eq!(build_slides(&lines), vec!["a\nb\nc"]);
    }

    #[test]
    fn test_empty_input() {
        let lines: [&str; 0] = [];
        assert!(build_slides(&lines).is_empty());

        let only_delimiters = ["-----", "-----"];
        assert!(build_slides(&only_delimiters).is_empty());
    }

    #[test]
    fn test_lines_preserved_in_order() {
        let lines = vec![
            "l1".to_string(),
            "l2".to_string(),
            "-----".to_string(),
            "l3".to_string(),
            "-----".to_string(),
            "l4".to_string(),
            "l5".to_string(),
        ];
        let slides = build_slides(&lines);

        // Delimiters K = 2, non-adjacent: between 1 and K + 1 slides.
        assert!((1..=3).contains(&slides.len()));
        assert!(slides.iter().all(|s| !s.is_empty()));

        let rejoined: Vec<&str> = slides.iter().flat_map(|s| s.split('\n')).collect();
        let expected: Vec<&str> = lines
            .iter()
            .map(String::as_str)
            .filter(|l| !is_delimiter(l))
            .collect();
        assert_eq!(rejoined, expected);
    }

    #[test]
    fn test_idempotent() {
        let lines = ["a", "-----", "b", "c"];
        assert_eq!(build_slides(&lines), build_slides(&lines));
    }
}
