use crate::extract::sanitize_title;
use crate::types::SourceInfo;
use anyhow::{Context, Result};
use manglish_model::SongSlides;
use std::fs;
use std::path::{Path, PathBuf};

/// Write the slide export files to the given directory.
///
/// Creates the directory if it doesn't exist, then writes:
/// - `{title}.json`: the slides exactly as the HTTP endpoint returns them
/// - `{title}.txt`: one headed block per slide, for pasting into a deck
/// - `source.md`: provenance info
///
/// Returns the path of the JSON file.
pub fn write_slides(song: &SongSlides, source: &SourceInfo, output_dir: &str) -> Result<PathBuf> {
    let dir = Path::new(output_dir);
    fs::create_dir_all(dir).with_context(|| format!("Failed to create {output_dir}"))?;

    let stem = file_stem(&song.title);

    let json_path = dir.join(format!("{stem}.json"));
    let json = serde_json::to_string_pretty(song)?;
    fs::write(&json_path, &json)?;
    tracing::info!(path = %json_path.display(), slides = song.slide_count, "Wrote slides JSON");

    let text_path = dir.join(format!("{stem}.txt"));
    let text = song.plain_text();
    fs::write(&text_path, &text)?;
    tracing::info!(path = %text_path.display(), lines = text.lines().count(), "Wrote slides text");

    fs::write(dir.join("source.md"), source.source_md(&song.title, song.slide_count))?;
    tracing::info!(path = %dir.join("source.md").display(), "Wrote source provenance");

    Ok(json_path)
}

/// Cache raw HTML to the output directory so the page can be re-examined
/// without re-fetching.
pub fn cache_html(output_dir: &str, filename: &str, html: &str) -> Result<()> {
    let dir = Path::new(output_dir);
    fs::create_dir_all(dir)?;
    let path = dir.join(filename);
    fs::write(&path, html)?;
    tracing::info!(path = %path.display(), bytes = html.len(), "Cached raw HTML");
    Ok(())
}

fn file_stem(title: &str) -> String {
    let stem = sanitize_title(title);
    if stem.is_empty() {
        "song".to_string()
    } else {
        stem
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_slides() {
        let tmp = tempfile::tempdir().unwrap();
        let out = tmp.path().to_str().unwrap();

        let song = SongSlides::new(
            "Nanniyode",
            vec!["Verse one\nVerse two".into(), "Chorus".into()],
        );
        let source = SourceInfo::new(
            "https://madely.us/lyrics/x/",
            "https://web.archive.org/web/1/https://madely.us/lyrics/x/",
        );
        let json_path = write_slides(&song, &source, out).unwrap();

        assert_eq!(json_path, tmp.path().join("Nanniyode.json"));
        let written = fs::read_to_string(&json_path).unwrap();
        let parsed: SongSlides = serde_json::from_str(&written).unwrap();
        assert_eq!(parsed, song);

        let text = fs::read_to_string(tmp.path().join("Nanniyode.txt")).unwrap();
        assert_eq!(text, "Nanniyode\nVerse one\nVerse two\n\nNanniyode (Part 2)\nChorus");

        let md = fs::read_to_string(tmp.path().join("source.md")).unwrap();
        assert!(md.contains("- **Slides:** 2"));
    }

    #[test]
    fn test_unsafe_title_is_made_file_safe() {
        assert_eq!(file_stem("AC/DC: Live"), "ACDC Live");
        assert_eq!(file_stem("???"), "song");
    }

    #[test]
    fn test_cache_html() {
        let tmp = tempfile::tempdir().unwrap();
        let out = tmp.path().join("nested");
        cache_html(out.to_str().unwrap(), "raw.html", "<html></html>").unwrap();
        assert_eq!(fs::read_to_string(out.join("raw.html")).unwrap(), "<html></html>");
    }
}
