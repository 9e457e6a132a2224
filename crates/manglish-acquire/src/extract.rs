// Title and lyric-line extraction from a lyrics page.
//
// Lyrics live in one or more elements carrying both `spanManglish` and
// `MangFont` classes. Lines inside them are separated by `<br>` elements; the
// text between two breaks is one rendered line.

use std::collections::HashSet;
use std::ops::Deref;

use ego_tree::NodeRef;
use manglish_model::{ExtractOptions, SlidesError};
use scraper::{ElementRef, Html, Node, Selector};

const TITLE_SELECTOR: &str = "a#SongTitleName";

/// Class tokens an element must carry (all of them) to hold lyrics.
pub const LYRICS_CLASSES: [&str; 2] = ["spanManglish", "MangFont"];

/// Parse a page and pull out its title and lyric lines.
pub fn extract_song(
    html: &str,
    options: &ExtractOptions,
) -> Result<(String, Vec<String>), SlidesError> {
    let document = Html::parse_document(html);
    let title = extract_title(&document, options);
    let lines = extract_lines(&document, options.strict)?;
    Ok((title, lines))
}

/// Title of the song, or `options.fallback_title` when the page has none.
pub fn extract_title(document: &Html, options: &ExtractOptions) -> String {
    let title_sel = Selector::parse(TITLE_SELECTOR).expect("valid selector");

    let Some(anchor) = document.select(&title_sel).next() else {
        tracing::debug!(selector = TITLE_SELECTOR, "No title element, using fallback");
        return options.fallback_title.clone();
    };

    let text = anchor.text().collect::<String>();
    let title = if options.sanitize_for_filename {
        sanitize_title(text.trim())
    } else {
        text.trim().to_string()
    };

    if title.is_empty() {
        tracing::debug!("Title element is empty, using fallback");
        return options.fallback_title.clone();
    }
    title
}

/// Keep alphanumerics, spaces, underscores and hyphens.
pub fn sanitize_title(title: &str) -> String {
    let kept: String = title
        .chars()
        .filter(|c| c.is_alphanumeric() || matches!(c, ' ' | '_' | '-'))
        .collect();
    kept.trim().to_string()
}

/// Flatten every lyrics element into trimmed, non-empty lines.
///
/// With `strict`, a page without any lyrics element is an error; otherwise
/// it simply yields no lines.
pub fn extract_lines(document: &Html, strict: bool) -> Result<Vec<String>, SlidesError> {
    let any_sel = Selector::parse("[class]").expect("valid selector");

    let elements: Vec<ElementRef> = document
        .select(&any_sel)
        .filter(|el| is_lyrics_element(el))
        .collect();

    if elements.is_empty() {
        if strict {
            return Err(SlidesError::NoLyricsFound);
        }
        tracing::warn!("No lyrics elements found");
        return Ok(Vec::new());
    }

    let mut lines = Vec::new();
    for element in &elements {
        let mut pending = String::new();
        walk_node(**element, &mut pending, &mut lines);
        flush_line(&mut pending, &mut lines);
    }

    tracing::debug!(elements = elements.len(), lines = lines.len(), "Flattened lyrics");
    Ok(lines)
}

fn is_lyrics_element(element: &ElementRef) -> bool {
    let classes: HashSet<&str> = element.value().classes().collect();
    LYRICS_CLASSES.iter().all(|c| classes.contains(c))
}

/// Collect text under `node`, ending a line at every `<br>` element.
///
/// Only text nodes contribute, so attribute values and comments never leak
/// into a line.
fn walk_node(node: NodeRef<Node>, pending: &mut String, lines: &mut Vec<String>) {
    for child in node.children() {
        match child.value() {
            Node::Text(text) => pending.push_str(text.deref()),
            Node::Element(elem) if elem.name() == "br" => flush_line(pending, lines),
            Node::Element(_) => walk_node(child, pending, lines),
            _ => {}
        }
    }
}

fn flush_line(pending: &mut String, lines: &mut Vec<String>) {
    let trimmed = pending.trim();
    if !trimmed.is_empty() {
        lines.push(trimmed.to_string());
    }
    pending.clear();
}
