//! Markdown highlighting for the editor pane.
//!
//! FLTK colors a `TextEditor` through a parallel style buffer holding one
//! style byte per text byte. [`highlight_styles`] produces that buffer from
//! pulldown-cmark's source offsets; the characters index into the table
//! built by `ui::theme::editor_style_table`.

use std::ops::Range;

use pulldown_cmark::{Event, Options, Parser, Tag};

pub const STYLE_PLAIN: u8 = b'A';
pub const STYLE_HEADING: u8 = b'B';
pub const STYLE_EMPHASIS: u8 = b'C';
pub const STYLE_STRONG: u8 = b'D';
pub const STYLE_CODE: u8 = b'E';
pub const STYLE_LINK: u8 = b'F';
pub const STYLE_QUOTE: u8 = b'G';
pub const STYLE_HTML: u8 = b'H';
pub const STYLE_LIST: u8 = b'I';
pub const STYLE_STRIKE: u8 = b'J';

/// Number of entries the style table must provide ('A'..='J').
pub const STYLE_COUNT: usize = 10;

/// Compute the style string for `text`. The result has exactly `text.len()`
/// bytes; nested constructs are painted after their parents so the innermost
/// one wins.
pub fn highlight_styles(text: &str) -> String {
    let mut styles = vec![STYLE_PLAIN; text.len()];
    if text.is_empty() {
        return String::new();
    }

    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TABLES);

    for (event, range) in Parser::new_ext(text, options).into_offset_iter() {
        let style = match event {
            Event::Start(tag) => match tag {
                Tag::Heading { .. } => STYLE_HEADING,
                Tag::Emphasis => STYLE_EMPHASIS,
                Tag::Strong => STYLE_STRONG,
                Tag::Strikethrough => STYLE_STRIKE,
                Tag::CodeBlock(_) => STYLE_CODE,
                Tag::Link { .. } | Tag::Image { .. } => STYLE_LINK,
                Tag::BlockQuote(_) => STYLE_QUOTE,
                Tag::HtmlBlock => STYLE_HTML,
                Tag::Item => {
                    paint(&mut styles, marker_range(text, &range), STYLE_LIST);
                    continue;
                }
                _ => continue,
            },
            Event::Code(_) => STYLE_CODE,
            Event::Html(_) | Event::InlineHtml(_) => STYLE_HTML,
            _ => continue,
        };
        paint(&mut styles, range, style);
    }

    // Only ASCII style bytes are ever written.
    String::from_utf8(styles).unwrap_or_default()
}

fn paint(styles: &mut [u8], range: Range<usize>, style: u8) {
    let end = range.end.min(styles.len());
    if range.start < end {
        styles[range.start..end].fill(style);
    }
}

/// The bullet or number at the start of a list item ("- ", "12. ").
fn marker_range(text: &str, item: &Range<usize>) -> Range<usize> {
    let body = &text[item.start..item.end.min(text.len())];
    let len = body
        .find(|c: char| c.is_whitespace())
        .unwrap_or(body.len());
    item.start..item.start + len
}

#[cfg(test)]
mod tests {
    use super::*;

    fn style_at(styles: &str, pos: usize) -> u8 {
        styles.as_bytes()[pos]
    }

    #[test]
    fn test_length_matches_input() {
        let text = "# Héllo wörld\n\nSome `code` and *emph* ✓\n";
        assert_eq!(highlight_styles(text).len(), text.len());
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(highlight_styles(""), "");
    }

    #[test]
    fn test_plain_paragraph() {
        let styles = highlight_styles("just words\n");
        assert!(styles.bytes().all(|b| b == STYLE_PLAIN));
    }

    #[test]
    fn test_heading_marked() {
        let styles = highlight_styles("# Title\nbody\n");
        assert_eq!(style_at(&styles, 0), STYLE_HEADING);
        assert_eq!(style_at(&styles, 4), STYLE_HEADING);
        assert_eq!(style_at(&styles, 9), STYLE_PLAIN);
    }

    #[test]
    fn test_inline_styles() {
        let text = "a *b* **c** `d` ~~e~~\n";
        let styles = highlight_styles(text);
        assert_eq!(style_at(&styles, text.find("*b").unwrap()), STYLE_EMPHASIS);
        assert_eq!(style_at(&styles, text.find("**c").unwrap()), STYLE_STRONG);
        assert_eq!(style_at(&styles, text.find('`').unwrap()), STYLE_CODE);
        assert_eq!(style_at(&styles, text.find("~~").unwrap()), STYLE_STRIKE);
        assert_eq!(style_at(&styles, 0), STYLE_PLAIN);
    }

    #[test]
    fn test_innermost_wins() {
        let text = "# A `b`\n";
        let styles = highlight_styles(text);
        assert_eq!(style_at(&styles, 0), STYLE_HEADING);
        assert_eq!(style_at(&styles, text.find('b').unwrap()), STYLE_CODE);
    }

    #[test]
    fn test_links_quotes_and_blocks() {
        let text = "[x](http://a)\n\n> quoted\n\n```\nfn\n```\n";
        let styles = highlight_styles(text);
        assert_eq!(style_at(&styles, 0), STYLE_LINK);
        assert_eq!(style_at(&styles, text.find('>').unwrap()), STYLE_QUOTE);
        assert_eq!(style_at(&styles, text.find("fn").unwrap()), STYLE_CODE);
    }

    #[test]
    fn test_list_marker_only() {
        let text = "- item\n";
        let styles = highlight_styles(text);
        assert_eq!(style_at(&styles, 0), STYLE_LIST);
        assert_eq!(style_at(&styles, 2), STYLE_PLAIN);
    }
}
