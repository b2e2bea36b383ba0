use std::path::Path;

use pulldown_cmark::{Options, Parser, html};
use serde::{Deserialize, Serialize};

/// Optional markdown syntax extensions passed through to pulldown-cmark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkdownExtensions {
    #[serde(default = "default_true")]
    pub tables: bool,
    #[serde(default = "default_true")]
    pub strikethrough: bool,
    #[serde(default)]
    pub footnotes: bool,
    #[serde(default)]
    pub task_lists: bool,
}

fn default_true() -> bool {
    true
}

impl Default for MarkdownExtensions {
    fn default() -> Self {
        Self {
            tables: true,
            strikethrough: true,
            footnotes: false,
            task_lists: false,
        }
    }
}

impl MarkdownExtensions {
    pub fn options(&self) -> Options {
        let mut options = Options::empty();
        if self.tables {
            options.insert(Options::ENABLE_TABLES);
        }
        if self.strikethrough {
            options.insert(Options::ENABLE_STRIKETHROUGH);
        }
        if self.footnotes {
            options.insert(Options::ENABLE_FOOTNOTES);
        }
        if self.task_lists {
            options.insert(Options::ENABLE_TASKLISTS);
        }
        options
    }
}

/// Render markdown text to an HTML fragment.
pub fn render_markdown(text: &str, extensions: &MarkdownExtensions) -> String {
    if text.is_empty() {
        return String::new();
    }

    let parser = Parser::new_ext(text, extensions.options());
    let mut html_output = String::with_capacity(text.len() * 3 / 2);
    html::push_html(&mut html_output, parser);
    html_output
}

/// Wrap a rendered fragment in the static document shell used for the
/// preview, the source view and HTML export.
pub fn wrap_in_html_document(fragment: &str, stylesheet_href: &str) -> String {
    format!(
        "<html>\n <head>\n  <link type=\"text/css\" rel=\"stylesheet\" href=\"{}\"/>\n </head>\n <body>\n{}\n </body>\n</html>",
        stylesheet_href, fragment
    )
}

/// HelpView ignores stylesheets, so the preview gets an explicit font wrapper.
/// `font_size` is HelpView's 1..7 HTML size scale.
pub fn wrap_html_for_preview(fragment: &str, font_size: u8) -> String {
    format!(
        "<font face=\"Helvetica\" size=\"{}\">{}</font>",
        font_size.clamp(1, 7),
        fragment
    )
}

/// Map an editor point size onto HelpView's 1..7 font scale.
pub fn preview_font_scale(point_size: u32) -> u8 {
    match point_size {
        0..=10 => 2,
        11..=13 => 3,
        14..=17 => 4,
        18..=23 => 5,
        _ => 6,
    }
}

/// Make relative `<img src>` values absolute under `base_dir` so the preview
/// widget can load them. Remote, data and absolute sources are left as-is.
pub fn resolve_image_sources(html: &str, base_dir: &Path) -> String {
    let mut result = String::with_capacity(html.len());
    let mut rest = html;

    while let Some(img_start) = rest.find("<img ") {
        let (before, tag_and_after) = rest.split_at(img_start);
        result.push_str(before);

        let tag_end = tag_and_after.find('>').map_or(tag_and_after.len(), |i| i + 1);
        let tag = &tag_and_after[..tag_end];

        match src_value_span(tag) {
            Some((start, end)) if is_relative_source(&tag[start..end]) => {
                let absolute = base_dir.join(&tag[start..end]);
                result.push_str(&tag[..start]);
                result.push_str(&absolute.to_string_lossy());
                result.push_str(&tag[end..]);
            }
            _ => result.push_str(tag),
        }

        rest = &tag_and_after[tag_end..];
    }

    result.push_str(rest);
    result
}

/// Byte span of the `src="..."` value inside a tag.
fn src_value_span(tag: &str) -> Option<(usize, usize)> {
    let pattern = "src=\"";
    let pos = tag.to_ascii_lowercase().find(pattern)?;
    let start = pos + pattern.len();
    let end = tag[start..].find('"')? + start;
    Some((start, end))
}

fn is_relative_source(src: &str) -> bool {
    let lower = src.to_ascii_lowercase();
    !(src.is_empty()
        || lower.starts_with("http://")
        || lower.starts_with("https://")
        || lower.starts_with("data:")
        || lower.starts_with("file:")
        || Path::new(src).is_absolute())
}
