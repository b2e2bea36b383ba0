use std::path::Path;
use std::time::{Duration, Instant};

use crate::app::domain::AppSettings;
use crate::app::services::markdown::{
    MarkdownExtensions, preview_font_scale, render_markdown, resolve_image_sources,
    wrap_html_for_preview, wrap_in_html_document,
};

/// Output of one render pass.
pub struct RenderedPreview {
    /// The wrapped document, as shown in the source view and written on export.
    pub document: String,
    /// The variant handed to the preview widget.
    pub preview: String,
    pub elapsed: Duration,
}

/// Markdown to HTML for the preview pane. Every call renders the whole text.
pub struct PreviewController {
    extensions: MarkdownExtensions,
    stylesheet_href: String,
    font_scale: u8,
}

impl PreviewController {
    pub fn new(settings: &AppSettings) -> Self {
        Self {
            extensions: settings.extensions,
            stylesheet_href: settings.stylesheet_href.clone(),
            font_scale: preview_font_scale(settings.font_size),
        }
    }

    /// Render `text`; `base_dir` resolves relative images for the preview widget.
    pub fn render(&self, text: &str, base_dir: Option<&Path>) -> RenderedPreview {
        let start = Instant::now();
        let fragment = render_markdown(text, &self.extensions);
        let document = wrap_in_html_document(&fragment, &self.stylesheet_href);

        let preview_fragment = match base_dir {
            Some(dir) => resolve_image_sources(&fragment, dir),
            None => fragment,
        };
        let preview = wrap_in_html_document(
            &wrap_html_for_preview(&preview_fragment, self.font_scale),
            &self.stylesheet_href,
        );
        let elapsed = start.elapsed();

        tracing::debug!(bytes = text.len(), ?elapsed, "rendered preview");

        RenderedPreview {
            document,
            preview,
            elapsed,
        }
    }

    /// The standalone document written by HTML export.
    pub fn export_document(&self, text: &str) -> String {
        wrap_in_html_document(
            &render_markdown(text, &self.extensions),
            &self.stylesheet_href,
        )
    }
}
