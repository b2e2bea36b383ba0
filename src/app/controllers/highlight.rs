use crate::app::services::highlight::{STYLE_PLAIN, highlight_styles};

/// Decides what goes into the editor's style buffer.
pub struct HighlightController {
    pub enabled: bool,
}

impl HighlightController {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Toggle highlighting. Returns new enabled state.
    pub fn toggle(&mut self) -> bool {
        self.enabled = !self.enabled;
        self.enabled
    }

    /// Style string for the whole text; all plain when disabled.
    pub fn styles_for(&self, text: &str) -> String {
        if self.enabled {
            highlight_styles(text)
        } else {
            plain_styles(text.len())
        }
    }
}

/// Filler keeping the style buffer the same length as inserted text.
pub fn plain_styles(len: usize) -> String {
    String::from_utf8(vec![STYLE_PLAIN; len]).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_is_plain() {
        let hl = HighlightController::new(false);
        assert_eq!(hl.styles_for("# Title"), "AAAAAAA");
    }

    #[test]
    fn test_enabled_highlights() {
        let hl = HighlightController::new(true);
        assert!(hl.styles_for("# Title").starts_with('B'));
    }

    #[test]
    fn test_toggle() {
        let mut hl = HighlightController::new(true);
        assert!(!hl.toggle());
        assert!(hl.toggle());
    }
}
