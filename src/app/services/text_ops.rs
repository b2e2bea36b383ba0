use std::path::Path;
use std::time::Duration;

/// Extract the file name component of a path for status messages.
///
/// Returns "Unknown" when the path has no usable file name.
pub fn extract_filename(path: &Path) -> String {
    path.file_name()
        .and_then(|n| n.to_str())
        .filter(|s| !s.is_empty() && *s != ".")
        .map(|s| s.to_string())
        .unwrap_or_else(|| "Unknown".to_string())
}

/// Status bar text after a preview render.
pub fn render_status(elapsed: Duration) -> String {
    format!("Render time: {} ms", elapsed.as_millis())
}

/// Pixel width of an editor showing `columns` average characters,
/// plus the text margin on both sides.
pub fn editor_pixel_width(avg_char_width: f64, columns: u32, margin: i32) -> i32 {
    (avg_char_width * f64::from(columns)).round() as i32 + 2 * margin
}

/// Count lines the way the editor shows them (a trailing newline opens an empty line).
pub fn line_count(text: &str) -> usize {
    text.bytes().filter(|b| *b == b'\n').count() + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_filename_from_path() {
        assert_eq!(extract_filename(Path::new("/home/user/notes.md")), "notes.md");
        assert_eq!(extract_filename(Path::new("notes.mkd")), "notes.mkd");
    }

    #[test]
    fn test_extract_filename_edge_cases() {
        assert_eq!(extract_filename(Path::new("/home/user/")), "user");
        assert_eq!(extract_filename(Path::new("")), "Unknown");
        assert_eq!(extract_filename(Path::new("/")), "Unknown");
    }

    #[test]
    fn test_render_status() {
        assert_eq!(render_status(Duration::from_micros(2_400)), "Render time: 2 ms");
        assert_eq!(render_status(Duration::ZERO), "Render time: 0 ms");
    }

    #[test]
    fn test_editor_pixel_width() {
        assert_eq!(editor_pixel_width(9.0, 67, 4), 611);
        assert_eq!(editor_pixel_width(8.6, 67, 0), 576);
    }

    #[test]
    fn test_line_count() {
        assert_eq!(line_count(""), 1);
        assert_eq!(line_count("a"), 1);
        assert_eq!(line_count("a\nb\n"), 3);
    }
}
