use std::fs;
use std::path::{Path, PathBuf};

use crate::app::infrastructure::error::{AppError, Result};

/// Extensions recognised as markdown documents.
pub const MARKDOWN_EXTENSIONS: &[&str] = &["md", "mkd"];

/// Check if a path names a markdown document (`.md` / `.mkd`, any case).
pub fn is_markdown_path(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| {
            MARKDOWN_EXTENSIONS
                .iter()
                .any(|m| ext.eq_ignore_ascii_case(m))
        })
}

/// Read a document for editing. Every line comes back terminated by `\n`,
/// so CRLF input is normalized and a missing final newline is added.
/// Invalid UTF-8 is replaced with U+FFFD rather than refused.
pub fn read_document(path: &Path) -> Result<String> {
    let raw = fs::read(path)?;
    Ok(normalize_lines(&String::from_utf8_lossy(&raw)))
}

pub fn normalize_lines(raw: &str) -> String {
    let mut content = String::with_capacity(raw.len() + 1);
    for line in raw.lines() {
        content.push_str(line);
        content.push('\n');
    }
    content
}

/// Write the editor text verbatim.
pub fn write_document(path: &Path, text: &str) -> Result<()> {
    fs::write(path, text)?;
    Ok(())
}

/// Sibling `.html` path for an export. When the text after the last `.` of
/// the name is exactly `md` or `mkd` (case-sensitive, a leading dot counts),
/// everything from the first `.` is dropped (`a.b.mkd` -> `a.html`,
/// `.md` -> `.html`). Any other file keeps its full name
/// (`notes.txt` -> `notes.txt.html`, `NOTES.MD` -> `NOTES.MD.html`).
pub fn html_export_path(path: &Path) -> Result<PathBuf> {
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .filter(|n| !n.is_empty())
        .ok_or_else(|| AppError::InvalidPath(path.to_path_buf()))?;

    let suffix = file_name.rsplit_once('.').map(|(_, ext)| ext);
    let stem = if suffix.is_some_and(|ext| MARKDOWN_EXTENSIONS.contains(&ext)) {
        file_name.split('.').next().unwrap_or(file_name)
    } else {
        file_name
    };

    Ok(path.with_file_name(format!("{}.html", stem)))
}

/// Write an exported HTML document next to `source`, returning where it went.
pub fn write_html_export(source: &Path, html: &str) -> Result<PathBuf> {
    let target = html_export_path(source)?;
    fs::write(&target, html)?;
    Ok(target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_is_markdown_path() {
        assert!(is_markdown_path(Path::new("notes.md")));
        assert!(is_markdown_path(Path::new("/a/b/NOTES.MKD")));
        assert!(!is_markdown_path(Path::new("notes.markdown")));
        assert!(!is_markdown_path(Path::new("notes.txt")));
        assert!(!is_markdown_path(Path::new("README")));
    }

    #[test]
    fn test_export_path_for_markdown() {
        assert_eq!(
            html_export_path(Path::new("/docs/notes.md")).unwrap(),
            PathBuf::from("/docs/notes.html")
        );
        assert_eq!(
            html_export_path(Path::new("/docs/a.b.mkd")).unwrap(),
            PathBuf::from("/docs/a.html")
        );
    }

    #[test]
    fn test_export_path_for_other_files() {
        assert_eq!(
            html_export_path(Path::new("/docs/readme.txt")).unwrap(),
            PathBuf::from("/docs/readme.txt.html")
        );
        assert_eq!(
            html_export_path(Path::new("README")).unwrap(),
            PathBuf::from("README.html")
        );
    }

    #[test]
    fn test_export_path_suffix_is_case_sensitive() {
        assert_eq!(
            html_export_path(Path::new("/d/NOTES.MD")).unwrap(),
            PathBuf::from("/d/NOTES.MD.html")
        );
        assert_eq!(
            html_export_path(Path::new("/d/Notes.Mkd")).unwrap(),
            PathBuf::from("/d/Notes.Mkd.html")
        );
    }

    #[test]
    fn test_export_path_for_dot_file() {
        assert_eq!(
            html_export_path(Path::new("/d/.md")).unwrap(),
            PathBuf::from("/d/.html")
        );
        assert_eq!(
            html_export_path(Path::new("/d/.notes.mkd")).unwrap(),
            PathBuf::from("/d/.html")
        );
    }

    #[test]
    fn test_export_path_without_file_name() {
        let err = html_export_path(Path::new("/")).unwrap_err();
        assert!(matches!(err, AppError::InvalidPath(_)));
    }

    #[test]
    fn test_normalize_lines() {
        assert_eq!(normalize_lines("a\r\nb"), "a\nb\n");
        assert_eq!(normalize_lines("a\n\nb\n"), "a\n\nb\n");
        assert_eq!(normalize_lines(""), "");
    }

    #[test]
    fn test_read_write_document() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("doc.md");

        write_document(&path, "# Title\r\nbody").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "# Title\r\nbody");
        assert_eq!(read_document(&path).unwrap(), "# Title\nbody\n");
    }

    #[test]
    fn test_read_invalid_utf8_is_replaced() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("latin1.md");
        fs::write(&path, b"caf\xe9\r\nok").unwrap();

        assert_eq!(read_document(&path).unwrap(), "caf\u{FFFD}\nok\n");
    }

    #[test]
    fn test_read_missing_document() {
        let dir = TempDir::new().unwrap();
        let err = read_document(&dir.path().join("missing.md")).unwrap_err();
        assert!(matches!(err, AppError::Io(_)));
    }

    #[test]
    fn test_write_html_export() {
        let dir = TempDir::new().unwrap();
        let source = dir.path().join("page.md");

        let target = write_html_export(&source, "<html></html>").unwrap();
        assert_eq!(target, dir.path().join("page.html"));
        assert_eq!(fs::read_to_string(target).unwrap(), "<html></html>");
    }
}
