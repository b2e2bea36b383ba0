use std::cell::Cell;
use std::path::{Path, PathBuf};
use std::rc::Rc;

pub const APP_NAME: &str = "Markpane";

/// The file currently associated with the editor, plus its dirty state.
///
/// The text itself lives in the FLTK buffer; this only tracks where it
/// belongs on disk. At most one file is associated at a time.
#[derive(Debug, Default)]
pub struct Document {
    file_path: Option<PathBuf>,
    /// Shared with the buffer's modify callback, which sets it on every edit.
    has_unsaved_changes: Rc<Cell<bool>>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    pub fn has_file(&self) -> bool {
        self.file_path.is_some()
    }

    pub fn set_file_path(&mut self, path: PathBuf) {
        self.file_path = Some(path);
    }

    pub fn clear_file_path(&mut self) {
        self.file_path = None;
    }

    /// Directory containing the associated file.
    pub fn directory(&self) -> Option<&Path> {
        self.file_path
            .as_deref()
            .and_then(Path::parent)
            .filter(|p| !p.as_os_str().is_empty())
    }

    pub fn dirty_flag(&self) -> Rc<Cell<bool>> {
        self.has_unsaved_changes.clone()
    }

    pub fn is_dirty(&self) -> bool {
        self.has_unsaved_changes.get()
    }

    pub fn mark_dirty(&self) {
        self.has_unsaved_changes.set(true);
    }

    pub fn mark_clean(&self) {
        self.has_unsaved_changes.set(false);
    }

    pub fn window_title(&self) -> String {
        let prefix = if self.is_dirty() { "*" } else { "" };
        match &self.file_path {
            Some(path) => format!("{}{} - {}", prefix, path.display(), APP_NAME),
            None => format!("{}Untitled - {}", prefix, APP_NAME),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_document_is_untitled_and_clean() {
        let doc = Document::new();
        assert!(!doc.has_file());
        assert!(!doc.is_dirty());
        assert_eq!(doc.window_title(), "Untitled - Markpane");
        assert!(doc.directory().is_none());
    }

    #[test]
    fn test_title_tracks_file_and_dirty_state() {
        let mut doc = Document::new();
        doc.set_file_path(PathBuf::from("/notes/todo.md"));
        assert_eq!(doc.window_title(), "/notes/todo.md - Markpane");

        doc.mark_dirty();
        assert_eq!(doc.window_title(), "*/notes/todo.md - Markpane");

        doc.mark_clean();
        doc.clear_file_path();
        assert_eq!(doc.window_title(), "Untitled - Markpane");
    }

    #[test]
    fn test_dirty_flag_is_shared() {
        let doc = Document::new();
        let flag = doc.dirty_flag();
        flag.set(true);
        assert!(doc.is_dirty());
    }

    #[test]
    fn test_directory_of_bare_file_name() {
        let mut doc = Document::new();
        doc.set_file_path(PathBuf::from("todo.md"));
        assert!(doc.directory().is_none());

        doc.set_file_path(PathBuf::from("/notes/todo.md"));
        assert_eq!(doc.directory(), Some(Path::new("/notes")));
    }

    #[test]
    fn test_associating_a_path_keeps_unsaved_edits() {
        let mut doc = Document::new();
        doc.mark_dirty();
        doc.set_file_path(PathBuf::from("/notes/new.md"));
        assert!(doc.has_file());
        assert!(doc.is_dirty());
    }
}
