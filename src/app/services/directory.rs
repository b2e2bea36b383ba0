use std::cmp::Ordering;
use std::fs;
use std::path::{Path, PathBuf};

use super::file_io::is_markdown_path;
use crate::app::infrastructure::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Parent,
    Directory,
    File,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    pub path: PathBuf,
    pub name: String,
    pub kind: EntryKind,
}

impl DirEntry {
    /// Text shown in the directory browser.
    pub fn label(&self) -> String {
        match self.kind {
            EntryKind::Parent => "../".to_string(),
            EntryKind::Directory => format!("{}/", self.name),
            EntryKind::File => self.name.clone(),
        }
    }

    pub fn is_navigable(&self) -> bool {
        self.kind != EntryKind::File
    }
}

/// List the sub-directories and markdown files of `dir`.
///
/// Hidden entries are skipped. Directories come first, then files, each
/// group ordered case-insensitively. A `..` entry leads when `dir` has a parent.
pub fn list_directory(dir: &Path) -> Result<Vec<DirEntry>> {
    let mut entries = Vec::new();

    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let name = entry.file_name().to_string_lossy().into_owned();
        if name.starts_with('.') {
            continue;
        }

        let path = entry.path();
        // Follows symlinks, unlike DirEntry::file_type.
        let kind = if path.is_dir() {
            EntryKind::Directory
        } else if is_markdown_path(&path) {
            EntryKind::File
        } else {
            continue;
        };

        entries.push(DirEntry { path, name, kind });
    }

    entries.sort_by(compare_entries);

    if let Some(parent) = dir.parent() {
        entries.insert(
            0,
            DirEntry {
                path: parent.to_path_buf(),
                name: "..".to_string(),
                kind: EntryKind::Parent,
            },
        );
    }

    Ok(entries)
}

fn compare_entries(a: &DirEntry, b: &DirEntry) -> Ordering {
    let rank = |e: &DirEntry| match e.kind {
        EntryKind::Parent => 0,
        EntryKind::Directory => 1,
        EntryKind::File => 2,
    };
    rank(a)
        .cmp(&rank(b))
        .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
        .then_with(|| a.name.cmp(&b.name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn names(entries: &[DirEntry]) -> Vec<String> {
        entries.iter().map(|e| e.label()).collect()
    }

    #[test]
    fn test_filters_and_orders_entries() {
        let dir = TempDir::new().unwrap();
        let root = dir.path();
        fs::create_dir(root.join("zeta")).unwrap();
        fs::create_dir(root.join("Alpha")).unwrap();
        fs::create_dir(root.join(".git")).unwrap();
        for name in ["b.md", "A.mkd", "c.txt", ".hidden.md", "image.png"] {
            fs::write(root.join(name), "x").unwrap();
        }

        let entries = list_directory(root).unwrap();
        assert_eq!(
            names(&entries),
            vec!["../", "Alpha/", "zeta/", "A.mkd", "b.md"]
        );
        assert_eq!(entries[0].kind, EntryKind::Parent);
        assert_eq!(entries[0].path, root.parent().unwrap());
        assert_eq!(entries[4].path, root.join("b.md"));
    }

    #[test]
    fn test_empty_directory_has_only_parent() {
        let dir = TempDir::new().unwrap();
        let entries = list_directory(dir.path()).unwrap();
        assert_eq!(entries.len(), 1);
        assert!(entries[0].is_navigable());
    }

    #[test]
    fn test_missing_directory_errors() {
        let dir = TempDir::new().unwrap();
        assert!(list_directory(&dir.path().join("gone")).is_err());
    }

    #[test]
    fn test_labels() {
        let file = DirEntry {
            path: PathBuf::from("/x/a.md"),
            name: "a.md".to_string(),
            kind: EntryKind::File,
        };
        assert_eq!(file.label(), "a.md");
        assert!(!file.is_navigable());
    }
}
