use std::path::{Path, PathBuf};

use fltk::dialog::{FileDialogOptions, FileDialogType, NativeFileChooser};

/// Filter offered by the open dialog. FLTK adds "All Files" itself.
pub const MARKDOWN_FILTER: &str = "Markdown Files\t*.{md,mkd}";

fn run_chooser(
    save: bool,
    title: &str,
    filter: &str,
    directory: Option<&Path>,
) -> Option<PathBuf> {
    let kind = if save {
        FileDialogType::BrowseSaveFile
    } else {
        FileDialogType::BrowseFile
    };
    let mut nfc = NativeFileChooser::new(kind);
    nfc.set_title(title);
    nfc.set_filter(filter);
    if save {
        nfc.set_option(FileDialogOptions::SaveAsConfirm);
    }
    if let Some(dir) = directory {
        if let Err(e) = nfc.set_directory(&dir) {
            tracing::debug!("Could not preset dialog directory {}: {:?}", dir.display(), e);
        }
    }
    nfc.show(); // blocks until close

    let filename = nfc.filename();
    if filename.as_os_str().is_empty() {
        None
    } else {
        Some(filename)
    }
}

pub fn native_open_dialog(directory: Option<&Path>) -> Option<PathBuf> {
    run_chooser(false, "Open File", MARKDOWN_FILTER, directory)
}

pub fn native_save_dialog(title: &str, directory: Option<&Path>) -> Option<PathBuf> {
    run_chooser(true, title, MARKDOWN_FILTER, directory)
}
