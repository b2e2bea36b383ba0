/// All messages that can be sent through the FLTK channel.
/// Widget callbacks only send these; the dispatch loop in main hands each
/// one to `AppState`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    // File
    FileNew,
    FileOpen,
    FileSave,
    FileSaveAs,
    FileExportHtml,
    OpenExportInBrowser,
    FileQuit,
    WindowClose,

    // Editor
    TextChanged,

    // View
    ToggleSourceView,
    ToggleDirectoryView,
    ToggleLineNumbers,
    ToggleHighlighting,
    ToggleDarkMode,

    // Directory browser (1-based browser line)
    DirectoryClicked(i32),
}
