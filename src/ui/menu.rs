use fltk::{
    app::Sender,
    enums::Shortcut,
    menu::{MenuBar, MenuFlag},
    prelude::*,
};

use crate::app::domain::{AppSettings, Message};

pub const MENU_SAVE: &str = "File/Save";
pub const MENU_EXPORT_HTML: &str = "File/Export HTML";
pub const MENU_OPEN_EXPORT: &str = "File/Open Export in Browser";
pub const MENU_SOURCE: &str = "View/HTML Source";
pub const MENU_DIRECTORY: &str = "View/Directory";
pub const MENU_LINE_NUMBERS: &str = "View/Line Numbers";
pub const MENU_HIGHLIGHTING: &str = "View/Markdown Highlighting";
pub const MENU_DARK_MODE: &str = "View/Dark Mode";

fn toggle_flag(on: bool) -> MenuFlag {
    if on { MenuFlag::Toggle | MenuFlag::Value } else { MenuFlag::Toggle }
}

pub fn build_menu(menu: &mut MenuBar, sender: &Sender<Message>, settings: &AppSettings, initial_dark_mode: bool) {
    let s = sender;

    // File
    menu.add("File/New", Shortcut::Ctrl | 'n', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::FileNew) });
    menu.add("File/Open...", Shortcut::Ctrl | 'o', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::FileOpen) });
    menu.add(MENU_SAVE, Shortcut::Ctrl | 's', MenuFlag::Inactive, { let s = *s; move |_| s.send(Message::FileSave) });
    menu.add("File/Save As...", Shortcut::Ctrl | Shortcut::Shift | 's', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::FileSaveAs) });
    menu.add(MENU_EXPORT_HTML, Shortcut::Ctrl | 'e', MenuFlag::Inactive, { let s = *s; move |_| s.send(Message::FileExportHtml) });
    menu.add(MENU_OPEN_EXPORT, Shortcut::Ctrl | 'b', MenuFlag::MenuDivider | MenuFlag::Inactive, { let s = *s; move |_| s.send(Message::OpenExportInBrowser) });
    menu.add("File/Quit", Shortcut::Ctrl | 'q', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::FileQuit) });

    // View
    menu.add(MENU_SOURCE, Shortcut::Ctrl | 'u', toggle_flag(settings.show_source_view), { let s = *s; move |_| s.send(Message::ToggleSourceView) });
    menu.add(MENU_DIRECTORY, Shortcut::Ctrl | 'd', toggle_flag(settings.show_directory_view), { let s = *s; move |_| s.send(Message::ToggleDirectoryView) });
    menu.add(MENU_LINE_NUMBERS, Shortcut::None, toggle_flag(settings.line_numbers_enabled), { let s = *s; move |_| s.send(Message::ToggleLineNumbers) });
    menu.add(MENU_HIGHLIGHTING, Shortcut::None, toggle_flag(settings.highlighting_enabled), { let s = *s; move |_| s.send(Message::ToggleHighlighting) });
    menu.add(MENU_DARK_MODE, Shortcut::None, toggle_flag(initial_dark_mode), { let s = *s; move |_| s.send(Message::ToggleDarkMode) });
}

/// Enable or grey out a menu entry.
pub fn set_item_active(menu: &MenuBar, path: &str, active: bool) {
    if let Some(mut item) = menu.find_item(path) {
        if active {
            item.activate();
        } else {
            item.deactivate();
        }
    }
}
