use std::fs;
use std::path::{Path, PathBuf};

use fltk::{
    app::{self, Sender},
    browser::HoldBrowser,
    dialog,
    draw,
    enums::Font,
    frame::Frame,
    group::Flex,
    menu::MenuBar,
    misc::HelpView,
    prelude::*,
    text::{TextBuffer, TextDisplay, TextEditor, WrapMode},
    window::Window,
};

use super::controllers::highlight::{HighlightController, plain_styles};
use super::controllers::preview::PreviewController;
use super::domain::{AppSettings, Document, Message, ThemeMode};
use super::infrastructure::error::AppError;
use super::services::directory::{DirEntry, list_directory};
use super::services::file_io::{read_document, write_document, write_html_export};
use super::services::text_ops::{editor_pixel_width, extract_filename, line_count, render_status};
use crate::ui::file_dialogs::{native_open_dialog, native_save_dialog};
use crate::ui::main_window::{DIRECTORY_WIDTH, MainWidgets};
use crate::ui::menu::{MENU_EXPORT_HTML, MENU_OPEN_EXPORT, MENU_SAVE, set_item_active};
use crate::ui::theme::{ThemedWidgets, apply_theme, editor_style_table, fltk_font};

/// Padding FLTK keeps on each side of the editor text.
const EDITOR_MARGIN: i32 = 4;

pub struct AppState {
    pub window: Window,
    pub menu: MenuBar,
    pub body: Flex,
    pub editor: TextEditor,
    pub buffer: TextBuffer,
    pub style_buffer: TextBuffer,
    pub preview: HelpView,
    pub source_view: TextDisplay,
    pub source_buffer: TextBuffer,
    pub directory: HoldBrowser,
    pub status: Frame,
    pub sender: Sender<Message>,
    pub settings: AppSettings,
    pub document: Document,
    pub preview_ctl: PreviewController,
    pub highlight: HighlightController,
    pub dark_mode: bool,
    pub show_source: bool,
    pub show_directory: bool,
    pub show_linenumbers: bool,
    linenumber_px: i32,
    /// Directory shown in the browser; follows the open file until the user navigates.
    directory_root: Option<PathBuf>,
    directory_entries: Vec<DirEntry>,
}

impl AppState {
    pub fn new(widgets: MainWidgets, sender: Sender<Message>, settings: AppSettings, dark_mode: bool) -> Self {
        let MainWidgets {
            wind,
            body,
            menu,
            directory,
            editor,
            preview,
            source_view,
            status,
        } = widgets;

        let document = Document::new();
        let mut buffer = TextBuffer::default();
        let style_buffer = TextBuffer::default();

        // Keep the style buffer aligned byte for byte until the next restyle,
        // and turn every edit into a render request.
        let dirty = document.dirty_flag();
        let mut style_buf = style_buffer.clone();
        let s = sender;
        buffer.add_modify_callback(move |pos, inserted, deleted, _restyled, _deleted_text| {
            if inserted > 0 || deleted > 0 {
                dirty.set(true);
                if deleted > 0 {
                    style_buf.remove(pos, pos + deleted);
                }
                if inserted > 0 {
                    style_buf.insert(pos, &plain_styles(inserted as usize));
                }
                s.send(Message::TextChanged);
            }
        });

        let source_buffer = source_view.buffer().unwrap_or_default();

        Self {
            window: wind,
            menu,
            body,
            editor,
            buffer,
            style_buffer,
            preview,
            source_view,
            source_buffer,
            directory,
            status,
            sender,
            preview_ctl: PreviewController::new(&settings),
            highlight: HighlightController::new(settings.highlighting_enabled),
            show_source: settings.show_source_view,
            show_directory: settings.show_directory_view,
            show_linenumbers: settings.line_numbers_enabled,
            settings,
            document,
            dark_mode,
            linenumber_px: 0,
            directory_root: std::env::current_dir().ok(),
            directory_entries: Vec::new(),
        }
    }

    /// One-time widget setup. Call after the window is shown so font metrics are available.
    pub fn initialize(&mut self) {
        let font = fltk_font(self.settings.font);
        let size = self.settings.font_size as i32;

        self.editor.set_buffer(self.buffer.clone());
        self.editor.set_text_font(font);
        self.editor.set_text_size(size);
        self.editor.wrap_mode(WrapMode::AtBounds, 0);
        self.bind_style_table();

        self.source_view.set_text_font(Font::Courier);
        self.source_view.set_text_size(12);
        self.preview.set_text_font(Font::Helvetica);
        self.directory.set_format_char('\0');

        self.sync_file_actions();
        self.apply_current_theme();
        self.update_linenumber_width();
        self.apply_editor_width();
        self.apply_layout();
        self.refresh_directory();
        self.update_window_title();
        self.text_changed();
    }

    // --- File operations ---

    /// Open a path given on the command line. A path that does not exist yet
    /// becomes an empty document that will be created on first save.
    pub fn open_startup_file(&mut self, path: PathBuf) {
        if path.exists() {
            self.open_file(path);
        } else {
            let path = std::path::absolute(&path).unwrap_or(path);
            tracing::info!(path = %path.display(), "starting new document");
            self.document.set_file_path(path);
            self.sync_file_actions();
            self.follow_document_directory();
            self.update_window_title();
            self.text_changed();
        }
    }

    pub fn open_file(&mut self, path: PathBuf) {
        let path = fs::canonicalize(&path).unwrap_or(path);
        let content = match read_document(&path) {
            Ok(content) => content,
            Err(e) => {
                self.report_error("open", &path, &e);
                return;
            }
        };

        tracing::info!(path = %path.display(), bytes = content.len(), "opened document");
        self.buffer.set_text(&content);
        self.document.set_file_path(path);
        self.document.mark_clean();
        self.editor.set_insert_position(0);
        self.editor.show_insert_position();
        self.sync_file_actions();
        self.update_window_title();
        self.follow_document_directory();
    }

    pub fn file_new(&mut self) {
        if self.document.has_file() {
            self.file_save();
            if self.document.is_dirty() {
                return;
            }
        }
        self.document.clear_file_path();
        self.buffer.set_text("");
        self.document.mark_clean();
        self.sync_file_actions();
        self.update_window_title();
        self.text_changed();
    }

    pub fn file_open(&mut self) {
        let dir = self.dialog_directory();
        if let Some(path) = native_open_dialog(dir.as_deref()) {
            self.open_file(path);
        }
    }

    pub fn file_save(&mut self) {
        if !self.document.has_file() {
            let dir = self.dialog_directory();
            let Some(path) = native_save_dialog("Save File", dir.as_deref()) else {
                return;
            };
            self.document.set_file_path(path);
            self.sync_file_actions();
            self.update_window_title();
        }

        let Some(path) = self.document.file_path().map(Path::to_path_buf) else {
            return;
        };
        if let Err(e) = write_document(&path, &self.buffer.text()) {
            self.report_error("save", &path, &e);
            return;
        }

        tracing::info!(path = %path.display(), "saved document");
        self.document.mark_clean();
        self.update_window_title();
        self.set_status(&format!("Saved {}", extract_filename(&path)));
        self.follow_document_directory();
    }

    pub fn file_save_as(&mut self) {
        let dir = self.dialog_directory();
        if let Some(path) = native_save_dialog("Save File As", dir.as_deref()) {
            self.document.set_file_path(path);
            self.sync_file_actions();
            self.update_window_title();
            self.file_save();
        }
    }

    /// Write the rendered document next to the current file. Returns the
    /// exported path on success.
    pub fn file_export_html(&mut self) -> Option<PathBuf> {
        if !self.document.has_file() {
            let dir = self.dialog_directory();
            let path = native_save_dialog("Export HTML For", dir.as_deref())?;
            self.document.set_file_path(path);
            self.sync_file_actions();
            self.update_window_title();
        }

        let source = self.document.file_path()?.to_path_buf();
        let html = self.preview_ctl.export_document(&self.buffer.text());
        match write_html_export(&source, &html) {
            Ok(target) => {
                tracing::info!(path = %target.display(), "exported html");
                self.set_status(&format!("Exported {}", extract_filename(&target)));
                Some(target)
            }
            Err(e) => {
                self.report_error("export", &source, &e);
                None
            }
        }
    }

    pub fn open_export_in_browser(&mut self) {
        if let Some(target) = self.file_export_html() {
            if let Err(e) = open::that(&target) {
                self.report_error("open in browser", &target, &AppError::Io(e));
            }
        }
    }

    /// Handle quit request. Returns `true` if the app should exit.
    pub fn file_quit(&mut self) -> bool {
        if self.document.is_dirty() {
            let choice = dialog::choice2_default(
                "You have unsaved changes.",
                "Save",
                "Quit Without Saving",
                "Cancel",
            );
            match choice {
                Some(0) => {
                    self.file_save();
                    if self.document.is_dirty() {
                        return false;
                    }
                }
                Some(1) => {}
                _ => return false,
            }
        }

        self.persist_view_settings();
        true
    }

    fn dialog_directory(&self) -> Option<PathBuf> {
        self.document
            .directory()
            .map(Path::to_path_buf)
            .or_else(|| self.directory_root.clone())
    }

    /// Save and Export are active exactly while a file is associated.
    fn sync_file_actions(&mut self) {
        let enabled = self.document.has_file();
        for path in [MENU_SAVE, MENU_EXPORT_HTML, MENU_OPEN_EXPORT] {
            set_item_active(&self.menu, path, enabled);
        }
        self.menu.redraw();
    }

    fn report_error(&mut self, action: &str, path: &Path, err: &AppError) {
        tracing::warn!(path = %path.display(), error = %err, "failed to {}", action);
        self.set_status(&format!("Could not {} {}: {}", action, extract_filename(path), err));
    }

    // --- Rendering ---

    /// Re-render the preview from the whole buffer.
    pub fn text_changed(&mut self) {
        let text = self.buffer.text();
        let rendered = self.preview_ctl.render(&text, self.document.directory());

        let top = self.preview.top_line();
        self.preview.set_value(&rendered.preview);
        self.preview.set_top_line(top);
        self.source_buffer.set_text(&rendered.document);

        self.set_status(&render_status(rendered.elapsed));
        self.restyle(&text);
        self.update_window_title();
        self.update_linenumber_width();
    }

    fn restyle(&mut self, text: &str) {
        self.style_buffer.set_text(&self.highlight.styles_for(text));
        self.editor.redraw();
    }

    fn bind_style_table(&mut self) {
        let table = editor_style_table(
            fltk_font(self.settings.font),
            self.settings.font_size as i32,
            self.dark_mode,
        );
        self.editor.set_highlight_data(self.style_buffer.clone(), table);
    }

    pub fn update_window_title(&mut self) {
        let title = self.document.window_title();
        if self.window.label() != title {
            self.window.set_label(&title);
        }
    }

    fn set_status(&mut self, text: &str) {
        // '@' starts an FLTK symbol in labels
        self.status.set_label(&text.replace('@', "@@"));
        self.status.redraw();
    }

    // --- Directory view ---

    fn follow_document_directory(&mut self) {
        if let Some(dir) = self.document.directory() {
            self.directory_root = Some(dir.to_path_buf());
        }
        self.refresh_directory();
    }

    pub fn refresh_directory(&mut self) {
        let Some(root) = self.directory_root.clone() else {
            return;
        };
        let entries = match list_directory(&root) {
            Ok(entries) => entries,
            Err(e) => {
                self.report_error("list", &root, &e);
                return;
            }
        };

        self.directory.clear();
        for entry in &entries {
            self.directory.add(&entry.label());
        }
        let current = self.document.file_path();
        if let Some(idx) = entries.iter().position(|e| Some(e.path.as_path()) == current) {
            self.directory.select(idx as i32 + 1);
        }
        self.directory_entries = entries;
        self.directory.redraw();
    }

    /// `line` is the 1-based browser line.
    pub fn directory_clicked(&mut self, line: i32) {
        let Some(entry) = usize::try_from(line - 1)
            .ok()
            .and_then(|idx| self.directory_entries.get(idx))
            .cloned()
        else {
            return;
        };

        if entry.is_navigable() {
            self.directory_root = Some(entry.path);
            self.refresh_directory();
            return;
        }

        if self.document.file_path() == Some(entry.path.as_path()) {
            return;
        }
        if self.document.has_file() {
            self.file_save();
            if self.document.is_dirty() {
                return;
            }
        }
        self.open_file(entry.path);
    }

    // --- View toggles ---

    pub fn toggle_source_view(&mut self) {
        self.show_source = !self.show_source;
        self.apply_layout();
    }

    pub fn toggle_directory_view(&mut self) {
        self.show_directory = !self.show_directory;
        if self.show_directory {
            self.refresh_directory();
        }
        self.apply_layout();
    }

    pub fn toggle_line_numbers(&mut self) {
        self.show_linenumbers = !self.show_linenumbers;
        self.update_linenumber_width();
        self.editor.redraw();
    }

    pub fn toggle_highlighting(&mut self) {
        self.highlight.toggle();
        self.settings.highlighting_enabled = self.highlight.enabled;
        let text = self.buffer.text();
        self.restyle(&text);
    }

    pub fn toggle_dark_mode(&mut self) {
        self.dark_mode = !self.dark_mode;
        self.settings.theme_mode = if self.dark_mode { ThemeMode::Dark } else { ThemeMode::Light };
        self.apply_current_theme();
        self.bind_style_table();
        self.editor.redraw();
    }

    fn apply_current_theme(&mut self) {
        apply_theme(
            ThemedWidgets {
                window: &mut self.window,
                menu: &mut self.menu,
                editor: &mut self.editor,
                preview: &mut self.preview,
                source_view: &mut self.source_view,
                directory: &mut self.directory,
                status: &mut self.status,
            },
            self.dark_mode,
        );
    }

    fn apply_layout(&mut self) {
        if self.show_directory {
            self.directory.show();
            self.body.fixed(&self.directory, DIRECTORY_WIDTH);
        } else {
            self.directory.hide();
            self.body.fixed(&self.directory, 0);
        }
        if self.show_source {
            self.source_view.show();
        } else {
            self.source_view.hide();
        }
        self.body.layout();
        self.window.redraw();
    }

    fn update_linenumber_width(&mut self) {
        let width = if self.show_linenumbers {
            let lines = line_count(&self.buffer.text());
            let digits = (lines as f64).log10().floor() as i32 + 1;
            (digits * 8 + 16).max(40)
        } else {
            0
        };
        if width != self.linenumber_px {
            self.linenumber_px = width;
            self.editor.set_linenumber_width(width);
            self.apply_editor_width();
        }
    }

    /// Fix the editor to `editor_columns` characters of the current font.
    fn apply_editor_width(&mut self) {
        draw::set_font(fltk_font(self.settings.font), self.settings.font_size as i32);
        let avg_char_width = draw::width("0");
        let width = editor_pixel_width(avg_char_width, self.settings.editor_columns, EDITOR_MARGIN)
            + self.linenumber_px
            + app::scrollbar_size();
        self.body.fixed(&self.editor, width);
        self.body.layout();
    }

    fn persist_view_settings(&mut self) {
        self.settings.show_source_view = self.show_source;
        self.settings.show_directory_view = self.show_directory;
        self.settings.line_numbers_enabled = self.show_linenumbers;
        if let Err(e) = self.settings.save() {
            tracing::warn!("Failed to save settings: {}", e);
        }
    }
}
