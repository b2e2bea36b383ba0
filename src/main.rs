use std::path::PathBuf;

use clap::Parser;
use fltk::{app, prelude::*};

use markpane::app::state::AppState;
use markpane::app::{AppSettings, Message, ThemeMode, detect_system_dark_mode};
use markpane::ui::main_window::build_main_window;
use markpane::ui::menu::build_menu;

/// A minimal markdown editor with a live HTML preview
#[derive(Parser, Debug)]
#[command(name = "markpane", version, about, long_about = None)]
struct Cli {
    /// Markdown file to open at startup
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let app = app::App::default();
    let settings = AppSettings::load();
    let dark_mode = match settings.theme_mode {
        ThemeMode::Light => false,
        ThemeMode::Dark => true,
        ThemeMode::SystemDefault => detect_system_dark_mode(),
    };

    let (sender, receiver) = app::channel::<Message>();
    let mut widgets = build_main_window(&sender);
    build_menu(&mut widgets.menu, &sender, &settings, dark_mode);

    let mut state = AppState::new(widgets, sender, settings, dark_mode);
    state.window.show();
    state.initialize();

    if let Some(path) = cli.file {
        state.open_startup_file(path);
    }

    while app.wait() {
        let Some(msg) = receiver.recv() else {
            continue;
        };
        match msg {
            Message::FileNew => state.file_new(),
            Message::FileOpen => state.file_open(),
            Message::FileSave => state.file_save(),
            Message::FileSaveAs => state.file_save_as(),
            Message::FileExportHtml => {
                state.file_export_html();
            }
            Message::OpenExportInBrowser => state.open_export_in_browser(),
            Message::FileQuit | Message::WindowClose => {
                if state.file_quit() {
                    app.quit();
                }
            }
            Message::TextChanged => state.text_changed(),
            Message::ToggleSourceView => state.toggle_source_view(),
            Message::ToggleDirectoryView => state.toggle_directory_view(),
            Message::ToggleLineNumbers => state.toggle_line_numbers(),
            Message::ToggleHighlighting => state.toggle_highlighting(),
            Message::ToggleDarkMode => state.toggle_dark_mode(),
            Message::DirectoryClicked(line) => state.directory_clicked(line),
        }
    }
}
