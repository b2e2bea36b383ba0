use fltk::{
    browser::HoldBrowser,
    enums::{Color, Font},
    frame::Frame,
    menu::MenuBar,
    misc::HelpView,
    prelude::*,
    text::{StyleTableEntry, TextDisplay, TextEditor},
    window::Window,
};

use crate::app::domain::FontChoice;
use crate::app::services::highlight::STYLE_COUNT;

/// Widgets whose colors follow the light/dark theme.
pub struct ThemedWidgets<'a> {
    pub window: &'a mut Window,
    pub menu: &'a mut MenuBar,
    pub editor: &'a mut TextEditor,
    pub preview: &'a mut HelpView,
    pub source_view: &'a mut TextDisplay,
    pub directory: &'a mut HoldBrowser,
    pub status: &'a mut Frame,
}

pub fn fltk_font(choice: FontChoice) -> Font {
    match choice {
        FontChoice::Courier => Font::Courier,
        FontChoice::Screen => Font::Screen,
        FontChoice::ScreenBold => Font::ScreenBold,
    }
}

pub fn apply_theme(w: ThemedWidgets, is_dark: bool) {
    let (bg, fg, chrome, selection) = if is_dark {
        (
            Color::from_rgb(30, 30, 30),
            Color::from_rgb(220, 220, 220),
            Color::from_rgb(40, 40, 40),
            Color::from_rgb(70, 70, 100),
        )
    } else {
        (
            Color::White,
            Color::Black,
            Color::from_rgb(240, 240, 240),
            Color::from_rgb(173, 216, 230),
        )
    };

    w.editor.set_color(bg);
    w.editor.set_text_color(fg);
    w.editor.set_cursor_color(fg);
    w.editor.set_selection_color(selection);
    w.editor.set_linenumber_bgcolor(chrome);
    w.editor.set_linenumber_fgcolor(if is_dark {
        Color::from_rgb(150, 150, 150)
    } else {
        Color::from_rgb(100, 100, 100)
    });

    w.preview.set_color(bg);
    w.preview.set_text_color(fg);

    w.source_view.set_color(chrome);
    w.source_view.set_text_color(fg);

    w.directory.set_color(chrome);
    w.directory.set_selection_color(selection);

    w.window.set_color(chrome);
    w.window.set_label_color(fg);
    w.menu.set_color(chrome);
    w.menu.set_text_color(fg);
    w.menu.set_selection_color(if is_dark {
        Color::from_rgb(60, 60, 60)
    } else {
        Color::from_rgb(200, 200, 200)
    });
    w.status.set_color(chrome);
    w.status.set_label_color(fg);

    w.window.redraw();
}

/// Style table for the editor's markdown highlighting, indexed 'A'..='J'
/// in the order of the `STYLE_*` constants.
pub fn editor_style_table(font: Font, size: i32, is_dark: bool) -> Vec<StyleTableEntry> {
    let bold = if font == Font::Courier {
        Font::CourierBold
    } else if font == Font::Screen {
        Font::ScreenBold
    } else {
        font
    };
    let italic = if font == Font::Courier {
        Font::CourierItalic
    } else {
        font
    };

    let palette: [(u8, u8, u8); STYLE_COUNT] = if is_dark {
        [
            (220, 220, 220), // plain
            (97, 175, 239),  // heading
            (198, 120, 221), // emphasis
            (229, 192, 123), // strong
            (152, 195, 121), // code
            (86, 182, 194),  // link
            (150, 150, 150), // quote
            (224, 108, 117), // html
            (209, 154, 102), // list marker
            (130, 130, 130), // strikethrough
        ]
    } else {
        [
            (0, 0, 0),
            (0, 70, 160),
            (120, 40, 140),
            (150, 80, 0),
            (30, 110, 30),
            (0, 110, 130),
            (110, 110, 110),
            (170, 40, 40),
            (170, 90, 0),
            (140, 140, 140),
        ]
    };

    palette
        .iter()
        .enumerate()
        .map(|(i, &(r, g, b))| {
            let entry_font = match i {
                1 | 3 => bold,
                2 => italic,
                _ => font,
            };
            StyleTableEntry {
                color: Color::from_rgb(r, g, b),
                font: entry_font,
                size,
            }
        })
        .collect()
}
