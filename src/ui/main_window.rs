use fltk::{
    app::{self, Sender},
    browser::HoldBrowser,
    enums::{Align, Event, FrameType},
    frame::Frame,
    group::{Flex, FlexType},
    menu::MenuBar,
    misc::HelpView,
    prelude::*,
    text::{TextBuffer, TextDisplay, TextEditor},
    window::Window,
};

use crate::app::domain::{APP_NAME, Message};

pub const MENU_HEIGHT: i32 = 30;
pub const STATUS_HEIGHT: i32 = 22;
pub const DIRECTORY_WIDTH: i32 = 200;

pub struct MainWidgets {
    pub wind: Window,
    /// Row holding directory list, editor, preview and source view.
    pub body: Flex,
    pub menu: MenuBar,
    pub directory: HoldBrowser,
    pub editor: TextEditor,
    pub preview: HelpView,
    pub source_view: TextDisplay,
    pub status: Frame,
}

pub fn build_main_window(sender: &Sender<Message>) -> MainWidgets {
    let mut wind = Window::new(100, 100, 1200, 760, None);
    wind.set_label(&format!("Untitled - {}", APP_NAME));
    wind.set_xclass(APP_NAME);

    let mut column = Flex::new(0, 0, 1200, 760, None);
    column.set_type(FlexType::Column);

    let menu = MenuBar::new(0, 0, 0, MENU_HEIGHT, "");
    column.fixed(&menu, MENU_HEIGHT);

    let mut body = Flex::default();
    body.set_type(FlexType::Row);
    body.set_spacing(4);

    let mut directory = HoldBrowser::default();
    directory.set_callback({
        let s = *sender;
        move |b| {
            let line = b.value();
            if line > 0 {
                s.send(Message::DirectoryClicked(line));
            }
        }
    });
    body.fixed(&directory, DIRECTORY_WIDTH);

    let mut editor = TextEditor::default();
    editor.set_buffer(TextBuffer::default());

    let mut preview = HelpView::default();
    preview.set_frame(FrameType::DownBox);

    let mut source_view = TextDisplay::default();
    source_view.set_buffer(TextBuffer::default());

    body.end();

    let mut status = Frame::default();
    status.set_frame(FrameType::FlatBox);
    status.set_align(Align::Left | Align::Inside);
    status.set_label_size(12);
    column.fixed(&status, STATUS_HEIGHT);

    column.end();
    wind.resizable(&column);
    wind.end();

    // Route the close button through the dispatch loop; Escape is ignored.
    wind.set_callback({
        let s = *sender;
        move |_| {
            if app::event() == Event::Close {
                s.send(Message::WindowClose);
            }
        }
    });

    MainWidgets {
        wind,
        body,
        menu,
        directory,
        editor,
        preview,
        source_view,
        status,
    }
}
