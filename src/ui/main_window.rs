use fltk::{
    app::Sender,
    enums::{Event, EventState, Key},
    prelude::*,
    window::Window,
};

use crate::app::config::ToolbarStyle;
use crate::app::lessons::LessonPaths;
use crate::app::messages::Message;

use super::board::CardBoard;
use super::toolbar::{build_toolbar, Toolbar};

pub const WINDOW_WIDTH: i32 = 960;
pub const WINDOW_HEIGHT: i32 = 720;

pub struct MainWidgets {
    pub wind: Window,
    pub toolbar: Toolbar,
    pub board: CardBoard,
}

pub fn build_main_window(
    style: ToolbarStyle,
    lessons: LessonPaths,
    sender: &Sender<Message>,
) -> MainWidgets {
    let mut wind = Window::new(100, 100, WINDOW_WIDTH, WINDOW_HEIGHT, "LetterMatch");
    wind.set_xclass("LetterMatch");

    let toolbar = build_toolbar(style, WINDOW_WIDTH, sender);
    let board = CardBoard::new(
        0,
        toolbar.height,
        WINDOW_WIDTH,
        WINDOW_HEIGHT - toolbar.height,
        lessons,
        sender,
    );

    wind.end();

    // Closing the window goes through the same quit path as the Stop
    // button so the session always gets saved.
    {
        let sender = sender.clone();
        wind.set_callback(move |_| sender.send(Message::Quit));
    }

    // Ctrl+Q accelerator for the Stop button.
    {
        let sender = sender.clone();
        wind.handle(move |_, event| {
            if event == Event::KeyDown
                && fltk::app::event_key() == Key::from_char('q')
                && fltk::app::event_state().contains(EventState::Ctrl)
            {
                sender.send(Message::Quit);
                return true;
            }
            false
        });
    }

    MainWidgets {
        wind,
        toolbar,
        board,
    }
}
