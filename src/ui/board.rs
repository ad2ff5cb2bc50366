use std::cell::Cell;
use std::path::Path;
use std::rc::Rc;

use fltk::{
    app::Sender,
    button::Button,
    enums::{Align, Color, FrameType},
    group::Group,
    image::SharedImage,
    prelude::*,
};
use log::debug;

use crate::app::board::{letter_at, Board, InputMode, Mode, ALPHABET};
use crate::app::lessons::LessonPaths;
use crate::app::mapping::CustomLetterMap;
use crate::app::messages::Message;

pub const CARD_COLS: usize = 4;
pub const CARD_ROWS: usize = 2;
pub const CARDS_PER_PAGE: usize = CARD_COLS * CARD_ROWS;

const CARD_GAP: i32 = 16;
const NAV_HEIGHT: i32 = 36;
const NAV_WIDTH: i32 = 110;
const PREVIEW_MARGIN: i32 = 60;

/// The on-screen board: a paged grid of letter cards plus the import
/// preview. Owns its widgets exclusively; the controller drives it
/// through the `Board` trait.
pub struct CardBoard {
    group: Group,
    cards: Vec<Button>,
    preview: Button,
    prev_button: Button,
    next_button: Button,
    page: Rc<Cell<usize>>,
    mode: Mode,
    input: InputMode,
    lessons: LessonPaths,
    custom: CustomLetterMap,
}

impl CardBoard {
    pub fn new(x: i32, y: i32, w: i32, h: i32, lessons: LessonPaths, sender: &Sender<Message>) -> Self {
        let mut group = Group::new(x, y, w, h, None);
        group.set_frame(FrameType::FlatBox);
        group.set_color(Color::Black);

        let page = Rc::new(Cell::new(0usize));

        let card_w = (w - CARD_GAP * (CARD_COLS as i32 + 1)) / CARD_COLS as i32;
        let card_h = (h - NAV_HEIGHT - CARD_GAP * (CARD_ROWS as i32 + 2)) / CARD_ROWS as i32;

        let mut cards = Vec::with_capacity(CARDS_PER_PAGE);
        for slot in 0..CARDS_PER_PAGE {
            let col = (slot % CARD_COLS) as i32;
            let row = (slot / CARD_COLS) as i32;
            let cx = x + CARD_GAP + col * (card_w + CARD_GAP);
            let cy = y + CARD_GAP + row * (card_h + CARD_GAP);

            let mut card = Button::new(cx, cy, card_w, card_h, None);
            card.set_frame(FrameType::UpBox);
            card.set_color(Color::White);
            card.set_label_size(card_h / 3);
            card.set_align(Align::Center | Align::Inside);

            let sender = sender.clone();
            let page = page.clone();
            card.set_callback(move |_| {
                sender.send(Message::CardPressed(page.get() * CARDS_PER_PAGE + slot));
            });
            cards.push(card);
        }

        // Import preview: hidden until the customization panel opens.
        let mut preview = Button::new(
            x + PREVIEW_MARGIN,
            y + PREVIEW_MARGIN,
            w - 2 * PREVIEW_MARGIN,
            h - NAV_HEIGHT - 2 * PREVIEW_MARGIN,
            None,
        );
        preview.set_frame(FrameType::EngravedBox);
        preview.set_color(Color::White);
        preview.set_align(Align::Center | Align::Inside | Align::Wrap);
        {
            let sender = sender.clone();
            preview.set_callback(move |_| sender.send(Message::CardPressed(0)));
        }
        preview.hide();

        let nav_y = y + h - NAV_HEIGHT - CARD_GAP / 2;
        let mut prev_button = Button::new(x + CARD_GAP, nav_y, NAV_WIDTH, NAV_HEIGHT, None);
        prev_button.set_label("@< Back");
        prev_button.emit(sender.clone(), Message::PreviousPage);

        let mut next_button = Button::new(
            x + w - NAV_WIDTH - CARD_GAP,
            nav_y,
            NAV_WIDTH,
            NAV_HEIGHT,
            None,
        );
        next_button.set_label("Next @>");
        next_button.emit(sender.clone(), Message::NextPage);

        group.end();

        let mut board = Self {
            group,
            cards,
            preview,
            prev_button,
            next_button,
            page,
            mode: Mode::default(),
            input: InputMode::default(),
            lessons,
            custom: CustomLetterMap::new(),
        };
        board.relabel();
        board
    }

    fn page_count() -> usize {
        ALPHABET.len().div_ceil(CARDS_PER_PAGE)
    }

    fn relabel(&mut self) {
        for (slot, card) in self.cards.iter_mut().enumerate() {
            let global = self.page.get() * CARDS_PER_PAGE + slot;
            let Some(letter) = letter_at(global) else {
                card.hide();
                continue;
            };
            match self.mode {
                Mode::Letter => {
                    card.set_image(None::<SharedImage>);
                    card.set_label(&letter.to_string());
                }
                Mode::Picture => {
                    let image = self
                        .custom
                        .pairs_for(letter)
                        .first()
                        .and_then(|pair| load_card_image(Path::new(&pair.image), card.w(), card.h()))
                        .or_else(|| {
                            self.lessons
                                .image_for(letter)
                                .and_then(|p| load_card_image(&p, card.w(), card.h()))
                        });
                    match image {
                        Some(img) => {
                            card.set_image(Some(img));
                            card.set_label("");
                        }
                        None => {
                            card.set_image(None::<SharedImage>);
                            card.set_label(&letter.to_lowercase().to_string());
                        }
                    }
                }
            }
            if !self.preview.visible() {
                card.show();
            }
        }
        self.sync_nav();
        self.group.redraw();
    }

    fn sync_nav(&mut self) {
        let interactive = self.input == InputMode::Cards && !self.preview.visible();
        for button in [&mut self.prev_button, &mut self.next_button] {
            if interactive {
                button.activate();
            } else {
                button.deactivate();
            }
        }
    }
}

impl Board for CardBoard {
    fn regenerate(&mut self, mode: Mode) {
        self.mode = mode;
        self.relabel();
    }

    fn show_page(&mut self, index: usize) {
        self.page.set(index.min(Self::page_count() - 1));
        self.relabel();
    }

    fn current_page(&self) -> usize {
        self.page.get()
    }

    fn show_preview(&mut self, image: Option<&Path>) {
        for card in &mut self.cards {
            card.hide();
        }
        match image {
            Some(path) => {
                debug!("preview image {}", path.display());
                match load_card_image(path, self.preview.w(), self.preview.h()) {
                    Some(img) => {
                        self.preview.set_image(Some(img));
                        self.preview.set_label("");
                    }
                    None => {
                        self.preview.set_image(None::<SharedImage>);
                        self.preview.set_label("The chosen image could not be read.");
                    }
                }
            }
            None => {
                self.preview.set_image(None::<SharedImage>);
                self.preview
                    .set_label("Click here to choose an image from the Journal.");
            }
        }
        self.preview.show();
        self.sync_nav();
        self.group.redraw();
    }

    fn clear_preview(&mut self) {
        self.preview.hide();
        self.preview.set_image(None::<SharedImage>);
        self.preview.set_label("");
        self.relabel();
    }

    fn set_input_mode(&mut self, input: InputMode) {
        self.input = input;
        self.sync_nav();
    }

    fn refresh_custom_media(&mut self, map: &CustomLetterMap) {
        self.custom = map.clone();
        self.relabel();
    }
}

fn load_card_image(path: &Path, w: i32, h: i32) -> Option<SharedImage> {
    match SharedImage::load(path) {
        Ok(mut img) => {
            img.scale(w - 12, h - 12, true, true);
            Some(img)
        }
        Err(e) => {
            debug!("could not load {}: {}", path.display(), e);
            None
        }
    }
}
