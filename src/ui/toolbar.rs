use fltk::{
    app::Sender,
    button::{Button, RadioRoundButton},
    enums::{Align, CallbackTrigger, FrameType},
    frame::Frame,
    group::Group,
    input::Input,
    prelude::*,
};

use crate::app::activity::ActivityState;
use crate::app::board::Mode;
use crate::app::config::ToolbarStyle;
use crate::app::messages::Message;

pub const TOOLBAR_ROW_HEIGHT: i32 = 44;

const PAD: i32 = 8;
const RADIO_WIDTH: i32 = 90;
const BUTTON_WIDTH: i32 = 110;
const ENTRY_WIDTH: i32 = 60;
const STOP_WIDTH: i32 = 70;

/// Widgets of the customization sub-toolbar. Only built for the toolbox
/// style; the legacy layout has no customization panel.
pub struct CustomizePanel {
    pub toggle: Button,
    pub import_image: Button,
    pub import_audio: Button,
    pub letter_entry: Input,
    pub add: Button,
}

/// The activity toolbar. Constructed once; `sync` keeps the widgets
/// matching the controller state after every dispatched message.
pub struct Toolbar {
    pub height: i32,
    pub letter_radio: RadioRoundButton,
    pub picture_radio: RadioRoundButton,
    pub status: Frame,
    pub customize: Option<CustomizePanel>,
}

pub fn build_toolbar(style: ToolbarStyle, width: i32, sender: &Sender<Message>) -> Toolbar {
    let rows = match style {
        ToolbarStyle::Toolbox => 2,
        ToolbarStyle::Legacy => 1,
    };
    let height = rows * TOOLBAR_ROW_HEIGHT;

    let mut bar = Group::new(0, 0, width, height, None);
    bar.set_frame(FrameType::ThinUpBox);

    let row_y = (TOOLBAR_ROW_HEIGHT - 28) / 2;
    let mut x = PAD;

    // Mode radios share one group so selection is exclusive.
    let radios = Group::new(x, row_y, RADIO_WIDTH * 2, 28, None);
    let mut letter_radio = RadioRoundButton::new(x, row_y, RADIO_WIDTH, 28, None);
    letter_radio.set_label("letters");
    letter_radio.set_tooltip("listen to the letter names");
    letter_radio.emit(sender.clone(), Message::SelectLetterMode);
    letter_radio.set_value(true);

    let mut picture_radio =
        RadioRoundButton::new(x + RADIO_WIDTH, row_y, RADIO_WIDTH, 28, None);
    picture_radio.set_label("pictures");
    picture_radio.set_tooltip("match pictures to letters");
    picture_radio.emit(sender.clone(), Message::SelectPictureMode);
    radios.end();
    x += RADIO_WIDTH * 2 + PAD;

    let status_width = width - x - STOP_WIDTH - BUTTON_WIDTH - 3 * PAD;
    let mut status = Frame::new(x, row_y, status_width, 28, None);
    status.set_align(Align::Left | Align::Inside);
    x += status_width + PAD;

    let toggle_x = x;

    let mut stop = Button::new(width - STOP_WIDTH - PAD, row_y, STOP_WIDTH, 28, None);
    stop.set_label("Stop");
    stop.set_tooltip("Stop the activity (Ctrl+Q)");
    stop.emit(sender.clone(), Message::Quit);

    let customize = match style {
        ToolbarStyle::Legacy => None,
        ToolbarStyle::Toolbox => {
            let mut toggle = Button::new(toggle_x, row_y, BUTTON_WIDTH, 28, None);
            toggle.set_label("Customize");
            toggle.set_tooltip("Import your own images and sounds");
            toggle.emit(sender.clone(), Message::ToggleCustomize);

            // Second row: the import sub-toolbar.
            let sub_y = TOOLBAR_ROW_HEIGHT + row_y;
            let mut sx = PAD;

            let mut import_image = Button::new(sx, sub_y, BUTTON_WIDTH, 28, None);
            import_image.set_label("Import Image");
            import_image.emit(sender.clone(), Message::ImportImage);
            sx += BUTTON_WIDTH + PAD;

            let mut import_audio = Button::new(sx, sub_y, BUTTON_WIDTH, 28, None);
            import_audio.set_label("Import Audio");
            import_audio.emit(sender.clone(), Message::ImportAudio);
            sx += BUTTON_WIDTH + PAD;

            let mut letter_entry = Input::new(sx, sub_y, ENTRY_WIDTH, 28, None);
            letter_entry.set_tooltip("The letter these belong to");
            letter_entry.set_trigger(CallbackTrigger::Changed);
            {
                let sender = sender.clone();
                letter_entry.set_callback(move |entry| {
                    sender.send(Message::LetterEntry(entry.value()));
                });
            }
            sx += ENTRY_WIDTH + PAD;

            let mut add = Button::new(sx, sub_y, BUTTON_WIDTH / 2, 28, None);
            add.set_label("Add");
            add.set_tooltip("Add the pair to this letter");
            add.emit(sender.clone(), Message::AddCustomMedia);

            Some(CustomizePanel {
                toggle,
                import_image,
                import_audio,
                letter_entry,
                add,
            })
        }
    };

    bar.end();

    Toolbar {
        height,
        letter_radio,
        picture_radio,
        status,
        customize,
    }
}

impl Toolbar {
    /// Bring every widget in line with the controller state.
    pub fn sync(&mut self, activity: &ActivityState) {
        self.letter_radio.set_value(activity.mode() == Mode::Letter);
        self.picture_radio.set_value(activity.mode() == Mode::Picture);
        self.status.set_label(activity.status_text());

        if let Some(ref mut panel) = self.customize {
            let active = activity.customization_active();
            set_active(&mut panel.import_image, active);
            set_active(&mut panel.import_audio, active);
            set_active(&mut panel.add, activity.commit_enabled());

            if activity.letter_entry_enabled() {
                panel.letter_entry.activate();
            } else {
                panel.letter_entry.set_value("");
                panel.letter_entry.deactivate();
            }
        }
    }

    /// Echo the normalized letter back into the entry while the user
    /// types. Invalid text is left alone; commit just stays disabled.
    pub fn echo_letter(&mut self, letter: Option<char>) {
        let Some(ref mut panel) = self.customize else {
            return;
        };
        if let Some(letter) = letter {
            let text = letter.to_string();
            if panel.letter_entry.value() != text {
                panel.letter_entry.set_value(&text);
            }
        }
    }
}

fn set_active(button: &mut Button, active: bool) {
    if active {
        button.activate();
    } else {
        button.deactivate();
    }
}
