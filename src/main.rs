use fltk::{app, dialog, prelude::*};
use log::{error, info};

use lettermatch::app::activity::ActivityState;
use lettermatch::app::board::Mode;
use lettermatch::app::config::ActivityConfig;
use lettermatch::app::lessons::LessonPaths;
use lettermatch::app::messages::Message;
use lettermatch::app::session::{metadata_path, FileMetadataStore};
use lettermatch::ui::audio::DesktopAudioPlayer;
use lettermatch::ui::chooser::{journal_dir, JournalChooser};
use lettermatch::ui::main_window::build_main_window;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = ActivityConfig::from_env();
    info!("starting LetterMatch, locale {}", config.resolve_locale());

    let fltk_app = app::App::default();
    let (sender, receiver) = app::channel::<Message>();

    // Missing lesson content is fatal for the configured locale.
    let lessons = match LessonPaths::resolve(&config) {
        Ok(lessons) => lessons,
        Err(e) => {
            error!("{}", e);
            dialog::alert_default(&format!("LetterMatch cannot start: {}", e));
            std::process::exit(1);
        }
    };

    let mut widgets = build_main_window(config.toolbar_style, lessons.clone(), &sender);

    let metadata = FileMetadataStore::open(metadata_path());
    let mut activity = match ActivityState::new(
        lessons,
        Box::new(metadata),
        Box::new(widgets.board),
        Box::new(JournalChooser::new(journal_dir())),
        Box::new(DesktopAudioPlayer),
    ) {
        Ok(activity) => activity,
        Err(e) => {
            error!("session restore failed: {}", e);
            dialog::alert_default(&format!("LetterMatch cannot start: {}", e));
            std::process::exit(1);
        }
    };

    widgets.toolbar.sync(&activity);
    widgets.wind.show();

    while fltk_app.wait() {
        let Some(message) = receiver.recv() else {
            continue;
        };
        match message {
            Message::SelectLetterMode => activity.select_mode(Mode::Letter),
            Message::SelectPictureMode => activity.select_mode(Mode::Picture),
            Message::ToggleCustomize => activity.toggle_customization(),
            Message::ImportImage => activity.import_image(),
            Message::ImportAudio => activity.import_audio(),
            Message::LetterEntry(text) => {
                let letter = activity.letter_entry_changed(&text);
                widgets.toolbar.echo_letter(letter);
            }
            Message::AddCustomMedia => match activity.commit_custom_media() {
                Ok(true) => info!("custom media added"),
                Ok(false) => {}
                Err(e) => {
                    error!("could not store custom media: {}", e);
                    dialog::alert_default(&format!("Could not store the new media: {}", e));
                }
            },
            Message::CardPressed(index) => activity.card_pressed(index),
            Message::NextPage => activity.next_page(),
            Message::PreviousPage => activity.previous_page(),
            Message::Quit => {
                if let Err(e) = activity.save() {
                    error!("failed to save session: {}", e);
                }
                fltk_app.quit();
            }
        }
        widgets.toolbar.sync(&activity);
    }
}
