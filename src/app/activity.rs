use log::{debug, warn};

use super::board::{letter_at, Board, InputMode, Mode};
use super::customize::CustomizeFlow;
use super::error::Result;
use super::lessons::LessonPaths;
use super::mapping::CustomLetterMap;
use super::media::{AudioPlayer, MediaChooser, MediaKind};
use super::session::{self, MetadataStore, CUSTOM_MEDIA_KEY};

/// The activity controller. Owns the session state and the host
/// collaborators; translates UI events into state transitions and
/// delegates all rendering to the board.
pub struct ActivityState {
    mode: Mode,
    flow: CustomizeFlow,
    custom_media: CustomLetterMap,
    lessons: LessonPaths,
    metadata: Box<dyn MetadataStore>,
    board: Box<dyn Board>,
    chooser: Box<dyn MediaChooser>,
    audio: Box<dyn AudioPlayer>,
}

impl ActivityState {
    /// Restore the prior session (if any) and lay out the initial board.
    /// A malformed custom-media value aborts the restore.
    pub fn new(
        lessons: LessonPaths,
        metadata: Box<dyn MetadataStore>,
        mut board: Box<dyn Board>,
        chooser: Box<dyn MediaChooser>,
        audio: Box<dyn AudioPlayer>,
    ) -> Result<Self> {
        let custom_media = session::load_custom_media(metadata.as_ref())?;
        let page = session::load_page(metadata.as_ref());

        let mode = Mode::default();
        board.refresh_custom_media(&custom_media);
        board.regenerate(mode);
        board.show_page(page);

        Ok(Self {
            mode,
            flow: CustomizeFlow::new(),
            custom_media,
            lessons,
            metadata,
            board,
            chooser,
            audio,
        })
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn customization_active(&self) -> bool {
        self.flow.is_active()
    }

    pub fn letter_entry_enabled(&self) -> bool {
        self.flow.letter_entry_enabled()
    }

    pub fn commit_enabled(&self) -> bool {
        self.flow.can_commit()
    }

    pub fn custom_media(&self) -> &CustomLetterMap {
        &self.custom_media
    }

    pub fn metadata(&self) -> &dyn MetadataStore {
        self.metadata.as_ref()
    }

    pub fn status_text(&self) -> &'static str {
        if self.flow.is_active() {
            "Please choose an image and an audio clip from the Journal."
        } else {
            match self.mode {
                Mode::Letter => "Click on the picture that matches the letter.",
                Mode::Picture => "Click on the letter that matches the picture.",
            }
        }
    }

    /// Mode radio selection. An in-progress customization flow is always
    /// cancelled before the mode changes.
    pub fn select_mode(&mut self, mode: Mode) {
        if self.flow.is_active() {
            self.abandon_customization();
        }
        self.mode = mode;
        self.board.regenerate(mode);
    }

    /// Toolbar toggle for the customization panel: opens the import flow
    /// or abandons it.
    pub fn toggle_customization(&mut self) {
        if self.flow.is_active() {
            self.abandon_customization();
            self.board.regenerate(self.mode);
        } else {
            self.flow.open();
            self.board.show_preview(None);
            self.board.set_input_mode(InputMode::ChooseImage);
        }
    }

    /// Run the image chooser. Cancellation leaves the flow where it was.
    pub fn import_image(&mut self) {
        if !self.flow.is_active() {
            return;
        }
        match self.chooser.choose(MediaKind::Image) {
            Some(selection) => {
                debug!("image selected: {}", selection.id);
                self.board.show_preview(Some(selection.path.as_path()));
                self.flow.set_image(selection);
            }
            None => debug!("image chooser cancelled"),
        }
    }

    /// Run the audio chooser. Once a clip is held, board clicks replay it.
    pub fn import_audio(&mut self) {
        if !self.flow.is_active() {
            return;
        }
        match self.chooser.choose(MediaKind::Audio) {
            Some(selection) => {
                debug!("audio selected: {}", selection.id);
                self.flow.set_audio(selection);
                self.board.set_input_mode(InputMode::TestAudio);
            }
            None => debug!("audio chooser cancelled"),
        }
    }

    /// Letter-entry text changed. Returns the normalized pending letter.
    pub fn letter_entry_changed(&mut self, text: &str) -> Option<char> {
        self.flow.set_letter_text(text)
    }

    /// Commit the completed import: append the pair to the letter's
    /// entry, persist the mapping and return the board to normal use.
    /// Returns false when the flow is not ready.
    pub fn commit_custom_media(&mut self) -> Result<bool> {
        let Some((letter, pair)) = self.flow.take_commit() else {
            return Ok(false);
        };
        self.custom_media.append(letter, pair);
        self.metadata
            .set(CUSTOM_MEDIA_KEY, self.custom_media.to_json()?);
        self.metadata.commit()?;

        self.board.refresh_custom_media(&self.custom_media);
        self.restore_board();
        Ok(true)
    }

    /// A board click, routed by the current flow state.
    pub fn card_pressed(&mut self, index: usize) {
        if self.flow.is_active() {
            if self.flow.pending_audio_path().is_some() {
                self.test_audio();
            } else {
                self.import_image();
            }
            return;
        }
        if let Some(letter) = letter_at(index) {
            self.play_letter(letter);
        }
    }

    pub fn next_page(&mut self) {
        if !self.flow.is_active() {
            self.board.show_page(self.board.current_page() + 1);
        }
    }

    pub fn previous_page(&mut self) {
        if !self.flow.is_active() {
            let page = self.board.current_page();
            self.board.show_page(page.saturating_sub(1));
        }
    }

    /// Serialize the session into metadata. Called by the host on close.
    pub fn save(&mut self) -> Result<()> {
        session::save_session(
            self.metadata.as_mut(),
            self.board.current_page(),
            &self.custom_media,
        )
    }

    fn test_audio(&mut self) {
        if let Some(path) = self.flow.pending_audio_path() {
            let path = path.to_path_buf();
            self.audio.play(&path);
        }
    }

    fn play_letter(&mut self, letter: char) {
        match self.lessons.sound_for(letter) {
            Some(path) => self.audio.play(&path),
            None => warn!("no lesson sound for '{}'", letter),
        }
    }

    /// Drop the pending import and hand the board back to normal input.
    fn abandon_customization(&mut self) {
        self.flow.cancel();
        self.restore_board();
    }

    fn restore_board(&mut self) {
        self.board.clear_preview();
        self.board.set_input_mode(InputMode::Cards);
    }
}
