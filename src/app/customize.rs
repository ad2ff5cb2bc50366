use std::path::Path;

use super::mapping::{letter_from_entry, MediaPair};
use super::media::MediaSelection;

/// Where the customization workflow currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FlowState {
    /// Panel closed, board behaves normally.
    #[default]
    Inactive,
    /// Panel just opened; placeholder preview, clicks open the chooser.
    Previewing,
    /// An image is held, audio still missing.
    ImagePending,
    /// An audio clip is held, image still missing.
    AudioPending,
    /// Both references held; letter entry is enabled.
    ReadyToCommit,
}

/// The customization attempt in progress. Lives only while the panel is
/// open and is discarded, not persisted, on cancel.
#[derive(Debug, Clone, Default)]
pub struct PendingImport {
    pub image: Option<MediaSelection>,
    pub audio: Option<MediaSelection>,
    pub letter: Option<char>,
}

/// State machine for importing an (image, audio) pair and attaching it
/// to a letter.
#[derive(Debug, Default)]
pub struct CustomizeFlow {
    state: FlowState,
    pending: PendingImport,
}

impl CustomizeFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> FlowState {
        self.state
    }

    pub fn is_active(&self) -> bool {
        self.state != FlowState::Inactive
    }

    /// Open the panel. No-op while a flow is already in progress.
    pub fn open(&mut self) {
        if self.state == FlowState::Inactive {
            self.pending = PendingImport::default();
            self.state = FlowState::Previewing;
        }
    }

    /// Record an accepted image selection.
    pub fn set_image(&mut self, selection: MediaSelection) {
        if self.is_active() {
            self.pending.image = Some(selection);
            self.advance();
        }
    }

    /// Record an accepted audio selection.
    pub fn set_audio(&mut self, selection: MediaSelection) {
        if self.is_active() {
            self.pending.audio = Some(selection);
            self.advance();
        }
    }

    /// Track the letter-entry text. Returns the normalized letter now
    /// pending, if any.
    pub fn set_letter_text(&mut self, text: &str) -> Option<char> {
        self.pending.letter = if self.state == FlowState::ReadyToCommit {
            letter_from_entry(text)
        } else {
            None
        };
        self.pending.letter
    }

    pub fn letter_entry_enabled(&self) -> bool {
        self.state == FlowState::ReadyToCommit
    }

    pub fn can_commit(&self) -> bool {
        self.state == FlowState::ReadyToCommit && self.pending.letter.is_some()
    }

    pub fn pending_image_path(&self) -> Option<&Path> {
        self.pending.image.as_ref().map(|s| s.path.as_path())
    }

    pub fn pending_audio_path(&self) -> Option<&Path> {
        self.pending.audio.as_ref().map(|s| s.path.as_path())
    }

    /// Consume the completed attempt. Returns the letter and the pair to
    /// append, and resets the flow.
    pub fn take_commit(&mut self) -> Option<(char, MediaPair)> {
        if !self.can_commit() {
            return None;
        }
        let pending = std::mem::take(&mut self.pending);
        self.state = FlowState::Inactive;
        let letter = pending.letter?;
        let pair = MediaPair {
            image: pending.image?.id,
            audio: pending.audio?.id,
        };
        Some((letter, pair))
    }

    /// Abandon the attempt. The pending selection is dropped unused.
    pub fn cancel(&mut self) {
        self.pending = PendingImport::default();
        self.state = FlowState::Inactive;
    }

    fn advance(&mut self) {
        self.state = match (&self.pending.image, &self.pending.audio) {
            (Some(_), Some(_)) => FlowState::ReadyToCommit,
            (Some(_), None) => FlowState::ImagePending,
            (None, Some(_)) => FlowState::AudioPending,
            (None, None) => FlowState::Previewing,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn selection(id: &str) -> MediaSelection {
        MediaSelection {
            id: id.to_string(),
            path: PathBuf::from(format!("/journal/{}", id)),
        }
    }

    #[test]
    fn test_open_enters_previewing() {
        let mut flow = CustomizeFlow::new();
        assert!(!flow.is_active());

        flow.open();
        assert_eq!(flow.state(), FlowState::Previewing);
        assert!(!flow.letter_entry_enabled());
    }

    #[test]
    fn test_image_then_audio_reaches_ready() {
        let mut flow = CustomizeFlow::new();
        flow.open();

        flow.set_image(selection("i1"));
        assert_eq!(flow.state(), FlowState::ImagePending);

        flow.set_audio(selection("a1"));
        assert_eq!(flow.state(), FlowState::ReadyToCommit);
        assert!(flow.letter_entry_enabled());
        assert!(!flow.can_commit());
    }

    #[test]
    fn test_audio_first_is_symmetric() {
        let mut flow = CustomizeFlow::new();
        flow.open();

        flow.set_audio(selection("a1"));
        assert_eq!(flow.state(), FlowState::AudioPending);

        flow.set_image(selection("i1"));
        assert_eq!(flow.state(), FlowState::ReadyToCommit);
    }

    #[test]
    fn test_reselecting_replaces_held_reference() {
        let mut flow = CustomizeFlow::new();
        flow.open();
        flow.set_image(selection("i1"));
        flow.set_image(selection("i2"));

        assert_eq!(flow.state(), FlowState::ImagePending);
        assert_eq!(
            flow.pending_image_path(),
            Some(Path::new("/journal/i2"))
        );
    }

    #[test]
    fn test_letter_entry_only_counts_when_ready() {
        let mut flow = CustomizeFlow::new();
        flow.open();
        assert_eq!(flow.set_letter_text("b"), None);

        flow.set_image(selection("i1"));
        flow.set_audio(selection("a1"));
        assert_eq!(flow.set_letter_text("b"), Some('B'));
        assert!(flow.can_commit());

        assert_eq!(flow.set_letter_text("   "), None);
        assert!(!flow.can_commit());
    }

    #[test]
    fn test_commit_returns_pair_and_resets() {
        let mut flow = CustomizeFlow::new();
        flow.open();
        flow.set_image(selection("i1"));
        flow.set_audio(selection("a1"));
        flow.set_letter_text("q");

        let (letter, pair) = flow.take_commit().unwrap();
        assert_eq!(letter, 'Q');
        assert_eq!(pair.image, "i1");
        assert_eq!(pair.audio, "a1");
        assert_eq!(flow.state(), FlowState::Inactive);
        assert!(flow.take_commit().is_none());
    }

    #[test]
    fn test_cancel_discards_pending_at_any_state() {
        let mut flow = CustomizeFlow::new();
        flow.open();
        flow.set_audio(selection("a1"));
        flow.cancel();

        assert_eq!(flow.state(), FlowState::Inactive);
        assert!(flow.pending_audio_path().is_none());

        // Reopening starts from a clean slate.
        flow.open();
        assert_eq!(flow.state(), FlowState::Previewing);
        assert!(flow.pending_audio_path().is_none());
    }
}
