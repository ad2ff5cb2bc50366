use std::path::{Path, PathBuf};

/// Filter passed to the content-store chooser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Audio,
}

/// An accepted chooser selection: the opaque store reference plus the
/// local file it resolves to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaSelection {
    pub id: String,
    pub path: PathBuf,
}

/// The host's content-store chooser. `None` means the user cancelled.
pub trait MediaChooser {
    fn choose(&mut self, kind: MediaKind) -> Option<MediaSelection>;
}

/// The host's audio playback facility. Playback is fire-and-forget; no
/// result is consumed.
pub trait AudioPlayer {
    fn play(&mut self, path: &Path);
}
