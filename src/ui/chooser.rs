use std::path::PathBuf;

use fltk::dialog::{FileDialogType, NativeFileChooser};

use crate::app::media::{MediaChooser, MediaKind, MediaSelection};

const IMAGE_FILTER: &str = "*.{png,jpg,jpeg,gif,svg,bmp}";
const AUDIO_FILTER: &str = "*.{ogg,wav,mp3,flac}";

/// Content-store chooser over the native file dialog, rooted at the
/// user's journal directory. The selection's opaque reference is the
/// chosen file's path.
pub struct JournalChooser {
    journal_dir: PathBuf,
}

impl JournalChooser {
    pub fn new(journal_dir: PathBuf) -> Self {
        Self { journal_dir }
    }
}

/// Returns the journal directory path: data_dir/lettermatch/journal/
pub fn journal_dir() -> PathBuf {
    let mut path = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("lettermatch");
    path.push("journal");
    path
}

impl MediaChooser for JournalChooser {
    fn choose(&mut self, kind: MediaKind) -> Option<MediaSelection> {
        let filter = match kind {
            MediaKind::Image => IMAGE_FILTER,
            MediaKind::Audio => AUDIO_FILTER,
        };
        let mut nfc = NativeFileChooser::new(FileDialogType::BrowseFile);
        nfc.set_filter(filter);
        if self.journal_dir.is_dir() {
            let _ = nfc.set_directory(&self.journal_dir);
        }
        nfc.show(); // blocks until close
        let filename = nfc.filename();
        let s = filename.to_string_lossy();
        if s.is_empty() {
            return None;
        }
        Some(MediaSelection {
            id: s.to_string(),
            path: filename,
        })
    }
}
