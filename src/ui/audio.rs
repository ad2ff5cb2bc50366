use std::path::Path;

use log::warn;

use crate::app::media::AudioPlayer;

/// Plays a clip by handing the file to the desktop's default handler,
/// detached. Playback failures are not the activity's problem beyond a
/// log line.
pub struct DesktopAudioPlayer;

impl AudioPlayer for DesktopAudioPlayer {
    fn play(&mut self, path: &Path) {
        if let Err(e) = open::that_detached(path) {
            warn!("could not play {}: {}", path.display(), e);
        }
    }
}
