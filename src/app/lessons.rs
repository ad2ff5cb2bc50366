use std::path::{Path, PathBuf};

use super::config::ActivityConfig;
use super::error::{ActivityError, Result};

/// Name of the shared alphabet content pack some deployments install
/// under the home directory.
const SHARED_PACK_DIR: &str = "Activities/IKnowMyABCs.activity";

/// Resolved locations of the per-locale lesson content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LessonPaths {
    pub lessons: PathBuf,
    pub images: PathBuf,
    pub sounds: PathBuf,
}

impl LessonPaths {
    /// Resolve lesson content for the configured locale. A missing
    /// lessons directory is fatal for that locale.
    pub fn resolve(config: &ActivityConfig) -> Result<Self> {
        let locale = config.resolve_locale();
        let root = match config.lessons_root {
            Some(ref root) => root.clone(),
            None => default_root(),
        };
        Self::under_root(&root, &locale)
    }

    fn under_root(root: &Path, locale: &str) -> Result<Self> {
        let paths = Self {
            lessons: root.join("lessons").join(locale),
            images: root.join("images").join(locale),
            sounds: root.join("sounds").join(locale),
        };
        if !paths.lessons.is_dir() {
            return Err(ActivityError::Content(format!(
                "no lessons for locale '{}' under {}",
                locale,
                root.display()
            )));
        }
        Ok(paths)
    }

    /// Lesson image for a letter, if the pack ships one.
    pub fn image_for(&self, letter: char) -> Option<PathBuf> {
        first_existing(&self.images, letter, &["png", "jpg", "svg"])
    }

    /// Lesson sound for a letter, if the pack ships one.
    pub fn sound_for(&self, letter: char) -> Option<PathBuf> {
        first_existing(&self.sounds, letter, &["ogg", "wav", "mp3"])
    }
}

fn first_existing(dir: &Path, letter: char, extensions: &[&str]) -> Option<PathBuf> {
    let stem = letter.to_lowercase().to_string();
    extensions
        .iter()
        .map(|ext| dir.join(format!("{}.{}", stem, ext)))
        .find(|p| p.is_file())
}

fn default_root() -> PathBuf {
    if let Some(home) = dirs::home_dir() {
        let pack = home.join(SHARED_PACK_DIR);
        if pack.is_dir() {
            return pack;
        }
    }
    PathBuf::from(".")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn pack_with_locale(locale: &str) -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        for sub in ["lessons", "images", "sounds"] {
            fs::create_dir_all(dir.path().join(sub).join(locale)).unwrap();
        }
        dir
    }

    #[test]
    fn test_resolve_known_locale() {
        let dir = pack_with_locale("en");
        let config = ActivityConfig {
            locale: Some("en".to_string()),
            lessons_root: Some(dir.path().to_path_buf()),
            ..Default::default()
        };
        let paths = LessonPaths::resolve(&config).unwrap();
        assert_eq!(paths.lessons, dir.path().join("lessons/en"));
        assert_eq!(paths.images, dir.path().join("images/en"));
        assert_eq!(paths.sounds, dir.path().join("sounds/en"));
    }

    #[test]
    fn test_missing_locale_is_fatal() {
        let dir = pack_with_locale("en");
        let config = ActivityConfig {
            locale: Some("xx".to_string()),
            lessons_root: Some(dir.path().to_path_buf()),
            ..Default::default()
        };
        let err = LessonPaths::resolve(&config).unwrap_err();
        assert!(matches!(err, ActivityError::Content(_)));
        assert!(err.to_string().contains("xx"));
    }

    #[test]
    fn test_letter_media_lookup() {
        let dir = pack_with_locale("en");
        fs::write(dir.path().join("images/en/b.png"), b"png").unwrap();
        fs::write(dir.path().join("sounds/en/b.ogg"), b"ogg").unwrap();

        let config = ActivityConfig {
            locale: Some("en".to_string()),
            lessons_root: Some(dir.path().to_path_buf()),
            ..Default::default()
        };
        let paths = LessonPaths::resolve(&config).unwrap();
        assert_eq!(paths.image_for('B'), Some(dir.path().join("images/en/b.png")));
        assert_eq!(paths.sound_for('B'), Some(dir.path().join("sounds/en/b.ogg")));
        assert_eq!(paths.image_for('Z'), None);
    }
}
