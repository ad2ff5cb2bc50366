use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use log::warn;

use super::error::{ActivityError, Result};
use super::mapping::CustomLetterMap;

/// Metadata key holding the string-encoded current page index.
pub const PAGE_KEY: &str = "page";

/// Metadata key holding the JSON encoding of the custom letter mapping.
pub const CUSTOM_MEDIA_KEY: &str = "custom-media";

/// The host's persisted key/value session metadata. `commit` is atomic
/// on the host side; callers only have to produce a valid encoding.
pub trait MetadataStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: String);
    fn commit(&mut self) -> Result<()>;
}

/// File-backed metadata store: one JSON object per session file.
pub struct FileMetadataStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

/// Returns the session directory path: data_dir/lettermatch/session/
pub fn session_dir() -> PathBuf {
    let mut path = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("lettermatch");
    path.push("session");
    path
}

pub fn metadata_path() -> PathBuf {
    session_dir().join("metadata.json")
}

impl FileMetadataStore {
    /// Open a store, loading any prior session file. A missing file is an
    /// empty session; an unreadable one is treated the same, with a log
    /// line, so a fresh session can still start.
    pub fn open(path: PathBuf) -> Self {
        let entries = match fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(entries) => entries,
                Err(e) => {
                    warn!("ignoring unreadable session file {}: {}", path.display(), e);
                    BTreeMap::new()
                }
            },
            Err(_) => BTreeMap::new(),
        };
        Self { path, entries }
    }
}

impl MetadataStore for FileMetadataStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) {
        self.entries.insert(key.to_string(), value);
    }

    fn commit(&mut self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(&self.entries)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

/// Serialize the session state into metadata and commit it.
pub fn save_session(
    store: &mut dyn MetadataStore,
    page: usize,
    map: &CustomLetterMap,
) -> Result<()> {
    store.set(PAGE_KEY, page.to_string());
    store.set(CUSTOM_MEDIA_KEY, map.to_json()?);
    store.commit()
}

/// Page index from a prior session, or 0.
pub fn load_page(store: &dyn MetadataStore) -> usize {
    store
        .get(PAGE_KEY)
        .and_then(|s| s.parse().ok())
        .unwrap_or(0)
}

/// Custom mapping from a prior session. Absence means an empty mapping;
/// a malformed value aborts the restore.
pub fn load_custom_media(store: &dyn MetadataStore) -> Result<CustomLetterMap> {
    match store.get(CUSTOM_MEDIA_KEY) {
        None => Ok(CustomLetterMap::new()),
        Some(encoded) => CustomLetterMap::from_json(&encoded)
            .map_err(|e| ActivityError::Metadata(format!("bad {} value: {}", CUSTOM_MEDIA_KEY, e))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::mapping::MediaPair;

    fn store_in(dir: &tempfile::TempDir) -> FileMetadataStore {
        FileMetadataStore::open(dir.path().join("metadata.json"))
    }

    #[test]
    fn test_missing_file_is_empty_session() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        assert_eq!(store.get(PAGE_KEY), None);
        assert_eq!(load_page(&store), 0);
        assert!(load_custom_media(&store).unwrap().is_empty());
    }

    #[test]
    fn test_save_then_reopen_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let mut map = CustomLetterMap::new();
        map.append(
            'B',
            MediaPair {
                image: "i1".to_string(),
                audio: "a1".to_string(),
            },
        );

        let mut store = store_in(&dir);
        save_session(&mut store, 7, &map).unwrap();

        let reopened = store_in(&dir);
        assert_eq!(load_page(&reopened), 7);
        assert_eq!(load_custom_media(&reopened).unwrap(), map);
    }

    #[test]
    fn test_malformed_mapping_aborts_restore() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(&dir);
        store.set(CUSTOM_MEDIA_KEY, "{broken".to_string());

        let err = load_custom_media(&store).unwrap_err();
        assert!(matches!(err, ActivityError::Metadata(_)));
    }

    #[test]
    fn test_unparseable_page_defaults_to_zero() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(&dir);
        store.set(PAGE_KEY, "three".to_string());
        assert_eq!(load_page(&store), 0);
    }

    #[test]
    fn test_commit_creates_session_dir() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/session/metadata.json");
        let mut store = FileMetadataStore::open(path.clone());
        store.set(PAGE_KEY, "0".to_string());
        store.commit().unwrap();
        assert!(path.is_file());
    }
}
