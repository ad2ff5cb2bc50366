use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::error::Result;

/// One imported (image, audio) association. The fields are opaque
/// content-store identifiers; they are not checked for existence until
/// the media is actually used.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaPair {
    pub image: String,
    pub audio: String,
}

/// Custom media imported by the user, keyed by a single uppercase
/// letter. Each letter holds the pairs in the order they were added.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomLetterMap {
    entries: BTreeMap<char, Vec<MediaPair>>,
}

impl CustomLetterMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a pair to a letter's entry, creating the entry on first use.
    pub fn append(&mut self, letter: char, pair: MediaPair) {
        self.entries.entry(letter).or_default().push(pair);
    }

    pub fn pairs_for(&self, letter: char) -> &[MediaPair] {
        self.entries.get(&letter).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn letters(&self) -> impl Iterator<Item = char> + '_ {
        self.entries.keys().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(encoded: &str) -> Result<Self> {
        Ok(serde_json::from_str(encoded)?)
    }
}

/// Normalize free-text letter entry to the mapping key it names.
///
/// Longer text keeps only its first character (historical behavior kept
/// pending product-owner review). Empty, whitespace-only and
/// non-alphabetic entries yield no letter.
pub fn letter_from_entry(text: &str) -> Option<char> {
    let first = text.trim().chars().next()?;
    if !first.is_alphabetic() {
        return None;
    }
    first.to_uppercase().next()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(n: u32) -> MediaPair {
        MediaPair {
            image: format!("image-{}", n),
            audio: format!("audio-{}", n),
        }
    }

    #[test]
    fn test_append_creates_entry() {
        let mut map = CustomLetterMap::new();
        assert!(map.is_empty());

        map.append('B', pair(1));
        assert_eq!(map.pairs_for('B'), &[pair(1)]);
        assert_eq!(map.pairs_for('A'), &[]);
    }

    #[test]
    fn test_append_preserves_order_and_other_letters() {
        let mut map = CustomLetterMap::new();
        map.append('A', pair(1));
        map.append('B', pair(2));
        map.append('B', pair(3));

        assert_eq!(map.pairs_for('B'), &[pair(2), pair(3)]);
        assert_eq!(map.pairs_for('A'), &[pair(1)]);
        assert_eq!(map.letters().collect::<Vec<_>>(), vec!['A', 'B']);
    }

    #[test]
    fn test_json_round_trip() {
        let mut map = CustomLetterMap::new();
        map.append('B', pair(1));
        map.append('B', pair(2));
        map.append('Q', pair(3));

        let json = map.to_json().unwrap();
        let loaded = CustomLetterMap::from_json(&json).unwrap();
        assert_eq!(map, loaded);
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        assert!(CustomLetterMap::from_json("not json").is_err());
        assert!(CustomLetterMap::from_json(r#"{"B": "no pairs"}"#).is_err());
    }

    #[test]
    fn test_letter_from_entry_single() {
        assert_eq!(letter_from_entry("b"), Some('B'));
        assert_eq!(letter_from_entry("Q"), Some('Q'));
        assert_eq!(letter_from_entry("  m "), Some('M'));
    }

    #[test]
    fn test_letter_from_entry_truncates_to_first_char() {
        assert_eq!(letter_from_entry("banana"), Some('B'));
        assert_eq!(letter_from_entry("aB"), Some('A'));
    }

    #[test]
    fn test_letter_from_entry_rejects_empty_and_symbols() {
        assert_eq!(letter_from_entry(""), None);
        assert_eq!(letter_from_entry("   "), None);
        assert_eq!(letter_from_entry("3"), None);
        assert_eq!(letter_from_entry("!"), None);
    }
}
