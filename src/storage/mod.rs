//! On-disk storage for uploaded listing media.
//!
//! Each stored file gets a generated name `{listing_id}_{rand8hex}.{ext}`;
//! the original filename is used only to derive the extension and is then
//! discarded. Parts with an empty filename or no extension are skipped, not
//! treated as request failures.

use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

use crate::error::AppError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MediaKind {
    Photo,
    Video,
}

impl MediaKind {
    pub fn dir_name(self) -> &'static str {
        match self {
            MediaKind::Photo => "photos",
            MediaKind::Video => "videos",
        }
    }
}

pub struct MediaStorage {
    root: PathBuf,
}

impl MediaStorage {
    /// Creates the photos/ and videos/ directories under `root` if absent.
    pub fn new(root: impl Into<PathBuf>) -> Result<Self, AppError> {
        let root = root.into();
        fs::create_dir_all(root.join(MediaKind::Photo.dir_name()))?;
        fs::create_dir_all(root.join(MediaKind::Video.dir_name()))?;
        Ok(Self { root })
    }

    pub fn dir(&self, kind: MediaKind) -> PathBuf {
        self.root.join(kind.dir_name())
    }

    /// Writes one media part, returning the generated filename, or `None`
    /// when the part is skipped (empty filename or no extension).
    pub fn save(
        &self,
        kind: MediaKind,
        listing_id: &str,
        original_filename: &str,
        bytes: &[u8],
    ) -> Result<Option<String>, AppError> {
        let Some(ext) = file_extension(original_filename) else {
            log::debug!(
                "Skipping {} part with unusable filename {:?}",
                kind.dir_name(),
                original_filename
            );
            return Ok(None);
        };
        let filename = format!("{}_{}.{}", listing_id, random_hex8(), ext);
        fs::write(self.dir(kind).join(&filename), bytes)?;
        Ok(Some(filename))
    }
}

/// Random 8-character listing identifier. Collisions against existing rows
/// are accepted as negligible and never checked.
pub fn new_listing_id() -> String {
    random_hex8()
}

fn random_hex8() -> String {
    Uuid::new_v4().simple().to_string()[..8].to_string()
}

/// Lowercased extension after the last dot; `None` when the name is empty,
/// has no dot, or ends with one.
fn file_extension(name: &str) -> Option<String> {
    let (_, ext) = name.rsplit_once('.')?;
    if ext.is_empty() {
        return None;
    }
    Some(ext.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listing_ids_are_eight_hex_chars() {
        let id = new_listing_id();
        assert_eq!(id.len(), 8);
        assert!(id.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn extension_is_lowercased() {
        assert_eq!(file_extension("House.JPG"), Some("jpg".to_string()));
        assert_eq!(file_extension("a.b.mp4"), Some("mp4".to_string()));
        assert_eq!(file_extension("noext"), None);
        assert_eq!(file_extension("trailing."), None);
        assert_eq!(file_extension(""), None);
    }

    #[test]
    fn save_generates_prefixed_name_and_writes_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let storage = MediaStorage::new(dir.path()).unwrap();
        let name = storage
            .save(MediaKind::Photo, "ab12cd34", "front View.JPG", b"img")
            .unwrap()
            .unwrap();
        assert!(name.starts_with("ab12cd34_"));
        assert!(name.ends_with(".jpg"));
        assert_ne!(name, "front View.JPG");
        let stored = std::fs::read(storage.dir(MediaKind::Photo).join(&name)).unwrap();
        assert_eq!(stored, b"img");
    }

    #[test]
    fn extensionless_part_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let storage = MediaStorage::new(dir.path()).unwrap();
        let result = storage
            .save(MediaKind::Video, "ab12cd34", "clip", b"vid")
            .unwrap();
        assert!(result.is_none());
        let entries: Vec<_> = std::fs::read_dir(storage.dir(MediaKind::Video))
            .unwrap()
            .collect();
        assert!(entries.is_empty());
    }

    #[test]
    fn directories_created_idempotently() {
        let dir = tempfile::tempdir().unwrap();
        MediaStorage::new(dir.path()).unwrap();
        let storage = MediaStorage::new(dir.path()).unwrap();
        assert!(storage.dir(MediaKind::Photo).is_dir());
        assert!(storage.dir(MediaKind::Video).is_dir());
    }
}
