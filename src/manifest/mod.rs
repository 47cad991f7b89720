// SPDX-License-Identifier: MPL-2.0
//! The asset manifest: which photos and music tracks exist.
//!
//! The manifest is the only artifact shared between the build-time generator
//! and the viewer. It is a small JSON document with two lists of relative
//! paths:
//!
//! ```json
//! {
//!   "photos": ["1.jpg", "trips/2.jpg"],
//!   "musics": ["a.ogg"]
//! }
//! ```
//!
//! The generator overwrites it on every run; the viewer reads it once at
//! startup and degrades to empty lists when it is missing or malformed.

pub mod scanner;

use crate::config::{AssetsConfig, MUSIC_MOUNT, PHOTO_MOUNT};
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Lists of photo and music files, relative to their scan roots, with `/`
/// separators on every platform.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    /// Photo files under the photo root.
    #[serde(default)]
    pub photos: Vec<String>,

    /// Music files under the music root.
    #[serde(default)]
    pub musics: Vec<String>,
}

impl Manifest {
    /// Scans both asset roots and assembles a fresh manifest.
    ///
    /// A missing root contributes an empty list; generation itself cannot
    /// fail.
    pub fn generate(assets: &AssetsConfig) -> Self {
        Self {
            photos: scanner::scan_root(&assets.photo_dir, &assets.photo_extensions()),
            musics: scanner::scan_root(&assets.music_dir, &assets.music_extensions()),
        }
    }

    /// Reads a manifest from disk.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let manifest: Manifest = serde_json::from_str(&content)?;
        Ok(manifest)
    }

    /// Reads a manifest, degrading to an empty one when the file is missing
    /// or malformed. The viewer boots with whatever is available; a failed
    /// fetch must not take the page down.
    #[must_use]
    pub fn load_or_empty(path: &Path) -> Self {
        Self::load_from_path(path).unwrap_or_default()
    }

    /// Serializes the manifest as pretty-printed JSON (two-space indent).
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Writes the manifest to disk, creating parent directories and
    /// overwriting any previous content.
    pub fn write_to_path(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, self.to_json()?)?;
        Ok(())
    }

    /// Returns the number of listed photos.
    pub fn photo_count(&self) -> usize {
        self.photos.len()
    }

    /// Returns the number of listed music tracks.
    pub fn music_count(&self) -> usize {
        self.musics.len()
    }

    /// Checks whether both lists are empty.
    pub fn is_empty(&self) -> bool {
        self.photos.is_empty() && self.musics.is_empty()
    }
}

/// Builds the public URL for a photo's relative path.
#[must_use]
pub fn photo_url(rel: &str) -> String {
    format!("{PHOTO_MOUNT}/{rel}")
}

/// Builds the public URL for a music track's relative path.
#[must_use]
pub fn music_url(rel: &str) -> String {
    format!("{MUSIC_MOUNT}/{rel}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn writes_pretty_json_with_both_fields() {
        let manifest = Manifest {
            photos: vec!["a.jpg".into()],
            musics: vec![],
        };

        let json = manifest.to_json().expect("serialization failed");
        assert_eq!(
            json,
            "{\n  \"photos\": [\n    \"a.jpg\"\n  ],\n  \"musics\": []\n}"
        );
    }

    #[test]
    fn write_and_load_round_trip() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("assets.json");
        let manifest = Manifest {
            photos: vec!["1.jpg".into(), "trips/2.png".into()],
            musics: vec!["a.ogg".into()],
        };

        manifest.write_to_path(&path).expect("failed to write");
        let loaded = Manifest::load_from_path(&path).expect("failed to load");

        assert_eq!(loaded, manifest);
    }

    #[test]
    fn write_creates_parent_directories() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("public").join("assets.json");

        Manifest::default().write_to_path(&path).expect("failed to write");
        assert!(path.exists());
    }

    #[test]
    fn write_overwrites_previous_content() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("assets.json");
        let first = Manifest {
            photos: vec!["old.jpg".into()],
            musics: vec!["old.mp3".into()],
        };
        let second = Manifest {
            photos: vec!["new.jpg".into()],
            musics: vec![],
        };

        first.write_to_path(&path).expect("failed to write");
        second.write_to_path(&path).expect("failed to overwrite");

        let loaded = Manifest::load_from_path(&path).expect("failed to load");
        assert_eq!(loaded, second);
    }

    #[test]
    fn missing_field_defaults_to_empty_list() {
        let manifest: Manifest =
            serde_json::from_str(r#"{ "photos": ["x.jpg"] }"#).expect("parse failed");

        assert_eq!(manifest.photos, vec!["x.jpg"]);
        assert!(manifest.musics.is_empty());
    }

    #[test]
    fn load_from_path_rejects_malformed_json() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("assets.json");
        fs::write(&path, "{ not json").expect("failed to write");

        let result = Manifest::load_from_path(&path);
        assert!(matches!(result, Err(Error::Json(_))));
    }

    #[test]
    fn load_or_empty_degrades_on_missing_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("nowhere.json");

        let manifest = Manifest::load_or_empty(&path);
        assert!(manifest.is_empty());
    }

    #[test]
    fn load_or_empty_degrades_on_malformed_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("assets.json");
        fs::write(&path, "[]").expect("failed to write");

        let manifest = Manifest::load_or_empty(&path);
        assert!(manifest.is_empty());
    }

    #[test]
    fn generate_scans_both_roots() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let photo_dir = temp_dir.path().join("photo");
        let music_dir = temp_dir.path().join("music");
        fs::create_dir_all(&photo_dir).expect("failed to create photo dir");
        fs::create_dir_all(&music_dir).expect("failed to create music dir");
        fs::write(photo_dir.join("1.jpg"), b"jpg").expect("write");
        fs::write(photo_dir.join("skip.txt"), b"txt").expect("write");
        fs::write(music_dir.join("a.ogg"), b"ogg").expect("write");

        let assets = AssetsConfig {
            photo_dir,
            music_dir,
            ..AssetsConfig::default()
        };
        let manifest = Manifest::generate(&assets);

        assert_eq!(manifest.photos, vec!["1.jpg"]);
        assert_eq!(manifest.musics, vec!["a.ogg"]);
    }

    #[test]
    fn generate_with_missing_roots_is_empty() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let assets = AssetsConfig {
            photo_dir: temp_dir.path().join("no-photos"),
            music_dir: temp_dir.path().join("no-music"),
            ..AssetsConfig::default()
        };

        let manifest = Manifest::generate(&assets);
        assert!(manifest.is_empty());
        assert_eq!(manifest.photo_count(), 0);
        assert_eq!(manifest.music_count(), 0);
    }

    #[test]
    fn urls_join_mount_and_relative_path() {
        assert_eq!(photo_url("trips/2.jpg"), "/photo/trips/2.jpg");
        assert_eq!(music_url("a.ogg"), "/music/a.ogg");
    }
}
