// SPDX-License-Identifier: MPL-2.0
//! This module handles the crate's configuration, including loading and saving
//! settings from a `photowall.toml` file.
//!
//! # Configuration Sections
//!
//! The configuration is organized into logical sections:
//! - `[assets]` - Scan roots, manifest location, and extension allow-lists
//! - `[slideshow]` - Photo rotation timing
//! - `[player]` - Initial audio volume and mute state
//!
//! # Path Resolution
//!
//! The config file location is resolved in priority order:
//! 1. Explicit path (the generator's `--config` flag)
//! 2. `PHOTOWALL_CONFIG` environment variable
//! 3. `photowall.toml` in the current directory, if present
//! 4. Built-in defaults (no file read at all)
//!
//! # Examples
//!
//! ```no_run
//! use photowall::config::{self, Config};
//!
//! // Load configuration (returns tuple with optional warning)
//! let (config, _warning) = config::load_or_default(None);
//! assert!(config.slideshow.interval().as_millis() >= 100);
//! ```

pub mod defaults;

pub use defaults::*;

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "photowall.toml";
const CONFIG_ENV_VAR: &str = "PHOTOWALL_CONFIG";

// =============================================================================
// Section Structs
// =============================================================================

/// Asset scanning and manifest settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AssetsConfig {
    /// Directory scanned for photos.
    #[serde(default = "default_photo_dir")]
    pub photo_dir: PathBuf,

    /// Directory scanned for music tracks.
    #[serde(default = "default_music_dir")]
    pub music_dir: PathBuf,

    /// Where the generated manifest is written.
    #[serde(default = "default_manifest_path")]
    pub manifest_path: PathBuf,

    /// Photo extension allow-list override (lowercase, without dots).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_extensions: Option<Vec<String>>,

    /// Music extension allow-list override (lowercase, without dots).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub music_extensions: Option<Vec<String>>,
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            photo_dir: default_photo_dir(),
            music_dir: default_music_dir(),
            manifest_path: default_manifest_path(),
            photo_extensions: None,
            music_extensions: None,
        }
    }
}

impl AssetsConfig {
    /// Effective photo allow-list: the configured override, normalized to
    /// lowercase, or the built-in default.
    pub fn photo_extensions(&self) -> Vec<String> {
        resolve_extensions(self.photo_extensions.as_deref(), PHOTO_EXTENSIONS)
    }

    /// Effective music allow-list: the configured override, normalized to
    /// lowercase, or the built-in default.
    pub fn music_extensions(&self) -> Vec<String> {
        resolve_extensions(self.music_extensions.as_deref(), MUSIC_EXTENSIONS)
    }
}

/// Photo rotation settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SlideshowConfig {
    /// Delay between automatic photo advances, in milliseconds.
    #[serde(default = "default_interval_ms")]
    pub interval_ms: u64,
}

impl Default for SlideshowConfig {
    fn default() -> Self {
        Self {
            interval_ms: default_interval_ms(),
        }
    }
}

impl SlideshowConfig {
    /// Effective rotation interval, clamped to the supported minimum.
    #[must_use]
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms.max(MIN_SLIDE_INTERVAL_MS))
    }
}

/// Initial audio player settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlayerConfig {
    /// Initial playback volume (0.0 to 1.0).
    #[serde(default = "default_volume")]
    pub volume: f32,

    /// Whether audio starts muted.
    #[serde(default)]
    pub muted: bool,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            volume: default_volume(),
            muted: false,
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Crate configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    /// Asset scanning and manifest settings.
    #[serde(default)]
    pub assets: AssetsConfig,

    /// Photo rotation settings.
    #[serde(default)]
    pub slideshow: SlideshowConfig,

    /// Initial audio player settings.
    #[serde(default)]
    pub player: PlayerConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_photo_dir() -> PathBuf {
    PathBuf::from(DEFAULT_PHOTO_DIR)
}

fn default_music_dir() -> PathBuf {
    PathBuf::from(DEFAULT_MUSIC_DIR)
}

fn default_manifest_path() -> PathBuf {
    PathBuf::from(DEFAULT_MANIFEST_PATH)
}

fn default_interval_ms() -> u64 {
    DEFAULT_SLIDE_INTERVAL_MS
}

fn default_volume() -> f32 {
    DEFAULT_VOLUME
}

fn resolve_extensions(configured: Option<&[String]>, builtin: &[&str]) -> Vec<String> {
    match configured {
        Some(list) if !list.is_empty() => list
            .iter()
            .map(|ext| ext.trim_start_matches('.').to_lowercase())
            .collect(),
        _ => builtin.iter().map(|ext| ext.to_string()).collect(),
    }
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Resolves the config file path: explicit override, then the
/// `PHOTOWALL_CONFIG` environment variable, then `photowall.toml` in the
/// current directory. Returns `None` when no candidate exists.
pub fn resolve_path(explicit: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path);
    }
    if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
        if !path.is_empty() {
            return Some(PathBuf::from(path));
        }
    }
    let local = PathBuf::from(CONFIG_FILE);
    local.exists().then_some(local)
}

// =============================================================================
// Load / Save Functions
// =============================================================================

/// Loads the configuration, falling back to defaults.
///
/// Returns a tuple of (config, optional_warning). A missing file is not an
/// error; an unreadable or unparsable one yields defaults plus a warning
/// message explaining what went wrong.
pub fn load_or_default(explicit: Option<PathBuf>) -> (Config, Option<String>) {
    match resolve_path(explicit) {
        Some(path) => match load_from_path(&path) {
            Ok(config) => (config, None),
            Err(err) => (
                Config::default(),
                Some(format!(
                    "could not read config {}: {} (using defaults)",
                    path.display(),
                    err
                )),
            ),
        },
        None => (Config::default(), None),
    }
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

/// Saves configuration to a specific path, creating parent directories.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================
