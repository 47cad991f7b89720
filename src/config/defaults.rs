// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Asset Paths**: Scan roots, manifest location, and public mounts
//! - **Extensions**: Allow-lists deciding which files enter the manifest
//! - **Slideshow**: Photo rotation timing
//! - **Volume**: Audio playback volume settings
//! - **Panel**: Floating-widget pointer handling

// ==========================================================================
// Asset Path Defaults
// ==========================================================================

/// Default directory scanned for photos, relative to the project root.
pub const DEFAULT_PHOTO_DIR: &str = "public/photo";

/// Default directory scanned for music tracks, relative to the project root.
pub const DEFAULT_MUSIC_DIR: &str = "public/music";

/// Default location of the generated asset manifest.
pub const DEFAULT_MANIFEST_PATH: &str = "public/assets.json";

/// Public mount under which photo files are served.
pub const PHOTO_MOUNT: &str = "/photo";

/// Public mount under which music files are served.
pub const MUSIC_MOUNT: &str = "/music";

// ==========================================================================
// Extension Allow-lists
// ==========================================================================

/// File extensions (lowercase, without the dot) admitted into the photo list.
pub const PHOTO_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "webp"];

/// File extensions (lowercase, without the dot) admitted into the music list.
/// `mgg` is an app-specific container carried by the deployed asset tree;
/// the scanner matches names only and never inspects file contents.
pub const MUSIC_EXTENSIONS: &[&str] = &["mp3", "ogg", "wav", "mgg"];

// ==========================================================================
// Slideshow Defaults
// ==========================================================================

/// Default delay between automatic photo advances (in milliseconds).
pub const DEFAULT_SLIDE_INTERVAL_MS: u64 = 3500;

/// Minimum accepted slide interval. Shorter configured values are clamped
/// so a misconfigured interval cannot spin the rotation timer.
pub const MIN_SLIDE_INTERVAL_MS: u64 = 100;

// ==========================================================================
// Volume Defaults
// ==========================================================================

/// Default playback volume applied when the player comes up (50%).
pub const DEFAULT_VOLUME: f32 = 0.5;

/// Minimum volume level.
pub const MIN_VOLUME: f32 = 0.0;

/// Maximum volume level (1.0 = 100%, no amplification).
pub const MAX_VOLUME: f32 = 1.0;

// ==========================================================================
// Panel Defaults
// ==========================================================================

/// Pointer displacement (logical pixels, per axis) below which a
/// press-release pair counts as a tap rather than a drag.
pub const TAP_THRESHOLD_PX: f32 = 5.0;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    // Slide interval validation
    assert!(MIN_SLIDE_INTERVAL_MS > 0);
    assert!(DEFAULT_SLIDE_INTERVAL_MS >= MIN_SLIDE_INTERVAL_MS);

    // Volume validation
    assert!(MIN_VOLUME >= 0.0);
    assert!(MAX_VOLUME > MIN_VOLUME);
    assert!(DEFAULT_VOLUME >= MIN_VOLUME);
    assert!(DEFAULT_VOLUME <= MAX_VOLUME);

    // Tap threshold validation
    assert!(TAP_THRESHOLD_PX > 0.0);

    // Allow-lists must never be empty
    assert!(!PHOTO_EXTENSIONS.is_empty());
    assert!(!MUSIC_EXTENSIONS.is_empty());

    // Mounts must be absolute
    assert!(!PHOTO_MOUNT.is_empty() && PHOTO_MOUNT.as_bytes()[0] == b'/');
    assert!(!MUSIC_MOUNT.is_empty() && MUSIC_MOUNT.as_bytes()[0] == b'/');
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slide_interval_defaults_are_valid() {
        assert_eq!(DEFAULT_SLIDE_INTERVAL_MS, 3500);
        assert!(DEFAULT_SLIDE_INTERVAL_MS >= MIN_SLIDE_INTERVAL_MS);
    }

    #[test]
    fn volume_defaults_are_valid() {
        assert_eq!(DEFAULT_VOLUME, 0.5);
        assert!(DEFAULT_VOLUME >= MIN_VOLUME);
        assert!(DEFAULT_VOLUME <= MAX_VOLUME);
    }

    #[test]
    fn extension_lists_are_lowercase_without_dot() {
        for ext in PHOTO_EXTENSIONS.iter().chain(MUSIC_EXTENSIONS) {
            assert!(!ext.starts_with('.'), "{ext} must not carry a dot");
            assert_eq!(*ext, ext.to_lowercase(), "{ext} must be lowercase");
        }
    }

    #[test]
    fn mounts_are_absolute() {
        assert!(PHOTO_MOUNT.starts_with('/'));
        assert!(MUSIC_MOUNT.starts_with('/'));
    }
}
