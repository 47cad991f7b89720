// SPDX-License-Identifier: MPL-2.0
//! `photowall` pairs a build-time asset-manifest generator with the state
//! engine of a single-page photo slideshow.
//!
//! The generator scans a photo directory and a music directory and writes
//! `assets.json`, the manifest a web page fetches at startup. The viewer
//! side is a set of plain state machines nothing here renders: the photo
//! rotation, the audio player's transport mirror, and the draggable
//! floating widget, all driven through [`viewer::Viewer::update`].

#![doc(html_root_url = "https://docs.rs/photowall/0.1.0")]

pub mod config;
pub mod error;
pub mod manifest;
pub mod viewer;

#[cfg(test)]
pub mod test_utils;
