// SPDX-License-Identifier: MPL-2.0
//! Recursive directory scanner feeding the asset manifest.
//!
//! The scanner walks an asset root depth-first in directory-listing order and
//! collects the relative paths of files whose extension is on an allow-list.
//! Matching is case-insensitive; the recorded paths keep their original
//! spelling and are assembled with `/` separators regardless of host OS, so
//! the manifest is identical across platforms.

use std::path::Path;

/// Scans `root` recursively and returns the relative paths of all files whose
/// extension appears in `extensions` (lowercase, without dots).
///
/// A missing or unreadable root yields an empty list rather than an error;
/// the asset directory is optional by contract. Unreadable entries below the
/// root are skipped the same way. Files with non-UTF-8 names cannot be
/// represented in the manifest and are skipped.
pub fn scan_root(root: &Path, extensions: &[String]) -> Vec<String> {
    let mut found = Vec::new();
    collect(root, extensions, "", &mut found);
    found
}

fn collect(dir: &Path, extensions: &[String], prefix: &str, found: &mut Vec<String>) {
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(_) => return,
    };

    for entry in entries.flatten() {
        let path = entry.path();
        let name = entry.file_name();
        let name = match name.to_str() {
            Some(name) => name,
            None => continue,
        };
        let rel = if prefix.is_empty() {
            name.to_string()
        } else {
            format!("{prefix}/{name}")
        };

        // Directories are recursed into even when their name happens to
        // carry a matching extension; only files are listed.
        if path.is_dir() {
            collect(&path, extensions, &rel, found);
        } else if matches_extension(&path, extensions) {
            found.push(rel);
        }
    }
}

/// Checks whether a file's extension is on the allow-list (case-insensitive).
fn matches_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            let ext = ext.to_lowercase();
            extensions.iter().any(|allowed| *allowed == ext)
        })
        .unwrap_or(false)
}
