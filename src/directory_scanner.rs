// SPDX-License-Identifier: MPL-2.0
//! Directory scanner feeding the ribbon with media files.
//!
//! Scans a directory (non-recursively) for supported images and videos and
//! returns them as thumbnail-less [`MediaItem`]s, sorted by file name.

use crate::error::Result;
use crate::media::MediaItem;
use std::path::{Path, PathBuf};

/// Lists supported media files in `directory`, sorted by file name.
///
/// Returns an error if the directory cannot be read.
pub fn scan_directory(directory: &Path) -> Result<Vec<MediaItem>> {
    let mut media_files = Vec::new();

    for entry in std::fs::read_dir(directory)? {
        let entry = entry?;
        let path = entry.path();

        if path.is_file() {
            media_files.push(path);
        }
    }

    sort_media_files(&mut media_files);

    Ok(media_files
        .into_iter()
        .filter_map(MediaItem::from_path)
        .collect())
}

fn sort_media_files(media_files: &mut [PathBuf]) {
    media_files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
}
