// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the demo application.

use crate::error::Error;
use crate::media::MediaItem;
use crate::ribbon;
use std::path::PathBuf;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    Ribbon(ribbon::Message),
    DirectoryScanned(Result<Vec<MediaItem>, Error>),
    /// Items whose thumbnails finished decoding (or failed to).
    ThumbnailsLoaded(Vec<MediaItem>),
    ToggleCamera,
    RotateControls,
    RemoveSelected,
    ReloadCamera,
    RefreshSelected,
}

/// Runtime flags passed from the command line.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Directory whose media populate the ribbon.
    pub directory: Option<PathBuf>,
    /// Pin the camera tile after the photos instead of before.
    pub camera_last: bool,
}
