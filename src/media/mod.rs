// SPDX-License-Identifier: MPL-2.0
//! Media items displayed by the ribbon.
//!
//! A [`MediaItem`] is the payload of a photo slot: a stable identity, the
//! source path, its kind (photo or video) and an optional decoded thumbnail.

pub mod thumbnail;

use crate::ribbon::RibbonItem;
use iced::widget::image::Handle;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::path::{Path, PathBuf};
use std::time::Duration;

pub use thumbnail::{load_thumbnail, load_thumbnails, THUMBNAIL_MAX_SIDE};

/// Supported media file extensions.
pub mod extensions {
    /// Image file extensions decodable into thumbnails.
    pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "tiff", "tif", "webp", "bmp"];

    /// Video file extensions (shown with a placeholder thumbnail).
    pub const VIDEO_EXTENSIONS: &[&str] = &["mp4", "m4v", "avi", "mov", "mkv", "webm"];
}

/// Stable identity of a media item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MediaId(u64);

impl MediaId {
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Derives an id from a file path. Equal paths give equal ids within a run.
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        let mut hasher = DefaultHasher::new();
        path.hash(&mut hasher);
        Self(hasher.finish())
    }

    #[must_use]
    pub fn raw(self) -> u64 {
        self.0
    }
}

/// Photo or video.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Photo,
    Video { duration: Option<Duration> },
}

impl MediaKind {
    /// Detects the kind from a file extension. `None` for unsupported files.
    #[must_use]
    pub fn detect(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_lowercase();
        if extensions::IMAGE_EXTENSIONS.contains(&ext.as_str()) {
            Some(MediaKind::Photo)
        } else if extensions::VIDEO_EXTENSIONS.contains(&ext.as_str()) {
            Some(MediaKind::Video { duration: None })
        } else {
            None
        }
    }

    #[must_use]
    pub fn is_video(self) -> bool {
        matches!(self, MediaKind::Video { .. })
    }
}

/// One photo slot payload.
#[derive(Debug, Clone)]
pub struct MediaItem {
    id: MediaId,
    path: PathBuf,
    kind: MediaKind,
    thumbnail: Option<Handle>,
}

impl MediaItem {
    #[must_use]
    pub fn new(id: MediaId, path: PathBuf, kind: MediaKind) -> Self {
        Self {
            id,
            path,
            kind,
            thumbnail: None,
        }
    }

    /// Builds an item for a file, deriving id and kind from the path.
    ///
    /// Returns `None` when the extension is not a supported media type.
    #[must_use]
    pub fn from_path(path: PathBuf) -> Option<Self> {
        let kind = MediaKind::detect(&path)?;
        Some(Self::new(MediaId::from_path(&path), path, kind))
    }

    #[must_use]
    pub fn with_thumbnail(mut self, thumbnail: Handle) -> Self {
        self.thumbnail = Some(thumbnail);
        self
    }

    #[must_use]
    pub fn id(&self) -> MediaId {
        self.id
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub fn kind(&self) -> MediaKind {
        self.kind
    }

    pub fn thumbnail(&self) -> Option<&Handle> {
        self.thumbnail.as_ref()
    }

    /// Short label for the tile badge, e.g. `1:05` for videos.
    #[must_use]
    pub fn badge(&self) -> Option<String> {
        match self.kind {
            MediaKind::Photo => None,
            MediaKind::Video { duration: None } => Some(String::from("▶")),
            MediaKind::Video {
                duration: Some(duration),
            } => {
                let secs = duration.as_secs();
                Some(format!("{}:{:02}", secs / 60, secs % 60))
            }
        }
    }
}

impl RibbonItem for MediaItem {
    type Id = MediaId;

    fn id(&self) -> MediaId {
        self.id
    }
}
