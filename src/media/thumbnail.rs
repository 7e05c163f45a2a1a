// SPDX-License-Identifier: MPL-2.0
//! Thumbnail decoding for ribbon tiles.

use super::{MediaItem, MediaKind};
use crate::error::Result;
use iced::widget::image::Handle;
use std::path::Path;

/// Longest side of a decoded thumbnail, in pixels.
pub const THUMBNAIL_MAX_SIDE: u32 = 256;

/// Decodes `path` and downscales it to fit in `max_side` x `max_side`.
pub fn load_thumbnail(path: &Path, max_side: u32) -> Result<Handle> {
    let decoded = image_rs::open(path)?;
    let rgba = decoded.thumbnail(max_side, max_side).to_rgba8();
    let (width, height) = rgba.dimensions();
    Ok(Handle::from_rgba(width, height, rgba.into_raw()))
}

/// Decodes thumbnails for a batch of items on the blocking pool.
///
/// Photos that fail to decode keep an empty thumbnail and render as
/// placeholders; videos are passed through untouched.
pub async fn load_thumbnails(items: Vec<MediaItem>, max_side: u32) -> Vec<MediaItem> {
    let result = tokio::task::spawn_blocking(move || {
        items
            .into_iter()
            .map(|item| decode_into(item, max_side))
            .collect::<Vec<_>>()
    })
    .await;

    match result {
        Ok(items) => items,
        Err(err) => {
            tracing::warn!(%err, "thumbnail worker failed");
            Vec::new()
        }
    }
}

fn decode_into(item: MediaItem, max_side: u32) -> MediaItem {
    if item.kind() != MediaKind::Photo {
        return item;
    }
    match load_thumbnail(item.path(), max_side) {
        Ok(handle) => item.with_thumbnail(handle),
        Err(err) => {
            tracing::warn!(path = %item.path().display(), %err, "thumbnail decode failed");
            item
        }
    }
}
