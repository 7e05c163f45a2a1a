// SPDX-License-Identifier: MPL-2.0
//! Ordered slot storage backing the ribbon.
//!
//! The data source maps a flat list of photo items plus an optional camera
//! tile to contiguous slot indices. The camera tile is pinned either before
//! or after all photos and is never moved by photo inserts or removals.
//!
//! # Example
//!
//! ```
//! use media_ribbon::ribbon::{CameraPosition, RibbonDataSource, RibbonItem, SlotChange};
//!
//! #[derive(Debug, Clone, PartialEq)]
//! struct Shot(u32);
//!
//! impl RibbonItem for Shot {
//!     type Id = u32;
//!     fn id(&self) -> u32 {
//!         self.0
//!     }
//! }
//!
//! let mut source = RibbonDataSource::new(CameraPosition::First);
//! source.set_camera_visible(true);
//!
//! assert_eq!(source.add_items(vec![Shot(1), Shot(2)]), 1..3);
//! assert_eq!(source.remove_item(&1), Some(SlotChange::Removed { from: 1 }));
//! assert_eq!(source.index_of(&2), Some(1));
//! ```

use super::slot::{RibbonItem, RibbonSlot, SlotChange};
use serde::{Deserialize, Serialize};
use std::ops::Range;

/// Where the camera tile is pinned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CameraPosition {
    #[default]
    First,
    Last,
}

/// Photo items plus the camera tile, in display order.
#[derive(Debug, Clone)]
pub struct RibbonDataSource<T: RibbonItem> {
    items: Vec<T>,
    camera_visible: bool,
    camera_position: CameraPosition,
}

impl<T: RibbonItem> RibbonDataSource<T> {
    /// Creates an empty data source with the camera tile hidden.
    #[must_use]
    pub fn new(camera_position: CameraPosition) -> Self {
        Self {
            items: Vec::new(),
            camera_visible: false,
            camera_position,
        }
    }

    /// Number of slots, camera tile included when visible.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len() + usize::from(self.camera_visible)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[must_use]
    pub fn photo_count(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_camera_visible(&self) -> bool {
        self.camera_visible
    }

    #[must_use]
    pub fn camera_position(&self) -> CameraPosition {
        self.camera_position
    }

    /// Index reserved for the camera tile, whether or not it is visible.
    ///
    /// For a hidden tile this is where it would be inserted.
    #[must_use]
    pub fn camera_index(&self) -> usize {
        match self.camera_position {
            CameraPosition::First => 0,
            CameraPosition::Last => self.items.len(),
        }
    }

    /// Slot index of the first item with the given identity.
    pub fn index_of(&self, id: &T::Id) -> Option<usize> {
        self.position_of(id).map(|pos| self.slot_index(pos))
    }

    /// Returns the item with the given identity.
    pub fn item(&self, id: &T::Id) -> Option<&T> {
        self.position_of(id).map(|pos| &self.items[pos])
    }

    /// Appends items in the given order and returns their slot indices.
    ///
    /// With a trailing camera tile the new photos land in front of it, so the
    /// returned range is still contiguous.
    pub fn add_items(&mut self, items: impl IntoIterator<Item = T>) -> Range<usize> {
        let first = self.slot_index(self.items.len());
        self.items.extend(items);
        let last = self.slot_index(self.items.len());
        first..last
    }

    /// Replaces the payload of the first item sharing `item`'s identity.
    pub fn update_item(&mut self, item: T) -> Option<SlotChange> {
        let pos = self.position_of(&item.id())?;
        self.items[pos] = item;
        Some(SlotChange::Reloaded {
            at: self.slot_index(pos),
        })
    }

    /// Removes the first item with the given identity.
    pub fn remove_item(&mut self, id: &T::Id) -> Option<SlotChange> {
        let pos = self.position_of(id)?;
        let from = self.slot_index(pos);
        self.items.remove(pos);
        Some(SlotChange::Removed { from })
    }

    /// Shows or hides the camera tile.
    ///
    /// Returns `None` when the visibility does not change.
    pub fn set_camera_visible(&mut self, visible: bool) -> Option<SlotChange> {
        if self.camera_visible == visible {
            return None;
        }
        let index = self.camera_index();
        self.camera_visible = visible;
        Some(if visible {
            SlotChange::Inserted { at: index }
        } else {
            SlotChange::Removed { from: index }
        })
    }

    /// Read-only access to a slot.
    pub fn slot(&self, index: usize) -> Option<RibbonSlot<&T>> {
        if self.camera_visible && index == self.camera_index() {
            return Some(RibbonSlot::Camera);
        }
        let offset = usize::from(self.camera_leads());
        index
            .checked_sub(offset)
            .and_then(|pos| self.items.get(pos))
            .map(RibbonSlot::Photo)
    }

    /// Iterates over every slot in display order.
    pub fn slots(&self) -> impl Iterator<Item = RibbonSlot<&T>> + '_ {
        let leading = self.camera_leads().then_some(RibbonSlot::Camera);
        let trailing = (self.camera_visible && self.camera_position == CameraPosition::Last)
            .then_some(RibbonSlot::Camera);
        leading
            .into_iter()
            .chain(self.items.iter().map(RibbonSlot::Photo))
            .chain(trailing)
    }

    /// Iterates over photo items in display order.
    pub fn items(&self) -> impl Iterator<Item = &T> + '_ {
        self.items.iter()
    }

    fn camera_leads(&self) -> bool {
        self.camera_visible && self.camera_position == CameraPosition::First
    }

    fn slot_index(&self, position: usize) -> usize {
        position + usize::from(self.camera_leads())
    }

    fn position_of(&self, id: &T::Id) -> Option<usize> {
        self.items.iter().position(|item| item.id() == *id)
    }
}
