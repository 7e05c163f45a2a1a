// SPDX-License-Identifier: MPL-2.0
//! Slot types shared by the ribbon data source and its view.

use std::fmt;

/// Identity contract for values shown in the ribbon.
///
/// Two values with equal ids denote the same slot even when their payload
/// differs (e.g. a refreshed thumbnail for the same photo).
pub trait RibbonItem: Clone + fmt::Debug {
    type Id: Clone + fmt::Debug + PartialEq;

    fn id(&self) -> Self::Id;
}

/// One position in the ribbon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RibbonSlot<T> {
    /// The "return to camera" tile.
    Camera,
    /// A photo or video thumbnail.
    Photo(T),
}

impl<T> RibbonSlot<T> {
    /// Borrows the payload without cloning it.
    pub fn as_ref(&self) -> RibbonSlot<&T> {
        match self {
            RibbonSlot::Camera => RibbonSlot::Camera,
            RibbonSlot::Photo(item) => RibbonSlot::Photo(item),
        }
    }

    #[must_use]
    pub fn is_camera(&self) -> bool {
        matches!(self, RibbonSlot::Camera)
    }

    /// Returns the photo payload, if any.
    pub fn photo(&self) -> Option<&T> {
        match self {
            RibbonSlot::Camera => None,
            RibbonSlot::Photo(item) => Some(item),
        }
    }
}

impl<T: Clone> RibbonSlot<&T> {
    /// Clones the borrowed payload into an owned slot.
    #[must_use]
    pub fn cloned(self) -> RibbonSlot<T> {
        match self {
            RibbonSlot::Camera => RibbonSlot::Camera,
            RibbonSlot::Photo(item) => RibbonSlot::Photo(item.clone()),
        }
    }
}

/// Index bookkeeping for a single-slot mutation.
///
/// Each variant states which index space its index belongs to, so callers
/// never have to guess whether it was captured before or after the mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotChange {
    /// A slot now exists at `at` (post-mutation index).
    Inserted { at: usize },
    /// The slot previously at `from` is gone (pre-mutation index).
    Removed { from: usize },
    /// The slot at `at` changed payload; indices are unchanged.
    Reloaded { at: usize },
}

impl SlotChange {
    /// The index carried by this change.
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            SlotChange::Inserted { at } | SlotChange::Reloaded { at } => at,
            SlotChange::Removed { from } => from,
        }
    }
}
