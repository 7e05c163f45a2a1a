// SPDX-License-Identifier: MPL-2.0
//! The media ribbon: a horizontal strip of thumbnails with a camera tile.
//!
//! - [`data_source`] keeps photo items and the camera tile in display order
//! - [`component`] owns selection, animations and scrolling ([`RibbonView`])
//! - [`view`] renders the strip from component state
//! - [`layout`] decides tile sizes and strip geometry

pub mod camera;
pub mod component;
pub mod data_source;
pub mod layout;
pub mod slot;
pub mod transform;
pub mod transition;
pub mod view;

pub use camera::{CameraOutputParameters, CameraState, PreviewFit};
pub use component::{Event, Message, RibbonView, Selection, SCROLLABLE_ID};
pub use data_source::{CameraPosition, RibbonDataSource};
pub use layout::{Insets, RibbonLayout, Settings, SquareLayout, StripGeometry};
pub use slot::{RibbonItem, RibbonSlot, SlotChange};
pub use transform::{CameraOrientation, ControlsTransform};
pub use transition::{BatchId, Transition, TransitionKind};
