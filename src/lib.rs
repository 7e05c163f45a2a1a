// SPDX-License-Identifier: MPL-2.0
//! `media_ribbon` is a horizontal strip of media thumbnails with a camera
//! tile, built with the Iced GUI framework.
//!
//! The [`ribbon`] module holds the reusable widget: an ordered data source,
//! a view component with animated batch updates, and its rendering. The
//! [`app`] module wraps it in a small demo application that browses a
//! directory.

#![doc(html_root_url = "https://docs.rs/media_ribbon/0.1.0")]

pub mod app;
pub mod config;
pub mod directory_scanner;
pub mod error;
pub mod media;
pub mod ribbon;
pub mod ui;

#[cfg(test)]
pub(crate) mod test_utils;
