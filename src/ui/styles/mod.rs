// SPDX-License-Identifier: MPL-2.0
//! Centralized styles for ribbon widgets and the demo shell.

pub mod button;
pub mod container;
pub mod overlay;
