// SPDX-License-Identifier: MPL-2.0
//! Animated batch updates.
//!
//! A [`Transition`] records one insert, delete or reload batch while it plays.
//! Only one transition is live at a time: the view finishes the running one
//! before starting the next, so the tiles on screen always match the data
//! source (plus the single ghost of a delete).

use super::slot::RibbonSlot;
use crate::ui::design_tokens::opacity;
use std::ops::Range;
use std::time::{Duration, Instant};

/// Identifies a batch so its completion can be matched by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BatchId(u64);

impl BatchId {
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    #[must_use]
    pub fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

/// What a batch changed.
#[derive(Debug, Clone)]
pub enum TransitionKind<T> {
    /// Slots in `Range` appeared (post-mutation indices).
    Insert(Range<usize>),
    /// `ghost` used to live at `index` (pre-mutation index).
    Delete { index: usize, ghost: RibbonSlot<T> },
    /// The slot at the index changed payload.
    Reload(usize),
}

impl<T> TransitionKind<T> {
    /// An insert of nothing has nothing to animate.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, TransitionKind::Insert(range) if range.is_empty())
    }
}

/// A running batch animation.
#[derive(Debug, Clone)]
pub struct Transition<T> {
    id: BatchId,
    kind: TransitionKind<T>,
    started: Instant,
    duration: Duration,
}

impl<T> Transition<T> {
    #[must_use]
    pub fn new(id: BatchId, kind: TransitionKind<T>, started: Instant, duration: Duration) -> Self {
        Self {
            id,
            kind,
            started,
            duration,
        }
    }

    #[must_use]
    pub fn id(&self) -> BatchId {
        self.id
    }

    pub fn kind(&self) -> &TransitionKind<T> {
        &self.kind
    }

    /// Eased completion in `0.0..=1.0`.
    #[must_use]
    pub fn progress(&self, now: Instant) -> f32 {
        ease_out_cubic(linear_progress(self.started, self.duration, now))
    }

    #[must_use]
    pub fn is_finished(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started) >= self.duration
    }

    /// Width/height multiplier for the live tile at `index`.
    #[must_use]
    pub fn tile_scale(&self, index: usize, now: Instant) -> f32 {
        match &self.kind {
            TransitionKind::Insert(range) if range.contains(&index) => self.progress(now),
            _ => 1.0,
        }
    }

    /// Opacity for the live tile at `index`.
    #[must_use]
    pub fn tile_opacity(&self, index: usize, now: Instant) -> f32 {
        match &self.kind {
            TransitionKind::Insert(range) if range.contains(&index) => self.progress(now),
            TransitionKind::Reload(at) if *at == index => {
                opacity::RELOAD_FLASH + (1.0 - opacity::RELOAD_FLASH) * self.progress(now)
            }
            _ => 1.0,
        }
    }

    /// The removed slot still on screen and its pre-mutation index.
    pub fn ghost(&self) -> Option<(usize, &RibbonSlot<T>)> {
        match &self.kind {
            TransitionKind::Delete { index, ghost } => Some((*index, ghost)),
            _ => None,
        }
    }

    /// Scale of the ghost tile, shrinking to nothing.
    #[must_use]
    pub fn ghost_scale(&self, now: Instant) -> f32 {
        1.0 - self.progress(now)
    }
}

/// Linear progress of an animation started at `started`.
///
/// A zero duration is complete immediately.
#[must_use]
pub fn linear_progress(started: Instant, duration: Duration, now: Instant) -> f32 {
    if duration.is_zero() {
        return 1.0;
    }
    let elapsed = now.saturating_duration_since(started).as_secs_f32();
    (elapsed / duration.as_secs_f32()).clamp(0.0, 1.0)
}

/// Cubic ease-out: fast start, gentle landing.
#[must_use]
pub fn ease_out_cubic(t: f32) -> f32 {
    let inv = 1.0 - t.clamp(0.0, 1.0);
    1.0 - inv * inv * inv
}
