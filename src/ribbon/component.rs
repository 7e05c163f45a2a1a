// SPDX-License-Identifier: MPL-2.0
//! Ribbon component encapsulating state and update logic.
//!
//! The host drives the ribbon through the mutation methods below and forwards
//! [`Message`]s back into [`RibbonView::update`], which reports selections and
//! batch completions as [`Event`]s.

use super::camera::{CameraOutputParameters, CameraState};
use super::data_source::RibbonDataSource;
use super::layout::{RibbonLayout, Settings, SquareLayout, StripGeometry};
use super::slot::{RibbonSlot, SlotChange};
use super::transform::{CameraOrientation, ControlsTransform};
use super::transition::{
    ease_out_cubic, linear_progress, BatchId, Transition, TransitionKind,
};
use super::view;
use crate::config::defaults::ANIMATION_FRAME_MS;
use crate::media::{MediaId, MediaItem};
use crate::ui::theming::RibbonTheme;
use iced::widget::scrollable::RelativeOffset;
use iced::widget::{operation, Id};
use iced::{Element, Size, Subscription, Task};
use std::time::{Duration, Instant};

/// Identifier used for the ribbon scrollable widget.
pub const SCROLLABLE_ID: &str = "media-ribbon-scrollable";

/// Messages emitted by ribbon widgets and timers.
#[derive(Debug, Clone)]
pub enum Message {
    CameraPressed,
    ItemPressed(MediaId),
    ViewportChanged {
        width: f32,
        offset_x: f32,
    },
    /// The strip was laid out or resized.
    Resized(Size),
    Tick(Instant),
    /// A batch finished without (or before the end of) its animation.
    TransitionFinished(BatchId),
}

/// Events propagated to the host.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    CameraSelected,
    ItemSelected(MediaItem),
    /// The batch with this id is fully applied on screen.
    BatchCompleted(BatchId),
}

/// The single selected slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    None,
    Camera,
    Item(MediaId),
}

#[derive(Debug, Clone, Copy)]
struct ScrollAnimation {
    from: f32,
    to: f32,
    started: Instant,
    duration: Duration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScrollTarget {
    Camera,
    Item(MediaId),
}

#[derive(Debug, Clone, Copy, Default)]
struct Viewport {
    width: f32,
    offset_x: f32,
}

/// Thumbnail strip with a camera tile.
///
/// A `RibbonView` cannot be restored from persisted state; it always starts
/// empty from [`Settings`].
#[derive(Debug)]
pub struct RibbonView {
    source: RibbonDataSource<MediaItem>,
    settings: Settings,
    layout: Box<dyn RibbonLayout>,
    theme: RibbonTheme,
    selection: Selection,
    selection_started: Option<Instant>,
    transition: Option<Transition<MediaItem>>,
    last_batch: BatchId,
    camera: CameraState,
    controls_transform: ControlsTransform,
    viewport: Viewport,
    scroll: Option<ScrollAnimation>,
    pending_scroll: Option<(ScrollTarget, bool)>,
    now: Instant,
}

impl RibbonView {
    /// Creates an empty ribbon with square tiles.
    #[must_use]
    pub fn new(settings: Settings) -> Self {
        Self::with_layout(settings, Box::new(SquareLayout))
    }

    /// Creates an empty ribbon with a custom sizing policy.
    #[must_use]
    pub fn with_layout(settings: Settings, layout: Box<dyn RibbonLayout>) -> Self {
        let mut source = RibbonDataSource::new(settings.camera_position);
        let _ = source.set_camera_visible(settings.camera_visible);
        Self {
            source,
            settings,
            layout,
            theme: RibbonTheme::default(),
            selection: Selection::None,
            selection_started: None,
            transition: None,
            last_batch: BatchId::new(0),
            camera: CameraState::default(),
            controls_transform: ControlsTransform::IDENTITY,
            viewport: Viewport::default(),
            scroll: None,
            pending_scroll: None,
            now: Instant::now(),
        }
    }

    // =========================================================================
    // Selection
    // =========================================================================

    /// Selects the camera tile. Returns `false` when it is hidden.
    pub fn select_camera_item(&mut self) -> bool {
        if !self.source.is_camera_visible() {
            tracing::debug!("camera tile hidden, selection ignored");
            return false;
        }
        self.apply_selection(Selection::Camera, false);
        true
    }

    /// Selects the tile of `id`. Returns `false` when the item is unknown.
    pub fn select_media_item(&mut self, id: &MediaId, animated: bool) -> bool {
        if self.source.index_of(id).is_none() {
            tracing::debug!(?id, "unknown item, selection ignored");
            return false;
        }
        self.apply_selection(Selection::Item(*id), animated);
        true
    }

    fn apply_selection(&mut self, selection: Selection, animated: bool) {
        self.selection = selection;
        self.selection_started = animated.then(Instant::now);
    }

    fn clear_selection(&mut self) {
        self.selection = Selection::None;
        self.selection_started = None;
    }

    // =========================================================================
    // Scrolling
    // =========================================================================

    /// Centres the tile of `id` horizontally. No-op for unknown items.
    ///
    /// Requests made before the strip has been laid out are kept and applied
    /// once its width is known.
    pub fn scroll_to_item_thumbnail(&mut self, id: &MediaId, animated: bool) -> Task<Message> {
        self.scroll_to(ScrollTarget::Item(*id), animated)
    }

    /// Centres the camera tile horizontally. No-op while it is hidden.
    pub fn scroll_to_camera_thumbnail(&mut self, animated: bool) -> Task<Message> {
        self.scroll_to(ScrollTarget::Camera, animated)
    }

    fn scroll_to(&mut self, target: ScrollTarget, animated: bool) -> Task<Message> {
        let index = match target {
            ScrollTarget::Camera if self.source.is_camera_visible() => self.source.camera_index(),
            ScrollTarget::Camera => return Task::none(),
            ScrollTarget::Item(id) => match self.source.index_of(&id) {
                Some(index) => index,
                None => return Task::none(),
            },
        };

        if self.viewport.width <= 0.0 {
            tracing::debug!(?target, "strip not laid out yet, scroll deferred");
            self.pending_scroll = Some((target, animated));
            return Task::none();
        }
        self.pending_scroll = None;
        self.scroll_to_index(index, animated)
    }

    fn scroll_to_index(&mut self, index: usize, animated: bool) -> Task<Message> {
        let Some(target) = self
            .geometry()
            .centered_offset(index, self.viewport.width)
        else {
            return Task::none();
        };

        if animated && !self.settings.scroll_duration.is_zero() {
            self.scroll = Some(ScrollAnimation {
                from: self.viewport.offset_x,
                to: target,
                started: Instant::now(),
                duration: self.settings.scroll_duration,
            });
            Task::none()
        } else {
            self.scroll = None;
            self.snap_to(target)
        }
    }

    fn snap_to(&mut self, offset: f32) -> Task<Message> {
        let x = self
            .geometry()
            .relative_offset(offset, self.viewport.width);
        self.viewport.offset_x = offset;
        operation::snap_to(Id::new(SCROLLABLE_ID), RelativeOffset { x, y: 0.0 })
    }

    /// Horizontal extents of the live tiles (ghosts excluded).
    #[must_use]
    pub fn geometry(&self) -> StripGeometry {
        let content_height = self.settings.content_height();
        let widths = self
            .source
            .slots()
            .map(|slot| self.layout.tile_size(slot, content_height).width)
            .collect();
        StripGeometry::new(widths, self.settings.spacing)
    }

    /// Records the visible width and runs any scroll deferred until now.
    ///
    /// The strip reports its own bounds through [`Message::Resized`]; hosts
    /// only call this when they lay the ribbon out by other means.
    pub fn set_viewport_width(&mut self, width: f32) -> Task<Message> {
        self.viewport.width = width.max(0.0);
        match self.pending_scroll.take() {
            Some((target, animated)) => self.scroll_to(target, animated),
            None => Task::none(),
        }
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Appends items as one batch.
    ///
    /// Completion is always reported as [`Event::BatchCompleted`] with the
    /// returned id, even for an empty list.
    pub fn add_items(&mut self, items: Vec<MediaItem>, animated: bool) -> (BatchId, Task<Message>) {
        let range = self.source.add_items(items);
        tracing::debug!(?range, "inserting ribbon items");
        self.begin(TransitionKind::Insert(range), animated)
    }

    /// Replaces the payload of an existing item and reloads its tile.
    pub fn update_item(&mut self, item: MediaItem) -> Task<Message> {
        let id = item.id();
        let was_selected = self.selection == Selection::Item(id);

        let Some(change) = self.source.update_item(item) else {
            tracing::debug!(?id, "unknown item, update ignored");
            return Task::none();
        };

        let (_, task) = self.begin(TransitionKind::Reload(change.index()), true);
        if was_selected {
            self.apply_selection(Selection::Item(id), false);
        }
        task
    }

    /// Removes an item's tile. No-op for unknown items.
    pub fn remove_item(&mut self, id: &MediaId, animated: bool) -> Task<Message> {
        let Some(ghost) = self.source.item(id).cloned() else {
            tracing::debug!(?id, "unknown item, removal ignored");
            return Task::none();
        };
        let Some(change) = self.source.remove_item(id) else {
            return Task::none();
        };

        if self.selection == Selection::Item(*id) && self.source.index_of(id).is_none() {
            self.clear_selection();
        }

        let kind = TransitionKind::Delete {
            index: change.index(),
            ghost: RibbonSlot::Photo(ghost),
        };
        self.begin(kind, animated).1
    }

    /// Shows or hides the camera tile. Repeating the current value is a no-op.
    pub fn set_camera_item_visible(&mut self, visible: bool) -> Task<Message> {
        match self.source.set_camera_visible(visible) {
            None => Task::none(),
            Some(SlotChange::Inserted { at }) => {
                self.begin(TransitionKind::Insert(at..at + 1), true).1
            }
            Some(SlotChange::Removed { from }) => {
                if self.selection == Selection::Camera {
                    self.clear_selection();
                }
                let kind = TransitionKind::Delete {
                    index: from,
                    ghost: RibbonSlot::Camera,
                };
                self.begin(kind, true).1
            }
            Some(SlotChange::Reloaded { .. }) => Task::none(),
        }
    }

    /// Reloads the camera tile in place, keeping its selection.
    pub fn reload_camera(&mut self) -> Task<Message> {
        if !self.source.is_camera_visible() {
            return Task::none();
        }
        let was_selected = self.selection == Selection::Camera;
        self.camera.mark_reloaded();

        let (_, task) = self.begin(TransitionKind::Reload(self.source.camera_index()), true);
        if was_selected {
            self.apply_selection(Selection::Camera, false);
        }
        task
    }

    /// Stores the preview output; applied whenever the camera tile is drawn.
    pub fn set_camera_output_parameters(&mut self, parameters: CameraOutputParameters) {
        self.camera.set_parameters(parameters);
    }

    pub fn set_camera_output_orientation(&mut self, orientation: CameraOrientation) {
        self.camera.set_orientation(orientation);
    }

    /// Rotates every transformable tile and the camera glyph.
    pub fn set_controls_transform(&mut self, transform: ControlsTransform) {
        self.controls_transform = transform;
    }

    pub fn set_theme(&mut self, theme: RibbonTheme) {
        self.theme = theme;
    }

    /// Starts a batch, finishing any batch still on screen first.
    fn begin(&mut self, kind: TransitionKind<MediaItem>, animated: bool) -> (BatchId, Task<Message>) {
        let id = self.last_batch.next();
        self.last_batch = id;

        let mut tasks = Vec::new();
        if let Some(previous) = self.transition.take() {
            tasks.push(Task::done(Message::TransitionFinished(previous.id())));
        }

        let now = Instant::now();
        self.now = now;
        if animated && !kind.is_empty() && !self.settings.transition.is_zero() {
            self.transition = Some(Transition::new(id, kind, now, self.settings.transition));
        } else {
            tasks.push(Task::done(Message::TransitionFinished(id)));
        }

        (id, Task::batch(tasks))
    }

    // =========================================================================
    // Update loop
    // =========================================================================

    pub fn update(&mut self, message: Message) -> (Event, Task<Message>) {
        match message {
            Message::CameraPressed => {
                if self.select_camera_item() {
                    (Event::CameraSelected, Task::none())
                } else {
                    (Event::None, Task::none())
                }
            }
            Message::ItemPressed(id) => match self.source.item(&id).cloned() {
                Some(item) => {
                    self.apply_selection(Selection::Item(id), false);
                    (Event::ItemSelected(item), Task::none())
                }
                None => (Event::None, Task::none()),
            },
            Message::ViewportChanged { width, offset_x } => {
                self.viewport.offset_x = offset_x;
                (Event::None, self.set_viewport_width(width))
            }
            Message::Resized(size) => (Event::None, self.set_viewport_width(size.width)),
            Message::Tick(now) => self.tick(now),
            Message::TransitionFinished(id) => {
                if self.transition.as_ref().is_some_and(|t| t.id() == id) {
                    self.transition = None;
                }
                tracing::debug!(?id, "ribbon batch completed");
                (Event::BatchCompleted(id), Task::none())
            }
        }
    }

    fn tick(&mut self, now: Instant) -> (Event, Task<Message>) {
        self.now = now;

        let mut event = Event::None;
        if let Some(transition) = &self.transition {
            if transition.is_finished(now) {
                event = Event::BatchCompleted(transition.id());
                self.transition = None;
            }
        }

        if let Some(started) = self.selection_started {
            if linear_progress(started, self.settings.transition, now) >= 1.0 {
                self.selection_started = None;
            }
        }

        let task = match self.scroll {
            Some(animation) => {
                let t = linear_progress(animation.started, animation.duration, now);
                let offset = animation.from + (animation.to - animation.from) * ease_out_cubic(t);
                if t >= 1.0 {
                    self.scroll = None;
                }
                self.snap_to(offset)
            }
            None => Task::none(),
        };

        (event, task)
    }

    /// Frame ticks while anything is animating.
    pub fn subscription(&self) -> Subscription<Message> {
        if self.is_animating() {
            iced::time::every(Duration::from_millis(ANIMATION_FRAME_MS)).map(Message::Tick)
        } else {
            Subscription::none()
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn data_source(&self) -> &RibbonDataSource<MediaItem> {
        &self.source
    }

    #[must_use]
    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// The selected photo item, if a photo is selected.
    pub fn selected_item(&self) -> Option<&MediaItem> {
        match self.selection {
            Selection::Item(id) => self.source.item(&id),
            _ => None,
        }
    }

    /// Opacity of the selection ring, fading in after animated selections.
    #[must_use]
    pub fn selection_alpha(&self) -> f32 {
        match self.selection_started {
            Some(started) => ease_out_cubic(linear_progress(
                started,
                self.settings.transition,
                self.now,
            )),
            None => 1.0,
        }
    }

    pub fn transition(&self) -> Option<&Transition<MediaItem>> {
        self.transition.as_ref()
    }

    #[must_use]
    pub fn last_batch(&self) -> BatchId {
        self.last_batch
    }

    pub fn camera(&self) -> &CameraState {
        &self.camera
    }

    #[must_use]
    pub fn controls_transform(&self) -> ControlsTransform {
        self.controls_transform
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn layout(&self) -> &dyn RibbonLayout {
        self.layout.as_ref()
    }

    pub fn theme(&self) -> &RibbonTheme {
        &self.theme
    }

    /// Timestamp of the last frame tick or mutation.
    #[must_use]
    pub fn now(&self) -> Instant {
        self.now
    }

    /// Current horizontal scroll offset.
    #[must_use]
    pub fn scroll_offset(&self) -> f32 {
        self.viewport.offset_x
    }

    /// Destination of the running scroll animation.
    #[must_use]
    pub fn scroll_target(&self) -> Option<f32> {
        self.scroll.map(|animation| animation.to)
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.transition.is_some() || self.scroll.is_some() || self.selection_started.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::MediaKind;
    use crate::ribbon::{CameraPosition, PreviewFit};
    use crate::test_utils::{assert_abs_diff_eq, F32_EPSILON};
    use iced::widget::image::Handle;
    use std::path::PathBuf;

    fn item(n: u64) -> MediaItem {
        MediaItem::new(
            MediaId::new(n),
            PathBuf::from(format!("{n}.png")),
            MediaKind::Photo,
        )
    }

    fn ribbon() -> RibbonView {
        RibbonView::new(Settings::default())
    }

    fn later() -> Instant {
        Instant::now() + Duration::from_secs(10)
    }

    #[test]
    fn new_ribbon_shows_only_camera() {
        let ribbon = ribbon();
        assert_eq!(ribbon.data_source().len(), 1);
        assert!(ribbon.data_source().is_camera_visible());
        assert!(!ribbon.is_animating());
    }

    #[test]
    fn hidden_camera_setting_starts_empty() {
        let ribbon = RibbonView::new(Settings {
            camera_visible: false,
            ..Settings::default()
        });
        assert!(ribbon.data_source().is_empty());
    }

    #[test]
    fn animated_add_starts_insert_transition() {
        let mut ribbon = ribbon();
        let (id, _) = ribbon.add_items(vec![item(1), item(2)], true);

        let transition = ribbon.transition().expect("insert should animate");
        assert_eq!(transition.id(), id);
        assert!(matches!(transition.kind(), TransitionKind::Insert(range) if *range == (1..3)));
        assert_eq!(ribbon.data_source().index_of(&MediaId::new(2)), Some(2));
    }

    #[test]
    fn tick_past_duration_completes_batch() {
        let mut ribbon = ribbon();
        let (id, _) = ribbon.add_items(vec![item(1)], true);

        let (event, _) = ribbon.update(Message::Tick(later()));
        assert!(matches!(event, Event::BatchCompleted(done) if done == id));
        assert!(ribbon.transition().is_none());
    }

    #[test]
    fn empty_add_completes_without_animation() {
        let mut ribbon = ribbon();
        let (id, _) = ribbon.add_items(Vec::new(), true);
        assert!(ribbon.transition().is_none());

        let (event, _) = ribbon.update(Message::TransitionFinished(id));
        assert!(matches!(event, Event::BatchCompleted(done) if done == id));
    }

    #[test]
    fn unanimated_add_skips_transition() {
        let mut ribbon = ribbon();
        let _ = ribbon.add_items(vec![item(1)], false);
        assert!(ribbon.transition().is_none());
        assert_eq!(ribbon.data_source().len(), 2);
    }

    #[test]
    fn new_batch_supersedes_running_one() {
        let mut ribbon = ribbon();
        let (first, _) = ribbon.add_items(vec![item(1)], true);
        let (second, _) = ribbon.add_items(vec![item(2)], true);

        assert_ne!(first, second);
        assert_eq!(ribbon.transition().map(Transition::id), Some(second));

        // The superseded batch still reports completion when its message arrives
        let (event, _) = ribbon.update(Message::TransitionFinished(first));
        assert!(matches!(event, Event::BatchCompleted(done) if done == first));
        assert_eq!(ribbon.transition().map(Transition::id), Some(second));
    }

    #[test]
    fn camera_toggle_with_same_value_is_no_op() {
        let mut ribbon = ribbon();
        let before = ribbon.last_batch();
        let _ = ribbon.set_camera_item_visible(true);
        assert_eq!(ribbon.last_batch(), before);
        assert!(ribbon.transition().is_none());

        let _ = ribbon.set_camera_item_visible(false);
        assert_ne!(ribbon.last_batch(), before);
        let after_hide = ribbon.last_batch();
        let _ = ribbon.set_camera_item_visible(false);
        assert_eq!(ribbon.last_batch(), after_hide);
    }

    #[test]
    fn hiding_camera_leaves_a_ghost_and_clears_selection() {
        let mut ribbon = ribbon();
        assert!(ribbon.select_camera_item());
        let _ = ribbon.set_camera_item_visible(false);

        assert_eq!(ribbon.selection(), Selection::None);
        let ghost = ribbon.transition().and_then(Transition::ghost);
        assert!(matches!(ghost, Some((0, RibbonSlot::Camera))));
        assert!(!ribbon.select_camera_item());
    }

    #[test]
    fn update_preserves_selection() {
        let mut ribbon = ribbon();
        let _ = ribbon.add_items(vec![item(1), item(2)], false);
        assert!(ribbon.select_media_item(&MediaId::new(2), false));

        let refreshed = item(2).with_thumbnail(Handle::from_rgba(1, 1, vec![0, 0, 0, 255]));
        let _ = ribbon.update_item(refreshed);

        assert_eq!(ribbon.selection(), Selection::Item(MediaId::new(2)));
        assert!(ribbon
            .selected_item()
            .and_then(MediaItem::thumbnail)
            .is_some());
        assert!(matches!(
            ribbon.transition().map(Transition::kind),
            Some(TransitionKind::Reload(2))
        ));
    }

    #[test]
    fn update_of_unknown_item_changes_nothing() {
        let mut ribbon = ribbon();
        let _ = ribbon.add_items(vec![item(1)], false);
        let before = ribbon.last_batch();

        let _ = ribbon.update_item(item(99));

        assert_eq!(ribbon.last_batch(), before);
        assert_eq!(ribbon.data_source().len(), 2);
        assert_eq!(ribbon.data_source().index_of(&MediaId::new(1)), Some(1));
    }

    #[test]
    fn remove_selected_item_clears_selection() {
        let mut ribbon = ribbon();
        let _ = ribbon.add_items(vec![item(1), item(2)], false);
        ribbon.select_media_item(&MediaId::new(1), false);

        let _ = ribbon.remove_item(&MediaId::new(1), true);

        assert_eq!(ribbon.selection(), Selection::None);
        let ghost = ribbon.transition().and_then(Transition::ghost);
        assert!(matches!(ghost, Some((1, RibbonSlot::Photo(p))) if p.id() == MediaId::new(1)));
        assert_eq!(ribbon.data_source().index_of(&MediaId::new(2)), Some(1));
    }

    #[test]
    fn remove_unknown_item_is_no_op() {
        let mut ribbon = ribbon();
        let before = ribbon.last_batch();
        let _ = ribbon.remove_item(&MediaId::new(5), true);
        assert_eq!(ribbon.last_batch(), before);
    }

    #[test]
    fn reload_camera_keeps_camera_selected() {
        let mut ribbon = ribbon();
        ribbon.select_camera_item();
        let _ = ribbon.reload_camera();

        assert_eq!(ribbon.selection(), Selection::Camera);
        assert_eq!(ribbon.camera().reloads(), 1);
        assert!(matches!(
            ribbon.transition().map(Transition::kind),
            Some(TransitionKind::Reload(0))
        ));
    }

    #[test]
    fn camera_parameters_are_kept_while_hidden() {
        let mut ribbon = ribbon();
        let _ = ribbon.set_camera_item_visible(false);
        ribbon.set_camera_output_parameters(CameraOutputParameters {
            frame: Some(Handle::from_rgba(1, 1, vec![1, 2, 3, 255])),
            fit: PreviewFit::Fit,
        });
        ribbon.set_camera_output_orientation(CameraOrientation::LandscapeLeft);
        let _ = ribbon.set_camera_item_visible(true);

        assert!(ribbon.camera().frame().is_some());
        assert_eq!(ribbon.camera().orientation(), CameraOrientation::LandscapeLeft);
    }

    #[test]
    fn taps_report_selection_events() {
        let mut ribbon = ribbon();
        let _ = ribbon.add_items(vec![item(7)], false);

        let (event, _) = ribbon.update(Message::ItemPressed(MediaId::new(7)));
        assert!(matches!(event, Event::ItemSelected(ref picked) if picked.id() == MediaId::new(7)));
        assert_eq!(ribbon.selection(), Selection::Item(MediaId::new(7)));

        let (event, _) = ribbon.update(Message::CameraPressed);
        assert!(matches!(event, Event::CameraSelected));
        assert_eq!(ribbon.selection(), Selection::Camera);

        let (event, _) = ribbon.update(Message::ItemPressed(MediaId::new(8)));
        assert!(matches!(event, Event::None));
        assert_eq!(ribbon.selection(), Selection::Camera);
    }

    #[test]
    fn animated_selection_fades_in() {
        let mut ribbon = ribbon();
        let _ = ribbon.add_items(vec![item(1)], false);
        ribbon.select_media_item(&MediaId::new(1), true);
        assert!(ribbon.is_animating());

        let _ = ribbon.update(Message::Tick(later()));
        assert_abs_diff_eq!(ribbon.selection_alpha(), 1.0);
        assert!(!ribbon.is_animating());
    }

    #[test]
    fn selecting_unknown_item_keeps_selection() {
        let mut ribbon = ribbon();
        ribbon.select_camera_item();
        assert!(!ribbon.select_media_item(&MediaId::new(3), true));
        assert_eq!(ribbon.selection(), Selection::Camera);
    }

    #[test]
    fn scroll_centres_target_tile() {
        let mut ribbon = RibbonView::new(Settings {
            camera_position: CameraPosition::First,
            ..Settings::default()
        });
        let _ = ribbon.add_items((1..=20).map(item).collect(), false);
        let _ = ribbon.set_viewport_width(300.0);

        let _ = ribbon.scroll_to_item_thumbnail(&MediaId::new(10), false);

        let geometry = ribbon.geometry();
        let expected = geometry.centered_offset(10, 300.0).unwrap_or_default();
        assert!(expected > 0.0);
        assert_abs_diff_eq!(ribbon.scroll_offset(), expected, epsilon = F32_EPSILON);
    }

    #[test]
    fn animated_scroll_reaches_target_on_ticks() {
        let mut ribbon = ribbon();
        let _ = ribbon.add_items((1..=20).map(item).collect(), false);
        let _ = ribbon.set_viewport_width(300.0);

        let _ = ribbon.scroll_to_item_thumbnail(&MediaId::new(15), true);
        let target = ribbon.scroll_target().expect("scroll should animate");
        assert_abs_diff_eq!(ribbon.scroll_offset(), 0.0);

        let _ = ribbon.update(Message::Tick(later()));
        assert_abs_diff_eq!(ribbon.scroll_offset(), target, epsilon = F32_EPSILON);
        assert!(ribbon.scroll_target().is_none());
    }

    #[test]
    fn scroll_to_absent_targets_is_no_op() {
        let mut ribbon = ribbon();
        let _ = ribbon.set_camera_item_visible(false);
        let _ = ribbon.scroll_to_camera_thumbnail(true);
        let _ = ribbon.scroll_to_item_thumbnail(&MediaId::new(1), true);
        assert!(ribbon.scroll_target().is_none());
        assert_abs_diff_eq!(ribbon.scroll_offset(), 0.0);

        // Nothing was queued for later either
        let _ = ribbon.set_viewport_width(300.0);
        assert_abs_diff_eq!(ribbon.scroll_offset(), 0.0);
    }

    #[test]
    fn scroll_before_layout_waits_for_strip_bounds() {
        let mut ribbon = ribbon();
        let _ = ribbon.add_items((1..=20).map(item).collect(), false);

        let _ = ribbon.scroll_to_item_thumbnail(&MediaId::new(10), false);
        assert_abs_diff_eq!(ribbon.scroll_offset(), 0.0);

        let _ = ribbon.update(Message::Resized(Size::new(800.0, 96.0)));

        let expected = ribbon.geometry().centered_offset(10, 800.0).unwrap_or_default();
        assert!(expected > 0.0);
        assert_abs_diff_eq!(ribbon.scroll_offset(), expected, epsilon = F32_EPSILON);
    }

    #[test]
    fn scroll_to_leading_camera_returns_to_start() {
        let mut ribbon = ribbon();
        let _ = ribbon.add_items((1..=20).map(item).collect(), false);
        let _ = ribbon.set_viewport_width(300.0);
        let _ = ribbon.scroll_to_item_thumbnail(&MediaId::new(15), false);
        assert!(ribbon.scroll_offset() > 0.0);

        let _ = ribbon.scroll_to_camera_thumbnail(false);

        let expected = ribbon.geometry().centered_offset(0, 300.0).unwrap_or(-1.0);
        assert_abs_diff_eq!(expected, 0.0);
        assert_abs_diff_eq!(ribbon.scroll_offset(), expected);
    }

    #[test]
    fn scroll_to_trailing_camera_reaches_end() {
        let mut ribbon = RibbonView::new(Settings {
            camera_position: CameraPosition::Last,
            ..Settings::default()
        });
        let _ = ribbon.add_items((1..=20).map(item).collect(), false);
        let _ = ribbon.set_viewport_width(300.0);

        let _ = ribbon.scroll_to_camera_thumbnail(false);

        let geometry = ribbon.geometry();
        assert_eq!(ribbon.data_source().camera_index(), 20);
        assert_abs_diff_eq!(
            ribbon.scroll_offset(),
            geometry.max_offset(300.0),
            epsilon = F32_EPSILON
        );
    }

    #[test]
    fn controls_transform_is_stored() {
        let mut ribbon = ribbon();
        ribbon.set_controls_transform(ControlsTransform::new(90));
        assert_eq!(ribbon.controls_transform().degrees(), 90);
    }
}
