// SPDX-License-Identifier: MPL-2.0
//! Demo application hosting a [`RibbonView`].
//!
//! The `App` scans a directory, feeds the ribbon with its media, decodes
//! thumbnails off the UI thread and exposes the ribbon operations through a
//! small toolbar. A synthetic test pattern stands in for the camera preview.

mod message;
pub mod paths;
pub mod preview;
mod view;

pub use message::{Flags, Message};

use crate::config;
use crate::directory_scanner::scan_directory;
use crate::error::Error;
use crate::media::{load_thumbnails, MediaItem, THUMBNAIL_MAX_SIDE};
use crate::ribbon::{self, CameraOutputParameters, CameraPosition, PreviewFit, RibbonView};
use crate::ui::theming::{RibbonTheme, ThemeMode};
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;

pub const WINDOW_DEFAULT_HEIGHT: u32 = 240;
pub const WINDOW_DEFAULT_WIDTH: u32 = 800;
pub const MIN_WINDOW_HEIGHT: u32 = 200;
pub const MIN_WINDOW_WIDTH: u32 = 320;

/// Number of thumbnails decoded per background task.
pub const THUMBNAIL_BATCH_SIZE: usize = 8;

/// Root state of the demo.
pub struct App {
    ribbon: RibbonView,
    theme_mode: ThemeMode,
    directory: Option<PathBuf>,
    status: String,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("directory", &self.directory)
            .field("slots", &self.ribbon.data_source().len())
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced requires an `Fn` boot closure; the flags are consumed on the first call
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        if let Some(warning) = &config_warning {
            tracing::warn!("{warning}");
        }

        let mut settings = config.ribbon.to_settings();
        if flags.camera_last {
            settings.camera_position = CameraPosition::Last;
        }

        let theme_mode = config.general.theme_mode;
        let mut ribbon = RibbonView::new(settings);
        ribbon.set_theme(RibbonTheme::for_mode(theme_mode));
        ribbon.set_camera_output_parameters(CameraOutputParameters {
            frame: Some(preview::test_pattern(preview::PREVIEW_SIDE, 0)),
            fit: PreviewFit::Fill,
        });

        let status = config_warning.unwrap_or_else(|| String::from("Ready"));
        let app = App {
            ribbon,
            theme_mode,
            directory: flags.directory.clone(),
            status,
        };

        let task = match flags.directory {
            Some(directory) => {
                tracing::info!(directory = %directory.display(), "scanning media directory");
                Task::perform(scan(directory), Message::DirectoryScanned)
            }
            None => Task::none(),
        };

        (app, task)
    }

    fn title(&self) -> String {
        match self.directory.as_ref().and_then(|dir| dir.file_name()) {
            Some(name) => format!("Media Ribbon - {}", name.to_string_lossy()),
            None => String::from("Media Ribbon"),
        }
    }

    fn theme(&self) -> Theme {
        self.theme_mode.iced_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        self.ribbon.subscription().map(Message::Ribbon)
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Ribbon(message) => self.handle_ribbon_message(message),
            Message::DirectoryScanned(Ok(items)) => {
                self.status = format!("{} media files", items.len());
                let batches = thumbnail_batches(&items);
                let (_, task) = self.ribbon.add_items(items, true);
                let decode = batches.into_iter().map(|batch| {
                    Task::perform(
                        load_thumbnails(batch, THUMBNAIL_MAX_SIDE),
                        Message::ThumbnailsLoaded,
                    )
                });
                Task::batch(std::iter::once(task.map(Message::Ribbon)).chain(decode))
            }
            Message::DirectoryScanned(Err(err)) => {
                tracing::warn!(%err, "failed to scan media directory");
                self.status = err.to_string();
                Task::none()
            }
            Message::ThumbnailsLoaded(items) => {
                let tasks: Vec<_> = items
                    .into_iter()
                    .filter(|item| item.thumbnail().is_some())
                    .map(|item| self.ribbon.update_item(item).map(Message::Ribbon))
                    .collect();
                Task::batch(tasks)
            }
            Message::ToggleCamera => {
                let visible = self.ribbon.data_source().is_camera_visible();
                self.ribbon
                    .set_camera_item_visible(!visible)
                    .map(Message::Ribbon)
            }
            Message::RotateControls => {
                let transform = self.ribbon.controls_transform().rotate_clockwise();
                self.ribbon.set_controls_transform(transform);
                self.status = format!("Controls rotated to {}°", transform.degrees());
                Task::none()
            }
            Message::RemoveSelected => match self.ribbon.selected_item().map(MediaItem::id) {
                Some(id) => self.ribbon.remove_item(&id, true).map(Message::Ribbon),
                None => Task::none(),
            },
            Message::ReloadCamera => {
                let phase = self.ribbon.camera().reloads() + 1;
                self.ribbon
                    .set_camera_output_parameters(CameraOutputParameters {
                        frame: Some(preview::test_pattern(preview::PREVIEW_SIDE, phase)),
                        fit: PreviewFit::Fill,
                    });
                self.ribbon.reload_camera().map(Message::Ribbon)
            }
            Message::RefreshSelected => match self.ribbon.selected_item().cloned() {
                Some(item) => Task::perform(
                    load_thumbnails(vec![item], THUMBNAIL_MAX_SIDE),
                    Message::ThumbnailsLoaded,
                ),
                None => Task::none(),
            },
        }
    }

    fn handle_ribbon_message(&mut self, message: ribbon::Message) -> Task<Message> {
        let (event, task) = self.ribbon.update(message);
        let follow_up = match event {
            ribbon::Event::None => Task::none(),
            ribbon::Event::CameraSelected => {
                self.status = String::from("Camera selected");
                self.ribbon.scroll_to_camera_thumbnail(true)
            }
            ribbon::Event::ItemSelected(item) => {
                tracing::info!(path = %item.path().display(), "media selected");
                self.status = item.path().display().to_string();
                self.ribbon.scroll_to_item_thumbnail(&item.id(), true)
            }
            ribbon::Event::BatchCompleted(id) => {
                tracing::debug!(?id, "ribbon batch settled");
                Task::none()
            }
        };
        Task::batch([task, follow_up]).map(Message::Ribbon)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            ribbon: &self.ribbon,
            status: &self.status,
        })
    }
}

/// Splits items into the batches decoded by one background task each.
fn thumbnail_batches(items: &[MediaItem]) -> Vec<Vec<MediaItem>> {
    items
        .chunks(THUMBNAIL_BATCH_SIZE)
        .map(<[MediaItem]>::to_vec)
        .collect()
}

async fn scan(directory: PathBuf) -> Result<Vec<MediaItem>, Error> {
    tokio::task::spawn_blocking(move || scan_directory(&directory))
        .await
        .map_err(|err| Error::Io(err.to_string()))?
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::{MediaId, MediaKind};
    use crate::ribbon::Selection;

    fn items(count: u64) -> Vec<MediaItem> {
        (0..count)
            .map(|n| {
                MediaItem::new(
                    MediaId::new(n),
                    PathBuf::from(format!("{n}.png")),
                    MediaKind::Photo,
                )
            })
            .collect()
    }

    fn app() -> App {
        App {
            ribbon: RibbonView::new(ribbon::Settings::default()),
            theme_mode: ThemeMode::Dark,
            directory: None,
            status: String::new(),
        }
    }

    #[test]
    fn batches_cover_every_item_in_order() {
        let items = items(THUMBNAIL_BATCH_SIZE as u64 * 2 + 3);
        let batches = thumbnail_batches(&items);
        assert_eq!(batches.len(), 3);
        assert_eq!(batches[2].len(), 3);
        let flattened: Vec<MediaId> = batches.iter().flatten().map(MediaItem::id).collect();
        let expected: Vec<MediaId> = items.iter().map(MediaItem::id).collect();
        assert_eq!(flattened, expected);
    }

    #[test]
    fn scanned_directory_fills_ribbon() {
        let mut app = app();
        let _ = app.update(Message::DirectoryScanned(Ok(items(4))));
        assert_eq!(app.ribbon.data_source().photo_count(), 4);
        assert_eq!(app.status, "4 media files");
    }

    #[test]
    fn scan_failure_is_reported_in_status() {
        let mut app = app();
        let _ = app.update(Message::DirectoryScanned(Err(Error::Io(String::from(
            "denied",
        )))));
        assert!(app.status.contains("denied"));
        assert_eq!(app.ribbon.data_source().photo_count(), 0);
    }

    #[test]
    fn toggle_camera_flips_visibility() {
        let mut app = app();
        let _ = app.update(Message::ToggleCamera);
        assert!(!app.ribbon.data_source().is_camera_visible());
        let _ = app.update(Message::ToggleCamera);
        assert!(app.ribbon.data_source().is_camera_visible());
    }

    #[test]
    fn remove_selected_drops_the_item() {
        let mut app = app();
        let _ = app.update(Message::DirectoryScanned(Ok(items(2))));
        let _ = app.update(Message::Ribbon(ribbon::Message::ItemPressed(MediaId::new(1))));
        assert_eq!(app.ribbon.selection(), Selection::Item(MediaId::new(1)));

        let _ = app.update(Message::RemoveSelected);
        assert_eq!(app.ribbon.data_source().index_of(&MediaId::new(1)), None);
        assert_eq!(app.ribbon.selection(), Selection::None);
    }

    #[test]
    fn reload_camera_swaps_preview_frame() {
        let mut app = app();
        let _ = app.update(Message::ReloadCamera);
        assert_eq!(app.ribbon.camera().reloads(), 1);
        assert!(app.ribbon.camera().frame().is_some());
    }

    #[test]
    fn camera_last_flag_overrides_config() {
        let (app, _) = App::new(Flags {
            directory: None,
            camera_last: true,
        });
        assert_eq!(app.ribbon.data_source().camera_position(), CameraPosition::Last);
        assert!(app.directory.is_none());
    }

    #[test]
    fn rotate_controls_advances_a_quarter_turn() {
        let mut app = app();
        let _ = app.update(Message::RotateControls);
        assert_eq!(app.ribbon.controls_transform().degrees(), 90);
    }
}
