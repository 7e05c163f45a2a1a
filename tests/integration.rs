// SPDX-License-Identifier: MPL-2.0
use media_ribbon::config::{self, Config};
use media_ribbon::media::{MediaId, MediaItem, MediaKind};
use media_ribbon::ribbon::{
    CameraPosition, Event, Message, RibbonDataSource, RibbonSlot, RibbonView, Selection, Settings,
    SlotChange,
};
use media_ribbon::ui::theming::ThemeMode;
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tempfile::tempdir;

fn item(n: u64, name: &str) -> MediaItem {
    MediaItem::new(MediaId::new(n), PathBuf::from(name), MediaKind::Photo)
}

#[test]
fn data_source_walkthrough() {
    let mut source = RibbonDataSource::new(CameraPosition::First);
    assert_eq!(source.set_camera_visible(true), Some(SlotChange::Inserted { at: 0 }));

    let a = item(1, "a.png");
    let b = item(2, "b.png");
    assert_eq!(source.add_items(vec![a.clone(), b.clone()]), 1..3);

    assert_eq!(source.remove_item(&a.id()), Some(SlotChange::Removed { from: 1 }));
    let slots: Vec<_> = source.slots().map(RibbonSlot::cloned).collect();
    assert!(matches!(slots.as_slice(), [RibbonSlot::Camera, RibbonSlot::Photo(p)] if p.id() == b.id()));

    let b_prime = item(2, "b-edited.png");
    assert_eq!(source.update_item(b_prime), Some(SlotChange::Reloaded { at: 1 }));
    let refreshed = source.slot(1).and_then(|slot| slot.photo().map(|p| p.path().to_path_buf()));
    assert_eq!(refreshed, Some(PathBuf::from("b-edited.png")));

    // Re-adding a removed identity appends it again
    assert_eq!(source.add_items(vec![a.clone()]), 2..3);
    assert_eq!(source.len(), 3);
}

#[test]
fn ribbon_session_reports_events() {
    let mut ribbon = RibbonView::new(Settings {
        camera_position: CameraPosition::Last,
        ..Settings::default()
    });

    let (batch, _) = ribbon.add_items(vec![item(1, "a.png"), item(2, "b.png")], true);
    assert_eq!(ribbon.data_source().camera_index(), 2);

    let (event, _) = ribbon.update(Message::Tick(Instant::now() + Duration::from_secs(5)));
    assert!(matches!(event, Event::BatchCompleted(id) if id == batch));

    let (event, _) = ribbon.update(Message::ItemPressed(MediaId::new(2)));
    assert!(matches!(event, Event::ItemSelected(ref picked) if picked.id() == MediaId::new(2)));

    let _ = ribbon.remove_item(&MediaId::new(2), false);
    assert_eq!(ribbon.selection(), Selection::None);
    assert_eq!(ribbon.data_source().camera_index(), 1);

    let (event, _) = ribbon.update(Message::CameraPressed);
    assert!(matches!(event, Event::CameraSelected));
}

#[test]
fn config_round_trip_drives_settings() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let mut config = Config::default();
    config.general.theme_mode = ThemeMode::Light;
    config.ribbon.camera_position = CameraPosition::Last;
    config.ribbon.camera_visible = false;
    config::save_to_path(&config, &path).expect("Failed to write config file");

    let loaded = config::load_from_path(&path).expect("Failed to load config file");
    assert_eq!(loaded.general.theme_mode, ThemeMode::Light);

    let ribbon = RibbonView::new(loaded.ribbon.to_settings());
    assert!(ribbon.data_source().is_empty());
    assert_eq!(ribbon.data_source().camera_position(), CameraPosition::Last);
}
