// SPDX-License-Identifier: MPL-2.0
//! Rendering of the ribbon strip.
//!
//! Tiles are rebuilt on every frame. [`configure_tiles`] first resolves what
//! each tile looks like (size, selection, animation, transform) from the
//! component state, then [`view`] turns those models into widgets.

use super::camera::PreviewFit;
use super::component::{Message, RibbonView, Selection, SCROLLABLE_ID};
use super::slot::RibbonSlot;
use super::transform::ControlsTransform;
use crate::media::MediaItem;
use crate::ui::design_tokens::{border, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::scrollable::{Direction, Scrollbar, Viewport};
use iced::widget::svg::Svg;
use iced::widget::{button, sensor, Container, Id, Image, Row, Scrollable, Stack, Text};
use iced::{ContentFit, Element, Length, Padding, Size};

/// Resolved appearance of one tile for the current frame.
#[derive(Debug, Clone, Copy)]
pub struct TileModel<'a> {
    pub slot: RibbonSlot<&'a MediaItem>,
    /// Final size, animation scale included.
    pub size: Size,
    pub selected: bool,
    pub selection_alpha: f32,
    pub opacity: f32,
    /// Rotation applied to the tile content, if the layout allows it.
    pub transform: Option<ControlsTransform>,
    /// Rotation of the centred glyph. The camera glyph follows the controls
    /// even though its tile frame does not.
    pub glyph_transform: Option<ControlsTransform>,
    /// A removed slot still shrinking away; it cannot be pressed.
    pub ghost: bool,
}

/// Builds the tile models in display order, ghost of a delete included.
pub fn configure_tiles(ribbon: &RibbonView) -> Vec<TileModel<'_>> {
    let now = ribbon.now();
    let content_height = ribbon.settings().content_height();
    let layout = ribbon.layout();
    let transition = ribbon.transition();
    let source = ribbon.data_source();
    let selection_alpha = ribbon.selection_alpha();

    let selected_index = match ribbon.selection() {
        Selection::None => None,
        Selection::Camera => source
            .is_camera_visible()
            .then(|| source.camera_index()),
        Selection::Item(id) => source.index_of(&id),
    };

    let transform_for = |slot: RibbonSlot<&MediaItem>| {
        layout
            .is_transformable(slot)
            .then_some(ribbon.controls_transform())
    };

    let glyph_transform_for = |slot: RibbonSlot<&MediaItem>| match slot {
        RibbonSlot::Camera => Some(ribbon.controls_transform()),
        RibbonSlot::Photo(_) => transform_for(slot),
    };

    let mut tiles: Vec<TileModel<'_>> = source
        .slots()
        .enumerate()
        .map(|(index, slot)| {
            let scale = transition.map_or(1.0, |t| t.tile_scale(index, now));
            TileModel {
                slot,
                size: scaled(layout.tile_size(slot, content_height), scale),
                selected: selected_index == Some(index),
                selection_alpha,
                opacity: transition.map_or(1.0, |t| t.tile_opacity(index, now)),
                transform: transform_for(slot),
                glyph_transform: glyph_transform_for(slot),
                ghost: false,
            }
        })
        .collect();

    if let Some((index, ghost)) = transition.and_then(|t| t.ghost()) {
        let slot = ghost.as_ref();
        let scale = transition.map_or(0.0, |t| t.ghost_scale(now));
        let model = TileModel {
            slot,
            size: scaled(layout.tile_size(slot, content_height), scale),
            selected: false,
            selection_alpha,
            opacity: scale,
            transform: transform_for(slot),
            glyph_transform: glyph_transform_for(slot),
            ghost: true,
        };
        tiles.insert(index.min(tiles.len()), model);
    }

    tiles
}

fn scaled(size: Size, scale: f32) -> Size {
    Size::new(size.width * scale, size.height * scale)
}

/// Renders the strip.
pub fn view(ribbon: &RibbonView) -> Element<'_, Message> {
    let settings = ribbon.settings();

    let tiles = configure_tiles(ribbon)
        .into_iter()
        .map(|tile| tile_view(ribbon, tile));

    let row = Row::with_children(tiles)
        .spacing(settings.spacing)
        .padding(Padding {
            top: settings.insets.top,
            right: settings.spacing,
            bottom: settings.insets.bottom,
            left: settings.spacing,
        })
        .height(Length::Fill)
        .align_y(Vertical::Center);

    let scrollable = Scrollable::new(row)
        .id(Id::new(SCROLLABLE_ID))
        .width(Length::Fill)
        .height(Length::Fill)
        .direction(Direction::Horizontal(Scrollbar::hidden()))
        .on_scroll(|viewport: Viewport| Message::ViewportChanged {
            width: viewport.bounds().width,
            offset_x: viewport.absolute_offset().x,
        });

    let strip = Container::new(scrollable)
        .width(Length::Fill)
        .height(Length::Fixed(settings.height))
        .style(styles::container::strip(ribbon.theme()));

    sensor(strip)
        .on_show(Message::Resized)
        .on_resize(Message::Resized)
        .into()
}

fn tile_view<'a>(ribbon: &'a RibbonView, tile: TileModel<'a>) -> Element<'a, Message> {
    let (content, on_press) = match tile.slot {
        RibbonSlot::Camera => (camera_content(ribbon, &tile), Message::CameraPressed),
        RibbonSlot::Photo(item) => (
            photo_content(ribbon, item, &tile),
            Message::ItemPressed(item.id()),
        ),
    };

    let tile_button = button(content)
        .padding(border::WIDTH_SELECTED)
        .width(Length::Fixed(tile.size.width))
        .height(Length::Fixed(tile.size.height))
        .style(styles::button::tile(
            ribbon.theme(),
            tile.selected,
            tile.selection_alpha,
        ));

    if tile.ghost {
        tile_button.into()
    } else {
        tile_button.on_press(on_press).into()
    }
}

fn photo_content<'a>(
    ribbon: &'a RibbonView,
    item: &'a MediaItem,
    tile: &TileModel<'a>,
) -> Element<'a, Message> {
    let base: Element<'a, Message> = match item.thumbnail() {
        Some(handle) => {
            let mut image = Image::new(handle.clone())
                .width(Length::Fill)
                .height(Length::Fill)
                .content_fit(ContentFit::Cover)
                .opacity(tile.opacity);
            if let Some(transform) = tile.transform {
                image = image.rotation(transform.rotation());
            }
            image.into()
        }
        None => {
            let glyph = if item.kind().is_video() {
                icons::play()
            } else {
                icons::image()
            };
            Container::new(glyph_layer(ribbon, glyph, tile))
                .width(Length::Fill)
                .height(Length::Fill)
                .style(styles::container::placeholder(ribbon.theme()))
                .into()
        }
    };

    let Some(label) = item.badge() else {
        return base;
    };

    let badge = Container::new(Text::new(label).size(typography::BADGE))
        .padding([1.0, spacing::XXS])
        .style(styles::container::badge(ribbon.theme()));

    Stack::new()
        .push(base)
        .push(
            Container::new(badge)
                .width(Length::Fill)
                .height(Length::Fill)
                .padding(spacing::XXS)
                .align_x(Horizontal::Right)
                .align_y(Vertical::Bottom),
        )
        .into()
}

fn camera_content<'a>(ribbon: &'a RibbonView, tile: &TileModel<'a>) -> Element<'a, Message> {
    let camera = ribbon.camera();
    let glyph = glyph_layer(ribbon, icons::camera(), tile);

    match camera.frame() {
        Some(frame) => {
            let fit = camera
                .parameters()
                .map_or(PreviewFit::default(), |parameters| parameters.fit);
            let preview = Image::new(frame.clone())
                .width(Length::Fill)
                .height(Length::Fill)
                .content_fit(fit.content_fit())
                .rotation(camera.orientation().preview_transform().rotation())
                .opacity(tile.opacity);
            Stack::new().push(preview).push(glyph).into()
        }
        None => Container::new(glyph)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(styles::container::placeholder(ribbon.theme()))
            .into(),
    }
}

/// A tinted glyph centred in the tile.
fn glyph_layer<'a>(
    ribbon: &'a RibbonView,
    glyph: Svg<'a>,
    tile: &TileModel<'a>,
) -> Element<'a, Message> {
    let side = tile.size.width.min(tile.size.height) * sizing::CAMERA_GLYPH_RATIO;
    let mut glyph = icons::sized(glyph, side)
        .opacity(tile.opacity)
        .style(styles::overlay::glyph(ribbon.theme().camera_glyph));
    if let Some(transform) = tile.glyph_transform {
        glyph = glyph.rotation(transform.rotation());
    }

    Container::new(glyph)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .into()
}
