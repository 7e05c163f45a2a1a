// SPDX-License-Identifier: MPL-2.0
//! View rendering for the demo application.

use super::Message;
use crate::ribbon::RibbonView;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::alignment::Vertical;
use iced::widget::{button, Column, Container, Row, Text};
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub ribbon: &'a RibbonView,
    pub status: &'a str,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let has_selection = ctx.ribbon.selected_item().is_some();
    let camera_visible = ctx.ribbon.data_source().is_camera_visible();

    let camera_label = if camera_visible {
        "Hide camera"
    } else {
        "Show camera"
    };

    let toolbar = Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(toolbar_button(camera_label, Some(Message::ToggleCamera)))
        .push(toolbar_button(
            "Reload camera",
            camera_visible.then_some(Message::ReloadCamera),
        ))
        .push(toolbar_button("Rotate controls", Some(Message::RotateControls)))
        .push(toolbar_button(
            "Remove selected",
            has_selection.then_some(Message::RemoveSelected),
        ))
        .push(toolbar_button(
            "Refresh selected",
            has_selection.then_some(Message::RefreshSelected),
        ));

    let status = Text::new(ctx.status).size(typography::CAPTION);

    let content = Column::new()
        .spacing(spacing::SM)
        .push(Container::new(toolbar).padding(spacing::XS))
        .push(ctx.ribbon.view().map(Message::Ribbon))
        .push(Container::new(status).padding([0.0, spacing::XS]));

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn toolbar_button(label: &str, on_press: Option<Message>) -> Element<'_, Message> {
    button(Text::new(label).size(typography::BODY))
        .padding([spacing::XXS, spacing::SM])
        .style(styles::button::toolbar)
        .on_press_maybe(on_press)
        .into()
}
