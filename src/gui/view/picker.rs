//! Result picker modal.
//!
//! Clicking a title highlights it; "Select" resolves the highlighted one.
//! Clicking the backdrop dismisses the picker.

use iced::widget::{
    Column, button, center, column, container, mouse_area, opaque, row, scrollable, stack, text,
};
use iced::{Color, Element, Length};

use super::super::picker::ResultPicker;
use super::super::state::Message;
use super::constants::{BACKDROP_ALPHA, PICKER_LIST_H, PICKER_ROW_TEXT, PICKER_W};

pub(crate) fn overlay<'a>(
    base: impl Into<Element<'a, Message>>,
    picker: &'a ResultPicker,
) -> Element<'a, Message> {
    let backdrop = center(opaque(dialog(picker))).style(|_| container::Style {
        background: Some(
            Color {
                a: BACKDROP_ALPHA,
                ..Color::BLACK
            }
            .into(),
        ),
        ..container::Style::default()
    });

    let base: Element<'a, Message> = base.into();

    stack![
        base,
        opaque(mouse_area(backdrop).on_press(Message::PickerDismiss)),
    ]
    .into()
}

fn dialog(picker: &ResultPicker) -> Element<'_, Message> {
    let mut list = Column::new().spacing(2);
    for (i, title) in picker.titles().enumerate() {
        let label = if picker.highlighted() == Some(i) {
            format!("▶ {title}")
        } else {
            title.to_string()
        };
        list = list.push(
            button(text(label).size(PICKER_ROW_TEXT))
                .on_press(Message::PickerHighlight(i))
                .width(Length::Fill)
                .style(button::text),
        );
    }

    let actions = row![
        button("Select")
            .on_press_maybe(picker.highlighted().map(|_| Message::PickerConfirm)),
        button("Cancel").on_press(Message::PickerDismiss),
    ]
    .spacing(8);

    container(
        column![
            text(format!("{} results", picker.len())).size(18),
            scrollable(list).height(Length::Fixed(PICKER_LIST_H)),
            actions,
        ]
        .spacing(12),
    )
    .width(Length::Fixed(PICKER_W))
    .padding(16)
    .style(container::rounded_box)
    .into()
}
