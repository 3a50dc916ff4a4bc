//! Search panel (query + result count) and the "View Results" control.

use iced::widget::{Row, button, pick_list, row, text_input};
use iced::{Alignment, Length};

use super::super::state::{LIMIT_CHOICES, Message, SEARCH_INPUT, Shell};
use super::constants::{LIMIT_W, QUERY_W};

pub(crate) fn search_panel(state: &Shell) -> Row<'_, Message> {
    let query = text_input("Search Youtube", &state.search.query)
        .id(SEARCH_INPUT)
        .on_input(Message::QueryChanged)
        .on_submit(Message::SubmitSearch)
        .width(Length::Fixed(QUERY_W));

    let limit = pick_list(
        LIMIT_CHOICES,
        Some(state.search.limit),
        Message::LimitSelected,
    )
    .width(Length::Fixed(LIMIT_W));

    row![
        query,
        button("Youtube Search").on_press(Message::SubmitSearch),
        limit,
        button("Cancel").on_press(Message::CancelSearch),
    ]
    .spacing(8)
    .align_y(Alignment::Center)
}

/// Only while results wait and the picker is closed.
pub(crate) fn view_results_button(state: &Shell) -> Option<iced::widget::Button<'_, Message>> {
    if state.results.is_none() || state.picker.is_some() {
        return None;
    }
    Some(button("View Results").on_press(Message::ViewResults))
}
