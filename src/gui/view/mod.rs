//! GUI renderer (reads state, produces widgets; no mutation).
//!
//! What is shown comes from `Shell::chrome()`; fullscreen leaves only the
//! video area.

mod constants;
mod picker;
mod search;
mod widgets;

use iced::widget::{Column, row};
use iced::{Alignment, Element};

use super::state::{Message, Shell};

pub(crate) fn view(state: &Shell) -> Element<'_, Message> {
    let chrome = state.chrome();

    let mut page = Column::new();

    if chrome.menu {
        page = page.push(widgets::menu_bar(state));
    }

    page = page.push(widgets::video_area(state));

    if chrome.slider {
        page = page.push(widgets::position_row(state));
    }

    if chrome.transport {
        let mut controls = row![widgets::transport_buttons(state)]
            .spacing(16)
            .align_y(Alignment::Center);

        if let Some(btn) = search::view_results_button(state) {
            controls = controls.push(btn);
        }
        if chrome.search_panel {
            controls = controls.push(search::search_panel(state));
        }

        page = page.push(controls.padding([4, 12]));
    }

    match &state.picker {
        Some(p) => picker::overlay(page, p),
        None => page.into(),
    }
}
