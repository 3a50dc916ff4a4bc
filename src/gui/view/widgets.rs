//! Reusable small widgets/helpers used across view modules.

use iced::widget::{Column, Container, Row, button, column, container, row, slider, text};
use iced::{Alignment, Color, Length};

use super::super::state::{Message, Shell};
use super::super::util::time_label;
use super::constants::{CONTROLS_H, HINT_TEXT, MENU_H, STATUS_TEXT, TIME_W};
use crate::core::types::TransportState;

/// Top "File" menu. Collapsed it is one button; open it shows the entries.
pub(crate) fn menu_bar(state: &Shell) -> Container<'_, Message> {
    let mut bar = row![button("File").on_press(Message::ToggleMenu)]
        .spacing(8)
        .align_y(Alignment::Center);

    if state.menu_open {
        bar = bar
            .push(button("Open  Ctrl+O").on_press(Message::OpenFile))
            .push(button("Youtube Search  Ctrl+S").on_press(Message::OpenSearch));
    }

    container(bar)
        .height(Length::Fixed(MENU_H))
        .padding([2, 8])
}

/// Black area under the menu; mpv draws here when embedded.
pub(crate) fn video_area(state: &Shell) -> Container<'_, Message> {
    let label: Column<'_, Message> = match state.transport.session() {
        Some(s) => column![
            text(s.title.as_str()).size(HINT_TEXT),
            text(s.source.to_string()).size(STATUS_TEXT),
        ],
        None => column![text("Open a file or search Youtube").size(HINT_TEXT)],
    };

    container(label.spacing(4).align_x(Alignment::Center))
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .style(|_| container::Style {
            background: Some(Color::BLACK.into()),
            text_color: Some(Color::WHITE),
            ..container::Style::default()
        })
}

/// Position slider + time text.
pub(crate) fn position_row(state: &Shell) -> Row<'_, Message> {
    let s = state.transport.slider();

    // disabled: frozen at 0..=1, moves go nowhere
    let seek = if s.enabled {
        slider(0.0..=s.max, s.value.min(s.max), Message::SliderMoved)
    } else {
        slider(0.0..=1.0, 0.0, |_| Message::Noop)
    }
    .step(1.0)
    .width(Length::Fill);

    let time_text = time_label(state.transport.session());

    row![seek, text(time_text).size(STATUS_TEXT).width(Length::Fixed(TIME_W))]
        .spacing(10)
        .align_y(Alignment::Center)
        .padding([0, 12])
}

/// Play/Pause + Stop + Fullscreen + status label.
pub(crate) fn transport_buttons(state: &Shell) -> Row<'_, Message> {
    let play_label = match state.transport.state() {
        TransportState::Playing => "Pause",
        TransportState::Paused | TransportState::NoMedia => "Play",
    };

    let play_btn = button(play_label).on_press(Message::PlayPause);
    let stop_btn = button("Stop")
        .on_press_maybe(state.transport.session().map(|_| Message::Stop));

    let fullscreen_btn = button("Fullscreen").on_press(Message::ToggleFullscreen);

    row![
        play_btn,
        stop_btn,
        fullscreen_btn,
        text(state.phase.label()).size(STATUS_TEXT),
    ]
        .spacing(8)
        .align_y(Alignment::Center)
        .height(Length::Fixed(CONTROLS_H))
}
