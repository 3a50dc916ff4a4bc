//! gui/update/mod.rs
//! Update logic (router).
//! Mutates state in response to `Message` events.

use iced::Task;

use super::state::{Message, Shell};

mod chrome;
mod dialogs;
mod search;
mod transport;

pub(crate) fn update(state: &mut Shell, message: Message) -> Task<Message> {
    match message {
        Message::Noop => Task::none(),

        // Timers
        Message::Tick => transport::tick(state),
        Message::PollWorkers => search::poll_workers(state),

        // Window
        Message::WindowOpened(id) => chrome::window_opened(state, id),
        Message::EngineWindow(raw) => chrome::engine_window(state, raw),

        // Keyboard
        Message::Shortcut(shortcut, id) => chrome::shortcut(state, shortcut, id),

        // Menu
        Message::ToggleMenu => chrome::toggle_menu(state),
        Message::OpenFile => dialogs::open_file(state),
        Message::FileChosen(path) => transport::file_chosen(state, path),
        Message::OpenSearch => search::open_search(state),

        // Search panel
        Message::QueryChanged(q) => search::query_changed(state, q),
        Message::LimitSelected(n) => search::limit_selected(state, n),
        Message::SubmitSearch => search::submit_search(state),
        Message::CancelSearch => search::cancel_search(state),

        // Result picker
        Message::ViewResults => search::view_results(state),
        Message::PickerHighlight(i) => search::picker_highlight(state, i),
        Message::PickerConfirm => search::picker_confirm(state),
        Message::PickerDismiss => search::picker_dismiss(state),

        // Transport
        Message::PlayPause => transport::play_pause(state),
        Message::Stop => transport::stop(state),
        Message::SliderMoved(v) => transport::slider_moved(state, v),
        Message::ToggleFullscreen => chrome::toggle_fullscreen(state),
    }
}

#[cfg(test)]
pub(crate) mod testing {
    //! Shell wired to in-memory backends.

    use crate::config::Config;
    use crate::core::playback::fake::{FakeBackend, Remote};
    use crate::core::search::MockSearchBackend;
    use crate::gui::state::Shell;

    pub(crate) fn shell(search: MockSearchBackend) -> (Shell, Remote) {
        let (player, remote) = FakeBackend::new();
        let shell = Shell::with_backends(Config::default(), Box::new(player), Box::new(search));
        (shell, remote)
    }
}
