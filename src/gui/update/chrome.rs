//! gui/update/chrome.rs
//! Mode switches: menu, fullscreen, Escape, keyboard shortcuts.

use iced::{Task, window};
use tracing::debug;

use super::super::state::{Message, Shell, Shortcut, UiMode};
use super::{dialogs, search, transport};

pub(crate) fn window_opened(state: &mut Shell, id: window::Id) -> Task<Message> {
    state.window = Some(id);
    if !state.embed_engine {
        return Task::none();
    }
    window::raw_id::<Message>(id).map(Message::EngineWindow)
}

pub(crate) fn engine_window(state: &mut Shell, raw: u64) -> Task<Message> {
    state.transport.attach_window(raw);
    Task::none()
}

pub(crate) fn toggle_menu(state: &mut Shell) -> Task<Message> {
    state.menu_open = !state.menu_open;
    Task::none()
}

pub(crate) fn toggle_fullscreen(state: &mut Shell) -> Task<Message> {
    let entering = state.mode != UiMode::Fullscreen;

    if entering {
        let _ = search::cancel_search(state);
        state.menu_open = false;
        state.mode = UiMode::Fullscreen;
    } else {
        state.mode = UiMode::Normal;
    }
    state.transport.set_fullscreen(entering);

    let Some(id) = state.window else {
        return Task::none();
    };
    let mode = if entering {
        window::Mode::Fullscreen
    } else {
        window::Mode::Windowed
    };
    window::set_mode(id, mode)
}

/// Picker first, then fullscreen, then the search panel.
fn escape(state: &mut Shell) -> Task<Message> {
    if state.picker.is_some() {
        return search::picker_dismiss(state);
    }
    if state.mode == UiMode::Fullscreen {
        return toggle_fullscreen(state);
    }
    state.menu_open = false;
    search::cancel_search(state)
}

pub(crate) fn shortcut(state: &mut Shell, shortcut: Shortcut, id: window::Id) -> Task<Message> {
    state.window = Some(id);

    // The picker is modal.
    if state.picker.is_some() && shortcut != Shortcut::Escape {
        return Task::none();
    }
    if !state.chrome().binds(shortcut) {
        debug!(?shortcut, mode = ?state.mode, "shortcut not bound");
        return Task::none();
    }

    match shortcut {
        Shortcut::Open => dialogs::open_file(state),
        Shortcut::Search => search::open_search(state),
        Shortcut::PlayPause => transport::play_pause(state),
        Shortcut::Fullscreen => toggle_fullscreen(state),
        Shortcut::Escape => escape(state),
    }
}
