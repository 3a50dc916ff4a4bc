//! gui/subscription.rs
//! Timers + keyboard.
//!
//! - `Tick` every second: slider <- engine position sync
//! - `PollWorkers` every 100ms while a search/resolve worker is out
//! - key presses mapped to `Shortcut`s
//! - the window id once the window is open

use iced::event::{self, Event, Status};
use iced::{Subscription, keyboard, time, window};
use std::time::Duration;

use super::keys::shortcut_for;
use super::state::{Message, Shell, Shortcut};

const TICK: Duration = Duration::from_secs(1);
const WORKER_POLL: Duration = Duration::from_millis(100);

pub(crate) fn subscription(state: &Shell) -> Subscription<Message> {
    let tick = time::every(TICK).map(|_| Message::Tick);
    let keys = event::listen_with(on_event);
    let opened = window::open_events().map(Message::WindowOpened);

    if state.workers.in_flight() == 0 {
        return Subscription::batch([tick, keys, opened]);
    }

    let poll = time::every(WORKER_POLL).map(|_| Message::PollWorkers);
    Subscription::batch([tick, keys, opened, poll])
}

fn on_event(event: Event, status: Status, id: window::Id) -> Option<Message> {
    let Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }) = event else {
        return None;
    };

    let shortcut = shortcut_for(&key, modifiers)?;

    // A focused text input already used this key (typing a space, say).
    // Escape still has to get through to close the panel.
    if status == Status::Captured && shortcut != Shortcut::Escape {
        return None;
    }

    Some(Message::Shortcut(shortcut, id))
}
