//! VidTube
//!
//! # What this program is
//! A small desktop video player (built with the `iced` GUI library) that opens
//! local media files or searches Youtube, resolves a direct stream URL, and
//! plays it through an external `mpv` process.
//!
//! # How Iced works (super simple mental model)
//! - `Shell` = the *entire memory* of the app (all the state)
//! - `Message` = “something happened” (button clicked, key pressed, tick)
//! - `update(state, message)` = handles that thing and updates state
//! - `view(state)` = draws UI based on the current state
//!
//! **Message happens -> update changes state -> view redraws**
//!
//! # Architecture constraints (on purpose)
//! - `core::*` knows nothing about iced: engine, search backend, types, errors.
//! - `gui::*` owns every mode switch and never talks to mpv/yt-dlp directly.
//!
//! # Concurrency model
//! - Searching and resolving hit the network, so each runs on its own thread.
//! - Results come back through an inbox drained by `Message::PollWorkers`.
//! - A 1s `Message::Tick` keeps the position slider in sync with the engine.

mod config;
mod core;
mod gui;
mod logging;

use config::Config;
use gui::{Shell, subscription, update, view};

fn boot() -> Shell {
    Shell::new(Config::load())
}

fn title(state: &Shell) -> String {
    gui::util::window_title(&state.app_name, state.transport.session())
}

fn main() -> iced::Result {
    logging::init_logging();

    iced::application(boot, update, view)
        .title(title)
        .subscription(subscription)
        .run()
}
