//! gui/update/transport.rs
//! GUI <-> transport controller bridge.
//!
//! - GUI never touches the engine directly; everything goes through
//!   `state.transport`.
//! - Failures become dialogs here.

use std::path::PathBuf;
use std::time::Instant;

use iced::Task;
use tracing::{debug, info};

use super::super::state::{Message, Shell};
use super::super::transport::{TickOutcome, TransportIntent};
use super::super::util::basename;
use super::dialogs;
use crate::core::types::MediaSource;

pub(crate) fn play_pause(state: &mut Shell) -> Task<Message> {
    match state.transport.play_pause() {
        Some(TransportIntent::OpenFile) => dialogs::open_file(state),
        None => Task::none(),
    }
}

pub(crate) fn stop(state: &mut Shell) -> Task<Message> {
    state.transport.stop();
    Task::none()
}

pub(crate) fn slider_moved(state: &mut Shell, value: f64) -> Task<Message> {
    state.transport.slider_moved(value, Instant::now());
    Task::none()
}

/// Stop whatever is loaded, then open and play `source`.
pub(crate) fn load_and_play(state: &mut Shell, source: MediaSource, title: String) -> Task<Message> {
    debug!(%source, title, "load and play");
    match state.transport.load_and_play(source, title) {
        Ok(()) => Task::none(),
        Err(e) => dialogs::load_error(state.window, &e),
    }
}

pub(crate) fn file_chosen(state: &mut Shell, path: Option<PathBuf>) -> Task<Message> {
    let Some(path) = path else {
        return Task::none();
    };
    let title = basename(&path);
    load_and_play(state, MediaSource::File(path), title)
}

pub(crate) fn tick(state: &mut Shell) -> Task<Message> {
    match state.transport.tick(Instant::now()) {
        TickOutcome::Failed(e) => dialogs::load_error(state.window, &e),
        TickOutcome::EndOfMedia => {
            debug!("end of media");
            Task::none()
        }
        TickOutcome::EngineLost => {
            info!("media engine closed, session stopped");
            Task::none()
        }
        TickOutcome::Idle | TickOutcome::Synced | TickOutcome::Debounced => Task::none(),
    }
}
