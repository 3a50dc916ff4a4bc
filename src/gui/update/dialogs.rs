//! gui/update/dialogs.rs
//! Native dialogs (rfd): file picker + error boxes.
//!
//! Both run as iced tasks so the event loop keeps drawing while they are up.

use std::path::PathBuf;

use iced::{Task, window};
use rfd::{AsyncFileDialog, AsyncMessageDialog, MessageButtons, MessageLevel};
use tracing::error;

use super::super::state::{Message, Shell};
use super::search::cancel_search;
use crate::core::error::LoadError;

const LOAD_ERROR_TITLE: &str = "Error";
const LOAD_ERROR_TEXT: &str = "Cannot open file";
const YOUTUBE_ERROR_TITLE: &str = "Youtube Error";
const YOUTUBE_ERROR_TEXT: &str = "Cannot retrieve video URL";

/// Close the search panel, then ask for a local media file.
pub(crate) fn open_file(state: &mut Shell) -> Task<Message> {
    let _ = cancel_search(state);
    state.menu_open = false;

    let dialog = AsyncFileDialog::new()
        .set_title("Choose a media")
        .add_filter("mp4 files", &["mp4"])
        .add_filter("mov files", &["mov"])
        .add_filter("mp3 files", &["mp3"])
        .add_filter("all files", &["*"]);

    let Some(id) = state.window else {
        return Task::perform(pick_media_file(dialog), Message::FileChosen);
    };
    window::run(id, move |w| dialog.set_parent(&w))
        .then(|dialog| Task::perform(pick_media_file(dialog), Message::FileChosen))
}

async fn pick_media_file(dialog: AsyncFileDialog) -> Option<PathBuf> {
    dialog
        .pick_file()
        .await
        .map(|handle| handle.path().to_path_buf())
}

pub(crate) fn load_error(window: Option<window::Id>, err: &LoadError) -> Task<Message> {
    error!(error = %err, "cannot open media");
    show_error(window, LOAD_ERROR_TITLE, LOAD_ERROR_TEXT)
}

pub(crate) fn youtube_error(
    window: Option<window::Id>,
    err: &dyn std::error::Error,
) -> Task<Message> {
    error!(error = %err, "search/resolve failed");
    show_error(window, YOUTUBE_ERROR_TITLE, YOUTUBE_ERROR_TEXT)
}

/// Modal over the main window once its id is known.
fn show_error(
    window: Option<window::Id>,
    title: &'static str,
    description: &'static str,
) -> Task<Message> {
    let dialog = AsyncMessageDialog::new()
        .set_level(MessageLevel::Error)
        .set_title(title)
        .set_description(description)
        .set_buttons(MessageButtons::Ok);

    let Some(id) = window else {
        return show(dialog);
    };
    window::run(id, move |w| dialog.set_parent(&w)).then(show)
}

fn show(dialog: AsyncMessageDialog) -> Task<Message> {
    Task::perform(async move { dialog.show().await }, |_| Message::Noop)
}
