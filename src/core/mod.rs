//! core/mod.rs
//!
//! Everything that is not GUI:
//! - `playback`: adapter over the native media engine (mpv)
//! - `search`: video search + stream-URL resolution (yt-dlp)
//! - `types` / `error`: plain data shared with the GUI
//!
//! Nothing in here imports iced. The GUI calls into `core`, never the reverse.

pub mod error;
pub mod playback;
pub mod search;
pub mod types;
