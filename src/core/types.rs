//! Core data types shared between core logic and the UI.
//!
//! Rule of thumb:
//! - These structs should be “boring bags of data”
//! - No GUI code
//! - No process or socket code
//!
//! `SearchResult` is one hit from the search backend.
//! `MediaSource` is anything the engine can open.
//! `PlaybackSession` is the one piece of media currently loaded.

use std::fmt;
use std::path::{Path, PathBuf};

/// One ranked search hit.
///
/// Lives only for a single search -> pick -> resolve flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// Human readable title, shown in the picker and the window title.
    pub title: String,
    /// Page link handed back to the resolver (not directly playable).
    pub link: String,
}

/// Something the engine can open: a local file or a stream URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaSource {
    File(PathBuf),
    Stream(String),
}

impl MediaSource {
    /// The string handed to the engine's load command.
    pub fn as_engine_arg(&self) -> String {
        match self {
            MediaSource::File(path) => path.display().to_string(),
            MediaSource::Stream(url) => url.clone(),
        }
    }

    pub fn local_path(&self) -> Option<&Path> {
        match self {
            MediaSource::File(path) => Some(path),
            MediaSource::Stream(_) => None,
        }
    }
}

impl fmt::Display for MediaSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MediaSource::File(path) => write!(f, "{}", path.display()),
            MediaSource::Stream(url) => write!(f, "{url}"),
        }
    }
}

/// Opaque id of one successful engine load.
///
/// Minted by the playback adapter; a newer load always gets a bigger id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EngineHandle(pub u64);

/// The media that is currently loaded.
///
/// There is at most one of these at a time. It is created by a successful load
/// and thrown away on stop (or when another source replaces it).
#[derive(Debug, Clone)]
pub struct PlaybackSession {
    pub source: MediaSource,
    pub title: String,
    pub handle: EngineHandle,
    pub is_playing: bool,
    pub position_seconds: f64,
    pub duration_seconds: f64,
}

impl PlaybackSession {
    pub fn new(source: MediaSource, title: String, handle: EngineHandle) -> Self {
        Self {
            source,
            title,
            handle,
            is_playing: true,
            position_seconds: 0.0,
            duration_seconds: 0.0,
        }
    }
}

/// Transport state machine as seen by the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportState {
    NoMedia,
    Paused,
    Playing,
}
