//! core/playback/mod.rs
//! Playback adapter over a native media engine.
//!
//! - `MediaBackend` is the seam to the engine. It speaks integer milliseconds.
//! - `PlaybackEngine` is what the GUI holds. It speaks seconds and owns the
//!   "one handle at a time" rule.
//!
//! No Iced imports.

use tracing::{debug, info, warn};

use crate::core::error::{EngineError, LoadError};
use crate::core::types::{EngineHandle, MediaSource};

#[cfg(test)]
pub(crate) mod fake;
mod ipc;
mod mpv;

pub use mpv::MpvBackend;

const MS_PER_SECOND: f64 = 1000.0;

/// Asynchronous notifications from the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    /// The source was opened and playback can start.
    Loaded,
    /// The engine gave up on the source after accepting the load command.
    LoadFailed(String),
    /// Reached the end of the media.
    Ended,
}

/// Everything the adapter needs from a native player.
///
/// Times are integer milliseconds. `None` means "no value right now"
/// (nothing loaded, or the engine is still opening the source).
pub trait MediaBackend: Send {
    fn load(&mut self, source: &MediaSource) -> Result<(), EngineError>;
    fn play(&mut self) -> Result<(), EngineError>;
    fn pause(&mut self) -> Result<(), EngineError>;
    fn stop(&mut self) -> Result<(), EngineError>;
    fn set_time_ms(&mut self, ms: u64) -> Result<(), EngineError>;
    fn time_ms(&mut self) -> Result<Option<u64>, EngineError>;
    fn length_ms(&mut self) -> Result<Option<u64>, EngineError>;
    fn is_playing(&mut self) -> Result<bool, EngineError>;
    fn set_fullscreen(&mut self, on: bool) -> Result<(), EngineError>;
    fn poll_events(&mut self) -> Vec<EngineEvent>;

    /// Draw into the native window `raw` from the next engine start on.
    fn attach_window(&mut self, _raw: u64) {}
}

/// Seconds -> engine milliseconds (nearest ms, never negative).
pub fn seconds_to_millis(seconds: f64) -> u64 {
    if !seconds.is_finite() || seconds <= 0.0 {
        return 0;
    }
    (seconds * MS_PER_SECOND).round() as u64
}

/// Engine milliseconds -> seconds.
pub fn millis_to_seconds(ms: u64) -> f64 {
    ms as f64 / MS_PER_SECOND
}

/// The playback adapter.
pub struct PlaybackEngine {
    backend: Box<dyn MediaBackend>,
    handle: Option<EngineHandle>,
    next_handle: u64,
}

impl PlaybackEngine {
    pub fn new(backend: Box<dyn MediaBackend>) -> Self {
        Self {
            backend,
            handle: None,
            next_handle: 1,
        }
    }

    #[cfg(test)]
    pub fn handle(&self) -> Option<EngineHandle> {
        self.handle
    }

    pub fn has_media(&self) -> bool {
        self.handle.is_some()
    }

    /// Open `source` and start playing it.
    ///
    /// Any existing handle is torn down first, even when `source` is the same.
    pub fn load(&mut self, source: &MediaSource) -> Result<EngineHandle, LoadError> {
        if self.handle.is_some() {
            self.stop();
        }

        if let Some(path) = source.local_path() {
            if !path.is_file() {
                return Err(LoadError::NotFound(path.to_path_buf()));
            }
        }

        // Whatever is still queued belongs to an earlier source.
        self.discard_events();
        self.backend.load(source)?;

        let handle = EngineHandle(self.next_handle);
        self.next_handle += 1;
        self.handle = Some(handle);

        info!(handle = handle.0, %source, "media loaded");
        Ok(handle)
    }

    pub fn play(&mut self) {
        if self.handle.is_none() {
            return;
        }
        if let Err(e) = self.backend.play() {
            warn!(error = %e, "play failed");
        }
    }

    pub fn pause(&mut self) {
        if self.handle.is_none() {
            return;
        }
        if let Err(e) = self.backend.pause() {
            warn!(error = %e, "pause failed");
        }
    }

    /// Release the current handle. Safe to call with nothing loaded.
    pub fn stop(&mut self) {
        if let Some(handle) = self.handle.take() {
            debug!(handle = handle.0, "releasing handle");
        }
        if let Err(e) = self.backend.stop() {
            warn!(error = %e, "stop failed");
        }
        self.discard_events();
    }

    /// Hand the engine a native window to draw into.
    pub fn attach_window(&mut self, raw: u64) {
        debug!(raw, "attaching engine to window");
        self.backend.attach_window(raw);
    }

    /// Jump to `seconds`. No-op with nothing loaded.
    pub fn seek(&mut self, seconds: f64) {
        if self.handle.is_none() {
            return;
        }
        if let Err(e) = self.backend.set_time_ms(seconds_to_millis(seconds)) {
            warn!(error = %e, seconds, "seek failed");
        }
    }

    pub fn position_seconds(&mut self) -> f64 {
        millis_to_seconds(self.position_millis())
    }

    pub fn duration_seconds(&mut self) -> f64 {
        millis_to_seconds(self.duration_millis())
    }

    /// Time left in integer milliseconds (0 when unknown).
    pub fn remaining_millis(&mut self) -> u64 {
        self.duration_millis()
            .saturating_sub(self.position_millis())
    }

    pub fn is_playing(&mut self) -> bool {
        if self.handle.is_none() {
            return false;
        }
        match self.backend.is_playing() {
            Ok(playing) => playing,
            Err(e) => {
                self.getter_failed("is_playing", e);
                false
            }
        }
    }

    pub fn set_fullscreen(&mut self, on: bool) {
        if let Err(e) = self.backend.set_fullscreen(on) {
            debug!(error = %e, on, "engine fullscreen not applied");
        }
    }

    pub fn poll_events(&mut self) -> Vec<EngineEvent> {
        self.backend.poll_events()
    }

    fn position_millis(&mut self) -> u64 {
        if self.handle.is_none() {
            return 0;
        }
        match self.backend.time_ms() {
            Ok(ms) => ms.unwrap_or(0),
            Err(e) => {
                self.getter_failed("position", e);
                0
            }
        }
    }

    fn duration_millis(&mut self) -> u64 {
        if self.handle.is_none() {
            return 0;
        }
        match self.backend.length_ms() {
            Ok(ms) => ms.unwrap_or(0),
            Err(e) => {
                self.getter_failed("duration", e);
                0
            }
        }
    }

    /// A dead engine takes the handle with it; anything else reads as zero.
    fn getter_failed(&mut self, query: &str, err: EngineError) {
        if matches!(err, EngineError::NotRunning) {
            if let Some(handle) = self.handle.take() {
                warn!(handle = handle.0, "media engine went away");
            }
            self.discard_events();
            return;
        }
        warn!(error = %err, query, "engine query failed");
    }

    fn discard_events(&mut self) {
        let stale = self.backend.poll_events();
        if !stale.is_empty() {
            debug!(?stale, "discarding engine events");
        }
    }
}
