//! In-memory `MediaBackend` for tests.
//!
//! The backend and its `Remote` share state, so a test can hand the backend to
//! the adapter and still poke at (or inspect) the "engine" afterwards.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};

use super::{EngineEvent, MediaBackend};
use crate::core::error::EngineError;
use crate::core::types::MediaSource;

#[derive(Debug, Default)]
struct Inner {
    loaded: Option<String>,
    playing: bool,
    time_ms: u64,
    length_ms: u64,
    fullscreen: bool,
    stops: usize,
    seeks: usize,
    loads: usize,
    fail_next_load: bool,
    /// Engine process gone: queries answer `NotRunning` until the next load.
    dead: bool,
    window: Option<u64>,
    events: VecDeque<EngineEvent>,
}

pub(crate) struct FakeBackend {
    inner: Arc<Mutex<Inner>>,
}

#[derive(Clone)]
pub(crate) struct Remote {
    inner: Arc<Mutex<Inner>>,
}

impl FakeBackend {
    pub(crate) fn new() -> (Self, Remote) {
        let inner = Arc::new(Mutex::new(Inner::default()));
        (
            Self {
                inner: Arc::clone(&inner),
            },
            Remote { inner },
        )
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap()
    }
}

impl MediaBackend for FakeBackend {
    fn load(&mut self, source: &MediaSource) -> Result<(), EngineError> {
        let mut inner = self.lock();
        if inner.fail_next_load {
            inner.fail_next_load = false;
            return Err(EngineError::Command {
                command: "loadfile".into(),
                reason: "unsupported codec".into(),
            });
        }
        inner.dead = false;
        inner.loads += 1;
        inner.loaded = Some(source.as_engine_arg());
        inner.playing = true;
        inner.time_ms = 0;
        Ok(())
    }

    fn play(&mut self) -> Result<(), EngineError> {
        self.lock().playing = true;
        Ok(())
    }

    fn pause(&mut self) -> Result<(), EngineError> {
        self.lock().playing = false;
        Ok(())
    }

    fn stop(&mut self) -> Result<(), EngineError> {
        let mut inner = self.lock();
        inner.stops += 1;
        inner.loaded = None;
        inner.playing = false;
        inner.time_ms = 0;
        inner.length_ms = 0;
        Ok(())
    }

    fn set_time_ms(&mut self, ms: u64) -> Result<(), EngineError> {
        let mut inner = self.lock();
        inner.seeks += 1;
        inner.time_ms = ms;
        Ok(())
    }

    fn time_ms(&mut self) -> Result<Option<u64>, EngineError> {
        let inner = self.lock();
        if inner.dead {
            return Err(EngineError::NotRunning);
        }
        Ok(inner.loaded.as_ref().map(|_| inner.time_ms))
    }

    fn length_ms(&mut self) -> Result<Option<u64>, EngineError> {
        let inner = self.lock();
        if inner.dead {
            return Err(EngineError::NotRunning);
        }
        Ok(inner.loaded.as_ref().map(|_| inner.length_ms))
    }

    fn is_playing(&mut self) -> Result<bool, EngineError> {
        let inner = self.lock();
        if inner.dead {
            return Err(EngineError::NotRunning);
        }
        Ok(inner.playing)
    }

    fn set_fullscreen(&mut self, on: bool) -> Result<(), EngineError> {
        self.lock().fullscreen = on;
        Ok(())
    }

    fn poll_events(&mut self) -> Vec<EngineEvent> {
        self.lock().events.drain(..).collect()
    }

    fn attach_window(&mut self, raw: u64) {
        self.lock().window = Some(raw);
    }
}

impl Remote {
    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap()
    }

    pub(crate) fn set_time(&self, ms: u64) {
        self.lock().time_ms = ms;
    }

    pub(crate) fn set_length(&self, ms: u64) {
        self.lock().length_ms = ms;
    }

    pub(crate) fn push_event(&self, event: EngineEvent) {
        self.lock().events.push_back(event);
    }

    pub(crate) fn fail_next_load(&self) {
        self.lock().fail_next_load = true;
    }

    /// Simulate the engine process exiting (user closed its window).
    pub(crate) fn kill(&self) {
        let mut inner = self.lock();
        inner.dead = true;
        inner.loaded = None;
        inner.playing = false;
    }

    pub(crate) fn window(&self) -> Option<u64> {
        self.lock().window
    }

    pub(crate) fn time(&self) -> u64 {
        self.lock().time_ms
    }

    pub(crate) fn loaded(&self) -> Option<String> {
        self.lock().loaded.clone()
    }

    pub(crate) fn playing(&self) -> bool {
        self.lock().playing
    }

    pub(crate) fn fullscreen(&self) -> bool {
        self.lock().fullscreen
    }

    pub(crate) fn stops(&self) -> usize {
        self.lock().stops
    }

    pub(crate) fn seeks(&self) -> usize {
        self.lock().seeks
    }

    pub(crate) fn loads(&self) -> usize {
        self.lock().loads
    }
}
