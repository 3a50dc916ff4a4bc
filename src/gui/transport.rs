//! gui/transport.rs
//! Transport controller: play/pause/stop, the position slider, end-of-media.
//!
//! State machine over NoMedia / Paused / Playing.
//! - GUI handlers call in here; nothing in here returns iced tasks.
//! - Time is passed in (`now`) so the slider debounce is testable.

use std::time::{Duration, Instant};

use tracing::{debug, info, warn};

use crate::core::error::LoadError;
use crate::core::playback::{EngineEvent, PlaybackEngine};
use crate::core::types::{MediaSource, PlaybackSession, TransportState};

/// How long a user slider edit wins over the tick.
pub(crate) const DEBOUNCE: Duration = Duration::from_secs(2);

/// Less than this left = treat as finished.
pub(crate) const END_OF_MEDIA_MS: u64 = 350;

/// Something the controller needs the shell to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TransportIntent {
    /// Play was pressed with nothing loaded: run the open-file flow.
    OpenFile,
}

/// What a tick did.
#[derive(Debug)]
pub(crate) enum TickOutcome {
    Idle,
    Synced,
    /// Held off because the user moved the slider recently.
    Debounced,
    EndOfMedia,
    /// The engine process is gone (its window was closed, say).
    EngineLost,
    Failed(LoadError),
}

/// The position slider, in seconds.
#[derive(Debug, Clone)]
pub(crate) struct PositionSlider {
    pub value: f64,
    pub max: f64,
    pub enabled: bool,
    /// Integer second last pushed to (or read from) the engine.
    last_applied: i64,
    last_user_edit: Option<Instant>,
}

impl Default for PositionSlider {
    fn default() -> Self {
        Self {
            value: 0.0,
            max: 1.0,
            enabled: false,
            last_applied: 0,
            last_user_edit: None,
        }
    }
}

impl PositionSlider {
    fn user_recently_edited(&self, now: Instant) -> bool {
        self.last_user_edit
            .is_some_and(|t| now.saturating_duration_since(t) <= DEBOUNCE)
    }
}

pub(crate) struct Transport {
    engine: PlaybackEngine,
    session: Option<PlaybackSession>,
    slider: PositionSlider,
}

impl Transport {
    pub(crate) fn new(engine: PlaybackEngine) -> Self {
        Self {
            engine,
            session: None,
            slider: PositionSlider::default(),
        }
    }

    pub(crate) fn state(&self) -> TransportState {
        match &self.session {
            None => TransportState::NoMedia,
            Some(s) if s.is_playing => TransportState::Playing,
            Some(_) => TransportState::Paused,
        }
    }

    pub(crate) fn session(&self) -> Option<&PlaybackSession> {
        self.session.as_ref()
    }

    pub(crate) fn slider(&self) -> &PositionSlider {
        &self.slider
    }

    pub(crate) fn play_pause(&mut self) -> Option<TransportIntent> {
        let Some(session) = self.session.as_mut() else {
            return Some(TransportIntent::OpenFile);
        };

        if session.is_playing {
            self.engine.pause();
            session.is_playing = false;
        } else {
            self.engine.play();
            session.is_playing = true;
        }
        debug!(playing = session.is_playing, "play/pause");
        None
    }

    /// Back to NoMedia from anywhere.
    pub(crate) fn stop(&mut self) {
        if let Some(session) = self.session.take() {
            info!(title = %session.title, "stopped");
        }
        self.engine.stop();
        self.slider = PositionSlider::default();
    }

    /// Replace whatever is loaded with `source` and start playing.
    ///
    /// On error the controller is left in NoMedia.
    pub(crate) fn load_and_play(
        &mut self,
        source: MediaSource,
        title: String,
    ) -> Result<(), LoadError> {
        if self.session.is_some() {
            self.stop();
        }

        let handle = self.engine.load(&source).inspect_err(|e| {
            warn!(error = %e, %source, "load failed");
        })?;

        self.slider = PositionSlider {
            enabled: true,
            ..PositionSlider::default()
        };
        self.session = Some(PlaybackSession::new(source, title, handle));
        Ok(())
    }

    /// The user moved the slider to `value` seconds.
    pub(crate) fn slider_moved(&mut self, value: f64, now: Instant) {
        if !self.slider.enabled || self.session.is_none() {
            return;
        }

        self.slider.value = value;
        let whole = value as i64;
        if whole != self.slider.last_applied {
            self.engine.seek(value);
            self.slider.last_applied = whole;
            self.slider.last_user_edit = Some(now);
            if let Some(session) = self.session.as_mut() {
                session.position_seconds = value;
            }
        }
    }

    /// Periodic sync of slider <- engine.
    pub(crate) fn tick(&mut self, now: Instant) -> TickOutcome {
        if self.session.is_none() {
            return TickOutcome::Idle;
        }

        let duration = self.engine.duration_seconds();
        if !self.engine.has_media() {
            self.stop();
            return TickOutcome::EngineLost;
        }

        for event in self.engine.poll_events() {
            match event {
                EngineEvent::Loaded => debug!("engine reports media loaded"),
                EngineEvent::LoadFailed(reason) => {
                    self.stop();
                    return TickOutcome::Failed(LoadError::Rejected(reason));
                }
                EngineEvent::Ended => {
                    self.stop();
                    return TickOutcome::EndOfMedia;
                }
            }
        }

        // The engine window takes keys too; follow a pause made over there.
        let playing = self.engine.is_playing();
        if let Some(session) = self.session.as_mut() {
            session.is_playing = playing;
        }

        if duration <= 0.0 {
            return TickOutcome::Idle;
        }

        self.slider.max = duration;
        if let Some(session) = self.session.as_mut() {
            session.duration_seconds = duration;
        }

        if self.slider.user_recently_edited(now) {
            return TickOutcome::Debounced;
        }

        let position = self.engine.position_seconds();
        if position <= 0.0 {
            return TickOutcome::Synced;
        }

        self.slider.value = position;
        self.slider.last_applied = position as i64;
        if let Some(session) = self.session.as_mut() {
            session.position_seconds = position;
        }

        if self.engine.remaining_millis() < END_OF_MEDIA_MS {
            self.stop();
            return TickOutcome::EndOfMedia;
        }

        TickOutcome::Synced
    }

    pub(crate) fn set_fullscreen(&mut self, on: bool) {
        self.engine.set_fullscreen(on);
    }

    pub(crate) fn attach_window(&mut self, raw: u64) {
        self.engine.attach_window(raw);
    }
}
