//! core/playback/mpv.rs
//! `MediaBackend` backed by an mpv child process.
//!
//! Owns:
//! - the mpv child (spawned on first load, idles between sources)
//! - the IPC connection to it
//!
//! mpv reports times as float seconds; this file converts them to the integer
//! milliseconds the adapter expects.

use std::io::{BufReader, Read, Write};
use std::path::{Path, PathBuf};
use std::process::{Child, Command, Stdio};
use std::thread;
use std::time::{Duration, Instant};

use serde_json::{Value, json};
use tracing::{debug, info, warn};

use super::ipc::IpcClient;
use super::{EngineEvent, MediaBackend, seconds_to_millis};
use crate::config::PlayerConfig;
use crate::core::error::EngineError;
use crate::core::types::MediaSource;

const CONNECT_RETRY: Duration = Duration::from_millis(50);

type Reader = BufReader<Box<dyn Read + Send>>;
type Writer = Box<dyn Write + Send>;

struct Running {
    child: Child,
    ipc: IpcClient<Reader, Writer>,
}

pub struct MpvBackend {
    config: PlayerConfig,
    window_title: String,
    socket: PathBuf,
    /// Native window to draw into (`--wid`); own window when unset.
    parent_window: Option<u64>,
    running: Option<Running>,
}

impl MpvBackend {
    /// Nothing is spawned until the first `load`.
    pub fn new(config: PlayerConfig, window_title: impl Into<String>) -> Self {
        Self {
            config,
            window_title: window_title.into(),
            socket: socket_path(),
            parent_window: None,
            running: None,
        }
    }

    fn ensure_running(&mut self) -> Result<&mut Running, EngineError> {
        let alive = match self.running.as_mut() {
            Some(running) => matches!(running.child.try_wait(), Ok(None)),
            None => false,
        };
        if !alive {
            if self.running.take().is_some() {
                warn!("mpv exited, restarting");
            }
            self.running = Some(self.spawn()?);
        }
        self.running.as_mut().ok_or(EngineError::NotRunning)
    }

    fn spawn(&self) -> Result<Running, EngineError> {
        let _ = std::fs::remove_file(&self.socket);

        let mut cmd = Command::new(&self.config.binary);
        cmd.arg("--idle=yes")
            .arg("--force-window=yes")
            .arg("--keep-open=no")
            .arg("--no-terminal")
            .arg(format!("--input-ipc-server={}", self.socket.display()))
            .arg(format!("--title={}", self.window_title));
        if let Some(wid) = self.parent_window {
            cmd.arg(format!("--wid={wid}"));
        }
        cmd.args(&self.config.extra_args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());

        let mut child = cmd.spawn().map_err(|source| EngineError::Spawn {
            binary: self.config.binary.clone(),
            source,
        })?;

        let timeout = Duration::from_millis(self.config.reply_timeout_ms);
        let deadline = Instant::now() + timeout;
        let (reader, writer) = loop {
            match connect(&self.socket, timeout) {
                Ok(pair) => break pair,
                Err(e) if Instant::now() < deadline => {
                    debug!(error = %e, "waiting for mpv socket");
                    thread::sleep(CONNECT_RETRY);
                }
                Err(e) => {
                    let _ = child.kill();
                    return Err(e.into());
                }
            }
        };

        info!(pid = child.id(), socket = %self.socket.display(), "mpv started");

        Ok(Running {
            child,
            ipc: IpcClient::new(BufReader::new(reader), writer),
        })
    }

    fn command(&mut self, args: &[Value]) -> Result<Option<Value>, EngineError> {
        let running = self.running.as_mut().ok_or(EngineError::NotRunning)?;
        if !matches!(running.child.try_wait(), Ok(None)) {
            info!("mpv exited");
            self.running = None;
            return Err(EngineError::NotRunning);
        }
        running.ipc.command(args)
    }

    fn get_seconds(&mut self, property: &str) -> Result<Option<u64>, EngineError> {
        if self.running.is_none() {
            return Ok(None);
        }
        let value = self.command(&[json!("get_property"), json!(property)])?;
        Ok(value.and_then(|v| v.as_f64()).map(seconds_to_millis))
    }

    fn set_property(&mut self, property: &str, value: Value) -> Result<(), EngineError> {
        self.command(&[json!("set_property"), json!(property), value])
            .map(|_| ())
    }
}

impl MediaBackend for MpvBackend {
    fn load(&mut self, source: &MediaSource) -> Result<(), EngineError> {
        let running = self.ensure_running()?;
        running
            .ipc
            .command(&[json!("loadfile"), json!(source.as_engine_arg()), json!("replace")])?;
        self.set_property("pause", json!(false))
    }

    fn play(&mut self) -> Result<(), EngineError> {
        self.set_property("pause", json!(false))
    }

    fn pause(&mut self) -> Result<(), EngineError> {
        self.set_property("pause", json!(true))
    }

    fn stop(&mut self) -> Result<(), EngineError> {
        if self.running.is_none() {
            return Ok(());
        }
        self.command(&[json!("stop")]).map(|_| ())
    }

    fn set_time_ms(&mut self, ms: u64) -> Result<(), EngineError> {
        let seconds = super::millis_to_seconds(ms);
        self.command(&[json!("seek"), json!(seconds), json!("absolute")])
            .map(|_| ())
    }

    fn time_ms(&mut self) -> Result<Option<u64>, EngineError> {
        self.get_seconds("time-pos")
    }

    fn length_ms(&mut self) -> Result<Option<u64>, EngineError> {
        self.get_seconds("duration")
    }

    fn is_playing(&mut self) -> Result<bool, EngineError> {
        if self.running.is_none() {
            return Ok(false);
        }
        let paused = self.command(&[json!("get_property"), json!("pause")])?;
        Ok(matches!(paused, Some(Value::Bool(false))))
    }

    fn set_fullscreen(&mut self, on: bool) -> Result<(), EngineError> {
        self.set_property("fullscreen", json!(on))
    }

    fn poll_events(&mut self) -> Vec<EngineEvent> {
        match self.running.as_mut() {
            Some(running) => running.ipc.take_events(),
            None => Vec::new(),
        }
    }

    fn attach_window(&mut self, raw: u64) {
        if self.running.is_some() {
            debug!(raw, "mpv already running, window applies after restart");
        }
        self.parent_window = Some(raw);
    }
}

impl Drop for MpvBackend {
    fn drop(&mut self) {
        if let Some(mut running) = self.running.take() {
            let _ = running.ipc.command(&[json!("quit")]);
            let _ = running.child.kill();
            let _ = running.child.wait();
        }
        let _ = std::fs::remove_file(&self.socket);
    }
}

#[cfg(unix)]
fn socket_path() -> PathBuf {
    std::env::temp_dir().join(format!("vidtube-mpv-{}.sock", std::process::id()))
}

#[cfg(windows)]
fn socket_path() -> PathBuf {
    PathBuf::from(format!(r"\\.\pipe\vidtube-mpv-{}", std::process::id()))
}

#[cfg(unix)]
fn connect(path: &Path, timeout: Duration) -> std::io::Result<(Box<dyn Read + Send>, Writer)> {
    use std::os::unix::net::UnixStream;

    let stream = UnixStream::connect(path)?;
    stream.set_read_timeout(Some(timeout))?;
    stream.set_write_timeout(Some(timeout))?;
    let reader = stream.try_clone()?;
    Ok((Box::new(reader), Box::new(stream)))
}

// Named pipes have no read timeout; a hung mpv blocks the caller.
#[cfg(windows)]
fn connect(path: &Path, _timeout: Duration) -> std::io::Result<(Box<dyn Read + Send>, Writer)> {
    let pipe = std::fs::OpenOptions::new().read(true).write(true).open(path)?;
    let reader = pipe.try_clone()?;
    Ok((Box::new(reader), Box::new(pipe)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_socket_path_is_per_process() {
        let path = socket_path().display().to_string();
        assert!(path.contains(&std::process::id().to_string()));
    }

    #[test]
    fn test_getters_without_process_are_empty() {
        let mut backend = MpvBackend::new(PlayerConfig::default(), "VidTube");
        assert_eq!(backend.time_ms().unwrap(), None);
        assert_eq!(backend.length_ms().unwrap(), None);
        assert!(!backend.is_playing().unwrap());
        assert!(backend.stop().is_ok());
        assert!(backend.poll_events().is_empty());
    }

    #[test]
    fn test_attach_window_before_start() {
        let mut backend = MpvBackend::new(PlayerConfig::default(), "VidTube");
        backend.attach_window(0x2a00007);
        assert_eq!(backend.parent_window, Some(0x2a00007));
        assert!(backend.running.is_none());
    }

    #[test]
    fn test_missing_binary_is_spawn_error() {
        let config = PlayerConfig {
            binary: "vidtube-no-such-player".into(),
            ..PlayerConfig::default()
        };
        let mut backend = MpvBackend::new(config, "VidTube");
        let err = backend
            .load(&MediaSource::Stream("https://x".into()))
            .unwrap_err();
        assert!(matches!(err, EngineError::Spawn { .. }));
    }
}
