//! core/playback/ipc.rs
//! mpv JSON IPC framing.
//!
//! One JSON object per line, both directions.
//! - request: `{"command": [...], "request_id": N}`
//! - reply:   `{"request_id": N, "error": "success", "data": ...}`
//! - event:   `{"event": "end-file", "reason": "eof", ...}`
//!
//! Events can arrive between a request and its reply. They are queued and
//! handed out by `take_events`.

use std::collections::VecDeque;
use std::io::{BufRead, ErrorKind, Write};

use serde::Deserialize;
use serde_json::{Value, json};
use tracing::trace;

use super::EngineEvent;
use crate::core::error::EngineError;

const SUCCESS: &str = "success";
pub(crate) const PROPERTY_UNAVAILABLE: &str = "property unavailable";

/// Any line mpv can send us.
#[derive(Debug, Deserialize)]
pub(crate) struct IpcLine {
    #[serde(default)]
    pub request_id: Option<u64>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub data: Option<Value>,
    #[serde(default)]
    pub event: Option<String>,
    #[serde(default)]
    pub reason: Option<String>,
    #[serde(default)]
    pub file_error: Option<String>,
}

impl IpcLine {
    /// Map an mpv event line onto the events the adapter cares about.
    pub(crate) fn to_engine_event(&self) -> Option<EngineEvent> {
        match self.event.as_deref()? {
            "file-loaded" => Some(EngineEvent::Loaded),
            "end-file" => match self.reason.as_deref() {
                Some("eof") => Some(EngineEvent::Ended),
                Some("error") => Some(EngineEvent::LoadFailed(
                    self.file_error
                        .clone()
                        .unwrap_or_else(|| "unknown error".to_string()),
                )),
                _ => None,
            },
            _ => None,
        }
    }
}

pub(crate) fn encode_command(request_id: u64, args: &[Value]) -> String {
    let mut line = json!({ "command": args, "request_id": request_id }).to_string();
    line.push('\n');
    line
}

/// Request/reply client over any line-oriented duplex stream.
pub(crate) struct IpcClient<R, W> {
    reader: R,
    writer: W,
    next_id: u64,
    events: VecDeque<EngineEvent>,
}

impl<R: BufRead, W: Write> IpcClient<R, W> {
    pub(crate) fn new(reader: R, writer: W) -> Self {
        Self {
            reader,
            writer,
            next_id: 1,
            events: VecDeque::new(),
        }
    }

    /// Send one command and wait for its reply.
    ///
    /// `Ok(None)` means mpv answered "property unavailable".
    pub(crate) fn command(&mut self, args: &[Value]) -> Result<Option<Value>, EngineError> {
        let id = self.next_id;
        self.next_id += 1;

        let line = encode_command(id, args);
        trace!(request = line.trim_end(), "mpv ipc ->");
        self.writer.write_all(line.as_bytes())?;
        self.writer.flush()?;

        loop {
            let reply = self.read_line()?;
            if reply.event.is_some() {
                if let Some(event) = reply.to_engine_event() {
                    self.events.push_back(event);
                }
                continue;
            }
            if reply.request_id != Some(id) {
                // Late reply to a request we already gave up on.
                continue;
            }

            return match reply.error.as_deref() {
                Some(SUCCESS) | None => Ok(Some(reply.data.unwrap_or(Value::Null))),
                Some(PROPERTY_UNAVAILABLE) => Ok(None),
                Some(reason) => Err(EngineError::Command {
                    command: command_name(args),
                    reason: reason.to_string(),
                }),
            };
        }
    }

    pub(crate) fn take_events(&mut self) -> Vec<EngineEvent> {
        self.events.drain(..).collect()
    }

    fn read_line(&mut self) -> Result<IpcLine, EngineError> {
        let mut buf = String::new();
        loop {
            buf.clear();
            let n = match self.reader.read_line(&mut buf) {
                Ok(n) => n,
                Err(e) if matches!(e.kind(), ErrorKind::WouldBlock | ErrorKind::TimedOut) => {
                    return Err(EngineError::Timeout);
                }
                Err(e) => return Err(e.into()),
            };
            if n == 0 {
                return Err(EngineError::NotRunning);
            }
            let trimmed = buf.trim();
            if trimmed.is_empty() {
                continue;
            }
            trace!(reply = trimmed, "mpv ipc <-");
            return Ok(serde_json::from_str(trimmed)?);
        }
    }
}

fn command_name(args: &[Value]) -> String {
    args.iter()
        .take(2)
        .filter_map(Value::as_str)
        .collect::<Vec<_>>()
        .join(" ")
}
