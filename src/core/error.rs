//! Error taxonomy.
//!
//! Three errors reach the user (`LoadError`, `SearchError`, `ResolveError`).
//! The other two (`EngineError`, `BackendError`) are what the external
//! collaborators fail with; they get folded into the user-facing ones at the
//! boundary where they happen.

use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

/// Failure talking to the media engine process.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("failed to start media engine '{binary}': {source}")]
    Spawn {
        binary: String,
        #[source]
        source: std::io::Error,
    },
    #[error("media engine IPC failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("media engine sent malformed data: {0}")]
    Protocol(#[from] serde_json::Error),
    #[error("media engine rejected '{command}': {reason}")]
    Command { command: String, reason: String },
    #[error("media engine did not answer in time")]
    Timeout,
    #[error("media engine is not running")]
    NotRunning,
}

/// A media source could not be opened.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("file not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("media engine unavailable: {0}")]
    EngineUnavailable(String),
    #[error("media engine could not open the source: {0}")]
    Rejected(String),
}

impl From<EngineError> for LoadError {
    fn from(err: EngineError) -> Self {
        match err {
            EngineError::Spawn { .. } | EngineError::NotRunning => {
                LoadError::EngineUnavailable(err.to_string())
            }
            other => LoadError::Rejected(other.to_string()),
        }
    }
}

/// Failure of the search/resolve helper process.
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("failed to run '{binary}': {source}")]
    Spawn {
        binary: String,
        #[source]
        source: std::io::Error,
    },
    #[error("'{binary}' exited with {status}: {stderr}")]
    Exited {
        binary: String,
        status: ExitStatus,
        stderr: String,
    },
    #[error("unexpected output: {0}")]
    Malformed(String),
}

impl From<serde_json::Error> for BackendError {
    fn from(err: serde_json::Error) -> Self {
        BackendError::Malformed(err.to_string())
    }
}

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("search returned no results")]
    NoResults,
    #[error(transparent)]
    Backend(#[from] BackendError),
}

#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("no playable stream found")]
    NoStream,
    #[error(transparent)]
    Backend(#[from] BackendError),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}
