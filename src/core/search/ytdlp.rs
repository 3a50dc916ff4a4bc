//! core/search/ytdlp.rs
//! `SearchBackend` that shells out to yt-dlp.
//!
//! - search:  `yt-dlp --flat-playlist --dump-single-json "ytsearchN:query"`
//! - resolve: `yt-dlp -g -f <format> <link>`
//!
//! Network timeouts belong to yt-dlp (`--socket-timeout`).

use std::process::{Command, Output, Stdio};

use serde::Deserialize;
use tracing::debug;

use super::SearchBackend;
use crate::config::SearchConfig;
use crate::core::error::BackendError;
use crate::core::types::SearchResult;

const WATCH_URL: &str = "https://www.youtube.com/watch?v=";
const UNTITLED: &str = "Untitled";

#[derive(Debug, Deserialize)]
struct Playlist {
    #[serde(default)]
    entries: Vec<Entry>,
}

#[derive(Debug, Deserialize)]
struct Entry {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    webpage_url: Option<String>,
    #[serde(default)]
    id: Option<String>,
}

impl Entry {
    fn link(&self) -> Option<String> {
        let direct = self
            .webpage_url
            .as_deref()
            .or(self.url.as_deref())
            .filter(|u| u.starts_with("http"));
        if let Some(url) = direct {
            return Some(url.to_string());
        }
        self.id
            .as_deref()
            .filter(|id| !id.is_empty())
            .map(|id| format!("{WATCH_URL}{id}"))
    }
}

pub struct YtDlp {
    config: SearchConfig,
}

impl YtDlp {
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    fn run(&self, args: &[String]) -> Result<String, BackendError> {
        debug!(binary = %self.config.binary, ?args, "running search backend");

        let Output {
            status,
            stdout,
            stderr,
        } = Command::new(&self.config.binary)
            .args(args)
            .stdin(Stdio::null())
            .output()
            .map_err(|source| BackendError::Spawn {
                binary: self.config.binary.clone(),
                source,
            })?;

        if !status.success() {
            return Err(BackendError::Exited {
                binary: self.config.binary.clone(),
                status,
                stderr: String::from_utf8_lossy(&stderr).trim().to_string(),
            });
        }

        String::from_utf8(stdout).map_err(|e| BackendError::Malformed(e.to_string()))
    }

    fn common_args(&self) -> Vec<String> {
        vec![
            "--no-warnings".into(),
            "--socket-timeout".into(),
            self.config.socket_timeout_secs.to_string(),
        ]
    }
}

impl SearchBackend for YtDlp {
    fn search(&self, query: &str, limit: usize) -> Result<Vec<SearchResult>, BackendError> {
        let mut args = self.common_args();
        args.extend([
            "--flat-playlist".into(),
            "--dump-single-json".into(),
            format!("ytsearch{limit}:{query}"),
        ]);
        let out = self.run(&args)?;
        parse_search_output(&out, limit)
    }

    fn resolve(&self, link: &str) -> Result<String, BackendError> {
        let mut args = self.common_args();
        args.extend([
            "-g".into(),
            "--no-playlist".into(),
            "-f".into(),
            self.config.format.clone(),
            link.to_string(),
        ]);
        let out = self.run(&args)?;
        parse_resolve_output(&out)
    }
}

/// Parse `--dump-single-json` output of a `ytsearchN:` query.
pub(crate) fn parse_search_output(json: &str, limit: usize) -> Result<Vec<SearchResult>, BackendError> {
    let playlist: Playlist = serde_json::from_str(json)?;

    Ok(playlist
        .entries
        .into_iter()
        .filter_map(|entry| {
            let link = entry.link()?;
            let title = entry
                .title
                .map(|t| t.trim().to_string())
                .filter(|t| !t.is_empty())
                .unwrap_or_else(|| UNTITLED.to_string());
            Some(SearchResult { title, link })
        })
        .take(limit)
        .collect())
}

/// `-g` prints one URL per selected format; the first one is enough.
pub(crate) fn parse_resolve_output(stdout: &str) -> Result<String, BackendError> {
    let url = stdout
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .ok_or_else(|| BackendError::Malformed("no stream url printed".into()))?;

    if !url.starts_with("http") {
        return Err(BackendError::Malformed(format!("not a url: {url}")));
    }
    Ok(url.to_string())
}
