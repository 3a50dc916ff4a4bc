//! Small pure helper functions used by the GUI.
//! - no UI widgets or state mutation

use std::path::Path;

use crate::core::types::PlaybackSession;

/// "AppName" when idle, "AppName - Title" while something is loaded.
pub(crate) fn window_title(app_name: &str, session: Option<&PlaybackSession>) -> String {
    match session {
        Some(s) => format!("{app_name} - {}", s.title),
        None => app_name.to_string(),
    }
}

/// Last path component, used as the title of local files.
/// Ex: '/videos/clip.mp4' -> 'clip.mp4'
pub(crate) fn basename(path: &Path) -> String {
    path.file_name()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// 75.4 -> "1:15", 3725.0 -> "1:02:05"
pub(crate) fn fmt_seconds(seconds: f64) -> String {
    let total = if seconds.is_finite() && seconds > 0.0 {
        seconds as u64
    } else {
        0
    };
    let h = total / 3600;
    let m = (total % 3600) / 60;
    let s = total % 60;
    if h > 0 {
        format!("{h}:{m:02}:{s:02}")
    } else {
        format!("{m}:{s:02}")
    }
}

/// "position / duration" of the loaded session; dashes for what is unknown.
pub(crate) fn time_label(session: Option<&PlaybackSession>) -> String {
    let Some(s) = session else {
        return "-:-- / -:--".to_string();
    };
    let total = if s.duration_seconds > 0.0 {
        fmt_seconds(s.duration_seconds)
    } else {
        "-:--".to_string()
    };
    format!("{} / {total}", fmt_seconds(s.position_seconds))
}
