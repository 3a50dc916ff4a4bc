//! GUI state + messages.
//! Pure data definitions used by update/ + view/.

use std::path::PathBuf;

use iced::window;

use crate::config::Config;
use crate::core::playback::{MediaBackend, MpvBackend, PlaybackEngine};
use crate::core::search::{SearchBackend, SearchClient, YtDlp};
use crate::core::types::SearchResult;

use super::picker::ResultPicker;
use super::transport::Transport;
use super::workers::Workers;

/// Widget id of the search query field.
pub(crate) const SEARCH_INPUT: &str = "search-query";

/// Choices of the result-count dropdown.
pub(crate) const LIMIT_CHOICES: [usize; 11] = [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10];

/// Which top-level layout is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum UiMode {
    Normal,
    SearchPanelOpen,
    Fullscreen,
}

/// Keyboard shortcuts the shell understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Shortcut {
    Open,
    Search,
    PlayPause,
    Fullscreen,
    Escape,
}

/// What is visible (and which shortcuts are bound) for a mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Chrome {
    pub menu: bool,
    pub transport: bool,
    pub slider: bool,
    pub search_panel: bool,
    pub shortcuts: &'static [Shortcut],
}

impl Chrome {
    pub(crate) const fn for_mode(mode: UiMode) -> Self {
        match mode {
            UiMode::Normal => Chrome {
                menu: true,
                transport: true,
                slider: true,
                search_panel: false,
                shortcuts: &[
                    Shortcut::Open,
                    Shortcut::Search,
                    Shortcut::PlayPause,
                    Shortcut::Fullscreen,
                    Shortcut::Escape,
                ],
            },
            // Space and F belong to the search field here.
            UiMode::SearchPanelOpen => Chrome {
                menu: true,
                transport: true,
                slider: true,
                search_panel: true,
                shortcuts: &[Shortcut::Open, Shortcut::Search, Shortcut::Escape],
            },
            UiMode::Fullscreen => Chrome {
                menu: false,
                transport: false,
                slider: false,
                search_panel: false,
                shortcuts: &[Shortcut::PlayPause, Shortcut::Fullscreen, Shortcut::Escape],
            },
        }
    }

    pub(crate) fn binds(&self, shortcut: Shortcut) -> bool {
        self.shortcuts.contains(&shortcut)
    }
}

/// Where the background search flow is. Shown as the status label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum SearchPhase {
    #[default]
    Idle,
    Searching,
    Fetching,
}

impl SearchPhase {
    pub(crate) fn label(self) -> &'static str {
        match self {
            SearchPhase::Idle => "",
            SearchPhase::Searching => "Searching…",
            SearchPhase::Fetching => "Fetching…",
        }
    }
}

/// Draft input of the search panel.
#[derive(Debug, Clone)]
pub(crate) struct SearchPanel {
    pub query: String,
    pub limit: usize,
}

/// App state
pub(crate) struct Shell {
    pub app_name: String,
    pub mode: UiMode,
    pub menu_open: bool,

    // Playback
    pub transport: Transport,

    // Search
    pub search: SearchPanel,
    pub phase: SearchPhase,
    /// Results waiting for the user to pick one.
    pub results: Option<Vec<SearchResult>>,
    pub picker: Option<ResultPicker>,
    pub workers: Workers,

    /// Set when the window opens; needed for mode changes and dialog parents.
    pub window: Option<window::Id>,
    /// Hand the window's native handle to the engine once it is known.
    pub embed_engine: bool,
}

impl Shell {
    pub(crate) fn new(config: Config) -> Self {
        let player = MpvBackend::new(config.player.clone(), config.app_name.clone());
        let search = YtDlp::new(config.search.clone());
        Self::with_backends(config, Box::new(player), Box::new(search))
    }

    pub(crate) fn with_backends(
        config: Config,
        player: Box<dyn MediaBackend>,
        search: Box<dyn SearchBackend>,
    ) -> Self {
        let embed_engine = config.player.embed;
        Self {
            app_name: config.app_name,
            mode: UiMode::Normal,
            menu_open: false,

            transport: Transport::new(PlaybackEngine::new(player)),

            search: SearchPanel {
                query: String::new(),
                limit: config.search.default_limit,
            },
            phase: SearchPhase::Idle,
            results: None,
            picker: None,
            workers: Workers::new(SearchClient::new(search)),

            window: None,
            embed_engine,
        }
    }

    pub(crate) fn chrome(&self) -> Chrome {
        Chrome::for_mode(self.mode)
    }
}

/// Message = “something happened”.
#[derive(Debug, Clone)]
pub(crate) enum Message {
    Noop,

    // Timers
    Tick,
    PollWorkers,

    // Window
    WindowOpened(window::Id),
    EngineWindow(u64),

    // Keyboard
    Shortcut(Shortcut, window::Id),

    // Menu
    ToggleMenu,
    OpenFile,
    FileChosen(Option<PathBuf>),
    OpenSearch,

    // Search panel
    QueryChanged(String),
    LimitSelected(usize),
    SubmitSearch,
    CancelSearch,

    // Result picker
    ViewResults,
    PickerHighlight(usize),
    PickerConfirm,
    PickerDismiss,

    // Transport
    PlayPause,
    Stop,
    SliderMoved(f64),
    ToggleFullscreen,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normal_chrome_shows_everything_but_search() {
        let chrome = Chrome::for_mode(UiMode::Normal);
        assert!(chrome.menu && chrome.transport && chrome.slider);
        assert!(!chrome.search_panel);
        assert!(chrome.binds(Shortcut::PlayPause));
        assert!(chrome.binds(Shortcut::Fullscreen));
    }

    #[test]
    fn test_search_panel_unbinds_typing_keys() {
        let chrome = Chrome::for_mode(UiMode::SearchPanelOpen);
        assert!(chrome.search_panel);
        assert!(!chrome.binds(Shortcut::PlayPause));
        assert!(!chrome.binds(Shortcut::Fullscreen));
        assert!(chrome.binds(Shortcut::Escape));
        assert!(chrome.binds(Shortcut::Open));
    }

    #[test]
    fn test_fullscreen_hides_all_chrome() {
        let chrome = Chrome::for_mode(UiMode::Fullscreen);
        assert!(!chrome.menu && !chrome.transport && !chrome.slider && !chrome.search_panel);
        assert!(!chrome.binds(Shortcut::Open));
        assert!(!chrome.binds(Shortcut::Search));
        assert!(chrome.binds(Shortcut::Escape));
        assert!(chrome.binds(Shortcut::PlayPause));
    }

    #[test]
    fn test_phase_labels() {
        assert_eq!(SearchPhase::Idle.label(), "");
        assert_eq!(SearchPhase::Searching.label(), "Searching…");
        assert_eq!(SearchPhase::Fetching.label(), "Fetching…");
    }
}
