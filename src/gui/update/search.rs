//! gui/update/search.rs
//! Search panel + result picker + worker inbox.
//!
//! Flow:
//!   submit -> Search worker ("Searching…")
//!     limit == 1 -> Resolve worker straight away ("Fetching…")
//!     limit  > 1 -> results kept, "View Results" -> picker -> Resolve worker
//!   Resolve ok -> transport::load_and_play(Stream(url), title)

use iced::Task;
use iced::widget::operation;
use tracing::{debug, info};

use super::super::picker::ResultPicker;
use super::super::state::{Message, SEARCH_INPUT, SearchPhase, Shell, UiMode};
use super::super::workers::{Finished, Job, Outcome};
use super::{dialogs, transport};
use crate::core::search::MAX_RESULTS;
use crate::core::types::{MediaSource, SearchResult};

pub(crate) fn open_search(state: &mut Shell) -> Task<Message> {
    state.menu_open = false;
    if state.mode == UiMode::Fullscreen {
        return Task::none();
    }

    state.results = None;
    state.picker = None;
    state.mode = UiMode::SearchPanelOpen;
    operation::focus(SEARCH_INPUT)
}

/// Close the panel and forget the query and any pending results.
pub(crate) fn cancel_search(state: &mut Shell) -> Task<Message> {
    state.results = None;
    state.search.query.clear();
    if state.mode == UiMode::SearchPanelOpen {
        state.mode = UiMode::Normal;
    }
    Task::none()
}

pub(crate) fn query_changed(state: &mut Shell, query: String) -> Task<Message> {
    state.search.query = query;
    Task::none()
}

pub(crate) fn limit_selected(state: &mut Shell, limit: usize) -> Task<Message> {
    state.search.limit = limit.min(MAX_RESULTS);
    Task::none()
}

pub(crate) fn submit_search(state: &mut Shell) -> Task<Message> {
    let query = state.search.query.trim().to_string();
    if query.is_empty() {
        return Task::none();
    }

    let limit = state.search.limit;
    info!(query, limit, "search");
    state.workers.dispatch(Job::Search { query, limit });

    let _ = cancel_search(state);
    state.phase = SearchPhase::Searching;
    Task::none()
}

pub(crate) fn view_results(state: &mut Shell) -> Task<Message> {
    if let Some(results) = &state.results {
        state.picker = Some(ResultPicker::new(results.clone()));
    }
    Task::none()
}

pub(crate) fn picker_highlight(state: &mut Shell, index: usize) -> Task<Message> {
    if let Some(picker) = &mut state.picker {
        picker.highlight(index);
    }
    Task::none()
}

pub(crate) fn picker_confirm(state: &mut Shell) -> Task<Message> {
    let Some(hit) = state.picker.as_ref().and_then(ResultPicker::selection) else {
        return Task::none();
    };
    state.picker = None;
    start_resolve(state, hit)
}

/// Results stay around so "View Results" can reopen the picker.
pub(crate) fn picker_dismiss(state: &mut Shell) -> Task<Message> {
    state.picker = None;
    Task::none()
}

fn start_resolve(state: &mut Shell, hit: SearchResult) -> Task<Message> {
    info!(title = %hit.title, link = %hit.link, "resolving");
    state.workers.dispatch(Job::Resolve(hit));

    let _ = cancel_search(state);
    state.phase = SearchPhase::Fetching;
    Task::none()
}

pub(crate) fn poll_workers(state: &mut Shell) -> Task<Message> {
    let tasks: Vec<Task<Message>> = state
        .workers
        .drain()
        .into_iter()
        .map(|done| apply_finished(state, done))
        .collect();
    Task::batch(tasks)
}

fn apply_finished(state: &mut Shell, done: Finished) -> Task<Message> {
    if !state.workers.is_current(done.generation) {
        debug!(generation = done.generation, "dropping stale worker result");
        return Task::none();
    }

    match done.outcome {
        Outcome::Searched { limit, result } => match result {
            Ok(mut hits) if limit == 1 && !hits.is_empty() => {
                let first = hits.swap_remove(0);
                start_resolve(state, first)
            }
            Ok(hits) => {
                debug!(count = hits.len(), "search results ready");
                state.phase = SearchPhase::Idle;
                state.results = Some(hits);
                Task::none()
            }
            Err(e) => {
                state.phase = SearchPhase::Idle;
                dialogs::youtube_error(state.window, &e)
            }
        },
        Outcome::Resolved { title, result } => {
            state.phase = SearchPhase::Idle;
            match result {
                Ok(url) => transport::load_and_play(state, MediaSource::Stream(url), title),
                Err(e) => dialogs::youtube_error(state.window, &e),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::BackendError;
    use crate::core::search::MockSearchBackend;
    use crate::core::types::TransportState;
    use crate::gui::update::testing::shell;
    use crate::gui::util::window_title;
    use mockall::predicate::eq;
    use std::time::Duration;

    const WAIT: Duration = Duration::from_secs(5);

    fn hit(i: usize) -> SearchResult {
        SearchResult {
            title: format!("Lofi mix #{i}"),
            link: format!("https://www.youtube.com/watch?v=id{i}"),
        }
    }

    fn submit(state: &mut Shell, query: &str, limit: usize) {
        let _ = open_search(state);
        let _ = query_changed(state, query.to_string());
        let _ = limit_selected(state, limit);
        let _ = submit_search(state);
    }

    /// Block on the next worker and feed it through the inbox path.
    fn settle(state: &mut Shell) {
        let done = state.workers.wait(WAIT).expect("worker finished");
        let _ = apply_finished(state, done);
    }

    #[test]
    fn test_single_result_plays_without_picker() {
        let mut backend = MockSearchBackend::new();
        backend
            .expect_search()
            .with(eq("lofi"), eq(1))
            .times(1)
            .returning(|_, _| Ok(vec![hit(1)]));
        backend
            .expect_resolve()
            .with(eq("https://www.youtube.com/watch?v=id1"))
            .times(1)
            .returning(|_| Ok("https://cdn.example/1.mp4".into()));
        let (mut state, remote) = shell(backend);

        submit(&mut state, "lofi", 1);
        assert_eq!(state.phase, SearchPhase::Searching);
        assert_eq!(state.mode, UiMode::Normal);
        assert!(state.search.query.is_empty());

        settle(&mut state);
        assert_eq!(state.phase, SearchPhase::Fetching);
        assert!(state.picker.is_none());
        assert!(state.results.is_none());

        settle(&mut state);
        assert_eq!(state.phase, SearchPhase::Idle);
        assert_eq!(state.transport.state(), TransportState::Playing);
        assert_eq!(
            window_title(&state.app_name, state.transport.session()),
            "VidTube - Lofi mix #1"
        );
        assert_eq!(remote.loaded().as_deref(), Some("https://cdn.example/1.mp4"));
    }

    #[test]
    fn test_picker_resolves_exactly_the_chosen_result() {
        let mut backend = MockSearchBackend::new();
        backend
            .expect_search()
            .with(eq("lofi"), eq(5))
            .returning(|_, n| Ok((1..=n).map(hit).collect()));
        backend
            .expect_resolve()
            .with(eq("https://www.youtube.com/watch?v=id3"))
            .times(1)
            .returning(|_| Ok("https://cdn.example/3.mp4".into()));
        let (mut state, _remote) = shell(backend);

        submit(&mut state, "lofi", 5);
        settle(&mut state);
        assert_eq!(state.phase, SearchPhase::Idle);
        assert_eq!(state.results.as_ref().map(Vec::len), Some(5));

        let _ = view_results(&mut state);
        let titles: Vec<String> = state
            .picker
            .as_ref()
            .unwrap()
            .titles()
            .map(str::to_string)
            .collect();
        assert_eq!(titles, (1..=5).map(|i| hit(i).title).collect::<Vec<_>>());

        let _ = picker_highlight(&mut state, 2);
        let _ = picker_confirm(&mut state);
        assert!(state.picker.is_none());
        assert!(state.results.is_none());
        assert_eq!(state.phase, SearchPhase::Fetching);

        settle(&mut state);
        assert_eq!(state.transport.state(), TransportState::Playing);
        assert_eq!(
            window_title(&state.app_name, state.transport.session()),
            "VidTube - Lofi mix #3"
        );
    }

    #[test]
    fn test_blank_query_keeps_panel_open() {
        let mut backend = MockSearchBackend::new();
        backend.expect_search().never();
        let (mut state, _remote) = shell(backend);

        submit(&mut state, "   \t ", 5);
        assert_eq!(state.workers.in_flight(), 0);
        assert_eq!(state.mode, UiMode::SearchPanelOpen);
        assert_eq!(state.phase, SearchPhase::Idle);
    }

    #[test]
    fn test_confirm_without_highlight_does_nothing() {
        let mut backend = MockSearchBackend::new();
        backend
            .expect_search()
            .returning(|_, n| Ok((1..=n).map(hit).collect()));
        backend.expect_resolve().never();
        let (mut state, _remote) = shell(backend);

        submit(&mut state, "lofi", 3);
        settle(&mut state);
        let _ = view_results(&mut state);
        let _ = picker_confirm(&mut state);

        assert!(state.picker.is_some());
        assert_eq!(state.workers.in_flight(), 0);
    }

    #[test]
    fn test_dismissed_picker_can_be_reopened() {
        let mut backend = MockSearchBackend::new();
        backend
            .expect_search()
            .returning(|_, n| Ok((1..=n).map(hit).collect()));
        let (mut state, _remote) = shell(backend);

        submit(&mut state, "lofi", 2);
        settle(&mut state);
        let _ = view_results(&mut state);
        let _ = picker_dismiss(&mut state);
        assert!(state.picker.is_none());
        assert!(state.results.is_some());

        let _ = view_results(&mut state);
        assert_eq!(state.picker.as_ref().map(ResultPicker::len), Some(2));
    }

    #[test]
    fn test_search_failure_resets_status() {
        let mut backend = MockSearchBackend::new();
        backend.expect_search().returning(|_, _| {
            Err(BackendError::Malformed("no entries".into()))
        });
        let (mut state, _remote) = shell(backend);

        submit(&mut state, "lofi", 5);
        settle(&mut state);
        assert_eq!(state.phase, SearchPhase::Idle);
        assert!(state.results.is_none());
        assert_eq!(state.transport.state(), TransportState::NoMedia);
    }

    #[test]
    fn test_resolve_failure_resets_status() {
        let mut backend = MockSearchBackend::new();
        backend
            .expect_search()
            .returning(|_, _| Ok(vec![hit(1)]));
        backend
            .expect_resolve()
            .returning(|_| Ok("   ".into()));
        let (mut state, _remote) = shell(backend);

        submit(&mut state, "lofi", 1);
        settle(&mut state);
        settle(&mut state);
        assert_eq!(state.phase, SearchPhase::Idle);
        assert_eq!(state.transport.state(), TransportState::NoMedia);
    }

    #[test]
    fn test_stale_generation_is_ignored() {
        let mut backend = MockSearchBackend::new();
        backend
            .expect_search()
            .with(eq("old"), eq(3))
            .returning(|_, n| Ok((1..=n).map(hit).collect()));
        backend
            .expect_resolve()
            .returning(|_| Ok("https://cdn.example/new.mp4".into()));
        let (mut state, _remote) = shell(backend);

        submit(&mut state, "old", 3);
        let _ = start_resolve(
            &mut state,
            SearchResult {
                title: "New".into(),
                link: "https://www.youtube.com/watch?v=new".into(),
            },
        );

        let mut done = vec![
            state.workers.wait(WAIT).unwrap(),
            state.workers.wait(WAIT).unwrap(),
        ];
        // Apply the newest last so the stale one can't hide behind it.
        done.sort_by_key(|f| f.generation);
        for f in done {
            let _ = apply_finished(&mut state, f);
        }

        assert!(state.results.is_none());
        assert_eq!(
            window_title(&state.app_name, state.transport.session()),
            "VidTube - New"
        );
    }

    #[test]
    fn test_search_ignored_in_fullscreen() {
        let (mut state, _remote) = shell(MockSearchBackend::new());
        state.mode = UiMode::Fullscreen;
        let task = open_search(&mut state);
        assert_eq!(state.mode, UiMode::Fullscreen);
        assert_eq!(task.units(), 0);
    }

    #[test]
    fn test_opening_panel_focuses_query_field() {
        let (mut state, _remote) = shell(MockSearchBackend::new());
        let task = open_search(&mut state);
        assert_eq!(state.mode, UiMode::SearchPanelOpen);
        assert_eq!(task.units(), 1);
    }

    #[test]
    fn test_limit_is_clamped() {
        let (mut state, _remote) = shell(MockSearchBackend::new());
        let _ = limit_selected(&mut state, 50);
        assert_eq!(state.search.limit, MAX_RESULTS);
    }
}
