//! gui/workers.rs
//! Background workers for search + resolve.
//!
//! - One OS thread per request, detached, never cancelled.
//! - A worker never touches GUI state. It sends `(generation, outcome)` into
//!   the inbox; the UI thread drains it on `Message::PollWorkers`.
//! - Every dispatch bumps the generation. Only the newest generation's
//!   outcome is applied, so overlapping requests can't clobber each other.

use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, Sender};

use tracing::{debug, warn};

use crate::core::error::{ResolveError, SearchError};
use crate::core::search::SearchClient;
use crate::core::types::SearchResult;

#[derive(Debug, Clone)]
pub(crate) enum Job {
    Search { query: String, limit: usize },
    Resolve(SearchResult),
}

#[derive(Debug)]
pub(crate) enum Outcome {
    Searched {
        limit: usize,
        result: Result<Vec<SearchResult>, SearchError>,
    },
    Resolved {
        title: String,
        result: Result<String, ResolveError>,
    },
}

#[derive(Debug)]
pub(crate) struct Finished {
    pub generation: u64,
    pub outcome: Outcome,
}

pub(crate) struct Workers {
    client: Arc<SearchClient>,
    tx: Sender<Finished>,
    rx: Receiver<Finished>,
    generation: u64,
    in_flight: usize,
}

impl Workers {
    pub(crate) fn new(client: SearchClient) -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            client: Arc::new(client),
            tx,
            rx,
            generation: 0,
            in_flight: 0,
        }
    }

    /// Start `job` on a fresh thread. Returns its generation.
    pub(crate) fn dispatch(&mut self, job: Job) -> u64 {
        self.generation += 1;
        self.in_flight += 1;

        let generation = self.generation;
        let client = Arc::clone(&self.client);
        let tx = self.tx.clone();

        debug!(generation, ?job, "dispatching worker");

        std::thread::spawn(move || {
            let outcome = run(&client, job);
            // The shell may already be gone; nothing to report to.
            let _ = tx.send(Finished { generation, outcome });
        });

        generation
    }

    /// Everything that finished since the last drain. Never blocks.
    pub(crate) fn drain(&mut self) -> Vec<Finished> {
        let done: Vec<Finished> = self.rx.try_iter().collect();
        self.in_flight = self.in_flight.saturating_sub(done.len());
        done
    }

    pub(crate) fn is_current(&self, generation: u64) -> bool {
        generation == self.generation
    }

    pub(crate) fn in_flight(&self) -> usize {
        self.in_flight
    }

    /// Block until one worker finishes.
    #[cfg(test)]
    pub(crate) fn wait(&mut self, timeout: std::time::Duration) -> Option<Finished> {
        let done = self.rx.recv_timeout(timeout).ok()?;
        self.in_flight = self.in_flight.saturating_sub(1);
        Some(done)
    }
}

fn run(client: &SearchClient, job: Job) -> Outcome {
    match job {
        Job::Search { query, limit } => {
            let result = client.search(&query, limit);
            if let Err(e) = &result {
                warn!(query, error = %e, "search failed");
            }
            Outcome::Searched { limit, result }
        }
        Job::Resolve(hit) => {
            let result = client.resolve_stream_url(&hit.link);
            if let Err(e) = &result {
                warn!(link = %hit.link, error = %e, "resolve failed");
            }
            Outcome::Resolved {
                title: hit.title,
                result,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::search::MockSearchBackend;
    use std::time::Duration;

    const WAIT: Duration = Duration::from_secs(5);

    fn hit(i: usize) -> SearchResult {
        SearchResult {
            title: format!("title {i}"),
            link: format!("https://www.youtube.com/watch?v={i}"),
        }
    }

    #[test]
    fn test_search_job_reports_back() {
        let mut backend = MockSearchBackend::new();
        backend
            .expect_search()
            .returning(|_, n| Ok((0..n).map(hit).collect()));

        let mut workers = Workers::new(SearchClient::new(Box::new(backend)));
        let generation = workers.dispatch(Job::Search {
            query: "lofi".into(),
            limit: 3,
        });
        assert_eq!(workers.in_flight(), 1);

        let done = workers.wait(WAIT).unwrap();
        assert_eq!(done.generation, generation);
        assert_eq!(workers.in_flight(), 0);
        match done.outcome {
            Outcome::Searched { limit, result } => {
                assert_eq!(limit, 3);
                assert_eq!(result.unwrap().len(), 3);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_resolve_job_keeps_title() {
        let mut backend = MockSearchBackend::new();
        backend
            .expect_resolve()
            .returning(|_| Ok("https://cdn.example/stream".into()));

        let mut workers = Workers::new(SearchClient::new(Box::new(backend)));
        workers.dispatch(Job::Resolve(hit(4)));

        match workers.wait(WAIT).unwrap().outcome {
            Outcome::Resolved { title, result } => {
                assert_eq!(title, "title 4");
                assert_eq!(result.unwrap(), "https://cdn.example/stream");
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_only_latest_generation_is_current() {
        let mut backend = MockSearchBackend::new();
        backend.expect_resolve().returning(|_| Ok("https://x".into()));

        let mut workers = Workers::new(SearchClient::new(Box::new(backend)));
        let first = workers.dispatch(Job::Resolve(hit(1)));
        let second = workers.dispatch(Job::Resolve(hit(2)));

        assert!(!workers.is_current(first));
        assert!(workers.is_current(second));

        workers.wait(WAIT).unwrap();
        workers.wait(WAIT).unwrap();
        assert_eq!(workers.in_flight(), 0);
        assert!(workers.drain().is_empty());
    }
}
