use crate::error::Error;
use std::{
    future::Future,
    sync::{
        atomic::{AtomicU64, Ordering},
        Mutex, MutexGuard, PoisonError,
    },
    time::Duration,
};

#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome<T> {
    Results(T),
    ///
    /// Newer term arrived before this one finished
    ///
    Superseded,
    ///
    /// Term is the same as the last one that was searched
    ///
    Unchanged,
    ///
    /// Term is the same as the search still in flight,
    /// results are delivered to the call that started it
    ///
    InFlight,
}

#[derive(Default)]
struct LastSearch {
    term: Option<String>,
    in_flight: bool,
}

///
/// Debounce, distinct-until-changed and switch-to-latest
/// for search inputs.
///
/// Every call to [DebouncedSearch::run] waits for the debounce period
/// and gives up when a newer term arrived in the meantime. A term that
/// survives the debounce and differs from the last searched one starts
/// a new search and overtakes the one in flight, whose results are dropped.
/// A term equal to the last one never cancels its search.
///
pub struct DebouncedSearch {
    debounce: Duration,
    /// Bumped by every term, including ones that never leave the debounce
    pending: AtomicU64,
    /// Bumped only when a search is actually started
    active: AtomicU64,
    last_search: Mutex<LastSearch>,
}

impl DebouncedSearch {
    pub fn new(debounce: Duration) -> Self {
        Self {
            debounce,
            pending: AtomicU64::new(0),
            active: AtomicU64::new(0),
            last_search: Mutex::new(LastSearch::default()),
        }
    }

    pub async fn run<T, F, Fut>(&self, term: String, search: F) -> Result<SearchOutcome<T>, Error>
    where
        F: FnOnce(String) -> Fut,
        Fut: Future<Output = Result<T, Error>>,
    {
        let pending = self.pending.fetch_add(1, Ordering::SeqCst) + 1;

        tokio::time::sleep(self.debounce).await;
        if self.pending.load(Ordering::SeqCst) != pending {
            return Ok(SearchOutcome::Superseded);
        }

        let generation = {
            let mut last_search = self.lock();
            if last_search.term.as_deref() == Some(term.as_str()) {
                return Ok(if last_search.in_flight {
                    SearchOutcome::InFlight
                } else {
                    SearchOutcome::Unchanged
                });
            }
            last_search.term = Some(term.clone());
            last_search.in_flight = true;

            self.active.fetch_add(1, Ordering::SeqCst) + 1
        };

        tracing::debug!(%term, "running debounced search");
        let result = search(term).await;

        {
            let mut last_search = self.lock();
            if self.active.load(Ordering::SeqCst) != generation {
                return Ok(SearchOutcome::Superseded);
            }
            last_search.in_flight = false;
            if result.is_err() {
                // failed term may be retried as is
                last_search.term = None;
            }
        }

        result.map(SearchOutcome::Results)
    }

    ///
    /// Abandons pending searches and forgets last term,
    /// so searching the same term again is not suppressed
    ///
    pub fn reset(&self) {
        let mut last_search = self.lock();
        self.pending.fetch_add(1, Ordering::SeqCst);
        self.active.fetch_add(1, Ordering::SeqCst);
        *last_search = LastSearch::default();
    }

    fn lock(&self) -> MutexGuard<'_, LastSearch> {
        self.last_search.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
