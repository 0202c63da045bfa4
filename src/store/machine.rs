//! The list store: load, publish, and re-sort on toggle.
//!
//! All state lives in one mutex-guarded cell. The initial load (and any
//! refresh) runs on a background loader thread and publishes once it
//! settles; toggles run on the caller's thread and hold the lock for the
//! whole read-sort-publish turn, so concurrent toggles cannot lose updates.

use super::state::ViewState;
use crate::pipeline::prepare_records;
use crate::sort::{sort_records, SortColumn, SortSpec};
use crate::source::RecordSource;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::thread;
use std::time::{Duration, Instant};

/// Mutable state shared between the store and its loader threads.
struct Shared {
    state: ViewState,
    subscribers: Vec<Sender<ViewState>>,
    /// Bumped on every load start and on cancellation; a loader only
    /// publishes if its generation is still current.
    generation: u64,
    in_flight: bool,
    closed: bool,
    /// Full cause of the most recent failed load.
    last_error: Option<String>,
}

impl Shared {
    fn publish(&mut self, next: ViewState) {
        if self.closed || next == self.state {
            return;
        }
        self.state = next;
        let state = &self.state;
        self.subscribers
            .retain(|subscriber| subscriber.send(state.clone()).is_ok());
    }
}

fn lock(shared: &Mutex<Shared>) -> MutexGuard<'_, Shared> {
    shared.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Owner of the list's view state.
///
/// Construction starts the first load immediately. Dropping the store
/// cancels any load still in flight and disconnects all subscribers.
///
/// # Example
///
/// ```no_run
/// use fetchlist::model::RawRecord;
/// use fetchlist::source::StaticRecordSource;
/// use fetchlist::store::ListStore;
/// use std::time::Duration;
///
/// let store = ListStore::new(StaticRecordSource::new(vec![
///     RawRecord::new(1, 200, Some("Item 1")),
///     RawRecord::new(2, 100, Some("Item 2")),
/// ]));
///
/// let state = store.wait_settled(Duration::from_secs(5));
/// assert!(state.is_ready());
/// store.toggle_group_sort();
/// ```
pub struct ListStore {
    shared: Arc<Mutex<Shared>>,
    source: Arc<dyn RecordSource>,
}

impl ListStore {
    /// Create a store over `source` and start loading.
    pub fn new<S: RecordSource + 'static>(source: S) -> Self {
        Self::from_arc(Arc::new(source))
    }

    /// Create a store over a shared source and start loading.
    pub fn from_arc(source: Arc<dyn RecordSource>) -> Self {
        let store = Self {
            shared: Arc::new(Mutex::new(Shared {
                state: ViewState::Loading,
                subscribers: Vec::new(),
                generation: 0,
                in_flight: false,
                closed: false,
                last_error: None,
            })),
            source,
        };
        store.load();
        store
    }

    /// Snapshot of the current state.
    #[must_use]
    pub fn state(&self) -> ViewState {
        lock(&self.shared).state.clone()
    }

    /// Whether a load thread is currently running.
    ///
    /// Unlike `ViewState::Loading`, this turns false as soon as the load
    /// settles or is cancelled.
    #[must_use]
    pub fn load_in_flight(&self) -> bool {
        lock(&self.shared).in_flight
    }

    /// Cause of the most recent failed load, with its full source chain.
    ///
    /// Cleared when a later load succeeds.
    #[must_use]
    pub fn last_error(&self) -> Option<String> {
        lock(&self.shared).last_error.clone()
    }

    /// Subscribe to state changes.
    ///
    /// The receiver first gets the current state, then every later
    /// published state in order.
    pub fn subscribe(&self) -> Receiver<ViewState> {
        let (tx, rx) = mpsc::channel();
        let mut shared = lock(&self.shared);
        if tx.send(shared.state.clone()).is_ok() {
            shared.subscribers.push(tx);
        }
        rx
    }

    /// Re-run the full load path.
    ///
    /// Any load already in flight is superseded and its result dropped.
    /// The current state stays visible until the new outcome is known.
    pub fn refresh(&self) {
        self.load();
    }

    /// Cancel the load in flight, if any. Nothing is published for it.
    pub fn cancel_load(&self) {
        let mut shared = lock(&self.shared);
        if shared.in_flight {
            shared.generation += 1;
            shared.in_flight = false;
            tracing::debug!("Cancelled in-flight load");
        }
    }

    /// Flip the group direction (resetting name to ascending) and re-sort.
    ///
    /// No-op unless the store is `Ready`.
    pub fn toggle_group_sort(&self) {
        self.toggle(SortColumn::Group);
    }

    /// Flip the name direction (resetting group to ascending) and re-sort.
    ///
    /// No-op unless the store is `Ready`.
    pub fn toggle_name_sort(&self) {
        self.toggle(SortColumn::Name);
    }

    /// Apply the toggle for `column` to the resident items.
    pub fn toggle(&self, column: SortColumn) {
        let mut shared = lock(&self.shared);
        let ViewState::Ready { items, sort } = &shared.state else {
            tracing::debug!(?column, state = shared.state.label(), "Ignoring toggle");
            return;
        };

        let next_sort = sort.toggle(column);
        let mut resorted = items.clone();
        sort_records(&mut resorted, next_sort);

        tracing::debug!(
            ?column,
            group = next_sort.group_direction.label(),
            name = next_sort.name_direction.label(),
            "Re-sorted list"
        );
        shared.publish(ViewState::Ready {
            items: resorted,
            sort: next_sort,
        });
    }

    /// Block until the state is no longer `Loading`, or `timeout` elapses.
    ///
    /// Returns the state observed last.
    pub fn wait_settled(&self, timeout: Duration) -> ViewState {
        let rx = self.subscribe();
        let deadline = Instant::now() + timeout;
        let mut latest = ViewState::Loading;

        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            match rx.recv_timeout(remaining) {
                Ok(state) if !state.is_loading() => return state,
                Ok(state) => latest = state,
                Err(RecvTimeoutError::Timeout | RecvTimeoutError::Disconnected) => return latest,
            }
        }
    }

    fn load(&self) {
        let generation = {
            let mut shared = lock(&self.shared);
            shared.generation += 1;
            shared.in_flight = true;
            shared.generation
        };

        let shared = Arc::clone(&self.shared);
        let source = Arc::clone(&self.source);
        tracing::info!(source = source.name(), generation, "Loading record list");

        let spawned = thread::Builder::new()
            .name("fetchlist-loader".to_string())
            .spawn(move || run_load(&shared, source.as_ref(), generation));

        if let Err(e) = spawned {
            tracing::error!("Failed to start loader thread: {e}");
            let mut shared = lock(&self.shared);
            if shared.generation == generation {
                shared.in_flight = false;
                shared.last_error = Some(format!("failed to start loader thread: {e}"));
                shared.publish(ViewState::Failed);
            }
        }
    }
}

impl Drop for ListStore {
    fn drop(&mut self) {
        let mut shared = lock(&self.shared);
        shared.generation += 1;
        shared.in_flight = false;
        shared.closed = true;
        shared.subscribers.clear();
    }
}

/// Body of the loader thread: fetch, transform, publish if still current.
fn run_load(shared: &Mutex<Shared>, source: &dyn RecordSource, generation: u64) {
    let started = Instant::now();
    let (next, error) = match source.fetch_raw_records() {
        Ok(raw) => {
            let sort = SortSpec::default();
            let (items, stats) = prepare_records(&raw, sort);
            tracing::info!(
                received = stats.received,
                kept = stats.kept,
                dropped = stats.dropped(),
                elapsed_ms = started.elapsed().as_millis() as u64,
                "Record list loaded"
            );
            (ViewState::Ready { items, sort }, None)
        }
        Err(e) => {
            let report = e.report();
            tracing::warn!(
                elapsed_ms = started.elapsed().as_millis() as u64,
                error = %report,
                "Record list load failed"
            );
            (ViewState::Failed, Some(report))
        }
    };

    let mut shared = lock(shared);
    if shared.generation != generation {
        tracing::debug!(generation, "Discarding result of superseded load");
        return;
    }
    shared.in_flight = false;
    shared.last_error = error;
    shared.publish(next);
}
