//! Fetch cycles and per-page view-state
//!
//! A page owns one [`PageStore`]. Every trigger (page load or year change)
//! starts a fetch cycle: the store hands out a [`CycleTicket`], cancels the
//! ticket of any cycle still in flight, and later applies the cycle's merged
//! result only if the ticket is still the newest one. Overlapping cycles
//! therefore resolve to whichever was issued last, independent of the order
//! their responses arrive in.
//!
//! Results are all-or-nothing: a cycle either applies its complete batch or
//! leaves the view-state exactly as it was. A caller whose cycle was
//! superseded can [`PageStore::wait_settled`] for the newest one before it
//! reads the view-state.

use crate::error::FetchError;
use parking_lot::{Mutex, RwLock};
use std::future::Future;
use tokio::sync::Notify;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info};

/// How a fetch cycle ended
#[derive(Debug)]
pub enum CycleOutcome {
    /// The batch succeeded and replaced the view-state
    Applied,
    /// A newer cycle started before this one could apply
    Superseded,
    /// A request in the batch failed; the view-state was left untouched
    Failed(FetchError),
}

impl CycleOutcome {
    /// Whether this cycle wrote the view-state
    #[must_use]
    pub const fn is_applied(&self) -> bool {
        matches!(self, Self::Applied)
    }

    /// The failure, if the batch failed
    #[must_use]
    pub const fn error(&self) -> Option<&FetchError> {
        match self {
            Self::Failed(error) => Some(error),
            _ => None,
        }
    }
}

/// Identifies one fetch cycle
#[derive(Debug, Clone)]
pub struct CycleTicket {
    generation: u64,
    key: String,
    token: CancellationToken,
}

impl CycleTicket {
    /// Trigger value the cycle was started for
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Monotonic cycle number within its store
    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Whether a newer cycle has cancelled this one
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }
}

#[derive(Debug)]
struct CycleState {
    generation: u64,
    key: Option<String>,
    token: CancellationToken,
    loading: bool,
}

/// View-state of one page plus the bookkeeping for its fetch cycles
#[derive(Debug)]
pub struct PageStore<V> {
    page: &'static str,
    view: RwLock<V>,
    cycles: Mutex<CycleState>,
    settled: Notify,
}

/// Settles its cycle when dropped, including when the caller gives up early
struct SettleGuard<'a, V> {
    store: &'a PageStore<V>,
    ticket: &'a CycleTicket,
}

impl<V> Drop for SettleGuard<'_, V> {
    fn drop(&mut self) {
        self.store.settle(self.ticket);
    }
}

impl<V: Default> PageStore<V> {
    /// Store holding the default (zero-valued) view-state
    #[must_use]
    pub fn new(page: &'static str) -> Self {
        Self::with_view(page, V::default())
    }
}

impl<V> PageStore<V> {
    /// Store holding `view`
    #[must_use]
    pub fn with_view(page: &'static str, view: V) -> Self {
        Self {
            page,
            view: RwLock::new(view),
            cycles: Mutex::new(CycleState {
                generation: 0,
                key: None,
                token: CancellationToken::new(),
                loading: false,
            }),
            settled: Notify::new(),
        }
    }

    /// Start a cycle for `key`, cancelling any cycle still in flight
    pub fn begin(&self, key: impl Into<String>) -> CycleTicket {
        let key = key.into();
        let mut cycles = self.cycles.lock();

        cycles.token.cancel();
        cycles.generation += 1;
        cycles.token = CancellationToken::new();
        cycles.key = Some(key.clone());
        cycles.loading = true;

        debug!(page = self.page, generation = cycles.generation, %key, "Fetch cycle started");

        CycleTicket {
            generation: cycles.generation,
            key,
            token: cycles.token.clone(),
        }
    }

    /// Whether `ticket` belongs to the newest cycle
    #[must_use]
    pub fn is_current(&self, ticket: &CycleTicket) -> bool {
        self.cycles.lock().generation == ticket.generation
    }

    /// Trigger value of the newest cycle
    #[must_use]
    pub fn current_key(&self) -> Option<String> {
        self.cycles.lock().key.clone()
    }

    /// Whether the newest cycle is still waiting on the backend
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.cycles.lock().loading
    }

    /// Apply `update` if `ticket` is still current; returns whether it ran
    pub fn apply(&self, ticket: &CycleTicket, update: impl FnOnce(&mut V)) -> bool {
        // Hold the cycle lock so no newer cycle can begin between check and write.
        let cycles = self.cycles.lock();
        if cycles.generation != ticket.generation {
            return false;
        }
        update(&mut self.view.write());
        true
    }

    /// Mark the cycle finished; only the newest cycle clears the loading flag
    pub fn settle(&self, ticket: &CycleTicket) {
        let newest = {
            let mut cycles = self.cycles.lock();
            let newest = cycles.generation == ticket.generation;
            if newest {
                cycles.loading = false;
            }
            newest
        };
        if newest {
            self.settled.notify_waiters();
        }
    }

    /// Wait until the newest cycle has settled
    ///
    /// Returns at once when no cycle is in flight. A cycle that begins while
    /// waiting extends the wait to that cycle.
    pub async fn wait_settled(&self) {
        loop {
            let notified = self.settled.notified();
            tokio::pin!(notified);
            notified.as_mut().enable();
            if !self.is_loading() {
                return;
            }
            notified.await;
        }
    }

    /// Read the view-state
    pub fn read<R>(&self, f: impl FnOnce(&V) -> R) -> R {
        f(&self.view.read())
    }

    /// Run one complete fetch cycle
    ///
    /// `fetch` is the batch barrier: it resolves once every request of the
    /// batch has settled, with the merged data or the first failure. On
    /// success `apply` merges the data into the view-state, provided no newer
    /// cycle has started meanwhile.
    pub async fn run_cycle<T, Fut>(
        &self,
        key: impl Into<String>,
        fetch: Fut,
        apply: impl FnOnce(&mut V, T),
    ) -> CycleOutcome
    where
        Fut: Future<Output = Result<T, FetchError>>,
    {
        let ticket = self.begin(key);
        let _settle = SettleGuard {
            store: self,
            ticket: &ticket,
        };

        let result = tokio::select! {
            biased;
            () = ticket.token.cancelled() => {
                debug!(
                    page = self.page,
                    key = ticket.key(),
                    "Fetch cycle cancelled by a newer one"
                );
                return CycleOutcome::Superseded;
            }
            result = fetch => result,
        };

        match result {
            Ok(data) => {
                if self.apply(&ticket, |view| apply(view, data)) {
                    info!(page = self.page, key = ticket.key(), "Fetch cycle applied");
                    CycleOutcome::Applied
                } else {
                    debug!(
                        page = self.page,
                        key = ticket.key(),
                        "Discarding superseded fetch result"
                    );
                    CycleOutcome::Superseded
                }
            }
            Err(err) if self.is_current(&ticket) => {
                error!(
                    page = self.page,
                    key = ticket.key(),
                    endpoint = err.endpoint(),
                    error = %err,
                    "Fetch cycle failed, keeping previous view-state"
                );
                CycleOutcome::Failed(err)
            }
            Err(err) => {
                debug!(
                    page = self.page,
                    key = ticket.key(),
                    error = %err,
                    "Superseded fetch cycle failed"
                );
                CycleOutcome::Superseded
            }
        }
    }
}

impl<V: Clone> PageStore<V> {
    /// Copy of the view-state
    #[must_use]
    pub fn snapshot(&self) -> V {
        self.view.read().clone()
    }
}
