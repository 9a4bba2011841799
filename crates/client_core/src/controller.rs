//! View model that owns the [`UiState`] cell and runs fetch attempts.
//!
//! Every attempt gets a number. `retry` bumps the number and publishes
//! `Loading` under the watch channel's write lock, and a completion is only
//! published while its number is still current. A superseded attempt is also
//! aborted, so at most one fetch is live at a time.

use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc, Mutex, PoisonError,
};

use shared::protocol::duplicate_names;
use tokio::{sync::watch, task::JoinHandle};
use tracing::{debug, info, warn};

use crate::{repository::AmphibiansRepository, state::UiState};

struct Shared {
    repository: Arc<dyn AmphibiansRepository>,
    state: watch::Sender<UiState>,
    attempt: AtomicU64,
}

impl Shared {
    async fn run_attempt(&self, attempt: u64) {
        let next = match self.repository.get_amphibians().await {
            Ok(amphibians) => {
                let duplicates = duplicate_names(&amphibians);
                if !duplicates.is_empty() {
                    warn!(attempt, ?duplicates, "amphibian names repeat within one listing");
                }
                info!(attempt, count = amphibians.len(), "amphibians loaded");
                UiState::Success(amphibians)
            }
            Err(error) => {
                warn!(attempt, %error, "amphibians fetch failed");
                UiState::Error
            }
        };

        let published = self.state.send_if_modified(|state| {
            if self.attempt.load(Ordering::SeqCst) != attempt {
                return false;
            }
            *state = next;
            true
        });

        if !published {
            debug!(attempt, "discarding result of superseded attempt");
        }
    }
}

pub struct AmphibiansViewModel {
    shared: Arc<Shared>,
    in_flight: Mutex<Option<JoinHandle<()>>>,
}

impl AmphibiansViewModel {
    /// Starts the first fetch right away. Must be called inside a Tokio runtime.
    pub fn new(repository: Arc<dyn AmphibiansRepository>) -> Self {
        let (state, _) = watch::channel(UiState::Loading);
        let view_model = Self {
            shared: Arc::new(Shared {
                repository,
                state,
                attempt: AtomicU64::new(0),
            }),
            in_flight: Mutex::new(None),
        };
        view_model.start_attempt();
        view_model
    }

    /// Re-enters `Loading` and starts a new attempt, cancelling one still in flight.
    pub fn retry(&self) {
        self.start_attempt();
    }

    pub fn state(&self) -> UiState {
        self.shared.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<UiState> {
        self.shared.state.subscribe()
    }

    /// Number of the most recently started attempt.
    pub fn attempt(&self) -> u64 {
        self.shared.attempt.load(Ordering::SeqCst)
    }

    /// Waits until the current attempt has published its outcome.
    pub async fn settled(&self) -> UiState {
        let mut updates = self.subscribe();
        let settled = match updates.wait_for(|state| !state.is_loading()).await {
            Ok(state) => state.clone(),
            Err(_) => self.state(),
        };
        settled
    }

    fn start_attempt(&self) {
        let mut in_flight = self.in_flight.lock().unwrap_or_else(PoisonError::into_inner);

        let mut attempt = 0;
        self.shared.state.send_modify(|state| {
            attempt = self.shared.attempt.fetch_add(1, Ordering::SeqCst) + 1;
            *state = UiState::Loading;
        });

        if let Some(previous) = in_flight.take() {
            if !previous.is_finished() {
                debug!(attempt, "cancelling superseded attempt");
            }
            previous.abort();
        }

        info!(attempt, "starting amphibians fetch");
        let shared = Arc::clone(&self.shared);
        *in_flight = Some(tokio::spawn(async move {
            shared.run_attempt(attempt).await;
        }));
    }
}

impl Drop for AmphibiansViewModel {
    fn drop(&mut self) {
        let in_flight = self
            .in_flight
            .get_mut()
            .unwrap_or_else(PoisonError::into_inner);
        if let Some(task) = in_flight.take() {
            task.abort();
        }
    }
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;
