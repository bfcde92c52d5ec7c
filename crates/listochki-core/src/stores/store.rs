use std::future::Future;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tokio::sync::Mutex;
use tracing::{debug, warn};

use crate::api::TransportFailure;

/// Decides whether a cached value counts as present.
pub trait Memoized {
    fn is_loaded(&self) -> bool;
}

/// An empty collection is treated as "not loaded yet".
impl<T> Memoized for Vec<T> {
    fn is_loaded(&self) -> bool {
        !self.is_empty()
    }
}

/// Result of a `fetch()` call. Failures never propagate as errors: the
/// caller reads the store's error slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// Value was already present; no request was made.
    Cached,
    /// A request was made and the value stored.
    Loaded,
    /// A request was made and failed; carries the store's fixed message.
    Failed(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct StoreState<T> {
    pub value: Option<T>,
    pub loading: bool,
    pub error: Option<String>,
}

impl<T> Default for StoreState<T> {
    fn default() -> Self {
        Self {
            value: None,
            loading: false,
            error: None,
        }
    }
}

/// One cached value plus its loading flag and error slot.
pub struct ReferenceStore<T> {
    name: &'static str,
    failure_message: &'static str,
    state: RwLock<StoreState<T>>,
    // Serializes fetches so a second caller sees the first caller's result.
    in_flight: Mutex<()>,
}

impl<T: Memoized + Clone> ReferenceStore<T> {
    pub fn new(name: &'static str, failure_message: &'static str) -> Self {
        Self {
            name,
            failure_message,
            state: RwLock::new(StoreState::default()),
            in_flight: Mutex::new(()),
        }
    }

    pub fn snapshot(&self) -> StoreState<T> {
        self.read().clone()
    }

    pub fn value(&self) -> Option<T> {
        self.read().value.clone()
    }

    pub fn is_loading(&self) -> bool {
        self.read().loading
    }

    pub fn error(&self) -> Option<String> {
        self.read().error.clone()
    }

    pub fn is_cached(&self) -> bool {
        self.read().value.as_ref().is_some_and(Memoized::is_loaded)
    }

    /// Fill the cache with `load` unless it is already filled.
    ///
    /// The loading flag is set for the duration of `load` and cleared on
    /// every exit path, including cancellation of the returned future.
    pub async fn fetch_with<F, Fut>(&self, load: F) -> FetchOutcome
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, TransportFailure>>,
    {
        if self.is_cached() {
            return FetchOutcome::Cached;
        }

        let _in_flight = self.in_flight.lock().await;
        if self.is_cached() {
            debug!(store = self.name, "Filled by a concurrent fetch");
            return FetchOutcome::Cached;
        }

        {
            let mut state = self.write();
            state.loading = true;
            state.error = None;
        }
        let _loading = LoadingGuard { store: self };

        match load().await {
            Ok(value) => {
                self.write().value = Some(value);
                debug!(store = self.name, "Loaded");
                FetchOutcome::Loaded
            }
            Err(e) => {
                warn!(store = self.name, error = %e, "Failed to fetch reference data");
                self.write().error = Some(self.failure_message.to_string());
                FetchOutcome::Failed(self.failure_message.to_string())
            }
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, StoreState<T>> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, StoreState<T>> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}

struct LoadingGuard<'a, T> {
    store: &'a ReferenceStore<T>,
}

impl<T> Drop for LoadingGuard<'_, T> {
    fn drop(&mut self) {
        let mut state = self.store.state.write().unwrap_or_else(PoisonError::into_inner);
        state.loading = false;
    }
}
