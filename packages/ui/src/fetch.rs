//! `use_fetch`: a [`FetchLifecycle`] driven by `use_resource`.

use std::future::Future;

use api::{ApiError, FetchLifecycle, FetchState};
use dioxus::prelude::*;

/// Handle to a view's fetch state. Cheap to copy into event handlers.
pub struct Fetch<T: 'static> {
    lifecycle: Signal<FetchLifecycle<T>>,
    reload: Signal<u32>,
}

impl<T: 'static> Clone for Fetch<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static> Copy for Fetch<T> {}

impl<T: Clone + 'static> Fetch<T> {
    /// Current state (subscribes the caller).
    pub fn state(&self) -> FetchState<T> {
        self.lifecycle.read().state().clone()
    }
}

impl<T: 'static> Fetch<T> {
    /// Re-run the request with the same inputs.
    pub fn retry(&self) {
        let mut reload = self.reload;
        reload += 1;
    }

    /// Drop to `Loading` right away, ahead of the resource re-running.
    ///
    /// Anything still in flight is invalidated, so the render that sees new
    /// inputs never shows data for the old ones.
    pub fn restart(&self) {
        let mut lifecycle = self.lifecycle;
        lifecycle.write().start();
    }
}

/// Run `request` when the view mounts, whenever a signal it reads changes, and
/// on [`Fetch::retry`].
///
/// `request` is called synchronously so the signals it reads become
/// dependencies. Returning `None` means a required input is missing: the state
/// goes to `Idle` and nothing is sent.
pub fn use_fetch<T, F, Fut>(mut request: F) -> Fetch<T>
where
    T: 'static,
    F: FnMut() -> Option<Fut> + 'static,
    Fut: Future<Output = Result<T, ApiError>> + 'static,
{
    let mut lifecycle = use_signal(FetchLifecycle::<T>::new);
    let reload = use_signal(|| 0u32);

    let _ = use_resource(move || {
        let _ = reload();
        let pending = request();
        async move {
            let Some(pending) = pending else {
                lifecycle.write().idle();
                return;
            };
            let ticket = lifecycle.write().start();
            let result = pending.await;
            if !lifecycle.write().finish(ticket, result) {
                tracing::debug!("Discarded a superseded fetch completion");
            }
        }
    });

    Fetch { lifecycle, reload }
}

/// [`use_fetch`] keyed by a prop such as a route parameter.
///
/// When `key` differs from the previous render the state goes back to
/// `Loading` in that same render, and `request` runs again with the new key.
pub fn use_fetch_for<K, T, F, Fut>(key: K, mut request: F) -> Fetch<T>
where
    K: Clone + PartialEq + 'static,
    T: 'static,
    F: FnMut(K) -> Option<Fut> + 'static,
    Fut: Future<Output = Result<T, ApiError>> + 'static,
{
    let mut current = use_signal(|| key.clone());
    let fetch = use_fetch(move || request(current()));

    if *current.peek() != key {
        current.set(key);
        fetch.restart();
    }

    fetch
}
