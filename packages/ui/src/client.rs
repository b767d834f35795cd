//! Shared constructors for the API client and the token store.
//!
//! - **Web** (WASM + `web` feature): `localStorage` via [`store::LocalStore`]
//! - **Native**: a file under the data directory via [`store::FileStore`]
//! - **WASM without `web`**: process memory via [`store::MemoryStore`]

use std::time::Duration;

use api::{ApiClient, HttpTransport};

/// The HTTP client every view uses, configured from `API_BASE_URL`.
pub fn make_client() -> ApiClient<HttpTransport> {
    ApiClient::from_env()
}

#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub type PlatformStore = store::LocalStore;
#[cfg(all(target_arch = "wasm32", not(feature = "web")))]
pub type PlatformStore = store::MemoryStore;
#[cfg(not(target_arch = "wasm32"))]
pub type PlatformStore = store::FileStore;

/// Create the platform-appropriate token store.
pub fn make_token_store() -> PlatformStore {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        store::LocalStore::new()
    }
    #[cfg(all(target_arch = "wasm32", not(feature = "web")))]
    {
        store::MemoryStore::new()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        store::FileStore::default_location()
    }
}

/// Longest single timer the browser honours; `setTimeout` delays are i32 milliseconds.
pub const MAX_TIMER_STEP: Duration = Duration::from_millis(i32::MAX as u64);

/// Split `total` into consecutive waits no longer than [`MAX_TIMER_STEP`].
pub fn timer_steps(total: Duration) -> impl Iterator<Item = Duration> {
    let mut remaining = Some(total);
    std::iter::from_fn(move || {
        let left = remaining?;
        let step = left.min(MAX_TIMER_STEP);
        remaining = Some(left - step).filter(|rest| !rest.is_zero());
        Some(step)
    })
}

/// Wait for `duration` on the current platform's timer.
///
/// Long waits (a token expiring weeks out) run as a chain of shorter timers.
pub async fn sleep(duration: Duration) {
    for step in timer_steps(duration) {
        #[cfg(target_arch = "wasm32")]
        gloo_timers::future::sleep(step).await;
        #[cfg(not(target_arch = "wasm32"))]
        tokio::time::sleep(step).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_wait_is_one_step() {
        let steps: Vec<_> = timer_steps(Duration::from_secs(30)).collect();
        assert_eq!(steps, vec![Duration::from_secs(30)]);
        let steps: Vec<_> = timer_steps(Duration::ZERO).collect();
        assert_eq!(steps, vec![Duration::ZERO]);
    }

    #[test]
    fn test_long_wait_is_chunked() {
        // A month-long token outlives a single browser timer
        let total = Duration::from_secs(30 * 24 * 60 * 60);
        let steps: Vec<_> = timer_steps(total).collect();
        assert_eq!(steps.len(), 2);
        assert!(steps.iter().all(|step| *step <= MAX_TIMER_STEP));
        assert_eq!(steps[0], MAX_TIMER_STEP);
        assert_eq!(steps.iter().sum::<Duration>(), total);
    }

    #[test]
    fn test_exact_multiple_has_no_empty_tail() {
        let steps: Vec<_> = timer_steps(MAX_TIMER_STEP * 2).collect();
        assert_eq!(steps, vec![MAX_TIMER_STEP, MAX_TIMER_STEP]);
    }

    #[tokio::test]
    async fn test_sleep_returns_for_short_waits() {
        sleep(Duration::from_millis(1)).await;
        sleep(Duration::ZERO).await;
    }
}
