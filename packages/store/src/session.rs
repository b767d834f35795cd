//! # Session manager — persisted token plus one auto-logout timer
//!
//! [`SessionManager`] is the single owner of the admin session. It reads the
//! token from a [`TokenStore`], decides from the JWT `exp` claim whether the
//! session is still live, and keeps at most one pending expiry timer.
//!
//! Timers are created by the caller (the UI spawns a task that sleeps and then
//! calls [`SessionManager::expire`]) and handed back as a [`TimerHandle`]. The
//! manager cancels the previous handle before storing a new one, so repeated
//! `init`/`login` calls never stack timers.
//!
//! | Token state | `init` result | Timer |
//! |-------------|---------------|-------|
//! | missing | [`SessionStatus::Anonymous`] | none |
//! | `exp` in the past | [`SessionStatus::Expired`], token cleared | none |
//! | `exp` in the future | [`SessionStatus::Active`] | fires at `exp` |
//! | no decodable `exp` | [`SessionStatus::Active`] | none |

use std::time::Duration;

use crate::claims::token_expiry;
use crate::token::TokenStore;

/// A scheduled action that can be called off.
pub trait TimerHandle {
    fn cancel(self);
}

/// What to do about a token at a given instant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExpiryPlan {
    NoToken,
    Expired,
    /// Valid, with no known expiry.
    Indefinite,
    /// Valid until `at`, which is `after` from now.
    ExpiresAt { at: u64, after: Duration },
}

pub fn plan_expiry(token: Option<&str>, now: u64) -> ExpiryPlan {
    let Some(token) = token.filter(|t| !t.trim().is_empty()) else {
        return ExpiryPlan::NoToken;
    };
    match token_expiry(token) {
        None => ExpiryPlan::Indefinite,
        Some(exp) if exp <= now => ExpiryPlan::Expired,
        Some(exp) => ExpiryPlan::ExpiresAt {
            at: exp,
            after: Duration::from_secs(exp - now),
        },
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionStatus {
    Anonymous,
    Expired,
    Active { expires_at: Option<u64> },
}

impl SessionStatus {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, SessionStatus::Active { .. })
    }
}

/// Owner of the persisted token and its expiry timer.
pub struct SessionManager<S: TokenStore, H: TimerHandle> {
    store: S,
    timer: Option<H>,
}

impl<S: TokenStore, H: TimerHandle> SessionManager<S, H> {
    pub fn new(store: S) -> Self {
        Self { store, timer: None }
    }

    pub fn token(&self) -> Option<String> {
        self.store.load()
    }

    pub fn has_pending_timer(&self) -> bool {
        self.timer.is_some()
    }

    /// Whether the stored token is usable at `now`.
    pub fn is_authenticated(&self, now: u64) -> bool {
        matches!(
            plan_expiry(self.token().as_deref(), now),
            ExpiryPlan::Indefinite | ExpiryPlan::ExpiresAt { .. }
        )
    }

    /// Inspect the stored token and (re)schedule the expiry timer.
    ///
    /// `schedule` is called at most once, with the delay until expiry.
    pub fn init(&mut self, now: u64, schedule: impl FnOnce(Duration) -> H) -> SessionStatus {
        self.cancel_timer();
        match plan_expiry(self.token().as_deref(), now) {
            ExpiryPlan::NoToken => SessionStatus::Anonymous,
            ExpiryPlan::Expired => {
                tracing::info!("Stored session token has expired");
                self.store.clear();
                SessionStatus::Expired
            }
            ExpiryPlan::Indefinite => SessionStatus::Active { expires_at: None },
            ExpiryPlan::ExpiresAt { at, after } => {
                tracing::debug!("Session expires in {}s", after.as_secs());
                self.timer = Some(schedule(after));
                SessionStatus::Active {
                    expires_at: Some(at),
                }
            }
        }
    }

    /// Persist a freshly issued token and schedule its expiry.
    pub fn login(
        &mut self,
        token: &str,
        now: u64,
        schedule: impl FnOnce(Duration) -> H,
    ) -> SessionStatus {
        self.store.save(token);
        self.init(now, schedule)
    }

    /// Clear the token and cancel any pending timer.
    pub fn logout(&mut self) {
        self.cancel_timer();
        self.store.clear();
    }

    /// Called by the expiry timer itself: clears the token without cancelling the
    /// (already firing) timer.
    pub fn expire(&mut self) {
        self.timer = None;
        self.store.clear();
    }

    fn cancel_timer(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.cancel();
        }
    }
}

/// Seconds since the Unix epoch, from the platform clock.
pub fn unix_now() -> u64 {
    #[cfg(target_arch = "wasm32")]
    {
        (js_sys::Date::now() / 1000.0) as u64
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::claims::make_token;
    use crate::memory::MemoryStore;
    use serde_json::json;
    use std::cell::RefCell;
    use std::rc::Rc;

    const NOW: u64 = 1_800_000_000;

    /// Records cancellations into a shared log.
    struct TestTimer {
        id: u32,
        cancelled: Rc<RefCell<Vec<u32>>>,
    }

    impl TimerHandle for TestTimer {
        fn cancel(self) {
            self.cancelled.borrow_mut().push(self.id);
        }
    }

    fn token_expiring_at(exp: u64) -> String {
        make_token(&json!({"sub": "admin", "exp": exp}))
    }

    #[test]
    fn test_plan_expiry() {
        assert_eq!(plan_expiry(None, NOW), ExpiryPlan::NoToken);
        assert_eq!(plan_expiry(Some(""), NOW), ExpiryPlan::NoToken);
        assert_eq!(plan_expiry(Some("opaque"), NOW), ExpiryPlan::Indefinite);
        assert_eq!(
            plan_expiry(Some(&token_expiring_at(NOW)), NOW),
            ExpiryPlan::Expired
        );
        assert_eq!(
            plan_expiry(Some(&token_expiring_at(NOW + 90)), NOW),
            ExpiryPlan::ExpiresAt {
                at: NOW + 90,
                after: Duration::from_secs(90)
            }
        );
    }

    #[test]
    fn test_init_without_token() {
        let mut manager: SessionManager<_, TestTimer> = SessionManager::new(MemoryStore::new());
        let status = manager.init(NOW, |_| panic!("no timer expected"));
        assert_eq!(status, SessionStatus::Anonymous);
        assert!(!manager.has_pending_timer());
    }

    #[test]
    fn test_init_expired_clears_token() {
        let store = MemoryStore::with_token(&token_expiring_at(NOW - 1));
        let mut manager: SessionManager<_, TestTimer> = SessionManager::new(store.clone());
        let status = manager.init(NOW, |_| panic!("no timer expected"));
        assert_eq!(status, SessionStatus::Expired);
        assert!(store.load().is_none());
        assert!(!manager.is_authenticated(NOW));
    }

    #[test]
    fn test_init_schedules_at_expiry() {
        let store = MemoryStore::with_token(&token_expiring_at(NOW + 3600));
        let cancelled = Rc::new(RefCell::new(Vec::new()));
        let mut manager = SessionManager::new(store);

        let mut scheduled = None;
        let status = manager.init(NOW, |after| {
            scheduled = Some(after);
            TestTimer {
                id: 1,
                cancelled: cancelled.clone(),
            }
        });

        assert_eq!(scheduled, Some(Duration::from_secs(3600)));
        assert_eq!(
            status,
            SessionStatus::Active {
                expires_at: Some(NOW + 3600)
            }
        );
        assert!(manager.has_pending_timer());
        assert!(manager.is_authenticated(NOW));
    }

    #[test]
    fn test_reinit_replaces_timer() {
        let store = MemoryStore::with_token(&token_expiring_at(NOW + 60));
        let cancelled = Rc::new(RefCell::new(Vec::new()));
        let mut manager = SessionManager::new(store);

        for id in 1..=3 {
            let log = cancelled.clone();
            manager.init(NOW, move |_| TestTimer { id, cancelled: log });
        }

        // Every earlier timer was cancelled; only the last is pending.
        assert_eq!(*cancelled.borrow(), vec![1, 2]);
        assert!(manager.has_pending_timer());
    }

    #[test]
    fn test_login_and_logout() {
        let store = MemoryStore::new();
        let cancelled = Rc::new(RefCell::new(Vec::new()));
        let mut manager = SessionManager::new(store.clone());

        let token = token_expiring_at(NOW + 600);
        let log = cancelled.clone();
        let status = manager.login(&token, NOW, move |_| TestTimer { id: 7, cancelled: log });
        assert!(status.is_authenticated());
        assert_eq!(store.load(), Some(token));

        manager.logout();
        assert!(store.load().is_none());
        assert!(!manager.has_pending_timer());
        assert_eq!(*cancelled.borrow(), vec![7]);
    }

    #[test]
    fn test_expire_clears_without_cancel() {
        let store = MemoryStore::with_token(&token_expiring_at(NOW + 5));
        let cancelled = Rc::new(RefCell::new(Vec::new()));
        let mut manager = SessionManager::new(store.clone());
        let log = cancelled.clone();
        manager.init(NOW, move |_| TestTimer { id: 1, cancelled: log });

        manager.expire();
        assert!(store.load().is_none());
        assert!(!manager.has_pending_timer());
        assert!(cancelled.borrow().is_empty());
    }
}
