//! Admin session context: the persisted token, its status, and the expiry timer.

use std::time::Duration;

use dioxus::core::{spawn_forever, Task};
use dioxus::prelude::*;
use store::{unix_now, SessionManager, SessionStatus, TimerHandle};

use crate::client::{make_token_store, sleep, PlatformStore};

/// Where expired or unauthenticated admins are sent.
pub const LOGIN_PATH: &str = "/login";
/// Where a successful login lands.
pub const ADMIN_ROOT: &str = "/admin";

/// The auto-logout task. Cancelling it drops the sleeping future.
pub struct ExpiryTask(Option<Task>);

impl From<Task> for ExpiryTask {
    fn from(task: Task) -> Self {
        Self(Some(task))
    }
}

impl From<Option<Task>> for ExpiryTask {
    fn from(task: Option<Task>) -> Self {
        Self(task)
    }
}

impl TimerHandle for ExpiryTask {
    fn cancel(self) {
        if let Some(task) = self.0 {
            task.cancel();
        }
    }
}

/// Shared session handle, provided by [`SessionProvider`].
#[derive(Clone, Copy)]
pub struct Session {
    status: Signal<SessionStatus>,
    manager: Signal<SessionManager<PlatformStore, ExpiryTask>>,
}

impl Session {
    pub fn status(&self) -> SessionStatus {
        (self.status)()
    }

    pub fn is_authenticated(&self) -> bool {
        self.status().is_authenticated()
    }

    /// The bearer token for admin requests, if signed in.
    pub fn token(&self) -> Option<String> {
        self.manager.peek().token()
    }

    /// Re-read the stored token and reschedule its expiry.
    pub fn init(&self) {
        let session = *self;
        let mut manager = self.manager;
        let status = manager
            .write()
            .init(unix_now(), move |after| schedule_expiry(session, after));
        self.set_status(status);
    }

    /// Persist a new token and schedule its expiry.
    pub fn login(&self, token: &str) {
        let session = *self;
        let mut manager = self.manager;
        let status = manager
            .write()
            .login(token, unix_now(), move |after| schedule_expiry(session, after));
        tracing::info!("Admin session started");
        self.set_status(status);
    }

    pub fn logout(&self) {
        let mut manager = self.manager;
        manager.write().logout();
        tracing::info!("Admin session ended");
        self.set_status(SessionStatus::Anonymous);
    }

    /// Run by the expiry timer: drop the token and go to the login page.
    pub fn expire(&self) {
        let mut manager = self.manager;
        manager.write().expire();
        tracing::info!("Admin session expired");
        self.set_status(SessionStatus::Expired);
        redirect_to_login();
    }

    fn set_status(&self, status: SessionStatus) {
        let mut signal = self.status;
        signal.set(status);
    }
}

fn schedule_expiry(session: Session, after: Duration) -> ExpiryTask {
    // Outlives the view that triggered the login.
    spawn_forever(async move {
        sleep(after).await;
        session.expire();
    })
    .into()
}

fn redirect_to_login() {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(LOGIN_PATH);
        }
    }
}

/// Get the session provided by [`SessionProvider`].
pub fn use_session() -> Session {
    use_context::<Session>()
}

/// Provides [`Session`] to its children and bootstraps it once per app start.
#[component]
pub fn SessionProvider(children: Element) -> Element {
    let status = use_signal(|| SessionStatus::Anonymous);
    let manager = use_signal(|| SessionManager::new(make_token_store()));
    let session = use_context_provider(|| Session { status, manager });

    use_hook(move || session.init());

    rsx! {
        {children}
    }
}
