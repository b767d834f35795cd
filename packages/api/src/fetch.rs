//! # Fetch lifecycle — one state machine per view
//!
//! [`FetchState`] is the single source of truth for what a view shows. It
//! starts in `Loading`; each trigger (mount, identifier change, retry) bumps a
//! generation and hands out a [`FetchTicket`]. A completion is applied only if
//! its ticket is still current, so a slow response for an old identifier can
//! never overwrite the state of a newer one.

use crate::error::ApiError;
use crate::models::Record;

#[derive(Clone, Debug, PartialEq)]
pub enum FetchState<T> {
    /// No request was made because a required parameter is missing.
    Idle,
    Loading,
    Loaded(T),
    Failed(ApiError),
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        FetchState::Loading
    }
}

impl<T> FetchState<T> {
    pub fn from_result(result: Result<T, ApiError>) -> Self {
        match result {
            Ok(value) => FetchState::Loaded(value),
            Err(err) => FetchState::Failed(err),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }

    pub fn loaded(&self) -> Option<&T> {
        match self {
            FetchState::Loaded(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&ApiError> {
        match self {
            FetchState::Failed(err) => Some(err),
            _ => None,
        }
    }
}

/// What a detail view renders, in priority order.
#[derive(Clone, Debug, PartialEq)]
pub enum DetailPhase<'a> {
    Loading,
    Error(&'a ApiError),
    NotFound,
    Loaded(&'a Record),
}

impl FetchState<Option<Record>> {
    pub fn detail_phase(&self) -> DetailPhase<'_> {
        match self {
            FetchState::Loading => DetailPhase::Loading,
            FetchState::Failed(err) => DetailPhase::Error(err),
            FetchState::Idle | FetchState::Loaded(None) => DetailPhase::NotFound,
            FetchState::Loaded(Some(record)) => DetailPhase::Loaded(record),
        }
    }
}

/// Identifies one trigger of a fetch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FetchTicket(u64);

/// A [`FetchState`] plus the generation counter that guards it.
#[derive(Clone, Debug, PartialEq)]
pub struct FetchLifecycle<T> {
    state: FetchState<T>,
    generation: u64,
}

impl<T> Default for FetchLifecycle<T> {
    fn default() -> Self {
        Self {
            state: FetchState::Loading,
            generation: 0,
        }
    }
}

impl<T> FetchLifecycle<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &FetchState<T> {
        &self.state
    }

    /// Enter `Loading` for a new trigger, invalidating any request in flight.
    pub fn start(&mut self) -> FetchTicket {
        self.generation += 1;
        self.state = FetchState::Loading;
        FetchTicket(self.generation)
    }

    /// Enter `Idle`: nothing to fetch, and nothing in flight may land.
    pub fn idle(&mut self) {
        self.generation += 1;
        self.state = FetchState::Idle;
    }

    /// Apply a completion. Returns `false` (and changes nothing) for a stale ticket.
    pub fn finish(&mut self, ticket: FetchTicket, result: Result<T, ApiError>) -> bool {
        if ticket.0 != self.generation || !self.state.is_loading() {
            return false;
        }
        self.state = FetchState::from_result(result);
        true
    }
}
