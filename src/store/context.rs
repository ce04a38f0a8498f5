//! Provider, component scope, and guarded context accessor

use std::sync::{Arc, Weak};

use chrono::{DateTime, Utc};
use thiserror::Error;
use tokio::sync::watch;
use tracing::info;

use crate::state::{Timer, TimersState};

use super::{Action, TimersStore};

/// Raised when the timers context is looked up outside a provider's lifecycle
///
/// This marks a wiring defect, not a runtime condition: the accessor never
/// falls back to a placeholder value, because a silent default would hide the
/// missing provider from whoever broke the tree construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("timers context requested outside of an active TimersProvider scope")]
pub struct MissingProviderError;

/// Root owner of the timers store
///
/// Constructed once when the component tree is built. Components never receive
/// the store itself; they receive a [`ComponentScope`] and resolve their
/// context through it, so the dependency is declared instead of ambient.
#[derive(Debug)]
pub struct TimersProvider {
    store: Arc<TimersStore>,
}

impl TimersProvider {
    /// Create a provider owning a fresh store with the initial state
    pub fn new() -> Self {
        info!("Timers provider created with initial state");
        Self {
            store: Arc::new(TimersStore::new()),
        }
    }

    /// Create the scope handed down to components built under this provider
    pub fn scope(&self) -> ComponentScope {
        ComponentScope {
            store: Some(Arc::downgrade(&self.store)),
        }
    }
}

impl Default for TimersProvider {
    fn default() -> Self {
        Self::new()
    }
}

/// The scope a component is constructed in
///
/// Holds a weak link to the providing store so a scope cannot keep the store
/// alive past its provider.
#[derive(Debug, Clone)]
pub struct ComponentScope {
    store: Option<Weak<TimersStore>>,
}

impl ComponentScope {
    /// A scope with no provider above it
    pub fn detached() -> Self {
        Self { store: None }
    }

    /// Resolve the timers context for this scope
    ///
    /// Fails with [`MissingProviderError`] when the scope was never wired to a
    /// provider or the provider has already been dropped.
    pub fn timers_context(&self) -> Result<TimersContext, MissingProviderError> {
        let weak = self.store.as_ref().ok_or(MissingProviderError)?;
        let store = weak.upgrade().ok_or(MissingProviderError)?;
        Ok(TimersContext { store })
    }
}

/// Resolved handle to the timers store
///
/// Exposes the fixed operation set; consumers never build raw actions or touch
/// state directly. All operations are infallible and non-blocking.
#[derive(Debug, Clone)]
pub struct TimersContext {
    store: Arc<TimersStore>,
}

impl TimersContext {
    /// Append a timer record; the payload is taken as-is, unvalidated
    pub fn add_timer(&self, timer: Timer) {
        self.store.dispatch(Action::AddTimer(timer));
    }

    /// Set the global running flag; no-op if already running
    pub fn start_timers(&self) {
        self.store.dispatch(Action::StartTimers);
    }

    /// Clear the global running flag; no-op if already stopped
    pub fn stop_timers(&self) {
        self.store.dispatch(Action::StopTimers);
    }

    /// Current running flag
    pub fn is_running(&self) -> bool {
        self.store.snapshot().is_running
    }

    /// Current timer list, in insertion order
    pub fn timers(&self) -> Vec<Timer> {
        self.store.snapshot().timers
    }

    /// Clone of the full current snapshot
    pub fn snapshot(&self) -> TimersState {
        self.store.snapshot()
    }

    /// Subscribe to published snapshots for render passes
    pub fn subscribe(&self) -> watch::Receiver<TimersState> {
        self.store.subscribe()
    }

    /// Last dispatched action tag and timestamp
    pub fn last_action(&self) -> (Option<String>, Option<DateTime<Utc>>) {
        self.store.last_action()
    }

    /// Store uptime as a formatted string
    pub fn uptime(&self) -> String {
        self.store.uptime()
    }
}
