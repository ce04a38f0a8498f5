//! Store owning the live state snapshot

use std::{
    sync::{Mutex, PoisonError},
    time::Instant,
};

use chrono::{DateTime, Utc};
use tokio::sync::watch;
use tracing::{debug, warn};

use crate::state::TimersState;

use super::{reduce, Action};

/// Owner of the current [`TimersState`] and the dispatch entry point
///
/// The store is the only writer. Every dispatched action runs through the
/// reducer, the resulting snapshot replaces the previous one wholesale, and the
/// new value is published on a watch channel so renderers can pick it up on
/// their next pass. Reads always reflect the latest reduced state.
#[derive(Debug)]
pub struct TimersStore {
    /// Current state snapshot
    state: Mutex<TimersState>,
    /// Tag of the last dispatched action
    last_action: Mutex<Option<String>>,
    /// When the last action was dispatched
    last_action_time: Mutex<Option<DateTime<Utc>>>,
    /// When the store was created
    start_time: Instant,
    /// Publication channel for state snapshots
    snapshot_tx: watch::Sender<TimersState>,
    /// Keep one receiver alive to prevent channel closure
    _snapshot_rx: watch::Receiver<TimersState>,
}

impl TimersStore {
    /// Create a new store holding the initial state
    pub fn new() -> Self {
        let initial = TimersState::new();
        let (snapshot_tx, snapshot_rx) = watch::channel(initial.clone());

        Self {
            state: Mutex::new(initial),
            last_action: Mutex::new(None),
            last_action_time: Mutex::new(None),
            start_time: Instant::now(),
            snapshot_tx,
            _snapshot_rx: snapshot_rx,
        }
    }

    /// Run an action through the reducer and publish the new snapshot
    ///
    /// Synchronous from the caller's perspective: when this returns, reads see
    /// the new state. Subscribers observe it on their next receive.
    pub fn dispatch(&self, action: Action) {
        // A poisoned lock still holds a valid snapshot, so take it.
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);

        let next = reduce(&state, &action);
        debug!(
            "Dispatched {}: is_running={}, timers={}",
            action.tag(),
            next.is_running,
            next.timer_count()
        );
        *state = next.clone();
        drop(state); // Release the lock before notifying

        let mut last_action = self
            .last_action
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        *last_action = Some(action.tag().to_string());
        drop(last_action);

        let mut last_time = self
            .last_action_time
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        *last_time = Some(Utc::now());
        drop(last_time);

        // Cannot happen while the keepalive receiver exists
        if let Err(e) = self.snapshot_tx.send(next) {
            warn!("Failed to publish state snapshot: {}", e);
        }
    }

    /// Get a clone of the current state snapshot
    pub fn snapshot(&self) -> TimersState {
        self.state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Subscribe to published state snapshots
    pub fn subscribe(&self) -> watch::Receiver<TimersState> {
        self.snapshot_tx.subscribe()
    }

    /// Get the last dispatched action tag and its timestamp
    pub fn last_action(&self) -> (Option<String>, Option<DateTime<Utc>>) {
        let last_action = self
            .last_action
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();
        let last_action_time = *self
            .last_action_time
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        (last_action, last_action_time)
    }

    /// Calculate store uptime as a formatted string
    pub fn uptime(&self) -> String {
        let duration = self.start_time.elapsed();
        let hours = duration.as_secs() / 3600;
        let minutes = (duration.as_secs() % 3600) / 60;
        let seconds = duration.as_secs() % 60;

        if hours > 0 {
            format!("{}h {}m {}s", hours, minutes, seconds)
        } else if minutes > 0 {
            format!("{}m {}s", minutes, seconds)
        } else {
            format!("{}s", seconds)
        }
    }
}

impl Default for TimersStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Timer;

    #[test]
    fn dispatch_replaces_the_snapshot() {
        let store = TimersStore::new();
        assert!(!store.snapshot().is_running);

        store.dispatch(Action::StartTimers);
        assert!(store.snapshot().is_running);

        store.dispatch(Action::StopTimers);
        assert!(!store.snapshot().is_running);
    }

    #[test]
    fn reads_are_fresh_after_dispatch_returns() {
        let store = TimersStore::new();
        store.dispatch(Action::AddTimer(Timer::new("Study", 25.0)));
        assert_eq!(store.snapshot().timer_count(), 1);

        store.dispatch(Action::AddTimer(Timer::new("Break", 5.0)));
        let snapshot = store.snapshot();
        assert_eq!(snapshot.timer_count(), 2);
        assert_eq!(snapshot.timers[0].name, "Study");
        assert_eq!(snapshot.timers[1].name, "Break");
    }

    #[test]
    fn last_action_tracks_the_most_recent_dispatch() {
        let store = TimersStore::new();
        assert_eq!(store.last_action().0, None);

        store.dispatch(Action::StartTimers);
        let (tag, time) = store.last_action();
        assert_eq!(tag.as_deref(), Some("start-timers"));
        assert!(time.is_some());

        store.dispatch(Action::AddTimer(Timer::new("Study", 25.0)));
        assert_eq!(store.last_action().0.as_deref(), Some("add-timer"));
    }

    #[tokio::test]
    async fn subscribers_observe_the_latest_snapshot() {
        let store = TimersStore::new();
        let mut rx = store.subscribe();

        // Burst of dispatches; the watch channel coalesces to the newest value.
        store.dispatch(Action::AddTimer(Timer::new("Study", 25.0)));
        store.dispatch(Action::StartTimers);
        store.dispatch(Action::AddTimer(Timer::new("Break", 5.0)));

        rx.changed().await.expect("sender alive");
        let seen = rx.borrow_and_update().clone();
        assert!(seen.is_running);
        assert_eq!(seen.timer_count(), 2);
    }
}
