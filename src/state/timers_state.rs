//! Timers state snapshot structure

use serde::{Deserialize, Serialize};

use super::Timer;

/// One immutable snapshot of the whole application state
///
/// The running flag is global across all timers; there is no per-timer run
/// state. The timer list preserves insertion order, permits duplicates, and
/// only grows (no remove or clear operation exists). Snapshots are replaced
/// wholesale by the reducer, never mutated in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimersState {
    /// Whether the timers are currently running
    pub is_running: bool,
    /// All timers added so far, in insertion order
    pub timers: Vec<Timer>,
}

impl TimersState {
    /// Create the initial state: not running, no timers
    pub fn new() -> Self {
        Self {
            is_running: false,
            timers: Vec::new(),
        }
    }

    /// Number of timers added so far
    pub fn timer_count(&self) -> usize {
        self.timers.len()
    }
}

impl Default for TimersState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_state_is_stopped_and_empty() {
        let state = TimersState::new();
        assert!(!state.is_running);
        assert!(state.timers.is_empty());
        assert_eq!(state.timer_count(), 0);
    }

    #[test]
    fn default_matches_new() {
        assert_eq!(TimersState::default(), TimersState::new());
    }
}
