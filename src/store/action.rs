//! State transition actions

use crate::state::Timer;

/// A tagged request to transition the timers state
///
/// This is a closed set: the reducer matches it exhaustively, so every variant
/// added here forces a decision about its transition. Consumers never build
/// actions directly; they go through the named operations on
/// [`TimersContext`](crate::store::TimersContext).
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Set the global running flag
    StartTimers,
    /// Clear the global running flag
    StopTimers,
    /// Append one timer record to the list
    AddTimer(Timer),
}

impl Action {
    /// Short tag used for last-action tracking and logging
    pub fn tag(&self) -> &'static str {
        match self {
            Action::StartTimers => "start-timers",
            Action::StopTimers => "stop-timers",
            Action::AddTimer(_) => "add-timer",
        }
    }
}
