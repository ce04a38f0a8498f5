//! Status report structure

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::state::Timer;
use crate::store::TimersContext;

/// Snapshot summary printed by the `status` command
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusReport {
    pub is_running: bool,
    pub timers: Vec<Timer>,
    pub timer_count: usize,
    pub uptime: String,
    pub last_action: Option<String>,
    pub last_action_time: Option<DateTime<Utc>>,
}

impl StatusReport {
    /// Build a report from the current state of the given context
    pub fn from_context(ctx: &TimersContext) -> Self {
        let snapshot = ctx.snapshot();
        let (last_action, last_action_time) = ctx.last_action();

        Self {
            is_running: snapshot.is_running,
            timer_count: snapshot.timer_count(),
            timers: snapshot.timers,
            uptime: ctx.uptime(),
            last_action,
            last_action_time,
        }
    }
}
