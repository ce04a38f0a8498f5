//! Timer card component

use crate::state::Timer;

/// Read-only card rendering one timer record's name and duration
pub struct TimerCard<'a> {
    timer: &'a Timer,
}

impl<'a> TimerCard<'a> {
    /// Build a card for one timer record
    pub fn new(timer: &'a Timer) -> Self {
        Self { timer }
    }

    /// Render the card as display lines
    pub fn render(&self) -> Vec<String> {
        vec![
            format!("* {}", self.timer.name),
            format!("  duration: {}", self.timer.duration),
        ]
    }
}
