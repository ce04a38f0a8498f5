//! Header component with the start/stop control

use crate::store::{ComponentScope, MissingProviderError, TimersContext};

/// Header bar: application title plus one button toggling the running flag
///
/// Purely presentational: it reads `is_running` from the context and invokes
/// the start/stop operations, nothing else.
pub struct Header {
    context: TimersContext,
}

impl Header {
    /// Build the header inside the given scope
    pub fn new(scope: &ComponentScope) -> Result<Self, MissingProviderError> {
        Ok(Self {
            context: scope.timers_context()?,
        })
    }

    /// Label for the toggle button in the current state
    pub fn button_label(&self) -> &'static str {
        if self.context.is_running() {
            "Stop Timers"
        } else {
            "Start Timers"
        }
    }

    /// Handle a click on the toggle button
    pub fn handle_button_click(&self) {
        if self.context.is_running() {
            self.context.stop_timers();
        } else {
            self.context.start_timers();
        }
    }

    /// Render the header as display lines
    pub fn render(&self) -> Vec<String> {
        vec![
            "== TimerDeck ==".to_string(),
            format!("[ {} ]", self.button_label()),
        ]
    }
}
