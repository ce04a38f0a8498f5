//! Timer record structure

use serde::{Deserialize, Serialize};

/// A single named timer as entered by the user
///
/// The duration is carried opaquely: no unit is attached and no validation is
/// performed, so empty names and negative or non-finite durations pass through
/// untouched. Records are immutable once added to the state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Timer {
    pub name: String,
    pub duration: f64,
}

impl Timer {
    /// Create a new timer record
    pub fn new(name: impl Into<String>, duration: f64) -> Self {
        Self {
            name: name.into(),
            duration,
        }
    }
}
