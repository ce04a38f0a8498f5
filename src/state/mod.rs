//! State data shapes
//!
//! This module contains the plain data structures the store manages.

pub mod timer;
pub mod timers_state;

// Re-export main types
pub use timer::Timer;
pub use timers_state::TimersState;
