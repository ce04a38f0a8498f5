//! State management core
//!
//! This module contains the reducer, the store owning the live snapshot, and
//! the provider/scope/context wiring consumers go through.

pub mod action;
pub mod context;
pub mod reducer;
pub mod timers_store;

// Re-export main types
pub use action::Action;
pub use context::{ComponentScope, MissingProviderError, TimersContext, TimersProvider};
pub use reducer::reduce;
pub use timers_store::TimersStore;
