//! TimerDeck - a reducer-driven state store for named timers
//!
//! This library provides one shared piece of application state (a running flag
//! plus an ordered list of named timers) behind a provider/scope/context pair,
//! updated exclusively through a pure reducer and fanned out to presentational
//! components over a watch channel.

pub mod config;
pub mod repl;
pub mod state;
pub mod store;
pub mod tasks;
pub mod ui;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use state::{Timer, TimersState};
pub use store::{
    Action, ComponentScope, MissingProviderError, TimersContext, TimersProvider, TimersStore,
};
pub use ui::{Header, TimerCard};
pub use utils::signals::shutdown_signal;
