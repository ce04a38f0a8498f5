//! Presentational components
//!
//! These only read snapshots and invoke the context's named operations; all
//! state lives in the store.

pub mod header;
pub mod timer_card;

// Re-export main types
pub use header::Header;
pub use timer_card::TimerCard;
