//! Background tasks module
//!
//! This module contains tasks that run alongside the console loop.

pub mod render_loop;

// Re-export main functions
pub use render_loop::{render_frame, render_loop_task};
