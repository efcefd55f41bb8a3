//! High-level operations behind each command.
//!
//! This module provides user-facing operations that orchestrate the reading
//! store, the trend analyzer, and the text generator.

pub mod ask;
pub mod history;
pub mod log;

// Re-export commonly used functions
pub use ask::{answer, build_prompt};
pub use history::{history_json, render_history, render_latest};
pub use log::log_reading;
