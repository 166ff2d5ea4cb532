//! Utility functions for the command-line front end.
//!
//! ## Modules
//!
//! - [`app_data`] - User configuration (`<config_dir>/sfx/config.json`)
//! - [`input`] - Loading input texts (memory-mapped files, inline text)
//! - [`progress`] - Progress bar, no-op without the `progress` feature

pub mod app_data;
pub mod input;
pub mod progress;

pub use app_data::*;
pub use input::*;
