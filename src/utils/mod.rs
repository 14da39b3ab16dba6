//! Shared utilities.
//!
//! - [`config`] - Site configuration (`notegraph.json`) and site root detection
//! - [`progress`] - Build-phase spinners

pub mod config;
pub mod progress;

pub use config::*;
