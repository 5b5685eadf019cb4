//! Utility modules for the cinema playback controller
//!
//! Shared error types and configuration handling.

pub mod config;
pub mod error;

pub use config::Config;
