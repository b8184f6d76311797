//! Core utilities for the WoT Blitz clans CLI
//!
//! - `config`: API configuration from flags and environment variables
//! - `paths`: Session file location and file helpers

pub mod config;
pub mod paths;

// Re-export commonly used items for convenience
pub use config::ApiConfig;
pub use paths::{session_path, write_string};
