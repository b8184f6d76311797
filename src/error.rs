//! Error types for the WoT Blitz clans CLI

use thiserror::Error;


pub type Result<T> = std::result::Result<T, ClansError>;

#[derive(Error, Debug)]
pub enum ClansError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Application ID not provided and {env_var} environment variable not set")]
    MissingApplicationId { env_var: String },

    #[error("Failed to parse id: {0}")]
    InvalidId(#[from] std::num::ParseIntError),

    #[error("Invalid region: {region} (expected eu, na or asia)")]
    InvalidRegion { region: String },

    #[error("API error {code}: {message}")]
    Api {
        code: u16,
        message: String,
        field: Option<String>,
        value: Option<String>,
    },

    #[error("Session error ({path}): {message}")]
    Session { path: String, message: String },
}
