//! World of Tanks Blitz Clans CLI Library
//!
//! A small Rust library for the Wargaming World of Tanks Blitz `clans` API,
//! used by the `wotblitz-clans` binary.
//!
//! ## Features
//!
//! - **Clan Search**: Find clans by part of their name or tag
//! - **Clan Details**: Fetch detailed clan information, optionally with members
//! - **Player Clan Data**: Look up which clan an account belongs to
//! - **Glossary**: Describe the clan entities exposed by the API
//! - **Session**: Remember the last resolved clan/account id between runs
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use wotblitz_clans::{
//!     commands::{list::{list, ListParams}},
//!     core::config::ApiConfig,
//!     storage::Session,
//!     wargaming::http::HttpGateway,
//! };
//!
//! # async fn example() -> wotblitz_clans::Result<()> {
//! let config = ApiConfig::resolve(None, None, None)?;
//! let gateway = HttpGateway::new(&config)?;
//! let mut session = Session::default();
//!
//! let params = ListParams {
//!     search: "Alpha".to_string(),
//!     limit: Some(5),
//!     page_no: 1,
//!     fields: Default::default(),
//! };
//!
//! let response = list(&gateway, &params, Some(&mut session)).await?;
//! println!("{}", response.data);
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! Set your Wargaming application id to avoid passing it in every command:
//! ```bash
//! export WOTBLITZ_APPLICATION_ID=0123456789abcdef
//! ```

pub mod cli;
pub mod commands;
pub mod core;
pub mod error;
pub mod output;
pub mod storage;
pub mod wargaming;

// Re-export commonly used types
pub use cli::types::{AccountId, ClanId, FieldList, IdList, Region};
pub use error::{ClansError, Result};
pub use storage::{Session, SessionStore};

pub const APPLICATION_ID_ENV_VAR: &str = "WOTBLITZ_APPLICATION_ID";
pub const REGION_ENV_VAR: &str = "WOTBLITZ_REGION";
pub const LANGUAGE_ENV_VAR: &str = "WOTBLITZ_LANGUAGE";
pub const API_URL_ENV_VAR: &str = "WOTBLITZ_API_URL";
pub const SESSION_ENV_VAR: &str = "WOTBLITZ_SESSION";
