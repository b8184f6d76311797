//! Client for the Wargaming WoT Blitz application API (`clans` section)
//!
//! - `http`: the `Gateway` trait and its reqwest-backed implementation
//! - `types`: method names, query parameters and the response envelope

pub mod http;
pub mod types;

pub use http::{Gateway, HttpGateway};
pub use types::{ClansMethod, QueryParams};
