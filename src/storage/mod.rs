//! Storage layer for the WoT Blitz clans CLI
//!
//! The only persisted state is the session file:
//! - `session`: the `Session` record and the `SessionStore` that reads/writes it

pub mod session;


pub use session::{Session, SessionStore};
