//! Shared result type and helpers for the clan operations.

use serde_json::Value;
use tracing::info;

use crate::{cli::types::ClanId, storage::Session};

/// Data returned by an operation, plus whether it changed the session.
#[derive(Debug, Clone, PartialEq)]
pub struct ClanResponse {
    pub data: Value,
    pub session_updated: bool,
}

impl ClanResponse {
    pub fn unchanged(data: Value) -> Self {
        Self {
            data,
            session_updated: false,
        }
    }

    pub fn updated(data: Value) -> Self {
        Self {
            data,
            session_updated: true,
        }
    }
}

/// Read `clan_id` off a response entry. Zero and `null` mean "no clan".
pub fn clan_id_of(entry: &Value) -> Option<ClanId> {
    entry
        .get("clan_id")
        .and_then(Value::as_u64)
        .filter(|id| *id != 0)
        .map(ClanId::new)
}

/// Store a newly resolved clan id into the session, when there is one.
pub fn remember_clan(data: Value, clan_id: Option<ClanId>, session: &mut Session) -> ClanResponse {
    match clan_id {
        Some(clan_id) => {
            info!(%clan_id, "session clan updated");
            session.clan_id = Some(clan_id);
            ClanResponse::updated(data)
        }
        None => ClanResponse::unchanged(data),
    }
}

/// Value for an `extra` parameter: the given name when requested, else empty.
pub fn extra_param(requested: bool, name: &str) -> &str {
    if requested {
        name
    } else {
        ""
    }
}
