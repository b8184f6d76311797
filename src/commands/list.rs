//! Clan search (`clans/list`).

use serde_json::Value;

use crate::{
    cli::types::{ClanId, FieldList},
    storage::Session,
    wargaming::{ClansMethod, Gateway, QueryParams},
    Result,
};

use super::common::{clan_id_of, remember_clan, ClanResponse};

/// Parameters for a clan search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListParams {
    /// Part of the clan name or tag.
    pub search: String,
    pub limit: Option<u32>,
    pub page_no: u32,
    pub fields: FieldList,
}

impl ListParams {
    pub fn to_query(&self) -> QueryParams {
        QueryParams::new()
            .with("search", &self.search)
            .with_opt("limit", self.limit)
            .with("page_no", self.page_no)
            .with("fields", self.fields.joined())
    }
}

/// Search clans. A search that matches exactly one clan makes it the
/// session's clan.
pub async fn list<G: Gateway>(
    gateway: &G,
    params: &ListParams,
    session: Option<&mut Session>,
) -> Result<ClanResponse> {
    let data = gateway.request(ClansMethod::List, &params.to_query()).await?;

    match session {
        Some(session) => {
            let clan_id = single_clan_id(&data);
            Ok(remember_clan(data, clan_id, session))
        }
        None => Ok(ClanResponse::unchanged(data)),
    }
}

/// Clan id of the only entry in a result list.
fn single_clan_id(data: &Value) -> Option<ClanId> {
    match data.as_array().map(Vec::as_slice) {
        Some([only]) => clan_id_of(only),
        _ => None,
    }
}
