//! Detailed clan information (`clans/info`).

use crate::{
    cli::types::{join_ids, ClanId, FieldList},
    storage::Session,
    wargaming::{ClansMethod, Gateway, QueryParams},
    Result,
};

use super::common::{extra_param, ClanResponse};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InfoParams {
    /// Clans to look up; `None` uses the session's clan.
    pub clan_ids: Option<Vec<ClanId>>,
    /// Include the member list (`extra=members`).
    pub extra: bool,
    pub fields: FieldList,
}

impl InfoParams {
    pub fn to_query(&self, session: Option<&Session>) -> QueryParams {
        let clan_id = match &self.clan_ids {
            Some(ids) => join_ids(ids),
            None => session
                .and_then(|s| s.clan_id)
                .map(|id| id.to_string())
                .unwrap_or_default(),
        };

        QueryParams::new()
            .with("clan_id", clan_id)
            .with("extra", extra_param(self.extra, "members"))
            .with("fields", self.fields.joined())
    }
}

/// Fetch clan details. Never changes the session.
pub async fn info<G: Gateway>(
    gateway: &G,
    params: &InfoParams,
    session: Option<&Session>,
) -> Result<ClanResponse> {
    let data = gateway
        .request(ClansMethod::Info, &params.to_query(session))
        .await?;
    Ok(ClanResponse::unchanged(data))
}
