//! Player clan data (`clans/accountinfo`).

use serde_json::Value;

use crate::{
    cli::types::{join_ids, AccountId, ClanId, FieldList},
    storage::Session,
    wargaming::{ClansMethod, Gateway, QueryParams},
    Result,
};

use super::common::{clan_id_of, extra_param, remember_clan, ClanResponse};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountInfoParams {
    /// Accounts to look up; `None` uses the session's account.
    pub account_ids: Option<Vec<AccountId>>,
    /// Include the owning clan (`extra=clan`).
    pub extra: bool,
    pub fields: FieldList,
}

impl AccountInfoParams {
    /// Accounts actually requested after the session fallback.
    pub fn requested_ids(&self, session: Option<&Session>) -> Vec<AccountId> {
        match &self.account_ids {
            Some(ids) => ids.clone(),
            None => session.and_then(|s| s.account_id).into_iter().collect(),
        }
    }

    pub fn to_query(&self, requested: &[AccountId]) -> QueryParams {
        QueryParams::new()
            .with("account_id", join_ids(requested))
            .with("extra", extra_param(self.extra, "clan"))
            .with("fields", self.fields.joined())
    }
}

/// Fetch clan membership for accounts. A single requested account whose
/// entry names a clan makes that clan the session's clan.
pub async fn account_info<G: Gateway>(
    gateway: &G,
    params: &AccountInfoParams,
    session: Option<&mut Session>,
) -> Result<ClanResponse> {
    let requested = params.requested_ids(session.as_deref());
    let data = gateway
        .request(ClansMethod::AccountInfo, &params.to_query(&requested))
        .await?;

    match session {
        Some(session) => {
            let clan_id = match requested.as_slice() {
                [only] => account_clan_id(&data, *only),
                _ => None,
            };
            Ok(remember_clan(data, clan_id, session))
        }
        None => Ok(ClanResponse::unchanged(data)),
    }
}

/// `data["<account_id>"].clan_id`; the entry is `null` for unknown accounts.
fn account_clan_id(data: &Value, account_id: AccountId) -> Option<ClanId> {
    data.get(account_id.to_string()).and_then(clan_id_of)
}
