//! Clan entity glossary (`clans/glossary`).

use crate::{
    cli::types::FieldList,
    wargaming::{ClansMethod, Gateway, QueryParams},
    Result,
};

use super::common::ClanResponse;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GlossaryParams {
    pub fields: FieldList,
}

impl GlossaryParams {
    pub fn to_query(&self) -> QueryParams {
        QueryParams::new().with("fields", self.fields.joined())
    }
}

pub async fn glossary<G: Gateway>(gateway: &G, params: &GlossaryParams) -> Result<ClanResponse> {
    let data = gateway
        .request(ClansMethod::Glossary, &params.to_query())
        .await?;
    Ok(ClanResponse::unchanged(data))
}
