//! CLI argument definitions and parsing.

pub mod types;


use clap::Parser;
use types::{AccountId, ClanId, FieldList, IdList, Region};

use crate::{
    commands::{
        AccountInfoParams, ClanAction, GlossaryParams, InfoParams, Invocation, ListParams,
    },
    output::DEFAULT_DEPTH,
};

/// Query the World of Tanks Blitz clans API.
///
/// The last clan resolved by `--search` or `--accountinfo` is remembered, so
/// `--info` without ids shows that clan.
#[derive(Debug, Parser)]
#[clap(name = "wotblitz-clans", about = "WoT Blitz clans CLI", version)]
pub struct Clans {
    /// Part of name or tag for clan search (endpoint).
    #[clap(long, short, value_name = "NAME|TAG")]
    pub search: Option<String>,

    /// Detailed clan information (endpoint). Defaults to the session's clan.
    #[clap(long, short, num_args = 0..=1, value_name = "CLAN_IDS")]
    pub info: Option<Option<IdList<ClanId>>>,

    /// Player clan data (endpoint). Defaults to the session's account.
    #[clap(long, short, num_args = 0..=1, value_name = "ACCOUNT_IDS")]
    pub accountinfo: Option<Option<IdList<AccountId>>>,

    /// Information on clan entities (endpoint).
    #[clap(long, short)]
    pub glossary: bool,

    /// Selection of fields: `-f clan_id,tag`.
    #[clap(long, short)]
    pub fields: Option<FieldList>,

    /// Limit the clan search results.
    #[clap(long, short)]
    pub limit: Option<u32>,

    /// Page through clan search results.
    #[clap(long, short, default_value_t = 1)]
    pub page: u32,

    /// Include more information in "info" (members) and "accountinfo" (clan).
    #[clap(long, short)]
    pub extra: bool,

    /// API region: eu | na | asia (or set `WOTBLITZ_REGION`).
    #[clap(long)]
    pub region: Option<Region>,

    /// Wargaming application id (or set `WOTBLITZ_APPLICATION_ID`).
    #[clap(long)]
    pub application_id: Option<String>,

    /// Response language, e.g. `en` (or set `WOTBLITZ_LANGUAGE`).
    #[clap(long)]
    pub language: Option<String>,

    /// Nesting depth shown before collapsing objects.
    #[clap(long, default_value_t = DEFAULT_DEPTH)]
    pub depth: usize,

    /// Print complete JSON output.
    #[clap(long)]
    pub json: bool,

    /// Neither read nor update the session file.
    #[clap(long)]
    pub no_session: bool,

    /// Log requests and session I/O to stderr.
    #[clap(long)]
    pub debug: bool,
}

impl Clans {
    /// Operations selected by the flags.
    ///
    /// Search, info and accountinfo are mutually exclusive, checked in that
    /// order; glossary is independent of them.
    pub fn invocation(&self) -> Invocation {
        let fields = self.fields.clone().unwrap_or_default();

        let action = if let Some(search) = self.search.as_ref().filter(|s| !s.is_empty()) {
            Some(ClanAction::Search(ListParams {
                search: search.clone(),
                limit: self.limit,
                page_no: self.page,
                fields: fields.clone(),
            }))
        } else if let Some(clan_ids) = &self.info {
            Some(ClanAction::Info(InfoParams {
                clan_ids: clan_ids.clone().map(IdList::into_vec),
                extra: self.extra,
                fields: fields.clone(),
            }))
        } else {
            self.accountinfo.as_ref().map(|account_ids| {
                ClanAction::AccountInfo(AccountInfoParams {
                    account_ids: account_ids.clone().map(IdList::into_vec),
                    extra: self.extra,
                    fields: fields.clone(),
                })
            })
        };

        let glossary = self.glossary.then(|| GlossaryParams { fields });

        Invocation { action, glossary }
    }
}
