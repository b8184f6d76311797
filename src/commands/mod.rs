//! Clan operations and the executor that runs one CLI invocation.
//!
//! Each operation builds its query from CLI input plus the loaded session,
//! calls the gateway and reports whether it changed the session. [`execute`]
//! owns the session lifecycle: load once, run, save after a successful
//! update, then hand the outcomes to the writer.

pub mod account_info;
pub mod common;
pub mod glossary;
pub mod info;
pub mod list;


use serde_json::Value;
use tracing::debug;

use crate::{
    storage::{Session, SessionStore},
    wargaming::{ClansMethod, Gateway},
    Result,
};

pub use account_info::{account_info, AccountInfoParams};
pub use common::ClanResponse;
pub use glossary::{glossary, GlossaryParams};
pub use info::{info, InfoParams};
pub use list::{list, ListParams};

/// The session-aware operations; at most one runs per invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClanAction {
    Search(ListParams),
    Info(InfoParams),
    AccountInfo(AccountInfoParams),
}

impl ClanAction {
    pub fn method(&self) -> ClansMethod {
        match self {
            ClanAction::Search(_) => ClansMethod::List,
            ClanAction::Info(_) => ClansMethod::Info,
            ClanAction::AccountInfo(_) => ClansMethod::AccountInfo,
        }
    }
}

/// Everything one run of the CLI asked for.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Invocation {
    pub action: Option<ClanAction>,
    /// Runs after `action`, independently of it.
    pub glossary: Option<GlossaryParams>,
}

impl Invocation {
    pub fn is_empty(&self) -> bool {
        self.action.is_none() && self.glossary.is_none()
    }
}

/// Result of one operation as handed to the output writer.
#[derive(Debug)]
pub struct Outcome {
    pub method: ClansMethod,
    pub result: Result<Value>,
    /// The session after the operation, when the operation changed it.
    pub session: Option<Session>,
}

impl Outcome {
    pub fn is_err(&self) -> bool {
        self.result.is_err()
    }
}

/// Run a single session-aware operation.
pub async fn run_action<G: Gateway>(
    gateway: &G,
    action: &ClanAction,
    session: Option<&mut Session>,
) -> Result<ClanResponse> {
    match action {
        ClanAction::Search(params) => list(gateway, params, session).await,
        ClanAction::Info(params) => info(gateway, params, session.as_deref()).await,
        ClanAction::AccountInfo(params) => account_info(gateway, params, session).await,
    }
}

/// Load the session (fatal on failure), run the requested operations in order
/// and persist the session after an operation updated it.
///
/// Request and save failures become the corresponding [`Outcome`]'s error.
pub async fn execute<G: Gateway>(
    gateway: &G,
    store: Option<&SessionStore>,
    invocation: &Invocation,
) -> Result<Vec<Outcome>> {
    let mut session = store.map(SessionStore::load).transpose()?;
    let mut outcomes = Vec::new();

    if let Some(action) = &invocation.action {
        let method = action.method();
        let outcome = match run_action(gateway, action, session.as_mut()).await {
            Ok(response) => {
                let saved = match (response.session_updated, store, &session) {
                    (true, Some(store), Some(session)) => {
                        Some(store.save(session).map(|()| session.clone()))
                    }
                    _ => None,
                };
                match saved {
                    Some(Err(e)) => Outcome {
                        method,
                        result: Err(e),
                        session: None,
                    },
                    Some(Ok(session)) => Outcome {
                        method,
                        result: Ok(response.data),
                        session: Some(session),
                    },
                    None => Outcome {
                        method,
                        result: Ok(response.data),
                        session: None,
                    },
                }
            }
            Err(e) => {
                debug!(%method, error = %e, "request failed");
                Outcome {
                    method,
                    result: Err(e),
                    session: None,
                }
            }
        };
        outcomes.push(outcome);
    }

    if let Some(params) = &invocation.glossary {
        outcomes.push(Outcome {
            method: ClansMethod::Glossary,
            result: glossary(gateway, params).await.map(|r| r.data),
            session: None,
        });
    }

    Ok(outcomes)
}
