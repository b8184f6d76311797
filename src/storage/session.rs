//! Persisted session: the most recently resolved clan and account ids.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    cli::types::{AccountId, ClanId},
    core::paths::{session_path, write_string},
    error::ClansError,
    Result,
};

/// Ids remembered between invocations so follow-up commands can omit them.
///
/// Stored as `{"clan_id": 42, "account_id": 100}`; either field may be absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clan_id: Option<ClanId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_id: Option<AccountId>,
}

impl Session {
    pub fn new(clan_id: Option<ClanId>, account_id: Option<AccountId>) -> Self {
        Self {
            clan_id,
            account_id,
        }
    }
}

/// Loads and saves a [`Session`] as JSON at a fixed path.
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at `$WOTBLITZ_SESSION` or the per-user default location.
    pub fn from_env() -> Self {
        Self::new(session_path())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the session; a missing or empty file is an empty session.
    pub fn load(&self) -> Result<Session> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no session file, starting empty");
                return Ok(Session::default());
            }
            Err(e) => return Err(self.error(e)),
        };

        if contents.trim().is_empty() {
            return Ok(Session::default());
        }

        let session: Session = serde_json::from_str(&contents).map_err(|e| self.error(e))?;
        debug!(path = %self.path.display(), ?session, "loaded session");
        Ok(session)
    }

    pub fn save(&self, session: &Session) -> Result<()> {
        let json = serde_json::to_string_pretty(session)?;
        write_string(&self.path, &json).map_err(|e| self.error(e))?;
        debug!(path = %self.path.display(), ?session, "saved session");
        Ok(())
    }

    fn error(&self, err: impl std::fmt::Display) -> ClansError {
        ClansError::Session {
            path: self.path.display().to_string(),
            message: err.to_string(),
        }
    }
}
