//! ID types for the WoT Blitz clans API.

use crate::error::{ClansError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type-safe wrapper for clan IDs.
///
/// Keeps clan ids from being mixed up with account ids or other numbers.
///
/// # Examples
///
/// ```rust
/// use wotblitz_clans::ClanId;
///
/// let clan_id = ClanId::new(42);
/// assert_eq!(clan_id.as_u64(), 42);
/// assert_eq!(clan_id.to_string(), "42");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClanId(pub u64);

impl ClanId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for ClanId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ClanId {
    type Err = ClansError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self(s.trim().parse()?))
    }
}

/// Type-safe wrapper for player account IDs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountId(pub u64);

impl AccountId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for AccountId {
    type Err = ClansError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self(s.trim().parse()?))
    }
}

/// Comma-separated list of ids as given on the command line: `1,2, 3`.
///
/// Empty segments are skipped, so `"1,,2,"` parses to `[1, 2]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdList<T>(pub Vec<T>);

impl<T> IdList<T> {
    pub fn into_vec(self) -> Vec<T> {
        self.0
    }
}

impl<T: FromStr<Err = ClansError>> FromStr for IdList<T> {
    type Err = ClansError;

    fn from_str(s: &str) -> Result<Self> {
        s.split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(str::parse)
            .collect::<Result<Vec<T>>>()
            .map(IdList)
    }
}

/// Join any displayable ids with commas.
pub fn join_ids<T: fmt::Display>(ids: &[T]) -> String {
    ids.iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(",")
}
