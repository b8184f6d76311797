//! Wargaming API regions.

use crate::error::ClansError;
use std::fmt;
use std::str::FromStr;

/// Regional API cluster a request is sent to.
///
/// Each region is served from its own top-level domain, e.g.
/// `api.wotblitz.eu` for Europe.
///
/// # Examples
///
/// ```rust
/// use wotblitz_clans::Region;
///
/// let region: Region = "na".parse().unwrap();
/// assert_eq!(region.domain(), "com");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Region {
    #[default]
    Eu,
    Na,
    Asia,
}

impl Region {
    /// Top-level domain of the region's API host.
    pub fn domain(&self) -> &'static str {
        match self {
            Region::Eu => "eu",
            Region::Na => "com",
            Region::Asia => "asia",
        }
    }

    /// Base URL of the `wotb` application API for this region.
    pub fn base_url(&self) -> String {
        format!("https://api.wotblitz.{}/wotb", self.domain())
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Region::Eu => "eu",
            Region::Na => "na",
            Region::Asia => "asia",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for Region {
    type Err = ClansError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "eu" => Ok(Region::Eu),
            "na" | "com" => Ok(Region::Na),
            "asia" => Ok(Region::Asia),
            _ => Err(ClansError::InvalidRegion {
                region: s.to_string(),
            }),
        }
    }
}
