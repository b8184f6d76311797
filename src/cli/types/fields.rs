//! Response field selection.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Fields to include in an API response, given as `--fields name,tag`.
///
/// The API treats an empty selection as "all fields".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldList(pub Vec<String>);

impl FieldList {
    pub fn new<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(fields.into_iter().map(Into::into).collect())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Comma-joined form sent as the `fields` query parameter.
    pub fn joined(&self) -> String {
        self.0.join(",")
    }
}

impl fmt::Display for FieldList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.joined())
    }
}

impl FromStr for FieldList {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(
            s.split(',').map(str::trim).filter(|field| !field.is_empty()),
        ))
    }
}
