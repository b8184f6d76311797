use serde::Deserialize;
use serde_json::Value;
use std::fmt;

use crate::error::{ClansError, Result};


/// Methods of the `clans` API section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClansMethod {
    List,
    Info,
    AccountInfo,
    Glossary,
}

impl ClansMethod {
    /// Path segment used in `/clans/{method}/`.
    pub fn as_str(&self) -> &'static str {
        match self {
            ClansMethod::List => "list",
            ClansMethod::Info => "info",
            ClansMethod::AccountInfo => "accountinfo",
            ClansMethod::Glossary => "glossary",
        }
    }
}

impl fmt::Display for ClansMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Flat, ordered query parameters for one API call.
///
/// Values are kept even when empty; `clan_id=` is a meaningful request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams(Vec<(String, String)>);

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: &str, value: impl ToString) -> Self {
        self.0.push((key.to_string(), value.to_string()));
        self
    }

    /// Add `key` only when a value is present.
    pub fn with_opt<T: ToString>(self, key: &str, value: Option<T>) -> Self {
        match value {
            Some(v) => self.with(key, v),
            None => self,
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn pairs(&self) -> &[(String, String)] {
        &self.0
    }
}

/// `"ok"` / `"error"` marker on every response
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApiStatus {
    Ok,
    Error,
}

/// Error object of a failed call, e.g.
/// `{"code": 407, "message": "INVALID_SEARCH", "field": "search", "value": "a"}`
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub code: u16,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub field: Option<String>,
    #[serde(default)]
    pub value: Option<Value>,
}

impl From<ApiErrorBody> for ClansError {
    fn from(body: ApiErrorBody) -> Self {
        let value = body.value.and_then(|v| match v {
            Value::Null => None,
            Value::String(s) => Some(s),
            other => Some(other.to_string()),
        });

        ClansError::Api {
            code: body.code,
            message: body.message,
            field: body.field,
            value,
        }
    }
}

/// Top-level envelope wrapping every API response
#[derive(Debug, Deserialize)]
pub struct ApiEnvelope {
    pub status: ApiStatus,
    #[serde(default)]
    pub meta: Option<Value>,
    #[serde(default)]
    pub data: Value,
    #[serde(default)]
    pub error: Option<ApiErrorBody>,
}

impl ApiEnvelope {
    /// Unwrap `data`, or turn the error body into [`ClansError::Api`].
    pub fn into_data(self) -> Result<Value> {
        match self.status {
            ApiStatus::Ok => Ok(self.data),
            ApiStatus::Error => Err(self
                .error
                .map(ClansError::from)
                .unwrap_or_else(|| ClansError::Api {
                    code: 0,
                    message: "UNKNOWN_ERROR".to_string(),
                    field: None,
                    value: None,
                })),
        }
    }
}
