//! Output formatting for operation outcomes.
//!
//! Data goes to stdout as pretty JSON. Containers nested deeper than the
//! writer's depth are collapsed to `"[Object]"` / `"[Array]"` so large member
//! lists stay readable; `--json` prints the complete value instead. Errors
//! and session updates go to stderr.

use std::io::{self, Write};

use serde_json::{Map, Value};

use crate::{commands::Outcome, error::ClansError};

/// Default nesting depth shown for data.
pub const DEFAULT_DEPTH: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Writer {
    pub depth: usize,
    /// Print complete JSON, ignoring `depth`.
    pub json: bool,
}

impl Default for Writer {
    fn default() -> Self {
        Self {
            depth: DEFAULT_DEPTH,
            json: false,
        }
    }
}

impl Writer {
    pub fn new(depth: usize, json: bool) -> Self {
        Self { depth, json }
    }

    pub fn render(&self, value: &Value) -> io::Result<String> {
        let shown = if self.json {
            value.clone()
        } else {
            limit_depth(value, self.depth + 1)
        };
        Ok(serde_json::to_string_pretty(&shown)?)
    }

    /// Write one outcome: data to `out`, errors and session changes to `err`.
    pub fn write<O: Write, E: Write>(
        &self,
        out: &mut O,
        err: &mut E,
        outcome: &Outcome,
    ) -> io::Result<()> {
        match &outcome.result {
            Ok(data) => writeln!(out, "{}", self.render(data)?)?,
            Err(e) => writeln!(err, "Error ({}): {}", outcome.method, describe(e))?,
        }

        if let Some(session) = &outcome.session {
            writeln!(err, "session: {}", serde_json::to_string(session)?)?;
        }

        Ok(())
    }
}

/// Error text, including the offending field for API errors.
fn describe(error: &ClansError) -> String {
    match error {
        ClansError::Api {
            field: Some(field),
            value,
            ..
        } => match value {
            Some(value) => format!("{error} (field {field} = {value:?})"),
            None => format!("{error} (field {field})"),
        },
        _ => error.to_string(),
    }
}

/// Copy `value`, replacing non-empty containers at `remaining == 0` with a marker.
fn limit_depth(value: &Value, remaining: usize) -> Value {
    match value {
        Value::Object(map) if !map.is_empty() => {
            if remaining == 0 {
                return Value::String("[Object]".to_string());
            }
            let limited: Map<String, Value> = map
                .iter()
                .map(|(k, v)| (k.clone(), limit_depth(v, remaining - 1)))
                .collect();
            Value::Object(limited)
        }
        Value::Array(items) if !items.is_empty() => {
            if remaining == 0 {
                return Value::String("[Array]".to_string());
            }
            Value::Array(
                items
                    .iter()
                    .map(|v| limit_depth(v, remaining - 1))
                    .collect(),
            )
        }
        other => other.clone(),
    }
}
