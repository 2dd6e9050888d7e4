//! Frontend Models
//!
//! Wire types exchanged with the bookmark server, plus the parsers that turn
//! raw response bodies into the names shown in the dropdowns.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ApiError;

/// Status string the config endpoints use for success
pub const STATUS_SUCCESS: &str = "success";

/// `code` the bookmark endpoint uses for success
pub const CODE_OK: u16 = 200;

/// Bookmark to create (`POST /api/bookmarks` body)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookmarkSubmission {
    pub group_name: String,
    pub service_name: String,
    pub abbr: String,
    pub url: String,
}

/// Result of a write request: `{code, message}` or `{status, message}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiReply {
    #[serde(default)]
    pub code: Option<u16>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub message: String,
}

impl ApiReply {
    pub fn is_success(&self) -> bool {
        self.code == Some(CODE_OK) || self.status.as_deref() == Some(STATUS_SUCCESS)
    }
}

/// Config file entry from `GET /api/config/files`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigFile {
    pub name: String,
    #[serde(default)]
    pub size: Option<String>,
    #[serde(default)]
    pub modified: Option<String>,
    #[serde(default)]
    pub path: Option<String>,
}

impl ConfigFile {
    /// One-line description, e.g. `home.yaml (1.2 KB, 2024-05-01 10:00)`
    pub fn summary(&self) -> String {
        let details: Vec<&str> = [self.size.as_deref(), self.modified.as_deref()]
            .into_iter()
            .flatten()
            .collect();
        if details.is_empty() {
            self.name.clone()
        } else {
            format!("{} ({})", self.name, details.join(", "))
        }
    }
}

/// Group names from the flat-list shape: `[{"<group>": ...}, ...]`.
///
/// Each entry must be an object with exactly one key; the key is the name.
/// Order is the server's.
pub fn group_names(body: &Value) -> Result<Vec<String>, ApiError> {
    let entries = body
        .as_array()
        .ok_or_else(|| ApiError::Malformed("bookmark groups: expected a list".into()))?;

    entries
        .iter()
        .enumerate()
        .map(|(i, entry)| -> Result<String, ApiError> {
            let map = entry
                .as_object()
                .ok_or_else(|| ApiError::Malformed(format!("bookmark groups[{}]: expected an object", i)))?;
            let mut keys = map.keys();
            match (keys.next(), keys.next()) {
                (Some(name), None) => Ok(name.clone()),
                _ => Err(ApiError::Malformed(format!(
                    "bookmark groups[{}]: expected exactly one key, found {}",
                    i,
                    map.len()
                ))),
            }
        })
        .collect()
}

/// Unwrap the `{status: "success", data: ...}` envelope and return `data`
fn envelope_data<'a>(body: &'a Value, what: &str) -> Result<&'a Value, ApiError> {
    let status = body.get("status").and_then(Value::as_str);
    if status != Some(STATUS_SUCCESS) {
        return Err(ApiError::Malformed(format!(
            "{}: status is {}",
            what,
            status.unwrap_or("missing")
        )));
    }
    Ok(body.get("data").unwrap_or(&Value::Null))
}

/// Config files from `{status: "success", data: [{name, ...}]}`
pub fn config_files(body: &Value) -> Result<Vec<ConfigFile>, ApiError> {
    let data = envelope_data(body, "config files")?;
    if !data.is_array() {
        return Err(ApiError::Malformed("config files: data is not a list".into()));
    }
    Ok(serde_json::from_value(data.clone())?)
}

/// Active config from `{status: "success", data: {...} | null}`
pub fn active_config(body: &Value) -> Result<Option<ConfigFile>, ApiError> {
    let data = envelope_data(body, "active config")?;
    if data.is_null() {
        return Ok(None);
    }
    Ok(Some(serde_json::from_value(data.clone())?))
}

/// File text from `{status: "success", data: "<text>"}`
pub fn config_content(body: &Value) -> Result<String, ApiError> {
    envelope_data(body, "config content")?
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| ApiError::Malformed("config content: data is not a string".into()))
}

/// Human-readable text out of an error body.
///
/// Understands `{"detail": ...}`, `{"error": ..., "details": ...}` and
/// `{"message": ...}`. Returns `None` when nothing usable is present.
pub fn error_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;

    if let Some(detail) = value.get("detail") {
        return Some(match detail.as_str() {
            Some(s) => s.to_string(),
            None => detail.to_string(),
        });
    }
    if let Some(error) = value.get("error").and_then(Value::as_str) {
        return Some(match value.get("details").and_then(Value::as_str) {
            Some(details) => format!("{}: {}", error, details),
            None => error.to_string(),
        });
    }
    value.get("message").and_then(Value::as_str).map(str::to_string)
}
