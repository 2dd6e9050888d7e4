//! Bookmark Server API
//!
//! HTTP bindings to the bookmark server, organized by endpoint group.
//! Submit flows are generic over the traits; `HttpClient` is the browser implementation.

mod bookmark;
mod config;

use async_trait::async_trait;
use serde_json::Value;

use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::models::{ApiReply, BookmarkSubmission, ConfigFile};

/// `/api/bookmarks`
#[async_trait(?Send)]
pub trait BookmarkApi {
    /// Group names, in the server's order
    async fn list_groups(&self) -> Result<Vec<String>, ApiError>;

    /// Create one bookmark entry
    async fn create_bookmark(&self, submission: &BookmarkSubmission) -> Result<ApiReply, ApiError>;
}

/// `/api/config/*`
#[async_trait(?Send)]
pub trait ConfigApi {
    async fn list_config_files(&self) -> Result<Vec<ConfigFile>, ApiError>;

    /// Currently active config, `None` if the server has none yet
    async fn active_config(&self) -> Result<Option<ConfigFile>, ApiError>;

    /// Make `file_name` the active config
    async fn switch_config(&self, file_name: &str) -> Result<ApiReply, ApiError>;

    /// Raw text of `file_name`
    async fn config_content(&self, file_name: &str) -> Result<String, ApiError>;
}

/// Browser `fetch` client for the bookmark server
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HttpClient {
    config: ApiConfig,
}

impl HttpClient {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }
}

#[cfg(target_arch = "wasm32")]
impl HttpClient {
    async fn get_json(&self, path: &str, query: &[(&str, &str)]) -> Result<Value, ApiError> {
        use gloo_net::http::Request;

        let response = Request::get(&self.config.url(path))
            .query(query.iter().copied())
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        read_json(response).await
    }

    async fn post_json<B: serde::Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<Value, ApiError> {
        use gloo_net::http::Request;

        let response = Request::post(&self.config.url(path))
            .header("Content-Type", JSON_CONTENT_TYPE)
            .body(json_body(body)?)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        read_json(response).await
    }

    async fn post_query(&self, path: &str, query: &[(&str, &str)]) -> Result<Value, ApiError> {
        use gloo_net::http::Request;

        let response = Request::post(&self.config.url(path))
            .query(query.iter().copied())
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        read_json(response).await
    }
}

#[cfg(target_arch = "wasm32")]
async fn read_json(response: gloo_net::http::Response) -> Result<Value, ApiError> {
    let text = response
        .text()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    decode_response(response.ok(), response.status(), response.status_text(), &text)
}

pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Serialize a request body for a JSON POST
fn json_body<B: serde::Serialize + ?Sized>(body: &B) -> Result<String, ApiError> {
    Ok(serde_json::to_string(body)?)
}

/// Classify a finished response.
///
/// Non-2xx becomes `ApiError::Status` carrying the server's own text, or
/// the HTTP status text when the body has none.
fn decode_response(ok: bool, status: u16, status_text: String, text: &str) -> Result<Value, ApiError> {
    if !ok {
        let message = crate::models::error_message(text).unwrap_or(status_text);
        return Err(ApiError::Status { status, message });
    }
    Ok(serde_json::from_str(text)?)
}

// Native builds (unit tests) have no fetch
#[cfg(not(target_arch = "wasm32"))]
impl HttpClient {
    async fn get_json(&self, path: &str, _query: &[(&str, &str)]) -> Result<Value, ApiError> {
        Err(unavailable(&self.config.url(path)))
    }

    async fn post_json<B: serde::Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<Value, ApiError> {
        json_body(body)?;
        Err(unavailable(&self.config.url(path)))
    }

    async fn post_query(&self, path: &str, _query: &[(&str, &str)]) -> Result<Value, ApiError> {
        Err(unavailable(&self.config.url(path)))
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn unavailable(url: &str) -> ApiError {
    ApiError::Network(format!("HTTP is only available in the browser ({})", url))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_success_body_parsed() {
        let value = decode_response(true, 200, "OK".into(), r#"{"code": 200, "message": "created"}"#).unwrap();
        assert_eq!(value, json!({"code": 200, "message": "created"}));
    }

    #[test]
    fn test_error_field_becomes_status_message() {
        let err = decode_response(false, 400, "Bad Request".into(), r#"{"error": "Missing required fields"}"#).unwrap_err();
        assert_eq!(err, ApiError::Status { status: 400, message: "Missing required fields".into() });
    }

    #[test]
    fn test_detail_field_becomes_status_message() {
        let body = r#"{"detail": "config file work.yaml does not exist"}"#;
        let err = decode_response(false, 400, "Bad Request".into(), body).unwrap_err();
        assert_eq!(err, ApiError::Status { status: 400, message: "config file work.yaml does not exist".into() });
    }

    #[test]
    fn test_error_without_json_uses_status_text() {
        let err = decode_response(false, 502, "Bad Gateway".into(), "<html>upstream down</html>").unwrap_err();
        assert_eq!(err, ApiError::Status { status: 502, message: "Bad Gateway".into() });
    }

    #[test]
    fn test_non_json_success_is_decode_error() {
        let err = decode_response(true, 200, "OK".into(), "<html>login</html>").unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[test]
    fn test_post_body_is_json() {
        let submission = BookmarkSubmission {
            group_name: "Work".into(),
            service_name: "GitHub".into(),
            abbr: String::new(),
            url: "https://github.com".into(),
        };
        let text = json_body(&submission).unwrap();
        let parsed: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(
            parsed,
            json!({"group_name": "Work", "service_name": "GitHub", "abbr": "", "url": "https://github.com"})
        );
        assert_eq!(JSON_CONTENT_TYPE, "application/json");
    }
}
