//! API Configuration
//!
//! Where the panel sends its requests. Defaults to the page's own origin;
//! the host page may point elsewhere with `<meta name="api-base" content="...">`.

pub const BOOKMARKS_PATH: &str = "/api/bookmarks";
pub const CONFIG_FILES_PATH: &str = "/api/config/files";
pub const CONFIG_ACTIVE_PATH: &str = "/api/config/active";
pub const CONFIG_SWITCH_PATH: &str = "/api/config/switch";
pub const CONFIG_CONTENT_PATH: &str = "/api/config/content";

const API_BASE_META: &str = "meta[name=\"api-base\"]";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim().trim_end_matches('/').to_string();
        Self { base_url }
    }

    /// Read the base URL from the host page, falling back to same-origin
    pub fn from_document() -> Self {
        let base = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.query_selector(API_BASE_META).ok().flatten())
            .and_then(|el| el.get_attribute("content"));
        match base {
            Some(base) => Self::new(base),
            None => Self::default(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_same_origin() {
        let config = ApiConfig::default();
        assert_eq!(config.url(BOOKMARKS_PATH), "/api/bookmarks");
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let config = ApiConfig::new(" http://localhost:5000/ ");
        assert_eq!(config.base_url(), "http://localhost:5000");
        assert_eq!(config.url(CONFIG_FILES_PATH), "http://localhost:5000/api/config/files");
    }
}
