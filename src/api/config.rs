//! Config File Endpoints

use async_trait::async_trait;

use super::{ConfigApi, HttpClient};
use crate::config::{CONFIG_ACTIVE_PATH, CONFIG_CONTENT_PATH, CONFIG_FILES_PATH, CONFIG_SWITCH_PATH};
use crate::error::ApiError;
use crate::models::{self, ApiReply, ConfigFile};

#[async_trait(?Send)]
impl ConfigApi for HttpClient {
    async fn list_config_files(&self) -> Result<Vec<ConfigFile>, ApiError> {
        let body = self.get_json(CONFIG_FILES_PATH, &[]).await?;
        models::config_files(&body)
    }

    async fn active_config(&self) -> Result<Option<ConfigFile>, ApiError> {
        let body = self.get_json(CONFIG_ACTIVE_PATH, &[]).await?;
        models::active_config(&body)
    }

    async fn switch_config(&self, file_name: &str) -> Result<ApiReply, ApiError> {
        let body = self.post_query(CONFIG_SWITCH_PATH, &[("file_name", file_name)]).await?;
        Ok(serde_json::from_value(body)?)
    }

    async fn config_content(&self, file_name: &str) -> Result<String, ApiError> {
        let body = self.get_json(CONFIG_CONTENT_PATH, &[("file_name", file_name)]).await?;
        models::config_content(&body)
    }
}
