//! Bookmark Endpoints

use async_trait::async_trait;

use super::{BookmarkApi, HttpClient};
use crate::config::BOOKMARKS_PATH;
use crate::error::ApiError;
use crate::models::{self, ApiReply, BookmarkSubmission};

#[async_trait(?Send)]
impl BookmarkApi for HttpClient {
    async fn list_groups(&self) -> Result<Vec<String>, ApiError> {
        let body = self.get_json(BOOKMARKS_PATH, &[]).await?;
        models::group_names(&body)
    }

    async fn create_bookmark(&self, submission: &BookmarkSubmission) -> Result<ApiReply, ApiError> {
        let body = self.post_json(BOOKMARKS_PATH, submission).await?;
        Ok(serde_json::from_value(body)?)
    }
}
