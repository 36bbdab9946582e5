use async_trait::async_trait;
use thiserror::Error;

use crate::domain::entities::user::User;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("unexpected status {0}")]
    Status(reqwest::StatusCode),
    #[error("malformed user payload: {0}")]
    Decode(#[from] serde_json::Error),
}

#[async_trait]
pub trait UserSource: Send + Sync {
    async fn fetch_users(&self) -> Result<Vec<User>, FetchError>;
}
