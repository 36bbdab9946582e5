use async_trait::async_trait;

use crate::domain::entities::user::User;
use crate::usecase::ports::source::{FetchError, UserSource};

pub struct JsonPlaceholderClient {
    base_url: String,
    client: reqwest::Client,
}

impl JsonPlaceholderClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: reqwest::Client::new(),
        }
    }

    fn users_url(&self) -> String {
        format!("{}/users", self.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl UserSource for JsonPlaceholderClient {
    async fn fetch_users(&self) -> Result<Vec<User>, FetchError> {
        let response = self.client.get(self.users_url()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}
