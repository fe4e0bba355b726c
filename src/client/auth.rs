use super::{read_json, ApiClient};
use crate::error::ApiError;
use reqwest::header::COOKIE;
use serde::{Deserialize, Serialize};

/// The signed-in user, as reported by `/auth/user-metadata/`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub username: String,
    #[serde(default)]
    pub uuid: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub is_staff: bool,
}

impl ApiClient {
    pub async fn fetch_user(&self, session_id: &str) -> Result<User, ApiError> {
        let response = self
            .http
            .get(self.url(&["auth", "user-metadata", ""]))
            .header(COOKIE, format!("sessionid={session_id}"))
            .send()
            .await?;

        read_json(response).await
    }
}
