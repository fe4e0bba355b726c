//! Thin client over the backend REST API.
//!
//! Every call forwards the caller's `sessionid` cookie verbatim; the backend
//! owns authentication and CSRF validation.

pub mod auth;
pub mod csrf;
pub mod lodging;

use crate::config::Config;
use crate::error::ApiError;
use reqwest::{Response, Url};
use serde::de::DeserializeOwned;

pub use auth::User;
pub use lodging::Lodging;

#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base: Url,
}

impl ApiClient {
    pub fn new(config: &Config) -> Self {
        Self {
            http: reqwest::Client::new(),
            base: config.endpoint.clone(),
        }
    }

    /// Append `segments` to the base URL, percent-encoding each one.
    /// A trailing empty segment produces a trailing slash.
    fn url(&self, segments: &[&str]) -> Url {
        let mut url = self.base.clone();
        // `Config` only accepts URLs that can be a base
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }
}

fn session_cookie(session_id: Option<&str>) -> Option<String> {
    session_id.map(|sid| format!("sessionid={sid}"))
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status();
    if !status.is_success() {
        return Err(ApiError::Status(status));
    }
    let body = response.bytes().await?;
    Ok(serde_json::from_slice(&body)?)
}
