use super::{read_json, session_cookie, ApiClient};
use crate::error::ApiError;
use reqwest::header::{COOKIE, REFERER};
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

pub const CSRF_HEADER: &str = "X-CSRFToken";

/// A lodging as returned by the backend.
///
/// Only `id` and `name` are checked; every field is kept as received so the
/// record can be handed to the page unmodified.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Map<String, Value>", into = "Map<String, Value>")]
pub struct Lodging {
    fields: Map<String, Value>,
}

#[derive(Error, Debug)]
pub enum LodgingShapeError {
    #[error("lodging field `{0}` is missing or not a string")]
    Field(&'static str),
}

impl TryFrom<Map<String, Value>> for Lodging {
    type Error = LodgingShapeError;

    fn try_from(fields: Map<String, Value>) -> Result<Self, Self::Error> {
        for required in ["id", "name"] {
            if !matches!(fields.get(required), Some(Value::String(_))) {
                return Err(LodgingShapeError::Field(required));
            }
        }
        Ok(Self { fields })
    }
}

impl From<Lodging> for Map<String, Value> {
    fn from(lodging: Lodging) -> Self {
        lodging.fields
    }
}

impl ApiClient {
    pub async fn fetch_lodging(
        &self,
        id: &str,
        session_id: Option<&str>,
    ) -> Result<Lodging, ApiError> {
        let mut request = self.http.get(self.url(&["api", "lodging", id, ""]));
        if let Some(cookie) = session_cookie(session_id) {
            request = request.header(COOKIE, cookie);
        }

        read_json(request.send().await?).await
    }

    /// Issue the DELETE and return the backend's success status.
    ///
    /// The raw response is logged at `info`, whatever its status.
    pub async fn delete_lodging(
        &self,
        id: &str,
        session_id: Option<&str>,
        csrf_token: &str,
        referer: &str,
    ) -> Result<StatusCode, ApiError> {
        let cookie = match session_cookie(session_id) {
            Some(session) => format!("{session}; csrftoken={csrf_token}"),
            None => format!("csrftoken={csrf_token}"),
        };

        let response = self
            .http
            .delete(self.url(&["api", "lodging", id]))
            .header(REFERER, referer)
            .header(COOKIE, cookie)
            .header(CSRF_HEADER, csrf_token)
            .send()
            .await?;
        tracing::info!(?response, "Backend answered lodging delete");

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status(status));
        }
        Ok(status)
    }
}
