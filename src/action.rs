use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};

/// Outcome of a form action, decoded into an HTTP response by `IntoResponse`.
#[derive(Debug, Clone, PartialEq)]
pub enum ActionResult {
    Redirect { location: String, status: StatusCode },
    Success { status: StatusCode, body: Option<Value> },
    Failure { status: StatusCode, message: String },
}

impl ActionResult {
    pub fn redirect(status: StatusCode, location: impl Into<String>) -> Self {
        Self::Redirect {
            location: location.into(),
            status,
        }
    }

    pub fn success(status: StatusCode) -> Self {
        Self::Success { status, body: None }
    }

    pub fn failure(status: StatusCode, message: impl Into<String>) -> Self {
        Self::Failure {
            status,
            message: message.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::Redirect { status, .. }
            | Self::Success { status, .. }
            | Self::Failure { status, .. } => *status,
        }
    }
}

impl IntoResponse for ActionResult {
    fn into_response(self) -> Response {
        match self {
            Self::Redirect { location, status } => {
                (status, [(header::LOCATION, location)]).into_response()
            }
            Self::Success {
                status,
                body: Some(body),
            } => (status, Json(body)).into_response(),
            Self::Success { status, body: None } => status.into_response(),
            Self::Failure { status, message } => (
                status,
                Json(json!({ "status": status.as_u16(), "error": message })),
            )
                .into_response(),
        }
    }
}
