use crate::client::User;
use crate::locals::SESSION_COOKIE;
use axum::http::{header, HeaderMap};
use axum_extra::extract::CookieJar;
use reqwest::Url;

/// Everything a lodging handler needs from the incoming request.
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    /// Route parameter `id`
    pub id: String,
    pub session_id: Option<String>,
    pub user: Option<User>,
    /// `scheme://host` of the request, sent to the backend as `Referer`
    pub origin: String,
}

impl RequestContext {
    pub fn new(id: String, jar: &CookieJar, headers: &HeaderMap) -> Self {
        Self {
            id,
            session_id: jar
                .get(SESSION_COOKIE)
                .map(|cookie| cookie.value().to_string()),
            user: None,
            origin: request_origin(headers),
        }
    }

    pub fn with_user(mut self, user: Option<User>) -> Self {
        self.user = user;
        self
    }

    /// Whether `id` can name a single lodging. `.` and `..` would be
    /// collapsed out of the backend URL, so they count as missing.
    pub fn has_id(&self) -> bool {
        !matches!(self.id.trim(), "" | "." | "..")
    }
}

fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name).and_then(|value| value.to_str().ok())
}

pub fn request_origin(headers: &HeaderMap) -> String {
    let scheme = header_str(headers, "x-forwarded-proto")
        .and_then(|proto| proto.split(',').next())
        .map(str::trim)
        .filter(|proto| !proto.is_empty())
        .unwrap_or("http");
    let host = header_str(headers, header::HOST.as_str()).unwrap_or("localhost");

    format!("{scheme}://{host}")
}

/// Whether the browser says the request came from this site.
///
/// Uses `Origin`, falling back to `Referer`. A request carrying neither is
/// treated as cross-site.
pub fn is_same_origin(headers: &HeaderMap) -> bool {
    let Ok(own) = Url::parse(&request_origin(headers)) else {
        return false;
    };
    let claimed = header_str(headers, header::ORIGIN.as_str())
        .or_else(|| header_str(headers, header::REFERER.as_str()))
        .and_then(|value| Url::parse(value).ok());

    match claimed {
        Some(claimed) => claimed.origin() == own.origin(),
        None => false,
    }
}
