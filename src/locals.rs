use crate::client::User;
use crate::state::AppState;
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use axum_extra::extract::CookieJar;

pub const SESSION_COOKIE: &str = "sessionid";

/// Per-request values resolved before any route runs.
#[derive(Debug, Clone, Default)]
pub struct Locals {
    pub user: Option<User>,
}

/// Look up the signed-in user for the request's session cookie.
///
/// A missing cookie, an expired session or an unreachable backend all leave
/// `user` empty; routes decide what an anonymous request may do.
pub async fn resolve_locals(
    State(state): State<AppState>,
    jar: CookieJar,
    mut request: Request,
    next: Next,
) -> Response {
    let user = match jar.get(SESSION_COOKIE).map(|cookie| cookie.value()) {
        Some(session_id) if !session_id.is_empty() => {
            match state.api.fetch_user(session_id).await {
                Ok(user) => Some(user),
                Err(e) => {
                    tracing::warn!(error = %e, "Could not resolve user from session");
                    None
                }
            }
        }
        _ => None,
    };

    request.extensions_mut().insert(Locals { user });
    next.run(request).await
}
