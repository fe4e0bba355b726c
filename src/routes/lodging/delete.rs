use crate::action::ActionResult;
use crate::client::ApiClient;
use crate::context::{is_same_origin, RequestContext};
use crate::locals::Locals;
use crate::state::AppState;
use axum::{
    extract::{Path, Request, State},
    http::{HeaderMap, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Extension,
};
use axum_extra::extract::CookieJar;

pub const LOGIN_PATH: &str = "/login";
const DELETE_FAILED: &str = "Failed to delete lodging";

pub async fn delete(api: &ApiClient, ctx: &RequestContext) -> ActionResult {
    if ctx.user.is_none() {
        return ActionResult::redirect(StatusCode::FOUND, LOGIN_PATH);
    }
    if !ctx.has_id() {
        return ActionResult::failure(StatusCode::BAD_REQUEST, "Bad request");
    }

    let csrf_token = match api.fetch_csrf_token().await {
        Ok(token) => token,
        Err(e) => {
            tracing::error!(error = %e, "Could not obtain CSRF token to delete lodging {}", ctx.id);
            return ActionResult::failure(e.status(), DELETE_FAILED);
        }
    };

    match api
        .delete_lodging(&ctx.id, ctx.session_id.as_deref(), &csrf_token, &ctx.origin)
        .await
    {
        Ok(_) => ActionResult::success(StatusCode::NO_CONTENT),
        Err(e) => {
            tracing::warn!(error = %e, "Failed to delete lodging {}", ctx.id);
            ActionResult::failure(e.status(), DELETE_FAILED)
        }
    }
}

/// Reject form actions whose `Origin` (or `Referer`) is another site.
pub async fn require_same_origin(request: Request, next: Next) -> Response {
    if !is_same_origin(request.headers()) {
        tracing::warn!("Rejected cross-site form action on {}", request.uri().path());
        return ActionResult::failure(
            StatusCode::FORBIDDEN,
            "Cross-site form submissions are forbidden",
        )
        .into_response();
    }
    next.run(request).await
}

pub async fn route_delete_lodging(
    State(state): State<AppState>,
    Path(id): Path<String>,
    jar: CookieJar,
    headers: HeaderMap,
    Extension(locals): Extension<Locals>,
) -> ActionResult {
    let ctx = RequestContext::new(id, &jar, &headers).with_user(locals.user);
    delete(&state.api, &ctx).await
}
