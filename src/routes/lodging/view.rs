use crate::client::{ApiClient, Lodging};
use crate::context::RequestContext;
use crate::state::AppState;
use crate::templates;
use axum::{
    extract::{Path, State},
    http::HeaderMap,
    response::Html,
    Json,
};
use axum_extra::extract::CookieJar;
use minijinja::context;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LodgingProps {
    pub lodging: Option<Lodging>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageData {
    pub props: LodgingProps,
}

impl PageData {
    fn new(lodging: Option<Lodging>) -> Self {
        Self {
            props: LodgingProps { lodging },
        }
    }
}

/// Fetch the lodging for the page. Any failure renders as an empty page.
pub async fn load(api: &ApiClient, ctx: &RequestContext) -> PageData {
    if !ctx.has_id() {
        tracing::error!("Failed to fetch lodging {:?}: not a lodging identifier", ctx.id);
        return PageData::new(None);
    }

    match api.fetch_lodging(&ctx.id, ctx.session_id.as_deref()).await {
        Ok(lodging) => PageData::new(Some(lodging)),
        Err(e) => {
            tracing::error!(error = %e, "Failed to fetch lodging {}", ctx.id);
            PageData::new(None)
        }
    }
}

pub async fn route_lodging(
    State(state): State<AppState>,
    Path(id): Path<String>,
    jar: CookieJar,
    headers: HeaderMap,
) -> Html<String> {
    let ctx = RequestContext::new(id, &jar, &headers);
    let data = load(&state.api, &ctx).await;

    Html(templates::render(
        "lodging/view.html",
        context! {
            props => data.props,
            has_session => ctx.session_id.is_some(),
        },
    ))
}

pub async fn route_lodging_data(
    State(state): State<AppState>,
    Path(id): Path<String>,
    jar: CookieJar,
    headers: HeaderMap,
) -> Json<PageData> {
    let ctx = RequestContext::new(id, &jar, &headers);
    Json(load(&state.api, &ctx).await)
}
