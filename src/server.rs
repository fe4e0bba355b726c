use crate::config::Config;
use crate::locals::resolve_locals;
use crate::routes::healthcheck::route_healthcheck;
use crate::routes::lodging::{
    require_same_origin, route_delete_lodging, route_lodging, route_lodging_data,
};
use crate::state::AppState;
use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/lodging/:id", get(route_lodging))
        .route("/lodging/:id/data", get(route_lodging_data))
        .route(
            "/lodging/:id/delete",
            post(route_delete_lodging)
                .layer(middleware::from_fn_with_state(
                    state.clone(),
                    resolve_locals,
                ))
                .layer(middleware::from_fn(require_same_origin)),
        )
        .route("/healthcheck", get(route_healthcheck))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
pub async fn serve(config: Config, host: &str, port: u16) -> std::io::Result<()> {
    let addr = format!("{host}:{port}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!(
        "Serving Web App at {addr} using API {}",
        config.endpoint
    );

    let app = build_router(AppState::new(&config));
    axum::serve(listener, app).await
}
