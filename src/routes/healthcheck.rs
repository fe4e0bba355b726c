use axum::http::StatusCode;

pub async fn route_healthcheck() -> StatusCode {
    StatusCode::OK
}
