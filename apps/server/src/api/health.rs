use std::sync::Arc;

use crate::main_lib::AppState;
use axum::{routing::get, Router};

#[utoipa::path(get, path = "/healthz", responses((status = 200, description = "Health")), tag = "health")]
pub async fn healthz() -> &'static str {
    "ok"
}

/// The bank is not probed; readiness only means the process is serving.
#[utoipa::path(get, path = "/readyz", responses((status = 200, description = "Ready")), tag = "health")]
pub async fn readyz() -> &'static str {
    "ok"
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
}
