use std::sync::Arc;

use crate::{
    config::Config,
    main_lib::AppState,
    models::{
        ErrorBody, PinCheckResponse, PinFoundResponse, PinNotFoundResponse, Transaction,
        TransactionCountResponse, TransactionsResponse,
    },
};
use axum::{http::HeaderValue, routing::get, Json, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;

pub mod health;
pub mod transactions;

#[derive(OpenApi)]
#[openapi(
    info(title = "MBBank Transaction API"),
    paths(
        health::healthz,
        health::readyz,
        transactions::get_transactions,
        transactions::get_transaction_count,
        transactions::check_transaction_by_pin
    ),
    components(schemas(
        Transaction,
        TransactionsResponse,
        TransactionCountResponse,
        PinCheckResponse,
        PinFoundResponse,
        PinNotFoundResponse,
        ErrorBody
    )),
    tags((name = "transactions"), (name = "health"))
)]
pub struct ApiDoc;

fn cors_layer(config: &Config) -> CorsLayer {
    if config.cors_allow.iter().any(|o| o == "*") {
        return CorsLayer::new().allow_origin(Any);
    }
    let origins = config
        .cors_allow
        .iter()
        .filter_map(|o| match o.parse::<HeaderValue>() {
            Ok(origin) => Some(origin),
            Err(e) => {
                tracing::warn!("Ignoring invalid CORS origin {}: {}", o, e);
                None
            }
        })
        .collect::<Vec<_>>();
    CorsLayer::new().allow_origin(origins)
}

pub fn app_router(state: Arc<AppState>, config: &Config) -> Router {
    let openapi = ApiDoc::openapi();

    Router::new()
        .merge(health::router())
        .merge(transactions::router())
        .route("/openapi.json", get(|| async { Json(openapi) }))
        .with_state(state)
        .layer(cors_layer(config))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(TraceLayer::new_for_http())
}
