use std::sync::Arc;

use crate::{
    error::ApiResult,
    main_lib::AppState,
    models::{
        DateRangeQuery, PinCheckQuery, PinCheckResponse, TransactionCountResponse,
        TransactionsResponse,
    },
};
use axum::{
    extract::{rejection::QueryRejection, Query, State},
    routing::get,
    Json, Router,
};

#[utoipa::path(
    get,
    path = "/transactions",
    params(DateRangeQuery),
    responses(
        (status = 200, body = TransactionsResponse),
        (status = 400, body = ErrorBody, description = "Bad date format or range"),
        (status = 500, body = ErrorBody, description = "Bank request failed")
    ),
    tag = "transactions"
)]
pub async fn get_transactions(
    State(state): State<Arc<AppState>>,
    query: Result<Query<DateRangeQuery>, QueryRejection>,
) -> ApiResult<Json<TransactionsResponse>> {
    let Query(params) = query?;
    let (from_date, to_date) = params.into_required()?;
    let listing = state
        .transaction_service
        .list_transactions(&from_date, &to_date)
        .await?;
    Ok(Json(listing.into()))
}

#[utoipa::path(
    get,
    path = "/transactions/count",
    params(DateRangeQuery),
    responses(
        (status = 200, body = TransactionCountResponse),
        (status = 400, body = ErrorBody),
        (status = 500, body = ErrorBody)
    ),
    tag = "transactions"
)]
pub async fn get_transaction_count(
    State(state): State<Arc<AppState>>,
    query: Result<Query<DateRangeQuery>, QueryRejection>,
) -> ApiResult<Json<TransactionCountResponse>> {
    let Query(params) = query?;
    let (from_date, to_date) = params.into_required()?;
    let count = state
        .transaction_service
        .count_transactions(&from_date, &to_date)
        .await?;
    Ok(Json(count.into()))
}

/// Looks for transactions whose description carries the given PIN.
#[utoipa::path(
    get,
    path = "/transactions/check-pin",
    params(PinCheckQuery),
    responses(
        (status = 200, body = PinCheckResponse),
        (status = 400, body = ErrorBody, description = "Bad PIN, date format or range"),
        (status = 500, body = ErrorBody)
    ),
    tag = "transactions"
)]
pub async fn check_transaction_by_pin(
    State(state): State<Arc<AppState>>,
    query: Result<Query<PinCheckQuery>, QueryRejection>,
) -> ApiResult<Json<PinCheckResponse>> {
    let Query(params) = query?;
    let (pin, from_date, to_date) = params.into_required()?;
    let check = state
        .transaction_service
        .check_pin(&pin, &from_date, &to_date)
        .await?;
    Ok(Json(check.into()))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/transactions", get(get_transactions))
        .route("/transactions/count", get(get_transaction_count))
        .route("/transactions/check-pin", get(check_transaction_by_pin))
}
