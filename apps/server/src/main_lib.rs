use std::sync::Arc;

use crate::config::Config;
use mbtx_connect::HttpBankClientFactory;
use mbtx_core::bank::BankClientFactory;
use mbtx_core::transactions::{TransactionService, TransactionServiceTrait};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

/// Shared, read-only state handed to every request.
pub struct AppState {
    pub transaction_service: Arc<dyn TransactionServiceTrait + Send + Sync>,
}

pub fn init_tracing() {
    let fmt_layer = fmt::layer().json().with_current_span(false);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}

pub fn build_state(config: &Config) -> Arc<AppState> {
    tracing::info!("Bank API at {}", config.bank_api_url);
    let client_factory = Arc::new(HttpBankClientFactory::new(
        config.bank_api_url.clone(),
        config.request_timeout,
    ));
    build_state_with_client_factory(config, client_factory)
}

/// Wires the service against any bank client factory. Tests pass fakes here.
pub fn build_state_with_client_factory(
    config: &Config,
    client_factory: Arc<dyn BankClientFactory>,
) -> Arc<AppState> {
    let credentials = Arc::new(config.credentials.clone());
    let transaction_service: Arc<dyn TransactionServiceTrait + Send + Sync> =
        Arc::new(TransactionService::new(credentials, client_factory));

    Arc::new(AppState {
        transaction_service,
    })
}
