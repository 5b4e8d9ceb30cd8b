#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use mbtx_core::bank::{BankClient, BankClientFactory, BankRecord, Credentials, TransactionHistory};
use mbtx_core::errors::{Error, Result};
use mbtx_core::transactions::DateRange;
use mbtx_server::{api::app_router, build_state_with_client_factory, config::Config};
use serde_json::{json, Value};
use tower::ServiceExt;

/// Canned bank behaviour shared by every client the factory hands out.
#[derive(Clone)]
pub enum FakeReply {
    History(TransactionHistory),
    Fail(String),
    Slow(Duration, TransactionHistory),
}

pub struct FakeBank {
    reply: FakeReply,
    calls: AtomicUsize,
}

impl FakeBank {
    pub fn new(reply: FakeReply) -> Arc<Self> {
        Arc::new(Self {
            reply,
            calls: AtomicUsize::new(0),
        })
    }

    pub fn with_records(records: Vec<BankRecord>) -> Arc<Self> {
        Self::new(FakeReply::History(TransactionHistory::new(records)))
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

struct FakeClient {
    bank: Arc<FakeBank>,
}

#[async_trait]
impl BankClient for FakeClient {
    async fn get_transaction_account_history(
        &self,
        account_no: &str,
        _range: &DateRange,
    ) -> Result<TransactionHistory> {
        assert_eq!(account_no, "0123456789");
        self.bank.calls.fetch_add(1, Ordering::SeqCst);
        match &self.bank.reply {
            FakeReply::History(history) => Ok(history.clone()),
            FakeReply::Fail(msg) => Err(Error::Upstream(msg.clone())),
            FakeReply::Slow(delay, history) => {
                tokio::time::sleep(*delay).await;
                Ok(history.clone())
            }
        }
    }
}

pub struct FakeFactory(pub Arc<FakeBank>);

impl BankClientFactory for FakeFactory {
    fn connect(&self, _credentials: &Credentials) -> Result<Box<dyn BankClient>> {
        Ok(Box::new(FakeClient {
            bank: self.0.clone(),
        }))
    }
}

pub fn test_config() -> Config {
    test_config_with(&[])
}

pub fn test_config_with(extra: &[(&str, &str)]) -> Config {
    let mut vars: HashMap<&str, &str> = HashMap::from([
        ("MB_USERNAME", "alice"),
        ("MB_PASSWORD", "secret"),
        ("MB_ACCOUNT_NO", "0123456789"),
    ]);
    vars.extend(extra.iter().copied());
    Config::from_lookup(|key| vars.get(key).map(|v| v.to_string())).unwrap()
}

pub fn build_test_router(bank: Arc<FakeBank>) -> Router {
    build_test_router_with_config(bank, test_config())
}

pub fn build_test_router_with_config(bank: Arc<FakeBank>, config: Config) -> Router {
    let state = build_state_with_client_factory(&config, Arc::new(FakeFactory(bank)));
    app_router(state, &config)
}

pub fn record(value: Value) -> BankRecord {
    serde_json::from_value(value).unwrap()
}

pub fn sample_records() -> Vec<BankRecord> {
    vec![
        record(json!({
            "postingDate": "05/01/2024 08:00:00",
            "transactionDate": "05/01/2024 07:59:41",
            "accountNo": "0123456789",
            "creditAmount": "250000",
            "debitAmount": "0",
            "currency": "VND",
            "description": "CK ABCDEFGHI123456 mua hang",
            "refNo": "FT1",
        })),
        record(json!({
            "accountNo": "0123456789",
            "debitAmount": "40000",
            "currency": "VND",
            "description": "coffee",
            "addDescription": "shop",
            "refNo": "FT2",
        })),
        record(json!({ "refNo": "FT3" })),
    ]
}

pub async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body).unwrap_or_else(|_| Value::String(
            String::from_utf8_lossy(&body).into_owned(),
        ))
    };
    (status, json)
}
