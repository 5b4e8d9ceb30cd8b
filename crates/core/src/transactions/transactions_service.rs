use async_trait::async_trait;
use std::sync::Arc;

use super::transactions_model::{
    record_mentions_pin, validate_pin, DateRange, PinCheck, TransactionCount,
    TransactionListing, TransactionRecord,
};
use super::transactions_traits::TransactionServiceTrait;
use crate::bank::{BankClientFactory, Credentials, TransactionHistory};
use crate::errors::{Error, Result};

/// Queries the configured account through a freshly built bank client per call.
#[derive(Clone)]
pub struct TransactionService {
    credentials: Arc<Credentials>,
    client_factory: Arc<dyn BankClientFactory>,
}

impl TransactionService {
    pub fn new(credentials: Arc<Credentials>, client_factory: Arc<dyn BankClientFactory>) -> Self {
        Self {
            credentials,
            client_factory,
        }
    }

    /// One attempt, no retry. Every failure is reported as upstream.
    async fn fetch_history(&self, range: &DateRange) -> Result<TransactionHistory> {
        log::debug!(
            "Fetching transaction history from {} to {}",
            range.from_display(),
            range.to_display()
        );

        let client = self
            .client_factory
            .connect(&self.credentials)
            .map_err(as_upstream)?;
        let history = client
            .get_transaction_account_history(&self.credentials.account_no, range)
            .await
            .map_err(|e| {
                log::error!("Bank transaction history request failed: {}", e);
                as_upstream(e)
            })?;

        if history.transaction_history_list.is_none() {
            log::debug!("Bank response carried no transaction list");
        }
        log::info!("Fetched {} transactions from bank", history.len());
        Ok(history)
    }
}

fn as_upstream(err: Error) -> Error {
    match err {
        Error::Upstream(_) => err,
        other => Error::Upstream(other.to_string()),
    }
}

#[async_trait]
impl TransactionServiceTrait for TransactionService {
    async fn list_transactions(
        &self,
        from_date: &str,
        to_date: &str,
    ) -> Result<TransactionListing> {
        let range = DateRange::parse(from_date, to_date)?;
        let history = self.fetch_history(&range).await?;

        let transactions = history
            .records()
            .iter()
            .map(TransactionRecord::from_bank_record)
            .collect();

        Ok(TransactionListing {
            range,
            transactions,
        })
    }

    async fn count_transactions(
        &self,
        from_date: &str,
        to_date: &str,
    ) -> Result<TransactionCount> {
        let range = DateRange::parse(from_date, to_date)?;
        let history = self.fetch_history(&range).await?;

        Ok(TransactionCount {
            range,
            transaction_count: history.len(),
        })
    }

    async fn check_pin(&self, pin: &str, from_date: &str, to_date: &str) -> Result<PinCheck> {
        let range = DateRange::parse(from_date, to_date)?;
        validate_pin(pin)?;
        let history = self.fetch_history(&range).await?;

        let transactions: Vec<TransactionRecord> = history
            .records()
            .iter()
            .filter(|record| record_mentions_pin(record, pin))
            .map(TransactionRecord::from_bank_record)
            .collect();

        log::info!("PIN search matched {} transactions", transactions.len());
        Ok(PinCheck {
            pin: pin.to_string(),
            transactions,
        })
    }
}
