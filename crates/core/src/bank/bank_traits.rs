use async_trait::async_trait;

use super::bank_model::{Credentials, TransactionHistory};
use crate::errors::Result;
use crate::transactions::DateRange;

/// Client for a single authenticated bank session.
#[async_trait]
pub trait BankClient: Send + Sync {
    /// Fetch the transaction history of `account_no` bounded by `range`.
    async fn get_transaction_account_history(
        &self,
        account_no: &str,
        range: &DateRange,
    ) -> Result<TransactionHistory>;
}

/// Builds a fresh [`BankClient`] for every request. No pooling or session reuse.
pub trait BankClientFactory: Send + Sync {
    fn connect(&self, credentials: &Credentials) -> Result<Box<dyn BankClient>>;
}
