use async_trait::async_trait;

use super::transactions_model::{PinCheck, TransactionCount, TransactionListing};
use crate::errors::Result;

/// Trait for transaction query operations.
///
/// Date arguments are raw `hh-mm-ss-dd-mm-yyyy` strings; parsing and validation
/// happen before the bank is contacted.
#[async_trait]
pub trait TransactionServiceTrait: Send + Sync {
    async fn list_transactions(&self, from_date: &str, to_date: &str)
        -> Result<TransactionListing>;
    async fn count_transactions(&self, from_date: &str, to_date: &str)
        -> Result<TransactionCount>;
    async fn check_pin(&self, pin: &str, from_date: &str, to_date: &str) -> Result<PinCheck>;
}
