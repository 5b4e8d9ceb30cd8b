use mbtx_core::errors::{Result, ValidationError};
use mbtx_core::transactions::{PinCheck, TransactionCount, TransactionListing, TransactionRecord};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

pub const PIN_NOT_FOUND_MESSAGE: &str = "No transaction found with this PIN";

// ===================== Query parameters =====================

/// Date window shared by every transaction endpoint.
#[derive(Deserialize, IntoParams, Debug, Default)]
#[into_params(parameter_in = Query)]
pub struct DateRangeQuery {
    /// Format: hh-mm-ss-dd-mm-yyyy
    pub from_date: Option<String>,
    /// Format: hh-mm-ss-dd-mm-yyyy
    pub to_date: Option<String>,
}

impl DateRangeQuery {
    pub fn into_required(self) -> Result<(String, String)> {
        Ok((
            required("from_date", self.from_date)?,
            required("to_date", self.to_date)?,
        ))
    }
}

#[derive(Deserialize, IntoParams, Debug, Default)]
#[into_params(parameter_in = Query)]
pub struct PinCheckQuery {
    /// 15-character PIN (9 letters followed by 6 characters encoding the time)
    pub pin: Option<String>,
    /// Format: hh-mm-ss-dd-mm-yyyy
    pub from_date: Option<String>,
    /// Format: hh-mm-ss-dd-mm-yyyy
    pub to_date: Option<String>,
}

impl PinCheckQuery {
    pub fn into_required(self) -> Result<(String, String, String)> {
        Ok((
            required("pin", self.pin)?,
            required("from_date", self.from_date)?,
            required("to_date", self.to_date)?,
        ))
    }
}

fn required(name: &str, value: Option<String>) -> Result<String> {
    value.ok_or_else(|| ValidationError::MissingParameter(name.to_string()).into())
}

// ===================== Responses =====================

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct Transaction {
    pub posting_date: Option<String>,
    pub transaction_date: Option<String>,
    pub account_no: Option<String>,
    pub credit_amount: Option<String>,
    pub debit_amount: Option<String>,
    pub currency: Option<String>,
    pub description: Option<String>,
    pub add_description: Option<String>,
    pub available_balance: Option<String>,
    pub beneficiary_account: Option<String>,
    pub ref_no: Option<String>,
    pub ben_account_name: Option<String>,
    pub bank_name: Option<String>,
    pub ben_account_no: Option<String>,
    pub transaction_type: Option<String>,
}

impl From<TransactionRecord> for Transaction {
    fn from(t: TransactionRecord) -> Self {
        Self {
            posting_date: t.posting_date,
            transaction_date: t.transaction_date,
            account_no: t.account_no,
            credit_amount: t.credit_amount,
            debit_amount: t.debit_amount,
            currency: t.currency,
            description: t.description,
            add_description: t.add_description,
            available_balance: t.available_balance,
            beneficiary_account: t.beneficiary_account,
            ref_no: t.ref_no,
            ben_account_name: t.ben_account_name,
            bank_name: t.bank_name,
            ben_account_no: t.ben_account_no,
            transaction_type: t.transaction_type,
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct TransactionsResponse {
    pub success: bool,
    pub transaction_count: usize,
    /// Normalized as `YYYY-MM-DD hh:mm:ss`
    pub from_date: String,
    /// Normalized as `YYYY-MM-DD hh:mm:ss`
    pub to_date: String,
    pub transactions: Vec<Transaction>,
}

impl From<TransactionListing> for TransactionsResponse {
    fn from(listing: TransactionListing) -> Self {
        Self {
            success: true,
            transaction_count: listing.transaction_count(),
            from_date: listing.range.from_display(),
            to_date: listing.range.to_display(),
            transactions: listing.transactions.into_iter().map(Transaction::from).collect(),
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct TransactionCountResponse {
    pub success: bool,
    pub transaction_count: usize,
    pub from_date: String,
    pub to_date: String,
}

impl From<TransactionCount> for TransactionCountResponse {
    fn from(count: TransactionCount) -> Self {
        Self {
            success: true,
            transaction_count: count.transaction_count,
            from_date: count.range.from_display(),
            to_date: count.range.to_display(),
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct PinFoundResponse {
    pub success: bool,
    pub found: bool,
    pub pin: String,
    pub match_count: usize,
    pub transactions: Vec<Transaction>,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct PinNotFoundResponse {
    pub success: bool,
    pub found: bool,
    pub pin: String,
    pub message: String,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
#[serde(untagged)]
pub enum PinCheckResponse {
    Found(PinFoundResponse),
    NotFound(PinNotFoundResponse),
}

impl From<PinCheck> for PinCheckResponse {
    fn from(check: PinCheck) -> Self {
        if check.found() {
            PinCheckResponse::Found(PinFoundResponse {
                success: true,
                found: true,
                match_count: check.match_count(),
                pin: check.pin,
                transactions: check.transactions.into_iter().map(Transaction::from).collect(),
            })
        } else {
            PinCheckResponse::NotFound(PinNotFoundResponse {
                success: true,
                found: false,
                pin: check.pin,
                message: PIN_NOT_FOUND_MESSAGE.to_string(),
            })
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct ErrorBody {
    pub detail: String,
}
