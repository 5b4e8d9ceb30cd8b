use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::bank::BankRecord;
use crate::errors::{Result, ValidationError};

use super::datetime::{format_datetime, parse_datetime};

/// Required PIN length, counted in characters.
pub const PIN_LENGTH: usize = 15;

/// Bank attribute names that carry free-text descriptions searched for a PIN.
pub const DESCRIPTION_ATTR: &str = "description";
pub const ADD_DESCRIPTION_ATTR: &str = "addDescription";

/// An inclusive date-time window. `from <= to` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    from: NaiveDateTime,
    to: NaiveDateTime,
}

impl DateRange {
    pub fn new(from: NaiveDateTime, to: NaiveDateTime) -> Result<Self> {
        if from > to {
            return Err(ValidationError::InvalidDateRange.into());
        }
        Ok(Self { from, to })
    }

    /// Parses both ends from `hh-mm-ss-dd-mm-yyyy` strings and validates ordering.
    pub fn parse(from_date: &str, to_date: &str) -> Result<Self> {
        let from = parse_datetime(from_date).map_err(ValidationError::from)?;
        let to = parse_datetime(to_date).map_err(ValidationError::from)?;
        Self::new(from, to)
    }

    pub fn from(&self) -> NaiveDateTime {
        self.from
    }

    pub fn to(&self) -> NaiveDateTime {
        self.to
    }

    pub fn from_display(&self) -> String {
        format_datetime(&self.from)
    }

    pub fn to_display(&self) -> String {
        format_datetime(&self.to)
    }
}

/// Normalized view of one bank transaction. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionRecord {
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

impl TransactionRecord {
    /// Reads the known attributes off a raw bank record. Missing ones become `None`.
    pub fn from_bank_record(record: &BankRecord) -> Self {
        Self {
            posting_date: record.attr("postingDate"),
            transaction_date: record.attr("transactionDate"),
            account_no: record.attr("accountNo"),
            credit_amount: record.attr("creditAmount"),
            debit_amount: record.attr("debitAmount"),
            currency: record.attr("currency"),
            description: record.attr(DESCRIPTION_ATTR),
            add_description: record.attr(ADD_DESCRIPTION_ATTR),
            available_balance: record.attr("availableBalance"),
            beneficiary_account: record.attr("beneficiaryAccount"),
            ref_no: record.attr("refNo"),
            ben_account_name: record.attr("benAccountName"),
            bank_name: record.attr("bankName"),
            ben_account_no: record.attr("benAccountNo"),
            transaction_type: record.attr("transactionType"),
        }
    }
}

/// True when either description attribute of `record` contains `pin`.
pub fn record_mentions_pin(record: &BankRecord, pin: &str) -> bool {
    [DESCRIPTION_ATTR, ADD_DESCRIPTION_ATTR]
        .iter()
        .filter_map(|name| record.attr(name))
        .any(|text| text.contains(pin))
}

/// Checks the PIN length before anything else touches it.
pub fn validate_pin(pin: &str) -> Result<()> {
    if pin.chars().count() != PIN_LENGTH {
        return Err(ValidationError::InvalidPin {
            expected: PIN_LENGTH,
        }
        .into());
    }
    Ok(())
}

/// All transactions in a range.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionListing {
    pub range: DateRange,
    pub transactions: Vec<TransactionRecord>,
}

impl TransactionListing {
    pub fn transaction_count(&self) -> usize {
        self.transactions.len()
    }
}

/// Number of transactions in a range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransactionCount {
    pub range: DateRange,
    pub transaction_count: usize,
}

/// Outcome of searching a range for a PIN.
#[derive(Debug, Clone, PartialEq)]
pub struct PinCheck {
    pub pin: String,
    pub transactions: Vec<TransactionRecord>,
}

impl PinCheck {
    pub fn found(&self) -> bool {
        !self.transactions.is_empty()
    }

    pub fn match_count(&self) -> usize {
        self.transactions.len()
    }
}
