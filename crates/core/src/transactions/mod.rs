//! Transactions module - date parsing, record normalization and the query service.

mod datetime;
mod transactions_model;
mod transactions_service;
mod transactions_traits;


pub use datetime::{format_datetime, parse_datetime, ECHO_FORMAT};
pub use transactions_model::{
    record_mentions_pin, validate_pin, DateRange, PinCheck, TransactionCount,
    TransactionListing, TransactionRecord, PIN_LENGTH,
};
pub use transactions_service::TransactionService;
pub use transactions_traits::TransactionServiceTrait;
