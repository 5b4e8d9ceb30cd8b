//! Bank module - the banking client seam and the raw shapes it returns.

mod bank_model;
mod bank_traits;


pub use bank_model::{BankRecord, Credentials, TransactionHistory};
pub use bank_traits::{BankClient, BankClientFactory};
