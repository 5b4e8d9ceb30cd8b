//! mbtx connect - concrete bank clients.
//!
//! This crate implements the `mbtx_core::bank` traits over HTTP.

pub mod client;

// Re-export commonly used types
pub use client::{
    parse_history_response, HttpBankClient, HttpBankClientFactory, DEFAULT_BANK_API_URL,
};
