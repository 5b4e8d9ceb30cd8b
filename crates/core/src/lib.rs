//! mbtx core - domain types, banking client seam and the transaction query service.
//!
//! This crate holds no HTTP or transport code. Concrete bank clients live in
//! `mbtx-connect`; the API server lives in `apps/server`.

pub mod bank;
pub mod errors;
pub mod transactions;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
