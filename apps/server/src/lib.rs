pub mod api;
pub mod config;
pub mod error;
pub mod models;
mod main_lib;

pub use main_lib::{build_state, build_state_with_client_factory, init_tracing, AppState};
