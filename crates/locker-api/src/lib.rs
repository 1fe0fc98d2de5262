//! locker-api: HTTP API layer for the token locker
//!
//! Exposes the locker session to the frontend that renders it.

pub mod dto;
pub mod routes;
pub mod server;
pub mod state;

pub use server::*;
pub use state::{ApiError, AppState};
