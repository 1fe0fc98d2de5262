//! Error types for the token locker

use thiserror::Error;

/// Core errors that can occur in the locker
#[derive(Debug, Error)]
pub enum Error {
    #[error("RPC error: {0}")]
    Rpc(#[from] RpcError),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// JSON-RPC provider errors
#[derive(Debug, Error)]
pub enum RpcError {
    #[error("RPC endpoint unreachable at {url}")]
    Unreachable { url: String },

    #[error("RPC returned error {code}: {message}")]
    ApiError { code: i64, message: String },

    #[error("Failed to parse response: {0}")]
    ParseError(String),

    #[error("RPC request {method} timed out")]
    Timeout { method: &'static str },
}

/// Locker protocol errors
#[derive(Debug, Error)]
pub enum ProtocolError {
    #[error("Invalid address: {address}")]
    InvalidAddress { address: String },

    #[error("Contract call {method} failed: {reason}")]
    CallFailed { method: &'static str, reason: String },

    #[error("Failed to decode {method} result: {message}")]
    DecodeFailed {
        method: &'static str,
        message: String,
    },

    #[error("Protocol state unavailable: {reason}")]
    StateUnavailable { reason: String },

    #[error("Action not allowed: {reason}")]
    ActionNotAllowed { reason: String },
}

impl ProtocolError {
    /// Get an HTTP-friendly error code
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidAddress { .. } => "invalid_address",
            Self::CallFailed { .. } => "call_failed",
            Self::DecodeFailed { .. } => "decode_failed",
            Self::StateUnavailable { .. } => "state_unavailable",
            Self::ActionNotAllowed { .. } => "action_not_allowed",
        }
    }

    /// Get HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            Self::InvalidAddress { .. } => 400,
            Self::ActionNotAllowed { .. } => 422,
            Self::CallFailed { .. } | Self::DecodeFailed { .. } => 502,
            Self::StateUnavailable { .. } => 503,
        }
    }
}
