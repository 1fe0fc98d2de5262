//! Data Transfer Objects for API requests and responses

use serde::{Deserialize, Serialize};

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub chain: String,
    pub mode: String,
}

impl HealthResponse {
    pub fn new(chain: &str, mode: &str) -> Self {
        Self {
            status: "ok".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            chain: chain.to_string(),
            mode: mode.to_string(),
        }
    }
}

/// Provider status response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderStatusResponse {
    pub connected: bool,
    pub url: String,
    pub chain: String,
    pub chain_id: Option<u64>,
    pub block_number: u64,
    pub chain_matches: bool,
}

/// Address input change
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddressRequest {
    pub address: String,
}

/// Wallet account change
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountRequest {
    /// Connected account, `null` when the wallet disconnects
    pub account: Option<String>,
    /// Whether the wallet can sign transactions
    #[serde(default)]
    pub can_sign: bool,
}

/// Generic API error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    pub code: String,
    pub message: String,
}

impl ApiError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new("bad_request", message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_request_defaults() {
        let req: AccountRequest = serde_json::from_str(r#"{"account": null}"#).unwrap();
        assert!(req.account.is_none());
        assert!(!req.can_sign);
    }

    #[test]
    fn test_health_response() {
        let health = HealthResponse::new("ethereum", "token");
        assert_eq!(health.status, "ok");
        assert_eq!(health.mode, "token");
        assert!(!health.version.is_empty());
    }
}
