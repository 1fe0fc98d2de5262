//! Configuration types for the token locker

use serde::{Deserialize, Serialize};

use crate::{Address, Chain, Error, LockMode};

/// JSON-RPC provider configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RpcConfig {
    /// Provider URL (e.g., "http://127.0.0.1:8545")
    pub url: String,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for RpcConfig {
    fn default() -> Self {
        Self {
            url: "http://127.0.0.1:8545".to_string(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Deployed locker contract addresses
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LockerContracts {
    pub token_lock: Address,
    pub liquidity_lock: Address,
}

impl LockerContracts {
    /// Locker address for the given mode
    pub fn address_for(&self, mode: LockMode) -> Address {
        match mode {
            LockMode::Token => self.token_lock,
            LockMode::Liquidity => self.liquidity_lock,
        }
    }
}

/// Presentation settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Offset from UTC applied when rendering unlock times
    #[serde(default)]
    pub utc_offset_minutes: i32,
}

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Provider connection settings
    pub rpc: RpcConfig,

    /// Chain the contracts live on
    pub chain: Chain,

    /// Locker contract addresses
    #[serde(default)]
    pub contracts: LockerContracts,

    /// Locker used by sessions
    #[serde(default)]
    pub mode: LockMode,

    #[serde(default)]
    pub display: DisplayConfig,

    /// API server port
    #[serde(default = "default_api_port")]
    pub api_port: u16,
}

fn default_api_port() -> u16 {
    18545
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            rpc: RpcConfig::default(),
            chain: Chain::Ethereum,
            contracts: LockerContracts::default(),
            mode: LockMode::default(),
            display: DisplayConfig::default(),
            api_port: default_api_port(),
        }
    }
}

impl AppConfig {
    /// Check that the active locker is configured
    pub fn validate(&self) -> Result<(), Error> {
        if self.contracts.address_for(self.mode).is_zero() {
            return Err(Error::Config(format!(
                "{} locker contract address not configured",
                self.mode
            )));
        }
        // chrono rejects offsets of a day or more
        if self.display.utc_offset_minutes.abs() >= 24 * 60 {
            return Err(Error::Config(format!(
                "utc_offset_minutes out of range: {}",
                self.display.utc_offset_minutes
            )));
        }
        Ok(())
    }
}
