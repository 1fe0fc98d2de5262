//! Core type definitions for the token locker

use serde::{Deserialize, Serialize};
use std::fmt;

pub use alloy_primitives::{Address, U256};

/// EVM chain the locker contracts are deployed on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Chain {
    Ethereum,
    Sepolia,
}

impl Chain {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ethereum => "ethereum",
            Self::Sepolia => "sepolia",
        }
    }

    /// EIP-155 chain id
    pub fn chain_id(&self) -> u64 {
        match self {
            Self::Ethereum => 1,
            Self::Sepolia => 11_155_111,
        }
    }

    /// Look up a chain by its EIP-155 id
    pub fn from_chain_id(id: u64) -> Option<Self> {
        match id {
            1 => Some(Self::Ethereum),
            11_155_111 => Some(Self::Sepolia),
            _ => None,
        }
    }
}

impl fmt::Display for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Which locker contract a session talks to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LockMode {
    /// Plain ERC-20 token locker
    #[default]
    Token,
    /// Liquidity-pool share locker
    Liquidity,
}

impl LockMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Token => "token",
            Self::Liquidity => "liquidity",
        }
    }
}

impl fmt::Display for LockMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Block number
pub type BlockNumber = u64;

/// Constants
pub mod constants {
    /// Fraction digits used when rendering on-chain quantities
    pub const DISPLAY_DECIMALS: u8 = 18;

    /// Shown when the address input or wallet account is missing
    pub const MISSING_INPUT_LABEL: &str = "Address or account info missing";

    /// Shown when any per-token read fails
    pub const FETCH_FAILED_LABEL: &str = "Ошибка получения информации";
}
