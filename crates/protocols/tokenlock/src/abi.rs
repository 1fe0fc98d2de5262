//! Contract ABI descriptors
//!
//! Only the read surface the locker consumes is declared here.

use alloy_primitives::Address;
use alloy_sol_types::sol;
use locker_core::{LockMode, LockerContracts};

sol! {
    /// ERC-20 read surface
    interface IStandardToken {
        function balanceOf(address owner) external view returns (uint256);
        function allowance(address owner, address spender) external view returns (uint256);
        function symbol() external view returns (string);
        function name() external view returns (string);
    }

    /// Locker read surface, shared by the token and liquidity lockers
    interface ILocker {
        function price() external view returns (uint256);
        function penaltyfee() external view returns (uint256);
        function GetBalance(address token) external view returns (uint256);
        function GetUnlockTime(address token) external view returns (uint256);
    }
}

/// ABI a contract handle is bound to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AbiKind {
    StandardToken,
    TokenLock,
    LiquidityLock,
}

impl AbiKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::StandardToken => "StandardToken",
            Self::TokenLock => "TokenLock",
            Self::LiquidityLock => "LiquidityLock",
        }
    }
}

/// Active locker contract with its address and ABI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Locker {
    TokenLock { address: Address },
    LiquidityLock { address: Address },
}

impl Locker {
    /// Select the locker for `mode` from the configured deployments
    pub fn from_config(mode: LockMode, contracts: &LockerContracts) -> Self {
        let address = contracts.address_for(mode);
        match mode {
            LockMode::Token => Self::TokenLock { address },
            LockMode::Liquidity => Self::LiquidityLock { address },
        }
    }

    pub fn address(&self) -> Address {
        match self {
            Self::TokenLock { address } | Self::LiquidityLock { address } => *address,
        }
    }

    pub fn abi(&self) -> AbiKind {
        match self {
            Self::TokenLock { .. } => AbiKind::TokenLock,
            Self::LiquidityLock { .. } => AbiKind::LiquidityLock,
        }
    }

    pub fn mode(&self) -> LockMode {
        match self {
            Self::TokenLock { .. } => LockMode::Token,
            Self::LiquidityLock { .. } => LockMode::Liquidity,
        }
    }
}
