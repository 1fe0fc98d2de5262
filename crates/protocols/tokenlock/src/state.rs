//! Locker protocol state types

use alloy_primitives::U256;
use chrono::FixedOffset;
use locker_core::ProtocolError;
use serde::{Deserialize, Serialize};

use crate::format::{format_amount, format_unlock_time};

/// Locker-wide parameters, already formatted for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GlobalParams {
    /// Locking fee in native coin
    pub price: String,
    /// Early-unlock penalty as reported by the contract
    pub penalty_fee: String,
}

/// Raw per-token reads, in call order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenSnapshot {
    pub balance: U256,
    pub allowance: U256,
    pub locked_amount: U256,
    pub symbol: String,
    pub name: String,
    /// Epoch seconds
    pub unlock_time: U256,
}

/// A snapshot rendered for display, with action gates derived
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenReadout {
    pub token_balance: String,
    pub lock_allowance: String,
    pub locked_amount: String,
    pub symbol: String,
    pub name: String,
    pub unlock_time: String,
    pub approve_disabled: bool,
    pub lock_disabled: bool,
    pub unlock_disabled: bool,
}

impl TokenReadout {
    /// Render `snapshot`, rendering the unlock time at `offset`
    pub fn from_snapshot(
        snapshot: &TokenSnapshot,
        offset: FixedOffset,
    ) -> Result<Self, ProtocolError> {
        Ok(Self {
            token_balance: format_amount(snapshot.balance)?,
            lock_allowance: format_amount(snapshot.allowance)?,
            locked_amount: format_amount(snapshot.locked_amount)?,
            symbol: snapshot.symbol.clone(),
            name: snapshot.name.clone(),
            unlock_time: format_unlock_time(snapshot.unlock_time, offset)?,
            approve_disabled: snapshot.balance.is_zero(),
            lock_disabled: snapshot.allowance.is_zero(),
            unlock_disabled: snapshot.locked_amount.is_zero(),
        })
    }
}
