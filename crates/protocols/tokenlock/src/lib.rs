//! Token / LP Locker Protocol Implementation
//!
//! Users lock ERC-20 tokens or liquidity-pool shares in a locker contract
//! until an unlock time. Locking costs a flat `price`; unlocking early costs
//! a `penaltyfee`. This crate reads that state for one wallet and token and
//! keeps the page's view state consistent with it.

pub mod abi;
pub mod accessor;
pub mod fetch;
pub mod format;
pub mod session;
pub mod state;
pub mod view;

#[cfg(test)]
mod testing;

pub use abi::{AbiKind, Locker};
pub use accessor::{ContractAccessor, ContractHandle};
pub use fetch::{fetch_global_params, fetch_token_snapshot};
pub use session::{ActionOutcome, LockAction, LockerSession};
pub use state::{GlobalParams, TokenReadout, TokenSnapshot};
pub use view::{reduce, ViewEvent, ViewState};
