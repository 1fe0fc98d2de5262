//! Locker view state and its transition function
//!
//! The view is never mutated field by field from outside: every change is an
//! event fed through [`reduce`], which returns the next state. Each refresh
//! is tagged with a generation; completions from an older generation are
//! dropped so a slow response cannot overwrite a newer one. Switching the
//! wallet account or resetting the page also starts a new generation.

use alloy_primitives::Address;
use locker_core::constants::{FETCH_FAILED_LABEL, MISSING_INPUT_LABEL};
use locker_core::LockMode;
use serde::{Deserialize, Serialize};

use crate::state::{GlobalParams, TokenReadout};

/// Everything the locker page renders
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewState {
    /// Token or LP address as typed by the user
    pub token_address: String,
    pub token_balance: String,
    pub lock_allowance: String,
    pub locked_amount: String,
    pub symbol: String,
    pub name: String,
    pub unlock_time: String,
    pub price: String,
    pub penalty_fee: String,
    pub mode: LockMode,

    pub in_progress: bool,
    pub error: bool,
    pub error_label: String,
    pub transaction_ready: bool,

    pub approve_disabled: bool,
    pub lock_disabled: bool,
    pub unlock_disabled: bool,
    pub confirm_dialog_open: bool,
    /// Initial value of the lock-time picker, `YYYY-MM-DDTHH:MM`
    pub lock_time_default: String,

    /// Wallet account as last reported
    pub account: Option<Address>,
    /// Latest issued refresh generation
    pub generation: u64,
}

impl ViewState {
    pub fn new(mode: LockMode) -> Self {
        Self {
            token_address: String::new(),
            token_balance: "0".to_string(),
            lock_allowance: "0".to_string(),
            locked_amount: "0".to_string(),
            symbol: String::new(),
            name: String::new(),
            unlock_time: "0".to_string(),
            price: "0".to_string(),
            penalty_fee: "0".to_string(),
            mode,
            in_progress: false,
            error: false,
            error_label: String::new(),
            transaction_ready: false,
            approve_disabled: true,
            lock_disabled: true,
            unlock_disabled: true,
            confirm_dialog_open: false,
            lock_time_default: String::new(),
            account: None,
            generation: 0,
        }
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new(LockMode::default())
    }
}

/// Inputs to the view
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewEvent {
    /// User edited the address field
    AddressEdited(String),
    /// Wallet account appeared, changed or went away
    AccountChanged(Option<Address>),
    /// A refresh was asked for without an address or account
    InputMissing,
    /// A per-token refresh is starting
    RefreshRequested,
    RefreshSucceeded {
        generation: u64,
        readout: TokenReadout,
    },
    RefreshFailed {
        generation: u64,
    },
    /// Globals fetched while `account` was connected
    GlobalsLoaded {
        account: Address,
        params: GlobalParams,
    },
    ForceUnlockRequested,
    DialogClosed,
    /// Page went away; start over with a fresh lock-time default
    Reset { lock_time_default: String },
}

/// Compute the next view state
pub fn reduce(state: ViewState, event: ViewEvent) -> ViewState {
    match event {
        ViewEvent::AddressEdited(token_address) => ViewState {
            token_address,
            ..state
        },

        ViewEvent::AccountChanged(account) if account == state.account => state,

        // Readouts belong to the previous account: close the gates and
        // supersede any refresh still in flight
        ViewEvent::AccountChanged(account) => ViewState {
            account,
            in_progress: false,
            transaction_ready: false,
            approve_disabled: true,
            lock_disabled: true,
            unlock_disabled: true,
            confirm_dialog_open: false,
            generation: state.generation + 1,
            ..state
        },

        // Also supersedes any refresh still in flight
        ViewEvent::InputMissing => ViewState {
            error: true,
            error_label: MISSING_INPUT_LABEL.to_string(),
            in_progress: false,
            generation: state.generation + 1,
            ..state
        },

        ViewEvent::RefreshRequested => ViewState {
            in_progress: true,
            transaction_ready: false,
            error: false,
            generation: state.generation + 1,
            ..state
        },

        ViewEvent::RefreshSucceeded {
            generation,
            readout,
        } => {
            if generation != state.generation {
                tracing::debug!(
                    generation,
                    latest = state.generation,
                    "Dropping stale refresh result"
                );
                return state;
            }
            ViewState {
                token_balance: readout.token_balance,
                lock_allowance: readout.lock_allowance,
                locked_amount: readout.locked_amount,
                symbol: readout.symbol,
                name: readout.name,
                unlock_time: readout.unlock_time,
                approve_disabled: readout.approve_disabled,
                lock_disabled: readout.lock_disabled,
                unlock_disabled: readout.unlock_disabled,
                in_progress: false,
                transaction_ready: true,
                ..state
            }
        }

        ViewEvent::RefreshFailed { generation } => {
            if generation != state.generation {
                tracing::debug!(
                    generation,
                    latest = state.generation,
                    "Dropping stale refresh failure"
                );
                return state;
            }
            ViewState {
                error: true,
                error_label: FETCH_FAILED_LABEL.to_string(),
                in_progress: false,
                ..state
            }
        }

        ViewEvent::GlobalsLoaded { account, params } => {
            if state.account != Some(account) {
                return state;
            }
            ViewState {
                price: params.price,
                penalty_fee: params.penalty_fee,
                ..state
            }
        }

        ViewEvent::ForceUnlockRequested => ViewState {
            confirm_dialog_open: true,
            ..state
        },

        ViewEvent::DialogClosed => ViewState {
            confirm_dialog_open: false,
            ..state
        },

        ViewEvent::Reset { lock_time_default } => ViewState {
            lock_time_default,
            generation: state.generation + 1,
            ..ViewState::new(state.mode)
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{ACCOUNT, TOKEN_A};

    /// Readout with gates given as (approve, lock, unlock) disabled flags
    fn readout(amounts: [&str; 3], disabled: [bool; 3]) -> TokenReadout {
        let [balance, allowance, locked] = amounts;
        let [approve_disabled, lock_disabled, unlock_disabled] = disabled;
        TokenReadout {
            token_balance: balance.into(),
            lock_allowance: allowance.into(),
            locked_amount: locked.into(),
            symbol: "TKN".into(),
            name: "Token".into(),
            unlock_time: "14/11/2023, 22:13:20".into(),
            approve_disabled,
            lock_disabled,
            unlock_disabled,
        }
    }

    #[test]
    fn test_defaults() {
        let state = ViewState::new(LockMode::Liquidity);
        assert_eq!(state.token_balance, "0");
        assert_eq!(state.unlock_time, "0");
        assert!(state.approve_disabled && state.lock_disabled && state.unlock_disabled);
        assert!(!state.in_progress && !state.error && !state.transaction_ready);
        assert!(!state.confirm_dialog_open);
        assert_eq!(state.mode, LockMode::Liquidity);
    }

    #[test]
    fn test_refresh_requested_sets_loading() {
        let state = ViewState {
            error: true,
            transaction_ready: true,
            ..ViewState::default()
        };
        let next = reduce(state, ViewEvent::RefreshRequested);
        assert!(next.in_progress);
        assert!(!next.error);
        assert!(!next.transaction_ready);
        assert_eq!(next.generation, 1);
    }

    #[test]
    fn test_refresh_succeeded_applies_readout() {
        let state = reduce(ViewState::default(), ViewEvent::RefreshRequested);
        let next = reduce(
            state,
            ViewEvent::RefreshSucceeded {
                generation: 1,
                readout: readout(["0.0", "5.0", "0.0"], [true, false, true]),
            },
        );

        assert!(next.approve_disabled);
        assert!(!next.lock_disabled);
        assert!(next.unlock_disabled);
        assert!(next.transaction_ready);
        assert!(!next.in_progress);
        assert_eq!(next.lock_allowance, "5.0");
        assert_eq!(next.symbol, "TKN");
    }

    #[test]
    fn test_refresh_failed_keeps_numbers() {
        let state = ViewState {
            token_balance: "7.0".into(),
            ..ViewState::default()
        };
        let state = reduce(state, ViewEvent::RefreshRequested);
        let next = reduce(state.clone(), ViewEvent::RefreshFailed { generation: 1 });

        assert!(next.error);
        assert!(!next.in_progress);
        assert_eq!(next.error_label, FETCH_FAILED_LABEL);
        assert_eq!(next.token_balance, state.token_balance);
        assert_eq!(next.lock_allowance, state.lock_allowance);
        assert_eq!(next.locked_amount, state.locked_amount);
    }

    #[test]
    fn test_stale_results_are_dropped() {
        let state = reduce(ViewState::default(), ViewEvent::RefreshRequested);
        let state = reduce(state, ViewEvent::RefreshRequested);
        assert_eq!(state.generation, 2);

        let fresh = reduce(
            state,
            ViewEvent::RefreshSucceeded {
                generation: 2,
                readout: readout(["2.0", "0.0", "0.0"], [false, true, true]),
            },
        );
        let after_stale_success = reduce(
            fresh.clone(),
            ViewEvent::RefreshSucceeded {
                generation: 1,
                readout: readout(["1.0", "1.0", "1.0"], [false, false, false]),
            },
        );
        assert_eq!(after_stale_success, fresh);

        let after_stale_failure = reduce(fresh.clone(), ViewEvent::RefreshFailed { generation: 1 });
        assert_eq!(after_stale_failure, fresh);
    }

    #[test]
    fn test_input_missing_supersedes_inflight_refresh() {
        let state = reduce(ViewState::default(), ViewEvent::RefreshRequested);
        let state = reduce(state, ViewEvent::InputMissing);
        assert!(state.error);
        assert!(!state.in_progress);
        assert_eq!(state.error_label, MISSING_INPUT_LABEL);

        let next = reduce(
            state.clone(),
            ViewEvent::RefreshSucceeded {
                generation: 1,
                readout: readout(["1.0", "1.0", "1.0"], [false, false, false]),
            },
        );
        assert_eq!(next, state);
    }

    #[test]
    fn test_globals_only_apply_to_current_account() {
        let params = GlobalParams {
            price: "0.1".into(),
            penalty_fee: "10".into(),
        };
        let state = reduce(ViewState::default(), ViewEvent::AccountChanged(Some(ACCOUNT)));
        let next = reduce(
            state.clone(),
            ViewEvent::GlobalsLoaded {
                account: ACCOUNT,
                params: params.clone(),
            },
        );
        assert_eq!(next.price, "0.1");
        assert_eq!(next.penalty_fee, "10");

        let other = reduce(
            state,
            ViewEvent::GlobalsLoaded {
                account: TOKEN_A,
                params,
            },
        );
        assert_eq!(other.price, "0");
    }

    #[test]
    fn test_account_switch_drops_inflight_refresh() {
        let state = reduce(ViewState::default(), ViewEvent::AccountChanged(Some(ACCOUNT)));
        let state = reduce(state, ViewEvent::RefreshRequested);
        let issued = state.generation;

        let state = reduce(state, ViewEvent::AccountChanged(Some(TOKEN_A)));
        assert_eq!(state.generation, issued + 1);
        assert!(!state.in_progress);
        assert!(!state.transaction_ready);
        assert!(state.approve_disabled && state.lock_disabled && state.unlock_disabled);

        let next = reduce(
            state.clone(),
            ViewEvent::RefreshSucceeded {
                generation: issued,
                readout: readout(["7.0", "7.0", "7.0"], [false, false, false]),
            },
        );
        assert_eq!(next, state);
    }

    #[test]
    fn test_same_account_keeps_generation() {
        let state = reduce(ViewState::default(), ViewEvent::AccountChanged(Some(ACCOUNT)));
        let state = reduce(state, ViewEvent::RefreshRequested);
        let next = reduce(state.clone(), ViewEvent::AccountChanged(Some(ACCOUNT)));
        assert_eq!(next, state);
    }

    #[test]
    fn test_reset_discards_page_state() {
        let state = ViewState {
            token_address: "0xabc".into(),
            token_balance: "3.0".into(),
            account: Some(ACCOUNT),
            transaction_ready: true,
            ..ViewState::new(LockMode::Liquidity)
        };
        let state = reduce(state, ViewEvent::RefreshRequested);
        let issued = state.generation;

        let next = reduce(
            state,
            ViewEvent::Reset {
                lock_time_default: "2023-11-14T22:13".into(),
            },
        );
        assert_eq!(next.token_address, "");
        assert_eq!(next.token_balance, "0");
        assert_eq!(next.account, None);
        assert_eq!(next.mode, LockMode::Liquidity);
        assert_eq!(next.lock_time_default, "2023-11-14T22:13");
        assert_eq!(next.generation, issued + 1);
        assert!(!next.in_progress && !next.transaction_ready);
    }

    #[test]
    fn test_dialog_toggle() {
        let state = reduce(ViewState::default(), ViewEvent::ForceUnlockRequested);
        assert!(state.confirm_dialog_open);
        let state = reduce(state, ViewEvent::DialogClosed);
        assert!(!state.confirm_dialog_open);
    }

    #[test]
    fn test_view_serialization() {
        let state = reduce(
            ViewState::default(),
            ViewEvent::AddressEdited("0xabc".into()),
        );
        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(json["tokenAddress"], "0xabc");
        assert_eq!(json["approveDisabled"], true);
        assert_eq!(json["mode"], "token");
    }
}
