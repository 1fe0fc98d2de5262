//! Locker session: drives the data refresh flow and action triggers
//!
//! A session owns one [`ViewState`]. Network reads never run while the state
//! lock is held; overlapping refreshes are allowed and resolved by the
//! generation guard in [`reduce`].

use std::fmt;
use std::sync::Arc;

use chrono::{FixedOffset, Utc};
use evm_client::{CallProvider, ConnectedWallet, WalletConnection};
use locker_core::{AppConfig, Chain, Error, ProtocolError};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use crate::abi::Locker;
use crate::accessor::ContractAccessor;
use crate::fetch::{fetch_global_params, fetch_token_snapshot};
use crate::format::{display_offset, format_lock_time_default};
use crate::state::TokenReadout;
use crate::view::{reduce, ViewEvent, ViewState};

/// User actions offered by the locker page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LockAction {
    Approve,
    Lock,
    Unlock,
    ForceUnlock,
}

impl LockAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Approve => "approve",
            Self::Lock => "lock",
            Self::Unlock => "unlock",
            Self::ForceUnlock => "force-unlock",
        }
    }
}

impl fmt::Display for LockAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// What happened when an action was triggered
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum ActionOutcome {
    /// Accepted, but no transaction submission is wired for it
    NotSubmitted { action: LockAction },
    /// Confirmation dialog opened
    AwaitingConfirmation { action: LockAction },
    /// Confirmation dialog dismissed
    Cancelled { action: LockAction },
}

/// One user's locker page
pub struct LockerSession {
    state: RwLock<ViewState>,
    wallet: RwLock<Arc<dyn WalletConnection>>,
    provider: Arc<dyn CallProvider>,
    locker: Locker,
    chain: Chain,
    offset: FixedOffset,
}

impl LockerSession {
    pub fn new(
        provider: Arc<dyn CallProvider>,
        locker: Locker,
        chain: Chain,
        offset: FixedOffset,
    ) -> Self {
        let view = ViewState {
            lock_time_default: format_lock_time_default(Utc::now(), offset),
            ..ViewState::new(locker.mode())
        };
        Self {
            state: RwLock::new(view),
            wallet: RwLock::new(Arc::new(ConnectedWallet::disconnected())),
            provider,
            locker,
            chain,
            offset,
        }
    }

    /// Build a session from application configuration
    pub fn from_config(provider: Arc<dyn CallProvider>, config: &AppConfig) -> Result<Self, Error> {
        let offset = display_offset(config.display.utc_offset_minutes).ok_or_else(|| {
            Error::Config(format!(
                "invalid utc_offset_minutes: {}",
                config.display.utc_offset_minutes
            ))
        })?;
        let locker = Locker::from_config(config.mode, &config.contracts);
        Ok(Self::new(provider, locker, config.chain, offset))
    }

    pub fn locker(&self) -> &Locker {
        &self.locker
    }

    /// Current view
    pub async fn view(&self) -> ViewState {
        self.state.read().await.clone()
    }

    async fn apply(&self, event: ViewEvent) -> ViewState {
        let mut guard = self.state.write().await;
        let current = std::mem::take(&mut *guard);
        *guard = reduce(current, event);
        guard.clone()
    }

    async fn accessor(&self) -> ContractAccessor {
        let wallet = self.wallet.read().await.clone();
        ContractAccessor::new(self.provider.clone(), wallet, self.chain)
    }

    /// Wallet account or signer changed. Fetches locker globals once an
    /// account is present and re-reads the token already entered.
    pub async fn connect_wallet(&self, wallet: Arc<dyn WalletConnection>) -> ViewState {
        let account = wallet.current_account();
        *self.wallet.write().await = wallet;

        tracing::info!(account = ?account, "Wallet connection changed");
        let view = self.apply(ViewEvent::AccountChanged(account)).await;

        if account.is_none() {
            return view;
        }
        let view = self.refresh_globals().await;
        if view.token_address.is_empty() {
            view
        } else {
            self.refresh_token().await
        }
    }

    /// Read `price` and `penaltyfee`. Failures are logged and leave the
    /// previous values in place.
    pub async fn refresh_globals(&self) -> ViewState {
        let accessor = self.accessor().await;
        let Some(account) = accessor.account() else {
            return self.view().await;
        };

        match fetch_global_params(&accessor, &self.locker).await {
            Ok(params) => {
                self.apply(ViewEvent::GlobalsLoaded { account, params })
                    .await
            }
            Err(e) => {
                tracing::warn!(
                    locker = %self.locker.address(),
                    error = %e,
                    "Failed to fetch locker price or penalty fee"
                );
                self.view().await
            }
        }
    }

    /// User edited the address field; refreshes immediately.
    pub async fn set_address(&self, address: String) -> ViewState {
        self.apply(ViewEvent::AddressEdited(address)).await;
        self.refresh_token().await
    }

    /// Re-read the per-token state for the current address and account
    pub async fn refresh_token(&self) -> ViewState {
        let accessor = self.accessor().await;
        let account = accessor.account();

        // Issue the generation under the same lock that reads the address
        let (token_address, generation) = {
            let mut guard = self.state.write().await;
            if guard.account != account {
                // Wallet switched after the accessor was built; the switch
                // runs its own refresh
                return guard.clone();
            }
            let current = std::mem::take(&mut *guard);
            let missing = current.token_address.is_empty() || account.is_none();
            let event = if missing {
                ViewEvent::InputMissing
            } else {
                ViewEvent::RefreshRequested
            };
            *guard = reduce(current, event);
            if missing {
                return guard.clone();
            }
            (guard.token_address.clone(), guard.generation)
        };
        let Some(account) = account else {
            return self.view().await;
        };

        let result = fetch_token_snapshot(&accessor, &self.locker, &token_address, account)
            .await
            .and_then(|snapshot| TokenReadout::from_snapshot(&snapshot, self.offset));

        match result {
            Ok(readout) => {
                self.apply(ViewEvent::RefreshSucceeded {
                    generation,
                    readout,
                })
                .await
            }
            Err(e) => {
                tracing::warn!(
                    token = %token_address,
                    generation,
                    error = %e,
                    "Failed to fetch token lock state"
                );
                self.apply(ViewEvent::RefreshFailed { generation }).await
            }
        }
    }

    /// Trigger an action. Disabled actions are rejected; enabled ones are
    /// acknowledged without submitting anything.
    pub async fn trigger(&self, action: LockAction) -> Result<ActionOutcome, ProtocolError> {
        let view = self.view().await;
        let disabled = match action {
            LockAction::Approve => view.approve_disabled,
            LockAction::Lock => view.lock_disabled,
            LockAction::Unlock | LockAction::ForceUnlock => view.unlock_disabled,
        };
        if disabled {
            return Err(ProtocolError::ActionNotAllowed {
                reason: format!("{} is disabled for the current token", action),
            });
        }

        if action == LockAction::ForceUnlock {
            self.apply(ViewEvent::ForceUnlockRequested).await;
            return Ok(ActionOutcome::AwaitingConfirmation { action });
        }

        tracing::info!(%action, token = %view.token_address, "No transaction submission for action");
        Ok(ActionOutcome::NotSubmitted { action })
    }

    /// Accept the force-unlock dialog
    pub async fn confirm_force_unlock(&self) -> ActionOutcome {
        self.apply(ViewEvent::DialogClosed).await;
        tracing::info!("Force unlock confirmed; no transaction submission");
        ActionOutcome::NotSubmitted {
            action: LockAction::ForceUnlock,
        }
    }

    /// Dismiss the force-unlock dialog
    pub async fn cancel_force_unlock(&self) -> ActionOutcome {
        self.apply(ViewEvent::DialogClosed).await;
        ActionOutcome::Cancelled {
            action: LockAction::ForceUnlock,
        }
    }

    /// Discard the page state and forget the wallet. Refreshes still in
    /// flight are dropped when they complete.
    pub async fn reset(&self) -> ViewState {
        *self.wallet.write().await = Arc::new(ConnectedWallet::disconnected());
        tracing::info!(mode = %self.locker.mode(), "Locker page reset");
        self.apply(ViewEvent::Reset {
            lock_time_default: format_lock_time_default(Utc::now(), self.offset),
        })
        .await
    }
}
