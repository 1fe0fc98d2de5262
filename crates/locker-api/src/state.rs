//! Application state shared across API handlers
//!
//! The service drives a single locker page: one [`LockerSession`] is shared
//! by every client, so it assumes one user per instance. Clients call
//! `POST /locker/reset` when the page goes away.

use std::sync::Arc;

use evm_client::{parse_address, CallProvider, ConnectedWallet, RpcClient};
use locker_core::{Address, AppConfig};
use thiserror::Error;
use tokenlock::LockerSession;

/// Errors that can occur in the API layer
#[derive(Debug, Error)]
pub enum ApiError {
    /// Invalid wallet address format
    #[error("Invalid wallet address: {reason}")]
    InvalidAddress { reason: String },

    /// Provider client could not be built or configuration rejected
    #[error("{0}")]
    Core(#[from] locker_core::Error),
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: AppConfig,
    rpc: RpcClient,
    session: LockerSession,
}

impl AppState {
    /// Create state reading contracts through the configured RPC endpoint
    pub fn new(config: AppConfig) -> Result<Self, ApiError> {
        let rpc = RpcClient::new(config.rpc.clone()).map_err(locker_core::Error::from)?;
        let provider: Arc<dyn CallProvider> = Arc::new(rpc.clone());
        Self::build(config, rpc, provider)
    }

    /// Create state with a custom contract read provider
    pub fn with_provider(
        config: AppConfig,
        provider: Arc<dyn CallProvider>,
    ) -> Result<Self, ApiError> {
        let rpc = RpcClient::new(config.rpc.clone()).map_err(locker_core::Error::from)?;
        Self::build(config, rpc, provider)
    }

    fn build(
        config: AppConfig,
        rpc: RpcClient,
        provider: Arc<dyn CallProvider>,
    ) -> Result<Self, ApiError> {
        let session = LockerSession::from_config(provider, &config)?;
        tracing::info!(
            mode = %config.mode,
            locker = %session.locker().address(),
            chain = %config.chain,
            "Locker session created"
        );
        Ok(Self {
            inner: Arc::new(AppStateInner {
                config,
                rpc,
                session,
            }),
        })
    }

    /// Get current config
    pub fn config(&self) -> &AppConfig {
        &self.inner.config
    }

    /// RPC client used for provider status
    pub fn rpc(&self) -> &RpcClient {
        &self.inner.rpc
    }

    /// The locker page session
    pub fn session(&self) -> &LockerSession {
        &self.inner.session
    }

    /// Build the wallet capability for a reported account.
    ///
    /// # Errors
    /// Returns `ApiError::InvalidAddress` if the account is not a valid address.
    pub fn wallet_for(
        &self,
        account: Option<&str>,
        can_sign: bool,
    ) -> Result<ConnectedWallet, ApiError> {
        let Some(account) = account else {
            return Ok(ConnectedWallet::disconnected());
        };
        let account: Address =
            parse_address(account, self.inner.config.chain).map_err(|e| {
                ApiError::InvalidAddress {
                    reason: e.to_string(),
                }
            })?;
        Ok(if can_sign {
            ConnectedWallet::with_signer(account)
        } else {
            ConnectedWallet::read_only(account)
        })
    }
}
