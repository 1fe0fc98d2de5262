//! Wallet connection capabilities
//!
//! The locker never reaches into a wallet object directly. Callers inject a
//! [`WalletConnection`] that answers two questions: which account is
//! connected, and whether a signer is available for state-changing calls.

use std::fmt;
use std::sync::Arc;

use alloy_primitives::Address;
use async_trait::async_trait;
use locker_core::RpcError;

/// Read access to contract state
#[async_trait]
pub trait CallProvider: Send + Sync {
    /// Execute `data` against `to` and return the raw return bytes
    async fn call(&self, to: Address, data: Vec<u8>) -> Result<Vec<u8>, RpcError>;
}

/// Something able to authorize transactions for an account
pub trait Signer: Send + Sync + fmt::Debug {
    fn address(&self) -> Address;
}

/// Injected wallet capability
pub trait WalletConnection: Send + Sync {
    /// Currently connected account, if any
    fn current_account(&self) -> Option<Address>;

    /// Signer for the connected account, if the wallet can sign
    fn optional_signer(&self) -> Option<Arc<dyn Signer>>;
}

/// Signer whose keys stay in the user's wallet application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExternalSigner {
    address: Address,
}

impl ExternalSigner {
    pub fn new(address: Address) -> Self {
        Self { address }
    }
}

impl Signer for ExternalSigner {
    fn address(&self) -> Address {
        self.address
    }
}

/// Snapshot of a wallet connection as reported by the frontend
#[derive(Clone, Default)]
pub struct ConnectedWallet {
    account: Option<Address>,
    signer: Option<Arc<dyn Signer>>,
}

impl ConnectedWallet {
    /// No wallet connected
    pub fn disconnected() -> Self {
        Self::default()
    }

    /// Account known, but no signing capability
    pub fn read_only(account: Address) -> Self {
        Self {
            account: Some(account),
            signer: None,
        }
    }

    /// Account with an external signer bound to it
    pub fn with_signer(account: Address) -> Self {
        Self {
            account: Some(account),
            signer: Some(Arc::new(ExternalSigner::new(account))),
        }
    }
}

impl fmt::Debug for ConnectedWallet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectedWallet")
            .field("account", &self.account)
            .field("can_sign", &self.signer.is_some())
            .finish()
    }
}

impl WalletConnection for ConnectedWallet {
    fn current_account(&self) -> Option<Address> {
        self.account
    }

    fn optional_signer(&self) -> Option<Arc<dyn Signer>> {
        self.signer.clone()
    }
}
