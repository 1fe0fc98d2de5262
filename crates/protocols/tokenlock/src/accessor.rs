//! Contract accessor
//!
//! Binds a contract address and ABI to the shared read provider and, when the
//! wallet can sign, to its signer. Handles are not cached; each refresh builds
//! its own.

use std::sync::Arc;

use alloy_primitives::Address;
use alloy_sol_types::SolCall;
use evm_client::{parse_address, CallProvider, Signer, WalletConnection};
use locker_core::{Chain, ProtocolError};

use crate::abi::{AbiKind, Locker};

/// Builds contract handles for one refresh cycle
#[derive(Clone)]
pub struct ContractAccessor {
    provider: Arc<dyn CallProvider>,
    wallet: Arc<dyn WalletConnection>,
    chain: Chain,
}

impl ContractAccessor {
    pub fn new(
        provider: Arc<dyn CallProvider>,
        wallet: Arc<dyn WalletConnection>,
        chain: Chain,
    ) -> Self {
        Self {
            provider,
            wallet,
            chain,
        }
    }

    /// Bind a user-supplied address. Fails before any network call if the
    /// address is not valid on this chain.
    pub fn contract(&self, address: &str, abi: AbiKind) -> Result<ContractHandle, ProtocolError> {
        let address = parse_address(address, self.chain)?;
        Ok(self.bind(address, abi))
    }

    /// Bind the configured locker contract
    pub fn locker(&self, locker: &Locker) -> ContractHandle {
        self.bind(locker.address(), locker.abi())
    }

    /// Account of the injected wallet, if connected
    pub fn account(&self) -> Option<Address> {
        self.wallet.current_account()
    }

    fn bind(&self, address: Address, abi: AbiKind) -> ContractHandle {
        ContractHandle {
            address,
            abi,
            provider: self.provider.clone(),
            signer: self.wallet.optional_signer(),
        }
    }
}

/// A contract bound to the read provider and, optionally, a signer
#[derive(Clone)]
pub struct ContractHandle {
    address: Address,
    abi: AbiKind,
    provider: Arc<dyn CallProvider>,
    signer: Option<Arc<dyn Signer>>,
}

impl ContractHandle {
    pub fn address(&self) -> Address {
        self.address
    }

    pub fn abi(&self) -> AbiKind {
        self.abi
    }

    /// Whether state-changing calls could be submitted through this handle
    pub fn is_writable(&self) -> bool {
        self.signer.is_some()
    }

    pub fn signer(&self) -> Option<&Arc<dyn Signer>> {
        self.signer.as_ref()
    }

    /// Execute a view call and decode its return values
    pub async fn call<C>(&self, call: C) -> Result<C::Return, ProtocolError>
    where
        C: SolCall + Send,
    {
        let method = C::SIGNATURE;
        tracing::trace!(
            contract = %self.address,
            abi = self.abi.name(),
            method,
            "Calling contract"
        );

        let raw = self
            .provider
            .call(self.address, call.abi_encode())
            .await
            .map_err(|e| ProtocolError::CallFailed {
                method,
                reason: e.to_string(),
            })?;

        C::abi_decode_returns(&raw, true).map_err(|e| ProtocolError::DecodeFailed {
            method,
            message: e.to_string(),
        })
    }
}
