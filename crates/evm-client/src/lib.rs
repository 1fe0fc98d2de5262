//! evm-client: JSON-RPC read provider with wallet capabilities
//!
//! This crate wraps an alloy HTTP provider for the few reads the locker
//! needs, the capability traits a wallet connection exposes, chain address
//! validation and provider status probing.

pub mod address;
pub mod status;
pub mod wallet;

use std::time::Duration;

use alloy::eips::BlockId;
use alloy::providers::{Provider, RootProvider};
use alloy::rpc::types::{TransactionInput, TransactionRequest};
use alloy::transports::http::{Client, Http};
use alloy::transports::{RpcError as TransportRpcError, TransportError};
use alloy_primitives::{Address, Bytes};
use async_trait::async_trait;
use locker_core::{BlockNumber, RpcConfig, RpcError};

pub use address::{is_valid_address, parse_address};
pub use status::{detect_status, ProviderStatus};
pub use wallet::{CallProvider, ConnectedWallet, ExternalSigner, Signer, WalletConnection};

/// Result type for RPC client operations
pub type Result<T> = std::result::Result<T, RpcError>;

type HttpProvider = RootProvider<Http<Client>>;

/// High-level EVM JSON-RPC client
#[derive(Clone)]
pub struct RpcClient {
    provider: HttpProvider,
    config: RpcConfig,
}

impl RpcClient {
    /// Create a client for the configured endpoint (no probing)
    pub fn new(config: RpcConfig) -> Result<Self> {
        let url: reqwest::Url = config.url.parse().map_err(|e| RpcError::Unreachable {
            url: format!("{}: {}", config.url, e),
        })?;

        Ok(Self {
            provider: HttpProvider::new_http(url),
            config,
        })
    }

    /// Get the current provider configuration
    pub fn config(&self) -> &RpcConfig {
        &self.config
    }

    fn timeout(&self) -> Duration {
        Duration::from_secs(self.config.timeout_secs)
    }

    /// Get the chain id reported by the provider
    pub async fn chain_id(&self) -> Result<u64> {
        timed_request("eth_chainId", self.timeout(), async {
            self.provider
                .get_chain_id()
                .await
                .map_err(|e| map_transport_error(&self.config.url, e))
        })
        .await
    }

    /// Get the latest block number
    pub async fn block_number(&self) -> Result<BlockNumber> {
        timed_request("eth_blockNumber", self.timeout(), async {
            self.provider
                .get_block_number()
                .await
                .map_err(|e| map_transport_error(&self.config.url, e))
        })
        .await
    }

    /// Execute a read-only call against the latest block
    pub async fn eth_call(&self, to: Address, data: &[u8]) -> Result<Vec<u8>> {
        let tx = TransactionRequest::default()
            .to(to)
            .input(TransactionInput::new(Bytes::copy_from_slice(data)));

        tracing::trace!(%to, len = data.len(), "eth_call");

        let output = timed_request("eth_call", self.timeout(), async {
            self.provider
                .call(&tx)
                .block(BlockId::latest())
                .await
                .map_err(|e| map_transport_error(&self.config.url, e))
        })
        .await?;

        Ok(output.to_vec())
    }

    /// Check if the provider is answering
    pub async fn is_online(&self) -> bool {
        self.block_number().await.is_ok()
    }
}

#[async_trait]
impl CallProvider for RpcClient {
    async fn call(&self, to: Address, data: Vec<u8>) -> Result<Vec<u8>> {
        self.eth_call(to, &data).await
    }
}

/// Wrap a provider request with the configured timeout.
async fn timed_request<T>(
    method: &'static str,
    timeout: Duration,
    fut: impl std::future::Future<Output = Result<T>>,
) -> Result<T> {
    tokio::time::timeout(timeout, fut)
        .await
        .map_err(|_| RpcError::Timeout { method })?
}

fn map_transport_error(url: &str, err: TransportError) -> RpcError {
    match err {
        TransportRpcError::ErrorResp(payload) => RpcError::ApiError {
            code: payload.code,
            message: payload.message.to_string(),
        },
        TransportRpcError::DeserError { err, .. } => RpcError::ParseError(err.to_string()),
        TransportRpcError::NullResp => RpcError::ParseError("null response".to_string()),
        other => RpcError::Unreachable {
            url: format!("{}: {}", url, other),
        },
    }
}
