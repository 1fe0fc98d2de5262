//! Provider status detection
//!
//! Probes the RPC endpoint for liveness, chain id and head block.

use locker_core::{BlockNumber, Chain};
use serde::{Deserialize, Serialize};

use crate::RpcClient;

/// Provider state detected through probing
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderStatus {
    /// Provider is reachable and responding
    pub is_online: bool,

    /// Chain id reported by the provider
    pub chain_id: Option<u64>,

    /// Latest block number
    pub block_number: BlockNumber,

    /// Reported chain id matches the configured chain
    pub chain_matches: bool,
}

impl ProviderStatus {
    fn offline() -> Self {
        Self {
            is_online: false,
            chain_id: None,
            block_number: 0,
            chain_matches: false,
        }
    }

    /// Chain the provider is actually serving, if known
    pub fn reported_chain(&self) -> Option<Chain> {
        self.chain_id.and_then(Chain::from_chain_id)
    }
}

/// Detect provider status by probing endpoints
pub async fn detect_status(client: &RpcClient, expected: Chain) -> ProviderStatus {
    let block_number = match client.block_number().await {
        Ok(n) => n,
        Err(e) => {
            tracing::warn!(url = %client.config().url, error = %e, "Provider probe failed");
            return ProviderStatus::offline();
        }
    };

    let chain_id = client.chain_id().await.ok();
    let chain_matches = chain_id == Some(expected.chain_id());
    if !chain_matches {
        tracing::warn!(
            expected = expected.chain_id(),
            reported = ?chain_id,
            "Provider chain does not match configuration"
        );
    }

    ProviderStatus {
        is_online: true,
        chain_id,
        block_number,
        chain_matches,
    }
}
