//! Scripted chain used by unit tests

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use alloy_primitives::{address, Address, U256};
use alloy_sol_types::{SolCall, SolValue};
use async_trait::async_trait;
use evm_client::CallProvider;
use locker_core::RpcError;

use crate::abi::{ILocker, IStandardToken};

pub(crate) const ACCOUNT: Address = address!("5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed");
pub(crate) const OTHER_ACCOUNT: Address = address!("3333333333333333333333333333333333333333");
pub(crate) const TOKEN_A: Address = address!("fB6916095ca1df60bB79Ce92cE3Ea74c37c5d359");
pub(crate) const TOKEN_B: Address = address!("dbF03B407c01E7cD3CBea99509d93f8DDDC8C6FB");
pub(crate) const TOKEN_LOCKER: Address = address!("1111111111111111111111111111111111111111");
pub(crate) const LP_LOCKER: Address = address!("2222222222222222222222222222222222222222");

/// One token as the chain reports it
pub(crate) struct TokenFixture {
    pub token: Address,
    pub balance: U256,
    pub allowance: U256,
    pub locked: U256,
    pub symbol: &'static str,
    pub name: &'static str,
    pub unlock_time: u64,
}

/// Answers `eth_call`s from a fixed table keyed by target and calldata
#[derive(Default)]
pub(crate) struct MockChain {
    responses: HashMap<(Address, Vec<u8>), Vec<u8>>,
    delays: HashMap<Address, Duration>,
    calls: AtomicUsize,
}

impl MockChain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn returns<C: SolCall>(mut self, to: Address, call: C, ret: Vec<u8>) -> Self {
        self.responses.insert((to, call.abi_encode()), ret);
        self
    }

    pub fn returns_uint<C: SolCall>(self, to: Address, call: C, value: U256) -> Self {
        self.returns(to, call, value.abi_encode())
    }

    pub fn returns_string<C: SolCall>(self, to: Address, call: C, value: &str) -> Self {
        self.returns(to, call, (value.to_string(),).abi_encode_params())
    }

    /// Delay every response from `to`
    pub fn with_delay(mut self, to: Address, delay: Duration) -> Self {
        self.delays.insert(to, delay);
        self
    }

    /// Drop the scripted response for one call so it reverts
    pub fn without<C: SolCall>(mut self, to: Address, call: C) -> Self {
        self.responses.remove(&(to, call.abi_encode()));
        self
    }

    /// Script all six per-token reads against `locker` for [`ACCOUNT`]
    pub fn token(self, locker: Address, fixture: TokenFixture) -> Self {
        self.token_for(locker, ACCOUNT, fixture)
    }

    /// Script all six per-token reads against `locker` for `owner`
    pub fn token_for(self, locker: Address, owner: Address, fixture: TokenFixture) -> Self {
        let token = fixture.token;
        self.returns_uint(
            token,
            IStandardToken::balanceOfCall { owner },
            fixture.balance,
        )
        .returns_uint(
            token,
            IStandardToken::allowanceCall {
                owner,
                spender: locker,
            },
            fixture.allowance,
        )
        .returns_uint(locker, ILocker::GetBalanceCall { token }, fixture.locked)
        .returns_string(token, IStandardToken::symbolCall {}, fixture.symbol)
        .returns_string(token, IStandardToken::nameCall {}, fixture.name)
        .returns_uint(
            locker,
            ILocker::GetUnlockTimeCall { token },
            U256::from(fixture.unlock_time),
        )
    }

    /// Script the locker globals
    pub fn globals(self, locker: Address, price: U256, penalty_fee: U256) -> Self {
        self.returns_uint(locker, ILocker::priceCall {}, price)
            .returns_uint(locker, ILocker::penaltyfeeCall {}, penalty_fee)
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CallProvider for MockChain {
    async fn call(&self, to: Address, data: Vec<u8>) -> Result<Vec<u8>, RpcError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delays.get(&to) {
            tokio::time::sleep(*delay).await;
        }
        self.responses
            .get(&(to, data))
            .cloned()
            .ok_or_else(|| RpcError::ApiError {
                code: 3,
                message: "execution reverted".to_string(),
            })
    }
}

/// 1e18 as U256
pub(crate) fn one_token() -> U256 {
    U256::from(1_000_000_000_000_000_000u64)
}
