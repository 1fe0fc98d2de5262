//! Locker reads via the contract accessor

use alloy_primitives::Address;
use locker_core::ProtocolError;

use crate::abi::{AbiKind, ILocker, IStandardToken, Locker};
use crate::accessor::ContractAccessor;
use crate::format::format_amount;
use crate::state::{GlobalParams, TokenSnapshot};

/// Fetch `price` and `penaltyfee` from the active locker.
pub async fn fetch_global_params(
    accessor: &ContractAccessor,
    locker: &Locker,
) -> Result<GlobalParams, ProtocolError> {
    let lock_contract = accessor.locker(locker);

    let price = lock_contract.call(ILocker::priceCall {}).await?._0;
    let penalty_fee = lock_contract.call(ILocker::penaltyfeeCall {}).await?._0;

    Ok(GlobalParams {
        price: format_amount(price)?,
        penalty_fee: penalty_fee.to_string(),
    })
}

/// Fetch balance, allowance, locked amount, symbol, name and unlock time for
/// `token_address`, in that order. Any failing read abandons the whole fetch.
pub async fn fetch_token_snapshot(
    accessor: &ContractAccessor,
    locker: &Locker,
    token_address: &str,
    account: Address,
) -> Result<TokenSnapshot, ProtocolError> {
    let contract = accessor.contract(token_address, AbiKind::StandardToken)?;
    let lock_contract = accessor.locker(locker);
    let token = contract.address();

    let balance = contract
        .call(IStandardToken::balanceOfCall { owner: account })
        .await?
        ._0;
    let allowance = contract
        .call(IStandardToken::allowanceCall {
            owner: account,
            spender: locker.address(),
        })
        .await?
        ._0;
    let locked_amount = lock_contract
        .call(ILocker::GetBalanceCall { token })
        .await?
        ._0;
    let symbol = contract.call(IStandardToken::symbolCall {}).await?._0;
    let name = contract.call(IStandardToken::nameCall {}).await?._0;
    let unlock_time = lock_contract
        .call(ILocker::GetUnlockTimeCall { token })
        .await?
        ._0;

    tracing::debug!(
        token = %token,
        locker = %locker.address(),
        %symbol,
        "Fetched token lock state"
    );

    Ok(TokenSnapshot {
        balance,
        allowance,
        locked_amount,
        symbol,
        name,
        unlock_time,
    })
}
