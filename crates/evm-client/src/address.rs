//! Chain address validation
//!
//! An address passes when it is `0x` followed by 40 hex digits and, if the
//! hex body mixes upper and lower case, the casing matches the EIP-55
//! checksum. Single-case bodies carry no checksum and are accepted as-is.

use alloy_primitives::Address;
use locker_core::{Chain, ProtocolError};

/// Chain id mixed into the checksum (EIP-1191), `None` for plain EIP-55
fn checksum_chain_id(chain: Chain) -> Option<u64> {
    match chain {
        Chain::Ethereum | Chain::Sepolia => None,
    }
}

/// Validate and parse an address for `chain`
pub fn parse_address(input: &str, chain: Chain) -> Result<Address, ProtocolError> {
    let invalid = || ProtocolError::InvalidAddress {
        address: input.to_string(),
    };

    let body = input.strip_prefix("0x").ok_or_else(invalid)?;
    if body.len() != 40 || !body.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(invalid());
    }

    let address: Address = input.parse().map_err(|_| invalid())?;

    let has_lower = body.bytes().any(|b| b.is_ascii_lowercase());
    let has_upper = body.bytes().any(|b| b.is_ascii_uppercase());
    if has_lower && has_upper && address.to_checksum(checksum_chain_id(chain)) != input {
        return Err(invalid());
    }

    Ok(address)
}

/// Pass/fail form of [`parse_address`]
pub fn is_valid_address(input: &str, chain: Chain) -> bool {
    parse_address(input, chain).is_ok()
}
