//! Shared parsing for tool parameters.

use crate::{Error, Result};
use alloy::primitives::{Address, U256};
use std::str::FromStr;

/// Parse a `0x`-prefixed account address
pub(crate) fn parse_address(field: &str, value: &str) -> Result<Address> {
    Address::from_str(value.trim())
        .map_err(|e| Error::InvalidArgument(format!("Invalid {} address '{}': {}", field, value, e)))
}

/// Parse a non-negative integer amount in token base units
pub(crate) fn parse_amount(field: &str, value: &str) -> Result<U256> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(Error::InvalidArgument(format!("Missing {}", field)));
    }
    U256::from_str(trimmed)
        .map_err(|e| Error::InvalidArgument(format!("Invalid {} '{}': {}", field, value, e)))
}
