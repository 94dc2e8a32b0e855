//! Minimal ERC-20 call encoding

use crate::wallet::ContractRead;
use alloy::primitives::{Address, Bytes};

/// `allowance(address,address)` selector
pub const ALLOWANCE_SELECTOR: [u8; 4] = [0xdd, 0x62, 0xed, 0x3e];

/// Left-pad an address to a 32-byte ABI word
fn push_address(calldata: &mut Vec<u8>, address: Address) {
    calldata.extend_from_slice(&[0u8; 12]);
    calldata.extend_from_slice(address.as_slice());
}

/// Read of `token.allowance(owner, spender)`
pub fn allowance(token: Address, owner: Address, spender: Address) -> ContractRead {
    let mut calldata = Vec::with_capacity(4 + 32 * 2);
    calldata.extend_from_slice(&ALLOWANCE_SELECTOR);
    push_address(&mut calldata, owner);
    push_address(&mut calldata, spender);

    ContractRead {
        address: token,
        function: "allowance",
        calldata: Bytes::from(calldata),
    }
}
