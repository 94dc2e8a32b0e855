//! Wallet collaborator
//!
//! The relays only ever talk to a wallet through [`EvmWalletClient`]: the
//! active chain, the sending address, transaction submission and read-only
//! contract calls. Signing and broadcasting stay behind the implementation.

mod provider;
mod signer;

pub use provider::AlloyWallet;
pub use signer::{SecureWallet, PRIVATE_KEY_ENV};

use crate::{Error, Result};
use alloy::primitives::{Address, Bytes, TxHash, U256};
use async_trait::async_trait;
use std::str::FromStr;

/// Transaction handed to the wallet for signing and submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionCall {
    pub to: Address,
    pub data: Bytes,
    /// Native value; `None` sends the transaction without a value field
    pub value: Option<U256>,
}

/// Read-only contract call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContractRead {
    /// Contract to call
    pub address: Address,
    /// Function name, for logs and error messages
    pub function: &'static str,
    /// ABI-encoded call data
    pub calldata: Bytes,
}

/// Value returned by a contract read
///
/// Wallet backends report integers in different shapes: raw ABI return
/// data from `eth_call`, native integers, or decimal strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadValue {
    /// ABI-encoded return data
    Word(Bytes),
    Uint(U256),
    Number(u64),
    /// Decimal (or `0x`-prefixed hex) string
    Text(String),
}

impl ReadValue {
    /// Decode into a single unsigned integer
    pub fn to_u256(&self) -> Result<U256> {
        match self {
            ReadValue::Word(bytes) => {
                if bytes.len() < 32 {
                    return Err(Error::Wallet(format!(
                        "expected a 32-byte word, got {} bytes",
                        bytes.len()
                    )));
                }
                Ok(U256::from_be_slice(&bytes[..32]))
            }
            ReadValue::Uint(value) => Ok(*value),
            ReadValue::Number(value) => Ok(U256::from(*value)),
            ReadValue::Text(text) => U256::from_str(text.trim()).map_err(|e| {
                Error::Wallet(format!("'{}' is not an unsigned integer: {}", text, e))
            }),
        }
    }
}

impl From<U256> for ReadValue {
    fn from(value: U256) -> Self {
        ReadValue::Uint(value)
    }
}

impl From<u64> for ReadValue {
    fn from(value: u64) -> Self {
        ReadValue::Number(value)
    }
}

impl From<String> for ReadValue {
    fn from(value: String) -> Self {
        ReadValue::Text(value)
    }
}

impl From<Bytes> for ReadValue {
    fn from(value: Bytes) -> Self {
        ReadValue::Word(value)
    }
}

/// EVM wallet used by the tools
#[async_trait]
pub trait EvmWalletClient: Send + Sync {
    /// Chain the wallet is connected to
    fn chain_id(&self) -> u64;

    /// Sending address
    fn address(&self) -> Address;

    /// Sign and submit a transaction, returning its hash
    async fn send_transaction(&self, tx: TransactionCall) -> Result<TxHash>;

    /// Execute a read-only contract call
    async fn read(&self, request: ContractRead) -> Result<ReadValue>;
}
