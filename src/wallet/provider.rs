//! `EvmWalletClient` backed by an alloy HTTP provider
//!
//! Transactions are filled (nonce, gas, chain id), signed by the local
//! `SecureWallet` and broadcast by alloy. Reads go through `eth_call`.

use super::{ContractRead, EvmWalletClient, ReadValue, SecureWallet, TransactionCall};
use crate::config::RpcConfig;
use crate::networks::network_name;
use crate::{Error, Result};
use alloy::primitives::{Address, TxHash};
use alloy::providers::{Provider, ProviderBuilder};
use alloy::rpc::types::TransactionRequest;
use async_trait::async_trait;
use url::Url;

/// Wallet bound to one chain's RPC endpoint
#[derive(Debug, Clone)]
pub struct AlloyWallet {
    signer: SecureWallet,
    rpc_url: Url,
    /// Cached at construction
    chain_id: u64,
}

fn parse_rpc_url(rpc_url: &str) -> Result<Url> {
    rpc_url
        .parse()
        .map_err(|e| Error::Config(format!("Invalid RPC URL: {}", e)))
}

impl AlloyWallet {
    /// Create a wallet, asking the endpoint which chain it serves
    pub async fn connect(signer: SecureWallet, rpc_url: &str) -> Result<Self> {
        let url = parse_rpc_url(rpc_url)?;
        let provider = ProviderBuilder::new().connect_http(url.clone());
        let chain_id = provider
            .get_chain_id()
            .await
            .map_err(|e| Error::Wallet(format!("Failed to get chain ID: {}", e)))?;

        tracing::debug!(chain_id, address = %signer.address(), "Connected wallet");
        Ok(Self {
            signer,
            rpc_url: url,
            chain_id,
        })
    }

    /// Connect to the configured endpoint for `chain_id`
    ///
    /// Fails if the endpoint serves a different chain.
    pub async fn from_rpc_config(
        signer: SecureWallet,
        rpc: &RpcConfig,
        chain_id: u64,
    ) -> Result<Self> {
        let rpc_url = rpc
            .get(chain_id)
            .ok_or_else(|| Error::Config(format!("RPC URL not configured for chain {}", chain_id)))?;

        let wallet = Self::connect(signer, rpc_url).await?;
        if wallet.chain_id != chain_id {
            return Err(Error::Config(format!(
                "RPC endpoint for {} serves {}",
                describe_chain(chain_id),
                describe_chain(wallet.chain_id)
            )));
        }
        Ok(wallet)
    }
}

fn describe_chain(chain_id: u64) -> String {
    match network_name(chain_id) {
        Some(name) => format!("{} (chain {})", name, chain_id),
        None => format!("chain {}", chain_id),
    }
}

#[async_trait]
impl EvmWalletClient for AlloyWallet {
    fn chain_id(&self) -> u64 {
        self.chain_id
    }

    fn address(&self) -> Address {
        self.signer.address()
    }

    async fn send_transaction(&self, tx: TransactionCall) -> Result<TxHash> {
        let provider = ProviderBuilder::new()
            .wallet(self.signer.wallet().clone())
            .connect_http(self.rpc_url.clone());

        let mut request = TransactionRequest::default()
            .from(self.address())
            .to(tx.to)
            .input(tx.data.into());
        if let Some(value) = tx.value {
            request = request.value(value);
        }

        let pending = provider
            .send_transaction(request)
            .await
            .map_err(|e| Error::Wallet(format!("Failed to send transaction: {}", e)))?;

        Ok(*pending.tx_hash())
    }

    async fn read(&self, request: ContractRead) -> Result<ReadValue> {
        let provider = ProviderBuilder::new().connect_http(self.rpc_url.clone());

        let tx = TransactionRequest::default()
            .from(self.address())
            .to(request.address)
            .input(request.calldata.into());

        let result = provider.call(tx).await.map_err(|e| {
            Error::Wallet(format!("Failed to call {}: {}", request.function, e))
        })?;

        Ok(ReadValue::Word(result))
    }
}
