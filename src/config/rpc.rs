//! RPC endpoint configuration
//!
//! Endpoints are resolved per chain, highest priority first:
//! 1. Per-chain env vars (ETH_RPC_URL, ARBITRUM_RPC_URL, etc.)
//! 2. Provider API keys (ALCHEMY_API_KEY, then INFURA_API_KEY)
//! 3. Public RPC fallbacks - for testing only
//!
//! ```bash
//! export ETH_RPC_URL="https://eth-mainnet.g.alchemy.com/v2/YOUR_KEY"
//! export ALCHEMY_API_KEY="YOUR_KEY"
//! ```

use crate::networks::{chains, SUPPORTED_NETWORKS};
use std::collections::HashMap;

/// RPC configuration for multiple chains
#[derive(Debug, Clone, Default)]
pub struct RpcConfig {
    /// RPC URLs indexed by chain ID
    urls: HashMap<u64, String>,
}

/// Provider API key environment variables
mod env_vars {
    pub const ALCHEMY_API_KEY: &str = "ALCHEMY_API_KEY";
    pub const INFURA_API_KEY: &str = "INFURA_API_KEY";
}

/// Per-chain URL environment variable
fn rpc_url_var(chain_id: u64) -> Option<&'static str> {
    match chain_id {
        chains::ETHEREUM => Some("ETH_RPC_URL"),
        chains::OPTIMISM => Some("OPTIMISM_RPC_URL"),
        chains::BSC => Some("BSC_RPC_URL"),
        chains::GNOSIS => Some("GNOSIS_RPC_URL"),
        chains::POLYGON => Some("POLYGON_RPC_URL"),
        chains::ZKSYNC => Some("ZKSYNC_RPC_URL"),
        chains::BASE => Some("BASE_RPC_URL"),
        chains::ARBITRUM => Some("ARBITRUM_RPC_URL"),
        chains::AVALANCHE => Some("AVALANCHE_RPC_URL"),
        chains::LINEA => Some("LINEA_RPC_URL"),
        chains::BLAST => Some("BLAST_RPC_URL"),
        _ => None,
    }
}

/// Alchemy network slug
fn alchemy_network(chain_id: u64) -> Option<&'static str> {
    match chain_id {
        chains::ETHEREUM => Some("eth-mainnet"),
        chains::OPTIMISM => Some("opt-mainnet"),
        chains::POLYGON => Some("polygon-mainnet"),
        chains::ZKSYNC => Some("zksync-mainnet"),
        chains::BASE => Some("base-mainnet"),
        chains::ARBITRUM => Some("arb-mainnet"),
        chains::AVALANCHE => Some("avax-mainnet"),
        chains::LINEA => Some("linea-mainnet"),
        chains::BLAST => Some("blast-mainnet"),
        _ => None,
    }
}

/// Infura network slug
fn infura_network(chain_id: u64) -> Option<&'static str> {
    match chain_id {
        chains::ETHEREUM => Some("mainnet"),
        chains::OPTIMISM => Some("optimism-mainnet"),
        chains::POLYGON => Some("polygon-mainnet"),
        chains::ARBITRUM => Some("arbitrum-mainnet"),
        chains::AVALANCHE => Some("avalanche-mainnet"),
        chains::LINEA => Some("linea-mainnet"),
        _ => None,
    }
}

/// Public RPC endpoints (rate limited, for testing only)
fn public_rpc(chain_id: u64) -> Option<&'static str> {
    match chain_id {
        chains::ETHEREUM => Some("https://eth.llamarpc.com"),
        chains::OPTIMISM => Some("https://mainnet.optimism.io"),
        chains::BSC => Some("https://bsc-dataseed.bnbchain.org"),
        chains::GNOSIS => Some("https://rpc.gnosischain.com"),
        chains::POLYGON => Some("https://polygon-rpc.com"),
        chains::ZKSYNC => Some("https://mainnet.era.zksync.io"),
        chains::BASE => Some("https://mainnet.base.org"),
        chains::ARBITRUM => Some("https://arb1.arbitrum.io/rpc"),
        chains::AVALANCHE => Some("https://api.avax.network/ext/bc/C/rpc"),
        chains::LINEA => Some("https://rpc.linea.build"),
        chains::BLAST => Some("https://rpc.blast.io"),
        _ => None,
    }
}

impl RpcConfig {
    /// Create RPC config from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Resolve endpoints through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let alchemy_key = lookup(env_vars::ALCHEMY_API_KEY);
        let infura_key = lookup(env_vars::INFURA_API_KEY);
        let mut urls = HashMap::new();

        for &chain_id in SUPPORTED_NETWORKS {
            if let Some(url) = rpc_url_var(chain_id).and_then(&lookup) {
                tracing::debug!(chain_id, "Using per-chain RPC URL");
                urls.insert(chain_id, url);
                continue;
            }

            let provider_url = alchemy_key
                .as_deref()
                .zip(alchemy_network(chain_id))
                .map(|(key, network)| format!("https://{}.g.alchemy.com/v2/{}", network, key))
                .or_else(|| {
                    infura_key
                        .as_deref()
                        .zip(infura_network(chain_id))
                        .map(|(key, network)| format!("https://{}.infura.io/v3/{}", network, key))
                });

            if let Some(url) = provider_url {
                urls.insert(chain_id, url);
            } else if let Some(url) = public_rpc(chain_id) {
                if chain_id == chains::ETHEREUM {
                    tracing::warn!("No RPC configured for Ethereum, using public RPC (rate limited)");
                }
                urls.insert(chain_id, url.to_string());
            }
        }

        Self { urls }
    }

    /// Create with explicit RPC URLs
    pub fn with_urls(urls: HashMap<u64, String>) -> Self {
        Self { urls }
    }

    /// Override individual chains, e.g. from the config file
    pub fn with_overrides(mut self, overrides: &HashMap<u64, String>) -> Self {
        for (chain_id, url) in overrides {
            self.urls.insert(*chain_id, url.clone());
        }
        self
    }

    /// Get RPC URL for a chain
    pub fn get(&self, chain_id: u64) -> Option<&str> {
        self.urls.get(&chain_id).map(|s| s.as_str())
    }
}
