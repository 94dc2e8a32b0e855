//! Networks the Enso router can build transactions for

/// Chain ID constants
pub mod chains {
    pub const ETHEREUM: u64 = 1;
    pub const OPTIMISM: u64 = 10;
    pub const BSC: u64 = 56;
    pub const GNOSIS: u64 = 100;
    pub const POLYGON: u64 = 137;
    pub const ZKSYNC: u64 = 324;
    pub const BASE: u64 = 8453;
    pub const ARBITRUM: u64 = 42161;
    pub const AVALANCHE: u64 = 43114;
    pub const LINEA: u64 = 59144;
    pub const BLAST: u64 = 81457;
}

/// Chain IDs accepted by both tools.
pub const SUPPORTED_NETWORKS: &[u64] = &[
    chains::ETHEREUM,
    chains::OPTIMISM,
    chains::BSC,
    chains::GNOSIS,
    chains::POLYGON,
    chains::ZKSYNC,
    chains::BASE,
    chains::ARBITRUM,
    chains::AVALANCHE,
    chains::LINEA,
    chains::BLAST,
];

pub fn is_supported(chain_id: u64) -> bool {
    SUPPORTED_NETWORKS.contains(&chain_id)
}

/// Convert a network name to its chain ID
pub fn parse_network(network: &str) -> Option<u64> {
    let chain_id = match network.to_lowercase().as_str() {
        "ethereum" | "mainnet" => chains::ETHEREUM,
        "optimism" => chains::OPTIMISM,
        "bsc" | "bnb" => chains::BSC,
        "gnosis" => chains::GNOSIS,
        "polygon" => chains::POLYGON,
        "zksync" => chains::ZKSYNC,
        "base" => chains::BASE,
        "arbitrum" => chains::ARBITRUM,
        "avalanche" => chains::AVALANCHE,
        "linea" => chains::LINEA,
        "blast" => chains::BLAST,
        _ => return None,
    };
    Some(chain_id)
}

pub fn network_name(chain_id: u64) -> Option<&'static str> {
    match chain_id {
        chains::ETHEREUM => Some("ethereum"),
        chains::OPTIMISM => Some("optimism"),
        chains::BSC => Some("bsc"),
        chains::GNOSIS => Some("gnosis"),
        chains::POLYGON => Some("polygon"),
        chains::ZKSYNC => Some("zksync"),
        chains::BASE => Some("base"),
        chains::ARBITRUM => Some("arbitrum"),
        chains::AVALANCHE => Some("avalanche"),
        chains::LINEA => Some("linea"),
        chains::BLAST => Some("blast"),
        _ => None,
    }
}
