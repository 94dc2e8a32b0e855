//! Enso swap tools
//!
//! Two agent tools for token swaps through the Enso router:
//! - `enso_route`: fetch the best route for a swap and submit it from the wallet
//! - `enso_check_approval`: approve the router for a token unless the current
//!   allowance already covers the amount
//!
//! Routing is done by the Enso API and signing by the wallet collaborator;
//! this crate validates the chain, relays the request and reports the
//! resulting transaction hash.

pub mod config;
pub mod erc20;
pub mod networks;
pub mod relay;
pub mod router;
pub mod tools;
pub mod wallet;

mod error;

// Re-export commonly used types
pub use config::{Config, EnsoConfig, RpcConfig, ENSO_API_KEY_ENV};
pub use error::{Error, Result};
pub use relay::{ApprovalIntent, ApprovalOutcome, SwapIntent, SwapRelay, ENOUGH_ALLOWANCE};
pub use router::{EnsoClient, RouterClient};
pub use tools::{ToolRegistry, TOOL_CHECK_APPROVAL, TOOL_ROUTE};
pub use wallet::{AlloyWallet, EvmWalletClient, SecureWallet};
