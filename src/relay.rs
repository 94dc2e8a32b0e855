//! Swap and approval relays
//!
//! Both operations check the wallet's chain against [`SUPPORTED_NETWORKS`],
//! ask the router for a ready-made transaction and hand it to the wallet.
//! Nothing is retried: one failed router call or submission ends the call.
//!
//! [`SUPPORTED_NETWORKS`]: crate::networks::SUPPORTED_NETWORKS

use crate::erc20;
use crate::networks;
use crate::router::{ApprovalParams, RouteParams, RouterClient};
use crate::wallet::{EvmWalletClient, TransactionCall};
use crate::{Error, Result};
use alloy::primitives::{Address, TxHash, U256};
use serde::{Serialize, Serializer};
use std::fmt;
use tracing::{debug, info, warn};

/// Status returned when the current allowance already covers the amount
pub const ENOUGH_ALLOWANCE: &str = "Enough allowance, skipping approval";

/// Swap of `amount_in` base units of `token_in` into `token_out`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwapIntent {
    pub token_in: Address,
    pub token_out: Address,
    pub amount_in: U256,
}

/// Request to make sure `amount` of `token` is approved for the router
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApprovalIntent {
    pub token: Address,
    pub amount: U256,
    pub wallet_address: Address,
}

/// Result of an approval check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApprovalOutcome {
    /// Allowance strictly exceeded the requested amount
    Skipped,
    /// Approval transaction submitted
    Submitted(TxHash),
}

impl fmt::Display for ApprovalOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApprovalOutcome::Skipped => f.write_str(ENOUGH_ALLOWANCE),
            ApprovalOutcome::Submitted(hash) => write!(f, "{}", hash),
        }
    }
}

impl Serialize for ApprovalOutcome {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Fails with `UnsupportedNetwork` for chains the router does not serve
fn ensure_supported(chain_id: u64) -> Result<()> {
    if networks::is_supported(chain_id) {
        Ok(())
    } else {
        warn!(chain_id, "Rejecting unsupported chain");
        Err(Error::UnsupportedNetwork(chain_id))
    }
}

/// Relays swap and approval transactions from a router to a wallet
pub struct SwapRelay<R> {
    router: R,
}

impl<R: RouterClient> SwapRelay<R> {
    pub fn new(router: R) -> Self {
        Self { router }
    }

    pub fn router(&self) -> &R {
        &self.router
    }

    /// Route `intent` through the router and submit the resulting transaction
    pub async fn route(&self, wallet: &dyn EvmWalletClient, intent: SwapIntent) -> Result<TxHash> {
        let chain_id = wallet.chain_id();
        let sender = wallet.address();
        ensure_supported(chain_id)?;

        self.submit_route(wallet, chain_id, sender, intent)
            .await
            .map_err(Error::route_failed)
    }

    async fn submit_route(
        &self,
        wallet: &dyn EvmWalletClient,
        chain_id: u64,
        sender: Address,
        intent: SwapIntent,
    ) -> Result<TxHash> {
        let params = RouteParams {
            chain_id,
            token_in: intent.token_in,
            token_out: intent.token_out,
            amount_in: intent.amount_in,
            from_address: sender,
            receiver: sender,
            spender: sender,
        };
        let route = self.router.get_route_data(&params).await?;
        debug!(
            to = %route.tx.to,
            value = %route.tx.value,
            amount_out = ?route.amount_out,
            "Received route"
        );

        let hash = wallet
            .send_transaction(TransactionCall {
                to: route.tx.to,
                data: route.tx.data,
                value: Some(route.tx.value),
            })
            .await?;

        info!(chain_id, %hash, "Submitted route transaction");
        Ok(hash)
    }

    /// Submit an approval unless the current allowance already exceeds the amount
    pub async fn check_approval(
        &self,
        wallet: &dyn EvmWalletClient,
        intent: ApprovalIntent,
    ) -> Result<ApprovalOutcome> {
        let chain_id = wallet.chain_id();
        let sender = wallet.address();
        ensure_supported(chain_id)?;

        if intent.wallet_address != sender {
            debug!(
                requested = %intent.wallet_address,
                %sender,
                "Approval requested for another address; using the wallet's sender"
            );
        }

        self.submit_approval(wallet, chain_id, sender, intent)
            .await
            .map_err(Error::approval_failed)
    }

    async fn submit_approval(
        &self,
        wallet: &dyn EvmWalletClient,
        chain_id: u64,
        sender: Address,
        intent: ApprovalIntent,
    ) -> Result<ApprovalOutcome> {
        let params = ApprovalParams {
            from_address: sender,
            chain_id,
            amount: intent.amount,
            token_address: intent.token,
        };
        let approval = self.router.get_approval_data(&params).await?;

        let allowance = wallet
            .read(erc20::allowance(intent.token, sender, approval.spender))
            .await?
            .to_u256()?;
        debug!(%allowance, amount = %intent.amount, spender = %approval.spender, "Current allowance");

        // Equal allowance still re-approves
        if allowance > intent.amount {
            info!(token = %intent.token, "Enough allowance, skipping approval");
            return Ok(ApprovalOutcome::Skipped);
        }

        let hash = wallet
            .send_transaction(TransactionCall {
                to: approval.tx.to,
                data: approval.tx.data,
                value: None,
            })
            .await?;

        info!(chain_id, %hash, token = %intent.token, "Submitted approval transaction");
        Ok(ApprovalOutcome::Submitted(hash))
    }
}
