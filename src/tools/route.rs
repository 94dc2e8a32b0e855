//! `enso_route` tool

use super::registry::Tool;
use super::types::{parse_address, parse_amount};
use super::TOOL_ROUTE;
use crate::relay::{SwapIntent, SwapRelay};
use crate::router::RouterClient;
use crate::wallet::EvmWalletClient;
use crate::{Error, Result};
use alloy::primitives::TxHash;
use async_trait::async_trait;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use ts_rs::TS;

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct RouteParameters {
    /// Address of the token to swap from
    pub token_in: String,
    /// Address of the token to swap to
    pub token_out: String,
    /// Amount of `tokenIn` in base units, as a decimal string
    pub amount_in: String,
}

impl TryFrom<RouteParameters> for SwapIntent {
    type Error = Error;

    fn try_from(params: RouteParameters) -> Result<Self> {
        Ok(SwapIntent {
            token_in: parse_address("tokenIn", &params.token_in)?,
            token_out: parse_address("tokenOut", &params.token_out)?,
            amount_in: parse_amount("amountIn", &params.amount_in)?,
        })
    }
}

/// Finds the best Enso route and submits it from the wallet
pub struct RouteTool<R> {
    relay: Arc<SwapRelay<R>>,
}

impl<R> RouteTool<R> {
    pub fn new(relay: Arc<SwapRelay<R>>) -> Self {
        Self { relay }
    }
}

#[async_trait]
impl<R: RouterClient + 'static> Tool for RouteTool<R> {
    const NAME: &'static str = TOOL_ROUTE;
    type Input = RouteParameters;
    type Output = TxHash;

    fn description(&self) -> &'static str {
        "Find the best route from token to token and execute it"
    }

    async fn execute(&self, wallet: &dyn EvmWalletClient, input: RouteParameters) -> Result<TxHash> {
        let intent = SwapIntent::try_from(input)?;
        self.relay.route(wallet, intent).await
    }
}
