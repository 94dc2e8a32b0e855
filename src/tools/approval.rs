//! `enso_check_approval` tool

use super::registry::Tool;
use super::types::{parse_address, parse_amount};
use super::TOOL_CHECK_APPROVAL;
use crate::relay::{ApprovalIntent, ApprovalOutcome, SwapRelay};
use crate::router::RouterClient;
use crate::wallet::EvmWalletClient;
use crate::{Error, Result};
use async_trait::async_trait;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use ts_rs::TS;

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CheckApprovalParameters {
    /// Address of the token the router will spend
    pub token: String,
    /// Amount in base units, as a decimal string
    pub amount: String,
    /// Address of the wallet holding the token
    pub wallet_address: String,
}

impl TryFrom<CheckApprovalParameters> for ApprovalIntent {
    type Error = Error;

    fn try_from(params: CheckApprovalParameters) -> Result<Self> {
        Ok(ApprovalIntent {
            token: parse_address("token", &params.token)?,
            amount: parse_amount("amount", &params.amount)?,
            wallet_address: parse_address("walletAddress", &params.wallet_address)?,
        })
    }
}

/// Approves the Enso router for a token when the allowance falls short
pub struct CheckApprovalTool<R> {
    relay: Arc<SwapRelay<R>>,
}

impl<R> CheckApprovalTool<R> {
    pub fn new(relay: Arc<SwapRelay<R>>) -> Self {
        Self { relay }
    }
}

#[async_trait]
impl<R: RouterClient + 'static> Tool for CheckApprovalTool<R> {
    const NAME: &'static str = TOOL_CHECK_APPROVAL;
    type Input = CheckApprovalParameters;
    type Output = ApprovalOutcome;

    fn description(&self) -> &'static str {
        "Check if the wallet has enough approval for a token to be spent by Enso Router. \
         The approval must be done before the route transaction"
    }

    async fn execute(
        &self,
        wallet: &dyn EvmWalletClient,
        input: CheckApprovalParameters,
    ) -> Result<ApprovalOutcome> {
        let intent = ApprovalIntent::try_from(input)?;
        self.relay.check_approval(wallet, intent).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::U256;

    #[test]
    fn parameters_use_camel_case() {
        let params: CheckApprovalParameters = serde_json::from_value(serde_json::json!({
            "token": "0xa0b86991c6218b36c1d19d4a2e9eb0ce3606eb48",
            "amount": "250",
            "walletAddress": "0xf39fd6e51aad88f6f4ce6ab8827279cfffb92266"
        }))
        .unwrap();

        let intent = ApprovalIntent::try_from(params).unwrap();
        assert_eq!(intent.amount, U256::from(250u64));
    }

    #[test]
    fn malformed_wallet_address_rejected() {
        let params = CheckApprovalParameters {
            token: "0xa0b86991c6218b36c1d19d4a2e9eb0ce3606eb48".to_string(),
            amount: "250".to_string(),
            wallet_address: "me".to_string(),
        };
        let err = ApprovalIntent::try_from(params).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(ref msg) if msg.contains("walletAddress")));
    }

    #[test]
    fn test_input_schema() {
        let schema: serde_json::Value = schemars::schema_for!(CheckApprovalParameters).into();

        assert_eq!(schema["type"], "object");
        assert!(schema["properties"]["token"].is_object());
        assert!(schema["properties"]["amount"].is_object());
        assert!(schema["properties"]["walletAddress"].is_object());
    }
}
