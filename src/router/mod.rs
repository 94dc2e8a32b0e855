//! Router collaborator
//!
//! Route and approval transactions are built remotely by the Enso router.
//! Responses are decoded into structs with required fields so a changed or
//! truncated payload fails before anything reaches the wallet.

mod enso;

pub use enso::EnsoClient;

use crate::{Error, Result};
use alloy::primitives::{Address, Bytes, U256};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::str::FromStr;

/// Request for a swap route
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteParams {
    pub chain_id: u64,
    pub token_in: Address,
    pub token_out: Address,
    pub amount_in: U256,
    pub from_address: Address,
    pub receiver: Address,
    pub spender: Address,
}

/// Request for an approval transaction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApprovalParams {
    pub from_address: Address,
    pub chain_id: u64,
    pub amount: U256,
    pub token_address: Address,
}

/// Transaction returned with a route
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RouteTransaction {
    pub to: Address,
    pub data: Bytes,
    #[serde(deserialize_with = "deserialize_amount")]
    pub value: U256,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteData {
    pub tx: RouteTransaction,
    #[serde(default)]
    pub amount_out: Option<Value>,
    #[serde(default)]
    pub gas: Option<Value>,
    #[serde(default)]
    pub price_impact: Option<f64>,
}

/// Approval transaction; never carries a value
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ApprovalTransaction {
    pub to: Address,
    pub data: Bytes,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApprovalData {
    pub spender: Address,
    pub tx: ApprovalTransaction,
    #[serde(default)]
    pub gas: Option<Value>,
}

/// Enso sends amounts as decimal strings; accept plain numbers too
fn deserialize_amount<'de, D>(deserializer: D) -> std::result::Result<U256, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Amount {
        Text(String),
        Number(u64),
    }

    match Amount::deserialize(deserializer)? {
        Amount::Text(text) => U256::from_str(&text).map_err(serde::de::Error::custom),
        Amount::Number(n) => Ok(U256::from(n)),
    }
}

/// Decode a router payload, reporting missing or malformed fields
pub(crate) fn decode_response<T: DeserializeOwned>(body: &str) -> Result<T> {
    serde_json::from_str(body).map_err(|e| Error::SchemaMismatch(e.to_string()))
}

/// Remote service producing route and approval transactions
#[async_trait]
pub trait RouterClient: Send + Sync {
    async fn get_route_data(&self, params: &RouteParams) -> Result<RouteData>;

    async fn get_approval_data(&self, params: &ApprovalParams) -> Result<ApprovalData>;
}
