//! Enso router HTTP client

use super::{decode_response, ApprovalData, ApprovalParams, RouteData, RouteParams, RouterClient};
use crate::config::EnsoConfig;
use crate::{Error, Result};
use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use url::Url;

const ROUTE_PATH: &str = "/api/v1/shortcuts/route";
const APPROVE_PATH: &str = "/api/v1/wallet/approve";

/// Transactions are executed through the Enso router contract
const ROUTING_STRATEGY: &str = "router";

/// Client for the Enso shortcuts API
pub struct EnsoClient {
    http: reqwest::Client,
    base_url: String,
    api_key: SecretString,
}

impl EnsoClient {
    /// Build a client from config; fails without an API key
    pub fn new(config: &EnsoConfig) -> Result<Self> {
        let api_key = SecretString::from(config.require_api_key()?.expose_secret().to_string());

        Url::parse(&config.api_url)
            .map_err(|e| Error::Config(format!("Invalid Enso API URL '{}': {}", config.api_url, e)))?;

        let http = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()?;

        Ok(Self {
            http,
            base_url: config.api_url.trim_end_matches('/').to_string(),
            api_key,
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get<T: DeserializeOwned>(&self, path: &str, query: &[(&str, String)]) -> Result<T> {
        let response = self
            .http
            .get(self.endpoint(path))
            .bearer_auth(self.api_key.expose_secret())
            .query(query)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            tracing::debug!(path, status = status.as_u16(), "Enso request rejected");
            return Err(Error::Router {
                status: status.as_u16(),
                body,
            });
        }

        decode_response(&body)
    }
}

fn route_query(params: &RouteParams) -> Vec<(&'static str, String)> {
    vec![
        ("chainId", params.chain_id.to_string()),
        ("fromAddress", params.from_address.to_string()),
        ("receiver", params.receiver.to_string()),
        ("spender", params.spender.to_string()),
        ("amountIn", params.amount_in.to_string()),
        ("tokenIn", params.token_in.to_string()),
        ("tokenOut", params.token_out.to_string()),
        ("routingStrategy", ROUTING_STRATEGY.to_string()),
    ]
}

fn approval_query(params: &ApprovalParams) -> Vec<(&'static str, String)> {
    vec![
        ("fromAddress", params.from_address.to_string()),
        ("tokenAddress", params.token_address.to_string()),
        ("chainId", params.chain_id.to_string()),
        ("amount", params.amount.to_string()),
        ("routingStrategy", ROUTING_STRATEGY.to_string()),
    ]
}

#[async_trait]
impl RouterClient for EnsoClient {
    async fn get_route_data(&self, params: &RouteParams) -> Result<RouteData> {
        tracing::debug!(
            chain_id = params.chain_id,
            token_in = %params.token_in,
            token_out = %params.token_out,
            amount_in = %params.amount_in,
            "Requesting Enso route"
        );
        self.get(ROUTE_PATH, &route_query(params)).await
    }

    async fn get_approval_data(&self, params: &ApprovalParams) -> Result<ApprovalData> {
        tracing::debug!(
            chain_id = params.chain_id,
            token = %params.token_address,
            amount = %params.amount,
            "Requesting Enso approval data"
        );
        self.get(APPROVE_PATH, &approval_query(params)).await
    }
}

impl std::fmt::Debug for EnsoClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EnsoClient")
            .field("base_url", &self.base_url)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}
