//! Tool registry
//!
//! Maps tool names to their description, JSON input schema and handler.
//! Populated once at startup; the agent side only ever sees JSON in and
//! JSON out.

use crate::wallet::EvmWalletClient;
use crate::{Error, Result};
use async_trait::async_trait;
use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::Arc;

/// A tool callable by the agent on behalf of a wallet
#[async_trait]
pub trait Tool: Send + Sync + 'static {
    const NAME: &'static str;
    type Input: DeserializeOwned + JsonSchema + Send;
    type Output: Serialize + Send;

    fn description(&self) -> &'static str;

    fn input_schema(&self) -> Value {
        schemars::schema_for!(Self::Input).into()
    }

    async fn execute(
        &self,
        wallet: &dyn EvmWalletClient,
        input: Self::Input,
    ) -> Result<Self::Output>;
}

/// Object-safe view of a [`Tool`] for the registry
#[async_trait]
trait ToolHandler: Send + Sync {
    fn description(&self) -> &'static str;

    fn input_schema(&self) -> Value;

    async fn call(&self, wallet: &dyn EvmWalletClient, args: Value) -> Result<Value>;
}

#[async_trait]
impl<T: Tool> ToolHandler for T {
    fn description(&self) -> &'static str {
        Tool::description(self)
    }

    fn input_schema(&self) -> Value {
        Tool::input_schema(self)
    }

    async fn call(&self, wallet: &dyn EvmWalletClient, args: Value) -> Result<Value> {
        let input: T::Input = serde_json::from_value(args)
            .map_err(|e| Error::InvalidArgument(format!("{}: {}", T::NAME, e)))?;
        let output = self.execute(wallet, input).await?;
        Ok(serde_json::to_value(output)?)
    }
}

/// Name, description and input schema of a registered tool
#[derive(Debug, Clone, Serialize)]
pub struct ToolSpec {
    pub name: &'static str,
    pub description: &'static str,
    pub input_schema: Value,
}

#[derive(Default, Clone)]
pub struct ToolRegistry {
    tools: BTreeMap<&'static str, Arc<dyn ToolHandler>>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a tool under its `NAME`, replacing any previous one
    pub fn register<T: Tool>(&mut self, tool: T) -> &mut Self {
        if self.tools.insert(T::NAME, Arc::new(tool)).is_some() {
            tracing::warn!(tool = T::NAME, "Replacing previously registered tool");
        }
        self
    }

    /// Registered tool names, sorted
    pub fn names(&self) -> Vec<&'static str> {
        self.tools.keys().copied().collect()
    }

    pub fn specs(&self) -> Vec<ToolSpec> {
        self.tools
            .iter()
            .map(|(&name, tool)| ToolSpec {
                name,
                description: tool.description(),
                input_schema: tool.input_schema(),
            })
            .collect()
    }

    /// Run a tool by name with JSON arguments
    pub async fn execute(
        &self,
        name: &str,
        wallet: &dyn EvmWalletClient,
        args: Value,
    ) -> Result<Value> {
        let tool = self
            .tools
            .get(name)
            .ok_or_else(|| Error::UnknownTool(name.to_string()))?;

        tracing::debug!(tool = name, "Executing tool");
        let result = tool.call(wallet, args).await;
        if let Err(e) = &result {
            tracing::warn!(tool = name, error = %e, "Tool call failed");
        }
        result
    }
}

impl std::fmt::Debug for ToolRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToolRegistry")
            .field("tools", &self.names())
            .finish()
    }
}
