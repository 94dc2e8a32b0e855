//! Error types for the Enso swap tools

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Chain {0} is not supported")]
    UnsupportedNetwork(u64),

    #[error("Failed to route through Enso: {0}")]
    RouteFailed(#[source] Box<Error>),

    #[error("Failed to check Enso approval: {0}")]
    ApprovalFailed(#[source] Box<Error>),

    #[error("Enso API returned {status}: {body}")]
    Router { status: u16, body: String },

    #[error("Unexpected Enso response: {0}")]
    SchemaMismatch(String),

    #[error("Wallet error: {0}")]
    Wallet(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn route_failed(cause: Error) -> Self {
        Error::RouteFailed(Box::new(cause))
    }

    pub(crate) fn approval_failed(cause: Error) -> Self {
        Error::ApprovalFailed(Box::new(cause))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
