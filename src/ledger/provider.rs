//! Ledger state provider
//!
//! Read-only access to confirmed ledger state via the node's JSON-RPC
//! interface. Timeout policy lives here; the authorization core itself never
//! blocks on anything but these reads.

use super::address::UserAddress;
use super::types::SubscriptionSnapshot;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

use crate::config::LedgerConfig;

/// Errors from ledger state reads
#[derive(Error, Debug)]
pub enum LedgerError {
    /// Transport-level failure talking to the node
    #[error("ledger transport error: {0}")]
    Transport(#[from] reqwest::Error),
    /// The node returned a JSON-RPC error object
    #[error("ledger rpc error {code}: {message}")]
    Rpc {
        /// JSON-RPC error code
        code: i64,
        /// JSON-RPC error message
        message: String,
    },
    /// The node response could not be decoded
    #[error("ledger response decode error: {0}")]
    Decode(String),
}

/// Read-only view of confirmed ledger state
#[async_trait]
pub trait LedgerStateProvider: Send + Sync {
    /// Current subscription snapshot for the user, if any record exists
    async fn subscription_of(
        &self,
        user: &UserAddress,
    ) -> Result<Option<SubscriptionSnapshot>, LedgerError>;

    /// Current prepaid credit balance for the user
    async fn credit_balance_of(&self, user: &UserAddress) -> Result<u64, LedgerError>;
}

/// JSON-RPC 2.0 request envelope
#[derive(Debug, Serialize)]
struct RpcRequest<'a> {
    jsonrpc: &'static str,
    id: u64,
    method: &'a str,
    params: Value,
}

/// JSON-RPC 2.0 response envelope
#[derive(Debug, Deserialize)]
struct RpcResponse {
    #[serde(default)]
    result: Value,
    error: Option<RpcErrorBody>,
}

#[derive(Debug, Deserialize)]
struct RpcErrorBody {
    code: i64,
    message: String,
}

/// Ledger state provider backed by a JSON-RPC node
pub struct JsonRpcLedger {
    client: reqwest::Client,
    url: String,
}

impl JsonRpcLedger {
    /// Create a provider from ledger configuration
    pub fn new(config: &LedgerConfig) -> Result<Self, LedgerError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            client,
            url: config.rpc_url.clone(),
        })
    }

    /// Issue a single JSON-RPC call and return its raw result value
    async fn call(&self, method: &str, params: Value) -> Result<Value, LedgerError> {
        let request = RpcRequest {
            jsonrpc: "2.0",
            id: 1,
            method,
            params,
        };

        debug!("Ledger call: {}", method);
        let response: RpcResponse = self
            .client
            .post(&self.url)
            .json(&request)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        if let Some(err) = response.error {
            return Err(LedgerError::Rpc {
                code: err.code,
                message: err.message,
            });
        }

        Ok(response.result)
    }
}

#[async_trait]
impl LedgerStateProvider for JsonRpcLedger {
    async fn subscription_of(
        &self,
        user: &UserAddress,
    ) -> Result<Option<SubscriptionSnapshot>, LedgerError> {
        let value = self
            .call("state_subscriptionOf", json!([user.to_string()]))
            .await?;

        // A null result means the account has no subscription record at all.
        if value.is_null() {
            return Ok(None);
        }

        let snapshot = serde_json::from_value(value)
            .map_err(|e| LedgerError::Decode(format!("state_subscriptionOf: {}", e)))?;
        Ok(Some(snapshot))
    }

    async fn credit_balance_of(&self, user: &UserAddress) -> Result<u64, LedgerError> {
        let value = self
            .call("state_creditBalanceOf", json!([user.to_string()]))
            .await?;

        serde_json::from_value(value)
            .map_err(|e| LedgerError::Decode(format!("state_creditBalanceOf: {}", e)))
    }
}
