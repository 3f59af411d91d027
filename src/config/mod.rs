//! Configuration management for the gateway
//!
//! This module handles loading and validation of all gateway configuration.

pub mod models;

pub use models::*;

use crate::utils::error::{GatewayError, Result};
use std::path::Path;
use tracing::{debug, info};

/// Main configuration struct for the gateway
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Gateway configuration
    pub gateway: GatewayConfig,
}

impl Config {
    /// Load configuration from file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| GatewayError::Config(format!("Failed to read config file: {}", e)))?;

        let gateway: GatewayConfig = serde_yaml::from_str(&content)
            .map_err(|e| GatewayError::Config(format!("Failed to parse config: {}", e)))?;

        let config = Self { gateway };
        config.validate()?;

        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Validate the loaded configuration
    pub fn validate(&self) -> Result<()> {
        let rl = &self.gateway.rate_limit;
        if rl.enabled && rl.window_secs == 0 {
            return Err(GatewayError::Config(
                "rate_limit.window_secs must be positive".to_string(),
            ));
        }
        if rl.enabled && rl.requests_per_minute == 0 {
            return Err(GatewayError::Config(
                "rate_limit.requests_per_minute must be positive".to_string(),
            ));
        }

        let billing = &self.gateway.billing;
        if billing.global_monthly_cap == 0 {
            return Err(GatewayError::Config(
                "billing.global_monthly_cap must be positive".to_string(),
            ));
        }
        if billing.prompts_per_credit == 0 {
            return Err(GatewayError::Config(
                "billing.prompts_per_credit must be positive".to_string(),
            ));
        }

        if self.gateway.ledger.rpc_url.is_empty() {
            return Err(GatewayError::Config(
                "ledger.rpc_url must not be empty".to_string(),
            ));
        }
        url::Url::parse(&self.gateway.ledger.rpc_url)
            .map_err(|e| GatewayError::Config(format!("Invalid ledger.rpc_url: {}", e)))?;

        Ok(())
    }

    /// Get server configuration
    pub fn server(&self) -> &ServerConfig {
        &self.gateway.server
    }

    /// Get rate limit configuration
    pub fn rate_limit(&self) -> &RateLimitConfig {
        &self.gateway.rate_limit
    }

    /// Get billing configuration
    pub fn billing(&self) -> &BillingConfig {
        &self.gateway.billing
    }

    /// Get ledger configuration
    pub fn ledger(&self) -> &LedgerConfig {
        &self.gateway.ledger
    }
}
