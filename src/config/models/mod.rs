//! Configuration data models
//!
//! This module defines all configuration structures used throughout the gateway.

pub mod billing;
pub mod ledger;
pub mod rate_limit;
pub mod server;

// Re-export all configuration types
pub use billing::*;
pub use ledger::*;
pub use rate_limit::*;
pub use server::*;

use serde::{Deserialize, Serialize};

/// Top-level gateway configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GatewayConfig {
    /// HTTP server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Rate limiting configuration
    #[serde(default)]
    pub rate_limit: RateLimitConfig,
    /// Billing policy configuration
    #[serde(default)]
    pub billing: BillingConfig,
    /// Ledger node configuration
    #[serde(default)]
    pub ledger: LedgerConfig,
}

/// Default server host
pub fn default_host() -> String {
    "0.0.0.0".to_string()
}

/// Default server port
pub fn default_port() -> u16 {
    8000
}

/// Default request timeout in seconds
pub fn default_timeout() -> u64 {
    30
}
