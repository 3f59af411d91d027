//! Ledger node configuration

use serde::{Deserialize, Serialize};

/// Ledger node configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerConfig {
    /// JSON-RPC endpoint of the ledger node
    #[serde(default = "default_rpc_url")]
    pub rpc_url: String,
    /// Read timeout in seconds for ledger state calls
    #[serde(default = "default_rpc_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            rpc_url: default_rpc_url(),
            timeout_secs: default_rpc_timeout_secs(),
        }
    }
}

fn default_rpc_url() -> String {
    "http://127.0.0.1:8545".to_string()
}

fn default_rpc_timeout_secs() -> u64 {
    5
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ledger_config_default() {
        let config = LedgerConfig::default();
        assert_eq!(config.rpc_url, "http://127.0.0.1:8545");
        assert_eq!(config.timeout_secs, 5);
    }

    #[test]
    fn test_ledger_config_deserialization() {
        let json = r#"{ "rpc_url": "https://node.example.com", "timeout_secs": 2 }"#;
        let config: LedgerConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.rpc_url, "https://node.example.com");
        assert_eq!(config.timeout_secs, 2);
    }
}
