//! Rate limiting configuration

use serde::{Deserialize, Serialize};

/// Rate limiting configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateLimitConfig {
    /// Enable rate limiting
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Requests allowed per user within the window
    #[serde(default = "default_rpm")]
    pub requests_per_minute: u32,
    /// Trailing window duration in seconds
    #[serde(default = "default_window_secs")]
    pub window_secs: u64,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            requests_per_minute: default_rpm(),
            window_secs: default_window_secs(),
        }
    }
}

fn default_enabled() -> bool {
    true
}

fn default_rpm() -> u32 {
    30
}

fn default_window_secs() -> u64 {
    60
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_limit_config_default() {
        let config = RateLimitConfig::default();
        assert!(config.enabled);
        assert_eq!(config.requests_per_minute, 30);
        assert_eq!(config.window_secs, 60);
    }

    #[test]
    fn test_rate_limit_config_deserialization() {
        let json = r#"{
            "enabled": false,
            "requests_per_minute": 100,
            "window_secs": 10
        }"#;
        let config: RateLimitConfig = serde_json::from_str(json).unwrap();
        assert!(!config.enabled);
        assert_eq!(config.requests_per_minute, 100);
        assert_eq!(config.window_secs, 10);
    }

    #[test]
    fn test_rate_limit_config_deserialization_defaults() {
        let config: RateLimitConfig = serde_json::from_str("{}").unwrap();
        assert!(config.enabled);
        assert_eq!(config.requests_per_minute, 30);
    }
}
