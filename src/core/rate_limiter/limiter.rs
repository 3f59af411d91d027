//! Core rate limiter implementation

use super::types::{RateLimitEntry, RateLimitResult};
use crate::config::RateLimitConfig;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;
use tracing::debug;

/// Sliding-window rate limiter
///
/// Tracks recent request timestamps per user. Entries older than the window
/// are pruned lazily on each check, so per-user memory is bounded by the
/// window size in steady state.
pub struct RateLimiter {
    /// Rate limit configuration
    config: RateLimitConfig,
    /// Rate limit entries keyed by user address
    entries: Arc<RwLock<HashMap<String, RateLimitEntry>>>,
    /// Window duration
    window: Duration,
}

impl RateLimiter {
    /// Create a new rate limiter
    pub fn new(config: RateLimitConfig) -> Self {
        let window = Duration::from_secs(config.window_secs);
        Self {
            config,
            entries: Arc::new(RwLock::new(HashMap::new())),
            window,
        }
    }

    /// Create a rate limiter with a custom window
    pub fn with_window(config: RateLimitConfig, window: Duration) -> Self {
        Self {
            config,
            entries: Arc::new(RwLock::new(HashMap::new())),
            window,
        }
    }

    /// Atomically check the window and record the current request
    ///
    /// The current timestamp is recorded even when the check comes back
    /// limited: hammering during a limited period keeps the window hot and
    /// does not let it drain early. Check and record happen under a single
    /// lock acquisition, so racing calls for the same user cannot lose
    /// updates.
    pub async fn check_and_record(&self, key: &str) -> RateLimitResult {
        if !self.config.enabled {
            return RateLimitResult {
                limited: false,
                current_count: 0,
                limit: self.config.requests_per_minute,
                retry_after_secs: None,
            };
        }

        let now = Instant::now();
        let window_start = now - self.window;
        let limit = self.config.requests_per_minute;

        let mut entries = self.entries.write().await;
        // Avoid String allocation if key already exists
        let entry = if let Some(e) = entries.get_mut(key) {
            e
        } else {
            entries.entry(key.to_string()).or_default()
        };

        // Remove expired timestamps
        entry.timestamps.retain(|&t| t > window_start);

        let current_count = entry.timestamps.len() as u32;
        let limited = current_count >= limit;

        let retry_after_secs = if limited {
            let oldest = entry.timestamps.first().copied().unwrap_or(now);
            let elapsed = now.duration_since(oldest);
            Some(self.window.saturating_sub(elapsed).as_secs().max(1))
        } else {
            None
        };

        entry.timestamps.push(now);

        if limited {
            debug!(
                "Rate limit exceeded for {}: {}/{} requests",
                key, current_count, limit
            );
        }

        RateLimitResult {
            limited,
            current_count,
            limit,
            retry_after_secs,
        }
    }

    /// Drop users whose every recorded request has left the window
    pub async fn cleanup(&self) {
        let window_start = Instant::now() - self.window;
        let mut entries = self.entries.write().await;
        entries.retain(|_, entry| entry.timestamps.iter().any(|&t| t > window_start));
    }

    /// Spawn a background task that periodically evicts idle users
    pub fn start_cleanup_task(self: Arc<Self>) {
        let interval = self.window.max(Duration::from_secs(1));
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            loop {
                ticker.tick().await;
                self.cleanup().await;
            }
        });
    }

    /// Number of users currently tracked
    pub async fn tracked_users(&self) -> usize {
        self.entries.read().await.len()
    }
}

impl Clone for RateLimiter {
    fn clone(&self) -> Self {
        Self {
            config: self.config.clone(),
            entries: self.entries.clone(),
            window: self.window,
        }
    }
}
