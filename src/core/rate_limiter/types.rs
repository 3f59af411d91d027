//! Rate limiter types and data structures

use std::time::Instant;

/// Rate limit check result
#[derive(Debug, Clone)]
pub struct RateLimitResult {
    /// Whether the request exceeded the limit
    pub limited: bool,
    /// Request count in the window before this request was recorded
    pub current_count: u32,
    /// Maximum requests allowed in the window
    pub limit: u32,
    /// Seconds until the oldest recorded request leaves the window,
    /// only set when limited
    pub retry_after_secs: Option<u64>,
}

/// Rate limit entry tracking one user's recent requests
#[derive(Debug, Clone, Default)]
pub(super) struct RateLimitEntry {
    /// Request timestamps within the sliding window
    pub(super) timestamps: Vec<Instant>,
}
