//! Per-user request rate limiting
//!
//! Sliding-window limiter keyed by user address. State is process-local and
//! is not persisted across restarts.

mod limiter;
mod types;


// Re-export public types
pub use limiter::RateLimiter;
pub use types::RateLimitResult;
