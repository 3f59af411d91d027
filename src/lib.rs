//! # Metergate
//!
//! Billing authorization gateway for metered AI inference.
//!
//! For every requested operation the gateway decides whether it may proceed
//! and which billing method covers it — an active subscription, a prepaid
//! credit balance, or a one-time initial allowance — before any on-chain
//! state is mutated. Subscription and credit state is read from an external
//! ledger node; the gateway itself never signs or submits transactions.
//!
//! ## Gateway Mode
//!
//! ```rust,no_run
//! use metergate::server;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     server::builder::run_server().await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Library Mode
//!
//! The authorization engine can be embedded directly:
//!
//! ```rust,ignore
//! let decision = engine.authorize(&user, InferenceMode::Basic, 1).await?;
//! if decision.allowed {
//!     // settle via decision.method
//! }
//! ```

pub mod config;
pub mod core;
pub mod ledger;
pub mod server;
pub mod utils;

// Re-export commonly used types
pub use crate::config::Config;
pub use crate::core::authorization::{AuthorizationDecision, AuthorizationEngine, BillingMethod};
pub use crate::core::cost::{AccrualReason, CostTable, InferenceMode};
pub use crate::core::rate_limiter::RateLimiter;
pub use crate::ledger::{LedgerStateProvider, SubscriptionSnapshot, UserAddress};
pub use crate::utils::error::{GatewayError, Result};
