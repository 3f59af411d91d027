//! Authorization arbitration
//!
//! Combines rate limiting, subscription state, credit balance, and the
//! initial-grant guard into a single deterministic allow/deny decision per
//! request. The engine only reads external state; settlement and grants are
//! prepared elsewhere and submitted by an external signer.

mod engine;
mod guard;
mod types;


pub use engine::AuthorizationEngine;
pub use guard::InitialGrantGuard;
pub use types::{AuthorizationDecision, BillingMethod, DecisionReason};
