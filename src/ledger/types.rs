//! Ledger state projections
//!
//! Read-only snapshots of on-chain account state, fetched fresh per decision
//! and never cached beyond a single authorization call.

use serde::{Deserialize, Serialize};

/// A subscription tier as stored on the ledger
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Plan {
    /// Subscription price in payment units
    pub price_units: u64,
    /// Usage cap per billing window
    pub monthly_cap: u64,
    /// Whether the tier is currently offered and live
    pub active: bool,
}

/// A user's subscription state at read time
///
/// `plan_id == 0` means "no subscription" regardless of the other fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionSnapshot {
    /// Subscribed plan id, 0 when unsubscribed
    pub plan_id: u64,
    /// Unix timestamp of the subscription start
    pub start_timestamp: u64,
    /// Usage accrued within the current billing window
    pub used_this_window: u64,
    /// Unix timestamp of the last renewal
    pub last_renewed_at: u64,
    /// The subscribed plan
    pub plan: Plan,
}

impl SubscriptionSnapshot {
    /// Whether this snapshot represents a live, billable subscription
    pub fn is_subscribed(&self) -> bool {
        self.plan_id > 0 && self.plan.active
    }
}
