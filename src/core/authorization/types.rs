//! Authorization decision types

use serde::{Deserialize, Serialize};

/// Which billing method covers an authorized operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BillingMethod {
    /// Covered by an active subscription within its cap
    Subscription,
    /// Charged against the prepaid credit balance
    Credits,
    /// Covered by the one-time initial allowance
    InitialGrant,
    /// Not authorized
    Deny,
}

/// Stable reason code attached to every decision
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DecisionReason {
    /// Too many requests inside the sliding window
    #[serde(rename = "rate_limited")]
    RateLimited,
    /// Brand-new user qualifying for the one-time allowance
    #[serde(rename = "initial_50_credits")]
    InitialGrant,
    /// Subscription usage plus the request fits under the effective cap
    #[serde(rename = "within_subscription_cap")]
    WithinSubscriptionCap,
    /// Prepaid balance covers the cost
    #[serde(rename = "sufficient_credits")]
    SufficientCredits,
    /// Neither balance nor subscription cap can cover the request
    #[serde(rename = "insufficient_balance_and_cap")]
    InsufficientBalanceAndCap,
}

impl DecisionReason {
    /// The wire representation of the reason code
    pub fn as_str(&self) -> &'static str {
        match self {
            DecisionReason::RateLimited => "rate_limited",
            DecisionReason::InitialGrant => "initial_50_credits",
            DecisionReason::WithinSubscriptionCap => "within_subscription_cap",
            DecisionReason::SufficientCredits => "sufficient_credits",
            DecisionReason::InsufficientBalanceAndCap => "insufficient_balance_and_cap",
        }
    }
}

/// The engine's verdict for one requested operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorizationDecision {
    /// Whether the operation may proceed
    pub allowed: bool,
    /// Billing method covering the operation
    pub method: BillingMethod,
    /// Stable reason code
    pub reason: DecisionReason,
    /// Credits to charge: zero on the subscription, initial-grant, and
    /// rate-limited paths, the computed cost on the credits path and on the
    /// final denial
    pub cost: u64,
}

impl AuthorizationDecision {
    /// Denied because the user is inside a limited window
    pub fn rate_limited() -> Self {
        Self {
            allowed: false,
            method: BillingMethod::Deny,
            reason: DecisionReason::RateLimited,
            cost: 0,
        }
    }

    /// Allowed via the one-time initial allowance
    pub fn initial_grant() -> Self {
        Self {
            allowed: true,
            method: BillingMethod::InitialGrant,
            reason: DecisionReason::InitialGrant,
            cost: 0,
        }
    }

    /// Allowed under the subscription cap, nothing charged
    pub fn within_subscription() -> Self {
        Self {
            allowed: true,
            method: BillingMethod::Subscription,
            reason: DecisionReason::WithinSubscriptionCap,
            cost: 0,
        }
    }

    /// Allowed against the prepaid balance
    pub fn charge_credits(cost: u64) -> Self {
        Self {
            allowed: true,
            method: BillingMethod::Credits,
            reason: DecisionReason::SufficientCredits,
            cost,
        }
    }

    /// Denied: no covering method
    pub fn denied(cost: u64) -> Self {
        Self {
            allowed: false,
            method: BillingMethod::Deny,
            reason: DecisionReason::InsufficientBalanceAndCap,
            cost,
        }
    }
}
