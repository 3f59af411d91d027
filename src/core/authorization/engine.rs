//! Authorization engine
//!
//! The decision algorithm, evaluated in strict order with the first matching
//! branch winning:
//!
//! 1. rate limit check (no external reads when limited)
//! 2. concurrent fetch of subscription snapshot and credit balance
//! 3. one-time initial grant eligibility
//! 4. subscription within its effective cap
//! 5. prepaid credit fallback
//! 6. deny
//!
//! External read failures never fail the decision: a failed subscription read
//! degrades to "no subscription" and a failed balance read degrades to zero,
//! biasing toward denial or the initial grant rather than toward a false
//! authorization.

use super::guard::InitialGrantGuard;
use super::types::AuthorizationDecision;
use crate::config::BillingConfig;
use crate::core::cost::{AccrualReason, CostTable, CreditCalculator, InferenceMode};
use crate::core::rate_limiter::RateLimiter;
use crate::ledger::{LedgerStateProvider, SubscriptionSnapshot, UserAddress};
use crate::utils::error::{GatewayError, Result};
use std::sync::Arc;
use tracing::{debug, warn};

/// The authorization arbitration engine
///
/// Stateless aside from the rate limiter's window and the initial-grant
/// guard; subscription and balance state is fetched fresh per decision and
/// never cached.
pub struct AuthorizationEngine {
    ledger: Arc<dyn LedgerStateProvider>,
    limiter: Arc<RateLimiter>,
    guard: InitialGrantGuard,
    costs: CostTable,
    credits: CreditCalculator,
    global_monthly_cap: u64,
    initial_grant_amount: u64,
}

impl AuthorizationEngine {
    /// Create an engine over the given ledger provider and billing policy
    pub fn new(
        ledger: Arc<dyn LedgerStateProvider>,
        limiter: Arc<RateLimiter>,
        billing: &BillingConfig,
    ) -> Result<Self> {
        let costs = CostTable::from_config(billing)
            .map_err(|e| GatewayError::Config(format!("billing.unit_costs: {}", e)))?;
        Ok(Self {
            ledger,
            limiter,
            guard: InitialGrantGuard::new(),
            costs,
            credits: CreditCalculator::from_config(billing),
            global_monthly_cap: billing.global_monthly_cap,
            initial_grant_amount: billing.initial_grant_amount,
        })
    }

    /// Authorize one requested operation for a user
    ///
    /// Read-only and safe to retry; the only state touched is the rate
    /// limiter's window. Quantity must be positive; the mode is already a
    /// member of the closed set by construction.
    pub async fn authorize(
        &self,
        user: &UserAddress,
        mode: InferenceMode,
        quantity: u64,
    ) -> Result<AuthorizationDecision> {
        if quantity == 0 {
            return Err(GatewayError::Validation(
                "quantity must be positive".to_string(),
            ));
        }

        // 1. Rate limit; limited requests perform no external reads.
        let rate = self.limiter.check_and_record(&user.to_string()).await;
        if rate.limited {
            debug!("Authorization denied for {}: rate limited", user);
            return Ok(AuthorizationDecision::rate_limited());
        }

        // 2. Independent reads, issued concurrently and degraded on failure.
        let (subscription, balance) = self.read_account_state(user).await;

        // 3. One-time initial allowance for brand-new users. Marking the
        // guard is the privileged grant path's job, not the decision's.
        let no_plan = subscription.as_ref().map_or(true, |s| s.plan_id == 0);
        if balance == 0 && no_plan && !self.guard.is_marked(user).await {
            debug!("Authorization for {}: initial grant eligible", user);
            return Ok(AuthorizationDecision::initial_grant());
        }

        // 4. Subscription-first preference under the effective cap.
        let cost = self
            .costs
            .total_cost(mode, quantity)
            .map_err(|e| GatewayError::Validation(e.to_string()))?;
        if let Some(snapshot) = subscription.as_ref() {
            if snapshot.is_subscribed() && self.fits_cap(snapshot, mode, quantity) {
                debug!("Authorization for {}: within subscription cap", user);
                return Ok(AuthorizationDecision::within_subscription());
            }
        }

        // 5. Prepaid credit fallback.
        if balance >= cost {
            debug!("Authorization for {}: charging {} credits", user, cost);
            return Ok(AuthorizationDecision::charge_credits(cost));
        }

        // 6. Nothing covers the request.
        debug!(
            "Authorization denied for {}: balance {} below cost {}, no cap headroom",
            user, balance, cost
        );
        Ok(AuthorizationDecision::denied(cost))
    }

    /// Whether the user currently qualifies for the one-time initial grant
    ///
    /// Same eligibility rule as the decision path, without touching the rate
    /// limiter. Used by the privileged grant operation.
    pub async fn initial_grant_eligible(&self, user: &UserAddress) -> bool {
        if self.guard.is_marked(user).await {
            return false;
        }
        let (subscription, balance) = self.read_account_state(user).await;
        balance == 0 && subscription.map_or(true, |s| s.plan_id == 0)
    }

    /// Cost quote for a caller-supplied mode name and quantity
    pub fn quote(&self, mode: &str, quantity: i64) -> Result<u64> {
        self.costs
            .quote(mode, quantity)
            .map_err(|e| GatewayError::Validation(e.to_string()))
    }

    /// Credit amount for an off-band accrual
    pub fn calculate_credits(&self, reason: AccrualReason, parameter: u64) -> u64 {
        self.credits.calculate(reason, parameter)
    }

    /// The configured one-time allowance amount
    pub fn initial_grant_amount(&self) -> u64 {
        self.initial_grant_amount
    }

    /// The process-local initial-grant guard
    pub fn grant_guard(&self) -> &InitialGrantGuard {
        &self.guard
    }

    /// Fetch subscription and balance concurrently, degrading each failure
    /// to its fail-safe default
    async fn read_account_state(
        &self,
        user: &UserAddress,
    ) -> (Option<SubscriptionSnapshot>, u64) {
        let (subscription, balance) = tokio::join!(
            self.ledger.subscription_of(user),
            self.ledger.credit_balance_of(user)
        );

        let subscription = match subscription {
            Ok(snapshot) => snapshot,
            Err(e) => {
                warn!("Subscription read failed for {}: {}; treating as none", user, e);
                None
            }
        };
        let balance = match balance {
            Ok(balance) => balance,
            Err(e) => {
                warn!("Balance read failed for {}: {}; treating as zero", user, e);
                0
            }
        };

        (subscription, balance)
    }

    /// Cap check: cap-exempt modes consult the global cap across tiers,
    /// everything else the plan's own monthly cap
    fn fits_cap(&self, snapshot: &SubscriptionSnapshot, mode: InferenceMode, quantity: u64) -> bool {
        let effective_cap = if mode.uses_global_cap() {
            self.global_monthly_cap
        } else {
            snapshot.plan.monthly_cap
        };
        snapshot.used_this_window.saturating_add(quantity) <= effective_cap
    }
}
