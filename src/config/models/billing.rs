//! Billing policy configuration
//!
//! Unit costs per inference mode, subscription caps, and the credit accrual
//! policy used by off-band crediting.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Billing policy configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BillingConfig {
    /// Credit cost per unit, keyed by inference mode name
    #[serde(default = "default_unit_costs")]
    pub unit_costs: HashMap<String, u64>,
    /// Global monthly cap applied to cap-exempt modes across all tiers
    #[serde(default = "default_global_monthly_cap")]
    pub global_monthly_cap: u64,
    /// One-time allowance credited to brand-new users
    #[serde(default = "default_initial_grant_amount")]
    pub initial_grant_amount: u64,
    /// Prompts required to accrue one streak credit
    #[serde(default = "default_prompts_per_credit")]
    pub prompts_per_credit: u64,
    /// Credits awarded per successful referral
    #[serde(default = "default_referral_credit_amount")]
    pub referral_credit_amount: u64,
    /// Credits awarded per completed social quest
    #[serde(default = "default_social_quest_credit_amount")]
    pub social_quest_credit_amount: u64,
    /// Maximum social quests counted per user
    #[serde(default = "default_max_social_quests")]
    pub max_social_quests_per_user: u64,
}

impl Default for BillingConfig {
    fn default() -> Self {
        Self {
            unit_costs: default_unit_costs(),
            global_monthly_cap: default_global_monthly_cap(),
            initial_grant_amount: default_initial_grant_amount(),
            prompts_per_credit: default_prompts_per_credit(),
            referral_credit_amount: default_referral_credit_amount(),
            social_quest_credit_amount: default_social_quest_credit_amount(),
            max_social_quests_per_user: default_max_social_quests(),
        }
    }
}

fn default_unit_costs() -> HashMap<String, u64> {
    HashMap::from([
        ("basic".to_string(), 1),
        ("tags".to_string(), 2),
        ("price_accuracy".to_string(), 3),
        ("full".to_string(), 5),
    ])
}

fn default_global_monthly_cap() -> u64 {
    3000
}

fn default_initial_grant_amount() -> u64 {
    50
}

fn default_prompts_per_credit() -> u64 {
    10
}

fn default_referral_credit_amount() -> u64 {
    5
}

fn default_social_quest_credit_amount() -> u64 {
    2
}

fn default_max_social_quests() -> u64 {
    5
}
