//! Off-band credit accrual calculator

use crate::config::BillingConfig;
use serde::{Deserialize, Serialize};

/// Why credits are being accrued
///
/// Reason strings outside the known set fall through to `Custom`, which
/// treats the parameter as a trusted accrual amount. Callers are expected to
/// validate reasons upstream of privileged crediting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccrualReason {
    /// Sustained daily prompting streak
    PromptStreak,
    /// Inference usage reward
    AiInference,
    /// Successful referral of a new user
    Referral,
    /// Completed social quest
    SocialQuest,
    /// Trusted custom accrual; the parameter is the amount
    Custom,
}

impl AccrualReason {
    /// Parse a caller-supplied reason string, defaulting to `Custom`
    pub fn parse(reason: &str) -> Self {
        match reason {
            "prompt_streak" => AccrualReason::PromptStreak,
            "ai_inference" => AccrualReason::AiInference,
            "referral" => AccrualReason::Referral,
            "social_quest" => AccrualReason::SocialQuest,
            _ => AccrualReason::Custom,
        }
    }
}

/// Pure credit accrual policy
#[derive(Debug, Clone)]
pub struct CreditCalculator {
    prompts_per_credit: u64,
    referral_credit_amount: u64,
    social_quest_credit_amount: u64,
    max_social_quests_per_user: u64,
}

impl CreditCalculator {
    /// Build the calculator from billing configuration
    pub fn from_config(config: &BillingConfig) -> Self {
        Self {
            prompts_per_credit: config.prompts_per_credit.max(1),
            referral_credit_amount: config.referral_credit_amount,
            social_quest_credit_amount: config.social_quest_credit_amount,
            max_social_quests_per_user: config.max_social_quests_per_user,
        }
    }

    /// Credit amount for an accrual reason and its parameter
    ///
    /// Streak and inference rewards floor-divide prompts into credits,
    /// referrals and quests multiply by their per-event amounts (quests capped
    /// per user), and custom accruals pass the parameter through unchanged.
    pub fn calculate(&self, reason: AccrualReason, parameter: u64) -> u64 {
        match reason {
            AccrualReason::PromptStreak | AccrualReason::AiInference => {
                parameter / self.prompts_per_credit
            }
            AccrualReason::Referral => parameter.saturating_mul(self.referral_credit_amount),
            AccrualReason::SocialQuest => parameter
                .min(self.max_social_quests_per_user)
                .saturating_mul(self.social_quest_credit_amount),
            AccrualReason::Custom => parameter,
        }
    }
}

impl Default for CreditCalculator {
    fn default() -> Self {
        Self::from_config(&BillingConfig::default())
    }
}
