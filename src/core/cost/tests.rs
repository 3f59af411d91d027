//! Tests for cost table and credit calculator

#[cfg(test)]
mod tests {
    use super::super::credits::{AccrualReason, CreditCalculator};
    use super::super::table::{CostError, CostTable, InferenceMode};
    use crate::config::BillingConfig;

    #[test]
    fn test_default_unit_costs() {
        let table = CostTable::default();
        assert_eq!(table.unit_cost(InferenceMode::Basic), 1);
        assert_eq!(table.unit_cost(InferenceMode::Tags), 2);
        assert_eq!(table.unit_cost(InferenceMode::PriceAccuracy), 3);
        assert_eq!(table.unit_cost(InferenceMode::Full), 5);
    }

    #[test]
    fn test_total_cost_linear_in_quantity() {
        let table = CostTable::default();
        for mode in InferenceMode::ALL {
            for quantity in 1..=10u64 {
                assert_eq!(
                    table.total_cost(mode, quantity).unwrap(),
                    table.unit_cost(mode) * quantity
                );
            }
        }
    }

    #[test]
    fn test_total_cost_monotonic() {
        let table = CostTable::default();
        let mut previous = 0;
        for quantity in 1..=100u64 {
            let cost = table.total_cost(InferenceMode::Tags, quantity).unwrap();
            assert!(cost >= previous);
            previous = cost;
        }
    }

    #[test]
    fn test_zero_quantity_invalid() {
        let table = CostTable::default();
        assert_eq!(
            table.total_cost(InferenceMode::Basic, 0).unwrap_err(),
            CostError::InvalidQuantity(0)
        );
    }

    #[test]
    fn test_quote_unknown_mode() {
        let table = CostTable::default();
        assert_eq!(
            table.quote("turbo", 1).unwrap_err(),
            CostError::UnknownMode("turbo".to_string())
        );
    }

    #[test]
    fn test_quote_negative_quantity() {
        let table = CostTable::default();
        assert_eq!(
            table.quote("basic", -1).unwrap_err(),
            CostError::InvalidQuantity(-1)
        );
    }

    #[test]
    fn test_cap_exempt_modes() {
        assert!(!InferenceMode::Basic.uses_global_cap());
        assert!(!InferenceMode::Tags.uses_global_cap());
        assert!(InferenceMode::PriceAccuracy.uses_global_cap());
        assert!(InferenceMode::Full.uses_global_cap());
    }

    #[test]
    fn test_mode_parse_roundtrip() {
        for mode in InferenceMode::ALL {
            let parsed: InferenceMode = mode.as_str().parse().unwrap();
            assert_eq!(parsed, mode);
        }
    }

    #[test]
    fn test_from_config_rejects_unknown_mode_name() {
        let mut config = BillingConfig::default();
        config.unit_costs.insert("turbo".to_string(), 9);
        assert!(CostTable::from_config(&config).is_err());
    }

    #[test]
    fn test_from_config_fills_missing_modes() {
        let mut config = BillingConfig::default();
        config.unit_costs.remove("full");
        let table = CostTable::from_config(&config).unwrap();
        assert_eq!(table.unit_cost(InferenceMode::Full), 5);
    }

    #[test]
    fn test_prompt_streak_floors() {
        let calc = CreditCalculator::default();
        // 10 prompts per credit
        assert_eq!(calc.calculate(AccrualReason::PromptStreak, 25), 2);
        assert_eq!(calc.calculate(AccrualReason::AiInference, 9), 0);
    }

    #[test]
    fn test_referral_multiplies() {
        let calc = CreditCalculator::default();
        assert_eq!(calc.calculate(AccrualReason::Referral, 3), 15);
    }

    #[test]
    fn test_social_quest_capped() {
        let calc = CreditCalculator::default();
        // max 5 quests, 2 credits each: 8 quests yields 10, not 16
        assert_eq!(calc.calculate(AccrualReason::SocialQuest, 8), 10);
        assert_eq!(calc.calculate(AccrualReason::SocialQuest, 4), 8);
    }

    #[test]
    fn test_custom_reason_identity() {
        let calc = CreditCalculator::default();
        assert_eq!(calc.calculate(AccrualReason::Custom, 123), 123);
    }

    #[test]
    fn test_unknown_reason_parses_to_custom() {
        assert_eq!(AccrualReason::parse("anything_else"), AccrualReason::Custom);
        assert_eq!(
            AccrualReason::parse("social_quest"),
            AccrualReason::SocialQuest
        );
    }
}
