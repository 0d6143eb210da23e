use crate::core::library::PatronTier;

// FeeStrategy converts days overdue into a non-negative fee.
pub trait FeeStrategy: Sync + Send {
    fn calculate_fee(&self, days_overdue: i64) -> f64;
}

const STANDARD_DAILY_RATE: f64 = 10.0;
const VIP_DAILY_RATE: f64 = 5.0;
const VIP_MAX_FEE: f64 = 50.0;

#[derive(Debug, Default, Clone, Copy)]
pub struct StandardFeeStrategy;

impl FeeStrategy for StandardFeeStrategy {
    fn calculate_fee(&self, days_overdue: i64) -> f64 {
        if days_overdue <= 0 {
            return 0.0;
        }
        days_overdue as f64 * STANDARD_DAILY_RATE
    }
}

// VipFeeStrategy charges half rate, capped.
#[derive(Debug, Default, Clone, Copy)]
pub struct VipFeeStrategy;

impl FeeStrategy for VipFeeStrategy {
    fn calculate_fee(&self, days_overdue: i64) -> f64 {
        if days_overdue <= 0 {
            return 0.0;
        }
        (days_overdue as f64 * VIP_DAILY_RATE).min(VIP_MAX_FEE)
    }
}

/// Resolves the fee policy for a tier at the moment a fee is due.
pub fn fee_strategy_for(tier: PatronTier) -> &'static dyn FeeStrategy {
    match tier {
        PatronTier::Vip => &VipFeeStrategy,
        PatronTier::Standard => &StandardFeeStrategy,
    }
}

#[cfg(test)]
mod tests {
    use crate::core::library::PatronTier;
    use crate::strategy::fee::{fee_strategy_for, FeeStrategy, StandardFeeStrategy, VipFeeStrategy};

    #[test]
    fn test_should_charge_standard_rate() {
        assert_eq!(30.0, StandardFeeStrategy.calculate_fee(3));
        assert_eq!(50.0, StandardFeeStrategy.calculate_fee(5));
        assert_eq!(200.0, StandardFeeStrategy.calculate_fee(20));
    }

    #[test]
    fn test_should_charge_capped_vip_rate() {
        assert_eq!(15.0, VipFeeStrategy.calculate_fee(3));
        assert_eq!(50.0, VipFeeStrategy.calculate_fee(10));
        assert_eq!(50.0, VipFeeStrategy.calculate_fee(20));
    }

    #[test]
    fn test_should_not_charge_when_not_late() {
        for days in [0, -1, -30] {
            assert_eq!(0.0, StandardFeeStrategy.calculate_fee(days));
            assert_eq!(0.0, VipFeeStrategy.calculate_fee(days));
        }
    }

    #[test]
    fn test_should_resolve_strategy_by_tier() {
        assert_eq!(30.0, fee_strategy_for(PatronTier::Standard).calculate_fee(3));
        assert_eq!(15.0, fee_strategy_for(PatronTier::Vip).calculate_fee(3));
    }
}
