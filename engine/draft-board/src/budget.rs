//! Budget tracking against the configured initial budget

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::Serialize;

/// Spend versus budget for the current picks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BudgetSummary {
    pub initial_budget: Decimal,

    /// Sum of prices of every picked player
    pub spend: Decimal,

    /// `initial_budget - spend`, negative when overspent
    pub remaining: Decimal,

    /// Set when remaining drops strictly below zero
    pub overspend: bool,

    /// Share of the budget used, capped at 1
    pub progress: Decimal,
}

impl BudgetSummary {
    pub fn new(initial_budget: Decimal, spend: Decimal) -> Self {
        let remaining = initial_budget - spend;
        Self {
            initial_budget,
            spend,
            remaining,
            overspend: remaining < Decimal::ZERO,
            progress: progress_fraction(spend, initial_budget),
        }
    }

    /// Progress as a float for progress bars
    pub fn progress_ratio(&self) -> f64 {
        self.progress.to_f64().unwrap_or(0.0)
    }
}

/// `min(spend / budget, 1)`, or 0 when there is no budget to divide by
pub fn progress_fraction(spend: Decimal, budget: Decimal) -> Decimal {
    if budget <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    spend.checked_div(budget).unwrap_or(Decimal::ONE).min(Decimal::ONE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_budget_within_limit() {
        let summary = BudgetSummary::new(Decimal::from(100), Decimal::from(43));

        assert_eq!(summary.spend, Decimal::from(43));
        assert_eq!(summary.remaining, Decimal::from(57));
        assert!(!summary.overspend);
        assert_eq!(summary.progress, Decimal::new(43, 2));
    }

    #[test]
    fn test_exactly_spent_is_not_overspend() {
        let summary = BudgetSummary::new(Decimal::from(5), Decimal::from(5));

        assert_eq!(summary.remaining, Decimal::ZERO);
        assert!(!summary.overspend);
        assert_eq!(summary.progress, Decimal::ONE);
    }

    #[test]
    fn test_overspend() {
        let summary = BudgetSummary::new(Decimal::from(5), Decimal::new(60, 1));

        assert_eq!(summary.remaining, Decimal::from(-1));
        assert!(summary.overspend);
        assert_eq!(summary.progress, Decimal::ONE);
        assert_eq!(summary.progress_ratio(), 1.0);
    }

    #[test]
    fn test_zero_budget_progress() {
        assert_eq!(progress_fraction(Decimal::from(3), Decimal::ZERO), Decimal::ZERO);

        let summary = BudgetSummary::new(Decimal::ZERO, Decimal::from(3));
        assert!(summary.overspend);
        assert_eq!(summary.progress, Decimal::ZERO);
    }

    #[test]
    fn test_tiny_budget_does_not_overflow_progress() {
        let tiny = Decimal::new(1, 28);
        let summary = BudgetSummary::new(tiny, Decimal::from(1_000_000));

        assert!(summary.overspend);
        assert_eq!(summary.progress, Decimal::ONE);
    }
}
