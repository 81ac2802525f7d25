//! Price tiers used to colour picks on the board

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Coarse price bucket of a pick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PriceTier {
    Low,
    Mid,
    High,
}

/// Upper bounds (inclusive) of the low and mid tiers, in canonical units.
///
/// Defaults are sized for the default 5.0 budget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceTierConfig {
    pub low_max: Decimal,
    pub mid_max: Decimal,
}

impl Default for PriceTierConfig {
    fn default() -> Self {
        Self { low_max: Decimal::new(6, 1), mid_max: Decimal::ONE }
    }
}

impl PriceTierConfig {
    pub fn classify(&self, price: Decimal) -> PriceTier {
        if price <= self.low_max {
            PriceTier::Low
        } else if price <= self.mid_max {
            PriceTier::Mid
        } else {
            PriceTier::High
        }
    }
}
