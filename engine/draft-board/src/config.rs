//! Configuration for a draft session

use crate::composition::PositionCaps;
use crate::error::{DraftError, Result};
use crate::tier::PriceTierConfig;
use crate::DEFAULT_ROUNDS;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use std::str::FromStr;

/// Default initial budget in tenths of a canonical unit
const DEFAULT_INITIAL_BUDGET_TENTHS: i64 = 50;

/// Draft session configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DraftConfig {
    /// Number of round slots (rounds are numbered 1..=rounds)
    pub rounds: u32,

    /// Budget available for the whole draft, in canonical units
    pub initial_budget: Decimal,

    /// Recommended maximum picks per position code (informational)
    pub position_caps: BTreeMap<String, u32>,

    /// Price tier bounds used to colour picks
    pub price_tiers: PriceTierConfig,
}

impl Default for DraftConfig {
    fn default() -> Self {
        Self {
            rounds: DEFAULT_ROUNDS,
            initial_budget: Decimal::new(DEFAULT_INITIAL_BUDGET_TENTHS, 1),
            position_caps: [("B", 2), ("A", 3), ("P", 3)]
                .into_iter()
                .map(|(code, cap)| (code.to_string(), cap))
                .collect(),
            price_tiers: PriceTierConfig::default(),
        }
    }
}

impl DraftConfig {
    /// Create config from environment variables, falling back to defaults
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(rounds) = std::env::var("DRAFT_ROUNDS") {
            config.rounds = rounds.trim().parse::<u32>().map_err(|_| DraftError::InvalidConfig {
                message: format!("Invalid DRAFT_ROUNDS: {rounds}"),
            })?;
        }

        if let Ok(budget) = std::env::var("DRAFT_INITIAL_BUDGET") {
            config.initial_budget = parse_decimal("DRAFT_INITIAL_BUDGET", &budget)?;
        }

        if let Ok(caps) = std::env::var("DRAFT_POSITION_CAPS") {
            config.position_caps = parse_caps(&caps)?;
        }

        if let Ok(low_max) = std::env::var("DRAFT_TIER_LOW_MAX") {
            config.price_tiers.low_max = parse_decimal("DRAFT_TIER_LOW_MAX", &low_max)?;
        }

        if let Ok(mid_max) = std::env::var("DRAFT_TIER_MID_MAX") {
            config.price_tiers.mid_max = parse_decimal("DRAFT_TIER_MID_MAX", &mid_max)?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Parse config from TOML; missing keys take their defaults
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(|e| DraftError::InvalidConfig {
            message: format!("Invalid config TOML: {e}"),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load config from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| DraftError::InvalidConfig {
            message: format!("Failed to read config file {path:?}: {e}"),
        })?;
        Self::from_toml_str(&content)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.rounds == 0 {
            return Err(DraftError::InvalidConfig {
                message: "Draft must have at least one round".to_string(),
            });
        }

        if self.initial_budget.is_sign_negative() && !self.initial_budget.is_zero() {
            return Err(DraftError::InvalidConfig {
                message: format!("Initial budget cannot be negative: {}", self.initial_budget),
            });
        }

        if self.price_tiers.low_max > self.price_tiers.mid_max {
            return Err(DraftError::InvalidConfig {
                message: format!(
                    "Low tier bound {} exceeds mid tier bound {}",
                    self.price_tiers.low_max, self.price_tiers.mid_max
                ),
            });
        }

        Ok(())
    }

    /// Position caps keyed by normalized position code
    pub fn caps(&self) -> PositionCaps {
        PositionCaps::from_pairs(self.position_caps.iter().map(|(code, cap)| (code.as_str(), *cap)))
    }
}

fn parse_decimal(var: &str, value: &str) -> Result<Decimal> {
    Decimal::from_str(value.trim())
        .map_err(|_| DraftError::InvalidConfig { message: format!("Invalid {var}: {value}") })
}

/// Parse `"B=2,A=3,P=3"` style cap lists
fn parse_caps(value: &str) -> Result<BTreeMap<String, u32>> {
    let mut caps = BTreeMap::new();
    for entry in value.split(',').map(str::trim).filter(|entry| !entry.is_empty()) {
        let invalid = || DraftError::InvalidConfig {
            message: format!("Invalid DRAFT_POSITION_CAPS entry: {entry}"),
        };

        let (code, cap) = entry.split_once('=').ok_or_else(invalid)?;
        let code = code.trim();
        if code.is_empty() {
            return Err(invalid());
        }
        let cap = cap.trim().parse::<u32>().map_err(|_| invalid())?;
        caps.insert(code.to_uppercase(), cap);
    }
    Ok(caps)
}
