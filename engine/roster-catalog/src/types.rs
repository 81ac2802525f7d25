use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Position code used when a roster row carries no position at all
pub const UNKNOWN_POSITION: &str = "?";

/// A draftable player as loaded from the roster source
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Player name, unique within a catalog (e.g., "Jugador A")
    pub name: String,

    /// Price in canonical units (millions)
    pub price: Decimal,

    /// Position code (e.g., "B", "A", "P")
    pub position: PositionCode,
}

impl Player {
    /// Create a new player
    pub fn new(name: impl Into<String>, price: Decimal, position: PositionCode) -> Self {
        Self { name: name.into(), price, position }
    }
}

/// Position code tag for composition reporting.
///
/// Codes are stored trimmed and uppercased. Unrecognized codes are kept
/// as-is so that they still show up when grouping picks.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PositionCode(String);

impl PositionCode {
    /// Normalize a raw position cell
    pub fn parse(raw: &str) -> Self {
        let code = raw.trim().to_uppercase();
        if code.is_empty() {
            Self::unknown()
        } else {
            Self(code)
        }
    }

    /// Placeholder code for rows without a position
    pub fn unknown() -> Self {
        Self(UNKNOWN_POSITION.to_string())
    }

    pub fn is_unknown(&self) -> bool {
        self.0 == UNKNOWN_POSITION
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PositionCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PositionCode {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}

/// Price cell exactly as it came out of the roster source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawPrice {
    /// Spreadsheet numeric cell, pre-scaled in thousands
    Number(f64),

    /// Text cell in full currency units, possibly locale formatted
    Text(String),
}

impl From<f64> for RawPrice {
    fn from(value: f64) -> Self {
        RawPrice::Number(value)
    }
}

impl From<&str> for RawPrice {
    fn from(value: &str) -> Self {
        RawPrice::Text(value.to_string())
    }
}

impl fmt::Display for RawPrice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawPrice::Number(value) => write!(f, "{value}"),
            RawPrice::Text(text) => write!(f, "{text:?}"),
        }
    }
}

/// One unprocessed row of the roster source
#[derive(Debug, Clone, PartialEq)]
pub struct RosterRow {
    pub name: String,
    pub price: RawPrice,
    pub position: String,
}

impl RosterRow {
    pub fn new(name: impl Into<String>, price: impl Into<RawPrice>, position: impl Into<String>) -> Self {
        Self { name: name.into(), price: price.into(), position: position.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_code_normalization() {
        assert_eq!(PositionCode::parse("  b ").as_str(), "B");
        assert_eq!(PositionCode::parse("Ala").as_str(), "ALA");
        assert!(PositionCode::parse("   ").is_unknown());
    }

    #[test]
    fn test_raw_price_deserializes_number_or_text() {
        let number: RawPrice = serde_json::from_str("1180").unwrap();
        assert_eq!(number, RawPrice::Number(1180.0));

        let text: RawPrice = serde_json::from_str("\"1.180.000 €\"").unwrap();
        assert_eq!(text, RawPrice::Text("1.180.000 €".to_string()));
    }
}
