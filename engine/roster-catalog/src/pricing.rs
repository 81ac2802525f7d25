//! Price normalization for heterogeneous spreadsheet cells
//!
//! Spreadsheet exports mix numeric cells (already scaled to thousands) with
//! text cells holding full currency amounts in whatever locale the sheet was
//! typed in. Everything is brought down to canonical units (millions) with
//! two decimal places.

use crate::error::PriceParseError;
use crate::types::RawPrice;
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;
use tracing::warn;

/// Numeric cells are stored in thousands
pub const NUMERIC_DIVISOR: u32 = 1_000;

/// Text cells are stored in full currency units
pub const TEXT_DIVISOR: u32 = 1_000_000;

/// Decimal places kept in canonical prices; ties round away from zero
pub const PRICE_DECIMALS: u32 = 2;

/// Normalize a raw price, falling back to zero on failure.
///
/// Failures are logged and otherwise swallowed; callers that need to
/// surface them should use [`try_normalize`].
pub fn normalize(raw: &RawPrice) -> Decimal {
    match try_normalize(raw) {
        Ok(price) => price,
        Err(e) => {
            warn!("Could not parse price {}: {}, using 0", raw, e);
            Decimal::ZERO
        }
    }
}

/// Normalize a raw price into canonical units
pub fn try_normalize(raw: &RawPrice) -> Result<Decimal, PriceParseError> {
    match raw {
        RawPrice::Number(value) => normalize_number(*value),
        RawPrice::Text(text) => normalize_text(text),
    }
}

fn normalize_number(value: f64) -> Result<Decimal, PriceParseError> {
    if !value.is_finite() {
        return Err(PriceParseError::NonFinite);
    }

    let amount = Decimal::from_f64(value).ok_or(PriceParseError::NonFinite)?;
    if amount.is_sign_negative() && !amount.is_zero() {
        return Err(PriceParseError::Negative { input: value.to_string() });
    }

    Ok(scale(amount, NUMERIC_DIVISOR))
}

fn normalize_text(text: &str) -> Result<Decimal, PriceParseError> {
    // Drops currency symbols, unit suffixes and any kind of whitespace
    let cleaned: String =
        text.chars().filter(|c| c.is_ascii_digit() || matches!(c, '.' | ',' | '-')).collect();

    if cleaned.is_empty() {
        return Err(PriceParseError::Empty);
    }

    let canonical = resolve_separators(&cleaned);
    let amount = Decimal::from_str(&canonical)
        .map_err(|_| PriceParseError::Invalid { input: text.trim().to_string() })?;

    if amount.is_sign_negative() && !amount.is_zero() {
        return Err(PriceParseError::Negative { input: text.trim().to_string() });
    }

    Ok(scale(amount, TEXT_DIVISOR))
}

/// Rewrite locale separators so that `.` is the only decimal separator and
/// no thousands separators remain.
///
/// - both `.` and `,`: whichever appears last is the decimal separator
/// - only `,`: a single comma is decimal, repeated commas are thousands
/// - only `.`: a single dot is decimal, repeated dots are thousands
pub fn resolve_separators(cleaned: &str) -> String {
    match (cleaned.rfind('.'), cleaned.rfind(',')) {
        (Some(dot), Some(comma)) if comma > dot => cleaned.replace('.', "").replace(',', "."),
        (Some(_), Some(_)) => cleaned.replace(',', ""),
        (None, Some(_)) if cleaned.matches(',').count() > 1 => cleaned.replace(',', ""),
        (None, Some(_)) => cleaned.replace(',', "."),
        (Some(_), None) if cleaned.matches('.').count() > 1 => cleaned.replace('.', ""),
        _ => cleaned.to_string(),
    }
}

fn scale(amount: Decimal, divisor: u32) -> Decimal {
    (amount / Decimal::from(divisor))
        .round_dp_with_strategy(PRICE_DECIMALS, RoundingStrategy::MidpointAwayFromZero)
}
