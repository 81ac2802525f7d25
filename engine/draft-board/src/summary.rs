//! Budget and composition aggregation
//!
//! Everything here is derived fresh from the draft state on every call;
//! nothing is cached between mutations.

use crate::budget::BudgetSummary;
use crate::composition::{PickedPlayer, PositionCaps, PositionComposition};
use crate::config::DraftConfig;
use crate::slot::RoundId;
use crate::state::DraftState;
use crate::tier::{PriceTier, PriceTierConfig};
use roster_catalog::{PositionCode, RosterCatalog};
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::warn;

/// One filled round as shown on the board
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PickCard {
    pub round: RoundId,
    pub name: String,
    pub price: Decimal,
    pub position: PositionCode,
    pub tier: PriceTier,
}

/// Snapshot handed to the presentation layer after every interaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DraftSummary {
    pub budget: BudgetSummary,
    pub composition: PositionComposition,

    /// Filled rounds in round order
    pub picks: Vec<PickCard>,
}

/// Total price of every filled round.
///
/// A pick missing from the catalog counts as 0.
pub fn total_spend(state: &DraftState, catalog: &RosterCatalog) -> Decimal {
    state.occupied().map(|(_, name)| catalog.price_of(name)).sum()
}

pub fn budget_summary(
    state: &DraftState,
    catalog: &RosterCatalog,
    initial_budget: Decimal,
) -> BudgetSummary {
    BudgetSummary::new(initial_budget, total_spend(state, catalog))
}

/// Group picks by position; picks missing from the catalog land under the
/// unknown position code.
pub fn composition(
    state: &DraftState,
    catalog: &RosterCatalog,
    caps: &PositionCaps,
) -> PositionComposition {
    let mut composition = PositionComposition::new(caps);
    for (_, name) in state.occupied() {
        let (position, price) = lookup(catalog, name);
        composition.record(caps, &position, PickedPlayer { name: name.to_string(), price });
    }
    composition
}

fn pick_cards(
    state: &DraftState,
    catalog: &RosterCatalog,
    tiers: &PriceTierConfig,
) -> Vec<PickCard> {
    state
        .occupied()
        .map(|(round, name)| {
            let (position, price) = lookup(catalog, name);
            PickCard { round, name: name.to_string(), price, position, tier: tiers.classify(price) }
        })
        .collect()
}

fn lookup(catalog: &RosterCatalog, name: &str) -> (PositionCode, Decimal) {
    match catalog.get(name) {
        Some(player) => (player.position.clone(), player.price),
        None => {
            warn!("Pick '{}' is not in the roster catalog, counting it at 0", name);
            (PositionCode::unknown(), Decimal::ZERO)
        }
    }
}

/// Derive budget, composition and pick cards for the current state
pub fn summarize(state: &DraftState, catalog: &RosterCatalog, config: &DraftConfig) -> DraftSummary {
    DraftSummary {
        budget: budget_summary(state, catalog, config.initial_budget),
        composition: composition(state, catalog, &config.caps()),
        picks: pick_cards(state, catalog, &config.price_tiers),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster_catalog::{Player, RosterRow};
    use std::sync::Arc;

    fn catalog() -> Arc<RosterCatalog> {
        Arc::new(RosterCatalog::from_players([
            Player::new("A", Decimal::from(25), PositionCode::parse("B")),
            Player::new("B", Decimal::from(18), PositionCode::parse("A")),
        ]))
    }

    fn config(budget: i64) -> DraftConfig {
        DraftConfig {
            initial_budget: Decimal::from(budget),
            price_tiers: PriceTierConfig { low_max: Decimal::from(15), mid_max: Decimal::from(22) },
            ..Default::default()
        }
    }

    #[test]
    fn test_spend_sums_filled_rounds() {
        let catalog = catalog();
        let mut state = DraftState::new(catalog.clone(), 8);
        state.assign(RoundId(1), "A").unwrap();
        state.assign(RoundId(2), "B").unwrap();

        let summary = summarize(&state, &catalog, &config(100));

        assert_eq!(summary.budget.spend, Decimal::from(43));
        assert_eq!(summary.budget.remaining, Decimal::from(57));
        assert!(!summary.budget.overspend);
        assert_eq!(summary.picks.len(), 2);
        assert_eq!(summary.picks[0].tier, PriceTier::High);
        assert_eq!(summary.picks[1].tier, PriceTier::Mid);
    }

    #[test]
    fn test_summarize_against_a_different_catalog() {
        let mut state = DraftState::new(catalog(), 8);
        state.assign(RoundId(1), "A").unwrap();
        state.assign(RoundId(2), "B").unwrap();

        // A catalog without "A" must not break aggregation
        let other = RosterCatalog::load(vec![RosterRow::new("B", 18_000.0, "A")]).catalog;
        let summary = summarize(&state, &other, &config(100));

        assert_eq!(summary.budget.spend, Decimal::from(18));
        assert_eq!(summary.composition.count(&PositionCode::unknown()), 1);
        assert_eq!(summary.picks[0].price, Decimal::ZERO);
    }

    #[test]
    fn test_summaries_follow_mutations() {
        let catalog = catalog();
        let mut state = DraftState::new(catalog.clone(), 8);
        let config = config(100);

        state.assign(RoundId(1), "A").unwrap();
        assert_eq!(summarize(&state, &catalog, &config).budget.spend, Decimal::from(25));

        state.assign(RoundId(1), "B").unwrap();
        assert_eq!(summarize(&state, &catalog, &config).budget.spend, Decimal::from(18));

        state.clear(RoundId(1)).unwrap();
        assert_eq!(summarize(&state, &catalog, &config).budget.spend, Decimal::ZERO);
    }

    #[test]
    fn test_composition_counts_ignore_round_order() {
        let catalog = Arc::new(RosterCatalog::from_players([
            Player::new("B1", Decimal::from(1), PositionCode::parse("B")),
            Player::new("B2", Decimal::from(2), PositionCode::parse("B")),
            Player::new("P1", Decimal::from(3), PositionCode::parse("P")),
        ]));
        let caps = config(100).caps();
        let base = PositionCode::parse("B");

        let mut forward = DraftState::new(catalog.clone(), 8);
        forward.assign(RoundId(1), "B1").unwrap();
        forward.assign(RoundId(2), "B2").unwrap();
        forward.assign(RoundId(3), "P1").unwrap();

        let mut backward = DraftState::new(catalog.clone(), 8);
        backward.assign(RoundId(8), "B1").unwrap();
        backward.assign(RoundId(5), "P1").unwrap();
        backward.assign(RoundId(2), "B2").unwrap();

        assert_eq!(composition(&forward, &catalog, &caps).count(&base), 2);
        assert_eq!(composition(&backward, &catalog, &caps).count(&base), 2);
    }
}
