//! Draft assignment store

use crate::error::{DraftError, Result};
use crate::slot::{RoundId, RoundSlot};
use roster_catalog::RosterCatalog;
use std::sync::Arc;
use tracing::debug;

/// Per-session mapping from round to picked player.
///
/// Every stored pick names a player present in the associated catalog;
/// assignments are validated before they are written. The same player may
/// sit in more than one round.
#[derive(Debug, Clone)]
pub struct DraftState {
    catalog: Arc<RosterCatalog>,

    /// Slots in round order
    slots: Vec<RoundSlot>,
}

impl DraftState {
    /// Create a draft with rounds `1..=rounds`, all empty
    pub fn new(catalog: Arc<RosterCatalog>, rounds: u32) -> Self {
        let slots = (1..=rounds).map(|round| RoundSlot::empty(RoundId(round))).collect();
        Self { catalog, slots }
    }

    /// Catalog picks are validated against
    pub fn catalog(&self) -> &RosterCatalog {
        &self.catalog
    }

    fn slot_mut(&mut self, round: RoundId) -> Result<&mut RoundSlot> {
        self.slots
            .iter_mut()
            .find(|slot| slot.round == round)
            .ok_or(DraftError::UnknownSlot { round })
    }

    /// Put a player in a round, replacing any previous pick.
    ///
    /// Returns the replaced pick, if any.
    pub fn assign(&mut self, round: RoundId, name: &str) -> Result<Option<String>> {
        let name = name.trim();
        if !self.has_round(round) {
            return Err(DraftError::UnknownSlot { round });
        }
        if !self.catalog.contains(name) {
            return Err(DraftError::UnknownPlayer { name: name.to_string() });
        }

        let slot = self.slot_mut(round)?;
        let previous = slot.pick.replace(name.to_string());
        debug!("Round {} assigned to '{}' (was {:?})", round, name, previous);
        Ok(previous)
    }

    /// Empty a round. Clearing an empty round is a no-op.
    pub fn clear(&mut self, round: RoundId) -> Result<Option<String>> {
        let slot = self.slot_mut(round)?;
        let previous = slot.pick.take();
        debug!("Round {} cleared (was {:?})", round, previous);
        Ok(previous)
    }

    /// Pick in a round, `None` when empty or not a configured round
    pub fn get(&self, round: RoundId) -> Option<&str> {
        self.slots.iter().find(|slot| slot.round == round).and_then(|slot| slot.pick.as_deref())
    }

    pub fn has_round(&self, round: RoundId) -> bool {
        self.slots.iter().any(|slot| slot.round == round)
    }

    /// All slots in round order
    pub fn assignments(&self) -> &[RoundSlot] {
        &self.slots
    }

    /// Filled rounds in round order
    pub fn occupied(&self) -> impl Iterator<Item = (RoundId, &str)> {
        self.slots.iter().filter_map(|slot| slot.pick.as_deref().map(|name| (slot.round, name)))
    }

    pub fn rounds(&self) -> impl Iterator<Item = RoundId> + '_ {
        self.slots.iter().map(|slot| slot.round)
    }

    pub fn filled_count(&self) -> usize {
        self.slots.iter().filter(|slot| !slot.is_empty()).count()
    }

    /// Empty every round
    pub fn reset(&mut self) {
        for slot in &mut self.slots {
            slot.pick = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster_catalog::RosterRow;

    fn create_test_catalog() -> Arc<RosterCatalog> {
        let rows = vec![
            RosterRow::new("Jugador A", 25_000.0, "B"),
            RosterRow::new("Jugador B", 18_000.0, "A"),
        ];
        Arc::new(RosterCatalog::load(rows).catalog)
    }

    #[test]
    fn test_new_state_is_empty() {
        let state = DraftState::new(create_test_catalog(), 8);

        assert_eq!(state.assignments().len(), 8);
        assert_eq!(state.filled_count(), 0);
        let rounds: Vec<u32> = state.rounds().map(RoundId::value).collect();
        assert_eq!(rounds, (1..=8).collect::<Vec<_>>());
    }

    #[test]
    fn test_assign_and_clear() {
        let mut state = DraftState::new(create_test_catalog(), 8);

        assert_eq!(state.assign(RoundId(1), "Jugador A").unwrap(), None);
        assert_eq!(state.get(RoundId(1)), Some("Jugador A"));

        assert_eq!(state.clear(RoundId(1)).unwrap(), Some("Jugador A".to_string()));
        assert_eq!(state.get(RoundId(1)), None);

        // Clearing twice matches clearing once
        assert_eq!(state.clear(RoundId(1)).unwrap(), None);
        assert_eq!(state.get(RoundId(1)), None);
    }

    #[test]
    fn test_reassign_overwrites() {
        let mut state = DraftState::new(create_test_catalog(), 8);

        state.assign(RoundId(3), "Jugador A").unwrap();
        let previous = state.assign(RoundId(3), "Jugador B").unwrap();

        assert_eq!(previous, Some("Jugador A".to_string()));
        assert_eq!(state.get(RoundId(3)), Some("Jugador B"));
        assert_eq!(state.filled_count(), 1);
    }

    #[test]
    fn test_unknown_player_leaves_slot_unchanged() {
        let mut state = DraftState::new(create_test_catalog(), 8);
        state.assign(RoundId(2), "Jugador B").unwrap();

        let err = state.assign(RoundId(2), "Nobody").unwrap_err();

        assert_eq!(err, DraftError::UnknownPlayer { name: "Nobody".to_string() });
        assert_eq!(state.get(RoundId(2)), Some("Jugador B"));
    }

    #[test]
    fn test_unknown_slot() {
        let mut state = DraftState::new(create_test_catalog(), 8);

        assert_eq!(
            state.assign(RoundId(9), "Jugador A").unwrap_err(),
            DraftError::UnknownSlot { round: RoundId(9) }
        );
        assert_eq!(
            state.assign(RoundId(0), "Nobody").unwrap_err(),
            DraftError::UnknownSlot { round: RoundId(0) }
        );
        assert_eq!(
            state.clear(RoundId(9)).unwrap_err(),
            DraftError::UnknownSlot { round: RoundId(9) }
        );
        assert_eq!(state.get(RoundId(9)), None);
        assert_eq!(state.filled_count(), 0);
    }

    #[test]
    fn test_same_player_in_two_rounds() {
        let mut state = DraftState::new(create_test_catalog(), 8);

        state.assign(RoundId(1), "Jugador A").unwrap();
        state.assign(RoundId(2), "Jugador A").unwrap();

        let occupied: Vec<(RoundId, &str)> = state.occupied().collect();
        assert_eq!(occupied, vec![(RoundId(1), "Jugador A"), (RoundId(2), "Jugador A")]);
    }

    #[test]
    fn test_reset() {
        let mut state = DraftState::new(create_test_catalog(), 4);
        state.assign(RoundId(1), "Jugador A").unwrap();
        state.assign(RoundId(4), "Jugador B").unwrap();

        state.reset();

        assert_eq!(state.filled_count(), 0);
        assert!(state.assignments().iter().all(RoundSlot::is_empty));
    }
}
