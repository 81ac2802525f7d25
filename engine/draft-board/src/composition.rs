//! Position breakdown of the current picks

use roster_catalog::PositionCode;
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::BTreeMap;

/// Recommended maximum picks per position code
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PositionCaps {
    caps: BTreeMap<PositionCode, u32>,
}

impl PositionCaps {
    pub fn from_pairs<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, u32)>,
    {
        let caps = pairs.into_iter().map(|(code, cap)| (PositionCode::parse(code), cap)).collect();
        Self { caps }
    }

    /// Cap for a position, `None` when the position is unlimited
    pub fn cap_for(&self, position: &PositionCode) -> Option<u32> {
        self.caps.get(position).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&PositionCode, u32)> {
        self.caps.iter().map(|(code, cap)| (code, *cap))
    }
}

/// A picked player as listed inside a position group
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PickedPlayer {
    pub name: String,
    pub price: Decimal,
}

/// Picks sharing one position code
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PositionGroup {
    pub position: PositionCode,
    pub count: usize,

    /// Picks in round order
    pub players: Vec<PickedPlayer>,

    /// Recommended maximum, `None` when unlimited
    pub cap: Option<u32>,
}

impl PositionGroup {
    fn empty(position: PositionCode, cap: Option<u32>) -> Self {
        Self { position, count: 0, players: Vec::new(), cap }
    }

    /// Whether the group holds more picks than recommended
    pub fn over_cap(&self) -> bool {
        self.cap.map_or(false, |cap| self.count > cap as usize)
    }

    pub fn total_price(&self) -> Decimal {
        self.players.iter().map(|player| player.price).sum()
    }
}

/// Picks grouped by position code.
///
/// Every capped position is always present, even with no picks. Positions
/// without a cap appear once they have at least one pick.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PositionComposition {
    groups: BTreeMap<PositionCode, PositionGroup>,
}

impl PositionComposition {
    /// Composition with zero picks for every capped position
    pub fn new(caps: &PositionCaps) -> Self {
        let groups = caps
            .iter()
            .map(|(code, cap)| (code.clone(), PositionGroup::empty(code.clone(), Some(cap))))
            .collect();
        Self { groups }
    }

    /// Record one pick
    pub fn record(&mut self, caps: &PositionCaps, position: &PositionCode, player: PickedPlayer) {
        let group = self
            .groups
            .entry(position.clone())
            .or_insert_with(|| PositionGroup::empty(position.clone(), caps.cap_for(position)));
        group.count += 1;
        group.players.push(player);
    }

    pub fn get(&self, position: &PositionCode) -> Option<&PositionGroup> {
        self.groups.get(position)
    }

    /// Number of picks at a position, 0 when absent
    pub fn count(&self, position: &PositionCode) -> usize {
        self.groups.get(position).map_or(0, |group| group.count)
    }

    /// Groups ordered by position code
    pub fn groups(&self) -> impl Iterator<Item = &PositionGroup> {
        self.groups.values()
    }

    pub fn over_cap(&self) -> impl Iterator<Item = &PositionGroup> {
        self.groups.values().filter(|group| group.over_cap())
    }

    pub fn total_picks(&self) -> usize {
        self.groups.values().map(|group| group.count).sum()
    }
}
