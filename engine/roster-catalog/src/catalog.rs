use crate::pricing;
use crate::types::{Player, PositionCode, RosterRow};
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;
use tracing::{debug, info, warn};

/// Roster Catalog - the read-only set of draftable players
///
/// Built once from roster rows and never mutated afterwards, so a single
/// catalog can be shared by every draft session.
#[derive(Debug, Clone, Default)]
pub struct RosterCatalog {
    /// Players in input order
    players: Vec<Player>,

    /// Map from player name to index into `players`
    index_by_name: HashMap<String, usize>,
}

/// Result of a catalog load: the catalog plus per-row recoveries
#[derive(Debug, Clone)]
pub struct CatalogLoad {
    pub catalog: RosterCatalog,
    pub notices: Vec<LoadNotice>,
}

/// A recovered per-row problem encountered while loading
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoadNotice {
    /// 1-based row number within the source data
    pub row: usize,

    /// Trimmed player name, empty when the name itself was missing
    pub name: String,

    pub kind: NoticeKind,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum NoticeKind {
    /// Price could not be parsed, stored as 0
    Price(String),

    /// Row had no name and was skipped
    MissingName,

    /// Row had no position and was filed under the unknown code
    MissingPosition,

    /// Row replaced an earlier row with the same name
    DuplicateName,
}

impl fmt::Display for LoadNotice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            NoticeKind::Price(reason) => {
                write!(f, "row {}: price for '{}' defaulted to 0 ({reason})", self.row, self.name)
            }
            NoticeKind::MissingName => write!(f, "row {}: missing player name, row skipped", self.row),
            NoticeKind::MissingPosition => {
                write!(f, "row {}: '{}' has no position", self.row, self.name)
            }
            NoticeKind::DuplicateName => {
                write!(f, "row {}: '{}' replaces an earlier row", self.row, self.name)
            }
        }
    }
}

impl RosterCatalog {
    /// Build a catalog from roster rows.
    ///
    /// Later rows overwrite earlier rows with the same name; the player keeps
    /// the position in the ordering where its name first appeared.
    pub fn load<I>(rows: I) -> CatalogLoad
    where
        I: IntoIterator<Item = RosterRow>,
    {
        let mut catalog = RosterCatalog::default();
        let mut notices = Vec::new();

        for (i, row) in rows.into_iter().enumerate() {
            let row_number = i + 1;
            let name = row.name.trim().to_string();

            if name.is_empty() {
                warn!("Skipping roster row {} without a player name", row_number);
                notices.push(LoadNotice { row: row_number, name, kind: NoticeKind::MissingName });
                continue;
            }

            let price = match pricing::try_normalize(&row.price) {
                Ok(price) => price,
                Err(e) => {
                    warn!("Price for '{}' on row {} defaulted to 0: {}", name, row_number, e);
                    notices.push(LoadNotice {
                        row: row_number,
                        name: name.clone(),
                        kind: NoticeKind::Price(e.to_string()),
                    });
                    Decimal::ZERO
                }
            };

            let position = PositionCode::parse(&row.position);
            if position.is_unknown() {
                notices.push(LoadNotice {
                    row: row_number,
                    name: name.clone(),
                    kind: NoticeKind::MissingPosition,
                });
            }

            let player = Player::new(name.clone(), price, position);
            match catalog.index_by_name.get(&name) {
                Some(&index) => {
                    debug!("Row {} replaces earlier entry for '{}'", row_number, name);
                    notices.push(LoadNotice { row: row_number, name, kind: NoticeKind::DuplicateName });
                    catalog.players[index] = player;
                }
                None => {
                    catalog.index_by_name.insert(name, catalog.players.len());
                    catalog.players.push(player);
                }
            }
        }

        info!(
            "Loaded roster catalog with {} players ({} notices)",
            catalog.players.len(),
            notices.len()
        );

        CatalogLoad { catalog, notices }
    }

    /// Build a catalog from already-normalized players
    pub fn from_players<I>(players: I) -> Self
    where
        I: IntoIterator<Item = Player>,
    {
        let mut catalog = RosterCatalog::default();
        for player in players {
            match catalog.index_by_name.get(&player.name) {
                Some(&index) => catalog.players[index] = player,
                None => {
                    catalog.index_by_name.insert(player.name.clone(), catalog.players.len());
                    catalog.players.push(player);
                }
            }
        }
        catalog
    }

    /// Get a player by name
    pub fn get(&self, name: &str) -> Option<&Player> {
        self.index_by_name.get(name).map(|&index| &self.players[index])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index_by_name.contains_key(name)
    }

    /// All players in input order
    pub fn all(&self) -> &[Player] {
        &self.players
    }

    /// Price of a player, 0 when the name is not in the catalog
    pub fn price_of(&self, name: &str) -> Decimal {
        self.get(name).map(|player| player.price).unwrap_or(Decimal::ZERO)
    }

    pub fn position_of(&self, name: &str) -> Option<&PositionCode> {
        self.get(name).map(|player| &player.position)
    }

    /// Player names in input order, for populating selection choices
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.players.iter().map(|player| player.name.as_str())
    }

    /// Search for players by case-insensitive partial name match
    pub fn search(&self, query: &str) -> Vec<&Player> {
        let query_lower = query.to_lowercase();
        self.players
            .iter()
            .filter(|player| player.name.to_lowercase().contains(&query_lower))
            .collect()
    }

    /// Players filed under a position code
    pub fn by_position(&self, position: &PositionCode) -> Vec<&Player> {
        self.players.iter().filter(|player| &player.position == position).collect()
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
}

impl CatalogLoad {
    /// Price notices only, for callers that surface parse failures
    pub fn price_failures(&self) -> impl Iterator<Item = &LoadNotice> {
        self.notices.iter().filter(|notice| matches!(notice.kind, NoticeKind::Price(_)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RawPrice;

    fn create_test_rows() -> Vec<RosterRow> {
        vec![
            RosterRow::new("  Jugador A ", 25_000.0, "b"),
            RosterRow::new("Jugador B", "18.000.000", " A "),
            RosterRow::new("Jugador C", "12,000,000", "P"),
        ]
    }

    #[test]
    fn test_catalog_creation() {
        let load = RosterCatalog::load(create_test_rows());

        assert_eq!(load.catalog.len(), 3);
        assert!(!load.catalog.is_empty());
        assert!(load.notices.is_empty());
    }

    #[test]
    fn test_rows_are_trimmed_and_normalized() {
        let catalog = RosterCatalog::load(create_test_rows()).catalog;

        let a = catalog.get("Jugador A").unwrap();
        assert_eq!(a.price, Decimal::from(25));
        assert_eq!(a.position.as_str(), "B");

        assert_eq!(catalog.price_of("Jugador B"), Decimal::from(18));
        assert_eq!(catalog.position_of("Jugador B").map(PositionCode::as_str), Some("A"));
        assert_eq!(catalog.price_of("Jugador C"), Decimal::from(12));
    }

    #[test]
    fn test_input_order_is_preserved() {
        let catalog = RosterCatalog::load(create_test_rows()).catalog;
        let names: Vec<&str> = catalog.names().collect();
        assert_eq!(names, vec!["Jugador A", "Jugador B", "Jugador C"]);
    }

    #[test]
    fn test_absent_player_lookups() {
        let catalog = RosterCatalog::load(create_test_rows()).catalog;

        assert!(catalog.get("Nobody").is_none());
        assert!(!catalog.contains("Nobody"));
        assert_eq!(catalog.price_of("Nobody"), Decimal::ZERO);
        assert!(catalog.position_of("Nobody").is_none());
    }

    #[test]
    fn test_duplicate_names_last_wins() {
        let rows = vec![
            RosterRow::new("Jugador A", 25_000.0, "B"),
            RosterRow::new("Jugador B", 18_000.0, "A"),
            RosterRow::new("Jugador A", 30_000.0, "P"),
        ];
        let load = RosterCatalog::load(rows);

        assert_eq!(load.catalog.len(), 2);
        assert_eq!(load.catalog.price_of("Jugador A"), Decimal::from(30));
        assert_eq!(load.catalog.position_of("Jugador A").map(PositionCode::as_str), Some("P"));
        assert_eq!(load.catalog.all()[0].name, "Jugador A");
        assert_eq!(
            load.notices,
            vec![LoadNotice {
                row: 3,
                name: "Jugador A".to_string(),
                kind: NoticeKind::DuplicateName
            }]
        );
    }

    #[test]
    fn test_bad_price_recovers_row() {
        let rows = vec![
            RosterRow::new("Jugador A", "??", "B"),
            RosterRow::new("Jugador B", 18_000.0, "A"),
        ];
        let load = RosterCatalog::load(rows);

        assert_eq!(load.catalog.len(), 2);
        assert_eq!(load.catalog.price_of("Jugador A"), Decimal::ZERO);
        assert_eq!(load.catalog.price_of("Jugador B"), Decimal::from(18));
        assert_eq!(load.price_failures().count(), 1);
    }

    #[test]
    fn test_missing_name_and_position() {
        let rows = vec![
            RosterRow::new("   ", 10_000.0, "B"),
            RosterRow::new("Jugador G", RawPrice::Number(10_000.0), ""),
        ];
        let load = RosterCatalog::load(rows);

        assert_eq!(load.catalog.len(), 1);
        assert!(load.catalog.position_of("Jugador G").unwrap().is_unknown());
        let kinds: Vec<&NoticeKind> = load.notices.iter().map(|n| &n.kind).collect();
        assert_eq!(kinds, vec![&NoticeKind::MissingName, &NoticeKind::MissingPosition]);
    }

    #[test]
    fn test_search_and_position_filter() {
        let catalog = RosterCatalog::load(create_test_rows()).catalog;

        let results = catalog.search("jugador b");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name, "Jugador B");

        assert_eq!(catalog.search("jugador").len(), 3);
        assert_eq!(catalog.by_position(&PositionCode::parse("p")).len(), 1);
    }
}
