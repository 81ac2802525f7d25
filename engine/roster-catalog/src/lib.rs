//! Roster Catalog - loads draftable players from spreadsheet exports
//!
//! This crate turns tabular roster data (name, price, position) into an
//! immutable catalog with prices normalized to canonical units (millions).

pub mod catalog;
pub mod error;
pub mod pricing;
pub mod source;
pub mod types;

pub use catalog::{CatalogLoad, LoadNotice, NoticeKind, RosterCatalog};
pub use error::{CatalogError, PriceParseError, Result};
pub use source::load_from_path;
pub use types::{Player, PositionCode, RawPrice, RosterRow};
