//! # Draft Board
//!
//! Round-by-round draft assignments with live budget and position tracking.
//!
//! A [`DraftSession`] pairs a shared, read-only roster catalog with a
//! per-session [`DraftState`]. Every pick or clear is validated and applied
//! synchronously; [`summarize`] then derives spend, remaining budget and the
//! position breakdown from scratch.

pub mod budget;
pub mod composition;
pub mod config;
pub mod error;
pub mod session;
pub mod slot;
pub mod state;
pub mod summary;
pub mod tier;


pub use budget::BudgetSummary;
pub use composition::{PickedPlayer, PositionCaps, PositionComposition, PositionGroup};
pub use config::DraftConfig;
pub use error::{DraftError, Result};
pub use session::DraftSession;
pub use slot::{RoundId, RoundSlot};
pub use state::DraftState;
pub use summary::{summarize, DraftSummary, PickCard};
pub use tier::{PriceTier, PriceTierConfig};

/// Re-export commonly used catalog types
pub use roster_catalog::{Player, PositionCode, RosterCatalog};

/// Default number of draft rounds
pub const DEFAULT_ROUNDS: u32 = 8;
