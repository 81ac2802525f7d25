//! Error types for the draft board

use crate::slot::RoundId;
use thiserror::Error;

/// Result type for draft board operations
pub type Result<T> = std::result::Result<T, DraftError>;

/// Errors reported synchronously by draft operations.
///
/// A failed operation never changes the draft state.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DraftError {
    #[error("Player not found in roster: {name}")]
    UnknownPlayer { name: String },

    #[error("Unknown draft round: {round}")]
    UnknownSlot { round: RoundId },

    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },
}
