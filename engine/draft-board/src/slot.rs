use serde::{Deserialize, Serialize};
use std::fmt;

/// Identity of a draft round slot (1-based)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoundId(pub u32);

impl RoundId {
    pub fn new(round: u32) -> Self {
        Self(round)
    }

    pub fn value(self) -> u32 {
        self.0
    }
}

impl From<u32> for RoundId {
    fn from(round: u32) -> Self {
        Self(round)
    }
}

impl fmt::Display for RoundId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One round of the draft and its optional pick
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoundSlot {
    pub round: RoundId,

    /// Name of the picked player, `None` when the round is still open
    pub pick: Option<String>,
}

impl RoundSlot {
    pub fn empty(round: RoundId) -> Self {
        Self { round, pick: None }
    }

    pub fn is_empty(&self) -> bool {
        self.pick.is_none()
    }
}
