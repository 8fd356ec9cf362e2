use serde::{Deserialize, Serialize};

use crate::Amount;

/// What lies under a tile.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TileContent {
    Safe,
    Treasure(Amount),
    Trap,
}

impl TileContent {
    pub const fn is_trap(self) -> bool {
        matches!(self, Self::Trap)
    }

    pub const fn treasure_value(self) -> Option<Amount> {
        match self {
            Self::Treasure(value) => Some(value),
            _ => None,
        }
    }
}

impl Default for TileContent {
    fn default() -> Self {
        Self::Safe
    }
}

/// Canonical player-visible state stored by the turn engine.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngineTile {
    Hidden,
    Revealed(TileContent),
}

impl EngineTile {
    pub const fn is_hidden(self) -> bool {
        matches!(self, Self::Hidden)
    }
}

impl Default for EngineTile {
    fn default() -> Self {
        Self::Hidden
    }
}
