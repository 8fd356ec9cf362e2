#![no_std]

extern crate alloc;

use core::fmt;
use core::ops::RangeInclusive;
use core::str::FromStr;
use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use board::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use player::*;
pub use tile::*;
pub use types::*;

mod board;
mod engine;
mod error;
mod generator;
mod player;
mod tile;
mod types;

/// Selects the range used for the cosmetic tile labels.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    #[default]
    Easy,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 2] = [Difficulty::Easy, Difficulty::Hard];

    pub const fn label_range(self) -> RangeInclusive<Label> {
        match self {
            Self::Easy => EASY_LABELS,
            Self::Hard => HARD_LABELS,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
#[error("Unknown difficulty, expected \"easy\" or \"hard\"")]
pub struct ParseDifficultyError;

impl FromStr for Difficulty {
    type Err = ParseDifficultyError;

    fn from_str(s: &str) -> core::result::Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|difficulty| s.eq_ignore_ascii_case(difficulty.as_str()))
            .ok_or(ParseDifficultyError)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub total_tiles: TileCount,
    pub treasure_count: TileCount,
    pub trap_count: TileCount,
    pub label_min: Label,
    pub label_max: Label,
}

impl GameConfig {
    pub const fn new(difficulty: Difficulty, treasure_count: TileCount, trap_count: TileCount) -> Self {
        let labels = difficulty.label_range();
        Self {
            total_tiles: TOTAL_TILES,
            treasure_count,
            trap_count,
            label_min: *labels.start(),
            label_max: *labels.end(),
        }
    }

    /// Draws the per-game treasure and trap counts the way a fresh game does.
    pub fn random<R: Rng + ?Sized>(rng: &mut R, difficulty: Difficulty) -> Self {
        let treasure_count = rng.random_range(TREASURE_COUNT_RANGE);
        let trap_count = rng.random_range(TRAP_COUNT_RANGE);
        Self::new(difficulty, treasure_count, trap_count)
    }

    pub const fn with_total_tiles(mut self, total_tiles: TileCount) -> Self {
        self.total_tiles = total_tiles;
        self
    }

    pub const fn with_label_range(mut self, label_min: Label, label_max: Label) -> Self {
        self.label_min = label_min;
        self.label_max = label_max;
        self
    }

    pub const fn label_range(&self) -> RangeInclusive<Label> {
        self.label_min..=self.label_max
    }

    pub const fn safe_count(&self) -> TileCount {
        self.total_tiles
            .saturating_sub(self.treasure_count)
            .saturating_sub(self.trap_count)
    }

    /// Rejects combinations the rejection samplers could never satisfy.
    pub fn validate(&self) -> Result<()> {
        if self.total_tiles == 0 {
            return Err(GameError::NoTiles);
        }
        if u16::from(self.treasure_count) + u16::from(self.trap_count) > u16::from(self.total_tiles) {
            return Err(GameError::TooManySpecialTiles);
        }
        if self.label_min > self.label_max {
            return Err(GameError::InvalidLabelRange);
        }
        if label_span(self.label_min, self.label_max) < u32::from(self.total_tiles) {
            return Err(GameError::LabelRangeTooSmall);
        }
        Ok(())
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    /// Click ignored: tile already revealed or the game is over.
    NoChange,
    /// The current player was flagged, their turn was consumed without a reveal.
    Skipped,
    Revealed(TileContent),
    HitTrap,
    Ended,
}

impl RevealOutcome {
    pub const fn has_update(self) -> bool {
        use RevealOutcome::*;
        match self {
            NoChange => false,
            Skipped => true,
            Revealed(_) => true,
            HitTrap => true,
            Ended => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn difficulty_parses_case_insensitively() {
        assert_eq!("easy".parse::<Difficulty>(), Ok(Difficulty::Easy));
        assert_eq!(" HARD ".parse::<Difficulty>(), Ok(Difficulty::Hard));
        assert_eq!("medium".parse::<Difficulty>(), Err(ParseDifficultyError));
    }

    #[test]
    fn difficulty_selects_label_range() {
        assert_eq!(GameConfig::new(Difficulty::Easy, 15, 4).label_range(), 1..=99);
        assert_eq!(GameConfig::new(Difficulty::Hard, 15, 4).label_range(), 100..=999);
    }

    #[test]
    fn random_config_stays_in_count_ranges() {
        use rand::SeedableRng;
        use rand::rngs::SmallRng;

        let mut rng = SmallRng::seed_from_u64(7);
        for _ in 0..200 {
            let config = GameConfig::random(&mut rng, Difficulty::Hard);
            assert!(TREASURE_COUNT_RANGE.contains(&config.treasure_count));
            assert!(TRAP_COUNT_RANGE.contains(&config.trap_count));
            assert_eq!(config.total_tiles, TOTAL_TILES);
            assert_eq!(config.validate(), Ok(()));
        }
    }

    #[test]
    fn validate_rejects_impossible_configs() {
        let base = GameConfig::new(Difficulty::Easy, 15, 4);

        assert_eq!(base.with_total_tiles(0).validate(), Err(GameError::NoTiles));
        assert_eq!(
            GameConfig::new(Difficulty::Easy, 30, 7).validate(),
            Err(GameError::TooManySpecialTiles)
        );
        assert_eq!(
            base.with_label_range(10, 44).validate(),
            Err(GameError::LabelRangeTooSmall)
        );
        assert_eq!(base.with_label_range(10, 45).validate(), Ok(()));
        assert_eq!(
            base.with_label_range(50, 10).validate(),
            Err(GameError::InvalidLabelRange)
        );
    }

    #[test]
    fn safe_count_is_what_remains() {
        assert_eq!(GameConfig::new(Difficulty::Easy, 20, 6).safe_count(), 10);
    }
}
