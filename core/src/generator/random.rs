use alloc::vec::Vec;
use core::hash::Hash;
use core::ops::RangeInclusive;
use hashbrown::HashSet;
use rand::distr::uniform::SampleUniform;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::*;

/// Purely random generation strategy, every set is rejection sampled until it holds enough distinct values.
///
/// Any `rand` RNG can drive it, which lets tests pin the sequence with a seeded source.
#[derive(Clone, Debug)]
pub struct RandomBoardGenerator<R = SmallRng> {
    rng: R,
}

impl RandomBoardGenerator<SmallRng> {
    pub fn from_seed(seed: u64) -> Self {
        Self::new(SmallRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomBoardGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Config for a fresh game, with treasure and trap counts drawn from the same source as the board.
    pub fn random_config(&mut self, difficulty: Difficulty) -> GameConfig {
        GameConfig::random(&mut self.rng, difficulty)
    }
}

impl<R: Rng> BoardGenerator for RandomBoardGenerator<R> {
    fn generate(&mut self, config: &GameConfig) -> Result<BoardLayout> {
        // the samplers below only terminate for valid configs
        config.validate()?;

        let rng = &mut self.rng;
        let total_tiles = config.total_tiles;
        let positions = 0..=total_tiles - 1;

        let mut labels = sample_distinct(
            rng,
            total_tiles.into(),
            config.label_range(),
            &HashSet::new(),
        );
        labels.sort_unstable();

        let treasure_indices = sample_distinct(
            rng,
            config.treasure_count.into(),
            positions.clone(),
            &HashSet::new(),
        );
        let treasures: Vec<(TileIndex, Amount)> = treasure_indices
            .iter()
            .map(|&index| (index, rng.random_range(TREASURE_VALUE_RANGE)))
            .collect();

        let exclude: HashSet<TileIndex> = treasure_indices.iter().copied().collect();
        let trap_indices = sample_distinct(rng, config.trap_count.into(), positions, &exclude);

        let layout = BoardLayout::from_parts(labels, &treasures, &trap_indices)?;
        log::debug!(
            "Generated board: {} tiles, {} treasures worth {}, {} traps",
            layout.total_tiles(),
            layout.treasure_count(),
            layout.total_treasure_value(),
            layout.trap_count()
        );
        Ok(layout)
    }
}

/// Draws `count` distinct values uniformly from `range`, skipping anything in `exclude`.
///
/// Caller guarantees the range minus `exclude` holds at least `count` values.
fn sample_distinct<T, R>(
    rng: &mut R,
    count: usize,
    range: RangeInclusive<T>,
    exclude: &HashSet<T>,
) -> Vec<T>
where
    T: SampleUniform + PartialOrd + Copy + Eq + Hash,
    R: Rng + ?Sized,
{
    let mut seen = HashSet::with_capacity(count);
    let mut out = Vec::with_capacity(count);
    while out.len() < count {
        let value = rng.random_range(range.clone());
        if !exclude.contains(&value) && seen.insert(value) {
            out.push(value);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_well_formed(layout: &BoardLayout, config: &GameConfig) {
        let labels = layout.labels();
        assert_eq!(labels.len(), usize::from(config.total_tiles));
        assert!(labels.windows(2).all(|pair| pair[0] < pair[1]), "labels sorted and unique");
        assert!(labels.iter().all(|label| config.label_range().contains(label)));

        let treasures: Vec<_> = layout.treasure_indices().collect();
        let traps: Vec<_> = layout.trap_indices().collect();
        assert_eq!(treasures.len(), usize::from(config.treasure_count));
        assert_eq!(traps.len(), usize::from(config.trap_count));
        assert!(treasures.iter().all(|index| !traps.contains(index)));
        assert!(
            treasures
                .iter()
                .chain(&traps)
                .all(|&index| index < config.total_tiles)
        );
        for index in treasures {
            let value = layout.content_at(index).treasure_value().unwrap();
            assert!(TREASURE_VALUE_RANGE.contains(&value));
        }
    }

    #[test]
    fn random_boards_are_well_formed() {
        for seed in 0..300 {
            let mut generator = RandomBoardGenerator::from_seed(seed);
            let difficulty = if seed % 2 == 0 {
                Difficulty::Easy
            } else {
                Difficulty::Hard
            };
            let config = generator.random_config(difficulty);
            let layout = generator.generate(&config).unwrap();
            assert_well_formed(&layout, &config);
        }
    }

    #[test]
    fn same_seed_same_board() {
        let config = GameConfig::new(Difficulty::Hard, 20, 6);
        let a = RandomBoardGenerator::from_seed(42).generate(&config).unwrap();
        let b = RandomBoardGenerator::from_seed(42).generate(&config).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn saturated_board_still_terminates() {
        // every position is special and the label range has no slack
        let config = GameConfig::new(Difficulty::Easy, 6, 4)
            .with_total_tiles(10)
            .with_label_range(1, 10);

        let layout = RandomBoardGenerator::from_seed(3).generate(&config).unwrap();

        assert_well_formed(&layout, &config);
        assert_eq!(layout.labels(), (1..=10).collect::<Vec<Label>>().as_slice());
        assert!(
            (0..10).all(|index| layout.content_at(index) != TileContent::Safe),
            "no safe tiles left"
        );
    }

    #[test]
    fn impossible_configs_fail_fast() {
        let mut generator = RandomBoardGenerator::from_seed(0);

        let narrow_labels = GameConfig::new(Difficulty::Easy, 15, 4).with_label_range(1, 35);
        assert_eq!(
            generator.generate(&narrow_labels),
            Err(GameError::LabelRangeTooSmall)
        );

        let crowded = GameConfig::new(Difficulty::Easy, 15, 4).with_total_tiles(18);
        assert_eq!(
            generator.generate(&crowded),
            Err(GameError::TooManySpecialTiles)
        );
    }

    #[test]
    fn generator_accepts_any_rng() {
        let rng = SmallRng::seed_from_u64(99);
        let mut generator = RandomBoardGenerator::new(rng);
        let config = GameConfig::new(Difficulty::Easy, 23, 8);

        let layout = generator.generate(&config).unwrap();

        assert_well_formed(&layout, &config);
        assert_eq!(config.safe_count(), 5);
    }
}
