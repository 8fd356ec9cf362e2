use core::ops::RangeInclusive;

/// Linear board position, `0..total_tiles`.
pub type TileIndex = u8;

/// Count type used for tile, treasure and trap counts.
pub type TileCount = u8;

/// Cosmetic number printed on the front of a tile.
pub type Label = u16;

/// Euro amount, used for treasure values and player scores.
pub type Amount = u32;

/// Position of a player in the roster.
pub type PlayerIndex = u8;

/// Grid shape `(columns, rows)` of the standard board.
pub const BOARD_SIZE: (TileCount, TileCount) = (6, 6);

pub const TOTAL_TILES: TileCount = BOARD_SIZE.0 * BOARD_SIZE.1;

pub const MAX_PLAYERS: PlayerIndex = 20;

pub const TREASURE_COUNT_RANGE: RangeInclusive<TileCount> = 15..=23;

pub const TRAP_COUNT_RANGE: RangeInclusive<TileCount> = 4..=8;

pub const TREASURE_VALUE_RANGE: RangeInclusive<Amount> = 1..=99;

pub const EASY_LABELS: RangeInclusive<Label> = 1..=99;

pub const HARD_LABELS: RangeInclusive<Label> = 100..=999;

/// Number of distinct values in `min..=max`, zero when the range is inverted.
pub const fn label_span(min: Label, max: Label) -> u32 {
    if min > max {
        0
    } else {
        (max - min) as u32 + 1
    }
}
