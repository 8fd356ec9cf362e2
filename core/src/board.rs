use alloc::vec;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::*;

/// Hidden layout of a board: display labels plus what sits under every position.
///
/// Labels are cosmetic and carry no gameplay meaning, tile semantics are keyed by position only.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardLayout {
    labels: Vec<Label>,
    contents: Vec<TileContent>,
    treasure_count: TileCount,
    trap_count: TileCount,
}

impl BoardLayout {
    pub fn from_parts(
        labels: Vec<Label>,
        treasures: &[(TileIndex, Amount)],
        traps: &[TileIndex],
    ) -> Result<Self> {
        if labels.is_empty() {
            return Err(GameError::NoTiles);
        }
        let total_tiles: TileCount = labels
            .len()
            .try_into()
            .map_err(|_| GameError::InvalidTileIndex)?;

        let mut contents = vec![None; labels.len()];
        let treasure_entries = treasures
            .iter()
            .map(|&(index, value)| (index, TileContent::Treasure(value)));
        let trap_entries = traps.iter().map(|&index| (index, TileContent::Trap));

        for (index, content) in treasure_entries.chain(trap_entries) {
            if index >= total_tiles {
                return Err(GameError::InvalidTileIndex);
            }
            let slot = &mut contents[usize::from(index)];
            match (*slot, content) {
                (None, _) => *slot = Some(content),
                (Some(TileContent::Treasure(_)), TileContent::Trap) => {
                    return Err(GameError::OverlappingContent);
                }
                (Some(_), _) => return Err(GameError::DuplicateTileIndex),
            }
        }

        Ok(Self {
            labels,
            contents: contents
                .into_iter()
                .map(|content| content.unwrap_or_default())
                .collect(),
            treasure_count: treasures.len() as TileCount,
            trap_count: traps.len() as TileCount,
        })
    }

    pub fn validate_index(&self, index: TileIndex) -> Result<TileIndex> {
        if index < self.total_tiles() {
            Ok(index)
        } else {
            Err(GameError::InvalidTileIndex)
        }
    }

    pub fn total_tiles(&self) -> TileCount {
        self.contents.len() as TileCount
    }

    pub fn treasure_count(&self) -> TileCount {
        self.treasure_count
    }

    pub fn trap_count(&self) -> TileCount {
        self.trap_count
    }

    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    pub fn label_at(&self, index: TileIndex) -> Label {
        self.labels[usize::from(index)]
    }

    pub fn content_at(&self, index: TileIndex) -> TileContent {
        self.contents[usize::from(index)]
    }

    pub fn treasure_indices(&self) -> impl Iterator<Item = TileIndex> + '_ {
        self.indices_where(|content| matches!(content, TileContent::Treasure(_)))
    }

    pub fn trap_indices(&self) -> impl Iterator<Item = TileIndex> + '_ {
        self.indices_where(TileContent::is_trap)
    }

    pub fn total_treasure_value(&self) -> Amount {
        self.contents
            .iter()
            .filter_map(|content| content.treasure_value())
            .sum()
    }

    fn indices_where(&self, pred: fn(TileContent) -> bool) -> impl Iterator<Item = TileIndex> + '_ {
        self.contents
            .iter()
            .enumerate()
            .filter(move |&(_, &content)| pred(content))
            .map(|(index, _)| index as TileIndex)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(count: Label) -> Vec<Label> {
        (1..=count).collect()
    }

    #[test]
    fn from_parts_places_contents_by_position() {
        let layout = BoardLayout::from_parts(labels(4), &[(1, 42)], &[3]).unwrap();

        assert_eq!(layout.total_tiles(), 4);
        assert_eq!(layout.content_at(0), TileContent::Safe);
        assert_eq!(layout.content_at(1), TileContent::Treasure(42));
        assert_eq!(layout.content_at(3), TileContent::Trap);
        assert_eq!(layout.treasure_indices().collect::<Vec<_>>(), [1]);
        assert_eq!(layout.trap_indices().collect::<Vec<_>>(), [3]);
        assert_eq!(layout.total_treasure_value(), 42);
    }

    #[test]
    fn from_parts_rejects_inconsistent_layouts() {
        assert_eq!(
            BoardLayout::from_parts(labels(4), &[(4, 1)], &[]),
            Err(GameError::InvalidTileIndex)
        );
        assert_eq!(
            BoardLayout::from_parts(labels(4), &[(1, 1)], &[1]),
            Err(GameError::OverlappingContent)
        );
        assert_eq!(
            BoardLayout::from_parts(labels(4), &[], &[2, 2]),
            Err(GameError::DuplicateTileIndex)
        );
        assert_eq!(
            BoardLayout::from_parts(Vec::new(), &[], &[]),
            Err(GameError::NoTiles)
        );
    }
}
